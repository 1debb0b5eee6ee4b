//! Field annotation grammar.
//!
//! One declaration string per field, with comma-separated items:
//!
//! - `N:L` — absolute address `N` and byte length `L`; `:L` — length only.
//! - `array:terminator`, `array:<digits>`, `array:<FieldName>` — array
//!   sizing strategy.
//! - `precision:P` — fraction digits for float fields.
//! - `forcesign`, `padspace`, `trim`, `terminator` — formatting flags.
//!
//! The grammar is the wire contract between schema authors and the codec;
//! existing schemas depend on it verbatim.

use crate::error::CodecError;

/// How an array field's element count is resolved at traversal time.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ArraySpec {
    /// Exactly `n` on-wire slots.
    Fixed(usize),
    /// Count read from the named sibling field of the same record.
    SizedBy(String),
    /// Elements run until the terminator literal.
    Terminated,
}

/// Parsed layout rules for one field.
///
/// Derived once from the schema declaration and immutable thereafter; the
/// raw annotation text is retained for error context.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FieldLayout {
    pub raw: String,
    pub address: Option<usize>,
    pub length: Option<usize>,
    pub array: Option<ArraySpec>,
    pub precision: Option<usize>,
    pub force_sign: bool,
    pub pad_space: bool,
    pub trim: bool,
    pub terminator: bool,
}

impl FieldLayout {
    /// Parses a declaration string. An empty string is a legal "no layout".
    pub fn parse(raw: &str) -> Result<Option<FieldLayout>, CodecError> {
        let raw = raw.trim();
        if raw.is_empty() {
            return Ok(None);
        }
        let mut layout = FieldLayout {
            raw: raw.to_string(),
            ..FieldLayout::default()
        };
        for item in raw.split(',') {
            let item = item.trim();
            match item {
                "" => continue,
                "forcesign" => layout.force_sign = true,
                "padspace" => layout.pad_space = true,
                "trim" => layout.trim = true,
                "terminator" => layout.terminator = true,
                _ => match item.split_once(':') {
                    Some(("array", spec)) => layout.array = Some(parse_array_spec(item, spec)?),
                    Some(("precision", digits)) => {
                        let precision = digits
                            .parse()
                            .map_err(|_| CodecError::InvalidAddressAnnotation(item.to_string()))?;
                        layout.precision = Some(precision);
                    }
                    Some((address, length)) => {
                        if !address.is_empty() {
                            let address = address.parse().map_err(|_| {
                                CodecError::InvalidAddressAnnotation(item.to_string())
                            })?;
                            layout.address = Some(address);
                        }
                        let length = length
                            .parse()
                            .map_err(|_| CodecError::InvalidAddressAnnotation(item.to_string()))?;
                        layout.length = Some(length);
                    }
                    // Unknown bare words are tolerated, as legacy schemas rely on.
                    None => continue,
                },
            }
        }
        Ok(Some(layout))
    }
}

fn parse_array_spec(item: &str, spec: &str) -> Result<ArraySpec, CodecError> {
    if spec == "terminator" {
        return Ok(ArraySpec::Terminated);
    }
    if spec.is_empty() {
        return Err(CodecError::InvalidAddressAnnotation(item.to_string()));
    }
    if spec.bytes().all(|b| b.is_ascii_digit()) {
        let n = spec
            .parse()
            .map_err(|_| CodecError::InvalidAddressAnnotation(item.to_string()))?;
        return Ok(ArraySpec::Fixed(n));
    }
    Ok(ArraySpec::SizedBy(spec.to_string()))
}
