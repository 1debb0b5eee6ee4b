//! Scalar codec: per-primitive formatting and parsing.
//!
//! Every emitted scalar occupies exactly its declared length. Numbers lay
//! out as `[sign?][padding][digits]`; strings are right-justified with
//! space fill. Oversized values are a hard error, never truncated.

use crate::annotation::FieldLayout;
use crate::error::CodecError;

/// Emits `length` copies of the configured padding byte. Used for array
/// slots beyond the live data, bypassing all value formatting.
pub(crate) fn write_force_pad(out: &mut Vec<u8>, length: usize, padding: u8) {
    out.resize(out.len() + length, padding);
}

pub(crate) fn encode_str(value: &str, length: usize, out: &mut Vec<u8>) -> Result<(), CodecError> {
    let bytes = value.as_bytes();
    if bytes.len() > length {
        return Err(CodecError::InvalidValueLength {
            text: value.to_string(),
            width: bytes.len(),
        });
    }
    out.resize(out.len() + length - bytes.len(), b' ');
    out.extend_from_slice(bytes);
    Ok(())
}

pub(crate) fn encode_int(
    value: i64,
    length: usize,
    layout: &FieldLayout,
    out: &mut Vec<u8>,
) -> Result<(), CodecError> {
    if isize::try_from(value).is_err() {
        return Err(CodecError::IntOverflow);
    }
    let digits = value.unsigned_abs().to_string();
    write_signed_digits(&digits, value < 0, length, layout, out)
}

pub(crate) fn encode_f32(
    value: f32,
    length: usize,
    layout: &FieldLayout,
    out: &mut Vec<u8>,
) -> Result<(), CodecError> {
    let precision = layout.precision.ok_or(CodecError::MissingPrecision)?;
    let digits = format!("{:.*}", precision, value.abs());
    let whole = value.fract() == 0.0;
    write_float_digits(digits, whole, value < 0.0, length, layout, out)
}

pub(crate) fn encode_f64(
    value: f64,
    length: usize,
    layout: &FieldLayout,
    out: &mut Vec<u8>,
) -> Result<(), CodecError> {
    let precision = layout.precision.ok_or(CodecError::MissingPrecision)?;
    let digits = exponential_digits(value.abs(), precision);
    let whole = value.fract() == 0.0;
    write_float_digits(digits, whole, value < 0.0, length, layout, out)
}

/// Exponents carry an explicit sign and at least two digits (`1.235E+02`),
/// the layout existing consumers of 64-bit float fields parse.
fn exponential_digits(value: f64, precision: usize) -> String {
    let raw = format!("{:.*E}", precision, value);
    let Some((mantissa, exp)) = raw.split_once('E') else {
        return raw;
    };
    let (sign, digits) = match exp.strip_prefix('-') {
        Some(rest) => ('-', rest),
        None => ('+', exp),
    };
    format!("{mantissa}E{sign}{digits:0>2}")
}

fn write_float_digits(
    mut digits: String,
    whole: bool,
    negative: bool,
    length: usize,
    layout: &FieldLayout,
    out: &mut Vec<u8>,
) -> Result<(), CodecError> {
    // Whole values get a trailing decimal point to keep the layout
    // deterministic, provided the slot is wider than one byte.
    if whole && length > 1 {
        digits.push('.');
    }
    write_signed_digits(&digits, negative, length, layout, out)
}

fn write_signed_digits(
    digits: &str,
    negative: bool,
    length: usize,
    layout: &FieldLayout,
    out: &mut Vec<u8>,
) -> Result<(), CodecError> {
    let signed = negative || layout.force_sign;
    let width = digits.len() + usize::from(signed);
    if width > length {
        let mut text = String::with_capacity(width);
        if negative {
            text.push('-');
        } else if layout.force_sign {
            text.push('+');
        }
        text.push_str(digits);
        return Err(CodecError::InvalidValueLength { text, width });
    }
    if negative {
        out.push(b'-');
    } else if layout.force_sign {
        out.push(b'+');
    }
    let padding = if layout.pad_space { b' ' } else { b'0' };
    out.resize(out.len() + length - width, padding);
    out.extend_from_slice(digits.as_bytes());
    Ok(())
}

pub(crate) fn parse_int(text: &str) -> Result<i64, CodecError> {
    let trimmed = text.trim();
    trimmed.parse().map_err(|_| CodecError::Parse {
        text: trimmed.to_string(),
    })
}

pub(crate) fn parse_f32(text: &str) -> Result<f32, CodecError> {
    let trimmed = text.trim();
    trimmed.parse().map_err(|_| CodecError::Parse {
        text: trimmed.to_string(),
    })
}

pub(crate) fn parse_f64(text: &str) -> Result<f64, CodecError> {
    let trimmed = text.trim();
    trimmed.parse().map_err(|_| CodecError::Parse {
        text: trimmed.to_string(),
    })
}
