//! Encode walker.

use crate::annotation::{ArraySpec, FieldLayout};
use crate::error::CodecError;
use crate::options::CodecOptions;
use crate::scalar;
use crate::schema::Kind;
use crate::value::{Record, Value};

/// Fixed-width record encoder.
///
/// Visits a record's fields in declaration order and produces the positional
/// byte layout the schema annotations declare. Encoding is all-or-nothing:
/// the first field error discards all bytes produced so far.
#[derive(Debug, Clone, Default)]
pub struct RecordEncoder {
    opts: CodecOptions,
}

impl RecordEncoder {
    pub fn new(opts: CodecOptions) -> RecordEncoder {
        RecordEncoder { opts }
    }

    /// Encodes a single record or a homogeneous list of records. Any other
    /// value shape is a type error.
    ///
    /// For a list, every record is encoded independently and the terminator
    /// literal is appended after each one — the inter-record delimiter for
    /// streams, distinct from the intra-record array terminator.
    pub fn encode(&self, value: &Value) -> Result<Vec<u8>, CodecError> {
        match value {
            Value::Record(record) => self.encode_record(record),
            Value::Array(items) => {
                let mut out = Vec::new();
                for item in items {
                    let Value::Record(record) = item else {
                        return Err(CodecError::UnsupportedType(item.kind_name().to_string()));
                    };
                    self.write_record(record, 0, false, &mut out)?;
                    out.extend_from_slice(self.opts.terminator.as_bytes());
                }
                Ok(out)
            }
            other => Err(CodecError::UnsupportedType(other.kind_name().to_string())),
        }
    }

    pub fn encode_record(&self, record: &Record) -> Result<Vec<u8>, CodecError> {
        let mut out = Vec::new();
        self.write_record(record, 0, false, &mut out)?;
        Ok(out)
    }

    pub fn encode_list(&self, records: &[Record]) -> Result<Vec<u8>, CodecError> {
        let mut out = Vec::new();
        for record in records {
            self.write_record(record, 0, false, &mut out)?;
            out.extend_from_slice(self.opts.terminator.as_bytes());
        }
        Ok(out)
    }

    /// Recursive walker. `start` is the absolute offset of this record
    /// instance; annotated addresses are relative to it. Returns the cursor
    /// after the record's last emitted byte.
    fn write_record(
        &self,
        record: &Record,
        start: usize,
        force_pad: bool,
        out: &mut Vec<u8>,
    ) -> Result<usize, CodecError> {
        let mut cursor = start;
        for (index, spec) in record.schema().fields.iter().enumerate() {
            let wrap = |err: CodecError| err.in_field(&spec.name, spec.annotation());

            let Some(value) = record.values().get(index) else {
                return Err(wrap(CodecError::FieldAccess(spec.name.clone())));
            };
            if !value.matches(&spec.kind) {
                return Err(wrap(CodecError::FieldAccess(spec.name.clone())));
            }

            if let Some(layout) = &spec.layout {
                if let Some(address) = layout.address {
                    let target = start + address;
                    if cursor < target {
                        out.resize(out.len() + target - cursor, self.opts.padding);
                        cursor = target;
                    } else if cursor > target {
                        return Err(wrap(CodecError::InvalidOffset {
                            cursor,
                            address: target,
                        }));
                    }
                }
            }

            // Nested records are traversed whether annotated or not; they
            // contribute bytes only through their own annotated leaves.
            if let Value::Record(nested) = value {
                cursor = self
                    .write_record(nested, cursor, force_pad, out)
                    .map_err(wrap)?;
                continue;
            }

            let Some(layout) = &spec.layout else {
                continue;
            };

            if let (Kind::Array(elem), Value::Array(items)) = (&spec.kind, value) {
                cursor = self
                    .write_array(record, elem, items, layout, cursor, force_pad, out)
                    .map_err(wrap)?;
                continue;
            }

            if layout.length.is_none() {
                return Err(wrap(CodecError::MissingAddressAnnotation));
            }
            cursor = self
                .write_scalar(value, layout, force_pad, cursor, out)
                .map_err(wrap)?;
        }
        Ok(cursor)
    }

    #[allow(clippy::too_many_arguments)]
    fn write_array(
        &self,
        record: &Record,
        elem: &Kind,
        items: &[Value],
        layout: &FieldLayout,
        mut cursor: usize,
        force_pad: bool,
        out: &mut Vec<u8>,
    ) -> Result<usize, CodecError> {
        let Some(array) = &layout.array else {
            return Err(CodecError::MissingArrayAnnotation);
        };
        if !matches!(elem, Kind::Record(_)) && layout.length.is_none() {
            return Err(CodecError::MissingAddressAnnotation);
        }

        let count = match array {
            ArraySpec::Terminated => items.len(),
            ArraySpec::Fixed(n) => *n,
            ArraySpec::SizedBy(field) => resolve_dynamic_size(record, field)?,
        };

        let mut zero = None;
        for i in 0..count {
            let beyond = i >= items.len();
            let element: &Value = if beyond {
                zero.get_or_insert_with(|| Value::zeroed(elem))
            } else {
                &items[i]
            };
            match element {
                Value::Record(nested) => {
                    cursor = self.write_record(nested, cursor, force_pad || beyond, out)?;
                }
                scalar => {
                    cursor = self.write_scalar(scalar, layout, force_pad || beyond, cursor, out)?;
                }
            }
        }

        // Compat quirk: a fixed or dynamic count smaller than the live data
        // also gets the terminator appended, exactly like terminated arrays.
        if matches!(array, ArraySpec::Terminated) || items.len() > count {
            out.extend_from_slice(self.opts.terminator.as_bytes());
            cursor += self.opts.terminator.len();
        }
        Ok(cursor)
    }

    fn write_scalar(
        &self,
        value: &Value,
        layout: &FieldLayout,
        force_pad: bool,
        cursor: usize,
        out: &mut Vec<u8>,
    ) -> Result<usize, CodecError> {
        let length = layout.length.ok_or(CodecError::MissingAddressAnnotation)?;
        if force_pad {
            scalar::write_force_pad(out, length, self.opts.padding);
            return Ok(cursor + length);
        }
        match value {
            Value::Str(s) => scalar::encode_str(s, length, out)?,
            Value::Int(n) => scalar::encode_int(*n, length, layout, out)?,
            Value::F32(v) => scalar::encode_f32(*v, length, layout, out)?,
            Value::F64(v) => scalar::encode_f64(*v, length, layout, out)?,
            other => return Err(CodecError::UnsupportedType(other.kind_name().to_string())),
        }
        Ok(cursor + length)
    }
}

/// Reads the element count for a `SizedBy` array from its sibling field,
/// already assigned earlier in declaration order.
fn resolve_dynamic_size(record: &Record, field: &str) -> Result<usize, CodecError> {
    let fail = |reason: &str| CodecError::InvalidDynamicArraySize {
        record: record.schema().name.clone(),
        field: field.to_string(),
        reason: reason.to_string(),
    };
    match record.get(field) {
        Some(Value::Int(n)) if *n >= 0 => Ok(*n as usize),
        Some(Value::Int(_)) => Err(fail("size is negative")),
        Some(_) => Err(fail("field is not an integer")),
        None => Err(fail("no such field")),
    }
}
