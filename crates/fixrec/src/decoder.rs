//! Decode walker.

use std::sync::Arc;

use crate::error::{CodecError, Flow};
use crate::options::CodecOptions;
use crate::scalar;
use crate::schema::{Kind, RecordSchema};
use crate::value::{Record, Value};

/// Where decoded records land.
pub enum DecodeTarget<'a> {
    /// A single record instance.
    Record(&'a mut Record),
    /// A growable list; one fresh record per iteration until the input is
    /// exhausted or an iteration makes no progress.
    List {
        schema: Arc<RecordSchema>,
        out: &'a mut Vec<Record>,
    },
}

/// Fixed-width record decoder, the structural mirror of the encode walker.
///
/// Decoding is partial-accumulating at the list level: records decoded
/// before a fatal error remain in the output vector.
#[derive(Debug, Clone, Default)]
pub struct RecordDecoder {
    opts: CodecOptions,
}

impl RecordDecoder {
    pub fn new(opts: CodecOptions) -> RecordDecoder {
        RecordDecoder { opts }
    }

    pub fn decode(&self, input: &[u8], target: DecodeTarget<'_>) -> Result<(), CodecError> {
        match target {
            DecodeTarget::Record(record) => self.decode_record(input, record),
            DecodeTarget::List { schema, out } => self.decode_list(input, &schema, out),
        }
    }

    pub fn decode_record(&self, input: &[u8], record: &mut Record) -> Result<(), CodecError> {
        self.read_record(input, 0, record).map(|_| ())
    }

    pub fn decode_list(
        &self,
        input: &[u8],
        schema: &Arc<RecordSchema>,
        out: &mut Vec<Record>,
    ) -> Result<(), CodecError> {
        let mut cursor = 0;
        while cursor < input.len() {
            let mut record = Record::zeroed(schema);
            let (next, _) = self.read_record(input, cursor, &mut record)?;
            if next == cursor {
                break;
            }
            cursor = next;
            out.push(record);
        }
        Ok(())
    }

    /// Recursive walker. `start` is the absolute offset of this record
    /// instance; annotated addresses reposition the cursor relative to it.
    fn read_record(
        &self,
        input: &[u8],
        start: usize,
        record: &mut Record,
    ) -> Result<(usize, Flow), CodecError> {
        let mut cursor = start;
        let schema = record.schema().clone();
        for (index, spec) in schema.fields.iter().enumerate() {
            let wrap = |err: CodecError| err.in_field(&spec.name, spec.annotation());

            if let Some(layout) = &spec.layout {
                if let Some(address) = layout.address {
                    cursor = start + address;
                }
                if let Some(length) = layout.length {
                    if cursor + length > input.len() {
                        return Err(wrap(CodecError::OutOfBounds {
                            end: cursor + length,
                            len: input.len(),
                        }));
                    }
                }
            }

            match &spec.kind {
                Kind::Record(_) => {
                    let Value::Record(nested) = record.slot_mut(index) else {
                        return Err(wrap(CodecError::FieldAccess(spec.name.clone())));
                    };
                    let (next, flow) = self.read_record(input, cursor, nested).map_err(wrap)?;
                    cursor = next;
                    if flow == Flow::Stop {
                        return Ok((cursor, Flow::Stop));
                    }
                }
                Kind::Array(elem) => {
                    if spec.layout.is_none() {
                        continue;
                    }
                    let Kind::Record(elem_schema) = &**elem else {
                        return Err(wrap(CodecError::UnsupportedType(spec.name.clone())));
                    };
                    let elem_schema = elem_schema.clone();
                    let Value::Array(items) = record.slot_mut(index) else {
                        return Err(wrap(CodecError::FieldAccess(spec.name.clone())));
                    };
                    items.clear();
                    loop {
                        if cursor >= input.len() {
                            break;
                        }
                        let mut element = Record::zeroed(&elem_schema);
                        let (next, flow) =
                            self.read_record(input, cursor, &mut element).map_err(wrap)?;
                        if next == cursor {
                            break;
                        }
                        cursor = next;
                        items.push(Value::Record(element));
                        if flow == Flow::Stop {
                            break;
                        }
                    }
                }
                Kind::Str => {
                    let Some(layout) = &spec.layout else { continue };
                    let length = layout
                        .length
                        .ok_or(CodecError::MissingAddressAnnotation)
                        .map_err(wrap)?;
                    let text = String::from_utf8_lossy(&input[cursor..cursor + length]);
                    if layout.terminator {
                        if text == self.opts.terminator {
                            *record.slot_mut(index) = Value::Str(text.into_owned());
                            cursor += length;
                            return Ok((cursor, Flow::Stop));
                        }
                        // Probe miss: field stays unset, cursor stays put.
                        continue;
                    }
                    let text = if layout.trim {
                        text.trim().to_string()
                    } else {
                        text.into_owned()
                    };
                    cursor += length;
                    *record.slot_mut(index) = Value::Str(text);
                }
                Kind::Int => {
                    let Some(layout) = &spec.layout else { continue };
                    let length = layout
                        .length
                        .ok_or(CodecError::MissingAddressAnnotation)
                        .map_err(wrap)?;
                    let text = String::from_utf8_lossy(&input[cursor..cursor + length]);
                    cursor += length;
                    let value = scalar::parse_int(&text).map_err(wrap)?;
                    *record.slot_mut(index) = Value::Int(value);
                }
                Kind::F32 => {
                    let Some(layout) = &spec.layout else { continue };
                    let length = layout
                        .length
                        .ok_or(CodecError::MissingAddressAnnotation)
                        .map_err(wrap)?;
                    let text = String::from_utf8_lossy(&input[cursor..cursor + length]);
                    cursor += length;
                    let value = scalar::parse_f32(&text).map_err(wrap)?;
                    *record.slot_mut(index) = Value::F32(value);
                }
                Kind::F64 => {
                    let Some(layout) = &spec.layout else { continue };
                    let length = layout
                        .length
                        .ok_or(CodecError::MissingAddressAnnotation)
                        .map_err(wrap)?;
                    let text = String::from_utf8_lossy(&input[cursor..cursor + length]);
                    cursor += length;
                    let value = scalar::parse_f64(&text).map_err(wrap)?;
                    // Parsed at 64-bit, stored through 32-bit precision for
                    // wire compatibility with existing consumers.
                    *record.slot_mut(index) = Value::F64(f64::from(value as f32));
                }
            }
        }
        Ok((cursor, Flow::Continue))
    }
}
