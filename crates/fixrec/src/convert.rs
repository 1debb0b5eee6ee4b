//! Record ↔ JSON conversion helpers.
//!
//! A debugging and fixture bridge: decoded records render as JSON objects
//! in schema order, and records can be built from JSON against a schema.

use std::sync::Arc;

use serde_json::{Map, Value as JsonValue};

use crate::error::CodecError;
use crate::schema::{Kind, RecordSchema};
use crate::value::{Record, Value};

/// Renders a record as a JSON object, fields in declaration order.
pub fn record_to_json(record: &Record) -> JsonValue {
    let mut map = Map::new();
    for (spec, value) in record.schema().fields.iter().zip(record.values()) {
        map.insert(spec.name.clone(), value_to_json(value));
    }
    JsonValue::Object(map)
}

fn value_to_json(value: &Value) -> JsonValue {
    match value {
        Value::Str(s) => JsonValue::String(s.clone()),
        Value::Int(n) => JsonValue::from(*n),
        Value::F32(v) => JsonValue::from(f64::from(*v)),
        Value::F64(v) => JsonValue::from(*v),
        Value::Record(record) => record_to_json(record),
        Value::Array(items) => JsonValue::Array(items.iter().map(value_to_json).collect()),
    }
}

/// Builds a record from a JSON object against the given schema. Fields
/// absent from the object keep their zero values; kind mismatches fail.
pub fn record_from_json(
    schema: &Arc<RecordSchema>,
    json: &JsonValue,
) -> Result<Record, CodecError> {
    let JsonValue::Object(map) = json else {
        return Err(CodecError::UnsupportedType("non-object JSON value".to_string()));
    };
    let mut record = Record::zeroed(schema);
    for spec in &schema.fields {
        let Some(json_value) = map.get(&spec.name) else {
            continue;
        };
        let value = value_from_json(&spec.name, &spec.kind, json_value)?;
        record.set(&spec.name, value)?;
    }
    Ok(record)
}

fn value_from_json(name: &str, kind: &Kind, json: &JsonValue) -> Result<Value, CodecError> {
    match (kind, json) {
        (Kind::Str, JsonValue::String(s)) => Ok(Value::Str(s.clone())),
        (Kind::Int, JsonValue::Number(n)) => n
            .as_i64()
            .map(Value::Int)
            .ok_or_else(|| CodecError::Parse { text: n.to_string() }),
        (Kind::F32, JsonValue::Number(n)) => n
            .as_f64()
            .map(|v| Value::F32(v as f32))
            .ok_or_else(|| CodecError::Parse { text: n.to_string() }),
        (Kind::F64, JsonValue::Number(n)) => n
            .as_f64()
            .map(Value::F64)
            .ok_or_else(|| CodecError::Parse { text: n.to_string() }),
        (Kind::Record(schema), obj @ JsonValue::Object(_)) => {
            record_from_json(schema, obj).map(Value::Record)
        }
        (Kind::Array(elem), JsonValue::Array(items)) => items
            .iter()
            .map(|item| value_from_json(name, elem, item))
            .collect::<Result<Vec<_>, _>>()
            .map(Value::Array),
        _ => Err(CodecError::FieldAccess(name.to_string())),
    }
}
