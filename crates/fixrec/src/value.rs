//! Record values.

use std::sync::Arc;

use crate::error::CodecError;
use crate::schema::{Kind, RecordSchema};

/// A single encodable value, matching one [`Kind`].
#[derive(Debug, Clone, PartialEq)]
pub enum Value {
    Str(String),
    Int(i64),
    F32(f32),
    F64(f64),
    Record(Record),
    Array(Vec<Value>),
}

impl Value {
    /// The zero value for a kind; used for fresh decode targets and for
    /// array slots beyond the live data.
    pub fn zeroed(kind: &Kind) -> Value {
        match kind {
            Kind::Str => Value::Str(String::new()),
            Kind::Int => Value::Int(0),
            Kind::F32 => Value::F32(0.0),
            Kind::F64 => Value::F64(0.0),
            Kind::Record(schema) => Value::Record(Record::zeroed(schema)),
            Kind::Array(_) => Value::Array(Vec::new()),
        }
    }

    /// Whether this value inhabits the given kind.
    pub fn matches(&self, kind: &Kind) -> bool {
        match (self, kind) {
            (Value::Str(_), Kind::Str) => true,
            (Value::Int(_), Kind::Int) => true,
            (Value::F32(_), Kind::F32) => true,
            (Value::F64(_), Kind::F64) => true,
            (Value::Record(record), Kind::Record(schema)) => record.schema().name == schema.name,
            (Value::Array(items), Kind::Array(elem)) => items.iter().all(|v| v.matches(elem)),
            _ => false,
        }
    }

    pub fn kind_name(&self) -> &'static str {
        match self {
            Value::Str(_) => "string",
            Value::Int(_) => "integer",
            Value::F32(_) => "float32",
            Value::F64(_) => "float64",
            Value::Record(_) => "record",
            Value::Array(_) => "array",
        }
    }
}

/// A record instance: a schema plus one value per schema field.
///
/// Construction goes through [`Record::zeroed`] followed by [`Record::set`],
/// which keeps the values vector parallel to the schema and kind-consistent.
#[derive(Debug, Clone, PartialEq)]
pub struct Record {
    schema: Arc<RecordSchema>,
    values: Vec<Value>,
}

impl Record {
    /// A fresh instance with every field at its zero value.
    pub fn zeroed(schema: &Arc<RecordSchema>) -> Record {
        Record {
            schema: schema.clone(),
            values: schema.fields.iter().map(|f| Value::zeroed(&f.kind)).collect(),
        }
    }

    pub fn schema(&self) -> &Arc<RecordSchema> {
        &self.schema
    }

    pub fn values(&self) -> &[Value] {
        &self.values
    }

    pub fn get(&self, name: &str) -> Option<&Value> {
        let (index, _) = self.schema.field(name)?;
        self.values.get(index)
    }

    /// Assigns a field by name; the value must inhabit the declared kind.
    pub fn set(&mut self, name: &str, value: Value) -> Result<(), CodecError> {
        let Some((index, spec)) = self.schema.field(name) else {
            return Err(CodecError::FieldAccess(name.to_string()));
        };
        if !value.matches(&spec.kind) {
            return Err(CodecError::FieldAccess(name.to_string()));
        }
        self.values[index] = value;
        Ok(())
    }

    pub(crate) fn slot_mut(&mut self, index: usize) -> &mut Value {
        &mut self.values[index]
    }
}
