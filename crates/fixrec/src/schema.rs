//! Record schema description.
//!
//! A [`RecordSchema`] is built once per record type and shared via `Arc`;
//! field declaration order defines the on-wire order for both walkers.

use std::sync::Arc;

use crate::annotation::FieldLayout;
use crate::error::CodecError;

/// Closed set of encodable field types.
#[derive(Debug, Clone, PartialEq)]
pub enum Kind {
    Str,
    Int,
    F32,
    F64,
    Record(Arc<RecordSchema>),
    Array(Box<Kind>),
}

/// One named field of a record type.
#[derive(Debug, Clone, PartialEq)]
pub struct FieldSpec {
    pub name: String,
    pub kind: Kind,
    pub layout: Option<FieldLayout>,
}

impl FieldSpec {
    /// Declares a field with a layout annotation. The annotation is parsed
    /// here, once, so traversals never re-derive it.
    pub fn new(name: &str, kind: Kind, annotation: &str) -> Result<FieldSpec, CodecError> {
        let layout = FieldLayout::parse(annotation).map_err(|e| e.in_field(name, annotation))?;
        if let Some(layout) = &layout {
            if layout.terminator && !matches!(kind, Kind::Str) {
                return Err(CodecError::TerminatorNotString.in_field(name, annotation));
            }
        }
        Ok(FieldSpec {
            name: name.to_string(),
            kind,
            layout,
        })
    }

    /// Declares an unannotated field. Skipped by the walkers unless the kind
    /// is a nested record, which is always traversed.
    pub fn plain(name: &str, kind: Kind) -> FieldSpec {
        FieldSpec {
            name: name.to_string(),
            kind,
            layout: None,
        }
    }

    pub(crate) fn annotation(&self) -> &str {
        self.layout.as_ref().map(|l| l.raw.as_str()).unwrap_or("")
    }
}

/// A named, ordered record type.
#[derive(Debug, PartialEq)]
pub struct RecordSchema {
    pub name: String,
    pub fields: Vec<FieldSpec>,
}

impl RecordSchema {
    pub fn new(name: &str, fields: Vec<FieldSpec>) -> Arc<RecordSchema> {
        Arc::new(RecordSchema {
            name: name.to_string(),
            fields,
        })
    }

    /// Looks a field up by name.
    pub fn field(&self, name: &str) -> Option<(usize, &FieldSpec)> {
        self.fields
            .iter()
            .enumerate()
            .find(|(_, f)| f.name == name)
    }
}
