//! Codec error type and the decode control-flow signal.

use thiserror::Error;

/// Errors produced by schema construction, encoding, and decoding.
///
/// Field-level failures are wrapped in [`CodecError::Field`] as they unwind
/// through nested record traversals, so the final error names the full path
/// to the offending field together with its raw annotation text.
#[derive(Debug, Error)]
pub enum CodecError {
    #[error("invalid address annotation `{0}`")]
    InvalidAddressAnnotation(String),
    #[error("array field carries no array annotation")]
    MissingArrayAnnotation,
    #[error("field carries no address annotation")]
    MissingAddressAnnotation,
    #[error("float field carries no precision annotation")]
    MissingPrecision,
    #[error("terminator fields must be string")]
    TerminatorNotString,
    #[error("field `{0}` is not accessible in the record value")]
    FieldAccess(String),
    #[error("cursor at byte {cursor} is already past the annotated address {address}")]
    InvalidOffset { cursor: usize, address: usize },
    #[error("value `{text}` is {width} bytes wide and exceeds the declared length")]
    InvalidValueLength { text: String, width: usize },
    #[error("integer does not fit the native signed width")]
    IntOverflow,
    #[error("cannot resolve dynamic array size from `{record}.{field}`: {reason}")]
    InvalidDynamicArraySize {
        record: String,
        field: String,
        reason: String,
    },
    #[error("reading out of bounds position {end} in input data of {len} bytes")]
    OutOfBounds { end: usize, len: usize },
    #[error("cannot parse `{text}` as a number")]
    Parse { text: String },
    #[error("unsupported type for `{0}`")]
    UnsupportedType(String),
    #[error("field `{name}` `{annotation}`: {source}")]
    Field {
        name: String,
        annotation: String,
        #[source]
        source: Box<CodecError>,
    },
}

impl CodecError {
    /// Wraps the error with the offending field's name and raw annotation.
    pub(crate) fn in_field(self, name: &str, annotation: &str) -> CodecError {
        CodecError::Field {
            name: name.to_string(),
            annotation: annotation.to_string(),
            source: Box::new(self),
        }
    }
}

/// Outcome of one decode traversal.
///
/// `Stop` reports that a terminator-flagged field matched the configured
/// terminator literal; the enclosing array or list loop stops after keeping
/// the element that contained the match. It is a success signal, not an
/// error, and therefore travels next to the cursor instead of in the `Err`
/// arm.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Flow {
    Continue,
    Stop,
}
