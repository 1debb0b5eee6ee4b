//! Schema-driven codec for fixed-width positional record formats.
//!
//! Text/byte layouts where every field occupies a declared byte range,
//! numbers are padded ASCII digits with an explicit sign policy, and array
//! fields are delimited by a fixed count, a sibling-field-derived count, or
//! a terminator literal. Common in legacy batch interchange and EDI-style
//! fixed-record files.
//!
//! A [`RecordSchema`] describes one record type: named fields in on-wire
//! order, each carrying a layout annotation (see [`annotation`]). The
//! [`RecordEncoder`] walks a [`Record`] in declaration order and emits the
//! positional bytes; the [`RecordDecoder`] is the structural mirror.
//!
//! ```
//! use fixrec::{CodecOptions, FieldSpec, Kind, Record, RecordDecoder, RecordEncoder,
//!              RecordSchema, Value};
//!
//! let schema = RecordSchema::new(
//!     "Person",
//!     vec![
//!         FieldSpec::new("Name", Kind::Str, "0:5,trim").unwrap(),
//!         FieldSpec::new("Age", Kind::Int, "5:3").unwrap(),
//!     ],
//! );
//!
//! let mut person = Record::zeroed(&schema);
//! person.set("Name", Value::Str("Al".to_string())).unwrap();
//! person.set("Age", Value::Int(7)).unwrap();
//!
//! let encoder = RecordEncoder::new(CodecOptions::default());
//! let bytes = encoder.encode_record(&person).unwrap();
//! assert_eq!(&bytes, b"   Al007");
//!
//! let decoder = RecordDecoder::new(CodecOptions::default());
//! let mut decoded = Record::zeroed(&schema);
//! decoder.decode_record(&bytes, &mut decoded).unwrap();
//! assert_eq!(decoded, person);
//! ```

pub mod annotation;
pub mod convert;
mod decoder;
mod encoder;
mod error;
mod options;
mod scalar;
mod schema;
mod value;

pub use annotation::{ArraySpec, FieldLayout};
pub use decoder::{DecodeTarget, RecordDecoder};
pub use encoder::RecordEncoder;
pub use error::CodecError;
pub use options::{CharEncoding, CodecOptions, Timezone};
pub use schema::{FieldSpec, Kind, RecordSchema};
pub use value::{Record, Value};
