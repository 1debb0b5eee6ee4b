//! Codec configuration threaded through the entry points.

/// Character encoding of the positional text.
///
/// Accepted and stored but not yet interpreted by the walkers; reserved for
/// locale-aware scalar formatting.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CharEncoding {
    Ascii,
    Utf8,
}

/// Timezone for date-bearing fields.
///
/// Accepted and stored but not yet interpreted by the walkers.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Timezone {
    Utc,
    Local,
}

/// Global formatting options shared by encoder and decoder.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CodecOptions {
    /// Fill byte for gaps in front of absolutely addressed fields and for
    /// force-padded array slots.
    pub padding: u8,
    pub encoding: CharEncoding,
    pub timezone: Timezone,
    /// Literal marking the end of a terminated array, and the delimiter
    /// appended after every record of an encoded list.
    pub terminator: String,
}

impl Default for CodecOptions {
    fn default() -> Self {
        CodecOptions {
            padding: b' ',
            encoding: CharEncoding::Utf8,
            timezone: Timezone::Utc,
            terminator: "\r\n".to_string(),
        }
    }
}
