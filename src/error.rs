use thiserror::Error as ThisError;

/// Why a decode failed. Kept as a typed enum (rather than only a message)
/// so callers can match on the exact malformed-input case.
#[derive(Debug, Clone, PartialEq, Eq, ThisError)]
pub enum DecodeError {
    #[error("unexpected end of input")]
    Underrun,

    #[error("reserved additional-info value {0} in header")]
    ReservedHeader(u8),

    #[error("tagged items are not supported")]
    UnsupportedTag,

    #[error("invalid UTF-8 in text string")]
    InvalidUtf8,

    #[error("indefinite-length chunk has major type {0}, expected {1}")]
    MismatchedChunkType(u8, u8),

    #[error("indefinite-length chunk is itself indefinite-length")]
    NestedIndefiniteChunk,

    #[error("unexpected break byte")]
    UnexpectedBreak,

    #[error("map has an odd number of items before its terminator")]
    OddMapLength,

    #[error("{0} bytes of unconsumed data after top-level item")]
    TrailingData(usize),

    #[error("nesting depth exceeds the implementation limit")]
    DepthExceeded,

    #[error("unsupported simple value {0}")]
    UnsupportedSimple(u8),
}

/// Errors a caller of this crate can observe.
#[derive(Debug, Clone, PartialEq, Eq, ThisError)]
pub enum Error {
    /// The caller passed a value of the wrong type: a non-byte-like
    /// argument to decode, or a value outside the encodable data model to
    /// encode (possibly nested inside an array or map).
    #[error("wrong type")]
    WrongType,

    /// The input bytes are not well-formed CBOR.
    #[error("malformed CBOR: {0}")]
    Format(#[from] DecodeError),

    /// A decoded or converted numeric value does not fit the requested
    /// native type.
    #[error("value out of range for target type")]
    OutOfRange,
}

pub type Result<T> = std::result::Result<T, Error>;
