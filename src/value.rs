//! The closed value model every encode/decode operation is defined over.

use crate::map::Map;

/// A negative integer whose magnitude may exceed what fits in `i64`.
///
/// RFC 7049 major type 1 encodes a negative integer as `-1 - n` for an
/// unsigned wire argument `n` up to `u64::MAX`, so the smallest
/// representable value is `-1 - u64::MAX`, well below `i64::MIN`. Values
/// that do fit a signed 64-bit integer are kept in `Small` so the common
/// case stays cheap to match against; the rest keep the raw wire argument.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NegInt {
    Small(i64),
    Wide(u64),
}

impl NegInt {
    /// The wire argument `n` such that this value equals `-1 - n`.
    pub fn wire_arg(self) -> u64 {
        match self {
            NegInt::Small(v) => (-1 - v as i128) as u64,
            NegInt::Wide(n) => n,
        }
    }

    pub fn from_wire_arg(n: u64) -> Self {
        let wide = -1i128 - n as i128;
        if wide >= i64::MIN as i128 {
            NegInt::Small(wide as i64)
        } else {
            NegInt::Wide(n)
        }
    }

    pub fn to_i64(self) -> Option<i64> {
        match self {
            NegInt::Small(v) => Some(v),
            NegInt::Wide(_) => None,
        }
    }
}

/// The CBOR value tree this crate encodes and decodes.
#[derive(Debug, Clone, PartialEq)]
pub enum Cbor {
    Null,
    Bool(bool),
    Uint(u64),
    NegInt(NegInt),
    Float(f64),
    Text(String),
    Bytes(Vec<u8>),
    Array(Vec<Cbor>),
    Map(Map),
}

impl Cbor {
    pub fn is_null(&self) -> bool {
        matches!(self, Cbor::Null)
    }

    /// Encodes this value to its minimal CBOR byte representation. Total:
    /// the value model is closed, so this never fails.
    pub fn to_bytes(&self) -> Vec<u8> {
        crate::encode::encode(self)
    }

    /// Decodes a complete, single CBOR item from `buf`.
    pub fn from_bytes(buf: &[u8]) -> crate::error::Result<Cbor> {
        crate::decode::decode(buf)
    }

    /// Builds an `Array` from any iterable of values convertible to `Cbor`.
    ///
    /// There is no blanket `From<Vec<T>>` impl: it would collide with the
    /// `Vec<u8>` -> `Bytes` conversion, since a byte vector is itself a
    /// `Vec<T: Into<Cbor>>`.
    pub fn array<T: Into<Cbor>, I: IntoIterator<Item = T>>(items: I) -> Cbor {
        Cbor::Array(items.into_iter().map(Into::into).collect())
    }

    /// Renders this value in CBOR diagnostic notation (see `cbor.me`).
    pub fn diagnostic(&self) -> String {
        crate::diag::diagnostic(self)
    }

    /// Hex-encodes this value's CBOR representation.
    pub fn hex(&self) -> String {
        hex::encode(self.to_bytes())
    }
}

impl std::fmt::Display for Cbor {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.diagnostic())
    }
}
