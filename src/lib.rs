//! A CBOR (RFC 7049) codec.
//!
//! Encode an in-memory [`Cbor`] value tree to its minimal binary form with
//! [`Cbor::to_bytes`], and decode it back with [`Cbor::from_bytes`]. For
//! callers holding dynamically-typed (`dyn Any`) values rather than a
//! `Cbor` built through the native-type conversions in [`convert`], see
//! [`boundary::dumpb`]/[`boundary::loadb`].

mod boundary;
mod convert;
mod decode;
mod diag;
mod encode;
mod error;
mod float;
mod map;
mod test_util;
mod value;
mod varint;

pub use boundary::{dumpb, loadb};
pub use error::{DecodeError, Error, Result};
pub use map::Map;
pub use test_util::close_eq;
pub use value::{Cbor, NegInt};

pub mod prelude {
    pub use crate::{dumpb, loadb, Cbor, DecodeError, Error, Map, NegInt, Result};
}
