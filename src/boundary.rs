//! The sole site of dynamic-to-static conversion.
//!
//! Everywhere else in this crate, callers who already know the Rust type
//! on their side of the boundary should build a `Cbor` directly with the
//! conversions in `convert.rs`. `dumpb`/`loadb` exist for the genuinely
//! dynamically-typed case: a caller holding a `dyn Any` tree (as a binding
//! for a dynamically-typed host language would) that needs the same
//! wrong-type/format-error classification such a host's runtime gives it.

use crate::error::{Error, Result};
use crate::value::Cbor;
use std::any::Any;

/// Decodes `buf` into a `Cbor`. `buf` must be a byte-like value (`&[u8]` or
/// `Vec<u8>`); anything else is a wrong-type error, not a format error.
pub fn loadb(buf: &dyn Any) -> Result<Cbor> {
    let bytes = buf
        .downcast_ref::<Vec<u8>>()
        .map(|v| v.as_slice())
        .or_else(|| buf.downcast_ref::<&[u8]>().copied())
        .ok_or(Error::WrongType)?;
    Cbor::from_bytes(bytes)
}

/// Encodes a dynamically-typed value tree into CBOR bytes.
///
/// `value` must downcast, at every node including inside arrays and maps,
/// to one of the types the data model supports (§3): `()` for null, `bool`,
/// `u64`/`i64`, `f64`, `String`/`&str`, `Vec<u8>`/`&[u8]`, `Vec<Box<dyn
/// Any>>`, or `Vec<(Box<dyn Any>, Box<dyn Any>)>` for a map. Anything else,
/// at any depth, is a wrong-type error.
pub fn dumpb(value: &dyn Any) -> Result<Vec<u8>> {
    Ok(classify(value)?.to_bytes())
}

fn classify(value: &dyn Any) -> Result<Cbor> {
    if value.downcast_ref::<()>().is_some() {
        return Ok(Cbor::Null);
    }
    if let Some(b) = value.downcast_ref::<bool>() {
        return Ok(Cbor::Bool(*b));
    }
    if let Some(n) = value.downcast_ref::<u64>() {
        return Ok(Cbor::Uint(*n));
    }
    if let Some(n) = value.downcast_ref::<i64>() {
        return Ok(Cbor::from(*n));
    }
    if let Some(f) = value.downcast_ref::<f64>() {
        return Ok(Cbor::Float(*f));
    }
    if let Some(s) = value.downcast_ref::<String>() {
        return Ok(Cbor::Text(s.clone()));
    }
    if let Some(s) = value.downcast_ref::<&str>() {
        return Ok(Cbor::Text((*s).to_string()));
    }
    if let Some(b) = value.downcast_ref::<Vec<u8>>() {
        return Ok(Cbor::Bytes(b.clone()));
    }
    if let Some(items) = value.downcast_ref::<Vec<Box<dyn Any>>>() {
        let decoded = items
            .iter()
            .map(|item| classify(item.as_ref()))
            .collect::<Result<Vec<_>>>()?;
        return Ok(Cbor::Array(decoded));
    }
    if let Some(pairs) = value.downcast_ref::<Vec<(Box<dyn Any>, Box<dyn Any>)>>() {
        let decoded = pairs
            .iter()
            .map(|(k, v)| Ok((classify(k.as_ref())?, classify(v.as_ref())?)))
            .collect::<Result<Vec<_>>>()?;
        return Ok(Cbor::Map(decoded.into_iter().collect()));
    }
    Err(Error::WrongType)
}

#[cfg(test)]
mod tests {
    use super::*;

    struct Opaque;

    #[test]
    fn loadb_rejects_non_bytes() {
        let n: i64 = 1;
        assert!(matches!(loadb(&n as &dyn Any), Err(Error::WrongType)));
    }

    #[test]
    fn loadb_rejects_truncated_input() {
        let buf: Vec<u8> = b"foo".to_vec();
        assert!(matches!(loadb(&buf as &dyn Any), Err(Error::Format(_))));
    }

    #[test]
    fn loadb_accepts_vec_and_slice() {
        let owned: Vec<u8> = vec![0x01];
        assert_eq!(loadb(&owned as &dyn Any).unwrap(), Cbor::Uint(1));
        let borrowed: &[u8] = &[0x01];
        assert_eq!(loadb(&borrowed as &dyn Any).unwrap(), Cbor::Uint(1));
    }

    #[test]
    fn dumpb_rejects_opaque_values() {
        let opaque = Opaque;
        assert!(matches!(dumpb(&opaque as &dyn Any), Err(Error::WrongType)));
    }

    #[test]
    fn dumpb_rejects_opaque_values_nested_in_a_map() {
        let pairs: Vec<(Box<dyn Any>, Box<dyn Any>)> =
            vec![(Box::new("foo".to_string()), Box::new(Opaque))];
        assert!(matches!(dumpb(&pairs as &dyn Any), Err(Error::WrongType)));
    }

    #[test]
    fn dumpb_returns_owned_bytes() {
        let n: i64 = 1;
        assert_eq!(dumpb(&n as &dyn Any).unwrap(), vec![0x01]);
    }
}
