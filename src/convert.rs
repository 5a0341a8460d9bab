//! Ergonomic conversions between `Cbor` and native Rust types, for callers
//! who already know the static type on their side of the boundary.

use crate::error::Error;
use crate::map::Map;
use crate::value::{Cbor, NegInt};
use std::collections::{BTreeMap, HashMap};
use std::convert::TryFrom;

impl From<bool> for Cbor {
    fn from(v: bool) -> Self {
        Cbor::Bool(v)
    }
}

impl TryFrom<&Cbor> for bool {
    type Error = Error;

    fn try_from(v: &Cbor) -> Result<Self, Error> {
        match v {
            Cbor::Bool(b) => Ok(*b),
            _ => Err(Error::WrongType),
        }
    }
}

macro_rules! impl_unsigned {
    ($($t:ty),+) => {$(
        impl From<$t> for Cbor {
            fn from(v: $t) -> Self {
                Cbor::Uint(v as u64)
            }
        }

        impl TryFrom<&Cbor> for $t {
            type Error = Error;

            fn try_from(v: &Cbor) -> Result<Self, Error> {
                match v {
                    Cbor::Uint(n) => <$t>::try_from(*n).map_err(|_| Error::OutOfRange),
                    _ => Err(Error::WrongType),
                }
            }
        }
    )+};
}

macro_rules! impl_signed {
    ($($t:ty),+) => {$(
        impl From<$t> for Cbor {
            fn from(v: $t) -> Self {
                let v = v as i64;
                if v >= 0 {
                    Cbor::Uint(v as u64)
                } else {
                    Cbor::NegInt(NegInt::Small(v))
                }
            }
        }

        impl TryFrom<&Cbor> for $t {
            type Error = Error;

            fn try_from(v: &Cbor) -> Result<Self, Error> {
                match v {
                    Cbor::Uint(n) => <$t>::try_from(*n).map_err(|_| Error::OutOfRange),
                    Cbor::NegInt(n) => {
                        let small = n.to_i64().ok_or(Error::OutOfRange)?;
                        <$t>::try_from(small).map_err(|_| Error::OutOfRange)
                    }
                    _ => Err(Error::WrongType),
                }
            }
        }
    )+};
}

impl_unsigned!(u8, u16, u32, u64, usize);
impl_signed!(i8, i16, i32, i64, isize);

impl From<f32> for Cbor {
    fn from(v: f32) -> Self {
        Cbor::Float(v as f64)
    }
}

impl From<f64> for Cbor {
    fn from(v: f64) -> Self {
        Cbor::Float(v)
    }
}

impl TryFrom<&Cbor> for f64 {
    type Error = Error;

    fn try_from(v: &Cbor) -> Result<Self, Error> {
        match v {
            Cbor::Float(f) => Ok(*f),
            _ => Err(Error::WrongType),
        }
    }
}

impl From<&str> for Cbor {
    fn from(v: &str) -> Self {
        Cbor::Text(v.to_string())
    }
}

impl From<String> for Cbor {
    fn from(v: String) -> Self {
        Cbor::Text(v)
    }
}

impl TryFrom<Cbor> for String {
    type Error = Error;

    fn try_from(v: Cbor) -> Result<Self, Error> {
        match v {
            Cbor::Text(s) => Ok(s),
            _ => Err(Error::WrongType),
        }
    }
}

impl From<&[u8]> for Cbor {
    fn from(v: &[u8]) -> Self {
        Cbor::Bytes(v.to_vec())
    }
}

impl From<Vec<u8>> for Cbor {
    fn from(v: Vec<u8>) -> Self {
        Cbor::Bytes(v)
    }
}

impl TryFrom<Cbor> for Vec<u8> {
    type Error = Error;

    fn try_from(v: Cbor) -> Result<Self, Error> {
        match v {
            Cbor::Bytes(b) => Ok(b),
            _ => Err(Error::WrongType),
        }
    }
}

impl<T: Into<Cbor>> From<Option<T>> for Cbor {
    fn from(v: Option<T>) -> Self {
        match v {
            Some(inner) => inner.into(),
            None => Cbor::Null,
        }
    }
}

impl TryFrom<Cbor> for Vec<Cbor> {
    type Error = Error;

    fn try_from(v: Cbor) -> Result<Self, Error> {
        match v {
            Cbor::Array(items) => Ok(items),
            _ => Err(Error::WrongType),
        }
    }
}

impl<K, V> From<HashMap<K, V>> for Cbor
where
    K: Into<Cbor>,
    V: Into<Cbor>,
{
    fn from(v: HashMap<K, V>) -> Self {
        Cbor::Map(v.into_iter().map(|(k, v)| (k.into(), v.into())).collect())
    }
}

impl<K, V> From<BTreeMap<K, V>> for Cbor
where
    K: Into<Cbor>,
    V: Into<Cbor>,
{
    fn from(v: BTreeMap<K, V>) -> Self {
        Cbor::Map(v.into_iter().map(|(k, v)| (k.into(), v.into())).collect())
    }
}

impl TryFrom<Cbor> for Map {
    type Error = Error;

    fn try_from(v: Cbor) -> Result<Self, Error> {
        match v {
            Cbor::Map(m) => Ok(m),
            _ => Err(Error::WrongType),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn round_trips_through_native_types() {
        assert_eq!(u8::try_from(&Cbor::from(200u8)).unwrap(), 200u8);
        assert_eq!(i32::try_from(&Cbor::from(-5i32)).unwrap(), -5i32);
        assert!(u8::try_from(&Cbor::Uint(300)).is_err());
        assert_eq!(String::try_from(Cbor::from("hi")).unwrap(), "hi");
        assert!(matches!(
            i8::try_from(&Cbor::Text("x".into())),
            Err(Error::WrongType)
        ));
    }
}
