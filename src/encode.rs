//! The total core encoder: `Cbor` -> minimal CBOR bytes.

use crate::float::encode_float;
use crate::value::Cbor;
use crate::varint::{encode_header, encode_simple_header, MajorType};

pub fn encode(value: &Cbor) -> Vec<u8> {
    let mut out = Vec::new();
    encode_into(&mut out, value);
    out
}

fn encode_into(out: &mut Vec<u8>, value: &Cbor) {
    match value {
        Cbor::Null => encode_simple_header(out, 22),
        Cbor::Bool(false) => encode_simple_header(out, 20),
        Cbor::Bool(true) => encode_simple_header(out, 21),
        Cbor::Uint(n) => encode_header(out, MajorType::Unsigned, *n),
        Cbor::NegInt(n) => encode_header(out, MajorType::Negative, n.wire_arg()),
        Cbor::Float(v) => encode_float(out, *v),
        Cbor::Text(s) => {
            encode_header(out, MajorType::Text, s.len() as u64);
            out.extend_from_slice(s.as_bytes());
        }
        Cbor::Bytes(b) => {
            encode_header(out, MajorType::ByteString, b.len() as u64);
            out.extend_from_slice(b);
        }
        Cbor::Array(items) => {
            encode_header(out, MajorType::Array, items.len() as u64);
            for item in items {
                encode_into(out, item);
            }
        }
        Cbor::Map(map) => {
            encode_header(out, MajorType::Map, map.len() as u64);
            for (k, v) in map.iter() {
                encode_into(out, k);
                encode_into(out, v);
            }
        }
    }
}
