//! Recursive-descent decoder: CBOR bytes -> `Cbor`.

use crate::error::{DecodeError, Error, Result};
use crate::float::{decode_double, decode_half, decode_single};
use crate::map::Map;
use crate::value::{Cbor, NegInt};
use crate::varint::MajorType;

const MAX_DEPTH: usize = 256;

struct Cursor<'a> {
    buf: &'a [u8],
    pos: usize,
}

impl<'a> Cursor<'a> {
    fn new(buf: &'a [u8]) -> Self {
        Cursor { buf, pos: 0 }
    }

    fn remaining(&self) -> usize {
        self.buf.len() - self.pos
    }

    fn peek_byte(&self) -> Result<u8> {
        self.buf
            .get(self.pos)
            .copied()
            .ok_or(Error::Format(DecodeError::Underrun))
    }

    fn take_byte(&mut self) -> Result<u8> {
        let b = self.peek_byte()?;
        self.pos += 1;
        Ok(b)
    }

    fn take_bytes(&mut self, n: usize) -> Result<&'a [u8]> {
        if self.remaining() < n {
            return Err(Error::Format(DecodeError::Underrun));
        }
        let slice = &self.buf[self.pos..self.pos + n];
        self.pos += n;
        Ok(slice)
    }
}

/// One decoded header: the major type and its raw argument, or a marker for
/// the indefinite-length / break forms.
enum Header {
    Argument(MajorType, u64),
    Indefinite(MajorType),
    Break,
}

fn parse_header(cur: &mut Cursor) -> Result<Header> {
    let initial = cur.take_byte()?;
    let major = MajorType::from_bits(initial >> 5);
    let ai = initial & 0x1F;
    // Major type 7's ai 25/26/27 select a float width rather than an
    // integer argument width: the following bytes are the float's raw
    // bits, read out by `decode_simple`, not a length/count to widen.
    if major == MajorType::Simple {
        return match ai {
            28..=30 => Err(Error::Format(DecodeError::ReservedHeader(ai))),
            31 => Ok(Header::Break),
            _ => Ok(Header::Argument(major, ai as u64)),
        };
    }
    match ai {
        0..=23 => Ok(Header::Argument(major, ai as u64)),
        24 => Ok(Header::Argument(major, cur.take_byte()? as u64)),
        25 => {
            let bytes = cur.take_bytes(2)?;
            Ok(Header::Argument(
                major,
                u16::from_be_bytes(bytes.try_into().unwrap()) as u64,
            ))
        }
        26 => {
            let bytes = cur.take_bytes(4)?;
            Ok(Header::Argument(
                major,
                u32::from_be_bytes(bytes.try_into().unwrap()) as u64,
            ))
        }
        27 => {
            let bytes = cur.take_bytes(8)?;
            Ok(Header::Argument(
                major,
                u64::from_be_bytes(bytes.try_into().unwrap()),
            ))
        }
        28..=30 => Err(Error::Format(DecodeError::ReservedHeader(ai))),
        31 => {
            if major == MajorType::Simple {
                Ok(Header::Break)
            } else {
                Ok(Header::Indefinite(major))
            }
        }
        _ => unreachable!("ai is 5 bits"),
    }
}

pub fn decode(buf: &[u8]) -> Result<Cbor> {
    let mut cur = Cursor::new(buf);
    let value = decode_item(&mut cur, 0)?;
    if cur.remaining() > 0 {
        return Err(Error::Format(DecodeError::TrailingData(cur.remaining())));
    }
    Ok(value)
}

fn decode_item(cur: &mut Cursor, depth: usize) -> Result<Cbor> {
    if depth > MAX_DEPTH {
        return Err(Error::Format(DecodeError::DepthExceeded));
    }
    match parse_header(cur)? {
        Header::Break => Err(Error::Format(DecodeError::UnexpectedBreak)),
        Header::Argument(MajorType::Unsigned, n) => Ok(Cbor::Uint(n)),
        Header::Argument(MajorType::Negative, n) => Ok(Cbor::NegInt(NegInt::from_wire_arg(n))),
        Header::Argument(MajorType::ByteString, len) => {
            Ok(Cbor::Bytes(cur.take_bytes(len as usize)?.to_vec()))
        }
        Header::Argument(MajorType::Text, len) => {
            let bytes = cur.take_bytes(len as usize)?;
            let s = std::str::from_utf8(bytes)
                .map_err(|_| Error::Format(DecodeError::InvalidUtf8))?;
            Ok(Cbor::Text(s.to_string()))
        }
        Header::Argument(MajorType::Array, len) => {
            let mut items = Vec::with_capacity(len.min(4096) as usize);
            for _ in 0..len {
                items.push(decode_item(cur, depth + 1)?);
            }
            Ok(Cbor::Array(items))
        }
        Header::Argument(MajorType::Map, len) => {
            let mut pairs = Vec::with_capacity(len.min(4096) as usize);
            for _ in 0..len {
                let k = decode_item(cur, depth + 1)?;
                let v = decode_item(cur, depth + 1)?;
                pairs.push((k, v));
            }
            Ok(Cbor::Map(Map::from_pairs(pairs)))
        }
        Header::Argument(MajorType::Tagged, _) => Err(Error::Format(DecodeError::UnsupportedTag)),
        Header::Argument(MajorType::Simple, ai) => decode_simple(ai, cur),
        Header::Indefinite(MajorType::ByteString) => {
            decode_indefinite_string(cur, MajorType::ByteString).map(Cbor::Bytes)
        }
        Header::Indefinite(MajorType::Text) => {
            let bytes = decode_indefinite_string(cur, MajorType::Text)?;
            let s = String::from_utf8(bytes).map_err(|_| Error::Format(DecodeError::InvalidUtf8))?;
            Ok(Cbor::Text(s))
        }
        Header::Indefinite(MajorType::Array) => {
            let mut items = Vec::new();
            loop {
                if matches!(parse_header_peek(cur)?, Header::Break) {
                    cur.take_byte()?;
                    break;
                }
                items.push(decode_item(cur, depth + 1)?);
            }
            Ok(Cbor::Array(items))
        }
        Header::Indefinite(MajorType::Map) => {
            let mut pairs = Vec::new();
            loop {
                if matches!(parse_header_peek(cur)?, Header::Break) {
                    cur.take_byte()?;
                    break;
                }
                let k = decode_item(cur, depth + 1)?;
                if matches!(parse_header_peek(cur)?, Header::Break) {
                    return Err(Error::Format(DecodeError::OddMapLength));
                }
                let v = decode_item(cur, depth + 1)?;
                pairs.push((k, v));
            }
            Ok(Cbor::Map(Map::from_pairs(pairs)))
        }
        Header::Indefinite(_) => Err(Error::Format(DecodeError::NestedIndefiniteChunk)),
    }
}

/// Parses the next header without consuming it if it turns out to be a
/// break; used to look one item ahead inside indefinite-length containers.
fn parse_header_peek(cur: &mut Cursor) -> Result<Header> {
    let save = cur.pos;
    let header = parse_header(cur)?;
    cur.pos = save;
    Ok(header)
}

fn decode_indefinite_string(cur: &mut Cursor, expected: MajorType) -> Result<Vec<u8>> {
    let mut out = Vec::new();
    loop {
        match parse_header(cur)? {
            Header::Break => break,
            Header::Argument(major, len) if major == expected => {
                out.extend_from_slice(cur.take_bytes(len as usize)?);
            }
            Header::Argument(major, _) => {
                return Err(Error::Format(DecodeError::MismatchedChunkType(
                    major.bits(),
                    expected.bits(),
                )))
            }
            Header::Indefinite(_) => {
                return Err(Error::Format(DecodeError::NestedIndefiniteChunk))
            }
        }
    }
    Ok(out)
}

fn decode_simple(ai: u64, cur: &mut Cursor) -> Result<Cbor> {
    match ai {
        20 => Ok(Cbor::Bool(false)),
        21 => Ok(Cbor::Bool(true)),
        22 => Ok(Cbor::Null),
        23 => Ok(Cbor::Null), // undefined; see DESIGN.md open question
        25 => {
            let bytes = cur.take_bytes(2)?;
            Ok(Cbor::Float(decode_half(u16::from_be_bytes(
                bytes.try_into().unwrap(),
            ))))
        }
        26 => {
            let bytes = cur.take_bytes(4)?;
            Ok(Cbor::Float(decode_single(u32::from_be_bytes(
                bytes.try_into().unwrap(),
            ))))
        }
        27 => {
            let bytes = cur.take_bytes(8)?;
            Ok(Cbor::Float(decode_double(u64::from_be_bytes(
                bytes.try_into().unwrap(),
            ))))
        }
        other => Err(Error::Format(DecodeError::UnsupportedSimple(other as u8))),
    }
}
