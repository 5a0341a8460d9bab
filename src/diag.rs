//! CBOR diagnostic notation, the human-readable textual form described in
//! RFC 7049 §6 (and rendered by tools like `cbor.me`).

use crate::value::{Cbor, NegInt};

pub fn diagnostic(value: &Cbor) -> String {
    let mut out = String::new();
    write_diagnostic(&mut out, value);
    out
}

fn write_diagnostic(out: &mut String, value: &Cbor) {
    match value {
        Cbor::Null => out.push_str("null"),
        Cbor::Bool(b) => out.push_str(if *b { "true" } else { "false" }),
        Cbor::Uint(n) => out.push_str(&n.to_string()),
        Cbor::NegInt(n) => match n {
            NegInt::Small(v) => out.push_str(&v.to_string()),
            NegInt::Wide(wire) => out.push_str(&format!("-1-{wire}")),
        },
        Cbor::Float(f) => {
            if f.is_nan() {
                out.push_str("NaN");
            } else if f.is_infinite() {
                out.push_str(if *f > 0.0 { "Infinity" } else { "-Infinity" });
            } else {
                out.push_str(&format!("{f:?}"));
            }
        }
        Cbor::Text(s) => {
            out.push('"');
            for c in s.chars() {
                match c {
                    '"' => out.push_str("\\\""),
                    '\\' => out.push_str("\\\\"),
                    _ => out.push(c),
                }
            }
            out.push('"');
        }
        Cbor::Bytes(b) => {
            out.push_str("h'");
            out.push_str(&hex::encode(b));
            out.push('\'');
        }
        Cbor::Array(items) => {
            out.push('[');
            for (i, item) in items.iter().enumerate() {
                if i > 0 {
                    out.push_str(", ");
                }
                write_diagnostic(out, item);
            }
            out.push(']');
        }
        Cbor::Map(map) => {
            out.push('{');
            for (i, (k, v)) in map.iter().enumerate() {
                if i > 0 {
                    out.push_str(", ");
                }
                write_diagnostic(out, k);
                out.push_str(": ");
                write_diagnostic(out, v);
            }
            out.push('}');
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn renders_nested_structures() {
        let v = Cbor::Array(vec![Cbor::from(1i64), Cbor::from("a")]);
        assert_eq!(diagnostic(&v), "[1, \"a\"]");
    }
}
