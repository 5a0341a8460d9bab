//! NaN-aware, tolerance-based comparison for the round-trip test oracle.
//!
//! `Cbor`'s own `PartialEq` uses ordinary IEEE-754 float semantics so the
//! type stays predictable in collections; this helper is for tests that
//! need "NaN equals NaN" the way the original test suite's `assert_equal`
//! does.

use crate::value::Cbor;

pub fn close_eq(a: &Cbor, b: &Cbor) -> bool {
    match (a, b) {
        (Cbor::Float(x), Cbor::Float(y)) => {
            if x.is_nan() && y.is_nan() {
                true
            } else {
                (x - y).abs() <= 1e-9 * x.abs().max(y.abs()).max(1.0)
            }
        }
        (Cbor::Array(xs), Cbor::Array(ys)) => {
            xs.len() == ys.len() && xs.iter().zip(ys).all(|(x, y)| close_eq(x, y))
        }
        (Cbor::Map(xs), Cbor::Map(ys)) => {
            xs.len() == ys.len()
                && xs.iter().zip(ys).all(|((k1, v1), (k2, v2))| {
                    close_eq(k1, k2) && close_eq(v1, v2)
                })
        }
        _ => a == b,
    }
}
