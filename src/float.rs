//! Minimal-width IEEE-754 float encoding and widening decode.

use half::f16;

const HALF_NAN: u16 = 0x7e00;

/// Appends the major-7 float header (half, single, or double, whichever is
/// the narrowest width that round-trips `v` exactly) to `out`.
pub fn encode_float(out: &mut Vec<u8>, v: f64) {
    if let Some(bits) = as_half_bits(v) {
        out.push(0xf9);
        out.extend_from_slice(&bits.to_be_bytes());
    } else if let Some(bits) = as_single_bits(v) {
        out.push(0xfa);
        out.extend_from_slice(&bits.to_be_bytes());
    } else {
        out.push(0xfb);
        out.extend_from_slice(&v.to_be_bytes());
    }
}

fn as_half_bits(v: f64) -> Option<u16> {
    if v.is_nan() {
        return Some(HALF_NAN);
    }
    let half = f16::from_f64(v);
    if half.to_f64().to_bits() == v.to_bits() {
        Some(half.to_bits())
    } else {
        None
    }
}

fn as_single_bits(v: f64) -> Option<u32> {
    if v.is_nan() {
        return None;
    }
    let single = v as f32;
    if single as f64 == v {
        Some(single.to_bits())
    } else {
        None
    }
}

pub fn decode_half(bits: u16) -> f64 {
    f16::from_bits(bits).to_f64()
}

pub fn decode_single(bits: u32) -> f64 {
    f32::from_bits(bits) as f64
}

pub fn decode_double(bits: u64) -> f64 {
    f64::from_bits(bits)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn encoded_hex(v: f64) -> String {
        let mut out = Vec::new();
        encode_float(&mut out, v);
        hex::encode(out)
    }

    #[test]
    fn minimal_width_choices() {
        assert_eq!(encoded_hex(0.0), "f90000");
        assert_eq!(encoded_hex(-0.0), "f98000");
        assert_eq!(encoded_hex(1.0), "f93c00");
        assert_eq!(encoded_hex(1.5), "f93e00");
        assert_eq!(encoded_hex(65504.0), "f97bff");
        assert_eq!(encoded_hex(100000.0), "fa47c35000");
        assert_eq!(encoded_hex(5.960464477539063e-8), "f90001");
        assert_eq!(encoded_hex(0.00006103515625), "f90400");
        assert_eq!(encoded_hex(-4.0), "f9c400");
        assert_eq!(encoded_hex(-4.1), "fbc010666666666666");
        assert_eq!(encoded_hex(1.1), "fb3ff199999999999a");
        assert_eq!(encoded_hex(f64::INFINITY), "f97c00");
        assert_eq!(encoded_hex(f64::NEG_INFINITY), "f9fc00");
        assert_eq!(encoded_hex(f64::NAN), "f97e00");
    }
}
