//! Property test: decoding the encoding of any value built from the
//! supported grammar yields an equal (NaN-aware) value back.

use cbors::{close_eq, Cbor};
use proptest::prelude::*;

fn leaf() -> impl Strategy<Value = Cbor> {
    prop_oneof![
        Just(Cbor::Null),
        any::<bool>().prop_map(Cbor::from),
        any::<u64>().prop_map(Cbor::from),
        any::<i64>().prop_map(Cbor::from),
        any::<f64>().prop_map(Cbor::from),
        ".*".prop_map(Cbor::from),
        proptest::collection::vec(any::<u8>(), 0..16).prop_map(Cbor::from),
    ]
}

fn cbor_value() -> impl Strategy<Value = Cbor> {
    leaf().prop_recursive(4, 64, 8, |inner| {
        prop_oneof![
            proptest::collection::vec(inner.clone(), 1..8).prop_map(Cbor::array),
            proptest::collection::vec((inner.clone(), inner), 1..8)
                .prop_map(|pairs| Cbor::Map(pairs.into_iter().collect())),
        ]
    })
}

proptest! {
    #[test]
    fn decode_inverts_encode(v in cbor_value()) {
        let bytes = v.to_bytes();
        let decoded = Cbor::from_bytes(&bytes).unwrap();
        prop_assert!(close_eq(&v, &decoded));
    }
}
