//! Property-based tests for the X25519 operations

use curvelock::api::Error;
use curvelock::scalarmult::{self, PublicPoint, SecretScalar, BYTES, SCALARBYTES};
use proptest::prelude::*;

/// Byte strings of any length except 32
fn wrong_length_bytes() -> impl Strategy<Value = Vec<u8>> {
    prop_oneof![
        prop::collection::vec(any::<u8>(), 0..32),
        prop::collection::vec(any::<u8>(), 33..96),
    ]
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(32))]

    #[test]
    fn dh_is_commutative(a in any::<[u8; 32]>(), b in any::<[u8; 32]>()) {
        let pa = scalarmult::base(a).unwrap();
        let pb = scalarmult::base(b).unwrap();
        let k1 = scalarmult::shared_secret(a, &pb).unwrap();
        let k2 = scalarmult::shared_secret(b, &pa).unwrap();
        prop_assert_eq!(k1, k2);
    }

    #[test]
    fn base_is_deterministic(a in any::<[u8; 32]>()) {
        prop_assert_eq!(scalarmult::base(a).unwrap(), scalarmult::base(a).unwrap());
    }

    #[test]
    fn clamped_bits_are_ignored(a in any::<[u8; 32]>(), low in 0u8..8, high in any::<bool>()) {
        let mut b = a;
        b[0] ^= low;
        if high {
            b[31] ^= 0x80;
        }
        // Bit 6 of the last byte is forced on, so flipping it is also invisible.
        b[31] ^= 0x40;
        prop_assert_eq!(scalarmult::base(a).unwrap(), scalarmult::base(b).unwrap());
    }

    #[test]
    fn imported_scalars_are_clamped(a in any::<[u8; 32]>()) {
        let sk = SecretScalar::from_bytes(&a).unwrap();
        let bytes = sk.as_bytes();
        prop_assert_eq!(bytes.len(), SCALARBYTES);
        prop_assert_eq!(bytes[0] & 7, 0);
        prop_assert_eq!(bytes[31] & 0xC0, 0x40);
        prop_assert_eq!(&bytes[1..31], &a[1..31]);
    }

    #[test]
    fn wrong_length_scalar_is_rejected(bad in wrong_length_bytes()) {
        let err = scalarmult::base(&bad).unwrap_err();
        prop_assert_eq!(
            err,
            Error::InvalidKeyLength { context: "X25519 scalar", expected: SCALARBYTES, actual: bad.len() }
        );
    }

    #[test]
    fn wrong_length_point_is_rejected(sk in any::<[u8; 32]>(), bad in wrong_length_bytes()) {
        let err = scalarmult::shared_secret(sk, &bad).unwrap_err();
        prop_assert_eq!(
            err,
            Error::InvalidKeyLength { context: "X25519 point", expected: BYTES, actual: bad.len() }
        );
        prop_assert!(PublicPoint::from_bytes(&bad).is_err());
    }

    #[test]
    fn public_point_hex_round_trip(bytes in any::<[u8; 32]>()) {
        let pk = PublicPoint::from(bytes);
        prop_assert_eq!(PublicPoint::from_hex(&pk.to_hex()).unwrap(), pk);
    }

    #[test]
    fn top_bit_of_peer_point_is_ignored(sk in any::<[u8; 32]>(), u in any::<[u8; 32]>()) {
        let mut high = u;
        high[31] ^= 0x80;
        prop_assert_eq!(
            scalarmult::shared_secret(sk, u).unwrap(),
            scalarmult::shared_secret(sk, high).unwrap()
        );
    }
}

#[test]
fn zero_point_gives_zero_secret_for_any_key() {
    for _ in 0..4 {
        let sk = scalarmult::keygen().unwrap();
        let k = scalarmult::shared_secret(&sk, [0u8; BYTES]).unwrap();
        assert!(k.is_all_zero());
        assert_eq!(k.as_bytes(), &[0u8; BYTES][..]);
    }
}

#[test]
fn keygen_outputs_are_distinct() {
    let a = scalarmult::keygen().unwrap();
    let b = scalarmult::keygen().unwrap();
    assert_ne!(a.as_bytes(), b.as_bytes());
    assert_ne!(a.public_point(), b.public_point());
}

#[test]
fn size_constants() {
    assert_eq!(BYTES, 32);
    assert_eq!(SCALARBYTES, 32);
    assert_eq!(BYTES, SCALARBYTES);
}
