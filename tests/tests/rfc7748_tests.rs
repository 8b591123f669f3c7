//! Known-answer tests against the RFC 7748 vectors

use curvelock::algorithms::ec::x25519;
use curvelock::scalarmult;
use curvelock_tests::vectors::{bytes32, rfc7748};

#[test]
fn test_scalar_mult_vectors() {
    let vectors = rfc7748().unwrap();
    for tc in &vectors.scalar_mult {
        let scalar = bytes32("scalar", &tc.scalar).unwrap();
        let u = bytes32("u", &tc.u).unwrap();
        let expected = bytes32("output", &tc.output).unwrap();

        let k = scalarmult::shared_secret(scalar, u).unwrap();
        assert_eq!(k.as_bytes(), &expected[..], "tcId {}", tc.test_id);
        assert_eq!(x25519::x25519(&scalar, &u).unwrap(), expected, "tcId {}", tc.test_id);
    }
}

#[test]
fn test_diffie_hellman_vector() {
    let dh = &rfc7748().unwrap().diffie_hellman;
    let alice_sk = bytes32("aliceSecret", &dh.alice_secret).unwrap();
    let bob_sk = bytes32("bobSecret", &dh.bob_secret).unwrap();

    let alice_pk = scalarmult::base(alice_sk).unwrap();
    let bob_pk = scalarmult::base(bob_sk).unwrap();
    assert_eq!(alice_pk.to_hex(), dh.alice_public);
    assert_eq!(bob_pk.to_hex(), dh.bob_public);

    let k_ab = scalarmult::shared_secret(alice_sk, &bob_pk).unwrap();
    let k_ba = scalarmult::shared_secret(bob_sk, &alice_pk).unwrap();
    assert_eq!(hex::encode(k_ab.as_bytes()), dh.shared);
    assert_eq!(k_ab, k_ba);
}

fn iterate(iterations: usize) -> [u8; 32] {
    let mut k = x25519::BASE_POINT_U;
    let mut u = x25519::BASE_POINT_U;
    for _ in 0..iterations {
        let next = x25519::x25519(&k, &u).unwrap();
        u = k;
        k = next;
    }
    k
}

#[test]
fn test_iterated_vectors() {
    for tc in &rfc7748().unwrap().iterated {
        let expected = bytes32("output", &tc.output).unwrap();
        assert_eq!(iterate(tc.iterations), expected, "{} iterations", tc.iterations);
    }
}

#[test]
fn test_alice_known_answer_through_facade() {
    let sk = hex::decode("77076d0a7318a57d3c16c17251b26645df4c2f87ebc0992ab177fba51db92c2a").unwrap();
    assert_eq!(
        scalarmult::base(&sk).unwrap().to_hex(),
        "8520f0098930a754748b7ddcb43ef75a0dbf3a0d26381af4eba4a98eaa9b4e6a"
    );
}
