//! Key generation driven by a seeded ChaCha20 generator

use curvelock::scalarmult::{self, SCALARBYTES};
use rand::{RngCore, SeedableRng};
use rand_chacha::ChaCha20Rng;

#[test]
fn test_same_seed_same_keypair() {
    let mut rng1 = ChaCha20Rng::seed_from_u64(7748);
    let mut rng2 = ChaCha20Rng::seed_from_u64(7748);

    let sk1 = scalarmult::keygen_with_rng(&mut rng1).unwrap();
    let sk2 = scalarmult::keygen_with_rng(&mut rng2).unwrap();

    assert_eq!(sk1.as_bytes(), sk2.as_bytes());
    assert_eq!(sk1.public_point(), sk2.public_point());
}

#[test]
fn test_different_seeds_different_keys() {
    let sk1 = scalarmult::keygen_with_rng(&mut ChaCha20Rng::seed_from_u64(1)).unwrap();
    let sk2 = scalarmult::keygen_with_rng(&mut ChaCha20Rng::seed_from_u64(2)).unwrap();
    assert_ne!(sk1.as_bytes(), sk2.as_bytes());
}

#[test]
fn test_keygen_draws_one_clamped_block() {
    let mut expected = [0u8; SCALARBYTES];
    ChaCha20Rng::from_seed([3u8; 32]).fill_bytes(&mut expected);
    expected[0] &= 248;
    expected[31] &= 127;
    expected[31] |= 64;

    let mut rng = ChaCha20Rng::from_seed([3u8; 32]);
    let sk = scalarmult::keygen_with_rng(&mut rng).unwrap();
    assert_eq!(sk.as_bytes(), &expected[..]);

    // Exactly 32 bytes were consumed from the stream.
    let mut reference = ChaCha20Rng::from_seed([3u8; 32]);
    let mut skipped = [0u8; SCALARBYTES];
    reference.fill_bytes(&mut skipped);
    assert_eq!(rng.next_u64(), reference.next_u64());
}

#[test]
fn test_seeded_parties_agree() {
    let mut rng = ChaCha20Rng::seed_from_u64(0xC0FFEE);
    let alice = scalarmult::keygen_with_rng(&mut rng).unwrap();
    let bob = scalarmult::keygen_with_rng(&mut rng).unwrap();

    let k_ab = alice.diffie_hellman(&bob.public_point()).unwrap();
    let k_ba = bob.diffie_hellman(&alice.public_point()).unwrap();
    assert_eq!(k_ab, k_ba);

    let k_free = scalarmult::shared_secret(alice.as_bytes(), bob.public_point()).unwrap();
    assert_eq!(k_free, k_ab);
}
