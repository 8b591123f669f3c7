//! Independent threads share no state; every call owns its buffers

use std::sync::Arc;
use std::thread;

use curvelock::scalarmult::{self, PublicPoint};

#[test]
fn test_parallel_key_agreement() {
    let handles: Vec<_> = (0..8)
        .map(|_| {
            thread::spawn(|| {
                let alice = scalarmult::keygen().unwrap();
                let bob = scalarmult::keygen().unwrap();
                let k1 = scalarmult::shared_secret(&alice, &bob.public_point()).unwrap();
                let k2 = scalarmult::shared_secret(&bob, &alice.public_point()).unwrap();
                assert_eq!(k1, k2);
                alice.public_point()
            })
        })
        .collect();

    let publics: Vec<PublicPoint> = handles.into_iter().map(|h| h.join().unwrap()).collect();
    for (i, a) in publics.iter().enumerate() {
        for b in &publics[i + 1..] {
            assert_ne!(a, b);
        }
    }
}

#[test]
fn test_shared_secret_key_across_threads() {
    let server = Arc::new(scalarmult::keygen().unwrap());
    let server_public = server.public_point();

    let handles: Vec<_> = (0..4)
        .map(|_| {
            let server = Arc::clone(&server);
            thread::spawn(move || {
                let client = scalarmult::keygen().unwrap();
                let client_side = client.diffie_hellman(&server_public).unwrap();
                let server_side = server.diffie_hellman(&client.public_point()).unwrap();
                assert_eq!(client_side, server_side);
            })
        })
        .collect();

    for handle in handles {
        handle.join().unwrap();
    }
}
