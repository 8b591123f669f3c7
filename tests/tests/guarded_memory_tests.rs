//! Guarded buffer behaviour as seen through the public key types

use curvelock::api::Error;
use curvelock::common::{GuardedBuffer, LockPolicy};
use curvelock::scalarmult::{self, Config};

#[test]
fn test_acquire_is_zeroed_and_sized() {
    for len in [1usize, 31, 32, 33, 4096, 4097] {
        let buf = GuardedBuffer::acquire(len).unwrap();
        assert_eq!(buf.len(), len);
        assert!(buf.as_slice().iter().all(|&b| b == 0));
    }
}

#[test]
fn test_zero_length_buffer() {
    let buf = GuardedBuffer::acquire_with(0, LockPolicy::Strict).unwrap();
    assert!(buf.is_empty());
    assert!(!buf.is_locked());
    assert!(buf.as_slice().is_empty());
}

#[test]
fn test_buffer_released_on_error_path() {
    fn fill_then_fail(len: usize) -> curvelock::api::Result<()> {
        let mut buf = GuardedBuffer::acquire(len)?;
        buf.as_mut_slice().fill(0xA5);
        Err(Error::InvalidParameter {
            context: "test",
            message: "forced".to_string(),
        })
    }

    // Each call acquires and releases its own region; repeated use must not
    // exhaust anything.
    for _ in 0..64 {
        assert!(fill_then_fail(32).is_err());
    }
}

#[test]
fn test_strict_policy_locks_or_reports_memory_lock() {
    match scalarmult::keygen_with_config(&Config::strict()) {
        Ok(sk) => {
            assert!(sk.is_locked());
            let pk = sk.public_point();
            match scalarmult::shared_secret_with_config(&sk, &pk, &Config::strict()) {
                Ok(k) => assert!(k.is_locked()),
                Err(err) => assert!(matches!(err, Error::MemoryLock { .. })),
            }
        }
        Err(err) => {
            assert!(matches!(err, Error::MemoryLock { .. }));
            assert!(err.to_string().starts_with("Memory lock failed"));
        }
    }
}

#[test]
fn test_best_effort_always_succeeds() {
    let sk = scalarmult::keygen_with_config(&Config::default()).unwrap();
    let pk = sk.public_point();
    let k = scalarmult::shared_secret_with_config(&sk, &pk, &Config::default()).unwrap();
    assert_eq!(k.as_bytes().len(), scalarmult::BYTES);
}

#[test]
fn test_secret_types_are_send_sync() {
    fn assert_send_sync<T: Send + Sync>() {}
    assert_send_sync::<GuardedBuffer>();
    assert_send_sync::<scalarmult::SecretScalar>();
    assert_send_sync::<scalarmult::SharedSecret>();
    assert_send_sync::<scalarmult::PublicPoint>();
}
