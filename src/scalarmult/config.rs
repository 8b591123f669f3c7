use curvelock_common::LockPolicy;

/// Runtime options for the operations that allocate secret memory
///
/// The default locks best-effort: a refused `mlock` is logged and the
/// operation continues.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Config {
    /// Policy applied to every guarded buffer the operation acquires
    pub lock_policy: LockPolicy,
}

impl Config {
    /// Fail with `MemoryLock` rather than hold secrets in swappable memory
    pub fn strict() -> Self {
        Self {
            lock_policy: LockPolicy::Strict,
        }
    }

    /// Replace the lock policy
    pub fn with_lock_policy(mut self, lock_policy: LockPolicy) -> Self {
        self.lock_policy = lock_policy;
        self
    }
}
