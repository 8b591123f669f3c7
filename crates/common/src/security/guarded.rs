//! Guarded memory regions for secret key material
//!
//! A [`GuardedBuffer`] owns a page-aligned heap region. On acquisition the
//! region is zero-filled, marked as excluded from core dumps (Linux) and
//! locked against swapping (`mlock` on Unix). Dropping the handle wipes the
//! whole region, unlocks it and frees it, on every exit path including
//! error propagation and unwinding.
//!
//! Locking is best-effort by default: when the operating system refuses
//! (for example because `RLIMIT_MEMLOCK` is exhausted) a `tracing` warning
//! is emitted and the buffer reports [`GuardedBuffer::is_locked`] as false.
//! Callers that cannot tolerate unlocked secrets use [`LockPolicy::Strict`].

use core::fmt;
use core::ptr::NonNull;
use std::alloc::{self, Layout};

use curvelock_api::{Error, Result, ResultExt};
use zeroize::Zeroize;

use super::memory::barrier;

/// What to do when a region cannot be locked into RAM
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LockPolicy {
    /// Log a warning and continue with an unlocked region
    #[default]
    BestEffort,
    /// Fail the acquisition with [`Error::MemoryLock`]
    Strict,
}

/// Why a region could not be locked
#[derive(Debug, thiserror::Error)]
pub enum LockError {
    /// The operating system refused to lock the region
    #[error("mlock of {len} bytes failed: {source}")]
    Os {
        len: usize,
        #[source]
        source: std::io::Error,
    },

    /// The platform offers no memory-locking facility
    #[error("memory locking is not supported on this platform")]
    Unsupported,
}

impl From<LockError> for Error {
    fn from(err: LockError) -> Self {
        Error::MemoryLock {
            context: "GuardedBuffer::acquire",
            message: err.to_string(),
        }
    }
}

/// Heap region for secret bytes with zero-on-release semantics
pub struct GuardedBuffer {
    ptr: NonNull<u8>,
    len: usize,
    // None for zero-length buffers, which own no allocation.
    layout: Option<Layout>,
    locked: bool,
    policy: LockPolicy,
}

// SAFETY: the region is uniquely owned by this handle and only reachable
// through it; `&self` methods hand out read-only views.
unsafe impl Send for GuardedBuffer {}
// SAFETY: see above, there is no interior mutability.
unsafe impl Sync for GuardedBuffer {}

impl GuardedBuffer {
    /// Acquire a zero-initialized region of exactly `length` bytes with
    /// best-effort locking
    pub fn acquire(length: usize) -> Result<Self> {
        Self::acquire_with(length, LockPolicy::default())
    }

    /// Acquire a zero-initialized region of exactly `length` bytes
    pub fn acquire_with(length: usize, policy: LockPolicy) -> Result<Self> {
        if length == 0 {
            return Ok(Self {
                ptr: NonNull::dangling(),
                len: 0,
                layout: None,
                locked: false,
                policy,
            });
        }

        let layout = region_layout(length)?;
        // SAFETY: `layout` has a non-zero size.
        let raw = unsafe { alloc::alloc_zeroed(layout) };
        let ptr = match NonNull::new(raw) {
            Some(ptr) => ptr,
            None => alloc::handle_alloc_error(layout),
        };

        // From here on `Drop` owns the cleanup, including the strict-mode
        // failure path below.
        let mut buffer = Self {
            ptr,
            len: length,
            layout: Some(layout),
            locked: false,
            policy,
        };

        os::exclude_from_core_dump(ptr, layout.size());

        match os::lock(ptr, layout.size()) {
            Ok(()) => buffer.locked = true,
            Err(err) => match policy {
                LockPolicy::Strict => return Err(err.into()),
                LockPolicy::BestEffort => {
                    tracing::warn!(len = length, error = %err, "guarded buffer is not locked in memory");
                }
            },
        }

        tracing::trace!(len = length, locked = buffer.locked, "guarded buffer acquired");
        Ok(buffer)
    }

    /// Acquire a region sized to `bytes` and copy them in
    ///
    /// The caller remains responsible for wiping its own copy of `bytes`.
    pub fn from_slice(bytes: &[u8], policy: LockPolicy) -> Result<Self> {
        let mut buffer = Self::acquire_with(bytes.len(), policy)?;
        buffer.as_mut_slice().copy_from_slice(bytes);
        Ok(buffer)
    }

    /// Copy the contents into a freshly acquired region with the same policy
    pub fn try_clone(&self) -> Result<Self> {
        Self::from_slice(self.as_slice(), self.policy)
    }

    /// Number of usable bytes
    pub fn len(&self) -> usize {
        self.len
    }

    /// True for a zero-length buffer
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Whether the operating system confirmed the region is locked in RAM
    pub fn is_locked(&self) -> bool {
        self.locked
    }

    /// The policy this buffer was acquired with
    pub fn policy(&self) -> LockPolicy {
        self.policy
    }

    /// Read-only view of the contents
    pub fn as_slice(&self) -> &[u8] {
        // SAFETY: `ptr` is valid for `len` initialized bytes for the lifetime
        // of `self` (or dangling and well-aligned when `len` is zero).
        unsafe { core::slice::from_raw_parts(self.ptr.as_ptr(), self.len) }
    }

    /// Mutable view of the contents
    pub fn as_mut_slice(&mut self) -> &mut [u8] {
        // SAFETY: as in `as_slice`; `&mut self` guarantees exclusivity.
        unsafe { core::slice::from_raw_parts_mut(self.ptr.as_ptr(), self.len) }
    }
}

impl Drop for GuardedBuffer {
    fn drop(&mut self) {
        let Some(layout) = self.layout else {
            return;
        };

        // Wipe the full page-rounded region, not just the `len` prefix.
        // SAFETY: the allocation spans `layout.size()` bytes and is still live.
        let region = unsafe { core::slice::from_raw_parts_mut(self.ptr.as_ptr(), layout.size()) };
        region.zeroize();
        barrier::compiler_fence_seq_cst();

        if self.locked {
            os::unlock(self.ptr, layout.size());
        }

        // SAFETY: allocated in `acquire_with` with exactly this layout and
        // never freed elsewhere.
        unsafe { alloc::dealloc(self.ptr.as_ptr(), layout) };

        tracing::trace!(len = self.len, "guarded buffer released");
    }
}

impl AsRef<[u8]> for GuardedBuffer {
    fn as_ref(&self) -> &[u8] {
        self.as_slice()
    }
}

impl AsMut<[u8]> for GuardedBuffer {
    fn as_mut(&mut self) -> &mut [u8] {
        self.as_mut_slice()
    }
}

impl fmt::Debug for GuardedBuffer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "GuardedBuffer(len={}, locked={}, [REDACTED])",
            self.len, self.locked
        )
    }
}

/// Round `length` up to whole pages so locking and wiping never touch
/// memory owned by another allocation.
fn region_layout(length: usize) -> Result<Layout> {
    let page = os::page_size();
    let size = length
        .checked_add(page - 1)
        .map(|n| n & !(page - 1))
        .ok_or_else(|| Error::InvalidParameter {
            context: "GuardedBuffer::acquire",
            message: format!("length {} overflows the address space", length),
        })?;

    Layout::from_size_align(size, page).wrap_err(|| Error::InvalidParameter {
        context: "GuardedBuffer::acquire",
        message: format!("page size {} is not a usable alignment", page),
    })
}

const FALLBACK_PAGE_SIZE: usize = 4096;

#[cfg(unix)]
mod os {
    use super::{LockError, FALLBACK_PAGE_SIZE};
    use core::ptr::NonNull;

    pub(super) fn page_size() -> usize {
        // SAFETY: sysconf has no memory-safety preconditions.
        let size = unsafe { libc::sysconf(libc::_SC_PAGESIZE) };
        if size > 0 && (size as usize).is_power_of_two() {
            size as usize
        } else {
            FALLBACK_PAGE_SIZE
        }
    }

    pub(super) fn lock(ptr: NonNull<u8>, len: usize) -> Result<(), LockError> {
        // SAFETY: `ptr` points to a live allocation of at least `len` bytes.
        let rc = unsafe { libc::mlock(ptr.as_ptr() as *const libc::c_void, len) };
        if rc != 0 {
            return Err(LockError::Os {
                len,
                source: std::io::Error::last_os_error(),
            });
        }
        Ok(())
    }

    pub(super) fn unlock(ptr: NonNull<u8>, len: usize) {
        // SAFETY: same live region that was passed to `lock`.
        let rc = unsafe { libc::munlock(ptr.as_ptr() as *const libc::c_void, len) };
        if rc != 0 {
            tracing::trace!(len, "munlock failed");
        }
    }

    #[cfg(target_os = "linux")]
    pub(super) fn exclude_from_core_dump(ptr: NonNull<u8>, len: usize) {
        // SAFETY: page-aligned region of `len` bytes owned by the caller.
        let rc = unsafe { libc::madvise(ptr.as_ptr() as *mut libc::c_void, len, libc::MADV_DONTDUMP) };
        if rc != 0 {
            tracing::trace!(len, "madvise(MADV_DONTDUMP) failed");
        }
    }

    #[cfg(not(target_os = "linux"))]
    pub(super) fn exclude_from_core_dump(_ptr: NonNull<u8>, _len: usize) {}
}

#[cfg(not(unix))]
mod os {
    use super::{LockError, FALLBACK_PAGE_SIZE};
    use core::ptr::NonNull;

    pub(super) fn page_size() -> usize {
        FALLBACK_PAGE_SIZE
    }

    pub(super) fn lock(_ptr: NonNull<u8>, _len: usize) -> Result<(), LockError> {
        Err(LockError::Unsupported)
    }

    pub(super) fn unlock(_ptr: NonNull<u8>, _len: usize) {}

    pub(super) fn exclude_from_core_dump(_ptr: NonNull<u8>, _len: usize) {}
}
