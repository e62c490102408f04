//! TSC (Time Stamp Counter) reads.
//!
//! TSC reads are always safe. Deadlines assume an invariant TSC.

/// Read TSC (non-serializing).
///
/// May be reordered with surrounding instructions; fine for timeouts.
#[cfg(target_arch = "x86_64")]
#[inline]
pub fn read_tsc() -> u64 {
    unsafe { core::arch::x86_64::_rdtsc() }
}

/// Stub for non-x86_64 targets.
#[cfg(not(target_arch = "x86_64"))]
#[inline]
pub fn read_tsc() -> u64 {
    0
}
