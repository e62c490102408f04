//! Time and timing module.
//!
//! Tick-based timeouts. On x86_64 the tick source is the TSC, so callers
//! construct a [`TimeoutConfig`] from the calibrated TSC frequency.

/// Timeout configuration derived from a tick frequency.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TimeoutConfig {
    ticks_per_ms: u64,
}

impl TimeoutConfig {
    /// Create from tick frequency in Hz.
    ///
    /// Frequencies below 1 kHz are rounded up to one tick per millisecond.
    pub fn new(tick_freq: u64) -> Self {
        Self {
            ticks_per_ms: (tick_freq / 1_000).max(1),
        }
    }

    /// Budget for writing one magic packet (1 second)
    #[inline]
    pub fn magic_send(&self) -> u64 {
        self.ms_to_ticks(1_000)
    }

    /// Budget for draining a buffer to the serial line (100ms)
    #[inline]
    pub fn serial_write(&self) -> u64 {
        self.ms_to_ticks(100)
    }

    /// Convert milliseconds to ticks
    #[inline]
    pub fn ms_to_ticks(&self, ms: u64) -> u64 {
        ms.saturating_mul(self.ticks_per_ms)
    }

    /// Convert ticks to milliseconds
    #[inline]
    pub fn ticks_to_ms(&self, ticks: u64) -> u64 {
        ticks / self.ticks_per_ms
    }
}
