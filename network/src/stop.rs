//! Stop conditions for the write loop.
//!
//! A [`Stop`] is polled before every write attempt; once it returns true the
//! loop gives up and reports what was written so far. It is the caller's
//! cancellation hook: a flag flipped by another thread or an interrupt
//! handler, a tick deadline, an attempt budget, or any closure.

use core::sync::atomic::{AtomicBool, Ordering};

use netprint_core::TimeoutConfig;

/// Early-exit condition checked before each write attempt.
pub trait Stop {
    fn should_stop(&mut self) -> bool;
}

impl<F: FnMut() -> bool> Stop for F {
    #[inline]
    fn should_stop(&mut self) -> bool {
        self()
    }
}

/// Never stops early. Stands in for "no predicate".
#[derive(Debug, Clone, Copy, Default)]
pub struct Never;

impl Stop for Never {
    #[inline]
    fn should_stop(&mut self) -> bool {
        false
    }
}

/// Stops once a shared flag is raised.
#[derive(Debug, Clone, Copy)]
pub struct Flag<'a>(pub &'a AtomicBool);

impl Stop for Flag<'_> {
    #[inline]
    fn should_stop(&mut self) -> bool {
        self.0.load(Ordering::Acquire)
    }
}

/// Stops when a monotonic tick clock reaches the expiry tick.
pub struct Deadline<C> {
    clock: C,
    expires_at: u64,
}

impl<C: FnMut() -> u64> Deadline<C> {
    /// Expire `ticks` after the clock's current reading.
    pub fn after(mut clock: C, ticks: u64) -> Self {
        let now = clock();
        Self {
            clock,
            expires_at: now.saturating_add(ticks),
        }
    }

    /// Expire `ms` milliseconds from now, using `config` for tick conversion.
    pub fn after_ms(clock: C, config: &TimeoutConfig, ms: u64) -> Self {
        Self::after(clock, config.ms_to_ticks(ms))
    }

    pub fn expires_at(&self) -> u64 {
        self.expires_at
    }
}

/// TSC-backed deadlines. Only x86_64 has a running tick source; elsewhere
/// `read_tsc` is stuck at 0 and such a deadline would never fire, so these
/// constructors do not exist there. Use [`Deadline::after`] with a platform
/// clock instead.
#[cfg(target_arch = "x86_64")]
impl Deadline<fn() -> u64> {
    /// Default budget for one magic packet.
    pub fn magic_send(config: &TimeoutConfig) -> Self {
        Self::after(netprint_core::read_tsc as fn() -> u64, config.magic_send())
    }

    /// Default budget for draining a buffer to a serial line.
    pub fn serial_write(config: &TimeoutConfig) -> Self {
        Self::after(netprint_core::read_tsc as fn() -> u64, config.serial_write())
    }
}

impl<C: FnMut() -> u64> Stop for Deadline<C> {
    fn should_stop(&mut self) -> bool {
        (self.clock)() >= self.expires_at
    }
}

/// Allows a fixed number of write attempts, then stops.
#[derive(Debug, Clone, Copy)]
pub struct Attempts {
    remaining: usize,
}

impl Attempts {
    pub fn new(max: usize) -> Self {
        Self { remaining: max }
    }
}

impl Stop for Attempts {
    fn should_stop(&mut self) -> bool {
        if self.remaining == 0 {
            return true;
        }
        self.remaining -= 1;
        false
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use core::cell::Cell;

    #[test]
    fn test_never() {
        let mut stop = Never;
        assert!(!stop.should_stop());
        assert!(!stop.should_stop());
    }

    #[test]
    fn test_closure() {
        let mut polls = 0;
        let mut stop = || {
            polls += 1;
            polls > 2
        };
        assert!(!stop.should_stop());
        assert!(!stop.should_stop());
        assert!(stop.should_stop());
    }

    #[test]
    fn test_flag() {
        let raised = AtomicBool::new(false);
        let mut stop = Flag(&raised);
        assert!(!stop.should_stop());
        raised.store(true, Ordering::Release);
        assert!(stop.should_stop());
    }

    #[test]
    fn test_deadline_fires_at_expiry() {
        let now = Cell::new(100u64);
        let mut stop = Deadline::after(|| now.get(), 50);
        assert_eq!(stop.expires_at(), 150);
        assert!(!stop.should_stop());
        now.set(149);
        assert!(!stop.should_stop());
        now.set(150);
        assert!(stop.should_stop());
    }

    #[test]
    fn test_deadline_from_ms() {
        let cfg = TimeoutConfig::new(1_000_000);
        let stop = Deadline::after_ms(|| 0, &cfg, 20);
        assert_eq!(stop.expires_at(), 20_000);
    }

    #[cfg(target_arch = "x86_64")]
    #[test]
    fn test_tsc_deadlines_use_config_budgets() {
        let cfg = TimeoutConfig::new(1_000_000);
        let magic = Deadline::magic_send(&cfg);
        assert!(magic.expires_at() >= cfg.magic_send());
        let serial = Deadline::serial_write(&cfg);
        assert!(serial.expires_at() >= cfg.serial_write());
    }

    #[cfg(target_arch = "x86_64")]
    #[test]
    fn test_serial_deadline_bounds_write() {
        use crate::sink::{SerialConfig, SerialPort};

        // Top-of-I/O-space base: the port refuses without touching hardware
        let mut port = SerialPort::new(SerialConfig {
            base: 0xFFFF,
            ready_retries: 1,
        });
        let cfg = TimeoutConfig::new(1_000_000_000);
        let written = crate::write_fully(&mut port, b"boot", Deadline::serial_write(&cfg));
        assert_eq!(written, 0);
    }

    #[test]
    fn test_deadline_saturates() {
        let stop = Deadline::after(|| u64::MAX - 1, 10);
        assert_eq!(stop.expires_at(), u64::MAX);
    }

    #[test]
    fn test_attempts() {
        let mut stop = Attempts::new(2);
        assert!(!stop.should_stop());
        assert!(!stop.should_stop());
        assert!(stop.should_stop());
        assert!(Attempts::new(0).should_stop());
    }
}
