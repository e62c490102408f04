//! Write-until-done loop.
//!
//! Partial writes are retried on the unwritten suffix until the buffer is
//! exhausted, the sink stops making progress, or the stop condition fires.
//! Failure is only ever visible as a short count.

use netprint_core::log_info;

use crate::sink::Sink;
use crate::stop::{Never, Stop};

/// Why the write loop ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StopReason {
    /// Every byte was accepted.
    Complete,
    /// The stop condition fired before the buffer was exhausted.
    Stopped,
    /// The sink accepted zero bytes while bytes remained.
    Stalled,
}

/// Detailed result of [`write_fully_report`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WriteOutcome {
    /// Bytes accepted by the sink, `0..=buf.len()`.
    pub written: usize,
    /// Number of `Sink::write` calls made.
    pub attempts: usize,
    pub reason: StopReason,
}

impl WriteOutcome {
    #[inline]
    pub fn is_complete(&self) -> bool {
        self.reason == StopReason::Complete
    }
}

/// Write as much of `buf` as possible, reporting how the loop ended.
///
/// The stop condition is polled before every attempt, including the first.
/// An empty buffer completes immediately without touching the sink or the
/// stop condition.
pub fn write_fully_report<S, P>(sink: &mut S, buf: &[u8], mut stop: P) -> WriteOutcome
where
    S: Sink + ?Sized,
    P: Stop,
{
    let mut written = 0;
    let mut attempts = 0;

    while written < buf.len() {
        if stop.should_stop() {
            log_info!("write_fully: stopped early");
            return WriteOutcome {
                written,
                attempts,
                reason: StopReason::Stopped,
            };
        }

        let remaining = &buf[written..];
        attempts += 1;
        // Clamp so an over-reporting sink cannot push us past the buffer
        let n = sink.write(remaining).min(remaining.len());
        if n == 0 {
            log_info!("write_fully: sink stalled");
            return WriteOutcome {
                written,
                attempts,
                reason: StopReason::Stalled,
            };
        }
        written += n;
    }

    WriteOutcome {
        written,
        attempts,
        reason: StopReason::Complete,
    }
}

/// Attempt to completely write `buf`, returning the number of bytes written.
///
/// Loops until everything is written, the sink reports no progress, or
/// `stop` returns true. Pass [`Never`] for no early stop. A result smaller
/// than `buf.len()` means the write is incomplete.
#[inline]
pub fn write_fully<S, P>(sink: &mut S, buf: &[u8], stop: P) -> usize
where
    S: Sink + ?Sized,
    P: Stop,
{
    write_fully_report(sink, buf, stop).written
}

/// [`write_fully`] without a stop condition.
#[inline]
pub fn write_all<S: Sink + ?Sized>(sink: &mut S, buf: &[u8]) -> usize {
    write_fully(sink, buf, Never)
}
