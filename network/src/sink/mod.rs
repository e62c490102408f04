//! Output sink abstraction.
//!
//! # Architecture
//!
//! ```text
//! ┌────────────────────────────────────────┐
//! │   write_fully / write_magic            │
//! │   (loop until done, stalled, stopped)  │
//! └───────────────────┬────────────────────┘
//!                     │ Sink::write (partial)
//!                     ▼
//! ┌──────────┬──────────┬──────────┬──────────┐
//! │ SliceSink│SerialPort│ tcp      │ IoSink   │
//! │ (memory) │ (UART)   │ (smoltcp)│ (std)    │
//! └──────────┴──────────┴──────────┴──────────┘
//! ```
//!
//! A sink is always borrowed by the writer loop, never owned.

pub mod serial;
pub mod tcp;

#[cfg(feature = "std")]
pub mod io;

pub use serial::{SerialConfig, SerialPort};

#[cfg(feature = "std")]
pub use io::IoSink;

/// Byte-accepting destination with a bounded write.
pub trait Sink {
    /// Write up to `buf.len()` bytes, returning how many were accepted.
    ///
    /// Returning 0 for a non-empty `buf` means the sink cannot make progress
    /// right now.
    fn write(&mut self, buf: &[u8]) -> usize;

    /// Bytes the sink can take without blocking, if known.
    fn available_for_write(&self) -> Option<usize> {
        None
    }

    /// Push out anything the sink buffers internally.
    fn flush(&mut self) {}
}

impl<S: Sink + ?Sized> Sink for &mut S {
    #[inline]
    fn write(&mut self, buf: &[u8]) -> usize {
        (**self).write(buf)
    }

    #[inline]
    fn available_for_write(&self) -> Option<usize> {
        (**self).available_for_write()
    }

    #[inline]
    fn flush(&mut self) {
        (**self).flush()
    }
}

/// Shared sink: the lock is held for one write attempt at a time, so other
/// users may interleave between attempts.
impl<S: Sink + ?Sized> Sink for &spin::Mutex<S> {
    fn write(&mut self, buf: &[u8]) -> usize {
        self.lock().write(buf)
    }

    fn available_for_write(&self) -> Option<usize> {
        self.lock().available_for_write()
    }

    fn flush(&mut self) {
        self.lock().flush()
    }
}

// ═══════════════════════════════════════════════════════════════════════════
// IN-MEMORY SINKS
// ═══════════════════════════════════════════════════════════════════════════

/// Sink over a caller-provided byte slice.
///
/// Accepts bytes until the slice is full, then reports zero progress.
pub struct SliceSink<'a> {
    buffer: &'a mut [u8],
    len: usize,
}

impl<'a> SliceSink<'a> {
    /// Wrap an empty buffer.
    pub fn new(buffer: &'a mut [u8]) -> Self {
        Self { buffer, len: 0 }
    }

    /// Bytes written so far.
    pub fn written(&self) -> &[u8] {
        &self.buffer[..self.len]
    }

    /// Number of bytes written so far.
    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Total capacity of the underlying buffer.
    pub fn capacity(&self) -> usize {
        self.buffer.len()
    }

    /// Forget everything written; capacity is reused.
    pub fn clear(&mut self) {
        self.len = 0;
    }
}

impl Sink for SliceSink<'_> {
    fn write(&mut self, buf: &[u8]) -> usize {
        let n = buf.len().min(self.buffer.len() - self.len);
        self.buffer[self.len..self.len + n].copy_from_slice(&buf[..n]);
        self.len += n;
        n
    }

    fn available_for_write(&self) -> Option<usize> {
        Some(self.buffer.len() - self.len)
    }
}

/// Caps every write of the inner sink at `chunk` bytes.
///
/// Models transports that drain a small FIFO per call (UART, small TX
/// windows).
pub struct ChunkedSink<S> {
    inner: S,
    chunk: usize,
    calls: usize,
}

impl<S: Sink> ChunkedSink<S> {
    /// Wrap `inner`, accepting at most `chunk` bytes per write.
    pub fn new(inner: S, chunk: usize) -> Self {
        Self {
            inner,
            chunk,
            calls: 0,
        }
    }

    /// Number of write calls seen so far.
    pub fn calls(&self) -> usize {
        self.calls
    }

    pub fn inner(&self) -> &S {
        &self.inner
    }

    pub fn into_inner(self) -> S {
        self.inner
    }
}

impl<S: Sink> Sink for ChunkedSink<S> {
    fn write(&mut self, buf: &[u8]) -> usize {
        self.calls += 1;
        let n = buf.len().min(self.chunk);
        self.inner.write(&buf[..n])
    }

    fn available_for_write(&self) -> Option<usize> {
        self.inner.available_for_write().map(|n| n.min(self.chunk))
    }

    fn flush(&mut self) {
        self.inner.flush()
    }
}
