//! `std::io::Write` adapter (feature `std`).

use std::io::{ErrorKind, Write};

use super::Sink;

/// Hosted writer as a [`Sink`].
///
/// `Interrupted` is retried within the same call; any other error is
/// reported as zero progress and kept for inspection.
pub struct IoSink<W> {
    inner: W,
    last_error: Option<ErrorKind>,
}

impl<W: Write> IoSink<W> {
    pub fn new(inner: W) -> Self {
        Self {
            inner,
            last_error: None,
        }
    }

    /// Kind of the most recent write or flush error, if any.
    pub fn last_error(&self) -> Option<ErrorKind> {
        self.last_error
    }

    pub fn get_ref(&self) -> &W {
        &self.inner
    }

    pub fn into_inner(self) -> W {
        self.inner
    }
}

impl<W: Write> Sink for IoSink<W> {
    fn write(&mut self, buf: &[u8]) -> usize {
        loop {
            match self.inner.write(buf) {
                Ok(n) => return n,
                Err(e) if e.kind() == ErrorKind::Interrupted => continue,
                Err(e) => {
                    self.last_error = Some(e.kind());
                    return 0;
                }
            }
        }
    }

    fn flush(&mut self) {
        if let Err(e) = self.inner.flush() {
            self.last_error = Some(e.kind());
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io;

    struct Flaky {
        interrupts: usize,
        fail: bool,
    }

    impl Write for Flaky {
        fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
            if self.interrupts > 0 {
                self.interrupts -= 1;
                return Err(io::Error::from(ErrorKind::Interrupted));
            }
            if self.fail {
                return Err(io::Error::from(ErrorKind::BrokenPipe));
            }
            Ok(buf.len())
        }

        fn flush(&mut self) -> io::Result<()> {
            if self.fail {
                return Err(io::Error::from(ErrorKind::TimedOut));
            }
            Ok(())
        }
    }

    #[test]
    fn test_vec_writer() {
        let mut sink = IoSink::new(Vec::new());
        assert_eq!(crate::write_all(&mut sink, b"wake"), 4);
        assert_eq!(sink.get_ref().as_slice(), b"wake");
        assert_eq!(sink.last_error(), None);
    }

    #[test]
    fn test_interrupted_is_retried() {
        let mut sink = IoSink::new(Flaky {
            interrupts: 3,
            fail: false,
        });
        assert_eq!(sink.write(&[0; 5]), 5);
    }

    #[test]
    fn test_error_is_zero_progress() {
        let mut sink = IoSink::new(Flaky {
            interrupts: 0,
            fail: true,
        });
        assert_eq!(crate::write_all(&mut sink, &[0; 5]), 0);
        assert_eq!(sink.last_error(), Some(ErrorKind::BrokenPipe));
    }

    #[test]
    fn test_flush_error_is_recorded() {
        let mut ok = IoSink::new(Flaky {
            interrupts: 0,
            fail: false,
        });
        ok.flush();
        assert_eq!(ok.last_error(), None);

        let mut failing = IoSink::new(Flaky {
            interrupts: 0,
            fail: true,
        });
        failing.flush();
        assert_eq!(failing.last_error(), Some(ErrorKind::TimedOut));
    }
}
