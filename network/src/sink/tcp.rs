//! smoltcp TCP socket as a [`Sink`].
//!
//! `send_slice` only enqueues into the socket's TX buffer; bytes leave the
//! host when the caller polls its `Interface`. A full buffer or a socket
//! that cannot send reports zero progress.

use smoltcp::socket::tcp;

use super::Sink;

impl Sink for tcp::Socket<'_> {
    fn write(&mut self, buf: &[u8]) -> usize {
        self.send_slice(buf).unwrap_or(0)
    }

    fn available_for_write(&self) -> Option<usize> {
        if self.may_send() {
            Some(self.send_capacity() - self.send_queue())
        } else {
            Some(0)
        }
    }
}
