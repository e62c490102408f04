//! Wake-on-LAN magic packets.
//!
//! Layout (102 bytes):
//!
//! ```text
//! ┌──────────────────┬────────────────────────────────────────┐
//! │ FF FF FF FF FF FF│ MAC MAC MAC ... (16 copies, 6 B each)  │
//! └──────────────────┴────────────────────────────────────────┘
//! ```

pub mod udp;

use core::fmt;

use crate::sink::Sink;
use crate::stop::Stop;
use crate::types::{MacAddress, ETH_ALEN};
use crate::write::write_fully;

pub use udp::{send_magic_udp, WolError, WolTarget, WOL_PORT};

/// Length of the synchronization stream.
pub const SYNC_LEN: usize = 6;

/// Number of MAC copies after the synchronization stream.
pub const MAC_REPEAT: usize = 16;

/// Total magic packet length.
pub const MAGIC_PACKET_LEN: usize = SYNC_LEN + MAC_REPEAT * ETH_ALEN;

/// Build the magic packet for `mac`.
pub fn magic_packet(mac: &MacAddress) -> [u8; MAGIC_PACKET_LEN] {
    let mut packet = [0xFFu8; MAGIC_PACKET_LEN];
    for copy in packet[SYNC_LEN..].chunks_exact_mut(ETH_ALEN) {
        copy.copy_from_slice(mac.as_bytes());
    }
    packet
}

/// Write the magic packet for `mac` to `sink`.
///
/// The packet is built fresh and handed to [`write_fully`] with `stop`;
/// the result is its byte count, `MAGIC_PACKET_LEN` on success.
pub fn write_magic<S, M, P>(sink: &mut S, mac: M, stop: P) -> usize
where
    S: Sink + ?Sized,
    M: Into<MacAddress>,
    P: Stop,
{
    let packet = magic_packet(&mac.into());
    write_fully(sink, &packet, stop)
}

/// Validate a received payload and return the MAC it targets.
///
/// Anything past the first `MAGIC_PACKET_LEN` bytes (e.g. a SecureOn
/// password) is ignored.
pub fn parse_magic(payload: &[u8]) -> Result<MacAddress, MagicError> {
    if payload.len() < MAGIC_PACKET_LEN {
        return Err(MagicError::TooShort {
            provided: payload.len(),
        });
    }

    if payload[..SYNC_LEN].iter().any(|&b| b != 0xFF) {
        return Err(MagicError::BadSync);
    }

    let body = &payload[SYNC_LEN..MAGIC_PACKET_LEN];
    let first = &body[..ETH_ALEN];
    if body.chunks_exact(ETH_ALEN).any(|copy| copy != first) {
        return Err(MagicError::MacMismatch);
    }

    let mut octets = [0u8; ETH_ALEN];
    octets.copy_from_slice(first);
    Ok(MacAddress(octets))
}

/// Magic packet validation errors.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MagicError {
    /// Fewer than `MAGIC_PACKET_LEN` bytes.
    TooShort {
        /// Provided payload size.
        provided: usize,
    },
    /// First six bytes are not all 0xFF.
    BadSync,
    /// MAC copies differ.
    MacMismatch,
}

impl fmt::Display for MagicError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::TooShort { provided } => write!(
                f,
                "Magic packet too short: {} bytes, need {}",
                provided, MAGIC_PACKET_LEN
            ),
            Self::BadSync => write!(f, "Magic packet sync stream is not 6 x 0xFF"),
            Self::MacMismatch => write!(f, "Magic packet MAC copies differ"),
        }
    }
}
