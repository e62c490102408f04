//! Magic packets over a smoltcp UDP socket.
//!
//! The datagram is assembled through the same [`write_magic`] path used for
//! stream sinks, then queued as one UDP payload. The socket must already be
//! bound; transmission happens on the caller's next `Interface::poll`.

use core::fmt;

use netprint_core::log_info;
use smoltcp::socket::udp;
use smoltcp::wire::{IpAddress, IpEndpoint, Ipv4Address};

use super::{write_magic, MAGIC_PACKET_LEN};
use crate::sink::SliceSink;
use crate::stop::Stop;
use crate::types::MacAddress;

/// Conventional Wake-on-LAN port (discard).
pub const WOL_PORT: u16 = 9;

/// Where magic packets are sent.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WolTarget {
    pub endpoint: IpEndpoint,
}

impl WolTarget {
    pub fn new(endpoint: IpEndpoint) -> Self {
        Self { endpoint }
    }

    /// Subnet-directed broadcast, e.g. 192.168.1.255.
    pub fn directed(broadcast: Ipv4Address, port: u16) -> Self {
        Self::new(IpEndpoint::new(IpAddress::Ipv4(broadcast), port))
    }
}

/// Limited broadcast, 255.255.255.255:9.
impl Default for WolTarget {
    fn default() -> Self {
        Self::directed(Ipv4Address::BROADCAST, WOL_PORT)
    }
}

/// Errors from [`send_magic_udp`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WolError {
    /// Packet assembly ended early because the stop condition fired.
    Incomplete {
        /// Bytes assembled before stopping.
        written: usize,
    },
    /// Socket unbound or target endpoint unspecified.
    Unaddressable,
    /// No room in the socket's TX buffer.
    BufferFull,
}

impl From<udp::SendError> for WolError {
    fn from(err: udp::SendError) -> Self {
        match err {
            udp::SendError::Unaddressable => Self::Unaddressable,
            udp::SendError::BufferFull => Self::BufferFull,
        }
    }
}

impl fmt::Display for WolError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Incomplete { written } => write!(
                f,
                "Magic packet incomplete: {} of {} bytes",
                written, MAGIC_PACKET_LEN
            ),
            Self::Unaddressable => write!(f, "UDP socket or target not addressable"),
            Self::BufferFull => write!(f, "UDP TX buffer full"),
        }
    }
}

/// Queue a magic packet for `mac` on `socket`, addressed to `target`.
///
/// Returns the datagram length (`MAGIC_PACKET_LEN`) once queued.
pub fn send_magic_udp<M, P>(
    socket: &mut udp::Socket<'_>,
    mac: M,
    target: &WolTarget,
    stop: P,
) -> Result<usize, WolError>
where
    M: Into<MacAddress>,
    P: Stop,
{
    let mut packet = [0u8; MAGIC_PACKET_LEN];
    let mut sink = SliceSink::new(&mut packet);

    let written = write_magic(&mut sink, mac, stop);
    if written < MAGIC_PACKET_LEN {
        return Err(WolError::Incomplete { written });
    }

    socket.send_slice(sink.written(), target.endpoint)?;
    log_info!("wol: magic packet queued");
    Ok(written)
}
