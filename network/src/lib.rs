//! netprint: write-until-done helpers for byte sinks.
//!
//! ```ignore
//! use netprint::{write_magic, MacAddress, Never, SerialPort};
//!
//! let mut uart = SerialPort::com1();
//! let mac: MacAddress = "AA:BB:CC:DD:EE:FF".parse()?;
//! if write_magic(&mut uart, mac, Never) < netprint::MAGIC_PACKET_LEN {
//!     // short write: line stalled
//! }
//! ```
//!
//! Every loop here reports failure as a short byte count; callers compare
//! the result against the length they asked for.

#![cfg_attr(not(any(test, feature = "std")), no_std)]

pub mod sink;
pub mod stop;
pub mod types;
pub mod wol;
pub mod write;

// Re-exports - Sinks
pub use sink::{ChunkedSink, SerialConfig, SerialPort, Sink, SliceSink};

#[cfg(feature = "std")]
pub use sink::IoSink;

// Re-exports - Stop conditions
pub use stop::{Attempts, Deadline, Flag, Never, Stop};

// Re-exports - Write loop
pub use write::{write_all, write_fully, write_fully_report, StopReason, WriteOutcome};

// Re-exports - Wake-on-LAN
pub use types::{MacAddress, MacParseError};
pub use wol::{
    magic_packet, parse_magic, send_magic_udp, write_magic, MagicError, WolError, WolTarget,
    MAGIC_PACKET_LEN, WOL_PORT,
};

pub use netprint_core::TimeoutConfig;
