//! Shared runtime services for the netprint crates.
//!
//! - [`logger`]: fixed-size ring of static log messages
//! - [`time`]: tick-based timeout configuration
//! - [`tsc`]: the default tick source

#![cfg_attr(not(test), no_std)]

pub mod logger;
pub mod time;
pub mod tsc;

pub use time::TimeoutConfig;
pub use tsc::read_tsc;
