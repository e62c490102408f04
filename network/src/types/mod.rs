//! Shared data types module.

pub mod ethernet;

// Re-exports
pub use ethernet::{MacAddress, MacParseError, ETH_ALEN};
