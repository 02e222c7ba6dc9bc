//! Address operations.
//!
//! This module contains the address logic:
//! - [`version`] - IP version detection and strict parsing
//! - [`expand`] - Canonical IPv6 expansion
//! - [`binary`] - Bit string rendering
//! - [`range`] - CIDR prefix comparison

mod binary;
mod expand;
mod range;
mod version;

// Re-export public functions
pub use binary::ip2bin;
pub use expand::expand_ipv6;
pub use range::{get_cidr_bits, in_range, in_subnet};
pub use version::{get_ip_version, parse_address};
