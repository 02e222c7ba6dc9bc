//! IP address helpers: version detection, IPv6 expansion, binary rendering
//! and CIDR range checks.
//!
//! Every operation is a pure function over string literals and returns
//! [`ArgumentError`] on input it cannot interpret.

pub mod cmd;
pub mod config;
pub mod error;
pub mod models;
pub mod output;
pub mod processing;

pub use error::ArgumentError;
pub use models::{
    Cidr, IpVersion, IPV4, IPV4_ADDRESS_LENGTH, IPV6, IPV6_ADDRESS_LENGTH,
};
pub use processing::{
    expand_ipv6, get_cidr_bits, get_ip_version, in_range, in_subnet, ip2bin,
};
