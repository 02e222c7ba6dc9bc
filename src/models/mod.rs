//! Address data types.
//!
//! - [`IpVersion`] - IP version tag with the `IPV4`/`IPV6` constants
//! - [`Cidr`] - Address with an effective prefix length

mod cidr;
mod version;

// Re-export public types
pub use cidr::{parse_prefix, split_cidr, Cidr};
pub use version::{IpVersion, IPV4, IPV4_ADDRESS_LENGTH, IPV6, IPV6_ADDRESS_LENGTH};
