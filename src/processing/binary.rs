//! Fixed-width bit string rendering of addresses.

use crate::error::Result;
use crate::processing::{get_ip_version, parse_address};
use std::net::IpAddr;

/// Render a bare address as a string of '0'/'1', most significant bit first.
///
/// The result is always 32 characters for IPv4 and 128 for IPv6. Malformed
/// octets or groups, and CIDR suffixes, are argument errors.
///
/// # Examples
/// ```
/// use ip_helper::ip2bin;
/// assert_eq!(ip2bin("192.168.1.1").unwrap(), "11000000101010000000000100000001");
/// ```
pub fn ip2bin(value: &str) -> Result<String> {
    let version = get_ip_version(value, false)?;
    let bits = match parse_address(value)? {
        IpAddr::V4(addr) => format!("{:032b}", u32::from(addr)),
        IpAddr::V6(addr) => format!("{:0128b}", u128::from(addr)),
    };
    debug_assert_eq!(bits.len(), usize::from(version.address_length()));
    Ok(bits)
}
