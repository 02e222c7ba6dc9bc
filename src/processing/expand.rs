//! IPv6 expansion to canonical full form.

use crate::error::{ArgumentError, Result};
use crate::models::split_cidr;
use crate::processing::parse_address;
use std::net::{IpAddr, Ipv6Addr};

/// Expand an IPv6 literal to 8 groups of 4 lowercase hex digits.
///
/// `::` runs are filled with `0000` groups and a mapped IPv4 tail becomes its
/// two hex groups. CIDR-qualified input is rejected.
///
/// # Examples
/// ```
/// use ip_helper::expand_ipv6;
/// assert_eq!(
///     expand_ipv6("2001:db0:1:2::7").unwrap(),
///     "2001:0db0:0001:0002:0000:0000:0000:0007"
/// );
/// ```
pub fn expand_ipv6(value: &str) -> Result<String> {
    if let (addr, Some(_)) = split_cidr(value) {
        return match parse_address(addr) {
            Ok(_) => Err(ArgumentError::CidrNotAllowed(value.to_string())),
            Err(e) => Err(e),
        };
    }
    match parse_address(value)? {
        IpAddr::V6(addr) => Ok(expand(&addr)),
        IpAddr::V4(_) => Err(ArgumentError::NotIpv6(value.to_string())),
    }
}

pub(crate) fn expand(addr: &Ipv6Addr) -> String {
    addr.segments()
        .iter()
        .map(|group| format!("{group:04x}"))
        .collect::<Vec<_>>()
        .join(":")
}
