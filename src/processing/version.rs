//! IP version detection and strict address parsing.

use crate::error::{ArgumentError, Result};
use crate::models::IpVersion;
use std::net::{IpAddr, Ipv4Addr, Ipv6Addr};
use std::str::FromStr;

/// Shortest literal accepted at all ("::").
const MIN_LENGTH: usize = 2;
/// Shortest literal accepted as IPv4 ("0.0.0.0").
const MIN_IPV4_LENGTH: usize = 7;

/// Determine the IP version of `value`, which may carry a `/prefix` suffix.
///
/// Without `validate` only the shape is looked at: anything with a `:` is
/// IPv6, everything else IPv4, and a CIDR suffix is tolerated unchecked.
/// A literal with neither `:` nor `.` (e.g. "abcdefgh") is therefore
/// classified as IPv4; pass `validate` to reject it.
/// With `validate` the literal must be a bare address that fully parses.
///
/// # Examples
/// ```
/// use ip_helper::{get_ip_version, IPV4, IPV6};
/// assert_eq!(get_ip_version("192.168.0.1/24", false).unwrap(), IPV4);
/// assert!(get_ip_version("192.168.0.1/24", true).is_err());
/// assert_eq!(get_ip_version("::ffff:192.168.0.2", true).unwrap(), IPV6);
/// ```
pub fn get_ip_version(value: &str, validate: bool) -> Result<IpVersion> {
    if value.is_empty() {
        return Err(ArgumentError::Empty);
    }
    if value.len() < MIN_LENGTH {
        return Err(ArgumentError::TooShort(value.to_string()));
    }
    let pre_version = if value.contains(':') {
        IpVersion::V6
    } else {
        IpVersion::V4
    };
    if pre_version == IpVersion::V4 && value.len() < MIN_IPV4_LENGTH {
        return Err(ArgumentError::TooShort(value.to_string()));
    }
    if !validate {
        log::trace!("get_ip_version({value}) = {pre_version} (unvalidated)");
        return Ok(pre_version);
    }
    if value.contains('/') {
        return Err(ArgumentError::CidrNotAllowed(value.to_string()));
    }
    let version = match parse_address(value)? {
        IpAddr::V4(_) => IpVersion::V4,
        IpAddr::V6(_) => IpVersion::V6,
    };
    log::trace!("get_ip_version({value}) = {version}");
    Ok(version)
}

/// Parse a bare address literal, rejecting anything outside the address grammar.
///
/// Accepts dotted quads and every colon-hex form including `::` compression
/// and an embedded IPv4 tail.
pub fn parse_address(value: &str) -> Result<IpAddr> {
    let unrecognized = || ArgumentError::Unrecognized(value.to_string());
    if value.contains(':') {
        let addr = Ipv6Addr::from_str(value).map_err(|_| unrecognized())?;
        Ok(IpAddr::V6(addr))
    } else {
        let addr = Ipv4Addr::from_str(value).map_err(|_| unrecognized())?;
        Ok(IpAddr::V4(addr))
    }
}
