//! Prefix comparison between CIDR literals.

use crate::error::Result;
use crate::models::{parse_prefix, split_cidr, Cidr};
use crate::processing::get_ip_version;

/// Test whether `value` falls inside `range`.
///
/// Both sides may be bare addresses (full-width prefix) or CIDR literals. The
/// first `min(value.prefix, range.prefix)` bits are compared. Operands of
/// different IP versions never match.
///
/// # Examples
/// ```
/// use ip_helper::in_range;
/// assert!(in_range("192.168.1.1/24", "192.168.0.0/23").unwrap());
/// assert!(!in_range("192.168.1.1/24", "192.168.0.0/24").unwrap());
/// ```
pub fn in_range(value: &str, range: &str) -> Result<bool> {
    let value = Cidr::parse(value)?;
    let range = Cidr::parse(range)?;
    let len = value.prefix.min(range.prefix);
    let result = value.prefix_matches(&range, len);
    log::trace!("in_range({value}, {range}) over {len} bits = {result}");
    Ok(result)
}

/// Test whether `value` is entirely contained in the subnet `range`.
///
/// Stricter than [`in_range`]: the first `range.prefix` bits must match and
/// `value` must be at least as specific as `range`, so a /64 is never inside
/// a /128.
pub fn in_subnet(value: &str, range: &str) -> Result<bool> {
    let value = Cidr::parse(value)?;
    let range = Cidr::parse(range)?;
    Ok(value.prefix >= range.prefix && value.prefix_matches(&range, range.prefix))
}

/// Prefix length of `value`, or the full address width when it has none.
pub fn get_cidr_bits(value: &str) -> Result<u8> {
    let (addr, prefix) = split_cidr(value);
    let max = get_ip_version(addr, false)?.address_length();
    match prefix {
        Some(prefix) => parse_prefix(value, prefix, max),
        None => Ok(max),
    }
}
