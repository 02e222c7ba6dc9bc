//! Address literal with an effective CIDR prefix.
//!
//! Provides [`Cidr`], the parsed form of `addr` or `addr/prefix` for both IP
//! versions. A bare address gets the full width of its version as prefix.

use crate::error::{ArgumentError, Result};
use crate::models::version::IpVersion;
use crate::processing::{get_ip_version, parse_address};
use serde::de;
use serde::{Deserialize, Deserializer, Serialize};
use std::net::{IpAddr, Ipv4Addr, Ipv6Addr};
use std::str::FromStr;

/// Split a literal into its address part and optional `/prefix` part.
///
/// The prefix text is returned as-is, without any range or syntax check.
pub fn split_cidr(value: &str) -> (&str, Option<&str>) {
    match value.split_once('/') {
        Some((addr, prefix)) => (addr, Some(prefix)),
        None => (value, None),
    }
}

/// Parse the prefix text of `value`, checking it fits `max` bits.
pub fn parse_prefix(value: &str, prefix: &str, max: u8) -> Result<u8> {
    let invalid = || ArgumentError::InvalidPrefix {
        value: value.to_string(),
        prefix: prefix.to_string(),
        max,
    };
    // u8::from_str accepts a leading '+'
    if prefix.is_empty() || !prefix.bytes().all(|b| b.is_ascii_digit()) {
        return Err(invalid());
    }
    match u8::from_str(prefix) {
        Ok(len) if len <= max => Ok(len),
        _ => Err(invalid()),
    }
}

/// IPv4 or IPv6 address with a prefix length.
#[derive(Eq, PartialEq, Ord, PartialOrd, Debug, Copy, Clone, Hash)]
pub struct Cidr {
    /// The address as written, host bits included.
    pub addr: IpAddr,
    /// Prefix length, 0..=32 for IPv4 and 0..=128 for IPv6.
    pub prefix: u8,
}

impl Cidr {
    /// Parse `addr` or `addr/prefix` (e.g. "10.0.0.0/24", "fa01::1").
    ///
    /// # Examples
    /// ```
    /// use ip_helper::models::Cidr;
    /// let cidr = Cidr::parse("fa01::/64").unwrap();
    /// assert_eq!(cidr.prefix, 64);
    /// assert_eq!(Cidr::parse("10.1.2.3").unwrap().prefix, 32);
    /// ```
    pub fn parse(value: &str) -> Result<Cidr> {
        let (addr, prefix) = split_cidr(value);
        get_ip_version(addr, false)?;
        let addr = parse_address(addr)?;
        let max = version_of(addr).address_length();
        let prefix = match prefix {
            Some(prefix) => parse_prefix(value, prefix, max)?,
            None => max,
        };
        Ok(Cidr { addr, prefix })
    }

    pub fn version(&self) -> IpVersion {
        version_of(self.addr)
    }

    /// Address bits, right-aligned in a u128 (IPv4 uses the low 32 bits).
    pub fn bits(&self) -> u128 {
        match self.addr {
            IpAddr::V4(addr) => u32::from(addr) as u128,
            IpAddr::V6(addr) => u128::from(addr),
        }
    }

    /// True when the first `len` bits of both addresses are equal.
    ///
    /// Always false across IP versions.
    pub fn prefix_matches(&self, other: &Cidr, len: u8) -> bool {
        if self.version() != other.version() {
            return false;
        }
        let shift = u32::from(self.version().address_length() - len.min(self.max_len()));
        self.bits().checked_shr(shift).unwrap_or(0) == other.bits().checked_shr(shift).unwrap_or(0)
    }

    /// Network address: the address with its host bits cleared.
    ///
    /// A prefix wider than the address is treated as the full width.
    pub fn network(&self) -> IpAddr {
        let shift = u32::from(self.max_len() - self.prefix.min(self.max_len()));
        let bits = self
            .bits()
            .checked_shr(shift)
            .and_then(|b| b.checked_shl(shift))
            .unwrap_or(0);
        match self.addr {
            IpAddr::V4(_) => IpAddr::V4(Ipv4Addr::from(bits as u32)),
            IpAddr::V6(_) => IpAddr::V6(Ipv6Addr::from(bits)),
        }
    }

    fn max_len(&self) -> u8 {
        self.version().address_length()
    }
}

fn version_of(addr: IpAddr) -> IpVersion {
    match addr {
        IpAddr::V4(_) => IpVersion::V4,
        IpAddr::V6(_) => IpVersion::V6,
    }
}

impl FromStr for Cidr {
    type Err = ArgumentError;

    fn from_str(s: &str) -> Result<Cidr> {
        Cidr::parse(s)
    }
}

impl std::fmt::Display for Cidr {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(f, "{}/{}", self.addr, self.prefix)
    }
}

impl Serialize for Cidr {
    fn serialize<S>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error>
    where
        S: serde::ser::Serializer,
    {
        serializer.serialize_str(&self.to_string())
    }
}

impl<'de> Deserialize<'de> for Cidr {
    fn deserialize<D>(deserializer: D) -> std::result::Result<Cidr, D::Error>
    where
        D: Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        Cidr::parse(&s).map_err(|e| de::Error::custom(format!("invalid CIDR {}: {}", s, e)))
    }
}
