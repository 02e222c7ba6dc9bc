//! IP version tag and address widths.

use serde::de;
use serde::{Deserialize, Deserializer, Serialize};

/// Number of bits in an IPv4 address.
pub const IPV4_ADDRESS_LENGTH: u8 = 32;
/// Number of bits in an IPv6 address.
pub const IPV6_ADDRESS_LENGTH: u8 = 128;

/// IP version of an address literal.
///
/// The discriminants are the version numbers, so `IpVersion::V4 as u8 == 4`.
#[derive(Eq, PartialEq, Ord, PartialOrd, Debug, Copy, Clone, Hash)]
#[repr(u8)]
pub enum IpVersion {
    V4 = 4,
    V6 = 6,
}

/// Shorthand for [`IpVersion::V4`].
pub const IPV4: IpVersion = IpVersion::V4;
/// Shorthand for [`IpVersion::V6`].
pub const IPV6: IpVersion = IpVersion::V6;

impl IpVersion {
    /// Width of an address of this version in bits.
    pub const fn address_length(self) -> u8 {
        match self {
            IpVersion::V4 => IPV4_ADDRESS_LENGTH,
            IpVersion::V6 => IPV6_ADDRESS_LENGTH,
        }
    }

    /// The version number, 4 or 6.
    pub const fn number(self) -> u8 {
        self as u8
    }
}

impl std::fmt::Display for IpVersion {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        match self {
            IpVersion::V4 => write!(f, "IPv4"),
            IpVersion::V6 => write!(f, "IPv6"),
        }
    }
}

impl Serialize for IpVersion {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::ser::Serializer,
    {
        serializer.serialize_u8(self.number())
    }
}

impl<'de> Deserialize<'de> for IpVersion {
    fn deserialize<D>(deserializer: D) -> Result<IpVersion, D::Error>
    where
        D: Deserializer<'de>,
    {
        match u8::deserialize(deserializer)? {
            4 => Ok(IpVersion::V4),
            6 => Ok(IpVersion::V6),
            other => Err(de::Error::custom(format!("invalid IP version: {}", other))),
        }
    }
}
