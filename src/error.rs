//! Argument error raised by every address operation.

use thiserror::Error;

/// Errors returned when an address literal cannot be used by an operation.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ArgumentError {
    #[error("Unrecognized address: empty string")]
    Empty,

    #[error("Unrecognized address {0}: too short")]
    TooShort(String),

    #[error("Unrecognized address {0}")]
    Unrecognized(String),

    #[error("CIDR suffix not allowed: {0}")]
    CidrNotAllowed(String),

    #[error("Invalid prefix length /{prefix} for {value} (max {max})")]
    InvalidPrefix {
        value: String,
        prefix: String,
        max: u8,
    },

    #[error("Not an IPv6 address: {0}")]
    NotIpv6(String),
}

/// Result alias for address operations.
pub type Result<T> = std::result::Result<T, ArgumentError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_messages() {
        assert_eq!(
            ArgumentError::Empty.to_string(),
            "Unrecognized address: empty string"
        );
        assert_eq!(
            ArgumentError::TooShort("1".into()).to_string(),
            "Unrecognized address 1: too short"
        );
        let err = ArgumentError::InvalidPrefix {
            value: "10.0.0.0/33".into(),
            prefix: "33".into(),
            max: 32,
        };
        assert_eq!(
            err.to_string(),
            "Invalid prefix length /33 for 10.0.0.0/33 (max 32)"
        );
    }
}
