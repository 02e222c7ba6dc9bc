//! Integration tests for ip-helper
//!
//! These tests run the public operations over the reference address tables.

use ip_helper::{
    expand_ipv6, get_ip_version, in_range, in_subnet, ip2bin, ArgumentError, IpVersion, IPV4,
    IPV6,
};

#[test]
fn test_get_ip_version_table() {
    // (value, validate, expected version or None for an argument error)
    let cases: Vec<(&str, bool, Option<IpVersion>)> = vec![
        ("", false, None),
        ("", true, None),
        ("1", false, None),
        ("1", true, None),
        ("0.0.0.0", false, Some(IPV4)),
        ("0.0.0.", false, None),
        ("192.168.0.1", false, Some(IPV4)),
        ("255.255.255.255", false, Some(IPV4)),
        ("255.255.255.255", true, Some(IPV4)),
        ("255.255.255.256", true, None),
        ("192.168.0.1/24", false, Some(IPV4)),
        ("192.168.0.1/24", true, None),
        ("fb01::1", false, Some(IPV6)),
        ("fb01::1/24", false, Some(IPV6)),
        ("fb01::1/24", true, None),
        ("::", false, Some(IPV6)),
        ("::", true, Some(IPV6)),
        ("::ffff:192.168.0.2", false, Some(IPV6)),
        ("::ffff:192.168.0.2", true, Some(IPV6)),
        ("fa01:0000:0000:0000:0000:0000:0000:0001", false, Some(IPV6)),
        ("fa01:0000:0000:0000:0000:0000:0000:0001", true, Some(IPV6)),
    ];

    for (value, validate, expected) in cases {
        let result = get_ip_version(value, validate);
        match expected {
            Some(version) => assert_eq!(result, Ok(version), "{value} validate={validate}"),
            None => assert!(result.is_err(), "{value} validate={validate} should fail"),
        }
    }
}

#[test]
fn test_expand_ipv6_table() {
    assert_eq!(
        expand_ipv6("fa01::1").unwrap(),
        "fa01:0000:0000:0000:0000:0000:0000:0001"
    );
    assert_eq!(
        expand_ipv6("2001:db0:1:2::7").unwrap(),
        "2001:0db0:0001:0002:0000:0000:0000:0007"
    );
    assert!(matches!(
        expand_ipv6("fa01::1/64"),
        Err(ArgumentError::CidrNotAllowed(_))
    ));
}

#[test]
fn test_ip2bin_table() {
    let fa01 = "11111010000000010000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000001";
    let cases = vec![
        ("192.168.1.1", "11000000101010000000000100000001"),
        ("fa01:0000:0000:0000:0000:0000:0000:0001", fa01),
        ("fa01::1", fa01),
        ("2620:0:2d0:200::7", "00100110001000000000000000000000000000101101000000000010000000000000000000000000000000000000000000000000000000000000000000000111"),
    ];
    for (value, expected) in cases {
        assert_eq!(ip2bin(value).unwrap(), expected, "{value}");
    }
}

#[test]
fn test_in_range_table() {
    let cases = vec![
        ("192.168.1.1/24", "192.168.0.0/23", true),
        ("192.168.1.1/24", "192.168.0.0/24", false),
        ("192.168.1.1/24", "0.0.0.0/0", true),
        ("192.168.1.1/32", "192.168.1.1", true),
        ("192.168.1.1/32", "192.168.1.1/32", true),
        ("192.168.1.1", "192.168.1.1/32", true),
        ("fa01::1/128", "fa01::/64", true),
        ("fa01::1/128", "fa01::1/128", true),
        ("2620:0:0:0:0:0:0:0", "2620:0:2d0:200::7/32", true),
    ];
    for (value, range, expected) in cases {
        assert_eq!(in_range(value, range).unwrap(), expected, "{value} in {range}");
    }
}

#[test]
fn test_in_subnet_table() {
    let cases = vec![
        ("192.168.1.1/24", "192.168.0.0/23", true),
        ("192.168.1.1/24", "192.168.0.0/24", false),
        ("192.168.1.1/24", "0.0.0.0/0", true),
        ("192.168.1.1", "192.168.1.1/32", true),
        ("fa01::1/128", "fa01::/64", true),
        ("fa01::1/64", "fa01::1/128", false),
        ("2620:0:0:0:0:0:0:0", "2620:0:2d0:200::7/32", true),
    ];
    for (value, range, expected) in cases {
        assert_eq!(in_subnet(value, range).unwrap(), expected, "{value} in {range}");
    }
}

#[test]
fn test_zero_prefix_matches_whole_version() {
    for addr in ["1.2.3.4", "255.255.255.255", "10.0.0.0/8"] {
        assert!(in_range("0.0.0.0/0", addr).unwrap(), "{addr}");
        assert!(in_range(addr, "0.0.0.0/0").unwrap(), "{addr}");
    }
    for addr in ["fa01::1", "::ffff:1.2.3.4", "2620:0:2d0:200::7/32"] {
        assert!(in_range(addr, "::/0").unwrap(), "{addr}");
    }
}

#[test]
fn test_binary_widths() {
    for addr in ["0.0.0.0", "10.1.2.3", "255.255.255.255"] {
        assert_eq!(get_ip_version(addr, false).unwrap(), IPV4);
        assert_eq!(ip2bin(addr).unwrap().len(), 32);
    }
    for addr in ["::", "fa01::1", "::ffff:192.168.0.2", "1:2:3:4:5:6:7:8"] {
        assert_eq!(get_ip_version(addr, false).unwrap(), IPV6);
        assert_eq!(ip2bin(addr).unwrap().len(), 128);
        assert_eq!(
            ip2bin(&expand_ipv6(addr).unwrap()).unwrap(),
            ip2bin(addr).unwrap()
        );
    }
}
