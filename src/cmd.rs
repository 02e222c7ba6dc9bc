//! Command dispatch for the `ip-helper` binary.

use crate::config::{Config, OutputFormat};
use crate::output::{render, Outcome};
use crate::processing::{
    expand_ipv6, get_cidr_bits, get_ip_version, in_range, in_subnet, ip2bin,
};
use std::error::Error;

pub const USAGE: &str = "\
Usage: ip-helper [--json] [--strict] <command> <args>

Commands:
  version <addr>             IP version (4 or 6); --strict validates the address
  expand <ipv6>              Canonical 8x4 hex digit IPv6 form
  bin <addr>                 32 or 128 bit binary string
  bits <addr>                CIDR prefix length (defaults to full width)
  in-range <value> <range>   Leading min(prefix) bits match
  in-subnet <value> <range>  Value is wholly inside range";

/// Run one command and return the rendered output.
///
/// `args` excludes the program name.
pub fn run(args: &[String], config: &Config) -> Result<String, Box<dyn Error>> {
    let mut strict = config.strict;
    let mut format = config.output;
    let mut positional: Vec<&str> = Vec::new();
    for arg in args {
        match arg.as_str() {
            "--strict" => strict = true,
            "--json" => format = OutputFormat::Json,
            "-h" | "--help" => return Ok(USAGE.to_string()),
            other => positional.push(other),
        }
    }
    log::debug!("run({:?}) strict={strict} format={format:?}", positional);

    let outcome = match positional.as_slice() {
        ["version", value] => Outcome::Version {
            value: value.to_string(),
            version: get_ip_version(value, strict)?,
        },
        ["expand", value] => Outcome::Expand {
            value: value.to_string(),
            expanded: expand_ipv6(value)?,
        },
        ["bin", value] => Outcome::Bin {
            value: value.to_string(),
            bits: ip2bin(value)?,
        },
        ["bits", value] => Outcome::Bits {
            value: value.to_string(),
            prefix: get_cidr_bits(value)?,
        },
        ["in-range", value, range] => Outcome::InRange {
            value: value.to_string(),
            range: range.to_string(),
            result: in_range(value, range)?,
        },
        ["in-subnet", value, range] => Outcome::InSubnet {
            value: value.to_string(),
            range: range.to_string(),
            result: in_subnet(value, range)?,
        },
        _ => {
            log::debug!("invalid arguments {:?}", positional);
            return Err(format!("Invalid arguments\n{USAGE}").into());
        }
    };
    render(&outcome, format)
}
