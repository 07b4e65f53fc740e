//! Parsing steps of the console sample.
//!
//! Both steps read raw user input and return an [`Optional`]; the binary
//! only decides how to print the result.

use std::net::Ipv4Addr;
use std::num::ParseIntError;

use optionals::{BoxError, Kind, Optional};

/// Number of dot-separated segments in an IPv4 address.
pub const IPV4_SEGMENTS: usize = 4;

/// Parses a 32 bit signed integer. Parse failures become exception
/// containers.
///
/// # Examples
///
/// ```rust
/// use optionals_console::parse_number;
///
/// assert_eq!(parse_number(" 42\n").value(), Ok(&42));
/// assert!(parse_number("forty-two").has_exception());
/// ```
pub fn parse_number(input: &str) -> Optional<i32> {
    Optional::of_value(input)
        .map(str::trim)
        .safe_map(str::parse::<i32>)
}

/// Parses a dotted IPv4 address.
///
/// Empty segments are ignored. A wrong segment count is reported as a
/// message; a segment that is not a byte is reported as an exception.
///
/// # Errors
///
/// Errors other than [`ParseIntError`] are not captured and are returned
/// as is.
///
/// # Examples
///
/// ```rust
/// use std::net::Ipv4Addr;
/// use optionals_console::parse_ipv4;
///
/// let address = parse_ipv4("10.0.0.1").unwrap();
/// assert_eq!(address.value(), Ok(&Ipv4Addr::new(10, 0, 0, 1)));
/// assert!(parse_ipv4("10.0.1").unwrap().has_message());
/// assert!(parse_ipv4("10.0.0.256").unwrap().has_exception());
/// ```
pub fn parse_ipv4(input: &str) -> Result<Optional<Ipv4Addr>, BoxError> {
    Optional::of_value(input)
        .map(|input| {
            input
                .trim()
                .split('.')
                .filter(|segment| !segment.is_empty())
                .collect::<Vec<_>>()
        })
        .safe_flat_map_catching(Kind::<ParseIntError>::new(), |segments| parse_octets(&segments))
        .map(|octets| octets.map(Ipv4Addr::from))
}

fn parse_octets(segments: &[&str]) -> Result<Optional<[u8; IPV4_SEGMENTS]>, ParseIntError> {
    if segments.len() != IPV4_SEGMENTS {
        let comparison = if segments.len() > IPV4_SEGMENTS { "more" } else { "less" };
        return Ok(Optional::of_message(format!(
            "The input contains {comparison} segments than allowed"
        )));
    }

    let mut octets = [0_u8; IPV4_SEGMENTS];
    for (octet, segment) in octets.iter_mut().zip(segments) {
        *octet = segment.parse()?;
    }
    Ok(Optional::of_value(octets))
}

/// Renders the outcome of [`parse_number`].
pub fn describe_number(number: &Optional<i32>) -> String {
    match number.value() {
        Ok(value) => format!("Provided int value was: {value}"),
        Err(_) => format!("An error occurred: {number}"),
    }
}

/// Renders the outcome of [`parse_ipv4`].
pub fn describe_address(address: &Optional<Ipv4Addr>) -> String {
    address.to_string_with(|address| format!("Parsed IPv4 address: {address}"))
}
