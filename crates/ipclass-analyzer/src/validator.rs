//! Address validation
//!
//! Two passes, both mandatory: a shape check (four groups of 1-3 digits) and a
//! numeric check on every octet. The shape alone admits `999.1.1.1`.

use ipclass_core::{IpClassError, Ipv4Address, Result, OCTETS};
use lazy_static::lazy_static;
use regex::Regex;

lazy_static! {
    static ref DOTTED_QUAD: Regex =
        Regex::new(r"^([0-9]{1,3}\.){3}[0-9]{1,3}$").expect("Invalid Regex?");
}

/// Parse a dotted-decimal string into an [`Ipv4Address`].
///
/// # Examples
///
/// ```
/// use ipclass_analyzer::parse_address;
///
/// assert_eq!(parse_address("10.0.0.5").unwrap().to_string(), "10.0.0.5");
/// assert!(parse_address("999.1.1.1").is_err());
/// assert!(parse_address("1.2.3").is_err());
/// ```
pub fn parse_address(input: &str) -> Result<Ipv4Address> {
    if !DOTTED_QUAD.is_match(input) {
        tracing::debug!(input, "address rejected: not a dotted quad");
        return Err(IpClassError::InvalidAddress(input.to_string()));
    }

    let octets = parse_octets(input).ok_or_else(|| {
        tracing::debug!(input, "address rejected: octet out of range");
        IpClassError::InvalidAddress(input.to_string())
    })?;

    Ok(Ipv4Address::from(octets))
}

/// Split on `.` and parse exactly four octets, each 0-255.
pub(crate) fn parse_octets(input: &str) -> Option<[u8; OCTETS]> {
    let parts: Vec<&str> = input.split('.').collect();
    if parts.len() != OCTETS {
        return None;
    }

    let mut octets = [0u8; OCTETS];
    for (slot, part) in octets.iter_mut().zip(parts) {
        *slot = parse_octet(part)?;
    }
    Some(octets)
}

/// Parse one decimal segment as an integer, then range-check it.
fn parse_octet(segment: &str) -> Option<u8> {
    if segment.is_empty() || !segment.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    let value: u32 = segment.parse().ok()?;
    u8::try_from(value).ok()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_valid() {
        let addr = parse_address("192.168.1.1").unwrap();
        assert_eq!(addr.octets(), [192, 168, 1, 1]);
    }

    #[test]
    fn test_parse_bounds() {
        assert!(parse_address("0.0.0.0").is_ok());
        assert!(parse_address("255.255.255.255").is_ok());
        assert!(parse_address("256.0.0.0").is_err());
        assert!(parse_address("0.0.0.256").is_err());
    }

    #[test]
    fn test_shape_passes_but_range_fails() {
        assert!(DOTTED_QUAD.is_match("999.1.1.1"));
        assert_eq!(
            parse_address("999.1.1.1"),
            Err(IpClassError::InvalidAddress("999.1.1.1".to_string()))
        );
    }

    #[test]
    fn test_parse_wrong_shape() {
        for input in [
            "",
            "1.2.3",
            "1.2.3.4.5",
            "1.2.3.",
            ".1.2.3",
            "1..2.3",
            "1.2.3.4/24",
            "1234.1.1.1",
            "a.b.c.d",
            "+1.2.3.4",
            " 1.2.3.4",
            "1.2.3.4 ",
            "1.2.3.4\n",
            "::1",
        ] {
            assert!(parse_address(input).is_err(), "accepted {:?}", input);
        }
    }

    #[test]
    fn test_leading_zeros_accepted() {
        let addr = parse_address("010.001.000.007").unwrap();
        assert_eq!(addr.octets(), [10, 1, 0, 7]);
    }

    #[test]
    fn test_parse_octets_rejects_non_numeric() {
        assert_eq!(parse_octets("255.255.255.0"), Some([255, 255, 255, 0]));
        assert_eq!(parse_octets("255.-1.0.0"), None);
        assert_eq!(parse_octets("255.255.0"), None);
        assert_eq!(parse_octets("N/A"), None);
        assert_eq!(parse_octets("99999999999.0.0.0"), None);
    }
}
