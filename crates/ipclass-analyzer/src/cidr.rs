//! CIDR prefix length derivation
//!
//! The prefix length of a mask is the index of its first zero bit, read from the
//! 32-character bit string; a mask with no zero bit is a /32. Masks are not
//! checked for contiguity, so `255.0.255.0` yields 8.

use ipclass_core::{ClassfulMask, IpClassError, Ipv4Address, Result, SubnetMask};

use crate::validator::parse_octets;

/// Width of an IPv4 address in bits.
pub const MAX_PREFIX_LEN: u8 = 32;

/// Prefix length of a mask.
///
/// # Examples
///
/// ```
/// use ipclass_analyzer::prefix_len;
/// use ipclass_core::SubnetMask;
///
/// assert_eq!(prefix_len(&SubnetMask::CLASS_C), 24);
/// assert_eq!(prefix_len(&SubnetMask::new(255, 255, 255, 255)), 32);
/// ```
pub fn prefix_len(mask: &SubnetMask) -> u8 {
    let bits = mask.to_bits();
    tracing::trace!(%mask, bits = %bits, "mask bits");
    bits.find('0').map_or(MAX_PREFIX_LEN, |index| index as u8)
}

/// Parse a dotted-decimal mask string.
pub fn parse_mask(input: &str) -> Result<SubnetMask> {
    parse_octets(input)
        .map(SubnetMask::from)
        .ok_or_else(|| IpClassError::InvalidMask(input.to_string()))
}

/// Prefix length of a dotted-decimal mask string.
///
/// Fails with [`IpClassError::InvalidMask`] unless the string is exactly four
/// numeric octets in 0-255.
///
/// ```
/// use ipclass_analyzer::derive_prefix_len;
///
/// assert_eq!(derive_prefix_len("255.255.0.0").unwrap(), 16);
/// assert!(derive_prefix_len("255.255.0").is_err());
/// ```
pub fn derive_prefix_len(mask: &str) -> Result<u8> {
    let mask = parse_mask(mask)?;
    Ok(prefix_len(&mask))
}

/// Prefix length reported for an address under its classful mask.
///
/// Multicast addresses, masks that do not apply and the all-ones address are
/// always /32.
pub fn address_prefix_len(address: &Ipv4Address, mask: &ClassfulMask) -> u8 {
    if address.is_multicast() || address.is_all_ones() {
        return MAX_PREFIX_LEN;
    }
    match mask {
        ClassfulMask::Mask(mask) => prefix_len(mask),
        ClassfulMask::NotApplicable => MAX_PREFIX_LEN,
    }
}

/// `address/prefix` text, or the bare address when no mask applies.
pub fn cidr_range(address: &Ipv4Address, mask: &ClassfulMask) -> String {
    if mask.is_applicable() {
        format!("{}/{}", address, address_prefix_len(address, mask))
    } else {
        address.to_string()
    }
}
