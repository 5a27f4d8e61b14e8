//! Broadcast address calculation

use ipclass_core::{ClassfulMask, Ipv4Address, SubnetMask, OCTETS};

use crate::config::BroadcastPolicy;

/// Broadcast address: each address octet OR'd with the complement of the mask octet.
///
/// # Examples
///
/// ```
/// use ipclass_analyzer::broadcast;
/// use ipclass_core::{Ipv4Address, SubnetMask};
///
/// let addr = Ipv4Address::new(10, 0, 0, 5);
/// assert_eq!(broadcast(&addr, &SubnetMask::CLASS_A).to_string(), "10.255.255.255");
/// ```
pub fn broadcast(address: &Ipv4Address, mask: &SubnetMask) -> Ipv4Address {
    let addr = address.octets();
    let mask = mask.octets();
    let mut octets = [0u8; OCTETS];
    for (i, octet) in octets.iter_mut().enumerate() {
        *octet = addr[i] | !mask[i];
    }
    Ipv4Address::from(octets)
}

/// Broadcast under a classful mask; classes without a mask follow `policy`.
pub fn classful_broadcast(
    address: &Ipv4Address,
    mask: &ClassfulMask,
    policy: BroadcastPolicy,
) -> Option<Ipv4Address> {
    match (mask, policy) {
        (ClassfulMask::Mask(mask), _) => Some(broadcast(address, mask)),
        (ClassfulMask::NotApplicable, BroadcastPolicy::Suppress) => None,
        (ClassfulMask::NotApplicable, BroadcastPolicy::Address) => Some(*address),
    }
}
