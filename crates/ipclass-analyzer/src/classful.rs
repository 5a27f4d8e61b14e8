//! Classful mask inference from the first octet

use ipclass_core::{AddressClass, ClassfulMask, Ipv4Address, SubnetMask};

/// Class of a first-octet value. Total over 0-255.
pub fn classify(first_octet: u8) -> AddressClass {
    match first_octet {
        0..=127 => AddressClass::A,
        128..=191 => AddressClass::B,
        192..=223 => AddressClass::C,
        224..=239 => AddressClass::D,
        240..=255 => AddressClass::E,
    }
}

/// Canonical mask of a class; D and E have none.
pub fn class_mask(class: AddressClass) -> ClassfulMask {
    match class {
        AddressClass::A => ClassfulMask::Mask(SubnetMask::CLASS_A),
        AddressClass::B => ClassfulMask::Mask(SubnetMask::CLASS_B),
        AddressClass::C => ClassfulMask::Mask(SubnetMask::CLASS_C),
        AddressClass::D | AddressClass::E => ClassfulMask::NotApplicable,
    }
}

/// Infer the subnet mask of an address from its first octet.
///
/// # Examples
///
/// ```
/// use ipclass_analyzer::resolve_mask;
/// use ipclass_core::{ClassfulMask, Ipv4Address, SubnetMask};
///
/// let mask = resolve_mask(&Ipv4Address::new(172, 16, 0, 1));
/// assert_eq!(mask, ClassfulMask::Mask(SubnetMask::CLASS_B));
/// ```
pub fn resolve_mask(address: &Ipv4Address) -> ClassfulMask {
    let class = classify(address.first_octet());
    let mask = class_mask(class);
    tracing::debug!(%address, %class, %mask, "resolved classful mask");
    mask
}
