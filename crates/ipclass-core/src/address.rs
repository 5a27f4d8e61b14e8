//! Address, mask and class value types

use serde::{Serialize, Serializer};
use std::fmt;
use std::net::Ipv4Addr;

use crate::{bit_string, NOT_APPLICABLE, OCTETS};

/// A four-octet IPv4 address.
///
/// Built by the analyzer's validator; never mutated afterwards.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Ipv4Address([u8; OCTETS]);

impl Ipv4Address {
    /// The all-ones address.
    pub const BROADCAST: Ipv4Address = Ipv4Address([0xff; OCTETS]);

    /// Construct an address from its four octets.
    pub const fn new(a0: u8, a1: u8, a2: u8, a3: u8) -> Self {
        Self([a0, a1, a2, a3])
    }

    /// Octets in network order
    pub const fn octets(&self) -> [u8; OCTETS] {
        self.0
    }

    /// First octet, the one classful addressing looks at
    pub const fn first_octet(&self) -> u8 {
        self.0[0]
    }

    /// Query whether the first octet falls in the multicast range (224-239).
    pub const fn is_multicast(&self) -> bool {
        matches!(self.0[0], 224..=239)
    }

    /// Query whether every bit of the address is set.
    pub fn is_all_ones(&self) -> bool {
        *self == Self::BROADCAST
    }

    /// Dotted binary form: four 8-bit groups joined by `.` (35 characters).
    pub fn to_binary(&self) -> String {
        bit_string(&self.0, ".")
    }
}

impl From<[u8; OCTETS]> for Ipv4Address {
    fn from(octets: [u8; OCTETS]) -> Self {
        Self(octets)
    }
}

impl From<Ipv4Addr> for Ipv4Address {
    fn from(addr: Ipv4Addr) -> Self {
        Self(addr.octets())
    }
}

impl From<Ipv4Address> for Ipv4Addr {
    fn from(addr: Ipv4Address) -> Self {
        Ipv4Addr::from(addr.0)
    }
}

impl fmt::Display for Ipv4Address {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let [a0, a1, a2, a3] = self.0;
        write!(f, "{}.{}.{}.{}", a0, a1, a2, a3)
    }
}

impl Serialize for Ipv4Address {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.collect_str(self)
    }
}

/// A dotted-decimal subnet mask.
///
/// Contiguity of the one bits is not checked.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SubnetMask([u8; OCTETS]);

impl SubnetMask {
    /// Class A mask, 255.0.0.0
    pub const CLASS_A: SubnetMask = SubnetMask([255, 0, 0, 0]);
    /// Class B mask, 255.255.0.0
    pub const CLASS_B: SubnetMask = SubnetMask([255, 255, 0, 0]);
    /// Class C mask, 255.255.255.0
    pub const CLASS_C: SubnetMask = SubnetMask([255, 255, 255, 0]);

    /// Construct a mask from its four octets.
    pub const fn new(m0: u8, m1: u8, m2: u8, m3: u8) -> Self {
        Self([m0, m1, m2, m3])
    }

    /// Octets in network order
    pub const fn octets(&self) -> [u8; OCTETS] {
        self.0
    }

    /// The 32-character bit string of the mask, no separators.
    pub fn to_bits(&self) -> String {
        bit_string(&self.0, "")
    }
}

impl From<[u8; OCTETS]> for SubnetMask {
    fn from(octets: [u8; OCTETS]) -> Self {
        Self(octets)
    }
}

impl fmt::Display for SubnetMask {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let [m0, m1, m2, m3] = self.0;
        write!(f, "{}.{}.{}.{}", m0, m1, m2, m3)
    }
}

/// Outcome of classful mask inference: a mask, or nothing for classes D and E.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ClassfulMask {
    /// One of the three canonical classful masks
    Mask(SubnetMask),
    /// No mask applies (multicast or reserved)
    NotApplicable,
}

impl ClassfulMask {
    /// The mask, if one applies
    pub fn as_mask(&self) -> Option<&SubnetMask> {
        match self {
            ClassfulMask::Mask(mask) => Some(mask),
            ClassfulMask::NotApplicable => None,
        }
    }

    /// Query whether a mask applies (classes A, B and C).
    pub fn is_applicable(&self) -> bool {
        matches!(self, ClassfulMask::Mask(_))
    }
}

impl fmt::Display for ClassfulMask {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ClassfulMask::Mask(mask) => fmt::Display::fmt(mask, f),
            ClassfulMask::NotApplicable => f.write_str(NOT_APPLICABLE),
        }
    }
}

impl Serialize for ClassfulMask {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.collect_str(self)
    }
}

/// Legacy address class, decided by the first octet.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
pub enum AddressClass {
    /// 0-127
    A,
    /// 128-191
    B,
    /// 192-223
    C,
    /// 224-239, multicast
    D,
    /// 240-255, reserved
    E,
}

impl fmt::Display for AddressClass {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let letter = match self {
            AddressClass::A => "A",
            AddressClass::B => "B",
            AddressClass::C => "C",
            AddressClass::D => "D",
            AddressClass::E => "E",
        };
        f.write_str(letter)
    }
}
