//! The record produced by one analysis

use serde::{Serialize, Serializer};

use crate::{AddressClass, ClassfulMask, Ipv4Address, NOT_APPLICABLE};

/// Complete classful summary of one address
///
/// Serialized keys follow the form the display layer expects:
/// `ip`, `class`, `subnet`, `ipRange`, `prefixLength`, `broadcast`, `binary`.
///
/// # Examples
///
/// ```
/// use ipclass_core::{AddressClass, AnalysisResult, ClassfulMask, Ipv4Address, SubnetMask};
///
/// let result = AnalysisResult {
///     address: Ipv4Address::new(10, 0, 0, 5),
///     class: AddressClass::A,
///     mask: ClassfulMask::Mask(SubnetMask::CLASS_A),
///     cidr_range: "10.0.0.5/8".to_string(),
///     prefix_len: 8,
///     broadcast: Some(Ipv4Address::new(10, 255, 255, 255)),
///     binary: Ipv4Address::new(10, 0, 0, 5).to_binary(),
/// };
/// assert_eq!(result.broadcast_text(), "10.255.255.255");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AnalysisResult {
    /// The analyzed address
    #[serde(rename = "ip")]
    pub address: Ipv4Address,
    /// Class decided by the first octet
    pub class: AddressClass,
    /// Inferred mask, or N/A for classes D and E
    #[serde(rename = "subnet")]
    pub mask: ClassfulMask,
    /// `address/prefix`, or the bare address when no mask applies
    #[serde(rename = "ipRange")]
    pub cidr_range: String,
    /// Prefix length; 32 when no mask applies
    #[serde(rename = "prefixLength")]
    pub prefix_len: u8,
    /// Broadcast address; `None` when suppressed for classes D and E
    #[serde(serialize_with = "serialize_broadcast")]
    pub broadcast: Option<Ipv4Address>,
    /// Dotted binary rendering of the address
    pub binary: String,
}

impl AnalysisResult {
    /// Broadcast as display text, `N/A` when suppressed
    pub fn broadcast_text(&self) -> String {
        self.broadcast
            .map_or_else(|| NOT_APPLICABLE.to_string(), |addr| addr.to_string())
    }
}

fn serialize_broadcast<S>(broadcast: &Option<Ipv4Address>, serializer: S) -> Result<S::Ok, S::Error>
where
    S: Serializer,
{
    match broadcast {
        Some(addr) => serializer.collect_str(addr),
        None => serializer.serialize_str(NOT_APPLICABLE),
    }
}
