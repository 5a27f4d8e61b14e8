//! Core types for classful IPv4 analysis
//!
//! This crate provides the value types shared by the analyzer and its callers:
//! - [`Ipv4Address`] - a validated dotted-decimal address
//! - [`SubnetMask`] and [`ClassfulMask`] - masks and the "not applicable" outcome
//! - [`AddressClass`] - the legacy class an address falls into
//! - [`AnalysisResult`] - the record produced by one analysis
//! - [`IpClassError`] - error types
//!
//! ```
//! use ipclass_core::{octet_to_bits, Ipv4Address};
//!
//! let addr = Ipv4Address::new(192, 168, 1, 1);
//! assert_eq!(octet_to_bits(192), "11000000");
//! assert_eq!(addr.to_binary(), "11000000.10101000.00000001.00000001");
//! ```

use thiserror::Error;

mod address;
mod result;

pub use address::{AddressClass, ClassfulMask, Ipv4Address, SubnetMask};
pub use result::AnalysisResult;

/// Text used wherever a mask or broadcast has no meaningful value (classes D and E).
pub const NOT_APPLICABLE: &str = "N/A";

/// Number of octets in an IPv4 address or mask.
pub const OCTETS: usize = 4;

/// Render one octet as an 8-character, zero-padded bit string.
///
/// # Examples
///
/// ```
/// use ipclass_core::octet_to_bits;
///
/// assert_eq!(octet_to_bits(1), "00000001");
/// assert_eq!(octet_to_bits(255), "11111111");
/// ```
pub fn octet_to_bits(octet: u8) -> String {
    format!("{:08b}", octet)
}

/// Render four octets as bit groups joined by `separator`.
pub fn bit_string(octets: &[u8; OCTETS], separator: &str) -> String {
    octets
        .iter()
        .map(|octet| octet_to_bits(*octet))
        .collect::<Vec<_>>()
        .join(separator)
}

/// Error types for address analysis
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum IpClassError {
    /// Input is not four dot-separated integers in 0-255
    #[error("Invalid IP Address: {0}")]
    InvalidAddress(String),

    /// Mask is not four dot-separated integers in 0-255
    #[error("Invalid IP or Subnet Mask: {0}")]
    InvalidMask(String),

    /// Unrecognised configuration value
    #[error("Invalid configuration: {0}")]
    Config(String),
}

/// Result type alias for analysis operations
pub type Result<T> = std::result::Result<T, IpClassError>;
