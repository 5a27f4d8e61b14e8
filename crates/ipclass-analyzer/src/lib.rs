//! Classful IPv4 analysis
//!
//! Turns one dotted-decimal address into a best-effort classful summary:
//! - Validate the address (shape, then octet range)
//! - Infer the subnet mask from the first octet
//! - Derive the CIDR prefix length from the mask
//! - Compute the broadcast address
//!
//! # Examples
//!
//! ```
//! use ipclass_analyzer::analyze;
//!
//! let result = analyze("10.0.0.5").unwrap();
//! assert_eq!(result.mask.to_string(), "255.0.0.0");
//! assert_eq!(result.cidr_range, "10.0.0.5/8");
//! assert_eq!(result.broadcast_text(), "10.255.255.255");
//!
//! assert!(analyze("1.2.3").is_err());
//! ```

mod analyzer;
mod broadcast;
mod cidr;
mod classful;
mod config;
mod validator;

pub use analyzer::{analyze, Analyzer};
pub use broadcast::{broadcast, classful_broadcast};
pub use cidr::{
    address_prefix_len, cidr_range, derive_prefix_len, parse_mask, prefix_len, MAX_PREFIX_LEN,
};
pub use classful::{class_mask, classify, resolve_mask};
pub use config::{AnalyzerConfig, BroadcastPolicy, NA_BROADCAST_ENV};
pub use validator::parse_address;

pub use ipclass_core::{AnalysisResult, IpClassError, Result};
