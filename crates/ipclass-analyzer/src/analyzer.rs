//! Pipeline assembly: validate, resolve the mask, derive CIDR and broadcast.

use ipclass_core::{AnalysisResult, Result};

use crate::broadcast::classful_broadcast;
use crate::cidr::{address_prefix_len, cidr_range};
use crate::classful::{class_mask, classify};
use crate::config::AnalyzerConfig;
use crate::validator::parse_address;

/// Classful IPv4 analyzer
///
/// Stateless apart from its configuration; every call is independent.
#[derive(Debug, Clone, Default)]
pub struct Analyzer {
    config: AnalyzerConfig,
}

impl Analyzer {
    /// Create an analyzer with the given configuration
    pub fn new(config: AnalyzerConfig) -> Self {
        Self { config }
    }

    /// Configuration this analyzer was built with
    pub fn config(&self) -> &AnalyzerConfig {
        &self.config
    }

    /// Analyze one dotted-decimal address.
    ///
    /// Returns [`ipclass_core::IpClassError::InvalidAddress`] without a partial
    /// result when the input is not a valid address.
    pub fn analyze(&self, input: &str) -> Result<AnalysisResult> {
        let address = parse_address(input)?;
        let class = classify(address.first_octet());
        let mask = class_mask(class);

        let result = AnalysisResult {
            address,
            class,
            mask,
            cidr_range: cidr_range(&address, &mask),
            prefix_len: address_prefix_len(&address, &mask),
            broadcast: classful_broadcast(&address, &mask, self.config.na_broadcast),
            binary: address.to_binary(),
        };

        tracing::debug!(
            %address,
            %class,
            range = %result.cidr_range,
            broadcast = %result.broadcast_text(),
            "analysis complete"
        );
        Ok(result)
    }
}

/// Analyze one address with the default configuration.
///
/// # Examples
///
/// ```
/// use ipclass_analyzer::analyze;
///
/// let result = analyze("192.168.1.1").unwrap();
/// assert_eq!(result.mask.to_string(), "255.255.255.0");
/// assert_eq!(result.cidr_range, "192.168.1.1/24");
/// assert_eq!(result.broadcast_text(), "192.168.1.255");
/// ```
pub fn analyze(input: &str) -> Result<AnalysisResult> {
    Analyzer::default().analyze(input)
}
