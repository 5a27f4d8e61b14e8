//! Analyzer configuration
//!
//! Read from the environment (`IPCLASS_NA_BROADCAST`); callers may override.

use ipclass_core::{IpClassError, Result};
use serde::{Deserialize, Serialize};
use std::env;
use std::fmt;
use std::str::FromStr;

/// Environment variable selecting the [`BroadcastPolicy`].
pub const NA_BROADCAST_ENV: &str = "IPCLASS_NA_BROADCAST";

/// How to report the broadcast of an address whose class has no mask (D and E).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BroadcastPolicy {
    /// Report `N/A`
    #[default]
    Suppress,
    /// Report the address itself, unmasked
    Address,
}

impl FromStr for BroadcastPolicy {
    type Err = IpClassError;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "suppress" => Ok(BroadcastPolicy::Suppress),
            "address" => Ok(BroadcastPolicy::Address),
            other => Err(IpClassError::Config(format!(
                "unknown broadcast policy '{}' (expected 'suppress' or 'address')",
                other
            ))),
        }
    }
}

impl fmt::Display for BroadcastPolicy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            BroadcastPolicy::Suppress => f.write_str("suppress"),
            BroadcastPolicy::Address => f.write_str("address"),
        }
    }
}

/// Analyzer settings
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct AnalyzerConfig {
    /// Broadcast reporting for classes D and E
    pub na_broadcast: BroadcastPolicy,
}

impl AnalyzerConfig {
    /// Load from the environment; unset variables keep their defaults.
    pub fn from_env() -> Result<Self> {
        Self::from_env_value(env::var(NA_BROADCAST_ENV).ok().as_deref())
    }

    fn from_env_value(na_broadcast: Option<&str>) -> Result<Self> {
        let na_broadcast = match na_broadcast {
            Some(value) => value.parse()?,
            None => BroadcastPolicy::default(),
        };
        Ok(Self { na_broadcast })
    }

    /// Replace the broadcast policy.
    pub fn with_na_broadcast(mut self, policy: BroadcastPolicy) -> Self {
        self.na_broadcast = policy;
        self
    }
}
