//! # Application Configuration
//!
//! Configuration loaded from environment variables and validated on startup
//! to fail fast if misconfigured.
//!
//! | Variable | Default |
//! |---|---|
//! | `WALLET_API_URL` | `http://127.0.0.1:28183` |
//! | `WALLET_API_TIMEOUT_SECS` | `30` |
//! | `WALLET_NAME_PUNCTUATION` | `_-` |
//! | `WALLET_DEBUG_FEATURES` | empty |

use std::time::Duration;

use lib_utils::envs::{get_env_list, get_env_or, get_env_parse_or};

use crate::core::error::{AppError, Result};
use crate::debug::FeatureFlags;
use crate::utils::validation::WalletNamePolicy;

/// Default wallet service endpoint.
pub const DEFAULT_API_URL: &str = "http://127.0.0.1:28183";

/// Default request timeout in seconds.
///
/// Wallet creation derives keys server-side and can take a while.
pub const DEFAULT_TIMEOUT_SECS: u64 = 30;

/// Workflow configuration.
#[derive(Debug, Clone)]
pub struct WalletSetupConfig {
    /// Base URL of the wallet service API (no trailing slash)
    pub api_base_url: String,

    /// Timeout applied to every wallet service request
    pub request_timeout: Duration,

    /// Characters allowed in wallet names
    pub name_policy: WalletNamePolicy,

    /// Debug features, read once per workflow
    pub features: FeatureFlags,
}

impl Default for WalletSetupConfig {
    fn default() -> Self {
        Self {
            api_base_url: DEFAULT_API_URL.to_string(),
            request_timeout: Duration::from_secs(DEFAULT_TIMEOUT_SECS),
            name_policy: WalletNamePolicy::default(),
            features: FeatureFlags::default(),
        }
    }
}

impl WalletSetupConfig {
    /// Load configuration from environment variables.
    pub fn from_env() -> Result<Self> {
        let api_base_url = get_env_or("WALLET_API_URL", DEFAULT_API_URL)
            .trim_end_matches('/')
            .to_string();

        let timeout_secs: u64 = get_env_parse_or("WALLET_API_TIMEOUT_SECS", DEFAULT_TIMEOUT_SECS)?;

        let name_policy = match lib_utils::get_env("WALLET_NAME_PUNCTUATION") {
            Ok(chars) => WalletNamePolicy::with_punctuation(chars.chars()),
            Err(_) => WalletNamePolicy::default(),
        };

        let features = FeatureFlags::from_names(get_env_list("WALLET_DEBUG_FEATURES").as_slice());

        let config = Self {
            api_base_url,
            request_timeout: Duration::from_secs(timeout_secs),
            name_policy,
            features,
        };
        config.validate()?;
        Ok(config)
    }

    /// Validate configuration values.
    pub fn validate(&self) -> Result<()> {
        if self.api_base_url.is_empty() {
            return Err(AppError::Config("WALLET_API_URL cannot be empty".to_string()));
        }
        if !(self.api_base_url.starts_with("http://") || self.api_base_url.starts_with("https://")) {
            return Err(AppError::Config(format!(
                "WALLET_API_URL must start with http:// or https://, got {}",
                self.api_base_url
            )));
        }
        if self.request_timeout.is_zero() {
            return Err(AppError::Config("WALLET_API_TIMEOUT_SECS must be greater than 0".to_string()));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_is_valid() {
        let config = WalletSetupConfig::default();
        assert!(config.validate().is_ok());
        assert_eq!(config.request_timeout, Duration::from_secs(30));
        assert_eq!(config.features, FeatureFlags::default());
    }

    #[test]
    fn test_validate_rejects_bad_url() {
        let config = WalletSetupConfig {
            api_base_url: "localhost:28183".to_string(),
            ..WalletSetupConfig::default()
        };
        assert!(matches!(config.validate(), Err(AppError::Config(_))));

        let config = WalletSetupConfig {
            api_base_url: String::new(),
            ..WalletSetupConfig::default()
        };
        assert!(matches!(config.validate(), Err(AppError::Config(_))));
    }

    #[test]
    fn test_validate_rejects_zero_timeout() {
        let config = WalletSetupConfig {
            request_timeout: Duration::ZERO,
            ..WalletSetupConfig::default()
        };
        assert!(matches!(config.validate(), Err(AppError::Config(_))));
    }
}
