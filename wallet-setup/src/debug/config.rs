//! Debug configuration from environment variables

use std::path::PathBuf;

use lib_utils::envs::get_env_or;

/// Debug system configuration
#[derive(Debug, Clone)]
pub struct DebugConfig {
    /// Log directory (for rotation)
    pub log_dir: PathBuf,
    /// File name prefix of the daily rolling log
    pub log_file_name: String,
    /// Log level filter (e.g., "wallet_setup=debug,info")
    pub log_level: String,
    /// Mirror log output to stderr
    pub console: bool,
}

impl Default for DebugConfig {
    fn default() -> Self {
        Self {
            log_dir: PathBuf::from("logs"),
            log_file_name: "wallet-setup.log".to_string(),
            log_level: "wallet_setup=info,warn".to_string(),
            console: false,
        }
    }
}

impl DebugConfig {
    /// Load configuration from environment variables
    pub fn from_env() -> Self {
        let defaults = Self::default();
        Self {
            log_dir: PathBuf::from(get_env_or("WALLET_LOG_DIR", "logs")),
            log_file_name: defaults.log_file_name,
            log_level: get_env_or("RUST_LOG", &defaults.log_level),
            console: get_env_or("WALLET_LOG_CONSOLE", "0") == "1",
        }
    }

    /// Check if debug logging is enabled
    pub fn is_debug_enabled(&self) -> bool {
        self.log_level.contains("debug") || self.log_level.contains("trace")
    }
}
