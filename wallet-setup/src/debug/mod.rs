//! # Debugging and Tracing Infrastructure
//!
//! File-based structured logging plus the debug feature flags that gate
//! debug-only affordances of the workflow.
//!
//! ## Configuration
//!
//! Environment variables:
//! - `RUST_LOG`: Log level filter (e.g., `wallet_setup=debug,info`)
//! - `WALLET_LOG_DIR`: Directory for the rolling log file (default: `logs`)
//! - `WALLET_LOG_CONSOLE`: Also log to stderr (1=on, 0=off)
//! - `WALLET_DEBUG_FEATURES`: Comma-separated debug features to force on
//!   (debug builds or the `debug-mode` cargo feature only)

pub mod config;
pub mod features;
pub mod logger;

pub use config::DebugConfig;
pub use features::{DebugFeature, FeatureFlags};
pub use logger::init as init_logger;

/// Initialize the debugging system.
///
/// Returns the appender guard; keep it alive for the lifetime of the program
/// or buffered log lines are lost on exit.
pub fn init() -> Option<tracing_appender::non_blocking::WorkerGuard> {
    init_logger(&DebugConfig::from_env())
}

/// Whether debug feature overrides are honoured in this build.
pub fn debug_features_allowed() -> bool {
    cfg!(any(debug_assertions, feature = "debug-mode"))
}
