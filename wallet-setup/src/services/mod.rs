//! # External Services
//!
//! - **[`api`]**: HTTP client for the wallet service REST API

pub mod api;
