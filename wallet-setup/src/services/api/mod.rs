//! # Wallet Service API Client Module
//!
//! HTTP client for the wallet service.
//!
//! ## Module Structure
//!
//! ```text
//! api/
//! ├── mod.rs      - Module exports and documentation
//! ├── client.rs   - ApiClient struct and response handling
//! ├── wallet.rs   - Wallet creation endpoint
//! └── session.rs  - Session and service info endpoints
//! ```

pub mod client;
pub mod session;
pub mod wallet;

pub use client::ApiClient;
