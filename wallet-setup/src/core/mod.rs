//! # Core Abstractions
//!
//! Core traits and error types for dependency injection and better testability.
//!
//! ## Modules
//!
//! - **[`error`]**: Application error types (`AppError`, `Result<T>`)
//! - **[`service`]**: Service traits for dependency injection (`WalletApi`, `WalletStarter`)
//!
//! ## Error Handling
//!
//! All workflow errors use the centralized [`AppError`] type:
//!
//! ```rust
//! use wallet_setup::core::error::{AppError, Result};
//!
//! fn require_name(input: &str) -> Result<&str> {
//!     if input.is_empty() {
//!         return Err(AppError::Validation("Wallet name cannot be empty".to_string()));
//!     }
//!     Ok(input)
//! }
//! ```
//!
//! ## Dependency Injection
//!
//! The workflow never talks to the network directly. It is handed a
//! [`WalletApi`] implementation:
//!
//! ```rust,ignore
//! use std::sync::Arc;
//! use wallet_setup::core::service::WalletApi;
//!
//! // In production: the HTTP client
//! let api: Arc<dyn WalletApi> = Arc::new(wallet_setup::services::api::ApiClient::new(&config)?);
//!
//! // In tests: an in-memory mock
//! let api: Arc<dyn WalletApi> = Arc::new(MockWalletApi::succeeding());
//! ```

pub mod error;
pub mod service;

pub use error::{AppError, Result};
pub use service::{WalletApi, WalletStarter};
