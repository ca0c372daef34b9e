//! # Shared Data Transfer Objects Library
//!
//! This library defines the contract between the wallet setup client and the
//! wallet service API. All DTOs use JSON serialization via `serde`.
//!
//! ## Structure
//!
//! - **[`dto`]**: Data Transfer Objects for API communication
//!   - **[`dto::wallet`]**: Wallet creation request/response and auth context
//!   - **[`dto::session`]**: Session and service info responses
//!   - **[`dto::error`]**: Error body returned by the service
//! - **[`utils`]**: Shared utility functions
//!   - **[`utils::wallet_file_name`]**: Append the wallet file extension
//!   - **[`utils::split_seed_phrase`]**: Split a seed phrase into its words
//!
//! ## Wire Format
//!
//! Field names follow the wallet service exactly (`walletname`, `seedphrase`,
//! `wallet_name`), so no `rename_all` is applied.
//!
//! ## Usage
//!
//! ```rust,ignore
//! use shared::dto::wallet::{CreateWalletRequest, CreateWalletResponse};
//! use shared::utils::{split_seed_phrase, wallet_file_name};
//!
//! let request = CreateWalletRequest::new(wallet_file_name("test_wallet21"), "secret".to_string());
//!
//! let response: CreateWalletResponse = reqwest::Client::new()
//!     .post("http://127.0.0.1:28183/api/v1/wallet/create")
//!     .json(&request)
//!     .send()
//!     .await?
//!     .json()
//!     .await?;
//!
//! let words = split_seed_phrase(&response.seedphrase);
//! ```

pub mod dto;
pub mod utils;

// Wildcard re-exports: shared is a DTO library where every export is public API
pub use dto::*;
pub use utils::*;
