//! # Data Transfer Objects (DTOs)
//!
//! Data structures exchanged with the wallet service REST API.
//!
//! ## Module Organization
//!
//! - [`wallet`] - Wallet creation and the auth context it yields
//! - [`session`] - Session state and service info
//! - [`error`] - Error response body
//!
//! ## Example JSON Communication
//!
//! ```text
//! POST /api/v1/wallet/create
//! Content-Type: application/json
//!
//! {
//!   "walletname": "test_wallet21.jmdat",
//!   "password": "correct horse battery staple",
//!   "wallettype": "sw-fb"
//! }
//! ```
//!
//! ```text
//! HTTP/1.1 201 Created
//! Content-Type: application/json
//!
//! {
//!   "walletname": "test_wallet21.jmdat",
//!   "token": "eyJhbGciOiJIUzI1NiIsInR5cCI6IkpXVCJ9...",
//!   "seedphrase": "abandon abandon ... about"
//! }
//! ```

pub mod error;
pub mod session;
pub mod wallet;

pub use error::*;
pub use session::*;
pub use wallet::*;
