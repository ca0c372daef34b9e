//! # Utility Functions
//!
//! ## Modules
//!
//! - **[`validation`]**: Create-wallet form validation
//!
//! ## Related Modules
//!
//! - [`shared::utils`]: Wallet file names and seed phrase helpers
//! - [`lib_utils::validation`]: Generic string validators
//! - [`crate::core`]: Core abstractions and error types

pub mod validation;
