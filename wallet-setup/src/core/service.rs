//! # Service Traits
//!
//! Traits for dependency injection, enabling the workflow to run against a
//! mock wallet service in tests.

use async_trait::async_trait;
use shared::{ApiAuthContext, CreateWalletResponse, GetInfoResponse, SessionResponse};

use super::error::Result;

/// Wallet service operations used by the create-wallet workflow.
#[async_trait]
pub trait WalletApi: Send + Sync {
    /// Create (and unlock) a wallet file. `wallet_file_name` carries the extension.
    async fn create_wallet(&self, wallet_file_name: &str, password: &str) -> Result<CreateWalletResponse>;

    /// Current session, including which wallet file is loaded.
    async fn get_session(&self) -> Result<SessionResponse>;

    /// Service version probe.
    async fn get_info(&self) -> Result<GetInfoResponse>;
}

/// Host hook invoked once a wallet session should begin.
///
/// Running the wallet and handling its errors is the host's business, hence
/// no return value.
pub trait WalletStarter: Send + Sync {
    fn start_wallet(&self, wallet_file_name: &str, auth: &ApiAuthContext);
}

impl<F> WalletStarter for F
where
    F: Fn(&str, &ApiAuthContext) + Send + Sync,
{
    fn start_wallet(&self, wallet_file_name: &str, auth: &ApiAuthContext) {
        self(wallet_file_name, auth)
    }
}
