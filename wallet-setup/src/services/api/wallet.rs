//! # Wallet Endpoints
//!
//! Wallet creation.

use shared::{CreateWalletRequest, CreateWalletResponse};

use super::client::{parse_response, ApiClient};
use crate::core::error::Result;

/// Create a wallet file and unlock it.
///
/// The service answers with the wallet file name, a session token and the
/// seed phrase.
#[tracing::instrument(skip(client, password), fields(wallet = %wallet_file_name))]
pub async fn create_wallet(
    client: &ApiClient,
    wallet_file_name: &str,
    password: &str,
) -> Result<CreateWalletResponse> {
    tracing::info!("Creating wallet");
    let start = std::time::Instant::now();

    let request = CreateWalletRequest::new(wallet_file_name.to_string(), password.to_string());

    let response = client
        .client
        .post(client.url("/api/v1/wallet/create"))
        .json(&request)
        .send()
        .await
        .map_err(|e| {
            tracing::error!(error = %e, "Create wallet network error");
            e
        })?;

    let result = parse_response::<CreateWalletResponse>(response, "create wallet").await;
    if let Ok(created) = &result {
        tracing::info!(
            wallet = %created.walletname,
            duration_ms = start.elapsed().as_millis(),
            "Wallet created"
        );
    }
    result
}
