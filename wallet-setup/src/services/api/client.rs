//! # API Client
//!
//! Main HTTP client for wallet service communication.

use reqwest::{Client, Response};
use serde::de::DeserializeOwned;
use shared::{CreateWalletResponse, ErrorResponse, GetInfoResponse, SessionResponse};

use crate::config::WalletSetupConfig;
use crate::core::error::{AppError, Result};
use crate::core::service::WalletApi;

/// HTTP client for the wallet service.
///
/// Holds a pooled `reqwest::Client`; cloning is cheap.
#[derive(Debug, Clone)]
pub struct ApiClient {
    pub(crate) client: Client,
    base_url: String,
}

impl ApiClient {
    /// Create a client from configuration.
    ///
    /// Every request is bounded by `config.request_timeout`.
    pub fn new(config: &WalletSetupConfig) -> Result<Self> {
        let client = Client::builder()
            .timeout(config.request_timeout)
            .build()
            .map_err(|e| AppError::Config(format!("Failed to build HTTP client: {}", e)))?;

        Ok(Self {
            client,
            base_url: config.api_base_url.trim_end_matches('/').to_string(),
        })
    }

    /// Base URL for API requests.
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    pub(crate) fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }
}

/// Decode a success body, or turn an error body into [`AppError::Rejected`].
///
/// Error statuses without a readable body become [`AppError::Api`].
pub(crate) async fn parse_response<T: DeserializeOwned>(response: Response, what: &str) -> Result<T> {
    let status = response.status();

    if status.is_success() {
        return response.json::<T>().await.map_err(|e| {
            tracing::error!(error = %e, what, "Response parse error");
            AppError::Api(format!("Failed to parse {} response: {}", what, e))
        });
    }

    match response.json::<ErrorResponse>().await {
        Ok(error) => {
            tracing::warn!(status = status.as_u16(), error = %error.message, what, "Request rejected");
            Err(AppError::Rejected(error.message))
        }
        Err(_) => {
            tracing::warn!(status = status.as_u16(), what, "Request failed without error body");
            Err(AppError::Api(format!("Failed to {}: {}", what, status)))
        }
    }
}

#[async_trait::async_trait]
impl WalletApi for ApiClient {
    async fn create_wallet(&self, wallet_file_name: &str, password: &str) -> Result<CreateWalletResponse> {
        super::wallet::create_wallet(self, wallet_file_name, password).await
    }

    async fn get_session(&self) -> Result<SessionResponse> {
        super::session::get_session(self).await
    }

    async fn get_info(&self) -> Result<GetInfoResponse> {
        super::session::get_info(self).await
    }
}
