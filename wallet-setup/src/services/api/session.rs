//! # Session Endpoints
//!
//! Session state (which wallet is loaded) and service info.

use shared::{GetInfoResponse, SessionResponse};

use super::client::{parse_response, ApiClient};
use crate::core::error::Result;

/// Get the current session.
pub async fn get_session(client: &ApiClient) -> Result<SessionResponse> {
    let response = client
        .client
        .get(client.url("/api/v1/session"))
        .send()
        .await?;

    parse_response(response, "fetch session").await
}

/// Get the service version.
pub async fn get_info(client: &ApiClient) -> Result<GetInfoResponse> {
    let response = client
        .client
        .get(client.url("/api/v1/getinfo"))
        .send()
        .await?;

    parse_response(response, "fetch service info").await
}
