use serde::{Deserialize, Serialize};

/// Placeholder the service reports when no wallet is loaded.
const NO_WALLET: &str = "None";

/// Session response
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct SessionResponse {
    pub session: bool,
    #[serde(default)]
    pub maker_running: bool,
    #[serde(default)]
    pub coinjoin_in_process: bool,
    #[serde(default)]
    pub wallet_name: Option<String>,
}

impl SessionResponse {
    /// Name of the currently loaded wallet file, if any.
    pub fn loaded_wallet(&self) -> Option<&str> {
        if !self.session {
            return None;
        }
        self.wallet_name
            .as_deref()
            .filter(|name| !name.is_empty() && *name != NO_WALLET)
    }
}

/// Service info response
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct GetInfoResponse {
    pub version: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_loaded_wallet_with_active_session() {
        let body = r#"{"session":true,"maker_running":false,"coinjoin_in_process":false,"wallet_name":"test_wallet21.jmdat"}"#;
        let session: SessionResponse = serde_json::from_str(body).expect("parse session");

        assert_eq!(session.loaded_wallet(), Some("test_wallet21.jmdat"));
    }

    #[test]
    fn test_loaded_wallet_none_placeholder() {
        let body = r#"{"session":false,"wallet_name":"None"}"#;
        let session: SessionResponse = serde_json::from_str(body).expect("parse session");

        assert_eq!(session.loaded_wallet(), None);
        assert!(!session.maker_running);
    }
}
