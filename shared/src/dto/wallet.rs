use serde::{Deserialize, Serialize};

/// Wallet type requested on creation (native segwit, fidelity-bond capable).
pub const DEFAULT_WALLET_TYPE: &str = "sw-fb";

/// Create wallet request
#[derive(Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct CreateWalletRequest {
    pub walletname: String,
    pub password: String,
    pub wallettype: String,
}

impl CreateWalletRequest {
    pub fn new(walletname: String, password: String) -> Self {
        Self {
            walletname,
            password,
            wallettype: DEFAULT_WALLET_TYPE.to_string(),
        }
    }
}

// Keeps the password out of logs.
impl std::fmt::Debug for CreateWalletRequest {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("CreateWalletRequest")
            .field("walletname", &self.walletname)
            .field("password", &"<redacted>")
            .field("wallettype", &self.wallettype)
            .finish()
    }
}

/// Create wallet response (wallet created and unlocked)
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct CreateWalletResponse {
    pub walletname: String,
    pub token: String,
    pub seedphrase: String,
}

/// Auth context handed to the host when a wallet session starts
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ApiAuthContext {
    pub token: String,
}
