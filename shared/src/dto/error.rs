use serde::{Deserialize, Serialize};

/// Error response
///
/// The wallet service reports `{"message": ...}`; `error` is accepted as well.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ErrorResponse {
    #[serde(alias = "error")]
    pub message: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_response_accepts_both_field_names() {
        let a: ErrorResponse = serde_json::from_str(r#"{"message":"Wallet already exists"}"#).expect("message body");
        let b: ErrorResponse = serde_json::from_str(r#"{"error":"Wallet already exists"}"#).expect("error body");

        assert_eq!(a, b);
        assert_eq!(a.message, "Wallet already exists");
    }
}
