//! # Shared Utility Functions
//!
//! Helpers for wallet file names and seed phrases, used by the client and any
//! service-side tooling.
//!
//! ```rust
//! use shared::utils::{split_seed_phrase, wallet_display_name, wallet_file_name};
//!
//! assert_eq!(wallet_file_name("test_wallet21"), "test_wallet21.jmdat");
//! assert_eq!(wallet_display_name("test_wallet21.jmdat"), "test_wallet21");
//! assert_eq!(split_seed_phrase("abandon  ability able"), vec!["abandon", "ability", "able"]);
//! ```

/// Extension the wallet service uses for wallet files.
pub const WALLET_FILE_EXTENSION: &str = ".jmdat";

/// Build the wallet file name for a user-chosen wallet name.
///
/// Names already carrying the extension are returned unchanged.
pub fn wallet_file_name(name: &str) -> String {
    if name.ends_with(WALLET_FILE_EXTENSION) {
        name.to_string()
    } else {
        format!("{}{}", name, WALLET_FILE_EXTENSION)
    }
}

/// Strip the wallet file extension for display.
pub fn wallet_display_name(file_name: &str) -> &str {
    file_name
        .strip_suffix(WALLET_FILE_EXTENSION)
        .unwrap_or(file_name)
}

/// Split a space-separated seed phrase into its ordered words.
///
/// Repeated whitespace is tolerated; word order is preserved.
pub fn split_seed_phrase(phrase: &str) -> Vec<String> {
    phrase.split_whitespace().map(str::to_string).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_wallet_file_name_is_idempotent() {
        let once = wallet_file_name("savings");
        assert_eq!(once, "savings.jmdat");
        assert_eq!(wallet_file_name(&once), "savings.jmdat");
    }

    #[test]
    fn test_wallet_display_name_without_extension() {
        assert_eq!(wallet_display_name("plain"), "plain");
    }

    #[test]
    fn test_split_seed_phrase_empty() {
        assert!(split_seed_phrase("   ").is_empty());
    }
}
