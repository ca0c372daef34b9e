//! Validation of the create-wallet form.
//!
//! Validation is pure and only runs when the user submits. Keystrokes never
//! trigger it, so no feedback is shown before the first submit attempt.

use std::collections::BTreeSet;

use lib_utils::validation::{validate_allowed_chars, validate_matches, validate_not_empty};

use crate::app::CreationForm;
use crate::ui::keys;

/// A field-level problem with the form.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum FormViolation {
    InvalidName,
    InvalidPassword,
    InvalidPasswordConfirm,
}

impl FormViolation {
    /// Lookup key of the inline feedback message.
    pub fn feedback_key(&self) -> &'static str {
        match self {
            FormViolation::InvalidName => keys::FEEDBACK_INVALID_WALLET_NAME,
            FormViolation::InvalidPassword => keys::FEEDBACK_INVALID_PASSWORD,
            FormViolation::InvalidPasswordConfirm => keys::FEEDBACK_INVALID_PASSWORD_CONFIRM,
        }
    }
}

/// Which characters a wallet name may contain besides letters and digits.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WalletNamePolicy {
    punctuation: Vec<char>,
    max_length: Option<usize>,
}

impl Default for WalletNamePolicy {
    fn default() -> Self {
        Self {
            punctuation: vec!['_', '-'],
            max_length: None,
        }
    }
}

impl WalletNamePolicy {
    /// Policy allowing letters, digits and the given punctuation.
    ///
    /// Whitespace and path separators are never allowed.
    pub fn with_punctuation(chars: impl IntoIterator<Item = char>) -> Self {
        let mut punctuation: Vec<char> = chars
            .into_iter()
            .filter(|c| !c.is_whitespace() && *c != '/' && *c != '\\')
            .collect();
        punctuation.sort_unstable();
        punctuation.dedup();
        Self {
            punctuation,
            max_length: None,
        }
    }

    /// Limit names to `max` characters.
    pub fn max_length(mut self, max: usize) -> Self {
        self.max_length = Some(max);
        self
    }

    pub fn punctuation(&self) -> &[char] {
        &self.punctuation
    }

    /// Check a wallet name, returning the reason it is rejected.
    pub fn check(&self, name: &str) -> Result<(), String> {
        validate_not_empty(name, "Wallet name")?;
        validate_allowed_chars(name, &self.punctuation, "Wallet name")?;
        match self.max_length {
            Some(max) if name.chars().count() > max => {
                Err(format!("Wallet name must be at most {} characters", max))
            }
            _ => Ok(()),
        }
    }
}

/// Validate the form, returning every violation found.
///
/// Each field is judged on its own: an invalid name never hides a password
/// mismatch and vice versa.
pub fn validate_form(form: &CreationForm, policy: &WalletNamePolicy) -> BTreeSet<FormViolation> {
    let mut violations = BTreeSet::new();

    if let Err(reason) = policy.check(&form.wallet_name) {
        tracing::debug!(%reason, "Wallet name rejected");
        violations.insert(FormViolation::InvalidName);
    }

    if validate_not_empty(&form.password, "Password").is_err() {
        violations.insert(FormViolation::InvalidPassword);
    }

    if validate_not_empty(&form.password_confirm, "Password confirmation").is_err()
        || validate_matches(&form.password_confirm, &form.password, "Password confirmation").is_err()
    {
        violations.insert(FormViolation::InvalidPasswordConfirm);
    }

    violations
}

#[cfg(test)]
mod tests {
    use super::*;

    const NAME: &str = "test_wallet21";
    const PASSWORD: &str = "correct horse battery staple";

    fn form(name: &str, password: &str, confirm: &str) -> CreationForm {
        CreationForm {
            wallet_name: name.to_string(),
            password: password.to_string(),
            password_confirm: confirm.to_string(),
        }
    }

    #[test]
    fn test_valid_form_has_no_violations() {
        let violations = validate_form(&form(NAME, PASSWORD, PASSWORD), &WalletNamePolicy::default());
        assert!(violations.is_empty());
    }

    #[test]
    fn test_empty_form_reports_every_field() {
        let violations = validate_form(&CreationForm::default(), &WalletNamePolicy::default());
        assert_eq!(
            violations.into_iter().collect::<Vec<_>>(),
            vec![
                FormViolation::InvalidName,
                FormViolation::InvalidPassword,
                FormViolation::InvalidPasswordConfirm,
            ]
        );
    }

    #[test]
    fn test_invalid_character_in_name() {
        let violations = validate_form(
            &form("invalid_wallet_name!", PASSWORD, PASSWORD),
            &WalletNamePolicy::default(),
        );
        assert!(violations.contains(&FormViolation::InvalidName));
        assert!(!violations.contains(&FormViolation::InvalidPassword));
        assert!(!violations.contains(&FormViolation::InvalidPasswordConfirm));
    }

    #[test]
    fn test_invalid_name_independent_of_password() {
        let policy = WalletNamePolicy::default();
        for (password, confirm) in [(PASSWORD, PASSWORD), ("", ""), ("a", "b")] {
            let violations = validate_form(&form("bad!", password, confirm), &policy);
            assert!(violations.contains(&FormViolation::InvalidName));
        }
    }

    #[test]
    fn test_password_mismatch() {
        let violations = validate_form(
            &form(NAME, ".*", "a_mismatching_input"),
            &WalletNamePolicy::default(),
        );
        assert_eq!(
            violations.into_iter().collect::<Vec<_>>(),
            vec![FormViolation::InvalidPasswordConfirm]
        );
    }

    #[test]
    fn test_password_mismatch_independent_of_name() {
        let policy = WalletNamePolicy::default();
        for name in [NAME, "", "bad!"] {
            let violations = validate_form(&form(name, "one", "two"), &policy);
            assert!(violations.contains(&FormViolation::InvalidPasswordConfirm));
        }
    }

    #[test]
    fn test_empty_confirmation_with_password() {
        let violations = validate_form(&form(NAME, PASSWORD, ""), &WalletNamePolicy::default());
        assert!(violations.contains(&FormViolation::InvalidPasswordConfirm));
        assert!(!violations.contains(&FormViolation::InvalidPassword));
    }

    #[test]
    fn test_validation_is_idempotent() {
        let policy = WalletNamePolicy::default();
        let input = form("wallet!", "", "x");
        assert_eq!(validate_form(&input, &policy), validate_form(&input, &policy));
    }

    #[test]
    fn test_custom_punctuation_policy() {
        let policy = WalletNamePolicy::with_punctuation(['.', ' ', '/']);
        assert_eq!(policy.punctuation(), &['.']);
        assert!(policy.check("my.wallet").is_ok());
        assert!(policy.check("my_wallet").is_err());
        assert!(policy.check("my wallet").is_err());
    }

    #[test]
    fn test_max_length_policy() {
        let policy = WalletNamePolicy::default().max_length(4);
        assert!(policy.check("abcd").is_ok());
        assert!(policy.check("abcde").is_err());
    }

    #[test]
    fn test_feedback_keys() {
        assert_eq!(
            FormViolation::InvalidName.feedback_key(),
            "create_wallet.feedback_invalid_wallet_name"
        );
        assert_eq!(
            FormViolation::InvalidPasswordConfirm.feedback_key(),
            "create_wallet.feedback_invalid_password_confirm"
        );
    }
}
