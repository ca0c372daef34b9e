//! # Workflow State Types
//!
//! The form, the creation result, and the steps of the create-wallet workflow.

use std::collections::BTreeSet;
use std::fmt;

use shared::{split_seed_phrase, ApiAuthContext, CreateWalletResponse};

use crate::utils::validation::FormViolation;

/// Input fields of the create-wallet form
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormField {
    WalletName,
    Password,
    PasswordConfirm,
}

/// Create-wallet form contents
#[derive(Clone, Default, PartialEq, Eq)]
pub struct CreationForm {
    pub wallet_name: String,
    pub password: String,
    pub password_confirm: String,
}

impl CreationForm {
    pub fn set(&mut self, field: FormField, value: String) {
        match field {
            FormField::WalletName => self.wallet_name = value,
            FormField::Password => self.password = value,
            FormField::PasswordConfirm => self.password_confirm = value,
        }
    }

    pub fn get(&self, field: FormField) -> &str {
        match field {
            FormField::WalletName => &self.wallet_name,
            FormField::Password => &self.password,
            FormField::PasswordConfirm => &self.password_confirm,
        }
    }
}

impl fmt::Debug for CreationForm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("CreationForm")
            .field("wallet_name", &self.wallet_name)
            .field("password", &"<redacted>")
            .field("password_confirm", &"<redacted>")
            .finish()
    }
}

/// A wallet created by the wallet service
///
/// Produced once per successful submission and never modified.
#[derive(Clone, PartialEq, Eq)]
pub struct CreationResult {
    wallet_file_name: String,
    auth: ApiAuthContext,
    seed_phrase: Vec<String>,
}

impl CreationResult {
    pub fn new(wallet_file_name: String, auth: ApiAuthContext, seed_phrase: Vec<String>) -> Self {
        Self {
            wallet_file_name,
            auth,
            seed_phrase,
        }
    }

    pub fn wallet_file_name(&self) -> &str {
        &self.wallet_file_name
    }

    pub fn auth(&self) -> &ApiAuthContext {
        &self.auth
    }

    pub fn seed_phrase(&self) -> &[String] {
        &self.seed_phrase
    }
}

impl From<CreateWalletResponse> for CreationResult {
    fn from(response: CreateWalletResponse) -> Self {
        Self {
            seed_phrase: split_seed_phrase(&response.seedphrase),
            auth: ApiAuthContext {
                token: response.token,
            },
            wallet_file_name: response.walletname,
        }
    }
}

impl fmt::Debug for CreationResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("CreationResult")
            .field("wallet_file_name", &self.wallet_file_name)
            .field("seed_words", &self.seed_phrase.len())
            .finish_non_exhaustive()
    }
}

/// How the seed backup step was completed
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BackupStatus {
    /// Every seed word was re-entered correctly
    Verified,
    /// Skipped through the debug-only skip control
    Skipped,
}

/// Steps of the create-wallet workflow
#[derive(Debug, Clone, PartialEq)]
pub enum Step {
    /// Filling in the form
    Editing {
        form: CreationForm,
        /// Violations from the last submit attempt
        violations: BTreeSet<FormViolation>,
        /// Form-level error from the last creation attempt
        error: Option<String>,
    },
    /// Waiting for the wallet service
    Submitting { form: CreationForm },
    /// Wallet created, seed phrase on screen behind the reveal toggle
    Created {
        result: CreationResult,
        revealed: bool,
        written_down: bool,
    },
    /// Re-entering the seed words
    Confirming {
        result: CreationResult,
        revealed: bool,
        written_down: bool,
        entered: Vec<String>,
    },
    /// Backup done, fund action available once the wallet is loaded
    Ready {
        result: CreationResult,
        backup: BackupStatus,
    },
    /// Wallet started, workflow over
    Done { wallet_file_name: String },
}

impl Step {
    /// Initial step with an empty form
    pub fn editing() -> Self {
        Step::Editing {
            form: CreationForm::default(),
            violations: BTreeSet::new(),
            error: None,
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            Step::Editing { .. } => "editing",
            Step::Submitting { .. } => "submitting",
            Step::Created { .. } => "created",
            Step::Confirming { .. } => "confirming",
            Step::Ready { .. } => "ready",
            Step::Done { .. } => "done",
        }
    }

    /// The creation result, once there is one
    pub fn result(&self) -> Option<&CreationResult> {
        match self {
            Step::Created { result, .. } | Step::Confirming { result, .. } | Step::Ready { result, .. } => {
                Some(result)
            }
            _ => None,
        }
    }
}

/// Complete workflow state
#[derive(Debug, Clone, PartialEq)]
pub struct WorkflowState {
    pub step: Step,
    /// Wallet file the host reports as loaded by the wallet service
    pub loaded_wallet: Option<String>,
}

impl Default for WorkflowState {
    fn default() -> Self {
        Self {
            step: Step::editing(),
            loaded_wallet: None,
        }
    }
}

impl WorkflowState {
    /// Whether the created wallet is the one loaded by the service
    pub fn is_created_wallet_loaded(&self) -> bool {
        match (self.step.result(), self.loaded_wallet.as_deref()) {
            (Some(result), Some(loaded)) => result.wallet_file_name() == loaded,
            _ => false,
        }
    }

    /// Whether the fund action can be triggered
    pub fn can_fund(&self) -> bool {
        matches!(self.step, Step::Ready { .. }) && self.is_created_wallet_loaded()
    }
}
