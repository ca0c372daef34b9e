//! Lookup keys of every user-facing text in the workflow.
//!
//! Resolving them to a language is the host's job.

pub const TITLE: &str = "create_wallet.title";
pub const TITLE_WALLET_CREATED: &str = "create_wallet.title_wallet_created";

pub const LABEL_WALLET_NAME: &str = "create_wallet.label_wallet_name";
pub const PLACEHOLDER_WALLET_NAME: &str = "create_wallet.placeholder_wallet_name";
pub const LABEL_PASSWORD: &str = "create_wallet.label_password";
pub const PLACEHOLDER_PASSWORD: &str = "create_wallet.placeholder_password";
pub const LABEL_PASSWORD_CONFIRM: &str = "create_wallet.label_password_confirm";
pub const PLACEHOLDER_PASSWORD_CONFIRM: &str = "create_wallet.placeholder_password_confirm";

pub const BUTTON_CREATE: &str = "create_wallet.button_create";
pub const BUTTON_CREATING: &str = "create_wallet.button_creating";

pub const FEEDBACK_INVALID_WALLET_NAME: &str = "create_wallet.feedback_invalid_wallet_name";
pub const FEEDBACK_INVALID_PASSWORD: &str = "create_wallet.feedback_invalid_password";
pub const FEEDBACK_INVALID_PASSWORD_CONFIRM: &str = "create_wallet.feedback_invalid_password_confirm";
pub const ERROR_CREATING_FAILED: &str = "create_wallet.error_creating_failed";

pub const TOGGLE_REVEAL_INFO: &str = "create_wallet.confirmation_toggle_reveal_info";
pub const TOGGLE_INFO_WRITTEN_DOWN: &str = "create_wallet.confirmation_toggle_info_written_down";
pub const NEXT_BUTTON: &str = "create_wallet.next_button";
pub const BACK_BUTTON: &str = "create_wallet.back_button";
pub const SKIP_BUTTON: &str = "create_wallet.skip_button";
pub const BUTTON_FUND_WALLET: &str = "create_wallet.confirmation_button_fund_wallet";
