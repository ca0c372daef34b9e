//! Projection of [`WorkflowState`] into what a frontend shows.

use crate::app::{FormField, Step, WorkflowState};
use crate::debug::{DebugFeature, FeatureFlags};

use super::keys;

/// Clickable controls of the workflow
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Control {
    Create,
    RevealToggle,
    WrittenDownToggle,
    Next,
    Back,
    Skip,
    FundWallet,
}

/// A control as shown on screen
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ControlView {
    pub control: Control,
    pub label: &'static str,
    pub enabled: bool,
    /// Checked state for toggles
    pub checked: Option<bool>,
}

impl ControlView {
    fn button(control: Control, label: &'static str, enabled: bool) -> Self {
        Self {
            control,
            label,
            enabled,
            checked: None,
        }
    }

    fn toggle(control: Control, label: &'static str, checked: bool) -> Self {
        Self {
            control,
            label,
            enabled: true,
            checked: Some(checked),
        }
    }
}

/// A form input as shown on screen
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldView {
    pub field: FormField,
    pub label: &'static str,
    pub placeholder: &'static str,
    pub value: String,
    pub secret: bool,
    pub enabled: bool,
}

/// Everything a frontend needs to draw the current step
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct WorkflowView {
    pub title: &'static str,
    pub fields: Vec<FieldView>,
    pub controls: Vec<ControlView>,
    /// Inline feedback keys, one per violation
    pub feedback: Vec<&'static str>,
    /// Form-level error: lookup key plus the service message
    pub error: Option<(&'static str, String)>,
    /// Seed words, present only while revealed
    pub seed_words: Option<Vec<String>>,
    /// Seed word inputs of the backup confirmation
    pub backup_inputs: Vec<String>,
    /// A request is in flight
    pub busy: bool,
}

impl WorkflowView {
    pub fn control(&self, control: Control) -> Option<&ControlView> {
        self.controls.iter().find(|c| c.control == control)
    }

    pub fn is_rendered(&self, control: Control) -> bool {
        self.control(control).is_some()
    }

    pub fn is_enabled(&self, control: Control) -> bool {
        self.control(control).map(|c| c.enabled).unwrap_or(false)
    }

    /// Whether a text with this key is on screen
    pub fn shows(&self, key: &str) -> bool {
        self.title == key
            || self.feedback.iter().any(|k| *k == key)
            || self.error.as_ref().map(|(k, _)| *k == key).unwrap_or(false)
            || self.controls.iter().any(|c| c.label == key)
            || self
                .fields
                .iter()
                .any(|f| f.label == key || f.placeholder == key)
    }
}

fn form_fields(form: &crate::app::CreationForm, enabled: bool) -> Vec<FieldView> {
    [
        (FormField::WalletName, keys::LABEL_WALLET_NAME, keys::PLACEHOLDER_WALLET_NAME, false),
        (FormField::Password, keys::LABEL_PASSWORD, keys::PLACEHOLDER_PASSWORD, true),
        (
            FormField::PasswordConfirm,
            keys::LABEL_PASSWORD_CONFIRM,
            keys::PLACEHOLDER_PASSWORD_CONFIRM,
            true,
        ),
    ]
    .into_iter()
    .map(|(field, label, placeholder, secret)| FieldView {
        field,
        label,
        placeholder,
        value: form.get(field).to_string(),
        secret,
        enabled,
    })
    .collect()
}

/// Build the view of `state`.
pub fn render(state: &WorkflowState, features: &FeatureFlags) -> WorkflowView {
    let skip_available = features.is_enabled(DebugFeature::SkipWalletBackupConfirmation);

    match &state.step {
        Step::Editing { form, violations, error } => WorkflowView {
            title: keys::TITLE,
            fields: form_fields(form, true),
            controls: vec![ControlView::button(Control::Create, keys::BUTTON_CREATE, true)],
            feedback: violations.iter().map(|v| v.feedback_key()).collect(),
            error: error
                .as_ref()
                .map(|message| (keys::ERROR_CREATING_FAILED, message.clone())),
            ..WorkflowView::default()
        },

        Step::Submitting { form } => WorkflowView {
            title: keys::TITLE,
            fields: form_fields(form, false),
            controls: vec![ControlView::button(Control::Create, keys::BUTTON_CREATING, false)],
            busy: true,
            ..WorkflowView::default()
        },

        Step::Created { result, revealed, written_down } => WorkflowView {
            title: keys::TITLE_WALLET_CREATED,
            controls: vec![
                ControlView::toggle(Control::RevealToggle, keys::TOGGLE_REVEAL_INFO, *revealed),
                ControlView::toggle(
                    Control::WrittenDownToggle,
                    keys::TOGGLE_INFO_WRITTEN_DOWN,
                    *written_down,
                ),
                ControlView::button(Control::Next, keys::NEXT_BUTTON, *revealed && *written_down),
            ],
            seed_words: revealed.then(|| result.seed_phrase().to_vec()),
            ..WorkflowView::default()
        },

        Step::Confirming { entered, .. } => {
            let mut controls = vec![ControlView::button(Control::Back, keys::BACK_BUTTON, true)];
            if skip_available {
                controls.push(ControlView::button(Control::Skip, keys::SKIP_BUTTON, true));
            }
            controls.push(ControlView::button(Control::FundWallet, keys::BUTTON_FUND_WALLET, false));
            WorkflowView {
                title: keys::TITLE_WALLET_CREATED,
                controls,
                backup_inputs: entered.clone(),
                ..WorkflowView::default()
            }
        }

        Step::Ready { .. } => WorkflowView {
            title: keys::TITLE_WALLET_CREATED,
            controls: vec![ControlView::button(
                Control::FundWallet,
                keys::BUTTON_FUND_WALLET,
                state.can_fund(),
            )],
            ..WorkflowView::default()
        },

        Step::Done { .. } => WorkflowView {
            title: keys::TITLE_WALLET_CREATED,
            ..WorkflowView::default()
        },
    }
}
