//! # Workflow Transitions
//!
//! Pure transition function of the create-wallet workflow. Every user action
//! and every async result is an [`Action`]; applying it to a state yields the
//! next state and, at most, one [`Effect`] for the owner to carry out.
//!
//! ```text
//! Editing ──submit(valid)──▶ Submitting ──ok──▶ Created ──next──▶ Confirming ──words/skip──▶ Ready ──fund──▶ Done
//!    ▲                           │                                   │
//!    └──────────failed───────────┘                       Created ◀──back
//! ```

use std::collections::BTreeSet;

use shared::{wallet_file_name, ApiAuthContext};

use super::state::{BackupStatus, CreationResult, FormField, Step, WorkflowState};
use crate::core::error::{AppError, Result};
use crate::debug::{DebugFeature, FeatureFlags};
use crate::utils::validation::{validate_form, WalletNamePolicy};

/// Form-level error when the service creates a wallet without a seed phrase.
const EMPTY_SEED_MESSAGE: &str = "Wallet service returned an empty seed phrase";

/// Something that happened to the workflow
#[derive(Debug, Clone, PartialEq)]
pub enum Action {
    /// A form field changed
    Edit(FormField, String),
    /// Create button clicked
    Submit,
    /// Wallet service created the wallet
    CreationSucceeded(CreationResult),
    /// Wallet service call failed
    CreationFailed(String),
    ToggleReveal,
    ToggleWrittenDown,
    Next,
    Back,
    /// Seed word re-entered at the given position
    EnterWord(usize, String),
    Skip,
    /// Host reports which wallet file the service has loaded
    WalletLoaded(Option<String>),
    /// Fund wallet clicked
    Fund,
}

/// Side effect requested by a transition
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Effect {
    /// Call the wallet service to create the wallet
    CreateWallet {
        wallet_file_name: String,
        password: String,
    },
    /// Hand the wallet over to the host
    StartWallet {
        wallet_file_name: String,
        auth: ApiAuthContext,
    },
}

/// Result of a successful transition
#[derive(Debug, Clone, PartialEq)]
pub struct Transition {
    pub state: WorkflowState,
    pub effect: Option<Effect>,
}

impl Transition {
    fn to(state: WorkflowState) -> Self {
        Self { state, effect: None }
    }

    fn with_effect(state: WorkflowState, effect: Effect) -> Self {
        Self {
            state,
            effect: Some(effect),
        }
    }
}

/// Transition rules, fixed at construction
#[derive(Debug, Clone, Default)]
pub struct Machine {
    policy: WalletNamePolicy,
    features: FeatureFlags,
}

impl Machine {
    pub fn new(policy: WalletNamePolicy, features: FeatureFlags) -> Self {
        Self { policy, features }
    }

    pub fn features(&self) -> &FeatureFlags {
        &self.features
    }

    pub fn policy(&self) -> &WalletNamePolicy {
        &self.policy
    }

    /// Whether the skip control exists at all for this workflow
    pub fn skip_available(&self) -> bool {
        self.features
            .is_enabled(DebugFeature::SkipWalletBackupConfirmation)
    }

    /// Apply `action` to `state`.
    ///
    /// An action that does not apply to the current step is an
    /// [`AppError::State`] and leaves the caller's state untouched.
    pub fn transition(&self, state: &WorkflowState, action: Action) -> Result<Transition> {
        let loaded_wallet = state.loaded_wallet.clone();
        let next = |step: Step| WorkflowState {
            step,
            loaded_wallet: loaded_wallet.clone(),
        };

        match (&state.step, action) {
            (_, Action::WalletLoaded(wallet)) => Ok(Transition::to(WorkflowState {
                step: state.step.clone(),
                loaded_wallet: wallet,
            })),

            (Step::Editing { form, violations, error }, Action::Edit(field, value)) => {
                let mut form = form.clone();
                form.set(field, value);
                Ok(Transition::to(next(Step::Editing {
                    form,
                    violations: violations.clone(),
                    error: error.clone(),
                })))
            }

            (Step::Editing { form, .. }, Action::Submit) => {
                let violations = validate_form(form, &self.policy);
                if !violations.is_empty() {
                    return Ok(Transition::to(next(Step::Editing {
                        form: form.clone(),
                        violations,
                        error: None,
                    })));
                }
                let effect = Effect::CreateWallet {
                    wallet_file_name: wallet_file_name(&form.wallet_name),
                    password: form.password.clone(),
                };
                Ok(Transition::with_effect(
                    next(Step::Submitting { form: form.clone() }),
                    effect,
                ))
            }

            (Step::Submitting { .. }, Action::Submit) => Err(AppError::State(
                "Wallet creation already in progress".to_string(),
            )),

            (Step::Submitting { form }, Action::CreationSucceeded(result)) if result.seed_phrase().is_empty() => {
                Ok(Transition::to(next(Step::Editing {
                    form: form.clone(),
                    violations: BTreeSet::new(),
                    error: Some(EMPTY_SEED_MESSAGE.to_string()),
                })))
            }

            (Step::Submitting { .. }, Action::CreationSucceeded(result)) => {
                Ok(Transition::to(next(Step::Created {
                    result,
                    revealed: false,
                    written_down: false,
                })))
            }

            (Step::Submitting { form }, Action::CreationFailed(message)) => {
                Ok(Transition::to(next(Step::Editing {
                    form: form.clone(),
                    violations: BTreeSet::new(),
                    error: Some(message),
                })))
            }

            (Step::Created { result, revealed, written_down }, Action::ToggleReveal) => {
                Ok(Transition::to(next(Step::Created {
                    result: result.clone(),
                    revealed: !revealed,
                    written_down: *written_down,
                })))
            }

            (Step::Created { result, revealed, written_down }, Action::ToggleWrittenDown) => {
                Ok(Transition::to(next(Step::Created {
                    result: result.clone(),
                    revealed: *revealed,
                    written_down: !written_down,
                })))
            }

            (Step::Created { result, revealed, written_down }, Action::Next) => {
                if !(*revealed && *written_down) {
                    return Err(AppError::State(
                        "Seed phrase must be revealed and confirmed as written down".to_string(),
                    ));
                }
                Ok(Transition::to(next(Step::Confirming {
                    result: result.clone(),
                    revealed: true,
                    written_down: true,
                    entered: vec![String::new(); result.seed_phrase().len()],
                })))
            }

            (Step::Confirming { result, revealed, written_down, .. }, Action::Back) => {
                Ok(Transition::to(next(Step::Created {
                    result: result.clone(),
                    revealed: *revealed,
                    written_down: *written_down,
                })))
            }

            (Step::Confirming { result, revealed, written_down, entered }, Action::EnterWord(index, word)) => {
                if index >= entered.len() {
                    return Err(AppError::Validation(format!(
                        "Seed word position {} out of range (1-{})",
                        index + 1,
                        entered.len()
                    )));
                }
                let mut entered = entered.clone();
                entered[index] = word;

                if backup_matches(result.seed_phrase(), &entered) {
                    return Ok(Transition::to(next(Step::Ready {
                        result: result.clone(),
                        backup: BackupStatus::Verified,
                    })));
                }
                Ok(Transition::to(next(Step::Confirming {
                    result: result.clone(),
                    revealed: *revealed,
                    written_down: *written_down,
                    entered,
                })))
            }

            (Step::Confirming { result, .. }, Action::Skip) => {
                if !self.skip_available() {
                    return Err(AppError::State(
                        "Skipping the backup confirmation is not enabled".to_string(),
                    ));
                }
                Ok(Transition::to(next(Step::Ready {
                    result: result.clone(),
                    backup: BackupStatus::Skipped,
                })))
            }

            (Step::Ready { result, .. }, Action::Fund) => {
                if !state.can_fund() {
                    return Err(AppError::State(format!(
                        "Wallet {} is not loaded yet",
                        result.wallet_file_name()
                    )));
                }
                let effect = Effect::StartWallet {
                    wallet_file_name: result.wallet_file_name().to_string(),
                    auth: result.auth().clone(),
                };
                Ok(Transition::with_effect(
                    next(Step::Done {
                        wallet_file_name: result.wallet_file_name().to_string(),
                    }),
                    effect,
                ))
            }

            (step, action) => Err(AppError::State(format!(
                "{} not allowed while {}",
                action_name(&action),
                step.name()
            ))),
        }
    }
}

/// Every entered word matches its seed word, ignoring surrounding whitespace and case.
fn backup_matches(seed: &[String], entered: &[String]) -> bool {
    seed.len() == entered.len()
        && seed
            .iter()
            .zip(entered)
            .all(|(expected, given)| given.trim().eq_ignore_ascii_case(expected))
}

fn action_name(action: &Action) -> &'static str {
    match action {
        Action::Edit(..) => "edit",
        Action::Submit => "submit",
        Action::CreationSucceeded(_) => "creation result",
        Action::CreationFailed(_) => "creation failure",
        Action::ToggleReveal => "reveal toggle",
        Action::ToggleWrittenDown => "written-down toggle",
        Action::Next => "next",
        Action::Back => "back",
        Action::EnterWord(..) => "seed word entry",
        Action::Skip => "skip",
        Action::WalletLoaded(_) => "wallet loaded",
        Action::Fund => "fund",
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::utils::validation::FormViolation;

    const NAME: &str = "test_wallet21";
    const PASSWORD: &str = "correct horse battery staple";

    fn seed() -> Vec<String> {
        ["abandon", "ability", "able"].iter().map(|w| w.to_string()).collect()
    }

    fn result() -> CreationResult {
        CreationResult::new(
            format!("{}.jmdat", NAME),
            ApiAuthContext {
                token: "ANY_TOKEN".to_string(),
            },
            seed(),
        )
    }

    fn apply(machine: &Machine, state: WorkflowState, actions: Vec<Action>) -> WorkflowState {
        actions.into_iter().fold(state, |state, action| {
            machine
                .transition(&state, action)
                .expect("transition should succeed in test")
                .state
        })
    }

    fn filled_form(machine: &Machine, name: &str, password: &str, confirm: &str) -> WorkflowState {
        apply(
            machine,
            WorkflowState::default(),
            vec![
                Action::Edit(FormField::WalletName, name.to_string()),
                Action::Edit(FormField::Password, password.to_string()),
                Action::Edit(FormField::PasswordConfirm, confirm.to_string()),
            ],
        )
    }

    fn created(machine: &Machine) -> WorkflowState {
        let state = filled_form(machine, NAME, PASSWORD, PASSWORD);
        apply(machine, state, vec![Action::Submit, Action::CreationSucceeded(result())])
    }

    fn confirming(machine: &Machine) -> WorkflowState {
        apply(
            machine,
            created(machine),
            vec![Action::ToggleReveal, Action::ToggleWrittenDown, Action::Next],
        )
    }

    // ========== Editing ==========

    #[test]
    fn test_edits_do_not_validate() {
        let machine = Machine::default();
        let state = filled_form(&machine, "bad!", "", "x");

        match state.step {
            Step::Editing { violations, error, .. } => {
                assert!(violations.is_empty());
                assert!(error.is_none());
            }
            other => panic!("Expected Editing, got {:?}", other),
        }
    }

    #[test]
    fn test_submit_invalid_form_stays_editing_without_effect() {
        let machine = Machine::default();
        let transition = machine
            .transition(&WorkflowState::default(), Action::Submit)
            .expect("submit should be accepted");

        assert!(transition.effect.is_none());
        match transition.state.step {
            Step::Editing { violations, .. } => assert_eq!(violations.len(), 3),
            other => panic!("Expected Editing, got {:?}", other),
        }
    }

    #[test]
    fn test_submit_valid_form_requests_creation() {
        let machine = Machine::default();
        let state = filled_form(&machine, NAME, PASSWORD, PASSWORD);
        let transition = machine.transition(&state, Action::Submit).expect("submit");

        assert_eq!(transition.state.step.name(), "submitting");
        assert_eq!(
            transition.effect,
            Some(Effect::CreateWallet {
                wallet_file_name: "test_wallet21.jmdat".to_string(),
                password: PASSWORD.to_string(),
            })
        );
    }

    #[test]
    fn test_second_submit_while_submitting_is_rejected() {
        let machine = Machine::default();
        let state = filled_form(&machine, NAME, PASSWORD, PASSWORD);
        let state = apply(&machine, state, vec![Action::Submit]);

        let err = machine.transition(&state, Action::Submit).unwrap_err();
        assert!(matches!(err, AppError::State(_)));
    }

    #[test]
    fn test_creation_failure_returns_to_editing_with_form_kept() {
        let machine = Machine::default();
        let state = filled_form(&machine, NAME, PASSWORD, PASSWORD);
        let state = apply(
            &machine,
            state,
            vec![Action::Submit, Action::CreationFailed("Wallet already exists".to_string())],
        );

        match state.step {
            Step::Editing { form, violations, error } => {
                assert_eq!(form.wallet_name, NAME);
                assert!(violations.is_empty());
                assert_eq!(error.as_deref(), Some("Wallet already exists"));
            }
            other => panic!("Expected Editing, got {:?}", other),
        }
    }

    #[test]
    fn test_resubmit_after_fix_clears_violations() {
        let machine = Machine::default();
        let state = filled_form(&machine, NAME, ".*", "a_mismatching_input");
        let state = apply(&machine, state, vec![Action::Submit]);
        match &state.step {
            Step::Editing { violations, .. } => {
                assert!(violations.contains(&FormViolation::InvalidPasswordConfirm))
            }
            other => panic!("Expected Editing, got {:?}", other),
        }

        let state = apply(
            &machine,
            state,
            vec![Action::Edit(FormField::PasswordConfirm, ".*".to_string())],
        );
        let transition = machine.transition(&state, Action::Submit).expect("submit");
        assert!(matches!(transition.state.step, Step::Submitting { .. }));
    }

    #[test]
    fn test_creation_without_seed_phrase_returns_to_editing() {
        let machine = Machine::default();
        let state = filled_form(&machine, NAME, PASSWORD, PASSWORD);
        let empty = CreationResult::new(
            format!("{}.jmdat", NAME),
            ApiAuthContext {
                token: "ANY_TOKEN".to_string(),
            },
            Vec::new(),
        );
        let state = apply(&machine, state, vec![Action::Submit, Action::CreationSucceeded(empty)]);

        match state.step {
            Step::Editing { form, error, .. } => {
                assert_eq!(form.wallet_name, NAME);
                assert_eq!(error.as_deref(), Some(EMPTY_SEED_MESSAGE));
            }
            other => panic!("Expected Editing, got {:?}", other),
        }
    }

    // ========== Created ==========

    #[test]
    fn test_next_requires_both_toggles() {
        let machine = Machine::default();
        let state = created(&machine);
        assert!(machine.transition(&state, Action::Next).is_err());

        let revealed = apply(&machine, state.clone(), vec![Action::ToggleReveal]);
        assert!(machine.transition(&revealed, Action::Next).is_err());

        let written = apply(&machine, state, vec![Action::ToggleWrittenDown]);
        assert!(machine.transition(&written, Action::Next).is_err());
    }

    #[test]
    fn test_toggles_are_independent() {
        let machine = Machine::default();
        let state = apply(
            &machine,
            created(&machine),
            vec![Action::ToggleReveal, Action::ToggleWrittenDown, Action::ToggleReveal],
        );

        match state.step {
            Step::Created { revealed, written_down, .. } => {
                assert!(!revealed);
                assert!(written_down);
            }
            other => panic!("Expected Created, got {:?}", other),
        }
    }

    #[test]
    fn test_stale_creation_result_is_rejected() {
        let machine = Machine::default();
        let state = created(&machine);
        assert!(machine
            .transition(&state, Action::CreationSucceeded(result()))
            .is_err());
    }

    // ========== Confirming ==========

    #[test]
    fn test_back_returns_to_created_with_toggles() {
        let machine = Machine::default();
        let state = apply(&machine, confirming(&machine), vec![Action::Back]);

        match state.step {
            Step::Created { revealed, written_down, .. } => assert!(revealed && written_down),
            other => panic!("Expected Created, got {:?}", other),
        }
    }

    #[test]
    fn test_entering_all_words_verifies_backup() {
        let machine = Machine::default();
        let state = apply(
            &machine,
            confirming(&machine),
            vec![
                Action::EnterWord(0, "abandon".to_string()),
                Action::EnterWord(1, " Ability ".to_string()),
            ],
        );
        assert_eq!(state.step.name(), "confirming");

        let state = apply(&machine, state, vec![Action::EnterWord(2, "able".to_string())]);
        assert!(matches!(
            state.step,
            Step::Ready {
                backup: BackupStatus::Verified,
                ..
            }
        ));
    }

    #[test]
    fn test_wrong_word_keeps_confirming() {
        let machine = Machine::default();
        let state = apply(
            &machine,
            confirming(&machine),
            vec![
                Action::EnterWord(0, "abandon".to_string()),
                Action::EnterWord(1, "ability".to_string()),
                Action::EnterWord(2, "zoo".to_string()),
            ],
        );
        assert_eq!(state.step.name(), "confirming");
    }

    #[test]
    fn test_word_position_out_of_range() {
        let machine = Machine::default();
        let err = machine
            .transition(&confirming(&machine), Action::EnterWord(3, "x".to_string()))
            .unwrap_err();
        assert!(matches!(err, AppError::Validation(_)));
    }

    #[test]
    fn test_skip_rejected_when_feature_disabled() {
        let machine = Machine::default();
        let err = machine.transition(&confirming(&machine), Action::Skip).unwrap_err();
        assert!(matches!(err, AppError::State(_)));
    }

    #[test]
    fn test_skip_when_feature_enabled() {
        let machine = Machine::new(
            WalletNamePolicy::default(),
            FeatureFlags::default().with(DebugFeature::SkipWalletBackupConfirmation, true),
        );
        let state = apply(&machine, confirming(&machine), vec![Action::Skip]);
        assert!(matches!(
            state.step,
            Step::Ready {
                backup: BackupStatus::Skipped,
                ..
            }
        ));
    }

    // ========== Ready ==========

    #[test]
    fn test_fund_requires_loaded_wallet() {
        let machine = Machine::new(
            WalletNamePolicy::default(),
            FeatureFlags::default().with(DebugFeature::SkipWalletBackupConfirmation, true),
        );
        let ready = apply(&machine, confirming(&machine), vec![Action::Skip]);
        assert!(machine.transition(&ready, Action::Fund).is_err());

        let other_loaded = apply(
            &machine,
            ready.clone(),
            vec![Action::WalletLoaded(Some("other.jmdat".to_string()))],
        );
        assert!(machine.transition(&other_loaded, Action::Fund).is_err());

        let loaded = apply(
            &machine,
            ready,
            vec![Action::WalletLoaded(Some("test_wallet21.jmdat".to_string()))],
        );
        let transition = machine.transition(&loaded, Action::Fund).expect("fund");
        assert_eq!(
            transition.effect,
            Some(Effect::StartWallet {
                wallet_file_name: "test_wallet21.jmdat".to_string(),
                auth: ApiAuthContext {
                    token: "ANY_TOKEN".to_string()
                },
            })
        );
        assert!(matches!(transition.state.step, Step::Done { .. }));
    }

    #[test]
    fn test_wallet_loaded_is_tracked_in_any_step() {
        let machine = Machine::default();
        let state = apply(
            &machine,
            WorkflowState::default(),
            vec![Action::WalletLoaded(Some("a.jmdat".to_string()))],
        );
        assert_eq!(state.loaded_wallet.as_deref(), Some("a.jmdat"));
        assert_eq!(state.step, Step::editing());
    }

    #[test]
    fn test_fund_not_allowed_while_confirming() {
        let machine = Machine::default();
        let state = apply(
            &machine,
            confirming(&machine),
            vec![Action::WalletLoaded(Some("test_wallet21.jmdat".to_string()))],
        );
        assert!(machine.transition(&state, Action::Fund).is_err());
    }
}
