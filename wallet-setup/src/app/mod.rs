//! # Create-Wallet Workflow Orchestrator
//!
//! [`CreateWalletApp`] owns the workflow state and connects the pure
//! transition [`Machine`] to the outside world: it spawns the create-wallet
//! and session tasks, feeds their results back as actions, and calls the
//! host's [`WalletStarter`] when the user funds the wallet.
//!
//! ## Architecture
//!
//! ```text
//! ┌──────────────────────────────────────────────────────────┐
//! │                 Workflow owner (host loop)               │
//! │  ┌────────────────────────────────────────────────────┐  │
//! │  │  CreateWalletApp                                   │  │
//! │  │  - handle_*_click() / edit_field() - user actions  │  │
//! │  │  - on_tick() / next_event() - async results        │  │
//! │  │  - view() - what to draw                           │  │
//! │  └────────────┬───────────────────────────────────────┘  │
//! │               │ Machine::transition(state, action)       │
//! │  ┌────────────▼───────────────────────────────────────┐  │
//! │  │  State: Arc<RwLock<WorkflowState>>                 │  │
//! │  └────────────────────────────────────────────────────┘  │
//! └───────────────────────┬──────────────────────────────────┘
//!                         │ async_channel (unbounded)
//! ┌───────────────────────▼──────────────────────────────────┐
//! │  Tokio tasks: create_wallet(), check_session()           │
//! └──────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Concurrency
//!
//! Only the owner mutates the state. At most one create-wallet request is in
//! flight: a second submit while submitting is rejected by the machine before
//! any task is spawned.
//!
//! ## Usage Example
//!
//! ```rust,ignore
//! use std::sync::Arc;
//! use wallet_setup::app::{CreateWalletApp, FormField};
//!
//! let mut app = CreateWalletApp::new(api, starter, &config);
//! app.edit_field(FormField::WalletName, "savings".to_string())?;
//! app.edit_field(FormField::Password, "pw".to_string())?;
//! app.edit_field(FormField::PasswordConfirm, "pw".to_string())?;
//! app.handle_create_click()?;
//!
//! // Wait for the wallet service
//! app.next_event().await;
//! let view = app.view();
//! ```

mod events;
mod machine;
mod state;
mod tasks;

pub use events::FlowEvent;
pub use machine::{Action, Effect, Machine, Transition};
pub use state::*;

use std::sync::Arc;

use async_channel::{unbounded, Receiver, Sender};
use parking_lot::RwLock;
use shared::GetInfoResponse;
use tokio::task::AbortHandle;
use uuid::Uuid;

use crate::config::WalletSetupConfig;
use crate::core::error::{AppError, Result};
use crate::core::service::{WalletApi, WalletStarter};
use crate::ui::{self, WorkflowView};

/// Message shown when a pending creation is cancelled by the host.
const CANCELLED_MESSAGE: &str = "Wallet creation cancelled";

/// The create-wallet request whose result the workflow is waiting for.
struct PendingCreate {
    request_id: Uuid,
    handle: AbortHandle,
}

/// Create-wallet workflow owned by a host application.
pub struct CreateWalletApp {
    /// Workflow state.
    ///
    /// Shared so a renderer can read it; only `CreateWalletApp` writes it.
    pub state: Arc<RwLock<WorkflowState>>,

    /// Receiver for async task results, polled by [`Self::on_tick`].
    pub event_rx: Receiver<FlowEvent>,

    event_tx: Sender<FlowEvent>,
    machine: Machine,
    api: Arc<dyn WalletApi>,
    starter: Arc<dyn WalletStarter>,
    pending_create: Option<PendingCreate>,
}

impl CreateWalletApp {
    /// Create a workflow in the `Editing` step with an empty form.
    ///
    /// Feature flags and the wallet name policy are taken from `config` once
    /// and stay fixed for the lifetime of the workflow.
    pub fn new(
        api: Arc<dyn WalletApi>,
        starter: Arc<dyn WalletStarter>,
        config: &WalletSetupConfig,
    ) -> Self {
        let (event_tx, event_rx) = unbounded();
        let machine = Machine::new(config.name_policy.clone(), config.features.clone());

        tracing::info!(
            skip_backup_available = machine.skip_available(),
            "Create wallet workflow initialized"
        );

        Self {
            state: Arc::new(RwLock::new(WorkflowState::default())),
            event_rx,
            event_tx,
            machine,
            api,
            starter,
            pending_create: None,
        }
    }

    /// What to draw for the current state.
    pub fn view(&self) -> WorkflowView {
        ui::render(&self.state.read(), self.machine.features())
    }

    /// Name of the current step (`editing`, `submitting`, ...).
    pub fn step_name(&self) -> &'static str {
        self.state.read().step.name()
    }

    /// Whether a create-wallet request is outstanding.
    pub fn is_submitting(&self) -> bool {
        matches!(self.state.read().step, Step::Submitting { .. })
    }

    /// Apply an action and carry out its effect.
    ///
    /// Rejected actions are logged and leave the state unchanged.
    pub fn dispatch(&mut self, action: Action) -> Result<()> {
        let transition = {
            let state = self.state.read();
            self.machine.transition(&state, action)
        };

        let Transition { state, effect } = match transition {
            Ok(transition) => transition,
            Err(e) => {
                tracing::warn!(error = %e, step = self.step_name(), "Action ignored");
                return Err(e);
            }
        };

        let from = self.step_name();
        let to = state.step.name();
        *self.state.write() = state;
        if from != to {
            tracing::info!(from, to, "Workflow step changed");
        }

        if let Some(effect) = effect {
            self.run_effect(effect);
        }
        Ok(())
    }

    fn run_effect(&mut self, effect: Effect) {
        match effect {
            Effect::CreateWallet {
                wallet_file_name,
                password,
            } => {
                let request_id = Uuid::new_v4();
                let handle = tasks::wallet::create_wallet(
                    self.api.clone(),
                    self.event_tx.clone(),
                    request_id,
                    wallet_file_name,
                    password,
                );
                self.pending_create = Some(PendingCreate { request_id, handle });
            }
            Effect::StartWallet {
                wallet_file_name,
                auth,
            } => {
                tracing::info!(wallet = %wallet_file_name, "Starting wallet");
                self.starter.start_wallet(&wallet_file_name, &auth);
            }
        }
    }

    // ========== User actions ==========

    /// Form field changed. Never validates.
    pub fn edit_field(&mut self, field: FormField, value: String) -> Result<()> {
        self.dispatch(Action::Edit(field, value))
    }

    /// Create button clicked: validate, then submit if the form is valid.
    ///
    /// Rejected with [`AppError::State`] while a request is in flight.
    pub fn handle_create_click(&mut self) -> Result<()> {
        self.dispatch(Action::Submit)
    }

    pub fn toggle_reveal(&mut self) -> Result<()> {
        self.dispatch(Action::ToggleReveal)
    }

    pub fn toggle_written_down(&mut self) -> Result<()> {
        self.dispatch(Action::ToggleWrittenDown)
    }

    pub fn handle_next_click(&mut self) -> Result<()> {
        self.dispatch(Action::Next)
    }

    pub fn handle_back_click(&mut self) -> Result<()> {
        self.dispatch(Action::Back)
    }

    pub fn handle_skip_click(&mut self) -> Result<()> {
        self.dispatch(Action::Skip)
    }

    /// Seed word re-entered at zero-based `index`.
    pub fn enter_backup_word(&mut self, index: usize, word: String) -> Result<()> {
        self.dispatch(Action::EnterWord(index, word))
    }

    /// Fund wallet clicked: hands the wallet to the host.
    pub fn handle_fund_click(&mut self) -> Result<()> {
        self.dispatch(Action::Fund)
    }

    // ========== Host actions ==========

    /// Host reports the wallet file loaded by the service.
    pub fn set_loaded_wallet(&mut self, wallet_file_name: Option<String>) -> Result<()> {
        self.dispatch(Action::WalletLoaded(wallet_file_name))
    }

    /// Ask the service which wallet is loaded. The answer arrives as an event.
    pub fn check_session(&self) {
        tasks::wallet::check_session(self.api.clone(), self.event_tx.clone());
    }

    /// Probe the wallet service.
    pub async fn service_info(&self) -> Result<GetInfoResponse> {
        self.api.get_info().await
    }

    /// Abort an outstanding create-wallet request and return to the form.
    ///
    /// Returns `false` when nothing was pending. A result the cancelled
    /// request already queued is dropped when it arrives.
    pub fn cancel_pending(&mut self) -> bool {
        let Some(pending) = self.pending_create.take() else {
            return false;
        };
        pending.handle.abort();
        tracing::info!(request_id = %pending.request_id, "Pending wallet creation cancelled");
        if self.is_submitting() {
            let _ = self.dispatch(Action::CreationFailed(CANCELLED_MESSAGE.to_string()));
        }
        true
    }

    // ========== Async results ==========

    /// Process every pending async result without blocking.
    pub fn on_tick(&mut self) {
        while let Ok(event) = self.event_rx.try_recv() {
            self.handle_event(event);
        }
    }

    /// Wait for the next async result and process it.
    pub async fn next_event(&mut self) {
        if let Ok(event) = self.event_rx.recv().await {
            self.handle_event(event);
        }
    }

    pub fn handle_event(&mut self, event: FlowEvent) {
        match event {
            FlowEvent::WalletCreated(request_id, result) => {
                let is_current = self
                    .pending_create
                    .as_ref()
                    .is_some_and(|pending| pending.request_id == request_id);
                if !is_current {
                    tracing::warn!(%request_id, "Dropping result of a cancelled wallet creation");
                    return;
                }
                self.pending_create = None;
                let action = match result {
                    Ok(response) => Action::CreationSucceeded(response.into()),
                    Err(e) => Action::CreationFailed(user_message(e)),
                };
                let _ = self.dispatch(action);
            }
            FlowEvent::SessionChecked(Ok(session)) => {
                let loaded = session.loaded_wallet().map(str::to_string);
                let changed = loaded != self.state.read().loaded_wallet;
                if changed {
                    let _ = self.dispatch(Action::WalletLoaded(loaded));
                }
            }
            FlowEvent::SessionChecked(Err(e)) => {
                tracing::warn!(error = %e, "Could not determine loaded wallet");
            }
        }
    }
}

impl Drop for CreateWalletApp {
    fn drop(&mut self) {
        if let Some(pending) = self.pending_create.take() {
            pending.handle.abort();
        }
    }
}

/// Text for the form-level error notice.
fn user_message(error: AppError) -> String {
    match error {
        AppError::Rejected(message) => message,
        other if other.is_user_facing() => other.to_string(),
        other => {
            tracing::error!(error = %other, "Unexpected wallet creation error");
            "Wallet creation failed".to_string()
        }
    }
}
