//! # Workflow Events
//!
//! Results of async tasks, sent back to the workflow owner.

use shared::{CreateWalletResponse, SessionResponse};
use uuid::Uuid;

use crate::core::error::AppError;

/// Async task results sent to the workflow owner
#[derive(Debug, Clone)]
pub enum FlowEvent {
    /// Create-wallet call completed
    ///
    /// Tagged with the id of the request that produced it; results of
    /// cancelled requests are dropped by the owner.
    WalletCreated(Uuid, Result<CreateWalletResponse, AppError>),
    /// Session check completed
    SessionChecked(Result<SessionResponse, AppError>),
}
