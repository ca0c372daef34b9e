//! Wallet service tasks

use std::sync::Arc;

use async_channel::Sender;
use tokio::task::AbortHandle;
use tracing::Instrument;
use uuid::Uuid;

use crate::app::events::FlowEvent;
use crate::core::service::WalletApi;

/// Spawn the create-wallet call tagged with `request_id`.
///
/// The returned handle aborts the request; an aborted task sends nothing.
pub(crate) fn create_wallet(
    api: Arc<dyn WalletApi>,
    event_tx: Sender<FlowEvent>,
    request_id: Uuid,
    wallet_file_name: String,
    password: String,
) -> AbortHandle {
    let span = tracing::info_span!("create_wallet_task", %request_id, wallet = %wallet_file_name);

    let handle = tokio::spawn(
        async move {
            let result = api.create_wallet(&wallet_file_name, &password).await;
            if let Err(e) = &result {
                tracing::warn!(error = %e, "Create wallet failed");
            }
            if event_tx.send(FlowEvent::WalletCreated(request_id, result)).await.is_err() {
                tracing::debug!("Workflow dropped before create result arrived");
            }
        }
        .instrument(span),
    );

    handle.abort_handle()
}

/// Spawn a session check.
pub(crate) fn check_session(api: Arc<dyn WalletApi>, event_tx: Sender<FlowEvent>) {
    tokio::spawn(async move {
        let result = api.get_session().await;
        match &result {
            Ok(session) => tracing::debug!(loaded = ?session.loaded_wallet(), "Session checked"),
            Err(e) => tracing::warn!(error = %e, "Session check failed"),
        }
        if event_tx.send(FlowEvent::SessionChecked(result)).await.is_err() {
            tracing::debug!("Workflow dropped before session result arrived");
        }
    });
}
