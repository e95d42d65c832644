//! Save negotiation.
//!
//! States: Idle → Submitting → {Success, Conflict, Failure}. A conflict is
//! put to the user exactly once; confirmation triggers a single resubmit
//! with the override flag, cancellation resolves without retrying, and a
//! second conflict after the override is a hard save error.

use crate::errors::{AppError, AppResult};
use crate::models::conflict::Conflict;
use crate::store::wire::SavePayload;
use crate::store::{JourneyStore, SaveResponse};

/// How the user answers a conflict confirmation. The CLI reads stdin; the
/// tests script it.
pub trait ConflictPrompt {
    fn confirm_replace(&self, conflicts: &[Conflict]) -> bool;
}

#[derive(Debug, PartialEq, Eq)]
pub enum SubmitOutcome {
    /// Persisted; the store's confirmation message is carried along.
    Saved(String),
    /// User declined to override the conflicting records; nothing was
    /// retried and the entered data stays on the caller's hands.
    Cancelled(Vec<Conflict>),
}

pub async fn negotiate_save(
    store: &dyn JourneyStore,
    prompt: &dyn ConflictPrompt,
    mut payload: SavePayload,
) -> AppResult<SubmitOutcome> {
    let response = store
        .save_table(&payload)
        .await
        .map_err(|e| AppError::Save(e.to_string()))?;

    let conflicts = match response {
        SaveResponse::Saved(message) => return Ok(SubmitOutcome::Saved(message)),
        SaveResponse::Conflict(conflicts) => conflicts,
    };

    tracing::info!(count = conflicts.len(), "store reported save conflicts");

    if !prompt.confirm_replace(&conflicts) {
        return Ok(SubmitOutcome::Cancelled(conflicts));
    }

    payload.substituir = Some(true);
    let retry = store
        .save_table(&payload)
        .await
        .map_err(|e| AppError::Save(e.to_string()))?;

    match retry {
        SaveResponse::Saved(message) => Ok(SubmitOutcome::Saved(message)),
        SaveResponse::Conflict(_) => Err(AppError::Save(
            "store still reports conflicts after override; giving up".to_string(),
        )),
    }
}
