use axum::{
    Json,
    extract::{Path, State, rejection::JsonRejection},
};

use crate::modules::events::core::event::EventPatch;
use crate::modules::events::core::reply::{ReturnMode, StoreReply};
use crate::shell::error::ApiError;
use crate::shell::state::AppState;

/// Merges the body onto the event named by the path. The path id always wins
/// over an `id` in the body.
pub async fn handle(
    State(state): State<AppState>,
    Path(raw_id): Path<String>,
    body: Result<Json<EventPatch>, JsonRejection>,
) -> Result<Json<StoreReply>, ApiError> {
    let id = raw_id
        .parse::<u64>()
        .map_err(|_| ApiError::BadRequest(format!("invalid event id {raw_id:?}")))?;
    let Json(patch) = body?;
    let reply = state.events.update_event(id, patch, ReturnMode::All).await?;
    Ok(Json(reply))
}
