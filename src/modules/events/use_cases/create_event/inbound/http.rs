use axum::{Json, extract::State, extract::rejection::JsonRejection, http::StatusCode};

use crate::modules::events::core::event::NewEvent;
use crate::modules::events::core::reply::{ReturnMode, StoreReply};
use crate::shell::error::ApiError;
use crate::shell::state::AppState;

/// Stores the body as a new event. No field is validated.
pub async fn handle(
    State(state): State<AppState>,
    body: Result<Json<NewEvent>, JsonRejection>,
) -> Result<(StatusCode, Json<StoreReply>), ApiError> {
    let Json(body) = body?;
    let reply = state.events.add_event(body, ReturnMode::All).await?;
    Ok((StatusCode::CREATED, Json(reply)))
}
