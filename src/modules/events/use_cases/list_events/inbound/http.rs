use axum::{Json, extract::State};

use crate::modules::events::core::reply::StoreReply;
use crate::shell::error::ApiError;
use crate::shell::state::AppState;

pub async fn handle(State(state): State<AppState>) -> Result<Json<StoreReply>, ApiError> {
    let events = state.events.live_events().await?;
    Ok(Json(StoreReply::Events(events)))
}
