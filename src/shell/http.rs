use std::any::Any;

use axum::{
    Router,
    http::StatusCode,
    response::Response,
    routing::{get, post, put},
};
use tower_http::{catch_panic::CatchPanicLayer, trace::TraceLayer};

use crate::modules::events::use_cases::create_event::inbound::http as create_http;
use crate::modules::events::use_cases::list_events::inbound::http as list_http;
use crate::modules::events::use_cases::service_info::inbound::http as info_http;
use crate::modules::events::use_cases::update_event::inbound::http as update_http;
use crate::shell::error::message_response;
use crate::shell::state::AppState;

pub fn router(state: AppState) -> Router {
    with_layers(
        Router::new()
            .route("/", get(info_http::health))
            .route("/version", get(info_http::version))
            .route("/events", get(list_http::handle))
            .route("/event", post(create_http::handle))
            .route("/event/{id}", put(update_http::handle))
            .with_state(state),
    )
}

fn with_layers(router: Router) -> Router {
    router
        .layer(CatchPanicLayer::custom(panic_response))
        .layer(TraceLayer::new_for_http())
}

/// Last line of defence: a panicking handler still answers `500 {"message": ...}`.
fn panic_response(panic: Box<dyn Any + Send + 'static>) -> Response {
    let message = if let Some(s) = panic.downcast_ref::<String>() {
        s.clone()
    } else if let Some(s) = panic.downcast_ref::<&str>() {
        (*s).to_string()
    } else {
        "unhandled panic".to_string()
    };
    tracing::error!(%message, "handler panicked");
    message_response(StatusCode::INTERNAL_SERVER_ERROR, message)
}
