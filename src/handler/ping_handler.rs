use crate::{service::ping_service::PingRecord, state::AppState};
use axum::{
    body::Bytes,
    extract::State,
    http::{StatusCode, header},
    response::IntoResponse,
};
use tracing::debug;

pub async fn ping(State(app_state): State<AppState>) -> String {
    debug!("ping handler - get");

    format!("{}\n", app_state.config.message)
}

// Malformed payloads are the operator's problem, not the client's:
// the sink hears about them, the caller always gets 204.
pub async fn post_ping(State(app_state): State<AppState>, body: Bytes) -> StatusCode {
    debug!("ping handler - post, {} bytes", body.len());

    let record = PingRecord::from_body(&body);
    app_state.sink.record_ping(&record);

    StatusCode::NO_CONTENT
}

pub async fn method_not_allowed() -> impl IntoResponse {
    (
        StatusCode::METHOD_NOT_ALLOWED,
        [(header::ALLOW, "GET, POST")],
    )
}
