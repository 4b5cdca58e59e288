use axum::http::{Method, StatusCode, Uri};
use tracing::debug;

/// Catch-all: every method on every path other than /ping.
pub async fn default_handler(method: Method, uri: Uri) -> StatusCode {
    debug!("default handler - {} {}", method, uri);

    StatusCode::NO_CONTENT
}
