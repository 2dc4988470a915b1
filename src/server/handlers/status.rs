// liveness probe and fallback

use axum::http::StatusCode;

/// always ok while the server is accepting requests
pub async fn handle_health() -> &'static str {
    "ok"
}

/// anything that is not a known route
pub async fn handle_not_found() -> StatusCode {
    StatusCode::NOT_FOUND
}
