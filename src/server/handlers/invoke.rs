// viewer-response invocation handler

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::{json, Value};
use tracing::{debug, instrument, warn};

use crate::{event, policy};

/// run the edge function over a posted event and reply with the mutated response
#[instrument(skip_all)]
pub async fn handle_invoke(Json(event): Json<Value>) -> Response {
    let overridden = count_managed(&event);

    match event::handler(event) {
        Ok(response) => {
            debug!("policy applied, {} managed headers overridden", overridden);
            (StatusCode::OK, Json(response)).into_response()
        }
        Err(err) => {
            warn!("rejected event: {}", err);
            (err.status_code(), Json(json!({ "error": err.to_string() }))).into_response()
        }
    }
}

/// number of managed headers the event already carried under the exact key
/// the handler overwrites
fn count_managed(event: &Value) -> usize {
    event
        .pointer("/response/headers")
        .and_then(Value::as_object)
        .map(|headers| headers.keys().filter(|name| policy::is_managed(name)).count())
        .unwrap_or(0)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_count_managed() {
        let event = json!({
            "response": {
                "headers": {
                    "x-frame-options": { "value": "SAMEORIGIN" },
                    "referrer-policy": { "value": "no-referrer" },
                    "cache-control": { "value": "no-store" }
                }
            }
        });
        assert_eq!(count_managed(&event), 2);

        let event = json!({
            "response": {
                "headers": {
                    "X-Frame-Options": { "value": "SAMEORIGIN" },
                    "Referrer-Policy": { "value": "no-referrer" }
                }
            }
        });
        assert_eq!(count_managed(&event), 0);
        assert_eq!(count_managed(&json!({})), 0);
        assert_eq!(count_managed(&json!({ "response": { "headers": [] } })), 0);
    }
}
