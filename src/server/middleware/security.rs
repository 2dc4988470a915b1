// security headers middleware

use axum::{body::Body, extract::Request, http::Response, middleware::Next};

use crate::policy;

/// add the policy headers to all responses
pub async fn add_security_headers(request: Request, next: Next) -> Response<Body> {
    let mut response = next.run(request).await;

    policy::apply(response.headers_mut());

    response
}
