// shared test helpers
#![allow(dead_code)] // helpers are shared across multiple integration test crates

use axum::body::Body;
use axum::http::{header, Method, Request};
use axum::response::Response;
use edgeguard::{
    config::{AppConfig, ServerConfig},
    server::app::create_app,
};
use serde_json::{json, Value};

pub fn base_config() -> AppConfig {
    AppConfig {
        server: ServerConfig {
            port: 18000,
            ..Default::default()
        },
    }
}

pub fn app(config: AppConfig) -> axum::Router {
    create_app(&config)
}

pub fn get(uri: &str) -> Request<Body> {
    Request::builder()
        .method(Method::GET)
        .uri(uri)
        .body(Body::empty())
        .unwrap()
}

pub fn post_json(uri: &str, body: impl Into<Body>) -> Request<Body> {
    Request::builder()
        .method(Method::POST)
        .uri(uri)
        .header(header::CONTENT_TYPE, "application/json")
        .body(body.into())
        .unwrap()
}

pub fn invoke(event: &Value) -> Request<Body> {
    post_json("/invoke", event.to_string())
}

/// a viewer-response event as the edge runtime sends it
pub fn viewer_response_event(headers: Value) -> Value {
    json!({
        "version": "1.0",
        "context": {
            "distributionDomainName": "d111111abcdef8.cloudfront.net",
            "distributionId": "EDFDVBD6EXAMPLE",
            "eventType": "viewer-response",
            "requestId": "4TyzHTaYWb1GX1qTfsHhEqV6HUDd_BzoBZnwfnvQc_1oF26ClkoUSEQ=="
        },
        "viewer": { "ip": "198.51.100.11" },
        "request": {
            "method": "GET",
            "uri": "/media/index.mpd",
            "querystring": {},
            "headers": { "host": { "value": "video.example.com" } },
            "cookies": {}
        },
        "response": {
            "statusCode": 200,
            "statusDescription": "OK",
            "headers": headers,
            "cookies": {}
        }
    })
}

pub async fn body_string(response: Response) -> String {
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    String::from_utf8(bytes.to_vec()).unwrap()
}

pub async fn body_json(response: Response) -> Value {
    serde_json::from_str(&body_string(response).await).unwrap()
}
