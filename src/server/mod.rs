// server module public api

pub mod app;
pub mod handlers;
pub mod middleware;

pub use app::{create_app, start_server};
pub use middleware::SecurityHeadersLayer;
