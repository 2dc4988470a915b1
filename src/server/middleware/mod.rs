// http middleware

pub mod layer;
pub mod security;

pub use layer::{SecurityHeaders, SecurityHeadersLayer};
pub use security::add_security_headers;
