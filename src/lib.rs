// edgeguard: security header policy for edge viewer responses

pub mod cli;
pub mod config;
pub mod error;
pub mod event;
pub mod policy;
pub mod server;

pub use error::PolicyError;
pub use policy::{HeaderTarget, SECURITY_HEADERS};
