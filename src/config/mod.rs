// configuration module public api

pub mod types;
pub mod loading;

pub use types::*;
pub use loading::load_configuration;
#[cfg(feature = "testing")]
pub use loading::load_config_from_file;
