// configuration loading and merging logic

use anyhow::{Context, Result};
use figment::{
    providers::{Env, Format, Serialized, Toml},
    Figment,
};
use tracing::{debug, info};

use super::types::{AppConfig, Cli, Command, ServeArgs};

/// load and merge configuration from multiple sources
/// precedence: defaults < config file < environment < cli arguments
pub fn load_configuration(cli: &Cli) -> Result<AppConfig> {
    debug!("loading configuration with cli args: {:?}", cli);

    // start with default configuration
    let mut figment = Figment::new().merge(Serialized::defaults(AppConfig::default()));

    // merge config file if provided
    if let Some(config_path) = &cli.config_file {
        if config_path.exists() {
            info!("loading config file: {}", config_path.display());
            figment = figment.merge(Toml::file(config_path));
        } else {
            anyhow::bail!("config file not found: {}", config_path.display());
        }
    }

    // EDGEGUARD_SERVER__PORT=9000 and friends
    figment = figment.merge(Env::prefixed("EDGEGUARD_").split("__"));

    // merge cli overrides - highest precedence
    if let Command::Serve(args) = &cli.command {
        figment = figment.merge(cli_overrides(args));
    }

    // extract final configuration
    let config: AppConfig = figment.extract().context("failed to parse configuration")?;

    validate_configuration(&config)?;

    debug!("final configuration: {:?}", config);
    Ok(config)
}

/// convert serve arguments to configuration overrides, unset flags are skipped
fn cli_overrides(args: &ServeArgs) -> Serialized<ServeArgs> {
    Serialized::defaults(args.clone()).key("server")
}

/// validate configuration for consistency
fn validate_configuration(config: &AppConfig) -> Result<()> {
    if config.server.port == 0 {
        anyhow::bail!("port cannot be 0");
    }

    if config.server.max_event_bytes == 0 {
        anyhow::bail!("max_event_bytes must be greater than 0");
    }

    Ok(())
}

/// load configuration from a file for testing purposes
#[cfg(feature = "testing")]
pub fn load_config_from_file(config_path: &std::path::Path) -> Result<AppConfig> {
    let figment = Figment::new()
        .merge(Serialized::defaults(AppConfig::default()))
        .merge(Toml::file(config_path));

    let config: AppConfig = figment
        .extract()
        .context("failed to parse configuration file")?;

    Ok(config)
}
