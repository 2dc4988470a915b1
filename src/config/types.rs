// configuration type definitions

use clap::{Args, Parser, Subcommand};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// command line interface definition
#[derive(Parser, Debug, Clone)]
#[command(name = "edgeguard", version = env!("CARGO_PKG_VERSION"))]
#[command(about = "security header policy for edge viewer responses")]
pub struct Cli {
    /// config file to use
    #[arg(short = 'c', long, global = true, env = "EDGEGUARD_CONFIG")]
    pub config_file: Option<PathBuf>,

    /// increase verbosity (-v, -vv, -vvv)
    #[arg(short = 'v', long, global = true, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// decrease verbosity (-q, -qq)
    #[arg(short = 'q', long, global = true, action = clap::ArgAction::Count)]
    pub quiet: u8,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug, Clone)]
pub enum Command {
    /// apply the policy to a viewer-response event and print the response
    Apply {
        /// event json file, stdin when omitted
        event: Option<PathBuf>,

        /// pretty-print the output
        #[arg(long)]
        pretty: bool,
    },

    /// print the managed headers
    Policy {
        /// print as json
        #[arg(long)]
        json: bool,
    },

    /// serve the invocation endpoint over http
    Serve(ServeArgs),
}

/// cli overrides for the server section
#[derive(Args, Debug, Clone, Default, Serialize)]
pub struct ServeArgs {
    /// host to listen on
    #[arg(short = 'l', long)]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub host: Option<String>,

    /// port to listen on
    #[arg(short = 'p', long)]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub port: Option<u16>,
}

/// complete application configuration
#[derive(Debug, Clone, Deserialize, Serialize, Default)]
pub struct AppConfig {
    #[serde(default)]
    pub server: ServerConfig,
}

/// server configuration section
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct ServerConfig {
    #[serde(default = "default_host")]
    pub host: String,
    #[serde(default = "default_port")]
    pub port: u16,
    /// largest event body accepted on /invoke
    #[serde(default = "default_max_event_bytes")]
    pub max_event_bytes: usize,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
            max_event_bytes: default_max_event_bytes(),
        }
    }
}

// default value functions for serde
fn default_host() -> String {
    "127.0.0.1".to_string()
}

fn default_port() -> u16 {
    8000
}

fn default_max_event_bytes() -> usize {
    1024 * 1024 // 1 MiB
}
