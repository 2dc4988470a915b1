// command implementations behind the binary's subcommands

use std::{fs, io::Read, path::Path};

use anyhow::{Context, Result};
use serde_json::{json, Value};
use tracing::{debug, Level};

use crate::{event, policy::SECURITY_HEADERS};

/// read an event from `path`, or from `stdin` when no path is given
pub fn read_event(path: Option<&Path>, mut stdin: impl Read) -> Result<String> {
    match path {
        Some(path) => {
            debug!("reading event from {}", path.display());
            fs::read_to_string(path)
                .with_context(|| format!("failed to read event file: {}", path.display()))
        }
        None => {
            let mut raw = String::new();
            stdin
                .read_to_string(&mut raw)
                .context("failed to read event from stdin")?;
            Ok(raw)
        }
    }
}

/// run the edge function once over a raw json event, returning the response json
pub fn apply_event(raw: &str, pretty: bool) -> Result<String> {
    let input: Value = serde_json::from_str(raw).context("event is not valid json")?;
    let response = event::handler(input)?;

    let output = if pretty {
        serde_json::to_string_pretty(&response)?
    } else {
        serde_json::to_string(&response)?
    };
    Ok(output)
}

/// the managed headers as `name: value` lines or a json array
pub fn render_policy(as_json: bool) -> Result<String> {
    if as_json {
        let entries: Vec<Value> = SECURITY_HEADERS
            .iter()
            .map(|(name, value)| json!({ "name": name, "value": value }))
            .collect();
        Ok(serde_json::to_string_pretty(&entries)?)
    } else {
        Ok(SECURITY_HEADERS
            .iter()
            .map(|(name, value)| format!("{name}: {value}"))
            .collect::<Vec<_>>()
            .join("\n"))
    }
}

/// log level: info (default) + verbose - quiet, clamped to error..trace
pub fn log_level(verbose_count: u8, quiet_count: u8) -> Level {
    let base_level = 2i16; // info level
    let adjustment = i16::from(verbose_count).saturating_sub(i16::from(quiet_count));

    match base_level.saturating_add(adjustment).clamp(0, 4) {
        i16::MIN..=0 => Level::ERROR,
        1 => Level::WARN,
        2 => Level::INFO,
        3 => Level::DEBUG,
        4.. => Level::TRACE,
    }
}
