use std::path::{Path, PathBuf};

use serde::Deserialize;
use tracing::warn;

const DEFAULT_PORT: u16 = 5000;

fn default_bind_address() -> String {
    "127.0.0.1".to_string()
}

fn default_web_root() -> PathBuf {
    PathBuf::from("web")
}

/// Server configuration.
///
/// Priority (highest to lowest):
///   1. CLI / env, passed as `Some(value)` from clap
///   2. TOML file (`--config` path, or `smartdo.toml` in the working dir)
///   3. Built-in defaults
#[derive(Debug, Clone)]
pub struct ServerConfig {
    pub port: u16,
    pub bind_address: String,
    /// Log filter (trace, debug, info, warn, error).
    pub log: String,
    /// Directory the static browser client is served from.
    pub web_root: PathBuf,
}

impl ServerConfig {
    pub fn new(
        port: Option<u16>,
        bind_address: Option<String>,
        log: Option<String>,
        config_path: Option<PathBuf>,
    ) -> Self {
        let path = config_path.unwrap_or_else(|| PathBuf::from("smartdo.toml"));
        let toml = load_toml(&path).unwrap_or_default();

        let port = port.or(toml.port).unwrap_or(DEFAULT_PORT);
        let bind_address = bind_address
            .or(toml.bind_address)
            .unwrap_or_else(default_bind_address);
        let log = log.or(toml.log).unwrap_or_else(|| "info".to_string());
        let web_root = toml.web_root.unwrap_or_else(default_web_root);

        Self {
            port,
            bind_address,
            log,
            web_root,
        }
    }
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            port: DEFAULT_PORT,
            bind_address: default_bind_address(),
            log: "info".to_string(),
            web_root: default_web_root(),
        }
    }
}

/// TOML file shape; every field optional so partial files work.
#[derive(Debug, Default, Deserialize)]
struct TomlConfig {
    port: Option<u16>,
    bind_address: Option<String>,
    log: Option<String>,
    web_root: Option<PathBuf>,
}

fn load_toml(path: &Path) -> Option<TomlConfig> {
    let raw = std::fs::read_to_string(path).ok()?;
    match toml::from_str(&raw) {
        Ok(config) => Some(config),
        Err(e) => {
            warn!("ignoring malformed config file {}: {e}", path.display());
            None
        }
    }
}
