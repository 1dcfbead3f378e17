//! Server config loader (strict parsing).
//!
//! The config file is optional: every field defaults to the fixed contract
//! (port 8080, 15 s read/write timeouts, debug logging).

pub mod schema;

use std::fs;
use std::path::Path;

use dumpsrv_core::error::{DumpSrvError, Result};

pub use schema::{ServerConfig, ServerSection};

pub fn load_from_file(path: impl AsRef<Path>) -> Result<ServerConfig> {
    let path = path.as_ref();
    let s = fs::read_to_string(path)
        .map_err(|e| DumpSrvError::Config(format!("read {} failed: {e}", path.display())))?;
    load_from_str(&s)
}

pub fn load_from_str(s: &str) -> Result<ServerConfig> {
    let cfg: ServerConfig = serde_yaml::from_str(s)
        .map_err(|e| DumpSrvError::Config(format!("invalid yaml: {e}")))?;
    cfg.validate()?;
    Ok(cfg)
}

/// Load `path` when given, otherwise fall back to built-in defaults.
pub fn load_or_default(path: Option<&Path>) -> Result<ServerConfig> {
    match path {
        Some(p) => load_from_file(p),
        None => Ok(ServerConfig::default()),
    }
}
