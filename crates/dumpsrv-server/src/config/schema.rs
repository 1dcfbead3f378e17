use std::net::SocketAddr;
use std::time::Duration;

use serde::Deserialize;
use dumpsrv_core::error::{DumpSrvError, Result};

#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ServerConfig {
    #[serde(default = "default_version")]
    pub version: u32,

    #[serde(default)]
    pub server: ServerSection,

    #[serde(default = "default_log_level")]
    pub log_level: String,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            version: default_version(),
            server: ServerSection::default(),
            log_level: default_log_level(),
        }
    }
}

impl ServerConfig {
    pub fn validate(&self) -> Result<()> {
        if self.version != 1 {
            return Err(DumpSrvError::Config(format!(
                "unsupported config version {}",
                self.version
            )));
        }
        if self.log_level.trim().is_empty() {
            return Err(DumpSrvError::Config("log_level must not be empty".into()));
        }

        self.server.validate()?;

        Ok(())
    }
}

#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ServerSection {
    #[serde(default = "default_listen")]
    pub listen: String,

    #[serde(default = "default_timeout_ms")]
    pub read_timeout_ms: u64,

    #[serde(default = "default_timeout_ms")]
    pub write_timeout_ms: u64,

    #[serde(default = "default_max_body_bytes")]
    pub max_body_bytes: usize,
}

impl Default for ServerSection {
    fn default() -> Self {
        Self {
            listen: default_listen(),
            read_timeout_ms: default_timeout_ms(),
            write_timeout_ms: default_timeout_ms(),
            max_body_bytes: default_max_body_bytes(),
        }
    }
}

impl ServerSection {
    pub fn validate(&self) -> Result<()> {
        self.listen_addr()?;
        if !(1..=300_000).contains(&self.read_timeout_ms) {
            return Err(DumpSrvError::Config(
                "server.read_timeout_ms must be between 1 and 300000".into(),
            ));
        }
        if !(1..=300_000).contains(&self.write_timeout_ms) {
            return Err(DumpSrvError::Config(
                "server.write_timeout_ms must be between 1 and 300000".into(),
            ));
        }
        if self.max_body_bytes == 0 {
            return Err(DumpSrvError::Config(
                "server.max_body_bytes must be greater than 0".into(),
            ));
        }
        Ok(())
    }

    pub fn listen_addr(&self) -> Result<SocketAddr> {
        self.listen.parse().map_err(|e| {
            DumpSrvError::Config(format!("server.listen {:?} is not a socket address: {e}", self.listen))
        })
    }

    pub fn read_timeout(&self) -> Duration {
        Duration::from_millis(self.read_timeout_ms)
    }

    pub fn write_timeout(&self) -> Duration {
        Duration::from_millis(self.write_timeout_ms)
    }
}

fn default_version() -> u32 {
    1
}
fn default_listen() -> String {
    "0.0.0.0:8080".into()
}
fn default_timeout_ms() -> u64 {
    15_000
}
fn default_max_body_bytes() -> usize {
    10 * 1024 * 1024
}
fn default_log_level() -> String {
    "debug".into()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_match_fixed_contract() {
        let cfg = ServerConfig::default();
        assert!(cfg.validate().is_ok());
        assert_eq!(cfg.server.listen_addr().ok().map(|a| a.port()), Some(8080));
        assert_eq!(cfg.server.read_timeout(), Duration::from_secs(15));
        assert_eq!(cfg.server.write_timeout(), Duration::from_secs(15));
        assert_eq!(cfg.log_level, "debug");
    }

    #[test]
    fn zero_timeout_rejected() {
        let mut cfg = ServerConfig::default();
        cfg.server.write_timeout_ms = 0;
        assert!(cfg.validate().is_err());
    }
}
