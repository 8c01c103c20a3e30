use std::env;

use anyhow::{Context, Result};

/// Bind address used when LIELENS_BIND is unset.
pub const DEFAULT_BIND: &str = "0.0.0.0";

/// Port used when neither LIELENS_PORT nor PORT is set.
pub const DEFAULT_PORT: u16 = 8000;

/// Central configuration loaded from environment variables.
///
/// The .env file is loaded automatically at startup via dotenvy, so
/// everything here can also come from there.
#[derive(Debug, Clone)]
pub struct Config {
    /// Interface the HTTP server binds to (LIELENS_BIND)
    pub bind: String,
    /// TCP port for the HTTP server (LIELENS_PORT, falling back to PORT
    /// so hosting platforms that inject PORT work unchanged)
    pub port: u16,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            bind: DEFAULT_BIND.to_string(),
            port: DEFAULT_PORT,
        }
    }
}

impl Config {
    /// Load configuration from environment variables.
    ///
    /// Every field has a default; only a malformed port is an error.
    pub fn load() -> Result<Self> {
        let bind = env::var("LIELENS_BIND").unwrap_or_else(|_| DEFAULT_BIND.to_string());

        let port = match env::var("LIELENS_PORT").or_else(|_| env::var("PORT")) {
            Ok(raw) => parse_port(&raw)?,
            Err(_) => DEFAULT_PORT,
        };

        Ok(Self { bind, port })
    }

    /// The `host:port` string the server listens on.
    pub fn listen_addr(&self) -> String {
        format!("{}:{}", self.bind, self.port)
    }
}

fn parse_port(raw: &str) -> Result<u16> {
    raw.trim()
        .parse::<u16>()
        .with_context(|| format!("Invalid port {raw:?}. Set LIELENS_PORT to a number 1-65535."))
}
