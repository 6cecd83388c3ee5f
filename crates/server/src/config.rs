//! Server configuration.

use std::net::IpAddr;

use serde::{Deserialize, Serialize};

/// Server configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ServerConfig {
    /// Host to bind to
    #[serde(default = "default_host")]
    pub host: String,

    /// Port to listen on
    #[serde(default = "default_port")]
    pub port: u16,

    /// JSON holdings file; the built-in sample portfolio is served when unset
    pub holdings_file: Option<String>,

    /// Allowed CORS origins; `*` allows any
    #[serde(default = "default_cors_origins")]
    pub cors_allow_origins: Vec<String>,

    /// Log output format: `text` or `json`
    #[serde(default = "default_log_format")]
    pub log_format: String,
}

fn default_host() -> String {
    "0.0.0.0".to_string()
}

fn default_port() -> u16 {
    3001
}

fn default_cors_origins() -> Vec<String> {
    vec!["*".to_string()]
}

fn default_log_format() -> String {
    "text".to_string()
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
            holdings_file: None,
            cors_allow_origins: default_cors_origins(),
            log_format: default_log_format(),
        }
    }
}

impl ServerConfig {
    /// Load configuration from a TOML file.
    pub fn from_file(path: &str) -> Result<Self, std::io::Error> {
        let content = std::fs::read_to_string(path)?;
        Self::from_toml(&content)
    }

    /// Parse configuration from TOML text.
    pub fn from_toml(content: &str) -> Result<Self, std::io::Error> {
        toml::from_str(content).map_err(|e| std::io::Error::new(std::io::ErrorKind::InvalidData, e))
    }

    /// Apply `PORT`, `HOST`, `HOLDINGS_FILE` and `LOG_FORMAT` from the environment.
    pub fn with_env_overrides(self) -> Result<Self, std::io::Error> {
        self.with_overrides(|key| std::env::var(key).ok())
    }

    /// Apply overrides from an arbitrary lookup (the environment in production).
    pub fn with_overrides<F>(mut self, lookup: F) -> Result<Self, std::io::Error>
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(port) = lookup("PORT") {
            self.port = port.trim().parse().map_err(|e| {
                std::io::Error::new(
                    std::io::ErrorKind::InvalidInput,
                    format!("Invalid PORT '{port}': {e}"),
                )
            })?;
        }
        if let Some(host) = lookup("HOST") {
            self.host = host;
            self.ip_addr()?;
        }
        if let Some(path) = lookup("HOLDINGS_FILE") {
            self.holdings_file = Some(path).filter(|p| !p.trim().is_empty());
        }
        if let Some(format) = lookup("LOG_FORMAT") {
            self.log_format = format;
        }
        Ok(self)
    }

    /// The bind address. Hostnames are not resolved; an unparsable host is
    /// an error rather than a fallback to all interfaces.
    pub fn ip_addr(&self) -> Result<IpAddr, std::io::Error> {
        self.host.trim().parse().map_err(|e| {
            std::io::Error::new(
                std::io::ErrorKind::InvalidInput,
                format!("Invalid HOST '{}': {e}", self.host),
            )
        })
    }

    /// True when every origin is allowed.
    pub fn allows_any_origin(&self) -> bool {
        self.cors_allow_origins.iter().any(|o| o == "*")
    }
}
