use std::net::SocketAddr;

use crate::server::error::config::ConfigError;

pub const DEFAULT_AUTH_DOMAIN: &str = "localhost";
pub const DEFAULT_LISTEN_ADDR: &str = "0.0.0.0:8080";

pub struct Config {
    pub database_url: String,
    pub valkey_url: String,
    /// Domain userids must belong to, `AUTH_DOMAIN`
    pub auth_domain: String,
    pub listen_addr: SocketAddr,
}

impl Config {
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|var| std::env::var(var).ok())
    }

    /// Builds configuration from an arbitrary variable source.
    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let required =
            |var: &str| lookup(var).ok_or_else(|| ConfigError::MissingEnvVar(var.to_string()));

        let listen_addr = lookup("LISTEN_ADDR").unwrap_or_else(|| DEFAULT_LISTEN_ADDR.to_string());
        let listen_addr =
            listen_addr
                .parse::<SocketAddr>()
                .map_err(|e| ConfigError::InvalidEnvValue {
                    var: "LISTEN_ADDR".to_string(),
                    reason: e.to_string(),
                })?;

        Ok(Self {
            database_url: required("DATABASE_URL")?,
            valkey_url: required("VALKEY_URL")?,
            auth_domain: lookup("AUTH_DOMAIN").unwrap_or_else(|| DEFAULT_AUTH_DOMAIN.to_string()),
            listen_addr,
        })
    }
}
