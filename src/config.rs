//! Server configuration read from the environment.

use std::num::NonZeroUsize;

pub const DEFAULT_PORT: u16 = 3000;
pub const DEFAULT_HOST: &str = "0.0.0.0";

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ConfigError {
    #[error("PORT must be a port number, got {0:?}")]
    InvalidPort(String),
    #[error("FUTURECAD_STORE_CAPACITY must be a positive integer, got {0:?}")]
    InvalidCapacity(String),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServerConfig {
    /// `host:port` to bind.
    pub addr: String,
    /// Upper bound on stored meshes, `None` for unbounded.
    pub store_capacity: Option<NonZeroUsize>,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            addr: format!("{DEFAULT_HOST}:{DEFAULT_PORT}"),
            store_capacity: None,
        }
    }
}

impl ServerConfig {
    /// Read `FUTURECAD_ADDR`, `PORT` and `FUTURECAD_STORE_CAPACITY`.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Same as [`ServerConfig::from_env`] with a custom variable source.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let addr = match lookup("FUTURECAD_ADDR") {
            Some(addr) => addr,
            None => {
                let port = match lookup("PORT") {
                    Some(raw) => raw
                        .trim()
                        .parse::<u16>()
                        .map_err(|_| ConfigError::InvalidPort(raw))?,
                    None => DEFAULT_PORT,
                };
                format!("{DEFAULT_HOST}:{port}")
            },
        };

        let store_capacity = match lookup("FUTURECAD_STORE_CAPACITY") {
            Some(raw) => Some(
                raw.trim()
                    .parse::<NonZeroUsize>()
                    .map_err(|_| ConfigError::InvalidCapacity(raw))?,
            ),
            None => None,
        };

        Ok(Self {
            addr,
            store_capacity,
        })
    }
}
