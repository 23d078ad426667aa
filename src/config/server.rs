//! HTTP server binding configuration.

use std::{env, path::Path};

/// Port the partner mock listens on by default
pub const DEFAULT_PORT: u16 = 3001;

/// Configuration for the HTTP listener
#[derive(Debug, Clone)]
pub struct ServerConfig {
    pub bind_address: String,
    pub workers: Option<usize>,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            bind_address: format!("127.0.0.1:{DEFAULT_PORT}"),
            workers: None,
        }
    }
}

impl ServerConfig {
    /// Load configuration from environment variables.
    ///
    /// `BIND_ADDRESS` wins; otherwise containers bind every interface and local
    /// runs bind loopback.
    pub fn from_env() -> Self {
        let in_container = env::var("KUBERNETES_SERVICE_HOST").is_ok()
            || env::var("DOCKER_CONTAINER").is_ok()
            || Path::new("/.dockerenv").exists();

        let bind_address = resolve_bind_address(env::var("BIND_ADDRESS").ok(), in_container);
        let workers = env::var("SERVER_WORKERS").ok().and_then(|v| v.parse().ok());

        Self {
            bind_address,
            workers,
        }
    }
}

fn resolve_bind_address(bind_override: Option<String>, in_container: bool) -> String {
    match bind_override {
        Some(bind) if !bind.trim().is_empty() => bind,
        _ if in_container => format!("0.0.0.0:{DEFAULT_PORT}"),
        _ => format!("127.0.0.1:{DEFAULT_PORT}"),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bind_address_resolution() {
        assert_eq!(resolve_bind_address(None, false), "127.0.0.1:3001");
        assert_eq!(resolve_bind_address(None, true), "0.0.0.0:3001");
        assert_eq!(
            resolve_bind_address(Some("192.168.1.10:9090".to_string()), true),
            "192.168.1.10:9090"
        );
        assert_eq!(resolve_bind_address(Some("  ".to_string()), false), "127.0.0.1:3001");
    }
}
