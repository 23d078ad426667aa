//! Response security headers configuration.

use super::{env_flag, env_parse};
use std::env;

/// CSP that still lets the index page fetch and render the OpenAPI document
pub const DEFAULT_CSP: &str = "default-src 'none'; script-src 'unsafe-inline'; \
style-src 'unsafe-inline'; connect-src 'self'; frame-ancestors 'none'";

/// Configuration for the security headers middleware
#[derive(Debug, Clone)]
pub struct SecurityHeadersConfig {
    pub csp: Option<String>,
    pub hsts_max_age: Option<u32>,
    pub frame_options: String,
    pub nosniff: bool,
    pub referrer_policy: String,
}

impl Default for SecurityHeadersConfig {
    fn default() -> Self {
        Self {
            csp: Some(DEFAULT_CSP.to_string()),
            hsts_max_age: Some(31_536_000),
            frame_options: "DENY".to_string(),
            nosniff: true,
            referrer_policy: "no-referrer".to_string(),
        }
    }
}

impl SecurityHeadersConfig {
    /// Load configuration from environment variables, falling back to defaults
    pub fn from_env() -> Self {
        let defaults = Self::default();

        let csp = env_flag("SECURITY_CSP_ENABLED", true)
            .then(|| env::var("SECURITY_CSP_DIRECTIVES").unwrap_or_else(|_| DEFAULT_CSP.to_string()));

        let hsts_max_age = env_flag("SECURITY_HSTS_ENABLED", true)
            .then(|| env_parse("SECURITY_HSTS_MAX_AGE", 31_536_000));

        Self {
            csp,
            hsts_max_age,
            frame_options: env::var("SECURITY_FRAME_OPTIONS").unwrap_or(defaults.frame_options),
            nosniff: env_flag("SECURITY_NOSNIFF", defaults.nosniff),
            referrer_policy: env::var("SECURITY_REFERRER_POLICY")
                .unwrap_or(defaults.referrer_policy),
        }
    }
}
