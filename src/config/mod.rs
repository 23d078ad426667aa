//! Configuration structures and loading utilities.
//!
//! Every structure here has a `Default` matching the reference deployment and
//! a `from_env()` constructor that overrides individual fields.

pub mod logging;
pub mod metrics;
pub mod partner_auth;
pub mod security;
pub mod server;

pub use logging::*;
pub use metrics::*;
pub use partner_auth::*;
pub use security::*;
pub use server::*;

use std::{env, str::FromStr};

/// Read a boolean flag; only a case-insensitive `true` enables it
pub(crate) fn env_flag(name: &str, default: bool) -> bool {
    env::var(name)
        .map(|v| v.trim().eq_ignore_ascii_case("true"))
        .unwrap_or(default)
}

/// Parse a variable, keeping the default when it is unset or malformed
pub(crate) fn env_parse<T: FromStr>(name: &str, default: T) -> T {
    env::var(name)
        .ok()
        .and_then(|v| v.trim().parse().ok())
        .unwrap_or(default)
}
