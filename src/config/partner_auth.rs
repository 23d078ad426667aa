//! Partner signature authentication configuration.

use super::env_flag;
use std::{env, fmt};

/// Placeholder key used by the reference deployment when none is configured
pub const PLACEHOLDER_PARTNER_KEY: &str = "your_partner_key_here";

/// Route groups that can be placed behind partner authentication
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RouteGroup {
    Order,
    Product,
}

impl RouteGroup {
    /// Path prefix mounted for this group
    pub fn prefix(&self) -> &'static str {
        match self {
            RouteGroup::Order => "/api/v2/order",
            RouteGroup::Product => "/api/v2/product",
        }
    }
}

/// Shared secret used to verify partner signatures.
///
/// The value never appears in `Debug` output.
#[derive(Clone)]
pub struct PartnerKey(String);

impl PartnerKey {
    pub fn new(secret: impl Into<String>) -> Self {
        Self(secret.into())
    }

    pub fn expose(&self) -> &str {
        &self.0
    }

    pub fn is_placeholder(&self) -> bool {
        self.0 == PLACEHOLDER_PARTNER_KEY
    }
}

impl fmt::Debug for PartnerKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("PartnerKey(<redacted>)")
    }
}

/// Configuration for partner request authentication
#[derive(Debug, Clone)]
pub struct PartnerAuthConfig {
    pub partner_key: PartnerKey,
    pub order_auth_enabled: bool,
    pub product_auth_enabled: bool,
    /// Upper-case the caller's signature before comparing
    pub sign_case_insensitive: bool,
}

impl Default for PartnerAuthConfig {
    fn default() -> Self {
        Self {
            partner_key: PartnerKey::new(PLACEHOLDER_PARTNER_KEY),
            order_auth_enabled: false,
            product_auth_enabled: false,
            sign_case_insensitive: false,
        }
    }
}

impl PartnerAuthConfig {
    /// Load configuration from environment variables, falling back to defaults
    pub fn from_env() -> Self {
        let partner_key = env::var("PARTNER_KEY")
            .map(PartnerKey::new)
            .unwrap_or_else(|_| PartnerKey::new(PLACEHOLDER_PARTNER_KEY));

        if partner_key.is_placeholder() {
            tracing::warn!("PARTNER_KEY is not set; using the placeholder partner key");
        }

        Self {
            partner_key,
            order_auth_enabled: env_flag("PARTNER_AUTH_ORDER_ENABLED", false),
            product_auth_enabled: env_flag("PARTNER_AUTH_PRODUCT_ENABLED", false),
            sign_case_insensitive: env_flag("PARTNER_SIGN_CASE_INSENSITIVE", false),
        }
    }

    /// Create a config with the given secret and every route group protected
    pub fn enforcing(secret: impl Into<String>) -> Self {
        Self {
            partner_key: PartnerKey::new(secret),
            order_auth_enabled: true,
            product_auth_enabled: true,
            sign_case_insensitive: false,
        }
    }

    /// Whether requests to the given route group must be signed
    pub fn is_enabled_for(&self, group: RouteGroup) -> bool {
        match group {
            RouteGroup::Order => self.order_auth_enabled,
            RouteGroup::Product => self.product_auth_enabled,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Mutex;

    static ENV_MUTEX: Mutex<()> = Mutex::new(());

    #[test]
    fn test_defaults_leave_routes_open() {
        let config = PartnerAuthConfig::default();
        assert!(!config.is_enabled_for(RouteGroup::Order));
        assert!(!config.is_enabled_for(RouteGroup::Product));
        assert!(config.partner_key.is_placeholder());
    }

    #[test]
    fn test_from_env() {
        let _lock = ENV_MUTEX.lock().unwrap();

        unsafe {
            env::set_var("PARTNER_KEY", "live-key");
            env::set_var("PARTNER_AUTH_ORDER_ENABLED", "TRUE");
            env::remove_var("PARTNER_AUTH_PRODUCT_ENABLED");
            env::set_var("PARTNER_SIGN_CASE_INSENSITIVE", "true");
        }

        let config = PartnerAuthConfig::from_env();
        assert_eq!(config.partner_key.expose(), "live-key");
        assert!(config.is_enabled_for(RouteGroup::Order));
        assert!(!config.is_enabled_for(RouteGroup::Product));
        assert!(config.sign_case_insensitive);

        unsafe {
            env::remove_var("PARTNER_KEY");
            env::remove_var("PARTNER_AUTH_ORDER_ENABLED");
            env::remove_var("PARTNER_SIGN_CASE_INSENSITIVE");
        }
    }

    #[test]
    fn test_debug_redacts_key() {
        let config = PartnerAuthConfig::enforcing("super-secret");
        let rendered = format!("{config:?}");
        assert!(!rendered.contains("super-secret"));
        assert!(rendered.contains("<redacted>"));
    }
}
