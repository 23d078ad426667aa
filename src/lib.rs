//! Partner Mock API - a mock of a partner-platform HTTP API
//!
//! Serves canned order, item and invoice payloads in the shape of the partner
//! platform's v2 API, optionally gated by the platform's request signing
//! scheme:
//! - HMAC-SHA256 over `partner_id + path + timestamp + access_token [+ shop_id]`
//! - Uppercase hexadecimal signatures compared in constant time
//! - Per-route-group enablement
//! - Structured audit logging and Prometheus metrics
//! - OpenAPI documentation
//!
//! ## Architecture
//!
//! - `config/` - Environment-driven configuration
//! - `models/` - Request, response and audit data structures
//! - `services/` - Signature verification, mock payloads, metrics
//! - `middleware/` - Partner authentication and cross-cutting middleware
//! - `handlers/` - HTTP handlers and the application factory
//! - `utils/` - HMAC primitives and request helpers
//!
//! ## Quick Start
//!
//! ```no_run
//! use partner_mock_api::{AppContext, PartnerAuthConfig, create_app};
//!
//! #[actix_web::main]
//! async fn main() -> std::io::Result<()> {
//!     let ctx = AppContext::new(PartnerAuthConfig::enforcing("partner-key"))
//!         .expect("metrics registry");
//!     let _app = create_app(ctx);
//!     Ok(())
//! }
//! ```

pub mod config;
pub mod handlers;
pub mod middleware;
pub mod models;
pub mod services;
pub mod telemetry;
pub mod utils;

pub use config::{
    LoggingConfig, MetricsConfig, PartnerAuthConfig, PartnerKey, RouteGroup,
    SecurityHeadersConfig, ServerConfig,
};
pub use handlers::{AppContext, create_app, create_base_app, create_openapi_spec};
pub use middleware::{MetricsMiddleware, PartnerAuth, RequestId, RequestIdMiddleware, SecurityHeaders};
pub use models::{
    ApiError, AuthRejection, AuthRequest, PartnerAuthAuditEvent, RequestTimestamp,
    VerificationOutcome,
};
pub use services::{
    AppMetrics, authenticate, sign_request, signed_query, validate_timestamp, verify_signature,
};
