//! Custom middleware implementations for the API.
//!
//! Partner authentication is applied per route group; request IDs, security
//! headers and metrics wrap the whole application.

pub mod metrics;
pub mod partner_auth;
pub mod request_id;
pub mod security;

pub use metrics::*;
pub use partner_auth::*;
pub use request_id::*;
pub use security::*;
