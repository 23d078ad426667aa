//! Data models for partner requests, payloads and audit records.

pub mod api;
pub mod audit;
pub mod auth;
pub mod order;
pub mod product;

pub use api::*;
pub use audit::*;
pub use auth::*;
pub use order::*;
pub use product::*;
