//! HTTP request handlers for API endpoints.

pub mod health;
pub mod index;
pub mod metrics;
pub mod openapi;
pub mod order;
pub mod product;
pub mod version;

pub use health::*;
pub use index::*;
pub use metrics::*;
pub use openapi::*;
pub use order::*;
pub use product::*;
pub use version::*;
