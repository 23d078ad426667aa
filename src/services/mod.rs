//! Service layer: partner authentication, mock payload generation and
//! metrics collection.

pub mod auth;
pub mod metrics;
pub mod mock_data;

pub use auth::*;
pub use metrics::*;
pub use mock_data::*;
