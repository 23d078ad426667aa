//! Utility functions and helper modules.
//!
//! Signature primitives, request inspection and route labelling helpers.

pub mod hmac;
pub mod http;
pub mod route;

pub use hmac::*;
pub use http::*;
pub use route::*;
