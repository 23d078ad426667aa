//! Response models for the service endpoints.

use actix_web::{HttpResponse, error::InternalError};
use paperclip::actix::Apiv2Schema;
use serde::{Deserialize, Serialize};

/// Response model for the health check endpoint
#[derive(Clone, Serialize, Deserialize, Apiv2Schema)]
pub struct HealthResponse {
    pub status: String,
}

/// Response model for the version information endpoint
#[derive(Clone, Serialize, Deserialize, Apiv2Schema)]
pub struct VersionResponse {
    pub version: String,
    pub commit: String,
    pub build_time: String,
}

/// Error body shared by every rejection and bad-request response
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Apiv2Schema)]
pub struct ApiError {
    /// Machine-readable code, e.g. `invalid_signature`
    pub error: String,
    pub message: String,
}

impl ApiError {
    pub fn new(error: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            error: error.into(),
            message: message.into(),
        }
    }

    /// Wrap this body in a 400 response usable as a handler error
    pub fn bad_request(self) -> actix_web::Error {
        let message = self.message.clone();
        InternalError::from_response(message, HttpResponse::BadRequest().json(self)).into()
    }
}
