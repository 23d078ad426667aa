//! Health check endpoint handler.

use crate::models::HealthResponse;
use actix_web::{Error, Result};
use paperclip::actix::{api_v2_operation, web};

/// Health check endpoint
///
/// Never behind partner authentication so probes need no signature.
#[api_v2_operation(
    summary = "Health Check Endpoint",
    description = "Returns the current health status of the API in JSON format.",
    tags("Health"),
    responses(
        (status = 200, description = "Successful response", body = HealthResponse)
    )
)]
pub async fn health() -> Result<web::Json<HealthResponse>, Error> {
    Ok(web::Json(HealthResponse {
        status: "healthy".to_string(),
    }))
}
