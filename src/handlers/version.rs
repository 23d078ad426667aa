//! Version information endpoint handler.

use crate::{
    models::VersionResponse,
    services::metrics::{BUILD_COMMIT, BUILD_TIME},
};
use actix_web::{Error, Result};
use paperclip::actix::{api_v2_operation, web};

#[api_v2_operation(
    summary = "Version Information Endpoint",
    description = "Returns the current API version, commit hash, and build time.",
    tags("Version"),
    responses(
        (status = 200, description = "Successful response", body = VersionResponse)
    )
)]
pub async fn version() -> Result<web::Json<VersionResponse>, Error> {
    Ok(web::Json(VersionResponse {
        version: env!("CARGO_PKG_VERSION").to_string(),
        commit: BUILD_COMMIT.to_string(),
        build_time: BUILD_TIME.to_string(),
    }))
}
