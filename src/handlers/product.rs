//! Product endpoint handlers under `/api/v2/product`.

use crate::{
    models::{
        api::ApiError,
        product::{GetItemBaseInfoQuery, GetItemBaseInfoResponse},
    },
    services::mock_data,
};
use actix_web::{Error, Result};
use paperclip::actix::{api_v2_operation, web};

#[api_v2_operation(
    summary = "Get item base information",
    description = "Retrieves detailed information about products. The sample catalogue always returns items 34001 and 34002.",
    tags("Product"),
    responses(
        (status = 200, description = "Successful response", body = GetItemBaseInfoResponse),
        (status = 400, description = "Bad request", body = ApiError),
        (status = 401, description = "Unauthorized - missing or invalid partner signature", body = ApiError)
    )
)]
pub async fn get_item_base_info(
    query: web::Query<GetItemBaseInfoQuery>,
) -> Result<web::Json<GetItemBaseInfoResponse>, Error> {
    if query.item_id_list.as_deref().unwrap_or_default().is_empty() {
        return Err(ApiError::new("missing_item_id_list", "Item ID list is required").bad_request());
    }

    Ok(web::Json(mock_data::item_base_info_response()))
}
