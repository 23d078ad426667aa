//! Order endpoint handlers under `/api/v2/order`.

use crate::{
    models::{
        api::ApiError,
        auth::RequestTimestamp,
        order::{
            GetBuyerInvoiceInfoRequest, GetBuyerInvoiceInfoResponse, GetOrderDetailQuery,
            GetOrderDetailResponse,
        },
    },
    services::mock_data,
};
use actix_web::{Error, HttpMessage, HttpRequest, Result};
use paperclip::actix::{api_v2_operation, web};

/// Order detail endpoint
///
/// Returns one sample order per serial number in `order_sn_list`.
#[api_v2_operation(
    summary = "Get order details",
    description = "Retrieves detailed information about orders. `order_sn_list` is a comma-separated list of order serial numbers.",
    tags("Order"),
    responses(
        (status = 200, description = "Successful response", body = GetOrderDetailResponse),
        (status = 400, description = "Bad request", body = ApiError),
        (status = 401, description = "Unauthorized - missing or invalid partner signature", body = ApiError)
    )
)]
pub async fn get_order_detail(
    req: HttpRequest,
    query: web::Query<GetOrderDetailQuery>,
) -> Result<web::Json<GetOrderDetailResponse>, Error> {
    let order_sns = query
        .order_sn_list
        .as_deref()
        .map(mock_data::parse_order_sn_list)
        .unwrap_or_default();

    if order_sns.is_empty() {
        return Err(
            ApiError::new("missing_order_sn_list", "Order SN list is required").bad_request(),
        );
    }

    tracing::debug!(
        orders = order_sns.len(),
        timestamp = ?req.extensions().get::<RequestTimestamp>(),
        "Building order detail response"
    );

    Ok(web::Json(mock_data::order_detail_response(&order_sns)))
}

/// Buyer invoice endpoint
///
/// Answers for the first entry of `queries` only.
#[api_v2_operation(
    summary = "Get buyer invoice information",
    description = "Retrieves buyer invoice information for a specific order.",
    tags("Order"),
    responses(
        (status = 200, description = "Successful response", body = GetBuyerInvoiceInfoResponse),
        (status = 400, description = "Bad request", body = ApiError),
        (status = 401, description = "Unauthorized - missing or invalid partner signature", body = ApiError)
    )
)]
pub async fn get_buyer_invoice_info(
    body: web::Json<GetBuyerInvoiceInfoRequest>,
) -> Result<web::Json<GetBuyerInvoiceInfoResponse>, Error> {
    let order_sn = match body.queries.first() {
        Some(item) if !item.order_sn.is_empty() => item.order_sn.as_str(),
        _ => {
            return Err(ApiError::new(
                "missing_order_sn",
                "Order SN is required in queries array",
            )
            .bad_request());
        }
    };

    Ok(web::Json(mock_data::buyer_invoice_response(order_sn)))
}
