//! Order and invoice request/response models for `/api/v2/order`.

use paperclip::actix::Apiv2Schema;
use serde::{Deserialize, Serialize};

/// Query parameters for `get_order_detail`
///
/// Signing parameters are read by the partner authentication middleware only.
#[derive(Debug, Clone, Default, Serialize, Deserialize, Apiv2Schema)]
pub struct GetOrderDetailQuery {
    /// Comma-separated order serial numbers, e.g. `201214JAJXU6G7,201214JASXYXY6`
    pub order_sn_list: Option<String>,
    pub request_order_status_pending: Option<bool>,
    pub response_optional_fields: Option<String>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, Apiv2Schema)]
pub struct InvoiceQueryItem {
    #[serde(default)]
    pub order_sn: String,
}

/// JSON body for `get_buyer_invoice_info`
#[derive(Debug, Clone, Default, Serialize, Deserialize, Apiv2Schema)]
pub struct GetBuyerInvoiceInfoRequest {
    #[serde(default)]
    pub queries: Vec<InvoiceQueryItem>,
}

#[derive(Debug, Clone, Serialize, Deserialize, Apiv2Schema)]
pub struct AddressBreakdown {
    pub region: String,
    pub state: String,
    pub city: String,
    pub district: String,
    pub town: String,
    pub postcode: String,
    pub detailed_address: String,
    pub additional_info: String,
    pub full_address: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, Apiv2Schema)]
pub struct InvoiceDetail {
    pub name: String,
    pub email: String,
    pub address: String,
    pub phone_number: String,
    pub tax_id: String,
    pub address_breakdown: AddressBreakdown,
}

#[derive(Debug, Clone, Serialize, Deserialize, Apiv2Schema)]
pub struct InvoiceInfo {
    pub order_sn: String,
    pub invoice_type: String,
    pub invoice_detail: InvoiceDetail,
    pub is_requested: bool,
    pub error: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, Apiv2Schema)]
pub struct GetBuyerInvoiceInfoResponse {
    pub request_id: String,
    pub error: String,
    pub message: String,
    pub invoice_info_list: Vec<InvoiceInfo>,
}

#[derive(Debug, Clone, Serialize, Deserialize, Apiv2Schema)]
pub struct ImageInfo {
    pub image_url: String,
}

/// A purchased line item inside an order
#[derive(Debug, Clone, Serialize, Deserialize, Apiv2Schema)]
pub struct OrderItem {
    pub add_on_deal: bool,
    pub add_on_deal_id: i64,
    pub image_info: ImageInfo,
    pub is_b2c_owned_item: bool,
    pub is_prescription_item: bool,
    pub item_id: i64,
    pub item_name: String,
    pub item_sku: String,
    pub main_item: bool,
    pub model_discounted_price: i64,
    pub model_id: i64,
    pub model_name: String,
    pub model_original_price: i64,
    pub model_quantity_purchased: i32,
    pub model_sku: String,
    pub order_item_id: i64,
    pub product_location_id: Vec<String>,
    pub promotion_group_id: i64,
    pub promotion_id: i64,
    pub promotion_type: String,
    pub weight: f64,
    pub wholesale: bool,
}

#[derive(Debug, Clone, Serialize, Deserialize, Apiv2Schema)]
pub struct PackageItemDetail {
    pub item_id: i64,
    pub model_id: i64,
    pub model_quantity: i32,
    pub order_item_id: i64,
    pub product_location_id: String,
    pub promotion_group_id: i64,
}

#[derive(Debug, Clone, Serialize, Deserialize, Apiv2Schema)]
pub struct PackageDetail {
    pub group_shipment_id: Option<String>,
    pub item_list: Vec<PackageItemDetail>,
    pub logistics_status: String,
    pub package_number: String,
    pub parcel_chargeable_weight_gram: i32,
    pub shipping_carrier: String,
    pub logistics_channel_id: i64,
    pub allow_self_design_awb: bool,
    pub sorting_group: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, Apiv2Schema)]
pub struct RecipientAddress {
    pub city: String,
    pub district: String,
    pub full_address: String,
    pub name: String,
    pub phone: String,
    pub region: String,
    pub state: String,
    pub town: String,
    pub zipcode: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, Apiv2Schema)]
pub struct OrderDetail {
    pub actual_shipping_fee_confirmed: bool,
    pub buyer_cancel_reason: String,
    pub buyer_cpf_id: Option<String>,
    pub buyer_user_id: i64,
    pub buyer_username: String,
    pub cancel_by: String,
    pub cancel_reason: String,
    pub cod: bool,
    pub create_time: i64,
    pub currency: String,
    pub days_to_ship: i32,
    pub dropshipper: Option<String>,
    pub dropshipper_phone: Option<String>,
    pub estimated_shipping_fee: i64,
    pub fulfillment_flag: String,
    pub goods_to_declare: bool,
    pub invoice_data: Option<String>,
    pub item_list: Vec<OrderItem>,
    pub message_to_seller: String,
    pub note: String,
    pub note_update_time: i64,
    pub order_sn: String,
    pub order_status: String,
    pub package_list: Vec<PackageDetail>,
    pub pay_time: i64,
    pub payment_method: String,
    pub pickup_done_time: i64,
    pub recipient_address: RecipientAddress,
    pub region: String,
    pub reverse_shipping_fee: i64,
    pub ship_by_date: i64,
    pub shipping_carrier: String,
    pub split_up: bool,
    pub total_amount: i64,
    pub update_time: i64,
}

#[derive(Debug, Clone, Serialize, Deserialize, Apiv2Schema)]
pub struct OrderListResponse {
    pub order_list: Vec<OrderDetail>,
}

#[derive(Debug, Clone, Serialize, Deserialize, Apiv2Schema)]
pub struct GetOrderDetailResponse {
    pub error: String,
    pub message: String,
    pub request_id: String,
    pub response: OrderListResponse,
}
