//! Item request/response models for `/api/v2/product`.

use paperclip::actix::Apiv2Schema;
use serde::{Deserialize, Serialize};

/// Query parameters for `get_item_base_info`
#[derive(Debug, Clone, Default, Serialize, Deserialize, Apiv2Schema)]
pub struct GetItemBaseInfoQuery {
    /// Item IDs, e.g. `[34001,34002]`
    pub item_id_list: Option<String>,
    pub need_tax_info: Option<bool>,
    pub need_complaint_policy: Option<bool>,
}

#[derive(Debug, Clone, Serialize, Deserialize, Apiv2Schema)]
pub struct AttributeValue {
    pub value_id: i64,
    pub original_value_name: String,
    pub value_unit: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, Apiv2Schema)]
pub struct Attribute {
    pub attribute_id: i64,
    pub original_attribute_name: String,
    pub is_mandatory: bool,
    pub attribute_value_list: Vec<AttributeValue>,
}

#[derive(Debug, Clone, Serialize, Deserialize, Apiv2Schema)]
pub struct PriceInfo {
    pub currency: String,
    pub original_price: f64,
    pub current_price: f64,
    pub inflated_price_of_original_price: f64,
    pub inflated_price_of_current_price: f64,
    pub sip_item_price: f64,
    pub sip_item_price_source: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, Apiv2Schema)]
pub struct ItemImage {
    pub image_url_list: Vec<String>,
    pub image_id_list: Vec<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize, Apiv2Schema)]
pub struct Dimension {
    pub package_length: i32,
    pub package_width: i32,
    pub package_height: i32,
}

#[derive(Debug, Clone, Serialize, Deserialize, Apiv2Schema)]
pub struct LogisticInfo {
    pub logistic_id: i64,
    pub logistic_name: String,
    pub enabled: bool,
    pub shipping_fee: f64,
    pub size_id: i64,
    pub is_free: bool,
    pub estimated_shipping_fee: f64,
}

#[derive(Debug, Clone, Serialize, Deserialize, Apiv2Schema)]
pub struct PreOrder {
    pub is_pre_order: bool,
    pub days_to_ship: i32,
}

#[derive(Debug, Clone, Serialize, Deserialize, Apiv2Schema)]
pub struct Wholesale {
    pub min_count: i32,
    pub max_count: i32,
    pub unit_price: f64,
    pub inflated_price_of_unit_price: f64,
}

#[derive(Debug, Clone, Serialize, Deserialize, Apiv2Schema)]
pub struct VideoInfo {
    pub video_url: String,
    pub thumbnail_url: String,
    pub duration: i32,
}

#[derive(Debug, Clone, Serialize, Deserialize, Apiv2Schema)]
pub struct Brand {
    pub brand_id: i64,
    pub original_brand_name: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, Apiv2Schema)]
pub struct ComplaintPolicy {
    pub warranty_time: String,
    pub exclude_entrepreneur_warranty: bool,
    pub complaint_address_id: i64,
    pub additional_information: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, Apiv2Schema)]
pub struct TaxInfo {
    pub ncm: String,
    pub diff_state_cfop: String,
    pub csosn: String,
    pub origin: String,
    pub cest: String,
    pub measure_unit: String,
    pub invoice_option: String,
    pub vat_rate: String,
    pub hs_code: String,
    pub tax_code: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, Apiv2Schema)]
pub struct DescriptionFieldImage {
    pub image_id: String,
    pub image_url: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, Apiv2Schema)]
pub struct DescriptionField {
    pub field_type: String,
    pub text: String,
    pub image_info: DescriptionFieldImage,
}

#[derive(Debug, Clone, Serialize, Deserialize, Apiv2Schema)]
pub struct ExtendedDescription {
    pub field_list: Vec<DescriptionField>,
}

#[derive(Debug, Clone, Serialize, Deserialize, Apiv2Schema)]
pub struct DescriptionInfo {
    pub extended_description: ExtendedDescription,
}

#[derive(Debug, Clone, Serialize, Deserialize, Apiv2Schema)]
pub struct SummaryInfo {
    pub total_reserved_stock: i32,
    pub total_available_stock: i32,
}

#[derive(Debug, Clone, Serialize, Deserialize, Apiv2Schema)]
pub struct StockLocation {
    pub location_id: String,
    pub stock: i32,
}

#[derive(Debug, Clone, Serialize, Deserialize, Apiv2Schema)]
pub struct StockInfoV2 {
    pub summary_info: SummaryInfo,
    pub seller_stock: Vec<StockLocation>,
    pub shopee_stock: Vec<StockLocation>,
}

/// Base information for one catalogue item
#[derive(Debug, Clone, Serialize, Deserialize, Apiv2Schema)]
pub struct ItemDetail {
    pub item_id: i64,
    pub category_id: i64,
    pub item_name: String,
    pub description: String,
    pub item_sku: String,
    pub create_time: i64,
    pub update_time: i64,
    pub attribute_list: Vec<Attribute>,
    pub price_info: Vec<PriceInfo>,
    pub image: ItemImage,
    pub weight: String,
    pub dimension: Dimension,
    pub logistic_info: Vec<LogisticInfo>,
    pub pre_order: PreOrder,
    pub wholesales: Vec<Wholesale>,
    pub condition: String,
    pub size_chart: String,
    pub item_status: String,
    pub deboost: String,
    pub has_model: bool,
    pub promotion_id: i64,
    pub video_info: Vec<VideoInfo>,
    pub brand: Brand,
    pub item_dangerous: i32,
    pub complaint_policy: ComplaintPolicy,
    pub tax_info: TaxInfo,
    pub description_info: DescriptionInfo,
    pub description_type: String,
    pub stock_info_v2: StockInfoV2,
}

#[derive(Debug, Clone, Serialize, Deserialize, Apiv2Schema)]
pub struct ItemListResponse {
    pub item_list: Vec<ItemDetail>,
}

#[derive(Debug, Clone, Serialize, Deserialize, Apiv2Schema)]
pub struct GetItemBaseInfoResponse {
    pub error: String,
    pub message: String,
    pub warning: String,
    pub request_id: String,
    pub response: ItemListResponse,
}
