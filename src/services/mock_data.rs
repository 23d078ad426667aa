//! Canned partner-platform payloads.
//!
//! Builders here are pure: the same validated parameters always produce the
//! same payload. Only the order and invoice serial numbers are echoed back;
//! every other field is fixed sample data.

use crate::models::{
    order::{
        AddressBreakdown, GetBuyerInvoiceInfoResponse, GetOrderDetailResponse, ImageInfo,
        InvoiceDetail, InvoiceInfo, OrderDetail, OrderItem, OrderListResponse, PackageDetail,
        PackageItemDetail, RecipientAddress,
    },
    product::{
        Attribute, AttributeValue, Brand, ComplaintPolicy, DescriptionField, DescriptionFieldImage,
        DescriptionInfo, Dimension, ExtendedDescription, GetItemBaseInfoResponse, ItemDetail,
        ItemImage, ItemListResponse, LogisticInfo, PreOrder, PriceInfo, StockInfoV2,
        StockLocation, SummaryInfo, TaxInfo, VideoInfo, Wholesale,
    },
};

pub const ORDER_DETAIL_REQUEST_ID: &str = "023c50ace933ba38473a5fb2a7dc8821";
pub const BUYER_INVOICE_REQUEST_ID: &str = "a2c45ca2683caf1651ecab5a4d5942ce";
pub const ITEM_BASE_INFO_REQUEST_ID: &str = "7b9da0c6926642199c33ee9dd3a266f5";

/// Items returned by `get_item_base_info` regardless of the requested IDs
pub const MOCK_ITEM_IDS: [i64; 2] = [34001, 34002];

const PLACEHOLDER: &str = "-";

/// Split a comma-separated order SN list, trimming entries and dropping blanks
pub fn parse_order_sn_list(raw: &str) -> Vec<String> {
    raw.split(',')
        .map(str::trim)
        .filter(|sn| !sn.is_empty())
        .map(str::to_string)
        .collect()
}

/// Build one sample order echoing the given serial number
pub fn order_detail(order_sn: &str) -> OrderDetail {
    const ITEM_ID: i64 = 23620853561;
    const MODEL_ID: i64 = 221404189791;
    const LOCATION: &str = "VN10XX2UZ";

    OrderDetail {
        actual_shipping_fee_confirmed: true,
        buyer_cancel_reason: String::new(),
        buyer_cpf_id: None,
        buyer_user_id: 1170319091,
        buyer_username: "xt4fdsf96j".to_string(),
        cancel_by: String::new(),
        cancel_reason: String::new(),
        cod: true,
        create_time: 1712601591,
        currency: "VND".to_string(),
        days_to_ship: 2,
        dropshipper: None,
        dropshipper_phone: None,
        estimated_shipping_fee: 5000,
        fulfillment_flag: "fulfilled_by_local_seller".to_string(),
        goods_to_declare: false,
        invoice_data: None,
        item_list: vec![OrderItem {
            add_on_deal: false,
            add_on_deal_id: 0,
            image_info: ImageInfo {
                image_url: "https://cf.shopee.vn/file/vn-11134207-7qukw-lf6guphtf6oad3_tn"
                    .to_string(),
            },
            is_b2c_owned_item: false,
            is_prescription_item: false,
            item_id: ITEM_ID,
            item_name: "Minecraft NFA".to_string(),
            item_sku: String::new(),
            main_item: false,
            model_discounted_price: 48000,
            model_id: MODEL_ID,
            model_name: " Non-refundable".to_string(),
            model_original_price: 300000,
            model_quantity_purchased: 1,
            model_sku: "QAZ-SADOER-05".to_string(),
            order_item_id: ITEM_ID,
            product_location_id: vec![LOCATION.to_string()],
            promotion_group_id: 0,
            promotion_id: 779222207758537,
            promotion_type: "flash_sale".to_string(),
            weight: 0.01,
            wholesale: false,
        }],
        message_to_seller: String::new(),
        note: String::new(),
        note_update_time: 0,
        order_sn: order_sn.to_string(),
        order_status: "COMPLETED".to_string(),
        package_list: vec![PackageDetail {
            group_shipment_id: None,
            item_list: vec![PackageItemDetail {
                item_id: ITEM_ID,
                model_id: MODEL_ID,
                model_quantity: 1,
                order_item_id: ITEM_ID,
                product_location_id: LOCATION.to_string(),
                promotion_group_id: 0,
            }],
            logistics_status: "LOGISTICS_DELIVERY_DONE".to_string(),
            package_number: "OFG166300791210964".to_string(),
            parcel_chargeable_weight_gram: 10,
            shipping_carrier: "5-Day Delivery (SPX)".to_string(),
            logistics_channel_id: 18080,
            allow_self_design_awb: true,
            sorting_group: "North".to_string(),
        }],
        pay_time: 1712817766,
        payment_method: "Cash on Delivery".to_string(),
        pickup_done_time: 1712726577,
        recipient_address: RecipientAddress {
            city: "มะกอก".to_string(),
            district: "แม่แรง".to_string(),
            full_address: "บ้าน******".to_string(),
            name: "P******n".to_string(),
            phone: "******64".to_string(),
            region: "VN".to_string(),
            state: "เมือง".to_string(),
            town: "เทส".to_string(),
            zipcode: "51120".to_string(),
        },
        region: "VN".to_string(),
        reverse_shipping_fee: 0,
        ship_by_date: 1712671200,
        shipping_carrier: "Thunder Express".to_string(),
        split_up: false,
        total_amount: 32119,
        update_time: 1713139948,
    }
}

/// Response for `get_order_detail`, one order per serial number in order
pub fn order_detail_response(order_sns: &[String]) -> GetOrderDetailResponse {
    GetOrderDetailResponse {
        error: String::new(),
        message: String::new(),
        request_id: ORDER_DETAIL_REQUEST_ID.to_string(),
        response: OrderListResponse {
            order_list: order_sns.iter().map(|sn| order_detail(sn)).collect(),
        },
    }
}

/// Invoice details for a personal-invoice order
pub fn buyer_invoice_info(order_sn: &str) -> InvoiceInfo {
    let full_address = "Ordona 7B Warszawa, Warszawa, 51120";

    InvoiceInfo {
        order_sn: order_sn.to_string(),
        invoice_type: "personal".to_string(),
        invoice_detail: InvoiceDetail {
            name: "Kevin Yap".to_string(),
            email: "testing.just@op.pl".to_string(),
            address: full_address.to_string(),
            phone_number: String::new(),
            tax_id: "0745561010054".to_string(),
            address_breakdown: AddressBreakdown {
                region: "Poland".to_string(),
                state: String::new(),
                city: "Warszawa".to_string(),
                district: String::new(),
                town: "Warszawa".to_string(),
                postcode: "51120".to_string(),
                detailed_address: "Ordona 7B Warszawa".to_string(),
                additional_info: String::new(),
                full_address: full_address.to_string(),
            },
        },
        is_requested: false,
        error: String::new(),
    }
}

pub fn buyer_invoice_response(order_sn: &str) -> GetBuyerInvoiceInfoResponse {
    GetBuyerInvoiceInfoResponse {
        request_id: BUYER_INVOICE_REQUEST_ID.to_string(),
        error: String::new(),
        message: String::new(),
        invoice_info_list: vec![buyer_invoice_info(order_sn)],
    }
}

fn placeholder() -> String {
    PLACEHOLDER.to_string()
}

/// Sample catalogue item with the given ID
pub fn item_detail(item_id: i64) -> ItemDetail {
    ItemDetail {
        item_id,
        category_id: 14646,
        item_name: "seller discount".to_string(),
        description: "first product 001first product".to_string(),
        item_sku: placeholder(),
        create_time: 1600572637,
        update_time: 1600572640,
        attribute_list: vec![Attribute {
            attribute_id: 4811,
            original_attribute_name: "Brand: L2 Default [14644]".to_string(),
            is_mandatory: true,
            attribute_value_list: vec![AttributeValue {
                value_id: 0,
                original_value_name: "Default".to_string(),
                value_unit: "g".to_string(),
            }],
        }],
        price_info: vec![PriceInfo {
            currency: "SGD".to_string(),
            original_price: 122.02,
            current_price: 122.02,
            inflated_price_of_original_price: 222.02,
            inflated_price_of_current_price: 111.02,
            sip_item_price: 100.02,
            sip_item_price_source: "auto".to_string(),
        }],
        image: ItemImage {
            image_url_list: vec![placeholder()],
            image_id_list: vec![placeholder()],
        },
        weight: "10.02".to_string(),
        dimension: Dimension {
            package_length: 11,
            package_width: 12,
            package_height: 13,
        },
        logistic_info: vec![LogisticInfo {
            logistic_id: 80012,
            logistic_name: placeholder(),
            enabled: true,
            shipping_fee: 5.02,
            size_id: 0,
            is_free: true,
            estimated_shipping_fee: 4.02,
        }],
        pre_order: PreOrder {
            is_pre_order: true,
            days_to_ship: 3,
        },
        wholesales: vec![Wholesale {
            min_count: 1,
            max_count: 2,
            unit_price: 4.02,
            inflated_price_of_unit_price: 5.02,
        }],
        condition: "NEW/USED".to_string(),
        size_chart: placeholder(),
        item_status: "NORMAL".to_string(),
        deboost: "false".to_string(),
        has_model: true,
        promotion_id: 13123,
        video_info: vec![VideoInfo {
            video_url: placeholder(),
            thumbnail_url: placeholder(),
            duration: 0,
        }],
        brand: Brand {
            brand_id: 123,
            original_brand_name: "nike".to_string(),
        },
        item_dangerous: 0,
        complaint_policy: ComplaintPolicy {
            warranty_time: "ONE_YEAR".to_string(),
            exclude_entrepreneur_warranty: true,
            complaint_address_id: 0,
            additional_information: placeholder(),
        },
        tax_info: TaxInfo {
            ncm: placeholder(),
            diff_state_cfop: placeholder(),
            csosn: placeholder(),
            origin: placeholder(),
            cest: placeholder(),
            measure_unit: placeholder(),
            invoice_option: placeholder(),
            vat_rate: placeholder(),
            hs_code: placeholder(),
            tax_code: placeholder(),
        },
        description_info: DescriptionInfo {
            extended_description: ExtendedDescription {
                field_list: vec![DescriptionField {
                    field_type: placeholder(),
                    text: placeholder(),
                    image_info: DescriptionFieldImage {
                        image_id: placeholder(),
                        image_url: placeholder(),
                    },
                }],
            },
        },
        description_type: placeholder(),
        stock_info_v2: StockInfoV2 {
            summary_info: SummaryInfo {
                total_reserved_stock: 100,
                total_available_stock: 100,
            },
            seller_stock: vec![StockLocation {
                location_id: placeholder(),
                stock: 10,
            }],
            shopee_stock: vec![StockLocation {
                location_id: placeholder(),
                stock: 0,
            }],
        },
    }
}

/// Response for `get_item_base_info`; the requested IDs are not consulted
pub fn item_base_info_response() -> GetItemBaseInfoResponse {
    GetItemBaseInfoResponse {
        error: placeholder(),
        message: placeholder(),
        warning: placeholder(),
        request_id: ITEM_BASE_INFO_REQUEST_ID.to_string(),
        response: ItemListResponse {
            item_list: MOCK_ITEM_IDS.iter().map(|&id| item_detail(id)).collect(),
        },
    }
}
