use actix_web::{http::StatusCode, test};
use partner_mock_api::{AppContext, PartnerAuthConfig, create_app};

fn open_context() -> AppContext {
    AppContext::new(PartnerAuthConfig::default()).expect("Failed to create app context")
}

async fn read_json(resp: actix_web::dev::ServiceResponse) -> serde_json::Value {
    let body = test::read_body(resp).await;
    serde_json::from_slice(&body).expect("Failed to parse response as JSON")
}

#[actix_web::test]
async fn test_health_endpoint_integration() {
    let app = test::init_service(create_app(open_context())).await;

    let req = test::TestRequest::get().uri("/api/health").to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::OK, "Expected 200 OK status");

    let content_type = resp.headers().get("content-type").unwrap().to_str().unwrap();
    assert!(content_type.contains("application/json"), "Expected JSON, got: {content_type}");

    let json = read_json(resp).await;
    assert_eq!(json, serde_json::json!({ "status": "healthy" }));
}

#[actix_web::test]
async fn test_version_endpoint_integration() {
    let app = test::init_service(create_app(open_context())).await;

    let req = test::TestRequest::get().uri("/api/version").to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::OK);

    let json = read_json(resp).await;
    assert_eq!(json["version"], "0.1.0", "Expected version to match package version");
    assert!(json["commit"].is_string());
    assert!(json["build_time"].is_string());
}

#[actix_web::test]
async fn test_openapi_spec_lists_partner_routes() {
    let app = test::init_service(create_app(open_context())).await;

    let req = test::TestRequest::get().uri("/api/spec/v2").to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::OK);

    let json = read_json(resp).await;
    let paths = json["paths"].as_object().expect("spec should contain paths");
    assert!(paths.contains_key("/api/v2/order/get_order_detail"));
    assert!(paths.contains_key("/api/v2/order/get_buyer_invoice_info"));
    assert!(paths.contains_key("/api/v2/product/get_item_base_info"));
}

#[actix_web::test]
async fn test_index_serves_html() {
    let app = test::init_service(create_app(open_context())).await;

    let req = test::TestRequest::get().uri("/").to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::OK);

    let body = test::read_body(resp).await;
    let body_str = std::str::from_utf8(&body).unwrap();
    assert!(body_str.contains("/api/spec/v2"));
}

#[actix_web::test]
async fn test_request_id_generated_and_echoed() {
    let app = test::init_service(create_app(open_context())).await;

    let req = test::TestRequest::get().uri("/api/health").to_request();
    let resp = test::call_service(&app, req).await;
    let generated = resp.headers().get("x-request-id").expect("X-Request-ID should be set");
    assert_eq!(generated.to_str().unwrap().len(), 36, "Expected a UUID request id");

    let req = test::TestRequest::get()
        .uri("/api/health")
        .insert_header(("X-Request-ID", "caller-supplied-id"))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.headers().get("x-request-id").unwrap(), "caller-supplied-id");
}

#[actix_web::test]
async fn test_security_headers_present() {
    let app = test::init_service(create_app(open_context())).await;

    let req = test::TestRequest::get().uri("/api/health").to_request();
    let resp = test::call_service(&app, req).await;

    let headers = resp.headers();
    assert_eq!(headers.get("x-content-type-options").unwrap(), "nosniff");
    assert_eq!(headers.get("x-frame-options").unwrap(), "DENY");
    assert_eq!(headers.get("referrer-policy").unwrap(), "no-referrer");
    assert!(headers.contains_key("content-security-policy"));
    assert!(headers.contains_key("strict-transport-security"));
}

#[actix_web::test]
async fn test_order_detail_open_by_default() {
    let app = test::init_service(create_app(open_context())).await;

    let req = test::TestRequest::get()
        .uri("/api/v2/order/get_order_detail?order_sn_list=201214JAJXU6G7,%20201214JASXYXY6")
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::OK);

    let json = read_json(resp).await;
    assert_eq!(json["request_id"], "023c50ace933ba38473a5fb2a7dc8821");
    assert_eq!(json["error"], "");
    let orders = json["response"]["order_list"].as_array().unwrap();
    assert_eq!(orders.len(), 2);
    assert_eq!(orders[0]["order_sn"], "201214JAJXU6G7");
    assert_eq!(orders[1]["order_sn"], "201214JASXYXY6");
    assert_eq!(orders[0]["order_status"], "COMPLETED");
    assert!(orders[0]["buyer_cpf_id"].is_null());
}

#[actix_web::test]
async fn test_order_detail_requires_order_sn_list() {
    let app = test::init_service(create_app(open_context())).await;

    let req = test::TestRequest::get().uri("/api/v2/order/get_order_detail").to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);

    let json = read_json(resp).await;
    assert_eq!(
        json,
        serde_json::json!({ "error": "missing_order_sn_list", "message": "Order SN list is required" }),
        "Bad requests carry only the error body, no response envelope"
    );
}

#[actix_web::test]
async fn test_order_sn_list_blank_entries_dropped() {
    let app = test::init_service(create_app(open_context())).await;

    let req = test::TestRequest::get()
        .uri("/api/v2/order/get_order_detail?order_sn_list=A,,%20B,")
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::OK);

    let json = read_json(resp).await;
    let sns: Vec<&str> = json["response"]["order_list"]
        .as_array()
        .unwrap()
        .iter()
        .map(|o| o["order_sn"].as_str().unwrap())
        .collect();
    assert_eq!(sns, vec!["A", "B"]);

    let req = test::TestRequest::get()
        .uri("/api/v2/order/get_order_detail?order_sn_list=,%20,")
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);

    let json = read_json(resp).await;
    assert_eq!(json["error"], "missing_order_sn_list");
}

#[actix_web::test]
async fn test_malformed_query_is_invalid_request() {
    let app = test::init_service(create_app(open_context())).await;

    let req = test::TestRequest::get()
        .uri("/api/v2/order/get_order_detail?order_sn_list=A&request_order_status_pending=maybe")
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);

    let json = read_json(resp).await;
    assert_eq!(json["error"], "invalid_request");
    assert_eq!(json["message"], "Invalid query parameters");
}

#[actix_web::test]
async fn test_buyer_invoice_info() {
    let app = test::init_service(create_app(open_context())).await;

    let req = test::TestRequest::post()
        .uri("/api/v2/order/get_buyer_invoice_info")
        .set_json(serde_json::json!({ "queries": [{ "order_sn": "2209160VNPKXF7" }] }))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::OK);

    let json = read_json(resp).await;
    assert_eq!(json["request_id"], "a2c45ca2683caf1651ecab5a4d5942ce");
    let invoice = &json["invoice_info_list"][0];
    assert_eq!(invoice["order_sn"], "2209160VNPKXF7");
    assert_eq!(invoice["invoice_detail"]["address_breakdown"]["city"], "Warszawa");
}

#[actix_web::test]
async fn test_buyer_invoice_info_requires_order_sn() {
    let app = test::init_service(create_app(open_context())).await;

    for body in [
        serde_json::json!({ "queries": [] }),
        serde_json::json!({ "queries": [{ "order_sn": "" }] }),
        serde_json::json!({}),
    ] {
        let req = test::TestRequest::post()
            .uri("/api/v2/order/get_buyer_invoice_info")
            .set_json(&body)
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::BAD_REQUEST, "body: {body}");

        let json = read_json(resp).await;
        assert_eq!(json["error"], "missing_order_sn");
    }
}

#[actix_web::test]
async fn test_buyer_invoice_info_malformed_body() {
    let app = test::init_service(create_app(open_context())).await;

    let req = test::TestRequest::post()
        .uri("/api/v2/order/get_buyer_invoice_info")
        .insert_header(("content-type", "application/json"))
        .set_payload("{not json")
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);

    let json = read_json(resp).await;
    assert_eq!(json["error"], "invalid_request");
    assert_eq!(json["message"], "Invalid request body");
}

#[actix_web::test]
async fn test_item_base_info() {
    let app = test::init_service(create_app(open_context())).await;

    let req = test::TestRequest::get()
        .uri("/api/v2/product/get_item_base_info?item_id_list=%5B1,2%5D&need_tax_info=true")
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::OK);

    let json = read_json(resp).await;
    assert_eq!(json["request_id"], "7b9da0c6926642199c33ee9dd3a266f5");
    let items = json["response"]["item_list"].as_array().unwrap();
    let ids: Vec<i64> = items.iter().map(|i| i["item_id"].as_i64().unwrap()).collect();
    assert_eq!(ids, vec![34001, 34002]);
}

#[actix_web::test]
async fn test_item_base_info_requires_item_id_list() {
    let app = test::init_service(create_app(open_context())).await;

    let req = test::TestRequest::get()
        .uri("/api/v2/product/get_item_base_info?item_id_list=")
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);

    let json = read_json(resp).await;
    assert_eq!(json["error"], "missing_item_id_list");
}

#[actix_web::test]
async fn test_metrics_endpoint_records_requests() {
    let app = test::init_service(create_app(open_context())).await;

    let req = test::TestRequest::get().uri("/api/health").to_request();
    test::call_service(&app, req).await;

    let req = test::TestRequest::get().uri("/api/metrics").to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::OK);

    let body = test::read_body(resp).await;
    let body_str = std::str::from_utf8(&body).unwrap();
    assert!(body_str.contains("http_requests_total"));
    assert!(body_str.contains("route=\"/api/health\""));
    assert!(body_str.contains("app_info"));
}

#[actix_web::test]
async fn test_metrics_endpoint_disabled() {
    let mut ctx = open_context();
    ctx.metrics_config.enabled = false;
    let app = test::init_service(create_app(ctx)).await;

    let req = test::TestRequest::get().uri("/api/metrics").to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::SERVICE_UNAVAILABLE);
}
