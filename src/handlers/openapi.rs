//! OpenAPI specification and application factory.

use crate::{
    config::{MetricsConfig, PartnerAuthConfig, RouteGroup, SecurityHeadersConfig},
    handlers::{
        get_buyer_invoice_info, get_item_base_info, get_metrics, get_order_detail, health, index,
        version,
    },
    middleware::{MetricsMiddleware, PartnerAuth, RequestIdMiddleware, SecurityHeaders},
    models::api::ApiError,
    services::AppMetrics,
};
use actix_web::{App, web::JsonConfig, web::QueryConfig};
use paperclip::actix::{OpenApiExt, web};
use paperclip::v2::models::{DefaultApiRaw, Info};

/// Path the generated OpenAPI document is served at
pub const SPEC_PATH: &str = "/api/spec/v2";

/// Everything the application factory needs, resolved once at startup
#[derive(Clone)]
pub struct AppContext {
    pub auth: PartnerAuthConfig,
    pub security: SecurityHeadersConfig,
    pub metrics_config: MetricsConfig,
    pub metrics: AppMetrics,
}

impl AppContext {
    /// Context with the given authentication settings and default everything else
    pub fn new(auth: PartnerAuthConfig) -> Result<Self, prometheus::Error> {
        Ok(Self {
            auth,
            security: SecurityHeadersConfig::default(),
            metrics_config: MetricsConfig::default(),
            metrics: AppMetrics::new()?,
        })
    }

    /// Load every configuration section from the environment
    pub fn from_env() -> Result<Self, prometheus::Error> {
        Ok(Self {
            auth: PartnerAuthConfig::from_env(),
            security: SecurityHeadersConfig::from_env(),
            metrics_config: MetricsConfig::from_env(),
            metrics: AppMetrics::new()?,
        })
    }
}

/// Creates the OpenAPI specification, documenting the signing scheme
pub fn create_openapi_spec() -> DefaultApiRaw {
    DefaultApiRaw {
        info: Info {
            title: "Partner Platform Mock API".into(),
            version: env!("CARGO_PKG_VERSION").into(),
            description: Some(
                "A mock of the partner platform v2 API returning canned orders, items and invoices.\n\n\
                ## Partner Signature Authentication\n\
                Route groups can be placed behind signature verification.\n\
                \n\
                **Query parameters for signed requests:**\n\
                - `partner_id`: Partner identifier (required)\n\
                - `timestamp`: Unix timestamp, base-10 integer (required)\n\
                - `access_token`: Access token (optional)\n\
                - `shop_id`: Shop identifier (optional)\n\
                - `sign`: Signature (required)\n\
                \n\
                **Signature calculation:**\n\
                1. Concatenate `partner_id + path + timestamp + access_token`, then `+ shop_id` when it is non-empty\n\
                2. `path` is the literal request path, without the query string\n\
                3. Calculate HMAC-SHA256 over it using the partner key\n\
                4. Encode as uppercase hexadecimal (64 characters)\n\
                \n\
                **Rejections:** `missing_timestamp` / `invalid_timestamp` (400), `unauthorized` / `invalid_signature` (401).\n\
                \n\
                **Configuration:**\n\
                - `PARTNER_KEY`: shared partner key\n\
                - `PARTNER_AUTH_ORDER_ENABLED`, `PARTNER_AUTH_PRODUCT_ENABLED`: protect `/api/v2/order` and `/api/v2/product`\n\
                - `PARTNER_SIGN_CASE_INSENSITIVE`: accept lowercase hex signatures".into(),
            ),
            ..Default::default()
        },
        ..Default::default()
    }
}

fn query_config() -> QueryConfig {
    QueryConfig::default().error_handler(|err, _req| {
        tracing::debug!(error = %err, "Rejected malformed query string");
        ApiError::new("invalid_request", "Invalid query parameters").bad_request()
    })
}

fn json_config() -> JsonConfig {
    JsonConfig::default().error_handler(|err, _req| {
        tracing::debug!(error = %err, "Rejected malformed request body");
        ApiError::new("invalid_request", "Invalid request body").bad_request()
    })
}

/// Creates the application with the given context
///
/// Health, version, metrics and the OpenAPI document are always open; the order and
/// product groups are wrapped in [`PartnerAuth`], which enforces only for the
/// groups enabled in the context's [`PartnerAuthConfig`].
pub fn create_app(
    ctx: AppContext,
) -> App<
    impl actix_web::dev::ServiceFactory<
        actix_web::dev::ServiceRequest,
        Config = (),
        Response = actix_web::dev::ServiceResponse,
        Error = actix_web::Error,
        InitError = (),
    >,
> {
    let AppContext {
        auth,
        security,
        metrics_config,
        metrics,
    } = ctx;

    let order_scope = web::scope(RouteGroup::Order.prefix())
        .wrap(PartnerAuth::new(auth.clone(), RouteGroup::Order))
        .service(web::resource("/get_order_detail").route(web::get().to(get_order_detail)))
        .service(
            web::resource("/get_buyer_invoice_info").route(web::post().to(get_buyer_invoice_info)),
        );

    let product_scope = web::scope(RouteGroup::Product.prefix())
        .wrap(PartnerAuth::new(auth.clone(), RouteGroup::Product))
        .service(web::resource("/get_item_base_info").route(web::get().to(get_item_base_info)));

    App::new()
        .wrap(SecurityHeaders::new(security))
        .wrap(MetricsMiddleware)
        .wrap(RequestIdMiddleware)
        .wrap_api_with_spec(create_openapi_spec())
        .app_data(query_config())
        .app_data(json_config())
        .app_data(web::Data::new(auth))
        .app_data(web::Data::new(metrics_config))
        .app_data(web::Data::new(metrics))
        .service(web::resource("/").route(web::get().to(index)))
        .service(web::resource("/api/health").route(web::get().to(health)))
        .service(web::resource("/api/version").route(web::get().to(version)))
        .service(web::resource("/api/metrics").route(web::get().to(get_metrics)))
        .service(order_scope)
        .service(product_scope)
        .with_json_spec_at(SPEC_PATH)
        .build()
}

/// Creates the application from environment configuration
pub fn create_base_app() -> Result<
    App<
        impl actix_web::dev::ServiceFactory<
            actix_web::dev::ServiceRequest,
            Config = (),
            Response = actix_web::dev::ServiceResponse,
            Error = actix_web::Error,
            InitError = (),
        >,
    >,
    prometheus::Error,
> {
    Ok(create_app(AppContext::from_env()?))
}
