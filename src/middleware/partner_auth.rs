//! Partner signature authentication middleware.

use crate::{
    config::{PartnerAuthConfig, RouteGroup},
    middleware::request_id::RequestId,
    models::{
        audit::PartnerAuthAuditEvent,
        auth::{AuthRequest, VerificationOutcome},
    },
    services::{AppMetrics, auth::authenticate},
    utils::http::{extract_client_ip, extract_user_agent},
};
use actix_web::{
    Error, HttpMessage, ResponseError,
    body::EitherBody,
    dev::{Service, ServiceRequest, ServiceResponse, Transform, forward_ready},
    web,
};
use std::{
    future::{Ready, ready},
    pin::Pin,
    sync::Arc,
};

/// Partner authentication middleware factory.
///
/// Wraps one route group. When the group is not enabled in
/// [`PartnerAuthConfig`] requests pass straight through; otherwise the
/// timestamp and signature are checked before the inner service runs, and the
/// parsed [`RequestTimestamp`](crate::models::auth::RequestTimestamp) is
/// inserted into the request extensions.
pub struct PartnerAuth {
    config: Arc<PartnerAuthConfig>,
    group: RouteGroup,
}

impl PartnerAuth {
    pub fn new(config: PartnerAuthConfig, group: RouteGroup) -> Self {
        Self {
            config: Arc::new(config),
            group,
        }
    }
}

impl<S, B> Transform<S, ServiceRequest> for PartnerAuth
where
    S: Service<ServiceRequest, Response = ServiceResponse<B>, Error = Error>,
    S::Future: 'static,
    B: 'static,
{
    type Response = ServiceResponse<EitherBody<B>>;
    type Error = Error;
    type InitError = ();
    type Transform = PartnerAuthMiddleware<S>;
    type Future = Ready<Result<Self::Transform, Self::InitError>>;

    fn new_transform(&self, service: S) -> Self::Future {
        ready(Ok(PartnerAuthMiddleware {
            service,
            config: Arc::clone(&self.config),
            enabled: self.config.is_enabled_for(self.group),
        }))
    }
}

/// The actual partner authentication middleware service
pub struct PartnerAuthMiddleware<S> {
    service: S,
    config: Arc<PartnerAuthConfig>,
    enabled: bool,
}

impl<S, B> Service<ServiceRequest> for PartnerAuthMiddleware<S>
where
    S: Service<ServiceRequest, Response = ServiceResponse<B>, Error = Error>,
    S::Future: 'static,
    B: 'static,
{
    type Response = ServiceResponse<EitherBody<B>>;
    type Error = Error;
    type Future = Pin<Box<dyn std::future::Future<Output = Result<Self::Response, Self::Error>>>>;

    forward_ready!(service);

    fn call(&self, req: ServiceRequest) -> Self::Future {
        if !self.enabled {
            let fut = self.service.call(req);
            return Box::pin(async move { fut.await.map(ServiceResponse::map_into_left_body) });
        }

        let auth_request = AuthRequest::from_query(req.path(), req.query_string());
        let result = authenticate(&auth_request, &self.config);
        let outcome = VerificationOutcome::from(result.map(|_| ()));

        PartnerAuthAuditEvent::new(
            outcome,
            &auth_request.partner_id,
            req.method().to_string(),
            auth_request.path.clone(),
            extract_client_ip(req.request()),
        )
        .with_shop_id(&auth_request.shop_id)
        .with_user_agent(extract_user_agent(req.request()))
        .with_request_id(req.extensions().get::<RequestId>().map(|id| id.0.clone()))
        .log();

        if let Some(metrics) = req.app_data::<web::Data<AppMetrics>>() {
            metrics.record_auth_decision(outcome);
        }

        match result {
            Ok(timestamp) => {
                req.extensions_mut().insert(timestamp);
                let fut = self.service.call(req);
                Box::pin(async move { fut.await.map(ServiceResponse::map_into_left_body) })
            }
            Err(rejection) => {
                let res = req
                    .into_response(rejection.error_response())
                    .map_into_right_body();
                Box::pin(async move { Ok(res) })
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{models::auth::RequestTimestamp, services::auth::sign_request};
    use actix_web::{App, HttpRequest, HttpResponse, http::StatusCode, test};

    async fn echo_timestamp(req: HttpRequest) -> HttpResponse {
        match req.extensions().get::<RequestTimestamp>() {
            Some(ts) => HttpResponse::Ok().body(ts.0.to_string()),
            None => HttpResponse::Ok().body("none"),
        }
    }

    fn signed_uri(config: &PartnerAuthConfig) -> String {
        let sign = sign_request(
            &config.partner_key,
            "123456",
            "/api/v2/order/echo",
            "1640995200",
            "",
            "",
        )
        .unwrap();
        format!("/api/v2/order/echo?partner_id=123456&timestamp=1640995200&sign={sign}")
    }

    #[actix_web::test]
    async fn test_timestamp_published_to_handler() {
        let config = PartnerAuthConfig::enforcing("key");
        let uri = signed_uri(&config);
        let app = test::init_service(
            App::new().service(
                web::scope("/api/v2/order")
                    .wrap(PartnerAuth::new(config, RouteGroup::Order))
                    .route("/echo", web::get().to(echo_timestamp)),
            ),
        )
        .await;

        let req = test::TestRequest::get().uri(&uri).to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::OK);
        assert_eq!(test::read_body(resp).await, "1640995200");
    }

    #[actix_web::test]
    async fn test_disabled_group_passes_through() {
        let config = PartnerAuthConfig::default();
        let app = test::init_service(
            App::new().service(
                web::scope("/api/v2/order")
                    .wrap(PartnerAuth::new(config, RouteGroup::Order))
                    .route("/echo", web::get().to(echo_timestamp)),
            ),
        )
        .await;

        let req = test::TestRequest::get().uri("/api/v2/order/echo").to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::OK);
        assert_eq!(test::read_body(resp).await, "none");
    }

    #[actix_web::test]
    async fn test_rejection_short_circuits_handler() {
        let app = test::init_service(
            App::new().service(
                web::scope("/api/v2/order")
                    .wrap(PartnerAuth::new(
                        PartnerAuthConfig::enforcing("key"),
                        RouteGroup::Order,
                    ))
                    .route("/echo", web::get().to(echo_timestamp)),
            ),
        )
        .await;

        let req = test::TestRequest::get()
            .uri("/api/v2/order/echo?partner_id=123456&timestamp=1640995200&sign=WRONG")
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::UNAUTHORIZED);
    }
}
