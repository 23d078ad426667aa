//! Security headers middleware implementation.

use crate::config::SecurityHeadersConfig;
use actix_web::{
    Error,
    dev::{Service, ServiceRequest, ServiceResponse, Transform, forward_ready},
    http::header::{self, HeaderMap, HeaderValue},
};
use std::{
    future::{Ready, ready},
    pin::Pin,
    rc::Rc,
};

/// Security headers middleware factory
pub struct SecurityHeaders {
    config: Rc<SecurityHeadersConfig>,
}

impl SecurityHeaders {
    pub fn new(config: SecurityHeadersConfig) -> Self {
        Self {
            config: Rc::new(config),
        }
    }
}

impl<S, B> Transform<S, ServiceRequest> for SecurityHeaders
where
    S: Service<ServiceRequest, Response = ServiceResponse<B>, Error = Error>,
    S::Future: 'static,
    B: 'static,
{
    type Response = ServiceResponse<B>;
    type Error = Error;
    type InitError = ();
    type Transform = SecurityHeadersMiddleware<S>;
    type Future = Ready<Result<Self::Transform, Self::InitError>>;

    fn new_transform(&self, service: S) -> Self::Future {
        ready(Ok(SecurityHeadersMiddleware {
            service,
            config: Rc::clone(&self.config),
        }))
    }
}

pub struct SecurityHeadersMiddleware<S> {
    service: S,
    config: Rc<SecurityHeadersConfig>,
}

impl<S, B> Service<ServiceRequest> for SecurityHeadersMiddleware<S>
where
    S: Service<ServiceRequest, Response = ServiceResponse<B>, Error = Error>,
    S::Future: 'static,
    B: 'static,
{
    type Response = ServiceResponse<B>;
    type Error = Error;
    type Future = Pin<Box<dyn std::future::Future<Output = Result<Self::Response, Self::Error>>>>;

    forward_ready!(service);

    fn call(&self, req: ServiceRequest) -> Self::Future {
        let fut = self.service.call(req);
        let config = Rc::clone(&self.config);

        Box::pin(async move {
            let mut res = fut.await?;
            apply_security_headers(res.headers_mut(), &config);
            Ok(res)
        })
    }
}

/// Insert the configured hardening headers; invalid configured values are skipped
fn apply_security_headers(headers: &mut HeaderMap, config: &SecurityHeadersConfig) {
    if config.nosniff {
        headers.insert(header::X_CONTENT_TYPE_OPTIONS, HeaderValue::from_static("nosniff"));
    }

    if let Ok(value) = HeaderValue::from_str(&config.frame_options) {
        headers.insert(header::X_FRAME_OPTIONS, value);
    }

    if let Ok(value) = HeaderValue::from_str(&config.referrer_policy) {
        headers.insert(header::REFERRER_POLICY, value);
    }

    if let Some(csp) = &config.csp
        && let Ok(value) = HeaderValue::from_str(csp)
    {
        headers.insert(header::CONTENT_SECURITY_POLICY, value);
    }

    if let Some(max_age) = config.hsts_max_age
        && let Ok(value) = HeaderValue::from_str(&format!("max-age={max_age}"))
    {
        headers.insert(header::STRICT_TRANSPORT_SECURITY, value);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_disabled_headers_are_omitted() {
        let config = SecurityHeadersConfig {
            csp: None,
            hsts_max_age: None,
            nosniff: false,
            ..SecurityHeadersConfig::default()
        };
        let mut headers = HeaderMap::new();
        apply_security_headers(&mut headers, &config);

        assert!(!headers.contains_key(header::CONTENT_SECURITY_POLICY));
        assert!(!headers.contains_key(header::STRICT_TRANSPORT_SECURITY));
        assert!(!headers.contains_key(header::X_CONTENT_TYPE_OPTIONS));
        assert_eq!(headers.get(header::X_FRAME_OPTIONS).unwrap().to_str().unwrap(), "DENY");
    }

    #[test]
    fn test_invalid_header_value_skipped() {
        let config = SecurityHeadersConfig {
            frame_options: "bad\nvalue".to_string(),
            ..SecurityHeadersConfig::default()
        };
        let mut headers = HeaderMap::new();
        apply_security_headers(&mut headers, &config);

        assert!(!headers.contains_key(header::X_FRAME_OPTIONS));
        assert_eq!(
            headers.get(header::STRICT_TRANSPORT_SECURITY).unwrap().to_str().unwrap(),
            "max-age=31536000"
        );
    }
}
