//! Partner authentication data models.

use crate::models::api::ApiError;
use actix_web::{HttpResponse, ResponseError, http::StatusCode, web};
use thiserror::Error;

/// Caller-supplied fields that take part in partner authentication.
///
/// Absent query parameters deserialize to empty strings, which contribute
/// nothing to the canonical string.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AuthRequest {
    pub partner_id: String,
    /// Literal request path, never taken from the query string
    pub path: String,
    pub timestamp: String,
    pub access_token: String,
    pub shop_id: String,
    pub sign: String,
}

impl AuthRequest {
    /// Collect authentication fields from a raw query string for the given path.
    ///
    /// The first occurrence of a repeated parameter wins; undecodable input
    /// simply yields empty fields.
    pub fn from_query(path: &str, query: &str) -> Self {
        let pairs = web::Query::<Vec<(String, String)>>::from_query(query)
            .map(|q| q.into_inner())
            .unwrap_or_default();

        let first = |name: &str| {
            pairs
                .iter()
                .find(|(key, _)| key == name)
                .map(|(_, value)| value.clone())
                .unwrap_or_default()
        };

        Self {
            partner_id: first("partner_id"),
            path: path.to_string(),
            timestamp: first("timestamp"),
            access_token: first("access_token"),
            shop_id: first("shop_id"),
            sign: first("sign"),
        }
    }
}

/// Reasons a partner request is rejected before reaching a handler
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum AuthRejection {
    #[error("Missing required authentication parameters")]
    MissingCredentials,

    #[error("Timestamp is required")]
    MissingTimestamp,

    #[error("Invalid timestamp format")]
    InvalidTimestampFormat,

    #[error("Invalid signature")]
    InvalidSignature,
}

impl AuthRejection {
    /// Machine-readable error code returned to the caller
    pub fn code(&self) -> &'static str {
        match self {
            AuthRejection::MissingCredentials => "unauthorized",
            AuthRejection::MissingTimestamp => "missing_timestamp",
            AuthRejection::InvalidTimestampFormat => "invalid_timestamp",
            AuthRejection::InvalidSignature => "invalid_signature",
        }
    }
}

impl ResponseError for AuthRejection {
    fn status_code(&self) -> StatusCode {
        match self {
            AuthRejection::MissingTimestamp | AuthRejection::InvalidTimestampFormat => {
                StatusCode::BAD_REQUEST
            }
            AuthRejection::MissingCredentials | AuthRejection::InvalidSignature => {
                StatusCode::UNAUTHORIZED
            }
        }
    }

    fn error_response(&self) -> HttpResponse {
        HttpResponse::build(self.status_code()).json(ApiError::new(self.code(), self.to_string()))
    }
}

/// Terminal result of verifying one request
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum VerificationOutcome {
    Authorized,
    Rejected(AuthRejection),
}

impl VerificationOutcome {
    pub fn is_authorized(&self) -> bool {
        matches!(self, VerificationOutcome::Authorized)
    }

    /// Label used for metrics and audit logs
    pub fn label(&self) -> &'static str {
        match self {
            VerificationOutcome::Authorized => "authorized",
            VerificationOutcome::Rejected(reason) => reason.code(),
        }
    }
}

impl From<Result<(), AuthRejection>> for VerificationOutcome {
    fn from(result: Result<(), AuthRejection>) -> Self {
        match result {
            Ok(()) => VerificationOutcome::Authorized,
            Err(reason) => VerificationOutcome::Rejected(reason),
        }
    }
}

/// Parsed request timestamp, stored in request extensions once validated
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RequestTimestamp(pub i64);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_query_defaults_missing_fields() {
        let req = AuthRequest::from_query(
            "/api/v2/order/get_order_detail",
            "partner_id=123456&timestamp=1640995200&sign=ABC&order_sn_list=X",
        );

        assert_eq!(req.partner_id, "123456");
        assert_eq!(req.path, "/api/v2/order/get_order_detail");
        assert_eq!(req.timestamp, "1640995200");
        assert_eq!(req.access_token, "");
        assert_eq!(req.shop_id, "");
        assert_eq!(req.sign, "ABC");
    }

    #[test]
    fn test_from_query_decodes_percent_escapes() {
        let req = AuthRequest::from_query("/p", "access_token=a%2Bb&shop_id=789012");
        assert_eq!(req.access_token, "a+b");
        assert_eq!(req.shop_id, "789012");
    }

    #[test]
    fn test_from_query_first_value_wins() {
        let req = AuthRequest::from_query("/p", "partner_id=1&partner_id=2");
        assert_eq!(req.partner_id, "1");
    }

    #[test]
    fn test_from_query_empty() {
        let req = AuthRequest::from_query("/p", "");
        assert_eq!(req, AuthRequest { path: "/p".to_string(), ..Default::default() });
    }

    #[test]
    fn test_rejection_status_codes() {
        assert_eq!(AuthRejection::MissingCredentials.status_code(), StatusCode::UNAUTHORIZED);
        assert_eq!(AuthRejection::InvalidSignature.status_code(), StatusCode::UNAUTHORIZED);
        assert_eq!(AuthRejection::MissingTimestamp.status_code(), StatusCode::BAD_REQUEST);
        assert_eq!(AuthRejection::InvalidTimestampFormat.status_code(), StatusCode::BAD_REQUEST);
    }

    #[test]
    fn test_outcome_labels() {
        assert_eq!(VerificationOutcome::Authorized.label(), "authorized");
        assert_eq!(
            VerificationOutcome::Rejected(AuthRejection::InvalidSignature).label(),
            "invalid_signature"
        );
    }
}
