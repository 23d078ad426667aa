//! Audit records for partner authentication decisions.

use crate::models::auth::VerificationOutcome;
use chrono::{DateTime, Utc};
use serde::Serialize;
use tracing::{info, warn};

/// Structured audit entry for one authentication decision.
///
/// Carries neither the caller's signature nor the access token.
#[derive(Debug, Clone, Serialize)]
pub struct PartnerAuthAuditEvent {
    pub outcome: &'static str,
    pub authorized: bool,
    pub timestamp: DateTime<Utc>,
    pub partner_id: String,
    pub shop_id: Option<String>,
    pub method: String,
    pub path: String,
    pub ip_address: String,
    pub user_agent: Option<String>,
    pub request_id: Option<String>,
}

impl PartnerAuthAuditEvent {
    /// Create a new audit event for the given outcome
    pub fn new(
        outcome: VerificationOutcome,
        partner_id: &str,
        method: String,
        path: String,
        ip_address: String,
    ) -> Self {
        Self {
            outcome: outcome.label(),
            authorized: outcome.is_authorized(),
            timestamp: Utc::now(),
            partner_id: partner_id.to_string(),
            shop_id: None,
            method,
            path,
            ip_address,
            user_agent: None,
            request_id: None,
        }
    }

    pub fn with_shop_id(mut self, shop_id: &str) -> Self {
        self.shop_id = (!shop_id.is_empty()).then(|| shop_id.to_string());
        self
    }

    pub fn with_user_agent(mut self, user_agent: Option<String>) -> Self {
        self.user_agent = user_agent;
        self
    }

    pub fn with_request_id(mut self, request_id: Option<String>) -> Self {
        self.request_id = request_id;
        self
    }

    /// Emit the event; rejections are logged at warn level
    pub fn log(&self) {
        if self.authorized {
            info!(
                target: "partner_auth_audit",
                outcome = %self.outcome,
                timestamp = %self.timestamp,
                partner_id = %self.partner_id,
                shop_id = ?self.shop_id,
                method = %self.method,
                path = %self.path,
                ip_address = %self.ip_address,
                user_agent = ?self.user_agent,
                request_id = ?self.request_id,
                "Partner request authorized"
            );
        } else {
            warn!(
                target: "partner_auth_audit",
                outcome = %self.outcome,
                timestamp = %self.timestamp,
                partner_id = %self.partner_id,
                shop_id = ?self.shop_id,
                method = %self.method,
                path = %self.path,
                ip_address = %self.ip_address,
                user_agent = ?self.user_agent,
                request_id = ?self.request_id,
                "Partner request rejected"
            );
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::auth::AuthRejection;

    #[test]
    fn test_audit_event_serialization_omits_secrets() {
        let event = PartnerAuthAuditEvent::new(
            VerificationOutcome::Rejected(AuthRejection::InvalidSignature),
            "123456",
            "GET".to_string(),
            "/api/v2/order/get_order_detail".to_string(),
            "10.0.0.1".to_string(),
        )
        .with_shop_id("")
        .with_request_id(Some("req-1".to_string()));

        let json = serde_json::to_value(&event).unwrap();
        assert_eq!(json["outcome"], "invalid_signature");
        assert_eq!(json["authorized"], false);
        assert!(json["shop_id"].is_null());
        assert!(json.get("sign").is_none());
        assert!(json.get("access_token").is_none());
    }
}
