//! Partner request authentication: timestamp validation and signature
//! verification.
//!
//! Both checks are pure functions of the request fields and the configured
//! partner key, so they can run concurrently without coordination.

use crate::{
    config::{PartnerAuthConfig, PartnerKey},
    models::auth::{AuthRejection, AuthRequest, RequestTimestamp, VerificationOutcome},
    utils::hmac::{self, SignatureError},
};
use url::form_urlencoded;

/// Validate the raw `timestamp` parameter.
///
/// Only integer parseability is checked; stale or future timestamps pass.
pub fn validate_timestamp(raw: &str) -> Result<RequestTimestamp, AuthRejection> {
    if raw.is_empty() {
        return Err(AuthRejection::MissingTimestamp);
    }

    raw.parse::<i64>()
        .map(RequestTimestamp)
        .map_err(|_| AuthRejection::InvalidTimestampFormat)
}

/// Compute the signature a partner must send for the given request fields
pub fn sign_request(
    key: &PartnerKey,
    partner_id: &str,
    path: &str,
    timestamp: &str,
    access_token: &str,
    shop_id: &str,
) -> Result<String, SignatureError> {
    let base = hmac::canonical_string(partner_id, path, timestamp, access_token, shop_id);
    hmac::generate_signature(key.expose(), &base)
}

/// Build a percent-encoded query string carrying the signing parameters and
/// their signature.
///
/// Empty `access_token` and `shop_id` are left out, which signs the same
/// canonical string as sending them empty.
pub fn signed_query(
    key: &PartnerKey,
    partner_id: &str,
    path: &str,
    timestamp: &str,
    access_token: &str,
    shop_id: &str,
) -> Result<String, SignatureError> {
    let sign = sign_request(key, partner_id, path, timestamp, access_token, shop_id)?;

    let mut query = form_urlencoded::Serializer::new(String::new());
    query
        .append_pair("partner_id", partner_id)
        .append_pair("timestamp", timestamp);
    if !access_token.is_empty() {
        query.append_pair("access_token", access_token);
    }
    if !shop_id.is_empty() {
        query.append_pair("shop_id", shop_id);
    }
    query.append_pair("sign", &sign);

    Ok(query.finish())
}

/// Signature expected for an inbound request
pub fn expected_signature(key: &PartnerKey, req: &AuthRequest) -> Result<String, SignatureError> {
    sign_request(
        key,
        &req.partner_id,
        &req.path,
        &req.timestamp,
        &req.access_token,
        &req.shop_id,
    )
}

/// Verify the caller's `sign` against the expected signature
pub fn verify_signature(req: &AuthRequest, config: &PartnerAuthConfig) -> Result<(), AuthRejection> {
    if req.partner_id.is_empty() || req.timestamp.is_empty() || req.sign.is_empty() {
        return Err(AuthRejection::MissingCredentials);
    }

    let expected = expected_signature(&config.partner_key, req).map_err(|e| {
        tracing::error!(error = %e, "Failed to compute partner signature");
        AuthRejection::InvalidSignature
    })?;

    let matched = if config.sign_case_insensitive {
        hmac::signatures_match(&expected, &req.sign.to_ascii_uppercase())
    } else {
        hmac::signatures_match(&expected, &req.sign)
    };

    if matched {
        Ok(())
    } else {
        Err(AuthRejection::InvalidSignature)
    }
}

/// Run the full pipeline: timestamp first, then signature.
///
/// Returns the parsed timestamp for downstream handlers on success.
pub fn authenticate(
    req: &AuthRequest,
    config: &PartnerAuthConfig,
) -> Result<RequestTimestamp, AuthRejection> {
    let timestamp = validate_timestamp(&req.timestamp)?;
    verify_signature(req, config)?;
    Ok(timestamp)
}

/// Same as [`authenticate`], collapsed into a terminal outcome
pub fn evaluate(req: &AuthRequest, config: &PartnerAuthConfig) -> VerificationOutcome {
    authenticate(req, config).map(|_| ()).into()
}
