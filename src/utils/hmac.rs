//! HMAC-SHA256 signature generation and comparison utilities.

use hmac::{Hmac, Mac};
use sha2::Sha256;
use subtle::ConstantTimeEq;
use thiserror::Error;

type HmacSha256 = Hmac<Sha256>;

/// Length of a rendered signature: 32 digest bytes as hex.
pub const SIGNATURE_HEX_LEN: usize = 64;

/// Errors raised while setting up the keyed hash
#[derive(Debug, Error)]
pub enum SignatureError {
    #[error("Invalid secret key: {0}")]
    InvalidKey(String),
}

/// Build the signing input for a partner request.
///
/// The shop identifier is appended only when it is non-empty; an empty shop id
/// contributes nothing rather than an empty segment.
pub fn canonical_string(
    partner_id: &str,
    path: &str,
    timestamp: &str,
    access_token: &str,
    shop_id: &str,
) -> String {
    let mut base = String::with_capacity(
        partner_id.len() + path.len() + timestamp.len() + access_token.len() + shop_id.len(),
    );
    base.push_str(partner_id);
    base.push_str(path);
    base.push_str(timestamp);
    base.push_str(access_token);
    if !shop_id.is_empty() {
        base.push_str(shop_id);
    }
    base
}

/// Generate an HMAC-SHA256 signature rendered as uppercase hexadecimal
pub fn generate_signature(secret: &str, message: &str) -> Result<String, SignatureError> {
    let mut mac = HmacSha256::new_from_slice(secret.as_bytes())
        .map_err(|e| SignatureError::InvalidKey(e.to_string()))?;
    mac.update(message.as_bytes());

    Ok(hex::encode_upper(mac.finalize().into_bytes()))
}

/// Compare two rendered signatures without an early exit on the first
/// differing byte.
///
/// A length mismatch returns `false`; the length of a signature is public.
pub fn signatures_match(expected: &str, candidate: &str) -> bool {
    expected.as_bytes().ct_eq(candidate.as_bytes()).into()
}
