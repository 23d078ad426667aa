#!/usr/bin/env cargo
//! Partner Signature Demo
//!
//! Prints a signed request URL for the partner mock API. Run with:
//!
//! ```
//! cargo run --example sign_request -- /api/v2/order/get_order_detail
//! ```
//!
//! `PARTNER_KEY`, `PARTNER_ID`, `ACCESS_TOKEN` and `SHOP_ID` are read from the
//! environment when set.

use chrono::Utc;
use partner_mock_api::{PartnerKey, config::PLACEHOLDER_PARTNER_KEY, sign_request, signed_query};
use std::env;

fn main() {
    println!("🔐 Partner Signature Demo");
    println!("=========================\n");

    let path = env::args()
        .nth(1)
        .unwrap_or_else(|| "/api/v2/order/get_order_detail".to_string());
    let secret = env::var("PARTNER_KEY").unwrap_or_else(|_| PLACEHOLDER_PARTNER_KEY.to_string());
    let partner_id = env::var("PARTNER_ID").unwrap_or_else(|_| "123456".to_string());
    let access_token = env::var("ACCESS_TOKEN").unwrap_or_default();
    let shop_id = env::var("SHOP_ID").unwrap_or_default();
    let timestamp = Utc::now().timestamp().to_string();

    println!("Configuration:");
    println!("  Partner ID: {partner_id}");
    println!("  Path: {path}");
    println!("  Timestamp: {timestamp}");
    println!("  Access token: '{access_token}'");
    println!("  Shop ID: '{shop_id}'");

    let key = PartnerKey::new(secret);
    match sign_request(&key, &partner_id, &path, &timestamp, &access_token, &shop_id) {
        Ok(sign) => {
            println!("\n✅ Generated Signature:");
            println!("  sign={sign}");

            println!("\n🔍 Signed message (partner_id + path + timestamp + access_token [+ shop_id]):");
            println!("  '{partner_id}{path}{timestamp}{access_token}{shop_id}'");

            let query = match signed_query(&key, &partner_id, &path, &timestamp, &access_token, &shop_id) {
                Ok(query) => query,
                Err(e) => {
                    println!("❌ Error building query: {e}");
                    return;
                }
            };

            println!("\n📋 Example curl command:");
            println!("curl 'http://localhost:3001{path}?{query}'");

            println!("\n⚙️  To enforce signatures, set environment variables:");
            println!("  export PARTNER_KEY=<your key>");
            println!("  export PARTNER_AUTH_ORDER_ENABLED=true");
            println!("  export PARTNER_AUTH_PRODUCT_ENABLED=true");
        }
        Err(e) => {
            println!("❌ Error generating signature: {e}");
        }
    }
}
