/*
 * Copyright (c) 2025 Craig Hamilton and Contributors.
 * Licensed under either of
 *  - Apache License, Version 2.0 <http://www.apache.org/licenses/LICENSE-2.0> OR
 *  - MIT license <http://opensource.org/licenses/MIT>
 *  at your option.
 */

//! OAuth 1.0a request signing (HMAC-SHA1).
//!
//! The signature base string is computed over whatever URL the caller hands
//! in; the client always passes the canonical API domain URL, even when the
//! physical request targets a per-user silo host.

use crate::api::client::Creds;
use crate::api::properties::HttpMethod;
use base64::Engine as _;
use base64::engine::general_purpose::STANDARD;
use hmac::{Hmac, Mac};
use rand::{Rng, distr::Alphanumeric};
use sha1::Sha1;

pub const SIGNATURE_METHOD: &str = "HMAC-SHA1";
pub const OAUTH_VERSION: &str = "1.0";

const NONCE_LEN: usize = 32;

/// RFC 3986 percent-encoding over the unreserved set `A-Za-z0-9-._~`.
pub fn percent_encode(value: &str) -> String {
    urlencoding::encode(value).into_owned()
}

/// Builds the signature base string from the method, the URL to sign
/// against, and the full parameter set (everything except the signature
/// itself).
pub fn signature_base_string(
    method: HttpMethod,
    url: &str,
    params: &[(String, String)],
) -> String {
    let mut pairs: Vec<(String, String)> = params
        .iter()
        .map(|(k, v)| (percent_encode(k), percent_encode(v)))
        .collect();
    pairs.sort();
    let normalized = pairs
        .iter()
        .map(|(k, v)| format!("{k}={v}"))
        .collect::<Vec<_>>()
        .join("&");
    format!(
        "{}&{}&{}",
        <&'static str>::from(method),
        percent_encode(url),
        percent_encode(&normalized)
    )
}

/// Builds the HMAC key from the consumer secret and optional token secret.
pub fn signing_key(consumer_secret: &str, token_secret: Option<&str>) -> String {
    format!(
        "{}&{}",
        percent_encode(consumer_secret),
        percent_encode(token_secret.unwrap_or_default())
    )
}

/// HMAC-SHA1 over `message`, base64 encoded.
pub fn hmac_sha1(key: &str, message: &str) -> String {
    let mut mac =
        Hmac::<Sha1>::new_from_slice(key.as_bytes()).expect("hmac accepts any key length");
    mac.update(message.as_bytes());
    STANDARD.encode(mac.finalize().into_bytes())
}

pub fn nonce() -> String {
    rand::rng()
        .sample_iter(Alphanumeric)
        .take(NONCE_LEN)
        .map(char::from)
        .collect()
}

/// Signs a request, generating a fresh nonce and timestamp.
///
/// Returns the full parameter set to send: the API parameters plus the
/// `oauth_*` protocol parameters and the computed `oauth_signature`.
pub fn signed_params(
    creds: &Creds,
    token: Option<(&str, &str)>,
    method: HttpMethod,
    url: &str,
    params: &[(String, String)],
) -> Vec<(String, String)> {
    signed_params_at(
        creds,
        token,
        method,
        url,
        params,
        chrono::Utc::now().timestamp(),
        &nonce(),
    )
}

/// Signs a request at an explicit timestamp/nonce.
pub fn signed_params_at(
    creds: &Creds,
    token: Option<(&str, &str)>,
    method: HttpMethod,
    url: &str,
    params: &[(String, String)],
    timestamp: i64,
    nonce: &str,
) -> Vec<(String, String)> {
    let (consumer_key, consumer_secret) = creds.consumer_key_pair();
    let mut all = params.to_vec();
    all.push(("oauth_consumer_key".to_owned(), consumer_key.to_owned()));
    all.push(("oauth_nonce".to_owned(), nonce.to_owned()));
    all.push((
        "oauth_signature_method".to_owned(),
        SIGNATURE_METHOD.to_owned(),
    ));
    all.push(("oauth_timestamp".to_owned(), timestamp.to_string()));
    if let Some((token_key, _)) = token {
        all.push(("oauth_token".to_owned(), token_key.to_owned()));
    }
    all.push(("oauth_version".to_owned(), OAUTH_VERSION.to_owned()));

    let base = signature_base_string(method, url, &all);
    let key = signing_key(consumer_secret, token.map(|(_, secret)| secret));
    all.push(("oauth_signature".to_owned(), hmac_sha1(&key, &base)));
    all
}
