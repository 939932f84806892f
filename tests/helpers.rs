/*
 * Copyright (c) 2025 Craig Hamilton and Contributors.
 * Licensed under either of
 *  - Apache License, Version 2.0 <http://www.apache.org/licenses/LICENSE-2.0> OR
 *  - MIT license <http://opensource.org/licenses/MIT>
 *  at your option.
 */
use serde::Deserialize;
use std::fs::File;
use std::io::BufReader;
use std::path::PathBuf;

#[derive(Deserialize, Debug)]
struct PhotobucketOauth1Token {
    token: String,
    secret: String,
}

fn get_photobucket_tokens(path: PathBuf) -> anyhow::Result<PhotobucketOauth1Token> {
    let file = File::open(path)?;
    let reader = BufReader::new(file);
    Ok(serde_json::from_reader(reader)?)
}

#[allow(dead_code)]
pub(crate) fn get_full_auth_creds() -> anyhow::Result<photobucket::api::Creds> {
    let api_key = std::env::var("PHOTOBUCKET_API_KEY")?;
    let api_secret = std::env::var("PHOTOBUCKET_API_SECRET")?;
    let token_cache = std::env::var("PHOTOBUCKET_AUTH_CACHE")?;
    let tokens = get_photobucket_tokens(token_cache.into())?;

    Ok(photobucket::api::Creds::from_tokens(
        &api_key,
        &api_secret,
        Some(&tokens.token),
        Some(&tokens.secret),
    ))
}

#[allow(dead_code)]
pub(crate) fn get_consumer_only_creds() -> anyhow::Result<photobucket::api::Creds> {
    let api_key = std::env::var("PHOTOBUCKET_API_KEY")?;
    let api_secret = std::env::var("PHOTOBUCKET_API_SECRET")?;

    Ok(photobucket::api::Creds::from_tokens(
        &api_key,
        &api_secret,
        None,
        None,
    ))
}
