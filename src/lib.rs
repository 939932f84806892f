/*
 * Copyright (c) 2025 Craig Hamilton and Contributors.
 * Licensed under either of
 *  - Apache License, Version 2.0 <http://www.apache.org/licenses/LICENSE-2.0> OR
 *  - MIT license <http://opensource.org/licenses/MIT>
 *  at your option.
 */

//! # Photobucket
//!
//! This Photobucket library was created for working with the Photobucket
//! REST API.
//!
//! ## Features
//!
//! - OAuth 1.0a (HMAC-SHA1) request signing
//! - Silo/subdomain resolution: a 301 carrying the user's storage host is
//!   resolved and the request reissued once against the corrected host
//! - Album API (create/rename/delete, organization, privacy, sharing)
//! - Group Albums API (creation, media listing and paging, contributors,
//!   info, media tags)
//! - Media/Search/User base-path handles
//! - Web-login URL construction from a request token
//! - Lower level interface for handling the raw communication
//!
//! *The Photobucket API uses OAuth1. This library handles the request
//! signing and the request/access token endpoints; driving the user through
//! the web-login step is left up to the consumer of this library.*
//!
//! *If you want to use this library for more than is currently implemented,
//! [`api::Client::execute`] is a way to make request/responses in a more
//! direct way.*
//!
//! ## Installation
//!
//! ```toml
//! [dependencies]
//! photobucket = "0.2.0"
//! ```
//!
//! ## Usage
//!
//! **You will need to acquire an API key/secret from Photobucket prior to
//! using the API**
//!
//! ```rust
//! use photobucket::api::{Album, Client, Creds, HttpMethod, Identifier};
//!
//! async fn rename_album(
//!     api_key: &str,
//!     api_secret: &str,
//!     access_token: &str,
//!     token_secret: &str,
//! ) -> anyhow::Result<()> {
//!     // The API key/secret is obtained from your Photobucket account
//!     // The Access Token/Secret is obtained via the login endpoints
//!     let client = Client::new(Creds::from_tokens(
//!         api_key,
//!         api_secret,
//!         Some(access_token),
//!         Some(token_secret),
//!     ));
//!
//!     // Reachability check against the API root
//!     client.ping(HttpMethod::Get).await?;
//!
//!     let albums = Album::new(client.clone());
//!     let id = Identifier::from_segments(["username", "vacation"]);
//!     let response = albums.rename(&id, "Vacation 2012").await?;
//!     println!("{}", response.value()?);
//!     Ok(())
//! }
//! ```
//!
pub mod api;
