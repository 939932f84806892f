/*
 * Copyright (c) 2025 Craig Hamilton and Contributors.
 * Licensed under either of
 *  - Apache License, Version 2.0 <http://www.apache.org/licenses/LICENSE-2.0> OR
 *  - MIT license <http://opensource.org/licenses/MIT>
 *  at your option.
 */
use crate::api::errors::PhotobucketError;
use strum_macros::{EnumString, IntoStaticStr};

/// The closed set of HTTP methods the API accepts.
#[derive(Debug, Clone, Copy, PartialEq, Eq, EnumString, IntoStaticStr)]
#[strum(serialize_all = "UPPERCASE")]
pub enum HttpMethod {
    Get,
    Post,
    Put,
    Delete,
}

impl HttpMethod {
    /// Validates a method string before any dispatch can happen.
    pub fn parse(method: &str) -> Result<Self, PhotobucketError> {
        method
            .parse::<Self>()
            .map_err(|_| PhotobucketError::UnsupportedMethod(method.to_owned()))
    }

    pub(crate) fn as_http(self) -> reqwest::Method {
        match self {
            Self::Get => reqwest::Method::GET,
            Self::Post => reqwest::Method::POST,
            Self::Put => reqwest::Method::PUT,
            Self::Delete => reqwest::Method::DELETE,
        }
    }
}

/// Whether a request must carry the token pair.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum AuthMode {
    /// Signed with the consumer only, even when a token pair is set.
    NotRequired,
    /// A missing token pair fails before any network call.
    #[default]
    Required,
    /// Token pair is used when present, absence is tolerated.
    Optional,
}

/// Response formats the API can produce.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, EnumString, IntoStaticStr)]
#[strum(serialize_all = "lowercase")]
pub enum ResponseFormat {
    #[default]
    Json,
    Xml,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, EnumString, IntoStaticStr)]
#[strum(serialize_all = "lowercase")]
pub enum Privacy {
    Public,
    Private,
}
