/*
 * Copyright (c) 2025 Craig Hamilton and Contributors.
 * Licensed under either of
 *  - Apache License, Version 2.0 <http://www.apache.org/licenses/LICENSE-2.0> OR
 *  - MIT license <http://opensource.org/licenses/MIT>
 *  at your option.
 */
use crate::api::errors::PhotobucketError;
use crate::api::properties::ResponseFormat;
use bytes::Bytes;
use reqwest::StatusCode;
use serde::Deserialize;
use serde::de::DeserializeOwned;

/// A response returned from the API.
///
/// The body is kept raw; decoding into structured data is the caller's
/// concern. The JSON accessors refuse to decode when the request asked for a
/// non-JSON format.
#[derive(Debug)]
pub struct ApiResponse {
    status: StatusCode,
    body: Bytes,
    format: ResponseFormat,
}

impl ApiResponse {
    pub(crate) fn new(status: StatusCode, body: Bytes, format: ResponseFormat) -> Self {
        Self {
            status,
            body,
            format,
        }
    }

    pub fn status(&self) -> StatusCode {
        self.status
    }

    /// The format the request asked the API to respond with.
    pub fn format(&self) -> ResponseFormat {
        self.format
    }

    pub fn bytes(&self) -> &Bytes {
        &self.body
    }

    pub fn text(&self) -> String {
        String::from_utf8_lossy(&self.body).into_owned()
    }

    /// Decodes the body into the given type.
    pub fn json<T: DeserializeOwned>(&self) -> Result<T, PhotobucketError> {
        if self.format != ResponseFormat::Json {
            return Err(PhotobucketError::ResponseNotJson());
        }
        Ok(serde_json::from_slice(&self.body)?)
    }

    /// Decodes the body into a generic JSON value.
    pub fn value(&self) -> Result<serde_json::Value, PhotobucketError> {
        self.json()
    }

    /// Decodes the body into Photobucket's standard response envelope.
    pub fn envelope(&self) -> Result<ApiEnvelope, PhotobucketError> {
        self.json()
    }
}

/// Photobucket's standard JSON response wrapper.
#[derive(Deserialize, Debug, Default)]
pub struct ApiEnvelope {
    #[serde(default)]
    pub status: Option<String>,

    #[serde(default)]
    pub message: Option<String>,

    #[serde(default)]
    pub content: serde_json::Value,
}
