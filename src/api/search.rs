/*
 * Copyright (c) 2025 Craig Hamilton and Contributors.
 * Licensed under either of
 *  - Apache License, Version 2.0 <http://www.apache.org/licenses/LICENSE-2.0> OR
 *  - MIT license <http://opensource.org/licenses/MIT>
 *  at your option.
 */
use crate::api::client::{ApiRequest, Client};
use crate::api::errors::PhotobucketError;
use crate::api::params::ApiParams;
use crate::api::properties::{AuthMode, HttpMethod};
use crate::api::response::ApiResponse;

/// Photobucket Search API.
#[derive(Debug, Clone)]
pub struct Search {
    client: Client,
}

impl Search {
    pub const BASE_PATH: &'static str = "/search/!";

    pub fn new(client: Client) -> Self {
        Self { client }
    }

    /// Issues a request against the search base path.
    pub async fn request(
        &self,
        method: HttpMethod,
        path: &str,
        params: ApiParams,
        auth: AuthMode,
        silo: bool,
    ) -> Result<ApiResponse, PhotobucketError> {
        self.client
            .execute(
                ApiRequest::new(method, path)
                    .base_path(Self::BASE_PATH)
                    .params(params)
                    .auth(auth)
                    .silo(silo),
            )
            .await
    }
}
