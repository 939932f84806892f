/*
 * Copyright (c) 2025 Craig Hamilton and Contributors.
 * Licensed under either of
 *  - Apache License, Version 2.0 <http://www.apache.org/licenses/LICENSE-2.0> OR
 *  - MIT license <http://opensource.org/licenses/MIT>
 *  at your option.
 */
use crate::api::client::{ApiRequest, Client};
use crate::api::errors::PhotobucketError;
use crate::api::macros::shared_album_ops;
use crate::api::params::{ApiParams, Identifier};
use crate::api::properties::{AuthMode, HttpMethod, Privacy};
use crate::api::response::ApiResponse;

/// Photobucket Album API.
///
/// Album-mutating calls (`create`, `delete`, organization changes) target the
/// user's silo host directly.
#[derive(Debug, Clone)]
pub struct Album {
    client: Client,
}

impl Album {
    pub const BASE_PATH: &'static str = "/album/!";

    pub fn new(client: Client) -> Self {
        Self { client }
    }

    /// Creates a new sub-album under `album`.
    pub async fn create(
        &self,
        album: &Identifier,
        name: &str,
    ) -> Result<ApiResponse, PhotobucketError> {
        let params = ApiParams::new().id(album).set("name", name);
        self.client
            .execute(
                ApiRequest::new(HttpMethod::Post, "")
                    .base_path(Self::BASE_PATH)
                    .params(params)
                    .silo(true),
            )
            .await
    }

    pub async fn rename(
        &self,
        album: &Identifier,
        name: &str,
    ) -> Result<ApiResponse, PhotobucketError> {
        let params = ApiParams::new().id(album).set("name", name);
        self.client
            .execute(
                ApiRequest::new(HttpMethod::Put, "")
                    .base_path(Self::BASE_PATH)
                    .params(params),
            )
            .await
    }

    pub async fn delete(&self, album: &Identifier) -> Result<ApiResponse, PhotobucketError> {
        let params = ApiParams::new().id(album);
        self.client
            .execute(
                ApiRequest::new(HttpMethod::Delete, "")
                    .base_path(Self::BASE_PATH)
                    .params(params)
                    .silo(true),
            )
            .await
    }

    /// Returns the ordering of an album's contents.
    pub async fn organization(
        &self,
        album: &Identifier,
    ) -> Result<ApiResponse, PhotobucketError> {
        let params = ApiParams::new().id(album);
        self.client
            .execute(
                ApiRequest::new(HttpMethod::Get, "/organize")
                    .base_path(Self::BASE_PATH)
                    .params(params),
            )
            .await
    }

    pub async fn set_organization(
        &self,
        album: &Identifier,
        order_type: &str,
        order: Option<&str>,
    ) -> Result<ApiResponse, PhotobucketError> {
        let params = ApiParams::new()
            .id(album)
            .set("order_type", order_type)
            .opt("order", order);
        self.client
            .execute(
                ApiRequest::new(HttpMethod::Post, "/organize")
                    .base_path(Self::BASE_PATH)
                    .params(params)
                    .silo(true),
            )
            .await
    }
}

shared_album_ops!(Album);
