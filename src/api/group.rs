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
use async_stream::try_stream;
use futures::Stream;

/// Photobucket Group Albums API.
#[derive(Debug, Clone)]
pub struct GroupAlbums {
    client: Client,
}

/// Properties that can be used in the creation of a group album.
#[derive(Default, Debug, Clone)]
pub struct CreateGroupProps {
    pub name: String,
    pub vanity: Option<String>,
    pub uploads: Option<String>,
    pub comments: Option<String>,
    pub view: Option<String>,
    pub password: Option<String>,
    pub add: Option<String>,
    pub description: Option<String>,
}

impl GroupAlbums {
    pub const BASE_PATH: &'static str = "/group/!";

    pub fn new(client: Client) -> Self {
        Self { client }
    }

    /// Creates a new group album.
    pub async fn create(
        &self,
        props: CreateGroupProps,
    ) -> Result<ApiResponse, PhotobucketError> {
        let params = ApiParams::new()
            .set("name", props.name)
            .opt("vanity", props.vanity)
            .opt("uploads", props.uploads)
            .opt("comments", props.comments)
            .opt("view", props.view)
            .opt("password", props.password)
            .opt("add", props.add)
            .opt("description", props.description);
        self.client
            .execute(
                ApiRequest::new(HttpMethod::Post, "")
                    .base_path(Self::BASE_PATH)
                    .params(params)
                    .silo(true),
            )
            .await
    }

    /// Returns the media in a group album. Anonymous access is tolerated;
    /// private groups need the token pair.
    pub async fn media(
        &self,
        album: &Identifier,
        mtype: Option<&str>,
        paginated: Option<&str>,
        page: Option<u32>,
        perpage: Option<u32>,
        sortby: Option<&str>,
    ) -> Result<ApiResponse, PhotobucketError> {
        let page = page.map(|v| v.to_string());
        let perpage = perpage.map(|v| v.to_string());
        let params = ApiParams::new()
            .id(album)
            .opt("media", mtype)
            .opt("paginated", paginated)
            .opt("page", page.as_deref())
            .opt("perpage", perpage.as_deref())
            .opt("sortorder", sortby);
        self.client
            .execute(
                ApiRequest::new(HttpMethod::Get, "")
                    .base_path(Self::BASE_PATH)
                    .params(params)
                    .auth(AuthMode::Optional),
            )
            .await
    }

    /// Pages through a group album's media and returns the pages as a
    /// stream. Paging stops when a page comes back shorter than requested.
    pub fn media_pages(
        &self,
        album: &Identifier,
        mtype: Option<&str>,
        per_page: u32,
    ) -> impl Stream<Item = Result<ApiResponse, PhotobucketError>> {
        let client = self.client.clone();
        let album = album.clone();
        let mtype = mtype.map(str::to_owned);
        let base_path = Self::BASE_PATH;

        try_stream! {
            let perpage_str = per_page.to_string();
            let mut page: u32 = 1;

            loop {
                let page_str = page.to_string();
                let params = ApiParams::new()
                    .id(&album)
                    .opt("media", mtype.as_deref())
                    .set("paginated", "1")
                    .set("page", page_str.as_str())
                    .set("perpage", perpage_str.as_str());

                let resp = client
                    .execute(
                        ApiRequest::new(HttpMethod::Get, "")
                            .base_path(base_path)
                            .params(params)
                            .auth(AuthMode::Optional),
                    )
                    .await?;

                let count = resp
                    .envelope()
                    .ok()
                    .and_then(|envelope| {
                        envelope
                            .content
                            .get("media")
                            .map(|media| match media {
                                serde_json::Value::Array(items) => items.len(),
                                serde_json::Value::Null => 0,
                                _ => 1,
                            })
                    })
                    .unwrap_or(0);
                let is_done = count < per_page as usize;

                yield resp;

                if is_done {
                    break;
                }
                page += 1;
            }
        }
    }

    /// Returns the contributors of a group album.
    pub async fn contributors(
        &self,
        album: &Identifier,
        username: Option<&str>,
    ) -> Result<ApiResponse, PhotobucketError> {
        let params = ApiParams::new().id(album).opt("aid", username);
        self.client
            .execute(
                ApiRequest::new(HttpMethod::Get, "/contributor/!")
                    .base_path(Self::BASE_PATH)
                    .params(params)
                    .auth(AuthMode::Optional),
            )
            .await
    }

    pub async fn info(&self, album: &Identifier) -> Result<ApiResponse, PhotobucketError> {
        let params = ApiParams::new().id(album);
        self.client
            .execute(
                ApiRequest::new(HttpMethod::Get, "/info")
                    .base_path(Self::BASE_PATH)
                    .params(params),
            )
            .await
    }

    pub async fn set_info(
        &self,
        album: &Identifier,
        title: Option<&str>,
        description: Option<&str>,
        thumbnail_url: Option<&str>,
    ) -> Result<ApiResponse, PhotobucketError> {
        let params = ApiParams::new()
            .id(album)
            .opt("title", title)
            .opt("description", description)
            .opt("url", thumbnail_url);
        self.client
            .execute(
                ApiRequest::new(HttpMethod::Post, "/info")
                    .base_path(Self::BASE_PATH)
                    .params(params)
                    .silo(true),
            )
            .await
    }

    /// Returns the media tags of a group album, optionally narrowed to a
    /// single tag name. Anonymous access allowed.
    pub async fn media_tags(
        &self,
        album: &Identifier,
        tagname: Option<&str>,
        separate: Option<&str>,
        page: Option<u32>,
        perpage: Option<u32>,
    ) -> Result<ApiResponse, PhotobucketError> {
        let path = match tagname {
            Some(name) => format!("/tag/{name}"),
            None => "/tag".to_owned(),
        };
        let page = page.map(|v| v.to_string());
        let perpage = perpage.map(|v| v.to_string());
        let params = ApiParams::new()
            .id(album)
            .opt("separate", separate)
            .opt("page", page.as_deref())
            .opt("perpage", perpage.as_deref());
        self.client
            .execute(
                ApiRequest::new(HttpMethod::Get, &path)
                    .base_path(Self::BASE_PATH)
                    .params(params)
                    .auth(AuthMode::NotRequired),
            )
            .await
    }
}

shared_album_ops!(GroupAlbums);
