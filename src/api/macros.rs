/*
 * Copyright (c) 2025 Craig Hamilton and Contributors.
 * Licensed under either of
 *  - Apache License, Version 2.0 <http://www.apache.org/licenses/LICENSE-2.0> OR
 *  - MIT license <http://opensource.org/licenses/MIT>
 *  at your option.
 */

// Operations shared between the Album and GroupAlbums APIs.
macro_rules! shared_album_ops {
    ($t:ty) => {
        impl $t {
            /// Returns the direct URL of an album.
            pub async fn url(
                &self,
                album: &Identifier,
            ) -> Result<ApiResponse, PhotobucketError> {
                let params = ApiParams::new().id(album);
                self.client
                    .execute(
                        ApiRequest::new(HttpMethod::Get, "/url")
                            .base_path(Self::BASE_PATH)
                            .params(params),
                    )
                    .await
            }

            /// Subscribes the authenticated user to an album feed.
            pub async fn follow(
                &self,
                album: &Identifier,
                feed: Option<&str>,
                email: Option<&str>,
            ) -> Result<ApiResponse, PhotobucketError> {
                let params = ApiParams::new().id(album).opt("aid", feed).opt("email", email);
                self.client
                    .execute(
                        ApiRequest::new(HttpMethod::Post, "/follow/!")
                            .base_path(Self::BASE_PATH)
                            .params(params)
                            .silo(true),
                    )
                    .await
            }

            pub async fn stop_following(
                &self,
                album: &Identifier,
                subscription_id: &str,
                feed: Option<&str>,
            ) -> Result<ApiResponse, PhotobucketError> {
                let params = ApiParams::new()
                    .id(album)
                    .opt("aid", feed)
                    .set("user_subscription_id", subscription_id);
                self.client
                    .execute(
                        ApiRequest::new(HttpMethod::Delete, "/follow/!")
                            .base_path(Self::BASE_PATH)
                            .params(params),
                    )
                    .await
            }

            pub async fn following_status(
                &self,
                album: &Identifier,
                feed: Option<&str>,
                email: Option<&str>,
            ) -> Result<ApiResponse, PhotobucketError> {
                let params = ApiParams::new().id(album).opt("aid", feed).opt("email", email);
                self.client
                    .execute(
                        ApiRequest::new(HttpMethod::Get, "/follow/!")
                            .base_path(Self::BASE_PATH)
                            .params(params),
                    )
                    .await
            }

            /// Returns the privacy settings of an album.
            pub async fn privacy(
                &self,
                album: &Identifier,
            ) -> Result<ApiResponse, PhotobucketError> {
                let params = ApiParams::new().id(album);
                self.client
                    .execute(
                        ApiRequest::new(HttpMethod::Get, "/privacy")
                            .base_path(Self::BASE_PATH)
                            .params(params),
                    )
                    .await
            }

            pub async fn set_privacy(
                &self,
                album: &Identifier,
                privacy: Privacy,
                password: Option<&str>,
            ) -> Result<ApiResponse, PhotobucketError> {
                let params = ApiParams::new()
                    .id(album)
                    .set("privacy", <&'static str>::from(privacy))
                    .opt("password", password);
                self.client
                    .execute(
                        ApiRequest::new(HttpMethod::Post, "/privacy")
                            .base_path(Self::BASE_PATH)
                            .params(params)
                            .silo(true),
                    )
                    .await
            }

            /// Returns the vanity URL of an album. Anonymous access allowed.
            pub async fn vanity_url(
                &self,
                album: &Identifier,
            ) -> Result<ApiResponse, PhotobucketError> {
                let params = ApiParams::new().id(album);
                self.client
                    .execute(
                        ApiRequest::new(HttpMethod::Get, "/vanity")
                            .base_path(Self::BASE_PATH)
                            .params(params)
                            .auth(AuthMode::NotRequired),
                    )
                    .await
            }

            pub async fn theme(
                &self,
                album: &Identifier,
            ) -> Result<ApiResponse, PhotobucketError> {
                let params = ApiParams::new().id(album);
                self.client
                    .execute(
                        ApiRequest::new(HttpMethod::Get, "/theme")
                            .base_path(Self::BASE_PATH)
                            .params(params),
                    )
                    .await
            }

            /// Shares an album through the given services.
            pub async fn share(
                &self,
                album: &Identifier,
                services: &str,
                message: Option<&str>,
            ) -> Result<ApiResponse, PhotobucketError> {
                let params = ApiParams::new()
                    .id(album)
                    .set("aid", services)
                    .opt("message", message);
                self.client
                    .execute(
                        ApiRequest::new(HttpMethod::Post, "/share/!")
                            .base_path(Self::BASE_PATH)
                            .params(params)
                            .silo(true),
                    )
                    .await
            }
        }
    };
}

pub(crate) use shared_album_ops;
