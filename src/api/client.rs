/*
 * Copyright (c) 2025 Craig Hamilton and Contributors.
 * Licensed under either of
 *  - Apache License, Version 2.0 <http://www.apache.org/licenses/LICENSE-2.0> OR
 *  - MIT license <http://opensource.org/licenses/MIT>
 *  at your option.
 */
use crate::api::errors::PhotobucketError;
use crate::api::oauth;
use crate::api::params::ApiParams;
use crate::api::properties::{AuthMode, HttpMethod, ResponseFormat};
use crate::api::response::{ApiEnvelope, ApiResponse};
use reqwest::StatusCode;
use std::sync::{Arc, RwLock};

// Photobucket API main endpoint
pub const DOMAIN: &str = "api.photobucket.com";

// Url for user authentication
pub const LOGIN_URL: &str = "http://photobucket.com/apilogin/login";

// Base path shared by all APIs. Per-resource base paths embed the `!`
// identifier placeholder, e.g. /album/! with ?id=identifier.
pub const ROOT_PATH: &str = "/";

const USER_AGENT: &str = concat!(
    "rust-photobucket/",
    env!("CARGO_PKG_VERSION"),
    " (Language=Rust)"
);
const FORM_CONTENT_TYPE: &str = "application/x-www-form-urlencoded";

/// OAuth credentials: the consumer key/secret identify the calling
/// application, the token pair an authenticated user or pending login.
#[derive(Default, Clone)]
pub struct Creds {
    consumer_key: String,
    consumer_secret: String,
    access_token: Option<String>,
    token_secret: Option<String>,
}

impl Creds {
    /// Creates credentials from the provided tokens. The token pair may be a
    /// request or an access token.
    pub fn from_tokens(
        consumer_key: &str,
        consumer_secret: &str,
        access_token: Option<&str>,
        token_secret: Option<&str>,
    ) -> Self {
        Self {
            consumer_key: consumer_key.into(),
            consumer_secret: consumer_secret.into(),
            access_token: access_token.map(Into::into),
            token_secret: token_secret.map(Into::into),
        }
    }

    pub fn consumer_key_pair(&self) -> (&str, &str) {
        (self.consumer_key.as_str(), self.consumer_secret.as_str())
    }

    /// The token pair, present only when both halves are set.
    pub fn token_pair(&self) -> Option<(&str, &str)> {
        match (&self.access_token, &self.token_secret) {
            (Some(token), Some(secret)) => Some((token.as_str(), secret.as_str())),
            _ => None,
        }
    }

    pub(crate) fn access_token(&self) -> Option<&str> {
        self.access_token.as_deref()
    }
}

impl std::fmt::Debug for Creds {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Creds")
            .field("consumer_key", &"xxx")
            .field("consumer_secret", &"xxx")
            .field("access_token", &"xxx")
            .field("token_secret", &"xxx")
            .finish()
    }
}

/// Describes one API call: endpoint, parameters, auth requirement and
/// targeting.
#[derive(Debug)]
pub struct ApiRequest<'a> {
    method: HttpMethod,
    path: &'a str,
    base_path: &'a str,
    params: ApiParams,
    auth: AuthMode,
    silo: bool,
    headers: Vec<(String, String)>,
    body: Option<String>,
}

impl<'a> ApiRequest<'a> {
    /// A request for `path` against the root base path, with auth required.
    pub fn new(method: HttpMethod, path: &'a str) -> Self {
        Self {
            method,
            path,
            base_path: ROOT_PATH,
            params: ApiParams::new(),
            auth: AuthMode::default(),
            silo: false,
            headers: Vec::new(),
            body: None,
        }
    }

    /// Overrides the resource base path the relative path is appended to.
    pub fn base_path(mut self, base_path: &'a str) -> Self {
        self.base_path = base_path;
        self
    }

    pub fn params(mut self, params: ApiParams) -> Self {
        self.params = params;
        self
    }

    pub fn auth(mut self, auth: AuthMode) -> Self {
        self.auth = auth;
        self
    }

    /// Targets the client's current silo/subdomain instead of the canonical
    /// API domain. Silo requests are never auto-redirected by the transport.
    pub fn silo(mut self, silo: bool) -> Self {
        self.silo = silo;
        self
    }

    pub fn header(mut self, name: &str, value: &str) -> Self {
        self.headers.push((name.to_owned(), value.to_owned()));
        self
    }

    pub fn body(mut self, body: impl Into<String>) -> Self {
        self.body = Some(body.into());
        self
    }
}

// Outcome of a single dispatch, before the bounded redirect-retry driver
// decides what to do with it.
enum Disposition {
    Success(ApiResponse),
    RedirectNeeded {
        subdomain: String,
        response: ApiResponse,
    },
}

/// Client for communicating with the Photobucket API.
///
/// Cheap to clone; clones share credentials and the silo/subdomain state.
#[derive(Clone)]
pub struct Client {
    inner: Arc<ClientInner>,
}

struct ClientInner {
    creds: Creds,
    domain: String,
    subdomain: RwLock<String>,
    https_client: reqwest::Client,
    // Silo requests must not be auto-redirected; Photobucket prefers that
    // consumers use the subdomain they were given over relying on redirects.
    pinned_client: reqwest::Client,
}

impl Client {
    /// Creates a new client instance from the provided credentials.
    pub fn new(creds: Creds) -> Self {
        Self::with_domain(creds, DOMAIN)
    }

    /// Creates a client against a non-default API domain.
    pub fn with_domain(creds: Creds, domain: &str) -> Self {
        let pinned_client = reqwest::Client::builder()
            .redirect(reqwest::redirect::Policy::none())
            .build()
            .expect("reqwest client");
        Self {
            inner: Arc::new(ClientInner {
                creds,
                domain: domain.to_owned(),
                subdomain: RwLock::new(domain.to_owned()),
                https_client: reqwest::Client::new(),
                pinned_client,
            }),
        }
    }

    pub fn domain(&self) -> &str {
        &self.inner.domain
    }

    /// The silo/subdomain host silo-targeted requests currently go to.
    pub fn subdomain(&self) -> String {
        self.inner
            .subdomain
            .read()
            .expect("subdomain lock poisoned")
            .clone()
    }

    pub fn set_subdomain(&self, subdomain: impl Into<String>) {
        *self
            .inner
            .subdomain
            .write()
            .expect("subdomain lock poisoned") = subdomain.into();
    }

    /// Resolves the corrected silo host out of a 301 redirect body.
    ///
    /// The body carries the address in `content.subdomain` as
    /// `scheme://host`; the host is the substring after the first `//`.
    pub fn subdomain_from_redirect(body: &[u8]) -> Result<String, PhotobucketError> {
        let envelope: ApiEnvelope = serde_json::from_slice(body)
            .map_err(|err| PhotobucketError::MalformedRedirect(err.to_string()))?;
        let address = envelope
            .content
            .get("subdomain")
            .and_then(|v| v.as_str())
            .ok_or_else(|| {
                PhotobucketError::MalformedRedirect("no content.subdomain field".to_owned())
            })?;
        address
            .split_once("//")
            .map(|(_, host)| host)
            .filter(|host| !host.is_empty())
            .map(str::to_owned)
            .ok_or_else(|| {
                PhotobucketError::MalformedRedirect(format!("unusable address {address:?}"))
            })
    }

    /// Executes a request against the API.
    ///
    /// The request is signed over the canonical domain URL regardless of the
    /// host actually targeted. A 301 carrying a corrected silo host updates
    /// the stored subdomain and the identical request is reissued exactly
    /// once; a 301 on the reissue is surfaced as an API error.
    pub async fn execute(&self, req: ApiRequest<'_>) -> Result<ApiResponse, PhotobucketError> {
        let params = req.params.prepared();
        let format = match params.iter().find(|(k, _)| k == "format") {
            Some((_, v)) => v.parse::<ResponseFormat>().unwrap_or(ResponseFormat::Xml),
            None => ResponseFormat::Xml,
        };

        let token = match req.auth {
            AuthMode::NotRequired => None,
            AuthMode::Optional => self.inner.creds.token_pair(),
            AuthMode::Required => Some(self.inner.creds.token_pair().ok_or_else(|| {
                PhotobucketError::Auth("token and token secret must be set".to_owned())
            })?),
        };

        let full_path = format!("{}{}", req.base_path, req.path);
        let canonical_url = format!("http://{}{}", self.inner.domain, full_path);

        let mut redirected = false;
        loop {
            let target_url = if req.silo {
                format!("http://{}{}", self.subdomain(), full_path)
            } else {
                canonical_url.clone()
            };
            // The signature always covers the canonical domain, never the
            // silo host actually targeted.
            let signed = oauth::signed_params(
                &self.inner.creds,
                token,
                req.method,
                &canonical_url,
                &params,
            );
            let req_url = url::Url::parse_with_params(&target_url, &signed)?;
            log::debug!("{} {}", <&'static str>::from(req.method), req_url);

            let https_client = if req.silo {
                &self.inner.pinned_client
            } else {
                &self.inner.https_client
            };
            let mut builder = https_client
                .request(req.method.as_http(), req_url.as_str())
                .header(reqwest::header::USER_AGENT, USER_AGENT)
                .header(reqwest::header::CONTENT_TYPE, FORM_CONTENT_TYPE);
            for (name, value) in &req.headers {
                builder = builder.header(name.as_str(), value.as_str());
            }
            if let Some(body) = &req.body {
                builder = builder.body(body.clone());
            }

            let resp = builder.send().await?;
            match disposition(resp, format).await? {
                Disposition::Success(response) => return Ok(response),
                Disposition::RedirectNeeded {
                    subdomain,
                    response,
                } => {
                    if redirected {
                        return Err(PhotobucketError::Api(response));
                    }
                    log::warn!("silo reassigned to {}", subdomain);
                    self.set_subdomain(subdomain);
                    redirected = true;
                }
            }
        }
    }

    /// Returns the API server time.
    pub async fn get_timestamp(&self) -> Result<ApiResponse, PhotobucketError> {
        self.execute(ApiRequest::new(HttpMethod::Get, "time")).await
    }

    /// Reachability check against the API root.
    pub async fn ping(&self, method: HttpMethod) -> Result<ApiResponse, PhotobucketError> {
        self.execute(ApiRequest::new(method, "ping")).await
    }

    /// Obtains a login request token to use during web authentication.
    pub async fn login_request(&self) -> Result<ApiResponse, PhotobucketError> {
        self.execute(
            ApiRequest::new(HttpMethod::Post, "login/request").auth(AuthMode::NotRequired),
        )
        .await
    }

    /// Exchanges the request token for an access token.
    pub async fn get_access_token(&self) -> Result<ApiResponse, PhotobucketError> {
        self.execute(ApiRequest::new(HttpMethod::Post, "login/access"))
            .await
    }

    /// Returns the web-login URL for the provided request token.
    ///
    /// Falls back to the token set on the client's credentials; one of the
    /// two must be present.
    pub fn login_url(
        &self,
        token: Option<&str>,
        extra: Option<&str>,
    ) -> Result<String, PhotobucketError> {
        let token = token
            .or_else(|| self.inner.creds.access_token())
            .ok_or_else(|| {
                PhotobucketError::Auth("token must be set on the client or provided".to_owned())
            })?;
        let mut params: Vec<(&str, &str)> = Vec::new();
        if let Some(extra) = extra {
            params.push(("extra", extra));
        }
        params.push(("oauth_token", token));
        Ok(url::Url::parse_with_params(LOGIN_URL, &params)?.to_string())
    }
}

impl std::fmt::Debug for Client {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Client")
            .field("domain", &self.inner.domain)
            .field("subdomain", &self.subdomain())
            .finish()
    }
}

async fn disposition(
    resp: reqwest::Response,
    format: ResponseFormat,
) -> Result<Disposition, PhotobucketError> {
    let status = resp.status();
    let body = resp.bytes().await?;
    if status == StatusCode::MOVED_PERMANENTLY {
        let subdomain = Client::subdomain_from_redirect(&body)?;
        return Ok(Disposition::RedirectNeeded {
            subdomain,
            response: ApiResponse::new(status, body, format),
        });
    }
    let response = ApiResponse::new(status, body, format);
    if status.is_redirection() || status.is_client_error() || status.is_server_error() {
        return Err(PhotobucketError::Api(response));
    }
    Ok(Disposition::Success(response))
}
