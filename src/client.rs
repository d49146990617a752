use async_trait::async_trait;
use reqwest::header::{HeaderMap, HeaderValue, ACCEPT, AUTHORIZATION, USER_AGENT};
use reqwest::Method;
use serde::Serialize;
use serde_json::Value;
use tracing::{debug, warn};
use url::Url;

use crate::config::Config;
use crate::error::{Error, ErrorResponse, Result};
use crate::transport::{ApiRequest, Transport};
use crate::users::UsersService;

pub const DEFAULT_BASE_URL: &str = "https://api.github.com/";
pub const DEFAULT_USER_AGENT: &str = concat!("github-users/", env!("CARGO_PKG_VERSION"));
const MEDIA_TYPE_V3: &str = "application/vnd.github.v3+json";

/// GitHub API client backed by `reqwest`.
///
/// Holds the base URL every request path is resolved against, plus the
/// default headers (user agent, media type and, optionally, a bearer token).
#[derive(Debug, Clone)]
pub struct GitHubClient {
    http: reqwest::Client,
    base_url: Url,
}

impl GitHubClient {
    /// Creates an unauthenticated client for `https://api.github.com/`.
    ///
    /// # Errors
    ///
    /// Fails only if the underlying HTTP client cannot be built.
    pub fn new() -> Result<Self> {
        Self::from_config(&Config::default())
    }

    /// Creates a client from explicit settings.
    ///
    /// # Errors
    ///
    /// Fails if the base URL does not end in `/`, the token is not a valid
    /// header value, or the HTTP client cannot be built.
    pub fn from_config(config: &Config) -> Result<Self> {
        let base_url = parse_base_url(&config.base_url)?;

        let mut headers = HeaderMap::new();
        headers.insert(USER_AGENT, HeaderValue::from_str(&config.user_agent)?);
        headers.insert(ACCEPT, HeaderValue::from_static(MEDIA_TYPE_V3));

        if let Some(token) = &config.token {
            let mut val = HeaderValue::from_str(&format!("Bearer {token}"))?;
            val.set_sensitive(true);
            headers.insert(AUTHORIZATION, val);
        }

        let http = reqwest::Client::builder()
            .default_headers(headers)
            .build()?;

        Ok(Self { http, base_url })
    }

    pub fn base_url(&self) -> &Url {
        &self.base_url
    }

    pub fn users(&self) -> UsersService<'_, Self> {
        UsersService::new(self)
    }
}

fn parse_base_url(raw: &str) -> Result<Url> {
    let url = Url::parse(raw)?;
    if url.cannot_be_a_base() || !url.path().ends_with('/') {
        return Err(Error::InvalidBaseUrl {
            url: raw.to_owned(),
        });
    }
    Ok(url)
}

#[async_trait]
impl Transport for GitHubClient {
    fn new_request<B>(&self, method: Method, path: &str, body: Option<&B>) -> Result<ApiRequest>
    where
        B: Serialize + ?Sized,
    {
        let url = self.base_url.join(path)?;
        let body = body
            .map(serde_json::to_value)
            .transpose()
            .map_err(Error::Encode)?;

        Ok(ApiRequest { method, url, body })
    }

    async fn execute(&self, request: ApiRequest) -> Result<Value> {
        debug!(method = %request.method, url = %request.url, "sending request");

        let mut builder = self.http.request(request.method, request.url);
        if let Some(body) = &request.body {
            builder = builder.json(body);
        }

        let response = builder.send().await?;
        let status = response.status();
        let text = response.text().await?;
        debug!(%status, bytes = text.len(), "received response");

        if !status.is_success() {
            warn!(%status, "GitHub API returned an error");
            return Err(ErrorResponse::into_error(status, &text));
        }

        if text.trim().is_empty() {
            return Ok(Value::Null);
        }
        serde_json::from_str(&text).map_err(Error::Decode)
    }
}
