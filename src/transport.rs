use async_trait::async_trait;
use reqwest::Method;
use serde::Serialize;
use serde_json::Value;
use url::Url;

use crate::error::Result;

/// A fully resolved request, ready to be handed to [`Transport::execute`].
#[derive(Debug, Clone, PartialEq)]
pub struct ApiRequest {
    pub method: Method,
    pub url: Url,
    /// JSON body, already serialized from the caller's value.
    pub body: Option<Value>,
}

impl ApiRequest {
    /// Path and query of the request, without the leading `/`.
    #[must_use]
    pub fn path_and_query(&self) -> String {
        let path = self.url.path().trim_start_matches('/');
        match self.url.query() {
            Some(query) => format!("{path}?{query}"),
            None => path.to_owned(),
        }
    }
}

/// HTTP plumbing the API services are built on.
///
/// Implementations own the base URL, authentication and the wire exchange.
#[async_trait]
pub trait Transport: Send + Sync {
    /// Builds a request for `path`, relative to the base API URL.
    ///
    /// Performs no network activity.
    ///
    /// # Errors
    ///
    /// Fails if the path does not resolve or the body does not serialize.
    fn new_request<B>(&self, method: Method, path: &str, body: Option<&B>) -> Result<ApiRequest>
    where
        B: Serialize + ?Sized;

    /// Sends `request` and returns the decoded JSON body.
    ///
    /// # Errors
    ///
    /// Network failures, non-2xx statuses and malformed JSON.
    async fn execute(&self, request: ApiRequest) -> Result<Value>;
}
