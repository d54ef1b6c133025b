//! Shared HTTP plumbing for the API clients

use crate::error::{ApiError, ApiResult};
use reqwest::{Client, Method, RequestBuilder, Response};
use serde::{Serialize, de::DeserializeOwned};
use std::time::Duration;
use tracing::{debug, warn};
use transparency_core::config::ApiConfig;

/// Base URL, bearer token and a pooled reqwest client
///
/// Cloning is cheap; clones share the connection pool.
#[derive(Clone, Debug)]
pub struct HttpTransport {
    client: Client,
    base_url: String,
    token: Option<String>,
}

impl HttpTransport {
    /// Build a transport from configuration
    ///
    /// # Errors
    ///
    /// Returns an error if the base URL does not parse, the token is blank,
    /// or the HTTP client cannot be built.
    pub fn new(config: &ApiConfig) -> ApiResult<Self> {
        let base_url = normalize_base_url(&config.base_url)?;

        let token = match config.token.as_deref().map(str::trim) {
            Some("") => return Err(ApiError::MissingToken),
            Some(token) => Some(token.to_string()),
            None => None,
        };

        let client = Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .user_agent(config.user_agent.clone())
            .build()?;

        Ok(Self {
            client,
            base_url,
            token,
        })
    }

    /// Base URL without a trailing slash
    #[must_use]
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Whether requests carry an `Authorization` header
    #[must_use]
    pub const fn is_authenticated(&self) -> bool {
        self.token.is_some()
    }

    fn request(&self, method: Method, path: &str) -> RequestBuilder {
        let url = format!("{}{}", self.base_url, path);
        let mut request = self.client.request(method, url);

        if let Some(ref token) = self.token {
            request = request.bearer_auth(token);
        }

        request
    }

    async fn execute(&self, method: Method, path: &str, request: RequestBuilder) -> ApiResult<Response> {
        debug!(%method, path, "Sending API request");

        let response = request.send().await?;
        let status = response.status();

        if !status.is_success() {
            warn!(%method, path, status = status.as_u16(), "API returned error status");
            return Err(ApiError::Status {
                status: status.as_u16(),
            });
        }

        Ok(response)
    }

    async fn decode<T: DeserializeOwned>(response: Response) -> ApiResult<T> {
        let body = response.bytes().await?;
        Ok(serde_json::from_slice(&body)?)
    }

    /// `GET path` decoded as `T`
    pub(crate) async fn get<T: DeserializeOwned>(&self, path: &str) -> ApiResult<T> {
        let request = self.request(Method::GET, path);
        let response = self.execute(Method::GET, path, request).await?;
        Self::decode(response).await
    }

    /// `GET path?query` decoded as `T`; unset filter fields are omitted
    pub(crate) async fn get_with_query<Q, T>(&self, path: &str, query: &Q) -> ApiResult<T>
    where
        Q: Serialize + ?Sized,
        T: DeserializeOwned,
    {
        let query = serde_urlencoded::to_string(query)?;
        let path_and_query = if query.is_empty() {
            path.to_string()
        } else {
            format!("{path}?{query}")
        };

        self.get(&path_and_query).await
    }

    /// `POST path` with a JSON body, decoded as `T`
    pub(crate) async fn post<B, T>(&self, path: &str, body: &B) -> ApiResult<T>
    where
        B: Serialize + ?Sized,
        T: DeserializeOwned,
    {
        let request = self.request(Method::POST, path).json(body);
        let response = self.execute(Method::POST, path, request).await?;
        Self::decode(response).await
    }

    /// `POST path` without a body, decoded as `T`
    pub(crate) async fn post_empty<T: DeserializeOwned>(&self, path: &str) -> ApiResult<T> {
        let request = self.request(Method::POST, path);
        let response = self.execute(Method::POST, path, request).await?;
        Self::decode(response).await
    }

    /// `POST path` with a JSON body; success is judged by status alone
    pub(crate) async fn post_unit<B: Serialize + ?Sized>(&self, path: &str, body: &B) -> ApiResult<()> {
        let request = self.request(Method::POST, path).json(body);
        self.execute(Method::POST, path, request).await?;
        Ok(())
    }

    /// `POST path` without a body; success is judged by status alone
    pub(crate) async fn post_empty_unit(&self, path: &str) -> ApiResult<()> {
        let request = self.request(Method::POST, path);
        self.execute(Method::POST, path, request).await?;
        Ok(())
    }

    /// `PUT path` with a JSON body, decoded as `T`
    pub(crate) async fn put<B, T>(&self, path: &str, body: &B) -> ApiResult<T>
    where
        B: Serialize + ?Sized,
        T: DeserializeOwned,
    {
        let request = self.request(Method::PUT, path).json(body);
        let response = self.execute(Method::PUT, path, request).await?;
        Self::decode(response).await
    }

    /// `PUT path` with a JSON body; success is judged by status alone
    pub(crate) async fn put_unit<B: Serialize + ?Sized>(&self, path: &str, body: &B) -> ApiResult<()> {
        let request = self.request(Method::PUT, path).json(body);
        self.execute(Method::PUT, path, request).await?;
        Ok(())
    }

    /// `PUT path` without a body; success is judged by status alone
    pub(crate) async fn put_empty_unit(&self, path: &str) -> ApiResult<()> {
        let request = self.request(Method::PUT, path);
        self.execute(Method::PUT, path, request).await?;
        Ok(())
    }

    /// `DELETE path`; success is judged by status alone
    pub(crate) async fn delete_unit(&self, path: &str) -> ApiResult<()> {
        let request = self.request(Method::DELETE, path);
        self.execute(Method::DELETE, path, request).await?;
        Ok(())
    }
}

/// Percent-encode one path segment, e.g. an id
pub(crate) fn segment(value: &str) -> String {
    urlencoding::encode(value).into_owned()
}

fn normalize_base_url(raw: &str) -> ApiResult<String> {
    let parsed = reqwest::Url::parse(raw).map_err(|e| ApiError::InvalidUrl {
        url: raw.to_string(),
        message: e.to_string(),
    })?;

    if parsed.cannot_be_a_base() {
        return Err(ApiError::InvalidUrl {
            url: raw.to_string(),
            message: "URL cannot be used as a base".to_string(),
        });
    }

    Ok(raw.trim_end_matches('/').to_string())
}
