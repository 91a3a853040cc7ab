use std::sync::Arc;

use bytes::Bytes;
use reqwest::header::AUTHORIZATION;
use reqwest::{Method, RequestBuilder, multipart};
use serde::Serialize;
use serde::de::DeserializeOwned;
use serde_json::Value;

use crate::config::ClientConfig;
use crate::error::{ApiError, ApiResult};
use crate::response::{error_message, safe_parse_json};
use crate::session::{MemoryTokenStore, TokenStore};

/// HTTP façade over the GrandView backend. All endpoint functions in
/// [`crate::api`] go through the request helpers here: token injection,
/// defensive body decoding, and error-message normalization happen in one
/// place instead of per call site.
#[derive(Clone)]
pub struct ApiClient {
    http: reqwest::Client,
    config: ClientConfig,
    tokens: Arc<dyn TokenStore>,
}

impl ApiClient {
    pub fn new(config: ClientConfig) -> ApiResult<Self> {
        Self::with_token_store(config, Arc::new(MemoryTokenStore::new()))
    }

    pub fn with_token_store(config: ClientConfig, tokens: Arc<dyn TokenStore>) -> ApiResult<Self> {
        let http = reqwest::Client::builder()
            .user_agent(concat!("grandview-client/", env!("CARGO_PKG_VERSION")))
            .timeout(config.timeout)
            .build()?;
        Ok(Self {
            http,
            config,
            tokens,
        })
    }

    pub fn from_env() -> anyhow::Result<Self> {
        Ok(Self::new(ClientConfig::from_env()?)?)
    }

    pub fn config(&self) -> &ClientConfig {
        &self.config
    }

    pub fn token(&self) -> Option<String> {
        self.tokens.load()
    }

    pub fn is_authenticated(&self) -> bool {
        self.token().is_some()
    }

    pub(crate) fn store_token(&self, token: &str) -> ApiResult<()> {
        self.tokens.save(token).map_err(ApiError::TokenStore)
    }

    pub(crate) fn clear_token(&self) -> ApiResult<()> {
        self.tokens.clear().map_err(ApiError::TokenStore)
    }

    /// Absolutize a server-relative media path (product images, uploaded
    /// documents). Absolute URLs and empty paths pass through untouched.
    pub fn media_url(&self, path: &str) -> String {
        if path.is_empty() || path.starts_with("http") {
            return path.to_string();
        }
        if path.starts_with('/') {
            format!("{}{}", self.config.media_base_url, path)
        } else {
            format!("{}/{}", self.config.media_base_url, path)
        }
    }

    fn url(&self, path: &str) -> String {
        format!("{}/{}", self.config.api_base_url, path.trim_start_matches('/'))
    }

    fn request(&self, method: Method, path: &str) -> RequestBuilder {
        let mut req = self.http.request(method, self.url(path));
        if let Some(token) = self.tokens.load() {
            req = req.header(AUTHORIZATION, format!("Token {token}"));
        }
        req
    }

    pub(crate) async fn get<T: DeserializeOwned>(&self, path: &str, fallback: &str) -> ApiResult<T> {
        let value = self.get_value(path, fallback).await?;
        Ok(serde_json::from_value(value)?)
    }

    pub(crate) async fn get_value(&self, path: &str, fallback: &str) -> ApiResult<Value> {
        self.send(self.request(Method::GET, path), fallback).await
    }

    pub(crate) async fn get_query<T: DeserializeOwned>(
        &self,
        path: &str,
        query: &[(&str, String)],
        fallback: &str,
    ) -> ApiResult<T> {
        let value = self.get_value_query(path, query, fallback).await?;
        Ok(serde_json::from_value(value)?)
    }

    pub(crate) async fn get_value_query(
        &self,
        path: &str,
        query: &[(&str, String)],
        fallback: &str,
    ) -> ApiResult<Value> {
        self.send(self.request(Method::GET, path).query(query), fallback)
            .await
    }

    pub(crate) async fn post<T: DeserializeOwned, B: Serialize + ?Sized>(
        &self,
        path: &str,
        body: &B,
        fallback: &str,
    ) -> ApiResult<T> {
        let value = self
            .send(self.request(Method::POST, path).json(body), fallback)
            .await?;
        Ok(serde_json::from_value(value)?)
    }

    /// POST with a JSON body, discarding whatever the server echoes back.
    pub(crate) async fn post_unit<B: Serialize + ?Sized>(
        &self,
        path: &str,
        body: &B,
        fallback: &str,
    ) -> ApiResult<()> {
        self.send(self.request(Method::POST, path).json(body), fallback)
            .await?;
        Ok(())
    }

    /// POST with no body; used by the action endpoints that answer with an
    /// empty or ignorable payload (cancel, confirm).
    pub(crate) async fn post_empty_unit(&self, path: &str, fallback: &str) -> ApiResult<()> {
        self.send(self.request(Method::POST, path), fallback).await?;
        Ok(())
    }

    pub(crate) async fn patch<T: DeserializeOwned, B: Serialize + ?Sized>(
        &self,
        path: &str,
        body: &B,
        fallback: &str,
    ) -> ApiResult<T> {
        let value = self
            .send(self.request(Method::PATCH, path).json(body), fallback)
            .await?;
        Ok(serde_json::from_value(value)?)
    }

    /// Multipart upload. No explicit content type: reqwest sets
    /// `multipart/form-data` with the boundary itself.
    pub(crate) async fn post_multipart<T: DeserializeOwned>(
        &self,
        path: &str,
        form: multipart::Form,
        fallback: &str,
    ) -> ApiResult<T> {
        let value = self
            .send(self.request(Method::POST, path).multipart(form), fallback)
            .await?;
        Ok(serde_json::from_value(value)?)
    }

    pub(crate) async fn get_bytes(&self, path: &str, fallback: &str) -> ApiResult<Bytes> {
        let res = self.request(Method::GET, path).send().await?;
        let status = res.status();
        if !status.is_success() {
            let text = res.text().await.unwrap_or_default();
            return Err(ApiError::Status {
                status,
                message: extract_error(&text, fallback),
            });
        }
        Ok(res.bytes().await?)
    }

    async fn send(&self, req: RequestBuilder, fallback: &str) -> ApiResult<Value> {
        let res = req.send().await?;
        let status = res.status();
        let text = res.text().await?;
        if !status.is_success() {
            let message = extract_error(&text, fallback);
            tracing::debug!(status = %status, message = %message, "request rejected");
            return Err(ApiError::Status { status, message });
        }
        safe_parse_json(&text)
    }
}

fn extract_error(text: &str, fallback: &str) -> String {
    match safe_parse_json(text) {
        Ok(body) => error_message(&body, fallback),
        // Error pages are not always JSON; surface the raw text rather than
        // a parse failure that would mask the real HTTP error.
        Err(_) => text.trim().to_string(),
    }
}
