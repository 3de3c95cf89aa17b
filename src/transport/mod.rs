//! Shared HTTP transport used by every resource API.

pub mod multipart;

use std::fmt;
use std::sync::{Arc, RwLock};
use std::time::Duration;

use reqwest::{Client, Method, RequestBuilder, Response};
use serde::Serialize;
use serde::de::DeserializeOwned;

use crate::config::Config;
use crate::error::{ApiError, ApiResult};

pub use multipart::{MultipartBody, Part};

/// Whether a call carries the bearer token
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Access {
    Public,
    Private,
}

/// HTTP client for the booking backend.
///
/// Clones share the same connection pool and the same token slot, so a login
/// seen by one resource API is seen by all of them.
#[derive(Clone)]
pub struct HttpClient {
    client: Client,
    base_url: String,
    token: Arc<RwLock<Option<String>>>,
}

impl fmt::Debug for HttpClient {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("HttpClient")
            .field("base_url", &self.base_url)
            .field("token", &self.token().map(|_| "<redacted>"))
            .finish()
    }
}

impl HttpClient {
    pub fn new(config: &Config) -> ApiResult<Self> {
        let client = Client::builder()
            .timeout(Duration::from_secs(config.request_timeout_secs))
            .build()?;

        Ok(Self {
            client,
            base_url: config.api_base_url.trim_end_matches('/').to_string(),
            token: Arc::new(RwLock::new(config.api_token.clone())),
        })
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Replace the bearer token (None on logout)
    pub fn set_token(&self, token: Option<String>) {
        let mut slot = self.token.write().unwrap_or_else(|e| e.into_inner());
        *slot = token;
    }

    pub fn token(&self) -> Option<String> {
        self.token.read().unwrap_or_else(|e| e.into_inner()).clone()
    }

    fn url(&self, path: &str) -> String {
        format!("{}/{}", self.base_url, path.trim_start_matches('/'))
    }

    fn request(&self, method: Method, path: &str, access: Access) -> ApiResult<RequestBuilder> {
        let mut request = self.client.request(method, self.url(path));

        if access == Access::Private {
            let token = self.token().ok_or_else(|| {
                ApiError::Unauthorized(format!("No token available for {}", path))
            })?;
            request = request.bearer_auth(token);
        }

        Ok(request)
    }

    pub async fn get<T: DeserializeOwned>(&self, path: &str, access: Access) -> ApiResult<T> {
        let request = self.request(Method::GET, path, access)?;
        self.send(request, Method::GET, path, access).await
    }

    pub async fn post<T: DeserializeOwned, B: Serialize + ?Sized>(
        &self,
        path: &str,
        access: Access,
        body: &B,
    ) -> ApiResult<T> {
        let request = self.request(Method::POST, path, access)?.json(body);
        self.send(request, Method::POST, path, access).await
    }

    pub async fn put<T: DeserializeOwned, B: Serialize + ?Sized>(
        &self,
        path: &str,
        access: Access,
        body: &B,
    ) -> ApiResult<T> {
        let request = self.request(Method::PUT, path, access)?.json(body);
        self.send(request, Method::PUT, path, access).await
    }

    pub async fn delete<T: DeserializeOwned>(&self, path: &str, access: Access) -> ApiResult<T> {
        let request = self.request(Method::DELETE, path, access)?;
        self.send(request, Method::DELETE, path, access).await
    }

    /// PUT a multipart body. `multipart()` replaces the JSON content type with
    /// `multipart/form-data` and its boundary for this request only.
    pub async fn put_multipart<T: DeserializeOwned>(
        &self,
        path: &str,
        access: Access,
        body: MultipartBody,
    ) -> ApiResult<T> {
        let form = body.into_form()?;
        let request = self.request(Method::PUT, path, access)?.multipart(form);
        self.send(request, Method::PUT, path, access).await
    }

    async fn send<T: DeserializeOwned>(
        &self,
        request: RequestBuilder,
        method: Method,
        path: &str,
        access: Access,
    ) -> ApiResult<T> {
        tracing::debug!(%method, path, ?access, "Sending request");
        let response = request.send().await?;
        Self::handle_response(response, &method, path).await
    }

    async fn handle_response<T: DeserializeOwned>(
        response: Response,
        method: &Method,
        path: &str,
    ) -> ApiResult<T> {
        let status = response.status();
        let bytes = response.bytes().await?;

        if !status.is_success() {
            let text = String::from_utf8_lossy(&bytes);
            tracing::warn!(%method, path, status = status.as_u16(), "Request failed");
            return Err(ApiError::from_status(status, &text));
        }

        decode_body(&bytes)
            .map_err(|e| ApiError::InvalidResponse(format!("{} {}: {}", method, path, e)))
    }
}

/// Decode a success body; an empty body reads as JSON `null` so that `()`
/// and `Option<T>` responses work for 204-style replies.
fn decode_body<T: DeserializeOwned>(bytes: &[u8]) -> Result<T, serde_json::Error> {
    if bytes.iter().all(u8::is_ascii_whitespace) {
        serde_json::from_slice(b"null")
    } else {
        serde_json::from_slice(bytes)
    }
}
