pub mod analyze;
pub mod auth;
pub mod history;
pub mod profile;
pub mod recipes;
pub mod types;

use reqwest::{Client, Method, RequestBuilder, Response};
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use std::sync::Mutex;
use std::time::Duration;

pub const DEFAULT_BASE_URL: &str = "https://api.safeeats.app";

const REQUEST_TIMEOUT: Duration = Duration::from_secs(60);

/// Client for the SafeEats backend. One instance lives in managed state for
/// the whole session; the cookie store keeps the backend session cookie and
/// `token` carries the same credential as a bearer header for requests made
/// before any cookie has been set (e.g. right after a restored login).
#[derive(Debug)]
pub struct ApiClient {
    http: Client,
    base_url: String,
    token: Mutex<Option<String>>,
}

impl ApiClient {
    pub fn new(base_url: impl Into<String>) -> Result<Self, ApiError> {
        let http = Client::builder()
            .cookie_store(true)
            .timeout(REQUEST_TIMEOUT)
            .build()?;
        let base_url = base_url.into();
        Ok(Self {
            http,
            base_url: base_url.trim_end_matches('/').to_string(),
            token: Mutex::new(None),
        })
    }

    pub fn set_token(&self, token: Option<String>) {
        *self.token.lock().unwrap() = token;
    }

    fn request(&self, method: Method, path: &str) -> RequestBuilder {
        let mut req = self
            .http
            .request(method, format!("{}/api{}", self.base_url, path));
        if let Some(token) = self.token.lock().unwrap().as_deref() {
            req = req.header("Authorization", format!("Bearer {}", token));
        }
        req
    }

    fn get(&self, path: &str) -> RequestBuilder {
        self.request(Method::GET, path)
    }

    fn post(&self, path: &str) -> RequestBuilder {
        self.request(Method::POST, path)
    }

    fn put(&self, path: &str) -> RequestBuilder {
        self.request(Method::PUT, path)
    }

    fn delete(&self, path: &str) -> RequestBuilder {
        self.request(Method::DELETE, path)
    }

    /// Send a request and deserialize the JSON body of a 2xx response.
    async fn send_json<T: DeserializeOwned>(&self, req: RequestBuilder) -> Result<T, ApiError> {
        let resp = req.send().await?;
        if !resp.status().is_success() {
            return Err(error_from_response(resp).await);
        }
        let body = resp.text().await?;
        serde_json::from_str(&body).map_err(|e| ApiError::Parse(e.to_string()))
    }

    /// Send a request where only the status matters.
    async fn send_ok(&self, req: RequestBuilder) -> Result<(), ApiError> {
        let resp = req.send().await?;
        if !resp.status().is_success() {
            return Err(error_from_response(resp).await);
        }
        Ok(())
    }
}

/// FastAPI-style error bodies carry the message under `detail`.
#[derive(Deserialize)]
struct ErrorBody {
    detail: Option<String>,
}

async fn error_from_response(resp: Response) -> ApiError {
    let status = resp.status().as_u16();
    if status == 401 {
        return ApiError::Unauthorized;
    }
    let text = resp.text().await.unwrap_or_default();
    let message = serde_json::from_str::<ErrorBody>(&text)
        .ok()
        .and_then(|b| b.detail)
        .unwrap_or(text);
    ApiError::Api { status, message }
}

#[derive(Debug, thiserror::Error)]
pub enum ApiError {
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),
    #[error("API error: {status} - {message}")]
    Api { status: u16, message: String },
    #[error("Parse error: {0}")]
    Parse(String),
    #[error("not authenticated")]
    Unauthorized,
}

impl ApiError {
    /// Message fit for a toast: the backend's `detail` verbatim when there is
    /// one, a generic fallback otherwise.
    pub fn user_message(&self, fallback: &str) -> String {
        match self {
            ApiError::Api { message, .. } if !message.is_empty() => message.clone(),
            _ => fallback.to_string(),
        }
    }
}

impl Serialize for ApiError {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.serialize_str(&self.to_string())
    }
}
