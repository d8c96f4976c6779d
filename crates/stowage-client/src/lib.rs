//! HTTP client for the orders API.
//!
//! Provides a minimal client with optional auth (Bearer token or X-API-Key),
//! a generic GET helper, and the dual-mode [`OrderClient`] that either calls
//! the API or answers from [`OrderClientStub`] without any I/O.

pub mod api;
pub mod orders;

use reqwest::{Client, StatusCode};
use serde::de::DeserializeOwned;
use std::time::Duration;

pub use orders::{OrderClient, OrderClientStub};
pub use stowage_core::{Order, OrderList};

/// Orders API errors
#[derive(Debug, thiserror::Error)]
pub enum ClientError {
    #[error("Not found: {0}")]
    NotFound(String),

    #[error("Access denied: {0}")]
    AccessDenied(String),

    #[error("Transport error: {0}")]
    Transport(#[source] reqwest::Error),

    #[error("API request failed with status {status}: {body}")]
    Status { status: u16, body: String },

    #[error("Failed to parse response as JSON: {0}")]
    Decode(#[source] reqwest::Error),

    #[error("Configuration error: {0}")]
    Config(String),
}

/// Authentication strategy for the API.
#[derive(Clone, Debug)]
pub enum Auth {
    /// `Authorization: Bearer {token}`
    Bearer(String),
    /// `X-API-Key: {key}`
    XApiKey(String),
}

/// API version prefix (e.g. "/api/v0"). Set STOWAGE_API_VERSION to match the server.
pub fn api_prefix() -> String {
    let version = std::env::var("STOWAGE_API_VERSION").unwrap_or_else(|_| "v0".to_string());
    format!("/api/{}", version)
}

/// HTTP client for the orders API.
#[derive(Clone, Debug)]
pub struct ApiClient {
    client: Client,
    base_url: String,
    auth: Option<Auth>,
}

impl ApiClient {
    pub fn new(base_url: impl Into<String>, auth: Option<Auth>) -> Result<Self, ClientError> {
        let client = Client::builder()
            .timeout(Duration::from_secs(60))
            .build()
            .map_err(|e| ClientError::Config(format!("Failed to create HTTP client: {}", e)))?;

        Ok(Self {
            client,
            base_url: base_url.into().trim_end_matches('/').to_string(),
            auth,
        })
    }

    /// Create client from environment: STOWAGE_API_URL (or API_URL), and
    /// optionally STOWAGE_API_KEY (or API_KEY) sent as X-API-Key.
    pub fn from_env() -> Result<Self, ClientError> {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    /// Same as [`ApiClient::from_env`], reading variables through `lookup`.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ClientError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let base_url = lookup("STOWAGE_API_URL")
            .or_else(|| lookup("API_URL"))
            .unwrap_or_else(|| "http://localhost:3000".to_string());

        let auth = lookup("STOWAGE_API_KEY")
            .or_else(|| lookup("API_KEY"))
            .map(Auth::XApiKey);

        Self::new(base_url, auth)
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    pub fn build_url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    fn apply_auth(&self, request: reqwest::RequestBuilder) -> reqwest::RequestBuilder {
        match &self.auth {
            Some(Auth::Bearer(token)) => {
                request.header("Authorization", format!("Bearer {}", token))
            }
            Some(Auth::XApiKey(key)) => request.header("X-API-Key", key.as_str()),
            None => request,
        }
    }

    /// GET request with optional query parameters. Deserializes JSON response.
    pub async fn get<T: DeserializeOwned>(
        &self,
        path: &str,
        query: &[(&str, String)],
    ) -> Result<T, ClientError> {
        let url = self.build_url(path);
        let mut request = self.client.get(&url);
        request = self.apply_auth(request);

        if !query.is_empty() {
            request = request.query(query);
        }

        let response = request.send().await.map_err(|e| {
            tracing::error!(error = %e, url = %url, "Orders API request failed");
            ClientError::Transport(e)
        })?;

        let status = response.status();
        if !status.is_success() {
            let error_text = response
                .text()
                .await
                .unwrap_or_else(|_| "Unknown error".to_string());
            tracing::warn!(status = status.as_u16(), url = %url, "Orders API returned an error");
            return Err(match status {
                StatusCode::NOT_FOUND => ClientError::NotFound(url),
                StatusCode::UNAUTHORIZED | StatusCode::FORBIDDEN => {
                    ClientError::AccessDenied(error_text)
                }
                _ => ClientError::Status {
                    status: status.as_u16(),
                    body: error_text,
                },
            });
        }

        let body: T = response.json().await.map_err(ClientError::Decode)?;

        Ok(body)
    }
}
