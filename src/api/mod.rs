//! Typed client for the remote marketplace API.
//!
//! One `ApiClient` per process: a shared `reqwest::Client`, the base URL,
//! and the credential store. Every request attaches the bearer token when
//! one is live; a 401 triggers exactly one silent refresh and one retry
//! before the session is declared expired.

pub mod auth;
pub mod backend;
pub mod catalog;
pub mod exam;
pub mod services;

pub use backend::MarketBackend;

use std::time::Duration;

use reqwest::{Client, Method, StatusCode};
use serde::de::DeserializeOwned;
use serde::Deserialize;
use tracing::{debug, warn};

use crate::error::ApiError;
use crate::session::TokenStore;

#[derive(Clone)]
pub struct ApiClient {
    http: Client,
    base_url: String,
    tokens: TokenStore,
}

/// The `{ success, data, message }` wrapper most endpoints use.
#[derive(Debug, Deserialize)]
pub(crate) struct ApiEnvelope<T> {
    #[serde(default)]
    pub success: bool,
    // No `default` here: it would put a `T: Default` bound on the derived
    // impl, and a missing `Option` field already decodes as `None`.
    pub data: Option<T>,
    #[serde(default)]
    pub message: Option<String>,
}

impl<T> ApiEnvelope<T> {
    /// Unwrap the payload, turning `success: false` or a missing body
    /// into a remote rejection that carries the server's message.
    pub fn into_data(self) -> Result<T, ApiError> {
        match (self.success, self.data) {
            (true, Some(data)) => Ok(data),
            (_, _) => Err(ApiError::Rejected {
                status: 200,
                message: self
                    .message
                    .unwrap_or_else(|| "request was not successful".to_string()),
            }),
        }
    }
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct RefreshResponse {
    access_token: String,
}

#[derive(Debug, Deserialize)]
struct RemoteMessage {
    #[serde(default)]
    message: Option<String>,
    #[serde(default)]
    error: Option<String>,
}

impl ApiClient {
    pub fn new(base_url: impl Into<String>, tokens: TokenStore) -> Result<Self, ApiError> {
        let http = Client::builder()
            .timeout(Duration::from_secs(30))
            .connect_timeout(Duration::from_secs(10))
            .build()?;

        Ok(ApiClient {
            http,
            base_url: base_url.into(),
            tokens,
        })
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    /// Send a request, handling bearer attach and the single-retry 401
    /// policy, and decode the JSON body as `T`.
    pub(crate) async fn request<T: DeserializeOwned>(
        &self,
        method: Method,
        path: &str,
        body: Option<&serde_json::Value>,
    ) -> Result<T, ApiError> {
        let response = self.send(method.clone(), path, body).await?;

        let response = if response.status() == StatusCode::UNAUTHORIZED {
            debug!(path, "got 401, attempting silent token refresh");
            match self.refresh_token().await {
                Ok(()) => self.send(method, path, body).await?,
                Err(err) => {
                    warn!(path, "token refresh failed: {err}");
                    self.tokens.clear().await;
                    return Err(ApiError::SessionExpired);
                }
            }
        } else {
            response
        };

        let status = response.status();
        if status == StatusCode::UNAUTHORIZED {
            // The refreshed token was rejected too.
            self.tokens.clear().await;
            return Err(ApiError::SessionExpired);
        }

        if !status.is_success() {
            let text = response.text().await.unwrap_or_default();
            let message = serde_json::from_str::<RemoteMessage>(&text)
                .ok()
                .and_then(|m| m.message.or(m.error))
                .unwrap_or_else(|| format!("request failed with status {status}"));
            return Err(ApiError::Rejected {
                status: status.as_u16(),
                message,
            });
        }

        let text = response.text().await?;
        serde_json::from_str(&text).map_err(|e| ApiError::Decode(e.to_string()))
    }

    async fn send(
        &self,
        method: Method,
        path: &str,
        body: Option<&serde_json::Value>,
    ) -> Result<reqwest::Response, ApiError> {
        let mut req = self.http.request(method, self.url(path));
        if let Some(token) = self.tokens.current() {
            req = req.bearer_auth(token);
        }
        if let Some(json) = body {
            req = req.json(json);
        }
        Ok(req.send().await?)
    }

    /// Exchange the expiring credential for a fresh one. Called at most
    /// once per failed request; never retried itself.
    async fn refresh_token(&self) -> Result<(), ApiError> {
        let mut req = self
            .http
            .post(self.url("/auth/refresh"))
            .json(&serde_json::json!({}));
        if let Some(token) = self.tokens.current() {
            req = req.bearer_auth(token);
        }

        let response = req.send().await?;
        let status = response.status();
        if !status.is_success() {
            return Err(ApiError::Rejected {
                status: status.as_u16(),
                message: format!("refresh rejected with status {status}"),
            });
        }

        let refreshed: RefreshResponse = response
            .json()
            .await
            .map_err(|e| ApiError::Decode(e.to_string()))?;
        self.tokens.store(&refreshed.access_token).await
    }
}
