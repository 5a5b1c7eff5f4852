//! Session state: the persisted bearer credential and the cached
//! identity. Owned by the application root and injected into every
//! protected flow rather than read as ambient global state.

use std::path::PathBuf;
use std::sync::{Arc, Mutex};

use chrono::{DateTime, Duration, Utc};
use serde::{Deserialize, Serialize};
use tracing::{debug, warn};
use url::Url;

use crate::api::MarketBackend;
use crate::error::ApiError;
use crate::models::{Identity, SetupProfile};

/// Credentials live for one day from login, matching the cookie the web
/// client sets.
const TOKEN_TTL_DAYS: i64 = 1;

/// Where a logged-out user lands.
pub const LANDING_ROUTE: &str = "/";

#[derive(Debug, Serialize, Deserialize, Clone)]
struct StoredToken {
    token: String,
    expires_at: DateTime<Utc>,
}

impl StoredToken {
    fn is_live(&self) -> bool {
        self.expires_at > Utc::now()
    }
}

/// Cookie-equivalent credential store: an in-memory slot mirrored to a
/// JSON file so the token survives restarts. Shared between the session
/// and the API client (every outbound request reads it; login/logout/
/// refresh write it).
#[derive(Clone)]
pub struct TokenStore {
    slot: Arc<Mutex<Option<StoredToken>>>,
    path: Option<PathBuf>,
}

impl TokenStore {
    /// Purely in-memory store, used by tests and short-lived tools.
    pub fn in_memory() -> Self {
        TokenStore {
            slot: Arc::new(Mutex::new(None)),
            path: None,
        }
    }

    /// File-backed store. Reads any persisted token, discarding it if
    /// expired or unreadable.
    pub async fn open(path: PathBuf) -> Self {
        let slot = match tokio::fs::read(&path).await {
            Ok(bytes) => match serde_json::from_slice::<StoredToken>(&bytes) {
                Ok(stored) if stored.is_live() => Some(stored),
                Ok(_) => {
                    debug!("persisted token expired, discarding");
                    let _ = tokio::fs::remove_file(&path).await;
                    None
                }
                Err(err) => {
                    warn!("unreadable token file, discarding: {err}");
                    let _ = tokio::fs::remove_file(&path).await;
                    None
                }
            },
            Err(_) => None,
        };

        TokenStore {
            slot: Arc::new(Mutex::new(slot)),
            path: Some(path),
        }
    }

    /// The bearer token, if one is present and unexpired.
    pub fn current(&self) -> Option<String> {
        let slot = self.slot.lock().ok()?;
        slot.as_ref().filter(|s| s.is_live()).map(|s| s.token.clone())
    }

    /// Store a fresh token with the fixed 1-day expiry.
    pub async fn store(&self, token: &str) -> Result<(), ApiError> {
        let stored = StoredToken {
            token: token.to_string(),
            expires_at: Utc::now() + Duration::days(TOKEN_TTL_DAYS),
        };
        if let Some(path) = &self.path {
            let bytes = serde_json::to_vec(&stored)
                .map_err(|e| ApiError::TokenStore(e.to_string()))?;
            tokio::fs::write(path, bytes)
                .await
                .map_err(|e| ApiError::TokenStore(e.to_string()))?;
        }
        if let Ok(mut slot) = self.slot.lock() {
            *slot = Some(stored);
        }
        Ok(())
    }

    pub async fn clear(&self) {
        if let Ok(mut slot) = self.slot.lock() {
            *slot = None;
        }
        if let Some(path) = &self.path {
            let _ = tokio::fs::remove_file(path).await;
        }
    }
}

/// Outcome of [`SessionStore::logout`] and of terminal auth failures:
/// where the shell should send the user.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Redirect(pub String);

pub struct SessionStore<B: MarketBackend> {
    backend: Arc<B>,
    tokens: TokenStore,
    identity: Option<Identity>,
}

impl<B: MarketBackend> SessionStore<B> {
    pub fn new(backend: Arc<B>, tokens: TokenStore) -> Self {
        SessionStore {
            backend,
            tokens,
            identity: None,
        }
    }

    /// The cached identity; `None` while unresolved or logged out.
    pub fn current_identity(&self) -> Option<&Identity> {
        self.identity.as_ref()
    }

    pub fn has_credential(&self) -> bool {
        self.tokens.current().is_some()
    }

    /// Persist a credential and resolve the profile behind it.
    pub async fn login(&mut self, token: &str) -> Result<(), ApiError> {
        self.tokens.store(token).await?;
        self.refresh().await;
        Ok(())
    }

    /// Re-fetch the identity. Any failure resolves to "not
    /// authenticated", never to a fatal error.
    pub async fn refresh(&mut self) {
        match self.backend.profile().await {
            Ok(identity) => self.identity = Some(identity),
            Err(err) => {
                debug!("profile refresh failed: {err}");
                self.identity = None;
            }
        }
    }

    pub async fn logout(&mut self) -> Redirect {
        self.tokens.clear().await;
        self.identity = None;
        Redirect(LANDING_ROUTE.to_string())
    }

    /// Submit the setup selection, refresh the profile so completion
    /// guards see the new state, and hand back the server's redirect.
    pub async fn setup_profile(&mut self, data: &SetupProfile) -> Result<Redirect, ApiError> {
        let response = self.backend.submit_setup(data).await?;
        self.refresh().await;
        Ok(Redirect(response.redirect_to))
    }

    /// Consume a `token` query parameter from an OAuth-return URL: log in
    /// with it and return the URL with the parameter stripped, so the
    /// credential never lingers in history. Returns `None` when the URL
    /// carries no token.
    pub async fn absorb_redirect_token(&mut self, raw_url: &str) -> Option<Result<String, ApiError>> {
        let mut parsed = Url::parse(raw_url).ok()?;
        let token = parsed
            .query_pairs()
            .find(|(k, _)| k == "token")
            .map(|(_, v)| v.into_owned())?;

        let remaining: Vec<(String, String)> = parsed
            .query_pairs()
            .filter(|(k, _)| k != "token")
            .map(|(k, v)| (k.into_owned(), v.into_owned()))
            .collect();
        parsed.set_query(None);
        if !remaining.is_empty() {
            parsed
                .query_pairs_mut()
                .extend_pairs(remaining.iter().map(|(k, v)| (k.as_str(), v.as_str())));
        }

        Some(self.login(&token).await.map(|()| parsed.to_string()))
    }
}
