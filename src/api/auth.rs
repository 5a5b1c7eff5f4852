//! Authentication endpoints: `GET /auth/profile`, `POST /auth/setup`.
//! The refresh endpoint lives in the base client because it is part of
//! the 401 retry policy, not a caller-visible operation.

use reqwest::Method;
use serde::Deserialize;

use super::ApiClient;
use crate::error::ApiError;
use crate::models::{Identity, SetupProfile, SetupResponse};

#[derive(Debug, Deserialize)]
struct ProfileResponse {
    user: Identity,
}

impl ApiClient {
    pub async fn profile(&self) -> Result<Identity, ApiError> {
        let response: ProfileResponse = self.request(Method::GET, "/auth/profile", None).await?;
        Ok(response.user)
    }

    pub async fn submit_setup(&self, payload: &SetupProfile) -> Result<SetupResponse, ApiError> {
        let body = serde_json::to_value(payload).map_err(|e| ApiError::Decode(e.to_string()))?;
        self.request(Method::POST, "/auth/setup", Some(&body)).await
    }
}
