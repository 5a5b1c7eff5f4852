//! Own-service management: `POST/GET /hustler/services`,
//! `DELETE /hustler/services/:id`.

use reqwest::Method;
use serde::{Deserialize, Serialize};

use super::{ApiClient, ApiEnvelope};
use crate::error::ApiError;
use crate::models::{RawServiceRecord, Service};

/// Payload for `POST /hustler/services`.
#[derive(Debug, Serialize, Deserialize, Clone)]
#[serde(rename_all = "camelCase")]
pub struct NewService {
    pub title: String,
    pub description: String,
    pub price: f64,
    pub expertise_id: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sub_category_id: Option<String>,
}

/// Create response: the stored service plus whether the owner still has
/// to pass the verification exam before it goes live.
#[derive(Debug, Clone)]
pub struct CreatedService {
    pub service: Option<Service>,
    pub needs_verification: bool,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct CreatedServiceWire {
    #[serde(default)]
    service: Option<RawServiceRecord>,
    #[serde(default)]
    needs_verification: bool,
}

impl ApiClient {
    pub async fn create_service(&self, draft: &NewService) -> Result<CreatedService, ApiError> {
        let body = serde_json::to_value(draft).map_err(|e| ApiError::Decode(e.to_string()))?;
        let envelope: ApiEnvelope<CreatedServiceWire> = self
            .request(Method::POST, "/hustler/services", Some(&body))
            .await?;
        let wire = envelope.into_data()?;
        Ok(CreatedService {
            service: wire.service.and_then(Service::from_raw),
            needs_verification: wire.needs_verification,
        })
    }

    pub async fn my_services(&self) -> Result<Vec<Service>, ApiError> {
        let envelope: ApiEnvelope<Vec<RawServiceRecord>> = self
            .request(Method::GET, "/hustler/services", None)
            .await?;
        Ok(envelope
            .into_data()?
            .into_iter()
            .filter_map(Service::from_raw)
            .collect())
    }

    pub async fn delete_service(&self, id: &str) -> Result<(), ApiError> {
        let path = format!("/hustler/services/{id}");
        let _: serde_json::Value = self.request(Method::DELETE, &path, None).await?;
        Ok(())
    }
}
