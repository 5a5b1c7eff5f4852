use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

#[derive(Debug, Serialize, Deserialize, Clone, Copy, PartialEq, Eq)]
pub enum ServiceStatus {
    #[serde(rename = "pending-verification")]
    PendingVerification,
    #[serde(rename = "published", alias = "active")]
    Published,
}

/// Canonical service record. Everything past the API boundary sees this
/// shape only; the dual legacy/new wire shapes are normalized away in
/// [`Service::from_raw`].
#[derive(Debug, Serialize, Deserialize, Clone)]
#[serde(rename_all = "camelCase")]
pub struct Service {
    pub id: String,
    pub title: String,
    pub description: String,
    pub price: f64,
    #[serde(default)]
    pub expertise_id: Option<String>,
    #[serde(default)]
    pub sub_category_id: Option<String>,
    #[serde(default)]
    pub expertise_area: Option<String>,
    pub status: ServiceStatus,
    #[serde(default)]
    pub is_featured: bool,
    #[serde(default)]
    pub images: Vec<String>,
    #[serde(default)]
    pub created_at: Option<DateTime<Utc>>,
}

/// Raw wire record as returned by the listing endpoints. Older snapshots
/// embed the service into the provider record (`serviceTitle`,
/// `servicePrice`, ...); newer ones carry first-class fields. Exists only
/// inside the API layer.
#[derive(Debug, Deserialize, Clone)]
#[serde(rename_all = "camelCase")]
pub struct RawServiceRecord {
    #[serde(rename = "_id")]
    pub id: String,
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub price: Option<f64>,
    #[serde(default)]
    pub service_title: Option<String>,
    #[serde(default)]
    pub service_description: Option<String>,
    #[serde(default)]
    pub service_price: Option<f64>,
    #[serde(default)]
    pub service_images: Option<Vec<String>>,
    #[serde(default)]
    pub expertise_id: Option<String>,
    #[serde(default)]
    pub sub_category_id: Option<String>,
    #[serde(default)]
    pub expertise_area: Option<String>,
    #[serde(default)]
    pub category: Option<String>,
    #[serde(default)]
    pub status: Option<ServiceStatus>,
    #[serde(default)]
    pub is_featured: bool,
    #[serde(default)]
    pub images: Vec<String>,
    #[serde(default)]
    pub created_at: Option<DateTime<Utc>>,
}

impl Service {
    /// Normalize a wire record into the canonical shape. New-style fields
    /// win when both are present; a record with neither style of title is
    /// unusable and dropped by the caller.
    pub fn from_raw(raw: RawServiceRecord) -> Option<Service> {
        let title = raw.title.or(raw.service_title)?;
        let description = raw
            .description
            .or(raw.service_description)
            .unwrap_or_default();
        let price = raw.price.or(raw.service_price).unwrap_or(0.0);
        let images = if raw.images.is_empty() {
            raw.service_images.unwrap_or_default()
        } else {
            raw.images
        };

        Some(Service {
            id: raw.id,
            title,
            description,
            price,
            expertise_id: raw.expertise_id,
            sub_category_id: raw.sub_category_id,
            expertise_area: raw.expertise_area.or(raw.category),
            status: raw.status.unwrap_or(ServiceStatus::Published),
            is_featured: raw.is_featured,
            images,
            created_at: raw.created_at,
        })
    }
}

/// A seller's product listing.
#[derive(Debug, Serialize, Deserialize, Clone)]
#[serde(rename_all = "camelCase")]
pub struct Product {
    #[serde(rename = "_id")]
    pub id: String,
    pub title: String,
    #[serde(default)]
    pub description: String,
    pub price: f64,
    #[serde(default)]
    pub seller_name: String,
    #[serde(default)]
    pub seller_email: Option<String>,
    #[serde(default)]
    pub images: Vec<String>,
    #[serde(default)]
    pub category: String,
    #[serde(default)]
    pub rating: f64,
    #[serde(default)]
    pub review_count: Option<u32>,
}

#[derive(Debug, Serialize, Deserialize, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum CategoryKind {
    Service,
    Product,
}

/// Admin-curated display category from `/public/categories`.
#[derive(Debug, Serialize, Deserialize, Clone)]
#[serde(rename_all = "camelCase")]
pub struct CategoryItem {
    #[serde(rename = "_id")]
    pub id: String,
    #[serde(rename = "type")]
    pub kind: CategoryKind,
    pub name: String,
    pub slug: String,
    #[serde(default)]
    pub is_active: bool,
    #[serde(default)]
    pub order: i32,
}
