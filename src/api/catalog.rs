//! Public catalog endpoints: the expertise tree, curated display
//! categories, and the service/product listings.

use reqwest::Method;

use super::{ApiClient, ApiEnvelope};
use crate::error::ApiError;
use crate::models::{
    Catalog, CategoryItem, CategoryKind, ExpertiseCategory, Product, RawServiceRecord, Service,
};

impl ApiClient {
    /// Fetch the expertise category/subcategory tree. A catalog with a
    /// broken parent link is a malformed response, not a usable tree.
    pub async fn expertise_catalog(&self) -> Result<Catalog, ApiError> {
        let envelope: ApiEnvelope<Vec<ExpertiseCategory>> = self
            .request(Method::GET, "/public/expertise", None)
            .await?;
        let catalog = Catalog::new(envelope.into_data()?);
        catalog.check_parent_links().map_err(|sub_id| {
            ApiError::Decode(format!("subcategory {sub_id} has a dangling parentId"))
        })?;
        Ok(catalog)
    }

    pub async fn display_categories(
        &self,
        kind: CategoryKind,
    ) -> Result<Vec<CategoryItem>, ApiError> {
        let kind = match kind {
            CategoryKind::Service => "service",
            CategoryKind::Product => "product",
        };
        let path = format!("/public/categories?type={kind}");
        let envelope: ApiEnvelope<Vec<CategoryItem>> =
            self.request(Method::GET, &path, None).await?;
        envelope.into_data()
    }

    pub async fn all_services(&self) -> Result<Vec<Service>, ApiError> {
        self.service_listing("/public/all-services").await
    }

    pub async fn featured_services(&self) -> Result<Vec<Service>, ApiError> {
        self.service_listing("/public/featured-services").await
    }

    async fn service_listing(&self, path: &str) -> Result<Vec<Service>, ApiError> {
        let envelope: ApiEnvelope<Vec<RawServiceRecord>> =
            self.request(Method::GET, path, None).await?;
        Ok(envelope
            .into_data()?
            .into_iter()
            .filter_map(Service::from_raw)
            .collect())
    }

    pub async fn all_products(&self) -> Result<Vec<Product>, ApiError> {
        let envelope: ApiEnvelope<Vec<Product>> = self
            .request(Method::GET, "/public/all-products", None)
            .await?;
        envelope.into_data()
    }

    pub async fn featured_products(&self) -> Result<Vec<Product>, ApiError> {
        let envelope: ApiEnvelope<Vec<Product>> = self
            .request(Method::GET, "/public/featured-products", None)
            .await?;
        envelope.into_data()
    }
}
