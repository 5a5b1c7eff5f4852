//! The remote surface as one trait, so the session and the workflows can
//! run against the real client or an in-memory fake.

use async_trait::async_trait;

use super::services::{CreatedService, NewService};
use super::ApiClient;
use crate::error::ApiError;
use crate::models::{
    Catalog, CategoryItem, CategoryKind, Identity, Product, Service, SetupProfile, SetupResponse,
    TestQuestion, TestResult, TestSubmission, VerificationStatus,
};

#[async_trait]
pub trait MarketBackend: Send + Sync {
    async fn profile(&self) -> Result<Identity, ApiError>;
    async fn submit_setup(&self, payload: &SetupProfile) -> Result<SetupResponse, ApiError>;

    async fn expertise_catalog(&self) -> Result<Catalog, ApiError>;
    async fn display_categories(&self, kind: CategoryKind) -> Result<Vec<CategoryItem>, ApiError>;
    async fn all_services(&self) -> Result<Vec<Service>, ApiError>;
    async fn featured_services(&self) -> Result<Vec<Service>, ApiError>;
    async fn all_products(&self) -> Result<Vec<Product>, ApiError>;
    async fn featured_products(&self) -> Result<Vec<Product>, ApiError>;

    async fn create_service(&self, draft: &NewService) -> Result<CreatedService, ApiError>;
    async fn my_services(&self) -> Result<Vec<Service>, ApiError>;
    async fn delete_service(&self, id: &str) -> Result<(), ApiError>;

    async fn exam_questions(
        &self,
        expertise_id: &str,
        sub_category_id: Option<&str>,
    ) -> Result<Vec<TestQuestion>, ApiError>;
    async fn submit_exam(&self, submission: &TestSubmission) -> Result<TestResult, ApiError>;
    async fn verification_status(&self, expertise_area: &str)
        -> Result<VerificationStatus, ApiError>;
}

#[async_trait]
impl MarketBackend for ApiClient {
    async fn profile(&self) -> Result<Identity, ApiError> {
        ApiClient::profile(self).await
    }

    async fn submit_setup(&self, payload: &SetupProfile) -> Result<SetupResponse, ApiError> {
        ApiClient::submit_setup(self, payload).await
    }

    async fn expertise_catalog(&self) -> Result<Catalog, ApiError> {
        ApiClient::expertise_catalog(self).await
    }

    async fn display_categories(&self, kind: CategoryKind) -> Result<Vec<CategoryItem>, ApiError> {
        ApiClient::display_categories(self, kind).await
    }

    async fn all_services(&self) -> Result<Vec<Service>, ApiError> {
        ApiClient::all_services(self).await
    }

    async fn featured_services(&self) -> Result<Vec<Service>, ApiError> {
        ApiClient::featured_services(self).await
    }

    async fn all_products(&self) -> Result<Vec<Product>, ApiError> {
        ApiClient::all_products(self).await
    }

    async fn featured_products(&self) -> Result<Vec<Product>, ApiError> {
        ApiClient::featured_products(self).await
    }

    async fn create_service(&self, draft: &NewService) -> Result<CreatedService, ApiError> {
        ApiClient::create_service(self, draft).await
    }

    async fn my_services(&self) -> Result<Vec<Service>, ApiError> {
        ApiClient::my_services(self).await
    }

    async fn delete_service(&self, id: &str) -> Result<(), ApiError> {
        ApiClient::delete_service(self, id).await
    }

    async fn exam_questions(
        &self,
        expertise_id: &str,
        sub_category_id: Option<&str>,
    ) -> Result<Vec<TestQuestion>, ApiError> {
        ApiClient::exam_questions(self, expertise_id, sub_category_id).await
    }

    async fn submit_exam(&self, submission: &TestSubmission) -> Result<TestResult, ApiError> {
        ApiClient::submit_exam(self, submission).await
    }

    async fn verification_status(
        &self,
        expertise_area: &str,
    ) -> Result<VerificationStatus, ApiError> {
        ApiClient::verification_status(self, expertise_area).await
    }
}
