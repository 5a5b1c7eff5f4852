//! In-memory stand-in for the remote marketplace API, recording every
//! call so tests can assert on exactly what went over the wire.

// Shared across several test binaries; not every binary uses every helper.
#![allow(dead_code)]

use std::collections::HashSet;
use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};
use std::sync::Mutex;

use async_trait::async_trait;

use teenhustle_core::api::services::{CreatedService, NewService};
use teenhustle_core::api::MarketBackend;
use teenhustle_core::error::ApiError;
use teenhustle_core::models::{
    Catalog, CategoryItem, CategoryKind, ExpertiseCategory, ExpertiseSubcategory, Identity,
    Product, Role, Service, SetupProfile, SetupResponse, TestQuestion, TestResult,
    TestSubmission, VerificationStatus,
};

pub struct FakeBackend {
    pub identity: Mutex<Option<Identity>>,
    pub categories: Vec<ExpertiseCategory>,
    pub questions: Mutex<Vec<TestQuestion>>,
    pub verified_areas: Mutex<HashSet<String>>,
    pub exam_result: Mutex<TestResult>,
    pub needs_verification: AtomicBool,
    pub fail_next_setup: AtomicBool,
    pub fail_next_submit: AtomicBool,

    pub setup_calls: Mutex<Vec<SetupProfile>>,
    pub question_fetches: AtomicUsize,
    pub submissions: Mutex<Vec<TestSubmission>>,
    pub created_services: Mutex<Vec<NewService>>,
}

pub fn identity(complete: bool, role: Option<Role>) -> Identity {
    serde_json::from_value(serde_json::json!({
        "id": "u1",
        "email": "sam@example.com",
        "firstName": "Sam",
        "lastName": "Lee",
        "isProfileComplete": complete,
        "role": role.map(|r| r.as_str()),
    }))
    .unwrap()
}

pub fn design_and_tutor_categories() -> Vec<ExpertiseCategory> {
    vec![
        ExpertiseCategory {
            id: "cat-design".into(),
            name: "Design".into(),
            slug: "design".into(),
            description: String::new(),
            color: "#6366f1".into(),
            subcategories: vec![],
        },
        ExpertiseCategory {
            id: "cat-tutor".into(),
            name: "Tutor".into(),
            slug: "tutor".into(),
            description: String::new(),
            color: "#10b981".into(),
            subcategories: vec![ExpertiseSubcategory {
                id: "sub-lang".into(),
                name: "Language".into(),
                slug: "language".into(),
                description: String::new(),
                parent_id: "cat-tutor".into(),
            }],
        },
    ]
}

pub fn questions(n: usize) -> Vec<TestQuestion> {
    serde_json::from_value(
        serde_json::Value::Array(
            (0..n)
                .map(|i| {
                    serde_json::json!({
                        "_id": format!("q{i}"),
                        "question": format!("Question {i}?"),
                        "options": ["a", "b", "c", "d"],
                        "difficulty": "medium"
                    })
                })
                .collect(),
        ),
    )
    .unwrap()
}

pub fn passing_result() -> TestResult {
    TestResult {
        score: 80,
        passed: true,
        correct_answers: 8,
        total_questions: 10,
        message: "Congratulations, you passed!".into(),
    }
}

pub fn failing_result() -> TestResult {
    TestResult {
        score: 30,
        passed: false,
        correct_answers: 3,
        total_questions: 10,
        message: "You did not reach the passing score.".into(),
    }
}

impl FakeBackend {
    pub fn new() -> Self {
        FakeBackend {
            identity: Mutex::new(Some(identity(false, None))),
            categories: design_and_tutor_categories(),
            questions: Mutex::new(questions(10)),
            verified_areas: Mutex::new(HashSet::new()),
            exam_result: Mutex::new(passing_result()),
            needs_verification: AtomicBool::new(true),
            fail_next_setup: AtomicBool::new(false),
            fail_next_submit: AtomicBool::new(false),
            setup_calls: Mutex::new(Vec::new()),
            question_fetches: AtomicUsize::new(0),
            submissions: Mutex::new(Vec::new()),
            created_services: Mutex::new(Vec::new()),
        }
    }

    pub fn catalog(&self) -> Catalog {
        Catalog::new(self.categories.clone())
    }

    pub fn mark_verified(&self, area: &str) {
        self.verified_areas.lock().unwrap().insert(area.to_string());
    }
}

#[async_trait]
impl MarketBackend for FakeBackend {
    async fn profile(&self) -> Result<Identity, ApiError> {
        self.identity
            .lock()
            .unwrap()
            .clone()
            .ok_or(ApiError::SessionExpired)
    }

    async fn submit_setup(&self, payload: &SetupProfile) -> Result<SetupResponse, ApiError> {
        if self.fail_next_setup.swap(false, Ordering::SeqCst) {
            return Err(ApiError::Rejected {
                status: 400,
                message: "malformed setup payload".into(),
            });
        }
        self.setup_calls.lock().unwrap().push(payload.clone());

        // The server marks the profile complete as part of setup.
        let role = payload.role;
        *self.identity.lock().unwrap() = Some(identity(true, role));
        let redirect_to = role
            .map(|r| r.dashboard())
            .unwrap_or_else(|| "/setup".to_string());
        Ok(SetupResponse { redirect_to })
    }

    async fn expertise_catalog(&self) -> Result<Catalog, ApiError> {
        Ok(self.catalog())
    }

    async fn display_categories(&self, _kind: CategoryKind) -> Result<Vec<CategoryItem>, ApiError> {
        Ok(Vec::new())
    }

    async fn all_services(&self) -> Result<Vec<Service>, ApiError> {
        Ok(Vec::new())
    }

    async fn featured_services(&self) -> Result<Vec<Service>, ApiError> {
        Ok(Vec::new())
    }

    async fn all_products(&self) -> Result<Vec<Product>, ApiError> {
        Ok(Vec::new())
    }

    async fn featured_products(&self) -> Result<Vec<Product>, ApiError> {
        Ok(Vec::new())
    }

    async fn create_service(&self, draft: &NewService) -> Result<CreatedService, ApiError> {
        self.created_services.lock().unwrap().push(draft.clone());
        Ok(CreatedService {
            service: None,
            needs_verification: self.needs_verification.load(Ordering::SeqCst),
        })
    }

    async fn my_services(&self) -> Result<Vec<Service>, ApiError> {
        Ok(Vec::new())
    }

    async fn delete_service(&self, _id: &str) -> Result<(), ApiError> {
        Ok(())
    }

    async fn exam_questions(
        &self,
        _expertise_id: &str,
        _sub_category_id: Option<&str>,
    ) -> Result<Vec<TestQuestion>, ApiError> {
        self.question_fetches.fetch_add(1, Ordering::SeqCst);
        Ok(self.questions.lock().unwrap().clone())
    }

    async fn submit_exam(&self, submission: &TestSubmission) -> Result<TestResult, ApiError> {
        if self.fail_next_submit.swap(false, Ordering::SeqCst) {
            return Err(ApiError::Rejected {
                status: 500,
                message: "scoring temporarily unavailable".into(),
            });
        }
        self.submissions.lock().unwrap().push(submission.clone());
        Ok(self.exam_result.lock().unwrap().clone())
    }

    async fn verification_status(
        &self,
        expertise_area: &str,
    ) -> Result<VerificationStatus, ApiError> {
        Ok(VerificationStatus {
            is_verified: self.verified_areas.lock().unwrap().contains(expertise_area),
        })
    }
}
