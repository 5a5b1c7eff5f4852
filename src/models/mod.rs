pub mod exam;
pub mod expertise;
pub mod identity;
pub mod service;

pub use exam::{
    AnswerSheet, Difficulty, SubmittedAnswer, TestQuestion, TestResult, TestSubmission,
    VerificationStatus,
};
pub use expertise::{Catalog, ExpertiseCategory, ExpertiseSubcategory};
pub use identity::{AuthResponse, Identity, Role, SetupProfile, SetupResponse};
pub use service::{
    CategoryItem, CategoryKind, Product, RawServiceRecord, Service, ServiceStatus,
};
