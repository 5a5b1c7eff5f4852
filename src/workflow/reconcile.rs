//! Result reconciliation: turn a scored attempt into the screen the
//! user should see and the navigation it offers. Also owns the
//! role-to-creation-intent mapping the create button relies on.

use crate::error::WorkflowError;
use crate::models::{Role, TestResult};
use crate::session::Redirect;

/// How the exam was reached.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExamOrigin {
    /// Started directly from the dashboard.
    FreshAttempt,
    /// Started as follow-through from a just-saved pending service draft.
    PendingDraft,
}

/// What a creation button should create for a given role. Only hustlers
/// and sellers create anything; every other role is rejected outright
/// rather than silently defaulted.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CreateIntent {
    Service,
    Product,
}

pub fn create_intent(role: Role) -> Result<CreateIntent, WorkflowError> {
    match role {
        Role::Hustler => Ok(CreateIntent::Service),
        Role::Seller => Ok(CreateIntent::Product),
        Role::Student => Err(WorkflowError::RoleWithoutCreateIntent(role.to_string())),
    }
}

impl CreateIntent {
    pub fn create_route(&self) -> Redirect {
        match self {
            CreateIntent::Service => Redirect("/dashboard/hustler/create-service".to_string()),
            CreateIntent::Product => Redirect("/dashboard/seller/create-product".to_string()),
        }
    }
}

/// The reconciled outcome handed to the display layer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ResultScreen {
    Passed {
        expertise_area: String,
        score: u8,
        correct_answers: u32,
        total_questions: u32,
        message: String,
        /// Set when the attempt came from a pending draft: the service
        /// is published now, and the primary action is to view it.
        service_published: bool,
        primary_action: Redirect,
        secondary_action: Redirect,
    },
    Failed {
        expertise_area: String,
        score: u8,
        correct_answers: u32,
        total_questions: u32,
        message: String,
        /// Set when a pending draft exists: it stays unpublished until a
        /// passing retake.
        draft_still_pending: bool,
        /// Retaking starts a fresh engine with a fresh question fetch;
        /// nothing from this attempt carries over.
        retake: bool,
        dashboard: Redirect,
    },
    /// Shown instead of the exam when a passing verification already
    /// exists for the area.
    AlreadyVerified {
        expertise_area: String,
        create_service: Redirect,
        dashboard: Redirect,
    },
}

const HUSTLER_DASHBOARD: &str = "/dashboard/hustler";

pub fn reconcile(result: &TestResult, expertise_area: &str, origin: ExamOrigin) -> ResultScreen {
    let dashboard = Redirect(HUSTLER_DASHBOARD.to_string());
    if result.passed {
        let from_draft = origin == ExamOrigin::PendingDraft;
        ResultScreen::Passed {
            expertise_area: expertise_area.to_string(),
            score: result.score,
            correct_answers: result.correct_answers,
            total_questions: result.total_questions,
            message: result.message.clone(),
            service_published: from_draft,
            primary_action: if from_draft {
                Redirect("/services".to_string())
            } else {
                CreateIntent::Service.create_route()
            },
            secondary_action: dashboard,
        }
    } else {
        ResultScreen::Failed {
            expertise_area: expertise_area.to_string(),
            score: result.score,
            correct_answers: result.correct_answers,
            total_questions: result.total_questions,
            message: result.message.clone(),
            draft_still_pending: origin == ExamOrigin::PendingDraft,
            retake: true,
            dashboard,
        }
    }
}

/// The pass-branch-equivalent display for a hustler who never needs the
/// exam in the first place.
pub fn already_verified_screen(expertise_area: &str) -> ResultScreen {
    ResultScreen::AlreadyVerified {
        expertise_area: expertise_area.to_string(),
        create_service: CreateIntent::Service.create_route(),
        dashboard: Redirect(HUSTLER_DASHBOARD.to_string()),
    }
}
