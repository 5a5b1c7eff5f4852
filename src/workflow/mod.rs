pub mod exam;
pub mod reconcile;
pub mod setup;
pub mod submit_service;

pub use exam::{format_clock, ExamEngine, ExamStart, SubmitAttempt, EXAM_DURATION};
pub use reconcile::{
    already_verified_screen, create_intent, reconcile, CreateIntent, ExamOrigin, ResultScreen,
};
pub use setup::{SetupWizard, WizardEntry, WizardStep};
pub use submit_service::{submit_draft, DraftForm, SubmitOutcome};
