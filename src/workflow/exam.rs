//! Verification exam engine.
//!
//! Owns one attempt: the fetched question set, the answer sheet, the
//! question cursor, and the 30-minute deadline. Navigation never touches
//! answers; the deadline never pauses. Submission is manual (gated on an
//! explicit confirmation while questions are unanswered) or automatic
//! when the countdown hits zero, and only answered questions go over the
//! wire either way.

use std::time::Duration;

use tokio::time::{interval, Instant};
use tracing::{info, warn};
use uuid::Uuid;

use crate::api::MarketBackend;
use crate::error::{ValidationError, WorkflowError};
use crate::models::{AnswerSheet, Catalog, TestQuestion, TestResult, TestSubmission};

/// Fixed attempt window, anchored at question-set load.
pub const EXAM_DURATION: Duration = Duration::from_secs(1800);

/// How starting an exam resolved.
pub enum ExamStart {
    /// A passing verification already exists for this area; no questions
    /// were fetched and no timer started.
    AlreadyVerified { expertise_area: String },
    /// The question bank has nothing for this area. Terminal display,
    /// not an error.
    NoTestAvailable { expertise_area: String },
    Ready(Box<ExamEngine>),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum EngineStatus {
    Active,
    SubmitInFlight,
    Completed,
}

/// Outcome of a manual submission request.
#[derive(Debug)]
pub enum SubmitAttempt {
    /// Unanswered questions remain and the caller has not confirmed.
    /// Nothing was sent.
    NeedsConfirmation { unanswered: usize },
    /// A submission is already in flight or the attempt is finished.
    AlreadyInFlight,
    Submitted(TestResult),
}

pub struct ExamEngine {
    attempt_id: Uuid,
    expertise_id: String,
    expertise_area: String,
    sub_category_id: Option<String>,
    questions: Vec<TestQuestion>,
    answers: AnswerSheet,
    cursor: usize,
    started_at: Instant,
    deadline: Instant,
    status: EngineStatus,
}

impl ExamEngine {
    /// Start an attempt for `(expertise_id, sub_category_id?)`.
    ///
    /// Checks the existing-pass status first so an already-verified
    /// hustler never sees the exam, then fetches the question set.
    pub async fn start<B: MarketBackend>(
        backend: &B,
        catalog: &Catalog,
        expertise_id: &str,
        sub_category_id: Option<&str>,
    ) -> Result<ExamStart, WorkflowError> {
        let expertise_area = catalog
            .category_name(expertise_id)
            .ok_or_else(|| WorkflowError::UnknownCategory(expertise_id.to_string()))?
            .to_string();

        let status = backend.verification_status(&expertise_area).await?;
        if status.is_verified {
            info!(%expertise_area, "already verified, skipping exam");
            return Ok(ExamStart::AlreadyVerified { expertise_area });
        }

        let questions = backend.exam_questions(expertise_id, sub_category_id).await?;
        if questions.is_empty() {
            return Ok(ExamStart::NoTestAvailable { expertise_area });
        }

        let now = Instant::now();
        let answers = AnswerSheet::new(questions.len());
        info!(
            %expertise_area,
            question_count = questions.len(),
            "exam attempt started"
        );

        Ok(ExamStart::Ready(Box::new(ExamEngine {
            attempt_id: Uuid::new_v4(),
            expertise_id: expertise_id.to_string(),
            expertise_area,
            sub_category_id: sub_category_id.map(str::to_string),
            questions,
            answers,
            cursor: 0,
            started_at: now,
            deadline: now + EXAM_DURATION,
            status: EngineStatus::Active,
        })))
    }

    pub fn attempt_id(&self) -> Uuid {
        self.attempt_id
    }

    pub fn expertise_area(&self) -> &str {
        &self.expertise_area
    }

    pub fn expertise_id(&self) -> &str {
        &self.expertise_id
    }

    pub fn sub_category_id(&self) -> Option<&str> {
        self.sub_category_id.as_deref()
    }

    pub fn questions(&self) -> &[TestQuestion] {
        &self.questions
    }

    pub fn current_index(&self) -> usize {
        self.cursor
    }

    pub fn current_question(&self) -> &TestQuestion {
        &self.questions[self.cursor]
    }

    pub fn answers(&self) -> &AnswerSheet {
        &self.answers
    }

    /// Time left on the attempt clock. Derived from the fixed deadline,
    /// so navigation and rendering can't drift it.
    pub fn remaining(&self) -> Duration {
        self.deadline.saturating_duration_since(Instant::now())
    }

    pub fn is_expired(&self) -> bool {
        self.remaining() == Duration::ZERO
    }

    // Navigation clamps to range and never alters answers.

    pub fn next_question(&mut self) {
        if self.cursor + 1 < self.questions.len() {
            self.cursor += 1;
        }
    }

    pub fn previous_question(&mut self) {
        self.cursor = self.cursor.saturating_sub(1);
    }

    pub fn jump_to(&mut self, index: usize) {
        if index < self.questions.len() {
            self.cursor = index;
        }
    }

    /// Record an option for the currently displayed question,
    /// overwriting any earlier pick for that question only.
    pub fn select_answer(&mut self, option: usize) -> Result<(), WorkflowError> {
        let option_count = self.current_question().options.len();
        if option >= option_count {
            return Err(ValidationError::new(
                "answer",
                format!("option {option} out of range ({option_count} options)"),
            )
            .into());
        }
        self.answers.set(self.cursor, option);
        Ok(())
    }

    /// Manual submission. With unanswered questions and
    /// `confirmed_unanswered == false`, asks for confirmation instead of
    /// sending anything.
    pub async fn submit<B: MarketBackend>(
        &mut self,
        backend: &B,
        confirmed_unanswered: bool,
    ) -> Result<SubmitAttempt, WorkflowError> {
        if self.status != EngineStatus::Active {
            return Ok(SubmitAttempt::AlreadyInFlight);
        }

        let unanswered = self.answers.unanswered_count();
        if unanswered > 0 && !confirmed_unanswered {
            return Ok(SubmitAttempt::NeedsConfirmation { unanswered });
        }

        self.send(backend).await.map(SubmitAttempt::Submitted)
    }

    /// Drive the countdown: one tick per second until the deadline, then
    /// a single automatic submission of whatever is answered, with no
    /// confirmation gate. Runs until expiry; cancel by dropping the
    /// future (navigating away).
    pub async fn run_countdown<B: MarketBackend>(
        &mut self,
        backend: &B,
    ) -> Result<TestResult, WorkflowError> {
        let mut ticker = interval(Duration::from_secs(1));
        loop {
            ticker.tick().await;
            if self.is_expired() {
                warn!(attempt_id = %self.attempt_id, "time expired, auto-submitting");
                return self.send(backend).await;
            }
        }
    }

    /// The one path to the wire. Guards against re-entry, reports only
    /// answered questions plus elapsed time, and releases the guard on
    /// failure so the user can retry.
    async fn send<B: MarketBackend>(&mut self, backend: &B) -> Result<TestResult, WorkflowError> {
        if self.status != EngineStatus::Active {
            return Err(WorkflowError::InvalidStep);
        }
        self.status = EngineStatus::SubmitInFlight;

        let submission = TestSubmission {
            expertise_id: self.expertise_id.clone(),
            answers: self.answers.payload(&self.questions),
            time_spent: self.started_at.elapsed().as_secs(),
        };

        match backend.submit_exam(&submission).await {
            Ok(result) => {
                self.status = EngineStatus::Completed;
                info!(
                    attempt_id = %self.attempt_id,
                    score = result.score,
                    passed = result.passed,
                    "exam scored"
                );
                Ok(result)
            }
            Err(err) => {
                self.status = EngineStatus::Active;
                Err(err.into())
            }
        }
    }
}

/// `MM:SS` display for the countdown.
pub fn format_clock(remaining: Duration) -> String {
    let secs = remaining.as_secs();
    format!("{}:{:02}", secs / 60, secs % 60)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn formats_clock_as_minutes_and_seconds() {
        assert_eq!(format_clock(Duration::from_secs(1800)), "30:00");
        assert_eq!(format_clock(Duration::from_secs(299)), "4:59");
        assert_eq!(format_clock(Duration::ZERO), "0:00");
    }
}
