use serde::{Deserialize, Serialize};

#[derive(Debug, Serialize, Deserialize, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum Difficulty {
    Easy,
    Medium,
    Hard,
}

/// One multiple-choice question, fetched per attempt and never persisted
/// past it.
#[derive(Debug, Serialize, Deserialize, Clone)]
#[serde(rename_all = "camelCase")]
pub struct TestQuestion {
    #[serde(rename = "_id")]
    pub id: String,
    pub question: String,
    pub options: Vec<String>,
    pub difficulty: Difficulty,
}

/// An answered question as it goes over the wire. Unset slots never
/// reach this type.
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct SubmittedAnswer {
    pub question_id: String,
    pub selected_answer: usize,
}

/// Payload for `POST /test/submit`.
#[derive(Debug, Serialize, Deserialize, Clone)]
#[serde(rename_all = "camelCase")]
pub struct TestSubmission {
    pub expertise_id: String,
    pub answers: Vec<SubmittedAnswer>,
    /// Elapsed whole seconds since the question set was loaded.
    pub time_spent: u64,
}

/// Per-attempt answer state: one slot per question, `None` until the
/// user picks an option. The sentinel can never collide with a real
/// option index.
#[derive(Debug, Clone)]
pub struct AnswerSheet {
    slots: Vec<Option<usize>>,
}

impl AnswerSheet {
    pub fn new(question_count: usize) -> Self {
        AnswerSheet {
            slots: vec![None; question_count],
        }
    }

    pub fn len(&self) -> usize {
        self.slots.len()
    }

    pub fn is_empty(&self) -> bool {
        self.slots.is_empty()
    }

    pub fn get(&self, index: usize) -> Option<usize> {
        self.slots.get(index).copied().flatten()
    }

    pub fn set(&mut self, index: usize, selected: usize) {
        if let Some(slot) = self.slots.get_mut(index) {
            *slot = Some(selected);
        }
    }

    pub fn is_answered(&self, index: usize) -> bool {
        self.get(index).is_some()
    }

    pub fn unanswered_count(&self) -> usize {
        self.slots.iter().filter(|s| s.is_none()).count()
    }

    /// Only answered slots make it into the payload, so the answer count
    /// is always ≤ the question count.
    pub fn payload(&self, questions: &[TestQuestion]) -> Vec<SubmittedAnswer> {
        self.slots
            .iter()
            .zip(questions)
            .filter_map(|(slot, question)| {
                slot.map(|selected| SubmittedAnswer {
                    question_id: question.id.clone(),
                    selected_answer: selected,
                })
            })
            .collect()
    }
}

/// Scoring outcome for one submitted attempt. The 50% passing threshold
/// is applied server-side; the client only displays what came back.
#[derive(Debug, Serialize, Deserialize, Clone)]
#[serde(rename_all = "camelCase")]
pub struct TestResult {
    pub score: u8,
    pub passed: bool,
    pub correct_answers: u32,
    pub total_questions: u32,
    #[serde(default)]
    pub message: String,
}

#[derive(Debug, Serialize, Deserialize, Clone)]
#[serde(rename_all = "camelCase")]
pub struct VerificationStatus {
    pub is_verified: bool,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn questions(n: usize) -> Vec<TestQuestion> {
        (0..n)
            .map(|i| TestQuestion {
                id: format!("q{i}"),
                question: format!("Question {i}"),
                options: vec!["a".into(), "b".into(), "c".into(), "d".into()],
                difficulty: Difficulty::Easy,
            })
            .collect()
    }

    #[test]
    fn unset_slots_are_excluded_from_payload() {
        let questions = questions(5);
        let mut sheet = AnswerSheet::new(5);
        sheet.set(0, 2);
        sheet.set(3, 0);

        let payload = sheet.payload(&questions);
        assert_eq!(payload.len(), 2);
        assert_eq!(payload[0].question_id, "q0");
        assert_eq!(payload[0].selected_answer, 2);
        assert_eq!(payload[1].question_id, "q3");
        assert!(payload.len() <= questions.len());
    }

    #[test]
    fn overwriting_touches_only_that_slot() {
        let mut sheet = AnswerSheet::new(3);
        sheet.set(1, 0);
        sheet.set(1, 3);
        assert_eq!(sheet.get(1), Some(3));
        assert_eq!(sheet.get(0), None);
        assert_eq!(sheet.get(2), None);
        assert_eq!(sheet.unanswered_count(), 2);
    }

    #[test]
    fn out_of_range_set_is_ignored() {
        let mut sheet = AnswerSheet::new(2);
        sheet.set(5, 1);
        assert_eq!(sheet.unanswered_count(), 2);
    }
}
