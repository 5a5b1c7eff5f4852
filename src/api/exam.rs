//! Verification exam endpoints: question fetch, submission, and the
//! existing-pass lookup.

use percent_encoding::{utf8_percent_encode, NON_ALPHANUMERIC};
use reqwest::Method;

use super::{ApiClient, ApiEnvelope};
use crate::error::ApiError;
use crate::models::{TestQuestion, TestResult, TestSubmission, VerificationStatus};

impl ApiClient {
    pub async fn exam_questions(
        &self,
        expertise_id: &str,
        sub_category_id: Option<&str>,
    ) -> Result<Vec<TestQuestion>, ApiError> {
        let path = match sub_category_id {
            Some(sub) => format!("/test/questions/{expertise_id}?subCategoryId={sub}"),
            None => format!("/test/questions/{expertise_id}"),
        };
        let envelope: ApiEnvelope<Vec<TestQuestion>> =
            self.request(Method::GET, &path, None).await?;
        envelope.into_data()
    }

    pub async fn submit_exam(&self, submission: &TestSubmission) -> Result<TestResult, ApiError> {
        let body =
            serde_json::to_value(submission).map_err(|e| ApiError::Decode(e.to_string()))?;
        let envelope: ApiEnvelope<TestResult> = self
            .request(Method::POST, "/test/submit", Some(&body))
            .await?;
        envelope.into_data()
    }

    /// The remote keys verification records by expertise *name*, so the
    /// area goes into the path percent-encoded.
    pub async fn verification_status(
        &self,
        expertise_area: &str,
    ) -> Result<VerificationStatus, ApiError> {
        let path = format!("/test/verification/{}", path_segment(expertise_area));
        let envelope: ApiEnvelope<VerificationStatus> =
            self.request(Method::GET, &path, None).await?;
        envelope.into_data()
    }
}

/// Encode a value as a single URL path segment. This is path encoding,
/// not form encoding: a space must become `%20`, never `+`.
fn path_segment(value: &str) -> String {
    utf8_percent_encode(value, NON_ALPHANUMERIC).to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn multi_word_areas_encode_spaces_as_percent20() {
        assert_eq!(path_segment("Web Design"), "Web%20Design");
        assert_eq!(path_segment("IT Services"), "IT%20Services");
    }

    #[test]
    fn reserved_characters_cannot_split_the_path() {
        assert_eq!(path_segment("A/B"), "A%2FB");
        assert_eq!(path_segment("Q&A?"), "Q%26A%3F");
        assert_eq!(path_segment("C+"), "C%2B");
    }
}
