//! Service draft submission.
//!
//! Validates the draft locally (nothing is sent for a bad form), creates
//! the service remotely, and routes the outcome: an already-verified
//! hustler gets an immediately published service, everyone else gets a
//! pending draft plus a redirect into the verification exam.

use tracing::info;

use crate::api::services::{CreatedService, NewService};
use crate::api::MarketBackend;
use crate::error::{ValidationError, WorkflowError};
use crate::models::Service;
use crate::session::Redirect;

pub const TITLE_MAX: usize = 100;
pub const DESCRIPTION_MAX: usize = 1000;

/// Raw form input, price still unparsed the way a text field delivers it.
#[derive(Debug, Clone, Default)]
pub struct DraftForm {
    pub title: String,
    pub description: String,
    pub price: String,
    pub expertise_id: String,
    pub sub_category_id: Option<String>,
}

impl DraftForm {
    /// Client-side validation. Runs before any network call; the first
    /// failing field is reported.
    pub fn validate(&self) -> Result<NewService, ValidationError> {
        let title = self.title.trim();
        if title.is_empty() {
            return Err(ValidationError::new("title", "title is required"));
        }
        if title.chars().count() > TITLE_MAX {
            return Err(ValidationError::new(
                "title",
                format!("title must be at most {TITLE_MAX} characters"),
            ));
        }

        let description = self.description.trim();
        if description.is_empty() {
            return Err(ValidationError::new("description", "description is required"));
        }
        if description.chars().count() > DESCRIPTION_MAX {
            return Err(ValidationError::new(
                "description",
                format!("description must be at most {DESCRIPTION_MAX} characters"),
            ));
        }

        let price: f64 = self
            .price
            .trim()
            .parse()
            .map_err(|_| ValidationError::new("price", "price must be a number"))?;
        if !price.is_finite() || price < 0.0 {
            return Err(ValidationError::new("price", "price must not be negative"));
        }

        if self.expertise_id.trim().is_empty() {
            return Err(ValidationError::new("expertiseId", "expertise area is required"));
        }

        Ok(NewService {
            title: title.to_string(),
            description: description.to_string(),
            price,
            expertise_id: self.expertise_id.trim().to_string(),
            sub_category_id: self.sub_category_id.clone(),
        })
    }
}

/// Where a successful creation leaves the user.
#[derive(Debug, Clone)]
pub enum SubmitOutcome {
    /// The owner already holds a passing verification; the service is
    /// live immediately.
    Published { service: Option<Service> },
    /// Saved as pending; the exam must be passed before it goes live.
    NeedsVerification {
        service: Option<Service>,
        exam_redirect: Redirect,
    },
}

/// The created-vs-pending decision belongs to the remote side; this just
/// interprets its answer. A rejection leaves the form untouched so the
/// user can correct and resubmit.
pub async fn submit_draft<B: MarketBackend>(
    backend: &B,
    form: &DraftForm,
) -> Result<SubmitOutcome, WorkflowError> {
    let draft = form.validate()?;
    let created: CreatedService = backend.create_service(&draft).await?;

    if created.needs_verification {
        let exam_redirect = exam_route(&draft.expertise_id, draft.sub_category_id.as_deref());
        info!(expertise_id = %draft.expertise_id, "service saved pending verification");
        Ok(SubmitOutcome::NeedsVerification {
            service: created.service,
            exam_redirect,
        })
    } else {
        info!(expertise_id = %draft.expertise_id, "service published");
        Ok(SubmitOutcome::Published {
            service: created.service,
        })
    }
}

/// Exam route for a pending draft, carrying the marker the result screen
/// uses to know the attempt started from a saved service.
fn exam_route(expertise_id: &str, sub_category_id: Option<&str>) -> Redirect {
    let mut route = format!("/dashboard/hustler/test/{expertise_id}?serviceCreated=true");
    if let Some(sub) = sub_category_id {
        route.push_str("&subCategoryId=");
        route.push_str(sub);
    }
    Redirect(route)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn valid_form() -> DraftForm {
        DraftForm {
            title: "Math tutoring".into(),
            description: "Algebra and calculus for high schoolers".into(),
            price: "25".into(),
            expertise_id: "cat-tutor".into(),
            sub_category_id: None,
        }
    }

    #[test]
    fn valid_form_parses_price() {
        let draft = valid_form().validate().unwrap();
        assert_eq!(draft.price, 25.0);
    }

    #[test]
    fn empty_title_fails_before_any_network_call() {
        let form = DraftForm {
            title: "  ".into(),
            ..valid_form()
        };
        let err = form.validate().unwrap_err();
        assert_eq!(err.field, "title");
    }

    #[test]
    fn overlong_title_is_rejected() {
        let form = DraftForm {
            title: "x".repeat(TITLE_MAX + 1),
            ..valid_form()
        };
        assert_eq!(form.validate().unwrap_err().field, "title");
    }

    #[test]
    fn overlong_description_is_rejected() {
        let form = DraftForm {
            description: "x".repeat(DESCRIPTION_MAX + 1),
            ..valid_form()
        };
        assert_eq!(form.validate().unwrap_err().field, "description");
    }

    #[test]
    fn negative_and_unparseable_prices_are_rejected() {
        for bad in ["-1", "abc", ""] {
            let form = DraftForm {
                price: bad.into(),
                ..valid_form()
            };
            assert_eq!(form.validate().unwrap_err().field, "price", "price {bad:?}");
        }
    }

    #[test]
    fn missing_expertise_is_rejected() {
        let form = DraftForm {
            expertise_id: String::new(),
            ..valid_form()
        };
        assert_eq!(form.validate().unwrap_err().field, "expertiseId");
    }

    #[test]
    fn exam_route_carries_draft_marker_and_subcategory() {
        let redirect = exam_route("cat-tutor", Some("sub-lang"));
        assert_eq!(
            redirect.0,
            "/dashboard/hustler/test/cat-tutor?serviceCreated=true&subCategoryId=sub-lang"
        );
    }
}
