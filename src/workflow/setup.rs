//! Profile-setup wizard.
//!
//! Walks a fresh account through role selection and, for hustlers, an
//! expertise category and subcategory pick, then submits the lot:
//!
//! `RoleSelect → CategorySelect → SubcategorySelect → Submitting → Done`
//!
//! Students and sellers jump straight from role selection to submission;
//! a category with no subcategories skips the subcategory step. Going
//! back discards only the selection of the step being left.

use tracing::info;

use crate::api::MarketBackend;
use crate::error::WorkflowError;
use crate::models::{Catalog, Identity, Role, SetupProfile};
use crate::session::{Redirect, SessionStore};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WizardStep {
    RoleSelect,
    CategorySelect,
    SubcategorySelect,
    Submitting,
    Done,
}

/// How the wizard was entered: either it runs, or the profile is already
/// complete and the caller should go straight to the dashboard.
pub enum WizardEntry {
    Bypass(Redirect),
    Wizard(SetupWizard),
}

pub struct SetupWizard {
    catalog: Catalog,
    step: WizardStep,
    role: Option<Role>,
    category_id: Option<String>,
    sub_category_id: Option<String>,
    redirect: Option<Redirect>,
    last_error: Option<String>,
}

impl SetupWizard {
    /// Session-gated entry: the wizard only exists for a resolved
    /// identity. An unresolved session is not an anonymous wizard run.
    pub fn begin_for<B: MarketBackend>(
        session: &SessionStore<B>,
        catalog: Catalog,
    ) -> Result<WizardEntry, WorkflowError> {
        let identity = session
            .current_identity()
            .ok_or(WorkflowError::NotAuthenticated)?;
        Self::begin(identity, catalog)
    }

    /// Entry guard: requires a resolved identity. A complete profile
    /// bypasses the wizard entirely.
    pub fn begin(identity: &Identity, catalog: Catalog) -> Result<WizardEntry, WorkflowError> {
        if identity.is_profile_complete {
            let role = identity.role.ok_or(WorkflowError::ProfileAlreadyComplete)?;
            return Ok(WizardEntry::Bypass(Redirect(role.dashboard())));
        }

        Ok(WizardEntry::Wizard(SetupWizard {
            catalog,
            step: WizardStep::RoleSelect,
            role: None,
            category_id: None,
            sub_category_id: None,
            redirect: None,
            last_error: None,
        }))
    }

    pub fn step(&self) -> WizardStep {
        self.step
    }

    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    pub fn last_error(&self) -> Option<&str> {
        self.last_error.as_deref()
    }

    /// The redirect handed back by a successful submission.
    pub fn redirect_to(&self) -> Option<&Redirect> {
        self.redirect.as_ref()
    }

    /// Only hustlers need an expertise category; everyone else is ready
    /// to submit immediately.
    pub fn choose_role(&mut self, role: Role) -> Result<(), WorkflowError> {
        if self.step != WizardStep::RoleSelect {
            return Err(WorkflowError::InvalidStep);
        }
        self.role = Some(role);
        self.step = match role {
            Role::Hustler => WizardStep::CategorySelect,
            Role::Student | Role::Seller => WizardStep::Submitting,
        };
        Ok(())
    }

    pub fn choose_category(&mut self, category_id: &str) -> Result<(), WorkflowError> {
        if self.step != WizardStep::CategorySelect {
            return Err(WorkflowError::InvalidStep);
        }
        let category = self
            .catalog
            .category(category_id)
            .ok_or_else(|| WorkflowError::UnknownCategory(category_id.to_string()))?;
        let has_subcategories = !category.subcategories.is_empty();

        self.category_id = Some(category.id.clone());
        self.step = if has_subcategories {
            WizardStep::SubcategorySelect
        } else {
            WizardStep::Submitting
        };
        Ok(())
    }

    pub fn choose_subcategory(&mut self, sub_category_id: &str) -> Result<(), WorkflowError> {
        if self.step != WizardStep::SubcategorySelect {
            return Err(WorkflowError::InvalidStep);
        }
        let category_id = self.category_id.as_deref().ok_or(WorkflowError::InvalidStep)?;
        let sub = self
            .catalog
            .subcategory(category_id, sub_category_id)
            .ok_or_else(|| WorkflowError::UnknownSubcategory(sub_category_id.to_string()))?;

        self.sub_category_id = Some(sub.id.clone());
        self.step = WizardStep::Submitting;
        Ok(())
    }

    /// Step back one screen, dropping only the selection belonging to
    /// the screen being left. Not available once submission has begun.
    pub fn back(&mut self) -> Result<(), WorkflowError> {
        match self.step {
            WizardStep::CategorySelect => {
                self.category_id = None;
                self.step = WizardStep::RoleSelect;
                Ok(())
            }
            WizardStep::SubcategorySelect => {
                self.sub_category_id = None;
                self.step = WizardStep::CategorySelect;
                Ok(())
            }
            _ => Err(WorkflowError::InvalidStep),
        }
    }

    /// The payload the submission step will send.
    pub fn payload(&self) -> Result<SetupProfile, WorkflowError> {
        if self.step != WizardStep::Submitting {
            return Err(WorkflowError::InvalidStep);
        }
        let role = self.role.ok_or(WorkflowError::InvalidStep)?;

        let mut payload = SetupProfile {
            role: Some(role),
            ..Default::default()
        };
        if let Some(category_id) = &self.category_id {
            payload.category = self.catalog.category_name(category_id).map(str::to_string);
            payload.category_id = Some(category_id.clone());
            if let Some(sub_id) = &self.sub_category_id {
                payload.sub_category = self
                    .catalog
                    .subcategory(category_id, sub_id)
                    .map(|s| s.name.clone());
                payload.sub_category_id = Some(sub_id.clone());
            }
        }
        Ok(payload)
    }

    /// Submit the selection. On failure the wizard stays in `Submitting`
    /// with the error recorded so the user can retry; it never reverts
    /// to an earlier screen on its own.
    pub async fn submit<B: MarketBackend>(
        &mut self,
        session: &mut SessionStore<B>,
    ) -> Result<Redirect, WorkflowError> {
        let payload = self.payload()?;
        match session.setup_profile(&payload).await {
            Ok(redirect) => {
                info!(role = ?payload.role, "profile setup complete");
                self.last_error = None;
                self.redirect = Some(redirect.clone());
                self.step = WizardStep::Done;
                Ok(redirect)
            }
            Err(err) => {
                self.last_error = Some(err.to_string());
                Err(err.into())
            }
        }
    }
}
