//! Client-side application core for the TeenHustle marketplace.
//!
//! Everything the web shell decides on behalf of the user lives here:
//! the session store, the typed remote-API client, the profile-setup
//! wizard, the service-draft submitter, the verification exam engine,
//! and the result reconciler. Presentation stays in the shell.

pub mod api;
pub mod config;
pub mod error;
pub mod models;
pub mod session;
pub mod workflow;

pub use api::{ApiClient, MarketBackend};
pub use config::Config;
pub use error::{ApiError, ValidationError, WorkflowError};
pub use session::{Redirect, SessionStore, TokenStore};
