// @zen-component: IDP-Interaction
//
//! Identity provider interactions driven by form submissions.

pub mod account_store;
pub mod email;
pub mod form;
pub mod forgot_password;
pub mod template;

pub use account_store::{AccountStore, AccountStoreError};
pub use email::{EmailArgs, EmailError, EmailSender, send_safe};
pub use form::FormSubmission;
pub use forgot_password::{ForgotPasswordHandler, ForgotPasswordHandlerArgs};
pub use template::{ResetLinkContext, TemplateEngine, TemplateError};

use serde::Serialize;

use crate::http::HttpRequest;

/// A submitted interaction form together with the request that carried it.
#[derive(Debug, Clone)]
pub struct InteractionInput {
    pub request: HttpRequest,
    pub submission: FormSubmission,
}

impl InteractionInput {
    pub fn new(request: HttpRequest, submission: FormSubmission) -> Self {
        Self {
            request,
            submission,
        }
    }
}

/// Outcome of an interaction, rendered by the protocol layer.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "type", rename_all = "lowercase")]
#[non_exhaustive]
pub enum InteractionResult {
    /// Show a response page built from `details`.
    Response { details: serde_json::Value },
}
