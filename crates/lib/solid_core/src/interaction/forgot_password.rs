// @zen-component: IDP-ForgotPassword
//
//! Password reset requests.
//!
//! The response never reveals whether the email belongs to an account: a
//! known address, an unknown address and a storage failure all produce the
//! same result. Only a malformed submission is reported back.

use std::sync::Arc;

use async_trait::async_trait;
use tracing::{debug, info};

use super::{
    AccountStore, EmailArgs, EmailSender, InteractionInput, InteractionResult, ResetLinkContext,
    TemplateEngine, send_safe,
};
use crate::handler::{AsyncHandler, HandlerError, HandlerResult};
use crate::util::join_url;

const RESET_PATH: &str = "/resetpassword/";
const SUBJECT: &str = "Reset your password";

/// Collaborators and settings of a [`ForgotPasswordHandler`].
pub struct ForgotPasswordHandlerArgs {
    /// Public base URL of the server.
    pub base_url: String,
    /// Path of the identity provider below `base_url`.
    pub idp_path: String,
    pub account_store: Arc<dyn AccountStore>,
    pub template_engine: Arc<dyn TemplateEngine<ResetLinkContext>>,
    pub email_sender: Arc<dyn EmailSender>,
}

/// Handles submissions of the "forgot password" form.
pub struct ForgotPasswordHandler {
    base_url: String,
    idp_path: String,
    account_store: Arc<dyn AccountStore>,
    template_engine: Arc<dyn TemplateEngine<ResetLinkContext>>,
    email_sender: Arc<dyn EmailSender>,
}

impl ForgotPasswordHandler {
    pub fn new(args: ForgotPasswordHandlerArgs) -> Self {
        Self {
            base_url: args.base_url,
            idp_path: args.idp_path,
            account_store: args.account_store,
            template_engine: args.template_engine,
            email_sender: args.email_sender,
        }
    }

    /// Link a user follows to reset the password for `record_id`.
    pub fn reset_link(&self, record_id: &str) -> String {
        join_url(&[
            self.base_url.as_str(),
            self.idp_path.as_str(),
            RESET_PATH,
            record_id,
        ])
    }

    /// Render and dispatch the reset email. Returns once the email is handed
    /// to the sender, not once it is delivered.
    async fn send_reset_mail(&self, record_id: &str, email: &str) -> HandlerResult<()> {
        let reset_link = self.reset_link(record_id);
        let html = self
            .template_engine
            .render(&ResetLinkContext {
                reset_link: reset_link.clone(),
            })
            .await
            .map_err(|e| HandlerError::Internal(e.to_string()))?;

        send_safe(
            &self.email_sender,
            EmailArgs {
                recipient: email.to_string(),
                subject: SUBJECT.to_string(),
                text: format!("To reset your password, go to this link: {reset_link}"),
                html,
            },
        );
        Ok(())
    }

    fn uniform_response(email: &str) -> InteractionResult {
        InteractionResult::Response {
            details: serde_json::json!({ "email": email }),
        }
    }
}

#[async_trait]
impl AsyncHandler<InteractionInput, InteractionResult> for ForgotPasswordHandler {
    async fn handle(&self, input: InteractionInput) -> HandlerResult<InteractionResult> {
        let email = input
            .submission
            .single_string("email")
            .ok_or_else(|| HandlerError::BadRequest("Email required".into()))?;

        match self.account_store.generate_forgot_password_record(email).await {
            Ok(record_id) => {
                if let Err(e) = self.send_reset_mail(&record_id, email).await {
                    debug!("reset email not sent: {e}");
                } else {
                    info!("password reset requested");
                }
            }
            // Same response as success so account existence is not revealed.
            Err(e) => debug!("no forgot password record generated: {e}"),
        }

        Ok(Self::uniform_response(email))
    }
}
