//! Outgoing email, best effort.

use std::sync::Arc;

use async_trait::async_trait;
use thiserror::Error;
use tracing::{debug, warn};

#[derive(Debug, Error)]
#[error("Email error: {0}")]
pub struct EmailError(pub String);

/// One message to deliver.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EmailArgs {
    pub recipient: String,
    pub subject: String,
    pub text: String,
    pub html: String,
}

/// Mail transport, implemented outside this crate.
#[async_trait]
pub trait EmailSender: Send + Sync {
    async fn send(&self, email: EmailArgs) -> Result<(), EmailError>;
}

/// Send `email` in the background (fire-and-forget).
///
/// Returns immediately. Delivery failures are logged and never reach the
/// caller. Must be called from within a tokio runtime.
pub fn send_safe(sender: &Arc<dyn EmailSender>, email: EmailArgs) {
    let sender = Arc::clone(sender);
    tokio::spawn(async move {
        let subject = email.subject.clone();
        match sender.send(email).await {
            Ok(()) => debug!(subject = %subject, "email sent"),
            Err(e) => warn!(subject = %subject, "failed to send email: {e}"),
        }
    });
}
