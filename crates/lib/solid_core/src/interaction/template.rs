//! Template rendering, implemented outside this crate.

use async_trait::async_trait;
use serde::Serialize;
use thiserror::Error;

#[derive(Debug, Error)]
#[error("Template error: {0}")]
pub struct TemplateError(pub String);

/// Renders markup from a typed context.
#[async_trait]
pub trait TemplateEngine<C: Serialize + Send + Sync>: Send + Sync {
    async fn render(&self, context: &C) -> Result<String, TemplateError>;
}

/// Context of the password reset email.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ResetLinkContext {
    pub reset_link: String,
}
