//! Extractor that authenticates a fixed agent, for development setups.

use async_trait::async_trait;
use tracing::info;

use super::Credentials;
use crate::handler::{AsyncHandler, HandlerResult};
use crate::http::HttpRequest;

/// Returns the same configured agent for every request, without looking at
/// the request at all.
///
/// Anyone reaching the server is treated as that agent. Only wire this into
/// non-production configurations.
#[derive(Debug, Clone)]
pub struct UnsecureConstantCredentialsExtractor {
    agent: Credentials,
}

impl UnsecureConstantCredentialsExtractor {
    /// `agent` is either a bare WebID or complete credentials.
    pub fn new(agent: impl Into<Credentials>) -> Self {
        Self {
            agent: agent.into(),
        }
    }

    pub fn agent(&self) -> &Credentials {
        &self.agent
    }
}

#[async_trait]
impl AsyncHandler<HttpRequest, Credentials> for UnsecureConstantCredentialsExtractor {
    async fn handle(&self, _request: HttpRequest) -> HandlerResult<Credentials> {
        info!(
            web_id = self.agent.web_id.as_deref().unwrap_or_default(),
            "Agent unsecurely claims to be {}",
            self.agent.web_id.as_deref().unwrap_or("<none>")
        );
        Ok(self.agent.clone())
    }
}
