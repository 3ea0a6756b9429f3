//! Extractor trusting a WebID sent in the `Authorization` header.

use async_trait::async_trait;
use http::header::AUTHORIZATION;
use tracing::info;

use super::Credentials;
use crate::handler::{AsyncHandler, HandlerResult, NotSupported};
use crate::http::HttpRequest;

const SCHEME: &str = "WebID ";

/// Reads `Authorization: WebID <id>` and takes the identifier at face value.
///
/// No proof of possession is checked. Development use only.
#[derive(Debug, Clone, Default)]
pub struct UnsecureWebIdExtractor;

impl UnsecureWebIdExtractor {
    pub fn new() -> Self {
        Self
    }

    fn web_id(request: &HttpRequest) -> Option<&str> {
        request
            .header(AUTHORIZATION)?
            .strip_prefix(SCHEME)
            .map(str::trim)
            .filter(|id| !id.is_empty())
    }
}

#[async_trait]
impl AsyncHandler<HttpRequest, Credentials> for UnsecureWebIdExtractor {
    async fn can_handle(&self, request: &HttpRequest) -> Result<(), NotSupported> {
        match Self::web_id(request) {
            Some(_) => Ok(()),
            None => Err(NotSupported::new("No WebID Authorization header specified.")),
        }
    }

    async fn handle(&self, request: HttpRequest) -> HandlerResult<Credentials> {
        let web_id = Self::web_id(&request)
            .ok_or_else(|| NotSupported::new("No WebID Authorization header specified."))?;
        info!(web_id, "Agent unsecurely claims to be {web_id}");
        Ok(Credentials::web_id(web_id))
    }
}
