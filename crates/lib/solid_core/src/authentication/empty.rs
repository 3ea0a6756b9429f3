//! Extractor for requests that carry no authorization at all.

use async_trait::async_trait;
use http::header::AUTHORIZATION;

use super::Credentials;
use crate::handler::{AsyncHandler, HandlerResult, NotSupported};
use crate::http::HttpRequest;

/// Yields empty credentials (the public agent) when no `Authorization`
/// header is present. Declines otherwise, so a request with an unreadable
/// authorization header is never silently downgraded to public access.
#[derive(Debug, Clone, Default)]
pub struct EmptyCredentialsExtractor;

impl EmptyCredentialsExtractor {
    pub fn new() -> Self {
        Self
    }
}

#[async_trait]
impl AsyncHandler<HttpRequest, Credentials> for EmptyCredentialsExtractor {
    async fn can_handle(&self, request: &HttpRequest) -> Result<(), NotSupported> {
        if request.headers().contains_key(AUTHORIZATION) {
            return Err(NotSupported::new(
                "Authorization header is present, refusing empty credentials.",
            ));
        }
        Ok(())
    }

    async fn handle(&self, _request: HttpRequest) -> HandlerResult<Credentials> {
        Ok(Credentials::default())
    }
}
