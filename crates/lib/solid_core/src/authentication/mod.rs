// @zen-component: AUTH-CredentialsExtraction
//
//! Credentials extraction: who the request claims to be.
//!
//! Every extractor is an [`AsyncHandler`] from an [`HttpRequest`] to
//! [`Credentials`]. Extractors are composed with a [`WaterfallHandler`], so
//! an extractor that does not recognise the request declines in
//! `can_handle` and the next one is tried.

pub mod credentials;
pub mod empty;
pub mod unsecure_constant;
pub mod unsecure_webid;

use std::sync::Arc;

pub use credentials::Credentials;
pub use empty::EmptyCredentialsExtractor;
pub use unsecure_constant::UnsecureConstantCredentialsExtractor;
pub use unsecure_webid::UnsecureWebIdExtractor;

use crate::handler::{AsyncHandler, WaterfallHandler};
use crate::http::HttpRequest;

/// Object-safe credentials extractor.
pub type CredentialsExtractor = dyn AsyncHandler<HttpRequest, Credentials>;

/// Build the default extractor chain.
///
/// Order: constant agent (only when `unsecure_agent` is set) → `WebID`
/// authorization scheme → empty credentials for requests without an
/// `Authorization` header.
pub fn credentials_chain(
    unsecure_agent: Option<Credentials>,
) -> WaterfallHandler<HttpRequest, Credentials> {
    let mut extractors: Vec<Arc<CredentialsExtractor>> = Vec::new();
    if let Some(agent) = unsecure_agent {
        extractors.push(Arc::new(UnsecureConstantCredentialsExtractor::new(agent)));
    }
    extractors.push(Arc::new(UnsecureWebIdExtractor::new()));
    extractors.push(Arc::new(EmptyCredentialsExtractor::new()));
    WaterfallHandler::new(extractors)
}
