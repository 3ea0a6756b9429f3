// @zen-component: API-RequestContext
//
//! Request context middleware — who is asking, and what the headers declare.

use axum::{
    extract::{Request, State},
    middleware::Next,
    response::Response,
};
use solid_core::authentication::Credentials;
use solid_core::handler::{AsyncHandler, HandlerError};
use solid_core::http::HttpRequest;
use solid_core::metadata::RepresentationMetadata;
use solid_core::util::join_url;
use tracing::debug;

use crate::AppState;
use crate::error::AppError;

/// Credentials of the current request, stored in request extensions.
#[derive(Debug, Clone)]
pub struct RequestCredentials(pub Credentials);

/// Header metadata of the current request, stored in request extensions.
#[derive(Debug, Clone)]
pub struct RequestMetadata(pub RepresentationMetadata);

/// Axum middleware: runs the credentials extractor chain and the metadata
/// parsers, and injects [`RequestCredentials`] and [`RequestMetadata`] into
/// request extensions.
///
/// A request no extractor recognises is rejected with 401.
pub async fn extract_request_context(
    State(state): State<AppState>,
    mut request: Request,
    next: Next,
) -> Result<Response, AppError> {
    let view = HttpRequest::from_request(&request);

    let credentials = state
        .credentials_extractor
        .handle(view.clone())
        .await
        .map_err(|e| match e {
            HandlerError::Unsupported(_) => AppError::Unauthorized(e.message()),
            other => AppError::from(other),
        })?;

    let identifier = join_url(&[state.config.base_url.as_str(), view.uri().path()]);
    let metadata = state
        .metadata_extractor
        .extract_into(&view, RepresentationMetadata::new(identifier))
        .await?;

    debug!(
        web_id = credentials.web_id.as_deref().unwrap_or_default(),
        metadata = metadata.len(),
        "request context extracted"
    );

    let extensions = request.extensions_mut();
    extensions.insert(RequestCredentials(credentials));
    extensions.insert(RequestMetadata(metadata));

    Ok(next.run(request).await)
}
