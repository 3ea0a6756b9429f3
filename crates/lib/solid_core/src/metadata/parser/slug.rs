//! `Slug` → preferred name of a resource created through POST.

use async_trait::async_trait;
use tracing::debug;

use super::MetadataParserInput;
use crate::handler::{AsyncHandler, HandlerError, HandlerResult};
use crate::metadata::vocabulary::HTTP_SLUG;
use crate::metadata::{RepresentationMetadata, Term};

const SLUG: &str = "slug";

/// Stores the `Slug` header. A request may carry at most one.
#[derive(Debug, Clone, Default)]
pub struct SlugParser;

impl SlugParser {
    pub fn new() -> Self {
        Self
    }
}

#[async_trait]
impl AsyncHandler<MetadataParserInput, RepresentationMetadata> for SlugParser {
    async fn handle(&self, input: MetadataParserInput) -> HandlerResult<RepresentationMetadata> {
        let MetadataParserInput {
            request,
            mut metadata,
        } = input;
        let values = request.header_values(SLUG);
        match values.as_slice() {
            [] => {}
            [slug] => {
                debug!(slug, "request has slug header");
                metadata.set(HTTP_SLUG, Term::literal(*slug));
            }
            _ => {
                return Err(HandlerError::BadRequest(
                    "Request has multiple Slug headers".into(),
                ));
            }
        }
        Ok(metadata)
    }
}
