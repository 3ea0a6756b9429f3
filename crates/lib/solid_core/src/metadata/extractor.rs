//! Runs every metadata parser over a request.

use std::sync::Arc;

use tracing::debug;

use super::RepresentationMetadata;
use super::parser::{
    ContentTypeParser, LinkTypeParser, MetadataParser, MetadataParserInput, SlugParser,
};
use crate::handler::{AsyncHandler, HandlerResult};
use crate::http::HttpRequest;

/// Ordered list of metadata parsers applied one after the other.
///
/// Unlike a waterfall, every parser gets a turn: each one reads its own
/// header. Parsers that decline in `can_handle` are skipped; the first
/// failure of an applicable parser aborts extraction.
pub struct MetadataExtractor {
    parsers: Vec<Arc<MetadataParser>>,
}

impl MetadataExtractor {
    pub fn new(parsers: Vec<Arc<MetadataParser>>) -> Self {
        Self { parsers }
    }

    /// Fresh metadata about the request URI, filled by every parser.
    pub async fn extract(&self, request: &HttpRequest) -> HandlerResult<RepresentationMetadata> {
        let metadata = RepresentationMetadata::new(request.uri().to_string());
        self.extract_into(request, metadata).await
    }

    /// Run every parser over `request`, adding to existing `metadata`.
    pub async fn extract_into(
        &self,
        request: &HttpRequest,
        mut metadata: RepresentationMetadata,
    ) -> HandlerResult<RepresentationMetadata> {
        for (index, parser) in self.parsers.iter().enumerate() {
            let input = MetadataParserInput::new(request.clone(), metadata);
            if let Err(reason) = parser.can_handle(&input).await {
                debug!(index, %reason, "metadata parser skipped");
                metadata = input.metadata;
                continue;
            }
            metadata = parser.handle(input).await?;
        }
        Ok(metadata)
    }
}

impl Default for MetadataExtractor {
    /// Slug, content type and link type parsers.
    fn default() -> Self {
        Self::new(vec![
            Arc::new(SlugParser::new()),
            Arc::new(ContentTypeParser::new()),
            Arc::new(LinkTypeParser::new()),
        ])
    }
}
