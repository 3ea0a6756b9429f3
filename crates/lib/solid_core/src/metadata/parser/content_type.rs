//! `Content-Type` → media type of the representation.

use async_trait::async_trait;
use http::header::CONTENT_TYPE;

use super::MetadataParserInput;
use crate::handler::{AsyncHandler, HandlerResult};
use crate::metadata::RepresentationMetadata;

/// Stores the media type of the body, without parameters.
#[derive(Debug, Clone, Default)]
pub struct ContentTypeParser;

impl ContentTypeParser {
    pub fn new() -> Self {
        Self
    }
}

#[async_trait]
impl AsyncHandler<MetadataParserInput, RepresentationMetadata> for ContentTypeParser {
    async fn handle(&self, input: MetadataParserInput) -> HandlerResult<RepresentationMetadata> {
        let MetadataParserInput {
            request,
            mut metadata,
        } = input;
        if let Some(value) = request.header(CONTENT_TYPE) {
            let media_type = value.split(';').next().unwrap_or_default().trim();
            if !media_type.is_empty() {
                metadata.set_content_type(media_type.to_ascii_lowercase());
            }
        }
        Ok(metadata)
    }
}
