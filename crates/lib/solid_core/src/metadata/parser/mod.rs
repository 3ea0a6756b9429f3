// @zen-component: LDP-MetadataParsers
//
//! Parsers turning one HTTP header field into metadata.
//!
//! Each parser owns the header(s) it reads and only ever adds to the
//! metadata it is given. The metadata is moved into the parser and handed
//! back, so the caller keeps ownership across a sequence of parsers.

pub mod content_type;
pub mod link_type;
pub mod slug;

pub use content_type::ContentTypeParser;
pub use link_type::LinkTypeParser;
pub use slug::SlugParser;

use crate::handler::AsyncHandler;
use crate::http::HttpRequest;
use crate::metadata::RepresentationMetadata;

/// Input of a metadata parser: the request to read, the metadata to extend.
#[derive(Debug, Clone)]
pub struct MetadataParserInput {
    pub request: HttpRequest,
    pub metadata: RepresentationMetadata,
}

impl MetadataParserInput {
    pub fn new(request: HttpRequest, metadata: RepresentationMetadata) -> Self {
        Self { request, metadata }
    }
}

/// Object-safe metadata parser.
pub type MetadataParser = dyn AsyncHandler<MetadataParserInput, RepresentationMetadata>;

/// Split `input` on `separator`, ignoring separators inside `<...>` and
/// inside double-quoted strings. Segments are trimmed; empty ones dropped.
pub(crate) fn split_unquoted(input: &str, separator: char) -> Vec<&str> {
    let mut segments = Vec::new();
    let mut start = 0;
    let mut in_quotes = false;
    let mut in_angle = false;
    let mut escaped = false;

    for (i, c) in input.char_indices() {
        if escaped {
            escaped = false;
            continue;
        }
        match c {
            '\\' if in_quotes => escaped = true,
            '"' if !in_angle => in_quotes = !in_quotes,
            '<' if !in_quotes => in_angle = true,
            '>' if !in_quotes => in_angle = false,
            c if c == separator && !in_quotes && !in_angle => {
                segments.push(&input[start..i]);
                start = i + c.len_utf8();
            }
            _ => {}
        }
    }
    segments.push(&input[start..]);

    segments
        .into_iter()
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .collect()
}

/// Strip one pair of surrounding double quotes, if present.
pub(crate) fn unquote(value: &str) -> &str {
    value
        .strip_prefix('"')
        .and_then(|v| v.strip_suffix('"'))
        .unwrap_or(value)
}
