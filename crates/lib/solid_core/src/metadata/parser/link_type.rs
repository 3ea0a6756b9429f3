//! `Link: <IRI>; rel="type"` → `rdf:type`.

use async_trait::async_trait;
use http::header::LINK;
use tracing::debug;

use super::{MetadataParserInput, split_unquoted, unquote};
use crate::handler::{AsyncHandler, HandlerResult};
use crate::metadata::vocabulary::RDF_TYPE;
use crate::metadata::{RepresentationMetadata, Term};

/// Adds the target of every `rel="type"` link as a declared type.
///
/// Entries that are not `<IRI>` followed by `;` parameters, and entries whose
/// `rel` is not `type`, are skipped without error. Never fails.
#[derive(Debug, Clone, Default)]
pub struct LinkTypeParser;

impl LinkTypeParser {
    pub fn new() -> Self {
        Self
    }

    fn parse_line(line: &str, metadata: &mut RepresentationMetadata) {
        for entry in split_unquoted(line, ',') {
            match parse_entry(entry) {
                Some(target) => {
                    metadata.add(RDF_TYPE, Term::named_node(target));
                }
                None => debug!(entry, "ignoring link entry"),
            }
        }
    }
}

/// The target IRI of a `rel="type"` link entry, if `entry` is one.
fn parse_entry(entry: &str) -> Option<&str> {
    let rest = entry.strip_prefix('<')?;
    let end = rest.find('>')?;
    let target = rest[..end].trim();
    let params = rest[end + 1..].trim_start();
    if target.is_empty() || !(params.is_empty() || params.starts_with(';')) {
        return None;
    }

    let is_type = split_unquoted(params, ';').into_iter().any(|param| {
        let (key, value) = param.split_once('=').unwrap_or((param, ""));
        key.trim().eq_ignore_ascii_case("rel") && unquote(value.trim()) == "type"
    });
    is_type.then_some(target)
}

#[async_trait]
impl AsyncHandler<MetadataParserInput, RepresentationMetadata> for LinkTypeParser {
    async fn handle(&self, input: MetadataParserInput) -> HandlerResult<RepresentationMetadata> {
        let MetadataParserInput {
            request,
            mut metadata,
        } = input;
        for line in request.header_values(LINK) {
            Self::parse_line(line, &mut metadata);
        }
        Ok(metadata)
    }
}

#[cfg(test)]
mod tests {
    use http::{HeaderMap, HeaderValue, Method, Uri};

    use super::*;
    use crate::http::HttpRequest;

    fn input(links: &[&'static str]) -> MetadataParserInput {
        let mut headers = HeaderMap::new();
        for &link in links {
            headers.append(LINK, HeaderValue::from_static(link));
        }
        MetadataParserInput::new(
            HttpRequest::new(Method::GET, Uri::from_static("/"), headers),
            RepresentationMetadata::new("http://test.com/"),
        )
    }

    async fn parse(links: &[&'static str]) -> RepresentationMetadata {
        LinkTypeParser::new().handle(input(links)).await.unwrap()
    }

    fn types(metadata: &RepresentationMetadata) -> Vec<&str> {
        metadata.get_all(RDF_TYPE).iter().map(Term::value).collect()
    }

    #[tokio::test]
    async fn does_nothing_without_link_headers() {
        let metadata = parse(&[]).await;
        assert!(metadata.quads().is_empty());
    }

    #[tokio::test]
    async fn stores_type_links() {
        let metadata = parse(&[r#"<http://test.com/type>;rel="type""#]).await;
        assert_eq!(metadata.quads().len(), 1);
        assert_eq!(
            metadata.get(RDF_TYPE).map(Term::value),
            Some("http://test.com/type")
        );
        assert!(metadata.get(RDF_TYPE).unwrap().is_named_node());
    }

    #[tokio::test]
    async fn supports_multiple_link_headers() {
        let metadata = parse(&[
            r#"<http://test.com/typeA>;rel="type""#,
            "<http://test.com/typeB>;rel=type",
        ])
        .await;
        assert_eq!(metadata.quads().len(), 2);
        assert_eq!(types(&metadata), vec!["http://test.com/typeA", "http://test.com/typeB"]);
    }

    #[tokio::test]
    async fn supports_multiple_values_in_one_header() {
        let metadata =
            parse(&[r#"<http://test.com/typeA>;rel="type" , <http://test.com/typeB>;rel=type"#])
                .await;
        assert_eq!(metadata.quads().len(), 2);
        assert_eq!(types(&metadata), vec!["http://test.com/typeA", "http://test.com/typeB"]);
    }

    #[tokio::test]
    async fn keeps_entry_order_then_line_order() {
        let metadata = parse(&[
            "<http://test.com/a>;rel=type, <http://test.com/b>; rel=\"type\"",
            "<http://test.com/c> ; rel = type",
        ])
        .await;
        assert_eq!(
            types(&metadata),
            vec!["http://test.com/a", "http://test.com/b", "http://test.com/c"]
        );
    }

    #[tokio::test]
    async fn ignores_invalid_link_headers() {
        let metadata = parse(&[r#"http://test.com/type;rel="type""#]).await;
        assert!(metadata.quads().is_empty());

        let metadata = parse(&[
            r#"<http://test.com/type>junk;rel="type""#,
            r#"<http://test.com/type;rel="type""#,
            r#"<>;rel="type""#,
        ])
        .await;
        assert!(metadata.quads().is_empty());
    }

    #[tokio::test]
    async fn ignores_non_type_link_headers() {
        let metadata =
            parse(&[r#"<http://test.com/typeA>;rel="notype" , <http://test.com/typeB>"#]).await;
        assert!(metadata.quads().is_empty());

        let metadata = parse(&[r#"<http://test.com/typeA>;rel="type other""#]).await;
        assert!(metadata.quads().is_empty());
    }

    #[tokio::test]
    async fn valid_entries_survive_invalid_neighbours() {
        let metadata = parse(&[
            r#"garbage, <http://test.com/typeA>;rel="type", <http://test.com/x>;rel=next"#,
        ])
        .await;
        assert_eq!(types(&metadata), vec!["http://test.com/typeA"]);
    }

    #[tokio::test]
    async fn comma_inside_quoted_parameter_does_not_split() {
        let metadata =
            parse(&[r#"<http://test.com/typeA>;title="a, b";rel="type""#]).await;
        assert_eq!(types(&metadata), vec!["http://test.com/typeA"]);
    }

    #[tokio::test]
    async fn keeps_existing_metadata() {
        let mut input = input(&["<http://test.com/typeA>;rel=type"]);
        input.metadata.add(RDF_TYPE, Term::named_node("http://test.com/existing"));
        let metadata = LinkTypeParser::new().handle(input).await.unwrap();
        assert_eq!(types(&metadata), vec!["http://test.com/existing", "http://test.com/typeA"]);
    }
}
