//! Read-only view of an incoming HTTP request.

use std::sync::Arc;

use http::header::AsHeaderName;
use http::{HeaderMap, Method, Request, Uri};

#[derive(Debug)]
struct RequestHead {
    method: Method,
    uri: Uri,
    headers: HeaderMap,
}

/// Method, URI and header fields of a request. Cloning shares the same head.
///
/// HTTP allows a field to be sent on several physical lines; all of them are
/// kept, in arrival order.
#[derive(Debug, Clone)]
pub struct HttpRequest {
    head: Arc<RequestHead>,
}

impl HttpRequest {
    pub fn new(method: Method, uri: Uri, headers: HeaderMap) -> Self {
        Self {
            head: Arc::new(RequestHead {
                method,
                uri,
                headers,
            }),
        }
    }

    /// Build a view from request parts. The parts are copied, not consumed.
    pub fn from_parts(parts: &http::request::Parts) -> Self {
        Self::new(parts.method.clone(), parts.uri.clone(), parts.headers.clone())
    }

    /// Build a view from a full request, ignoring the body.
    pub fn from_request<B>(request: &Request<B>) -> Self {
        Self::new(
            request.method().clone(),
            request.uri().clone(),
            request.headers().clone(),
        )
    }

    pub fn method(&self) -> &Method {
        &self.head.method
    }

    pub fn uri(&self) -> &Uri {
        &self.head.uri
    }

    pub fn headers(&self) -> &HeaderMap {
        &self.head.headers
    }

    /// Every line of header `name` in arrival order.
    ///
    /// Lines containing bytes outside visible ASCII are skipped.
    pub fn header_values<K: AsHeaderName>(&self, name: K) -> Vec<&str> {
        self.head
            .headers
            .get_all(name)
            .iter()
            .filter_map(|value| value.to_str().ok())
            .collect()
    }

    /// The first line of header `name`.
    pub fn header<K: AsHeaderName>(&self, name: K) -> Option<&str> {
        self.head.headers.get(name).and_then(|v| v.to_str().ok())
    }
}
