//! IRIs of the predicates used in request metadata.

pub const RDF_TYPE: &str = "http://www.w3.org/1999/02/22-rdf-syntax-ns#type";

/// Media type of a representation.
pub const CONTENT_TYPE: &str = "http://www.w3.org/ns/ma-ont#format";

/// Preferred name for a resource created through POST.
pub const HTTP_SLUG: &str = "http://www.w3.org/2011/http-headers#slug";

pub const XSD_STRING: &str = "http://www.w3.org/2001/XMLSchema#string";
