//! RDF terms and quads, compared by value.

use std::fmt;

use super::vocabulary::XSD_STRING;

/// An IRI used as subject or predicate.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct NamedNode(String);

impl NamedNode {
    pub fn new(iri: impl Into<String>) -> Self {
        Self(iri.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for NamedNode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "<{}>", self.0)
    }
}

impl From<&str> for NamedNode {
    fn from(iri: &str) -> Self {
        Self::new(iri)
    }
}

impl From<String> for NamedNode {
    fn from(iri: String) -> Self {
        Self(iri)
    }
}

/// Object position of a triple.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Term {
    NamedNode(NamedNode),
    Literal { value: String, datatype: NamedNode },
}

impl Term {
    pub fn named_node(iri: impl Into<String>) -> Self {
        Term::NamedNode(NamedNode::new(iri))
    }

    /// A plain `xsd:string` literal.
    pub fn literal(value: impl Into<String>) -> Self {
        Term::Literal {
            value: value.into(),
            datatype: NamedNode::new(XSD_STRING),
        }
    }

    /// The lexical value: the IRI of a named node or the literal's text.
    pub fn value(&self) -> &str {
        match self {
            Term::NamedNode(node) => node.as_str(),
            Term::Literal { value, .. } => value,
        }
    }

    pub fn is_named_node(&self) -> bool {
        matches!(self, Term::NamedNode(_))
    }
}

impl fmt::Display for Term {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Term::NamedNode(node) => node.fmt(f),
            Term::Literal { value, datatype } => {
                f.write_str("\"")?;
                write_escaped(f, value)?;
                write!(f, "\"^^{datatype}")
            }
        }
    }
}

/// N-Triples string escaping. Non-ASCII characters are written as is.
fn write_escaped(f: &mut fmt::Formatter<'_>, value: &str) -> fmt::Result {
    for c in value.chars() {
        match c {
            '"' => f.write_str("\\\"")?,
            '\\' => f.write_str("\\\\")?,
            '\n' => f.write_str("\\n")?,
            '\r' => f.write_str("\\r")?,
            '\t' => f.write_str("\\t")?,
            '\u{8}' => f.write_str("\\b")?,
            '\u{c}' => f.write_str("\\f")?,
            c => write!(f, "{c}")?,
        }
    }
    Ok(())
}

impl From<NamedNode> for Term {
    fn from(node: NamedNode) -> Self {
        Term::NamedNode(node)
    }
}

/// One `(subject, predicate, object)` fact.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Quad {
    pub subject: NamedNode,
    pub predicate: NamedNode,
    pub object: Term,
}

impl fmt::Display for Quad {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {} {} .", self.subject, self.predicate, self.object)
    }
}
