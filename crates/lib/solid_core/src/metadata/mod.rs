// @zen-component: LDP-RepresentationMetadata
//
//! Semantic metadata of a request or resource.
//!
//! [`RepresentationMetadata`] is a predicate-indexed multimap of RDF terms
//! about a single subject. Values of one predicate stay in insertion order,
//! which for header-derived metadata is the order the header lines arrived.

pub mod extractor;
pub mod parser;
pub mod term;
pub mod vocabulary;

pub use extractor::MetadataExtractor;
pub use term::{NamedNode, Quad, Term};

use vocabulary::CONTENT_TYPE;

/// Metadata about one subject, grouped by predicate.
///
/// Predicates are kept in the order they were first used. An identical
/// `(predicate, value)` pair is stored at most once.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RepresentationMetadata {
    identifier: NamedNode,
    entries: Vec<(NamedNode, Vec<Term>)>,
}

impl RepresentationMetadata {
    /// Empty metadata about `identifier`.
    pub fn new(identifier: impl Into<NamedNode>) -> Self {
        Self {
            identifier: identifier.into(),
            entries: Vec::new(),
        }
    }

    pub fn identifier(&self) -> &NamedNode {
        &self.identifier
    }

    /// Move every stored fact to a new subject.
    pub fn set_identifier(&mut self, identifier: impl Into<NamedNode>) {
        self.identifier = identifier.into();
    }

    fn values(&self, predicate: &NamedNode) -> Option<&Vec<Term>> {
        self.entries
            .iter()
            .find(|(p, _)| p == predicate)
            .map(|(_, values)| values)
    }

    fn values_mut(&mut self, predicate: NamedNode) -> &mut Vec<Term> {
        let index = match self.entries.iter().position(|(p, _)| *p == predicate) {
            Some(index) => index,
            None => {
                self.entries.push((predicate, Vec::new()));
                self.entries.len() - 1
            }
        };
        &mut self.entries[index].1
    }

    /// Add a value. Returns `false` when the identical triple already exists.
    pub fn add(&mut self, predicate: impl Into<NamedNode>, value: Term) -> bool {
        let values = self.values_mut(predicate.into());
        if values.contains(&value) {
            return false;
        }
        values.push(value);
        true
    }

    /// Add several values in order.
    pub fn add_all(
        &mut self,
        predicate: impl Into<NamedNode>,
        values: impl IntoIterator<Item = Term>,
    ) {
        let predicate = predicate.into();
        for value in values {
            self.add(predicate.clone(), value);
        }
    }

    /// Remove one value. Returns whether anything was removed.
    pub fn remove(&mut self, predicate: impl Into<NamedNode>, value: &Term) -> bool {
        let predicate = predicate.into();
        let Some(index) = self.entries.iter().position(|(p, _)| *p == predicate) else {
            return false;
        };
        let values = &mut self.entries[index].1;
        let before = values.len();
        values.retain(|v| v != value);
        let removed = values.len() != before;
        if values.is_empty() {
            self.entries.remove(index);
        }
        removed
    }

    /// Remove every value of `predicate`.
    pub fn remove_all(&mut self, predicate: impl Into<NamedNode>) {
        let predicate = predicate.into();
        self.entries.retain(|(p, _)| *p != predicate);
    }

    /// Replace all values of `predicate` with `value`.
    pub fn set(&mut self, predicate: impl Into<NamedNode>, value: Term) {
        let values = self.values_mut(predicate.into());
        values.clear();
        values.push(value);
    }

    /// First value of `predicate`, if any.
    pub fn get(&self, predicate: impl Into<NamedNode>) -> Option<&Term> {
        self.values(&predicate.into()).and_then(|values| values.first())
    }

    /// All values of `predicate`, in insertion order.
    pub fn get_all(&self, predicate: impl Into<NamedNode>) -> &[Term] {
        self.values(&predicate.into())
            .map(Vec::as_slice)
            .unwrap_or(&[])
    }

    /// Every stored fact, predicate by predicate.
    pub fn quads(&self) -> Vec<Quad> {
        self.entries
            .iter()
            .flat_map(|(predicate, values)| {
                values.iter().map(move |object| Quad {
                    subject: self.identifier.clone(),
                    predicate: predicate.clone(),
                    object: object.clone(),
                })
            })
            .collect()
    }

    /// Number of stored triples.
    pub fn len(&self) -> usize {
        self.entries.iter().map(|(_, values)| values.len()).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn content_type(&self) -> Option<&str> {
        self.get(CONTENT_TYPE).map(Term::value)
    }

    pub fn set_content_type(&mut self, content_type: impl Into<String>) {
        self.set(CONTENT_TYPE, Term::literal(content_type));
    }
}
