//! Triple store abstraction and the in-memory [`Graph`].
//!
//! Everything downstream reads statements through [`TripleSource`], so the
//! classifier never depends on a particular storage. Iteration order is always
//! insertion order: generated artifacts must be reproducible.

use std::collections::HashSet;

use crate::term::{Term, Triple};

/// Read-only access to a set of statements.
pub trait TripleSource {
    /// Iterates over every statement in insertion order.
    fn iter(&self) -> Box<dyn Iterator<Item = &Triple> + '_>;

    /// Iterates over statements matching `(subject?, predicate?, object?)`,
    /// in insertion order. `None` matches anything.
    fn matching<'a>(
        &'a self,
        subject: Option<&'a str>,
        predicate: Option<&'a str>,
        object: Option<&'a Term>,
    ) -> Box<dyn Iterator<Item = &'a Triple> + 'a> {
        Box::new(self.iter().filter(move |t| {
            subject.map_or(true, |s| t.subject_iri() == Some(s))
                && predicate.map_or(true, |p| t.predicate == p)
                && object.map_or(true, |o| &t.object == o)
        }))
    }

    /// Returns the objects of `subject predicate ?o`, in insertion order.
    fn objects<'a>(
        &'a self,
        subject: &'a str,
        predicate: &'a str,
    ) -> Box<dyn Iterator<Item = &'a Term> + 'a> {
        Box::new(
            self.matching(Some(subject), Some(predicate), None)
                .map(|t| &t.object),
        )
    }

    /// Returns true if `subject predicate object` is asserted.
    fn contains(&self, subject: &str, predicate: &str, object: &Term) -> bool {
        self.matching(Some(subject), Some(predicate), Some(object))
            .next()
            .is_some()
    }

    /// Returns true if the IRI appears as the subject of any statement.
    fn has_subject(&self, subject: &str) -> bool {
        self.matching(Some(subject), None, None).next().is_some()
    }

    /// Returns the number of statements.
    fn len(&self) -> usize {
        self.iter().count()
    }

    /// Returns true if there are no statements.
    fn is_empty(&self) -> bool {
        self.iter().next().is_none()
    }
}

/// An in-memory, insertion-ordered set of statements.
///
/// Inserting a statement that is already present is a no-op, so the graph
/// has set semantics while still iterating deterministically.
#[derive(Debug, Clone, Default)]
pub struct Graph {
    triples: Vec<Triple>,
    seen: HashSet<Triple>,
}

impl Graph {
    /// Creates an empty graph.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Inserts a statement. Returns false if it was already present.
    pub fn insert(&mut self, triple: Triple) -> bool {
        if self.seen.contains(&triple) {
            return false;
        }
        self.seen.insert(triple.clone());
        self.triples.push(triple);
        true
    }

    /// Returns the statements as a slice, in insertion order.
    #[must_use]
    pub fn as_slice(&self) -> &[Triple] {
        &self.triples
    }
}

impl TripleSource for Graph {
    fn iter(&self) -> Box<dyn Iterator<Item = &Triple> + '_> {
        Box::new(self.triples.iter())
    }

    fn len(&self) -> usize {
        self.triples.len()
    }

    fn is_empty(&self) -> bool {
        self.triples.is_empty()
    }
}

impl Extend<Triple> for Graph {
    fn extend<I: IntoIterator<Item = Triple>>(&mut self, iter: I) {
        for triple in iter {
            self.insert(triple);
        }
    }
}

impl FromIterator<Triple> for Graph {
    fn from_iter<I: IntoIterator<Item = Triple>>(iter: I) -> Self {
        let mut graph = Graph::new();
        graph.extend(iter);
        graph
    }
}
