//! RDF plumbing for vocabgen.
//!
//! The `vocabgen-rdf` crate provides the immutable, insertion-ordered triple
//! store that the vocabulary model builder reads from, the well-known
//! vocabulary IRIs it classifies against, an N-Triples serializer used for
//! content-addressed snapshots, and a Turtle loader.
//!
//! # Entry Point
//!
//! ```
//! use vocabgen_rdf::{vocab, Graph, Term, Triple, TripleSource};
//!
//! let mut graph = Graph::new();
//! graph.insert(Triple::new(
//!     Term::iri("https://example.com/vocab#Thing"),
//!     vocab::RDF_TYPE,
//!     Term::iri(vocab::RDFS_CLASS),
//! ));
//! assert_eq!(graph.matching(None, Some(vocab::RDF_TYPE), None).count(), 1);
//! ```

#![deny(
    clippy::unwrap_used,
    clippy::expect_used,
    clippy::panic,
    missing_docs,
    clippy::missing_errors_doc
)]

pub mod graph;
pub mod parser;
pub mod serializer;
pub mod term;
pub mod vocab;

pub use graph::{Graph, TripleSource};
pub use parser::RdfError;
pub use term::{Literal, Term, Triple};
