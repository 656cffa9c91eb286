//! vocabgen vocabulary model builder.
//!
//! Turns one RDF vocabulary (a [`TripleSource`](vocabgen_rdf::TripleSource))
//! into a language-agnostic [`Vocabulary`] that code renderers consume: every
//! term classified into exactly one kind, the vocabulary's namespace, prefix
//! and description resolved, and each term's multilingual labels and comments
//! collected together with a diagnostic summary of their language coverage.
//!
//! # Entry Points
//!
//! ```no_run
//! use vocabgen_model::{build_vocabulary, GeneratorOptions};
//! use vocabgen_rdf::parser::parse_turtle;
//!
//! let turtle = std::fs::read_to_string("vocab.ttl")?;
//! let graph = parse_turtle(&turtle, None)?;
//! let options = GeneratorOptions::default().with_ignore_non_vocab_terms(true);
//! let vocabulary = build_vocabulary(&graph, None, &options)?;
//! println!("{} terms in [{}]", vocabulary.term_count(), vocabulary.namespace);
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```
//!
//! # Structure
//!
//! ```text
//! namespace   ← namespace IRI, prefix, display name
//! classify    ← one TermKind per subject, from CLASSIFICATION_RULES
//! description ← labels/comments per term, canonical description, summary
//! builder     ← merges the above into a Vocabulary, optional snapshot
//! ```

#![deny(
    clippy::unwrap_used,
    clippy::expect_used,
    clippy::panic,
    missing_docs,
    clippy::missing_errors_doc
)]

pub mod builder;
pub mod classify;
pub mod config;
pub mod description;
pub mod error;
pub mod model;
pub mod namespace;
pub mod naming;
pub mod snapshot;

pub use builder::{build_vocabulary, ModelBuilder};
pub use classify::{ClassificationRule, ClassifiedTerm, Classifier, CLASSIFICATION_RULES};
pub use config::{GeneratorOptions, OptionsFileError};
pub use error::{Result, VocabError};
pub use model::{LangString, LanguageTag, TermKind, VocabTerm, Vocabulary};
pub use namespace::{describe_namespace_in_use, NamespaceResolver, ResolvedNamespace};
pub use snapshot::{DirectoryStore, LocalCopyStore};
