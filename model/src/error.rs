//! Errors raised while building a vocabulary model.
//!
//! Every variant aborts the current vocabulary immediately; whether to skip
//! it and continue with the next one is the caller's decision.

use std::path::PathBuf;

/// Failure building a [`Vocabulary`](crate::Vocabulary).
#[derive(Debug, thiserror::Error)]
pub enum VocabError {
    /// No prefix is declared for the namespace and none is known or overridden.
    #[error(
        "No vocabulary prefix defined for namespace [{namespace}]. Add a \
         `vann:preferredNamespacePrefix` statement to the vocabulary, or \
         provide a name-and-prefix override"
    )]
    Configuration {
        /// The namespace that has no prefix.
        namespace: String,
    },
    /// Nothing in the triple set was classified as a term.
    #[error("Vocabulary [{namespace}] does not contain any terms.")]
    EmptyVocabulary {
        /// The namespace IRI in effect.
        namespace: String,
    },
    /// No description literal was found and no fallback is configured.
    #[error(
        "No description found for vocabulary [{namespace}] (looked for \
         rdfs:comment, rdfs:label and dcterms:description), and no \
         description fallback is configured"
    )]
    MissingDescription {
        /// The namespace IRI in effect.
        namespace: String,
    },
    /// Writing the local copy of the vocabulary failed.
    #[error("failed to store local copy of vocabulary at `{path}`: {source}")]
    Snapshot {
        /// Target file or directory.
        path: PathBuf,
        /// Underlying I/O error.
        source: std::io::Error,
    },
    /// A generator options file could not be parsed.
    #[error("invalid generator options: {0}")]
    Options(#[from] toml::de::Error),
}

/// Result alias for model building.
pub type Result<T, E = VocabError> = std::result::Result<T, E>;
