//! Generator options.
//!
//! Every option the model builder recognizes, with its default, lives in
//! [`GeneratorOptions`]. Field names deserialize from camelCase so option
//! files keep the spelling used by vocab-list configurations
//! (`ignoreNonVocabTerms`, `namespaceOverride`, ...).

use std::path::{Path, PathBuf};

use serde::Deserialize;
use vocabgen_rdf::vocab::{ARTIFACT_GENERATOR_CONSTANT_IRI, ARTIFACT_GENERATOR_CONSTANT_STRING};

use crate::error::{Result, VocabError};

/// Options controlling how one vocabulary is turned into a model.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase", default, deny_unknown_fields)]
pub struct GeneratorOptions {
    /// Where the vocabulary came from. Passed through untouched.
    pub input_resources: Vec<String>,
    /// Drop classified terms whose IRI is outside the vocabulary namespace.
    pub ignore_non_vocab_terms: bool,
    /// Namespace IRI to use verbatim instead of the detected one.
    pub namespace_override: Option<String>,
    /// Name and prefix to use verbatim instead of the declared ones.
    pub name_and_prefix_override: Option<String>,
    /// Vocabulary description to use when the vocabulary declares none.
    pub description_fallback: Option<String>,
    /// Directory receiving a content-addressed copy of the source triples.
    pub store_local_copy_of_vocab_directory: Option<PathBuf>,
    /// `rdf:type` object marking a term as a constant IRI.
    pub constant_iri_type: String,
    /// `rdf:type` object marking a term as a constant string.
    pub constant_string_type: String,
}

impl Default for GeneratorOptions {
    fn default() -> Self {
        Self {
            input_resources: Vec::new(),
            ignore_non_vocab_terms: false,
            namespace_override: None,
            name_and_prefix_override: None,
            description_fallback: None,
            store_local_copy_of_vocab_directory: None,
            constant_iri_type: ARTIFACT_GENERATOR_CONSTANT_IRI.to_string(),
            constant_string_type: ARTIFACT_GENERATOR_CONSTANT_STRING.to_string(),
        }
    }
}

impl GeneratorOptions {
    /// Parses options from a TOML document.
    ///
    /// # Errors
    ///
    /// Returns [`VocabError::Options`] if the document is not valid TOML or
    /// names an unknown option.
    pub fn from_toml_str(content: &str) -> Result<Self> {
        Ok(toml::from_str(content)?)
    }

    /// Reads options from a TOML file.
    ///
    /// # Errors
    ///
    /// Returns [`OptionsFileError::Io`] if the file cannot be read and
    /// [`OptionsFileError::Parse`] if its content is not a valid options
    /// document.
    pub fn from_toml_file(path: &Path) -> std::result::Result<Self, OptionsFileError> {
        let content = std::fs::read_to_string(path).map_err(|source| OptionsFileError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_toml_str(&content).map_err(|source| OptionsFileError::Parse {
            path: path.to_path_buf(),
            source: Box::new(source),
        })
    }

    /// Sets the input resources.
    #[must_use]
    pub fn with_input_resources(mut self, resources: Vec<String>) -> Self {
        self.input_resources = resources;
        self
    }

    /// Enables or disables namespace-membership filtering.
    #[must_use]
    pub fn with_ignore_non_vocab_terms(mut self, ignore: bool) -> Self {
        self.ignore_non_vocab_terms = ignore;
        self
    }

    /// Sets the namespace override.
    #[must_use]
    pub fn with_namespace_override(mut self, namespace: impl Into<String>) -> Self {
        self.namespace_override = Some(namespace.into());
        self
    }

    /// Sets the name-and-prefix override.
    #[must_use]
    pub fn with_name_and_prefix_override(mut self, name: impl Into<String>) -> Self {
        self.name_and_prefix_override = Some(name.into());
        self
    }

    /// Sets the description fallback.
    #[must_use]
    pub fn with_description_fallback(mut self, description: impl Into<String>) -> Self {
        self.description_fallback = Some(description.into());
        self
    }

    /// Enables snapshot persistence into `directory`.
    #[must_use]
    pub fn with_local_copy_directory(mut self, directory: impl Into<PathBuf>) -> Self {
        self.store_local_copy_of_vocab_directory = Some(directory.into());
        self
    }
}

/// Failure reading a generator options file.
#[derive(Debug, thiserror::Error)]
pub enum OptionsFileError {
    /// The file could not be read.
    #[error("Failed to read configuration file `{path}`: {source}")]
    Io {
        /// The options file.
        path: PathBuf,
        /// Underlying I/O error.
        source: std::io::Error,
    },
    /// The file is not a valid options document.
    #[error("Failed to read configuration file `{path}`: {source}")]
    Parse {
        /// The options file.
        path: PathBuf,
        /// Parse failure.
        source: Box<VocabError>,
    },
}
