//! Assembly of the output model.
//!
//! [`ModelBuilder`] runs namespace resolution, classification and description
//! resolution over one triple store and merges the results into a
//! [`Vocabulary`]. Nothing is written unless the whole model builds.

use std::collections::HashSet;

use tracing::{debug, info, warn};
use vocabgen_rdf::TripleSource;

use crate::classify::Classifier;
use crate::config::GeneratorOptions;
use crate::description::{resolve_vocabulary_description, summarize, TermTexts};
use crate::error::Result;
use crate::model::{VocabTerm, Vocabulary};
use crate::namespace::{describe_namespace_in_use, NamespaceResolver};
use crate::naming::{escape_for_language, term_name};
use crate::snapshot::{store_local_copy, DirectoryStore, LocalCopyStore};

/// Builds a [`Vocabulary`] from a triple store.
///
/// ```
/// use vocabgen_model::{GeneratorOptions, ModelBuilder};
/// use vocabgen_rdf::{vocab, Graph, Term, Triple};
///
/// let ns = "https://example.com/vocab#";
/// let mut graph = Graph::new();
/// graph.insert(Triple::new(Term::iri(ns), vocab::RDF_TYPE, Term::iri(vocab::OWL_ONTOLOGY)));
/// graph.insert(Triple::new(
///     Term::iri(ns),
///     vocab::VANN_PREFERRED_NAMESPACE_PREFIX,
///     Term::literal("ex"),
/// ));
/// graph.insert(Triple::new(Term::iri(ns), vocab::RDFS_COMMENT, Term::literal("Example")));
/// graph.insert(Triple::new(
///     Term::iri(format!("{ns}Thing")),
///     vocab::RDF_TYPE,
///     Term::iri(vocab::RDFS_CLASS),
/// ));
///
/// let options = GeneratorOptions::default();
/// let vocabulary = ModelBuilder::new(&graph, &options).build()?;
/// assert_eq!(vocabulary.prefix, "ex");
/// assert_eq!(vocabulary.classes[0].name, "Thing");
/// # Ok::<(), vocabgen_model::VocabError>(())
/// ```
pub struct ModelBuilder<'a, S: ?Sized> {
    source: &'a S,
    options: &'a GeneratorOptions,
    selection: Option<&'a dyn TripleSource>,
    store: Option<&'a dyn LocalCopyStore>,
}

impl<'a, S: TripleSource + ?Sized> ModelBuilder<'a, S> {
    /// Creates a builder over the primary triples.
    pub fn new(source: &'a S, options: &'a GeneratorOptions) -> Self {
        Self {
            source,
            options,
            selection: None,
            store: None,
        }
    }

    /// Restricts terms to the subjects of `selection`.
    #[must_use]
    pub fn with_term_selection(mut self, selection: &'a dyn TripleSource) -> Self {
        self.selection = Some(selection);
        self
    }

    /// Sends the snapshot to `store` instead of the configured directory.
    #[must_use]
    pub fn with_local_copy_store(mut self, store: &'a dyn LocalCopyStore) -> Self {
        self.store = Some(store);
        self
    }

    /// Builds the model.
    ///
    /// # Errors
    ///
    /// Returns [`VocabError::EmptyVocabulary`](crate::VocabError::EmptyVocabulary)
    /// when nothing classifies as a term,
    /// [`VocabError::Configuration`](crate::VocabError::Configuration) when no
    /// prefix is found,
    /// [`VocabError::MissingDescription`](crate::VocabError::MissingDescription)
    /// when there is no description and no fallback, and
    /// [`VocabError::Snapshot`](crate::VocabError::Snapshot) when the local
    /// copy cannot be written.
    pub fn build(&self) -> Result<Vocabulary> {
        let options = self.options;
        let resolver = NamespaceResolver::new(self.source);

        let namespace = match options.namespace_override.as_deref() {
            Some(ovr) => {
                let declared = resolver.declared().unwrap_or_default();
                info!("{}", describe_namespace_in_use(declared, Some(ovr)));
                ovr.to_string()
            }
            None => {
                let detected = resolver.namespace(None);
                info!("{}", describe_namespace_in_use(&detected, None));
                detected
            }
        };

        let classified = Classifier::new(&namespace, options)
            .with_ontology(resolver.ontology())
            .with_selection(self.selection)
            .classify(self.source)?;

        let prefix = resolver.prefix(&namespace, options.name_and_prefix_override.as_deref())?;
        let name = options
            .name_and_prefix_override
            .clone()
            .unwrap_or_else(|| prefix.clone());

        let mut subjects: Vec<&str> = resolver.ontology().into_iter().collect();
        if !subjects.contains(&namespace.as_str()) {
            subjects.push(&namespace);
        }
        let description = resolve_vocabulary_description(
            self.source,
            &subjects,
            options.description_fallback.as_deref(),
            &namespace,
        )?;

        let mut vocabulary = Vocabulary {
            namespace: namespace.clone(),
            prefix,
            name,
            description,
            input_resources: options.input_resources.clone(),
            classes: Vec::new(),
            properties: Vec::new(),
            literals: Vec::new(),
            constant_iris: Vec::new(),
            constant_strings: Vec::new(),
        };

        let mut identifiers = HashSet::new();
        for classified_term in classified {
            let texts = TermTexts::collect(self.source, &classified_term.iri);
            let name = term_name(&classified_term.iri, &namespace).to_string();
            let escaped = unique_identifier(escape_for_language(&name), &mut identifiers);
            let term = VocabTerm {
                name_escaped_for_language: escaped,
                term_description: summarize(&texts.labels, &texts.comments),
                name,
                kind: classified_term.kind,
                namespace: namespace.clone(),
                labels: texts.labels,
                comments: texts.comments,
                definitions: texts.definitions,
                value: classified_term.iri,
            };
            vocabulary.terms_of_mut(term.kind).push(term);
        }

        self.snapshot(&vocabulary)?;

        info!(
            namespace = %vocabulary.namespace,
            prefix = %vocabulary.prefix,
            classes = vocabulary.classes.len(),
            properties = vocabulary.properties.len(),
            literals = vocabulary.literals.len(),
            constant_iris = vocabulary.constant_iris.len(),
            constant_strings = vocabulary.constant_strings.len(),
            "built vocabulary model"
        );
        Ok(vocabulary)
    }

    fn snapshot(&self, vocabulary: &Vocabulary) -> Result<()> {
        let directory_store;
        let store: &dyn LocalCopyStore = match (
            self.store,
            &self.options.store_local_copy_of_vocab_directory,
        ) {
            (Some(store), _) => store,
            (None, Some(directory)) => {
                directory_store = DirectoryStore::new(directory.clone());
                &directory_store
            }
            (None, None) => return Ok(()),
        };
        let path = store_local_copy(
            store,
            &vocabulary.prefix,
            &vocabulary.namespace,
            self.source,
        )?;
        debug!(path = %path.display(), "stored local copy of vocabulary");
        Ok(())
    }
}

/// Claims `escaped` in `taken`, appending `_2`, `_3`, ... until the
/// identifier is unused.
fn unique_identifier(escaped: String, taken: &mut HashSet<String>) -> String {
    if taken.insert(escaped.clone()) {
        return escaped;
    }
    let mut suffix = 2;
    loop {
        let candidate = format!("{escaped}_{suffix}");
        if taken.insert(candidate.clone()) {
            warn!(
                identifier = %escaped,
                renamed = %candidate,
                "escaped term names collide; disambiguating"
            );
            return candidate;
        }
        suffix += 1;
    }
}

/// Builds a vocabulary from `source`, optionally restricted to the subjects
/// of `selection`.
///
/// # Errors
///
/// See [`ModelBuilder::build`].
pub fn build_vocabulary<S: TripleSource + ?Sized>(
    source: &S,
    selection: Option<&dyn TripleSource>,
    options: &GeneratorOptions,
) -> Result<Vocabulary> {
    let builder = ModelBuilder::new(source, options);
    match selection {
        Some(selection) => builder.with_term_selection(selection).build(),
        None => builder.build(),
    }
}
