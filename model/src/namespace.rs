//! Namespace, prefix and name resolution.
//!
//! Declared statements win over heuristics, and caller overrides win over
//! everything; overrides are always used verbatim.

use std::collections::HashMap;

use tracing::{debug, warn};
use vocabgen_rdf::vocab::{
    DCTERMS, FOAF, OWL, OWL_ONTOLOGY, RDF, RDFS, RDF_TYPE, SCHEMA, SKOS, SKOSXL, VANN,
    VANN_PREFERRED_NAMESPACE_PREFIX, VANN_PREFERRED_NAMESPACE_URI, XSD,
};
use vocabgen_rdf::{Term, TripleSource};

use crate::error::{Result, VocabError};
use crate::naming::{local_name, namespace_of};

/// Well-known namespaces and their conventional prefixes.
pub const KNOWN_PREFIXES: [(&str, &str); 10] = [
    (FOAF, "foaf"),
    (RDF, "rdf"),
    (RDFS, "rdfs"),
    (OWL, "owl"),
    (XSD, "xsd"),
    (SKOS, "skos"),
    (SKOSXL, "skosxl"),
    (DCTERMS, "dcterms"),
    (VANN, "vann"),
    (SCHEMA, "schema"),
];

/// Returns the conventional prefix of a well-known namespace.
#[must_use]
pub fn preferred_prefix(namespace: &str) -> Option<&'static str> {
    KNOWN_PREFIXES
        .iter()
        .find(|(ns, _)| *ns == namespace)
        .map(|(_, prefix)| *prefix)
}

/// Formats a human-readable note on which namespace is in effect.
#[must_use]
pub fn describe_namespace_in_use(namespace: &str, namespace_override: Option<&str>) -> String {
    match namespace_override {
        Some(ovr) if namespace.is_empty() => format!(
            "Using namespace override [{ovr}]; the vocabulary declares no namespace."
        ),
        Some(ovr) => format!(
            "Using namespace override [{ovr}] instead of the namespace [{namespace}] \
             detected in the vocabulary."
        ),
        None => format!("Using namespace [{namespace}] detected in the vocabulary."),
    }
}

/// Namespace, prefix and display name of a vocabulary.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedNamespace {
    /// Namespace IRI.
    pub namespace: String,
    /// Preferred prefix.
    pub prefix: String,
    /// Display name.
    pub name: String,
}

/// Reads ontology-level statements to identify a vocabulary.
pub struct NamespaceResolver<'a, S: ?Sized> {
    source: &'a S,
    ontology: Option<&'a str>,
}

impl<'a, S: TripleSource + ?Sized> NamespaceResolver<'a, S> {
    /// Creates a resolver, locating the first subject typed `owl:Ontology`.
    pub fn new(source: &'a S) -> Self {
        let ontology = source
            .iter()
            .find(|t| t.predicate == RDF_TYPE && t.object.as_iri() == Some(OWL_ONTOLOGY))
            .and_then(|t| t.subject_iri());
        Self { source, ontology }
    }

    /// Returns the ontology subject, if one is declared.
    #[must_use]
    pub fn ontology(&self) -> Option<&'a str> {
        self.ontology
    }

    /// Determines the namespace IRI.
    ///
    /// Returns an empty string only for a store without IRI subjects.
    #[must_use]
    pub fn namespace(&self, namespace_override: Option<&str>) -> String {
        if let Some(ovr) = namespace_override {
            return ovr.to_string();
        }
        if let Some(ns) = self.declared() {
            return ns.to_string();
        }
        let guessed = self.heuristic_namespace().unwrap_or_default();
        warn!(
            namespace = guessed,
            "no namespace declared; guessed it from subject IRIs"
        );
        guessed.to_string()
    }

    /// Returns the namespace the vocabulary states for itself: its
    /// `vann:preferredNamespaceUri`, else the ontology IRI. Never guesses.
    #[must_use]
    pub fn declared(&self) -> Option<&'a str> {
        self.declared_namespace().or(self.ontology)
    }

    /// Determines the prefix for `namespace`.
    ///
    /// # Errors
    ///
    /// Returns [`VocabError::Configuration`] if no prefix is overridden,
    /// declared or known for the namespace.
    pub fn prefix(&self, namespace: &str, prefix_override: Option<&str>) -> Result<String> {
        if let Some(ovr) = prefix_override {
            return Ok(ovr.to_string());
        }
        let declared = self
            .ontology
            .and_then(|ontology| {
                self.source
                    .iter()
                    .filter(|t| t.subject_iri() == Some(ontology))
                    .find_map(|t| prefix_object(t.predicate.as_str(), &t.object))
            })
            .or_else(|| {
                self.source
                    .iter()
                    .find_map(|t| prefix_object(t.predicate.as_str(), &t.object))
            });
        if let Some(prefix) = declared {
            return Ok(prefix.to_string());
        }
        match preferred_prefix(namespace) {
            Some(prefix) => {
                debug!(namespace, prefix, "using well-known prefix");
                Ok(prefix.to_string())
            }
            None => Err(VocabError::Configuration {
                namespace: namespace.to_string(),
            }),
        }
    }

    /// Resolves namespace, prefix and name, honoring both overrides.
    ///
    /// # Errors
    ///
    /// Returns [`VocabError::Configuration`] if no prefix can be found.
    pub fn resolve(
        &self,
        namespace_override: Option<&str>,
        name_and_prefix_override: Option<&str>,
    ) -> Result<ResolvedNamespace> {
        let namespace = self.namespace(namespace_override);
        let prefix = self.prefix(&namespace, name_and_prefix_override)?;
        let name = name_and_prefix_override.map_or_else(|| prefix.clone(), str::to_string);
        Ok(ResolvedNamespace {
            namespace,
            prefix,
            name,
        })
    }

    fn declared_namespace(&self) -> Option<&'a str> {
        let on_ontology = self.ontology.and_then(|ontology| {
            self.source.iter().find_map(|t| {
                (t.subject_iri() == Some(ontology) && t.predicate == VANN_PREFERRED_NAMESPACE_URI)
                    .then(|| t.object.iri_or_lexical())
                    .flatten()
            })
        });
        on_ontology.or_else(|| {
            self.source.iter().find_map(|t| {
                (t.predicate == VANN_PREFERRED_NAMESPACE_URI)
                    .then(|| t.object.iri_or_lexical())
                    .flatten()
            })
        })
    }

    /// The namespace of the strictly most frequent subject, else of the
    /// subject with the shortest local name.
    fn heuristic_namespace(&self) -> Option<&'a str> {
        let mut order: Vec<&'a str> = Vec::new();
        let mut counts: HashMap<&'a str, usize> = HashMap::new();
        for subject in self.source.iter().filter_map(|t| t.subject_iri()) {
            let count = counts.entry(subject).or_insert(0);
            if *count == 0 {
                order.push(subject);
            }
            *count += 1;
        }

        let max = counts.values().copied().max()?;
        let mut most_frequent = order.iter().filter(|s| counts.get(*s) == Some(&max));
        let first = most_frequent.next();
        if let (Some(&subject), None) = (first, most_frequent.next()) {
            return Some(namespace_of(subject));
        }

        let mut shortest: Option<&'a str> = None;
        for &subject in &order {
            if shortest.map_or(true, |s| local_name(subject).len() < local_name(s).len()) {
                shortest = Some(subject);
            }
        }
        shortest.map(namespace_of)
    }
}

fn prefix_object<'t>(predicate: &str, object: &'t Term) -> Option<&'t str> {
    if predicate == VANN_PREFERRED_NAMESPACE_PREFIX {
        object.iri_or_lexical()
    } else {
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use vocabgen_rdf::vocab::RDFS_CLASS;
    use vocabgen_rdf::{Graph, Triple};

    const NS: &str = "https://rdf-extension.com#";

    fn declared() -> Graph {
        let mut graph = Graph::new();
        graph.insert(Triple::new(Term::iri(NS), RDF_TYPE, Term::iri(OWL_ONTOLOGY)));
        graph.insert(Triple::new(
            Term::iri(NS),
            VANN_PREFERRED_NAMESPACE_URI,
            Term::iri(NS),
        ));
        graph.insert(Triple::new(
            Term::iri(NS),
            VANN_PREFERRED_NAMESPACE_PREFIX,
            Term::literal("rdf-ext"),
        ));
        graph
    }

    #[test]
    fn declared_statements_resolve_everything() {
        let graph = declared();
        let resolver = NamespaceResolver::new(&graph);
        assert_eq!(resolver.ontology(), Some(NS));
        let resolved = resolver.resolve(None, None);
        assert!(matches!(&resolved, Ok(r) if r.namespace == NS
            && r.prefix == "rdf-ext"
            && r.name == "rdf-ext"));
    }

    #[test]
    fn overrides_are_used_verbatim() {
        let graph = declared();
        let resolved = NamespaceResolver::new(&graph)
            .resolve(Some("https://override.namespace.org#"), Some("ovr"));
        assert!(matches!(&resolved, Ok(r) if r.namespace == "https://override.namespace.org#"
            && r.prefix == "ovr"
            && r.name == "ovr"));
    }

    #[test]
    fn literal_namespace_declaration_is_accepted() {
        let mut graph = Graph::new();
        graph.insert(Triple::new(
            Term::iri("https://ex.com/ontology"),
            VANN_PREFERRED_NAMESPACE_URI,
            Term::literal("https://ex.com/vocab#"),
        ));
        assert_eq!(
            NamespaceResolver::new(&graph).namespace(None),
            "https://ex.com/vocab#"
        );
    }

    #[test]
    fn ontology_iri_is_the_namespace_when_nothing_is_declared() {
        let mut graph = Graph::new();
        graph.insert(Triple::new(
            Term::iri("https://ex.com/vocab#"),
            RDF_TYPE,
            Term::iri(OWL_ONTOLOGY),
        ));
        assert_eq!(
            NamespaceResolver::new(&graph).namespace(None),
            "https://ex.com/vocab#"
        );
    }

    #[test]
    fn heuristic_prefers_most_frequent_subject() {
        let mut graph = Graph::new();
        for (s, o) in [
            ("https://a.com/ns#x", RDFS_CLASS),
            ("https://b.com/vocab/LongerName", RDFS_CLASS),
            ("https://b.com/vocab/LongerName", OWL_ONTOLOGY),
        ] {
            graph.insert(Triple::new(Term::iri(s), "https://p.com/p", Term::iri(o)));
        }
        assert_eq!(
            NamespaceResolver::new(&graph).namespace(None),
            "https://b.com/vocab/"
        );
    }

    #[test]
    fn heuristic_falls_back_to_shortest_local_name() {
        let mut graph = Graph::new();
        for s in ["https://b.com/vocab/LongerName", "https://a.com/ns#x", "https://c.com#y"] {
            graph.insert(Triple::new(Term::iri(s), RDF_TYPE, Term::iri(RDFS_CLASS)));
        }
        assert_eq!(NamespaceResolver::new(&graph).namespace(None), "https://a.com/ns#");
    }

    #[test]
    fn known_namespace_supplies_the_prefix() {
        let mut graph = Graph::new();
        graph.insert(Triple::new(Term::iri(FOAF), RDF_TYPE, Term::iri(OWL_ONTOLOGY)));
        let resolved = NamespaceResolver::new(&graph).resolve(None, None);
        assert!(matches!(&resolved, Ok(r) if r.prefix == "foaf" && r.name == "foaf"));
    }

    #[test]
    fn unknown_prefix_is_a_configuration_error() {
        let mut graph = Graph::new();
        graph.insert(Triple::new(
            Term::iri("http://some.namespace.com#"),
            RDF_TYPE,
            Term::iri(OWL_ONTOLOGY),
        ));
        let err = NamespaceResolver::new(&graph).resolve(None, None);
        assert!(matches!(&err, Err(VocabError::Configuration { .. })));
        assert!(err
            .err()
            .map(|e| e.to_string())
            .unwrap_or_default()
            .contains("No vocabulary prefix defined"));
    }

    #[test]
    fn describes_override_only_when_given() {
        assert!(describe_namespace_in_use("X", None).contains("[X]"));
        let described = describe_namespace_in_use("X", Some("test override"));
        assert!(described.contains("test override"));
        assert!(described.contains("[X]"));
        assert_eq!(
            describe_namespace_in_use("", Some("test override")),
            "Using namespace override [test override]; the vocabulary declares no namespace."
        );
    }

    #[test]
    fn declared_namespace_never_guesses() {
        let mut graph = Graph::new();
        graph.insert(Triple::new(
            Term::iri("https://guess.com/ns#a"),
            RDF_TYPE,
            Term::iri(RDFS_CLASS),
        ));
        let resolver = NamespaceResolver::new(&graph);
        assert_eq!(resolver.declared(), None);
        assert_eq!(resolver.namespace(None), "https://guess.com/ns#");

        let graph = declared();
        assert_eq!(NamespaceResolver::new(&graph).declared(), Some(NS));
    }

    #[test]
    fn well_known_prefix_table() {
        assert_eq!(preferred_prefix("http://xmlns.com/foaf/0.1/"), Some("foaf"));
        assert_eq!(preferred_prefix("https://unknown.com#"), None);
    }
}
