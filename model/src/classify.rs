//! Term classification.
//!
//! Every candidate subject gets exactly one [`TermKind`]. The policy is the
//! data table [`CLASSIFICATION_RULES`]: rules are evaluated in table order and
//! statements in store order within each rule, and the first rule to claim a
//! subject wins. The structural `rdfs:subClassOf` / `rdfs:subPropertyOf` rules
//! sit at the end, so they only claim subjects no type assertion claimed.

use std::collections::HashSet;

use tracing::debug;
use vocabgen_rdf::vocab::{
    OWL, OWL_ANNOTATION_PROPERTY, OWL_CLASS, OWL_DATATYPE_PROPERTY, OWL_NAMED_INDIVIDUAL,
    OWL_OBJECT_PROPERTY, RDF, RDFS, RDFS_CLASS, RDFS_DATATYPE, RDFS_LITERAL, RDFS_SUBCLASS_OF,
    RDFS_SUBPROPERTY_OF, RDF_LANG_STRING, RDF_PROPERTY, RDF_TYPE, SCHEMA_PAYMENT_STATUS_TYPE,
    SKOSXL_LABEL, SKOS_CONCEPT, XSD, XSD_DURATION,
};
use vocabgen_rdf::{Term, TripleSource};

use crate::config::GeneratorOptions;
use crate::error::{Result, VocabError};
use crate::model::TermKind;
use crate::naming::strip_namespace;

/// What a rule requires of a statement's object.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ObjectPattern {
    /// A fixed IRI.
    Iri(&'static str),
    /// The configured constant-IRI type.
    ConstantIriType,
    /// The configured constant-string type.
    ConstantStringType,
    /// Any object.
    Any,
}

/// One row of the classification policy.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ClassificationRule {
    /// Predicate the statement must use.
    pub predicate: &'static str,
    /// Object the statement must have.
    pub object: ObjectPattern,
    /// Kind assigned to the statement's subject.
    pub kind: TermKind,
}

const fn typed(object: &'static str, kind: TermKind) -> ClassificationRule {
    ClassificationRule {
        predicate: RDF_TYPE,
        object: ObjectPattern::Iri(object),
        kind,
    }
}

/// The classification policy, in precedence order.
pub const CLASSIFICATION_RULES: [ClassificationRule; 16] = [
    typed(OWL_CLASS, TermKind::Class),
    typed(RDFS_CLASS, TermKind::Class),
    typed(SKOS_CONCEPT, TermKind::Class),
    typed(SCHEMA_PAYMENT_STATUS_TYPE, TermKind::Class),
    typed(RDF_PROPERTY, TermKind::Property),
    typed(RDFS_DATATYPE, TermKind::Property),
    typed(OWL_OBJECT_PROPERTY, TermKind::Property),
    typed(OWL_NAMED_INDIVIDUAL, TermKind::Property),
    typed(OWL_ANNOTATION_PROPERTY, TermKind::Property),
    typed(OWL_DATATYPE_PROPERTY, TermKind::Property),
    typed(SKOSXL_LABEL, TermKind::Property),
    typed(RDFS_LITERAL, TermKind::Literal),
    ClassificationRule {
        predicate: RDF_TYPE,
        object: ObjectPattern::ConstantIriType,
        kind: TermKind::ConstantIri,
    },
    ClassificationRule {
        predicate: RDF_TYPE,
        object: ObjectPattern::ConstantStringType,
        kind: TermKind::ConstantString,
    },
    ClassificationRule {
        predicate: RDFS_SUBCLASS_OF,
        object: ObjectPattern::Any,
        kind: TermKind::Class,
    },
    ClassificationRule {
        predicate: RDFS_SUBPROPERTY_OF,
        object: ObjectPattern::Any,
        kind: TermKind::Property,
    },
];

/// Structural artifacts that are never vocabulary terms.
pub const ALWAYS_EXCLUDED: [&str; 2] = [RDF_LANG_STRING, XSD_DURATION];

/// Namespaces whose terms are skipped unless the vocabulary extends them.
pub const RESERVED_NAMESPACES: [&str; 4] = [RDF, RDFS, OWL, XSD];

/// A subject and the kind it was classified as.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClassifiedTerm {
    /// Subject IRI.
    pub iri: String,
    /// Assigned kind.
    pub kind: TermKind,
}

/// Assigns term kinds to the subjects of a triple store.
pub struct Classifier<'a> {
    namespace: &'a str,
    ontology: Option<&'a str>,
    selection: Option<&'a dyn TripleSource>,
    ignore_non_vocab_terms: bool,
    constant_iri_type: &'a str,
    constant_string_type: &'a str,
}

impl<'a> Classifier<'a> {
    /// Creates a classifier for the vocabulary in `namespace`.
    #[must_use]
    pub fn new(namespace: &'a str, options: &'a GeneratorOptions) -> Self {
        Self {
            namespace,
            ontology: None,
            selection: None,
            ignore_non_vocab_terms: options.ignore_non_vocab_terms,
            constant_iri_type: &options.constant_iri_type,
            constant_string_type: &options.constant_string_type,
        }
    }

    /// Excludes the ontology subject from the terms.
    #[must_use]
    pub fn with_ontology(mut self, ontology: Option<&'a str>) -> Self {
        self.ontology = ontology;
        self
    }

    /// Restricts terms to subjects of `selection`. An empty selection
    /// restricts nothing.
    #[must_use]
    pub fn with_selection(mut self, selection: Option<&'a dyn TripleSource>) -> Self {
        self.selection = selection.filter(|s| !s.is_empty());
        self
    }

    /// Classifies every candidate subject of `source`, in claim order.
    ///
    /// # Errors
    ///
    /// Returns [`VocabError::EmptyVocabulary`] if no subject is claimed by any
    /// rule once blank nodes, the vocabulary's own subjects and unselected
    /// subjects are set aside. Subjects removed afterwards by the exclusion
    /// filters may leave the result empty without an error.
    pub fn classify<S: TripleSource + ?Sized>(&self, source: &S) -> Result<Vec<ClassifiedTerm>> {
        let mut seen: HashSet<&str> = HashSet::new();
        let mut claimed = Vec::new();

        for rule in &CLASSIFICATION_RULES {
            let object = self.object_term(rule.object);
            let statements = source.iter().filter(|t| {
                t.predicate == rule.predicate && object.as_ref().map_or(true, |o| &t.object == o)
            });
            for triple in statements {
                let Some(subject) = triple.subject_iri() else {
                    continue;
                };
                if !self.is_candidate(subject) || seen.contains(subject) {
                    continue;
                }
                seen.insert(subject);
                claimed.push(ClassifiedTerm {
                    iri: subject.to_string(),
                    kind: rule.kind,
                });
            }
        }

        if claimed.is_empty() {
            return Err(VocabError::EmptyVocabulary {
                namespace: self.namespace.to_string(),
            });
        }

        claimed.retain(|term| match self.exclusion(&term.iri) {
            Some(reason) => {
                debug!(term = %term.iri, reason, "excluded term");
                false
            }
            None => {
                debug!(term = %term.iri, kind = term.kind.as_str(), "classified term");
                true
            }
        });
        Ok(claimed)
    }

    fn object_term(&self, pattern: ObjectPattern) -> Option<Term> {
        match pattern {
            ObjectPattern::Iri(iri) => Some(Term::iri(iri)),
            ObjectPattern::ConstantIriType => Some(Term::iri(self.constant_iri_type)),
            ObjectPattern::ConstantStringType => Some(Term::iri(self.constant_string_type)),
            ObjectPattern::Any => None,
        }
    }

    fn is_candidate(&self, subject: &str) -> bool {
        if subject == self.namespace || Some(subject) == self.ontology {
            return false;
        }
        self.selection.map_or(true, |s| s.has_subject(subject))
    }

    fn exclusion(&self, iri: &str) -> Option<&'static str> {
        if ALWAYS_EXCLUDED.contains(&iri) {
            return Some("structural artifact");
        }
        let reserved = RESERVED_NAMESPACES
            .iter()
            .any(|ns| iri.starts_with(ns) && !self.namespace.starts_with(ns));
        if reserved {
            return Some("reserved namespace");
        }
        if self.ignore_non_vocab_terms && strip_namespace(iri, self.namespace).is_none() {
            return Some("outside vocabulary namespace");
        }
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use vocabgen_rdf::vocab::ARTIFACT_GENERATOR_CONSTANT_IRI;
    use vocabgen_rdf::{Graph, Triple};

    const NS: &str = "https://rdf-extension.com#";

    fn typed_as(graph: &mut Graph, subject: &str, object: &str) {
        graph.insert(Triple::new(Term::iri(subject), RDF_TYPE, Term::iri(object)));
    }

    fn kinds(terms: &[ClassifiedTerm]) -> Vec<(&str, TermKind)> {
        terms.iter().map(|t| (t.iri.as_str(), t.kind)).collect()
    }

    #[test]
    fn first_rule_wins_regardless_of_statement_order() {
        let mut graph = Graph::new();
        let term = format!("{NS}dual");
        typed_as(&mut graph, &term, ARTIFACT_GENERATOR_CONSTANT_IRI);
        typed_as(&mut graph, &term, RDFS_LITERAL);
        typed_as(&mut graph, &term, RDF_PROPERTY);

        let options = GeneratorOptions::default();
        let terms = Classifier::new(NS, &options).classify(&graph).unwrap_or_default();
        assert_eq!(kinds(&terms), vec![(term.as_str(), TermKind::Property)]);
    }

    #[test]
    fn structural_rules_only_claim_untyped_subjects() {
        let mut graph = Graph::new();
        let sub = format!("{NS}Sub");
        let prop = format!("{NS}subProp");
        graph.insert(Triple::new(
            Term::iri(&sub),
            RDFS_SUBCLASS_OF,
            Term::iri(format!("{NS}Super")),
        ));
        graph.insert(Triple::new(
            Term::iri(&prop),
            RDFS_SUBPROPERTY_OF,
            Term::iri(format!("{NS}superProp")),
        ));
        typed_as(&mut graph, &prop, RDFS_LITERAL);

        let options = GeneratorOptions::default();
        let terms = Classifier::new(NS, &options).classify(&graph).unwrap_or_default();
        assert_eq!(
            kinds(&terms),
            vec![(prop.as_str(), TermKind::Literal), (sub.as_str(), TermKind::Class)]
        );
    }

    #[test]
    fn blank_nodes_and_ontology_subjects_are_never_terms() {
        let mut graph = Graph::new();
        graph.insert(Triple::new(Term::blank("b0"), RDF_TYPE, Term::iri(RDFS_CLASS)));
        typed_as(&mut graph, NS, RDFS_CLASS);
        typed_as(&mut graph, "https://rdf-extension.com", OWL_CLASS);
        let term = format!("{NS}Thing");
        typed_as(&mut graph, &term, OWL_CLASS);

        let options = GeneratorOptions::default();
        let terms = Classifier::new(NS, &options)
            .with_ontology(Some("https://rdf-extension.com"))
            .classify(&graph)
            .unwrap_or_default();
        assert_eq!(kinds(&terms), vec![(term.as_str(), TermKind::Class)]);
    }

    #[test]
    fn nothing_claimed_is_an_empty_vocabulary() {
        let mut graph = Graph::new();
        typed_as(&mut graph, NS, RDFS_CLASS);
        let options = GeneratorOptions::default();
        let err = Classifier::new(NS, &options).classify(&graph);
        assert!(matches!(err, Err(VocabError::EmptyVocabulary { .. })));
    }

    #[test]
    fn selection_keeps_only_its_subjects() {
        let mut graph = Graph::new();
        let keep = format!("{NS}keep");
        let drop = format!("{NS}drop");
        typed_as(&mut graph, &keep, RDF_PROPERTY);
        typed_as(&mut graph, &drop, RDF_PROPERTY);

        let mut selection = Graph::new();
        typed_as(&mut selection, &keep, RDF_PROPERTY);

        let options = GeneratorOptions::default();
        let terms = Classifier::new(NS, &options)
            .with_selection(Some(&selection as &dyn TripleSource))
            .classify(&graph)
            .unwrap_or_default();
        assert_eq!(kinds(&terms), vec![(keep.as_str(), TermKind::Property)]);

        let empty = Graph::new();
        let all = Classifier::new(NS, &options)
            .with_selection(Some(&empty as &dyn TripleSource))
            .classify(&graph)
            .unwrap_or_default();
        assert_eq!(all.len(), 2);
    }

    #[test]
    fn reserved_namespaces_are_skipped_unless_extended() {
        let mut graph = Graph::new();
        typed_as(&mut graph, RDF_LANG_STRING, RDFS_DATATYPE);
        typed_as(&mut graph, XSD_DURATION, RDFS_DATATYPE);
        typed_as(&mut graph, OWL_CLASS, RDFS_CLASS);
        typed_as(&mut graph, "http://www.w3.org/2000/01/rdf-schema#extra", RDF_PROPERTY);

        let options = GeneratorOptions::default();
        let terms = Classifier::new(NS, &options).classify(&graph);
        assert!(matches!(&terms, Ok(t) if t.is_empty()));

        let extending = Classifier::new("http://www.w3.org/2000/01/rdf-schema#more/", &options)
            .classify(&graph)
            .unwrap_or_default();
        assert_eq!(
            kinds(&extending),
            vec![(
                "http://www.w3.org/2000/01/rdf-schema#extra",
                TermKind::Property
            )]
        );
    }

    #[test]
    fn ignore_non_vocab_terms_drops_foreign_subjects() {
        let mut graph = Graph::new();
        let own = format!("{NS}own");
        typed_as(&mut graph, &own, RDF_PROPERTY);
        typed_as(&mut graph, "https://elsewhere.com#foreign", RDF_PROPERTY);

        let options = GeneratorOptions::default().with_ignore_non_vocab_terms(true);
        let terms = Classifier::new(NS, &options).classify(&graph).unwrap_or_default();
        assert_eq!(kinds(&terms), vec![(own.as_str(), TermKind::Property)]);
    }

    #[test]
    fn ignore_non_vocab_terms_respects_the_namespace_boundary() {
        let mut graph = Graph::new();
        typed_as(&mut graph, "https://ex.com/vocab#Y", RDFS_CLASS);
        typed_as(&mut graph, "https://ex.com/vocabulary#X", RDFS_CLASS);

        let options = GeneratorOptions::default().with_ignore_non_vocab_terms(true);
        let terms = Classifier::new("https://ex.com/vocab", &options)
            .classify(&graph)
            .unwrap_or_default();
        assert_eq!(kinds(&terms), vec![("https://ex.com/vocab#Y", TermKind::Class)]);
    }
}
