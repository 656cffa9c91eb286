//! Multilingual label and comment resolution.
//!
//! Two outputs come from here: the single canonical description of a
//! vocabulary ([`resolve_vocabulary_description`]) and the per-term
//! diagnostic summary of language coverage ([`summarize`]). The summary is a
//! pure function of two ordered collections; its phrasing is relied on by
//! renderers and documentation, so changes to it are breaking.

use std::collections::BTreeSet;

use tracing::debug;
use vocabgen_rdf::vocab::{
    DCTERMS_DESCRIPTION, RDFS_COMMENT, RDFS_LABEL, RDF_TYPE, SKOSXL_LABEL, SKOSXL_LITERAL_FORM,
    SKOS_DEFINITION,
};
use vocabgen_rdf::{Term, TripleSource};

use crate::error::{Result, VocabError};
use crate::model::{LangString, LanguageTag};

/// Predicates consulted for the vocabulary description, in precedence order.
pub const VOCABULARY_DESCRIPTION_PREDICATES: [&str; 3] =
    [RDFS_COMMENT, RDFS_LABEL, DCTERMS_DESCRIPTION];

/// Predicates whose literals count as a term's long-form description.
pub const COMMENT_PREDICATES: [&str; 2] = [RDFS_COMMENT, DCTERMS_DESCRIPTION];

/// Labels, comments and definitions collected for one subject.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TermTexts {
    /// Labels, in statement order.
    pub labels: Vec<LangString>,
    /// Comments, in statement order.
    pub comments: Vec<LangString>,
    /// Definitions, in statement order.
    pub definitions: Vec<LangString>,
}

impl TermTexts {
    /// Collects the texts attached to `subject`.
    ///
    /// Subjects typed `skosxl:Label` also get every `skosxl:literalForm` as a
    /// label, in each of its languages.
    pub fn collect<S: TripleSource + ?Sized>(source: &S, subject: &str) -> Self {
        let mut labels = literals(source, subject, RDFS_LABEL);
        let skosxl_label = Term::iri(SKOSXL_LABEL);
        if source.contains(subject, RDF_TYPE, &skosxl_label) {
            labels.extend(literals(source, subject, SKOSXL_LITERAL_FORM));
        }

        let comments = COMMENT_PREDICATES
            .iter()
            .flat_map(|predicate| literals(source, subject, predicate))
            .collect();

        Self {
            labels,
            comments,
            definitions: literals(source, subject, SKOS_DEFINITION),
        }
    }
}

/// Returns the literal objects of `subject predicate ?o` as language texts.
pub fn literals<S: TripleSource + ?Sized>(
    source: &S,
    subject: &str,
    predicate: &str,
) -> Vec<LangString> {
    source
        .objects(subject, predicate)
        .filter_map(Term::as_literal)
        .map(|lit| {
            LangString::new(
                LanguageTag::from_option(lit.language.as_deref()),
                lit.value.clone(),
            )
        })
        .collect()
}

/// Picks the canonical text: exact `en`, then any `en-*`, then untagged, then
/// the first candidate in statement order.
#[must_use]
pub fn select_canonical(candidates: &[LangString]) -> Option<&LangString> {
    candidates
        .iter()
        .find(|c| c.language.is_english())
        .or_else(|| candidates.iter().find(|c| c.language.is_english_variant()))
        .or_else(|| {
            candidates
                .iter()
                .find(|c| c.language == LanguageTag::NoLocale)
        })
        .or_else(|| candidates.first())
}

/// Resolves the vocabulary description from the ontology-level `subjects`.
///
/// The first predicate of [`VOCABULARY_DESCRIPTION_PREDICATES`] with any
/// literal wins; [`select_canonical`] chooses among its literals.
///
/// # Errors
///
/// Returns [`VocabError::MissingDescription`] if no literal exists and no
/// `fallback` is given.
pub fn resolve_vocabulary_description<S: TripleSource + ?Sized>(
    source: &S,
    subjects: &[&str],
    fallback: Option<&str>,
    namespace: &str,
) -> Result<String> {
    for predicate in VOCABULARY_DESCRIPTION_PREDICATES {
        let candidates: Vec<LangString> = subjects
            .iter()
            .flat_map(|subject| literals(source, subject, predicate))
            .collect();
        if let Some(chosen) = select_canonical(&candidates) {
            debug!(
                predicate,
                language = %chosen.language,
                candidates = candidates.len(),
                "selected vocabulary description"
            );
            return Ok(chosen.text.clone());
        }
    }

    match fallback {
        Some(text) => {
            debug!(namespace, "using description fallback");
            Ok(text.to_string())
        }
        None => Err(VocabError::MissingDescription {
            namespace: namespace.to_string(),
        }),
    }
}

/// Describes the label and comment language coverage of one term.
#[must_use]
pub fn summarize(labels: &[LangString], comments: &[LangString]) -> String {
    let label_langs = languages(labels);
    let comment_langs = languages(comments);
    let (nl, nc) = (labels.len(), comments.len());

    if nl == 0 && nc == 0 {
        return "This term has no labels or comments at all.".to_string();
    }

    if nc == 0 {
        let lead = if nl == 1 {
            format!("This term has a label in {}", render(&label_langs))
        } else {
            format!(
                "This term has {} (in {})",
                count(nl, "label"),
                render(&label_langs)
            )
        };
        return format!(
            "{lead}, but no long-form descriptions at all (i.e. no rdfs:comment \
             or dcterms:description)."
        );
    }

    if nl > 0 && label_langs == comment_langs {
        let coverage = if nl == nc {
            if nl == 1 {
                "[1] label and comment".to_string()
            } else {
                format!("[{nl}] labels and comments")
            }
        } else {
            format!("{} and {}", count(nl, "label"), count(nc, "comment"))
        };
        return if only(&label_langs, |t| t.is_english()) {
            format!("This term has {coverage}, with descriptions only in English.")
        } else if only(&label_langs, |t| *t == LanguageTag::NoLocale) {
            format!("This term has {coverage}, with descriptions only with no explicit locale.")
        } else {
            format!("This term has {coverage}, in {}.", render(&label_langs))
        };
    }

    let label_side = side(nl, "label", &label_langs);
    let comment_side = side(nc, "comment", &comment_langs);

    let label_norm = english_as_no_locale(&label_langs);
    if nl > 0 && label_norm == english_as_no_locale(&comment_langs) {
        return if label_norm.len() == 1 && label_norm.contains(LanguageTag::NO_LOCALE) {
            format!(
                "This term has descriptions only in English: {label_side}, and \
                 {comment_side}, which we consider the same."
            )
        } else {
            format!(
                "This term has {label_side}, and {comment_side}. The only \
                 difference is explicit English versus no locale, which we \
                 consider the same."
            )
        };
    }

    format!(
        "This term has a mismatch between its labels and comments: \
         {label_side}, but {comment_side}."
    )
}

fn languages(texts: &[LangString]) -> BTreeSet<&LanguageTag> {
    texts.iter().map(|t| &t.language).collect()
}

fn english_as_no_locale<'a>(langs: &BTreeSet<&'a LanguageTag>) -> BTreeSet<&'a str> {
    langs
        .iter()
        .map(|&t| {
            if t.is_english() {
                LanguageTag::NO_LOCALE
            } else {
                t.as_str()
            }
        })
        .collect()
}

fn only(langs: &BTreeSet<&LanguageTag>, pred: impl Fn(&LanguageTag) -> bool) -> bool {
    langs.len() == 1 && langs.iter().all(|t| pred(*t))
}

fn count(n: usize, noun: &str) -> String {
    if n == 1 {
        format!("[1] {noun}")
    } else {
        format!("[{n}] {noun}s")
    }
}

fn render(langs: &BTreeSet<&LanguageTag>) -> String {
    let list: Vec<&str> = langs.iter().map(|t| t.as_str()).collect();
    let noun = if list.len() == 1 {
        "language"
    } else {
        "languages"
    };
    format!("{noun} [{}]", list.join(", "))
}

fn side(n: usize, noun: &str, langs: &BTreeSet<&LanguageTag>) -> String {
    if n == 0 {
        count(n, noun)
    } else {
        format!("{} in {}", count(n, noun), render(langs))
    }
}
