//! Output model handed to renderers.
//!
//! These types are the rendering contract: a [`Vocabulary`] owns five
//! disjoint term collections, each holding fully-resolved [`VocabTerm`]s.
//! Everything serializes to the camelCase shape renderers expect.

use std::cmp::Ordering;
use std::fmt;

use serde::{Serialize, Serializer};

/// The kind of code construct a vocabulary term becomes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum TermKind {
    /// An RDFS/OWL class or SKOS concept.
    Class,
    /// A property, datatype or labelling resource.
    Property,
    /// An `rdfs:Literal` (a localized message).
    Literal,
    /// A term whose IRI itself is the constant value.
    ConstantIri,
    /// A term carrying a constant string value.
    ConstantString,
}

impl TermKind {
    /// Returns the collection name used in the output model.
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            TermKind::Class => "classes",
            TermKind::Property => "properties",
            TermKind::Literal => "literals",
            TermKind::ConstantIri => "constantIris",
            TermKind::ConstantString => "constantStrings",
        }
    }
}

/// A language tag, or the absence of one.
///
/// Ordering is alphabetical on the rendered spelling, so [`LanguageTag::NoLocale`]
/// (rendered `NoLocale`) sorts before lower-case tags.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum LanguageTag {
    /// No language tag.
    NoLocale,
    /// An explicit tag such as `en` or `en-US`.
    Tag(String),
}

impl LanguageTag {
    /// Rendering of the no-tag sentinel.
    pub const NO_LOCALE: &'static str = "NoLocale";

    /// Builds a tag from an optional literal language.
    #[must_use]
    pub fn from_option(language: Option<&str>) -> Self {
        match language {
            Some(tag) if !tag.is_empty() => LanguageTag::Tag(tag.to_string()),
            _ => LanguageTag::NoLocale,
        }
    }

    /// Returns the rendered spelling (`NoLocale` for no tag).
    #[must_use]
    pub fn as_str(&self) -> &str {
        match self {
            LanguageTag::NoLocale => Self::NO_LOCALE,
            LanguageTag::Tag(tag) => tag,
        }
    }

    /// Returns true for the exact tag `en`.
    #[must_use]
    pub fn is_english(&self) -> bool {
        matches!(self, LanguageTag::Tag(tag) if tag.eq_ignore_ascii_case("en"))
    }

    /// Returns true for a regional English variant such as `en-US`.
    #[must_use]
    pub fn is_english_variant(&self) -> bool {
        matches!(self, LanguageTag::Tag(tag) if tag.len() > 3
            && tag.get(..3).is_some_and(|p| p.eq_ignore_ascii_case("en-")))
    }
}

impl Ord for LanguageTag {
    fn cmp(&self, other: &Self) -> Ordering {
        self.as_str().cmp(other.as_str())
    }
}

impl PartialOrd for LanguageTag {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl fmt::Display for LanguageTag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl Serialize for LanguageTag {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        // Renderers expect an empty tag for untagged text.
        match self {
            LanguageTag::NoLocale => serializer.serialize_str(""),
            LanguageTag::Tag(tag) => serializer.serialize_str(tag),
        }
    }
}

/// A piece of text in one language.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct LangString {
    /// Language of the text.
    pub language: LanguageTag,
    /// The text itself.
    pub text: String,
}

impl LangString {
    /// Creates a new language-tagged text.
    pub fn new(language: LanguageTag, text: impl Into<String>) -> Self {
        Self {
            language,
            text: text.into(),
        }
    }
}

/// A fully-resolved vocabulary term.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct VocabTerm {
    /// Full IRI.
    pub value: String,
    /// Raw local name.
    pub name: String,
    /// Local name escaped into a valid identifier.
    pub name_escaped_for_language: String,
    /// The single kind this term was classified as.
    pub kind: TermKind,
    /// Namespace of the owning vocabulary.
    pub namespace: String,
    /// Diagnostic summary of label/comment language coverage.
    pub term_description: String,
    /// Labels, in statement order.
    pub labels: Vec<LangString>,
    /// Comments (long-form descriptions), in statement order.
    pub comments: Vec<LangString>,
    /// `skos:definition` texts, in statement order.
    pub definitions: Vec<LangString>,
}

/// A complete vocabulary model.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Vocabulary {
    /// Namespace IRI.
    pub namespace: String,
    /// Preferred prefix.
    pub prefix: String,
    /// Display name.
    pub name: String,
    /// Canonical vocabulary description.
    pub description: String,
    /// Where the vocabulary came from (passed through from the options).
    pub input_resources: Vec<String>,
    /// Class terms.
    pub classes: Vec<VocabTerm>,
    /// Property terms.
    pub properties: Vec<VocabTerm>,
    /// Literal terms.
    pub literals: Vec<VocabTerm>,
    /// Constant-IRI terms.
    pub constant_iris: Vec<VocabTerm>,
    /// Constant-string terms.
    pub constant_strings: Vec<VocabTerm>,
}

impl Vocabulary {
    /// Returns the collection holding terms of `kind`.
    #[must_use]
    pub fn terms_of(&self, kind: TermKind) -> &[VocabTerm] {
        match kind {
            TermKind::Class => &self.classes,
            TermKind::Property => &self.properties,
            TermKind::Literal => &self.literals,
            TermKind::ConstantIri => &self.constant_iris,
            TermKind::ConstantString => &self.constant_strings,
        }
    }

    pub(crate) fn terms_of_mut(&mut self, kind: TermKind) -> &mut Vec<VocabTerm> {
        match kind {
            TermKind::Class => &mut self.classes,
            TermKind::Property => &mut self.properties,
            TermKind::Literal => &mut self.literals,
            TermKind::ConstantIri => &mut self.constant_iris,
            TermKind::ConstantString => &mut self.constant_strings,
        }
    }

    /// Returns the total number of terms across all collections.
    #[must_use]
    pub fn term_count(&self) -> usize {
        self.classes.len()
            + self.properties.len()
            + self.literals.len()
            + self.constant_iris.len()
            + self.constant_strings.len()
    }

    /// Looks up a term by its full IRI. Returns `None` if not found.
    #[must_use]
    pub fn find_term(&self, iri: &str) -> Option<&VocabTerm> {
        self.classes
            .iter()
            .chain(&self.properties)
            .chain(&self.literals)
            .chain(&self.constant_iris)
            .chain(&self.constant_strings)
            .find(|t| t.value == iri)
    }
}
