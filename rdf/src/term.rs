//! Core RDF term types.
//!
//! Statements are owned and immutable once inserted into a
//! [`Graph`](crate::Graph). IRIs are kept as plain strings: the input is
//! assumed to be syntactically valid RDF.

use std::fmt;

/// A literal value with an optional language tag and datatype IRI.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Literal {
    /// Lexical form.
    pub value: String,
    /// Language tag (e.g. `"en"`, `"en-US"`), or `None` for untagged literals.
    pub language: Option<String>,
    /// Datatype IRI, or `None` for plain and language-tagged literals.
    pub datatype: Option<String>,
}

/// A node in subject or object position.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Term {
    /// A named node.
    Iri(String),
    /// A blank node, identified by its local label.
    BlankNode(String),
    /// A literal (object position only).
    Literal(Literal),
}

impl Term {
    /// Creates a named-node term.
    pub fn iri(iri: impl Into<String>) -> Self {
        Term::Iri(iri.into())
    }

    /// Creates a blank-node term.
    pub fn blank(label: impl Into<String>) -> Self {
        Term::BlankNode(label.into())
    }

    /// Creates an untagged plain literal.
    pub fn literal(value: impl Into<String>) -> Self {
        Term::Literal(Literal {
            value: value.into(),
            language: None,
            datatype: None,
        })
    }

    /// Creates a language-tagged literal.
    pub fn lang_literal(value: impl Into<String>, language: impl Into<String>) -> Self {
        Term::Literal(Literal {
            value: value.into(),
            language: Some(language.into()),
            datatype: None,
        })
    }

    /// Creates a typed literal.
    pub fn typed_literal(value: impl Into<String>, datatype: impl Into<String>) -> Self {
        Term::Literal(Literal {
            value: value.into(),
            language: None,
            datatype: Some(datatype.into()),
        })
    }

    /// Returns the IRI if this term is a named node.
    #[must_use]
    pub fn as_iri(&self) -> Option<&str> {
        match self {
            Term::Iri(iri) => Some(iri),
            _ => None,
        }
    }

    /// Returns the literal if this term is one.
    #[must_use]
    pub fn as_literal(&self) -> Option<&Literal> {
        match self {
            Term::Literal(lit) => Some(lit),
            _ => None,
        }
    }

    /// Returns the IRI or the literal's lexical form, whichever applies.
    ///
    /// Useful for annotation predicates (such as `vann:preferredNamespaceUri`)
    /// that appear with either kind of object in the wild.
    #[must_use]
    pub fn iri_or_lexical(&self) -> Option<&str> {
        match self {
            Term::Iri(iri) => Some(iri),
            Term::Literal(lit) => Some(&lit.value),
            Term::BlankNode(_) => None,
        }
    }
}

impl fmt::Display for Term {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Term::Iri(iri) => write!(f, "<{iri}>"),
            Term::BlankNode(label) => write!(f, "_:{label}"),
            Term::Literal(lit) => {
                write!(f, "\"{}\"", escape_literal(&lit.value))?;
                if let Some(lang) = &lit.language {
                    write!(f, "@{lang}")
                } else if let Some(datatype) = &lit.datatype {
                    write!(f, "^^<{datatype}>")
                } else {
                    Ok(())
                }
            }
        }
    }
}

/// A single subject–predicate–object statement.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Triple {
    /// Subject (a named node or blank node).
    pub subject: Term,
    /// Predicate IRI.
    pub predicate: String,
    /// Object.
    pub object: Term,
}

impl Triple {
    /// Creates a new statement.
    pub fn new(subject: Term, predicate: impl Into<String>, object: Term) -> Self {
        Self {
            subject,
            predicate: predicate.into(),
            object,
        }
    }

    /// Returns the subject IRI, or `None` for a blank-node subject.
    #[must_use]
    pub fn subject_iri(&self) -> Option<&str> {
        self.subject.as_iri()
    }
}

/// Escapes a lexical form for N-Triples/Turtle string syntax.
pub(crate) fn escape_literal(s: &str) -> String {
    s.replace('\\', "\\\\")
        .replace('"', "\\\"")
        .replace('\n', "\\n")
        .replace('\r', "\\r")
}
