//! Turtle loading into a [`Graph`].
//!
//! Parsing is delegated to `oxttl`; statements are converted into this
//! crate's owned [`Triple`]s in document order. RDF 1.2 triple terms are not
//! vocabulary statements and are skipped.

use std::path::{Path, PathBuf};

use oxrdf::{NamedOrBlankNode, Term as OxTerm};
use oxttl::TurtleParser;
use tracing::debug;

use crate::graph::{Graph, TripleSource};
use crate::term::{Literal, Term, Triple};
use crate::vocab::{RDF_LANG_STRING, XSD_STRING};

/// Errors raised while loading RDF input.
#[derive(Debug, thiserror::Error)]
pub enum RdfError {
    /// The supplied base IRI is not a valid IRI.
    #[error("invalid base IRI `{base}`: {message}")]
    BaseIri {
        /// The rejected base IRI.
        base: String,
        /// Parser message.
        message: String,
    },
    /// The document is not valid Turtle.
    #[error("failed to parse Turtle from `{origin}`: {message}")]
    Parse {
        /// File path or other description of the input.
        origin: String,
        /// Parser message, including the position when known.
        message: String,
    },
    /// The input file could not be read.
    #[error("failed to read RDF input `{path}`: {source}")]
    Io {
        /// The file that failed.
        path: PathBuf,
        /// Underlying I/O error.
        source: std::io::Error,
    },
}

/// Parses a Turtle document and appends its statements to `graph`.
///
/// # Errors
///
/// Returns [`RdfError::BaseIri`] for an invalid base IRI and
/// [`RdfError::Parse`] on the first syntax error.
pub fn extend_from_turtle(
    graph: &mut Graph,
    content: &str,
    base_iri: Option<&str>,
    origin: &str,
) -> Result<(), RdfError> {
    let mut parser = TurtleParser::new();
    if let Some(base) = base_iri {
        parser = parser.with_base_iri(base).map_err(|e| RdfError::BaseIri {
            base: base.to_string(),
            message: e.to_string(),
        })?;
    }

    let before = graph.len();
    for result in parser.for_reader(content.as_bytes()) {
        let triple = result.map_err(|e| RdfError::Parse {
            origin: origin.to_string(),
            message: e.to_string(),
        })?;
        if let Some(triple) = convert(triple) {
            graph.insert(triple);
        }
    }
    debug!(
        origin,
        added = graph.len() - before,
        "loaded Turtle statements"
    );
    Ok(())
}

/// Parses a Turtle document into a new graph.
///
/// # Errors
///
/// See [`extend_from_turtle`].
pub fn parse_turtle(content: &str, base_iri: Option<&str>) -> Result<Graph, RdfError> {
    let mut graph = Graph::new();
    extend_from_turtle(&mut graph, content, base_iri, "<string>")?;
    Ok(graph)
}

/// Reads and parses a Turtle file, appending its statements to `graph`.
///
/// # Errors
///
/// Returns [`RdfError::Io`] if the file cannot be read, otherwise see
/// [`extend_from_turtle`].
pub fn load_turtle_file(graph: &mut Graph, path: &Path) -> Result<(), RdfError> {
    let content = std::fs::read_to_string(path).map_err(|source| RdfError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    let origin = path.display().to_string();
    extend_from_turtle(graph, &content, None, &origin)
}

fn convert(triple: oxrdf::Triple) -> Option<Triple> {
    let subject = match triple.subject {
        NamedOrBlankNode::NamedNode(n) => Term::Iri(n.into_string()),
        NamedOrBlankNode::BlankNode(b) => Term::BlankNode(b.into_string()),
    };
    #[allow(unreachable_patterns)]
    let object = match triple.object {
        OxTerm::NamedNode(n) => Term::Iri(n.into_string()),
        OxTerm::BlankNode(b) => Term::BlankNode(b.into_string()),
        OxTerm::Literal(lit) => Term::Literal(convert_literal(&lit)),
        _ => return None,
    };
    Some(Triple::new(subject, triple.predicate.into_string(), object))
}

fn convert_literal(lit: &oxrdf::Literal) -> Literal {
    let datatype = lit.datatype().as_str();
    Literal {
        value: lit.value().to_string(),
        language: lit.language().map(str::to_string),
        datatype: (datatype != XSD_STRING && datatype != RDF_LANG_STRING)
            .then(|| datatype.to_string()),
    }
}
