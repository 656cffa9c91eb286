//! N-Triples serializer.
//!
//! Produces a valid N-Triples document (one triple per line, absolute IRIs).
//! Output follows the source's insertion order, so identical input always
//! produces identical bytes. Snapshot hashing relies on that.

use crate::graph::TripleSource;
use crate::term::Triple;

/// Serializes every statement of `source` to an N-Triples string.
#[must_use]
pub fn to_ntriples<S: TripleSource + ?Sized>(source: &S) -> String {
    let mut out = String::with_capacity(source.len() * 96);
    for t in source.iter() {
        triple(&mut out, t);
    }
    out
}

fn triple(out: &mut String, t: &Triple) {
    out.push_str(&t.subject.to_string());
    out.push_str(" <");
    out.push_str(&t.predicate);
    out.push_str("> ");
    out.push_str(&t.object.to_string());
    out.push_str(" .\n");
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::term::Term;
    use crate::vocab::{RDFS_CLASS, RDFS_COMMENT, RDF_TYPE};
    use crate::Graph;

    fn sample() -> Graph {
        [
            Triple::new(Term::iri("http://ex/a"), RDF_TYPE, Term::iri(RDFS_CLASS)),
            Triple::new(
                Term::iri("http://ex/a"),
                RDFS_COMMENT,
                Term::lang_literal("line one\nline \"two\"", "en"),
            ),
        ]
        .into_iter()
        .collect()
    }

    #[test]
    fn every_line_ends_with_period() {
        let nt = to_ntriples(&sample());
        assert_eq!(nt.lines().count(), 2);
        for line in nt.lines() {
            assert!(line.ends_with(" ."), "Line does not end with ' .': {line}");
        }
    }

    #[test]
    fn escapes_literals_and_keeps_language() {
        let nt = to_ntriples(&sample());
        assert!(nt.contains("\"line one\\nline \\\"two\\\"\"@en ."));
    }

    #[test]
    fn empty_source_serializes_to_empty_string() {
        assert!(to_ntriples(&Graph::new()).is_empty());
    }
}
