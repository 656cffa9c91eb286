//! IRI → identifier mapping.
//!
//! Deterministic derivation of local names and namespaces from IRIs, and the
//! escaping that makes a local name usable as an identifier in every target
//! language a renderer might emit.

/// Extracts the local name from a full IRI (after the last `/` or `#`).
///
/// An IRI ending in a delimiter has an empty local name.
#[must_use]
pub fn local_name(iri: &str) -> &str {
    match iri.rfind(|c: char| c == '#' || c == '/') {
        Some(pos) => &iri[pos + 1..],
        None => iri,
    }
}

/// Returns the IRI with its local name removed, keeping the delimiter.
///
/// E.g. `"https://ex.com/vocab#Thing"` → `"https://ex.com/vocab#"`.
#[must_use]
pub fn namespace_of(iri: &str) -> &str {
    &iri[..iri.len() - local_name(iri).len()]
}

fn is_delimiter(c: char) -> bool {
    c == '#' || c == '/'
}

/// Returns the part of `iri` inside `namespace`, or `None` if the IRI lies
/// outside it.
///
/// A namespace ending in `#`, `/` or `:` contains every IRI it prefixes. One
/// without a trailing delimiter (an ontology IRI such as
/// `https://ex.com/vocab`) only contains IRIs continuing with `#` or `/`, and
/// that delimiter is not part of the returned remainder.
#[must_use]
pub fn strip_namespace<'a>(iri: &'a str, namespace: &str) -> Option<&'a str> {
    let rest = iri.strip_prefix(namespace)?;
    if rest.is_empty()
        || namespace.is_empty()
        || namespace.ends_with(|c: char| is_delimiter(c) || c == ':')
    {
        return Some(rest);
    }
    rest.strip_prefix(is_delimiter)
}

/// Returns the local name of a term relative to its vocabulary namespace.
///
/// Terms inside the namespace keep everything after it (which may itself
/// contain `/`); terms from elsewhere fall back to [`local_name`].
#[must_use]
pub fn term_name<'a>(iri: &'a str, namespace: &str) -> &'a str {
    match strip_namespace(iri, namespace) {
        Some(rest) if !rest.is_empty() => rest,
        _ => local_name(iri),
    }
}

/// Escapes a local name into an identifier valid across target languages.
///
/// Letters and digits (Unicode included) and `_` are kept, anything else
/// becomes `_`. A leading digit is prefixed with `_`
/// (`"0To60Mph"` → `"_0To60Mph"`). Distinct names can still escape to the
/// same identifier; the builder disambiguates those.
#[must_use]
pub fn escape_for_language(name: &str) -> String {
    let mut result = String::with_capacity(name.len() + 1);
    if name.starts_with(char::is_numeric) {
        result.push('_');
    }
    for ch in name.chars() {
        if ch.is_alphanumeric() || ch == '_' {
            result.push(ch);
        } else {
            result.push('_');
        }
    }
    result
}

/// Replaces characters that are awkward in file names (`:` and `/`) with `-`.
///
/// `"https://rdf-extension.com#"` → `"https---rdf-extension.com#"`.
#[must_use]
pub fn sanitize_for_file_name(s: &str) -> String {
    s.chars()
        .map(|c| if c == ':' || c == '/' { '-' } else { c })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn local_name_extraction() {
        assert_eq!(local_name("https://rdf-extension.com#testTerm"), "testTerm");
        assert_eq!(local_name("http://xmlns.com/foaf/0.1/Person"), "Person");
        assert_eq!(local_name("https://test.ex.com/vocab#"), "");
        assert_eq!(local_name("urn:example"), "urn:example");
    }

    #[test]
    fn namespace_extraction() {
        assert_eq!(
            namespace_of("https://rdf-extension.com#testTerm"),
            "https://rdf-extension.com#"
        );
        assert_eq!(
            namespace_of("http://xmlns.com/foaf/0.1/Person"),
            "http://xmlns.com/foaf/0.1/"
        );
        assert_eq!(namespace_of("urn:example"), "");
    }

    #[test]
    fn term_name_prefers_namespace_relative_name() {
        assert_eq!(term_name("https://ex.com/ns/a/b", "https://ex.com/ns/"), "a/b");
        assert_eq!(term_name("https://other.com#x", "https://ex.com/ns/"), "x");
        assert_eq!(term_name("https://ex.com/ns/", "https://ex.com/ns/"), "");
    }

    #[test]
    fn ontology_iri_namespace_drops_the_delimiter() {
        assert_eq!(term_name("https://ex.com/vocab#Thing", "https://ex.com/vocab"), "Thing");
        assert_eq!(term_name("https://ex.com/vocab/a/b", "https://ex.com/vocab"), "a/b");
        assert_eq!(
            term_name("https://ex.com/vocabulary#X", "https://ex.com/vocab"),
            "X"
        );
    }

    #[test]
    fn namespace_membership_requires_a_delimiter_boundary() {
        assert_eq!(
            strip_namespace("https://ex.com/vocab#Y", "https://ex.com/vocab"),
            Some("Y")
        );
        assert_eq!(
            strip_namespace("https://ex.com/vocabulary#X", "https://ex.com/vocab"),
            None
        );
        assert_eq!(
            strip_namespace("https://ex.com/vocab#Y", "https://ex.com/vocab#"),
            Some("Y")
        );
        assert_eq!(strip_namespace("urn:ex:thing", "urn:ex:"), Some("thing"));
        assert_eq!(strip_namespace("https://other.com#Y", "https://ex.com/vocab#"), None);
    }

    #[test]
    fn escaping() {
        assert_eq!(escape_for_language("0To60Mph"), "_0To60Mph");
        assert_eq!(escape_for_language("testTerm"), "testTerm");
        assert_eq!(escape_for_language("has-part.v2"), "has_part_v2");
        assert_eq!(escape_for_language("a/b"), "a_b");
    }

    #[test]
    fn escaping_keeps_non_ascii_letters() {
        assert_eq!(escape_for_language("Größe"), "Größe");
        assert_eq!(escape_for_language("Gr-ße"), "Gr_ße");
        assert_eq!(escape_for_language("名前"), "名前");
        assert_eq!(escape_for_language("٣abc"), "_٣abc");
    }

    #[test]
    fn file_name_sanitizing() {
        assert_eq!(
            sanitize_for_file_name("https://rdf-extension.com#"),
            "https---rdf-extension.com#"
        );
    }
}
