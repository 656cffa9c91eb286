//! Serializers for triple sources.
//!
//! Only N-Triples ([`ntriples`]) is provided: one statement per line, absolute
//! IRIs, in source order. N-Triples is also valid Turtle, so snapshots written
//! with it keep the `.ttl` extension.

pub mod ntriples;
