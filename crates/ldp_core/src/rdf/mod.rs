//! The in-memory RDF graph model shared by every other component, and the
//! codec that moves it to and from the wire.

pub mod codec;

use std::collections::HashSet;

use rdf_utils::model::term::OwnedTerm;
use sophia_api::{prelude::IriRef, term::Term as _};

/// The term type every triple in this crate is built from. An owned,
/// allocation-backed [`sophia_api::term::Term`] implementation, reused
/// directly from the teacher's own RDF utility crate rather than
/// reimplemented here.
pub type RdfTerm = OwnedTerm;

/// A triple of [`RdfTerm`]s.
pub type Triple = [RdfTerm; 3];

/// An RDF graph: a duplicate-free set of triples, indexed by Rust's
/// `HashSet`. `sophia_api` provides the `Graph`/`MutableGraph`/
/// `CollectibleGraph` implementations for this shape out of the box, so no
/// wrapper type is needed (see spec.md §9's "graph model" design note).
pub type Graph = HashSet<Triple>;

/// Build an IRI term from an absolute or relative-resolved URI string.
/// Callers are expected to pass already-resolved, server-controlled IRIs
/// (vocabulary terms, resource URIs); client-supplied graphs are validated
/// by the RDF parser itself before any term reaches this crate.
pub fn iri(s: impl Into<String>) -> RdfTerm {
    OwnedTerm::Iri(IriRef::new_unchecked(s.into()))
}

/// True if `term` is the IRI `s`.
pub fn is_iri(term: &RdfTerm, s: &str) -> bool {
    term.iri().is_some_and(|i| i.as_str() == s)
}

/// Find the (at most one, first found) object of triples matching
/// `(subject, predicate, ?)` in `graph`.
pub fn find_object<'g>(graph: &'g Graph, subject: &RdfTerm, predicate: &str) -> Option<&'g RdfTerm> {
    graph.iter().find_map(|[s, p, o]| {
        if s == subject && is_iri(p, predicate) {
            Some(o)
        } else {
            None
        }
    })
}

/// Remove every triple matching `(subject, predicate, ?)` from `graph`,
/// returning how many were removed.
pub fn remove_matching(graph: &mut Graph, subject: &RdfTerm, predicate: &str) -> usize {
    let to_remove: Vec<Triple> = graph
        .iter()
        .filter(|[s, p, _]| s == subject && is_iri(p, predicate))
        .cloned()
        .collect();
    let n = to_remove.len();
    for t in to_remove {
        graph.remove(&t);
    }
    n
}
