//! I define types and statics for different invariants of rdf syntaxes.
//!

pub mod quads_parsable;
pub mod quads_serializable;
pub mod triples_parsable;
pub mod triples_serializable;

pub mod parsable;
pub mod serializable;
