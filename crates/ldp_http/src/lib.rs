//! Typed HTTP headers and media-type negotiation for the LDP protocol core.
//!
//! This crate has no knowledge of RDF graphs or the backend contract; it
//! only understands HTTP syntax. [`ldp_core`](../ldp_core/index.html) wires
//! these types into the request-handling state machine.

pub mod conditional;
pub mod etag;
pub mod link;
pub mod media_type;
pub mod prefer;
pub mod slug;

pub use conditional::{evaluate_if_match, if_none_match_hits, IfMatchOutcome};
pub use link::Link;
pub use media_type::RdfSyntax;
pub use prefer::Prefer;
pub use slug::Slug;
