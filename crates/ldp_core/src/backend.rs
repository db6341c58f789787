//! The pluggable storage contract the controller consumes (spec.md §6,
//! "Backend contract"). [`ldp_backend_mem`](../ldp_backend_mem/index.html)
//! is the in-memory reference implementation.

use async_trait::async_trait;

use crate::model::{InsertTriple, Resource, ResourceWrite};

/// A backend-reported failure, opaque to the protocol core beyond its
/// display text (spec.md §7: "backend-reported errors ... map to 500").
#[derive(Debug, thiserror::Error, Clone, PartialEq, Eq)]
pub enum BackendError {
    /// Storage I/O or similar infrastructure failure.
    #[error("backend I/O error: {0}")]
    Io(String),

    /// The backend's internal invariants were violated in a way the
    /// protocol core cannot itself have caused (e.g. lock poisoning).
    #[error("backend invariant violation: {0}")]
    Invariant(String),
}

/// The outcome of a `reserveURI` call (spec.md §4.5: "two-phase op").
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReserveOutcome {
    /// The URI was free and is now reserved by the caller.
    Reserved,
    /// The URI is already reserved or populated.
    Occupied,
}

/// The outcome of a `remove` call.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RemoveOutcome {
    /// A resource existed at the URI and was removed.
    Removed,
    /// No resource existed at the URI.
    NotFound,
}

/// The pluggable storage surface (spec.md §6's "Backend contract").
///
/// Every method here corresponds 1:1 to a bullet in that section.
/// Implementations own all cross-request mutual exclusion (spec.md §5):
/// the core never holds a lock across one of these calls.
#[async_trait]
pub trait Backend: Send + Sync {
    /// Prepare the store. Called once at startup.
    async fn init(&self) -> Result<(), BackendError>;

    /// Atomically claim `uri`, failing if it is already reserved or
    /// populated (Invariant I4).
    async fn reserve_uri(&self, uri: &str) -> Result<ReserveOutcome, BackendError>;

    /// Release a reservation that was never populated, or a populated
    /// resource being rolled back. Best-effort and idempotent.
    async fn release_uri(&self, uri: &str);

    /// Read the stored resource and its derived metadata. `None` if no
    /// resource (reserved or populated) exists at `uri`.
    async fn read(&self, uri: &str) -> Result<Option<Resource>, BackendError>;

    /// Persist a fully formed resource graph, creating or replacing
    /// whatever was at `write.uri`.
    async fn update(&self, write: ResourceWrite) -> Result<(), BackendError>;

    /// Additively write `triples` into the resource already stored at
    /// `target_uri` (used for Basic Container containment and
    /// `hasMemberRelation` side effects on `POST`, spec.md §4.4 step 6).
    async fn insert_data(
        &self,
        triples: &[InsertTriple],
        target_uri: &str,
    ) -> Result<(), BackendError>;

    /// Delete the resource at `uri`. No cascade to members.
    async fn remove(&self, uri: &str) -> Result<RemoveOutcome, BackendError>;

    /// List the direct children of `container`, as the member URIs the
    /// Inserter turns into containment/membership triples.
    async fn get_membership_triples(&self, container: &str) -> Result<Vec<String>, BackendError>;

    /// Identify the parent container for `uri`, if any. Optional per
    /// spec.md §6 ("used by some POST paths"); the reference backend
    /// derives it from its own index.
    async fn find_container(&self, uri: &str) -> Result<Option<String>, BackendError>;
}
