//! `ServerContext`: the explicit replacement for the source's ambient
//! module-scope `db`/`appBase` state (spec.md §9's "Ambient mutable module
//! state" design note).

use std::sync::Arc;

use crate::backend::Backend;

/// Everything a request handler needs beyond the request itself: the
/// backend handle, the server's absolute base URL, and the configured
/// context path under which resources are served.
///
/// Cheaply cloneable (an `Arc` around the backend, plain `String`s for the
/// rest), so it can be handed to every handler invocation without a
/// reference-lifetime entanglement with the HTTP framework. Multiple
/// `ServerContext`s, each with a distinct `context_path`, let one process
/// host multiple independent LDP roots.
#[derive(Clone)]
pub struct ServerContext {
    backend: Arc<dyn Backend>,
    base_url: String,
    context_path: String,
}

impl ServerContext {
    /// Build a context. `base_url` must not have a trailing slash;
    /// `context_path` must start with `/` and not end with one (e.g. `/r`,
    /// matching spec.md §6's default).
    pub fn new(backend: Arc<dyn Backend>, base_url: impl Into<String>, context_path: impl Into<String>) -> Self {
        Self {
            backend,
            base_url: base_url.into(),
            context_path: context_path.into(),
        }
    }

    /// The backend this context dispatches storage operations to.
    pub fn backend(&self) -> &dyn Backend {
        self.backend.as_ref()
    }

    /// The configured context path, e.g. `/r`.
    pub fn context_path(&self) -> &str {
        &self.context_path
    }

    /// Resolve a request path (already stripped of query/fragment) under
    /// this context into the absolute resource URI the core operates on.
    pub fn resource_uri(&self, request_path: &str) -> String {
        format!("{}{}", self.base_url, request_path)
    }

    /// The absolute URI of this context's root container, i.e. the context
    /// path itself with a trailing slash.
    pub fn root_uri(&self) -> String {
        format!("{}{}/", self.base_url, self.context_path)
    }

    /// The `rel="http://www.w3.org/ns/ldp#constrainedBy"` target every
    /// response links to (spec.md §4.4).
    pub fn constraints_uri(&self) -> String {
        format!("{}/constraints.html", self.base_url)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::backend::{BackendError, ReserveOutcome, RemoveOutcome};
    use crate::model::{InsertTriple, Resource, ResourceWrite};
    use async_trait::async_trait;

    struct NullBackend;

    #[async_trait]
    impl Backend for NullBackend {
        async fn init(&self) -> Result<(), BackendError> {
            Ok(())
        }
        async fn reserve_uri(&self, _uri: &str) -> Result<ReserveOutcome, BackendError> {
            Ok(ReserveOutcome::Reserved)
        }
        async fn release_uri(&self, _uri: &str) {}
        async fn read(&self, _uri: &str) -> Result<Option<Resource>, BackendError> {
            Ok(None)
        }
        async fn update(&self, _write: ResourceWrite) -> Result<(), BackendError> {
            Ok(())
        }
        async fn insert_data(&self, _triples: &[InsertTriple], _target_uri: &str) -> Result<(), BackendError> {
            Ok(())
        }
        async fn remove(&self, _uri: &str) -> Result<RemoveOutcome, BackendError> {
            Ok(RemoveOutcome::NotFound)
        }
        async fn get_membership_triples(&self, _container: &str) -> Result<Vec<String>, BackendError> {
            Ok(Vec::new())
        }
        async fn find_container(&self, _uri: &str) -> Result<Option<String>, BackendError> {
            Ok(None)
        }
    }

    #[test]
    fn resolves_resource_and_root_uris() {
        let ctx = ServerContext::new(Arc::new(NullBackend), "http://h", "/r");
        assert_eq!(ctx.resource_uri("/r/c1"), "http://h/r/c1");
        assert_eq!(ctx.root_uri(), "http://h/r/");
    }
}
