//! An in-memory reference implementation of [`ldp_core::Backend`].
//!
//! Every resource lives as an [`Entry`] keyed by its own URI in a
//! [`DashMap`], with per-URI mutual exclusion provided by
//! [`name_locker::impl_::InmemNameLocker`] rather than a single global lock —
//! concurrent requests against unrelated URIs never contend (spec.md §5).
//! Containment is tracked purely as a backend-internal index
//! ([`Populated::children`]); it is never itself a triple in `graph`
//! (Invariant I3), matching how the real backend this stands in for would
//! keep its containment index separate from the RDF it stores.

use std::sync::Arc;

use async_trait::async_trait;
use dashmap::DashMap;
use ldp_core::backend::{Backend, BackendError, RemoveOutcome, ReserveOutcome};
use ldp_core::model::{
    DirectContainerMeta, InsertTriple, MembershipResourceForEntry, Resource, ResourceWrite,
};
use ldp_core::rdf::Graph;
use name_locker::impl_::InmemNameLocker;
use name_locker::{LockKind, NameLocker};
use sophia_api::term::Term as _;

use ldp_core::model::InteractionModel;

/// What is stored for one URI.
#[derive(Debug, Clone)]
enum Entry {
    /// Claimed by `reserveURI` but never populated (spec.md §4.5).
    Reserved,
    /// A fully formed resource.
    Populated(Populated),
}

#[derive(Debug, Clone)]
struct Populated {
    graph: Graph,
    interaction_model: InteractionModel,
    direct_container: Option<DirectContainerMeta>,
    /// This container's direct children, by URI. The backend-internal
    /// containment index; never surfaces as a stored `ldp:contains` triple.
    children: Vec<String>,
}

/// The in-memory [`Backend`].
#[derive(Debug, Clone)]
pub struct InMemBackend {
    store: Arc<DashMap<String, Entry>>,
    locker: Arc<InmemNameLocker<String>>,
}

impl Default for InMemBackend {
    fn default() -> Self {
        Self::new()
    }
}

impl InMemBackend {
    /// An empty store.
    pub fn new() -> Self {
        Self {
            store: Arc::new(DashMap::new()),
            locker: Arc::new(InmemNameLocker::new()),
        }
    }
}

fn object_iri(triple: &InsertTriple) -> Option<String> {
    triple[2].iri().map(|i| i.as_str().to_string())
}

#[async_trait]
impl Backend for InMemBackend {
    async fn init(&self) -> Result<(), BackendError> {
        Ok(())
    }

    #[tracing::instrument(skip(self))]
    async fn reserve_uri(&self, uri: &str) -> Result<ReserveOutcome, BackendError> {
        let store = self.store.clone();
        let name = uri.to_string();
        let key = name.clone();
        let outcome = self
            .locker
            .poll_with_lock(
                async move {
                    if store.contains_key(&key) {
                        Ok(ReserveOutcome::Occupied)
                    } else {
                        store.insert(key, Entry::Reserved);
                        Ok(ReserveOutcome::Reserved)
                    }
                },
                Some(name),
                LockKind::Exclusive,
            )
            .await;
        if matches!(outcome, Ok(ReserveOutcome::Occupied)) {
            tracing::debug!("uri already occupied");
        }
        outcome
    }

    #[tracing::instrument(skip(self))]
    async fn release_uri(&self, uri: &str) {
        let store = self.store.clone();
        let name = uri.to_string();
        let key = name.clone();
        self.locker
            .poll_with_lock(
                async move {
                    store.remove_if(&key, |_, entry| matches!(entry, Entry::Reserved));
                },
                Some(name),
                LockKind::Exclusive,
            )
            .await
    }

    #[tracing::instrument(skip(self))]
    async fn read(&self, uri: &str) -> Result<Option<Resource>, BackendError> {
        let store = self.store.clone();
        let name = uri.to_string();
        let key = name.clone();
        self.locker
            .poll_with_lock(
                async move {
                    let populated = match store.get(&key) {
                        None => return Ok(None),
                        Some(entry) => match &*entry {
                            Entry::Reserved => return Ok(None),
                            Entry::Populated(p) => p.clone(),
                        },
                    };

                    let membership_resource_for: Vec<MembershipResourceForEntry> = store
                        .iter()
                        .filter_map(|r| match r.value() {
                            Entry::Populated(p) => p.direct_container.as_ref().and_then(|dc| {
                                if dc.membership_resource == key {
                                    Some(MembershipResourceForEntry {
                                        container_uri: r.key().clone(),
                                        relation: dc.relation.clone(),
                                    })
                                } else {
                                    None
                                }
                            }),
                            Entry::Reserved => None,
                        })
                        .collect();

                    Ok(Some(Resource {
                        uri: key,
                        graph: populated.graph,
                        interaction_model: populated.interaction_model,
                        direct_container: populated.direct_container,
                        membership_resource_for,
                    }))
                },
                Some(name),
                LockKind::Shared,
            )
            .await
    }

    #[tracing::instrument(skip(self, write), fields(uri = %write.uri))]
    async fn update(&self, write: ResourceWrite) -> Result<(), BackendError> {
        let store = self.store.clone();
        let name = write.uri.clone();
        let key = name.clone();
        self.locker
            .poll_with_lock(
                async move {
                    let children = match store.get(&key) {
                        Some(entry) => match &*entry {
                            Entry::Populated(p) => p.children.clone(),
                            Entry::Reserved => Vec::new(),
                        },
                        None => Vec::new(),
                    };
                    store.insert(
                        key,
                        Entry::Populated(Populated {
                            graph: write.graph,
                            interaction_model: write.interaction_model,
                            direct_container: write.direct_container,
                            children,
                        }),
                    );
                    Ok(())
                },
                Some(name),
                LockKind::Exclusive,
            )
            .await
    }

    #[tracing::instrument(skip(self, triples))]
    async fn insert_data(
        &self,
        triples: &[InsertTriple],
        target_uri: &str,
    ) -> Result<(), BackendError> {
        let store = self.store.clone();
        let name = target_uri.to_string();
        let key = name.clone();
        let new_children: Vec<String> = triples.iter().filter_map(object_iri).collect();
        tracing::trace!(count = new_children.len(), "inserting membership triples");
        self.locker
            .poll_with_lock(
                async move {
                    let mut entry = store.get_mut(&key).ok_or_else(|| {
                        BackendError::Invariant(format!(
                            "insertData target {key} does not exist"
                        ))
                    })?;
                    let populated = match &mut *entry {
                        Entry::Populated(p) => p,
                        Entry::Reserved => {
                            return Err(BackendError::Invariant(format!(
                                "insertData target {key} is only reserved, not populated"
                            )))
                        }
                    };
                    for child in new_children {
                        if !populated.children.contains(&child) {
                            populated.children.push(child);
                        }
                    }
                    Ok(())
                },
                Some(name),
                LockKind::Exclusive,
            )
            .await
    }

    #[tracing::instrument(skip(self))]
    async fn remove(&self, uri: &str) -> Result<RemoveOutcome, BackendError> {
        let store = self.store.clone();
        let name = uri.to_string();
        let key = name.clone();
        let outcome = self
            .locker
            .poll_with_lock(
                async move {
                    let removed =
                        store.remove_if(&key, |_, entry| matches!(entry, Entry::Populated(_)));
                    Ok(if removed.is_some() {
                        RemoveOutcome::Removed
                    } else {
                        RemoveOutcome::NotFound
                    })
                },
                Some(name),
                LockKind::Exclusive,
            )
            .await;
        tracing::debug!(?outcome, "remove completed");
        outcome
    }

    #[tracing::instrument(skip(self))]
    async fn get_membership_triples(&self, container: &str) -> Result<Vec<String>, BackendError> {
        let store = self.store.clone();
        let name = container.to_string();
        let key = name.clone();
        self.locker
            .poll_with_lock(
                async move {
                    Ok(match store.get(&key) {
                        Some(entry) => match &*entry {
                            Entry::Populated(p) => p.children.clone(),
                            Entry::Reserved => Vec::new(),
                        },
                        None => Vec::new(),
                    })
                },
                Some(name),
                LockKind::Shared,
            )
            .await
    }

    #[tracing::instrument(skip(self))]
    async fn find_container(&self, uri: &str) -> Result<Option<String>, BackendError> {
        let store = self.store.clone();
        let uri_owned = uri.to_string();
        self.locker
            .poll_with_lock(
                async move {
                    Ok(store.iter().find_map(|r| match r.value() {
                        Entry::Populated(p) if p.children.contains(&uri_owned) => {
                            Some(r.key().clone())
                        }
                        _ => None,
                    }))
                },
                None,
                LockKind::Shared,
            )
            .await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ldp_core::model::MembershipRelation;

    fn root_write(uri: &str, model: InteractionModel) -> ResourceWrite {
        ResourceWrite {
            uri: uri.to_string(),
            graph: Graph::new(),
            interaction_model: model,
            direct_container: None,
        }
    }

    #[tokio::test]
    async fn reserve_then_read_is_invisible_until_populated() {
        let backend = InMemBackend::new();
        assert_eq!(
            backend.reserve_uri("http://h/r/a").await.unwrap(),
            ReserveOutcome::Reserved
        );
        assert_eq!(
            backend.reserve_uri("http://h/r/a").await.unwrap(),
            ReserveOutcome::Occupied
        );
        assert!(backend.read("http://h/r/a").await.unwrap().is_none());
    }

    #[tokio::test]
    async fn release_does_not_touch_populated_resource() {
        let backend = InMemBackend::new();
        backend.reserve_uri("http://h/r/a").await.unwrap();
        backend
            .update(root_write("http://h/r/a", InteractionModel::RdfSource))
            .await
            .unwrap();
        backend.release_uri("http://h/r/a").await;
        assert!(backend.read("http://h/r/a").await.unwrap().is_some());
    }

    #[tokio::test]
    async fn update_preserves_existing_children_across_replace() {
        let backend = InMemBackend::new();
        backend
            .update(root_write(
                "http://h/r/c",
                InteractionModel::BasicContainer,
            ))
            .await
            .unwrap();
        backend
            .insert_data(
                &[[
                    ldp_core::rdf::iri("http://h/r/c"),
                    ldp_core::rdf::iri("http://www.w3.org/ns/ldp#contains"),
                    ldp_core::rdf::iri("http://h/r/c/m1"),
                ]],
                "http://h/r/c",
            )
            .await
            .unwrap();

        backend
            .update(root_write(
                "http://h/r/c",
                InteractionModel::BasicContainer,
            ))
            .await
            .unwrap();

        assert_eq!(
            backend.get_membership_triples("http://h/r/c").await.unwrap(),
            vec!["http://h/r/c/m1".to_string()]
        );
    }

    #[tokio::test]
    async fn insert_data_rejects_reserved_only_target() {
        let backend = InMemBackend::new();
        backend.reserve_uri("http://h/r/c").await.unwrap();
        let err = backend
            .insert_data(
                &[[
                    ldp_core::rdf::iri("http://h/r/c"),
                    ldp_core::rdf::iri("http://www.w3.org/ns/ldp#contains"),
                    ldp_core::rdf::iri("http://h/r/c/m1"),
                ]],
                "http://h/r/c",
            )
            .await;
        assert!(matches!(err, Err(BackendError::Invariant(_))));
    }

    #[tokio::test]
    async fn remove_does_not_cascade_to_children_index() {
        let backend = InMemBackend::new();
        backend
            .update(root_write(
                "http://h/r/c",
                InteractionModel::BasicContainer,
            ))
            .await
            .unwrap();
        backend
            .update(root_write("http://h/r/c/m1", InteractionModel::RdfSource))
            .await
            .unwrap();
        backend
            .insert_data(
                &[[
                    ldp_core::rdf::iri("http://h/r/c"),
                    ldp_core::rdf::iri("http://www.w3.org/ns/ldp#contains"),
                    ldp_core::rdf::iri("http://h/r/c/m1"),
                ]],
                "http://h/r/c",
            )
            .await
            .unwrap();

        assert_eq!(
            backend.remove("http://h/r/c/m1").await.unwrap(),
            RemoveOutcome::Removed
        );
        // The containment index on the parent is left untouched; a
        // dangling member URI is a controller/inserter-level concern, not
        // this backend's.
        assert_eq!(
            backend.get_membership_triples("http://h/r/c").await.unwrap(),
            vec!["http://h/r/c/m1".to_string()]
        );
        assert_eq!(backend.remove("http://h/r/c/m1").await.unwrap(), RemoveOutcome::NotFound);
    }

    #[tokio::test]
    async fn read_computes_membership_resource_for_reverse_index() {
        let backend = InMemBackend::new();
        backend
            .update(root_write(
                "http://h/r/target",
                InteractionModel::RdfSource,
            ))
            .await
            .unwrap();

        let dc_write = ResourceWrite {
            uri: "http://h/r/dc".to_string(),
            graph: Graph::new(),
            interaction_model: InteractionModel::DirectContainer,
            direct_container: Some(DirectContainerMeta {
                membership_resource: "http://h/r/target".to_string(),
                relation: MembershipRelation::HasMember(
                    "http://example.org/hasMember".to_string(),
                ),
            }),
        };
        backend.update(dc_write).await.unwrap();

        let target = backend.read("http://h/r/target").await.unwrap().unwrap();
        assert_eq!(target.membership_resource_for.len(), 1);
        assert_eq!(target.membership_resource_for[0].container_uri, "http://h/r/dc");
    }

    #[tokio::test]
    async fn find_container_locates_parent_via_children_index() {
        let backend = InMemBackend::new();
        backend
            .update(root_write(
                "http://h/r/c",
                InteractionModel::BasicContainer,
            ))
            .await
            .unwrap();
        backend
            .insert_data(
                &[[
                    ldp_core::rdf::iri("http://h/r/c"),
                    ldp_core::rdf::iri("http://www.w3.org/ns/ldp#contains"),
                    ldp_core::rdf::iri("http://h/r/c/m1"),
                ]],
                "http://h/r/c",
            )
            .await
            .unwrap();

        assert_eq!(
            backend.find_container("http://h/r/c/m1").await.unwrap(),
            Some("http://h/r/c".to_string())
        );
        assert_eq!(backend.find_container("http://h/r/nope").await.unwrap(), None);
    }
}
