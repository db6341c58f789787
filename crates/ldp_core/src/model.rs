//! The resource and interaction-model types of spec.md §3's Data Model.

use rdf_vocabularies::ns;

use crate::rdf::{Graph, RdfTerm};

/// The three interaction models a resource can classify as (spec.md §3, §4.2).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InteractionModel {
    /// A plain RDF resource; `GET`/`HEAD`/`PUT`/`DELETE` only.
    RdfSource,
    /// A container whose membership is the `ldp:contains` relation on
    /// itself.
    BasicContainer,
    /// A container whose membership is expressed on a separate
    /// [`membership resource`](DirectContainerMeta::membership_resource) via
    /// a declared predicate.
    DirectContainer,
}

impl InteractionModel {
    /// The LDP type IRI this model is classified from / re-asserted as on
    /// read (spec.md §4.2).
    pub fn type_iri(&self) -> String {
        match self {
            InteractionModel::RdfSource => ns::ldp::RDFSource.to_string(),
            InteractionModel::BasicContainer => ns::ldp::BasicContainer.to_string(),
            InteractionModel::DirectContainer => ns::ldp::DirectContainer.to_string(),
        }
    }

    /// Whether this model is any kind of container.
    pub fn is_container(&self) -> bool {
        !matches!(self, InteractionModel::RdfSource)
    }

    /// The `Allow` header value for a resource with this model (spec.md
    /// §4.4).
    pub fn allow_header(&self) -> &'static str {
        if self.is_container() {
            "GET,HEAD,DELETE,OPTIONS,POST"
        } else {
            "GET,HEAD,PUT,DELETE,OPTIONS"
        }
    }
}

/// Which of the two Direct Container membership predicates is in play, and
/// in which direction (spec.md §3: "exactly one of `hasMemberRelation` or
/// `isMemberOfRelation`").
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MembershipRelation {
    /// `(membershipResource, relation, member)`.
    HasMember(String),
    /// `(member, relation, membershipResource)`.
    IsMemberOf(String),
}

impl MembershipRelation {
    /// The predicate IRI itself, irrespective of direction.
    pub fn predicate(&self) -> &str {
        match self {
            MembershipRelation::HasMember(p) => p,
            MembershipRelation::IsMemberOf(p) => p,
        }
    }
}

/// Direct-Container-specific metadata, present only when
/// [`InteractionModel::DirectContainer`] (spec.md §3, Invariant I2).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DirectContainerMeta {
    /// The resource whose graph carries this container's membership
    /// triples.
    pub membership_resource: String,
    /// The declared membership predicate and its direction.
    pub relation: MembershipRelation,
}

/// A container naming `target` as its [`membership
/// resource`](DirectContainerMeta::membership_resource), for the reverse
/// relation spec.md §3 calls `membershipResourceFor`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MembershipResourceForEntry {
    /// The Direct Container's own URI.
    pub container_uri: String,
    /// Its declared membership relation.
    pub relation: MembershipRelation,
}

/// A resource as returned by the backend's `read` operation: stored triples
/// plus the derived metadata the backend is responsible for maintaining
/// (spec.md §6's `read(uri) → (graph, model-metadata)`).
#[derive(Debug, Clone)]
pub struct Resource {
    /// The resource's own URI.
    pub uri: String,
    /// The stored graph. Never contains containment or membership triples
    /// (Invariant I3) — those are injected on read by the
    /// [`inserter`](crate::inserter).
    pub graph: Graph,
    /// The resource's fixed interaction model (Invariant: immutable once
    /// persisted).
    pub interaction_model: InteractionModel,
    /// Present iff `interaction_model` is [`InteractionModel::DirectContainer`].
    pub direct_container: Option<DirectContainerMeta>,
    /// Direct Containers that name this resource as their membership
    /// resource.
    pub membership_resource_for: Vec<MembershipResourceForEntry>,
}

impl Resource {
    /// The `isMemberOfRelation` predicate, if this is a Direct Container
    /// declaring one (the reverse-direction counterpart of
    /// [`has_member_relation`](Self::has_member_relation)).
    pub fn is_member_of_relation(&self) -> Option<&str> {
        match &self.direct_container {
            Some(DirectContainerMeta {
                relation: MembershipRelation::IsMemberOf(p),
                ..
            }) => Some(p),
            _ => None,
        }
    }

    /// The `hasMemberRelation` predicate, if this is a Direct Container
    /// declaring one.
    pub fn has_member_relation(&self) -> Option<&str> {
        match &self.direct_container {
            Some(DirectContainerMeta {
                relation: MembershipRelation::HasMember(p),
                ..
            }) => Some(p),
            _ => None,
        }
    }
}

/// A fully formed resource graph ready to hand to the backend's `update`,
/// with derived triples already stripped (spec.md §4.6).
#[derive(Debug, Clone)]
pub struct ResourceWrite {
    /// The target URI.
    pub uri: String,
    /// The graph to persist, stripped of containment/membership triples.
    pub graph: Graph,
    /// The classified interaction model.
    pub interaction_model: InteractionModel,
    /// Direct Container membership declaration, if any.
    pub direct_container: Option<DirectContainerMeta>,
}

/// A single additive triple destined for `insertData` (spec.md §6): used
/// for Basic Container containment and `hasMemberRelation` side effects on
/// `POST` (spec.md §4.4 step 6).
pub type InsertTriple = [RdfTerm; 3];
