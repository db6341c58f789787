//! Calculated-Triple Inserter (spec.md §4.3): read-path-only injection of
//! containment, membership, and membership-reverse triples, driven by the
//! `Prefer` header's include/omit tokens.

use ldp_http::Prefer;
use rdf_vocabularies::ns;

use crate::model::{InteractionModel, MembershipRelation, Resource};
use crate::rdf::{iri, Graph};

/// Outcome of [`insert`]: the augmented graph plus whether any preference
/// was actually honored (spec.md §4.3: governs whether `Preference-Applied`
/// is emitted).
pub struct Inserted {
    pub graph: Graph,
    pub preference_applied: bool,
}

/// The backend's `getMembershipTriples` result for one of `resource`'s
/// [`membership_resource_for`](Resource::membership_resource_for) entries,
/// paired with the entry it belongs to, so the membership-reverse block can
/// attribute each member to the right container's relation.
pub struct ReverseMembers<'a> {
    pub container_uri: &'a str,
    pub relation: &'a MembershipRelation,
    pub members: Vec<String>,
}

/// Inject containment/membership/membership-reverse triples into a copy of
/// `resource.graph`, per `prefer`'s include/omit decision table.
///
/// `own_members` is `resource`'s own direct children (meaningful only when
/// `resource` is a container itself); `reverse` is one entry per container
/// that names `resource` as its membership resource, together with that
/// container's own members.
#[tracing::instrument(skip_all)]
pub fn insert(
    resource: &Resource,
    prefer: &Prefer,
    own_members: &[String],
    reverse: &[ReverseMembers<'_>],
) -> Inserted {
    let mut graph = resource.graph.clone();
    let mut preference_applied = false;

    if resource.interaction_model.is_container() {
        let (emit_containment, explicit) = prefer.resolve(&ns::ldp::PreferContainment.to_string());
        if emit_containment {
            for m in own_members {
                graph.insert([iri(&resource.uri), iri(ns::ldp::contains.to_string()), iri(m)]);
            }
        }
        preference_applied |= explicit;

        if let Some(relation) = has_member_relation(resource) {
            let (emit_membership, explicit) = prefer.resolve(&ns::ldp::PreferMembership.to_string());
            if emit_membership {
                let membership_resource = resource
                    .direct_container
                    .as_ref()
                    .expect("has_member_relation implies direct_container")
                    .membership_resource
                    .clone();
                for m in own_members {
                    graph.insert([iri(&membership_resource), iri(relation), iri(m)]);
                }
            }
            preference_applied |= explicit;
        }
    }

    if !reverse.is_empty() {
        let (emit, explicit) = prefer.resolve(&ns::ldp::PreferMembership.to_string());
        if emit {
            for entry in reverse {
                if let MembershipRelation::HasMember(relation) = entry.relation {
                    for m in &entry.members {
                        graph.insert([iri(&resource.uri), iri(relation), iri(m)]);
                    }
                }
            }
        }
        preference_applied |= explicit;
    }

    Inserted {
        graph,
        preference_applied,
    }
}

fn has_member_relation(resource: &Resource) -> Option<&str> {
    match resource.interaction_model {
        InteractionModel::DirectContainer => resource.has_member_relation(),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{DirectContainerMeta, MembershipResourceForEntry};

    fn basic_container(uri: &str) -> Resource {
        Resource {
            uri: uri.to_string(),
            graph: Graph::new(),
            interaction_model: InteractionModel::BasicContainer,
            direct_container: None,
            membership_resource_for: Vec::new(),
        }
    }

    #[test]
    fn default_prefer_includes_containment() {
        let resource = basic_container("http://h/r/c1");
        let prefer = Prefer::default();
        let out = insert(&resource, &prefer, &["http://h/r/c1/a".to_string()], &[]);
        assert!(out.graph.contains(&[
            iri("http://h/r/c1"),
            iri(ns::ldp::contains.to_string()),
            iri("http://h/r/c1/a"),
        ]));
    }

    #[test]
    fn omit_containment_suppresses_and_marks_applied() {
        let resource = basic_container("http://h/r/c1");
        let header = headers::HeaderValue::from_static(
            "return=representation; omit=\"http://www.w3.org/ns/ldp#PreferContainment\"",
        );
        let prefer = <Prefer as headers::Header>::decode(&mut std::iter::once(&header)).unwrap();
        let out = insert(&resource, &prefer, &["http://h/r/c1/a".to_string()], &[]);
        assert!(!out.graph.contains(&[
            iri("http://h/r/c1"),
            iri(ns::ldp::contains.to_string()),
            iri("http://h/r/c1/a"),
        ]));
        assert!(out.preference_applied);
    }

    #[test]
    fn membership_reverse_is_emitted_by_default() {
        let resource = Resource {
            uri: "http://h/r/mr".to_string(),
            graph: Graph::new(),
            interaction_model: InteractionModel::RdfSource,
            direct_container: None,
            membership_resource_for: vec![MembershipResourceForEntry {
                container_uri: "http://h/r/c2".to_string(),
                relation: MembershipRelation::HasMember("http://ex/has".to_string()),
            }],
        };
        let prefer = Prefer::default();
        let relation = MembershipRelation::HasMember("http://ex/has".to_string());
        let reverse = vec![ReverseMembers {
            container_uri: "http://h/r/c2",
            relation: &relation,
            members: vec!["http://h/r/c2/a".to_string()],
        }];
        let out = insert(&resource, &prefer, &[], &reverse);
        assert!(out.graph.contains(&[
            iri("http://h/r/mr"),
            iri("http://ex/has"),
            iri("http://h/r/c2/a"),
        ]));
    }

    #[test]
    fn direct_container_membership_targets_membership_resource() {
        let resource = Resource {
            uri: "http://h/r/c2".to_string(),
            graph: Graph::new(),
            interaction_model: InteractionModel::DirectContainer,
            direct_container: Some(DirectContainerMeta {
                membership_resource: "http://h/r/mr".to_string(),
                relation: MembershipRelation::HasMember("http://ex/has".to_string()),
            }),
            membership_resource_for: Vec::new(),
        };
        let prefer = Prefer::default();
        let out = insert(&resource, &prefer, &["http://h/r/c2/a".to_string()], &[]);
        assert!(out.graph.contains(&[
            iri("http://h/r/mr"),
            iri("http://ex/has"),
            iri("http://h/r/c2/a"),
        ]));
    }

    #[test]
    fn omit_membership_suppresses_reverse_block() {
        let resource = Resource {
            uri: "http://h/r/mr".to_string(),
            graph: Graph::new(),
            interaction_model: InteractionModel::RdfSource,
            direct_container: None,
            membership_resource_for: vec![MembershipResourceForEntry {
                container_uri: "http://h/r/c2".to_string(),
                relation: MembershipRelation::HasMember("http://ex/has".to_string()),
            }],
        };
        let header = headers::HeaderValue::from_static(
            "return=representation; omit=\"http://www.w3.org/ns/ldp#PreferMembership\"",
        );
        let prefer = <Prefer as headers::Header>::decode(&mut std::iter::once(&header)).unwrap();
        let relation = MembershipRelation::HasMember("http://ex/has".to_string());
        let reverse = vec![ReverseMembers {
            container_uri: "http://h/r/c2",
            relation: &relation,
            members: vec!["http://h/r/c2/a".to_string()],
        }];
        let out = insert(&resource, &prefer, &[], &reverse);
        assert!(!out.graph.contains(&[
            iri("http://h/r/mr"),
            iri("http://ex/has"),
            iri("http://h/r/c2/a"),
        ]));
        assert!(out.preference_applied);
    }
}
