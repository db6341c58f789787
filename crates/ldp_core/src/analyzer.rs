//! Interaction Model Analyzer (spec.md §4.2): classifies a graph's
//! interaction model from its RDF types, honoring the client's `Link`
//! override and the Direct Container membership invariant (I2).

use ldp_http::Link;
use rdf_vocabularies::ns;

use crate::error::LdpError;
use crate::model::{DirectContainerMeta, InteractionModel, MembershipRelation};
use crate::rdf::{find_object, Graph};

/// Classify `graph` (whose subject-of-interest is `uri`) into an
/// interaction model plus, for Direct Containers, their membership
/// metadata.
///
/// If `link_override` carries `Link: <ldp:Resource>; rel="type"`, the
/// classification is forced to [`InteractionModel::RdfSource`] regardless
/// of the graph's RDF types (spec.md §4.2).
#[tracing::instrument(skip(graph, link_override))]
pub fn classify(
    graph: &Graph,
    uri: &str,
    link_override: Option<&Link>,
) -> Result<(InteractionModel, Option<DirectContainerMeta>), LdpError> {
    if link_override.is_some_and(Link::requests_rdf_source_override) {
        return Ok((InteractionModel::RdfSource, None));
    }

    let u = crate::rdf::iri(uri);

    let is_direct = graph.contains(&[
        u.clone(),
        crate::rdf::iri(ns::rdf::type_.to_string()),
        crate::rdf::iri(ns::ldp::DirectContainer.to_string()),
    ]);
    let is_basic = graph.contains(&[
        u.clone(),
        crate::rdf::iri(ns::rdf::type_.to_string()),
        crate::rdf::iri(ns::ldp::BasicContainer.to_string()),
    ]);

    if is_direct {
        let meta = extract_direct_container_meta(graph, &u)?;
        Ok((InteractionModel::DirectContainer, Some(meta)))
    } else if is_basic {
        Ok((InteractionModel::BasicContainer, None))
    } else {
        Ok((InteractionModel::RdfSource, None))
    }
}

fn extract_direct_container_meta(
    graph: &Graph,
    subject: &crate::rdf::RdfTerm,
) -> Result<DirectContainerMeta, LdpError> {
    let membership_resource = find_object(graph, subject, &ns::ldp::membershipResource.to_string())
        .and_then(|t| t.iri().map(|i| i.as_str().to_string()))
        .ok_or_else(|| {
            LdpError::InvalidLdpPattern("DirectContainer missing ldp:membershipResource".into())
        })?;

    let has_member = find_object(graph, subject, &ns::ldp::hasMemberRelation.to_string())
        .and_then(|t| t.iri().map(|i| i.as_str().to_string()));
    let is_member_of = find_object(graph, subject, &ns::ldp::isMemberOfRelation.to_string())
        .and_then(|t| t.iri().map(|i| i.as_str().to_string()));

    let relation = match (has_member, is_member_of) {
        (Some(r), None) => MembershipRelation::HasMember(r),
        (None, Some(r)) => MembershipRelation::IsMemberOf(r),
        (None, None) => {
            return Err(LdpError::InvalidLdpPattern(
                "DirectContainer declares neither hasMemberRelation nor isMemberOfRelation".into(),
            ))
        }
        (Some(_), Some(_)) => {
            return Err(LdpError::InvalidLdpPattern(
                "DirectContainer declares both hasMemberRelation and isMemberOfRelation".into(),
            ))
        }
    };

    Ok(DirectContainerMeta {
        membership_resource,
        relation,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::rdf::iri;
    use headers::Header;

    fn graph_with(triples: &[[crate::rdf::RdfTerm; 3]]) -> Graph {
        triples.iter().cloned().collect()
    }

    #[test]
    fn classifies_basic_container() {
        let g = graph_with(&[[
            iri("http://h/r/c1"),
            iri(ns::rdf::type_.to_string()),
            iri(ns::ldp::BasicContainer.to_string()),
        ]]);
        let (model, meta) = classify(&g, "http://h/r/c1", None).unwrap();
        assert_eq!(model, InteractionModel::BasicContainer);
        assert!(meta.is_none());
    }

    #[test]
    fn classifies_plain_resource_by_absence() {
        let g = Graph::new();
        let (model, _) = classify(&g, "http://h/r/x", None).unwrap();
        assert_eq!(model, InteractionModel::RdfSource);
    }

    #[test]
    fn link_override_forces_rdf_source() {
        let g = graph_with(&[[
            iri("http://h/r/c1"),
            iri(ns::rdf::type_.to_string()),
            iri(ns::ldp::BasicContainer.to_string()),
        ]]);
        let header_value = headers::HeaderValue::from_static(
            "<http://www.w3.org/ns/ldp#Resource>; rel=\"type\"",
        );
        let link = Link::decode(&mut std::iter::once(&header_value)).unwrap();
        let (model, _) = classify(&g, "http://h/r/c1", Some(&link)).unwrap();
        assert_eq!(model, InteractionModel::RdfSource);
    }

    #[test]
    fn direct_container_requires_exactly_one_relation() {
        let g = graph_with(&[
            [
                iri("http://h/r/c2"),
                iri(ns::rdf::type_.to_string()),
                iri(ns::ldp::DirectContainer.to_string()),
            ],
            [
                iri("http://h/r/c2"),
                iri(ns::ldp::membershipResource.to_string()),
                iri("http://h/r/mr"),
            ],
            [
                iri("http://h/r/c2"),
                iri(ns::ldp::hasMemberRelation.to_string()),
                iri("http://ex/has"),
            ],
            [
                iri("http://h/r/c2"),
                iri(ns::ldp::isMemberOfRelation.to_string()),
                iri("http://ex/of"),
            ],
        ]);
        let err = classify(&g, "http://h/r/c2", None).unwrap_err();
        assert!(matches!(err, LdpError::InvalidLdpPattern(_)));
    }

    #[test]
    fn direct_container_extracts_meta() {
        let g = graph_with(&[
            [
                iri("http://h/r/c2"),
                iri(ns::rdf::type_.to_string()),
                iri(ns::ldp::DirectContainer.to_string()),
            ],
            [
                iri("http://h/r/c2"),
                iri(ns::ldp::membershipResource.to_string()),
                iri("http://h/r/mr"),
            ],
            [
                iri("http://h/r/c2"),
                iri(ns::ldp::hasMemberRelation.to_string()),
                iri("http://ex/has"),
            ],
        ]);
        let (model, meta) = classify(&g, "http://h/r/c2", None).unwrap();
        assert_eq!(model, InteractionModel::DirectContainer);
        let meta = meta.unwrap();
        assert_eq!(meta.membership_resource, "http://h/r/mr");
        assert_eq!(
            meta.relation,
            MembershipRelation::HasMember("http://ex/has".to_string())
        );
    }
}
