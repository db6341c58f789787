//! Resource Controller (spec.md §4.4): the state machine over HTTP methods
//! that drives every other component of this crate. The one "big" module,
//! per spec.md's own component budget.

use http::{
    header::{ACCEPT, ALLOW, CONTENT_TYPE, LOCATION, VARY},
    HeaderMap, HeaderValue, Method, Request, Response, StatusCode,
};
use headers::{ETag, HeaderMapExt};
use rdf_vocabularies::ns;

use ldp_http::{
    conditional::{evaluate_if_match, if_none_match_hits, IfMatchOutcome},
    etag,
    link::{constrained_by_link_header_value, type_link_header_value, LDP_RESOURCE_TYPE},
    media_type::RdfSyntax,
    prefer::{preference_applied_header_name, preference_applied_value},
    Link, Prefer, Slug,
};

use crate::analyzer;
use crate::backend::RemoveOutcome;
use crate::context::ServerContext;
use crate::error::LdpError;
use crate::inserter::{self, ReverseMembers};
use crate::model::{InteractionModel, MembershipRelation, Resource, ResourceWrite};
use crate::rdf::{self, codec};
use crate::uri_alloc;

const ACCEPT_POST_VALUE: &str = "text/turtle,application/ld+json,application/rdf+xml";

/// Dispatch one request to the state machine named by its method. The
/// caller (the transport adapter in `ldp_server`) is responsible for
/// turning an `Err(LdpError)` into a problem response.
#[tracing::instrument(skip_all, fields(method = %req.method(), path = req.uri().path()))]
pub async fn handle(ctx: &ServerContext, req: Request<Vec<u8>>) -> Result<Response<Vec<u8>>, LdpError> {
    let resource_uri = ctx.resource_uri(req.uri().path());
    match req.method().clone() {
        Method::GET => get_or_head(ctx, &resource_uri, req.headers(), true).await,
        Method::HEAD => get_or_head(ctx, &resource_uri, req.headers(), false).await,
        Method::PUT => put(ctx, &resource_uri, req).await,
        Method::POST => post(ctx, &resource_uri, req).await,
        Method::DELETE => delete(ctx, &resource_uri).await,
        Method::OPTIONS => options(ctx, &resource_uri).await,
        _ => Err(LdpError::MethodNotAllowed("GET,HEAD,DELETE,OPTIONS")),
    }
}

/// The `Link`/`Allow`/`Accept-Post` headers every successful response on a
/// resource carries, keyed off its interaction model (spec.md §4.4).
fn common_headers(ctx: &ServerContext, model: InteractionModel) -> HeaderMap {
    let mut headers = HeaderMap::new();
    headers.append(http::header::LINK, type_link_header_value(LDP_RESOURCE_TYPE));
    headers.append(
        http::header::LINK,
        constrained_by_link_header_value(&ctx.constraints_uri()),
    );
    if model.is_container() {
        headers.append(http::header::LINK, type_link_header_value(&model.type_iri()));
        headers.insert("accept-post", HeaderValue::from_static(ACCEPT_POST_VALUE));
    }
    headers.insert(ALLOW, HeaderValue::from_static(model.allow_header()));
    headers
}

fn apply_headers(response: &mut Response<Vec<u8>>, extra: HeaderMap) {
    for (name, value) in extra.iter() {
        response.headers_mut().append(name.clone(), value.clone());
    }
}

/// **GET** / **HEAD** (spec.md §4.4): read, negotiate, run the Inserter,
/// serialize, evaluate `If-None-Match`, respond.
async fn get_or_head(
    ctx: &ServerContext,
    uri: &str,
    headers: &HeaderMap,
    include_body: bool,
) -> Result<Response<Vec<u8>>, LdpError> {
    let resource = ctx
        .backend()
        .read(uri)
        .await
        .map_err(LdpError::BackendFailure)?
        .ok_or(LdpError::NotFound)?;

    let accept = headers.get(ACCEPT).and_then(|v| v.to_str().ok());
    let syntax = ldp_http::media_type::negotiate(accept).ok_or(LdpError::NotAcceptable)?;

    let prefer = headers.typed_get::<Prefer>().unwrap_or_default();

    let inserted = insert_for_current_state(ctx, &resource, &prefer).await?;
    let body = codec::serialize(&inserted.graph, syntax)?;
    let current_etag = etag::compute(&body);

    if if_none_match_hits(headers, &current_etag) {
        let mut response = Response::new(Vec::new());
        *response.status_mut() = StatusCode::NOT_MODIFIED;
        response.headers_mut().typed_insert(current_etag);
        return Ok(response);
    }

    let body_out = if include_body { body } else { Vec::new() };
    let mut response = Response::new(body_out);
    *response.status_mut() = StatusCode::OK;
    apply_headers(&mut response, common_headers(ctx, resource.interaction_model));
    response.headers_mut().typed_insert(current_etag);
    response.headers_mut().insert(
        CONTENT_TYPE,
        HeaderValue::from_static(syntax.canonical_media_type()),
    );
    response.headers_mut().insert(VARY, HeaderValue::from_static("Accept"));
    if inserted.preference_applied {
        response
            .headers_mut()
            .insert(preference_applied_header_name(), preference_applied_value());
    }
    Ok(response)
}

/// **PUT** (spec.md §4.4): validate content type, parse, then either update
/// an existing resource (conditional on `If-Match`) or create a new one.
async fn put(ctx: &ServerContext, uri: &str, req: Request<Vec<u8>>) -> Result<Response<Vec<u8>>, LdpError> {
    let (parts, body) = req.into_parts();
    let syntax = content_type_syntax(&parts.headers)?;
    let body_str = std::str::from_utf8(&body)
        .map_err(|e| LdpError::BadRequest(format!("request body is not valid utf-8: {e}")))?;
    let mut graph = codec::parse(body_str, uri, syntax)?;

    match ctx.backend().read(uri).await.map_err(LdpError::BackendFailure)? {
        Some(existing) => {
            if existing.interaction_model.is_container() {
                return Err(LdpError::MethodNotAllowed(existing.interaction_model.allow_header()));
            }

            match evaluate_if_match(
                &parts.headers,
                &current_representation_etag(ctx, &existing, &syntax).await?,
            ) {
                IfMatchOutcome::Absent => return Err(LdpError::PreconditionRequired),
                IfMatchOutcome::Mismatched => return Err(LdpError::PreconditionFailed),
                IfMatchOutcome::Matched => {}
            }

            strip_derived_triples(&mut graph, &existing.uri, &existing);
            ctx.backend()
                .update(ResourceWrite {
                    uri: uri.to_string(),
                    graph,
                    interaction_model: existing.interaction_model,
                    direct_container: existing.direct_container.clone(),
                })
                .await
                .map_err(LdpError::BackendFailure)?;

            let mut response = Response::new(Vec::new());
            *response.status_mut() = StatusCode::NO_CONTENT;
            apply_headers(&mut response, common_headers(ctx, existing.interaction_model));
            Ok(response)
        }
        None => {
            let link_header = parts.headers.typed_get::<Link>();
            let (model, direct_container) = analyzer::classify(&graph, uri, link_header.as_ref())?;
            strip_containment_only(&mut graph, uri);

            ctx.backend()
                .update(ResourceWrite {
                    uri: uri.to_string(),
                    graph,
                    interaction_model: model,
                    direct_container,
                })
                .await
                .map_err(LdpError::BackendFailure)?;

            let mut response = Response::new(Vec::new());
            *response.status_mut() = StatusCode::CREATED;
            apply_headers(&mut response, common_headers(ctx, model));
            Ok(response)
        }
    }
}

/// **POST** (spec.md §4.4): allocate a member URI under a container, parse
/// the new member's body, classify it, apply containment/membership side
/// effects, persist.
async fn post(ctx: &ServerContext, uri: &str, req: Request<Vec<u8>>) -> Result<Response<Vec<u8>>, LdpError> {
    let parent = ctx
        .backend()
        .read(uri)
        .await
        .map_err(LdpError::BackendFailure)?
        .ok_or(LdpError::NotFound)?;

    if !parent.interaction_model.is_container() {
        return Err(LdpError::MethodNotAllowed(parent.interaction_model.allow_header()));
    }

    let (parts, body) = req.into_parts();
    let syntax = content_type_syntax(&parts.headers)?;

    let slug = parts.headers.typed_get::<Slug>();
    let new_uri = uri_alloc::allocate(ctx.backend(), uri, slug.as_ref().map(Slug::as_str)).await?;

    let result = post_inner(ctx, &parent, &new_uri, &parts.headers, &body, syntax).await;
    if result.is_err() {
        ctx.backend().release_uri(&new_uri).await;
    }
    result
}

async fn post_inner(
    ctx: &ServerContext,
    parent: &Resource,
    new_uri: &str,
    headers: &HeaderMap,
    body: &[u8],
    syntax: RdfSyntax,
) -> Result<Response<Vec<u8>>, LdpError> {
    let body_str = std::str::from_utf8(body)
        .map_err(|e| LdpError::BadRequest(format!("request body is not valid utf-8: {e}")))?;
    let mut graph = codec::parse(body_str, new_uri, syntax)?;

    let link_header = headers.typed_get::<Link>();
    let (model, direct_container) = analyzer::classify(&graph, new_uri, link_header.as_ref())?;
    strip_containment_only(&mut graph, new_uri);

    // Every container — Basic or Direct — tracks its own direct children
    // under its own URI (consumed by the Inserter's containment block and,
    // for a Direct Container, to compute the `hasMemberRelation` triples on
    // the *membership resource* purely at read time; see
    // `inserter::insert`'s `own_members`/`reverse` parameters). This is
    // recorded as a backend-internal child index, not as a stored
    // `ldp:contains` triple in any resource's own graph (Invariant I3): the
    // `insert_data` call below describes the relationship, but the
    // reference backend never lets it land in a `Resource`'s own `graph`.
    ctx.backend()
        .insert_data(
            &[[
                rdf::iri(parent.uri.clone()),
                rdf::iri(ns::ldp::contains.to_string()),
                rdf::iri(new_uri),
            ]],
            &parent.uri,
        )
        .await
        .map_err(LdpError::BackendFailure)?;

    if let Some(meta) = &parent.direct_container {
        if let MembershipRelation::IsMemberOf(r) = &meta.relation {
            graph.insert([
                rdf::iri(new_uri),
                rdf::iri(r.clone()),
                rdf::iri(meta.membership_resource.clone()),
            ]);
        }
    }

    ctx.backend()
        .update(ResourceWrite {
            uri: new_uri.to_string(),
            graph,
            interaction_model: model,
            direct_container,
        })
        .await
        .map_err(LdpError::BackendFailure)?;

    let mut response = Response::new(Vec::new());
    *response.status_mut() = StatusCode::CREATED;
    apply_headers(&mut response, common_headers(ctx, model));
    response.headers_mut().insert(
        LOCATION,
        HeaderValue::from_str(new_uri).map_err(|e| LdpError::Internal(e.to_string()))?,
    );
    Ok(response)
}

/// **DELETE** (spec.md §4.4): delegate to the backend, no cascade.
async fn delete(ctx: &ServerContext, uri: &str) -> Result<Response<Vec<u8>>, LdpError> {
    match ctx.backend().remove(uri).await.map_err(LdpError::BackendFailure)? {
        RemoveOutcome::Removed => {
            let mut response = Response::new(Vec::new());
            *response.status_mut() = StatusCode::NO_CONTENT;
            Ok(response)
        }
        RemoveOutcome::NotFound => Err(LdpError::NotFound),
    }
}

/// **OPTIONS** (spec.md §4.4): read to determine the interaction model,
/// emit the common headers.
async fn options(ctx: &ServerContext, uri: &str) -> Result<Response<Vec<u8>>, LdpError> {
    let resource = ctx
        .backend()
        .read(uri)
        .await
        .map_err(LdpError::BackendFailure)?
        .ok_or(LdpError::NotFound)?;

    let mut response = Response::new(Vec::new());
    *response.status_mut() = StatusCode::OK;
    apply_headers(&mut response, common_headers(ctx, resource.interaction_model));
    Ok(response)
}

fn content_type_syntax(headers: &HeaderMap) -> Result<RdfSyntax, LdpError> {
    let content_type = headers
        .get(CONTENT_TYPE)
        .and_then(|v| v.to_str().ok())
        .ok_or(LdpError::UnsupportedMediaType)?;
    RdfSyntax::from_content_type(content_type).ok_or(LdpError::UnsupportedMediaType)
}

/// Run the Inserter over `resource` using the backend state `ctx` reports
/// right now, gathering both its own members (if it is a container) and the
/// membership-reverse data for every container that names it as their
/// `membershipResource`. Shared by `get_or_head` and
/// `current_representation_etag` so the two paths can never disagree about
/// what "the current representation" contains.
async fn insert_for_current_state(
    ctx: &ServerContext,
    resource: &Resource,
    prefer: &Prefer,
) -> Result<inserter::Inserted, LdpError> {
    let own_members = if resource.interaction_model.is_container() {
        ctx.backend()
            .get_membership_triples(&resource.uri)
            .await
            .map_err(LdpError::BackendFailure)?
    } else {
        Vec::new()
    };

    let mut reverse_data: Vec<(String, MembershipRelation, Vec<String>)> = Vec::new();
    for entry in &resource.membership_resource_for {
        let members = ctx
            .backend()
            .get_membership_triples(&entry.container_uri)
            .await
            .map_err(LdpError::BackendFailure)?;
        reverse_data.push((entry.container_uri.clone(), entry.relation.clone(), members));
    }
    let reverse: Vec<ReverseMembers> = reverse_data
        .iter()
        .map(|(container_uri, relation, members)| ReverseMembers {
            container_uri,
            relation,
            members: members.clone(),
        })
        .collect();

    Ok(inserter::insert(resource, prefer, &own_members, &reverse))
}

/// The ETag of the currently stored representation, serialized in the same
/// syntax as the incoming `PUT`, *after* calculated-triple insertion (spec.md
/// §4.4: the conditional check runs against the representation a `GET` would
/// currently return, and spec.md §6 binds ETags to the media type used to
/// serialize). A resource that is some Direct Container's `membershipResource`
/// has membership-reverse triples in that representation even though its own
/// stored graph doesn't — so this must run the same Inserter pass `GET` does,
/// not serialize `existing.graph` directly.
async fn current_representation_etag(
    ctx: &ServerContext,
    existing: &Resource,
    syntax: &RdfSyntax,
) -> Result<ETag, LdpError> {
    let inserted = insert_for_current_state(ctx, existing, &Prefer::default()).await?;
    let bytes = codec::serialize(&inserted.graph, *syntax)?;
    Ok(etag::compute(&bytes))
}

/// Strip containment and membership triples before persisting (spec.md
/// §4.6), given the *existing* persisted resource's membership role.
fn strip_derived_triples(graph: &mut crate::rdf::Graph, uri: &str, existing: &Resource) {
    rdf::remove_matching(graph, &rdf::iri(uri), &ns::ldp::contains.to_string());
    if let Some(relation) = existing.has_member_relation() {
        rdf::remove_matching(graph, &rdf::iri(uri), relation);
    }
}

/// The lighter-weight strip used on create paths, where there is no
/// existing resource to consult for membership relations yet — only
/// containment can possibly have been client-supplied.
fn strip_containment_only(graph: &mut crate::rdf::Graph, uri: &str) {
    rdf::remove_matching(graph, &rdf::iri(uri), &ns::ldp::contains.to_string());
}
