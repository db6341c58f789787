//! End-to-end tests driving the full request-handling state machine
//! (`ldp_core::handle`) against the in-memory reference backend. These cover
//! spec.md §8's six concrete scenarios and its P1/P2/P4/P5/P6/P7 testable
//! properties (P3 is covered by `rdf::codec`'s own round-trip unit tests).

use std::sync::Arc;

use http::{header, Method, Request, Response, StatusCode};
use ldp_backend_mem::InMemBackend;
use ldp_core::{Backend, ServerContext};

fn ctx() -> ServerContext {
    let backend: Arc<dyn Backend> = Arc::new(InMemBackend::new());
    ServerContext::new(backend, "http://h", "/r")
}

fn req(method: Method, path: &str, headers: &[(&str, &str)], body: &str) -> Request<Vec<u8>> {
    let mut builder = Request::builder().method(method).uri(path);
    for (name, value) in headers {
        builder = builder.header(*name, *value);
    }
    builder.body(body.as_bytes().to_vec()).unwrap()
}

fn body_str(response: &Response<Vec<u8>>) -> &str {
    std::str::from_utf8(response.body()).unwrap()
}

const TURTLE: &str = "text/turtle";

#[tokio::test]
async fn scenario_1_create_basic_container_then_member() {
    let ctx = ctx();

    let put_container = req(
        Method::PUT,
        "/r/c1",
        &[("content-type", TURTLE)],
        "<> a <http://www.w3.org/ns/ldp#BasicContainer> .",
    );
    let response = ldp_core::handle(&ctx, put_container).await.unwrap();
    assert_eq!(response.status(), StatusCode::CREATED);

    let post_member = req(
        Method::POST,
        "/r/c1",
        &[("content-type", TURTLE), ("slug", "a")],
        "<> <http://purl.org/dc/terms/title> \"x\" .",
    );
    let response = ldp_core::handle(&ctx, post_member).await.unwrap();
    assert_eq!(response.status(), StatusCode::CREATED);
    assert_eq!(
        response.headers().get(header::LOCATION).unwrap(),
        "http://h/r/c1/a"
    );

    let get_container = req(
        Method::GET,
        "/r/c1",
        &[
            ("accept", TURTLE),
            (
                "prefer",
                "return=representation; include=\"http://www.w3.org/ns/ldp#PreferContainment\"",
            ),
        ],
        "",
    );
    let response = ldp_core::handle(&ctx, get_container).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(
        response.headers().get("preference-applied").unwrap(),
        "return=representation"
    );
    let body = body_str(&response);
    assert!(body.contains("h/r/c1"));
    assert!(body.contains("ldp#contains") || body.contains("h/r/c1/a"));
}

#[tokio::test]
async fn scenario_2_etag_round_trip_and_conditional() {
    let ctx = ctx();

    ldp_core::handle(
        &ctx,
        req(
            Method::PUT,
            "/r/c1",
            &[("content-type", TURTLE)],
            "<> a <http://www.w3.org/ns/ldp#BasicContainer> .",
        ),
    )
    .await
    .unwrap();
    ldp_core::handle(
        &ctx,
        req(
            Method::POST,
            "/r/c1",
            &[("content-type", TURTLE), ("slug", "a")],
            "",
        ),
    )
    .await
    .unwrap();

    let get_response = ldp_core::handle(
        &ctx,
        req(Method::GET, "/r/c1/a", &[("accept", TURTLE)], ""),
    )
    .await
    .unwrap();
    assert_eq!(get_response.status(), StatusCode::OK);
    let etag = get_response
        .headers()
        .get(header::ETAG)
        .unwrap()
        .to_str()
        .unwrap()
        .to_string();

    let not_modified = ldp_core::handle(
        &ctx,
        req(
            Method::GET,
            "/r/c1/a",
            &[("accept", TURTLE), ("if-none-match", &etag)],
            "",
        ),
    )
    .await
    .unwrap();
    assert_eq!(not_modified.status(), StatusCode::NOT_MODIFIED);

    // P4: `If-Match` mismatch always yields 412.
    let mismatch = ldp_core::handle(
        &ctx,
        req(
            Method::PUT,
            "/r/c1/a",
            &[("content-type", TURTLE), ("if-match", "\"bogus\"")],
            "<> a <http://www.w3.org/ns/ldp#RDFSource> .",
        ),
    )
    .await;
    assert!(matches!(mismatch, Err(ldp_core::LdpError::PreconditionFailed)));

    // P4: `If-Match` absent on PUT-update always yields 428.
    let absent = ldp_core::handle(
        &ctx,
        req(
            Method::PUT,
            "/r/c1/a",
            &[("content-type", TURTLE)],
            "<> a <http://www.w3.org/ns/ldp#RDFSource> .",
        ),
    )
    .await;
    assert!(matches!(absent, Err(ldp_core::LdpError::PreconditionRequired)));

    let ok = ldp_core::handle(
        &ctx,
        req(
            Method::PUT,
            "/r/c1/a",
            &[("content-type", TURTLE), ("if-match", &etag)],
            "<> a <http://www.w3.org/ns/ldp#RDFSource> .",
        ),
    )
    .await
    .unwrap();
    assert_eq!(ok.status(), StatusCode::NO_CONTENT);

    // P2: re-reading right after a successful PUT-update yields the same ETag
    // the backend's own stored representation serializes to.
    let reread = ldp_core::handle(
        &ctx,
        req(Method::GET, "/r/c1/a", &[("accept", TURTLE)], ""),
    )
    .await
    .unwrap();
    let stored = ctx.backend().read("http://h/r/c1/a").await.unwrap().unwrap();
    let expected_body = ldp_core::rdf::codec::serialize(
        &stored.graph,
        ldp_http::RdfSyntax::Turtle,
    )
    .unwrap();
    let expected_etag = format!("{}", ldp_http::etag::compute(&expected_body));
    assert_eq!(
        reread.headers().get(header::ETAG).unwrap().to_str().unwrap(),
        expected_etag
    );
}

#[tokio::test]
async fn scenario_3_direct_container_membership() {
    let ctx = ctx();

    ldp_core::handle(
        &ctx,
        req(
            Method::PUT,
            "/r/mr",
            &[("content-type", TURTLE)],
            "<> a <http://www.w3.org/ns/ldp#RDFSource> .",
        ),
    )
    .await
    .unwrap();

    ldp_core::handle(
        &ctx,
        req(
            Method::PUT,
            "/r/c2",
            &[("content-type", TURTLE)],
            "<> a <http://www.w3.org/ns/ldp#DirectContainer>; \
             <http://www.w3.org/ns/ldp#membershipResource> <http://h/r/mr>; \
             <http://www.w3.org/ns/ldp#hasMemberRelation> <http://ex/has> .",
        ),
    )
    .await
    .unwrap();

    let post = ldp_core::handle(
        &ctx,
        req(Method::POST, "/r/c2", &[("content-type", TURTLE)], ""),
    )
    .await
    .unwrap();
    assert_eq!(post.status(), StatusCode::CREATED);
    let location = post
        .headers()
        .get(header::LOCATION)
        .unwrap()
        .to_str()
        .unwrap()
        .to_string();

    // P5: the Direct Container, re-read, declares exactly one relation and
    // always has a membershipResource.
    let dc = ctx.backend().read("http://h/r/c2").await.unwrap().unwrap();
    let dc_meta = dc.direct_container.unwrap();
    assert_eq!(dc_meta.membership_resource, "http://h/r/mr");
    assert!(dc.has_member_relation().is_some());
    assert!(dc.is_member_of_relation().is_none());

    let default_get = ldp_core::handle(
        &ctx,
        req(Method::GET, "/r/mr", &[("accept", TURTLE)], ""),
    )
    .await
    .unwrap();
    let body = body_str(&default_get);
    assert!(body.contains(&location));

    let omit_get = ldp_core::handle(
        &ctx,
        req(
            Method::GET,
            "/r/mr",
            &[
                ("accept", TURTLE),
                (
                    "prefer",
                    "return=representation; omit=\"http://www.w3.org/ns/ldp#PreferMembership\"",
                ),
            ],
            "",
        ),
    )
    .await
    .unwrap();
    assert!(!body_str(&omit_get).contains(&location));
    assert_eq!(
        omit_get.headers().get("preference-applied").unwrap(),
        "return=representation"
    );
}

#[tokio::test]
async fn scenario_4_invalid_membership_pattern_conflicts() {
    let ctx = ctx();
    let result = ldp_core::handle(
        &ctx,
        req(
            Method::PUT,
            "/r/c3",
            &[("content-type", TURTLE)],
            "<> a <http://www.w3.org/ns/ldp#DirectContainer>; \
             <http://www.w3.org/ns/ldp#membershipResource> <http://h/r/mr>; \
             <http://www.w3.org/ns/ldp#hasMemberRelation> <http://ex/has>; \
             <http://www.w3.org/ns/ldp#isMemberOfRelation> <http://ex/of> .",
        ),
    )
    .await;
    let err = result.unwrap_err();
    assert_eq!(err.status_code(), StatusCode::CONFLICT);
}

#[tokio::test]
async fn scenario_5_wrong_media_type() {
    let ctx = ctx();
    let result = ldp_core::handle(
        &ctx,
        req(Method::PUT, "/r/x", &[("content-type", "text/plain")], "hi"),
    )
    .await;
    assert_eq!(
        result.unwrap_err().status_code(),
        StatusCode::UNSUPPORTED_MEDIA_TYPE
    );
}

#[tokio::test]
async fn scenario_6_container_replacement_forbidden() {
    let ctx = ctx();
    ldp_core::handle(
        &ctx,
        req(
            Method::PUT,
            "/r/c1",
            &[("content-type", TURTLE)],
            "<> a <http://www.w3.org/ns/ldp#BasicContainer> .",
        ),
    )
    .await
    .unwrap();

    let result = ldp_core::handle(
        &ctx,
        req(
            Method::PUT,
            "/r/c1",
            &[("content-type", TURTLE)],
            "<> a <http://www.w3.org/ns/ldp#BasicContainer> .",
        ),
    )
    .await;
    match result.unwrap_err() {
        ldp_core::LdpError::MethodNotAllowed(allow) => {
            assert_eq!(allow, "GET,HEAD,DELETE,OPTIONS,POST");
        }
        other => panic!("expected MethodNotAllowed, got {other:?}"),
    }
}

/// P6: containment and membership triples are never present in backend
/// storage, for either a Basic or a Direct Container.
#[tokio::test]
async fn p6_containment_and_membership_never_stored() {
    let ctx = ctx();

    ldp_core::handle(
        &ctx,
        req(
            Method::PUT,
            "/r/c1",
            &[("content-type", TURTLE)],
            "<> a <http://www.w3.org/ns/ldp#BasicContainer> .",
        ),
    )
    .await
    .unwrap();
    ldp_core::handle(
        &ctx,
        req(
            Method::POST,
            "/r/c1",
            &[("content-type", TURTLE), ("slug", "a")],
            "",
        ),
    )
    .await
    .unwrap();

    let stored = ctx.backend().read("http://h/r/c1").await.unwrap().unwrap();
    assert!(!stored
        .graph
        .iter()
        .any(|[_, p, _]| ldp_core::rdf::is_iri(p, "http://www.w3.org/ns/ldp#contains")));

    ldp_core::handle(
        &ctx,
        req(
            Method::PUT,
            "/r/mr",
            &[("content-type", TURTLE)],
            "<> a <http://www.w3.org/ns/ldp#RDFSource> .",
        ),
    )
    .await
    .unwrap();
    ldp_core::handle(
        &ctx,
        req(
            Method::PUT,
            "/r/c2",
            &[("content-type", TURTLE)],
            "<> a <http://www.w3.org/ns/ldp#DirectContainer>; \
             <http://www.w3.org/ns/ldp#membershipResource> <http://h/r/mr>; \
             <http://www.w3.org/ns/ldp#hasMemberRelation> <http://ex/has> .",
        ),
    )
    .await
    .unwrap();
    ldp_core::handle(
        &ctx,
        req(Method::POST, "/r/c2", &[("content-type", TURTLE)], ""),
    )
    .await
    .unwrap();

    let stored_mr = ctx.backend().read("http://h/r/mr").await.unwrap().unwrap();
    assert!(!stored_mr
        .graph
        .iter()
        .any(|[_, p, _]| ldp_core::rdf::is_iri(p, "http://ex/has")));
}

/// P1: a successful POST's `Location` is itself readable, and (when
/// containment is requested) shows up under the parent's `ldp:contains`.
#[tokio::test]
async fn p1_post_location_is_readable_and_contained() {
    let ctx = ctx();
    ldp_core::handle(
        &ctx,
        req(
            Method::PUT,
            "/r/c1",
            &[("content-type", TURTLE)],
            "<> a <http://www.w3.org/ns/ldp#BasicContainer> .",
        ),
    )
    .await
    .unwrap();
    let post = ldp_core::handle(
        &ctx,
        req(Method::POST, "/r/c1", &[("content-type", TURTLE)], ""),
    )
    .await
    .unwrap();
    let location = post
        .headers()
        .get(header::LOCATION)
        .unwrap()
        .to_str()
        .unwrap()
        .to_string();
    let path = location.trim_start_matches("http://h");

    let get_member = ldp_core::handle(&ctx, req(Method::GET, path, &[("accept", TURTLE)], ""))
        .await
        .unwrap();
    assert_eq!(get_member.status(), StatusCode::OK);

    let get_parent = ldp_core::handle(
        &ctx,
        req(Method::GET, "/r/c1", &[("accept", TURTLE)], ""),
    )
    .await
    .unwrap();
    assert!(body_str(&get_parent).contains(&location));
}

/// P7: concurrent POSTs carrying the same `Slug` each get a distinct URI;
/// only one of them can occupy the raw slug path.
#[tokio::test]
async fn p7_concurrent_same_slug_posts_yield_distinct_uris() {
    let ctx = ctx();
    ldp_core::handle(
        &ctx,
        req(
            Method::PUT,
            "/r/c1",
            &[("content-type", TURTLE)],
            "<> a <http://www.w3.org/ns/ldp#BasicContainer> .",
        ),
    )
    .await
    .unwrap();

    let make_post = || {
        let ctx = ctx.clone();
        async move {
            ldp_core::handle(
                &ctx,
                req(
                    Method::POST,
                    "/r/c1",
                    &[("content-type", TURTLE), ("slug", "dup")],
                    "",
                ),
            )
            .await
            .unwrap()
        }
    };

    let (r1, r2, r3) = tokio::join!(make_post(), make_post(), make_post());
    let locations: Vec<String> = [r1, r2, r3]
        .iter()
        .map(|r| {
            r.headers()
                .get(header::LOCATION)
                .unwrap()
                .to_str()
                .unwrap()
                .to_string()
        })
        .collect();

    let unique: std::collections::HashSet<_> = locations.iter().collect();
    assert_eq!(unique.len(), 3, "expected 3 distinct URIs, got {locations:?}");
    assert_eq!(
        locations.iter().filter(|l| *l == "http://h/r/c1/dup").count(),
        1,
        "exactly one POST should have claimed the raw slug path"
    );
}
