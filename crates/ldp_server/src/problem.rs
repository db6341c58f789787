//! Converts an [`LdpError`] into a `application/problem+json` response
//! (spec.md §7: "the protocol core never constructs an HTTP response body
//! for an error; that is the transport adapter's job"), grounded on the same
//! `http_api_problem::ApiError` this workspace already builds problem
//! responses with.

use http::{header, HeaderValue, Response, StatusCode};
use http_api_problem::{ApiError, PROBLEM_JSON_MEDIA_TYPE};
use ldp_core::LdpError;

const PROBLEM_TYPE_BASE: &str = "https://www.w3.org/ns/ldp#problems";

fn type_slug(err: &LdpError) -> &'static str {
    match err {
        LdpError::NotFound => "not-found",
        LdpError::UnsupportedMediaType => "unsupported-media-type",
        LdpError::NotAcceptable => "not-acceptable",
        LdpError::BadRequest(_) => "bad-request",
        LdpError::InvalidLdpPattern(_) => "invalid-ldp-pattern",
        LdpError::PreconditionRequired => "precondition-required",
        LdpError::PreconditionFailed => "precondition-failed",
        LdpError::MethodNotAllowed(_) => "method-not-allowed",
        LdpError::ConflictUriTaken => "uri-taken",
        LdpError::BackendFailure(_) => "backend-failure",
        LdpError::Internal(_) => "internal",
    }
}

/// Render `err` as a complete HTTP response: status line, `Content-Type:
/// application/problem+json` body, and — for [`LdpError::MethodNotAllowed`]
/// — the `Allow` header the protocol core computed for this resource.
pub fn response_for(err: &LdpError) -> Response<Vec<u8>> {
    let status = err.status_code();

    let api_error = ApiError::builder(status)
        .title(status.canonical_reason().unwrap_or("error"))
        .message(err.to_string())
        .type_url(format!("{PROBLEM_TYPE_BASE}/{}", type_slug(err)))
        .finish();

    let json = api_error.into_http_api_problem().json_bytes();

    let mut response = Response::builder()
        .status(status)
        .header(
            header::CONTENT_TYPE,
            HeaderValue::from_static(PROBLEM_JSON_MEDIA_TYPE),
        )
        .body(json.to_vec())
        .unwrap_or_else(|_| {
            let mut r = Response::new(Vec::new());
            *r.status_mut() = StatusCode::INTERNAL_SERVER_ERROR;
            r
        });

    if let LdpError::MethodNotAllowed(allow) = err {
        response
            .headers_mut()
            .insert(header::ALLOW, HeaderValue::from_static(allow));
    }

    response
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn method_not_allowed_carries_allow_header() {
        let response = response_for(&LdpError::MethodNotAllowed("GET,HEAD,DELETE,OPTIONS"));
        assert_eq!(response.status(), StatusCode::METHOD_NOT_ALLOWED);
        assert_eq!(
            response.headers().get(header::ALLOW).unwrap(),
            "GET,HEAD,DELETE,OPTIONS"
        );
    }

    #[test]
    fn not_found_has_problem_json_content_type() {
        let response = response_for(&LdpError::NotFound);
        assert_eq!(response.status(), StatusCode::NOT_FOUND);
        assert_eq!(
            response.headers().get(header::CONTENT_TYPE).unwrap(),
            PROBLEM_JSON_MEDIA_TYPE
        );
    }
}
