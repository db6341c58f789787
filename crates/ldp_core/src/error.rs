//! The abstract error vocabulary shared by every component of the protocol
//! core (spec.md §7). Each variant names a failure *kind*, not a wire
//! format; [`ldp_server`](../ldp_server/index.html) is the only place these
//! get turned into an `http_api_problem::ApiError` with a concrete
//! problem-type URI and body.

use http::StatusCode;

use crate::backend::BackendError;

/// A protocol-core level failure.
#[derive(Debug, thiserror::Error)]
pub enum LdpError {
    /// No resource exists at the requested URI.
    #[error("resource not found")]
    NotFound,

    /// The request body's `Content-Type` names a syntax this core cannot
    /// parse (e.g. RDF/XML, which is serialize-only by design).
    #[error("unsupported media type")]
    UnsupportedMediaType,

    /// None of the representations this core can produce satisfy the
    /// request's `Accept` header.
    #[error("no acceptable media type")]
    NotAcceptable,

    /// The request body could not be parsed as the negotiated syntax.
    #[error("bad request: {0}")]
    BadRequest(String),

    /// The request body parses fine as RDF, but violates an LDP data-model
    /// invariant (spec.md §3's I1-I4) that is independent of any particular
    /// resource's current state — e.g. a client-supplied containment or
    /// membership triple.
    #[error("invalid LDP pattern in request body: {0}")]
    InvalidLdpPattern(String),

    /// A conditional `PUT`/`DELETE`/etc. arrived without the required
    /// `If-Match`.
    #[error("precondition required")]
    PreconditionRequired,

    /// An `If-Match`/`If-None-Match` precondition was present but did not
    /// hold against the resource's current `ETag`.
    #[error("precondition failed")]
    PreconditionFailed,

    /// The HTTP method is not valid for this resource's interaction model
    /// (e.g. `POST` to an `RDFSource`). Carries the `Allow` value the
    /// response must carry (spec.md §4.4's per-case `Allow` values).
    #[error("method not allowed")]
    MethodNotAllowed(&'static str),

    /// A client requested a URI already bound to a distinct resource (slug
    /// collision that survived the allocator's retries, or an explicit
    /// `PUT` to an occupied container-member slot that disagrees with
    /// `PUT`'s create-or-replace semantics).
    #[error("URI already in use")]
    ConflictUriTaken,

    /// The backend could not fulfil the request for reasons opaque to the
    /// protocol core (storage I/O failure, lock poisoning, etc).
    #[error("backend failure: {0}")]
    BackendFailure(#[from] BackendError),

    /// A failure internal to this core that has no more specific kind above
    /// (RDF serialization failures, for instance — these are never the
    /// client's fault).
    #[error("internal error: {0}")]
    Internal(String),
}

impl LdpError {
    /// The HTTP status code this error kind maps to, per spec.md §7's
    /// error-kind-to-status table.
    pub fn status_code(&self) -> StatusCode {
        match self {
            LdpError::NotFound => StatusCode::NOT_FOUND,
            LdpError::UnsupportedMediaType => StatusCode::UNSUPPORTED_MEDIA_TYPE,
            LdpError::NotAcceptable => StatusCode::NOT_ACCEPTABLE,
            LdpError::BadRequest(_) => StatusCode::BAD_REQUEST,
            LdpError::InvalidLdpPattern(_) => StatusCode::CONFLICT,
            LdpError::PreconditionRequired => StatusCode::PRECONDITION_REQUIRED,
            LdpError::PreconditionFailed => StatusCode::PRECONDITION_FAILED,
            LdpError::MethodNotAllowed(_) => StatusCode::METHOD_NOT_ALLOWED,
            LdpError::ConflictUriTaken => StatusCode::CONFLICT,
            LdpError::BackendFailure(_) => StatusCode::INTERNAL_SERVER_ERROR,
            LdpError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn conflict_variants_map_to_409() {
        assert_eq!(
            LdpError::ConflictUriTaken.status_code(),
            StatusCode::CONFLICT
        );
        assert_eq!(
            LdpError::InvalidLdpPattern("x".into()).status_code(),
            StatusCode::CONFLICT
        );
    }

    #[test]
    fn backend_failure_is_internal() {
        assert_eq!(
            LdpError::BackendFailure(BackendError::Io("disk full".into())).status_code(),
            StatusCode::INTERNAL_SERVER_ERROR
        );
    }
}
