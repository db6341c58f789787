//! Conditional-request evaluation, scoped to the two checks the LDP core
//! actually needs (spec.md §4.4): `If-Match` on PUT-update, `If-None-Match`
//! on GET/HEAD. Built directly on `headers`' typed `ETag`/`IfMatch`/
//! `IfNoneMatch`, mirroring the RFC 9110 §13.2.2 shape without the other
//! steps (date-based preconditions) this core does not use.

use headers::{ETag, HeaderMapExt, IfMatch, IfNoneMatch};
use http::HeaderMap;

/// Result of evaluating `If-Match` against a currently stored ETag.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum IfMatchOutcome {
    /// No `If-Match` header was present at all.
    Absent,
    /// `If-Match` was present and matched the current ETag.
    Matched,
    /// `If-Match` was present but did not match.
    Mismatched,
}

/// Evaluate `If-Match` from `headers` against `current`, per spec.md §4.4's
/// PUT-update path: absent ⇒ 428, mismatch ⇒ 412.
pub fn evaluate_if_match(headers: &HeaderMap, current: &ETag) -> IfMatchOutcome {
    match headers.typed_get::<IfMatch>() {
        None => IfMatchOutcome::Absent,
        Some(if_match) => {
            if if_match.precondition_passes(current) {
                IfMatchOutcome::Matched
            } else {
                IfMatchOutcome::Mismatched
            }
        }
    }
}

/// Evaluate `If-None-Match` from `headers` against `current`, per spec.md
/// §4.4's GET path: a match means the cached representation is still
/// valid and the controller must answer 304.
pub fn if_none_match_hits(headers: &HeaderMap, current: &ETag) -> bool {
    match headers.typed_get::<IfNoneMatch>() {
        None => false,
        Some(if_none_match) => !if_none_match.precondition_passes(current),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use headers::HeaderMapExt;

    fn etag(s: &str) -> ETag {
        s.parse().unwrap()
    }

    #[test]
    fn absent_if_match_reports_absent() {
        let headers = HeaderMap::new();
        assert_eq!(
            evaluate_if_match(&headers, &etag(r#"W/"abc""#)),
            IfMatchOutcome::Absent
        );
    }

    #[test]
    fn mismatched_if_match_reports_mismatch() {
        let mut headers = HeaderMap::new();
        headers.typed_insert(IfMatch::from(etag(r#""bogus""#)));
        assert_eq!(
            evaluate_if_match(&headers, &etag(r#"W/"abc""#)),
            IfMatchOutcome::Mismatched
        );
    }

    #[test]
    fn matching_if_none_match_hits_304() {
        let mut headers = HeaderMap::new();
        let tag = etag(r#"W/"abc""#);
        headers.typed_insert(IfNoneMatch::from(tag.clone()));
        assert!(if_none_match_hits(&headers, &tag));
    }
}
