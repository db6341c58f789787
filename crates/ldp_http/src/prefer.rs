//! `Prefer` header handling, scoped to the LDP `return=representation`
//! preference with `include=`/`omit=` token lists, plus the matching
//! `Preference-Applied` response header.

use headers::{Header, HeaderName, HeaderValue};
use once_cell::sync::Lazy;
use regex::Regex;

/// `http://www.w3.org/ns/ldp#PreferContainment`
pub const PREFER_CONTAINMENT: &str = "http://www.w3.org/ns/ldp#PreferContainment";
/// `http://www.w3.org/ns/ldp#PreferMembership`
pub const PREFER_MEMBERSHIP: &str = "http://www.w3.org/ns/ldp#PreferMembership";
/// `http://www.w3.org/ns/ldp#PreferMinimalContainer`
pub const PREFER_MINIMAL_CONTAINER: &str = "http://www.w3.org/ns/ldp#PreferMinimalContainer";
/// Alias for [`PREFER_MINIMAL_CONTAINER`].
pub const PREFER_EMPTY_CONTAINER: &str = "http://www.w3.org/ns/ldp#PreferEmptyContainer";

static PREFER_HEADER_NAME: Lazy<HeaderName> = Lazy::new(|| HeaderName::from_static("prefer"));
static PREFERENCE_APPLIED_HEADER_NAME: Lazy<HeaderName> =
    Lazy::new(|| HeaderName::from_static("preference-applied"));

/// The decoded `Prefer` request header, as relevant to LDP responses.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Prefer {
    pub return_representation: bool,
    pub include: Vec<String>,
    pub omit: Vec<String>,
}

impl Prefer {
    /// A token is present in `include=` or `omit=` only if it matches as a
    /// whole word; the only regex-sensitive character inside an LDP
    /// preference token is `.`, which callers must escape when building a
    /// matcher dynamically. We build one such matcher per lookup here,
    /// scoped to the supplied token list, rather than a static per-token
    /// regex, since tokens are drawn from a small closed vocabulary.
    fn contains_token(list: &[String], token: &str) -> bool {
        let escaped = regex::escape(token);
        let pattern = format!(r"(^|\s){escaped}($|\s)");
        let re = Regex::new(&pattern).expect("constructed pattern is always valid");
        list.iter().any(|candidate| re.is_match(candidate))
    }

    /// Whether `token` was named under `include=`.
    pub fn includes(&self, token: &str) -> bool {
        Self::contains_token(&self.include, token)
    }

    /// Whether `token` was named under `omit=`.
    pub fn omits(&self, token: &str) -> bool {
        Self::contains_token(&self.omit, token)
    }

    /// Whether `ldp:PreferMinimalContainer` (or its `PreferEmptyContainer`
    /// alias) was requested via `include=`.
    pub fn requests_minimal_container(&self) -> bool {
        self.includes(PREFER_MINIMAL_CONTAINER) || self.includes(PREFER_EMPTY_CONTAINER)
    }

    /// Decision per spec.md §4.3's table: should containment/membership (or
    /// any preference class named by `token`) be emitted, given whether the
    /// response is container-minimal by default preference.
    ///
    /// Returns `(emit, explicit)`: `explicit` is true if the include/omit
    /// for this token (or `minimal`) was actually consulted, which drives
    /// whether `Preference-Applied` must be set.
    pub fn resolve(&self, token: &str) -> (bool, bool) {
        if self.includes(token) {
            return (true, true);
        }
        if self.omits(token) {
            return (false, true);
        }
        if self.requests_minimal_container() {
            return (false, true);
        }
        (true, false)
    }
}

impl Header for Prefer {
    fn name() -> &'static HeaderName {
        &PREFER_HEADER_NAME
    }

    fn decode<'i, I>(values: &mut I) -> Result<Self, headers::Error>
    where
        Self: Sized,
        I: Iterator<Item = &'i HeaderValue>,
    {
        let mut prefer = Prefer::default();
        for raw in values {
            let as_str = raw.to_str().map_err(|_| headers::Error::invalid())?;
            for pref in split_preferences(as_str) {
                let (name, params) = match pref.split_once(';') {
                    Some((n, p)) => (n.trim(), p),
                    None => (pref.trim(), ""),
                };
                if name.eq_ignore_ascii_case("return") {
                    // `return=representation` or `return=minimal`.
                    if params.trim().eq_ignore_ascii_case("representation") {
                        prefer.return_representation = true;
                    }
                    continue;
                }
                for param in split_params(params) {
                    let Some((pname, pvalue)) = param.split_once('=') else {
                        continue;
                    };
                    let pname = pname.trim();
                    let pvalue = pvalue.trim().trim_matches('"').to_string();
                    if pname.eq_ignore_ascii_case("include") {
                        prefer.include.push(pvalue);
                    } else if pname.eq_ignore_ascii_case("omit") {
                        prefer.omit.push(pvalue);
                    }
                }
            }
        }
        Ok(prefer)
    }

    fn encode<E: Extend<HeaderValue>>(&self, values: &mut E) {
        let mut rendered = String::from("return=representation");
        if !self.include.is_empty() {
            rendered.push_str(&format!("; include=\"{}\"", self.include.join(" ")));
        }
        if !self.omit.is_empty() {
            rendered.push_str(&format!("; omit=\"{}\"", self.omit.join(" ")));
        }
        if let Ok(hv) = HeaderValue::from_str(&rendered) {
            values.extend(std::iter::once(hv));
        }
    }
}

/// Splits a `Prefer` value on top-level `,` — i.e. not inside a quoted
/// parameter value such as `include="... ..."`.
fn split_preferences(s: &str) -> Vec<String> {
    split_top_level(s, ',')
}

/// Splits a single preference's parameters on top-level `;`.
fn split_params(s: &str) -> Vec<String> {
    split_top_level(s, ';')
}

fn split_top_level(s: &str, sep: char) -> Vec<String> {
    let mut parts = Vec::new();
    let mut in_quotes = false;
    let mut current = String::new();
    for c in s.chars() {
        match c {
            '"' => {
                in_quotes = !in_quotes;
                current.push(c);
            }
            c if c == sep && !in_quotes => {
                parts.push(std::mem::take(&mut current));
            }
            c => current.push(c),
        }
    }
    if !current.trim().is_empty() {
        parts.push(current);
    }
    parts
}

/// Value for the `Preference-Applied: return=representation` response
/// header, emitted whenever an include/omit/minimal preference was honored.
pub fn preference_applied_value() -> HeaderValue {
    HeaderValue::from_static("return=representation")
}

/// Name of the `Preference-Applied` response header.
pub fn preference_applied_header_name() -> &'static HeaderName {
    &PREFERENCE_APPLIED_HEADER_NAME
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    fn decode(raw: &str) -> Prefer {
        let value = HeaderValue::from_str(raw).unwrap();
        Prefer::decode(&mut std::iter::once(&value)).unwrap()
    }

    #[test]
    fn parses_bare_token_include() {
        let prefer = decode(r#"return=representation; include="http://www.w3.org/ns/ldp#PreferMembership http://www.w3.org/ns/ldp#PreferMinimalContainer""#);
        assert!(prefer.return_representation);
        assert!(prefer.includes(PREFER_MEMBERSHIP));
        assert!(prefer.includes(PREFER_MINIMAL_CONTAINER));
        assert!(!prefer.includes(PREFER_CONTAINMENT));
    }

    #[test]
    fn parses_omit() {
        let prefer = decode(r#"return=representation; omit="http://www.w3.org/ns/ldp#PreferMembership""#);
        assert!(prefer.omits(PREFER_MEMBERSHIP));
        assert!(!prefer.omits(PREFER_CONTAINMENT));
    }

    #[rstest]
    #[case(Prefer { return_representation: true, include: vec![PREFER_CONTAINMENT.to_string()], omit: vec![] }, true, true)]
    #[case(Prefer { return_representation: true, include: vec![], omit: vec![PREFER_CONTAINMENT.to_string()] }, false, true)]
    #[case(Prefer { return_representation: true, include: vec![], omit: vec![] }, true, false)]
    fn resolves_per_decision_table(#[case] prefer: Prefer, #[case] emit: bool, #[case] explicit: bool) {
        assert_eq!(prefer.resolve(PREFER_CONTAINMENT), (emit, explicit));
    }

    #[test]
    fn minimal_container_suppresses_by_default() {
        let prefer = decode(r#"return=representation; include="http://www.w3.org/ns/ldp#PreferMinimalContainer""#);
        assert_eq!(prefer.resolve(PREFER_CONTAINMENT), (false, true));
    }
}
