//! `Link` header (RFC 8288) parsing, scoped to what the LDP core needs: a
//! list of `(target, rel)` pairs, with tolerant whitespace and multi-token
//! `rel` handling, and construction of the `Link` values the controller
//! emits on every response.

use headers::{Header, HeaderName, HeaderValue};
use once_cell::sync::Lazy;

/// The `http://www.w3.org/ns/ldp#Resource` type IRI, used by clients to force
/// plain-RDF-source classification on an otherwise container-typed graph.
pub const LDP_RESOURCE_TYPE: &str = "http://www.w3.org/ns/ldp#Resource";

/// A single parsed link-value: its target URI-reference and the raw,
/// whitespace-tolerant list of relation tokens attached to it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LinkValue {
    pub target: String,
    pub rel_tokens: Vec<String>,
}

impl LinkValue {
    fn has_rel(&self, rel: &str) -> bool {
        self.rel_tokens.iter().any(|t| t.eq_ignore_ascii_case(rel))
    }
}

/// The decoded `Link` header: zero or more link-values, possibly spread
/// across repeated header instances or comma-joined within one.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Link {
    pub values: Vec<LinkValue>,
}

impl Link {
    /// True if the client requested `rel="type"` pointing at
    /// `ldp:Resource`, i.e. an explicit request to treat a POSTed/PUT
    /// graph as a plain RDF source regardless of its RDF type triples.
    pub fn requests_rdf_source_override(&self) -> bool {
        self.values
            .iter()
            .any(|v| v.has_rel("type") && v.target == LDP_RESOURCE_TYPE)
    }

    fn parse_value(raw: &str) -> Option<LinkValue> {
        let raw = raw.trim();
        let (target_part, rest) = raw.split_once('>')?;
        let target = target_part.trim().strip_prefix('<')?.trim().to_string();

        let mut rel_tokens = Vec::new();
        for param in rest.split(';') {
            let param = param.trim();
            if param.is_empty() {
                continue;
            }
            let Some((name, value)) = param.split_once('=') else {
                continue;
            };
            if !name.trim().eq_ignore_ascii_case("rel") {
                continue;
            }
            let value = value.trim().trim_matches('"');
            rel_tokens.extend(value.split_whitespace().map(str::to_owned));
        }

        Some(LinkValue {
            target,
            rel_tokens,
        })
    }
}

static LINK_HEADER_NAME: Lazy<HeaderName> = Lazy::new(|| HeaderName::from_static("link"));

impl Header for Link {
    fn name() -> &'static HeaderName {
        &LINK_HEADER_NAME
    }

    fn decode<'i, I>(raw_values: &mut I) -> Result<Self, headers::Error>
    where
        Self: Sized,
        I: Iterator<Item = &'i HeaderValue>,
    {
        let mut values = Vec::new();
        for raw in raw_values {
            let as_str = raw.to_str().map_err(|_| headers::Error::invalid())?;
            for link_value_str in split_top_level_commas(as_str) {
                if let Some(v) = Link::parse_value(&link_value_str) {
                    values.push(v);
                }
            }
        }
        Ok(Link { values })
    }

    fn encode<E: Extend<HeaderValue>>(&self, values: &mut E) {
        for v in &self.values {
            let rendered = format!("<{}>; rel=\"{}\"", v.target, v.rel_tokens.join(" "));
            if let Ok(hv) = HeaderValue::from_str(&rendered) {
                values.extend(std::iter::once(hv));
            }
        }
    }
}

/// Split a `Link` header value on commas that are not inside the `<...>`
/// target or a quoted parameter value.
fn split_top_level_commas(s: &str) -> Vec<String> {
    let mut parts = Vec::new();
    let mut depth = 0i32;
    let mut in_quotes = false;
    let mut current = String::new();
    for c in s.chars() {
        match c {
            '<' if !in_quotes => {
                depth += 1;
                current.push(c);
            }
            '>' if !in_quotes => {
                depth -= 1;
                current.push(c);
            }
            '"' => {
                in_quotes = !in_quotes;
                current.push(c);
            }
            ',' if depth == 0 && !in_quotes => {
                parts.push(std::mem::take(&mut current));
            }
            _ => current.push(c),
        }
    }
    if !current.trim().is_empty() {
        parts.push(current);
    }
    parts
}

/// Build the `Link: <...>; rel="type"` value naming the LDP interaction
/// model, for use in controller responses.
pub fn type_link_header_value(type_iri: &str) -> HeaderValue {
    HeaderValue::from_str(&format!("<{type_iri}>; rel=\"type\""))
        .expect("type IRI must be a valid header value")
}

/// Build the `Link: <...>; rel="http://www.w3.org/ns/ldp#constrainedBy"`
/// value naming the server's constraints document.
pub fn constrained_by_link_header_value(constraints_uri: &str) -> HeaderValue {
    HeaderValue::from_str(&format!(
        "<{constraints_uri}>; rel=\"http://www.w3.org/ns/ldp#constrainedBy\""
    ))
    .expect("constraints URI must be a valid header value")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn recognizes_resource_override_with_whitespace() {
        let value = HeaderValue::from_str(
            "  <http://www.w3.org/ns/ldp#Resource> ; rel = \"type\"  ",
        )
        .unwrap();
        let link = Link::decode(&mut std::iter::once(&value)).unwrap();
        assert!(link.requests_rdf_source_override());
    }

    #[test]
    fn recognizes_multi_token_rel() {
        let value =
            HeaderValue::from_str(r#"<http://www.w3.org/ns/ldp#Resource>; rel="type other""#)
                .unwrap();
        let link = Link::decode(&mut std::iter::once(&value)).unwrap();
        assert!(link.requests_rdf_source_override());
    }

    #[test]
    fn ignores_unrelated_links() {
        let value = HeaderValue::from_str(r#"<http://example.org/x>; rel="type""#).unwrap();
        let link = Link::decode(&mut std::iter::once(&value)).unwrap();
        assert!(!link.requests_rdf_source_override());
    }
}
