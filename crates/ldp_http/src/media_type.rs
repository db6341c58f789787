//! The three RDF media types the core recognizes, and `Accept`/
//! `Content-Type` negotiation over them.

use mime::Mime;

/// One of the three RDF syntaxes the core speaks.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RdfSyntax {
    Turtle,
    JsonLd,
    RdfXml,
}

impl RdfSyntax {
    /// The canonical media type this core emits for the syntax.
    pub fn canonical_media_type(self) -> &'static str {
        match self {
            RdfSyntax::Turtle => "text/turtle",
            RdfSyntax::JsonLd => "application/ld+json",
            RdfSyntax::RdfXml => "application/rdf+xml",
        }
    }

    /// Negotiation preference order for GET/HEAD, per spec.md §4.4 step 2:
    /// Turtle, then JSON-LD/JSON, then RDF/XML.
    pub fn preference_order() -> &'static [RdfSyntax] {
        &[RdfSyntax::Turtle, RdfSyntax::JsonLd, RdfSyntax::RdfXml]
    }

    /// Media types this core accepts as requests bodies in this syntax.
    /// `RdfXml` is read-path-only by design (spec.md §6): it is never
    /// accepted as a request `Content-Type`.
    pub fn request_content_types(self) -> &'static [&'static str] {
        match self {
            RdfSyntax::Turtle => &["text/turtle"],
            RdfSyntax::JsonLd => &["application/ld+json", "application/json"],
            RdfSyntax::RdfXml => &[],
        }
    }

    /// Resolve a `Content-Type` string to the syntax it requests for a
    /// write, if any of the three (minus RdfXml) accept it.
    pub fn from_content_type(content_type: &str) -> Option<RdfSyntax> {
        let essence = essence(content_type)?;
        for syntax in [RdfSyntax::Turtle, RdfSyntax::JsonLd] {
            if syntax.request_content_types().contains(&essence.as_str()) {
                return Some(syntax);
            }
        }
        None
    }

    /// Resolve an `Accept` media-range string to the syntax it names, if it
    /// is one of the three (including `RdfXml`, since GET may return it).
    fn from_media_range(media_range: &str) -> Option<RdfSyntax> {
        match media_range {
            "text/turtle" => Some(RdfSyntax::Turtle),
            "application/ld+json" | "application/json" => Some(RdfSyntax::JsonLd),
            "application/rdf+xml" => Some(RdfSyntax::RdfXml),
            "*/*" | "text/*" | "application/*" => None,
            _ => None,
        }
    }
}

fn essence(content_type: &str) -> Option<String> {
    content_type
        .parse::<Mime>()
        .ok()
        .map(|m| format!("{}/{}", m.type_(), m.subtype()))
}

/// One ranked entry of an `Accept` header.
struct AcceptEntry {
    media_range: String,
    q: f32,
}

fn parse_accept(accept: &str) -> Vec<AcceptEntry> {
    let mut entries = Vec::new();
    for part in accept.split(',') {
        let part = part.trim();
        if part.is_empty() {
            continue;
        }
        let mut segments = part.split(';');
        let media_range = segments.next().unwrap_or("").trim().to_lowercase();
        let mut q = 1.0f32;
        for param in segments {
            let param = param.trim();
            if let Some(raw_q) = param.strip_prefix("q=") {
                q = raw_q.trim().parse().unwrap_or(1.0);
            }
        }
        entries.push(AcceptEntry { media_range, q });
    }
    entries
}

/// Negotiate a response syntax against an `Accept` header, per spec.md
/// §4.4 step 2: highest-q acceptable entry wins; ties broken by the fixed
/// preference order (Turtle, JSON-LD/JSON, RDF/XML). A missing or empty
/// `Accept` header is treated as `*/*` (any syntax acceptable), resolving to
/// the most preferred syntax.
pub fn negotiate(accept: Option<&str>) -> Option<RdfSyntax> {
    let accept = match accept {
        None => return Some(RdfSyntax::preference_order()[0]),
        Some(a) if a.trim().is_empty() => return Some(RdfSyntax::preference_order()[0]),
        Some(a) => a,
    };

    let entries = parse_accept(accept);
    if entries.iter().any(|e| e.media_range == "*/*" && e.q > 0.0) {
        // Wildcard accepted: fall through to ranked matching below, but
        // also ensure a bare `*/*` with no narrower rejection still
        // resolves to our most preferred syntax.
    }

    let mut best: Option<(RdfSyntax, f32, usize)> = None;
    for (rank, syntax) in RdfSyntax::preference_order().iter().enumerate() {
        let media_type = syntax.canonical_media_type();
        for entry in &entries {
            if entry.q <= 0.0 {
                continue;
            }
            let matches = entry.media_range == media_type
                || entry.media_range == "*/*"
                || entry.media_range == format!("{}/*", media_type.split('/').next().unwrap());
            if matches {
                let better = match &best {
                    None => true,
                    Some((_, best_q, best_rank)) => {
                        entry.q > *best_q || (entry.q == *best_q && rank < *best_rank)
                    }
                };
                if better {
                    best = Some((*syntax, entry.q, rank));
                }
            }
        }
    }
    best.map(|(syntax, _, _)| syntax)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn negotiates_turtle_first() {
        assert_eq!(
            negotiate(Some("text/turtle, application/ld+json")),
            Some(RdfSyntax::Turtle)
        );
    }

    #[test]
    fn negotiates_by_q_value() {
        assert_eq!(
            negotiate(Some("text/turtle;q=0.1, application/ld+json;q=0.9")),
            Some(RdfSyntax::JsonLd)
        );
    }

    #[test]
    fn defaults_to_turtle_on_missing_accept() {
        assert_eq!(negotiate(None), Some(RdfSyntax::Turtle));
    }

    #[test]
    fn none_when_nothing_matches() {
        assert_eq!(negotiate(Some("text/plain")), None);
    }

    #[test]
    fn content_type_resolves_json_alias() {
        assert_eq!(
            RdfSyntax::from_content_type("application/json; charset=utf-8"),
            Some(RdfSyntax::JsonLd)
        );
    }

    #[test]
    fn rdf_xml_not_accepted_as_request_content_type() {
        assert_eq!(RdfSyntax::from_content_type("application/rdf+xml"), None);
    }
}
