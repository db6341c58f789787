//! Parses and serializes the three RDF syntaxes the core speaks (spec.md
//! §4.1), producing/consuming the [`Graph`](super::Graph) model.
//!
//! Turtle and RDF/XML are driven through [`rdf_dynsyn`]'s runtime-dispatched
//! sophia parsers/serializers. JSON-LD is handled directly against its
//! *expanded document form* (a plain array of node objects, no `@context`
//! processing) via `serde_json`; this core never needs to resolve remote
//! contexts, so the expanded form is sufficient and keeps the dependency
//! surface small (see DESIGN.md).

use ldp_http::RdfSyntax;
use rdf_dynsyn::{
    parser::triples::DynSynTripleParserFactory,
    serializer::triples::DynSynTripleSerializerFactory,
    syntax::invariant::{
        triples_parsable::TP_TURTLE,
        triples_serializable::{TS_RDF_XML, TS_TURTLE},
    },
};
use sophia_api::{
    graph::Graph as _,
    parser::TripleParser,
    prelude::Iri,
    serializer::{Stringifier, TripleSerializer},
    source::TripleSource,
};

use super::Graph;
use crate::error::LdpError;

mod jsonld;

static DYNSYN_PARSER_FACTORY: once_cell::sync::Lazy<DynSynTripleParserFactory> =
    once_cell::sync::Lazy::new(DynSynTripleParserFactory::default);

static DYNSYN_SERIALIZER_FACTORY: once_cell::sync::Lazy<DynSynTripleSerializerFactory> =
    once_cell::sync::Lazy::new(|| DynSynTripleSerializerFactory::new(None));

/// Parse `body` (in `syntax`) with relative IRIs resolved against
/// `base_iri`, producing a [`Graph`]. Maps parse failures to
/// [`LdpError::BadRequest`], per spec.md §4.1.
#[tracing::instrument(skip(body), fields(body_len = body.len()))]
pub fn parse(body: &str, base_iri: &str, syntax: RdfSyntax) -> Result<Graph, LdpError> {
    match syntax {
        RdfSyntax::Turtle => {
            let base = Iri::new(base_iri.to_string())
                .map_err(|e| LdpError::BadRequest(format!("invalid base IRI: {e}")))?;
            let parser = DYNSYN_PARSER_FACTORY.new_parser(TP_TURTLE, Some(base));
            parser
                .parse_str(body)
                .collect_triples()
                .map_err(|e| LdpError::BadRequest(format!("turtle parse error: {e}")))
        }
        RdfSyntax::JsonLd => jsonld::parse(body, base_iri),
        RdfSyntax::RdfXml => Err(LdpError::UnsupportedMediaType),
    }
}

/// Serialize `graph` in `syntax`, producing UTF-8 bytes. Failures here are
/// server-internal (spec.md §4.1: "serialization failures are
/// server-internal (500)").
#[tracing::instrument(skip(graph))]
pub fn serialize(graph: &Graph, syntax: RdfSyntax) -> Result<Vec<u8>, LdpError> {
    match syntax {
        RdfSyntax::Turtle => {
            let mut serializer = DYNSYN_SERIALIZER_FACTORY.new_stringifier(TS_TURTLE);
            serializer
                .serialize_triples(graph.triples())
                .map_err(|e| LdpError::Internal(format!("turtle serialize error: {e}")))?;
            Ok(serializer.as_utf8().to_vec())
        }
        RdfSyntax::RdfXml => {
            let mut serializer = DYNSYN_SERIALIZER_FACTORY.new_stringifier(TS_RDF_XML);
            serializer
                .serialize_triples(graph.triples())
                .map_err(|e| LdpError::Internal(format!("rdf/xml serialize error: {e}")))?;
            Ok(serializer.as_utf8().to_vec())
        }
        RdfSyntax::JsonLd => jsonld::serialize(graph),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::rdf::iri;

    #[test]
    fn turtle_round_trips() {
        let turtle = r#"
            @prefix ldp: <http://www.w3.org/ns/ldp#> .
            <> a ldp:BasicContainer .
        "#;
        let graph = parse(turtle, "http://h/r/c1", RdfSyntax::Turtle).unwrap();
        assert!(graph.contains(&[
            iri("http://h/r/c1"),
            iri("http://www.w3.org/1999/02/22-rdf-syntax-ns#type"),
            iri("http://www.w3.org/ns/ldp#BasicContainer"),
        ]));

        let bytes = serialize(&graph, RdfSyntax::Turtle).unwrap();
        let reparsed = parse(
            std::str::from_utf8(&bytes).unwrap(),
            "http://h/r/c1",
            RdfSyntax::Turtle,
        )
        .unwrap();
        assert_eq!(graph, reparsed);
    }

    #[test]
    fn relative_iris_resolve_against_base() {
        let turtle = "<#self> <http://ex/p> <child> .";
        let graph = parse(turtle, "http://h/r/c1", RdfSyntax::Turtle).unwrap();
        assert!(graph
            .iter()
            .any(|[s, _, _]| s == &iri("http://h/r/c1#self")));
        assert!(graph
            .iter()
            .any(|[_, _, o]| o == &iri("http://h/r/child")));
    }

    #[test]
    fn malformed_turtle_is_bad_request() {
        let err = parse("this is not turtle <<<", "http://h/r/c1", RdfSyntax::Turtle).unwrap_err();
        assert!(matches!(err, LdpError::BadRequest(_)));
    }

    #[test]
    fn rdf_xml_is_serialize_only() {
        let mut graph = Graph::new();
        graph.insert([
            iri("http://h/r/x"),
            iri("http://www.w3.org/1999/02/22-rdf-syntax-ns#type"),
            iri("http://www.w3.org/ns/ldp#Resource"),
        ]);
        let bytes = serialize(&graph, RdfSyntax::RdfXml).unwrap();
        assert!(!bytes.is_empty());

        let err = parse(
            std::str::from_utf8(&bytes).unwrap(),
            "http://h/r/x",
            RdfSyntax::RdfXml,
        )
        .unwrap_err();
        assert!(matches!(err, LdpError::UnsupportedMediaType));
    }
}
