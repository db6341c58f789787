//! A minimal JSON-LD codec operating on the *expanded document form*: a
//! top-level JSON array of node objects, each keyed by absolute IRIs (or
//! `@id`/`@type`/`@value`/`@language`), with no `@context` to resolve.
//! Relative IRIs and CURIEs are not processed; callers are expected to
//! already be working with absolute IRIs, which is what this core's
//! internal [`Graph`](super::Graph) model always holds.
//!
//! Blank nodes round-trip: a node object's `@id` may be a `_:label`, and a
//! node object with no `@id` at all gets a fresh blank node scoped to that
//! `parse` call, same as the expanded-form rule JSON-LD itself uses.

use std::collections::BTreeMap;

use rdf_utils::model::term::OwnedTerm;
use serde_json::{Map, Value};
use sophia_api::prelude::{IriRef, LanguageTag};
use sophia_api::term::BnodeId;

use super::Graph;
use crate::error::LdpError;

const RDF_TYPE: &str = "http://www.w3.org/1999/02/22-rdf-syntax-ns#type";

pub(super) fn parse(body: &str, base_iri: &str) -> Result<Graph, LdpError> {
    let doc: Value = serde_json::from_str(body)
        .map_err(|e| LdpError::BadRequest(format!("json-ld parse error: {e}")))?;

    let nodes = match doc {
        Value::Array(nodes) => nodes,
        obj @ Value::Object(_) => vec![obj],
        _ => return Err(LdpError::BadRequest("json-ld: expected an array or object of node objects".into())),
    };

    let mut graph = Graph::new();
    // Anonymous node objects (no `@id`) get a fresh blank node identity,
    // scoped to this parse call, matching JSON-LD's implicit-bnode rule.
    let mut next_bnode = 0usize;
    for (i, node) in nodes.iter().enumerate() {
        let obj = node
            .as_object()
            .ok_or_else(|| LdpError::BadRequest(format!("json-ld: node {i} is not an object")))?;
        parse_node(obj, base_iri, &mut graph, &mut next_bnode)?;
    }
    Ok(graph)
}

fn subject_term_for_id(id: Option<&str>, base_iri: &str, next_bnode: &mut usize) -> OwnedTerm {
    match id {
        Some(id) => match id.strip_prefix("_:") {
            Some(label) => bnode_term(label),
            None => iri_term(&resolve(id, base_iri)),
        },
        None => fresh_bnode_term(next_bnode),
    }
}

fn fresh_bnode_term(next_bnode: &mut usize) -> OwnedTerm {
    let label = format!("b{next_bnode}");
    *next_bnode += 1;
    bnode_term(&label)
}

fn bnode_term(label: &str) -> OwnedTerm {
    OwnedTerm::BlankNode(BnodeId::new_unchecked(label.to_string()))
}

fn parse_node(
    obj: &Map<String, Value>,
    base_iri: &str,
    graph: &mut Graph,
    next_bnode: &mut usize,
) -> Result<(), LdpError> {
    let subject_term = subject_term_for_id(obj.get("@id").and_then(Value::as_str), base_iri, next_bnode);

    for (key, value) in obj {
        if key == "@id" {
            continue;
        }
        let predicate = if key == "@type" {
            RDF_TYPE.to_string()
        } else {
            resolve(key, base_iri)
        };
        let values = match value {
            Value::Array(vs) => vs.clone(),
            other => vec![other.clone()],
        };
        for v in values {
            let object_term = if key == "@type" {
                v.as_str()
                    .map(|s| iri_term(&resolve(s, base_iri)))
                    .ok_or_else(|| LdpError::BadRequest("json-ld: @type value must be a string".into()))?
            } else {
                value_to_term(&v, base_iri, next_bnode)?
            };
            graph.insert([subject_term.clone(), iri_term(&predicate), object_term]);
        }
    }
    Ok(())
}

fn value_to_term(value: &Value, base_iri: &str, next_bnode: &mut usize) -> Result<OwnedTerm, LdpError> {
    match value {
        Value::Object(obj) => {
            if obj.contains_key("@id") || (!obj.contains_key("@value") && !obj.contains_key("@type")) {
                Ok(subject_term_for_id(
                    obj.get("@id").and_then(Value::as_str),
                    base_iri,
                    next_bnode,
                ))
            } else if let Some(lit) = obj.get("@value") {
                let lex = value_literal_lexical(lit);
                if let Some(lang) = obj.get("@language").and_then(Value::as_str) {
                    let tag = LanguageTag::new(lang.to_string())
                        .map_err(|e| LdpError::BadRequest(format!("json-ld: bad @language: {e}")))?;
                    Ok(OwnedTerm::LiteralLanguage(lex, tag))
                } else {
                    let datatype = obj
                        .get("@type")
                        .and_then(Value::as_str)
                        .map(|s| resolve(s, base_iri))
                        .unwrap_or_else(|| default_datatype_for(lit).to_string());
                    Ok(OwnedTerm::LiteralDatatype(lex, IriRef::new_unchecked(datatype)))
                }
            } else {
                Err(LdpError::BadRequest("json-ld: object value must have @id or @value".into()))
            }
        }
        Value::String(s) => Ok(OwnedTerm::LiteralDatatype(
            s.clone(),
            IriRef::new_unchecked("http://www.w3.org/2001/XMLSchema#string".to_string()),
        )),
        _ => Err(LdpError::BadRequest("json-ld: unsupported value shape".into())),
    }
}

fn value_literal_lexical(v: &Value) -> String {
    match v {
        Value::String(s) => s.clone(),
        other => other.to_string(),
    }
}

fn default_datatype_for(v: &Value) -> &'static str {
    match v {
        Value::Bool(_) => "http://www.w3.org/2001/XMLSchema#boolean",
        Value::Number(n) if n.is_i64() || n.is_u64() => "http://www.w3.org/2001/XMLSchema#integer",
        Value::Number(_) => "http://www.w3.org/2001/XMLSchema#double",
        _ => "http://www.w3.org/2001/XMLSchema#string",
    }
}

fn resolve(s: &str, base_iri: &str) -> String {
    if s.contains("://") {
        return s.to_string();
    }
    if let Some(fragment) = s.strip_prefix('#') {
        return format!("{base_iri}#{fragment}");
    }
    if s.is_empty() {
        return base_iri.to_string();
    }
    let base_dir = if base_iri.ends_with('/') {
        base_iri.to_string()
    } else {
        match base_iri.rfind('/') {
            Some(idx) => base_iri[..=idx].to_string(),
            None => format!("{base_iri}/"),
        }
    };
    format!("{base_dir}{s}")
}

fn iri_term(s: &str) -> OwnedTerm {
    OwnedTerm::Iri(IriRef::new_unchecked(s.to_string()))
}

pub(super) fn serialize(graph: &Graph) -> Result<Vec<u8>, LdpError> {
    let mut by_subject: BTreeMap<String, Map<String, Value>> = BTreeMap::new();
    let mut order: Vec<String> = Vec::new();

    for [s, p, o] in graph {
        let subject_key = if let Some(iri) = s.iri() {
            iri.as_str().to_string()
        } else if let Some(bnode) = s.bnode_id() {
            format!("_:{}", bnode.as_str())
        } else {
            return Err(LdpError::Internal(
                "json-ld: only IRI or blank-node subjects are supported".into(),
            ));
        };

        let entry = by_subject.entry(subject_key.clone()).or_insert_with(|| {
            order.push(subject_key.clone());
            let mut m = Map::new();
            m.insert("@id".to_string(), Value::String(subject_key.clone()));
            m
        });

        let predicate_iri = p
            .iri()
            .ok_or_else(|| LdpError::Internal("json-ld: only IRI predicates are supported".into()))?
            .as_str()
            .to_string();

        let value = term_to_value(o)?;

        if predicate_iri == RDF_TYPE {
            let types = entry.entry("@type").or_insert_with(|| Value::Array(Vec::new()));
            if let Value::Array(arr) = types {
                if let Some(s) = value.get("@id").and_then(Value::as_str) {
                    arr.push(Value::String(s.to_string()));
                }
            }
            continue;
        }

        let slot = entry
            .entry(predicate_iri)
            .or_insert_with(|| Value::Array(Vec::new()));
        if let Value::Array(arr) = slot {
            arr.push(value);
        }
    }

    let nodes: Vec<Value> = order
        .into_iter()
        .map(|k| Value::Object(by_subject.remove(&k).expect("just inserted")))
        .collect();

    serde_json::to_vec_pretty(&Value::Array(nodes))
        .map_err(|e| LdpError::Internal(format!("json-ld serialize error: {e}")))
}

fn term_to_value(term: &OwnedTerm) -> Result<Map<String, Value>, LdpError> {
    let mut m = Map::new();
    if let Some(iri) = term.iri() {
        m.insert("@id".to_string(), Value::String(iri.as_str().to_string()));
        return Ok(m);
    }
    if let Some(bnode) = term.bnode_id() {
        m.insert("@id".to_string(), Value::String(format!("_:{}", bnode.as_str())));
        return Ok(m);
    }
    if let Some(lex) = term.lexical_form() {
        m.insert("@value".to_string(), Value::String(lex.to_string()));
        if let Some(lang) = term.language_tag() {
            m.insert("@language".to_string(), Value::String(lang.as_str().to_string()));
        } else if let Some(dt) = term.datatype() {
            if dt.as_str() != "http://www.w3.org/2001/XMLSchema#string" {
                m.insert("@type".to_string(), Value::String(dt.as_str().to_string()));
            }
        }
        return Ok(m);
    }
    Err(LdpError::Internal("json-ld: unsupported term kind".into()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::rdf::iri;

    #[test]
    fn parses_simple_node() {
        let body = r#"[{"@id": "", "@type": "http://www.w3.org/ns/ldp#BasicContainer"}]"#;
        let graph = parse(body, "http://h/r/c1").unwrap();
        assert!(graph.contains(&[
            iri("http://h/r/c1"),
            iri(RDF_TYPE),
            iri("http://www.w3.org/ns/ldp#BasicContainer"),
        ]));
    }

    #[test]
    fn round_trips_literal_with_language() {
        let mut graph = Graph::new();
        graph.insert([
            iri("http://h/r/a"),
            iri("http://purl.org/dc/terms/title"),
            OwnedTerm::LiteralLanguage("hello".to_string(), LanguageTag::new("en".to_string()).unwrap()),
        ]);
        let bytes = serialize(&graph).unwrap();
        let reparsed = parse(std::str::from_utf8(&bytes).unwrap(), "http://h/r/a").unwrap();
        assert_eq!(graph, reparsed);
    }

    #[test]
    fn parses_explicit_blank_node_subject() {
        let body = r#"[{"@id": "_:x", "http://ex/p": {"@id": "http://ex/o"}}]"#;
        let graph = parse(body, "http://h/r/c1").unwrap();
        assert!(graph
            .iter()
            .any(|[s, _, _]| s.bnode_id().map(|b| b.as_str().to_string()) == Some("x".to_string())));
    }

    #[test]
    fn parses_node_with_no_id_as_fresh_blank_node() {
        let body = r#"[{"http://ex/p": {"@id": "http://ex/o"}}]"#;
        let graph = parse(body, "http://h/r/c1").unwrap();
        let [s, _, _] = graph.iter().next().unwrap();
        assert!(s.bnode_id().is_some());
    }

    #[test]
    fn round_trips_blank_node_subject() {
        let mut graph = Graph::new();
        graph.insert([
            OwnedTerm::BlankNode(BnodeId::new_unchecked("x".to_string())),
            iri("http://ex/p"),
            iri("http://ex/o"),
        ]);
        let bytes = serialize(&graph).unwrap();
        let reparsed = parse(std::str::from_utf8(&bytes).unwrap(), "http://h/r/c1").unwrap();
        assert_eq!(graph, reparsed);
    }

    #[test]
    fn resolves_relative_object_iri() {
        let body = r#"[{"@id": "", "http://ex/p": {"@id": "child"}}]"#;
        let graph = parse(body, "http://h/r/c1/").unwrap();
        assert!(graph
            .iter()
            .any(|[_, _, o]| o == &iri("http://h/r/c1/child")));
    }
}
