//! Writing a [Graph] as a document
//!
//! Turtle (also used for N3, of which it is a subset) is written with the prefixes bound
//! in the graph, one block per subject. N-Triples is written through `rio_turtle`,
//! RDF/XML through `rio_xml`.
use crate::graph::{Graph, Iri, Term};
use crate::vocab::{rdf, xsd};
use crate::Error;
use log::info;
use rio_api::formatter::TriplesFormatter;
use rio_api::model::{Literal as RioLiteral, NamedNode, Subject, Term as RioTerm, Triple};
use rio_turtle::NTriplesFormatter;
use rio_xml::RdfXmlFormatter;
use std::fmt;
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;
use std::str::FromStr;

/// Syntax of the written document
#[derive(Derivative, Debug, Copy, Clone, PartialEq, Eq)]
#[derivative(Default(bound = ""))]
pub enum RdfFormat {
    /// Turtle, accepted names `turtle`, `ttl` and `n3`
    #[derivative(Default)]
    Turtle,
    /// N-Triples, accepted names `nt`, `ntriples` and `n-triples`
    NTriples,
    /// RDF/XML, accepted names `xml`, `rdfxml`, `rdf/xml` and `rdf`
    RdfXml,
}

impl FromStr for RdfFormat {
    type Err = Error;

    fn from_str(name: &str) -> Result<Self, Error> {
        match name.to_ascii_lowercase().as_str() {
            "turtle" | "ttl" | "n3" => Ok(RdfFormat::Turtle),
            "nt" | "ntriples" | "n-triples" => Ok(RdfFormat::NTriples),
            "xml" | "rdfxml" | "rdf/xml" | "rdf" => Ok(RdfFormat::RdfXml),
            _ => Err(Error::UnsupportedFormat(name.to_owned())),
        }
    }
}

impl fmt::Display for RdfFormat {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            RdfFormat::Turtle => write!(f, "turtle"),
            RdfFormat::NTriples => write!(f, "ntriples"),
            RdfFormat::RdfXml => write!(f, "rdfxml"),
        }
    }
}

/// Writes the graph to `destination`, replacing the file if it exists
pub fn serialize<P: AsRef<Path>>(
    graph: &Graph,
    destination: P,
    format: RdfFormat,
) -> Result<(), Error> {
    let destination = destination.as_ref();
    info!(
        "Writing {} statements as {} to {}",
        graph.len(),
        format,
        destination.display()
    );
    let mut writer = BufWriter::new(File::create(destination)?);
    write(graph, &mut writer, format)?;
    writer.flush()?;
    Ok(())
}

/// Writes the graph to any writer
pub fn write<W: Write>(graph: &Graph, writer: W, format: RdfFormat) -> Result<(), Error> {
    match format {
        RdfFormat::Turtle => write_turtle(graph, writer),
        RdfFormat::NTriples => {
            let mut formatter = NTriplesFormatter::new(writer);
            format_triples(graph, &mut formatter)?;
            formatter.finish()?;
            Ok(())
        }
        RdfFormat::RdfXml => {
            let mut formatter = RdfXmlFormatter::new(writer)?;
            format_triples(graph, &mut formatter)?;
            formatter.finish()?;
            Ok(())
        }
    }
}

/// The graph as a string
pub fn to_string(graph: &Graph, format: RdfFormat) -> Result<String, Error> {
    let mut buf = Vec::new();
    write(graph, &mut buf, format)?;
    Ok(String::from_utf8_lossy(&buf).to_string())
}

fn write_turtle<W: Write>(graph: &Graph, mut writer: W) -> Result<(), Error> {
    let prefixes = graph.namespaces();
    for (prefix, namespace) in prefixes {
        writeln!(writer, "@prefix {}: <{}> .", prefix, escape_iri(namespace))?;
    }
    if !prefixes.is_empty() {
        writeln!(writer)?;
    }

    for subject in graph.subjects() {
        write!(writer, "{}", format_iri(subject.as_str(), prefixes))?;
        let mut statements: Vec<_> = graph.predicate_objects(subject).collect();
        // rdf:type first, the rest keeps the graph order
        statements.sort_by_key(|(predicate, _)| predicate.as_str() != rdf::TYPE);
        for (i, (predicate, object)) in statements.into_iter().enumerate() {
            let predicate = if predicate.as_str() == rdf::TYPE {
                "a".to_owned()
            } else {
                format_iri(predicate.as_str(), prefixes)
            };
            let object = format_term(object, prefixes);
            if i == 0 {
                write!(writer, " {} {}", predicate, object)?;
            } else {
                write!(writer, " ;\n    {} {}", predicate, object)?;
            }
        }
        writeln!(writer, " .")?;
    }
    Ok(())
}

fn format_term(term: &Term, prefixes: &[(String, String)]) -> String {
    match term {
        Term::Iri(iri) => format_iri(iri.as_str(), prefixes),
        Term::Literal(literal) if literal.datatype.as_str() == xsd::STRING => {
            format!("\"{}\"", escape_literal(&literal.value))
        }
        Term::Literal(literal) => format!(
            "\"{}\"^^{}",
            escape_literal(&literal.value),
            format_iri(literal.datatype.as_str(), prefixes)
        ),
    }
}

/// Compacts an IRI with the first matching prefix, or writes it in full
fn format_iri(iri: &str, prefixes: &[(String, String)]) -> String {
    for (prefix, namespace) in prefixes {
        if let Some(local) = iri.strip_prefix(namespace.as_str()) {
            if is_valid_local_name(local) {
                return format!("{}:{}", prefix, local);
            }
        }
    }
    format!("<{}>", escape_iri(iri))
}

/// A conservative subset of the Turtle `PN_LOCAL` production
fn is_valid_local_name(s: &str) -> bool {
    !s.is_empty()
        && s.chars().all(|c| c.is_ascii_alphanumeric() || c == '_' || c == '-')
        && !s.starts_with('-')
}

/// Characters not allowed in an `IRIREF` are written as `\uXXXX`
fn escape_iri(iri: &str) -> String {
    let mut escaped = String::with_capacity(iri.len());
    for c in iri.chars() {
        match c {
            '\u{0}'..='\u{20}' | '<' | '>' | '"' | '{' | '}' | '|' | '^' | '`' | '\\' => {
                escaped.push_str(&format!("\\u{:04X}", c as u32))
            }
            c => escaped.push(c),
        }
    }
    escaped
}

fn escape_literal(value: &str) -> String {
    let mut escaped = String::with_capacity(value.len());
    for c in value.chars() {
        match c {
            '\\' => escaped.push_str("\\\\"),
            '"' => escaped.push_str("\\\""),
            '\n' => escaped.push_str("\\n"),
            '\r' => escaped.push_str("\\r"),
            '\t' => escaped.push_str("\\t"),
            c => escaped.push(c),
        }
    }
    escaped
}

/// Hands every statement to a rio formatter
fn format_triples<F>(graph: &Graph, formatter: &mut F) -> Result<(), Error>
where
    F: TriplesFormatter,
    Error: From<F::Error>,
{
    for triple in graph.triples() {
        let object = match triple.object {
            Term::Iri(iri) => RioTerm::NamedNode(named_node(iri)),
            Term::Literal(literal) if literal.datatype.as_str() == xsd::STRING => {
                RioTerm::Literal(RioLiteral::Simple {
                    value: &literal.value,
                })
            }
            Term::Literal(literal) => RioTerm::Literal(RioLiteral::Typed {
                value: &literal.value,
                datatype: named_node(&literal.datatype),
            }),
        };
        formatter.format(&Triple {
            subject: Subject::NamedNode(named_node(triple.subject)),
            predicate: named_node(triple.predicate),
            object,
        })?;
    }
    Ok(())
}

fn named_node(iri: &Iri) -> NamedNode<'_> {
    NamedNode { iri: iri.as_str() }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::graph::Literal;
    use crate::vocab::{foaf, gtfs};
    use rio_api::parser::TriplesParser;
    use rio_turtle::{NTriplesParser, TurtleError, TurtleParser};
    use rio_xml::{RdfXmlError, RdfXmlParser};

    fn sample() -> Graph {
        let mut graph = Graph::with_default_prefixes();
        let stop = Iri::new("http://x/stop_1");
        graph.add(&stop, rdf::TYPE, Iri::new(gtfs::STOP));
        graph.add(&stop, foaf::NAME, Literal::string("Gare \"Centrale\"\nNord"));
        graph.add(&stop, gtfs::PARENT_STATION, Iri::new("http://x/stop_2"));
        graph.add(&stop, gtfs::STOP_SEQUENCE, Literal::typed("3", xsd::NON_NEGATIVE_INTEGER));
        graph
    }

    fn count_turtle(document: &str) -> usize {
        let mut count = 0;
        TurtleParser::new(document.as_bytes(), None)
            .parse_all(&mut |_| {
                count += 1;
                Ok(()) as Result<(), TurtleError>
            })
            .unwrap();
        count
    }

    #[test]
    fn format_names() {
        assert_eq!(RdfFormat::Turtle, "n3".parse().unwrap());
        assert_eq!(RdfFormat::Turtle, "TTL".parse().unwrap());
        assert_eq!(RdfFormat::NTriples, "nt".parse().unwrap());
        assert_eq!(RdfFormat::RdfXml, "xml".parse().unwrap());
        assert_eq!(RdfFormat::RdfXml, "rdf".parse().unwrap());
        assert!(matches!(
            "jsonld".parse::<RdfFormat>(),
            Err(Error::UnsupportedFormat(name)) if name == "jsonld"
        ));
    }

    #[test]
    fn turtle_declares_prefixes_and_parses_back() {
        let graph = sample();
        let document = to_string(&graph, RdfFormat::Turtle).unwrap();
        for prefix in ["gtfs", "foaf", "dct", "schema", "geo"] {
            assert!(document.contains(&format!("@prefix {prefix}: <")));
        }
        assert!(document.contains("<http://x/stop_1> a gtfs:Stop"));
        assert!(document.contains("\"3\"^^xsd:nonNegativeInteger"));
        assert_eq!(graph.len(), count_turtle(&document));
    }

    #[test]
    fn ntriples_parses_back() {
        let graph = sample();
        let document = to_string(&graph, RdfFormat::NTriples).unwrap();
        let mut count = 0;
        NTriplesParser::new(document.as_bytes())
            .parse_all(&mut |_| {
                count += 1;
                Ok(()) as Result<(), TurtleError>
            })
            .unwrap();
        assert_eq!(graph.len(), count);
        assert!(document.contains("<http://x/stop_1> <http://www.w3.org/1999/02/22-rdf-syntax-ns#type> <http://vocab.gtfs.org/terms#Stop> ."));
    }

    #[test]
    fn rdfxml_parses_back() {
        let graph = sample();
        let document = to_string(&graph, RdfFormat::RdfXml).unwrap();
        assert!(document.contains("rdf:about=\"http://x/stop_1\""));
        let mut types = Vec::new();
        let mut count = 0;
        RdfXmlParser::new(document.as_bytes(), None)
            .parse_all(&mut |t| {
                count += 1;
                if t.predicate.iri == rdf::TYPE {
                    if let (Subject::NamedNode(s), RioTerm::NamedNode(o)) = (t.subject, t.object) {
                        types.push((s.iri.to_owned(), o.iri.to_owned()));
                    }
                }
                Ok(()) as Result<(), RdfXmlError>
            })
            .unwrap();
        assert_eq!(graph.len(), count);
        assert_eq!(
            vec![("http://x/stop_1".to_owned(), gtfs::STOP.to_owned())],
            types
        );
    }

    #[test]
    fn escaping() {
        assert_eq!("http://x/a\\u007Cb", escape_iri("http://x/a|b"));
        assert_eq!("a\\\"b\\nc", escape_literal("a\"b\nc"));
        assert!(is_valid_local_name("stop_1"));
        assert!(!is_valid_local_name("a.b"));
        assert!(!is_valid_local_name(""));
    }
}
