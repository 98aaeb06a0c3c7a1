//! In-memory RDF graph the converters accumulate statements into
use crate::vocab::{self, xsd};
use std::collections::BTreeMap;
use std::fmt;

/// An absolute IRI naming a node or a predicate
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Iri(String);

impl Iri {
    /// Wraps an IRI. No validation is done, ids coming from the feed are kept as they are
    pub fn new(iri: impl Into<String>) -> Self {
        Self(iri.into())
    }

    /// The IRI as a string slice
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<&str> for Iri {
    fn from(iri: &str) -> Self {
        Self::new(iri)
    }
}

impl From<String> for Iri {
    fn from(iri: String) -> Self {
        Self(iri)
    }
}

impl fmt::Display for Iri {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "<{}>", self.0)
    }
}

/// A typed literal
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Literal {
    /// Lexical form of the value
    pub value: String,
    /// Datatype IRI, `xsd:string` for plain strings
    pub datatype: Iri,
}

impl Literal {
    /// A literal of the given datatype
    pub fn typed(value: impl Into<String>, datatype: &str) -> Self {
        Self {
            value: value.into(),
            datatype: Iri::new(datatype),
        }
    }

    /// An `xsd:string` literal
    pub fn string(value: impl Into<String>) -> Self {
        Self::typed(value, xsd::STRING)
    }

    /// An `xsd:boolean` literal
    pub fn boolean(value: bool) -> Self {
        Self::typed(if value { "true" } else { "false" }, xsd::BOOLEAN)
    }
}

/// Object position of a statement
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Term {
    /// A reference to another node
    Iri(Iri),
    /// A value
    Literal(Literal),
}

impl From<Iri> for Term {
    fn from(iri: Iri) -> Self {
        Term::Iri(iri)
    }
}

impl From<Literal> for Term {
    fn from(literal: Literal) -> Self {
        Term::Literal(literal)
    }
}

/// A borrowed (subject, predicate, object) statement
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Triple<'a> {
    /// Node the statement is about
    pub subject: &'a Iri,
    /// Property
    pub predicate: &'a Iri,
    /// Value or referenced node
    pub object: &'a Term,
}

/// A set of statements, indexed by subject then predicate
///
/// Iteration is ordered by subject and predicate, objects keep their insertion order,
/// which makes serialization deterministic for a given input.
#[derive(Debug, Default)]
pub struct Graph {
    statements: BTreeMap<Iri, BTreeMap<Iri, Vec<Term>>>,
    namespaces: Vec<(String, String)>,
    len: usize,
}

impl Graph {
    /// An empty graph with no bound prefix
    pub fn new() -> Self {
        Self::default()
    }

    /// An empty graph with the prefixes of the vocabularies used by the converter
    pub fn with_default_prefixes() -> Self {
        let mut graph = Self::new();
        for (prefix, namespace) in vocab::DEFAULT_PREFIXES {
            graph.bind(prefix, namespace);
        }
        graph
    }

    /// Binds a prefix to a namespace. Binding an already bound prefix replaces its namespace
    pub fn bind(&mut self, prefix: &str, namespace: &str) {
        match self.namespaces.iter_mut().find(|(p, _)| p == prefix) {
            Some(binding) => binding.1 = namespace.to_owned(),
            None => self
                .namespaces
                .push((prefix.to_owned(), namespace.to_owned())),
        }
    }

    /// The bound (prefix, namespace) pairs, in binding order
    pub fn namespaces(&self) -> &[(String, String)] {
        &self.namespaces
    }

    /// Adds a statement. Returns false if it was already in the graph
    pub fn add(&mut self, subject: &Iri, predicate: &str, object: impl Into<Term>) -> bool {
        let object = object.into();
        let objects = self
            .statements
            .entry(subject.clone())
            .or_default()
            .entry(Iri::new(predicate))
            .or_default();
        if objects.contains(&object) {
            return false;
        }
        objects.push(object);
        self.len += 1;
        true
    }

    /// Replaces every value of `predicate` on `subject` by `object`
    pub fn set(&mut self, subject: &Iri, predicate: &str, object: impl Into<Term>) {
        let objects = self
            .statements
            .entry(subject.clone())
            .or_default()
            .entry(Iri::new(predicate))
            .or_default();
        self.len -= objects.len();
        objects.clear();
        objects.push(object.into());
        self.len += 1;
    }

    /// Values of `predicate` on `subject`
    pub fn objects(&self, subject: &Iri, predicate: &str) -> &[Term] {
        self.statements
            .get(subject)
            .and_then(|predicates| predicates.get(&Iri::new(predicate)))
            .map(Vec::as_slice)
            .unwrap_or(&[])
    }

    /// Is there any statement about `subject`
    pub fn contains_subject(&self, subject: &Iri) -> bool {
        self.statements.contains_key(subject)
    }

    /// Is the given statement in the graph
    pub fn contains(&self, subject: &Iri, predicate: &str, object: &Term) -> bool {
        self.objects(subject, predicate).contains(object)
    }

    /// Subjects of the graph, in order
    pub fn subjects(&self) -> impl Iterator<Item = &Iri> {
        self.statements.keys()
    }

    /// Predicates and values of the statements about `subject`
    pub fn predicate_objects<'a>(
        &'a self,
        subject: &Iri,
    ) -> impl Iterator<Item = (&'a Iri, &'a Term)> {
        self.statements
            .get(subject)
            .into_iter()
            .flat_map(|predicates| predicates.iter())
            .flat_map(|(predicate, objects)| objects.iter().map(move |o| (predicate, o)))
    }

    /// Every statement of the graph
    pub fn triples(&self) -> impl Iterator<Item = Triple<'_>> {
        self.statements.iter().flat_map(|(subject, predicates)| {
            predicates.iter().flat_map(move |(predicate, objects)| {
                objects.iter().map(move |object| Triple {
                    subject,
                    predicate,
                    object,
                })
            })
        })
    }

    /// Number of statements
    pub fn len(&self) -> usize {
        self.len
    }

    /// Does the graph hold no statement
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }
}
