//! Identity of the GTFS entities in the graph
//!
//! Entities with a natural key get `<base_uri><kind>_<natural_id>`. Their type and
//! `dct:identifier` are attached the first time they are resolved, whichever file
//! mentions them first; later resolutions only hand back the URI.
use crate::config::{AgencyIdentity, AnonymousIdentity, Config};
use crate::graph::{Graph, Iri, Literal};
use crate::objects::{Agency, FareRule, StopTime};
use crate::vocab::{dct, gtfs, rdf};
use log::warn;
use percent_encoding::{utf8_percent_encode, AsciiSet, CONTROLS};
use rustc_hash::{FxHashMap, FxHashSet};

/// Bytes of feed values that cannot be written inside an IRI
const NOT_IN_IRI: &AsciiSet = &CONTROLS
    .add(b' ')
    .add(b'"')
    .add(b'#')
    .add(b'%')
    .add(b'<')
    .add(b'>')
    .add(b'\\')
    .add(b'^')
    .add(b'`')
    .add(b'{')
    .add(b'|')
    .add(b'}');

/// Percent-encodes a value of the feed so it can be part of a URI
pub(crate) fn encode(value: &str) -> String {
    utf8_percent_encode(value, NOT_IN_IRI).to_string()
}

/// Entities identified by a natural key of the feed
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub enum EntityKind {
    /// agency.txt `agency_id`
    Agency,
    /// stops.txt `stop_id`
    Stop,
    /// `zone_id` of stops and fare rules
    Zone,
    /// routes.txt `route_id`
    Route,
    /// trips.txt `trip_id`
    Trip,
    /// `service_id` of trips, calendar and calendar dates
    Service,
    /// shapes.txt `shape_id`
    Shape,
    /// fare_attributes.txt `fare_id`
    Fare,
}

impl EntityKind {
    /// Part of the URI before the natural id
    pub fn prefix(self) -> &'static str {
        match self {
            EntityKind::Agency => "agency",
            EntityKind::Stop => "stop",
            EntityKind::Zone => "zone",
            EntityKind::Route => "route",
            EntityKind::Trip => "trip",
            EntityKind::Service => "service",
            EntityKind::Shape => "shape",
            EntityKind::Fare => "fare",
        }
    }

    /// rdf:type given on first resolution
    pub fn class(self) -> &'static str {
        match self {
            EntityKind::Agency => gtfs::AGENCY,
            EntityKind::Stop => gtfs::STOP,
            EntityKind::Zone => gtfs::ZONE,
            EntityKind::Route => gtfs::ROUTE,
            EntityKind::Trip => gtfs::TRIP,
            EntityKind::Service => gtfs::SERVICE,
            EntityKind::Shape => gtfs::SHAPE,
            EntityKind::Fare => gtfs::FARE_CLASS,
        }
    }
}

/// URI of an entity, `<base_uri><kind>_<natural_id>`, the id being trimmed
///
/// Spaces, quotes, `%` and the other characters an IRI cannot hold are percent-encoded.
///
/// ```
/// use gtfs_rdf::{entity_uri, EntityKind};
/// assert_eq!("http://x/stop_42", entity_uri("http://x/", EntityKind::Stop, " 42 ").as_str());
/// assert_eq!("http://x/stop_a%20b", entity_uri("http://x/", EntityKind::Stop, "a b").as_str());
/// ```
pub fn entity_uri(base_uri: &str, kind: EntityKind, natural_id: &str) -> Iri {
    Iri::new(format!(
        "{}{}_{}",
        base_uri,
        kind.prefix(),
        encode(natural_id.trim())
    ))
}

/// State of one conversion run: the graph being built and what is needed to keep identities stable
///
/// It is owned by the caller and handed by `&mut` to every converter.
#[derive(Debug)]
pub struct MappingContext {
    /// The graph accumulating all the statements of the run
    pub graph: Graph,
    base_uri: String,
    agency_identity: AgencyIdentity,
    anonymous_identity: AnonymousIdentity,
    resolved: FxHashSet<Iri>,
    agency_by_id: FxHashMap<String, Iri>,
    stop_time_count: u64,
    fare_rule_count: u64,
}

impl MappingContext {
    /// A new run with an empty graph carrying the default prefixes
    pub fn new(config: &Config) -> Self {
        Self {
            graph: Graph::with_default_prefixes(),
            base_uri: config.base_uri.clone(),
            agency_identity: config.agency_identity,
            anonymous_identity: config.anonymous_identity,
            resolved: FxHashSet::default(),
            agency_by_id: FxHashMap::default(),
            stop_time_count: 0,
            fare_rule_count: 0,
        }
    }

    /// `<base_uri><local_name>`, for nodes that are not resolved entities
    ///
    /// The local name is percent-encoded like the ids of [entity_uri]
    pub fn uri(&self, local_name: &str) -> Iri {
        Iri::new(format!("{}{}", self.base_uri, encode(local_name)))
    }

    /// Node of an entity, created with its type and identifier on first resolution
    ///
    /// Empty or odd ids are not rejected, they simply make odd URIs.
    pub fn resolve(&mut self, kind: EntityKind, natural_id: &str) -> Iri {
        let natural_id = natural_id.trim();
        let iri = entity_uri(&self.base_uri, kind, natural_id);
        if self.resolved.insert(iri.clone()) {
            self.graph.set(&iri, rdf::TYPE, Iri::new(kind.class()));
            self.graph
                .set(&iri, dct::IDENTIFIER, Literal::string(natural_id));
        }
        iri
    }

    /// Node of an agency row, according to the [AgencyIdentity] policy
    pub fn resolve_agency(&mut self, agency: &Agency) -> Iri {
        let id = agency.id.as_deref().map(str::trim).filter(|id| !id.is_empty());
        match (self.agency_identity, id) {
            (AgencyIdentity::ById, Some(id)) => self.resolve(EntityKind::Agency, id),
            (_, id) => {
                let iri = Iri::new(agency.url.trim());
                if self.resolved.insert(iri.clone()) {
                    self.graph.set(&iri, rdf::TYPE, Iri::new(gtfs::AGENCY));
                }
                if let Some(id) = id {
                    self.graph.set(&iri, dct::IDENTIFIER, Literal::string(id));
                    self.agency_by_id.insert(id.to_owned(), iri.clone());
                }
                iri
            }
        }
    }

    /// Node of the agency referenced by a route's `agency_id`
    ///
    /// With [AgencyIdentity::ByUrl], an id that no agency row declared gets an id based node
    pub fn agency_reference(&mut self, agency_id: &str) -> Iri {
        let agency_id = agency_id.trim();
        if self.agency_identity == AgencyIdentity::ByUrl {
            if let Some(iri) = self.agency_by_id.get(agency_id) {
                return iri.clone();
            }
            warn!("agency '{agency_id}' is not declared in agency.txt, identifying it by id");
        }
        self.resolve(EntityKind::Agency, agency_id)
    }

    /// Node of a stop time row, according to the [AnonymousIdentity] policy
    pub fn stop_time_node(&mut self, stop_time: &StopTime) -> Iri {
        match self.anonymous_identity {
            AnonymousIdentity::Sequential => {
                let iri = self.uri(&format!("stop_time_{}", self.stop_time_count));
                self.stop_time_count += 1;
                iri
            }
            AnonymousIdentity::Composite => self.uri(&format!(
                "stop_time_{}_{}",
                stop_time.trip_id.trim(),
                stop_time.stop_sequence.trim()
            )),
        }
    }

    /// Node of a fare rule row, according to the [AnonymousIdentity] policy
    pub fn fare_rule_node(&mut self, fare_rule: &FareRule) -> Iri {
        match self.anonymous_identity {
            AnonymousIdentity::Sequential => {
                let iri = self.uri(&format!("fare_rule_{}", self.fare_rule_count));
                self.fare_rule_count += 1;
                iri
            }
            AnonymousIdentity::Composite => {
                let part = |value: &Option<String>| value.as_deref().unwrap_or("").trim().to_owned();
                self.uri(&format!(
                    "fare_rule_{}_{}_{}_{}_{}",
                    fare_rule.fare_id.trim(),
                    part(&fare_rule.route_id),
                    part(&fare_rule.origin_id),
                    part(&fare_rule.destination_id),
                    part(&fare_rule.contains_id)
                ))
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::graph::Term;

    fn context() -> MappingContext {
        MappingContext::new(&Config::new("http://x/"))
    }

    #[test]
    fn resolving_twice_does_not_duplicate() {
        let mut ctx = context();
        let first = ctx.resolve(EntityKind::Route, "7");
        let len = ctx.graph.len();
        ctx.resolve(EntityKind::Stop, "1");
        let second = ctx.resolve(EntityKind::Route, " 7 ");
        assert_eq!(first, second);
        assert_eq!("http://x/route_7", first.as_str());
        assert_eq!(1, ctx.graph.objects(&first, rdf::TYPE).len());
        assert_eq!(
            &[Term::Literal(Literal::string("7"))],
            ctx.graph.objects(&first, dct::IDENTIFIER)
        );
        assert_eq!(len + 2, ctx.graph.len());
    }

    #[test]
    fn ids_are_percent_encoded() {
        let mut ctx = context();
        let stop = ctx.resolve(EntityKind::Stop, "a b");
        assert_eq!("http://x/stop_a%20b", stop.as_str());
        // the identifier keeps the value of the feed
        assert_eq!(
            &[Term::Literal(Literal::string("a b"))],
            ctx.graph.objects(&stop, dct::IDENTIFIER)
        );
        assert_eq!(
            "http://x/zone_%7Bz%7D%25%C3%A9",
            entity_uri("http://x/", EntityKind::Zone, "{z}%é").as_str()
        );
        assert_eq!(
            "http://x/transfer_a%3Cb_c",
            ctx.uri("transfer_a<b_c").as_str()
        );
    }

    #[test]
    fn kinds_do_not_collide() {
        let mut ctx = context();
        assert_ne!(
            ctx.resolve(EntityKind::Stop, "1"),
            ctx.resolve(EntityKind::Zone, "1")
        );
    }

    #[test]
    fn sequential_anonymous_nodes() {
        let mut ctx = context();
        let st = StopTime::default();
        assert_eq!("http://x/stop_time_0", ctx.stop_time_node(&st).as_str());
        assert_eq!("http://x/stop_time_1", ctx.stop_time_node(&st).as_str());
        assert_eq!("http://x/fare_rule_0", ctx.fare_rule_node(&FareRule::default()).as_str());
    }

    #[test]
    fn composite_anonymous_nodes() {
        let mut ctx = MappingContext::new(
            &Config::new("http://x/").anonymous_identity(AnonymousIdentity::Composite),
        );
        let st = StopTime {
            trip_id: "t1".to_owned(),
            stop_sequence: "3".to_owned(),
            ..StopTime::default()
        };
        assert_eq!("http://x/stop_time_t1_3", ctx.stop_time_node(&st).as_str());
        assert_eq!("http://x/stop_time_t1_3", ctx.stop_time_node(&st).as_str());
        let rule = FareRule {
            fare_id: "A".to_owned(),
            origin_id: Some("z1".to_owned()),
            ..FareRule::default()
        };
        assert_eq!("http://x/fare_rule_A__z1__", ctx.fare_rule_node(&rule).as_str());
    }

    #[test]
    fn agency_identity_by_url() {
        let mut ctx = MappingContext::new(
            &Config::new("http://x/").agency_identity(AgencyIdentity::ByUrl),
        );
        let agency = Agency {
            id: Some("1".to_owned()),
            url: "http://metro.example".to_owned(),
            ..Agency::default()
        };
        let node = ctx.resolve_agency(&agency);
        assert_eq!("http://metro.example", node.as_str());
        assert_eq!(node, ctx.agency_reference("1"));
        assert_eq!("http://x/agency_2", ctx.agency_reference("2").as_str());
    }

    #[test]
    fn agency_without_id_falls_back_to_url() {
        let mut ctx = context();
        let agency = Agency {
            id: None,
            url: "http://metro.example".to_owned(),
            ..Agency::default()
        };
        assert_eq!("http://metro.example", ctx.resolve_agency(&agency).as_str());
    }
}
