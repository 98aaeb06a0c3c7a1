use crate::serializer::RdfFormat;

/// How agencies are given an identity
#[derive(Derivative, Debug, Copy, Clone, PartialEq, Eq)]
#[derivative(Default(bound = ""))]
pub enum AgencyIdentity {
    /// `<base_uri>agency_<agency_id>`, the agency URL when `agency_id` is absent or empty
    #[derivative(Default)]
    ById,
    /// The `agency_url` itself. Routes are linked through the `agency_id` of the agency rows
    ByUrl,
}

/// How rows without natural key (stop times and fare rules) are given an identity
#[derive(Derivative, Debug, Copy, Clone, PartialEq, Eq)]
#[derivative(Default(bound = ""))]
pub enum AnonymousIdentity {
    /// A counter incremented for each row of the run: `stop_time_0`, `stop_time_1`…
    ///
    /// The identifiers depend on the order of the input and are not stable across runs
    #[derivative(Default)]
    Sequential,
    /// Built from the row columns: `stop_time_<trip_id>_<stop_sequence>`,
    /// `fare_rule_<fare_id>_<route_id>_<origin_id>_<destination_id>_<contains_id>`
    Composite,
}

/// Parameters of a conversion, fixed when the converter is built
///
/// ```
/// use gtfs_rdf::{AgencyIdentity, Config, RdfFormat};
///
/// let config = Config::new("http://transit.example/feed/")
///     .format(RdfFormat::NTriples)
///     .agency_identity(AgencyIdentity::ByUrl);
/// assert_eq!("http://transit.example/feed/", config.base_uri);
/// ```
#[derive(Derivative, Debug, Clone)]
#[derivative(Default)]
pub struct Config {
    /// Prefix of every generated entity URI
    #[derivative(Default(value = "\"http://example.org/gtfs/\".to_owned()"))]
    pub base_uri: String,
    /// Syntax of the written document
    pub format: RdfFormat,
    /// Identity of agencies
    pub agency_identity: AgencyIdentity,
    /// Identity of stop times and fare rules
    pub anonymous_identity: AnonymousIdentity,
}

impl Config {
    /// Configuration with the given base URI and default values for everything else
    pub fn new(base_uri: impl Into<String>) -> Self {
        Self {
            base_uri: base_uri.into(),
            ..Self::default()
        }
    }

    /// Sets the output syntax (default: Turtle)
    pub fn format(mut self, format: RdfFormat) -> Self {
        self.format = format;
        self
    }

    /// Sets the agency identity policy (default: [AgencyIdentity::ById])
    pub fn agency_identity(mut self, agency_identity: AgencyIdentity) -> Self {
        self.agency_identity = agency_identity;
        self
    }

    /// Sets the identity of stop times and fare rules (default: [AnonymousIdentity::Sequential])
    pub fn anonymous_identity(mut self, anonymous_identity: AnonymousIdentity) -> Self {
        self.anonymous_identity = anonymous_identity;
        self
    }
}
