//! IRIs of the vocabularies the converter writes
//!
//! Constants are grouped by vocabulary, each module exposing its namespace as `NS`
//! and the prefix it is bound to in serialized documents as `PREFIX`.

/// The GTFS vocabulary <http://vocab.gtfs.org/terms#>
pub mod gtfs {
    /// Namespace IRI
    pub const NS: &str = "http://vocab.gtfs.org/terms#";
    /// Prefix bound to [NS]
    pub const PREFIX: &str = "gtfs";

    // Classes
    /// gtfs:Agency
    pub const AGENCY: &str = "http://vocab.gtfs.org/terms#Agency";
    /// gtfs:Stop
    pub const STOP: &str = "http://vocab.gtfs.org/terms#Stop";
    /// gtfs:Station
    pub const STATION: &str = "http://vocab.gtfs.org/terms#Station";
    /// gtfs:Zone
    pub const ZONE: &str = "http://vocab.gtfs.org/terms#Zone";
    /// gtfs:Route
    pub const ROUTE: &str = "http://vocab.gtfs.org/terms#Route";
    /// gtfs:Trip
    pub const TRIP: &str = "http://vocab.gtfs.org/terms#Trip";
    /// gtfs:Service
    pub const SERVICE: &str = "http://vocab.gtfs.org/terms#Service";
    /// gtfs:CalendarRule
    pub const CALENDAR_RULE: &str = "http://vocab.gtfs.org/terms#CalendarRule";
    /// gtfs:CalendarDateRule
    pub const CALENDAR_DATE_RULE: &str = "http://vocab.gtfs.org/terms#CalendarDateRule";
    /// gtfs:StopTime
    pub const STOP_TIME: &str = "http://vocab.gtfs.org/terms#StopTime";
    /// gtfs:Shape
    pub const SHAPE: &str = "http://vocab.gtfs.org/terms#Shape";
    /// gtfs:ShapePoint
    pub const SHAPE_POINT: &str = "http://vocab.gtfs.org/terms#ShapePoint";
    /// gtfs:FareClass
    pub const FARE_CLASS: &str = "http://vocab.gtfs.org/terms#FareClass";
    /// gtfs:FareRule
    pub const FARE_RULE: &str = "http://vocab.gtfs.org/terms#FareRule";
    /// gtfs:Frequency
    pub const FREQUENCY: &str = "http://vocab.gtfs.org/terms#Frequency";
    /// gtfs:TransferRule
    pub const TRANSFER_RULE: &str = "http://vocab.gtfs.org/terms#TransferRule";

    // Route types, in the order of the GTFS `route_type` codes
    /// gtfs:LightRail
    pub const LIGHT_RAIL: &str = "http://vocab.gtfs.org/terms#LightRail";
    /// gtfs:Subway
    pub const SUBWAY: &str = "http://vocab.gtfs.org/terms#Subway";
    /// gtfs:Rail
    pub const RAIL: &str = "http://vocab.gtfs.org/terms#Rail";
    /// gtfs:Bus
    pub const BUS: &str = "http://vocab.gtfs.org/terms#Bus";
    /// gtfs:Ferry
    pub const FERRY: &str = "http://vocab.gtfs.org/terms#Ferry";
    /// gtfs:CableCar
    pub const CABLE_CAR: &str = "http://vocab.gtfs.org/terms#CableCar";
    /// gtfs:Gondola
    pub const GONDOLA: &str = "http://vocab.gtfs.org/terms#Gondola";
    /// gtfs:Funicular
    pub const FUNICULAR: &str = "http://vocab.gtfs.org/terms#Funicular";

    // Wheelchair accessibility
    /// gtfs:WheelchairAccessible
    pub const WHEELCHAIR_ACCESSIBLE: &str = "http://vocab.gtfs.org/terms#WheelchairAccessible";
    /// gtfs:NotWheelchairAccessible
    pub const NOT_WHEELCHAIR_ACCESSIBLE: &str =
        "http://vocab.gtfs.org/terms#NotWheelchairAccessible";
    /// gtfs:CheckParentStation
    pub const CHECK_PARENT_STATION: &str = "http://vocab.gtfs.org/terms#CheckParentStation";

    // Pickup and drop off
    /// gtfs:Regular
    pub const REGULAR: &str = "http://vocab.gtfs.org/terms#Regular";
    /// gtfs:NotAvailable
    pub const NOT_AVAILABLE: &str = "http://vocab.gtfs.org/terms#NotAvailable";
    /// gtfs:MustPhone
    pub const MUST_PHONE: &str = "http://vocab.gtfs.org/terms#MustPhone";
    /// gtfs:MustCoordinateWithDriver
    pub const MUST_COORDINATE_WITH_DRIVER: &str =
        "http://vocab.gtfs.org/terms#MustCoordinateWithDriver";

    // Payment methods
    /// gtfs:OnBoard
    pub const ON_BOARD: &str = "http://vocab.gtfs.org/terms#OnBoard";
    /// gtfs:BeforeBoarding
    pub const BEFORE_BOARDING: &str = "http://vocab.gtfs.org/terms#BeforeBoarding";

    // Number of transfers allowed by a fare
    /// gtfs:NoTransfers
    pub const NO_TRANSFERS: &str = "http://vocab.gtfs.org/terms#NoTransfers";
    /// gtfs:OneTransfer
    pub const ONE_TRANSFER: &str = "http://vocab.gtfs.org/terms#OneTransfer";
    /// gtfs:TwoTransfers
    pub const TWO_TRANSFERS: &str = "http://vocab.gtfs.org/terms#TwoTransfers";
    /// gtfs:UnlimitedTransfers
    pub const UNLIMITED_TRANSFERS: &str = "http://vocab.gtfs.org/terms#UnlimitedTransfers";

    // Transfer types
    /// gtfs:Recommended
    pub const RECOMMENDED: &str = "http://vocab.gtfs.org/terms#Recommended";
    /// gtfs:EnsuredTransfer
    pub const ENSURED_TRANSFER: &str = "http://vocab.gtfs.org/terms#EnsuredTransfer";
    /// gtfs:MinimumTimeTransfer
    pub const MINIMUM_TIME_TRANSFER: &str = "http://vocab.gtfs.org/terms#MinimumTimeTransfer";
    /// gtfs:NoTransfer
    pub const NO_TRANSFER: &str = "http://vocab.gtfs.org/terms#NoTransfer";

    // Properties
    /// gtfs:timeZone
    pub const TIME_ZONE: &str = "http://vocab.gtfs.org/terms#timeZone";
    /// gtfs:fareUrl
    pub const FARE_URL: &str = "http://vocab.gtfs.org/terms#fareUrl";
    /// gtfs:code
    pub const CODE: &str = "http://vocab.gtfs.org/terms#code";
    /// gtfs:zone
    pub const ZONE_PROPERTY: &str = "http://vocab.gtfs.org/terms#zone";
    /// gtfs:parentStation
    pub const PARENT_STATION: &str = "http://vocab.gtfs.org/terms#parentStation";
    /// gtfs:wheelchairAccessible
    pub const WHEELCHAIR_ACCESSIBLE_PROPERTY: &str =
        "http://vocab.gtfs.org/terms#wheelchairAccessible";
    /// gtfs:shortName
    pub const SHORT_NAME: &str = "http://vocab.gtfs.org/terms#shortName";
    /// gtfs:longName
    pub const LONG_NAME: &str = "http://vocab.gtfs.org/terms#longName";
    /// gtfs:routeType
    pub const ROUTE_TYPE: &str = "http://vocab.gtfs.org/terms#routeType";
    /// gtfs:agency
    pub const AGENCY_PROPERTY: &str = "http://vocab.gtfs.org/terms#agency";
    /// gtfs:color
    pub const COLOR: &str = "http://vocab.gtfs.org/terms#color";
    /// gtfs:textColor
    pub const TEXT_COLOR: &str = "http://vocab.gtfs.org/terms#textColor";
    /// gtfs:route
    pub const ROUTE_PROPERTY: &str = "http://vocab.gtfs.org/terms#route";
    /// gtfs:service
    pub const SERVICE_PROPERTY: &str = "http://vocab.gtfs.org/terms#service";
    /// gtfs:headsign
    pub const HEADSIGN: &str = "http://vocab.gtfs.org/terms#headsign";
    /// gtfs:direction
    pub const DIRECTION: &str = "http://vocab.gtfs.org/terms#direction";
    /// gtfs:block
    pub const BLOCK: &str = "http://vocab.gtfs.org/terms#block";
    /// gtfs:shape
    pub const SHAPE_PROPERTY: &str = "http://vocab.gtfs.org/terms#shape";
    /// gtfs:bikesAllowed
    pub const BIKES_ALLOWED: &str = "http://vocab.gtfs.org/terms#bikesAllowed";
    /// gtfs:trip
    pub const TRIP_PROPERTY: &str = "http://vocab.gtfs.org/terms#trip";
    /// gtfs:stop
    pub const STOP_PROPERTY: &str = "http://vocab.gtfs.org/terms#stop";
    /// gtfs:arrivalTime
    pub const ARRIVAL_TIME: &str = "http://vocab.gtfs.org/terms#arrivalTime";
    /// gtfs:departureTime
    pub const DEPARTURE_TIME: &str = "http://vocab.gtfs.org/terms#departureTime";
    /// gtfs:stopSequence
    pub const STOP_SEQUENCE: &str = "http://vocab.gtfs.org/terms#stopSequence";
    /// gtfs:pickupType
    pub const PICKUP_TYPE: &str = "http://vocab.gtfs.org/terms#pickupType";
    /// gtfs:dropOffType
    pub const DROP_OFF_TYPE: &str = "http://vocab.gtfs.org/terms#dropOffType";
    /// gtfs:distanceTraveled
    pub const DISTANCE_TRAVELED: &str = "http://vocab.gtfs.org/terms#distanceTraveled";
    /// gtfs:serviceRule
    pub const SERVICE_RULE: &str = "http://vocab.gtfs.org/terms#serviceRule";
    /// gtfs:monday
    pub const MONDAY: &str = "http://vocab.gtfs.org/terms#monday";
    /// gtfs:tuesday
    pub const TUESDAY: &str = "http://vocab.gtfs.org/terms#tuesday";
    /// gtfs:wednesday
    pub const WEDNESDAY: &str = "http://vocab.gtfs.org/terms#wednesday";
    /// gtfs:thursday
    pub const THURSDAY: &str = "http://vocab.gtfs.org/terms#thursday";
    /// gtfs:friday
    pub const FRIDAY: &str = "http://vocab.gtfs.org/terms#friday";
    /// gtfs:saturday
    pub const SATURDAY: &str = "http://vocab.gtfs.org/terms#saturday";
    /// gtfs:sunday
    pub const SUNDAY: &str = "http://vocab.gtfs.org/terms#sunday";
    /// gtfs:dateAddition
    pub const DATE_ADDITION: &str = "http://vocab.gtfs.org/terms#dateAddition";
    /// gtfs:price
    pub const PRICE: &str = "http://vocab.gtfs.org/terms#price";
    /// gtfs:paymentMethod
    pub const PAYMENT_METHOD: &str = "http://vocab.gtfs.org/terms#paymentMethod";
    /// gtfs:transfers
    pub const TRANSFERS: &str = "http://vocab.gtfs.org/terms#transfers";
    /// gtfs:transferExpiryTime
    pub const TRANSFER_EXPIRY_TIME: &str = "http://vocab.gtfs.org/terms#transferExpiryTime";
    /// gtfs:fareClass
    pub const FARE_CLASS_PROPERTY: &str = "http://vocab.gtfs.org/terms#fareClass";
    /// gtfs:originZone
    pub const ORIGIN_ZONE: &str = "http://vocab.gtfs.org/terms#originZone";
    /// gtfs:destinationZone
    pub const DESTINATION_ZONE: &str = "http://vocab.gtfs.org/terms#destinationZone";
    /// gtfs:shapePoint
    pub const SHAPE_POINT_PROPERTY: &str = "http://vocab.gtfs.org/terms#shapePoint";
    /// gtfs:pointSequence
    pub const POINT_SEQUENCE: &str = "http://vocab.gtfs.org/terms#pointSequence";
    /// gtfs:startTime
    pub const START_TIME: &str = "http://vocab.gtfs.org/terms#startTime";
    /// gtfs:endTime
    pub const END_TIME: &str = "http://vocab.gtfs.org/terms#endTime";
    /// gtfs:headwaySeconds
    pub const HEADWAY_SECONDS: &str = "http://vocab.gtfs.org/terms#headwaySeconds";
    /// gtfs:exactTimes
    pub const EXACT_TIMES: &str = "http://vocab.gtfs.org/terms#exactTimes";
    /// gtfs:originStop
    pub const ORIGIN_STOP: &str = "http://vocab.gtfs.org/terms#originStop";
    /// gtfs:destinationStop
    pub const DESTINATION_STOP: &str = "http://vocab.gtfs.org/terms#destinationStop";
    /// gtfs:transferType
    pub const TRANSFER_TYPE: &str = "http://vocab.gtfs.org/terms#transferType";
    /// gtfs:minimumTransferTime
    pub const MINIMUM_TRANSFER_TIME: &str = "http://vocab.gtfs.org/terms#minimumTransferTime";
}

/// RDF vocabulary constants
pub mod rdf {
    /// Namespace IRI
    pub const NS: &str = "http://www.w3.org/1999/02/22-rdf-syntax-ns#";
    /// Prefix bound to [NS]
    pub const PREFIX: &str = "rdf";
    /// rdf:type
    pub const TYPE: &str = "http://www.w3.org/1999/02/22-rdf-syntax-ns#type";
}

/// XSD datatypes
pub mod xsd {
    /// Namespace IRI
    pub const NS: &str = "http://www.w3.org/2001/XMLSchema#";
    /// Prefix bound to [NS]
    pub const PREFIX: &str = "xsd";
    /// xsd:string
    pub const STRING: &str = "http://www.w3.org/2001/XMLSchema#string";
    /// xsd:boolean
    pub const BOOLEAN: &str = "http://www.w3.org/2001/XMLSchema#boolean";
    /// xsd:date
    pub const DATE: &str = "http://www.w3.org/2001/XMLSchema#date";
    /// xsd:decimal
    pub const DECIMAL: &str = "http://www.w3.org/2001/XMLSchema#decimal";
    /// xsd:double
    pub const DOUBLE: &str = "http://www.w3.org/2001/XMLSchema#double";
    /// xsd:nonNegativeInteger
    pub const NON_NEGATIVE_INTEGER: &str = "http://www.w3.org/2001/XMLSchema#nonNegativeInteger";
}

/// Friend of a friend <http://xmlns.com/foaf/0.1/>
pub mod foaf {
    /// Namespace IRI
    pub const NS: &str = "http://xmlns.com/foaf/0.1/";
    /// Prefix bound to [NS]
    pub const PREFIX: &str = "foaf";
    /// foaf:name
    pub const NAME: &str = "http://xmlns.com/foaf/0.1/name";
    /// foaf:phone
    pub const PHONE: &str = "http://xmlns.com/foaf/0.1/phone";
    /// foaf:page
    pub const PAGE: &str = "http://xmlns.com/foaf/0.1/page";
}

/// Dublin Core terms <http://purl.org/dc/terms/>
pub mod dct {
    /// Namespace IRI
    pub const NS: &str = "http://purl.org/dc/terms/";
    /// Prefix bound to [NS]
    pub const PREFIX: &str = "dct";
    /// dct:identifier
    pub const IDENTIFIER: &str = "http://purl.org/dc/terms/identifier";
    /// dct:description
    pub const DESCRIPTION: &str = "http://purl.org/dc/terms/description";
    /// dct:language
    pub const LANGUAGE: &str = "http://purl.org/dc/terms/language";
    /// dct:date
    pub const DATE: &str = "http://purl.org/dc/terms/date";
    /// dct:temporal
    pub const TEMPORAL: &str = "http://purl.org/dc/terms/temporal";
    /// dct:PeriodOfTime
    pub const PERIOD_OF_TIME: &str = "http://purl.org/dc/terms/PeriodOfTime";
}

/// schema.org <http://schema.org/>
pub mod schema {
    /// Namespace IRI
    pub const NS: &str = "http://schema.org/";
    /// Prefix bound to [NS]
    pub const PREFIX: &str = "schema";
    /// schema:startDate
    pub const START_DATE: &str = "http://schema.org/startDate";
    /// schema:endDate
    pub const END_DATE: &str = "http://schema.org/endDate";
    /// schema:priceCurrency
    pub const PRICE_CURRENCY: &str = "http://schema.org/priceCurrency";
}

/// WGS84 geo positioning <http://www.w3.org/2003/01/geo/wgs84_pos#>
pub mod geo {
    /// Namespace IRI
    pub const NS: &str = "http://www.w3.org/2003/01/geo/wgs84_pos#";
    /// Prefix bound to [NS]
    pub const PREFIX: &str = "geo";
    /// geo:lat
    pub const LAT: &str = "http://www.w3.org/2003/01/geo/wgs84_pos#lat";
    /// geo:long
    pub const LONG: &str = "http://www.w3.org/2003/01/geo/wgs84_pos#long";
}

/// Prefix bindings declared by every serialized document
pub const DEFAULT_PREFIXES: [(&str, &str); 7] = [
    (gtfs::PREFIX, gtfs::NS),
    (foaf::PREFIX, foaf::NS),
    (dct::PREFIX, dct::NS),
    (schema::PREFIX, schema::NS),
    (geo::PREFIX, geo::NS),
    (rdf::PREFIX, rdf::NS),
    (xsd::PREFIX, xsd::NS),
];
