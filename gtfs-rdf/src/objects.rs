pub use crate::enums::*;

/// A GTFS file read row by row into `Self`
///
/// Required columns are checked against the header before any row is read,
/// a missing one is a fatal [crate::Error::MissingColumn].
/// Optional columns are `Option`s: `None` when the column is absent or the value empty.
pub trait GtfsFile: for<'de> serde::Deserialize<'de> {
    /// Name of the file in the feed
    const FILE_NAME: &'static str;
    /// Columns that must be in the header
    const REQUIRED_COLUMNS: &'static [&'static str];
}

/// A transit agency. See <https://gtfs.org/reference/static/#agencytxt>
#[derive(Debug, Deserialize, Clone, Default)]
pub struct Agency {
    /// Unique technical identifier, optional when the feed has a single agency
    #[serde(rename = "agency_id")]
    pub id: Option<String>,
    /// Full name of the transit agency
    #[serde(rename = "agency_name")]
    pub name: String,
    /// URL of the transit agency
    #[serde(rename = "agency_url")]
    pub url: String,
    /// Timezone where the transit agency is located
    #[serde(rename = "agency_timezone")]
    pub timezone: String,
    /// Primary language used by this transit agency
    #[serde(rename = "agency_lang")]
    pub lang: Option<String>,
    /// A voice telephone number for the specified agency
    #[serde(rename = "agency_phone")]
    pub phone: Option<String>,
    /// URL of a web page that allows a rider to purchase tickets
    #[serde(rename = "agency_fare_url")]
    pub fare_url: Option<String>,
}

impl GtfsFile for Agency {
    const FILE_NAME: &'static str = "agency.txt";
    const REQUIRED_COLUMNS: &'static [&'static str] =
        &["agency_name", "agency_url", "agency_timezone"];
}

/// A physical stop, station or area. See <https://gtfs.org/reference/static/#stopstxt>
#[derive(Debug, Deserialize, Clone, Default)]
pub struct Stop {
    /// Unique technical identifier (not for the traveller) of the stop
    #[serde(rename = "stop_id")]
    pub id: String,
    /// Short text or a number that identifies the location for riders
    #[serde(rename = "stop_code")]
    pub code: Option<String>,
    /// Name of the location
    #[serde(rename = "stop_name")]
    pub name: String,
    /// Description of the location
    #[serde(rename = "stop_desc")]
    pub description: Option<String>,
    /// Latitude, kept as written in the feed
    #[serde(rename = "stop_lat")]
    pub latitude: String,
    /// Longitude, kept as written in the feed
    #[serde(rename = "stop_lon")]
    pub longitude: String,
    /// Identifies the fare zone for a stop
    pub zone_id: Option<String>,
    /// URL of a web page about the location
    #[serde(rename = "stop_url")]
    pub url: Option<String>,
    /// `1` for a station, anything else is a stop
    pub location_type: Option<String>,
    /// Defines hierarchy between the different locations
    pub parent_station: Option<String>,
    /// Timezone of the location
    #[serde(rename = "stop_timezone")]
    pub timezone: Option<String>,
    /// Indicates whether wheelchair boardings are possible from the location
    pub wheelchair_boarding: Option<Availability>,
}

impl GtfsFile for Stop {
    const FILE_NAME: &'static str = "stops.txt";
    const REQUIRED_COLUMNS: &'static [&'static str] =
        &["stop_id", "stop_name", "stop_lat", "stop_lon"];
}

/// A route is a commercial line. See <https://gtfs.org/reference/static/#routestxt>
#[derive(Debug, Deserialize, Clone, Default)]
pub struct Route {
    /// Unique technical (not for the traveller) identifier for the route
    #[serde(rename = "route_id")]
    pub id: String,
    /// Agency for the specified route
    pub agency_id: Option<String>,
    /// Short name of a route, like "32" or "Green"
    #[serde(rename = "route_short_name")]
    pub short_name: String,
    /// Full name of a route
    #[serde(rename = "route_long_name")]
    pub long_name: String,
    /// Description of a route
    #[serde(rename = "route_desc")]
    pub desc: Option<String>,
    /// Mode of transportation, positional code between 0 and 7
    pub route_type: String,
    /// URL of a web page about the particular route
    #[serde(rename = "route_url")]
    pub url: Option<String>,
    /// Route color designation that matches public facing material
    #[serde(rename = "route_color")]
    pub color: Option<String>,
    /// Legible color to use for text drawn against a background of [Route::color]
    #[serde(rename = "route_text_color")]
    pub text_color: Option<String>,
}

impl GtfsFile for Route {
    const FILE_NAME: &'static str = "routes.txt";
    const REQUIRED_COLUMNS: &'static [&'static str] =
        &["route_id", "route_short_name", "route_long_name", "route_type"];
}

/// A trip is a sequence of two or more stops that occur during a specific time period. See <https://gtfs.org/reference/static/#tripstxt>
#[derive(Debug, Deserialize, Clone, Default)]
pub struct Trip {
    /// Unique technical (not for the traveller) identifier for the Trip
    #[serde(rename = "trip_id")]
    pub id: String,
    /// References along which [Route] this trip runs
    pub route_id: String,
    /// References the service on which this trip runs
    pub service_id: String,
    /// Text that appears on signage identifying the trip's destination to riders
    pub trip_headsign: Option<String>,
    /// Public facing text used to identify the trip to riders
    pub trip_short_name: Option<String>,
    /// Direction of travel, `0` or `1`
    pub direction_id: Option<String>,
    /// Block to which the trip belongs
    pub block_id: Option<String>,
    /// Shape of the trip
    pub shape_id: Option<String>,
    /// Indicates wheelchair accessibility
    pub wheelchair_accessible: Option<Availability>,
    /// Indicates whether bikes are allowed
    pub bikes_allowed: Option<BikesAllowedType>,
}

impl GtfsFile for Trip {
    const FILE_NAME: &'static str = "trips.txt";
    const REQUIRED_COLUMNS: &'static [&'static str] = &["trip_id", "route_id", "service_id"];
}

/// The moment where a vehicle running on a [Trip] stops at a [Stop]. See <https://gtfs.org/reference/static/#stop_timestxt>
///
/// Times are kept as opaque strings, they can go past `24:00:00`
#[derive(Debug, Deserialize, Clone, Default)]
pub struct StopTime {
    /// [Trip] to which this stop time belongs to
    pub trip_id: String,
    /// Arrival time
    pub arrival_time: String,
    /// Departure time
    pub departure_time: String,
    /// Identifier of the [Stop] where the vehicle stops
    pub stop_id: String,
    /// Order of stops for a particular trip
    pub stop_sequence: String,
    /// Text that appears on signage identifying the trip's destination to riders
    pub stop_headsign: Option<String>,
    /// Indicates pickup method
    pub pickup_type: Option<PickupDropOffType>,
    /// Indicates drop off method
    pub drop_off_type: Option<PickupDropOffType>,
    /// Distance traveled along the associated shape from the first stop
    pub shape_dist_traveled: Option<String>,
}

impl GtfsFile for StopTime {
    const FILE_NAME: &'static str = "stop_times.txt";
    const REQUIRED_COLUMNS: &'static [&'static str] = &[
        "trip_id",
        "arrival_time",
        "departure_time",
        "stop_id",
        "stop_sequence",
    ];
}

/// A calendar describes on which days the vehicle runs. See <https://gtfs.org/reference/static/#calendartxt>
#[derive(Debug, Deserialize, Clone, Default)]
pub struct Calendar {
    /// Identifier of the service
    pub service_id: String,
    /// Does the service run on mondays
    pub monday: String,
    /// Does the service run on tuesdays
    pub tuesday: String,
    /// Does the service run on wednesdays
    pub wednesday: String,
    /// Does the service run on thursdays
    pub thursday: String,
    /// Does the service run on fridays
    pub friday: String,
    /// Does the service run on saturdays
    pub saturday: String,
    /// Does the service run on sundays
    pub sunday: String,
    /// Start service day for the service interval, `YYYYMMDD`
    pub start_date: String,
    /// End service day for the service interval, included, `YYYYMMDD`
    pub end_date: String,
}

impl GtfsFile for Calendar {
    const FILE_NAME: &'static str = "calendar.txt";
    const REQUIRED_COLUMNS: &'static [&'static str] = &[
        "service_id",
        "monday",
        "tuesday",
        "wednesday",
        "thursday",
        "friday",
        "saturday",
        "sunday",
        "start_date",
        "end_date",
    ];
}

/// Defines a specific date that can be added or removed from a [Calendar]. See <https://gtfs.org/reference/static/#calendar_datestxt>
#[derive(Debug, Deserialize, Clone, Default)]
pub struct CalendarDate {
    /// Identifier of the service that is modified at this date
    pub service_id: String,
    /// Date where the service will be added or deleted, `YYYYMMDD`
    pub date: String,
    /// Is the service added or deleted
    pub exception_type: Exception,
}

impl GtfsFile for CalendarDate {
    const FILE_NAME: &'static str = "calendar_dates.txt";
    const REQUIRED_COLUMNS: &'static [&'static str] = &["service_id", "date", "exception_type"];
}

/// Defines one possible fare. See <https://gtfs.org/reference/static/#fare_attributestxt>
#[derive(Debug, Deserialize, Clone, Default)]
pub struct FareAttribute {
    /// Unique technical (not for the traveller) identifier for the FareAttribute
    #[serde(rename = "fare_id")]
    pub id: String,
    /// Fare price, in the unit specified by [FareAttribute::currency]
    pub price: String,
    /// Currency used to pay the fare
    #[serde(rename = "currency_type")]
    pub currency: String,
    /// Indicates when the fare must be paid
    pub payment_method: PaymentMethod,
    /// Indicates the number of transfers permitted on this fare, empty for unlimited
    pub transfers: Transfers,
    /// Length of time in seconds before a transfer expires
    pub transfer_duration: Option<String>,
}

impl GtfsFile for FareAttribute {
    const FILE_NAME: &'static str = "fare_attributes.txt";
    const REQUIRED_COLUMNS: &'static [&'static str] = &[
        "fare_id",
        "price",
        "currency_type",
        "payment_method",
        "transfers",
    ];
}

/// Specifies how fares apply to an itinerary. See <https://gtfs.org/reference/static/#fare_rulestxt>
#[derive(Debug, Deserialize, Clone, Default)]
pub struct FareRule {
    /// The [FareAttribute] this rule applies to
    pub fare_id: String,
    /// Route associated with the fare
    pub route_id: Option<String>,
    /// Origin zone
    pub origin_id: Option<String>,
    /// Destination zone
    pub destination_id: Option<String>,
    /// Zone an itinerary passes through
    pub contains_id: Option<String>,
}

impl GtfsFile for FareRule {
    const FILE_NAME: &'static str = "fare_rules.txt";
    const REQUIRED_COLUMNS: &'static [&'static str] = &["fare_id"];
}

/// A single geographical point describing the shape of a [Trip]. See <https://gtfs.org/reference/static/#shapestxt>
#[derive(Debug, Deserialize, Clone, Default)]
pub struct Shape {
    /// Unique technical (not for the traveller) identifier for the Shape
    #[serde(rename = "shape_id")]
    pub id: String,
    #[serde(rename = "shape_pt_lat")]
    /// Latitude of a shape point
    pub latitude: String,
    /// Longitude of a shape point
    #[serde(rename = "shape_pt_lon")]
    pub longitude: String,
    /// Sequence in which the shape points connect to form the shape
    #[serde(rename = "shape_pt_sequence")]
    pub sequence: String,
    /// Actual distance traveled along the shape from the first shape point
    #[serde(rename = "shape_dist_traveled")]
    pub dist_traveled: Option<String>,
}

impl GtfsFile for Shape {
    const FILE_NAME: &'static str = "shapes.txt";
    const REQUIRED_COLUMNS: &'static [&'static str] = &[
        "shape_id",
        "shape_pt_lat",
        "shape_pt_lon",
        "shape_pt_sequence",
    ];
}

/// Timetables can be defined by the frequency of their vehicles. See <https://gtfs.org/reference/static/#frequenciestxt>
#[derive(Debug, Deserialize, Clone, Default)]
pub struct Frequency {
    /// References the [Trip] that uses frequency
    pub trip_id: String,
    /// Time at which the first vehicle departs from the first stop
    pub start_time: String,
    /// Time at which service changes to a different headway
    pub end_time: String,
    /// Time, in seconds, between departures from the same stop
    pub headway_secs: String,
    /// Whether frequency-based trips are exactly scheduled
    pub exact_times: Option<String>,
}

impl GtfsFile for Frequency {
    const FILE_NAME: &'static str = "frequencies.txt";
    const REQUIRED_COLUMNS: &'static [&'static str] =
        &["trip_id", "start_time", "end_time", "headway_secs"];
}

/// Rule for making connections between two stops. See <https://gtfs.org/reference/static/#transferstxt>
#[derive(Debug, Deserialize, Clone, Default)]
pub struct Transfer {
    /// Stop from which to leave
    pub from_stop_id: String,
    /// Stop which to transfer to
    pub to_stop_id: String,
    /// Type of the transfer, empty for a recommended one
    pub transfer_type: TransferType,
    /// Minimum time needed to make the transfer in seconds
    pub min_transfer_time: Option<String>,
}

impl GtfsFile for Transfer {
    const FILE_NAME: &'static str = "transfers.txt";
    const REQUIRED_COLUMNS: &'static [&'static str] =
        &["from_stop_id", "to_stop_id", "transfer_type"];
}
