use crate::error::FieldError;
use crate::graph::{Iri, Literal, Term};
use crate::vocab::gtfs;
use serde::de::{Deserialize, Deserializer};

/// Implements [Deserialize] through the total `From<&str>` conversion of the enum
///
/// Unknown codes never fail, they fall in the default branch of the table
macro_rules! deserialize_from_code {
    ($ty:ty) => {
        impl<'de> Deserialize<'de> for $ty {
            fn deserialize<D>(deserializer: D) -> Result<$ty, D::Error>
            where
                D: Deserializer<'de>,
            {
                let s: String = String::deserialize(deserializer)?;
                Ok(<$ty>::from(s.as_str()))
            }
        }
    };
}

/// Indicates whether wheelchair boardings are possible. See `wheelchair_boarding` in stops.txt and `wheelchair_accessible` in trips.txt
#[derive(Derivative, Debug, Copy, Clone, PartialEq, Eq)]
#[derivative(Default(bound = ""))]
pub enum Availability {
    /// No information, for a stop inherit it from the parent station
    #[derivative(Default)]
    CheckParentStation,
    /// Some vehicles or boardings are accessible
    Accessible,
    /// Not accessible
    NotAccessible,
}

impl From<&str> for Availability {
    fn from(code: &str) -> Self {
        match code {
            "1" => Availability::Accessible,
            "2" => Availability::NotAccessible,
            _ => Availability::CheckParentStation,
        }
    }
}
deserialize_from_code!(Availability);

impl Availability {
    /// The gtfs: individual for this value
    pub fn iri(self) -> &'static str {
        match self {
            Availability::Accessible => gtfs::WHEELCHAIR_ACCESSIBLE,
            Availability::NotAccessible => gtfs::NOT_WHEELCHAIR_ACCESSIBLE,
            Availability::CheckParentStation => gtfs::CHECK_PARENT_STATION,
        }
    }
}

/// Describes if and how a traveller can board or alight the vehicle. See `pickup_type` and `drop_off_type` in stop_times.txt
#[derive(Debug, Derivative, Copy, Clone, PartialEq, Eq)]
#[derivative(Default(bound = ""))]
pub enum PickupDropOffType {
    /// Regularly scheduled pickup or drop off
    Regular,
    /// No pickup or drop off available. Also used for unknown codes
    #[derivative(Default)]
    NotAvailable,
    /// Must phone agency to arrange pickup or drop off
    MustPhone,
    /// Must coordinate with driver to arrange pickup or drop off
    MustCoordinateWithDriver,
}

impl From<&str> for PickupDropOffType {
    fn from(code: &str) -> Self {
        match code {
            "0" => PickupDropOffType::Regular,
            "1" => PickupDropOffType::NotAvailable,
            "2" => PickupDropOffType::MustPhone,
            "3" => PickupDropOffType::MustCoordinateWithDriver,
            _ => PickupDropOffType::NotAvailable,
        }
    }
}
deserialize_from_code!(PickupDropOffType);

impl PickupDropOffType {
    /// The gtfs: individual for this value
    pub fn iri(self) -> &'static str {
        match self {
            PickupDropOffType::Regular => gtfs::REGULAR,
            PickupDropOffType::NotAvailable => gtfs::NOT_AVAILABLE,
            PickupDropOffType::MustPhone => gtfs::MUST_PHONE,
            PickupDropOffType::MustCoordinateWithDriver => gtfs::MUST_COORDINATE_WITH_DRIVER,
        }
    }
}

/// Are bikes allowed on the trip. `1` means yes, anything else (`0`, `2`, unknown) no
#[derive(Debug, Derivative, Copy, Clone, PartialEq, Eq)]
#[derivative(Default(bound = ""))]
pub enum BikesAllowedType {
    /// At least one bicycle can be accommodated
    Allowed,
    /// No bicycles are allowed, or no information
    #[derivative(Default)]
    NotAllowed,
}

impl From<&str> for BikesAllowedType {
    fn from(code: &str) -> Self {
        match code {
            "1" => BikesAllowedType::Allowed,
            _ => BikesAllowedType::NotAllowed,
        }
    }
}
deserialize_from_code!(BikesAllowedType);

impl BikesAllowedType {
    /// The `xsd:boolean` value of gtfs:bikesAllowed
    pub fn literal(self) -> Literal {
        Literal::boolean(self == BikesAllowedType::Allowed)
    }
}

/// Defines where the fare must be paid. See `payment_method` in fare_attributes.txt
#[derive(Debug, Derivative, Copy, Clone, PartialEq, Eq)]
#[derivative(Default(bound = ""))]
pub enum PaymentMethod {
    /// Paid on board
    OnBoard,
    /// Must be paid before boarding
    #[derivative(Default)]
    BeforeBoarding,
}

impl From<&str> for PaymentMethod {
    fn from(code: &str) -> Self {
        match code {
            "0" => PaymentMethod::OnBoard,
            _ => PaymentMethod::BeforeBoarding,
        }
    }
}
deserialize_from_code!(PaymentMethod);

impl PaymentMethod {
    /// The gtfs: individual for this value
    pub fn iri(self) -> &'static str {
        match self {
            PaymentMethod::OnBoard => gtfs::ON_BOARD,
            PaymentMethod::BeforeBoarding => gtfs::BEFORE_BOARDING,
        }
    }
}

/// Number of transfers permitted on a fare. An empty value means unlimited
#[derive(Debug, Derivative, Copy, Clone, PartialEq, Eq)]
#[derivative(Default(bound = ""))]
pub enum Transfers {
    /// No transfer permitted
    NoTransfer,
    /// One transfer
    UniqueTransfer,
    /// Two transfers
    TwoTransfers,
    /// As many as wanted
    #[derivative(Default)]
    Unlimited,
}

impl From<&str> for Transfers {
    fn from(code: &str) -> Self {
        match code {
            "0" => Transfers::NoTransfer,
            "1" => Transfers::UniqueTransfer,
            "2" => Transfers::TwoTransfers,
            _ => Transfers::Unlimited,
        }
    }
}
deserialize_from_code!(Transfers);

impl Transfers {
    /// The gtfs: individual for this value
    pub fn iri(self) -> &'static str {
        match self {
            Transfers::NoTransfer => gtfs::NO_TRANSFERS,
            Transfers::UniqueTransfer => gtfs::ONE_TRANSFER,
            Transfers::TwoTransfers => gtfs::TWO_TRANSFERS,
            Transfers::Unlimited => gtfs::UNLIMITED_TRANSFERS,
        }
    }
}

/// Type of transfer between two stops. See `transfer_type` in transfers.txt
#[derive(Debug, Derivative, Copy, Clone, PartialEq, Eq)]
#[derivative(Default(bound = ""))]
pub enum TransferType {
    /// Recommended transfer point between routes
    #[derivative(Default)]
    Recommended,
    /// Departing vehicle waits for arriving one
    Timed,
    /// Transfer requires a minimum amount of time between arrival and departure
    MinTime,
    /// Transfer is not possible at this location
    Impossible,
}

impl From<&str> for TransferType {
    fn from(code: &str) -> Self {
        match code {
            "1" => TransferType::Timed,
            "2" => TransferType::MinTime,
            "3" => TransferType::Impossible,
            _ => TransferType::Recommended,
        }
    }
}
deserialize_from_code!(TransferType);

impl TransferType {
    /// The gtfs: individual for this value
    pub fn iri(self) -> &'static str {
        match self {
            TransferType::Recommended => gtfs::RECOMMENDED,
            TransferType::Timed => gtfs::ENSURED_TRANSFER,
            TransferType::MinTime => gtfs::MINIMUM_TIME_TRANSFER,
            TransferType::Impossible => gtfs::NO_TRANSFER,
        }
    }
}

/// Is a [crate::CalendarDate] adding or removing a service day
///
/// The removal is written as the negation of the addition flag, `gtfs:dateAddition false`
#[derive(Debug, Derivative, Copy, Clone, PartialEq, Eq)]
#[derivative(Default(bound = ""))]
pub enum Exception {
    /// There will be a service on that day
    Added,
    /// There won’t be a service on that day
    #[derivative(Default)]
    Deleted,
}

impl From<&str> for Exception {
    fn from(code: &str) -> Self {
        match code {
            "1" => Exception::Added,
            _ => Exception::Deleted,
        }
    }
}
deserialize_from_code!(Exception);

impl Exception {
    /// The `xsd:boolean` value of gtfs:dateAddition
    pub fn literal(self) -> Literal {
        Literal::boolean(self == Exception::Added)
    }
}

/// The eight basic GTFS modes, in the order of their `route_type` code
pub const ROUTE_TYPES: [&str; 8] = [
    gtfs::LIGHT_RAIL,
    gtfs::SUBWAY,
    gtfs::RAIL,
    gtfs::BUS,
    gtfs::FERRY,
    gtfs::CABLE_CAR,
    gtfs::GONDOLA,
    gtfs::FUNICULAR,
];

/// Maps a `route_type` code to its mode by position
///
/// Extended route types and anything that is not an integer in `0..8` are rejected
pub fn route_type(code: &str) -> Result<Term, FieldError> {
    code.parse::<usize>()
        .ok()
        .and_then(|i| ROUTE_TYPES.get(i))
        .map(|iri| Term::Iri(Iri::new(*iri)))
        .ok_or_else(|| FieldError::InvalidRouteType(code.to_owned()))
}

/// Boolean GTFS columns (`direction_id`, `exact_times`, calendar days): only `1` is true
pub fn boolean(code: &str) -> Literal {
    Literal::boolean(code == "1")
}
