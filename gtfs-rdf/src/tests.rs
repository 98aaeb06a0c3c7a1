use crate::objects::*;
use crate::vocab::{dct, foaf, geo, gtfs, rdf, schema, xsd};
use crate::*;
use rio_api::parser::TriplesParser;
use rio_turtle::{TurtleError, TurtleParser};

const BASE: &str = "http://example.org/gtfs/";

fn convert_with(path: &str, config: Config, reader: GtfsReader) -> Result<GtfsToRdf, Error> {
    let _ = env_logger::builder().is_test(true).try_init();
    let mut converter = GtfsToRdf::new(config).with_reader(reader);
    converter.convert_feed(path)?;
    Ok(converter)
}

fn convert(path: &str) -> Graph {
    convert_with(path, Config::new(BASE), GtfsReader::default())
        .expect("impossible to convert gtfs")
        .into_graph()
}

fn node(local_name: &str) -> Iri {
    Iri::new(format!("{BASE}{local_name}"))
}

fn iri(iri: &str) -> Term {
    Term::Iri(Iri::new(iri))
}

fn string(value: &str) -> Term {
    Term::Literal(Literal::string(value))
}

fn typed(value: &str, datatype: &str) -> Term {
    Term::Literal(Literal::typed(value, datatype))
}

fn boolean(value: bool) -> Term {
    Term::Literal(Literal::boolean(value))
}

#[test]
fn read_agency() {
    let graph = convert("fixtures/basic");
    let agency = node("agency_1");
    assert_eq!(&[iri(gtfs::AGENCY)], graph.objects(&agency, rdf::TYPE));
    assert_eq!(&[string("1")], graph.objects(&agency, dct::IDENTIFIER));
    assert_eq!(&[string("Metro")], graph.objects(&agency, foaf::NAME));
    assert_eq!(&[string("Europe/Paris")], graph.objects(&agency, gtfs::TIME_ZONE));
    // empty optional values make no statement
    assert!(graph.objects(&agency, dct::LANGUAGE).is_empty());
    assert!(graph.objects(&agency, foaf::PHONE).is_empty());
    assert!(graph.objects(&agency, gtfs::FARE_URL).is_empty());

    let tram = node("agency_2");
    assert_eq!(&[string("fr")], graph.objects(&tram, dct::LANGUAGE));
    assert_eq!(&[string("+33 1 23 45 67 89")], graph.objects(&tram, foaf::PHONE));
    assert_eq!(
        &[iri("http://tram.example/fares")],
        graph.objects(&tram, gtfs::FARE_URL)
    );
}

#[test]
fn read_stop() {
    let graph = convert("fixtures/basic");
    let stop = node("stop_42");
    assert!(graph.contains_subject(&stop));
    assert_eq!(&[iri(gtfs::STOP)], graph.objects(&stop, rdf::TYPE));
    assert_eq!(&[string("42")], graph.objects(&stop, dct::IDENTIFIER));
    assert_eq!(&[string("Gare Centrale")], graph.objects(&stop, foaf::NAME));
    assert_eq!(&[string("48.796058")], graph.objects(&stop, geo::LAT));
    assert_eq!(&[string("2.449386")], graph.objects(&stop, geo::LONG));
    assert_eq!(&[string("Main hall")], graph.objects(&stop, dct::DESCRIPTION));
    assert_eq!(
        &[string("http://metro.example/stops/42")],
        graph.objects(&stop, foaf::PAGE)
    );
    assert_eq!(
        &[Term::Iri(node("zone_z1"))],
        graph.objects(&stop, gtfs::ZONE_PROPERTY)
    );
    assert_eq!(
        &[Term::Iri(node("stop_station1"))],
        graph.objects(&stop, gtfs::PARENT_STATION)
    );
    assert_eq!(
        &[iri(gtfs::WHEELCHAIR_ACCESSIBLE)],
        graph.objects(&stop, gtfs::WHEELCHAIR_ACCESSIBLE_PROPERTY)
    );
    // the stop_code column is there but empty
    assert!(graph.objects(&stop, gtfs::CODE).is_empty());
    // no stop_timezone column at all
    assert!(graph.objects(&stop, gtfs::TIME_ZONE).is_empty());

    assert_eq!(&[iri(gtfs::ZONE)], graph.objects(&node("zone_z1"), rdf::TYPE));
}

#[test]
fn station_referenced_before_being_described() {
    let graph = convert("fixtures/basic");
    let station = node("stop_station1");
    assert_eq!(&[iri(gtfs::STATION)], graph.objects(&station, rdf::TYPE));
    assert_eq!(&[string("station1")], graph.objects(&station, dct::IDENTIFIER));
    assert!(graph
        .objects(&station, gtfs::WHEELCHAIR_ACCESSIBLE_PROPERTY)
        .is_empty());
}

#[test]
fn trimmed_values() {
    let graph = convert("fixtures/basic");
    assert_eq!(&[string("S2")], graph.objects(&node("stop_stop2"), gtfs::CODE));
    assert_eq!(
        &[iri(gtfs::NOT_WHEELCHAIR_ACCESSIBLE)],
        graph.objects(&node("stop_stop2"), gtfs::WHEELCHAIR_ACCESSIBLE_PROPERTY)
    );
    assert_eq!(
        &[iri(gtfs::CHECK_PARENT_STATION)],
        graph.objects(&node("stop_stop3"), gtfs::WHEELCHAIR_ACCESSIBLE_PROPERTY)
    );
}

#[test]
fn read_routes() {
    let graph = convert("fixtures/basic");
    let route = node("route_r1");
    assert_eq!(&[iri(gtfs::ROUTE)], graph.objects(&route, rdf::TYPE));
    assert_eq!(&[iri(gtfs::BUS)], graph.objects(&route, gtfs::ROUTE_TYPE));
    assert_eq!(&[string("1")], graph.objects(&route, gtfs::SHORT_NAME));
    assert_eq!(
        &[string("Centrale - Ecole")],
        graph.objects(&route, gtfs::LONG_NAME)
    );
    assert_eq!(
        &[Term::Iri(node("agency_1"))],
        graph.objects(&route, gtfs::AGENCY_PROPERTY)
    );
    assert_eq!(&[string("FF0000")], graph.objects(&route, gtfs::COLOR));
    assert!(graph.objects(&route, dct::DESCRIPTION).is_empty());

    let tram = node("route_r2");
    assert_eq!(&[iri(gtfs::LIGHT_RAIL)], graph.objects(&tram, gtfs::ROUTE_TYPE));
    assert_eq!(
        &[string("http://tram.example/t2")],
        graph.objects(&tram, foaf::PAGE)
    );
}

#[test]
fn invalid_route_type() {
    let result = convert_with(
        "fixtures/invalid_route_type",
        Config::new(BASE),
        GtfsReader::default(),
    );
    match result {
        Err(Error::InvalidField {
            file_name,
            row,
            source,
        }) => {
            assert_eq!("routes.txt", file_name);
            assert_eq!(2, row);
            assert_eq!(FieldError::InvalidRouteType("8".to_owned()), source);
        }
        Err(e) => panic!("unexpected error {e}"),
        Ok(_) => panic!("route_type 8 should be rejected"),
    }
}

#[test]
fn read_trips() {
    let graph = convert("fixtures/basic");
    let trip = node("trip_trip1");
    assert_eq!(&[iri(gtfs::TRIP)], graph.objects(&trip, rdf::TYPE));
    assert_eq!(
        &[Term::Iri(node("route_r1"))],
        graph.objects(&trip, gtfs::ROUTE_PROPERTY)
    );
    assert_eq!(
        &[Term::Iri(node("service_service1"))],
        graph.objects(&trip, gtfs::SERVICE_PROPERTY)
    );
    assert_eq!(
        &[Term::Iri(node("shape_shape1"))],
        graph.objects(&trip, gtfs::SHAPE_PROPERTY)
    );
    assert_eq!(&[string("Ecole")], graph.objects(&trip, gtfs::HEADSIGN));
    assert_eq!(&[boolean(false)], graph.objects(&trip, gtfs::DIRECTION));
    assert_eq!(&[boolean(true)], graph.objects(&trip, gtfs::BIKES_ALLOWED));

    let trip2 = node("trip_trip2");
    assert_eq!(&[boolean(true)], graph.objects(&trip2, gtfs::DIRECTION));
    assert_eq!(&[boolean(false)], graph.objects(&trip2, gtfs::BIKES_ALLOWED));
    assert!(graph
        .objects(&trip2, gtfs::WHEELCHAIR_ACCESSIBLE_PROPERTY)
        .is_empty());

    assert!(graph
        .objects(&node("trip_trip3"), gtfs::DIRECTION)
        .is_empty());
}

#[test]
fn read_stop_times() {
    let graph = convert("fixtures/basic");
    let first = node("stop_time_0");
    assert_eq!(&[iri(gtfs::STOP_TIME)], graph.objects(&first, rdf::TYPE));
    assert_eq!(
        &[Term::Iri(node("trip_trip1"))],
        graph.objects(&first, gtfs::TRIP_PROPERTY)
    );
    assert_eq!(
        &[Term::Iri(node("stop_42"))],
        graph.objects(&first, gtfs::STOP_PROPERTY)
    );
    assert_eq!(&[string("14:00:00")], graph.objects(&first, gtfs::ARRIVAL_TIME));
    assert_eq!(
        &[typed("1", xsd::NON_NEGATIVE_INTEGER)],
        graph.objects(&first, gtfs::STOP_SEQUENCE)
    );
    assert!(graph.objects(&first, gtfs::PICKUP_TYPE).is_empty());

    let second = node("stop_time_1");
    assert_eq!(
        &[iri(gtfs::NOT_AVAILABLE)],
        graph.objects(&second, gtfs::PICKUP_TYPE)
    );
    assert_eq!(
        &[iri(gtfs::MUST_COORDINATE_WITH_DRIVER)],
        graph.objects(&second, gtfs::DROP_OFF_TYPE)
    );
    assert_eq!(
        &[typed("1.5", xsd::DOUBLE)],
        graph.objects(&second, gtfs::DISTANCE_TRAVELED)
    );

    assert!(graph.contains_subject(&node("stop_time_3")));
    assert!(!graph.contains_subject(&node("stop_time_4")));
}

#[test]
fn skip_stop_times() {
    let graph = convert_with(
        "fixtures/basic",
        Config::new(BASE),
        GtfsReader::default().read_stop_times(false),
    )
    .expect("impossible to convert gtfs")
    .into_graph();
    assert!(!graph.contains_subject(&node("stop_time_0")));
    assert!(graph.contains_subject(&node("trip_trip1")));
}

#[test]
fn composite_stop_time_identity() {
    let graph = convert_with(
        "fixtures/basic",
        Config::new(BASE).anonymous_identity(AnonymousIdentity::Composite),
        GtfsReader::default(),
    )
    .expect("impossible to convert gtfs")
    .into_graph();
    let stop_time = node("stop_time_trip1_2");
    assert_eq!(
        &[Term::Iri(node("stop_stop2"))],
        graph.objects(&stop_time, gtfs::STOP_PROPERTY)
    );
    assert!(!graph.contains_subject(&node("stop_time_0")));
    assert!(graph.contains_subject(&node("fare_rule_fare2__z1_z2_")));
}

#[test]
fn read_calendar() {
    let graph = convert("fixtures/basic");
    let service = node("service_service1");
    let rule = node("calendar_service1");
    assert_eq!(&[iri(gtfs::SERVICE)], graph.objects(&service, rdf::TYPE));
    assert!(graph.contains(&service, gtfs::SERVICE_RULE, &Term::Iri(rule.clone())));
    assert_eq!(&[iri(gtfs::CALENDAR_RULE)], graph.objects(&rule, rdf::TYPE));
    assert_eq!(&[boolean(false)], graph.objects(&rule, gtfs::MONDAY));
    assert_eq!(&[boolean(true)], graph.objects(&rule, gtfs::SATURDAY));
    assert_eq!(&[boolean(true)], graph.objects(&rule, gtfs::SUNDAY));

    let temporal = node("calendar_service1_temporal");
    assert_eq!(
        &[Term::Iri(temporal.clone())],
        graph.objects(&rule, dct::TEMPORAL)
    );
    assert_eq!(
        &[iri(dct::PERIOD_OF_TIME)],
        graph.objects(&temporal, rdf::TYPE)
    );
    assert_eq!(
        &[typed("2017-01-01", xsd::DATE)],
        graph.objects(&temporal, schema::START_DATE)
    );
    assert_eq!(
        &[typed("2017-01-15", xsd::DATE)],
        graph.objects(&temporal, schema::END_DATE)
    );
}

#[test]
fn read_calendar_dates() {
    let graph = convert("fixtures/basic");
    let deleted = node("calendar_date_service1_20170108");
    assert_eq!(
        &[iri(gtfs::CALENDAR_DATE_RULE)],
        graph.objects(&deleted, rdf::TYPE)
    );
    assert_eq!(
        &[typed("2017-01-08", xsd::DATE)],
        graph.objects(&deleted, dct::DATE)
    );
    assert_eq!(&[boolean(false)], graph.objects(&deleted, gtfs::DATE_ADDITION));

    let added = node("calendar_date_service2_20170110");
    assert_eq!(&[boolean(true)], graph.objects(&added, gtfs::DATE_ADDITION));
    // service2 has no calendar.txt row, it exists through its calendar date
    let service2 = node("service_service2");
    assert_eq!(&[iri(gtfs::SERVICE)], graph.objects(&service2, rdf::TYPE));
    assert_eq!(
        &[Term::Iri(added)],
        graph.objects(&service2, gtfs::SERVICE_RULE)
    );
}

#[test]
fn read_fares() {
    let graph = convert("fixtures/basic");
    let fare = node("fare_fare1");
    assert_eq!(&[iri(gtfs::FARE_CLASS)], graph.objects(&fare, rdf::TYPE));
    assert_eq!(
        &[typed("1.50", xsd::DECIMAL)],
        graph.objects(&fare, gtfs::PRICE)
    );
    assert_eq!(&[string("EUR")], graph.objects(&fare, schema::PRICE_CURRENCY));
    assert_eq!(
        &[iri(gtfs::ON_BOARD)],
        graph.objects(&fare, gtfs::PAYMENT_METHOD)
    );
    assert_eq!(
        &[iri(gtfs::UNLIMITED_TRANSFERS)],
        graph.objects(&fare, gtfs::TRANSFERS)
    );
    assert!(graph.objects(&fare, gtfs::TRANSFER_EXPIRY_TIME).is_empty());

    let fare2 = node("fare_fare2");
    assert_eq!(
        &[iri(gtfs::BEFORE_BOARDING)],
        graph.objects(&fare2, gtfs::PAYMENT_METHOD)
    );
    assert_eq!(&[iri(gtfs::ONE_TRANSFER)], graph.objects(&fare2, gtfs::TRANSFERS));
    assert_eq!(
        &[typed("3600", xsd::NON_NEGATIVE_INTEGER)],
        graph.objects(&fare2, gtfs::TRANSFER_EXPIRY_TIME)
    );

    let rule = node("fare_rule_0");
    assert_eq!(&[iri(gtfs::FARE_RULE)], graph.objects(&rule, rdf::TYPE));
    assert_eq!(
        &[Term::Iri(fare)],
        graph.objects(&rule, gtfs::FARE_CLASS_PROPERTY)
    );
    assert_eq!(
        &[Term::Iri(node("route_r1"))],
        graph.objects(&rule, gtfs::ROUTE_PROPERTY)
    );
    let zones = node("fare_rule_1");
    assert_eq!(
        &[Term::Iri(node("zone_z1"))],
        graph.objects(&zones, gtfs::ORIGIN_ZONE)
    );
    assert_eq!(
        &[Term::Iri(node("zone_z2"))],
        graph.objects(&zones, gtfs::DESTINATION_ZONE)
    );
    assert!(graph.objects(&zones, gtfs::ROUTE_PROPERTY).is_empty());
}

#[test]
fn read_shapes() {
    let graph = convert("fixtures/basic");
    let shape = node("shape_shape1");
    assert_eq!(&[iri(gtfs::SHAPE)], graph.objects(&shape, rdf::TYPE));
    assert_eq!(2, graph.objects(&shape, gtfs::SHAPE_POINT_PROPERTY).len());
    let point = node("shape_shape1_1");
    assert_eq!(&[iri(gtfs::SHAPE_POINT)], graph.objects(&point, rdf::TYPE));
    assert_eq!(&[string("48.796058")], graph.objects(&point, geo::LAT));
    assert_eq!(
        &[typed("1", xsd::NON_NEGATIVE_INTEGER)],
        graph.objects(&point, gtfs::POINT_SEQUENCE)
    );
    assert_eq!(
        &[typed("0", xsd::NON_NEGATIVE_INTEGER)],
        graph.objects(&point, gtfs::DISTANCE_TRAVELED)
    );
    assert!(graph
        .objects(&node("shape_shape1_2"), gtfs::DISTANCE_TRAVELED)
        .is_empty());
}

#[test]
fn read_frequencies() {
    let graph = convert("fixtures/basic");
    let frequency = node("frequency_trip1_06:00:00_10:00:00");
    assert_eq!(&[iri(gtfs::FREQUENCY)], graph.objects(&frequency, rdf::TYPE));
    assert_eq!(
        &[Term::Iri(node("trip_trip1"))],
        graph.objects(&frequency, gtfs::TRIP_PROPERTY)
    );
    assert_eq!(
        &[typed("600", xsd::NON_NEGATIVE_INTEGER)],
        graph.objects(&frequency, gtfs::HEADWAY_SECONDS)
    );
    assert_eq!(&[boolean(true)], graph.objects(&frequency, gtfs::EXACT_TIMES));
}

#[test]
fn read_transfers() {
    let graph = convert("fixtures/basic");
    let transfer = node("transfer_42_stop2");
    assert_eq!(
        &[iri(gtfs::TRANSFER_RULE)],
        graph.objects(&transfer, rdf::TYPE)
    );
    assert_eq!(
        &[Term::Iri(node("stop_42"))],
        graph.objects(&transfer, gtfs::ORIGIN_STOP)
    );
    assert_eq!(
        &[iri(gtfs::MINIMUM_TIME_TRANSFER)],
        graph.objects(&transfer, gtfs::TRANSFER_TYPE)
    );
    assert_eq!(
        &[typed("180", xsd::NON_NEGATIVE_INTEGER)],
        graph.objects(&transfer, gtfs::MINIMUM_TRANSFER_TIME)
    );

    let recommended = node("transfer_stop2_stop3");
    assert_eq!(
        &[iri(gtfs::RECOMMENDED)],
        graph.objects(&recommended, gtfs::TRANSFER_TYPE)
    );
    assert!(graph
        .objects(&recommended, gtfs::MINIMUM_TRANSFER_TIME)
        .is_empty());
}

#[test]
fn agency_identity_by_url() {
    let graph = convert_with(
        "fixtures/basic",
        Config::new(BASE).agency_identity(AgencyIdentity::ByUrl),
        GtfsReader::default(),
    )
    .expect("impossible to convert gtfs")
    .into_graph();
    let agency = Iri::new("http://metro.example");
    assert_eq!(&[string("Metro")], graph.objects(&agency, foaf::NAME));
    assert_eq!(
        &[Term::Iri(agency)],
        graph.objects(&node("route_r1"), gtfs::AGENCY_PROPERTY)
    );
    assert!(!graph.contains_subject(&node("agency_1")));
}

#[test]
fn missing_column() {
    let result = convert_with(
        "fixtures/missing_column",
        Config::new(BASE),
        GtfsReader::default(),
    );
    match result {
        Err(Error::MissingColumn { file_name, column }) => {
            assert_eq!("stops.txt", file_name);
            assert_eq!("stop_lat", column);
        }
        Err(e) => panic!("unexpected error {e}"),
        Ok(_) => panic!("stops.txt has no stop_lat column"),
    }
}

#[test]
fn missing_mandatory_file() {
    // the fixtures directory itself has no agency.txt
    let result = convert_with("fixtures", Config::new(BASE), GtfsReader::default());
    assert!(matches!(result, Err(Error::MissingFile(f)) if f == "agency.txt"));
}

#[test]
fn not_a_feed() {
    let result = convert_with(
        "fixtures/does_not_exist",
        Config::new(BASE),
        GtfsReader::default(),
    );
    assert!(matches!(result, Err(Error::NotFileNorDirectory(_))));
}

#[test]
fn read_from_zip() {
    let from_zip = convert("fixtures/zips/basic.zip");
    let from_directory = convert("fixtures/basic");
    assert_eq!(from_directory.len(), from_zip.len());
    assert_eq!(
        serializer::to_string(&from_directory, RdfFormat::NTriples).unwrap(),
        serializer::to_string(&from_zip, RdfFormat::NTriples).unwrap()
    );
}

#[test]
fn conversion_is_deterministic() {
    let first = serializer::to_string(&convert("fixtures/basic"), RdfFormat::Turtle).unwrap();
    let second = serializer::to_string(&convert("fixtures/basic"), RdfFormat::Turtle).unwrap();
    assert_eq!(first, second);
}

#[test]
fn converting_a_file_twice_adds_nothing() {
    let mut converter = GtfsToRdf::new(Config::new(BASE));
    converter
        .convert_file::<Stop>("fixtures/basic/stops.txt")
        .unwrap();
    let len = converter.graph().len();
    let rows = converter
        .convert_file::<Stop>("fixtures/basic/stops.txt")
        .unwrap();
    assert_eq!(4, rows);
    assert_eq!(len, converter.graph().len());
}

#[test]
fn convert_rows_without_files() {
    let mut converter = GtfsToRdf::new(Config::new("http://x/"));
    let routes = vec![Route {
        id: "r".to_owned(),
        route_type: "7".to_owned(),
        ..Route::default()
    }];
    converter.convert_rows(&routes).unwrap();
    assert_eq!(
        &[iri(gtfs::FUNICULAR)],
        converter
            .graph()
            .objects(&Iri::new("http://x/route_r"), gtfs::ROUTE_TYPE)
    );
}

#[test]
fn write_turtle_file() {
    let config = Config::new(BASE).format(RdfFormat::Turtle);
    let converter = convert_with("fixtures/basic", config, GtfsReader::default())
        .expect("impossible to convert gtfs");
    let destination = std::env::temp_dir().join("gtfs_rdf_basic.ttl");
    converter.output(&destination).unwrap();

    let document = std::fs::read_to_string(&destination).unwrap();
    assert!(document.starts_with("@prefix "));
    assert!(document.contains(&format!("<{BASE}stop_42> a gtfs:Stop")));

    let mut count = 0;
    TurtleParser::new(document.as_bytes(), None)
        .parse_all(&mut |_| {
            count += 1;
            Ok(()) as Result<(), TurtleError>
        })
        .unwrap();
    assert_eq!(converter.graph().len(), count);
    std::fs::remove_file(destination).unwrap();
}

#[test]
fn invalid_date_aborts_the_run() {
    let destination = std::env::temp_dir().join("gtfs_rdf_invalid_date.ttl");
    let _ = std::fs::remove_file(&destination);
    let mut converter = GtfsToRdf::new(Config::new(BASE));
    match converter.convert("fixtures/invalid_date", &destination) {
        Err(Error::InvalidField {
            file_name,
            row,
            source,
        }) => {
            assert_eq!("calendar_dates.txt", file_name);
            assert_eq!(2, row);
            assert_eq!(FieldError::InvalidDate("20210229".to_owned()), source);
        }
        Err(e) => panic!("unexpected error {e}"),
        Ok(()) => panic!("20210229 is not a date"),
    }
    assert!(!destination.exists());
}

#[test]
fn write_rdfxml_file() {
    let config = Config::new(BASE).format(RdfFormat::RdfXml);
    let destination = std::env::temp_dir().join("gtfs_rdf_basic.rdf");
    let mut converter = GtfsToRdf::new(config);
    converter.convert("fixtures/basic", &destination).unwrap();

    let document = std::fs::read_to_string(&destination).unwrap();
    let mut count = 0;
    rio_xml::RdfXmlParser::new(document.as_bytes(), None)
        .parse_all(&mut |_| {
            count += 1;
            Ok(()) as Result<(), rio_xml::RdfXmlError>
        })
        .unwrap();
    assert_eq!(converter.graph().len(), count);
    std::fs::remove_file(destination).unwrap();
}

#[test]
fn odd_ids_keep_the_document_valid() {
    let mut converter = GtfsToRdf::new(Config::new("http://x/"));
    let stops = vec![Stop {
        id: "a b".to_owned(),
        name: "Quai \"A\"".to_owned(),
        zone_id: Some("z|1".to_owned()),
        ..Stop::default()
    }];
    converter.convert_rows(&stops).unwrap();
    let stop = Iri::new("http://x/stop_a%20b");
    assert_eq!(&[string("a b")], converter.graph().objects(&stop, dct::IDENTIFIER));
    assert_eq!(
        &[Term::Iri(Iri::new("http://x/zone_z%7C1"))],
        converter.graph().objects(&stop, gtfs::ZONE_PROPERTY)
    );

    let document = serializer::to_string(converter.graph(), RdfFormat::Turtle).unwrap();
    let mut count = 0;
    TurtleParser::new(document.as_bytes(), None)
        .parse_all(&mut |_| {
            count += 1;
            Ok(()) as Result<(), TurtleError>
        })
        .unwrap();
    assert_eq!(converter.graph().len(), count);
}
