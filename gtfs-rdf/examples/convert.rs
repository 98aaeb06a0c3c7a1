use gtfs_rdf::{serializer, Config, GtfsReader, GtfsToRdf, RdfFormat};

fn main() {
    env_logger::init();
    let feed = std::env::args()
        .nth(1)
        .unwrap_or_else(|| "fixtures/basic".to_owned());

    let reader = GtfsReader::default().read_stop_times(false);
    let mut converter =
        GtfsToRdf::new(Config::new("http://transit.example/")).with_reader(reader);
    match converter.convert_feed(&feed) {
        Ok(()) => {
            println!("{} statements", converter.graph().len());
            match serializer::to_string(converter.graph(), RdfFormat::Turtle) {
                Ok(document) => println!("{document}"),
                Err(e) => eprintln!("error: {e}"),
            }
        }
        Err(e) => eprintln!("error: {e}, {e:?}"),
    }
}
