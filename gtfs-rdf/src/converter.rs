use crate::config::Config;
use crate::graph::Graph;
use crate::gtfs_reader::{Feed, GtfsReader};
use crate::identifiers::MappingContext;
use crate::mapping::ToRdf;
use crate::objects::*;
use crate::serializer::{self, RdfFormat};
use crate::Error;
use log::info;
use std::path::Path;
use std::time::Instant;

/// Runs a conversion: reads GTFS files, maps their rows into one graph and writes it once
///
/// ```no_run
/// use gtfs_rdf::{Config, GtfsToRdf};
///
/// let mut converter = GtfsToRdf::new(Config::new("http://transit.example/"));
/// converter.convert_feed("fixtures/basic")?;
/// converter.output("feed.ttl")?;
/// # Ok::<(), gtfs_rdf::Error>(())
/// ```
pub struct GtfsToRdf {
    reader: GtfsReader,
    format: RdfFormat,
    context: MappingContext,
}

impl GtfsToRdf {
    /// A converter with an empty graph
    pub fn new(config: Config) -> Self {
        Self {
            reader: GtfsReader::default(),
            format: config.format,
            context: MappingContext::new(&config),
        }
    }

    /// Uses a custom reader, to skip stop times or not trim the values
    pub fn with_reader(mut self, reader: GtfsReader) -> Self {
        self.reader = reader;
        self
    }

    /// The graph built so far
    pub fn graph(&self) -> &Graph {
        &self.context.graph
    }

    /// Gives the graph away, ending the run
    pub fn into_graph(self) -> Graph {
        self.context.graph
    }

    /// Converts all the known files of a feed, given as a directory or a zip archive
    ///
    /// agency, stops, routes, trips and stop_times are mandatory, the others are skipped when absent.
    pub fn convert_feed<P: AsRef<Path>>(&mut self, path: P) -> Result<(), Error> {
        let now = Instant::now();
        info!("Converting GTFS feed {}", path.as_ref().display());
        let mut feed = self.reader.open(path)?;

        self.convert_mandatory::<Agency>(&mut feed)?;
        self.convert_mandatory::<Stop>(&mut feed)?;
        self.convert_mandatory::<Route>(&mut feed)?;
        self.convert_mandatory::<Trip>(&mut feed)?;
        if self.reader.read_stop_times {
            self.convert_mandatory::<StopTime>(&mut feed)?;
        } else {
            info!("Skipping {}", StopTime::FILE_NAME);
        }
        self.convert_optional::<Calendar>(&mut feed)?;
        self.convert_optional::<CalendarDate>(&mut feed)?;
        self.convert_optional::<FareAttribute>(&mut feed)?;
        self.convert_optional::<FareRule>(&mut feed)?;
        self.convert_optional::<Shape>(&mut feed)?;
        self.convert_optional::<Frequency>(&mut feed)?;
        self.convert_optional::<Transfer>(&mut feed)?;

        info!(
            "Feed converted in {} ms, {} statements",
            now.elapsed().as_millis(),
            self.context.graph.len()
        );
        Ok(())
    }

    /// Converts a single CSV file holding rows of type `O`, e.g. `convert_file::<Stop>("stops.txt")`
    ///
    /// Returns the number of rows converted
    pub fn convert_file<O: ToRdf>(&mut self, path: impl AsRef<Path>) -> Result<usize, Error> {
        let rows: Vec<O> = self
            .reader
            .read_objs_from_path(path.as_ref().to_path_buf())?;
        self.convert_rows(&rows)?;
        Ok(rows.len())
    }

    /// Converts rows already read
    pub fn convert_rows<O: ToRdf>(&mut self, rows: &[O]) -> Result<(), Error> {
        let before = self.context.graph.len();
        O::to_rdf(&mut self.context, rows)?;
        info!(
            "{}: {} rows, {} new statements",
            O::FILE_NAME,
            rows.len(),
            self.context.graph.len().saturating_sub(before)
        );
        Ok(())
    }

    fn convert_mandatory<O: ToRdf>(&mut self, feed: &mut Feed) -> Result<(), Error> {
        let rows = self.reader.read::<O>(feed)?;
        self.convert_rows(&rows)
    }

    fn convert_optional<O: ToRdf>(&mut self, feed: &mut Feed) -> Result<(), Error> {
        match self.reader.read_optional::<O>(feed) {
            Some(rows) => self.convert_rows(&rows?),
            None => {
                info!("No {} in the feed", O::FILE_NAME);
                Ok(())
            }
        }
    }

    /// Converts a feed then writes the document. Nothing is written when the conversion fails
    pub fn convert<P: AsRef<Path>, Q: AsRef<Path>>(
        &mut self,
        feed: P,
        destination: Q,
    ) -> Result<(), Error> {
        self.convert_feed(feed)?;
        self.output(destination)
    }

    /// Writes the graph to `destination` in the configured syntax
    pub fn output<P: AsRef<Path>>(&self, destination: P) -> Result<(), Error> {
        serializer::serialize(&self.context.graph, destination, self.format)
    }
}
