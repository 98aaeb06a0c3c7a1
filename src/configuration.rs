//! Command line of the converter and its mapping to the library configuration

use anyhow::Context;
use clap::{Parser, ValueEnum};
use gtfs_rdf::{AgencyIdentity, AnonymousIdentity, Config, GtfsReader, RdfFormat};
use std::path::PathBuf;

/// How agencies are identified in the graph
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum)]
pub enum AgencyIds {
    /// `<base-uri>agency_<agency_id>`
    #[default]
    Id,
    /// The agency URL, the id is kept as dct:identifier
    Url,
}

/// How stop times and fare rules are named
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum)]
pub enum AnonymousIds {
    /// Numbered in reading order
    #[default]
    Sequential,
    /// Built from the row's own columns
    Composite,
}

/// Converts a GTFS feed to RDF
#[derive(Parser, Debug, Clone)]
#[command(name = "gtfs-to-rdf", version, about = "Convert a GTFS feed to RDF")]
pub struct Configuration {
    /// GTFS feed, a directory or a zip archive
    pub feed: PathBuf,

    /// Destination of the RDF document
    #[arg(short, long)]
    pub output: PathBuf,

    /// Prefix of every generated URI
    #[arg(long, default_value = "http://example.org/gtfs/")]
    pub base_uri: String,

    /// turtle, ttl, n3, nt, ntriples, xml or rdfxml. Guessed from the output extension when absent
    #[arg(short, long)]
    pub format: Option<RdfFormat>,

    #[arg(long, value_enum, default_value_t)]
    pub agency_identity: AgencyIds,

    #[arg(long = "anonymous-ids", value_enum, default_value_t)]
    pub anonymous_ids: AnonymousIds,

    /// Keep the whitespaces around values
    #[arg(long)]
    pub no_trim: bool,

    /// Do not read stop_times.txt
    #[arg(long)]
    pub skip_stop_times: bool,
}

impl Configuration {
    /// The `--format` value, else the format named by the output extension, else Turtle
    pub fn format(&self) -> Result<RdfFormat, gtfs_rdf::Error> {
        if let Some(format) = self.format {
            return Ok(format);
        }
        match self.output.extension().and_then(|e| e.to_str()) {
            Some(extension) => extension.parse(),
            None => Ok(RdfFormat::default()),
        }
    }

    pub fn config(&self) -> anyhow::Result<Config> {
        let format = self.format().with_context(|| {
            format!(
                "cannot guess the RDF format of {}, use --format",
                self.output.display()
            )
        })?;
        Ok(Config::new(self.base_uri.as_str())
            .format(format)
            .agency_identity(match self.agency_identity {
                AgencyIds::Id => AgencyIdentity::ById,
                AgencyIds::Url => AgencyIdentity::ByUrl,
            })
            .anonymous_identity(match self.anonymous_ids {
                AnonymousIds::Sequential => AnonymousIdentity::Sequential,
                AnonymousIds::Composite => AnonymousIdentity::Composite,
            }))
    }

    pub fn reader(&self) -> GtfsReader {
        GtfsReader::default()
            .trim_fields(!self.no_trim)
            .read_stop_times(!self.skip_stop_times)
    }
}
