//! Module for the error management
use thiserror::Error;

/// Specific line from a CSV file that could not be read
#[derive(Debug)]
pub struct LineError {
    /// Headers of the CSV file
    pub headers: Vec<String>,
    /// Values of the line that could not be parsed
    pub values: Vec<String>,
}

/// A single value that could not be mapped to RDF
#[derive(Error, Debug, PartialEq, Eq)]
pub enum FieldError {
    /// The date is not given in the YYYYMMDD format or is not a calendar date
    #[error("'{0}' is not a valid date; YYYYMMDD format is expected")]
    InvalidDate(String),
    /// The route type is not one of the eight basic GTFS modes
    #[error("'{0}' is not a valid route_type; an integer between 0 and 7 is expected")]
    InvalidRouteType(String),
}

/// An error that can occur when converting GTFS data to RDF.
#[derive(Error, Debug)]
pub enum Error {
    /// A mandatory file is not present in the feed
    #[error("Could not find file {0}")]
    MissingFile(String),
    /// A mandatory column is not present in the header of a file
    #[error("Missing required column '{column}' in '{file_name}'")]
    MissingColumn {
        /// The file lacking the column
        file_name: String,
        /// The name of the missing column
        column: String,
    },
    /// A row holds a value that could not be mapped
    #[error("invalid value in '{file_name}' at row {row}")]
    InvalidField {
        /// The file holding the row
        file_name: String,
        /// Position of the row in the file, the header excluded, starting at 1
        row: usize,
        /// What was wrong with the value
        #[source]
        source: FieldError,
    },
    /// The requested RDF syntax is not known
    #[error("unsupported RDF format '{0}'; expected turtle, ttl, n3, nt, ntriples, xml or rdfxml")]
    UnsupportedFormat(String),
    /// The given path to the GTFS is neither a file nor a directory
    #[error("Could not read GTFS: {0} is neither a file nor a directory")]
    NotFileNorDirectory(String),
    /// Generic Input/Output error while reading or writing a file
    #[error("impossible to read or write file")]
    IO(#[from] std::io::Error),
    /// Impossible to read a file
    #[error("impossible to read '{file_name}'")]
    NamedFileIO {
        /// The file name that could not be read
        file_name: String,
        /// The inital error that caused the unability to read the file
        #[source]
        source: Box<dyn std::error::Error + Send + Sync>,
    },
    /// Impossible to read a CSV file
    #[error("impossible to read csv file '{file_name}'")]
    CSVError {
        /// File name that could not be parsed as CSV
        file_name: String,
        /// The initial error by the csv library
        #[source]
        source: csv::Error,
        /// The line that could not be parsed by the csv library
        line_in_error: Option<LineError>,
    },
    /// Error when trying to unzip the GTFS archive
    #[error(transparent)]
    Zip(#[from] zip::result::ZipError),
}
