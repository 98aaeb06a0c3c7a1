use crate::objects::GtfsFile;
use crate::Error;
use log::debug;
use rustc_hash::FxHashMap;
use std::fs::File;
use std::io::{BufReader, Read};
use std::path::{Path, PathBuf};

/// Names of the files the converter knows how to map
pub const GTFS_FILES: [&str; 12] = [
    "agency.txt",
    "stops.txt",
    "routes.txt",
    "trips.txt",
    "stop_times.txt",
    "calendar.txt",
    "calendar_dates.txt",
    "fare_attributes.txt",
    "fare_rules.txt",
    "shapes.txt",
    "frequencies.txt",
    "transfers.txt",
];

/// Allows to parameterize how the CSV files are read
///
/// ```
/// let reader = gtfs_rdf::GtfsReader::default()
///     .read_stop_times(false) // Won’t read the stop times to save time and memory
///     .trim_fields(true);
/// assert!(!reader.read_stop_times);
/// ```
#[derive(Derivative, Debug, Clone)]
#[derivative(Default)]
pub struct GtfsReader {
    /// stop_times.txt is very large and not always needed. This allows to skip reading it
    #[derivative(Default(value = "true"))]
    pub read_stop_times: bool,
    /// Trim the whitespaces around headers and values
    ///
    /// It is quite time consumming
    /// If performance is an issue, and if your data is high quality, you can switch it off
    #[derivative(Default(value = "true"))]
    pub trim_fields: bool,
}

/// Where the files of a feed are read from
pub enum Feed {
    /// A directory holding the `.txt` files
    Directory(PathBuf),
    /// A zip archive. Files are found by their name, whatever their directory in the archive
    Archive {
        /// The opened archive
        archive: zip::ZipArchive<BufReader<File>>,
        /// Index in the archive of each GTFS file found
        file_mapping: FxHashMap<&'static str, usize>,
    },
}

impl Feed {
    /// Does the feed contain the given file
    pub fn contains(&self, file_name: &str) -> bool {
        match self {
            Feed::Directory(p) => p.join(file_name).is_file(),
            Feed::Archive { file_mapping, .. } => file_mapping.contains_key(file_name),
        }
    }
}

impl GtfsReader {
    /// Configures the reader to read or not the stop times (default: true)
    ///
    /// Returns Self and can be chained
    pub fn read_stop_times(mut self, read_stop_times: bool) -> Self {
        self.read_stop_times = read_stop_times;
        self
    }

    /// Should the fields be trimmed (default: true)
    ///
    /// It is quite time consumming
    /// If performance is an issue, and if your data is high quality, you can set it to false
    pub fn trim_fields(mut self, trim_fields: bool) -> Self {
        self.trim_fields = trim_fields;
        self
    }

    /// Opens a feed from a local directory or zip archive
    pub fn open<P: AsRef<Path>>(&self, path: P) -> Result<Feed, Error> {
        let p = path.as_ref();
        if p.is_file() {
            let reader = BufReader::new(File::open(p)?);
            let mut archive = zip::ZipArchive::new(reader)?;
            let mut file_mapping = FxHashMap::default();
            for i in 0..archive.len() {
                let archive_file = archive.by_index(i)?;
                let path = Path::new(archive_file.name());
                for gtfs_file in GTFS_FILES {
                    if path.file_name() == Some(std::ffi::OsStr::new(gtfs_file)) {
                        file_mapping.insert(gtfs_file, i);
                        break;
                    }
                }
            }
            debug!("{} GTFS files found in {}", file_mapping.len(), p.display());
            Ok(Feed::Archive {
                archive,
                file_mapping,
            })
        } else if p.is_dir() {
            Ok(Feed::Directory(p.to_owned()))
        } else {
            Err(Error::NotFileNorDirectory(format!("{}", p.display())))
        }
    }

    /// Reads all the rows of a file of the feed, `None` if the feed does not have it
    pub fn read_optional<O: GtfsFile>(&self, feed: &mut Feed) -> Option<Result<Vec<O>, Error>> {
        let file_name = O::FILE_NAME;
        if !feed.contains(file_name) {
            return None;
        }
        match feed {
            Feed::Directory(p) => Some(self.read_objs_from_path(p.join(file_name))),
            Feed::Archive {
                archive,
                file_mapping,
            } => file_mapping.get(file_name).map(|i| {
                self.read_objs(
                    archive.by_index(*i).map_err(|e| Error::NamedFileIO {
                        file_name: file_name.to_owned(),
                        source: Box::new(e),
                    })?,
                    file_name,
                )
            }),
        }
    }

    /// Reads all the rows of a mandatory file of the feed
    pub fn read<O: GtfsFile>(&self, feed: &mut Feed) -> Result<Vec<O>, Error> {
        self.read_optional(feed)
            .unwrap_or_else(|| Err(Error::MissingFile(O::FILE_NAME.to_owned())))
    }

    /// Reads all the rows of a single CSV file
    pub fn read_objs_from_path<O: GtfsFile>(&self, path: PathBuf) -> Result<Vec<O>, Error> {
        let file_name = path
            .file_name()
            .and_then(|f| f.to_str())
            .unwrap_or("invalid_file_name")
            .to_string();
        if path.exists() {
            File::open(path)
                .map_err(|e| Error::NamedFileIO {
                    file_name: file_name.to_owned(),
                    source: Box::new(e),
                })
                .and_then(|r| self.read_objs(r, &file_name))
        } else {
            Err(Error::MissingFile(file_name))
        }
    }

    /// Reads all the rows from any reader over CSV data with a header
    ///
    /// Fails with [Error::MissingColumn] if one of the [GtfsFile::REQUIRED_COLUMNS] is not in the header
    pub fn read_objs<T, O>(&self, mut reader: T, file_name: &str) -> Result<Vec<O>, Error>
    where
        O: GtfsFile,
        T: Read,
    {
        let mut bom = Vec::with_capacity(3);
        reader
            .by_ref()
            .take(3)
            .read_to_end(&mut bom)
            .map_err(|e| Error::NamedFileIO {
                file_name: file_name.to_owned(),
                source: Box::new(e),
            })?;

        let chained = if bom != [0xefu8, 0xbbu8, 0xbfu8] {
            std::io::Cursor::new(bom).chain(reader)
        } else {
            std::io::Cursor::new(Vec::new()).chain(reader)
        };

        let mut reader = csv::ReaderBuilder::new()
            .flexible(true)
            .trim(if self.trim_fields {
                csv::Trim::All
            } else {
                csv::Trim::None
            })
            .from_reader(chained);
        // We store the headers to be able to return them in case of errors
        let headers = reader
            .headers()
            .map_err(|e| Error::CSVError {
                file_name: file_name.to_owned(),
                source: e,
                line_in_error: None,
            })?
            .clone();

        if let Some(column) = O::REQUIRED_COLUMNS
            .iter()
            .find(|column| !headers.iter().any(|h| h == **column))
        {
            return Err(Error::MissingColumn {
                file_name: file_name.to_owned(),
                column: (*column).to_owned(),
            });
        }

        // Pre-allocate a StringRecord for performance reasons
        let mut rec = csv::StringRecord::new();
        let mut objs = Vec::new();

        // Read each record into the pre-allocated StringRecord one at a time
        while reader.read_record(&mut rec).map_err(|e| Error::CSVError {
            file_name: file_name.to_owned(),
            source: e,
            line_in_error: None,
        })? {
            let obj = rec
                .deserialize(Some(&headers))
                .map_err(|e| Error::CSVError {
                    file_name: file_name.to_owned(),
                    source: e,
                    line_in_error: Some(crate::error::LineError {
                        headers: headers.into_iter().map(String::from).collect(),
                        values: rec.into_iter().map(String::from).collect(),
                    }),
                })?;
            objs.push(obj);
        }
        debug!("{} rows read from {}", objs.len(), file_name);
        Ok(objs)
    }
}
