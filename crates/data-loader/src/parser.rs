//! Parser for the catalog CSV file.
//!
//! The file has a header row and one movie per line:
//!
//! ```text
//! ITEM_ID,title,genre
//! 1,Toy Story (1995),Adventure|Animation|Children|Comedy|Fantasy
//! ```
//!
//! Only `ITEM_ID`, `title` and `genre` are read; any other column is
//! ignored, so the same file used to train the ranking model can be served
//! as-is.

use crate::error::{DataLoadError, Result};
use crate::types::MovieEntry;
use std::fs::File;
use std::io::Read;
use std::path::Path;
use tracing::warn;

/// Header of the item identifier column
pub const ITEM_ID_COLUMN: &str = "ITEM_ID";
/// Header of the title column
pub const TITLE_COLUMN: &str = "title";
/// Header of the genre column
pub const GENRE_COLUMN: &str = "genre";

/// Positions of the required columns in the header row
struct ColumnLayout {
    item_id: usize,
    title: usize,
    genre: usize,
}

impl ColumnLayout {
    fn from_headers(headers: &csv::StringRecord, source: &str) -> Result<Self> {
        let position = |column: &str| {
            headers
                .iter()
                .position(|header| header == column)
                .ok_or_else(|| DataLoadError::MissingColumn {
                    file: source.to_string(),
                    column: column.to_string(),
                })
        };

        Ok(Self {
            item_id: position(ITEM_ID_COLUMN)?,
            title: position(TITLE_COLUMN)?,
            genre: position(GENRE_COLUMN)?,
        })
    }

    /// Short rows yield empty values for the missing columns
    fn entry(&self, record: &csv::StringRecord) -> MovieEntry {
        let field = |idx: usize| record.get(idx).unwrap_or_default();
        MovieEntry::new(field(self.item_id), field(self.title), field(self.genre))
    }
}

/// Parse catalog records from any reader
///
/// `source` names the input in error messages (usually the file path).
/// Records are returned in file order, duplicates included; collapsing
/// duplicate ids is the catalog's job.
///
/// Rows are matched to headers by position. A row with more fields than the
/// header (an unquoted comma in a title) keeps its leading fields, and a row
/// with fewer gets empty values. Both are logged, neither fails the load.
pub fn parse_catalog<R: Read>(reader: R, source: &str) -> Result<Vec<MovieEntry>> {
    let mut rdr = csv::ReaderBuilder::new()
        .has_headers(true)
        .flexible(true)
        .trim(csv::Trim::Headers)
        .from_reader(reader);

    let headers = rdr.headers().map_err(|e| csv_error(source, e))?.clone();
    let layout = ColumnLayout::from_headers(&headers, source)?;

    let mut movies = Vec::new();
    for result in rdr.records() {
        let record = result.map_err(|e| csv_error(source, e))?;
        if record.len() != headers.len() {
            warn!(
                "{}: line {} has {} fields, header has {}",
                source,
                record.position().map(|pos| pos.line()).unwrap_or(0),
                record.len(),
                headers.len()
            );
        }
        movies.push(layout.entry(&record));
    }

    Ok(movies)
}

/// Parse a catalog file from disk
pub fn parse_catalog_file(path: &Path) -> Result<Vec<MovieEntry>> {
    let file = File::open(path)?;
    parse_catalog(file, &path.display().to_string())
}

/// Convert a csv error, keeping the line number when there is one
fn csv_error(source: &str, err: csv::Error) -> DataLoadError {
    let line = err.position().map(|pos| pos.line()).unwrap_or(0);
    if err.is_io_error() {
        if let csv::ErrorKind::Io(io_err) = err.into_kind() {
            return DataLoadError::IoError(io_err);
        }
        return DataLoadError::ParseError {
            file: source.to_string(),
            line,
            reason: "I/O error".to_string(),
        };
    }
    DataLoadError::ParseError {
        file: source.to_string(),
        line,
        reason: err.to_string(),
    }
}
