//! Catalog building from parsed records.
//!
//! Parsing yields records in file order; this module folds them into a
//! `Catalog`, collapsing duplicate ids (last write wins) and logging what
//! was loaded.

use crate::error::Result;
use crate::parser;
use crate::types::{Catalog, MovieEntry};
use std::io::Read;
use std::path::Path;
use tracing::{debug, info, warn};

impl Catalog {
    /// Load the catalog from a local CSV file
    ///
    /// Safe to call again on the same file: the result is rebuilt from
    /// scratch each time.
    pub fn load_from_file(path: &Path) -> Result<Self> {
        info!("Loading movie catalog from {:?}", path);
        let movies = parser::parse_catalog_file(path)?;
        Ok(Self::from_records(movies))
    }

    /// Load the catalog from any reader (used for in-memory data and tests)
    pub fn load_from_reader<R: Read>(reader: R, source: &str) -> Result<Self> {
        let movies = parser::parse_catalog(reader, source)?;
        Ok(Self::from_records(movies))
    }

    fn from_records(movies: Vec<MovieEntry>) -> Self {
        let record_count = movies.len();
        let mut catalog = Catalog::new();
        let mut duplicates = 0usize;

        for movie in movies {
            if let Some(previous) = catalog.insert(movie) {
                debug!("Duplicate item id {}, replacing {:?}", previous.id, previous.title);
                duplicates += 1;
            }
        }

        if duplicates > 0 {
            warn!("Catalog contained {} duplicate item ids", duplicates);
        }
        info!(
            "Loaded {} movies from {} records",
            catalog.len(),
            record_count
        );
        catalog
    }
}
