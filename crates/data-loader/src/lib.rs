//! # Data Loader Crate
//!
//! Loads the movie catalog the bot resolves titles against.
//!
//! ## Main Components
//!
//! - **types**: `MovieEntry` and the insertion-ordered `Catalog`
//! - **parser**: CSV parsing of the `ITEM_ID,title,genre` file
//! - **index**: building a `Catalog` from parsed records
//! - **search**: case-insensitive title lookup
//! - **remote**: downloading the catalog object from S3
//! - **error**: error types for data loading
//!
//! ## Example Usage
//!
//! ```ignore
//! use data_loader::Catalog;
//! use std::path::Path;
//!
//! let catalog = Catalog::load_from_file(Path::new("data/movies.csv"))?;
//!
//! let movie = catalog.find_by_title("toy story").unwrap();
//! println!("{} -> {}", movie.id, movie);
//! ```

// Public modules
pub mod error;
pub mod types;
pub mod parser;
pub mod index;
pub mod search;
pub mod remote;

// Re-export commonly used types for convenience
pub use error::{DataLoadError, Result};
pub use remote::{CatalogLocation, download_catalog, fetch_catalog};
pub use types::{Catalog, ItemId, MovieEntry};
