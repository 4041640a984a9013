//! Core domain types for the movie catalog.
//!
//! The catalog is the only data the bot owns. It is built once at cold start
//! and handed to request handlers behind an `Arc`, so everything here is
//! read-only after construction.

use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::fmt;

// =============================================================================
// Type Aliases
// =============================================================================

/// Identifier of an item as used by the ranking service (the `ITEM_ID` column)
///
/// Kept as a string: the ranking service treats ids as opaque strings and
/// returns them the same way.
pub type ItemId = String;

// =============================================================================
// Movie Entry
// =============================================================================

/// A single movie in the catalog
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct MovieEntry {
    pub id: ItemId,
    pub title: String,
    /// Raw genre column, e.g. `"Adventure|Animation|Children"`
    pub genre: String,
}

impl MovieEntry {
    pub fn new(id: impl Into<ItemId>, title: impl Into<String>, genre: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            title: title.into(),
            genre: genre.into(),
        }
    }
}

/// Renders as `title(genre)`, the form used in bot replies
impl fmt::Display for MovieEntry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}({})", self.title, self.genre)
    }
}

// =============================================================================
// Catalog - The In-Memory Lookup Table
// =============================================================================

/// Mapping from item id to movie, with a stable iteration order.
///
/// Entries are kept in a `Vec` in the order they were first inserted and a
/// `HashMap` indexes them by id. Iteration order matters: title search
/// returns the first match it sees, so a catalog loaded from the same file
/// always resolves a title to the same movie.
///
/// Inserting an id that already exists replaces the movie in place (last
/// write wins) without moving it.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Catalog {
    pub(crate) entries: Vec<MovieEntry>,
    pub(crate) positions: HashMap<ItemId, usize>,
}

impl Catalog {
    /// Creates a new, empty Catalog
    pub fn new() -> Self {
        Self::default()
    }

    /// Get a movie by item id
    pub fn get(&self, id: &str) -> Option<&MovieEntry> {
        self.positions.get(id).map(|&pos| &self.entries[pos])
    }

    pub fn contains(&self, id: &str) -> bool {
        self.positions.contains_key(id)
    }

    /// Insert a movie, returning the entry it replaced if the id was known
    pub fn insert(&mut self, entry: MovieEntry) -> Option<MovieEntry> {
        match self.positions.get(&entry.id) {
            Some(&pos) => Some(std::mem::replace(&mut self.entries[pos], entry)),
            None => {
                self.positions.insert(entry.id.clone(), self.entries.len());
                self.entries.push(entry);
                None
            }
        }
    }

    /// Iterate movies in catalog order
    pub fn iter(&self) -> std::slice::Iter<'_, MovieEntry> {
        self.entries.iter()
    }

    /// All item ids, in catalog order
    pub fn ids(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(|entry| entry.id.as_str())
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl FromIterator<MovieEntry> for Catalog {
    fn from_iter<I: IntoIterator<Item = MovieEntry>>(iter: I) -> Self {
        let mut catalog = Catalog::new();
        for entry in iter {
            catalog.insert(entry);
        }
        catalog
    }
}

impl<'a> IntoIterator for &'a Catalog {
    type Item = &'a MovieEntry;
    type IntoIter = std::slice::Iter<'a, MovieEntry>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
