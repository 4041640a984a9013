//! Title lookup over the catalog.
//!
//! Matching is a case-insensitive substring test. The bot uses
//! [`Catalog::find_by_title`], which returns the first match in catalog
//! order with no ranking by closeness or popularity: "Toy Story" resolves to
//! whichever of "Toy Story", "Toy Story 2", ... appears first in the file.
//!
//! Both scans run on rayon's pool; `find_first` and `collect` keep catalog
//! order, so the result is the same as a sequential scan.

use crate::types::{Catalog, MovieEntry};
use rayon::prelude::*;

impl Catalog {
    /// First movie, in catalog order, whose title contains `query`
    /// (case-insensitive)
    ///
    /// The query is not validated: an empty query matches the first movie.
    pub fn find_by_title(&self, query: &str) -> Option<&MovieEntry> {
        let needle = query.to_lowercase();
        self.entries
            .par_iter()
            .find_first(|movie| title_contains(movie, &needle))
    }

    /// All movies whose title contains `query`, exact title matches first,
    /// then in catalog order, truncated to `limit`
    pub fn search_titles(&self, query: &str, limit: usize) -> Vec<&MovieEntry> {
        let needle = query.to_lowercase();
        let mut matches: Vec<(bool, &MovieEntry)> = self
            .entries
            .par_iter()
            .filter_map(|movie| {
                let title = movie.title.to_lowercase();
                title.contains(&needle).then(|| (title == needle, movie))
            })
            .collect();

        // stable: equal keys keep catalog order
        matches.sort_by_key(|&(exact, _)| !exact);
        matches.truncate(limit);
        matches.into_iter().map(|(_, movie)| movie).collect()
    }
}

fn title_contains(movie: &MovieEntry, needle: &str) -> bool {
    movie.title.to_lowercase().contains(needle)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn toy_story_catalog() -> Catalog {
        Catalog::from_iter([
            MovieEntry::new("1", "Toy Story", "Animation"),
            MovieEntry::new("2", "Toy Story 2", "Animation"),
            MovieEntry::new("3", "Heat", "Action"),
        ])
    }

    #[test]
    fn test_match_is_case_insensitive() {
        let catalog = toy_story_catalog();

        let lower = catalog.find_by_title("toy story").unwrap();
        let upper = catalog.find_by_title("TOY STORY").unwrap();

        assert_eq!(lower, upper);
        assert_eq!(lower.id, "1");
    }

    #[test]
    fn test_first_match_in_catalog_order_wins() {
        let catalog = toy_story_catalog();
        assert_eq!(catalog.find_by_title("Toy Story").unwrap().id, "1");

        // same titles, reversed insertion order
        let reversed = Catalog::from_iter([
            MovieEntry::new("2", "Toy Story 2", "Animation"),
            MovieEntry::new("1", "Toy Story", "Animation"),
        ]);
        assert_eq!(reversed.find_by_title("Toy Story").unwrap().id, "2");
    }

    #[test]
    fn test_substring_match() {
        let catalog = toy_story_catalog();
        assert_eq!(catalog.find_by_title("story 2").unwrap().id, "2");
        assert_eq!(catalog.find_by_title("ea").unwrap().id, "3");
    }

    #[test]
    fn test_no_match() {
        let catalog = toy_story_catalog();
        assert!(catalog.find_by_title("Inception").is_none());
        assert!(Catalog::new().find_by_title("Heat").is_none());
    }

    #[test]
    fn test_search_titles_puts_exact_match_first() {
        let catalog = Catalog::from_iter([
            MovieEntry::new("2", "Toy Story 2", "Animation"),
            MovieEntry::new("3", "Toy Story 3", "Animation"),
            MovieEntry::new("1", "Toy Story", "Animation"),
        ]);

        let ids: Vec<&str> = catalog
            .search_titles("toy story", 10)
            .iter()
            .map(|movie| movie.id.as_str())
            .collect();
        assert_eq!(ids, vec!["1", "2", "3"]);

        assert_eq!(catalog.search_titles("toy story", 2).len(), 2);
    }
}
