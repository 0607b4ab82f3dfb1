//! Song listing search.
//!
//! A listing is a JSON array of `{ "artist", "title", "file" }` entries, the
//! index a song picker shows before any song is loaded.

use serde::{Deserialize, Serialize};

use crate::error::SheetError;

/// One entry of a song listing.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct Listing {
    #[serde(default)]
    pub artist: String,
    #[serde(default)]
    pub title: String,
    /// Song document file name, relative to the listing.
    #[serde(default)]
    pub file: String,
}

/// Parse a listing JSON array.
pub fn parse_listing(json: &str) -> Result<Vec<Listing>, SheetError> {
    let entries: Vec<Listing> = serde_json::from_str(json)?;
    log::debug!("parsed listing with {} entries", entries.len());
    Ok(entries)
}

/// Case-insensitive search over artist and title, sorted by artist then title.
///
/// A blank query returns every entry.
///
/// # Example
/// ```rust
/// use chordsheet::{search, Listing};
///
/// let entries = vec![
///     Listing { artist: "Zed".into(), title: "Morning".into(), file: "zed.json".into() },
///     Listing { artist: "Abba".into(), title: "Waterloo".into(), file: "abba.json".into() },
/// ];
/// let found = search(&entries, "MORN");
/// assert_eq!(found.len(), 1);
/// assert_eq!(found[0].file, "zed.json");
/// ```
pub fn search<'a>(entries: &'a [Listing], query: &str) -> Vec<&'a Listing> {
    let needle = query.trim().to_lowercase();
    let mut found: Vec<&Listing> = entries
        .iter()
        .filter(|e| {
            needle.is_empty()
                || e.artist.to_lowercase().contains(&needle)
                || e.title.to_lowercase().contains(&needle)
        })
        .collect();
    found.sort_by(|a, b| {
        a.artist
            .to_lowercase()
            .cmp(&b.artist.to_lowercase())
            .then_with(|| a.title.to_lowercase().cmp(&b.title.to_lowercase()))
    });
    found
}

#[cfg(test)]
mod tests {
    use super::*;

    fn entries() -> Vec<Listing> {
        parse_listing(
            r#"[
                {"artist": "The Beatles", "title": "Let It Be", "file": "let-it-be.json"},
                {"artist": "ABBA", "title": "Dancing Queen", "file": "dancing-queen.json"},
                {"artist": "The Beatles", "title": "Hey Jude", "file": "hey-jude.json"},
                {"artist": "Queen", "title": "Bohemian Rhapsody"}
            ]"#,
        )
        .unwrap()
    }

    #[test]
    fn test_blank_query_returns_all_sorted() {
        let entries = entries();
        let found = search(&entries, "   ");
        let titles: Vec<&str> = found.iter().map(|e| e.title.as_str()).collect();
        assert_eq!(titles, vec!["Dancing Queen", "Bohemian Rhapsody", "Hey Jude", "Let It Be"]);
    }

    #[test]
    fn test_matches_artist_or_title() {
        let entries = entries();
        let found = search(&entries, "queen");
        let titles: Vec<&str> = found.iter().map(|e| e.title.as_str()).collect();
        assert_eq!(titles, vec!["Dancing Queen", "Bohemian Rhapsody"]);

        assert_eq!(search(&entries, "beatles").len(), 2);
        assert!(search(&entries, "metallica").is_empty());
    }

    #[test]
    fn test_missing_file_defaults_empty() {
        let entries = entries();
        assert_eq!(entries[3].file, "");
    }

    #[test]
    fn test_malformed_listing() {
        assert!(matches!(
            parse_listing(r#"{"artist": "not an array"}"#),
            Err(SheetError::ParseError { .. })
        ));
    }
}
