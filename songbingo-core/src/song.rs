use crate::error::{CoreError, Result};
use serde::Deserialize;
use std::collections::HashSet;
use std::path::Path;

/// A single entry in the songbook.
///
/// The `id` doubles as the video reference key handed to the playback
/// widget (a YouTube video id for the bundled songbook).
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct Song {
    /// Unique song id, also the video reference key
    pub id: String,
    /// Display title
    pub title: String,
    /// Offset into the video where the chorus starts, in seconds
    #[serde(rename = "chorus_time")]
    pub chorus_offset_secs: u32,
}

impl Song {
    /// Create a new song entry
    pub fn new(id: impl Into<String>, title: impl Into<String>, chorus_offset_secs: u32) -> Self {
        Self {
            id: id.into(),
            title: title.into(),
            chorus_offset_secs,
        }
    }
}

/// An ordered, immutable collection of songs loaded once at startup.
///
/// The `source_slug` identifies where the songbook came from and scopes
/// the persisted selection record, so two different songbooks never share
/// selection state.
#[derive(Debug, Clone)]
pub struct Songbook {
    songs: Vec<Song>,
    source_slug: String,
}

impl Songbook {
    /// Build a songbook from a list of songs, validating id uniqueness.
    ///
    /// # Errors
    ///
    /// Returns `CoreError::DuplicateSongId` if two songs share an id.
    pub fn new(songs: Vec<Song>, source_slug: impl Into<String>) -> Result<Self> {
        let mut seen = HashSet::new();
        for song in &songs {
            if !seen.insert(song.id.as_str()) {
                return Err(CoreError::DuplicateSongId {
                    id: song.id.clone(),
                });
            }
        }
        Ok(Self {
            songs,
            source_slug: source_slug.into(),
        })
    }

    /// Parse a songbook from its JSON wire format:
    /// `[{ "id": ..., "title": ..., "chorus_time": ... }, ...]`
    ///
    /// # Errors
    ///
    /// Returns an error if the JSON is malformed or a song id is duplicated.
    pub fn from_json(json: &str, source_slug: impl Into<String>) -> Result<Self> {
        let songs: Vec<Song> = serde_json::from_str(json)?;
        Self::new(songs, source_slug)
    }

    /// Load a songbook from a JSON file. The source slug is derived from
    /// the file stem.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read or parsed.
    pub fn load_from_file(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)?;
        let slug = path
            .file_stem()
            .map_or_else(|| "songs".to_string(), |s| s.to_string_lossy().into_owned());
        Self::from_json(&content, slug)
    }

    /// Look up a song by id
    #[must_use]
    pub fn get(&self, id: &str) -> Option<&Song> {
        self.songs.iter().find(|song| song.id == id)
    }

    /// Check whether a song id exists in this songbook
    #[must_use]
    pub fn contains(&self, id: &str) -> bool {
        self.get(id).is_some()
    }

    /// All songs, in songbook order
    #[must_use]
    pub fn songs(&self) -> &[Song] {
        &self.songs
    }

    /// Iterate over the songs in songbook order
    pub fn iter(&self) -> std::slice::Iter<'_, Song> {
        self.songs.iter()
    }

    /// Number of songs in the book
    #[must_use]
    pub fn len(&self) -> usize {
        self.songs.len()
    }

    /// Whether the book holds no songs at all
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.songs.is_empty()
    }

    /// Identity slug of the songbook's source, used for storage namespacing
    #[must_use]
    pub fn source_slug(&self) -> &str {
        &self.source_slug
    }
}

impl<'a> IntoIterator for &'a Songbook {
    type Item = &'a Song;
    type IntoIter = std::slice::Iter<'a, Song>;

    fn into_iter(self) -> Self::IntoIter {
        self.songs.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn book() -> Songbook {
        Songbook::new(
            vec![
                Song::new("a", "First", 10),
                Song::new("b", "Second", 20),
                Song::new("c", "Third", 30),
            ],
            "songs",
        )
        .unwrap()
    }

    #[test]
    fn test_songbook_lookup() {
        let book = book();
        assert_eq!(book.len(), 3);
        assert!(book.contains("b"));
        assert!(!book.contains("z"));
        assert_eq!(book.get("c").map(|s| s.title.as_str()), Some("Third"));
    }

    #[test]
    fn test_songbook_rejects_duplicate_ids() {
        let result = Songbook::new(
            vec![Song::new("a", "First", 0), Song::new("a", "Again", 0)],
            "songs",
        );
        assert!(matches!(
            result,
            Err(CoreError::DuplicateSongId { id }) if id == "a"
        ));
    }

    #[test]
    fn test_from_json_wire_format() {
        let json = r#"[
            { "id": "dQw4w9WgXcQ", "title": "Some Song", "chorus_time": 43 },
            { "id": "abc123def45", "title": "Other Song", "chorus_time": 61 }
        ]"#;
        let book = Songbook::from_json(json, "songs").unwrap();
        assert_eq!(book.len(), 2);
        let song = book.get("dQw4w9WgXcQ").unwrap();
        assert_eq!(song.title, "Some Song");
        assert_eq!(song.chorus_offset_secs, 43);
    }

    #[test]
    fn test_from_json_malformed() {
        let result = Songbook::from_json("not json", "songs");
        assert!(matches!(result, Err(CoreError::SongbookParseError(_))));
    }

    #[test]
    fn test_order_preserved() {
        let book = book();
        let ids: Vec<_> = book.iter().map(|s| s.id.as_str()).collect();
        assert_eq!(ids, ["a", "b", "c"]);
    }
}
