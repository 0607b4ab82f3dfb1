//! # Song Data Model
//!
//! This module defines the song document the layout engine works on.
//!
//! ## Type Hierarchy
//! ```text
//! Song
//!   ├── artist, title
//!   ├── original_key: chord symbol
//!   └── Vec<ContentBlock>
//!
//! ContentBlock (tagged by "type")
//!   ├── Section { name, lines: Vec<ContentBlock> }
//!   ├── Voice   { name, color, lines: Vec<ContentBlock> }
//!   ├── Chords  { content: Vec<chord symbol> }
//!   ├── Chord   { content: chord symbol }
//!   ├── Lyric   { content }
//!   ├── Text    { content }
//!   ├── Divider
//!   └── Unknown (any other "type")
//! ```
//!
//! ## JSON Format
//! ```json
//! {
//!   "artist": "Traditional",
//!   "title": "Amazing Grace",
//!   "originalKey": "G",
//!   "content": [
//!     { "type": "section", "name": "VERSE 1", "lines": [
//!       { "type": "chords", "content": ["G", "C", "G"] },
//!       { "type": "lyric", "content": "Amazing grace, how sweet the sound" }
//!     ]},
//!     { "type": "divider" }
//!   ]
//! }
//! ```
//!
//! Missing `content` or `lines` arrays are read as empty. A `chords` block may
//! carry either an array of symbols or one whitespace-separated string.

use serde::{Deserialize, Deserializer, Serialize};

use crate::error::SheetError;

/// A parsed song, immutable once loaded.
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Song {
    #[serde(default)]
    pub artist: String,
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub original_key: String,
    #[serde(default, deserialize_with = "nullable_vec")]
    pub content: Vec<ContentBlock>,
}

/// Display color of a voice part.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Default, Deserialize, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum VoiceColor {
    Blue,
    Red,
    Green,
    Purple,
    Orange,
    Pink,
    Gray,
    #[default]
    #[serde(other)]
    Default,
}

/// One structural unit of a song sheet.
///
/// `Section` and `Voice` are containers; everything else is a leaf.
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum ContentBlock {
    Section {
        #[serde(default)]
        name: String,
        #[serde(default, deserialize_with = "nullable_vec")]
        lines: Vec<ContentBlock>,
    },
    Voice {
        #[serde(default)]
        name: String,
        #[serde(default)]
        color: VoiceColor,
        #[serde(default, deserialize_with = "nullable_vec")]
        lines: Vec<ContentBlock>,
    },
    Chords {
        #[serde(default, deserialize_with = "chord_list")]
        content: Vec<String>,
    },
    Chord {
        #[serde(default)]
        content: String,
    },
    Lyric {
        #[serde(default)]
        content: String,
    },
    Text {
        #[serde(default)]
        content: String,
    },
    Divider,
    #[serde(other)]
    Unknown,
}

impl ContentBlock {
    /// Nested lines of a container, `None` for leaves.
    pub fn lines(&self) -> Option<&[ContentBlock]> {
        match self {
            ContentBlock::Section { lines, .. } | ContentBlock::Voice { lines, .. } => {
                Some(lines)
            }
            _ => None,
        }
    }

    pub fn is_container(&self) -> bool {
        self.lines().is_some()
    }

    /// True for `chord` and `chords` blocks.
    pub fn is_chord_bearing(&self) -> bool {
        matches!(self, ContentBlock::Chord { .. } | ContentBlock::Chords { .. })
    }

    pub fn is_lyric(&self) -> bool {
        matches!(self, ContentBlock::Lyric { .. })
    }
}

/// Parse a song from its JSON document.
///
/// # Example
/// ```rust
/// use chordsheet::{parse_song, ContentBlock};
///
/// let song = parse_song(r#"{
///     "artist": "Traditional",
///     "title": "Scarborough Fair",
///     "originalKey": "Am",
///     "content": [{ "type": "chord", "content": "Am" }, { "type": "lyric", "content": "Are you going" }]
/// }"#)?;
///
/// assert_eq!(song.original_key, "Am");
/// assert_eq!(song.content.len(), 2);
/// assert!(matches!(song.content[1], ContentBlock::Lyric { .. }));
/// # Ok::<(), chordsheet::SheetError>(())
/// ```
///
/// # Errors
/// Returns [`SheetError::ParseError`] when the document is not valid song JSON.
pub fn parse_song(json: &str) -> Result<Song, SheetError> {
    let song: Song = serde_json::from_str(json)?;
    log::debug!(
        "parsed song '{}' by '{}' ({} top-level blocks)",
        song.title,
        song.artist,
        song.content.len()
    );
    Ok(song)
}

fn nullable_vec<'de, D>(deserializer: D) -> Result<Vec<ContentBlock>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<Vec<ContentBlock>>::deserialize(deserializer)?.unwrap_or_default())
}

#[derive(Deserialize)]
#[serde(untagged)]
enum RawChordList {
    List(Vec<String>),
    Line(String),
}

fn chord_list<'de, D>(deserializer: D) -> Result<Vec<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let chords = match Option::<RawChordList>::deserialize(deserializer)? {
        Some(RawChordList::List(list)) => list,
        Some(RawChordList::Line(line)) => line.split_whitespace().map(str::to_string).collect(),
        None => Vec::new(),
    };
    Ok(chords)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_full_song() {
        let json = r#"{
            "artist": "Traditional",
            "title": "Amazing Grace",
            "originalKey": "G",
            "content": [
                { "type": "section", "name": "VERSE 1", "lines": [
                    { "type": "chords", "content": ["G", "C", "G"] },
                    { "type": "lyric", "content": "Amazing grace" }
                ]},
                { "type": "voice", "name": "Alto", "color": "red", "lines": [
                    { "type": "text", "content": "(hum)" }
                ]},
                { "type": "divider" }
            ]
        }"#;
        let song = parse_song(json).unwrap();
        assert_eq!(song.artist, "Traditional");
        assert_eq!(song.content.len(), 3);

        match &song.content[0] {
            ContentBlock::Section { name, lines } => {
                assert_eq!(name, "VERSE 1");
                assert_eq!(lines.len(), 2);
                assert_eq!(
                    lines[0],
                    ContentBlock::Chords {
                        content: vec!["G".into(), "C".into(), "G".into()]
                    }
                );
            }
            other => panic!("Expected section, got {:?}", other),
        }
        match &song.content[1] {
            ContentBlock::Voice { color, .. } => assert_eq!(*color, VoiceColor::Red),
            other => panic!("Expected voice, got {:?}", other),
        }
        assert_eq!(song.content[2], ContentBlock::Divider);
    }

    #[test]
    fn test_missing_content_and_lines_are_empty() {
        let song = parse_song(r#"{"artist": "X", "title": "Y", "originalKey": "C"}"#).unwrap();
        assert!(song.content.is_empty());

        let song = parse_song(
            r#"{"content": [{"type": "section", "name": "INTRO"}, {"type": "voice", "name": "V", "lines": null}]}"#,
        )
        .unwrap();
        assert_eq!(song.content[0].lines(), Some(&[][..]));
        assert_eq!(song.content[1].lines(), Some(&[][..]));
    }

    #[test]
    fn test_unknown_block_type_and_color() {
        let song = parse_song(
            r#"{"content": [
                {"type": "tablature", "content": "e|---0---|"},
                {"type": "voice", "name": "Lead", "color": "turquoise", "lines": []}
            ]}"#,
        )
        .unwrap();
        assert_eq!(song.content[0], ContentBlock::Unknown);
        match &song.content[1] {
            ContentBlock::Voice { color, .. } => assert_eq!(*color, VoiceColor::Default),
            other => panic!("Expected voice, got {:?}", other),
        }
    }

    #[test]
    fn test_chords_as_single_string() {
        let song = parse_song(r#"{"content": [{"type": "chords", "content": "Am  F   C G"}]}"#).unwrap();
        assert_eq!(
            song.content[0],
            ContentBlock::Chords {
                content: vec!["Am".into(), "F".into(), "C".into(), "G".into()]
            }
        );
    }

    #[test]
    fn test_malformed_json_reports_location() {
        let err = parse_song("{\n  \"title\": \"Broken\",\n  \"content\": [ \n").unwrap_err();
        match err {
            SheetError::ParseError { line, .. } => assert!(line >= 3),
            other => panic!("Expected ParseError, got {:?}", other),
        }
    }

    #[test]
    fn test_block_predicates() {
        assert!(ContentBlock::Chord { content: "A".into() }.is_chord_bearing());
        assert!(ContentBlock::Chords { content: vec![] }.is_chord_bearing());
        assert!(!ContentBlock::Lyric { content: "la".into() }.is_chord_bearing());
        assert!(ContentBlock::Lyric { content: "la".into() }.is_lyric());
        assert!(ContentBlock::Section { name: "A".into(), lines: vec![] }.is_container());
        assert!(!ContentBlock::Divider.is_container());
    }
}
