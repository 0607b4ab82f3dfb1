//! # Public API
//!
//! Entry points for hosts that hold a song document as a JSON string.
//!
//! ## Functions
//!
//! - [`layout_song()`] - Parse and lay out a song for one viewport
//! - [`render_song_text()`] - Same, formatted as a plain-text chord chart
//!
//! Hosts that keep a session open (reacting to resize and print events)
//! should use [`Viewer`](crate::Viewer) instead, which reruns the same
//! pipeline on every event.
//!
//! ## Typical Usage
//!
//! ```rust
//! use chordsheet::{layout_song, ViewportClass};
//!
//! let json = r#"{
//!   "artist": "Traditional",
//!   "title": "Amazing Grace",
//!   "originalKey": "G",
//!   "content": [
//!     {"type": "section", "name": "VERSE 1", "lines": [
//!       {"type": "chords", "content": ["G", "C", "G"]},
//!       {"type": "lyric", "content": "Amazing grace, how sweet the sound"}
//!     ]}
//!   ]
//! }"#;
//!
//! // Up a whole step, laid out for a desktop browser
//! let sheet = layout_song(json, ViewportClass::Desktop, 2)?;
//! assert_eq!(sheet.key, "A");
//! assert_eq!(sheet.columns.len(), 3);
//! # Ok::<(), chordsheet::SheetError>(())
//! ```

use crate::{layout, parse_song, to_plain_text, SheetError, SheetLayout, ViewerState, ViewportClass};

/// Parse a song document and lay it out.
///
/// # Pipeline
/// 1. Deserialize the song JSON
/// 2. Analyze its structure
/// 3. Select font size, spacing and column count for the viewport
/// 4. Balance blocks across the columns
/// 5. Render each column, transposing every chord by `semitones`
///
/// # Errors
/// Returns [`SheetError::ParseError`] for malformed song JSON.
pub fn layout_song(
    json: &str,
    viewport: ViewportClass,
    semitones: i32,
) -> Result<SheetLayout, SheetError> {
    let song = parse_song(json)?;
    let mut state = ViewerState::new(song, viewport);
    state.set_transpose(semitones);
    layout(&state)
}

/// Parse a song document and format it as a plain-text chord chart.
///
/// # Example
/// ```rust
/// use chordsheet::{render_song_text, ViewportClass};
///
/// let json = r#"{"artist": "A", "title": "B", "originalKey": "E",
///     "content": [{"type": "text", "content": "Capo 2"}]}"#;
/// let text = render_song_text(json, ViewportClass::Print, 0)?;
/// assert!(text.contains("Capo 2"));
/// # Ok::<(), chordsheet::SheetError>(())
/// ```
pub fn render_song_text(
    json: &str,
    viewport: ViewportClass,
    semitones: i32,
) -> Result<String, SheetError> {
    let sheet = layout_song(json, viewport, semitones)?;
    Ok(to_plain_text(&sheet))
}
