//! # Viewer State and Layout Pipeline
//!
//! All layout state lives in one explicit [`ViewerState`]. Every change (new
//! song, transpose, viewport change) re-runs the same pure pipeline:
//!
//! ```text
//! Song ─► analyze ─► select_config ─► balance ─► render (per column) ─► SheetLayout
//!                         ▲
//!                   ViewportClass
//! ```
//!
//! [`Viewer`] couples the state with a [`ViewportClassifier`] so host resize
//! and print events recompute the layout the same way.

use serde::Serialize;

use crate::analyzer::{analyze, Analysis};
use crate::balance::balance;
use crate::error::SheetError;
use crate::format::{select_config, FormatConfig, ViewportClass};
use crate::render::{render, RenderLine};
use crate::song::Song;
use crate::transpose::{normalize_semitones, transpose_key};
use crate::viewport::{ViewportClassifier, ViewportEvent};

/// Everything the layout depends on.
#[derive(Debug, Clone, PartialEq)]
pub struct ViewerState {
    pub song: Song,
    pub semitones: i32,
    pub viewport: ViewportClass,
}

impl ViewerState {
    pub fn new(song: Song, viewport: ViewportClass) -> Self {
        Self {
            song,
            semitones: 0,
            viewport,
        }
    }

    pub fn transpose_up(&mut self) {
        self.semitones = normalize_semitones(self.semitones + 1);
    }

    pub fn transpose_down(&mut self) {
        self.semitones = normalize_semitones(self.semitones - 1);
    }

    pub fn reset_transpose(&mut self) {
        self.semitones = 0;
    }

    pub fn set_transpose(&mut self, semitones: i32) {
        self.semitones = normalize_semitones(semitones);
    }

    pub fn set_viewport(&mut self, viewport: ViewportClass) {
        self.viewport = viewport;
    }

    /// Key the sheet is displayed in after transposition.
    pub fn current_key(&self) -> String {
        transpose_key(&self.song.original_key, self.semitones)
    }
}

/// A fully laid out chord sheet, ready for a presentation layer.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SheetLayout {
    pub artist: String,
    pub title: String,
    pub original_key: String,
    pub key: String,
    pub semitones: i32,
    pub viewport: ViewportClass,
    pub config: FormatConfig,
    pub analysis: Analysis,
    pub columns: Vec<Vec<RenderLine>>,
}

/// Run the layout pipeline for the given state.
///
/// # Example
/// ```rust
/// use chordsheet::{layout, parse_song, ViewerState, ViewportClass};
///
/// let song = parse_song(r#"{
///     "artist": "Traditional", "title": "Greensleeves", "originalKey": "Am",
///     "content": [
///         {"type": "section", "name": "VERSE", "lines": [
///             {"type": "chord", "content": "Am"},
///             {"type": "lyric", "content": "Alas, my love"}
///         ]}
///     ]
/// }"#)?;
///
/// let mut state = ViewerState::new(song, ViewportClass::Tablet);
/// state.transpose_up();
/// state.transpose_up();
///
/// let sheet = layout(&state)?;
/// assert_eq!(sheet.key, "Bm");
/// assert_eq!(sheet.columns.len(), 2);
/// # Ok::<(), chordsheet::SheetError>(())
/// ```
///
/// # Errors
/// Only fails when the format selects an impossible column count.
pub fn layout(state: &ViewerState) -> Result<SheetLayout, SheetError> {
    let analysis = analyze(&state.song);
    let config = select_config(&analysis, state.viewport);
    let blocks = balance(&state.song.content, config.target_columns, &analysis)?;
    let columns: Vec<Vec<RenderLine>> = blocks
        .iter()
        .map(|column| render(column, state.semitones))
        .collect();

    log::debug!(
        "laid out '{}' for {} in {} columns ({} lines rendered)",
        state.song.title,
        state.viewport,
        columns.len(),
        columns.iter().map(Vec::len).sum::<usize>()
    );

    Ok(SheetLayout {
        artist: state.song.artist.clone(),
        title: state.song.title.clone(),
        original_key: state.song.original_key.clone(),
        key: state.current_key(),
        semitones: state.semitones,
        viewport: state.viewport,
        config,
        analysis,
        columns,
    })
}

/// A viewing session: state plus the classifier feeding it viewport changes.
#[derive(Debug)]
pub struct Viewer {
    state: ViewerState,
    classifier: ViewportClassifier,
}

impl Viewer {
    pub fn new(song: Song, width: f64, height: f64) -> Self {
        let classifier = ViewportClassifier::new(width, height);
        let state = ViewerState::new(song, classifier.current());
        Self { state, classifier }
    }

    pub fn state(&self) -> &ViewerState {
        &self.state
    }

    pub fn transpose_up(&mut self) {
        self.state.transpose_up();
    }

    pub fn transpose_down(&mut self) {
        self.state.transpose_down();
    }

    pub fn set_transpose(&mut self, semitones: i32) {
        self.state.set_transpose(semitones);
    }

    pub fn reset_transpose(&mut self) {
        self.state.reset_transpose();
    }

    pub fn classifier(&self) -> &ViewportClassifier {
        &self.classifier
    }

    pub fn classifier_mut(&mut self) -> &mut ViewportClassifier {
        &mut self.classifier
    }

    /// Replace the song being viewed; transposition resets to the original key.
    pub fn load_song(&mut self, song: Song) {
        self.state.song = song;
        self.state.reset_transpose();
    }

    /// Feed a host event through the classifier and recompute the layout.
    ///
    /// The viewport always follows the classifier afterwards, even when the
    /// event did not change its class.
    pub fn handle(&mut self, event: ViewportEvent) -> Result<SheetLayout, SheetError> {
        if let Some(viewport) = self.classifier.handle(event) {
            log::debug!("viewport changed to {}", viewport);
        }
        self.state.set_viewport(self.classifier.current());
        self.layout()
    }

    pub fn layout(&self) -> Result<SheetLayout, SheetError> {
        layout(&self.state)
    }
}
