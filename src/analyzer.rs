//! # Content Analyzer
//!
//! Computes structural metrics of a song that drive format selection and
//! column balancing.
//!
//! ## Metrics
//! - **line_count** - Every leaf block counts as one line, whether it sits at
//!   the top level or inside a section/voice. Container headers are not counted.
//! - **is_complex** - More than one distinct voice color, or containers nested
//!   inside containers (depth > 1).
//! - **is_very_long** - `line_count` above [`VERY_LONG_THRESHOLD`].
//!
//! The analysis is cheap and is recomputed for every layout; nothing is cached
//! between songs.

use serde::Serialize;

use crate::song::{ContentBlock, Song, VoiceColor};

/// Line count above which a song is considered very long.
pub const VERY_LONG_THRESHOLD: usize = 50;

/// Structural metrics of one song.
#[derive(Debug, Clone, PartialEq, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Analysis {
    pub line_count: usize,
    pub is_complex: bool,
    pub is_very_long: bool,
    /// Deepest container nesting (0 = no containers).
    pub max_depth: usize,
    /// Distinct voice colors in order of first appearance.
    pub voice_colors: Vec<VoiceColor>,
}

#[derive(Default)]
struct Walker {
    line_count: usize,
    max_depth: usize,
    color_order: Vec<VoiceColor>,
}

impl Walker {
    fn walk(&mut self, blocks: &[ContentBlock], depth: usize) {
        for block in blocks {
            match block {
                ContentBlock::Section { lines, .. } => {
                    self.enter(depth + 1);
                    self.walk(lines, depth + 1);
                }
                ContentBlock::Voice { color, lines, .. } => {
                    self.enter(depth + 1);
                    if !self.color_order.contains(color) {
                        self.color_order.push(*color);
                    }
                    self.walk(lines, depth + 1);
                }
                ContentBlock::Unknown => {}
                _ => self.line_count += 1,
            }
        }
    }

    fn enter(&mut self, depth: usize) {
        self.max_depth = self.max_depth.max(depth);
    }
}

/// Analyze a song's content blocks.
///
/// # Example
/// ```rust
/// use chordsheet::{analyze, parse_song};
///
/// let song = parse_song(r#"{"content": [
///     {"type": "section", "name": "VERSE", "lines": [
///         {"type": "chords", "content": ["C", "G"]},
///         {"type": "lyric", "content": "First line"}
///     ]},
///     {"type": "text", "content": "Repeat chorus"}
/// ]}"#)?;
///
/// let analysis = analyze(&song);
/// assert_eq!(analysis.line_count, 3);
/// assert!(!analysis.is_complex);
/// assert!(!analysis.is_very_long);
/// # Ok::<(), chordsheet::SheetError>(())
/// ```
pub fn analyze(song: &Song) -> Analysis {
    analyze_blocks(&song.content)
}

/// Analyze a bare block sequence (used when laying out a single column).
pub fn analyze_blocks(blocks: &[ContentBlock]) -> Analysis {
    let mut walker = Walker::default();
    walker.walk(blocks, 0);

    let is_complex = walker.color_order.len() > 1 || walker.max_depth > 1;
    let analysis = Analysis {
        line_count: walker.line_count,
        is_complex,
        is_very_long: walker.line_count > VERY_LONG_THRESHOLD,
        max_depth: walker.max_depth,
        voice_colors: walker.color_order,
    };
    log::debug!(
        "analysis: {} lines, depth {}, {} voice colors, complex={}, very_long={}",
        analysis.line_count,
        analysis.max_depth,
        analysis.voice_colors.len(),
        analysis.is_complex,
        analysis.is_very_long
    );
    analysis
}
