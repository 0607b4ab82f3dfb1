//! # Content Renderer
//!
//! Flattens a column of content blocks into [`RenderLine`]s for a presentation
//! layer to draw.
//!
//! ## Rules
//! - Sections and voices emit a header line, then their lines one level
//!   deeper. Nested lines inherit the voice color.
//! - Chord-bearing items (`chord`, `chords`) immediately followed by a lyric
//!   merge into one `Combined` line with the chords drawn above the lyric.
//!   Chord items without a following lyric each stand alone.
//! - Every chord token is transposed; lyric and text content is verbatim.
//! - Dividers emit a separator with no text.
//! - Containers with no lines and unknown blocks emit nothing.

use serde::Serialize;

use crate::song::{ContentBlock, VoiceColor};
use crate::transpose::transpose_chord;

/// Which container produced a header line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ContainerKind {
    Section,
    Voice,
}

/// What a render line draws.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "type", rename_all = "camelCase")]
pub enum LineKind {
    Header { name: String, container: ContainerKind },
    /// Chords drawn directly above the lyric they belong to.
    Combined { chords: Vec<String>, lyric: String },
    Chords { chords: Vec<String> },
    Lyric { text: String },
    Text { text: String },
    Divider,
}

/// One drawable line.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RenderLine {
    /// Container nesting level (0 = top level of the column).
    pub depth: usize,
    /// Voice color inherited from the closest enclosing voice.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub color: Option<VoiceColor>,
    #[serde(flatten)]
    pub kind: LineKind,
}

struct Renderer {
    semitones: i32,
    out: Vec<RenderLine>,
}

impl Renderer {
    fn emit(&mut self, depth: usize, color: Option<VoiceColor>, kind: LineKind) {
        self.out.push(RenderLine { depth, color, kind });
    }

    fn transpose_all<'a>(&self, chords: impl IntoIterator<Item = &'a String>) -> Vec<String> {
        chords
            .into_iter()
            .map(|c| transpose_chord(c, self.semitones))
            .collect()
    }

    fn chords_of(&self, block: &ContentBlock) -> Vec<String> {
        match block {
            ContentBlock::Chord { content } => self.transpose_all(std::iter::once(content)),
            ContentBlock::Chords { content } => self.transpose_all(content),
            _ => Vec::new(),
        }
    }

    fn render_blocks(&mut self, blocks: &[ContentBlock], depth: usize, color: Option<VoiceColor>) {
        let mut i = 0;
        while i < blocks.len() {
            let block = &blocks[i];

            if block.is_chord_bearing() {
                let run_end = blocks[i..]
                    .iter()
                    .position(|b| !b.is_chord_bearing())
                    .map_or(blocks.len(), |offset| i + offset);

                match blocks.get(run_end) {
                    Some(ContentBlock::Lyric { content }) => {
                        let chords = blocks[i..run_end]
                            .iter()
                            .flat_map(|b| self.chords_of(b))
                            .collect();
                        self.emit(
                            depth,
                            color,
                            LineKind::Combined {
                                chords,
                                lyric: content.clone(),
                            },
                        );
                        i = run_end + 1;
                    }
                    _ => {
                        for b in &blocks[i..run_end] {
                            let chords = self.chords_of(b);
                            self.emit(depth, color, LineKind::Chords { chords });
                        }
                        i = run_end;
                    }
                }
                continue;
            }

            self.render_block(block, depth, color);
            i += 1;
        }
    }

    fn render_block(&mut self, block: &ContentBlock, depth: usize, color: Option<VoiceColor>) {
        match block {
            ContentBlock::Section { name, lines } => {
                if lines.is_empty() {
                    return;
                }
                self.emit(
                    depth,
                    color,
                    LineKind::Header {
                        name: name.clone(),
                        container: ContainerKind::Section,
                    },
                );
                self.render_blocks(lines, depth + 1, color);
            }
            ContentBlock::Voice {
                name,
                color: voice_color,
                lines,
            } => {
                if lines.is_empty() {
                    return;
                }
                let color = Some(*voice_color);
                self.emit(
                    depth,
                    color,
                    LineKind::Header {
                        name: name.clone(),
                        container: ContainerKind::Voice,
                    },
                );
                self.render_blocks(lines, depth + 1, color);
            }
            ContentBlock::Lyric { content } => {
                self.emit(depth, color, LineKind::Lyric { text: content.clone() })
            }
            ContentBlock::Text { content } => {
                self.emit(depth, color, LineKind::Text { text: content.clone() })
            }
            ContentBlock::Divider => self.emit(depth, color, LineKind::Divider),
            ContentBlock::Chord { .. } | ContentBlock::Chords { .. } => {
                let chords = self.chords_of(block);
                self.emit(depth, color, LineKind::Chords { chords });
            }
            ContentBlock::Unknown => {
                log::warn!("skipping block of unknown type at depth {}", depth);
            }
        }
    }
}

/// Render a column of blocks, transposing every chord by `semitones`.
///
/// # Example
/// ```rust
/// use chordsheet::{render, ContentBlock, LineKind};
///
/// let column = vec![
///     ContentBlock::Chord { content: "A".into() },
///     ContentBlock::Lyric { content: "hello".into() },
/// ];
/// let lines = render(&column, 2);
///
/// assert_eq!(lines.len(), 1);
/// assert_eq!(
///     lines[0].kind,
///     LineKind::Combined { chords: vec!["B".into()], lyric: "hello".into() }
/// );
/// ```
pub fn render(column: &[ContentBlock], semitones: i32) -> Vec<RenderLine> {
    let mut renderer = Renderer {
        semitones,
        out: Vec::new(),
    };
    renderer.render_blocks(column, 0, None);
    renderer.out
}
