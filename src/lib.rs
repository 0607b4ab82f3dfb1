pub mod analyzer;
pub mod api;
pub mod balance;
pub mod catalog;
pub mod error;
pub mod format;
pub mod render;
pub mod song;
pub mod text;
pub mod transpose;
pub mod viewer;
pub mod viewport;

pub use analyzer::{analyze, analyze_blocks, Analysis, VERY_LONG_THRESHOLD};
pub use api::{layout_song, render_song_text};
pub use balance::{balance, block_weight};
pub use catalog::{parse_listing, search, Listing};
pub use error::*;
pub use format::{select_config, FormatConfig, FormatProfile, ViewportClass};
pub use render::{render, ContainerKind, LineKind, RenderLine};
pub use song::{parse_song, ContentBlock, Song, VoiceColor};
pub use text::to_plain_text;
pub use transpose::{normalize_semitones, transpose_chord, transpose_key};
pub use viewer::{layout, SheetLayout, Viewer, ViewerState};
pub use viewport::{classify, ViewportClassifier, ViewportEvent};
