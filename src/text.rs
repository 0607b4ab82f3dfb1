//! Plain-text output of a laid-out sheet.
//!
//! Columns are printed side by side, separated by a gutter sized from the
//! format's gap. Combined lines take two rows: the chord row, then the lyric.
//! Nesting is shown by indentation; section headers are bracketed and voice
//! headers angle-bracketed.

use unicode_width::UnicodeWidthStr;

use crate::render::{ContainerKind, LineKind, RenderLine};
use crate::viewer::SheetLayout;

const INDENT: &str = "  ";
const DIVIDER: &str = "----";
/// Pixels of format gap per space of gutter.
const GAP_PER_SPACE: f64 = 8.0;

fn line_rows(line: &RenderLine) -> Vec<String> {
    let indent = INDENT.repeat(line.depth);
    match &line.kind {
        LineKind::Header { name, container } => match container {
            ContainerKind::Section => vec![format!("{}[{}]", indent, name)],
            ContainerKind::Voice => vec![format!("{}<{}>", indent, name)],
        },
        LineKind::Combined { chords, lyric } => vec![
            format!("{}{}", indent, chords.join("  ")),
            format!("{}{}", indent, lyric),
        ],
        LineKind::Chords { chords } => vec![format!("{}{}", indent, chords.join("  "))],
        LineKind::Lyric { text } | LineKind::Text { text } => vec![format!("{}{}", indent, text)],
        LineKind::Divider => vec![format!("{}{}", indent, DIVIDER)],
    }
}

fn column_rows(column: &[RenderLine]) -> Vec<String> {
    column.iter().flat_map(line_rows).collect()
}

/// Terminal display width, so wide glyphs pad like two cells.
fn width(s: &str) -> usize {
    UnicodeWidthStr::width(s)
}

/// Render a sheet as plain text.
///
/// # Example
/// ```rust
/// use chordsheet::{render_song_text, ViewportClass};
///
/// let json = r#"{"artist": "Anon", "title": "Tiny", "originalKey": "C",
///     "content": [{"type": "chord", "content": "C"}, {"type": "lyric", "content": "hi"}]}"#;
/// let text = render_song_text(json, ViewportClass::Mobile, 0)?;
///
/// assert!(text.starts_with("Anon - Tiny\nKey: C\n"));
/// assert!(text.contains("C\nhi"));
/// # Ok::<(), chordsheet::SheetError>(())
/// ```
pub fn to_plain_text(sheet: &SheetLayout) -> String {
    let mut out = String::new();
    out.push_str(&format!("{} - {}\n", sheet.artist, sheet.title));
    if sheet.semitones == 0 {
        out.push_str(&format!("Key: {}\n", sheet.key));
    } else {
        out.push_str(&format!(
            "Key: {} (original {}, {:+})\n",
            sheet.key, sheet.original_key, sheet.semitones
        ));
    }
    out.push('\n');

    let columns: Vec<Vec<String>> = sheet
        .columns
        .iter()
        .map(|c| column_rows(c))
        .filter(|rows| !rows.is_empty())
        .collect();
    let widths: Vec<usize> = columns
        .iter()
        .map(|rows| rows.iter().map(|r| width(r)).max().unwrap_or(0))
        .collect();
    let gutter = " ".repeat(((sheet.config.gap / GAP_PER_SPACE).round() as usize).max(2));
    let height = columns.iter().map(Vec::len).max().unwrap_or(0);

    for row in 0..height {
        let mut line = String::new();
        for (i, rows) in columns.iter().enumerate() {
            let cell = rows.get(row).map(String::as_str).unwrap_or("");
            if i > 0 {
                line.push_str(&gutter);
            }
            line.push_str(cell);
            if i + 1 < columns.len() {
                line.push_str(&" ".repeat(widths[i] - width(cell)));
            }
        }
        out.push_str(line.trim_end());
        out.push('\n');
    }
    out
}
