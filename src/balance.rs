//! # Column Balancing
//!
//! Distributes a song's top-level blocks across N columns of roughly equal
//! rendered height without ever splitting a block.
//!
//! ## Weights
//! Every block is weighted in rendered rows:
//! - lyric, text, chord and chords blocks: 1 row
//! - divider and unknown blocks: 0 rows (still placed, never dropped)
//! - section/voice: a header row (plus a spacing row for complex songs) and
//!   the weight of its nested lines
//!
//! ## Units
//! A run of chord-bearing blocks immediately followed by a lyric is rendered
//! as one combined line, so the run and its lyric form one atomic unit that is
//! never split across columns.
//!
//! ## Algorithm
//! Columns are contiguous slices of the input, in source order:
//! 1. Binary search the smallest column capacity that lets all units fit into
//!    `columns` columns when filled front-to-back.
//! 2. Fill columns front-to-back up to that capacity. A column is closed early
//!    only when the units left are exactly enough to give each remaining
//!    column one unit, so columns are not left empty while content remains.
//!
//! This minimizes the tallest column. Among equally tall layouts the earlier
//! columns are the fuller ones.

use crate::analyzer::Analysis;
use crate::error::SheetError;
use crate::song::ContentBlock;

/// Rows taken by a section or voice header.
pub const HEADER_WEIGHT: usize = 1;

/// Extra spacing row around containers in complex (multi-voice) songs.
pub const COMPLEX_HEADER_SPACING: usize = 1;

/// Estimated rendered height of a block, in rows.
pub fn block_weight(block: &ContentBlock, analysis: &Analysis) -> usize {
    match block {
        ContentBlock::Section { lines, .. } | ContentBlock::Voice { lines, .. } => {
            if lines.is_empty() {
                // Empty containers render nothing
                return 0;
            }
            let header = if analysis.is_complex {
                HEADER_WEIGHT + COMPLEX_HEADER_SPACING
            } else {
                HEADER_WEIGHT
            };
            header + lines.iter().map(|l| block_weight(l, analysis)).sum::<usize>()
        }
        ContentBlock::Divider | ContentBlock::Unknown => 0,
        _ => 1,
    }
}

/// A contiguous run of blocks that must stay in one column.
#[derive(Debug, Clone, Copy, PartialEq)]
struct Unit {
    start: usize,
    end: usize,
    weight: usize,
}

/// Group blocks into atomic units (chord runs glued to their lyric).
fn build_units(content: &[ContentBlock], analysis: &Analysis) -> Vec<Unit> {
    let mut units = Vec::new();
    let mut i = 0;
    while i < content.len() {
        let start = i;
        let mut end = i + 1;
        if content[i].is_chord_bearing() {
            let mut j = i;
            while j < content.len() && content[j].is_chord_bearing() {
                j += 1;
            }
            if j < content.len() && content[j].is_lyric() {
                end = j + 1;
            }
        }
        let weight = content[start..end]
            .iter()
            .map(|b| block_weight(b, analysis))
            .sum();
        units.push(Unit { start, end, weight });
        i = end;
    }
    units
}

/// Split units into at most `columns` groups with no group heavier than
/// `capacity`. Returns the index of the first unit of each group after the
/// first, or `None` when the units do not fit.
fn fill(units: &[Unit], columns: usize, capacity: usize) -> Option<Vec<usize>> {
    let mut breaks = Vec::with_capacity(columns.saturating_sub(1));
    let mut current = 0usize;
    let mut in_column = 0usize;

    for (i, unit) in units.iter().enumerate() {
        if unit.weight > capacity {
            return None;
        }
        let remaining_units = units.len() - i;
        let remaining_columns = columns - breaks.len() - 1;
        let must_close = in_column > 0 && remaining_units <= remaining_columns;

        if in_column > 0 && (current + unit.weight > capacity || must_close) {
            if breaks.len() + 1 == columns {
                return None;
            }
            breaks.push(i);
            current = 0;
            in_column = 0;
        }
        current += unit.weight;
        in_column += 1;
    }
    Some(breaks)
}

/// Balance `content` into exactly `columns` ordered columns.
///
/// The concatenation of the returned columns always equals `content`.
///
/// # Example
/// ```rust
/// use chordsheet::{balance, Analysis, ContentBlock};
///
/// let content = vec![
///     ContentBlock::Lyric { content: "one".into() },
///     ContentBlock::Lyric { content: "two".into() },
///     ContentBlock::Lyric { content: "three".into() },
///     ContentBlock::Lyric { content: "four".into() },
/// ];
/// let columns = balance(&content, 2, &Analysis::default())?;
///
/// assert_eq!(columns.len(), 2);
/// assert_eq!(columns[0].len(), 2);
/// assert_eq!(columns[1].len(), 2);
/// # Ok::<(), chordsheet::SheetError>(())
/// ```
///
/// # Errors
/// Returns [`SheetError::InvalidConfiguration`] when `columns` is zero.
pub fn balance(
    content: &[ContentBlock],
    columns: usize,
    analysis: &Analysis,
) -> Result<Vec<Vec<ContentBlock>>, SheetError> {
    if columns == 0 {
        return Err(SheetError::InvalidConfiguration(
            "column count must be at least 1".to_string(),
        ));
    }
    if columns == 1 {
        return Ok(vec![content.to_vec()]);
    }

    let units = build_units(content, analysis);
    if units.is_empty() {
        return Ok(vec![Vec::new(); columns]);
    }

    let heaviest = units.iter().map(|u| u.weight).max().unwrap_or(0);
    let total: usize = units.iter().map(|u| u.weight).sum();

    // Smallest capacity that fits; `total` always fits since every unit can
    // share the first column.
    let (mut lo, mut hi) = (heaviest, total);
    while lo < hi {
        let mid = lo + (hi - lo) / 2;
        if fill(&units, columns, mid).is_some() {
            hi = mid;
        } else {
            lo = mid + 1;
        }
    }
    let breaks = fill(&units, columns, lo).unwrap_or_default();
    log::trace!(
        "balanced {} units (total weight {}) into {} columns at capacity {}, breaks {:?}",
        units.len(),
        total,
        columns,
        lo,
        breaks
    );

    let mut result = Vec::with_capacity(columns);
    let mut unit_start = 0;
    for unit_break in breaks.iter().copied().chain(std::iter::once(units.len())) {
        let group = &units[unit_start..unit_break];
        let blocks = match (group.first(), group.last()) {
            (Some(first), Some(last)) => content[first.start..last.end].to_vec(),
            _ => Vec::new(),
        };
        result.push(blocks);
        unit_start = unit_break;
    }
    result.resize_with(columns, Vec::new);
    Ok(result)
}
