//! # Format Selection
//!
//! Maps a viewport class and a song's [`Analysis`] to concrete rendering
//! parameters.
//!
//! ## Policy
//! - **Columns** are fixed per viewport: mobile 1, tablet 2, desktop 3, print 2.
//!   Content never changes the column count.
//! - **Font size** starts from the viewport's base size and moves with the
//!   line count (short songs grow, long songs shrink), then is clamped to the
//!   viewport's `[min, max]` range.
//! - **Spacing** (gap and line height) tightens for very long songs.

use serde::Serialize;
use std::fmt;
use std::str::FromStr;

use crate::analyzer::Analysis;
use crate::error::SheetError;

/// Coarse device/context category driving layout policy.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ViewportClass {
    Mobile,
    Tablet,
    Desktop,
    Print,
}

impl ViewportClass {
    pub const ALL: [ViewportClass; 4] = [
        ViewportClass::Mobile,
        ViewportClass::Tablet,
        ViewportClass::Desktop,
        ViewportClass::Print,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            ViewportClass::Mobile => "mobile",
            ViewportClass::Tablet => "tablet",
            ViewportClass::Desktop => "desktop",
            ViewportClass::Print => "print",
        }
    }

    /// The layout profile for this viewport.
    pub fn profile(&self) -> &'static FormatProfile {
        match self {
            ViewportClass::Mobile => &MOBILE,
            ViewportClass::Tablet => &TABLET,
            ViewportClass::Desktop => &DESKTOP,
            ViewportClass::Print => &PRINT,
        }
    }
}

impl fmt::Display for ViewportClass {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ViewportClass {
    type Err = SheetError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "mobile" => Ok(ViewportClass::Mobile),
            "tablet" => Ok(ViewportClass::Tablet),
            "desktop" => Ok(ViewportClass::Desktop),
            "print" => Ok(ViewportClass::Print),
            _ => Err(SheetError::UnknownViewport(s.to_string())),
        }
    }
}

/// Per-viewport layout defaults. Font sizes are in points, spacing in pixels.
#[derive(Debug, Clone, PartialEq)]
pub struct FormatProfile {
    pub base_font: f64,
    pub min_font: f64,
    pub max_font: f64,
    pub columns: usize,
    pub gap: f64,
    pub line_height: f64,
}

// ── Viewport profiles ───────────────────────────────────────────────
pub const MOBILE: FormatProfile = FormatProfile {
    base_font: 14.0,
    min_font: 11.0,
    max_font: 16.0,
    columns: 1,
    gap: 16.0,
    line_height: 1.4,
};

pub const TABLET: FormatProfile = FormatProfile {
    base_font: 15.0,
    min_font: 12.0,
    max_font: 18.0,
    columns: 2,
    gap: 24.0,
    line_height: 1.45,
};

pub const DESKTOP: FormatProfile = FormatProfile {
    base_font: 16.0,
    min_font: 12.0,
    max_font: 20.0,
    columns: 3,
    gap: 32.0,
    line_height: 1.5,
};

pub const PRINT: FormatProfile = FormatProfile {
    base_font: 11.0,
    min_font: 9.0,
    max_font: 13.0,
    columns: 2,
    gap: 20.0,
    line_height: 1.3,
};

// ── Font size bands (by line count) ─────────────────────────────────
const SHORT_SONG_LINES: usize = 15;
const SHORT_SONG_GROWTH: f64 = 2.0;
const FONT_BANDS: [(usize, f64); 3] = [(80, 3.0), (50, 2.0), (30, 1.0)];
const COMPLEX_SHRINK: f64 = 0.5;

// ── Very long songs ─────────────────────────────────────────────────
const LONG_SONG_LINE_HEIGHT_DELTA: f64 = 0.1;
const LONG_SONG_GAP_SCALE: f64 = 0.75;

/// Concrete rendering parameters for one layout pass.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct FormatConfig {
    pub font_size: f64,
    pub target_columns: usize,
    pub gap: f64,
    pub line_height: f64,
}

/// Select the rendering configuration for a song on a given viewport.
///
/// # Example
/// ```rust
/// use chordsheet::{select_config, Analysis, ViewportClass};
///
/// let analysis = Analysis { line_count: 40, ..Default::default() };
/// let config = select_config(&analysis, ViewportClass::Desktop);
///
/// assert_eq!(config.target_columns, 3);
/// assert_eq!(config.font_size, 15.0);
/// ```
pub fn select_config(analysis: &Analysis, viewport: ViewportClass) -> FormatConfig {
    let profile = viewport.profile();

    let mut font_size = profile.base_font;
    if analysis.line_count < SHORT_SONG_LINES {
        font_size += SHORT_SONG_GROWTH;
    } else if let Some((_, shrink)) = FONT_BANDS
        .iter()
        .find(|(lines, _)| analysis.line_count > *lines)
    {
        font_size -= shrink;
    }
    if analysis.is_complex {
        font_size -= COMPLEX_SHRINK;
    }
    let font_size = font_size.clamp(profile.min_font, profile.max_font);

    let (gap, line_height) = if analysis.is_very_long {
        (
            profile.gap * LONG_SONG_GAP_SCALE,
            profile.line_height - LONG_SONG_LINE_HEIGHT_DELTA,
        )
    } else {
        (profile.gap, profile.line_height)
    };

    let config = FormatConfig {
        font_size,
        target_columns: profile.columns,
        gap,
        line_height,
    };
    log::debug!("format for {}: {:?}", viewport, config);
    config
}

#[cfg(test)]
mod tests {
    use super::*;

    fn analysis(line_count: usize) -> Analysis {
        Analysis {
            line_count,
            is_very_long: line_count > crate::analyzer::VERY_LONG_THRESHOLD,
            ..Default::default()
        }
    }

    #[test]
    fn test_columns_fixed_per_viewport() {
        for lines in [0, 10, 40, 500] {
            assert_eq!(select_config(&analysis(lines), ViewportClass::Mobile).target_columns, 1);
            assert_eq!(select_config(&analysis(lines), ViewportClass::Tablet).target_columns, 2);
            assert_eq!(select_config(&analysis(lines), ViewportClass::Desktop).target_columns, 3);
            assert_eq!(select_config(&analysis(lines), ViewportClass::Print).target_columns, 2);
        }
    }

    #[test]
    fn test_font_size_always_within_clamp() {
        for viewport in ViewportClass::ALL {
            let profile = viewport.profile();
            for lines in [0, 1, 14, 15, 30, 31, 50, 51, 80, 81, 500, 100_000] {
                for is_complex in [false, true] {
                    let a = Analysis { is_complex, ..analysis(lines) };
                    let config = select_config(&a, viewport);
                    assert!(
                        config.font_size >= profile.min_font && config.font_size <= profile.max_font,
                        "{} with {} lines gave {}",
                        viewport,
                        lines,
                        config.font_size
                    );
                }
            }
        }
    }

    #[test]
    fn test_short_songs_grow() {
        let config = select_config(&analysis(5), ViewportClass::Desktop);
        assert_eq!(config.font_size, 18.0);
        // Mobile growth hits the max clamp
        let config = select_config(&analysis(0), ViewportClass::Mobile);
        assert_eq!(config.font_size, 16.0);
    }

    #[test]
    fn test_long_songs_shrink() {
        assert_eq!(select_config(&analysis(20), ViewportClass::Desktop).font_size, 16.0);
        assert_eq!(select_config(&analysis(31), ViewportClass::Desktop).font_size, 15.0);
        assert_eq!(select_config(&analysis(51), ViewportClass::Desktop).font_size, 14.0);
        assert_eq!(select_config(&analysis(81), ViewportClass::Desktop).font_size, 13.0);
        assert_eq!(select_config(&analysis(500), ViewportClass::Print).font_size, 9.0);
    }

    #[test]
    fn test_complex_songs_shrink_slightly() {
        let plain = select_config(&analysis(20), ViewportClass::Tablet);
        let complex = select_config(&Analysis { is_complex: true, ..analysis(20) }, ViewportClass::Tablet);
        assert_eq!(plain.font_size - complex.font_size, 0.5);
    }

    #[test]
    fn test_very_long_songs_tighten_spacing() {
        let normal = select_config(&analysis(40), ViewportClass::Desktop);
        let long = select_config(&analysis(60), ViewportClass::Desktop);
        assert!(long.gap < normal.gap);
        assert!(long.line_height < normal.line_height);
    }

    #[test]
    fn test_viewport_names() {
        assert_eq!("mobile".parse::<ViewportClass>().unwrap(), ViewportClass::Mobile);
        assert_eq!(" Print ".parse::<ViewportClass>().unwrap(), ViewportClass::Print);
        assert_eq!(ViewportClass::Tablet.to_string(), "tablet");
        assert!(matches!(
            "watch".parse::<ViewportClass>(),
            Err(SheetError::UnknownViewport(_))
        ));
    }
}
