//! Chord symbol transposition.
//!
//! Shifts the root of a chord symbol (`C`, `F#m7`, `Bbsus4`, `Ab/C`) by a number
//! of semitones. The root is one pitch letter plus an optional `#` or `b`;
//! everything after it is the modifier and is kept exactly as written.
//!
//! Flat roots are respelled as sharps before shifting, so results always use
//! sharp spelling. Anything that does not start with a recognizable root is
//! returned untouched.

/// Chromatic scale used for all transposed roots, starting at C.
const CHROMATIC: [&str; 12] = [
    "C", "C#", "D", "D#", "E", "F", "F#", "G", "G#", "A", "A#", "B",
];

/// Tokens that appear in chord lines but are not chords.
const PASS_THROUGH: [&str; 5] = ["N.C.", "-", "–", "(E)", "X"];

/// Respell a flat (or theoretical) root as its sharp/natural equivalent.
fn normalize_root(root: &str) -> &str {
    match root {
        "Db" => "C#",
        "Eb" => "D#",
        "Gb" => "F#",
        "Ab" => "G#",
        "Bb" => "A#",
        "Cb" => "B",
        "Fb" => "E",
        other => other,
    }
}

/// Index of a normalized root in the chromatic scale.
fn root_to_semitone(root: &str) -> Option<i32> {
    CHROMATIC.iter().position(|&n| n == root).map(|i| i as i32)
}

/// Split a chord symbol into `(root, modifier)`.
///
/// Returns `None` when the symbol does not start with a pitch letter A-G.
fn split_chord(symbol: &str) -> Option<(&str, &str)> {
    let mut chars = symbol.char_indices();
    let (_, letter) = chars.next()?;
    if !('A'..='G').contains(&letter) {
        return None;
    }

    // Pitch letters are ASCII, so the accidental (if any) starts at byte 1
    let root_len = match chars.next() {
        Some((_, '#')) | Some((_, 'b')) => 2,
        _ => 1,
    };
    Some(symbol.split_at(root_len))
}

fn is_pass_through(symbol: &str) -> bool {
    let trimmed = symbol.trim();
    trimmed.is_empty() || PASS_THROUGH.contains(&trimmed)
}

/// Transpose a single chord symbol by `semitones` (positive = up).
///
/// # Rules
/// - Pass-through tokens (`N.C.`, `-`, `–`, `(E)`, `X`, empty) come back unchanged
/// - A shift that is a whole number of octaves returns the input unchanged
/// - Unrecognized roots come back unchanged (never an error)
/// - The modifier after the root is preserved verbatim
///
/// # Examples
/// ```
/// use chordsheet::transpose_chord;
///
/// assert_eq!(transpose_chord("C", 1), "C#");
/// assert_eq!(transpose_chord("Bb", 1), "B");
/// assert_eq!(transpose_chord("F#m7", -2), "Em7");
/// assert_eq!(transpose_chord("Asus4", 3), "Csus4");
/// assert_eq!(transpose_chord("N.C.", 5), "N.C.");
/// ```
pub fn transpose_chord(symbol: &str, semitones: i32) -> String {
    if semitones.rem_euclid(12) == 0 || is_pass_through(symbol) {
        return symbol.to_string();
    }

    let Some((root, modifier)) = split_chord(symbol) else {
        return symbol.to_string();
    };
    let Some(index) = root_to_semitone(normalize_root(root)) else {
        return symbol.to_string();
    };

    let new_index = ((index + semitones.rem_euclid(12)) % 12) as usize;
    format!("{}{}", CHROMATIC[new_index], modifier)
}

/// Transpose a key label for display next to the song title.
///
/// Keys follow the same spelling rules as chords (`Am` → `Bm` up two, `Eb` → `E` up one).
pub fn transpose_key(key: &str, semitones: i32) -> String {
    transpose_chord(key.trim(), semitones)
}

/// Fold a semitone offset into `-11..=11`, keeping its direction.
///
/// Twelve semitones up or down is the same key, so the viewer's transpose
/// controls wrap back to zero instead of counting octaves.
pub fn normalize_semitones(semitones: i32) -> i32 {
    semitones % 12
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_basic_shifts() {
        assert_eq!(transpose_chord("C", 1), "C#");
        assert_eq!(transpose_chord("C", 2), "D");
        assert_eq!(transpose_chord("B", 1), "C");
        assert_eq!(transpose_chord("C", -1), "B");
        assert_eq!(transpose_chord("E", 1), "F");
    }

    #[test]
    fn test_full_cycle_identity() {
        assert_eq!(transpose_chord("C", 12), "C");
        assert_eq!(transpose_chord("C", -24), "C");
        assert_eq!(transpose_chord("Gbmaj7", 0), "Gbmaj7");
        assert_eq!(transpose_chord("Am", 0), "Am");
    }

    #[test]
    fn test_flat_normalization() {
        assert_eq!(transpose_chord("Bb", 1), "B");
        assert_eq!(transpose_chord("Bb", 2), "C");
        assert_eq!(transpose_chord("Eb", 1), "E");
        assert_eq!(transpose_chord("Db", -1), "C");
        assert_eq!(transpose_chord("Ab7", 1), "A7");
        assert_eq!(transpose_chord("Cb", 1), "C");
        assert_eq!(transpose_chord("Fb", 1), "F");
    }

    #[test]
    fn test_modifier_preserved() {
        assert_eq!(transpose_chord("F#m7", 1), "Gm7");
        assert_eq!(transpose_chord("Csus4", 7), "Gsus4");
        assert_eq!(transpose_chord("Dmaj7/F#", 2), "Emaj7/F#");
        assert_eq!(transpose_chord("Bbm", 2), "Cm");
        assert_eq!(transpose_chord("Gadd9", -2), "Fadd9");
    }

    #[test]
    fn test_pass_through_tokens() {
        for token in ["N.C.", "-", "–", "(E)", "", "   ", "X"] {
            for n in -13..=13 {
                assert_eq!(transpose_chord(token, n), token, "token {:?} shifted by {}", token, n);
            }
        }
    }

    #[test]
    fn test_unrecognized_roots_fail_open() {
        assert_eq!(transpose_chord("H7", 3), "H7");
        assert_eq!(transpose_chord("am", 3), "am");
        assert_eq!(transpose_chord("E#", 1), "E#");
        assert_eq!(transpose_chord("(Am)", 2), "(Am)");
        assert_eq!(transpose_chord("ñ", 2), "ñ");
    }

    #[test]
    fn test_round_trip_sharp_spelled_chords() {
        let chords = ["C", "C#m", "D7", "D#dim", "Esus2", "F", "F#m7b5", "G/B", "G#", "Am", "A#maj7", "B"];
        for chord in chords {
            for n in -25..=25 {
                let there = transpose_chord(chord, n);
                assert_eq!(transpose_chord(&there, -n), chord, "{} by {}", chord, n);
            }
        }
    }

    #[test]
    fn test_large_offsets_wrap() {
        assert_eq!(transpose_chord("C", 13), "C#");
        assert_eq!(transpose_chord("C", -13), "B");
        assert_eq!(transpose_chord("A", 1_000_003), transpose_chord("A", 1_000_003 % 12));
        // i32::MAX is 7 mod 12, i32::MIN is 4 mod 12
        assert_eq!(transpose_chord("B", i32::MAX), "F#");
        assert_eq!(transpose_chord("B", i32::MIN), "D#");
        assert_eq!(transpose_chord("C", i32::MIN + 1), "F");
        assert_eq!(transpose_key("Bb", i32::MAX), "F");
    }

    #[test]
    fn test_transpose_key() {
        assert_eq!(transpose_key("G", 2), "A");
        assert_eq!(transpose_key(" Am ", 2), "Bm");
        assert_eq!(transpose_key("", 4), "");
    }

    #[test]
    fn test_normalize_semitones() {
        assert_eq!(normalize_semitones(0), 0);
        assert_eq!(normalize_semitones(11), 11);
        assert_eq!(normalize_semitones(12), 0);
        assert_eq!(normalize_semitones(13), 1);
        assert_eq!(normalize_semitones(-12), 0);
        assert_eq!(normalize_semitones(-14), -2);
    }
}
