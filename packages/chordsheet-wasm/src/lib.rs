use serde::Serialize;
use wasm_bindgen::prelude::*;

use chordsheet::{SheetError, ViewportClass};

#[derive(Serialize)]
struct LayoutError {
    message: String,
    line: Option<usize>,
    column: Option<usize>,
}

#[derive(Serialize)]
struct SongEntry {
    name: String,
    artist: String,
    title: String,
    #[serde(rename = "originalKey")]
    original_key: String,
}

fn error_to_layout_error(e: SheetError) -> LayoutError {
    match e {
        SheetError::ParseError { line, column, message } => LayoutError {
            message,
            line: Some(line),
            column: Some(column),
        },
        other => LayoutError {
            message: other.to_string(),
            line: None,
            column: None,
        },
    }
}

fn to_js_error(e: SheetError) -> JsValue {
    let error = error_to_layout_error(e);
    let json = serde_json::to_string(&error).unwrap_or_else(|_| error.message.clone());
    JsValue::from_str(&json)
}

fn resolve_viewport(width: f64, height: f64, printing: bool) -> ViewportClass {
    if printing {
        ViewportClass::Print
    } else {
        chordsheet::classify(width, height)
    }
}

/// Route `log` output to the browser console. Safe to call more than once.
#[wasm_bindgen(start)]
pub fn init() {
    let _ = console_log::init_with_level(log::Level::Info);
}

/// Lay out a song for the current window, returning the layout as JSON
#[wasm_bindgen]
pub fn layout_song(
    json: &str,
    semitones: i32,
    width: f64,
    height: f64,
    printing: bool,
) -> Result<String, JsValue> {
    let viewport = resolve_viewport(width, height, printing);
    let sheet = chordsheet::layout_song(json, viewport, semitones).map_err(to_js_error)?;
    serde_json::to_string(&sheet).map_err(|e| JsValue::from_str(&e.to_string()))
}

/// Lay out a song for a named viewport, returning a JS object
#[wasm_bindgen]
pub fn layout_song_for(json: &str, semitones: i32, viewport: &str) -> Result<JsValue, JsValue> {
    let viewport: ViewportClass = viewport.parse().map_err(to_js_error)?;
    let sheet = chordsheet::layout_song(json, viewport, semitones).map_err(to_js_error)?;
    serde_wasm_bindgen::to_value(&sheet).map_err(|e| JsValue::from_str(&e.to_string()))
}

/// Format a song as a plain-text chord chart (used for "copy as text")
#[wasm_bindgen]
pub fn render_text(json: &str, semitones: i32, viewport: &str) -> Result<String, JsValue> {
    let viewport: ViewportClass = viewport.parse().map_err(to_js_error)?;
    chordsheet::render_song_text(json, viewport, semitones).map_err(to_js_error)
}

#[wasm_bindgen]
pub fn transpose_chord(symbol: &str, semitones: i32) -> String {
    chordsheet::transpose_chord(symbol, semitones)
}

/// Viewport class name ("mobile", "tablet", "desktop") for a window size
#[wasm_bindgen]
pub fn classify_viewport(width: f64, height: f64) -> String {
    chordsheet::classify(width, height).to_string()
}

/// Filter a song listing (JSON array) and return the matches as JSON
#[wasm_bindgen]
pub fn search_catalog(listing_json: &str, query: &str) -> Result<String, JsValue> {
    let entries = chordsheet::parse_listing(listing_json).map_err(to_js_error)?;
    let found = chordsheet::search(&entries, query);
    serde_json::to_string(&found).map_err(|e| JsValue::from_str(&e.to_string()))
}

/// List the embedded sample songs with their titles
#[wasm_bindgen]
pub fn list_songs() -> String {
    let entries: Vec<SongEntry> = chordsheet_songs::get_all_songs()
        .into_iter()
        .filter_map(|file| {
            let song = match chordsheet::parse_song(&file.json) {
                Ok(song) => song,
                Err(e) => {
                    log::warn!("embedded song '{}' failed to parse: {}", file.name, e);
                    return None;
                }
            };
            Some(SongEntry {
                name: file.name,
                artist: song.artist,
                title: song.title,
                original_key: song.original_key,
            })
        })
        .collect();
    serde_json::to_string(&entries).unwrap_or_else(|_| "[]".to_string())
}

/// Raw JSON of an embedded sample song
#[wasm_bindgen]
pub fn get_song(name: &str) -> Option<String> {
    chordsheet_songs::get_song(name).map(|file| file.json)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_error_keeps_location() {
        let err = chordsheet::parse_song("{\n  \"title\": 5\n}").unwrap_err();
        let mapped = error_to_layout_error(err);
        assert_eq!(mapped.line, Some(2));
        assert!(mapped.column.is_some());
    }

    #[test]
    fn test_other_errors_have_no_location() {
        let mapped = error_to_layout_error(SheetError::UnknownViewport("watch".into()));
        assert!(mapped.message.contains("watch"));
        assert_eq!(mapped.line, None);
    }

    #[test]
    fn test_print_overrides_size() {
        assert_eq!(resolve_viewport(500.0, 800.0, true), ViewportClass::Print);
        assert_eq!(resolve_viewport(500.0, 800.0, false), ViewportClass::Mobile);
    }

    #[test]
    fn test_embedded_songs_lay_out() {
        for file in chordsheet_songs::get_all_songs() {
            let sheet = chordsheet::layout_song(&file.json, ViewportClass::Desktop, 0)
                .unwrap_or_else(|e| panic!("{} failed: {}", file.name, e));
            assert_eq!(sheet.columns.len(), 3, "{}", file.name);
        }
        let listed: Vec<serde_json::Value> = serde_json::from_str(&list_songs()).unwrap();
        assert_eq!(listed.len(), chordsheet_songs::list_songs().len());
    }
}
