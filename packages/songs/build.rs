use std::env;
use std::fs;
use std::path::Path;
use walkdir::WalkDir;

fn main() {
    let out_dir = env::var("OUT_DIR").expect("OUT_DIR is set by cargo");
    let dest_path = Path::new(&out_dir).join("songs.rs");
    let manifest_dir = env::var("CARGO_MANIFEST_DIR").expect("CARGO_MANIFEST_DIR is set by cargo");
    let songs_dir = Path::new(&manifest_dir).join("songs");

    let mut entries: Vec<(String, String)> = Vec::new();
    if songs_dir.exists() {
        for entry in WalkDir::new(&songs_dir)
            .into_iter()
            .filter_map(|e| e.ok())
            .filter(|e| e.path().extension().map_or(false, |ext| ext == "json"))
        {
            let path = entry.path();
            let relative_path = path.strip_prefix(&songs_dir).expect("walked path is under songs/");
            let name = relative_path
                .with_extension("")
                .to_string_lossy()
                .replace('\\', "/");
            entries.push((name, path.to_string_lossy().into_owned()));
        }
    }
    // Stable order regardless of filesystem iteration
    entries.sort();

    let mut code = String::new();
    code.push_str("/// Embedded song documents as (name, json) pairs\n");
    code.push_str("pub static SONGS: &[(&str, &str)] = &[\n");
    for (name, path) in &entries {
        code.push_str(&format!("    ({:?}, include_str!({:?})),\n", name, path));
    }
    code.push_str("];\n");

    fs::write(&dest_path, code).expect("failed to write songs.rs");

    println!("cargo:rerun-if-changed=songs");
}
