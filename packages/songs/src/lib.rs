include!(concat!(env!("OUT_DIR"), "/songs.rs"));

/// A song document with its library name
#[derive(Debug, Clone)]
pub struct SongFile {
    pub name: String,
    pub json: String,
}

/// Get all embedded songs
pub fn get_all_songs() -> Vec<SongFile> {
    SONGS
        .iter()
        .map(|(name, json)| SongFile {
            name: name.to_string(),
            json: json.to_string(),
        })
        .collect()
}

/// Get a song by name (file name without `.json`)
pub fn get_song(name: &str) -> Option<SongFile> {
    SONGS
        .iter()
        .find(|(n, _)| *n == name)
        .map(|(name, json)| SongFile {
            name: name.to_string(),
            json: json.to_string(),
        })
}

/// List all song names
pub fn list_songs() -> Vec<&'static str> {
    SONGS.iter().map(|(name, _)| *name).collect()
}
