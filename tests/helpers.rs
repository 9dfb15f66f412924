use melodex::Track;

/// Shorthand track constructor for fixtures
pub fn track(title: &str, artist: &str, duration_secs: i64) -> Track {
    Track::new(title, artist, duration_secs)
}

/// Titles of a track list, for order assertions
pub fn titles(tracks: &[Track]) -> Vec<&str> {
    tracks.iter().map(|t| t.title.as_str()).collect()
}
