use std::collections::HashMap;

use chrono::{DateTime, Utc};
use serde::Serialize;

use crate::core::types::{Track, TrackId};

/// Read-only aggregate view of the whole catalog, assembled on demand for
/// dashboards. Pure composition over the stores; nothing here is cached.
#[derive(Debug, Clone, Serialize)]
pub struct CatalogSnapshot {
    /// Full track list in playback order
    pub tracks: Vec<Track>,
    /// Most recent plays, newest first
    pub history: Vec<Track>,
    /// Every rated id and its rating
    pub ratings: HashMap<TrackId, u8>,
    /// Blocked artist names, sorted
    pub blocked_artists: Vec<String>,
    pub analytics: Analytics,
    pub timestamp: DateTime<Utc>,
}

#[derive(Debug, Clone, Serialize)]
pub struct Analytics {
    pub total_tracks: usize,
    pub total_duration_secs: u64,
    /// Top tracks by duration, longest first
    pub longest_tracks: Vec<Track>,
    /// Bucket sizes for ratings 1 through 5
    pub rating_distribution: [usize; 5],
    pub total_plays: u64,
    pub blocked_artist_count: usize,
}
