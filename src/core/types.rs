use std::fmt;
use std::hash::{Hash, Hasher};

use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Opaque unique identifier for a track
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct TrackId(pub Uuid);

impl TrackId {
    pub fn generate() -> Self {
        TrackId(Uuid::new_v4())
    }

    pub fn value(&self) -> Uuid {
        self.0
    }
}

impl From<Uuid> for TrackId {
    fn from(id: Uuid) -> Self {
        TrackId(id)
    }
}

impl fmt::Display for TrackId {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Catalog record: title, artist and duration plus unique identification.
/// Identity lives entirely in the id; equality and hashing ignore metadata,
/// so two copies of the same track compare equal everywhere.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Track {
    pub id: TrackId,
    pub title: String,
    pub artist: String,
    pub duration_secs: u32,
}

impl Track {
    /// Create a track with a freshly generated id.
    /// Title and artist are trimmed; negative durations clamp to zero.
    pub fn new(title: &str, artist: &str, duration_secs: i64) -> Self {
        Self::with_id(TrackId::generate(), title, artist, duration_secs)
    }

    /// Create a track under a caller-supplied id (e.g. replayed from an
    /// external source). Same normalization as `new`.
    pub fn with_id(id: TrackId, title: &str, artist: &str, duration_secs: i64) -> Self {
        Track {
            id,
            title: title.trim().to_string(),
            artist: artist.trim().to_string(),
            duration_secs: duration_secs.clamp(0, u32::MAX as i64) as u32,
        }
    }

    /// Human-readable duration, M:SS
    pub fn formatted_duration(&self) -> String {
        format!("{}:{:02}", self.duration_secs / 60, self.duration_secs % 60)
    }
}

impl PartialEq for Track {
    fn eq(&self, other: &Self) -> bool {
        self.id == other.id
    }
}

impl Eq for Track {}

impl Hash for Track {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.id.hash(state);
    }
}

impl fmt::Display for Track {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(
            f,
            "{} by {} ({})",
            self.title,
            self.artist,
            self.formatted_duration()
        )
    }
}
