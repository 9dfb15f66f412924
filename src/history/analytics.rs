use std::collections::{HashMap, HashSet};

use serde::Serialize;

use crate::core::types::Track;
use crate::history::log::PlaybackHistory;

/// A track and how often it appears in the visible log
#[derive(Debug, Clone, Serialize)]
pub struct PlayCount {
    pub track: Track,
    pub plays: usize,
}

/// An artist and their play count within a recent window
#[derive(Debug, Clone, Serialize)]
pub struct ArtistPlays {
    pub artist: String,
    pub plays: usize,
}

/// Aggregate listening figures over the visible log
#[derive(Debug, Clone, Serialize)]
pub struct ListeningPatterns {
    pub total_listening_secs: u64,
    pub average_track_secs: f64,
    pub unique_tracks: usize,
    pub unique_artists: usize,
    pub total_plays: u64,
    pub history_len: usize,
}

/// Derived read-only views. Each is an O(n) scan over the current log
/// contents; nothing is persisted beyond the play counter.
impl PlaybackHistory {
    /// Most frequently played tracks still visible in the log, ties broken
    /// by first-played order
    pub fn most_played(&self, count: usize) -> Vec<PlayCount> {
        let mut order: Vec<PlayCount> = Vec::new();
        let mut positions: HashMap<_, usize> = HashMap::new();

        for track in self.entries() {
            match positions.get(&track.id) {
                Some(&pos) => order[pos].plays += 1,
                None => {
                    positions.insert(track.id, order.len());
                    order.push(PlayCount {
                        track: track.clone(),
                        plays: 1,
                    });
                }
            }
        }

        order.sort_by(|a, b| b.plays.cmp(&a.plays));
        order.truncate(count);
        order
    }

    /// Artist play counts over the `count` most recent entries, sorted by
    /// count descending
    pub fn recent_artists(&self, count: usize) -> Vec<ArtistPlays> {
        let recent = self.recent(count);

        let mut order: Vec<ArtistPlays> = Vec::new();
        let mut positions: HashMap<String, usize> = HashMap::new();

        for track in &recent {
            match positions.get(&track.artist) {
                Some(&pos) => order[pos].plays += 1,
                None => {
                    positions.insert(track.artist.clone(), order.len());
                    order.push(ArtistPlays {
                        artist: track.artist.clone(),
                        plays: 1,
                    });
                }
            }
        }

        order.sort_by(|a, b| b.plays.cmp(&a.plays));
        order
    }

    pub fn listening_patterns(&self) -> ListeningPatterns {
        if self.is_empty() {
            return ListeningPatterns {
                total_listening_secs: 0,
                average_track_secs: 0.0,
                unique_tracks: 0,
                unique_artists: 0,
                total_plays: self.total_plays(),
                history_len: 0,
            };
        }

        let mut total: u64 = 0;
        let mut tracks = HashSet::new();
        let mut artists = HashSet::new();

        for track in self.entries() {
            total += track.duration_secs as u64;
            tracks.insert(track.id);
            artists.insert(track.artist.as_str());
        }

        ListeningPatterns {
            total_listening_secs: total,
            average_track_secs: total as f64 / self.len() as f64,
            unique_tracks: tracks.len(),
            unique_artists: artists.len(),
            total_plays: self.total_plays(),
            history_len: self.len(),
        }
    }
}
