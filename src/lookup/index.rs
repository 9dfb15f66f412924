use std::collections::{HashMap, HashSet};

use crate::core::error::{Error, Result};
use crate::core::types::{Track, TrackId};
use crate::lookup::fuzzy::{ScoredTrack, rank, relevance_score};

/// Multi-key lookup over the catalog: id -> track plus title and artist
/// buckets for search. Keys in the secondary maps are trimmed + lowercased;
/// several tracks may share a title or artist, so buckets are lists.
///
/// The index never observes playlist mutations on its own; the catalog
/// facade keeps the two in sync per logical operation.
#[derive(Debug, Default)]
pub struct TrackIndex {
    by_id: HashMap<TrackId, Track>,
    by_title: HashMap<String, Vec<Track>>,
    by_artist: HashMap<String, Vec<Track>>,
}

fn normalize(text: &str) -> String {
    text.trim().to_lowercase()
}

impl TrackIndex {
    pub fn new() -> Self {
        TrackIndex::default()
    }

    /// Insert into all three maps. Duplicate ids are refused, never
    /// overwritten.
    pub fn insert(&mut self, track: Track) -> Result<()> {
        if self.by_id.contains_key(&track.id) {
            return Err(Error::conflict(format!(
                "track {} already indexed",
                track.id
            )));
        }

        self.by_title
            .entry(normalize(&track.title))
            .or_default()
            .push(track.clone());
        self.by_artist
            .entry(normalize(&track.artist))
            .or_default()
            .push(track.clone());
        self.by_id.insert(track.id, track);
        Ok(())
    }

    /// Remove from all three maps; empty buckets are deleted so no key
    /// outlives its last track.
    pub fn remove(&mut self, id: &TrackId) -> Result<Track> {
        let track = self
            .by_id
            .remove(id)
            .ok_or_else(|| Error::not_found(format!("track {} not indexed", id)))?;

        let title_key = normalize(&track.title);
        if let Some(bucket) = self.by_title.get_mut(&title_key) {
            bucket.retain(|t| t.id != *id);
            if bucket.is_empty() {
                self.by_title.remove(&title_key);
            }
        }

        let artist_key = normalize(&track.artist);
        if let Some(bucket) = self.by_artist.get_mut(&artist_key) {
            bucket.retain(|t| t.id != *id);
            if bucket.is_empty() {
                self.by_artist.remove(&artist_key);
            }
        }

        Ok(track)
    }

    pub fn get(&self, id: &TrackId) -> Option<&Track> {
        self.by_id.get(id)
    }

    pub fn contains(&self, id: &TrackId) -> bool {
        self.by_id.contains_key(id)
    }

    /// Exact-title bucket first, then every bucket whose key contains the
    /// query as a substring, in sorted key order so repeated queries return
    /// the same ordering. Deduplicated by id, first-seen order kept.
    pub fn search_by_title(&self, title: &str) -> Vec<Track> {
        let query = normalize(title);
        if query.is_empty() {
            return Vec::new();
        }

        let mut results: Vec<Track> = Vec::new();
        if let Some(exact) = self.by_title.get(&query) {
            results.extend(exact.iter().cloned());
        }

        for key in sorted_matching_keys(&self.by_title, &query, true) {
            results.extend(self.by_title[key].iter().cloned());
        }

        dedup_by_id(results)
    }

    /// Exact artist bucket, copied out
    pub fn search_by_artist(&self, artist: &str) -> Vec<Track> {
        if artist.trim().is_empty() {
            return Vec::new();
        }
        self.by_artist
            .get(&normalize(artist))
            .cloned()
            .unwrap_or_default()
    }

    /// Substring scan over artist keys, in sorted key order
    pub fn search_by_partial_artist(&self, artist: &str) -> Vec<Track> {
        let query = normalize(artist);
        if query.is_empty() {
            return Vec::new();
        }

        let mut results = Vec::new();
        for key in sorted_matching_keys(&self.by_artist, &query, false) {
            results.extend(self.by_artist[key].iter().cloned());
        }
        results
    }

    /// Union of title and artist substring matches, ranked by relevance.
    /// Each candidate scores as the better of its title and artist scores.
    pub fn fuzzy_search(&self, query: &str) -> Vec<ScoredTrack> {
        let normalized = normalize(query);
        if normalized.is_empty() {
            return Vec::new();
        }

        let mut candidates = self.search_by_title(&normalized);
        candidates.extend(self.search_by_partial_artist(&normalized));

        let mut seen = HashSet::new();
        let scored: Vec<ScoredTrack> = candidates
            .into_iter()
            .filter(|track| seen.insert(track.id))
            .map(|track| {
                let title_score = relevance_score(&normalized, &track.title.to_lowercase());
                let artist_score = relevance_score(&normalized, &track.artist.to_lowercase());
                ScoredTrack {
                    track,
                    score: title_score.max(artist_score),
                }
            })
            .collect();

        rank(scored)
    }

    pub fn all_tracks(&self) -> Vec<Track> {
        self.by_id.values().cloned().collect()
    }

    /// All distinct (normalized) artist keys
    pub fn artists(&self) -> Vec<String> {
        self.by_artist.keys().cloned().collect()
    }

    pub fn len(&self) -> usize {
        self.by_id.len()
    }

    pub fn is_empty(&self) -> bool {
        self.by_id.is_empty()
    }

    pub fn clear(&mut self) {
        self.by_id.clear();
        self.by_title.clear();
        self.by_artist.clear();
    }
}

/// Map keys containing `query` as a substring, sorted. Hash map iteration
/// order varies run to run; searches and fuzzy ranking tie-break on
/// collection order, so the scan has to be deterministic.
fn sorted_matching_keys<'a>(
    map: &'a HashMap<String, Vec<Track>>,
    query: &str,
    skip_exact: bool,
) -> Vec<&'a String> {
    let mut keys: Vec<&String> = map
        .keys()
        .filter(|stored| stored.contains(query) && !(skip_exact && stored.as_str() == query))
        .collect();
    keys.sort();
    keys
}

fn dedup_by_id(tracks: Vec<Track>) -> Vec<Track> {
    let mut seen = HashSet::new();
    tracks
        .into_iter()
        .filter(|track| seen.insert(track.id))
        .collect()
}
