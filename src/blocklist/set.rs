use std::collections::HashSet;

use chrono::{DateTime, Utc};
use serde::Serialize;

use crate::core::error::{Error, Result};

/// Case- and whitespace-insensitive set of blocked artist names. The
/// canonical stored form is trimmed + lowercased; all operations are O(1)
/// average.
#[derive(Debug, Default)]
pub struct ArtistBlocklist {
    blocked: HashSet<String>,
}

/// Snapshot of the blocklist for external backup/display
#[derive(Debug, Clone, Serialize)]
pub struct BlocklistExport {
    pub blocked_artists: Vec<String>,
    pub count: usize,
    pub exported_at: DateTime<Utc>,
}

fn normalize(name: &str) -> String {
    name.trim().to_lowercase()
}

impl ArtistBlocklist {
    pub fn new() -> Self {
        ArtistBlocklist::default()
    }

    /// Block an artist. Empty names are invalid; blocking an
    /// already-blocked name changes nothing and says so.
    pub fn block(&mut self, artist: &str) -> Result<()> {
        let key = normalize(artist);
        if key.is_empty() {
            return Err(Error::invalid_argument("artist name is empty"));
        }
        if !self.blocked.insert(key) {
            return Err(Error::no_op(format!("{} already blocked", artist.trim())));
        }
        Ok(())
    }

    pub fn unblock(&mut self, artist: &str) -> Result<()> {
        let key = normalize(artist);
        if !self.blocked.remove(&key) {
            return Err(Error::no_op(format!("{} was not blocked", artist.trim())));
        }
        Ok(())
    }

    pub fn is_blocked(&self, artist: &str) -> bool {
        let key = normalize(artist);
        !key.is_empty() && self.blocked.contains(&key)
    }

    /// Blocked names in sorted order for deterministic display
    pub fn blocked_artists(&self) -> Vec<String> {
        let mut names: Vec<String> = self.blocked.iter().cloned().collect();
        names.sort();
        names
    }

    /// Block several names; returns how many actually changed state
    pub fn block_many<'a>(&mut self, artists: impl IntoIterator<Item = &'a str>) -> usize {
        artists
            .into_iter()
            .filter(|artist| self.block(artist).is_ok())
            .count()
    }

    /// Unblock several names; returns how many actually changed state
    pub fn unblock_many<'a>(&mut self, artists: impl IntoIterator<Item = &'a str>) -> usize {
        artists
            .into_iter()
            .filter(|artist| self.unblock(artist).is_ok())
            .count()
    }

    /// Blocked names related to `artist` by mutual substring, for
    /// suggesting follow-up blocks
    pub fn similar_to(&self, artist: &str) -> Vec<String> {
        let query = normalize(artist);
        if query.is_empty() {
            return Vec::new();
        }

        let mut matches: Vec<String> = self
            .blocked
            .iter()
            .filter(|name| name.contains(&query) || query.contains(name.as_str()))
            .cloned()
            .collect();
        matches.sort();
        matches
    }

    pub fn export(&self) -> BlocklistExport {
        let names = self.blocked_artists();
        BlocklistExport {
            count: names.len(),
            blocked_artists: names,
            exported_at: Utc::now(),
        }
    }

    pub fn len(&self) -> usize {
        self.blocked.len()
    }

    pub fn is_empty(&self) -> bool {
        self.blocked.is_empty()
    }

    pub fn clear(&mut self) {
        self.blocked.clear();
    }
}
