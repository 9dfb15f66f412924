use std::collections::VecDeque;

use crate::core::error::{Error, Result};
use crate::core::types::Track;

pub const DEFAULT_CAPACITY: usize = 50;

/// Bounded play log, newest at the back. When capacity is exceeded the
/// oldest entry is evicted. `total_plays` is monotone: eviction and undo
/// remove entries from the visible log but never erase the fact that a play
/// happened.
#[derive(Debug)]
pub struct PlaybackHistory {
    entries: VecDeque<Track>,
    capacity: usize,
    total_plays: u64,
}

impl PlaybackHistory {
    pub fn new() -> Self {
        Self::with_capacity(DEFAULT_CAPACITY)
    }

    pub fn with_capacity(capacity: usize) -> Self {
        PlaybackHistory {
            entries: VecDeque::with_capacity(capacity.min(DEFAULT_CAPACITY)),
            capacity,
            total_plays: 0,
        }
    }

    /// Record a play: push, bump the counter, evict the oldest entry once
    /// past capacity. O(1) amortized.
    pub fn record_play(&mut self, track: Track) {
        self.entries.push_back(track);
        self.total_plays += 1;

        if self.entries.len() > self.capacity {
            self.entries.pop_front();
        }
    }

    /// Pop the most recent play (LIFO). The total-play counter is
    /// untouched.
    pub fn undo_last(&mut self) -> Result<Track> {
        self.entries
            .pop_back()
            .ok_or_else(|| Error::not_found("history is empty"))
    }

    /// Most recent play without removing it
    pub fn peek_last(&self) -> Option<&Track> {
        self.entries.back()
    }

    /// Up to `n` most recent plays, most recent first
    pub fn recent(&self, n: usize) -> Vec<Track> {
        self.entries.iter().rev().take(n).cloned().collect()
    }

    /// Everything still in the log, most recent first
    pub fn full_history(&self) -> Vec<Track> {
        self.entries.iter().rev().cloned().collect()
    }

    /// Oldest-to-newest view for internal scans
    pub(crate) fn entries(&self) -> impl Iterator<Item = &Track> {
        self.entries.iter()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }

    /// Plays ever recorded, including evicted and undone entries
    pub fn total_plays(&self) -> u64 {
        self.total_plays
    }

    /// Clears the visible log; the total-play counter survives
    pub fn clear(&mut self) {
        self.entries.clear();
    }
}

impl Default for PlaybackHistory {
    fn default() -> Self {
        PlaybackHistory::new()
    }
}
