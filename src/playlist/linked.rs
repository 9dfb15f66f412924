use serde::Serialize;

use crate::core::error::{Error, Result};
use crate::core::types::{Track, TrackId};

/// Arena slot. Sentinels and vacated slots hold `None`; links are arena
/// indices, so reordering never touches a payload.
#[derive(Debug)]
struct Slot {
    track: Option<Track>,
    prev: usize,
    next: usize,
}

/// Doubly-linked playback order, backed by an index arena.
///
/// Two permanent sentinel slots bound the sequence so insertion and removal
/// never special-case the ends. Vacated slots go on a free list and are
/// reused by later insertions.
///
/// - insert/remove at the ends: O(1)
/// - interior access: O(min(i, n - i)), walking from the nearer end
/// - reverse: O(n), link swaps only
#[derive(Debug)]
pub struct Playlist {
    slots: Vec<Slot>,
    free: Vec<usize>,
    head: usize,
    tail: usize,
    len: usize,
}

/// Aggregate playlist figures for dashboards
#[derive(Debug, Clone, Serialize)]
pub struct PlaylistStats {
    pub total_tracks: usize,
    pub total_duration_secs: u64,
    pub average_duration_secs: f64,
    pub longest: Option<Track>,
    pub shortest: Option<Track>,
}

impl Playlist {
    pub fn new() -> Self {
        Playlist {
            slots: vec![
                Slot {
                    track: None,
                    prev: 0,
                    next: 1,
                },
                Slot {
                    track: None,
                    prev: 0,
                    next: 1,
                },
            ],
            free: Vec::new(),
            head: 0,
            tail: 1,
            len: 0,
        }
    }

    /// Insert at `position` (`None` = append). Positions past the end clamp
    /// to append; position 0 prepends.
    pub fn insert(&mut self, track: Track, position: Option<usize>) {
        let node = self.alloc(track);

        match position {
            None => self.link_before(node, self.tail),
            Some(pos) if pos >= self.len => self.link_before(node, self.tail),
            Some(0) => {
                let first = self.slots[self.head].next;
                self.link_before(node, first);
            }
            Some(pos) => {
                // node_at cannot miss: 0 < pos < len here
                if let Some(at) = self.node_at(pos) {
                    self.link_before(node, at);
                } else {
                    self.link_before(node, self.tail);
                }
            }
        }

        self.len += 1;
    }

    /// Append to the end, O(1)
    pub fn push(&mut self, track: Track) {
        self.insert(track, None);
    }

    /// Remove and return the track at `index`
    pub fn remove(&mut self, index: usize) -> Result<Track> {
        let node = self
            .node_at(index)
            .ok_or_else(|| Error::not_found(format!("no track at index {}", index)))?;

        self.unlink(node);
        self.free.push(node);
        self.len -= 1;

        self.slots[node]
            .track
            .take()
            .ok_or_else(|| Error::not_found(format!("no track at index {}", index)))
    }

    /// Move the track at `from` so it ends up at index `to`. Remove then
    /// reinsert; when `to` is the last index the reinsert clamps to append,
    /// which is exactly the final position. `move(a, b)` then `move(b, a)`
    /// round-trips.
    pub fn move_track(&mut self, from: usize, to: usize) -> Result<()> {
        if from >= self.len || to >= self.len {
            return Err(Error::invalid_argument(format!(
                "move {} -> {} out of range for length {}",
                from, to, self.len
            )));
        }
        if from == to {
            return Err(Error::invalid_argument(format!(
                "move source and target are both {}",
                from
            )));
        }

        let track = self.remove(from)?;
        self.insert(track, Some(to));
        Ok(())
    }

    /// Reverse traversal direction by swapping every slot's links and then
    /// swapping the two sentinel roles. No payload moves.
    pub fn reverse(&mut self) {
        if self.len <= 1 {
            return;
        }

        for slot in &mut self.slots {
            std::mem::swap(&mut slot.prev, &mut slot.next);
        }
        std::mem::swap(&mut self.head, &mut self.tail);
    }

    /// Iterate in playback order. Sentinels are never yielded.
    pub fn iter(&self) -> Iter<'_> {
        Iter {
            playlist: self,
            cursor: self.slots[self.head].next,
        }
    }

    /// Snapshot of the full ordering, O(n)
    pub fn tracks(&self) -> Vec<Track> {
        self.iter().cloned().collect()
    }

    pub fn get(&self, index: usize) -> Option<&Track> {
        let node = self.node_at(index)?;
        self.slots[node].track.as_ref()
    }

    /// Linear scan for a track's position. Callers needing O(1) id lookup
    /// go through the `TrackIndex` instead.
    pub fn position_of(&self, id: &TrackId) -> Option<usize> {
        self.iter().position(|track| track.id == *id)
    }

    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Drop every track and reset the arena to the two sentinels
    pub fn clear(&mut self) {
        *self = Playlist::new();
    }

    /// O(n) aggregate figures over the current ordering
    pub fn stats(&self) -> PlaylistStats {
        if self.len == 0 {
            return PlaylistStats {
                total_tracks: 0,
                total_duration_secs: 0,
                average_duration_secs: 0.0,
                longest: None,
                shortest: None,
            };
        }

        let mut total: u64 = 0;
        let mut longest: Option<&Track> = None;
        let mut shortest: Option<&Track> = None;

        for track in self.iter() {
            total += track.duration_secs as u64;
            if longest.map_or(true, |t| track.duration_secs > t.duration_secs) {
                longest = Some(track);
            }
            if shortest.map_or(true, |t| track.duration_secs < t.duration_secs) {
                shortest = Some(track);
            }
        }

        PlaylistStats {
            total_tracks: self.len,
            total_duration_secs: total,
            average_duration_secs: total as f64 / self.len as f64,
            longest: longest.cloned(),
            shortest: shortest.cloned(),
        }
    }

    /// Take a slot from the free list or grow the arena
    fn alloc(&mut self, track: Track) -> usize {
        match self.free.pop() {
            Some(idx) => {
                self.slots[idx].track = Some(track);
                idx
            }
            None => {
                self.slots.push(Slot {
                    track: Some(track),
                    prev: 0,
                    next: 0,
                });
                self.slots.len() - 1
            }
        }
    }

    /// Splice `node` into the chain immediately before `at`
    fn link_before(&mut self, node: usize, at: usize) {
        let prev = self.slots[at].prev;
        self.slots[node].prev = prev;
        self.slots[node].next = at;
        self.slots[prev].next = node;
        self.slots[at].prev = node;
    }

    fn unlink(&mut self, node: usize) {
        let prev = self.slots[node].prev;
        let next = self.slots[node].next;
        self.slots[prev].next = next;
        self.slots[next].prev = prev;
    }

    /// Walk to the slot at `index`, starting from whichever end is closer.
    /// Halves the average walk versus always starting at the head.
    fn node_at(&self, index: usize) -> Option<usize> {
        if index >= self.len {
            return None;
        }

        if index < self.len / 2 {
            let mut cursor = self.slots[self.head].next;
            for _ in 0..index {
                cursor = self.slots[cursor].next;
            }
            Some(cursor)
        } else {
            let mut cursor = self.slots[self.tail].prev;
            for _ in 0..(self.len - index - 1) {
                cursor = self.slots[cursor].prev;
            }
            Some(cursor)
        }
    }
}

impl Default for Playlist {
    fn default() -> Self {
        Playlist::new()
    }
}

pub struct Iter<'a> {
    playlist: &'a Playlist,
    cursor: usize,
}

impl<'a> Iterator for Iter<'a> {
    type Item = &'a Track;

    fn next(&mut self) -> Option<Self::Item> {
        if self.cursor == self.playlist.tail {
            return None;
        }
        let slot = &self.playlist.slots[self.cursor];
        self.cursor = slot.next;
        slot.track.as_ref()
    }
}
