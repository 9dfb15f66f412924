use std::collections::HashMap;

use crate::core::error::{Error, Result};
use crate::core::types::{Track, TrackId};

pub const MIN_RATING: u8 = 1;
pub const MAX_RATING: u8 = 5;

/// One rating level and the bucket of tracks holding it
#[derive(Debug)]
struct Node {
    rating: u8,
    tracks: Vec<Track>,
    left: Option<usize>,
    right: Option<usize>,
}

/// Binary search tree keyed by rating (1-5), arena-indexed: parents hold
/// child slot indices instead of owned pointers, which keeps the two-child
/// deletion logic free of ownership juggling.
///
/// A side table id -> rating gives O(1) reverse lookup. A track sits in at
/// most one bucket; re-rating is a full unrate followed by a fresh insert.
/// The tree is not self-balancing, so height is unbounded (at most five
/// distinct keys in practice).
#[derive(Debug, Default)]
pub struct RatingTree {
    nodes: Vec<Node>,
    free: Vec<usize>,
    root: Option<usize>,
    ratings: HashMap<TrackId, u8>,
}

impl RatingTree {
    pub fn new() -> Self {
        RatingTree::default()
    }

    /// Rate a track, replacing any previous rating. Out-of-range ratings
    /// are rejected before any state changes.
    pub fn rate(&mut self, track: Track, rating: u8) -> Result<()> {
        if !(MIN_RATING..=MAX_RATING).contains(&rating) {
            return Err(Error::invalid_argument(format!(
                "rating {} outside {}..={}",
                rating, MIN_RATING, MAX_RATING
            )));
        }

        if self.ratings.contains_key(&track.id) {
            // full delete-and-reinsert, never an in-place move
            self.unrate(&track.id)?;
        }

        let id = track.id;
        self.root = Some(self.insert_at(self.root, track, rating));
        self.ratings.insert(id, rating);
        Ok(())
    }

    /// Defensive copy of the bucket for `rating`; empty when no node
    /// matches (including out-of-range queries).
    pub fn lookup_by_rating(&self, rating: u8) -> Vec<Track> {
        let mut cursor = self.root;
        while let Some(idx) = cursor {
            let node = &self.nodes[idx];
            if rating == node.rating {
                return node.tracks.clone();
            }
            cursor = if rating < node.rating {
                node.left
            } else {
                node.right
            };
        }
        Vec::new()
    }

    /// Remove a track's rating. An emptied bucket node is deleted with
    /// standard BST deletion (in-order successor promotion for two
    /// children). Returns the rating that was removed.
    pub fn unrate(&mut self, id: &TrackId) -> Result<u8> {
        let rating = *self
            .ratings
            .get(id)
            .ok_or_else(|| Error::not_found(format!("track {} has no rating", id)))?;

        self.root = self.remove_track_at(self.root, id, rating);
        self.ratings.remove(id);
        Ok(rating)
    }

    /// O(1) via the side table
    pub fn rating_of(&self, id: &TrackId) -> Option<u8> {
        self.ratings.get(id).copied()
    }

    /// Up to `limit` tracks in descending rating order (right subtree
    /// first)
    pub fn top_rated(&self, limit: usize) -> Vec<Track> {
        let mut out = Vec::new();
        self.collect_descending(self.root, limit, &mut out);
        out
    }

    /// Bucket sizes per rating level; index 0 holds rating 1
    pub fn distribution(&self) -> [usize; 5] {
        let mut counts = [0usize; 5];
        for rating in self.ratings.values() {
            counts[(*rating - 1) as usize] += 1;
        }
        counts
    }

    pub fn average_rating(&self) -> f64 {
        if self.ratings.is_empty() {
            return 0.0;
        }
        let total: u64 = self.ratings.values().map(|r| *r as u64).sum();
        total as f64 / self.ratings.len() as f64
    }

    /// Side-table clone: every rated id and its rating
    pub fn all_ratings(&self) -> HashMap<TrackId, u8> {
        self.ratings.clone()
    }

    /// Number of rated tracks
    pub fn len(&self) -> usize {
        self.ratings.len()
    }

    pub fn is_empty(&self) -> bool {
        self.ratings.is_empty()
    }

    /// Tree height, for diagnostics
    pub fn height(&self) -> usize {
        self.height_at(self.root)
    }

    pub fn clear(&mut self) {
        self.nodes.clear();
        self.free.clear();
        self.root = None;
        self.ratings.clear();
    }

    fn insert_at(&mut self, node: Option<usize>, track: Track, rating: u8) -> usize {
        let Some(idx) = node else {
            return self.alloc(rating, track);
        };

        if rating < self.nodes[idx].rating {
            let left = self.insert_at(self.nodes[idx].left, track, rating);
            self.nodes[idx].left = Some(left);
        } else if rating > self.nodes[idx].rating {
            let right = self.insert_at(self.nodes[idx].right, track, rating);
            self.nodes[idx].right = Some(right);
        } else {
            // same rating: drop any stale entry for this id, then append
            let id = track.id;
            let bucket = &mut self.nodes[idx].tracks;
            bucket.retain(|t| t.id != id);
            bucket.push(track);
        }
        idx
    }

    /// Remove `id` from the bucket at `rating`, deleting the node when the
    /// bucket empties. Returns the replacement subtree root.
    fn remove_track_at(
        &mut self,
        node: Option<usize>,
        id: &TrackId,
        rating: u8,
    ) -> Option<usize> {
        let idx = node?;

        if rating < self.nodes[idx].rating {
            let left = self.remove_track_at(self.nodes[idx].left, id, rating);
            self.nodes[idx].left = left;
        } else if rating > self.nodes[idx].rating {
            let right = self.remove_track_at(self.nodes[idx].right, id, rating);
            self.nodes[idx].right = right;
        } else {
            self.nodes[idx].tracks.retain(|t| t.id != *id);
            if self.nodes[idx].tracks.is_empty() {
                return self.remove_node(idx);
            }
        }
        Some(idx)
    }

    /// Standard BST node deletion on the arena
    fn remove_node(&mut self, idx: usize) -> Option<usize> {
        match (self.nodes[idx].left, self.nodes[idx].right) {
            (None, None) => {
                self.release(idx);
                None
            }
            (None, Some(right)) => {
                self.release(idx);
                Some(right)
            }
            (Some(left), None) => {
                self.release(idx);
                Some(left)
            }
            (Some(_), Some(right)) => {
                // promote the in-order successor's rating and bucket, then
                // delete the successor's original node from the right
                // subtree
                let successor = self.min_node(right);
                let succ_rating = self.nodes[successor].rating;
                let succ_tracks = self.nodes[successor].tracks.clone();

                self.nodes[idx].rating = succ_rating;
                self.nodes[idx].tracks = succ_tracks;
                let right = self.remove_rating_at(Some(right), succ_rating);
                self.nodes[idx].right = right;
                Some(idx)
            }
        }
    }

    /// Delete the node holding `rating` outright, bucket and all
    fn remove_rating_at(&mut self, node: Option<usize>, rating: u8) -> Option<usize> {
        let idx = node?;

        if rating < self.nodes[idx].rating {
            let left = self.remove_rating_at(self.nodes[idx].left, rating);
            self.nodes[idx].left = left;
        } else if rating > self.nodes[idx].rating {
            let right = self.remove_rating_at(self.nodes[idx].right, rating);
            self.nodes[idx].right = right;
        } else {
            return self.remove_node(idx);
        }
        Some(idx)
    }

    fn min_node(&self, mut idx: usize) -> usize {
        while let Some(left) = self.nodes[idx].left {
            idx = left;
        }
        idx
    }

    fn collect_descending(&self, node: Option<usize>, limit: usize, out: &mut Vec<Track>) {
        let Some(idx) = node else {
            return;
        };
        if out.len() >= limit {
            return;
        }

        self.collect_descending(self.nodes[idx].right, limit, out);
        for track in &self.nodes[idx].tracks {
            if out.len() >= limit {
                return;
            }
            out.push(track.clone());
        }
        self.collect_descending(self.nodes[idx].left, limit, out);
    }

    fn height_at(&self, node: Option<usize>) -> usize {
        let Some(idx) = node else {
            return 0;
        };
        1 + self
            .height_at(self.nodes[idx].left)
            .max(self.height_at(self.nodes[idx].right))
    }

    fn alloc(&mut self, rating: u8, track: Track) -> usize {
        match self.free.pop() {
            Some(idx) => {
                self.nodes[idx] = Node {
                    rating,
                    tracks: vec![track],
                    left: None,
                    right: None,
                };
                idx
            }
            None => {
                self.nodes.push(Node {
                    rating,
                    tracks: vec![track],
                    left: None,
                    right: None,
                });
                self.nodes.len() - 1
            }
        }
    }

    fn release(&mut self, idx: usize) {
        self.nodes[idx].tracks.clear();
        self.nodes[idx].left = None;
        self.nodes[idx].right = None;
        self.free.push(idx);
    }
}
