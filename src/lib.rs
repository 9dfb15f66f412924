pub mod core;
pub mod playlist;
pub mod lookup;
pub mod ratings;
pub mod history;
pub mod sort;
pub mod blocklist;

pub use crate::core::catalog::Catalog;
pub use crate::core::config::CatalogConfig;
pub use crate::core::error::{Error, ErrorKind, Result};
pub use crate::core::types::{Track, TrackId};

/*
┌──────────────────────────────────────────────────────────────────────┐
│                        MELODEX ARCHITECTURE                          │
└──────────────────────────────────────────────────────────────────────┘

  ┌──────────────────────── struct Catalog ────────────────────────┐
  │ playlist:  Playlist          // ordered source of truth        │
  │ index:     TrackIndex        // id / title / artist maps       │
  │ ratings:   RatingTree        // BST of rating buckets          │
  │ history:   PlaybackHistory   // bounded play log + counter     │
  │ blocklist: ArtistBlocklist   // admission gate                 │
  │ sorter:    SortEngine        // merge / quick / insertion      │
  └────────────────────────────────────────────────────────────────┘

  Blocklist ──gates──> Playlist ──order truth──> enumerate/sort
      │                   │
      │                   ├──kept in sync by Catalog──> TrackIndex
      │                   └──kept in sync by Catalog──> RatingTree
      │
  Catalog.play(id) ──resolves via──> TrackIndex ──feeds──> PlaybackHistory

  Playlist: arena doubly-linked list, O(1) splices, sentinel-bounded
  TrackIndex: HashMap id->Track + lowercased title/artist buckets
  RatingTree: arena BST keyed 1-5, side table id->rating
  PlaybackHistory: VecDeque, capacity 50, monotone total-play counter
  SortEngine: stable merge / in-place quick / insertion, size-adaptive
*/
