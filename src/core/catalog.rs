use tracing::{debug, info};

use crate::blocklist::set::ArtistBlocklist;
use crate::core::config::CatalogConfig;
use crate::core::error::{Error, Result};
use crate::core::snapshot::{Analytics, CatalogSnapshot};
use crate::core::types::{Track, TrackId};
use crate::history::log::PlaybackHistory;
use crate::lookup::fuzzy::ScoredTrack;
use crate::lookup::index::TrackIndex;
use crate::playlist::linked::{Playlist, PlaylistStats};
use crate::ratings::tree::RatingTree;
use crate::sort::engine::{SortEngine, quick_sort};
use crate::sort::key::{SortField, SortSpec};

/// Facade over the cooperating stores. The playlist is the source of truth
/// for order; the index and rating tree are secondary views keyed by id,
/// and every logical operation here keeps them consistent. The history log
/// is independent, fed only by explicit plays.
///
/// One catalog, one logical owner: mutations take `&mut self`, queries take
/// `&self`, and no internal locking exists. A layer exposing this to
/// concurrent callers must serialize mutations per catalog instance.
#[derive(Debug)]
pub struct Catalog {
    config: CatalogConfig,
    playlist: Playlist,
    index: TrackIndex,
    ratings: RatingTree,
    history: PlaybackHistory,
    blocklist: ArtistBlocklist,
    sorter: SortEngine,
}

impl Catalog {
    pub fn new() -> Self {
        Self::with_config(CatalogConfig::default())
    }

    pub fn with_config(config: CatalogConfig) -> Self {
        Catalog {
            playlist: Playlist::new(),
            index: TrackIndex::new(),
            ratings: RatingTree::new(),
            history: PlaybackHistory::with_capacity(config.history_capacity),
            blocklist: ArtistBlocklist::new(),
            sorter: SortEngine::with_thresholds(config.sort_thresholds),
            config,
        }
    }

    // ----- playlist mutations -----

    /// Add a new track at `position` (`None` appends). Blocked artists are
    /// refused before anything is touched.
    pub fn add_track(
        &mut self,
        title: &str,
        artist: &str,
        duration_secs: i64,
        position: Option<usize>,
    ) -> Result<Track> {
        self.admit(Track::new(title, artist, duration_secs), position)
    }

    /// Add a track under a caller-supplied id; duplicate ids are a
    /// `Conflict`.
    pub fn add_track_with_id(
        &mut self,
        id: TrackId,
        title: &str,
        artist: &str,
        duration_secs: i64,
        position: Option<usize>,
    ) -> Result<Track> {
        self.admit(Track::with_id(id, title, artist, duration_secs), position)
    }

    fn admit(&mut self, track: Track, position: Option<usize>) -> Result<Track> {
        if track.title.is_empty() {
            return Err(Error::invalid_argument("title is required"));
        }
        if track.artist.is_empty() {
            return Err(Error::invalid_argument("artist is required"));
        }
        if self.blocklist.is_blocked(&track.artist) {
            return Err(Error::conflict(format!("artist {} is blocked", track.artist)));
        }

        // index first: a duplicate id fails before the playlist is spliced
        self.index.insert(track.clone())?;
        self.playlist.insert(track.clone(), position);

        debug!(id = %track.id, title = %track.title, ?position, "track added");
        Ok(track)
    }

    /// Remove the track at `index` from the playlist and every secondary
    /// view
    pub fn remove_track(&mut self, index: usize) -> Result<Track> {
        let track = self.playlist.remove(index)?;

        // present by invariant; a missing rating is simply not an error
        let _ = self.index.remove(&track.id);
        let _ = self.ratings.unrate(&track.id);

        debug!(id = %track.id, index, "track removed");
        Ok(track)
    }

    pub fn move_track(&mut self, from: usize, to: usize) -> Result<()> {
        self.playlist.move_track(from, to)?;
        debug!(from, to, "track moved");
        Ok(())
    }

    pub fn reverse(&mut self) {
        self.playlist.reverse();
        debug!("playlist reversed");
    }

    /// Drop every track: playlist, index and ratings reset together. The
    /// history log and blocklist are independent and survive.
    pub fn clear(&mut self) {
        self.playlist.clear();
        self.index.clear();
        self.ratings.clear();
        debug!("catalog cleared");
    }

    // ----- ordering -----

    /// Sort the playlist on a single field and write the new order back
    pub fn sort_by(&mut self, field: SortField, descending: bool) -> Result<()> {
        let tracks = self.playlist.tracks();
        let sorted = match field {
            SortField::Title => self.sorter.sort_by_title(&tracks, descending),
            SortField::Artist => self.sorter.sort_by_artist(&tracks, descending),
            SortField::Duration => self.sorter.sort_by_duration(&tracks, descending),
        };
        self.rebuild_playlist(sorted);
        debug!(?field, descending, "playlist sorted");
        Ok(())
    }

    /// Multi-criteria sort; criteria apply in the order given
    pub fn sort(&mut self, specs: &[SortSpec]) -> Result<()> {
        if specs.is_empty() {
            return Err(Error::invalid_argument("no sort criteria given"));
        }
        let tracks = self.playlist.tracks();
        let sorted = self.sorter.sort_by_criteria(&tracks, specs);
        self.rebuild_playlist(sorted);
        debug!(criteria = specs.len(), "playlist sorted by criteria");
        Ok(())
    }

    pub fn shuffle(&mut self) {
        let tracks = self.playlist.tracks();
        let shuffled = self.sorter.shuffle(&tracks);
        self.rebuild_playlist(shuffled);
        debug!("playlist shuffled");
    }

    fn rebuild_playlist(&mut self, tracks: Vec<Track>) {
        self.playlist.clear();
        for track in tracks {
            self.playlist.push(track);
        }
    }

    // ----- playback -----

    /// Record a play for the given id, resolved through the index
    pub fn play(&mut self, id: &TrackId) -> Result<Track> {
        let track = self
            .index
            .get(id)
            .cloned()
            .ok_or_else(|| Error::not_found(format!("track {} not in catalog", id)))?;

        self.history.record_play(track.clone());
        debug!(id = %track.id, title = %track.title, "play recorded");
        Ok(track)
    }

    /// Undo the most recent play; the lifetime play counter is untouched
    pub fn undo_play(&mut self) -> Result<Track> {
        let track = self.history.undo_last()?;
        debug!(id = %track.id, "play undone");
        Ok(track)
    }

    // ----- ratings -----

    pub fn rate(&mut self, id: &TrackId, rating: u8) -> Result<()> {
        let track = self
            .index
            .get(id)
            .cloned()
            .ok_or_else(|| Error::not_found(format!("track {} not in catalog", id)))?;

        self.ratings.rate(track, rating)?;
        debug!(id = %id, rating, "track rated");
        Ok(())
    }

    pub fn unrate(&mut self, id: &TrackId) -> Result<u8> {
        let rating = self.ratings.unrate(id)?;
        debug!(id = %id, rating, "rating removed");
        Ok(rating)
    }

    pub fn rating_of(&self, id: &TrackId) -> Option<u8> {
        self.ratings.rating_of(id)
    }

    pub fn tracks_rated(&self, rating: u8) -> Vec<Track> {
        self.ratings.lookup_by_rating(rating)
    }

    pub fn top_rated(&self, limit: usize) -> Vec<Track> {
        self.ratings.top_rated(limit)
    }

    // ----- blocklist -----

    pub fn block_artist(&mut self, artist: &str) -> Result<()> {
        self.blocklist.block(artist)?;
        info!(artist = artist.trim(), "artist blocked");
        Ok(())
    }

    pub fn unblock_artist(&mut self, artist: &str) -> Result<()> {
        self.blocklist.unblock(artist)?;
        info!(artist = artist.trim(), "artist unblocked");
        Ok(())
    }

    pub fn is_blocked(&self, artist: &str) -> bool {
        self.blocklist.is_blocked(artist)
    }

    pub fn blocked_artists(&self) -> Vec<String> {
        self.blocklist.blocked_artists()
    }

    // ----- queries -----

    /// Ranked fuzzy search across titles and artists
    pub fn search(&self, query: &str) -> Vec<Track> {
        self.search_scored(query)
            .into_iter()
            .map(|scored| scored.track)
            .collect()
    }

    pub fn search_scored(&self, query: &str) -> Vec<ScoredTrack> {
        self.index.fuzzy_search(query)
    }

    pub fn search_by_title(&self, title: &str) -> Vec<Track> {
        self.index.search_by_title(title)
    }

    pub fn search_by_artist(&self, artist: &str) -> Vec<Track> {
        self.index.search_by_artist(artist)
    }

    pub fn get(&self, id: &TrackId) -> Option<&Track> {
        self.index.get(id)
    }

    pub fn position_of(&self, id: &TrackId) -> Option<usize> {
        self.playlist.position_of(id)
    }

    pub fn tracks(&self) -> Vec<Track> {
        self.playlist.tracks()
    }

    pub fn len(&self) -> usize {
        self.playlist.len()
    }

    pub fn is_empty(&self) -> bool {
        self.playlist.is_empty()
    }

    pub fn playlist_stats(&self) -> PlaylistStats {
        self.playlist.stats()
    }

    /// Read access to the play log and its analytics
    pub fn history(&self) -> &PlaybackHistory {
        &self.history
    }

    pub fn config(&self) -> &CatalogConfig {
        &self.config
    }

    /// Assemble the full dashboard snapshot. O(n log n), dominated by the
    /// longest-tracks sort; uses the free sort function so the engine's
    /// bookkeeping stays untouched by reads.
    pub fn snapshot(&self) -> CatalogSnapshot {
        let tracks = self.playlist.tracks();
        let total_duration_secs: u64 = tracks.iter().map(|t| t.duration_secs as u64).sum();

        let mut longest_tracks = tracks.clone();
        quick_sort(&mut longest_tracks, &|t: &Track| t.duration_secs, true);
        longest_tracks.truncate(5);

        CatalogSnapshot {
            history: self.history.recent(10),
            ratings: self.ratings.all_ratings(),
            blocked_artists: self.blocklist.blocked_artists(),
            analytics: Analytics {
                total_tracks: tracks.len(),
                total_duration_secs,
                longest_tracks,
                rating_distribution: self.ratings.distribution(),
                total_plays: self.history.total_plays(),
                blocked_artist_count: self.blocklist.len(),
            },
            tracks,
            timestamp: chrono::Utc::now(),
        }
    }
}

impl Default for Catalog {
    fn default() -> Self {
        Catalog::new()
    }
}
