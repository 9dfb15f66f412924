use rand::Rng;

use crate::core::types::Track;
use crate::sort::key::{SortKey, SortSpec};

/// Which algorithm a sort ended up using
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Algorithm {
    MergeSort,
    QuickSort,
    InsertionSort,
}

/// Size-adaptive dispatch policy: at or below `insertion_max` use insertion
/// sort, at or below `merge_max` use merge sort, above that quick sort.
#[derive(Debug, Clone, Copy)]
pub struct SortThresholds {
    pub insertion_max: usize,
    pub merge_max: usize,
}

impl Default for SortThresholds {
    fn default() -> Self {
        SortThresholds {
            insertion_max: 10,
            merge_max: 1000,
        }
    }
}

/// Stable divide-and-conquer sort over an extracted key.
///
/// Descending order flips the comparison direction but still takes the left
/// run on equal keys, so ties keep their original relative order either way.
pub fn merge_sort<T, K, F>(items: &[T], key: &F, descending: bool) -> Vec<T>
where
    T: Clone,
    K: Ord,
    F: Fn(&T) -> K,
{
    if items.len() <= 1 {
        return items.to_vec();
    }

    let mid = items.len() / 2;
    let left = merge_sort(&items[..mid], key, descending);
    let right = merge_sort(&items[mid..], key, descending);
    merge(&left, &right, key, descending)
}

fn merge<T, K, F>(left: &[T], right: &[T], key: &F, descending: bool) -> Vec<T>
where
    T: Clone,
    K: Ord,
    F: Fn(&T) -> K,
{
    let mut out = Vec::with_capacity(left.len() + right.len());
    let mut i = 0;
    let mut j = 0;

    while i < left.len() && j < right.len() {
        // ties always take the left run; that is what keeps the sort stable
        let left_first = if descending {
            key(&left[i]) >= key(&right[j])
        } else {
            key(&left[i]) <= key(&right[j])
        };
        if left_first {
            out.push(left[i].clone());
            i += 1;
        } else {
            out.push(right[j].clone());
            j += 1;
        }
    }

    out.extend_from_slice(&left[i..]);
    out.extend_from_slice(&right[j..]);
    out
}

/// In-place partition sort, last element as pivot. Not stable. Average
/// O(n log n); already-sorted or reverse-sorted input degrades to O(n²)
/// because the pivot is always the last element. Known limitation, kept.
pub fn quick_sort<T, K, F>(items: &mut [T], key: &F, descending: bool)
where
    K: Ord,
    F: Fn(&T) -> K,
{
    if items.len() <= 1 {
        return;
    }

    let pivot = partition(items, key, descending);
    quick_sort(&mut items[..pivot], key, descending);
    quick_sort(&mut items[pivot + 1..], key, descending);
}

fn partition<T, K, F>(items: &mut [T], key: &F, descending: bool) -> usize
where
    K: Ord,
    F: Fn(&T) -> K,
{
    let high = items.len() - 1;
    let mut boundary = 0;

    for j in 0..high {
        let below_pivot = key(&items[j]) <= key(&items[high]);
        if below_pivot != descending {
            items.swap(boundary, j);
            boundary += 1;
        }
    }

    items.swap(boundary, high);
    boundary
}

/// Shift-based insertion sort for small inputs. Stable: an element only
/// shifts past strictly mis-ordered neighbors, never past equal keys.
pub fn insertion_sort<T, K, F>(items: &[T], key: &F, descending: bool) -> Vec<T>
where
    T: Clone,
    K: Ord,
    F: Fn(&T) -> K,
{
    let mut sorted = items.to_vec();

    for i in 1..sorted.len() {
        let current = sorted[i].clone();
        let current_key = key(&current);
        let mut j = i;

        while j > 0 {
            let should_shift = if descending {
                key(&sorted[j - 1]) < current_key
            } else {
                key(&sorted[j - 1]) > current_key
            };
            if !should_shift {
                break;
            }
            sorted[j] = sorted[j - 1].clone();
            j -= 1;
        }

        sorted[j] = current;
    }

    sorted
}

/// Comparison-based sorting over the catalog's tracks, with lightweight
/// bookkeeping of what ran last
#[derive(Debug)]
pub struct SortEngine {
    thresholds: SortThresholds,
    sort_count: u64,
    last_algorithm: Option<Algorithm>,
}

impl SortEngine {
    pub fn new() -> Self {
        Self::with_thresholds(SortThresholds::default())
    }

    pub fn with_thresholds(thresholds: SortThresholds) -> Self {
        SortEngine {
            thresholds,
            sort_count: 0,
            last_algorithm: None,
        }
    }

    /// Stable title sort
    pub fn sort_by_title(&mut self, tracks: &[Track], descending: bool) -> Vec<Track> {
        self.note(Algorithm::MergeSort);
        merge_sort(tracks, &|t: &Track| t.title.trim().to_lowercase(), descending)
    }

    /// Stable artist sort
    pub fn sort_by_artist(&mut self, tracks: &[Track], descending: bool) -> Vec<Track> {
        self.note(Algorithm::MergeSort);
        merge_sort(tracks, &|t: &Track| t.artist.trim().to_lowercase(), descending)
    }

    /// Duration sort via the in-place partition sort
    pub fn sort_by_duration(&mut self, tracks: &[Track], descending: bool) -> Vec<Track> {
        self.note(Algorithm::QuickSort);
        let mut sorted = tracks.to_vec();
        quick_sort(&mut sorted, &|t: &Track| t.duration_secs, descending);
        sorted
    }

    /// Multi-key sort: builds a composite key per track and merges with an
    /// ascending final comparison; per-criterion direction lives in the key
    pub fn sort_by_criteria(&mut self, tracks: &[Track], specs: &[SortSpec]) -> Vec<Track> {
        if specs.is_empty() {
            return tracks.to_vec();
        }
        self.note(Algorithm::MergeSort);
        merge_sort(tracks, &|t: &Track| SortKey::composite(t, specs), false)
    }

    /// Pick an algorithm by input size (see `SortThresholds`)
    pub fn hybrid_sort<K, F>(&mut self, tracks: &[Track], key: &F, descending: bool) -> Vec<Track>
    where
        K: Ord,
        F: Fn(&Track) -> K,
    {
        if tracks.len() <= self.thresholds.insertion_max {
            self.note(Algorithm::InsertionSort);
            insertion_sort(tracks, key, descending)
        } else if tracks.len() <= self.thresholds.merge_max {
            self.note(Algorithm::MergeSort);
            merge_sort(tracks, key, descending)
        } else {
            self.note(Algorithm::QuickSort);
            let mut sorted = tracks.to_vec();
            quick_sort(&mut sorted, key, descending);
            sorted
        }
    }

    /// Fisher-Yates shuffle
    pub fn shuffle(&mut self, tracks: &[Track]) -> Vec<Track> {
        let mut shuffled = tracks.to_vec();
        let mut rng = rand::thread_rng();

        for i in (1..shuffled.len()).rev() {
            let j = rng.gen_range(0..=i);
            shuffled.swap(i, j);
        }

        shuffled
    }

    pub fn sort_count(&self) -> u64 {
        self.sort_count
    }

    pub fn last_algorithm(&self) -> Option<Algorithm> {
        self.last_algorithm
    }

    fn note(&mut self, algorithm: Algorithm) {
        self.sort_count += 1;
        self.last_algorithm = Some(algorithm);
    }
}

impl Default for SortEngine {
    fn default() -> Self {
        SortEngine::new()
    }
}
