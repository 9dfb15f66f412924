use crate::core::types::Track;

/// Track paired with its search relevance
#[derive(Debug, Clone, PartialEq)]
pub struct ScoredTrack {
    pub track: Track,
    pub score: f32,
}

/// Relevance of `text` against an already-normalized query.
///
/// - exact match: 1.0
/// - substring match: mean of a position score `1 - offset / len` and a
///   length-ratio score `query_len / len` (character counts)
/// - no match: 0.0
pub fn relevance_score(query: &str, text: &str) -> f32 {
    if query == text {
        return 1.0;
    }

    if let Some(byte_offset) = text.find(query) {
        let text_len = text.chars().count() as f32;
        if text_len == 0.0 {
            return 0.0;
        }
        let char_offset = text[..byte_offset].chars().count() as f32;
        let position_score = 1.0 - char_offset / text_len;
        let length_score = query.chars().count() as f32 / text_len;
        return (position_score + length_score) / 2.0;
    }

    0.0
}

/// Stable descending sort; equal scores keep their collection order
pub fn rank(mut candidates: Vec<ScoredTrack>) -> Vec<ScoredTrack> {
    candidates.sort_by(|a, b| {
        b.score
            .partial_cmp(&a.score)
            .unwrap_or(std::cmp::Ordering::Equal)
    });
    candidates
}
