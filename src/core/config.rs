use crate::sort::engine::SortThresholds;

/// Engine configuration. The catalog is embedded, so configuration is plain
/// data handed to the constructor rather than loaded from anywhere.
#[derive(Debug, Clone)]
pub struct CatalogConfig {
    /// Bounded play-history capacity; the oldest entry is evicted past this
    pub history_capacity: usize,

    /// Size-adaptive sort dispatch thresholds (policy, not contract)
    pub sort_thresholds: SortThresholds,
}

impl Default for CatalogConfig {
    fn default() -> Self {
        CatalogConfig {
            history_capacity: 50,
            sort_thresholds: SortThresholds::default(),
        }
    }
}
