use serde::{Deserialize, Serialize};

/// Fixed enumeration caps, scoring weights, and result limits applied by the
/// matching engine.
///
/// These values are product policy, not tunables: [`MatchPolicy::standard`]
/// is the only sanctioned value set, and the struct exists so the constants
/// are constructed once and shared by reference rather than scattered through
/// the engine.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MatchPolicy {
    /// Hard ceiling on emitted combinations across all generation phases.
    pub max_combinations: usize,
    pub dress_candidates: usize,
    pub top_candidates: usize,
    pub bottom_candidates: usize,
    pub footwear_candidates: usize,
    pub color_weight: f32,
    pub trend_weight: f32,
    pub occasion_weight: f32,
    /// Matches must score strictly above this to be returned.
    pub confidence_threshold: f32,
    pub max_results: usize,
}

impl MatchPolicy {
    pub fn standard() -> Self {
        Self {
            max_combinations: 50,
            dress_candidates: 5,
            top_candidates: 5,
            bottom_candidates: 3,
            footwear_candidates: 3,
            color_weight: 0.4,
            trend_weight: 0.3,
            occasion_weight: 0.3,
            confidence_threshold: 0.5,
            max_results: 10,
        }
    }
}

impl Default for MatchPolicy {
    fn default() -> Self {
        Self::standard()
    }
}
