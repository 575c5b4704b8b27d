//! The outfit-matching engine: capped combinatorial generation over slot
//! buckets plus a fixed-weight scorer, composed into a ranked shortlist.
//!
//! All computation is synchronous, CPU-bound, and pure over its inputs plus
//! the static color tables; concurrent invocations are independent.

pub(crate) mod combinations;
mod palette;
mod policy;
pub(crate) mod scoring;

pub use palette::{color_compatible, TRENDING_COLORS};
pub use policy::MatchPolicy;

use combinations::SlotBuckets;

use crate::closet::domain::{ClosetItem, Occasion, OutfitMatch, Season};

/// Stateless engine applying one [`MatchPolicy`] to wardrobe snapshots.
pub struct MatchEngine {
    policy: MatchPolicy,
}

impl MatchEngine {
    pub fn new(policy: MatchPolicy) -> Self {
        Self { policy }
    }

    pub fn policy(&self) -> &MatchPolicy {
        &self.policy
    }

    /// Produce up to `max_results` outfit matches for `occasion`, sorted by
    /// descending confidence, keeping only candidates strictly above the
    /// confidence threshold.
    ///
    /// When `season` is supplied, only items applicable to that season (or
    /// all-season items) participate. Items whose category maps to no slot
    /// group are silently excluded. Ties keep generator order: the sort is
    /// stable, so output is deterministic for identical input.
    pub fn generate_matches(
        &self,
        items: &[ClosetItem],
        occasion: Occasion,
        season: Option<Season>,
    ) -> Vec<OutfitMatch> {
        let seasonal: Vec<&ClosetItem> = match season {
            Some(season) => items.iter().filter(|item| item.wearable_in(season)).collect(),
            None => items.iter().collect(),
        };

        let buckets = SlotBuckets::partition(&seasonal);
        let candidates = combinations::generate(&buckets, &self.policy);

        let mut matches: Vec<OutfitMatch> = Vec::with_capacity(candidates.len());
        for candidate in candidates {
            let scores = scoring::score_outfit(&candidate, occasion);
            let confidence = scoring::confidence(&scores, &self.policy);

            if confidence > self.policy.confidence_threshold {
                matches.push(OutfitMatch {
                    outfit: candidate.into_iter().cloned().collect(),
                    scores,
                    confidence,
                    occasion,
                    explanation: None,
                });
            }
        }

        matches.sort_by(|a, b| {
            b.confidence
                .partial_cmp(&a.confidence)
                .unwrap_or(std::cmp::Ordering::Equal)
        });
        matches.truncate(self.policy.max_results);
        matches
    }
}

/// Generate outfit matches under the standard policy. See
/// [`MatchEngine::generate_matches`] for the full contract.
pub fn generate_outfit_matches(
    items: &[ClosetItem],
    occasion: Occasion,
    season: Option<Season>,
) -> Vec<OutfitMatch> {
    MatchEngine::new(MatchPolicy::standard()).generate_matches(items, occasion, season)
}
