use tracing::debug;

use super::policy::MatchPolicy;
use crate::closet::domain::{ClosetItem, SlotGroup};

/// Items partitioned into the six slot groups, preserving the caller's input
/// order within each bucket so generation stays deterministic.
#[derive(Debug, Default)]
pub(crate) struct SlotBuckets<'a> {
    pub(crate) tops: Vec<&'a ClosetItem>,
    pub(crate) bottoms: Vec<&'a ClosetItem>,
    pub(crate) dresses: Vec<&'a ClosetItem>,
    pub(crate) outerwear: Vec<&'a ClosetItem>,
    pub(crate) footwear: Vec<&'a ClosetItem>,
    pub(crate) accessories: Vec<&'a ClosetItem>,
}

impl<'a> SlotBuckets<'a> {
    /// Partition `items` by slot group. Items whose category maps to no slot
    /// group are dropped without error; that soft failure is part of the
    /// external contract, so only a debug log records it.
    pub(crate) fn partition(items: &[&'a ClosetItem]) -> Self {
        let mut buckets = Self::default();
        for item in items.iter().copied() {
            match item.category.slot_group() {
                Some(SlotGroup::Tops) => buckets.tops.push(item),
                Some(SlotGroup::Bottoms) => buckets.bottoms.push(item),
                Some(SlotGroup::Dresses) => buckets.dresses.push(item),
                Some(SlotGroup::Outerwear) => buckets.outerwear.push(item),
                Some(SlotGroup::Footwear) => buckets.footwear.push(item),
                Some(SlotGroup::Accessories) => buckets.accessories.push(item),
                None => debug!(
                    item_id = %item.id.0,
                    category = item.category.label(),
                    "category has no slot group; excluded from outfit generation"
                ),
            }
        }
        buckets
    }
}

/// Enumerate candidate outfits under the policy caps.
///
/// This is a bounded heuristic enumerator by design, not a complete search:
/// two fixed phases (dress outfits, then top+bottom outfits) walk small
/// prefixes of each bucket and stop outright at `max_combinations`. No
/// deduplication, no randomization; identical input yields identical output.
pub(crate) fn generate<'a>(
    buckets: &SlotBuckets<'a>,
    policy: &MatchPolicy,
) -> Vec<Vec<&'a ClosetItem>> {
    let mut combinations: Vec<Vec<&'a ClosetItem>> = Vec::new();

    for dress in buckets.dresses.iter().take(policy.dress_candidates) {
        for shoes in buckets.footwear.iter().take(policy.footwear_candidates) {
            combinations.push(vec![*dress, *shoes]);
            if combinations.len() >= policy.max_combinations {
                return combinations;
            }
        }
    }

    for top in buckets.tops.iter().take(policy.top_candidates) {
        for bottom in buckets.bottoms.iter().take(policy.bottom_candidates) {
            for shoes in buckets.footwear.iter().take(policy.footwear_candidates) {
                combinations.push(vec![*top, *bottom, *shoes]);
                if combinations.len() >= policy.max_combinations {
                    return combinations;
                }

                if let Some(outerwear) = buckets.outerwear.first() {
                    combinations.push(vec![*top, *bottom, *shoes, *outerwear]);
                    if combinations.len() >= policy.max_combinations {
                        return combinations;
                    }
                }
            }
        }
    }

    combinations
}
