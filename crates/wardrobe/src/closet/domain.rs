use std::collections::BTreeMap;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Identifier wrapper for closet items.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ItemId(pub String);

/// Closed set of garment categories produced by attribute extraction.
///
/// `Other` is the documented fallback for anything the extractor could not
/// classify; it maps to no slot group and is silently excluded from outfit
/// generation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ClothingCategory {
    TShirt,
    Shirt,
    Blouse,
    Sweater,
    Hoodie,
    Jacket,
    Coat,
    Jeans,
    Pants,
    Shorts,
    Skirt,
    Dress,
    Shoes,
    Sneakers,
    Boots,
    Accessories,
    Hat,
    Bag,
    Other,
}

impl ClothingCategory {
    pub const fn label(self) -> &'static str {
        match self {
            ClothingCategory::TShirt => "t-shirt",
            ClothingCategory::Shirt => "shirt",
            ClothingCategory::Blouse => "blouse",
            ClothingCategory::Sweater => "sweater",
            ClothingCategory::Hoodie => "hoodie",
            ClothingCategory::Jacket => "jacket",
            ClothingCategory::Coat => "coat",
            ClothingCategory::Jeans => "jeans",
            ClothingCategory::Pants => "pants",
            ClothingCategory::Shorts => "shorts",
            ClothingCategory::Skirt => "skirt",
            ClothingCategory::Dress => "dress",
            ClothingCategory::Shoes => "shoes",
            ClothingCategory::Sneakers => "sneakers",
            ClothingCategory::Boots => "boots",
            ClothingCategory::Accessories => "accessories",
            ClothingCategory::Hat => "hat",
            ClothingCategory::Bag => "bag",
            ClothingCategory::Other => "other",
        }
    }

    /// Slot group used to structure outfit composition, or `None` for
    /// categories outside the six slot groups.
    pub const fn slot_group(self) -> Option<SlotGroup> {
        match self {
            ClothingCategory::TShirt
            | ClothingCategory::Shirt
            | ClothingCategory::Blouse
            | ClothingCategory::Sweater
            | ClothingCategory::Hoodie => Some(SlotGroup::Tops),
            ClothingCategory::Jeans
            | ClothingCategory::Pants
            | ClothingCategory::Shorts
            | ClothingCategory::Skirt => Some(SlotGroup::Bottoms),
            ClothingCategory::Dress => Some(SlotGroup::Dresses),
            ClothingCategory::Jacket | ClothingCategory::Coat => Some(SlotGroup::Outerwear),
            ClothingCategory::Shoes | ClothingCategory::Sneakers | ClothingCategory::Boots => {
                Some(SlotGroup::Footwear)
            }
            ClothingCategory::Accessories | ClothingCategory::Hat | ClothingCategory::Bag => {
                Some(SlotGroup::Accessories)
            }
            ClothingCategory::Other => None,
        }
    }

    pub(crate) const fn counts_as_formal(self) -> bool {
        matches!(
            self,
            ClothingCategory::Shirt
                | ClothingCategory::Blouse
                | ClothingCategory::Dress
                | ClothingCategory::Coat
        )
    }

    pub(crate) const fn counts_as_casual(self) -> bool {
        matches!(
            self,
            ClothingCategory::TShirt
                | ClothingCategory::Jeans
                | ClothingCategory::Sneakers
                | ClothingCategory::Hoodie
        )
    }
}

/// Surface pattern reported by attribute extraction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Pattern {
    Solid,
    Striped,
    Plaid,
    Floral,
    Geometric,
    PolkaDot,
    Other,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Season {
    Spring,
    Summer,
    Fall,
    Winter,
    AllSeason,
}

impl Season {
    pub const fn label(self) -> &'static str {
        match self {
            Season::Spring => "spring",
            Season::Summer => "summer",
            Season::Fall => "fall",
            Season::Winter => "winter",
            Season::AllSeason => "all-season",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Occasion {
    Casual,
    Work,
    Formal,
    Party,
    Date,
    Gym,
    Outdoor,
    Beach,
    Other,
}

impl Occasion {
    pub const fn label(self) -> &'static str {
        match self {
            Occasion::Casual => "casual",
            Occasion::Work => "work",
            Occasion::Formal => "formal",
            Occasion::Party => "party",
            Occasion::Date => "date",
            Occasion::Gym => "gym",
            Occasion::Outdoor => "outdoor",
            Occasion::Beach => "beach",
            Occasion::Other => "other",
        }
    }
}

/// One of the six fixed garment roles used to structure outfit composition.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SlotGroup {
    Tops,
    Bottoms,
    Dresses,
    Outerwear,
    Footwear,
    Accessories,
}

impl SlotGroup {
    pub const fn label(self) -> &'static str {
        match self {
            SlotGroup::Tops => "tops",
            SlotGroup::Bottoms => "bottoms",
            SlotGroup::Dresses => "dresses",
            SlotGroup::Outerwear => "outerwear",
            SlotGroup::Footwear => "footwear",
            SlotGroup::Accessories => "accessories",
        }
    }
}

/// One physical garment owned by a user, as stored by the external document
/// store and consumed read-only by the matching engine and analytics.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ClosetItem {
    pub id: ItemId,
    pub owner_id: String,
    pub category: ClothingCategory,
    pub colors: Vec<String>,
    pub pattern: Pattern,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub fabric: Option<String>,
    pub seasons: Vec<Season>,
    /// Confidence reported by attribute extraction, in [0, 1].
    pub confidence: f32,
    #[serde(default)]
    pub wear_count: u32,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub price: Option<f32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub last_worn: Option<DateTime<Utc>>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub tags: Vec<String>,
}

impl ClosetItem {
    /// Whether the item is applicable to `season`. All-season garments match
    /// every season filter.
    pub fn wearable_in(&self, season: Season) -> bool {
        self.seasons
            .iter()
            .any(|declared| *declared == season || *declared == Season::AllSeason)
    }
}

/// Per-occasion declaration of required and optional slot groups.
///
/// This table is static configuration shared with the product side. The
/// combination generator intentionally does not consult it: generation runs
/// the same two fixed phases for every occasion, and changing that requires
/// product sign-off. Callers may still use the table to describe an
/// occasion's dress code.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct OutfitConfig {
    pub required: &'static [SlotGroup],
    pub optional: &'static [SlotGroup],
}

impl OutfitConfig {
    pub const fn for_occasion(occasion: Occasion) -> Self {
        use SlotGroup::{Accessories, Bottoms, Footwear, Outerwear, Tops};
        match occasion {
            Occasion::Casual | Occasion::Party | Occasion::Date | Occasion::Beach => Self {
                required: &[Tops, Bottoms, Footwear],
                optional: &[Accessories],
            },
            Occasion::Work | Occasion::Formal => Self {
                required: &[Tops, Bottoms, Footwear],
                optional: &[Outerwear, Accessories],
            },
            Occasion::Gym => Self {
                required: &[Tops, Bottoms, Footwear],
                optional: &[],
            },
            Occasion::Outdoor => Self {
                required: &[Tops, Bottoms, Footwear],
                optional: &[Outerwear],
            },
            Occasion::Other => Self {
                required: &[Tops, Bottoms],
                optional: &[Footwear, Accessories],
            },
        }
    }
}

/// Independent sub-scores feeding the combined confidence.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct OutfitScores {
    pub color: f32,
    pub trend: f32,
    pub occasion: f32,
}

/// A scored outfit candidate returned by the matching engine.
///
/// `explanation` is deferred: the engine leaves it empty and a collaborator
/// (service layer or external text generation) fills it afterwards.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OutfitMatch {
    pub outfit: Vec<ClosetItem>,
    pub scores: OutfitScores,
    pub confidence: f32,
    pub occasion: Occasion,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub explanation: Option<String>,
}

/// Occurrence counts of item seasons across the five season buckets.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SeasonDistribution {
    pub spring: u32,
    pub summer: u32,
    pub fall: u32,
    pub winter: u32,
    #[serde(rename = "all-season")]
    pub all_season: u32,
}

impl SeasonDistribution {
    pub(crate) fn record(&mut self, season: Season) {
        match season {
            Season::Spring => self.spring += 1,
            Season::Summer => self.summer += 1,
            Season::Fall => self.fall += 1,
            Season::Winter => self.winter += 1,
            Season::AllSeason => self.all_season += 1,
        }
    }

    pub const fn count(self, season: Season) -> u32 {
        match season {
            Season::Spring => self.spring,
            Season::Summer => self.summer,
            Season::Fall => self.fall,
            Season::Winter => self.winter,
            Season::AllSeason => self.all_season,
        }
    }
}

/// Aggregate wardrobe statistics, independent of any occasion.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ClosetAnalytics {
    pub total_items: usize,
    pub most_used_category: ClothingCategory,
    pub least_used_category: ClothingCategory,
    /// Items never worn, or last worn more than 30 days ago.
    pub underused_items: usize,
    pub average_wear_count: u32,
    pub color_distribution: BTreeMap<String, u32>,
    pub season_distribution: SeasonDistribution,
    pub sustainability_score: u8,
}
