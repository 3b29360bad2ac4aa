//! Equipment categories
//!
//! Shared domain between `Booking::item_category` and `Item::category`.
//! Unrecognized values deserialize to `Unknown` so a new upstream category
//! never makes a snapshot unreadable.

use serde::{Deserialize, Serialize};
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum ItemCategory {
    Tractors,
    Harvesters,
    Sprayers,
    Drones,
    Tillers,
    Seeders,
    #[serde(rename = "JCB")]
    Jcb,
    /// Absent or unrecognized category.
    #[serde(other)]
    Unknown,
}

impl ItemCategory {
    pub fn as_str(&self) -> &'static str {
        match self {
            ItemCategory::Tractors => "Tractors",
            ItemCategory::Harvesters => "Harvesters",
            ItemCategory::Sprayers => "Sprayers",
            ItemCategory::Drones => "Drones",
            ItemCategory::Tillers => "Tillers",
            ItemCategory::Seeders => "Seeders",
            ItemCategory::Jcb => "JCB",
            ItemCategory::Unknown => "Unknown",
        }
    }

    /// Normalize an optional category; absent becomes `Unknown`.
    pub fn or_unknown(category: Option<ItemCategory>) -> ItemCategory {
        category.unwrap_or(ItemCategory::Unknown)
    }
}

impl fmt::Display for ItemCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
