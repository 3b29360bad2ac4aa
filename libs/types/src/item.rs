//! Listed inventory items

use serde::{Deserialize, Serialize};

use crate::category::ItemCategory;
use crate::ids::ItemId;
use crate::region::normalize_region;

/// Listing moderation status
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ItemStatus {
    #[default]
    Pending,
    Approved,
    Rejected,
    #[serde(other)]
    Other,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Item {
    pub id: ItemId,
    /// Display label
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub category: Option<ItemCategory>,
    #[serde(default)]
    pub location: Option<String>,
    #[serde(default)]
    pub available: bool,
    #[serde(default)]
    pub status: ItemStatus,
}

impl Item {
    pub fn category(&self) -> ItemCategory {
        ItemCategory::or_unknown(self.category)
    }

    pub fn region(&self) -> &str {
        normalize_region(self.location.as_deref())
    }

    /// Counts toward supply: available and approved.
    pub fn is_bookable(&self) -> bool {
        self.available && self.status == ItemStatus::Approved
    }
}
