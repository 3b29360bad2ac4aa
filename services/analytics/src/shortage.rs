//! Machine shortage detection
//!
//! For every (category, location) pair seen in bookings or items, compares
//! bookings still searching for a machine against bookable items. Pairs
//! where demand exceeds supply are reported, largest gap first.

use serde::{Deserialize, Serialize};
use types::booking::Booking;
use types::category::ItemCategory;
use types::item::Item;

use crate::tally::Tally;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Shortage {
    pub category: ItemCategory,
    pub location: String,
    /// Bookings in `Searching` status for this pair.
    pub searching: u64,
    /// Items available and approved for this pair.
    pub available: u64,
    /// `searching - available`, always positive in a report.
    pub gap: i64,
}

impl Shortage {
    /// Display label, `"<category>:<location>"`.
    pub fn label(&self) -> String {
        format!("{}:{}", self.category, self.location)
    }
}

#[derive(Debug, Default, Clone)]
struct PairCounts {
    searching: u64,
    available: u64,
}

pub fn shortages(bookings: &[Booking], items: &[Item], limit: usize) -> Vec<Shortage> {
    let mut pairs: Tally<(ItemCategory, &str), PairCounts> = Tally::new();

    for booking in bookings {
        let counts = pairs.entry((booking.category(), booking.region()));
        if booking.is_searching() {
            counts.searching += 1;
        }
    }
    for item in items {
        let counts = pairs.entry((item.category(), item.region()));
        if item.is_bookable() {
            counts.available += 1;
        }
    }

    let mut shortages: Vec<Shortage> = pairs
        .into_entries()
        .into_iter()
        .map(|((category, location), counts)| Shortage {
            category,
            location: location.to_string(),
            searching: counts.searching,
            available: counts.available,
            gap: counts.searching as i64 - counts.available as i64,
        })
        .filter(|s| s.gap > 0)
        .collect();

    shortages.sort_by(|a, b| b.gap.cmp(&a.gap));
    shortages.truncate(limit);
    shortages
}
