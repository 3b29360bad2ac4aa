//! Regional views
//!
//! Supply against demand per region, and a demand score that flags
//! regions where bookings outrun listed machines.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use types::booking::Booking;
use types::category::ItemCategory;
use types::item::Item;

use crate::tally::Tally;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RegionBalance {
    pub region: String,
    /// All bookings in the region.
    pub demand: u64,
    /// Available and approved items in the region.
    pub supply: u64,
    pub gap: i64,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RegionDemand {
    pub region: String,
    pub bookings: u64,
    pub items: u64,
    /// `bookings / items`, or the raw booking count when the region has no
    /// items (unserved demand).
    pub score: Decimal,
    /// Most booked category in the region; ties go to the first encountered.
    pub top_category: Option<ItemCategory>,
}

#[derive(Debug, Default, Clone)]
struct BalanceAccum {
    demand: u64,
    supply: u64,
}

#[derive(Debug, Clone)]
struct DemandAccum {
    bookings: u64,
    items: u64,
    categories: Tally<ItemCategory, u64>,
}

impl Default for DemandAccum {
    fn default() -> Self {
        Self {
            bookings: 0,
            items: 0,
            categories: Tally::new(),
        }
    }
}

pub fn supply_vs_demand(bookings: &[Booking], items: &[Item], limit: usize) -> Vec<RegionBalance> {
    let mut by_region: Tally<&str, BalanceAccum> = Tally::new();
    for booking in bookings {
        by_region.entry(booking.region()).demand += 1;
    }
    for item in items {
        let accum = by_region.entry(item.region());
        if item.is_bookable() {
            accum.supply += 1;
        }
    }

    let mut balances: Vec<RegionBalance> = by_region
        .into_entries()
        .into_iter()
        .map(|(region, accum)| RegionBalance {
            region: region.to_string(),
            demand: accum.demand,
            supply: accum.supply,
            gap: accum.demand as i64 - accum.supply as i64,
        })
        .collect();

    balances.sort_by(|a, b| b.gap.cmp(&a.gap));
    balances.truncate(limit);
    balances
}

pub fn regional_demand(bookings: &[Booking], items: &[Item], limit: usize) -> Vec<RegionDemand> {
    let mut by_region: Tally<&str, DemandAccum> = Tally::new();
    for booking in bookings {
        let accum = by_region.entry(booking.region());
        accum.bookings += 1;
        accum.categories.increment(booking.category());
    }
    for item in items {
        by_region.entry(item.region()).items += 1;
    }

    let mut scored: Vec<RegionDemand> = by_region
        .into_entries()
        .into_iter()
        .map(|(region, accum)| {
            let score = if accum.items > 0 {
                Decimal::from(accum.bookings) / Decimal::from(accum.items)
            } else {
                Decimal::from(accum.bookings)
            };
            RegionDemand {
                region: region.to_string(),
                bookings: accum.bookings,
                items: accum.items,
                score,
                top_category: accum.categories.first_max().map(|(&category, _)| category),
            }
        })
        .collect();

    scored.sort_by(|a, b| b.score.cmp(&a.score));
    scored.truncate(limit);
    scored
}
