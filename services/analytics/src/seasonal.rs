//! Seasonal signals
//!
//! Booking counts per (month, category) read through two fixed windows:
//! the harvest window (September to November, tractors and harvesters) and
//! the rainy window (June to August, tractors).

use std::collections::HashMap;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use tracing::debug;
use types::booking::Booking;
use types::category::ItemCategory;

pub const HARVEST_MONTHS: [u32; 3] = [9, 10, 11];
pub const RAINY_MONTHS: [u32; 3] = [6, 7, 8];

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HarvestMonth {
    pub month: u32,
    pub tractors: u64,
    pub harvesters: u64,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RainyMonth {
    pub month: u32,
    pub tractors: u64,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SeasonalSignals {
    pub harvest: Vec<HarvestMonth>,
    pub rainy: Vec<RainyMonth>,
}

/// Bookings without a date are counted in the month of `now`.
pub fn seasonal_signals(bookings: &[Booking], now: DateTime<Utc>) -> SeasonalSignals {
    let mut by_month: HashMap<(u32, ItemCategory), u64> = HashMap::new();
    for booking in bookings {
        match booking.month(now) {
            Some(month) => *by_month.entry((month, booking.category())).or_insert(0) += 1,
            None => debug!(
                booking_id = %booking.id,
                date = booking.date.as_deref().unwrap_or_default(),
                "Unparseable booking date, skipped for seasonal signals"
            ),
        }
    }

    let count = |month: u32, category: ItemCategory| {
        by_month.get(&(month, category)).copied().unwrap_or(0)
    };

    SeasonalSignals {
        harvest: HARVEST_MONTHS
            .iter()
            .map(|&month| HarvestMonth {
                month,
                tractors: count(month, ItemCategory::Tractors),
                harvesters: count(month, ItemCategory::Harvesters),
            })
            .collect(),
        rainy: RAINY_MONTHS
            .iter()
            .map(|&month| RainyMonth {
                month,
                tractors: count(month, ItemCategory::Tractors),
            })
            .collect(),
    }
}
