//! High-demand time windows
//!
//! Buckets every booking by the hour of its start time and reports the
//! earliest buckets that have bookings, in clock order.

use serde::{Deserialize, Serialize};
use types::booking::Booking;

use crate::tally::Tally;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DemandWindow {
    /// Start hour; `None` when the start time's hour is not a number.
    pub hour: Option<u32>,
    pub bookings: u64,
}

impl DemandWindow {
    /// `"HH:00"`, or `"Unknown"` for the non-numeric bucket.
    pub fn label(&self) -> String {
        match self.hour {
            Some(hour) => format!("{:02}:00", hour),
            None => "Unknown".to_string(),
        }
    }
}

/// Parse the hour text numerically so `"09"` and `"9"` share a bucket.
///
/// Only plain digits count as an hour; signs, spaces inside the text and
/// anything else land in the unknown bucket.
fn parse_hour(text: &str) -> Option<u32> {
    if text.is_empty() || !text.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    text.parse::<u32>().ok()
}

pub fn demand_windows(bookings: &[Booking], limit: usize) -> Vec<DemandWindow> {
    let mut by_hour: Tally<Option<u32>, u64> = Tally::new();
    for booking in bookings {
        by_hour.increment(parse_hour(booking.start_hour_text()));
    }

    let mut windows: Vec<DemandWindow> = by_hour
        .into_entries()
        .into_iter()
        .map(|(hour, bookings)| DemandWindow { hour, bookings })
        .collect();

    // numeric ascending, unparseable bucket last
    windows.sort_by_key(|w| (w.hour.is_none(), w.hour));
    windows.truncate(limit);
    windows
}
