//! Booking records
//!
//! A booking references an item weakly through `item_id` and carries its own
//! copy of the category and location. Optional fields are normalized through
//! the accessor methods so every consumer applies the same defaults.

use chrono::{DateTime, Datelike, NaiveDate, NaiveDateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::category::ItemCategory;
use crate::ids::{BookingId, ItemId};
use crate::region::normalize_region;

/// Start time used when a booking has none.
pub const DEFAULT_START_TIME: &str = "00:00";

/// Booking lifecycle status
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum BookingStatus {
    /// Farmer is looking for an operator; counts as unmet demand
    Searching,
    Pending,
    Confirmed,
    Arrived,
    #[serde(rename = "In Progress")]
    InProgress,
    #[serde(rename = "Pending Payment")]
    PendingPayment,
    Completed,
    Cancelled,
    Expired,
    #[serde(other)]
    Other,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Booking {
    pub id: BookingId,
    #[serde(default)]
    pub item_id: Option<ItemId>,
    #[serde(default)]
    pub item_category: Option<ItemCategory>,
    #[serde(default)]
    pub location: Option<String>,
    pub status: BookingStatus,
    /// `HH:MM`
    #[serde(default)]
    pub start_time: Option<String>,
    /// ISO date (`YYYY-MM-DD`) or RFC 3339 timestamp
    #[serde(default)]
    pub date: Option<String>,
    /// Set once the booking is completed.
    #[serde(default)]
    pub final_price: Option<Decimal>,
}

impl Booking {
    pub fn is_completed(&self) -> bool {
        self.status == BookingStatus::Completed
    }

    pub fn is_searching(&self) -> bool {
        self.status == BookingStatus::Searching
    }

    /// Final price, absent counts as zero.
    pub fn price(&self) -> Decimal {
        self.final_price.unwrap_or(Decimal::ZERO)
    }

    pub fn category(&self) -> ItemCategory {
        ItemCategory::or_unknown(self.item_category)
    }

    pub fn region(&self) -> &str {
        normalize_region(self.location.as_deref())
    }

    /// Start time with the `"00:00"` default applied.
    pub fn start_time(&self) -> &str {
        match self.start_time.as_deref() {
            Some(t) if !t.trim().is_empty() => t,
            _ => DEFAULT_START_TIME,
        }
    }

    /// Hour component of the start time: the text before the first `:`.
    pub fn start_hour_text(&self) -> &str {
        let time = self.start_time();
        time.split(':').next().unwrap_or(time).trim()
    }

    /// Calendar month (1-12) of the booking date.
    ///
    /// An absent date falls back to `now`. A date that cannot be parsed
    /// yields `None`.
    pub fn month(&self, now: DateTime<Utc>) -> Option<u32> {
        match self.date.as_deref().map(str::trim) {
            Some(raw) if !raw.is_empty() => parse_month(raw),
            _ => Some(now.month()),
        }
    }
}

fn parse_month(raw: &str) -> Option<u32> {
    if let Ok(ts) = DateTime::parse_from_rfc3339(raw) {
        // month of the local date as written, not of the UTC instant
        return Some(ts.month());
    }
    if let Ok(date) = NaiveDate::parse_from_str(raw, "%Y-%m-%d") {
        return Some(date.month());
    }
    NaiveDateTime::parse_from_str(raw, "%Y-%m-%dT%H:%M:%S%.f")
        .ok()
        .map(|dt| dt.month())
}
