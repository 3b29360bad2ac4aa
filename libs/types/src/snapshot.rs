//! Point-in-time record bundles

use serde::{Deserialize, Serialize};

use crate::booking::Booking;
use crate::item::Item;
use crate::user::User;

/// Immutable copy of the three collections the analytics engine reads.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RecordSnapshot {
    #[serde(default)]
    pub bookings: Vec<Booking>,
    #[serde(default)]
    pub items: Vec<Item>,
    #[serde(default)]
    pub users: Vec<User>,
}

impl RecordSnapshot {
    pub fn is_empty(&self) -> bool {
        self.bookings.is_empty() && self.items.is_empty() && self.users.is_empty()
    }
}
