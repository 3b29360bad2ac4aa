//! Identifier types for marketplace records
//!
//! The record store assigns numeric identities. Each record kind gets its
//! own newtype so a booking's `item_id` can never be confused with a user id.

use serde::{Deserialize, Serialize};
use std::fmt;

macro_rules! record_id {
    ($(#[$meta:meta])* $name:ident) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
        #[serde(transparent)]
        pub struct $name(u64);

        impl $name {
            pub const fn new(raw: u64) -> Self {
                Self(raw)
            }

            pub const fn get(&self) -> u64 {
                self.0
            }
        }

        impl From<u64> for $name {
            fn from(raw: u64) -> Self {
                Self(raw)
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                write!(f, "{}", self.0)
            }
        }
    };
}

record_id!(
    /// Identity of a booking
    BookingId
);

record_id!(
    /// Identity of a listed item (machine)
    ItemId
);

record_id!(
    /// Identity of a marketplace user
    ///
    /// `UserId::ADMIN` (0) addresses the admin inbox for notifications.
    UserId
);

record_id!(
    /// Identity of a KYC submission
    SubmissionId
);

impl UserId {
    /// Recipient used for admin-facing notifications.
    pub const ADMIN: UserId = UserId(0);
}
