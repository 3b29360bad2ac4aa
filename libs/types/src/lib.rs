//! Types library for the equipment rental marketplace
//!
//! Record definitions shared by the analytics and KYC feed services. The
//! services only ever read these records; ownership stays with the record
//! store that supplies the snapshots.
//!
//! # Modules
//! - `ids`: Record identifiers (BookingId, ItemId, UserId, SubmissionId)
//! - `category`: Equipment categories shared by bookings and items
//! - `region`: Location normalization
//! - `booking`: Bookings and their lifecycle status
//! - `item`: Listed inventory items
//! - `user`: Marketplace users and roles
//! - `kyc`: KYC submissions and documents
//! - `snapshot`: Point-in-time bundles of record collections

pub mod ids;
pub mod category;
pub mod region;
pub mod booking;
pub mod item;
pub mod user;
pub mod kyc;
pub mod snapshot;

// Library version constant
pub const LIB_VERSION: &str = "1.0.0";

/// Prelude module for convenient imports
pub mod prelude {
    pub use crate::booking::*;
    pub use crate::category::*;
    pub use crate::ids::*;
    pub use crate::item::*;
    pub use crate::kyc::*;
    pub use crate::region::*;
    pub use crate::snapshot::*;
    pub use crate::user::*;
}
