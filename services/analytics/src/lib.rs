//! Operational Analytics Service
//!
//! Derives a fixed set of statistical views from record snapshots:
//! - Completed-booking revenue and category popularity
//! - Machine shortages by category and location
//! - High-demand start-hour windows
//! - Low-utilization and top-demand machines
//! - Per-machine price trends and per-region income
//! - Supply versus demand and demand scores per region
//! - Seasonal signals for the harvest and rainy windows
//!
//! Every view is a pure function of the snapshot plus an explicit
//! evaluation time. Identical inputs produce byte-identical reports, which
//! `AnalyticsReport::checksum` makes cheap to verify.
//!
//! # Architecture
//!
//! ```text
//!   RecordSnapshot (bookings, items, users)    now
//!          │                                    │
//!    ┌─────▼────────────────────────────────────▼─────┐
//!    │                AnalyticsEngine                 │
//!    └─────┬──────────────────────────────────────────┘
//!          │ overview · shortage · windows · utilization
//!          │ pricing · regional · seasonal
//!    ┌─────▼───────────┐
//!    │ AnalyticsReport │ ← checksum()
//!    └─────────────────┘
//! ```
//!
//! The engine holds no state between calls; callers decide when a snapshot
//! has changed and recompute.

pub mod config;
pub mod engine;
pub mod overview;
pub mod pricing;
pub mod regional;
pub mod report;
pub mod seasonal;
pub mod shortage;
pub mod utilization;
pub mod windows;

mod tally;

pub use config::{AnalyticsConfig, ConfigError};
pub use engine::{compute, AnalyticsEngine};
pub use report::AnalyticsReport;

// Library version
pub const SERVICE_VERSION: &str = "0.1.0";
