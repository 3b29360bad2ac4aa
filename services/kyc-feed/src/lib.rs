//! KYC Feed Service
//!
//! Keeps a live, reconciled collection of KYC submissions from an ordered
//! stream of upsert events and derives the supplier review view from it.
//!
//! - At most one entry per submission id
//! - Updates replace in place; unseen submissions surface at the front
//! - Single writer task; readers get immutable published snapshots
//! - Delivery failures mark the view stale without touching it
//!
//! # Architecture
//!
//! ```text
//!   Change feed (external)
//!        │ FeedMessage
//!    ┌───▼──────┐
//!    │ Consumer │  ← single writer, FIFO
//!    └───┬──────┘
//!        │ apply_event
//!    ┌───▼────────┐      ┌────────────┐
//!    │ Reconciler ├─────►│ watch: Arc │ ← snapshot(), status()
//!    └────────────┘      └─────┬──────┘
//!                              │
//!                  ┌───────────┴──────────┐
//!                  │ supplier_rows        │ plan_action
//!                  └──────────────────────┘
//! ```

pub mod actions;
pub mod config;
pub mod consumer;
pub mod error;
pub mod events;
pub mod reconciler;
pub mod review;

pub use config::FeedConfig;
pub use consumer::{feed_channel, spawn_consumer, ConsumerStats, FeedHandle, FeedStatus};
pub use error::FeedError;
pub use events::{FeedMessage, UpsertEvent};
pub use reconciler::{ApplyOutcome, Keyed, Reconciler, SubmissionReconciler};

// Library version
pub const SERVICE_VERSION: &str = "0.1.0";
