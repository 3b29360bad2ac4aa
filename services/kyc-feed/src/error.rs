//! Feed error taxonomy
//!
//! Reconciliation itself cannot fail. These errors describe the feed
//! collaborator's condition and are surfaced so readers can show staleness.

/// Errors reported by, or about, the change feed.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum FeedError {
    #[error("feed delivery failed on channel {channel}: {reason}")]
    DeliveryFailure { channel: String, reason: String },

    #[error("subscription rejected on channel {channel}: {reason}")]
    SubscriptionRejected { channel: String, reason: String },

    #[error("feed closed by source")]
    Closed,

    #[error("malformed feed payload: {0}")]
    MalformedPayload(String),
}
