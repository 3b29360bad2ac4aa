//! Change-feed event definitions
//!
//! An upsert event means "this is the current state of the record", never
//! a delta. The feed carries no sequence numbers: delivery order is the
//! only ordering, and the last event applied for an id wins.

use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::error::FeedError;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UpsertEvent<T> {
    /// Correlation id for logs; assigned on receipt when the payload has none.
    #[serde(default = "Uuid::now_v7")]
    pub event_id: Uuid,
    pub record: T,
}

impl<T> UpsertEvent<T> {
    pub fn new(record: T) -> Self {
        Self {
            event_id: Uuid::now_v7(),
            record,
        }
    }
}

/// A message delivered by the feed collaborator.
#[derive(Debug, Clone, PartialEq)]
pub enum FeedMessage<T> {
    Upsert(UpsertEvent<T>),
    /// Connectivity or subscription failure; the collection is untouched.
    Failure(FeedError),
}

impl<T> FeedMessage<T> {
    pub fn upsert(record: T) -> Self {
        FeedMessage::Upsert(UpsertEvent::new(record))
    }
}

/// Decode a raw JSON payload (`{"record": {...}}`) into an upsert event.
pub fn decode_event<T: DeserializeOwned>(raw: &str) -> Result<UpsertEvent<T>, FeedError> {
    serde_json::from_str(raw).map_err(|e| FeedError::MalformedPayload(e.to_string()))
}
