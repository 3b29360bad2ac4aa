//! Feed consumer configuration

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FeedConfig {
    /// Channel name the feed collaborator subscribes to.
    pub channel: String,
    /// Capacity of the inbound event queue.
    pub buffer: usize,
}

impl Default for FeedConfig {
    fn default() -> Self {
        Self {
            channel: "kyc-live".to_string(),
            buffer: 1024,
        }
    }
}
