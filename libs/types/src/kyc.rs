//! KYC submissions and documents
//!
//! Submission status is free text: whatever the upstream producer writes is
//! stored as-is. `KycPhase` names the statuses the review workflow knows
//! about and the transitions between them.
//!
//! ```text
//! Pending ──► Approved
//!    │  ├───► Rejected
//!    │  └───► ReuploadRequested ──► Pending
//! ```

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;

use crate::ids::{SubmissionId, UserId};

/// Known review phases of a submission.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum KycPhase {
    Pending,
    Approved,
    Rejected,
    ReuploadRequested,
}

impl KycPhase {
    pub fn as_str(&self) -> &'static str {
        match self {
            KycPhase::Pending => "Pending",
            KycPhase::Approved => "Approved",
            KycPhase::Rejected => "Rejected",
            KycPhase::ReuploadRequested => "ReuploadRequested",
        }
    }

    pub fn parse(s: &str) -> Option<Self> {
        match s {
            "Pending" => Some(KycPhase::Pending),
            "Approved" => Some(KycPhase::Approved),
            "Rejected" => Some(KycPhase::Rejected),
            "ReuploadRequested" => Some(KycPhase::ReuploadRequested),
            _ => None,
        }
    }

    /// Whether the review workflow allows moving from `self` to `next`.
    ///
    /// Enforced by the event producer, not by the reconciler.
    pub fn can_transition_to(self, next: KycPhase) -> bool {
        matches!(
            (self, next),
            (
                KycPhase::Pending,
                KycPhase::Approved | KycPhase::Rejected | KycPhase::ReuploadRequested
            ) | (KycPhase::ReuploadRequested, KycPhase::Pending)
        )
    }
}

/// Submission status as delivered by the feed.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct KycStatus(String);

impl KycStatus {
    pub fn new(status: impl Into<String>) -> Self {
        Self(status.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// The known phase for this status, if any.
    pub fn phase(&self) -> Option<KycPhase> {
        KycPhase::parse(&self.0)
    }
}

impl From<KycPhase> for KycStatus {
    fn from(phase: KycPhase) -> Self {
        Self(phase.as_str().to_string())
    }
}

impl fmt::Display for KycStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum RiskLevel {
    #[default]
    Low,
    Medium,
    High,
}

impl RiskLevel {
    pub fn as_str(&self) -> &'static str {
        match self {
            RiskLevel::Low => "LOW",
            RiskLevel::Medium => "MEDIUM",
            RiskLevel::High => "HIGH",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum DocumentType {
    Aadhaar,
    #[serde(rename = "PAN")]
    Pan,
    #[serde(rename = "GST")]
    Gst,
    BankPassbook,
    #[serde(rename = "RC")]
    Rc,
    #[serde(other)]
    Other,
}

impl DocumentType {
    pub fn as_str(&self) -> &'static str {
        match self {
            DocumentType::Aadhaar => "Aadhaar",
            DocumentType::Pan => "PAN",
            DocumentType::Gst => "GST",
            DocumentType::BankPassbook => "BankPassbook",
            DocumentType::Rc => "RC",
            DocumentType::Other => "Other",
        }
    }
}

impl fmt::Display for DocumentType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum DocumentStatus {
    #[default]
    Pending,
    Verified,
    Rejected,
    ReuploadRequested,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct KycDocument {
    #[serde(rename = "type")]
    pub doc_type: DocumentType,
    #[serde(default)]
    pub status: DocumentStatus,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct KycSubmission {
    pub id: SubmissionId,
    pub user_id: UserId,
    pub status: KycStatus,
    #[serde(default)]
    pub submitted_at: Option<DateTime<Utc>>,
    #[serde(default)]
    pub docs: Vec<KycDocument>,
    #[serde(default)]
    pub risk_level: RiskLevel,
    #[serde(default)]
    pub admin_notes: Vec<String>,
}
