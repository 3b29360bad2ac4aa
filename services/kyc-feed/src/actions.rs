//! Admin actions on a supplier's KYC.
//!
//! Planning is pure: an action plus the current submissions becomes a list
//! of [`Mutation`]s for the record store and notification collaborators to
//! carry out. Nothing here writes records or delivers messages.

use serde::{Deserialize, Serialize};
use tracing::debug;
use types::ids::{SubmissionId, UserId};
use types::kyc::{DocumentStatus, DocumentType, KycDocument, KycSubmission};
use types::user::{User, UserStatus};

use crate::review::current_submission;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "action", rename_all = "snake_case")]
pub enum AdminAction {
    Approve,
    Reject,
    RequestReupload { doc_type: DocumentType },
    AddNote { note: String },
    RaiseFraudFlag { reason: String },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum NotificationKind {
    Admin,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Notification {
    /// `UserId::ADMIN` addresses the admin inbox.
    pub recipient: UserId,
    pub message: String,
    pub kind: NotificationKind,
}

impl Notification {
    pub fn admin(recipient: UserId, message: impl Into<String>) -> Self {
        Self {
            recipient,
            message: message.into(),
            kind: NotificationKind::Admin,
        }
    }
}

/// A single write for an external collaborator.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum Mutation {
    SetUserStatus {
        user_id: UserId,
        status: UserStatus,
    },
    /// Full replacement of the submission's document list.
    SetSubmissionDocs {
        submission_id: SubmissionId,
        docs: Vec<KycDocument>,
    },
    /// Full replacement of the submission's notes.
    SetSubmissionNotes {
        submission_id: SubmissionId,
        notes: Vec<String>,
    },
    Notify(Notification),
}

/// Translate `action` on `user` into the writes that carry it out.
///
/// Re-upload requests and notes target the user's first submission in
/// collection order; a user without one gets an empty plan.
pub fn plan_action(
    user: &User,
    action: &AdminAction,
    submissions: &[KycSubmission],
) -> Vec<Mutation> {
    let plan = match action {
        AdminAction::Approve => vec![Mutation::SetUserStatus {
            user_id: user.id,
            status: UserStatus::Approved,
        }],
        AdminAction::Reject => vec![Mutation::SetUserStatus {
            user_id: user.id,
            status: UserStatus::Rejected,
        }],
        AdminAction::RequestReupload { doc_type } => {
            match current_submission(submissions, user.id) {
                Some(sub) => {
                    let docs = sub
                        .docs
                        .iter()
                        .map(|d| {
                            let mut doc = d.clone();
                            if doc.doc_type == *doc_type {
                                doc.status = DocumentStatus::ReuploadRequested;
                            }
                            doc
                        })
                        .collect();
                    vec![
                        Mutation::SetSubmissionDocs {
                            submission_id: sub.id,
                            docs,
                        },
                        Mutation::Notify(Notification::admin(
                            user.id,
                            format!("Please re-upload {} for KYC.", doc_type),
                        )),
                    ]
                }
                None => Vec::new(),
            }
        }
        AdminAction::AddNote { note } => match current_submission(submissions, user.id) {
            Some(sub) => {
                let mut notes = sub.admin_notes.clone();
                notes.push(note.clone());
                vec![Mutation::SetSubmissionNotes {
                    submission_id: sub.id,
                    notes,
                }]
            }
            None => Vec::new(),
        },
        AdminAction::RaiseFraudFlag { reason } => vec![Mutation::Notify(Notification::admin(
            UserId::ADMIN,
            format!("KYC flag: {} - {}", user.name, reason),
        ))],
    };

    debug!(
        user_id = %user.id,
        action = ?action,
        mutations = plan.len(),
        "Planned admin action"
    );

    plan
}
