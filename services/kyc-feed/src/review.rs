//! Supplier KYC review view, derived from users and the reconciled
//! submission collection.

use chrono::{DateTime, Utc};
use serde::Serialize;
use types::ids::{SubmissionId, UserId};
use types::kyc::{DocumentType, KycPhase, KycStatus, KycSubmission, RiskLevel};
use types::user::User;

/// One row per supplier.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SupplierKycRow {
    pub user_id: UserId,
    pub name: String,
    pub phone: Option<String>,
    pub location: Option<String>,
    pub kyc_status: KycStatus,
    pub submitted_at: Option<DateTime<Utc>>,
    pub docs: Vec<DocumentType>,
    pub risk: RiskLevel,
    /// Submission the row was resolved from, if any.
    pub submission_id: Option<SubmissionId>,
}

/// First submission in collection order belonging to `user_id`.
pub fn current_submission(submissions: &[KycSubmission], user_id: UserId) -> Option<&KycSubmission> {
    submissions.iter().find(|s| s.user_id == user_id)
}

/// Build the review rows for every supplier, in user order.
///
/// A submission with a non-empty status decides `kyc_status`; otherwise the
/// user's own approval is used (`Approved` or `Pending`).
pub fn supplier_rows(users: &[User], submissions: &[KycSubmission]) -> Vec<SupplierKycRow> {
    users
        .iter()
        .filter(|u| u.is_supplier())
        .map(|user| {
            let submission = current_submission(submissions, user.id);

            let kyc_status = match submission {
                Some(s) if !s.status.as_str().is_empty() => s.status.clone(),
                _ if user.is_approved() => KycStatus::from(KycPhase::Approved),
                _ => KycStatus::from(KycPhase::Pending),
            };

            SupplierKycRow {
                user_id: user.id,
                name: user.name.clone(),
                phone: user.phone.clone(),
                location: user.location.clone(),
                kyc_status,
                submitted_at: submission.and_then(|s| s.submitted_at),
                docs: submission
                    .map(|s| s.docs.iter().map(|d| d.doc_type).collect())
                    .unwrap_or_default(),
                risk: submission.map(|s| s.risk_level).unwrap_or_default(),
                submission_id: submission.map(|s| s.id),
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;
    use types::kyc::{DocumentStatus, KycDocument};
    use types::user::{UserRole, UserStatus};

    fn user(id: u64, role: UserRole, status: UserStatus) -> User {
        User {
            id: UserId::new(id),
            name: format!("user-{}", id),
            phone: Some(format!("98000000{:02}", id)),
            location: Some("Nashik".to_string()),
            role,
            status,
        }
    }

    fn submission(id: u64, user_id: u64, status: &str) -> KycSubmission {
        KycSubmission {
            id: SubmissionId::new(id),
            user_id: UserId::new(user_id),
            status: KycStatus::new(status),
            submitted_at: Some(Utc.with_ymd_and_hms(2024, 3, 1, 10, 0, 0).unwrap()),
            docs: vec![
                KycDocument {
                    doc_type: DocumentType::Aadhaar,
                    status: DocumentStatus::Verified,
                    url: None,
                },
                KycDocument {
                    doc_type: DocumentType::Gst,
                    status: DocumentStatus::Pending,
                    url: None,
                },
            ],
            risk_level: RiskLevel::High,
            admin_notes: vec![],
        }
    }

    #[test]
    fn test_only_suppliers_in_user_order() {
        let users = vec![
            user(3, UserRole::Supplier, UserStatus::Pending),
            user(1, UserRole::Farmer, UserStatus::Approved),
            user(2, UserRole::Supplier, UserStatus::Pending),
            user(4, UserRole::Admin, UserStatus::Approved),
        ];

        let rows = supplier_rows(&users, &[]);
        let ids: Vec<u64> = rows.iter().map(|r| r.user_id.get()).collect();
        assert_eq!(ids, vec![3, 2]);
    }

    #[test]
    fn test_submission_fields_copied() {
        let users = vec![user(5, UserRole::Supplier, UserStatus::Pending)];
        let subs = vec![submission(40, 5, "ReuploadRequested")];

        let row = &supplier_rows(&users, &subs)[0];
        assert_eq!(row.kyc_status.as_str(), "ReuploadRequested");
        assert_eq!(row.docs, vec![DocumentType::Aadhaar, DocumentType::Gst]);
        assert_eq!(row.risk, RiskLevel::High);
        assert_eq!(row.submission_id, Some(SubmissionId::new(40)));
        assert!(row.submitted_at.is_some());
    }

    #[test]
    fn test_status_falls_back_to_user_approval() {
        let users = vec![
            user(1, UserRole::Supplier, UserStatus::Approved),
            user(2, UserRole::Supplier, UserStatus::Rejected),
        ];

        let rows = supplier_rows(&users, &[]);
        assert_eq!(rows[0].kyc_status.as_str(), "Approved");
        assert_eq!(rows[1].kyc_status.as_str(), "Pending");
        assert_eq!(rows[0].risk, RiskLevel::Low);
        assert!(rows[0].docs.is_empty());
        assert_eq!(rows[0].submission_id, None);
    }

    #[test]
    fn test_empty_submission_status_uses_fallback() {
        let users = vec![user(1, UserRole::Supplier, UserStatus::Approved)];
        let subs = vec![submission(9, 1, "")];

        let row = &supplier_rows(&users, &subs)[0];
        assert_eq!(row.kyc_status.as_str(), "Approved");
        // the rest still comes from the submission
        assert_eq!(row.risk, RiskLevel::High);
        assert_eq!(row.submission_id, Some(SubmissionId::new(9)));
    }

    #[test]
    fn test_first_submission_for_user_wins() {
        let users = vec![user(1, UserRole::Supplier, UserStatus::Pending)];
        let subs = vec![
            submission(20, 1, "Rejected"),
            submission(10, 1, "Approved"),
        ];

        assert_eq!(current_submission(&subs, UserId::new(1)).map(|s| s.id.get()), Some(20));
        assert_eq!(supplier_rows(&users, &subs)[0].kyc_status.as_str(), "Rejected");
    }
}
