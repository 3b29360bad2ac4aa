//! Change-feed reconciler
//!
//! Maintains the canonical ordered collection for one record type:
//! - An event for a known id replaces that entry in place (row position is
//!   stable while a record is under review)
//! - An event for an unseen id is inserted at the front
//! - Nothing is ever removed
//!
//! Reapplying the same event is a no-op on order and content.

use std::fmt;

use tracing::debug;
use types::ids::SubmissionId;
use types::kyc::KycSubmission;

use crate::events::UpsertEvent;

/// A record with a stable identity.
pub trait Keyed {
    type Key: PartialEq + fmt::Display;

    fn key(&self) -> Self::Key;
}

impl Keyed for KycSubmission {
    type Key = SubmissionId;

    fn key(&self) -> SubmissionId {
        self.id
    }
}

/// What applying an event did to the collection.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ApplyOutcome {
    /// New id, inserted at the front.
    Inserted,
    /// Known id, replaced at `position`.
    Replaced { position: usize },
}

/// Reconciled collection, newest-relevant first.
#[derive(Debug, Clone)]
pub struct Reconciler<T> {
    current: Vec<T>,
    events_applied: u64,
    inserted: u64,
    replaced: u64,
}

pub type SubmissionReconciler = Reconciler<KycSubmission>;

impl<T: Keyed + Clone> Reconciler<T> {
    pub fn new() -> Self {
        Self {
            current: Vec::new(),
            events_applied: 0,
            inserted: 0,
            replaced: 0,
        }
    }

    /// Start from an initial load, kept in delivered order.
    ///
    /// Repeated ids in the load collapse onto their first position.
    pub fn seed(records: impl IntoIterator<Item = T>) -> Self {
        let mut reconciler = Self::new();
        for record in records {
            match reconciler.position_of(&record.key()) {
                Some(idx) => reconciler.current[idx] = record,
                None => reconciler.current.push(record),
            }
        }
        debug!(records = reconciler.current.len(), "Reconciler seeded");
        reconciler
    }

    /// Apply one upsert event.
    pub fn apply_event(&mut self, event: UpsertEvent<T>) -> ApplyOutcome {
        let key = event.record.key();
        self.events_applied += 1;

        let outcome = match self.position_of(&key) {
            Some(position) => {
                self.current[position] = event.record;
                self.replaced += 1;
                ApplyOutcome::Replaced { position }
            }
            None => {
                self.current.insert(0, event.record);
                self.inserted += 1;
                ApplyOutcome::Inserted
            }
        };

        debug!(
            event_id = %event.event_id,
            key = %key,
            outcome = ?outcome,
            len = self.current.len(),
            "Upsert applied"
        );

        outcome
    }

    /// Owned copy of the current collection.
    pub fn snapshot(&self) -> Vec<T> {
        self.current.clone()
    }

    pub fn as_slice(&self) -> &[T] {
        &self.current
    }

    pub fn position_of(&self, key: &T::Key) -> Option<usize> {
        self.current.iter().position(|r| &r.key() == key)
    }

    pub fn get(&self, key: &T::Key) -> Option<&T> {
        self.position_of(key).map(|idx| &self.current[idx])
    }

    pub fn len(&self) -> usize {
        self.current.len()
    }

    pub fn is_empty(&self) -> bool {
        self.current.is_empty()
    }

    /// Total events applied since creation.
    pub fn events_applied(&self) -> u64 {
        self.events_applied
    }

    /// Events that inserted a new record.
    pub fn inserted(&self) -> u64 {
        self.inserted
    }

    /// Events that replaced an existing record.
    pub fn replaced(&self) -> u64 {
        self.replaced
    }
}

impl<T: Keyed + Clone> Default for Reconciler<T> {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use types::ids::UserId;
    use types::kyc::{KycPhase, KycStatus};

    fn submission(id: u64, status: KycPhase) -> KycSubmission {
        KycSubmission {
            id: SubmissionId::new(id),
            user_id: UserId::new(100 + id),
            status: KycStatus::from(status),
            submitted_at: None,
            docs: Vec::new(),
            risk_level: Default::default(),
            admin_notes: Vec::new(),
        }
    }

    fn ids(reconciler: &SubmissionReconciler) -> Vec<u64> {
        reconciler.as_slice().iter().map(|s| s.id.get()).collect()
    }

    #[test]
    fn test_insert_then_replace_in_place() {
        let mut reconciler = SubmissionReconciler::new();

        let outcome = reconciler.apply_event(UpsertEvent::new(submission(7, KycPhase::Pending)));
        assert_eq!(outcome, ApplyOutcome::Inserted);
        assert_eq!(ids(&reconciler), vec![7]);

        let outcome = reconciler.apply_event(UpsertEvent::new(submission(7, KycPhase::Approved)));
        assert_eq!(outcome, ApplyOutcome::Replaced { position: 0 });
        assert_eq!(ids(&reconciler), vec![7]);
        assert_eq!(
            reconciler.as_slice()[0].status.phase(),
            Some(KycPhase::Approved)
        );
    }

    #[test]
    fn test_new_records_surface_first() {
        let mut reconciler = SubmissionReconciler::new();
        reconciler.apply_event(UpsertEvent::new(submission(3, KycPhase::Pending)));
        reconciler.apply_event(UpsertEvent::new(submission(1, KycPhase::Pending)));
        assert_eq!(ids(&reconciler), vec![1, 3]);
    }

    #[test]
    fn test_update_keeps_row_position() {
        let mut reconciler = SubmissionReconciler::new();
        for id in [1, 2, 3] {
            reconciler.apply_event(UpsertEvent::new(submission(id, KycPhase::Pending)));
        }
        assert_eq!(ids(&reconciler), vec![3, 2, 1]);

        let outcome =
            reconciler.apply_event(UpsertEvent::new(submission(2, KycPhase::ReuploadRequested)));
        assert_eq!(outcome, ApplyOutcome::Replaced { position: 1 });
        assert_eq!(ids(&reconciler), vec![3, 2, 1]);
        assert_eq!(
            reconciler.get(&SubmissionId::new(2)).unwrap().status.as_str(),
            "ReuploadRequested"
        );
    }

    #[test]
    fn test_reapplying_same_event_is_idempotent() {
        let mut reconciler = SubmissionReconciler::new();
        reconciler.apply_event(UpsertEvent::new(submission(5, KycPhase::Pending)));
        let event = UpsertEvent::new(submission(9, KycPhase::Rejected));

        reconciler.apply_event(event.clone());
        let first = reconciler.snapshot();
        reconciler.apply_event(event);
        assert_eq!(reconciler.snapshot(), first);
    }

    #[test]
    fn test_any_status_accepted() {
        let mut reconciler = SubmissionReconciler::new();
        reconciler.apply_event(UpsertEvent::new(submission(1, KycPhase::Approved)));

        // Approved -> Pending is not a workflow transition; stored anyway
        let mut next = submission(1, KycPhase::Pending);
        next.status = KycStatus::new("Escalated");
        reconciler.apply_event(UpsertEvent::new(next));
        assert_eq!(reconciler.as_slice()[0].status.as_str(), "Escalated");
    }

    #[test]
    fn test_seed_keeps_delivered_order() {
        let reconciler = SubmissionReconciler::seed(vec![
            submission(4, KycPhase::Pending),
            submission(2, KycPhase::Pending),
            submission(4, KycPhase::Approved),
        ]);
        assert_eq!(ids(&reconciler), vec![4, 2]);
        assert_eq!(reconciler.as_slice()[0].status.as_str(), "Approved");
        assert_eq!(reconciler.events_applied(), 0);
    }

    #[test]
    fn test_counters() {
        let mut reconciler = SubmissionReconciler::new();
        reconciler.apply_event(UpsertEvent::new(submission(1, KycPhase::Pending)));
        reconciler.apply_event(UpsertEvent::new(submission(2, KycPhase::Pending)));
        reconciler.apply_event(UpsertEvent::new(submission(1, KycPhase::Approved)));

        assert_eq!(reconciler.events_applied(), 3);
        assert_eq!(reconciler.inserted(), 2);
        assert_eq!(reconciler.replaced(), 1);
        assert_eq!(reconciler.len(), 2);
    }
}

// ── Property-Based Tests ────────────────────────────────────────────
