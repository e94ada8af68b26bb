use crate::checkin::error::{CheckinError, CheckinResult};
use crate::checkin::models::CheckinStatus;

/// Service for managing check-in status transitions
pub struct StatusMachine;

impl StatusMachine {
    /// Check if a status transition is valid
    ///
    /// # Valid Transitions
    /// - Open → PendingClosure, Closed
    /// - PendingClosure → Closed
    /// - Closed → (no transitions except to itself)
    /// - Any status → Same status (idempotent)
    pub fn is_valid_transition(from: CheckinStatus, to: CheckinStatus) -> bool {
        if from == to {
            return true;
        }

        match (from, to) {
            (CheckinStatus::Open, CheckinStatus::PendingClosure) => true,
            (CheckinStatus::Open, CheckinStatus::Closed) => true,
            (CheckinStatus::PendingClosure, CheckinStatus::Closed) => true,
            (CheckinStatus::Closed, _) => false,
            _ => false,
        }
    }

    /// Attempt to transition from one status to another
    ///
    /// # Returns
    /// `Ok(to)` if the transition is valid, `Err(CheckinError)` otherwise
    pub fn transition(from: CheckinStatus, to: CheckinStatus) -> CheckinResult<CheckinStatus> {
        if Self::is_valid_transition(from, to) {
            Ok(to)
        } else {
            Err(CheckinError::InvalidTransition(format!(
                "from {} to {}",
                from, to
            )))
        }
    }
}
