use crate::bill::models::Bill;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Check-in status enum representing the lifecycle of an open tab
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CheckinStatus {
    /// Tab is open and accepting bill updates
    Open,
    /// Guest has asked to close; awaiting settlement
    PendingClosure,
    /// Tab is settled
    Closed,
}

impl CheckinStatus {
    /// Convert status to string representation
    pub fn as_str(&self) -> &'static str {
        match self {
            CheckinStatus::Open => "open",
            CheckinStatus::PendingClosure => "pending_closure",
            CheckinStatus::Closed => "closed",
        }
    }

    /// Parse status from string
    pub fn from_str(s: &str) -> Result<Self, String> {
        match s.to_lowercase().as_str() {
            "open" => Ok(CheckinStatus::Open),
            "pending_closure" => Ok(CheckinStatus::PendingClosure),
            "closed" => Ok(CheckinStatus::Closed),
            _ => Err(format!("Invalid check-in status: {}", s)),
        }
    }
}

impl Default for CheckinStatus {
    fn default() -> Self {
        CheckinStatus::Open
    }
}

impl std::fmt::Display for CheckinStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// A guest's open tab at one venue: the live bill plus ride-promotion state.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Checkin {
    pub id: Uuid,
    pub venue_id: i32,
    pub opened_at: DateTime<Utc>,
    pub status: CheckinStatus,
    pub bill: Bill,
    /// Seconds until the free-ride promotion unlocks; 0 means unlocked.
    pub ride_discount_seconds: i64,
}

impl Checkin {
    pub fn new(venue_id: i32, bill: Bill, ride_discount_seconds: i64) -> Self {
        Checkin {
            id: Uuid::new_v4(),
            venue_id,
            opened_at: Utc::now(),
            status: CheckinStatus::Open,
            bill,
            ride_discount_seconds,
        }
    }

    /// Whether the free-ride promotion has unlocked.
    pub fn ride_discount_available(&self) -> bool {
        self.ride_discount_seconds <= 0
    }
}
