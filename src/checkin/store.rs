// Check-in store
//
// Explicitly owned repository of open check-ins keyed by venue. Replaces
// ambient global state with an object passed by Arc reference to whichever
// component needs it. Reads and writes go through async accessors over a
// single RwLock.

use crate::checkin::error::{CheckinError, CheckinResult};
use crate::checkin::models::Checkin;
use std::collections::HashMap;
use std::sync::Arc;
use tokio::sync::RwLock;

/// Repository of open check-ins, one per venue.
#[derive(Debug, Default)]
pub struct CheckinStore {
    inner: Arc<RwLock<HashMap<i32, Checkin>>>,
}

impl CheckinStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Fetch the check-in for a venue, if any.
    pub async fn get(&self, venue_id: i32) -> Option<Checkin> {
        self.inner.read().await.get(&venue_id).cloned()
    }

    /// Fetch the check-in for a venue, erroring when none exists.
    pub async fn require(&self, venue_id: i32) -> CheckinResult<Checkin> {
        self.get(venue_id)
            .await
            .ok_or(CheckinError::NotFound(venue_id))
    }

    /// Insert or replace the check-in for its venue.
    pub async fn upsert(&self, checkin: Checkin) {
        tracing::debug!(venue_id = checkin.venue_id, checkin_id = %checkin.id, "storing check-in");
        self.inner.write().await.insert(checkin.venue_id, checkin);
    }

    /// Remove and return a venue's check-in.
    pub async fn remove(&self, venue_id: i32) -> Option<Checkin> {
        let removed = self.inner.write().await.remove(&venue_id);
        if removed.is_some() {
            tracing::info!(venue_id, "check-in removed");
        }
        removed
    }

    pub async fn clear(&self) {
        self.inner.write().await.clear();
    }

    pub async fn len(&self) -> usize {
        self.inner.read().await.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.inner.read().await.is_empty()
    }
}

impl Clone for CheckinStore {
    fn clone(&self) -> Self {
        // Clones share the same underlying map
        CheckinStore {
            inner: Arc::clone(&self.inner),
        }
    }
}
