// Stage fixtures
//
// Demo builds replace live check-in polling with a scripted sequence of
// canned bill snapshots. Each stage is one snapshot; the bundled script
// carries four.

use crate::bill::models::LineItem;
use crate::demo::error::{DemoError, DemoResult};
use crate::money::Money;
use serde::{Deserialize, Serialize};

/// One canned check-in snapshot.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StagePayload {
    #[serde(default)]
    pub label: Option<String>,
    pub items: Vec<LineItem>,
    #[serde(default)]
    pub sub_total: Money,
    #[serde(default)]
    pub approximate_tax: Money,
    #[serde(default)]
    pub free_drinks_count: u32,
    #[serde(default)]
    pub free_drinks_price: Money,
    #[serde(default)]
    pub discount_percent: i64,
    /// Seconds until the free-ride promotion unlocks, as of this snapshot.
    #[serde(default)]
    pub ride_discount_seconds: i64,
}

/// Resolves a stage index to its canned payload.
///
/// A failed lookup means "no data for this stage": the I/O or decode
/// problem stays inside the source, surfaced only as a [`DemoError`].
pub trait StageSource {
    fn stage_count(&self) -> usize;

    fn stage(&self, index: usize) -> DemoResult<StagePayload>;
}

/// The stage script bundled into the binary.
#[derive(Debug, Clone)]
pub struct EmbeddedStages {
    stages: Vec<StagePayload>,
}

const STAGE_FIXTURE: &str = include_str!("fixtures/stages.json");

impl EmbeddedStages {
    /// Parse the bundled fixture document.
    pub fn load() -> DemoResult<Self> {
        let stages: Vec<StagePayload> = serde_json::from_str(STAGE_FIXTURE)?;
        Ok(EmbeddedStages { stages })
    }

    /// Build a source from explicit payloads (used by tests).
    pub fn from_stages(stages: Vec<StagePayload>) -> Self {
        EmbeddedStages { stages }
    }
}

impl StageSource for EmbeddedStages {
    fn stage_count(&self) -> usize {
        self.stages.len()
    }

    fn stage(&self, index: usize) -> DemoResult<StagePayload> {
        self.stages
            .get(index)
            .cloned()
            .ok_or(DemoError::FixtureUnavailable(index))
    }
}
