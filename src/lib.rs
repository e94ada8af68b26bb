// tab-engine
//
// Domain engine for bar-tab management: bill assembly with line-item
// merging, integer-cents discount/tax/gratuity computation, tip selection
// with floor clamping, an owned check-in store, and a fixture-driven
// demo-mode driver that simulates backend bill progression.
//
// Network decode (upstream) and presentation (downstream) are external
// collaborators; this crate consumes already-decoded values and exposes
// computed monetary fields.

pub mod bill;
pub mod checkin;
pub mod config;
pub mod demo;
pub mod money;
pub mod profile;
pub mod validation;

// Re-export commonly used types for convenience
pub use bill::{Bill, BillAssembler, BillError, BillResult, BillTotals, LineItem, Tip,
    TipCalculator, TipPolicy, TipRequest};
pub use checkin::{Checkin, CheckinError, CheckinResult, CheckinStatus, CheckinStore,
    StatusMachine};
pub use config::{EngineConfig, EngineDefaults, EngineOverrides};
pub use demo::{Countdown, DemoCheckinWorker, DemoError, DemoResult, EmbeddedStages,
    StagePayload, StagePlayer, StageSource};
pub use money::Money;
pub use profile::{LoadOrigin, Loaded, ProfileError, ProfileResult, ProfileStore};

#[cfg(test)]
mod tests;
