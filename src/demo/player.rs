// Stage player
//
// The demo-mode state machine. The index starts one step before the first
// stage; each `next()` either advances (clamping at the final stage) or,
// when the observed tip changed since the last delivery, re-delivers the
// current stage with the live countdown instead of the fixture's value.

use crate::bill::tip::Tip;
use crate::demo::error::DemoResult;
use crate::demo::stages::{StagePayload, StageSource};

pub struct StagePlayer<S: StageSource> {
    source: S,
    /// -1 before the first delivery.
    index: isize,
    last_tip: Option<Tip>,
    tip_dirty: bool,
    /// Countdown seconds as last observed by the caller's live timer.
    last_countdown: i64,
}

impl<S: StageSource> StagePlayer<S> {
    pub fn new(source: S) -> Self {
        StagePlayer {
            source,
            index: -1,
            last_tip: None,
            tip_dirty: false,
            last_countdown: 0,
        }
    }

    /// Record the tip currently selected by the caller. A change since the
    /// previous observation marks the player dirty, which makes the next
    /// delivery repeat the current stage instead of advancing.
    pub fn observe_tip(&mut self, tip: Tip) {
        match self.last_tip {
            Some(previous) if previous == tip => {}
            Some(_) => {
                self.last_tip = Some(tip);
                self.tip_dirty = true;
            }
            // Nothing recorded yet, so nothing differs
            None => self.last_tip = Some(tip),
        }
    }

    /// Record the live countdown value. Used to override the fixture's
    /// embedded countdown when a stage is re-delivered.
    pub fn observe_countdown(&mut self, seconds: i64) {
        self.last_countdown = seconds;
    }

    fn last_index(&self) -> isize {
        (self.source.stage_count() as isize - 1).max(0)
    }

    fn clamped_index(&self) -> usize {
        self.index.clamp(0, self.last_index()) as usize
    }

    /// Deliver the next stage.
    ///
    /// Dirty (tip changed): re-deliver the current stage, countdown
    /// overridden to the last observed value, and clear the flag.
    /// Clean: advance by one, clamping at the final stage, and record the
    /// new stage's countdown as current.
    pub fn next(&mut self) -> DemoResult<StagePayload> {
        if self.tip_dirty {
            self.tip_dirty = false;
            let index = self.clamped_index();
            let mut stage = self.source.stage(index)?;
            stage.ride_discount_seconds = self.last_countdown;
            tracing::debug!(index, "re-delivering stage after tip change");
            return Ok(stage);
        }

        self.index = (self.index + 1).min(self.last_index());
        let index = self.clamped_index();
        let stage = self.source.stage(index)?;
        self.last_countdown = stage.ride_discount_seconds;
        tracing::debug!(index, "delivering stage");
        Ok(stage)
    }

    /// Deliver the stage at the current position without advancing and
    /// without consulting the dirty flag. Checkout reads "where we are".
    pub fn current(&self) -> DemoResult<StagePayload> {
        self.source.stage(self.clamped_index())
    }
}
