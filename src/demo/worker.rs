// Demo check-in worker
//
// Stands in for the live check-in/bill-update network calls in demo
// builds. Each advance pulls the next scripted stage, rebuilds a
// live-shaped check-in from it, and re-applies the currently simulated
// tip so the resulting bill obeys the same invariants as a live one.

use crate::bill::assembler::BillAssembler;
use crate::bill::models::BillTotals;
use crate::bill::tip::{Tip, TipCalculator, TipPolicy};
use crate::checkin::models::Checkin;
use crate::config::EngineConfig;
use crate::demo::countdown::Countdown;
use crate::demo::error::{DemoError, DemoResult};
use crate::demo::player::StagePlayer;
use crate::demo::stages::{StagePayload, StageSource};
use std::time::Duration;

pub struct DemoCheckinWorker<S: StageSource> {
    player: StagePlayer<S>,
    countdown: Countdown,
    policy: TipPolicy,
    tip: Tip,
    stage_interval: Duration,
    venue_id: i32,
    last_checkin: Option<Checkin>,
}

impl<S: StageSource> DemoCheckinWorker<S> {
    pub fn new(source: S, config: &EngineConfig, venue_id: i32) -> Self {
        DemoCheckinWorker {
            player: StagePlayer::new(source),
            countdown: Countdown::new(),
            policy: config.tip_policy(),
            tip: Tip::Percent(config.default_gratuity_percent),
            stage_interval: Duration::from_secs(config.stage_interval_secs),
            venue_id,
            last_checkin: None,
        }
    }

    /// The tip the simulation is currently running with.
    pub fn tip(&self) -> Tip {
        self.tip
    }

    /// Select a new simulated tip. Takes effect on the next delivery.
    pub fn select_tip(&mut self, tip: Tip) {
        self.tip = tip;
    }

    /// Live countdown seconds, ticking independently of stage delivery.
    pub fn ride_discount_seconds(&self) -> i64 {
        self.countdown.remaining()
    }

    /// Deliver the next simulated check-in update.
    ///
    /// On fixture failure the last known check-in is returned instead;
    /// the error propagates only when there is no prior state to fall
    /// back to.
    pub fn advance(&mut self) -> DemoResult<Checkin> {
        self.player.observe_tip(self.tip);
        self.player.observe_countdown(self.countdown.remaining());
        match self.player.next() {
            Ok(stage) => Ok(self.deliver(stage)),
            Err(error) => self.fall_back(error),
        }
    }

    /// Wait one configured stage interval, then deliver the next update.
    /// This is the cadence the live polling loop runs at.
    pub async fn poll(&mut self) -> DemoResult<Checkin> {
        tokio::time::sleep(self.stage_interval).await;
        self.advance()
    }

    /// Deliver the current simulated check-in without advancing the
    /// script. Checkout must reflect where the simulation is, not move it.
    pub fn checkout(&mut self) -> DemoResult<Checkin> {
        match self.player.current() {
            Ok(stage) => Ok(self.deliver(stage)),
            Err(error) => self.fall_back(error),
        }
    }

    fn fall_back(&self, error: DemoError) -> DemoResult<Checkin> {
        match &self.last_checkin {
            Some(previous) => {
                tracing::warn!(%error, "stage fixture unavailable, keeping last check-in");
                Ok(previous.clone())
            }
            None => Err(error),
        }
    }

    /// Rebuild a live-shaped check-in from a stage payload: assemble the
    /// bill with zero gratuity, seed the running total, then re-apply the
    /// simulated tip through the normal tip path.
    fn deliver(&mut self, stage: StagePayload) -> Checkin {
        let totals = BillTotals {
            sub_total: stage.sub_total,
            approximate_tax: stage.approximate_tax,
            free_drinks_count: stage.free_drinks_count,
            free_drinks_price: stage.free_drinks_price,
            ..BillTotals::default()
        };
        let mut bill =
            BillAssembler::assemble(stage.items, totals, stage.discount_percent, 0, None);
        bill.totals.total = bill.total_price();
        let bill = TipCalculator::apply(&self.policy, &bill, self.tip);

        let checkin = match self.last_checkin.take() {
            // Keep identity stable across the simulated session
            Some(mut previous) => {
                previous.bill = bill;
                previous.ride_discount_seconds = stage.ride_discount_seconds;
                previous
            }
            None => Checkin::new(self.venue_id, bill, stage.ride_discount_seconds),
        };

        self.countdown.set(stage.ride_discount_seconds);
        self.last_checkin = Some(checkin.clone());
        checkin
    }
}
