// Crate-level scenario tests
//
// Exercise the engine the way the application does: assemble a bill from
// an upstream payload, adjust the tip, run a demo session against the
// bundled stage script, and keep state in the check-in store.

use crate::bill::{Bill, BillAssembler, BillTotals, LineItem, Tip, TipCalculator, TipPolicy};
use crate::checkin::{Checkin, CheckinStore};
use crate::config::{EngineConfig, EngineDefaults, EngineOverrides};
use crate::demo::{DemoCheckinWorker, EmbeddedStages};
use crate::money::Money;

/// Install a fmt subscriber so engine tracing shows up under
/// `cargo test -- --nocapture`. Later calls are no-ops.
fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_target(false)
        .with_level(true)
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("debug")),
        )
        .try_init();
}

fn item(name: &str, quantity: u32, unit_cents: i64) -> LineItem {
    LineItem {
        identifier: None,
        name: name.to_string(),
        description: None,
        quantity,
        unit_price: Money::from_cents(unit_cents),
    }
}

/// Assemble, discount, tax, and tip one bill end to end.
#[test]
fn test_bill_lifecycle_end_to_end() {
    init_tracing();
    let raw_items = vec![
        item("Old Fashioned", 1, 1000),
        item("Old Fashioned", 1, 1000),
    ];
    let totals = BillTotals {
        sub_total: Money::from_cents(2000),
        approximate_tax: Money::from_cents(150),
        ..BillTotals::default()
    };
    let bill = BillAssembler::assemble(raw_items, totals, 20, 0, None);
    assert_eq!(bill.items.len(), 1);
    assert_eq!(bill.items[0].quantity, 2);

    let bill = TipCalculator::apply(&TipPolicy::default(), &bill, Tip::Percent(18));
    assert_eq!(bill.discount_price(), Money::from_cents(400));
    assert_eq!(bill.gratuity_price(), Money::from_cents(360));
    assert_eq!(bill.tax_price(), Money::from_cents(150));
    assert_eq!(bill.total_price(), Money::from_cents(2110));
}

/// Switching between percent and exact tips replaces the gratuity and
/// keeps the running total consistent.
#[test]
fn test_tip_switching_keeps_total_consistent() {
    let base = Bill {
        totals: BillTotals {
            sub_total: Money::from_cents(4800),
            free_drinks_price: Money::from_cents(1200),
            total: Money::from_cents(4800),
            ..BillTotals::default()
        },
        ..Bill::default()
    };
    let policy = TipPolicy::default();

    let mut bill = base;
    for tip in [
        Tip::Percent(20),
        Tip::Exact(Money::from_cents(999)),
        Tip::Percent(10),
        Tip::Exact(Money::from_cents(0)),
    ] {
        bill = TipCalculator::apply(&policy, &bill, tip);
        assert_eq!(
            bill.totals.total,
            Money::from_cents(4800) + bill.gratuity_price()
        );
    }
}

/// A full demo session: scripted progression, a tip change mid-session,
/// and storage of each delivered check-in.
#[tokio::test]
async fn test_demo_session_against_store() {
    init_tracing();
    let config = EngineConfig::resolve(
        EngineDefaults::default(),
        EngineOverrides {
            default_gratuity_percent: Some(18),
            ..EngineOverrides::default()
        },
    );
    let store = CheckinStore::new();
    let mut worker = DemoCheckinWorker::new(EmbeddedStages::load().unwrap(), &config, 7);

    // Stages 0 and 1 in order
    let first = worker.advance().unwrap();
    store.upsert(first.clone()).await;
    let second = worker.advance().unwrap();
    store.upsert(second.clone()).await;
    assert_eq!(second.bill.gratuity_percent, 18);
    assert_eq!(store.len().await, 1); // same venue, replaced in place

    // The guest picks an exact tip: the next update repeats the stage
    worker.select_tip(Tip::Exact(Money::from_cents(700)));
    let repeated = worker.advance().unwrap();
    assert_eq!(
        repeated.bill.totals.sub_total,
        second.bill.totals.sub_total
    );
    assert_eq!(repeated.bill.gratuity_price(), Money::from_cents(700));
    store.upsert(repeated).await;

    // Progression resumes and eventually parks on the last stage
    for _ in 0..5 {
        let checkin = worker.advance().unwrap();
        store.upsert(checkin).await;
    }
    let parked = store.require(7).await.unwrap();
    assert_eq!(parked.bill.totals.sub_total, Money::from_cents(5300));
    assert!(parked.ride_discount_available());

    // Checkout reflects the parked stage without advancing
    let at_checkout = worker.checkout().unwrap();
    assert_eq!(at_checkout.bill.totals.sub_total, Money::from_cents(5300));
}

/// Checked-out demo bills obey the same arithmetic as live ones.
#[tokio::test]
async fn test_demo_bill_matches_live_arithmetic() {
    let mut worker =
        DemoCheckinWorker::new(EmbeddedStages::load().unwrap(), &EngineConfig::default(), 7);
    worker.advance().unwrap();
    worker.advance().unwrap();
    let checkin: Checkin = worker.advance().unwrap(); // comped round

    let bill = &checkin.bill;
    // Stage 2 of the script: subtotal 2700, 10% discount, one comped drink
    assert_eq!(bill.discount_price(), Money::from_cents(270));
    // Default 20% of (2700 + 750)
    assert_eq!(bill.gratuity_price(), Money::from_cents(690));
    assert_eq!(
        bill.total_price(),
        Money::from_cents(2700 - 270 + 690 + 223)
    );
    assert_eq!(bill.totals.total, bill.total_price());
}
