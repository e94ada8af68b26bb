// Ride-discount countdown
//
// A one-second repeating ticker that decrements a shared seconds counter
// while it is above zero. The ticker runs independently of stage
// transitions; every stage delivery resets the counter through `set`.
// Dropping the owner aborts the ticker task.

use std::sync::atomic::{AtomicI64, Ordering};
use std::sync::Arc;
use std::time::Duration;
use tokio::task::JoinHandle;

#[derive(Debug, Default)]
pub struct Countdown {
    seconds: Arc<AtomicI64>,
    ticker: Option<JoinHandle<()>>,
}

impl Countdown {
    pub fn new() -> Self {
        Self::default()
    }

    /// Seconds remaining.
    pub fn remaining(&self) -> i64 {
        self.seconds.load(Ordering::Relaxed)
    }

    /// Reset the counter and make sure the ticker is running.
    ///
    /// Must be called from within a tokio runtime.
    pub fn set(&mut self, seconds: i64) {
        self.seconds.store(seconds.max(0), Ordering::Relaxed);
        if self.ticker.is_none() {
            self.spawn_ticker();
        }
    }

    fn spawn_ticker(&mut self) {
        let seconds = Arc::clone(&self.seconds);
        self.ticker = Some(tokio::spawn(async move {
            loop {
                tokio::time::sleep(Duration::from_secs(1)).await;
                // Decrement only while positive; idle at zero
                let _ = seconds.fetch_update(Ordering::Relaxed, Ordering::Relaxed, |current| {
                    if current > 0 {
                        Some(current - 1)
                    } else {
                        None
                    }
                });
            }
        }));
    }

    #[cfg(test)]
    pub(crate) fn shared(&self) -> Arc<AtomicI64> {
        Arc::clone(&self.seconds)
    }
}

impl Drop for Countdown {
    fn drop(&mut self) {
        if let Some(ticker) = self.ticker.take() {
            ticker.abort();
        }
    }
}
