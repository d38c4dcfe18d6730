// Display refresh for a running timer.
//
// One displayed second per tick. The task lives exactly as long as its
// handle: `cancel` or dropping the `Ticker` aborts it.

use std::sync::Arc;
use std::sync::atomic::{AtomicI64, Ordering};
use std::time::Duration;
use tokio::task::JoinHandle;
use tokio::time::{Instant, MissedTickBehavior, interval_at};

pub const TICK: Duration = Duration::from_secs(1);

#[derive(Debug)]
pub struct Ticker {
    handle: JoinHandle<()>,
}

impl Ticker {
    pub fn start(displayed: Arc<AtomicI64>) -> Self {
        let handle = tokio::spawn(async move {
            let mut interval = interval_at(Instant::now() + TICK, TICK);
            interval.set_missed_tick_behavior(MissedTickBehavior::Delay);
            loop {
                interval.tick().await;
                displayed.fetch_add(1, Ordering::SeqCst);
            }
        });
        Self { handle }
    }

    pub fn cancel(self) {
        self.handle.abort();
    }

    pub fn is_running(&self) -> bool {
        !self.handle.is_finished()
    }
}

impl Drop for Ticker {
    fn drop(&mut self) {
        self.handle.abort();
    }
}
