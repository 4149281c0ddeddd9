//! Fixed-cadence decay ticker for live sessions.

use std::sync::Arc;
use std::time::Duration;

use chrono::Utc;
use tokio::sync::{watch, Mutex};
use tokio::task::JoinHandle;
use tokio::time::MissedTickBehavior;

use crate::engine::PetEngine;

pub type SharedEngine = Arc<Mutex<PetEngine>>;

pub struct DecayScheduler {
    engine: SharedEngine,
    interval: Duration,
}

impl DecayScheduler {
    pub fn new(engine: SharedEngine, interval: Duration) -> Self {
        DecayScheduler { engine, interval }
    }

    pub fn spawn(self, shutdown: watch::Receiver<bool>) -> JoinHandle<u64> {
        tokio::spawn(self.run(shutdown))
    }

    /// Tick until `shutdown` flips to true or its sender is dropped.
    /// The first tick fires immediately, covering the startup decay.
    /// Returns the number of ticks taken.
    pub async fn run(self, mut shutdown: watch::Receiver<bool>) -> u64 {
        let mut ticker = tokio::time::interval(self.interval);
        ticker.set_missed_tick_behavior(MissedTickBehavior::Delay);
        let mut ticks = 0;

        tracing::info!("Decay scheduler started ({}s interval)", self.interval.as_secs());

        loop {
            tokio::select! {
                _ = ticker.tick() => {
                    let report = self.engine.lock().await.apply_decay(Utc::now());
                    ticks += 1;
                    if report.applied {
                        tracing::debug!("Tick {}: decayed {:.2} min", ticks, report.elapsed_minutes);
                    }
                }
                changed = shutdown.changed() => {
                    if changed.is_err() || *shutdown.borrow() {
                        break;
                    }
                }
            }
        }

        tracing::info!("Decay scheduler stopped after {} ticks", ticks);
        ticks
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test(start_paused = true)]
    async fn test_ticks_until_shutdown() {
        let engine = Arc::new(Mutex::new(PetEngine::new("Minnoş", Utc::now())));
        let (tx, rx) = watch::channel(false);
        let handle = DecayScheduler::new(engine, Duration::from_secs(60)).spawn(rx);

        tokio::time::sleep(Duration::from_secs(190)).await;
        tx.send(true).unwrap();

        assert_eq!(handle.await.unwrap(), 4);
    }

    #[tokio::test(start_paused = true)]
    async fn test_startup_tick_applies_decay() {
        let created = Utc::now() - chrono::Duration::minutes(10);
        let engine = Arc::new(Mutex::new(PetEngine::new("Minnoş", created)));
        let (tx, rx) = watch::channel(false);
        let handle = DecayScheduler::new(engine.clone(), Duration::from_secs(60)).spawn(rx);

        tokio::time::sleep(Duration::from_secs(1)).await;
        drop(tx);
        assert_eq!(handle.await.unwrap(), 1);

        let engine = engine.lock().await;
        assert!(engine.state().stats().hunger() < 80.0);
        assert!(engine.state().last_update() > created);
    }
}
