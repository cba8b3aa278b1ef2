use std::sync::Arc;
use std::time::Duration;

use log::{debug, warn};
use tokio::sync::watch;
use tokio::task::JoinHandle;
use tokio::time::{MissedTickBehavior, interval};

use crate::state::active_games::SharedActiveGames;
use crate::store::ScoreStore;

/// Periodic refresh of the active-game set, bound to the lifetime of the
/// view that needs it.
///
/// Each tick fetches the full snapshot and replaces the shared state; ticks
/// never overlap because the fetch is awaited inside the loop and missed
/// ticks are delayed, not stacked. `stop` prevents any future poll; a
/// request already in flight completes on its own.
pub struct LivePoller {
    shutdown: watch::Sender<bool>,
    updates: watch::Receiver<u64>,
    handle: JoinHandle<()>,
}

impl LivePoller {
    pub fn spawn<S>(store: Arc<S>, state: SharedActiveGames, period: Duration) -> Self
    where
        S: ScoreStore + Send + Sync + 'static,
    {
        let (shutdown_tx, mut shutdown_rx) = watch::channel(false);
        let (update_tx, update_rx) = watch::channel(0u64);

        let handle = tokio::spawn(async move {
            let mut ticker = interval(period);
            ticker.set_missed_tick_behavior(MissedTickBehavior::Delay);
            let mut revision: u64 = 0;

            loop {
                tokio::select! {
                    _ = shutdown_rx.changed() => break,
                    _ = ticker.tick() => {}
                }

                match store.list_active_games().await {
                    Ok(games) => {
                        state
                            .lock()
                            .expect("active games lock poisoned")
                            .replace_all(games);
                        revision += 1;
                        let _ = update_tx.send(revision);
                    }
                    // A failed poll leaves the cache as it was; the next
                    // tick simply tries again.
                    Err(e) => warn!("Live refresh failed: {e}"),
                }
            }

            debug!("Live poller stopped");
        });

        Self {
            shutdown: shutdown_tx,
            updates: update_rx,
            handle,
        }
    }

    /// A receiver that changes whenever a refresh lands. The value is a
    /// monotonically increasing revision number.
    pub fn updates(&self) -> watch::Receiver<u64> {
        self.updates.clone()
    }

    /// Cancel future polls and wait for the task to wind down.
    pub async fn stop(self) {
        let _ = self.shutdown.send(true);
        let _ = self.handle.await;
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Mutex;
    use std::sync::atomic::{AtomicUsize, Ordering};

    use async_trait::async_trait;

    use crate::domain::models::{ActiveGame, CurrentScores};
    use crate::errors::{Error, Result};
    use crate::scoring::winner::Winner;
    use crate::state::active_games;

    use super::*;

    #[derive(Default)]
    struct CountingStore {
        polls: AtomicUsize,
        games: Mutex<Vec<ActiveGame>>,
        fail: bool,
    }

    #[async_trait]
    impl ScoreStore for CountingStore {
        async fn list_active_games(&self) -> Result<Vec<ActiveGame>> {
            self.polls.fetch_add(1, Ordering::SeqCst);
            if self.fail {
                return Err(Error::Api {
                    status: 503,
                    detail: "unavailable".to_string(),
                });
            }
            Ok(self.games.lock().expect("games lock").clone())
        }

        async fn current_scores(&self, _game_id: i64) -> Result<CurrentScores> {
            Ok(CurrentScores::default())
        }

        async fn apply_score_delta(
            &self,
            _game_id: i64,
            _participant_index: usize,
            _delta: i64,
        ) -> Result<CurrentScores> {
            Ok(CurrentScores::default())
        }

        async fn set_participant_time(
            &self,
            _game_id: i64,
            _participant_index: usize,
            _time: &str,
        ) -> Result<CurrentScores> {
            Ok(CurrentScores::default())
        }

        async fn declare_winner(&self, _game_id: i64, _winner: &Winner) -> Result<()> {
            Ok(())
        }
    }

    #[tokio::test]
    async fn polls_on_the_interval_and_stops_cleanly() {
        let store = Arc::new(CountingStore::default());
        let state = active_games::shared();

        let poller = LivePoller::spawn(store.clone(), state, Duration::from_millis(10));
        let mut updates = poller.updates();

        updates.changed().await.expect("first refresh lands");
        tokio::time::sleep(Duration::from_millis(45)).await;
        let while_running = store.polls.load(Ordering::SeqCst);
        assert!(while_running >= 2, "expected repeated polls, saw {while_running}");

        poller.stop().await;
        let after_stop = store.polls.load(Ordering::SeqCst);
        tokio::time::sleep(Duration::from_millis(40)).await;
        assert_eq!(store.polls.load(Ordering::SeqCst), after_stop);
    }

    #[tokio::test]
    async fn failed_polls_keep_polling_without_updates() {
        let store = Arc::new(CountingStore {
            fail: true,
            ..Default::default()
        });
        let state = active_games::shared();

        let poller = LivePoller::spawn(store.clone(), state, Duration::from_millis(10));
        let updates = poller.updates();

        tokio::time::sleep(Duration::from_millis(45)).await;
        assert!(store.polls.load(Ordering::SeqCst) >= 2);
        // No successful refresh, so the revision never moved.
        assert_eq!(*updates.borrow(), 0);

        poller.stop().await;
    }
}
