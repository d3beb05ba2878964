//! Autoplay timer.
//!
//! The timer is the only time-based source in the carousel. It runs as a
//! tokio task and is aborted when its handle is dropped, so a timer can never
//! outlive the component that armed it.

use std::time::Duration;

use tokio::task::JoinHandle;
use tokio::time::{Instant, MissedTickBehavior};

/// One autoplay tick, stamped with the carousel generation it was armed for.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AutoplayTick {
    pub generation: u64,
}

/// Handle to a running autoplay timer.
#[derive(Debug)]
pub struct AutoplayTimer {
    generation: u64,
    interval: Duration,
    handle: JoinHandle<()>,
}

impl AutoplayTimer {
    /// Spawns a ticker that calls `sink` every `interval`, starting one
    /// interval from now. The task ends on its own once `sink` returns
    /// `false` (receiver gone).
    ///
    /// Must be called from within a tokio runtime.
    pub fn arm<F>(interval: Duration, generation: u64, sink: F) -> Self
    where
        F: Fn(AutoplayTick) -> bool + Send + 'static,
    {
        let interval = interval.max(Duration::from_millis(1));
        let first_tick = Instant::now() + interval;
        let handle = tokio::spawn(async move {
            let mut ticker = tokio::time::interval_at(first_tick, interval);
            ticker.set_missed_tick_behavior(MissedTickBehavior::Delay);
            loop {
                ticker.tick().await;
                if !sink(AutoplayTick { generation }) {
                    tracing::trace!(generation, "Autoplay receiver closed");
                    break;
                }
            }
        });

        tracing::debug!(generation, interval_ms = interval.as_millis() as u64, "Autoplay timer armed");
        Self {
            generation,
            interval,
            handle,
        }
    }

    pub fn generation(&self) -> u64 {
        self.generation
    }

    pub fn interval(&self) -> Duration {
        self.interval
    }

    /// Whether this timer was armed for `generation` at `interval`.
    pub fn matches(&self, generation: u64, interval: Duration) -> bool {
        self.generation == generation && self.interval == interval.max(Duration::from_millis(1))
    }

    pub fn is_finished(&self) -> bool {
        self.handle.is_finished()
    }

    /// Stops the timer. Equivalent to dropping the handle.
    pub fn disarm(self) {}
}

impl Drop for AutoplayTimer {
    fn drop(&mut self) {
        self.handle.abort();
        tracing::debug!(generation = self.generation, "Autoplay timer disarmed");
    }
}

#[cfg(test)]
mod tests {
    use tokio::sync::mpsc;

    use super::*;

    #[tokio::test(start_paused = true)]
    async fn test_ticks_once_per_interval() {
        let (tx, mut rx) = mpsc::unbounded_channel();
        let timer = AutoplayTimer::arm(Duration::from_millis(3000), 7, move |tick| tx.send(tick).is_ok());

        tokio::time::advance(Duration::from_millis(2999)).await;
        tokio::task::yield_now().await;
        assert!(rx.try_recv().is_err());

        tokio::time::advance(Duration::from_millis(1)).await;
        let tick = rx.recv().await.unwrap();
        assert_eq!(tick, AutoplayTick { generation: 7 });

        tokio::time::advance(Duration::from_millis(3000)).await;
        assert_eq!(rx.recv().await.unwrap().generation, 7);
        assert!(timer.matches(7, Duration::from_millis(3000)));
    }

    #[tokio::test(start_paused = true)]
    async fn test_pending_until_first_interval() {
        let (tx, mut rx) = mpsc::unbounded_channel();
        let _timer = AutoplayTimer::arm(Duration::from_millis(1000), 2, move |tick| tx.send(tick).is_ok());

        let mut recv = tokio_test::task::spawn(rx.recv());
        tokio_test::assert_pending!(recv.poll());

        tokio::time::advance(Duration::from_millis(1000)).await;
        for _ in 0..3 {
            tokio::task::yield_now().await;
        }
        tokio_test::assert_ready_eq!(recv.poll(), Some(AutoplayTick { generation: 2 }));
    }

    #[tokio::test(start_paused = true)]
    async fn test_drop_stops_ticks() {
        let (tx, mut rx) = mpsc::unbounded_channel();
        let timer = AutoplayTimer::arm(Duration::from_millis(100), 1, move |tick| tx.send(tick).is_ok());
        timer.disarm();

        tokio::time::advance(Duration::from_millis(500)).await;
        tokio::task::yield_now().await;
        // Sender was owned by the aborted task, so the channel closes empty
        assert!(rx.recv().await.is_none());
    }

    #[tokio::test(start_paused = true)]
    async fn test_task_ends_when_receiver_dropped() {
        let (tx, rx) = mpsc::unbounded_channel::<AutoplayTick>();
        let timer = AutoplayTimer::arm(Duration::from_millis(10), 0, move |tick| tx.send(tick).is_ok());
        drop(rx);

        tokio::time::advance(Duration::from_millis(10)).await;
        for _ in 0..5 {
            tokio::task::yield_now().await;
        }
        assert!(timer.is_finished());
    }
}
