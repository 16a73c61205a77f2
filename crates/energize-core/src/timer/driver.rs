//! Real-time tick source for the focus timer.
//!
//! [`schedule_every`] runs a callback on a tokio interval and hands back a
//! [`TickHandle`] that cancels it. [`TimerDriver`] owns exactly one such handle
//! while the timer is active and cancels it on pause, reset, preset selection
//! and session completion.
//!
//! Requires a running tokio runtime.

use std::ops::ControlFlow;
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};
use std::time::Duration;

use tokio::sync::mpsc;
use tokio::task::JoinHandle;
use tokio::time::{interval_at, Instant, MissedTickBehavior};
use tracing::debug;

use super::engine::FocusTimer;
use crate::error::ValidationError;
use crate::events::Event;

/// Cancels the scheduled callback when cancelled or dropped.
#[derive(Debug)]
pub struct TickHandle {
    task: JoinHandle<()>,
}

impl TickHandle {
    pub fn cancel(self) {
        self.task.abort();
    }

    /// True once the callback stopped itself or was cancelled.
    pub fn is_finished(&self) -> bool {
        self.task.is_finished()
    }
}

impl Drop for TickHandle {
    fn drop(&mut self) {
        self.task.abort();
    }
}

/// Invoke `callback` every `period`, first after one full period, until it
/// returns `ControlFlow::Break` or the handle is cancelled.
pub fn schedule_every<F>(period: Duration, mut callback: F) -> TickHandle
where
    F: FnMut() -> ControlFlow<()> + Send + 'static,
{
    let task = tokio::spawn(async move {
        let mut interval = interval_at(Instant::now() + period, period);
        interval.set_missed_tick_behavior(MissedTickBehavior::Delay);
        loop {
            interval.tick().await;
            if callback().is_break() {
                break;
            }
        }
    });
    TickHandle { task }
}

/// Drives a [`FocusTimer`] in real time.
///
/// Each tick publishes a `StateSnapshot` on the event channel, followed by a
/// `SessionCompleted` event when the countdown finishes.
pub struct TimerDriver {
    timer: Arc<Mutex<FocusTimer>>,
    events: mpsc::UnboundedSender<Event>,
    ticker: Option<TickHandle>,
    period: Duration,
}

impl TimerDriver {
    /// Wrap `timer` with a one second tick period.
    pub fn new(timer: FocusTimer) -> (Self, mpsc::UnboundedReceiver<Event>) {
        Self::with_period(timer, Duration::from_secs(1))
    }

    pub fn with_period(
        timer: FocusTimer,
        period: Duration,
    ) -> (Self, mpsc::UnboundedReceiver<Event>) {
        let (tx, rx) = mpsc::unbounded_channel();
        let driver = Self {
            timer: Arc::new(Mutex::new(timer)),
            events: tx,
            ticker: None,
            period,
        };
        (driver, rx)
    }

    /// Copy of the current timer state.
    pub fn timer(&self) -> FocusTimer {
        self.lock().clone()
    }

    pub fn snapshot(&self) -> Event {
        self.lock().snapshot()
    }

    /// Whether a tick source is currently live.
    pub fn is_ticking(&self) -> bool {
        self.ticker.as_ref().is_some_and(|t| !t.is_finished())
    }

    /// Start or pause. Starting schedules the tick source, pausing cancels it.
    pub fn toggle(&mut self) -> Event {
        let (event, active) = {
            let mut timer = self.lock();
            let event = timer.toggle();
            (event, timer.is_active())
        };
        if active {
            self.start_ticking();
        } else {
            self.stop_ticking();
        }
        event
    }

    pub fn reset(&mut self) -> Event {
        self.stop_ticking();
        self.lock().reset()
    }

    pub fn select_preset(&mut self, minutes: u32) -> Result<Event, ValidationError> {
        let event = self.lock().select_preset(minutes)?;
        self.stop_ticking();
        Ok(event)
    }

    fn start_ticking(&mut self) {
        self.stop_ticking();
        let timer = Arc::clone(&self.timer);
        let events = self.events.clone();
        debug!(period_ms = self.period.as_millis() as u64, "tick source scheduled");
        self.ticker = Some(schedule_every(self.period, move || {
            let mut timer = timer.lock().unwrap_or_else(PoisonError::into_inner);
            let completed = timer.tick();
            if events.send(timer.snapshot()).is_err() {
                return ControlFlow::Break(());
            }
            if let Some(event) = completed {
                // A closed receiver is irrelevant here; the source stops anyway.
                let _ = events.send(event);
                return ControlFlow::Break(());
            }
            if timer.is_active() {
                ControlFlow::Continue(())
            } else {
                ControlFlow::Break(())
            }
        }));
    }

    fn stop_ticking(&mut self) {
        if let Some(ticker) = self.ticker.take() {
            debug!("tick source cancelled");
            ticker.cancel();
        }
    }

    fn lock(&self) -> MutexGuard<'_, FocusTimer> {
        self.timer.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

impl Drop for TimerDriver {
    fn drop(&mut self) {
        self.stop_ticking();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::timer::{SessionType, TimerSettings};
    use std::sync::atomic::{AtomicU32, Ordering};

    #[tokio::test(start_paused = true)]
    async fn schedule_every_stops_on_break() {
        let count = Arc::new(AtomicU32::new(0));
        let seen = Arc::clone(&count);
        let handle = schedule_every(Duration::from_secs(1), move || {
            if seen.fetch_add(1, Ordering::SeqCst) + 1 == 3 {
                ControlFlow::Break(())
            } else {
                ControlFlow::Continue(())
            }
        });
        tokio::time::sleep(Duration::from_secs(10)).await;
        tokio::task::yield_now().await;
        assert_eq!(count.load(Ordering::SeqCst), 3);
        assert!(handle.is_finished());
    }

    #[tokio::test(start_paused = true)]
    async fn cancelled_handle_never_fires() {
        let count = Arc::new(AtomicU32::new(0));
        let seen = Arc::clone(&count);
        let handle = schedule_every(Duration::from_secs(1), move || {
            seen.fetch_add(1, Ordering::SeqCst);
            ControlFlow::Continue(())
        });
        handle.cancel();
        tokio::time::sleep(Duration::from_secs(5)).await;
        assert_eq!(count.load(Ordering::SeqCst), 0);
    }

    #[tokio::test(start_paused = true)]
    async fn ticks_once_per_period_while_active() {
        let (mut driver, mut rx) = TimerDriver::new(FocusTimer::default());
        driver.toggle();
        assert!(driver.is_ticking());

        for expected in [59, 58, 57] {
            match rx.recv().await {
                Some(Event::StateSnapshot { minutes, seconds, is_active, .. }) => {
                    assert_eq!((minutes, seconds, is_active), (24, expected, true));
                }
                other => panic!("unexpected event: {other:?}"),
            }
        }
    }

    #[tokio::test(start_paused = true)]
    async fn pause_cancels_tick_source() {
        let (mut driver, mut rx) = TimerDriver::new(FocusTimer::default());
        driver.toggle();
        rx.recv().await;
        rx.recv().await;

        assert!(matches!(driver.toggle(), Event::TimerPaused { .. }));
        assert!(!driver.is_ticking());
        tokio::time::sleep(Duration::from_secs(10)).await;
        assert!(rx.try_recv().is_err());
        assert_eq!(driver.timer().clock(), "24:58");
    }

    #[tokio::test(start_paused = true)]
    async fn completion_stops_ticking_and_switches_session() {
        let timer = FocusTimer::at(TimerSettings::default(), SessionType::Focus, 0, 2);
        let (mut driver, mut rx) = TimerDriver::new(timer);
        driver.toggle();

        let mut completed = None;
        while let Some(event) = rx.recv().await {
            if let Event::SessionCompleted { .. } = event {
                completed = Some(event);
                break;
            }
        }
        assert!(matches!(
            completed,
            Some(Event::SessionCompleted { next: SessionType::Break, .. })
        ));

        let timer = driver.timer();
        assert!(!timer.is_active());
        assert_eq!(timer.session_type(), SessionType::Break);
        assert_eq!(timer.clock(), "05:00");

        tokio::time::sleep(Duration::from_secs(5)).await;
        assert!(rx.try_recv().is_err());
        assert!(!driver.is_ticking());
    }

    #[tokio::test(start_paused = true)]
    async fn reset_and_preset_cancel_tick_source() {
        let (mut driver, mut rx) = TimerDriver::new(FocusTimer::default());
        driver.toggle();
        rx.recv().await;
        driver.reset();
        assert!(!driver.is_ticking());
        assert_eq!(driver.timer().clock(), "25:00");

        assert!(driver.select_preset(15).is_ok());
        driver.toggle();
        assert!(matches!(
            driver.select_preset(5),
            Err(ValidationError::TimerActive)
        ));
        assert!(driver.is_ticking());
    }
}
