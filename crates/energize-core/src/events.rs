use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::timer::SessionType;

/// Every focus timer transition produces an Event.
/// The CLI renders them; the tick driver streams them.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum Event {
    TimerStarted {
        session_type: SessionType,
        remaining_secs: u32,
        at: DateTime<Utc>,
    },
    TimerPaused {
        remaining_secs: u32,
        at: DateTime<Utc>,
    },
    /// Countdown reached zero; the timer stopped and switched session type.
    SessionCompleted {
        completed: SessionType,
        next: SessionType,
        next_duration_secs: u32,
        at: DateTime<Utc>,
    },
    TimerReset {
        at: DateTime<Utc>,
    },
    PresetSelected {
        minutes: u32,
        at: DateTime<Utc>,
    },
    StateSnapshot {
        is_active: bool,
        session_type: SessionType,
        minutes: u32,
        seconds: u32,
        progress_pct: f64,
        at: DateTime<Utc>,
    },
}
