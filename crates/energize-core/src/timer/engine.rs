//! Focus timer state machine.
//!
//! The timer counts down in whole seconds. It does not use internal threads -
//! the caller (usually [`TimerDriver`](super::TimerDriver)) invokes `tick()`
//! once per second while the timer is active.
//!
//! ## State Transitions
//!
//! ```text
//! (inactive, focus) <-toggle-> (active, focus) --00:00--> (inactive, break)
//! (inactive, break) <-toggle-> (active, break) --00:00--> (inactive, focus)
//! reset / preset: any -> (inactive, focus)
//! ```
//!
//! ## Usage
//!
//! ```ignore
//! let mut timer = FocusTimer::default();
//! timer.toggle();
//! // Once per second:
//! timer.tick(); // Returns Some(Event) when the session completes
//! ```

use chrono::Utc;
use tracing::debug;

use super::session::{format_time, ProgressBasis, SessionType, TimerSettings};
use crate::error::ValidationError;
use crate::events::Event;

/// Countdown timer alternating focus and break sessions.
#[derive(Debug, Clone, PartialEq)]
pub struct FocusTimer {
    settings: TimerSettings,
    session_type: SessionType,
    minutes: u32,
    /// Always 0..=59.
    seconds: u32,
    is_active: bool,
    /// Length the current session started from, in seconds.
    started_from_secs: u32,
}

impl FocusTimer {
    /// Create an inactive timer at the start of a focus session.
    pub fn new(settings: TimerSettings) -> Self {
        let minutes = settings.focus_minutes;
        Self {
            settings,
            session_type: SessionType::Focus,
            minutes,
            seconds: 0,
            is_active: false,
            started_from_secs: minutes.saturating_mul(60),
        }
    }

    /// Create an inactive timer positioned at `minutes:seconds` of a session.
    ///
    /// Seconds above 59 are clamped.
    pub fn at(settings: TimerSettings, session_type: SessionType, minutes: u32, seconds: u32) -> Self {
        let started_from_secs = settings.secs_for(session_type);
        Self {
            settings,
            session_type,
            minutes,
            seconds: seconds.min(59),
            is_active: false,
            started_from_secs,
        }
    }

    // ── Queries ──────────────────────────────────────────────────────

    pub fn is_active(&self) -> bool {
        self.is_active
    }

    pub fn session_type(&self) -> SessionType {
        self.session_type
    }

    pub fn minutes(&self) -> u32 {
        self.minutes
    }

    pub fn seconds(&self) -> u32 {
        self.seconds
    }

    pub fn settings(&self) -> &TimerSettings {
        &self.settings
    }

    pub fn remaining_secs(&self) -> u32 {
        self.minutes.saturating_mul(60).saturating_add(self.seconds)
    }

    /// `MM:SS` of the remaining time.
    pub fn clock(&self) -> String {
        format_time(self.minutes, self.seconds)
    }

    /// Percentage of a full session remaining.
    ///
    /// With [`ProgressBasis::Session`] the denominator is the default length
    /// of the session type, so longer presets report more than 100%.
    pub fn progress_pct(&self) -> f64 {
        let total = match self.settings.progress_basis {
            ProgressBasis::Session => self.settings.secs_for(self.session_type),
            ProgressBasis::Selected => self.started_from_secs,
        };
        if total == 0 {
            return 0.0;
        }
        self.remaining_secs() as f64 / total as f64 * 100.0
    }

    /// Build a full state snapshot event.
    pub fn snapshot(&self) -> Event {
        Event::StateSnapshot {
            is_active: self.is_active,
            session_type: self.session_type,
            minutes: self.minutes,
            seconds: self.seconds,
            progress_pct: self.progress_pct(),
            at: Utc::now(),
        }
    }

    // ── Commands ─────────────────────────────────────────────────────

    /// Start when stopped, pause when running. Time is left untouched.
    pub fn toggle(&mut self) -> Event {
        self.is_active = !self.is_active;
        debug!(active = self.is_active, clock = %self.clock(), "timer toggled");
        if self.is_active {
            Event::TimerStarted {
                session_type: self.session_type,
                remaining_secs: self.remaining_secs(),
                at: Utc::now(),
            }
        } else {
            Event::TimerPaused {
                remaining_secs: self.remaining_secs(),
                at: Utc::now(),
            }
        }
    }

    /// Advance one second. Returns `Some(Event::SessionCompleted)` when the
    /// countdown was already at zero. Does nothing while inactive.
    pub fn tick(&mut self) -> Option<Event> {
        if !self.is_active {
            return None;
        }
        if self.seconds > 0 {
            self.seconds -= 1;
            return None;
        }
        if self.minutes > 0 {
            self.minutes -= 1;
            self.seconds = 59;
            return None;
        }

        let completed = self.session_type;
        let next = match completed {
            SessionType::Focus => SessionType::Break,
            SessionType::Break => SessionType::Focus,
        };
        self.is_active = false;
        self.begin(next, self.settings.minutes_for(next));
        debug!(%completed, %next, "session completed");
        Some(Event::SessionCompleted {
            completed,
            next,
            next_duration_secs: self.remaining_secs(),
            at: Utc::now(),
        })
    }

    /// Stop and return to the start of a default focus session.
    pub fn reset(&mut self) -> Event {
        self.is_active = false;
        self.begin(SessionType::Focus, self.settings.focus_minutes);
        debug!("timer reset");
        Event::TimerReset { at: Utc::now() }
    }

    /// Load a preset focus duration. Only allowed while the timer is stopped.
    pub fn select_preset(&mut self, minutes: u32) -> Result<Event, ValidationError> {
        if self.is_active {
            return Err(ValidationError::TimerActive);
        }
        if !self.settings.presets.contains(&minutes) {
            return Err(ValidationError::InvalidValue {
                field: "preset".into(),
                message: format!(
                    "{minutes} is not one of the configured presets {:?}",
                    self.settings.presets
                ),
            });
        }
        self.begin(SessionType::Focus, minutes);
        debug!(minutes, "preset selected");
        Ok(Event::PresetSelected {
            minutes,
            at: Utc::now(),
        })
    }

    // ── Internal ─────────────────────────────────────────────────────

    fn begin(&mut self, session_type: SessionType, minutes: u32) {
        self.session_type = session_type;
        self.minutes = minutes;
        self.seconds = 0;
        self.started_from_secs = minutes.saturating_mul(60);
    }
}

impl Default for FocusTimer {
    fn default() -> Self {
        Self::new(TimerSettings::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn state(t: &FocusTimer) -> (u32, u32, SessionType, bool) {
        (t.minutes(), t.seconds(), t.session_type(), t.is_active())
    }

    #[test]
    fn initial_state() {
        let t = FocusTimer::default();
        assert_eq!(state(&t), (25, 0, SessionType::Focus, false));
        assert_eq!(t.clock(), "25:00");
        assert_eq!(t.progress_pct(), 100.0);
    }

    #[test]
    fn toggle_flips_activity_only() {
        let mut t = FocusTimer::default();
        assert!(matches!(t.toggle(), Event::TimerStarted { remaining_secs: 1500, .. }));
        assert!(t.is_active());
        t.tick();
        assert!(matches!(t.toggle(), Event::TimerPaused { remaining_secs: 1499, .. }));
        assert_eq!(state(&t), (24, 59, SessionType::Focus, false));
    }

    #[test]
    fn tick_is_noop_while_inactive() {
        let mut t = FocusTimer::default();
        assert!(t.tick().is_none());
        assert_eq!(state(&t), (25, 0, SessionType::Focus, false));
    }

    #[test]
    fn tick_borrows_a_minute() {
        let mut t = FocusTimer::at(TimerSettings::default(), SessionType::Focus, 3, 0);
        t.toggle();
        assert!(t.tick().is_none());
        assert_eq!(state(&t), (2, 59, SessionType::Focus, true));
    }

    #[test]
    fn full_focus_session_switches_to_break() {
        // 1500 ticks drain 25:00 to 00:00; the next tick completes the session.
        let mut t = FocusTimer::default();
        t.toggle();
        let mut completion = None;
        for _ in 0..1500 {
            assert!(t.tick().is_none());
        }
        assert_eq!(state(&t), (0, 0, SessionType::Focus, true));
        if let Some(event) = t.tick() {
            completion = Some(event);
        }
        assert_eq!(state(&t), (5, 0, SessionType::Break, false));
        assert!(matches!(
            completion,
            Some(Event::SessionCompleted {
                completed: SessionType::Focus,
                next: SessionType::Break,
                next_duration_secs: 300,
                ..
            })
        ));
    }

    #[test]
    fn zero_focus_completes_in_one_tick() {
        let mut t = FocusTimer::at(TimerSettings::default(), SessionType::Focus, 0, 0);
        t.toggle();
        assert!(t.tick().is_some());
        assert_eq!(state(&t), (5, 0, SessionType::Break, false));
    }

    #[test]
    fn zero_break_returns_to_focus() {
        let mut t = FocusTimer::at(TimerSettings::default(), SessionType::Break, 0, 0);
        t.toggle();
        assert!(t.tick().is_some());
        assert_eq!(state(&t), (25, 0, SessionType::Focus, false));
    }

    #[test]
    fn reset_from_any_state() {
        let mut t = FocusTimer::at(TimerSettings::default(), SessionType::Break, 2, 17);
        t.toggle();
        t.tick();
        assert!(matches!(t.reset(), Event::TimerReset { .. }));
        assert_eq!(state(&t), (25, 0, SessionType::Focus, false));
    }

    #[test]
    fn preset_requires_stopped_timer() {
        let mut t = FocusTimer::default();
        t.toggle();
        assert!(matches!(t.select_preset(45), Err(ValidationError::TimerActive)));
        assert!(t.is_active());

        t.toggle();
        t.select_preset(45).unwrap();
        assert_eq!(state(&t), (45, 0, SessionType::Focus, false));
    }

    #[test]
    fn preset_must_be_configured() {
        let mut t = FocusTimer::default();
        assert!(t.select_preset(7).is_err());
        assert_eq!(t.minutes(), 25);
    }

    #[test]
    fn preset_from_break_switches_to_focus() {
        let mut t = FocusTimer::at(TimerSettings::default(), SessionType::Break, 4, 30);
        t.select_preset(5).unwrap();
        assert_eq!(state(&t), (5, 0, SessionType::Focus, false));
    }

    #[test]
    fn session_progress_ignores_preset_length() {
        let mut t = FocusTimer::default();
        t.select_preset(45).unwrap();
        assert!((t.progress_pct() - 180.0).abs() < 1e-9);

        let brk = FocusTimer::at(TimerSettings::default(), SessionType::Break, 2, 30);
        assert_eq!(brk.progress_pct(), 50.0);
    }

    #[test]
    fn selected_progress_tracks_preset_length() {
        let settings = TimerSettings {
            progress_basis: ProgressBasis::Selected,
            ..TimerSettings::default()
        };
        let mut t = FocusTimer::new(settings);
        t.select_preset(45).unwrap();
        assert_eq!(t.progress_pct(), 100.0);
        t.toggle();
        for _ in 0..(45 * 30) {
            t.tick();
        }
        assert_eq!(t.progress_pct(), 50.0);
    }

    #[test]
    fn snapshot_reflects_state() {
        let t = FocusTimer::at(TimerSettings::default(), SessionType::Break, 1, 15);
        match t.snapshot() {
            Event::StateSnapshot {
                is_active,
                session_type,
                minutes,
                seconds,
                progress_pct,
                ..
            } => {
                assert!(!is_active);
                assert_eq!(session_type, SessionType::Break);
                assert_eq!((minutes, seconds), (1, 15));
                assert_eq!(progress_pct, 25.0);
            }
            _ => panic!("Expected StateSnapshot"),
        }
    }
}
