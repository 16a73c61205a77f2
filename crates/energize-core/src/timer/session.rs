use serde::{Deserialize, Serialize};
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SessionType {
    Focus,
    Break,
}

impl fmt::Display for SessionType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SessionType::Focus => f.write_str("focus"),
            SessionType::Break => f.write_str("break"),
        }
    }
}

/// What the progress percentage is measured against.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ProgressBasis {
    /// The default length of the current session type, regardless of preset.
    /// A 45 minute preset therefore starts above 100%.
    Session,
    /// The length the current session actually started from.
    Selected,
}

impl Default for ProgressBasis {
    fn default() -> Self {
        ProgressBasis::Session
    }
}

/// A selectable focus duration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Preset {
    pub minutes: u32,
    pub name: String,
}

impl Preset {
    pub fn new(minutes: u32) -> Self {
        let name = match minutes {
            5 => "Quick burst",
            15 => "Short focus",
            25 => "Pomodoro",
            45 => "Deep work",
            _ => "Custom",
        };
        Self {
            minutes,
            name: name.to_string(),
        }
    }

    pub fn label(&self) -> String {
        format!("{} min", self.minutes)
    }
}

/// Session lengths and presets for the focus timer.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct TimerSettings {
    pub focus_minutes: u32,
    pub break_minutes: u32,
    pub presets: Vec<u32>,
    pub progress_basis: ProgressBasis,
}

impl TimerSettings {
    pub fn presets(&self) -> Vec<Preset> {
        self.presets.iter().copied().map(Preset::new).collect()
    }

    /// Default length of a session type, in minutes.
    pub fn minutes_for(&self, session_type: SessionType) -> u32 {
        match session_type {
            SessionType::Focus => self.focus_minutes,
            SessionType::Break => self.break_minutes,
        }
    }

    pub fn secs_for(&self, session_type: SessionType) -> u32 {
        self.minutes_for(session_type).saturating_mul(60)
    }
}

impl Default for TimerSettings {
    fn default() -> Self {
        Self {
            focus_minutes: 25,
            break_minutes: 5,
            presets: vec![5, 15, 25, 45],
            progress_basis: ProgressBasis::Session,
        }
    }
}

/// Render a countdown as zero-padded `MM:SS`.
pub fn format_time(minutes: u32, seconds: u32) -> String {
    format!("{minutes:02}:{seconds:02}")
}
