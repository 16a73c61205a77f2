//! Energy level type.
//!
//! A single ordered scale is used both for the user's self-reported capacity
//! and for the capacity a task requires.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::ValidationError;

/// Self-reported capacity, ordered `High > Medium > Low > Burnout`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EnergyLevel {
    High,
    Medium,
    Low,
    Burnout,
}

impl EnergyLevel {
    /// All levels, highest first.
    pub const ALL: [EnergyLevel; 4] = [
        EnergyLevel::High,
        EnergyLevel::Medium,
        EnergyLevel::Low,
        EnergyLevel::Burnout,
    ];

    /// Capacity rank: high = 4 down to burnout = 1.
    pub fn rank(self) -> u8 {
        match self {
            EnergyLevel::High => 4,
            EnergyLevel::Medium => 3,
            EnergyLevel::Low => 2,
            EnergyLevel::Burnout => 1,
        }
    }

    /// Whether someone at this level can take on work requiring `required`.
    pub fn can_handle(self, required: EnergyLevel) -> bool {
        self.rank() >= required.rank()
    }

    /// Literal used in storage and on the command line.
    pub fn as_str(self) -> &'static str {
        match self {
            EnergyLevel::High => "high",
            EnergyLevel::Medium => "medium",
            EnergyLevel::Low => "low",
            EnergyLevel::Burnout => "burnout",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            EnergyLevel::High => "High Energy",
            EnergyLevel::Medium => "Medium Energy",
            EnergyLevel::Low => "Low Energy",
            EnergyLevel::Burnout => "Burnout",
        }
    }

    pub fn description(self) -> &'static str {
        match self {
            EnergyLevel::High => "Ready for challenging tasks",
            EnergyLevel::Medium => "Good for routine work",
            EnergyLevel::Low => "Simple tasks only",
            EnergyLevel::Burnout => "Rest time needed",
        }
    }
}

impl Default for EnergyLevel {
    fn default() -> Self {
        EnergyLevel::Medium
    }
}

impl PartialOrd for EnergyLevel {
    fn partial_cmp(&self, other: &Self) -> Option<std::cmp::Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for EnergyLevel {
    fn cmp(&self, other: &Self) -> std::cmp::Ordering {
        self.rank().cmp(&other.rank())
    }
}

impl fmt::Display for EnergyLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for EnergyLevel {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "high" => Ok(EnergyLevel::High),
            "medium" => Ok(EnergyLevel::Medium),
            "low" => Ok(EnergyLevel::Low),
            // The capture form labels burnout as "Rest".
            "burnout" | "rest" => Ok(EnergyLevel::Burnout),
            other => Err(ValidationError::InvalidValue {
                field: "energy".into(),
                message: format!("'{other}' is not one of high, medium, low, burnout"),
            }),
        }
    }
}
