//! Energy levels and the energy-match engine.
//!
//! Tasks declare the energy they need; the user declares the energy they have.
//! The matcher sorts tasks into what fits now and what should wait.

mod level;
mod matcher;

pub use level::EnergyLevel;
pub use matcher::{match_tasks, Buckets, MatchLevel};
