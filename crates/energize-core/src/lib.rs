//! # Energize Core Library
//!
//! This library provides the core logic for Energize, a task list that adapts
//! to how much energy the user has right now, plus a focus timer. The
//! `energize` CLI is a thin presentation layer over the same core.
//!
//! ## Architecture
//!
//! - **Energy matching**: a pure function sorting tasks into perfect, doable,
//!   too-hard and completed buckets for the current energy level
//! - **Task store**: ordered in-memory task collection
//! - **Focus timer**: a one-second countdown state machine, plus a tokio-based
//!   driver that owns the cancellable tick source
//! - **Storage**: SQLite key-value persistence and TOML configuration
//!
//! ## Key Components
//!
//! - [`App`]: Application state with injected persistence
//! - [`match_tasks`]: Energy-match engine
//! - [`FocusTimer`] / [`TimerDriver`]: Focus timer and its real-time driver
//! - [`Database`]: SQLite key-value store
//! - [`Config`]: Application configuration management

pub mod app;
pub mod energy;
pub mod error;
pub mod events;
pub mod storage;
pub mod task;
pub mod timer;

pub use app::App;
pub use energy::{match_tasks, Buckets, EnergyLevel, MatchLevel};
pub use error::{ConfigError, CoreError, DatabaseError, ValidationError};
pub use events::Event;
pub use storage::{Config, Database, KvStore, MemoryStore, PersistedState, StateStore};
pub use task::{Priority, Task, TaskStore};
pub use timer::{FocusTimer, Preset, ProgressBasis, SessionType, TimerDriver, TimerSettings};
