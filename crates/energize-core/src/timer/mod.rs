mod driver;
mod engine;
mod session;

pub use driver::{schedule_every, TickHandle, TimerDriver};
pub use engine::FocusTimer;
pub use session::{format_time, Preset, ProgressBasis, SessionType, TimerSettings};
