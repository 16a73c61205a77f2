//! Key-value persistence for application state.
//!
//! Three independent records are kept:
//! - `currentEnergy`: the raw energy literal
//! - `tasks`: JSON array of tasks
//! - `sensoryMode`: JSON boolean
//!
//! Reads are forgiving: a missing or unparsable record loads as `None` and
//! the caller falls back to its default.

use std::cell::RefCell;
use std::collections::HashMap;

use tracing::warn;

use crate::energy::EnergyLevel;
use crate::error::Result;
use crate::task::Task;

pub const KEY_CURRENT_ENERGY: &str = "currentEnergy";
pub const KEY_TASKS: &str = "tasks";
pub const KEY_SENSORY_MODE: &str = "sensoryMode";

/// String-keyed string store.
pub trait KvStore {
    fn get(&self, key: &str) -> Result<Option<String>>;
    fn set(&self, key: &str, value: &str) -> Result<()>;
}

impl<S: KvStore + ?Sized> KvStore for Box<S> {
    fn get(&self, key: &str) -> Result<Option<String>> {
        (**self).get(key)
    }

    fn set(&self, key: &str, value: &str) -> Result<()> {
        (**self).set(key, value)
    }
}

/// Process-local store, used by tests and as a fallback.
#[derive(Debug, Default)]
pub struct MemoryStore {
    values: RefCell<HashMap<String, String>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl KvStore for MemoryStore {
    fn get(&self, key: &str) -> Result<Option<String>> {
        Ok(self.values.borrow().get(key).cloned())
    }

    fn set(&self, key: &str, value: &str) -> Result<()> {
        self.values
            .borrow_mut()
            .insert(key.to_string(), value.to_string());
        Ok(())
    }
}

/// Whatever could be recovered from storage. `None` means "use the default".
#[derive(Debug, Clone, Default, PartialEq)]
pub struct PersistedState {
    pub current_energy: Option<EnergyLevel>,
    pub tasks: Option<Vec<Task>>,
    pub sensory_mode: Option<bool>,
}

/// Typed access to the three application records.
pub struct StateStore<S> {
    kv: S,
}

impl<S: KvStore> StateStore<S> {
    pub fn new(kv: S) -> Self {
        Self { kv }
    }

    pub fn kv(&self) -> &S {
        &self.kv
    }

    /// Read all records. Never fails.
    pub fn load(&self) -> PersistedState {
        PersistedState {
            current_energy: self
                .read(KEY_CURRENT_ENERGY)
                .and_then(|raw| parse_logged(KEY_CURRENT_ENERGY, raw.parse::<EnergyLevel>())),
            tasks: self
                .read(KEY_TASKS)
                .and_then(|raw| parse_logged(KEY_TASKS, serde_json::from_str(&raw))),
            sensory_mode: self
                .read(KEY_SENSORY_MODE)
                .and_then(|raw| parse_logged(KEY_SENSORY_MODE, serde_json::from_str(&raw))),
        }
    }

    pub fn save_energy(&self, energy: EnergyLevel) -> Result<()> {
        self.kv.set(KEY_CURRENT_ENERGY, energy.as_str())
    }

    pub fn save_tasks(&self, tasks: &[Task]) -> Result<()> {
        let json = serde_json::to_string(tasks)?;
        self.kv.set(KEY_TASKS, &json)
    }

    pub fn save_sensory_mode(&self, enabled: bool) -> Result<()> {
        self.kv.set(KEY_SENSORY_MODE, &serde_json::to_string(&enabled)?)
    }

    fn read(&self, key: &str) -> Option<String> {
        match self.kv.get(key) {
            Ok(value) => value,
            Err(e) => {
                warn!(key, error = %e, "failed to read stored value, using default");
                None
            }
        }
    }
}

fn parse_logged<T, E: std::fmt::Display>(key: &str, parsed: std::result::Result<T, E>) -> Option<T> {
    match parsed {
        Ok(value) => Some(value),
        Err(e) => {
            warn!(key, error = %e, "ignoring malformed stored value");
            None
        }
    }
}
