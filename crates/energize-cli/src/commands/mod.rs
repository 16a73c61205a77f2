pub mod board;
pub mod config;
pub mod energy;
pub mod sensory;
pub mod task;
pub mod timer;

use energize_core::{App, Database, EnergyLevel, StateStore};

pub type CmdResult = Result<(), Box<dyn std::error::Error>>;

/// Open the application state backed by the default database.
pub fn open_app() -> Result<App<Database>, Box<dyn std::error::Error>> {
    let db = Database::open()?;
    tracing::debug!("database opened");
    Ok(App::load(StateStore::new(db)))
}

/// clap value parser for energy levels.
pub fn parse_energy(s: &str) -> Result<EnergyLevel, String> {
    s.parse::<EnergyLevel>().map_err(|e| e.to_string())
}

/// First eight characters of an id, enough to address it on the command line.
pub fn short_id(id: &str) -> &str {
    id.get(..8).unwrap_or(id)
}
