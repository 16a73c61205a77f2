use clap::Subcommand;

use super::{open_app, CmdResult};

#[derive(Subcommand)]
pub enum SensoryAction {
    /// Print whether sensory mode is on
    Show,
    /// Turn sensory mode on
    On,
    /// Turn sensory mode off
    Off,
    /// Flip sensory mode
    Toggle,
}

pub fn run(action: SensoryAction) -> CmdResult {
    let mut app = open_app()?;

    let enabled = match action {
        SensoryAction::Show => app.sensory_mode(),
        SensoryAction::On => {
            app.set_sensory_mode(true);
            true
        }
        SensoryAction::Off => {
            app.set_sensory_mode(false);
            false
        }
        SensoryAction::Toggle => app.toggle_sensory_mode(),
    };
    println!("sensory mode: {}", if enabled { "on" } else { "off" });
    Ok(())
}
