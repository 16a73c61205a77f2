//! Energy level commands.

use clap::Subcommand;
use energize_core::EnergyLevel;

use super::{open_app, parse_energy, CmdResult};

#[derive(Subcommand)]
pub enum EnergyAction {
    /// Print the current energy level
    Show,
    /// Check in with a new energy level
    Set {
        /// high, medium, low or burnout
        #[arg(value_parser = parse_energy)]
        level: EnergyLevel,
    },
    /// List all energy levels
    List,
}

pub fn run(action: EnergyAction) -> CmdResult {
    let mut app = open_app()?;

    match action {
        EnergyAction::Show => {
            let level = app.current_energy();
            println!("{} - {}", level.label(), level.description());
        }
        EnergyAction::Set { level } => {
            app.set_energy(level);
            let buckets = app.buckets();
            println!("Energy set to {}", level.label());
            println!(
                "  {} perfect, {} doable, {} for later",
                buckets.perfect.len(),
                buckets.doable.len(),
                buckets.too_hard.len()
            );
        }
        EnergyAction::List => {
            let current = app.current_energy();
            for level in EnergyLevel::ALL {
                let marker = if level == current { "*" } else { " " };
                println!(
                    "{marker} {:<8} {:<14} {}",
                    level.as_str(),
                    level.label(),
                    level.description()
                );
            }
        }
    }
    Ok(())
}
