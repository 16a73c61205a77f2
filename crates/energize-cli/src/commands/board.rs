//! Energy-matched task board.

use clap::Args;
use energize_core::{Config, EnergyLevel, MatchLevel};
use serde::Serialize;

use super::{open_app, parse_energy, short_id, CmdResult};

const TIPS: [&str; 3] = [
    "Tasks adapt to your current energy level. No guilt, just realistic expectations.",
    "Brain dump those fleeting thoughts instantly. Sort them out later.",
    "Turn on sensory mode (`energize sensory on`) when you need calmer output.",
];

#[derive(Args)]
pub struct BoardArgs {
    /// Preview the board at another energy level without changing it
    #[arg(long, short, value_parser = parse_energy)]
    energy: Option<EnergyLevel>,
    /// Print JSON instead of text
    #[arg(long)]
    json: bool,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct BoardJson<'a> {
    energy: EnergyLevel,
    #[serde(flatten)]
    buckets: &'a energize_core::Buckets,
}

pub fn run(args: BoardArgs) -> CmdResult {
    let app = open_app()?;
    let energy = args.energy.unwrap_or(app.current_energy());
    let buckets = app.buckets_for(energy);

    if args.json {
        let board = BoardJson {
            energy,
            buckets: &buckets,
        };
        println!("{}", serde_json::to_string_pretty(&board)?);
        return Ok(());
    }

    println!("Energy: {} - {}", energy.label(), energy.description());
    println!();

    if app.tasks().is_empty() {
        println!("No tasks yet. Capture one with `energize task add <title>`.");
    } else {
        for (level, tasks) in buckets.sections() {
            println!("{} ({})", level.heading(), tasks.len());
            for task in tasks {
                let check = if level == MatchLevel::Completed { "x" } else { " " };
                println!(
                    "  [{check}] {}  {}  ({} energy)",
                    short_id(&task.id),
                    task.title,
                    task.energy_required
                );
            }
            println!();
        }
    }

    let show_tips = Config::load().map(|c| c.display.show_tips).unwrap_or(true);
    if show_tips && !app.sensory_mode() {
        println!("Tips:");
        for tip in TIPS {
            println!("  - {tip}");
        }
    }
    Ok(())
}
