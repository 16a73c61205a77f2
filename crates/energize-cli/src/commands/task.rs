//! Task management commands for CLI.

use chrono::Local;
use clap::Subcommand;
use energize_core::EnergyLevel;

use super::{open_app, parse_energy, short_id, CmdResult};

#[derive(Subcommand)]
pub enum TaskAction {
    /// Capture a new task
    Add {
        /// Task title
        title: String,
        /// Energy the task needs (default: medium)
        #[arg(long, short, default_value = "medium", value_parser = parse_energy)]
        energy: EnergyLevel,
    },
    /// List tasks in capture order
    List {
        /// Print JSON instead of a table
        #[arg(long)]
        json: bool,
    },
    /// Mark a task done, or not done again
    Toggle {
        /// Task ID or unique prefix
        id: String,
    },
    /// Delete a task
    Delete {
        /// Task ID or unique prefix
        id: String,
    },
}

pub fn run(action: TaskAction) -> CmdResult {
    let mut app = open_app()?;

    match action {
        TaskAction::Add { title, energy } => match app.add_task(&title, energy) {
            Some(task) => {
                println!("Task created: {}", task.id);
                println!("{}", serde_json::to_string_pretty(&task)?);
            }
            None => eprintln!("Nothing added: title is blank"),
        },
        TaskAction::List { json } => {
            if json {
                println!("{}", serde_json::to_string_pretty(app.tasks().as_slice())?);
            } else if app.tasks().is_empty() {
                println!("No tasks yet.");
            } else {
                for task in app.tasks().iter() {
                    let check = if task.completed { "x" } else { " " };
                    println!(
                        "[{check}] {}  {}  {:<8} {}",
                        short_id(&task.id),
                        task.created_at.with_timezone(&Local).format("%Y-%m-%d"),
                        task.energy_required.as_str(),
                        task.title
                    );
                }
            }
        }
        TaskAction::Toggle { id } => {
            let id = app.tasks().resolve_id(&id)?;
            let task = app
                .toggle_task(&id)
                .ok_or_else(|| format!("Task not found: {id}"))?;
            let state = if task.completed { "done" } else { "open" };
            println!("Task {} is now {state}: {}", short_id(&task.id), task.title);
        }
        TaskAction::Delete { id } => {
            let id = app.tasks().resolve_id(&id)?;
            let task = app
                .delete_task(&id)
                .ok_or_else(|| format!("Task not found: {id}"))?;
            println!("Task deleted: {}", task.id);
        }
    }
    Ok(())
}
