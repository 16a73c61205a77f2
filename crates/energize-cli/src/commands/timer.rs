//! Focus timer commands.
//!
//! `timer run` keeps the process alive and drives the countdown in real time.
//! Keys are read line by line from stdin.

use clap::Subcommand;
use energize_core::{Config, Event, FocusTimer, SessionType, TimerDriver};
use tokio::io::{AsyncBufReadExt, BufReader};

use super::CmdResult;

const HELP: &str = "keys: <enter>/p start-pause, r reset, <minutes> preset, q quit";

#[derive(Subcommand)]
pub enum TimerAction {
    /// List focus presets
    Presets,
    /// Run an interactive focus timer
    Run {
        /// Start from a preset instead of the default focus length
        #[arg(long)]
        preset: Option<u32>,
        /// Start counting immediately
        #[arg(long)]
        autostart: bool,
        /// Print events as JSON lines
        #[arg(long)]
        json: bool,
    },
}

pub fn run(action: TimerAction) -> CmdResult {
    let config = Config::load()?;

    match action {
        TimerAction::Presets => {
            for preset in config.timer.presets() {
                println!("{:>7}  {}", preset.label(), preset.name);
            }
        }
        TimerAction::Run {
            preset,
            autostart,
            json,
        } => {
            let mut timer = FocusTimer::new(config.timer);
            if let Some(minutes) = preset {
                timer.select_preset(minutes)?;
            }
            let runtime = tokio::runtime::Builder::new_multi_thread()
                .enable_all()
                .build()?;
            let result = runtime.block_on(run_interactive(timer, autostart, json));
            // A pending stdin read would otherwise hold shutdown until the next line.
            runtime.shutdown_background();
            result?;
        }
    }
    Ok(())
}

async fn run_interactive(timer: FocusTimer, autostart: bool, json: bool) -> CmdResult {
    let (mut driver, mut events) = TimerDriver::new(timer);
    let mut lines = BufReader::new(tokio::io::stdin()).lines();
    let mut stdin_open = true;

    if !json {
        eprintln!("{HELP}");
    }
    emit(&driver.snapshot(), json)?;
    if autostart {
        emit(&driver.toggle(), json)?;
    }

    loop {
        tokio::select! {
            line = lines.next_line(), if stdin_open => {
                let Some(input) = line? else {
                    // No more keys: keep running an active session to its end.
                    stdin_open = false;
                    if !driver.timer().is_active() {
                        break;
                    }
                    continue;
                };
                match input.trim() {
                    "" | "p" => emit(&driver.toggle(), json)?,
                    "r" => {
                        emit(&driver.reset(), json)?;
                        emit(&driver.snapshot(), json)?;
                    }
                    "q" => break,
                    other => match other.parse::<u32>() {
                        Ok(minutes) => match driver.select_preset(minutes) {
                            Ok(event) => {
                                emit(&event, json)?;
                                emit(&driver.snapshot(), json)?;
                            }
                            Err(e) => eprintln!("{e}"),
                        },
                        Err(_) => eprintln!("unknown key '{other}'; {HELP}"),
                    },
                }
            }
            Some(event) = events.recv() => {
                let completed = matches!(event, Event::SessionCompleted { .. });
                emit(&event, json)?;
                if completed && !stdin_open {
                    break;
                }
            }
            _ = tokio::signal::ctrl_c() => break,
        }
    }
    Ok(())
}

fn emit(event: &Event, json: bool) -> CmdResult {
    if json {
        println!("{}", serde_json::to_string(event)?);
        return Ok(());
    }
    match event {
        Event::StateSnapshot {
            is_active,
            session_type,
            minutes,
            seconds,
            progress_pct,
            ..
        } => {
            let state = if *is_active { "running" } else { "paused" };
            println!(
                "{} {}  {:>3.0}%  {state}",
                session_label(*session_type),
                energize_core::timer::format_time(*minutes, *seconds),
                progress_pct
            );
        }
        Event::TimerStarted { .. } => println!("started"),
        Event::TimerPaused { .. } => println!("paused"),
        Event::TimerReset { .. } => println!("reset to {}", session_label(SessionType::Focus)),
        Event::PresetSelected { minutes, .. } => println!("preset: {minutes} min focus"),
        Event::SessionCompleted { completed, next, .. } => println!(
            "{} finished, next up: {}",
            session_label(*completed),
            session_label(*next)
        ),
    }
    Ok(())
}

fn session_label(session_type: SessionType) -> &'static str {
    match session_type {
        SessionType::Focus => "[focus]",
        SessionType::Break => "[break]",
    }
}
