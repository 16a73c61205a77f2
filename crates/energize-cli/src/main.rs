use clap::{CommandFactory, Parser, Subcommand};
use clap_complete::Shell;

mod commands;

#[derive(Parser)]
#[command(name = "energize", version, about = "Energy-aware task list and focus timer")]
struct Cli {
    /// Log debug output to stderr
    #[arg(short, long, global = true, conflicts_with = "quiet")]
    verbose: bool,
    /// Only log errors
    #[arg(short, long, global = true)]
    quiet: bool,
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Current energy level
    Energy {
        #[command(subcommand)]
        action: commands::energy::EnergyAction,
    },
    /// Task management
    Task {
        #[command(subcommand)]
        action: commands::task::TaskAction,
    },
    /// Show tasks grouped by how well they fit your energy
    Board(commands::board::BoardArgs),
    /// Calm output mode
    Sensory {
        #[command(subcommand)]
        action: commands::sensory::SensoryAction,
    },
    /// Focus timer
    Timer {
        #[command(subcommand)]
        action: commands::timer::TimerAction,
    },
    /// Configuration management
    Config {
        #[command(subcommand)]
        action: commands::config::ConfigAction,
    },
    /// Print shell completions
    Completions {
        shell: Shell,
    },
}

fn init_tracing(quiet: bool, verbose: bool) {
    let level = if quiet {
        "error"
    } else if verbose {
        "debug"
    } else {
        "warn"
    };

    let filter = tracing_subscriber::EnvFilter::try_from_env("ENERGIZE_LOG")
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(level));

    // A subscriber can only be installed once; a second install is harmless.
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .try_init();
}

fn main() {
    let cli = Cli::parse();
    init_tracing(cli.quiet, cli.verbose);

    let result = match cli.command {
        Commands::Energy { action } => commands::energy::run(action),
        Commands::Task { action } => commands::task::run(action),
        Commands::Board(args) => commands::board::run(args),
        Commands::Sensory { action } => commands::sensory::run(action),
        Commands::Timer { action } => commands::timer::run(action),
        Commands::Config { action } => commands::config::run(action),
        Commands::Completions { shell } => {
            clap_complete::generate(shell, &mut Cli::command(), "energize", &mut std::io::stdout());
            Ok(())
        }
    };

    if let Err(e) = result {
        eprintln!("error: {e}");
        std::process::exit(1);
    }
}
