use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

mod commands;
mod render;

#[derive(Parser)]
#[command(name = "moodsprout", version, about = "Moodsprout: grow a tree, one small kindness at a time")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Start an interactive session reading commands from stdin
    Play(commands::play::PlayArgs),
    /// Print a gentle affirmation
    Quote(commands::quote::QuoteArgs),
    /// List moods and their healing actions
    Moods(commands::moods::MoodsArgs),
    /// Show the tree parameters for an energy level
    Tree(commands::tree::TreeArgs),
    /// Simulate the floating emoji field for a viewport
    Effects(commands::effects::EffectsArgs),
    /// Configuration management
    Config {
        #[command(subcommand)]
        action: commands::config::ConfigAction,
    },
}

fn init_logging() {
    let filter = EnvFilter::try_from_env("MOODSPROUT_LOG")
        .unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}

fn main() {
    init_logging();
    let cli = Cli::parse();
    let result = match cli.command {
        Commands::Play(args) => commands::play::run(args),
        Commands::Quote(args) => commands::quote::run(args),
        Commands::Moods(args) => commands::moods::run(args),
        Commands::Tree(args) => commands::tree::run(args),
        Commands::Effects(args) => commands::effects::run(args),
        Commands::Config { action } => commands::config::run(action),
    };

    if let Err(e) = result {
        eprintln!("error: {e}");
        std::process::exit(1);
    }
}
