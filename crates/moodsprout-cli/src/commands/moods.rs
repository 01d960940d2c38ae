use std::path::PathBuf;

use clap::Args;
use moodsprout_core::{Config, TaskCatalog};

#[derive(Args)]
pub struct MoodsArgs {
    /// Output as JSON
    #[arg(long)]
    pub json: bool,
    /// Task catalog TOML (overrides content.tasks_file)
    #[arg(long)]
    pub tasks_file: Option<PathBuf>,
}

pub fn run(args: MoodsArgs) -> Result<(), Box<dyn std::error::Error>> {
    let catalog = match &args.tasks_file {
        Some(path) => TaskCatalog::load(path)?,
        None => Config::load_or_default().catalog()?,
    };

    if args.json {
        println!("{}", serde_json::to_string_pretty(catalog.entries())?);
        return Ok(());
    }

    for (i, entry) in catalog.entries().iter().enumerate() {
        println!("{}. {} ({} tasks)", i + 1, entry.mood, entry.tasks.len());
        for task in &entry.tasks {
            println!("   - {task}");
        }
    }
    Ok(())
}
