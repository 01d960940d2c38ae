use clap::Args;
use moodsprout_core::map_energy;

use crate::render::{energy_bar, tree_art};

#[derive(Args)]
pub struct TreeArgs {
    /// Energy level, 0-100
    #[arg(value_parser = clap::value_parser!(u8).range(0..=100))]
    pub energy: u8,
    /// Draw the tree instead of printing JSON
    #[arg(long)]
    pub art: bool,
}

pub fn run(args: TreeArgs) -> Result<(), Box<dyn std::error::Error>> {
    let visuals = map_energy(args.energy);
    if args.art {
        for line in tree_art(&visuals) {
            println!("{line}");
        }
        println!("{}", energy_bar(args.energy));
    } else {
        println!("{}", serde_json::to_string_pretty(&visuals)?);
    }
    Ok(())
}
