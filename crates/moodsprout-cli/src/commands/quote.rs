use clap::Args;
use moodsprout_core::{session_rng, Config, QuoteBook};

#[derive(Args)]
pub struct QuoteArgs {
    /// Fixed RNG seed
    #[arg(long)]
    pub seed: Option<u64>,
    /// Print every quote instead of one
    #[arg(long)]
    pub all: bool,
}

pub fn run(args: QuoteArgs) -> Result<(), Box<dyn std::error::Error>> {
    let book = QuoteBook::builtin();
    if args.all {
        for quote in book.quotes() {
            println!("{} {}", quote.emoji, quote.text);
        }
        return Ok(());
    }
    let seed = args.seed.or(Config::load_or_default().session.seed);
    let quote = book.pick(&mut session_rng(seed));
    println!("{} {}", quote.emoji, quote.text);
    Ok(())
}
