//! Command-line entry point: interactive play on the classic board, or
//! an unattended seeded simulation with `--auto`.

use clap::Parser;
use tracing::debug;
use tracing_subscriber::EnvFilter;

use rust_monopoly::games::classic;
use rust_monopoly::io::{ConsolePrompter, Prompter, RandomPrompter};

#[derive(Debug, Parser)]
#[command(name = "rust-monopoly", about = "A Monopoly game for 2-8 players")]
struct Args {
    /// Play the whole game unattended with random decisions.
    #[arg(long)]
    auto: bool,

    /// Seed for the dice, deck shuffles, and (with --auto) decisions.
    #[arg(long)]
    seed: Option<u64>,
}

fn main() {
    let args = Args::parse();
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .with_target(false)
        .init();

    let seed = args.seed.unwrap_or_else(rand::random);
    debug!("seed: {seed}");

    let mut io: Box<dyn Prompter> = if args.auto {
        Box::new(RandomPrompter::new(seed))
    } else {
        Box::new(ConsolePrompter::new())
    };

    let mut game = classic::game(seed);
    game.setup(io.as_mut());
    game.run(io.as_mut());
}
