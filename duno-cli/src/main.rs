mod console;

use std::io::{self, BufRead, Write};

use clap::{Parser, ValueEnum};
use color_eyre::Result;
use console::Console;
use duno::{player::Player, uno::Uno};
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
use tracing::{info, Level};

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum GameMode {
    /// Two people sharing one terminal
    Human,
    /// Play against the built-in bot
    Bot,
}

/// Play UNO in the terminal against a friend or a bot.
#[derive(Debug, Parser)]
#[command(name = "duno", version)]
struct Args {
    /// Opponent type; asked interactively when omitted
    #[arg(long, value_enum)]
    mode: Option<GameMode>,

    /// Your player name; asked interactively when omitted
    #[arg(long)]
    name: Option<String>,

    /// Seed for a reproducible shuffle
    #[arg(long)]
    seed: Option<u64>,

    /// Log level written to stderr
    #[arg(long, default_value_t = Level::WARN)]
    log_level: Level,
}

fn main() -> Result<()> {
    color_eyre::install()?;

    let args = Args::parse();

    tracing_subscriber::fmt()
        .with_max_level(args.log_level)
        .with_writer(io::stderr)
        .init();

    let mut console = Console::new(io::stdin().lock(), io::stdout());
    run(&args, &mut console)
}

fn run<R: BufRead, W: Write>(args: &Args, console: &mut Console<R, W>) -> Result<()> {
    let mode = match args.mode {
        Some(mode) => mode,
        None => console.ask_mode()?,
    };
    let name = match &args.name {
        Some(name) => name.clone(),
        None => console.ask_name()?,
    };

    let opponent = match mode {
        GameMode::Human => Player::human("Player 2"),
        GameMode::Bot => Player::bot("Bot"),
    };
    let players = [Player::human(name), opponent];

    let mut uno = match args.seed {
        Some(seed) => Uno::new_with_rng(players, &mut ChaCha8Rng::seed_from_u64(seed))?,
        None => Uno::new(players)?,
    };
    info!(?mode, seed = ?args.seed, "match started");

    while !uno.is_finished() {
        if uno.is_stalemate() {
            console.report_stalemate()?;
            return Ok(());
        }

        console.announce_turn(&uno)?;
        let result = uno.take_turn(console)?;
        console.report_turn(&uno, &result)?;
    }

    if let Some(winner) = uno.winner() {
        console.report_winner(winner)?;
    }

    Ok(())
}
