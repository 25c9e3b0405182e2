use std::path::PathBuf;

use clap::Parser;
use memory_cli::{format_leaderboard, play_session, start_game, Config, Console, SessionEnd};
use rand::rngs::StdRng;
use rand::SeedableRng;
use tracing::info;
use tracing_subscriber::filter::{LevelFilter, Targets};
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;

/// Test your memory: find all pairs of cards in as few moves as possible.
#[derive(Parser)]
struct Args {
    /// Side length of the board
    #[arg(short, long, default_value_t = 4, value_parser = parse_board_size)]
    board_size: usize,

    /// Name to record on the leaderboard
    #[arg(short, long, default_value = "player")]
    player: String,

    /// Directory for the saved game and the leaderboard
    #[arg(short, long, default_value = ".")]
    data_dir: PathBuf,

    /// RNG seed
    #[arg(long)]
    seed: Option<u64>,

    /// Continue the saved game instead of starting a new one
    #[arg(short, long, default_value_t = false)]
    resume: bool,

    /// Show the leaderboard for the board size and exit
    #[arg(long, default_value_t = false)]
    leaderboard: bool,

    /// A log level among "off", "error", "warn", "info", "debug", "trace"
    #[arg(short, long, default_value = "warn")]
    log_level: LevelFilter,
}

const LEADERBOARD_LENGTH: usize = 10;

fn parse_board_size(s: &str) -> Result<usize, String> {
    match s.parse::<usize>() {
        Ok(n @ (4 | 6 | 8)) => Ok(n),
        _ => Err(format!("'{}' is not one of the board sizes 4, 6 and 8", s)),
    }
}

fn main() -> anyhow::Result<()> {
    let args = Args::parse();

    initialize_logging(args.log_level);

    // Get a random seed
    let seed = args.seed.unwrap_or_else(rand::random);
    info!(seed);

    let mut config = Config::new(
        StdRng::seed_from_u64(seed),
        args.data_dir,
        args.player,
        args.board_size,
    )?;

    if args.leaderboard {
        let entries = config.leaderboard().top(config.board_size, LEADERBOARD_LENGTH)?;
        print!("{}", format_leaderboard(config.board_size, &entries));
        return Ok(());
    }

    let game = start_game(&mut config, args.resume)?;
    let mut console = Console::new(std::io::stdin().lock(), std::io::stdout().lock());
    match play_session(&config, &mut console, game, args.resume)? {
        SessionEnd::Finished { moves, score } => info!(moves, score, "Game finished"),
        SessionEnd::Saved => info!("Session ended with a save"),
        SessionEnd::Quit => info!("Session ended without saving"),
    }

    Ok(())
}

fn initialize_logging(level: LevelFilter) {
    let format = tracing_subscriber::fmt::format()
        .with_target(false)
        .compact();

    let filter = Targets::new().with_default(level);

    // Stdout belongs to the game
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::fmt::layer()
                .event_format(format)
                .with_writer(std::io::stderr),
        )
        .with(filter)
        .init();
}
