mod commands;
mod config;

use std::path::PathBuf;

use clap::{Parser, Subcommand};
use tictactoe_engine::config::Validate;
use tictactoe_engine::logger::{self, LogLevel};
use tictactoe_engine::tictactoe::{FirstPlayerMode, OpponentKind};

#[derive(Parser)]
#[command(name = "tictactoe_ai", about = "Perfect-play tic-tac-toe engine")]
struct Args {
    /// Config file, defaults to tictactoe_ai.yaml next to the executable.
    #[arg(long)]
    config: Option<PathBuf>,

    #[arg(long)]
    use_log_prefix: bool,

    #[arg(long)]
    verbose: bool,

    /// Score the top-level candidates on a thread pool.
    #[arg(long)]
    parallel: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Print the cell the engine plays as O. Boards are nine cells of `.`, `X`, `O`
    /// (or `0`, `1`, `2`), optionally split into rows with `/`.
    BestMove { board: String },
    /// Print the score of every empty cell.
    Scores { board: String },
    /// Write the effective config, including `--parallel`, to the config file.
    SaveConfig,
    /// Play matches against an opponent and report the tally.
    Play {
        #[arg(long)]
        games: Option<u32>,
        #[arg(long)]
        opponent: Option<OpponentKind>,
        #[arg(long)]
        first_player: Option<FirstPlayerMode>,
        #[arg(long)]
        seed: Option<u64>,
    },
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args = Args::parse();

    let store = config::get_config_store(args.config);
    let mut config = store.load()?;
    config.parallel |= args.parallel;

    let prefix = if args.use_log_prefix {
        config.log_prefix.clone()
    } else {
        None
    };
    let level = if args.verbose {
        LogLevel::Debug
    } else {
        LogLevel::Info
    };
    logger::init_logger(prefix, level);

    match args.command {
        Command::BestMove { board } => match commands::best_move(&board, &config)? {
            Some(index) => println!("{}", index),
            None => println!("none"),
        },
        Command::Scores { board } => {
            let scores = commands::scores(&board, &config)?;
            if scores.is_empty() {
                println!("none");
            }
            for entry in scores {
                println!("{}: {}", entry.index, entry.score);
            }
        }
        Command::SaveConfig => commands::save_config(&store, &config)?,
        Command::Play {
            games,
            opponent,
            first_player,
            seed,
        } => {
            if let Some(games) = games {
                config.games = games;
            }
            if let Some(opponent) = opponent {
                config.opponent = opponent;
            }
            if let Some(first_player) = first_player {
                config.first_player = first_player;
            }
            if seed.is_some() {
                config.seed = seed;
            }
            config.validate()?;
            commands::play(&config)?;
        }
    }

    Ok(())
}
