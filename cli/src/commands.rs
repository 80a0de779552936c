use tictactoe_engine::tictactoe::{
    Board, MatchOutcome, MatchSettings, MatchSummary, MoveScore, choose_move,
    choose_move_parallel, play_match, score_moves, score_moves_parallel, validate_position,
};
use tictactoe_engine::{SessionRng, debug_log, log};

use crate::config::{CliConfig, CliConfigStore};

fn parse_position(board: &str) -> Result<Board, String> {
    let board: Board = board.parse()?;
    validate_position(&board)?;
    Ok(board)
}

pub fn best_move(board: &str, config: &CliConfig) -> Result<Option<usize>, String> {
    let board = parse_position(board)?;
    let choice = if config.parallel {
        choose_move_parallel(&board)
    } else {
        choose_move(&board)
    };
    match choice {
        Some(index) => debug_log!("Best move on {} is cell {}", board, index),
        None => debug_log!("Board {} is full, no move", board),
    }
    Ok(choice)
}

pub fn scores(board: &str, config: &CliConfig) -> Result<Vec<MoveScore>, String> {
    let board = parse_position(board)?;
    let scores = if config.parallel {
        score_moves_parallel(&board)
    } else {
        score_moves(&board)
    };
    debug_log!("Scored {} candidates on {}", scores.len(), board);
    Ok(scores)
}

pub fn save_config(store: &CliConfigStore, config: &CliConfig) -> Result<(), String> {
    store.save(config)?;
    log!("Config saved");
    Ok(())
}

pub fn play(config: &CliConfig) -> Result<MatchSummary, String> {
    let mut rng = match config.seed {
        Some(seed) => SessionRng::new(seed),
        None => SessionRng::from_random(),
    };
    log!(
        "Playing {} games against the {} opponent (seed {})",
        config.games,
        config.opponent,
        rng.seed()
    );

    let mut summary = MatchSummary::default();
    for game in 0..config.games {
        let settings = MatchSettings {
            first_player: config.first_player.first_player(game),
            opponent: config.opponent,
            parallel: config.parallel,
        };
        let result = play_match(&settings, &mut rng)?;
        match result.winning_line {
            Some(line) => log!(
                "Game {}: {:?} opened, {} on {} along {:?} after moves {:?}",
                game + 1,
                settings.first_player,
                outcome_label(result.outcome),
                result.board,
                line,
                result.moves
            ),
            None => log!(
                "Game {}: {:?} opened, {} on {} after moves {:?}",
                game + 1,
                settings.first_player,
                outcome_label(result.outcome),
                result.board,
                result.moves
            ),
        }
        summary.record(result.outcome);
    }

    log!("{}", summary);
    if summary.opponent_wins > 0 {
        return Err(format!("Engine lost {} games", summary.opponent_wins));
    }
    Ok(summary)
}

pub fn outcome_label(outcome: MatchOutcome) -> &'static str {
    match outcome {
        MatchOutcome::AiWon => "win",
        MatchOutcome::Draw => "draw",
        MatchOutcome::OpponentWon => "loss",
    }
}
