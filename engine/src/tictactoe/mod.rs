mod board;
mod bot_controller;
mod game_state;
mod match_runner;
mod types;
mod validate;
mod win_detector;

pub use board::{Board, get_available_moves, is_valid_move};
pub use bot_controller::{
    IMMEDIATE_WIN_SCORE, WIN_SCORE, choose_move, choose_move_parallel, minimax, score_moves,
    score_moves_parallel,
};
pub use game_state::TicTacToeGameState;
pub use match_runner::{
    MatchOutcome, MatchResult, MatchSettings, MatchSummary, OpponentKind, calculate_opponent_move,
    play_match,
};
pub use types::{BOARD_SIDE, CELL_COUNT, Cell, FirstPlayerMode, GameStatus, MoveScore, Player};
pub use validate::validate_position;
pub use win_detector::{
    LINES, Line, check_win_with_line, is_full_with_no_winner, is_winning_for, winner,
};
