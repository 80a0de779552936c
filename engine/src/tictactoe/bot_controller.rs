use rayon::prelude::*;

use crate::debug_log;
use super::board::{Board, get_available_moves};
use super::types::{MoveScore, Player};
use super::win_detector::{is_full_with_no_winner, is_winning_for};

/// Returned when the automated player already has three in a row on the
/// position being evaluated, so an outright winning move beats any search score.
pub const IMMEDIATE_WIN_SCORE: i32 = 1_000_000;
pub const WIN_SCORE: i32 = 100;

/// Picks the cell `Player::Two` should take, or `None` when the board is full.
/// Ties go to the lowest index.
pub fn choose_move(board: &Board) -> Option<usize> {
    let best = best_of(&score_moves(board))?;
    debug_log!("Chose cell {} with score {} on {}", best.index, best.score, board);
    Some(best.index)
}

/// Same result as [`choose_move`], with the top-level candidates scored on the
/// rayon pool.
pub fn choose_move_parallel(board: &Board) -> Option<usize> {
    let best = best_of(&score_moves_parallel(board))?;
    debug_log!("Chose cell {} with score {} on {} (parallel)", best.index, best.score, board);
    Some(best.index)
}

/// Scores of every empty cell for `Player::Two`, in ascending index order.
pub fn score_moves(board: &Board) -> Vec<MoveScore> {
    get_available_moves(board)
        .into_iter()
        .map(|index| MoveScore::new(index, score_candidate(board, index)))
        .collect()
}

pub fn score_moves_parallel(board: &Board) -> Vec<MoveScore> {
    get_available_moves(board)
        .par_iter()
        .map(|&index| MoveScore::new(index, score_candidate(board, index)))
        .collect()
}

fn score_candidate(board: &Board, index: usize) -> i32 {
    let hypothetical = board.with_mark(index, Player::Two);
    // The only way the root has no replies is that this move filled the board.
    minimax(&hypothetical, 0).unwrap_or_else(|| tie_score(0))
}

fn best_of(scores: &[MoveScore]) -> Option<MoveScore> {
    let mut best: Option<MoveScore> = None;
    for candidate in scores {
        if best.is_none_or(|current| candidate.score > current.score) {
            best = Some(*candidate);
        }
    }
    best
}

/// Value of `board` for `Player::Two`, assuming both sides play perfectly from
/// here. The side to move is fixed by depth alone (see [`Player::at_depth`]).
///
/// Returns `None` when there is no empty cell to play; such a node is left out
/// of its parent's min/max rather than scored.
pub fn minimax(board: &Board, depth: u32) -> Option<i32> {
    if depth == 0 && is_winning_for(board, Player::Two) {
        return Some(IMMEDIATE_WIN_SCORE);
    }

    let mover = Player::at_depth(depth);
    let scores = get_available_moves(board).into_iter().filter_map(|index| {
        let next = board.with_mark(index, mover);
        if is_winning_for(&next, mover) {
            Some(win_score(mover, depth))
        } else if is_full_with_no_winner(&next) {
            Some(tie_score(depth))
        } else {
            minimax(&next, depth + 1)
        }
    });

    match mover {
        Player::Two => scores.max(),
        Player::One => scores.min(),
    }
}

fn win_score(winner: Player, depth: u32) -> i32 {
    let depth = depth as i32;
    match winner {
        Player::Two => WIN_SCORE - depth,
        Player::One => -WIN_SCORE + depth,
    }
}

fn tie_score(depth: u32) -> i32 {
    -(depth as i32)
}
