use super::board::Board;
use super::types::{Cell, Player};
use super::win_detector::is_winning_for;

/// Accepts only positions where it is the automated side's turn: X has placed
/// as many marks as O or exactly one more, and nobody has three in a row yet.
/// The search itself never checks this; callers run it at the input boundary.
pub fn validate_position(board: &Board) -> Result<(), String> {
    let player_one = board.count(Cell::PlayerOne);
    let player_two = board.count(Cell::PlayerTwo);
    if player_two > player_one {
        return Err(format!(
            "O has more marks than X, it is not O's turn (X: {}, O: {})",
            player_one, player_two
        ));
    }
    if player_one > player_two + 1 {
        return Err(format!(
            "X is more than one mark ahead (X: {}, O: {})",
            player_one, player_two
        ));
    }

    let one_won = is_winning_for(board, Player::One);
    let two_won = is_winning_for(board, Player::Two);
    match (one_won, two_won) {
        (true, true) => Err("Both players have three in a row".to_string()),
        (true, false) => Err("Game is already over, X has three in a row".to_string()),
        (false, true) => Err("Game is already over, O has three in a row".to_string()),
        (false, false) => Ok(()),
    }
}
