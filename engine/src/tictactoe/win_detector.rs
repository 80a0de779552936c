use super::board::Board;
use super::types::Player;

pub type Line = [usize; 3];

pub const LINES: [Line; 8] = [
    [0, 1, 2],
    [3, 4, 5],
    [6, 7, 8],
    [0, 3, 6],
    [1, 4, 7],
    [2, 5, 8],
    [0, 4, 8],
    [2, 4, 6],
];

fn owns_line(board: &Board, player: Player, line: &Line) -> bool {
    let mark = player.cell();
    line.iter().all(|&index| board.get(index) == Some(mark))
}

pub fn is_winning_for(board: &Board, player: Player) -> bool {
    LINES.iter().any(|line| owns_line(board, player, line))
}

pub fn is_full_with_no_winner(board: &Board) -> bool {
    board.is_full() && !is_winning_for(board, Player::One) && !is_winning_for(board, Player::Two)
}

/// First completed line in `LINES` order. On a legal board at most one side
/// can own a line.
pub fn check_win_with_line(board: &Board) -> Option<(Player, Line)> {
    for line in &LINES {
        for player in [Player::One, Player::Two] {
            if owns_line(board, player, line) {
                return Some((player, *line));
            }
        }
    }
    None
}

pub fn winner(board: &Board) -> Option<Player> {
    check_win_with_line(board).map(|(player, _)| player)
}
