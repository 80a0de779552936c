use super::board::{Board, is_valid_move};
use super::types::{CELL_COUNT, GameStatus, Player};
use super::win_detector::{Line, check_win_with_line};

#[derive(Debug, Clone)]
pub struct TicTacToeGameState {
    pub board: Board,
    pub current_player: Player,
    pub status: GameStatus,
    pub last_move: Option<usize>,
    pub winning_line: Option<Line>,
}

impl TicTacToeGameState {
    pub fn new(first_player: Player) -> Self {
        Self {
            board: Board::empty(),
            current_player: first_player,
            status: GameStatus::InProgress,
            last_move: None,
            winning_line: None,
        }
    }

    pub fn place_mark(&mut self, player: Player, index: usize) -> Result<(), String> {
        if self.status != GameStatus::InProgress {
            return Err("Game is already over".to_string());
        }

        if player != self.current_player {
            return Err("Not your turn".to_string());
        }

        if index >= CELL_COUNT {
            return Err(format!("Cell {} is out of bounds", index));
        }

        if !is_valid_move(&self.board, index) {
            return Err(format!("Cell {} is already marked", index));
        }

        self.board = self.board.with_mark(index, player);
        self.last_move = Some(index);

        self.check_game_over();

        if self.status == GameStatus::InProgress {
            self.current_player = self.current_player.opponent();
        }

        Ok(())
    }

    fn check_game_over(&mut self) {
        if let Some((winner, line)) = check_win_with_line(&self.board) {
            self.status = match winner {
                Player::One => GameStatus::PlayerOneWon,
                Player::Two => GameStatus::PlayerTwoWon,
            };
            self.winning_line = Some(line);
            return;
        }

        if self.board.is_full() {
            self.status = GameStatus::Draw;
        }
    }

    pub fn get_winner(&self) -> Option<Player> {
        match self.status {
            GameStatus::PlayerOneWon => Some(Player::One),
            GameStatus::PlayerTwoWon => Some(Player::Two),
            _ => None,
        }
    }
}
