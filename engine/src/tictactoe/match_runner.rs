use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::debug_log;
use crate::session_rng::SessionRng;
use super::board::{Board, get_available_moves};
use super::bot_controller::{choose_move, choose_move_parallel};
use super::game_state::TicTacToeGameState;
use super::types::Player;
use super::win_detector::Line;

/// Who sits in the `Player::One` seat against the engine.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum OpponentKind {
    /// The engine itself, playing the other colour.
    Perfect,
    Random,
}

impl FromStr for OpponentKind {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "perfect" => Ok(OpponentKind::Perfect),
            "random" => Ok(OpponentKind::Random),
            other => Err(format!("Unknown opponent '{}', expected perfect or random", other)),
        }
    }
}

impl fmt::Display for OpponentKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            OpponentKind::Perfect => write!(f, "perfect"),
            OpponentKind::Random => write!(f, "random"),
        }
    }
}

pub fn calculate_opponent_move(
    opponent: OpponentKind,
    board: &Board,
    rng: &mut SessionRng,
) -> Option<usize> {
    match opponent {
        OpponentKind::Perfect => choose_move(&board.swapped()),
        OpponentKind::Random => rng.choose(&get_available_moves(board)),
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum MatchOutcome {
    AiWon,
    Draw,
    OpponentWon,
}

#[derive(Clone, Copy, Debug)]
pub struct MatchSettings {
    pub first_player: Player,
    pub opponent: OpponentKind,
    pub parallel: bool,
}

#[derive(Debug, Clone)]
pub struct MatchResult {
    pub outcome: MatchOutcome,
    pub board: Board,
    pub moves: Vec<usize>,
    pub winning_line: Option<Line>,
}

pub fn play_match(settings: &MatchSettings, rng: &mut SessionRng) -> Result<MatchResult, String> {
    let mut state = TicTacToeGameState::new(settings.first_player);
    let mut moves = Vec::new();

    while !state.status.is_over() {
        let player = state.current_player;
        let index = match player {
            Player::Two if settings.parallel => choose_move_parallel(&state.board),
            Player::Two => choose_move(&state.board),
            Player::One => calculate_opponent_move(settings.opponent, &state.board, rng),
        }
        .ok_or_else(|| format!("No move available on unfinished board {}", state.board))?;

        debug_log!("{:?} takes cell {}", player, index);
        state.place_mark(player, index)?;
        moves.push(index);
    }

    let outcome = match state.get_winner() {
        Some(Player::Two) => MatchOutcome::AiWon,
        Some(Player::One) => MatchOutcome::OpponentWon,
        None => MatchOutcome::Draw,
    };

    Ok(MatchResult {
        outcome,
        board: state.board,
        moves,
        winning_line: state.winning_line,
    })
}

#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct MatchSummary {
    pub ai_wins: u32,
    pub draws: u32,
    pub opponent_wins: u32,
}

impl MatchSummary {
    pub fn record(&mut self, outcome: MatchOutcome) {
        match outcome {
            MatchOutcome::AiWon => self.ai_wins += 1,
            MatchOutcome::Draw => self.draws += 1,
            MatchOutcome::OpponentWon => self.opponent_wins += 1,
        }
    }

    pub fn games(&self) -> u32 {
        self.ai_wins + self.draws + self.opponent_wins
    }
}

impl fmt::Display for MatchSummary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} games: {} won, {} drawn, {} lost",
            self.games(),
            self.ai_wins,
            self.draws,
            self.opponent_wins
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tictactoe::types::Cell;
    use crate::tictactoe::win_detector::winner;

    fn settings(first_player: Player, opponent: OpponentKind) -> MatchSettings {
        MatchSettings {
            first_player,
            opponent,
            parallel: false,
        }
    }

    #[test]
    fn test_perfect_opponent_draws_either_order() {
        let mut rng = SessionRng::new(42);
        for first in [Player::One, Player::Two] {
            let result = play_match(&settings(first, OpponentKind::Perfect), &mut rng).unwrap();
            assert_eq!(result.outcome, MatchOutcome::Draw, "ended {}", result.board);
            assert_eq!(result.moves.len(), 9);
            assert!(result.board.is_full());
            assert_eq!(result.winning_line, None);
        }
    }

    #[test]
    fn test_random_opponent_never_wins() {
        let mut rng = SessionRng::new(42);
        let mut summary = MatchSummary::default();
        for game in 0..20 {
            let first = if game % 2 == 0 { Player::Two } else { Player::One };
            let result = play_match(&settings(first, OpponentKind::Random), &mut rng).unwrap();
            summary.record(result.outcome);
        }
        assert_eq!(summary.games(), 20);
        assert_eq!(summary.opponent_wins, 0);
        assert!(summary.ai_wins > 0);
    }

    #[test]
    fn test_same_seed_replays_same_game() {
        let s = settings(Player::One, OpponentKind::Random);
        let first = play_match(&s, &mut SessionRng::new(9)).unwrap();
        let second = play_match(&s, &mut SessionRng::new(9)).unwrap();
        assert_eq!(first.moves, second.moves);
        assert_eq!(first.outcome, second.outcome);
    }

    #[test]
    fn test_parallel_match_matches_sequential() {
        let mut parallel = settings(Player::Two, OpponentKind::Perfect);
        parallel.parallel = true;
        let a = play_match(&parallel, &mut SessionRng::new(1)).unwrap();
        let b = play_match(&settings(Player::Two, OpponentKind::Perfect), &mut SessionRng::new(1)).unwrap();
        assert_eq!(a.moves, b.moves);
    }

    #[test]
    fn test_perfect_opponent_blocks_for_player_one() {
        // Player two threatens 2; the opponent answers with the block.
        let board: Board = "OO.X.....".parse().unwrap();
        let mut rng = SessionRng::new(0);
        assert_eq!(calculate_opponent_move(OpponentKind::Perfect, &board, &mut rng), Some(2));
    }

    #[test]
    fn test_won_match_board_has_ai_line() {
        let mut rng = SessionRng::new(3);
        for _ in 0..6 {
            let result = play_match(&settings(Player::Two, OpponentKind::Random), &mut rng).unwrap();
            if result.outcome == MatchOutcome::AiWon {
                assert_eq!(winner(&result.board), Some(Player::Two));
            }
        }
    }

    #[test]
    fn test_winning_line_reported_for_won_match() {
        let mut rng = SessionRng::new(42);
        let mut seen_win = false;
        for _ in 0..20 {
            let result = play_match(&settings(Player::Two, OpponentKind::Random), &mut rng).unwrap();
            match result.outcome {
                MatchOutcome::AiWon => {
                    seen_win = true;
                    let line = result.winning_line.unwrap();
                    assert!(line.iter().all(|&index| result.board.get(index) == Some(Cell::PlayerTwo)));
                    assert!(line.contains(result.moves.last().unwrap()));
                }
                _ => assert_eq!(result.winning_line, None),
            }
        }
        assert!(seen_win);
    }

    #[test]
    fn test_opponent_kind_parsing() {
        assert_eq!("Perfect".parse::<OpponentKind>(), Ok(OpponentKind::Perfect));
        assert_eq!("random".parse::<OpponentKind>(), Ok(OpponentKind::Random));
        assert!("minimax".parse::<OpponentKind>().is_err());
        assert_eq!(OpponentKind::Random.to_string(), "random");
    }

    #[test]
    fn test_summary_display() {
        let mut summary = MatchSummary::default();
        summary.record(MatchOutcome::AiWon);
        summary.record(MatchOutcome::Draw);
        summary.record(MatchOutcome::Draw);
        assert_eq!(summary.to_string(), "3 games: 1 won, 2 drawn, 0 lost");
    }
}
