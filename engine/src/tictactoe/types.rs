use std::str::FromStr;

use serde::{Deserialize, Serialize};

pub const BOARD_SIDE: usize = 3;
pub const CELL_COUNT: usize = BOARD_SIDE * BOARD_SIDE;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Cell {
    Empty,
    /// The human side.
    PlayerOne,
    /// The automated side.
    PlayerTwo,
}

impl Cell {
    pub fn symbol(&self) -> char {
        match self {
            Cell::Empty => '.',
            Cell::PlayerOne => 'X',
            Cell::PlayerTwo => 'O',
        }
    }

    pub fn from_symbol(symbol: char) -> Option<Cell> {
        match symbol {
            '.' | '-' | '0' => Some(Cell::Empty),
            'X' | 'x' | '1' => Some(Cell::PlayerOne),
            'O' | 'o' | '2' => Some(Cell::PlayerTwo),
            _ => None,
        }
    }

    /// Same cell with the two sides exchanged.
    pub fn swapped(&self) -> Cell {
        match self {
            Cell::Empty => Cell::Empty,
            Cell::PlayerOne => Cell::PlayerTwo,
            Cell::PlayerTwo => Cell::PlayerOne,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Player {
    One,
    Two,
}

impl Player {
    pub fn cell(&self) -> Cell {
        match self {
            Player::One => Cell::PlayerOne,
            Player::Two => Cell::PlayerTwo,
        }
    }

    pub fn opponent(&self) -> Player {
        match self {
            Player::One => Player::Two,
            Player::Two => Player::One,
        }
    }

    /// Side that places a mark at the given search depth. Depth 0 is the reply
    /// to the automated player's candidate move, so even depths belong to
    /// `Player::One` and odd depths to `Player::Two`.
    pub fn at_depth(depth: u32) -> Player {
        if depth % 2 == 0 {
            Player::One
        } else {
            Player::Two
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum GameStatus {
    InProgress,
    PlayerOneWon,
    PlayerTwoWon,
    Draw,
}

impl GameStatus {
    pub fn is_over(&self) -> bool {
        *self != GameStatus::InProgress
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FirstPlayerMode {
    Ai,
    Opponent,
    Alternate,
}

impl FirstPlayerMode {
    pub fn first_player(&self, game_index: u32) -> Player {
        match self {
            FirstPlayerMode::Ai => Player::Two,
            FirstPlayerMode::Opponent => Player::One,
            FirstPlayerMode::Alternate => {
                if game_index % 2 == 0 {
                    Player::Two
                } else {
                    Player::One
                }
            }
        }
    }
}

impl FromStr for FirstPlayerMode {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "ai" => Ok(FirstPlayerMode::Ai),
            "opponent" => Ok(FirstPlayerMode::Opponent),
            "alternate" => Ok(FirstPlayerMode::Alternate),
            other => Err(format!(
                "Unknown first player mode '{}', expected ai, opponent or alternate",
                other
            )),
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct MoveScore {
    pub index: usize,
    pub score: i32,
}

impl MoveScore {
    pub fn new(index: usize, score: i32) -> Self {
        Self { index, score }
    }
}
