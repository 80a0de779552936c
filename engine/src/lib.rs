//! Perfect-play move selection for 3x3 tic-tac-toe, plus the small game,
//! match, config and logging layers the `tictactoe_ai` binary is built on.

pub mod config;
pub mod logger;
pub mod session_rng;
pub mod tictactoe;

pub use session_rng::SessionRng;
