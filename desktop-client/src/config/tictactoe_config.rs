use serde::{Deserialize, Serialize};
use tictactoe_common::games::tictactoe::{FirstPlayerMode, TieBreak};

#[derive(Debug, PartialEq, Serialize, Deserialize, Clone)]
pub struct TicTacToeConfig {
    pub first_player: FirstPlayerMode,
    #[serde(default)]
    pub tie_break: TieBreak,
    /// Fixed seed for the computer's random choices. A fresh seed per run when absent.
    #[serde(default)]
    pub seed: Option<u64>,
}

impl Default for TicTacToeConfig {
    fn default() -> Self {
        Self {
            first_player: FirstPlayerMode::Player,
            tie_break: TieBreak::Sequential,
            seed: None,
        }
    }
}
