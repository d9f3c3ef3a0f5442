mod app;
mod game;

pub use app::{GameSettings, TicTacToeApp};
