mod main_config;
mod tictactoe_config;
mod window_config;

pub use main_config::{Config, get_config_manager};
pub use tictactoe_config::TicTacToeConfig;
pub use window_config::WindowConfig;
