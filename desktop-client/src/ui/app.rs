use egui::Color32;
use tictactoe_common::config::{ConfigManager, FileContentConfigProvider, YamlConfigSerializer};
use tictactoe_common::games::SessionRng;
use tictactoe_common::games::tictactoe::{
    FirstPlayerMode, GameStatus, Side, TicTacToeGameState, TieBreak,
};
use tictactoe_common::log;

use crate::config::Config;
use super::game::TicTacToeGameUi;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GameSettings {
    pub first_player: FirstPlayerMode,
    pub tie_break: TieBreak,
}

#[derive(Debug, Default)]
struct Scoreboard {
    player_wins: u32,
    computer_wins: u32,
    draws: u32,
}

impl Scoreboard {
    fn record(&mut self, status: GameStatus) {
        match status {
            GameStatus::PlayerWon => self.player_wins += 1,
            GameStatus::ComputerWon => self.computer_wins += 1,
            GameStatus::Draw => self.draws += 1,
            GameStatus::InProgress => {}
        }
    }
}

pub struct TicTacToeApp {
    game: TicTacToeGameState,
    rng: SessionRng,
    settings: GameSettings,
    pending_settings: GameSettings,
    game_ui: TicTacToeGameUi,
    scoreboard: Scoreboard,
    result_recorded: bool,
    config: Config,
    config_manager: ConfigManager<FileContentConfigProvider, Config, YamlConfigSerializer>,
    last_error: Option<String>,
}

impl TicTacToeApp {
    const INFO_PANEL_WIDTH: f32 = 200.0;

    pub fn new(
        config: Config,
        config_manager: ConfigManager<FileContentConfigProvider, Config, YamlConfigSerializer>,
        settings: GameSettings,
        mut rng: SessionRng,
    ) -> Self {
        let game = TicTacToeGameState::new(settings.first_player, &mut rng);
        log!("New game, {} moves first", game.first_side);

        Self {
            game,
            rng,
            settings,
            pending_settings: settings,
            game_ui: TicTacToeGameUi,
            scoreboard: Scoreboard::default(),
            result_recorded: false,
            config,
            config_manager,
            last_error: None,
        }
    }

    fn new_game(&mut self) {
        if self.pending_settings != self.settings {
            self.settings = self.pending_settings;
            self.save_settings();
        }

        self.game = TicTacToeGameState::new(self.settings.first_player, &mut self.rng);
        self.result_recorded = false;
        log!("New game, {} moves first", self.game.first_side);
    }

    fn save_settings(&mut self) {
        self.config.tictactoe.first_player = self.settings.first_player;
        self.config.tictactoe.tie_break = self.settings.tie_break;

        if let Err(e) = self.config_manager.set_config(&self.config) {
            log!("Failed to save config: {}", e);
            self.last_error = Some(e);
        }
    }

    fn play_player_move(&mut self, cell: usize) {
        match self.game.place_mark(Side::Player, cell) {
            Ok(()) => {
                log!("Player marks cell {}", cell);
                self.last_error = None;
            }
            Err(e) => {
                log!("Rejected player move to cell {}: {}", cell, e);
                self.last_error = Some(e.to_string());
                return;
            }
        }

        if self.game.is_computer_turn() {
            self.play_computer_move();
        }
    }

    fn play_computer_move(&mut self) {
        match self.game.play_computer_move(self.settings.tie_break, &mut self.rng) {
            Ok(cell) => log!("Computer marks cell {}", cell),
            Err(e) => {
                log!("Computer could not move: {}", e);
                self.last_error = Some(e.to_string());
            }
        }
    }

    fn record_result(&mut self) {
        if self.game.status.is_over() && !self.result_recorded {
            self.scoreboard.record(self.game.status);
            self.result_recorded = true;
        }
    }

    fn render_info_panel(&mut self, ui: &mut egui::Ui) {
        ui.heading("Tic Tac Toe");
        ui.separator();

        ui.label("You: X");
        ui.label("Computer: O");
        ui.separator();

        let (status, colour) = status_text(self.game.status);
        ui.colored_label(colour, status);

        if let Some(error) = &self.last_error {
            ui.colored_label(Color32::RED, error);
        }

        ui.separator();
        ui.label(format!("Wins: {}", self.scoreboard.player_wins));
        ui.label(format!("Losses: {}", self.scoreboard.computer_wins));
        ui.label(format!("Draws: {}", self.scoreboard.draws));
        ui.separator();

        egui::ComboBox::from_label("First move")
            .selected_text(first_player_text(self.pending_settings.first_player))
            .show_ui(ui, |ui| {
                for mode in [FirstPlayerMode::Player, FirstPlayerMode::Computer, FirstPlayerMode::Random] {
                    ui.selectable_value(&mut self.pending_settings.first_player, mode, first_player_text(mode));
                }
            });

        egui::ComboBox::from_label("Tie break")
            .selected_text(tie_break_text(self.pending_settings.tie_break))
            .show_ui(ui, |ui| {
                for tie_break in [TieBreak::Sequential, TieBreak::Uniform] {
                    ui.selectable_value(&mut self.pending_settings.tie_break, tie_break, tie_break_text(tie_break));
                }
            });

        ui.add_space(10.0);
        if ui.button("New game").clicked() {
            self.new_game();
            ui.ctx().request_repaint();
        }

        ui.add_space(10.0);
        ui.small(format!("Seed: {}", self.rng.seed()));
    }
}

/// The computer always replies within the frame, so an unfinished game is
/// always waiting on the player.
fn status_text(status: GameStatus) -> (&'static str, Color32) {
    match status {
        GameStatus::InProgress => ("Your turn", Color32::GREEN),
        GameStatus::PlayerWon => ("You won!", Color32::GREEN),
        GameStatus::ComputerWon => ("Computer won!", Color32::RED),
        GameStatus::Draw => ("Draw!", Color32::GRAY),
    }
}

fn first_player_text(mode: FirstPlayerMode) -> &'static str {
    match mode {
        FirstPlayerMode::Player => "You",
        FirstPlayerMode::Computer => "Computer",
        FirstPlayerMode::Random => "Random",
    }
}

fn tie_break_text(tie_break: TieBreak) -> &'static str {
    match tie_break {
        TieBreak::Sequential => "Sequential",
        TieBreak::Uniform => "Uniform",
    }
}

impl eframe::App for TicTacToeApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        if self.game.is_computer_turn() {
            self.play_computer_move();
        }
        self.record_result();

        egui::SidePanel::right("game_info")
            .resizable(false)
            .exact_width(Self::INFO_PANEL_WIDTH)
            .show(ctx, |ui| self.render_info_panel(ui));

        let accepts_input =
            self.game.status == GameStatus::InProgress && self.game.current_side == Side::Player;
        let clicked = egui::CentralPanel::default()
            .show(ctx, |ui| self.game_ui.render_board(ui, &self.game, accepts_input))
            .inner;

        if let Some(cell) = clicked {
            self.play_player_move(cell);
            ctx.request_repaint();
        }
    }
}
