mod config;
mod ui;

use clap::{Parser, ValueEnum};
use tictactoe_common::games::SessionRng;
use tictactoe_common::games::tictactoe::FirstPlayerMode;
use tictactoe_common::{log, logger};

use config::get_config_manager;
use ui::{GameSettings, TicTacToeApp};

#[derive(Clone, Copy, ValueEnum)]
enum FirstMover {
    Player,
    Computer,
    Random,
}

impl From<FirstMover> for FirstPlayerMode {
    fn from(mover: FirstMover) -> Self {
        match mover {
            FirstMover::Player => FirstPlayerMode::Player,
            FirstMover::Computer => FirstPlayerMode::Computer,
            FirstMover::Random => FirstPlayerMode::Random,
        }
    }
}

#[derive(Parser)]
#[command(name = "tictactoe_client")]
struct Args {
    #[arg(long)]
    use_log_prefix: bool,

    /// Config file to use instead of the one next to the executable.
    #[arg(long)]
    config: Option<String>,

    /// Seed for the computer's tie-breaks; overrides the config.
    #[arg(long)]
    seed: Option<u64>,

    /// Who moves first; overrides the config.
    #[arg(long, value_enum)]
    first: Option<FirstMover>,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args = Args::parse();

    let prefix = if args.use_log_prefix {
        Some("Client".to_string())
    } else {
        None
    };
    logger::init_logger(prefix);

    let config_manager = get_config_manager(args.config.as_deref());
    let config = config_manager.get_config()?;

    let settings = GameSettings {
        first_player: args
            .first
            .map(FirstPlayerMode::from)
            .unwrap_or(config.tictactoe.first_player),
        tie_break: config.tictactoe.tie_break,
    };

    let rng = match args.seed.or(config.tictactoe.seed) {
        Some(seed) => SessionRng::new(seed),
        None => SessionRng::from_random(),
    };
    log!(
        "Starting with seed {}, first move {:?}, tie break {:?}",
        rng.seed(),
        settings.first_player,
        settings.tie_break
    );

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([config.window.width, config.window.height])
            .with_title("Tic Tac Toe"),
        ..Default::default()
    };

    eframe::run_native(
        "Tic Tac Toe",
        options,
        Box::new(move |_cc| {
            Ok(Box::new(TicTacToeApp::new(
                config,
                config_manager,
                settings,
                rng,
            )))
        }),
    )?;

    log!("Window closed");
    Ok(())
}
