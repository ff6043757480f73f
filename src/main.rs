//! Tic-Tac-Toe AI GUI
//!
//! Play 3x3 or 4x4 Tic-Tac-Toe against the minimax AI or another player.

use clap::Parser;
use tictactoe::config::Cli;
use tictactoe::ui::TicTacToeApp;

fn main() -> Result<(), eframe::Error> {
    env_logger::init();
    let cli = Cli::parse();
    let session = cli.session();

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([900.0, 640.0])
            .with_min_inner_size([640.0, 480.0])
            .with_title("Tic-Tac-Toe"),
        ..Default::default()
    };

    eframe::run_native(
        "Tic-Tac-Toe",
        options,
        Box::new(move |cc| Ok(Box::new(TicTacToeApp::new(cc, session)))),
    )
}
