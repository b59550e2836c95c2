//! Pong Ping entry point
//!
//! Sets up logging, loads settings and high scores, then hands control to the
//! native window loop.

use std::fs::OpenOptions;
use std::io;
use std::path::Path;
use std::process::ExitCode;

use rand::Rng;

use pong_ping::platform::native;
use pong_ping::settings::{SETTINGS_FILE, Settings};
use pong_ping::sim::Field;
use pong_ping::{GameController, HighScores};

/// Log to `path` (appending), or stderr if it cannot be opened.
/// Returns the open error so it can be logged once the logger exists.
fn init_logging(path: &Path) -> Option<io::Error> {
    let mut builder = env_logger::builder();
    builder.filter_level(log::LevelFilter::Info);
    let open_err = match OpenOptions::new().create(true).append(true).open(path) {
        Ok(file) => {
            builder.target(env_logger::Target::Pipe(Box::new(file)));
            None
        }
        Err(e) => Some(e),
    };
    builder.init();
    open_err
}

fn main() -> ExitCode {
    let settings_path = Path::new(SETTINGS_FILE);
    let (settings, settings_msg) = Settings::load(settings_path);
    if let Some(e) = init_logging(&settings.log_path) {
        log::warn!(
            "Could not open log file {}: {}; logging to stderr",
            settings.log_path.display(),
            e
        );
    }
    log::info!("Pong Ping starting...");
    log::info!("{}", settings_msg);
    settings.save_if_missing(settings_path);

    let default_hook = std::panic::take_hook();
    std::panic::set_hook(Box::new(move |info| {
        log::error!("Fatal: {}", info);
        default_hook(info);
    }));

    let field = Field::default();
    let high_scores = HighScores::load(&settings.high_score_path);
    let seed: u64 = rand::rng().random();
    let game = GameController::new(field, high_scores, &settings, seed);

    match native::run(game, settings, field) {
        Ok(()) => {
            log::info!("Goodbye");
            ExitCode::SUCCESS
        }
        Err(e) => {
            log::error!("Fatal: {:#}", e);
            eprintln!("pong-ping: {:#}", e);
            ExitCode::FAILURE
        }
    }
}
