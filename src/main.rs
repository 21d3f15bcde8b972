use std::env;
use std::process::ExitCode;

use chess_state::config::{GameConfig, RULES_ENV};
use chess_state::console;

fn main() -> ExitCode {
    #[cfg(feature = "logging")]
    env_logger::init();

    let env_rules = env::var(RULES_ENV).ok();
    let config = match GameConfig::from_args(env::args().skip(1), env_rules.as_deref()) {
        Ok(config) => config,
        Err(e) => {
            eprintln!("Error: {e}");
            eprintln!("usage: chess_state [--rules legacy|mirrored] [--glyphs]");
            return ExitCode::from(2);
        }
    };

    match console::run_console_loop(config) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {e}");
            ExitCode::FAILURE
        }
    }
}
