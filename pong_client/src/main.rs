use std::process::ExitCode;

use pong_client::{init_logging, run, FontLoadError};

fn main() -> ExitCode {
    init_logging();

    match run() {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            if let Some(font_err) = err.downcast_ref::<FontLoadError>() {
                // -1 as seen by the shell
                log::error!("Failed to load font! {font_err}");
                eprintln!("Failed to load font! {font_err}");
                return ExitCode::from(255);
            }
            log::error!("{err:?}");
            ExitCode::FAILURE
        }
    }
}
