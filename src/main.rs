//! Runs every lesson in order.
//!
//! Run with: cargo run --release
//! Optional config: IDIOM_LESSONS_CONFIG=lessons.toml cargo run --release

use colored::Colorize;
use idiom_lessons::{logging, run_all, LessonConfig};
use std::io;
use std::process::ExitCode;

fn main() -> ExitCode {
    logging::init();

    let result = LessonConfig::from_env().and_then(|config| run_all(&mut io::stdout().lock(), &config));

    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("{} {}", "error:".red().bold(), e);
            ExitCode::FAILURE
        }
    }
}
