//! Item 1 on its own: default trait methods and a bitmask enum set.
//!
//! Run with: cargo run --bin item_01

use colored::Colorize;
use idiom_lessons::{item_01, logging, LessonConfig};
use std::io;
use std::process::ExitCode;

fn main() -> ExitCode {
    logging::init();

    let result = LessonConfig::from_env().and_then(|config| item_01::run(&mut io::stdout().lock(), &config));

    match result {
        Ok(_) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("{} {}", "error:".red().bold(), e);
            ExitCode::FAILURE
        }
    }
}
