//! Item 6 on its own: regex reuse, then boxed vs primitive accumulation.
//!
//! Run with: cargo run --release --bin item_06
//! The boxed loop makes about 2^31 allocations; expect it to take a while.

use colored::Colorize;
use idiom_lessons::{item_06, logging, LessonConfig};
use std::io;
use std::process::ExitCode;

fn main() -> ExitCode {
    logging::init();

    let result = LessonConfig::from_env().and_then(|config| item_06::run(&mut io::stdout().lock(), &config));

    match result {
        Ok(report) => {
            tracing::debug!(?report, "item 6 finished");
            ExitCode::SUCCESS
        }
        Err(e) => {
            eprintln!("{} {}", "error:".red().bold(), e);
            ExitCode::FAILURE
        }
    }
}
