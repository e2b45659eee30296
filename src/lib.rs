// Idiom Lessons: Creating and Destroying Objects
//
// Each `item_*` module is one self-contained lesson that writes its output to
// any `Write`. The binaries point them at stdout.

pub mod accumulate;
pub mod config;
pub mod digits;
pub mod error;
pub mod item_01;
pub mod item_06;
pub mod label;
pub mod logging;
pub mod person;
pub mod timing;

pub use config::LessonConfig;
pub use error::{LessonError, Result};

use colored::Colorize;
use std::io::{self, Write};

/// Writes `=== title ===`, bold cyan when `color` is set.
pub fn write_heading(out: &mut dyn Write, title: &str, color: bool) -> io::Result<()> {
    let heading = format!("=== {title} ===");
    if color {
        writeln!(out, "{}", heading.bold().cyan())
    } else {
        writeln!(out, "{heading}")
    }
}

/// Runs every lesson in order.
pub fn run_all(out: &mut dyn Write, config: &LessonConfig) -> Result<()> {
    item_01::run(out, config)?;
    writeln!(out)?;
    item_06::run(out, config)?;
    Ok(())
}
