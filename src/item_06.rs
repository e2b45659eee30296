//! Item 6: don't rebuild what you can reuse.
//!
//! First the digit check, naive and then with a reused regex. Then the same
//! sum computed into a boxed total and into a plain `i64`.

use crate::accumulate;
use crate::config::LessonConfig;
use crate::digits::{check_naive, DigitMatcher};
use crate::error::Result;
use crate::timing::{format_elapsed, time};
use crate::write_heading;
use std::io::Write;
use std::time::Duration;
use tracing::info;

/// Everything item 6 measured.
#[derive(Debug, Clone, PartialEq)]
pub struct Item06Report {
    pub naive_results: Vec<bool>,
    pub reuse_results: Vec<bool>,
    pub naive_elapsed: Duration,
    pub reuse_elapsed: Duration,
    /// `None` when the boxed loop was skipped.
    pub boxed_sum: Option<i64>,
    pub boxed_elapsed: Option<Duration>,
    pub primitive_sum: i64,
    pub primitive_elapsed: Duration,
}

pub fn run(out: &mut dyn Write, config: &LessonConfig) -> Result<Item06Report> {
    let bound = config.bound()?;

    write_heading(out, "Item 6: avoid creating unnecessary objects", config.color)?;

    let naive = time(|| check_naive(config.inputs.as_slice()));
    let naive_results = naive.value?;
    info!(elapsed = ?naive.elapsed, "naive digit check done");

    let reuse = time(|| DigitMatcher::new().map(|matcher| matcher.check_all(config.inputs.as_slice())));
    let reuse_results = reuse.value?;
    info!(elapsed = ?reuse.elapsed, "reused digit check done");

    let (boxed_sum, boxed_elapsed) = if config.run_boxed {
        let boxed = time(|| accumulate::boxed_sum(bound));
        info!(sum = boxed.value, elapsed = ?boxed.elapsed, "boxed loop done");
        writeln!(out, "{}", format_elapsed("Long", boxed.elapsed))?;
        (Some(boxed.value), Some(boxed.elapsed))
    } else {
        writeln!(out, "Long skipped")?;
        (None, None)
    };

    let primitive = time(|| accumulate::primitive_sum(bound));
    info!(sum = primitive.value, elapsed = ?primitive.elapsed, "primitive loop done");
    writeln!(out, "{}", format_elapsed("long", primitive.elapsed))?;

    Ok(Item06Report {
        naive_results,
        reuse_results,
        naive_elapsed: naive.elapsed,
        reuse_elapsed: reuse.elapsed,
        boxed_sum,
        boxed_elapsed,
        primitive_sum: primitive.value,
        primitive_elapsed: primitive.elapsed,
    })
}
