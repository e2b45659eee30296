//! Item 1: default trait behavior, a private helper, and a compact enum set.

use crate::config::LessonConfig;
use crate::error::Result;
use crate::label::{Label, LabelSet};
use crate::person::{say_name, Hakim, Person};
use crate::write_heading;
use std::io::Write;

/// Greets, prints the name, then builds the four-label set and prints what
/// it is made of. Returns the set.
pub fn run(out: &mut dyn Write, config: &LessonConfig) -> Result<LabelSet> {
    write_heading(out, "Item 1: default methods and enum sets", config.color)?;

    let hakim = Hakim;
    hakim.greet(out)?;
    say_name(out)?;

    let set = LabelSet::of(&[Label::A, Label::B, Label::C, Label::D]);
    writeln!(out, "{}", LabelSet::REPRESENTATION)?;
    tracing::debug!(members = %set, bits = set.bits(), "built label set");

    Ok(set)
}
