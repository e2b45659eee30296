//! Default trait methods and a module-private helper.
//!
//! `Person` carries a default `greet`, so implementors get behavior for free.
//! `say_name` is a plain function next to the trait; the name it prints comes
//! from `name()`, which is private to this module and can't be reached from
//! outside it.

use std::io::{self, Write};

pub trait Person {
    /// Writes the greeting followed by a newline.
    fn greet(&self, out: &mut dyn Write) -> io::Result<()> {
        writeln!(out, "Hi")
    }

    fn say_hi(&self) -> io::Result<()> {
        self.greet(&mut io::stdout().lock())
    }
}

/// Writes the name returned by the private helper.
pub fn say_name(out: &mut dyn Write) -> io::Result<()> {
    writeln!(out, "{}", name())
}

fn name() -> &'static str {
    "Hakim"
}

/// Relies entirely on the defaults.
#[derive(Debug, Clone, Copy, Default)]
pub struct Hakim;

impl Person for Hakim {}
