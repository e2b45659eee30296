use std::time::{Duration, Instant};

/// A value together with how long it took to produce.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Timed<T> {
    pub value: T,
    pub elapsed: Duration,
}

/// Runs `f`, taking wall-clock timestamps immediately around it.
pub fn time<T, F: FnOnce() -> T>(f: F) -> Timed<T> {
    let start = Instant::now();
    let value = f();
    let elapsed = start.elapsed();
    Timed { value, elapsed }
}

/// `"<label> took : <seconds>"`, seconds to millisecond precision.
pub fn format_elapsed(label: &str, elapsed: Duration) -> String {
    format!("{} took : {:.3}", label, elapsed.as_secs_f64())
}
