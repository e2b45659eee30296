//! Summing `0..bound` into a boxed total versus a plain one.
//!
//! `boxed_sum` allocates a new `Box<i64>` for every addition and drops the
//! old one, the way an immutable wrapper type behaves. `primitive_sum` keeps
//! the total in a register. Same answer, very different cost.

use std::hint::black_box;

/// Exclusive upper bound for both loops.
pub const LOOP_BOUND: i32 = i32::MAX;

pub fn boxed_sum(bound: i32) -> i64 {
    let mut sum: Box<i64> = Box::new(0);
    for i in 0..bound {
        // black_box keeps the allocator from eliding the box
        sum = black_box(Box::new(*sum + i64::from(i)));
    }
    *sum
}

pub fn primitive_sum(bound: i32) -> i64 {
    let mut sum: i64 = 0;
    for i in 0..black_box(bound) {
        sum += i64::from(i);
    }
    sum
}

/// `n * (n + 1) / 2` for `n = bound - 1`.
pub fn closed_form_sum(bound: i32) -> i64 {
    if bound <= 0 {
        return 0;
    }
    let n = i64::from(bound) - 1;
    n * (n + 1) / 2
}
