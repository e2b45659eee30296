// Cross-module checks: the matching strategies agree, reuse pays off, and the
// two accumulation loops land on the same total.

use idiom_lessons::accumulate::{boxed_sum, closed_form_sum, primitive_sum};
use idiom_lessons::digits::{check_naive, is_only_digits_naive, is_only_digits_static, DigitMatcher, DEFAULT_INPUTS};
use idiom_lessons::timing::time;
use proptest::prelude::*;
use std::time::Duration;

#[test]
fn test_strategies_agree_on_fixed_inputs() {
    let naive = check_naive(&DEFAULT_INPUTS).unwrap();
    let reuse = DigitMatcher::new().unwrap().check_all(&DEFAULT_INPUTS);

    assert_eq!(naive, reuse);
    for (input, matched) in DEFAULT_INPUTS.iter().zip(&reuse) {
        assert!(*matched, "{input} should be digits only");
    }
}

#[test]
fn test_reuse_not_slower_on_average() {
    const TRIALS: usize = 200;

    let mut naive_total = Duration::ZERO;
    let mut reuse_total = Duration::ZERO;

    // interleaved so that drift in machine load hits both sides
    for _ in 0..TRIALS {
        naive_total += time(|| check_naive(&DEFAULT_INPUTS).unwrap()).elapsed;
        reuse_total += time(|| DigitMatcher::new().unwrap().check_all(&DEFAULT_INPUTS)).elapsed;
    }

    assert!(
        reuse_total <= naive_total,
        "reuse {reuse_total:?} vs naive {naive_total:?} over {TRIALS} trials"
    );
}

#[test]
fn test_loops_agree_with_closed_form() {
    let bound = 1 << 20;
    let expected = closed_form_sum(bound);
    assert_eq!(boxed_sum(bound), expected);
    assert_eq!(primitive_sum(bound), expected);
}

proptest! {
    #[test]
    fn test_strategies_agree_on_any_string(s in ".*") {
        let matcher = DigitMatcher::new().unwrap();
        let naive = is_only_digits_naive(&s).unwrap();

        prop_assert_eq!(naive, matcher.matches(&s));
        prop_assert_eq!(naive, is_only_digits_static(&s).unwrap());
    }

    #[test]
    fn test_digit_strings_accepted(s in "[0-9]{1,40}") {
        prop_assert!(DigitMatcher::new().unwrap().matches(&s));
    }

    #[test]
    fn test_digit_check_equals_char_scan(s in "[0-9a ]{0,12}") {
        let expected = !s.is_empty() && s.bytes().all(|b| b.is_ascii_digit());
        prop_assert_eq!(DigitMatcher::new().unwrap().matches(&s), expected);
    }

    #[test]
    fn test_small_bounds_match_closed_form(bound in 0i32..5_000) {
        prop_assert_eq!(primitive_sum(bound), closed_form_sum(bound));
        prop_assert_eq!(boxed_sum(bound), closed_form_sum(bound));
    }
}
