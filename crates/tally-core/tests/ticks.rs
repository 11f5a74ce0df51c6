// File: crates/tally-core/tests/ticks.rs
// Purpose: Nice-number tick generation: worked examples and spacing invariants.

use tally_core::nice_ticks;

fn approx(a: f64, b: f64) -> bool {
    (a - b).abs() <= 1e-9 * b.abs().max(1.0)
}

fn is_nice_step(step: f64) -> bool {
    let mag = 10f64.powi(step.log10().floor() as i32);
    let mant = step / mag;
    [1.0, 2.0, 2.5, 5.0, 10.0].iter().any(|&m| approx(mant, m))
}

#[test]
fn ninety_seven_over_five_ticks() {
    let s = nice_ticks(97.0, 5);
    assert_eq!(s.ceiling, 100.0);
    assert_eq!(s.ticks, vec![0.0, 25.0, 50.0, 75.0, 100.0]);
}

#[test]
fn max_of_one_still_has_positive_step() {
    let s = nice_ticks(1.0, 5);
    assert!(s.ceiling >= 1.0 - 1e-9);
    assert_eq!(s.ticks[0], 0.0);
    assert!(s.step > 0.0);
    assert!(approx(*s.ticks.last().unwrap(), s.ceiling));
}

#[test]
fn all_zero_series_gets_unit_axis() {
    let s = nice_ticks(0.0, 5);
    assert!(s.ceiling >= 1.0 - 1e-9);
    assert_eq!(s.ticks[0], 0.0);
    let nan = nice_ticks(f64::NAN, 5);
    assert_eq!(nan, s);
}

#[test]
fn tick_count_below_two_is_two() {
    let one = nice_ticks(40.0, 1);
    let two = nice_ticks(40.0, 2);
    assert_eq!(one, two);
    assert!(one.ticks.len() >= 2);
}

#[test]
fn invariants_hold_across_magnitudes() {
    let maxima = [
        0.3, 1.0, 2.0, 3.0, 7.0, 9.5, 10.0, 11.0, 42.0, 97.0, 99.0, 100.0, 101.0, 250.0, 333.0, 999.0, 1000.0,
        1234.0, 48_000.0, 1e6 + 1.0,
    ];
    for &m in &maxima {
        for tc in 2..=10 {
            let s = nice_ticks(m, tc);
            assert_eq!(s.ticks[0], 0.0, "first tick for max {m} / {tc}");
            let last = *s.ticks.last().unwrap();
            assert!(approx(last, s.ceiling), "last tick == ceiling for {m} / {tc}");
            assert!(s.ceiling + 1e-9 >= m.max(1.0), "ceiling covers max for {m} / {tc}");
            assert!(is_nice_step(s.step), "step {} not nice for {m} / {tc}", s.step);
            for w in s.ticks.windows(2) {
                assert!(approx(w[1] - w[0], s.step), "constant spacing for {m} / {tc}");
            }
        }
    }
}
