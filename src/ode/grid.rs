use crate::ode::S;

/// Number of points in `[start, end)` spaced by `step`.
///
/// Zero whenever `(end - start) / step` is not a positive finite number, which
/// covers `end == start`, `step == 0`, a step pointing away from `end` and NaN
/// inputs.
pub fn grid_len(start: S, end: S, step: S) -> usize {
  let span = (end - start) / step;
  if span.is_finite() && span > 0.0 {
    span.ceil() as usize
  } else {
    0
  }
}

/// Evenly spaced samples `start + i * step` over the half open interval
/// `[start, end)`.
pub fn arange(start: S, end: S, step: S) -> Vec<S> {
  (0..grid_len(start, end, step))
    .map(|i| start + i as S * step)
    .collect()
}

#[cfg(test)]
use crate::assert_float_eq;
#[cfg(test)]
use proptest::prelude::*;

#[test]
fn arange_excludes_end() {
  let grid = arange(0.0, 1.0, 0.25);
  assert_eq!(grid, vec![0.0, 0.25, 0.5, 0.75]);
}

#[test]
fn arange_partial_last_step() {
  // (5 - 0.001) / 0.01 = 499.9
  let grid = arange(0.001, 5.0, 0.01);
  assert_eq!(grid.len(), 500);
  assert_float_eq!(grid[0], 0.001, 1e-15);
  assert_float_eq!(grid[499], 4.991, 1e-12);
}

#[test]
fn arange_degenerate_inputs_are_empty() {
  assert!(arange(1.0, 1.0, 0.1).is_empty());
  assert!(arange(0.0, 1.0, 0.0).is_empty());
  assert!(arange(0.0, 1.0, -0.1).is_empty());
  assert!(arange(2.0, 1.0, 0.1).is_empty());
  assert!(arange(0.0, S::NAN, 0.1).is_empty());
}

#[test]
fn arange_negative_step_descends() {
  let grid = arange(1.0, 0.0, -0.25);
  assert_eq!(grid, vec![1.0, 0.75, 0.5, 0.25]);
}

#[cfg(test)]
proptest! {
#[test]
fn grid_length_is_ceil_of_span(
  start in -100.0f64..100.0,
  span in 0.001f64..50.0,
  divisions in 1.0f64..500.0,
) {
  let end = start + span;
  let step = span / divisions;
  let grid = arange(start, end, step);

  prop_assert_eq!(grid.len(), ((end - start) / step).ceil() as usize);
  prop_assert_eq!(grid[0], start);
  for pair in grid.windows(2) {
    prop_assert!(pair[1] > pair[0]);
  }
}
}
