use crate::ode::{arange, S};

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SyntheticParams {
  pub start: S,
  pub end: S,
  pub step: S,
}

impl Default for SyntheticParams {
  fn default() -> Self {
    Self {
      start: 0.0,
      end: 1.0,
      step: 0.01,
    }
  }
}

/// `x * exp(-x^2)`
pub fn gaussian_moment(x: S) -> S {
  x * (-x * x).exp()
}

/// Columns `x` and `profile(x)` sampled on `[start, end)`.
pub fn sample<P: Fn(S) -> S>(params: &SyntheticParams, profile: P) -> Vec<Vec<S>> {
  let x = arange(params.start, params.end, params.step);
  let y = x.iter().map(|x| profile(*x)).collect();
  vec![x, y]
}

#[cfg(test)]
use crate::assert_float_eq;

#[test]
fn default_sampling_matches_profile() {
  let columns = sample(&SyntheticParams::default(), gaussian_moment);

  assert_eq!(columns.len(), 2);
  assert_eq!(columns[0].len(), 100);
  assert_eq!(columns[1][0], 0.0);
  // peak of x exp(-x^2) is at 1/sqrt(2)
  let peak = columns[1].iter().cloned().fold(S::MIN, S::max);
  assert_float_eq!(peak, gaussian_moment(0.5f64.sqrt()), 1e-4);
  assert_float_eq!(columns[1][50], 0.5 * (-0.25f64).exp(), 1e-12);
}
