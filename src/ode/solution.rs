use crate::ode::S;

/// Sampled solution of a coupled pair: `y[i]` and `z[i]` at grid point `x[i]`.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Solution {
  pub x: Vec<S>,
  pub y: Vec<S>,
  pub z: Vec<S>,
}

impl Solution {
  pub fn len(&self) -> usize {
    self.x.len()
  }

  pub fn is_empty(&self) -> bool {
    self.x.is_empty()
  }

  pub fn last(&self) -> Option<(S, S, S)> {
    let i = self.len().checked_sub(1)?;
    Some((self.x[i], self.y[i], self.z[i]))
  }

  /// First `x` where `y` crosses zero, linearly interpolated between the
  /// bracketing grid points.
  pub fn first_root(&self) -> Option<S> {
    if *self.y.first()? == 0.0 {
      return Some(self.x[0]);
    }

    (0..self.len().saturating_sub(1)).find_map(|i| {
      let (y0, y1) = (self.y[i], self.y[i + 1]);
      if y1 == 0.0 {
        Some(self.x[i + 1])
      } else if y0.is_finite() && y1.is_finite() && y0.signum() != y1.signum() {
        let (x0, x1) = (self.x[i], self.x[i + 1]);
        Some(x0 - y0 * (x1 - x0) / (y1 - y0))
      } else {
        None
      }
    })
  }

  /// Index of the first grid point where `y` or `z` is NaN or infinite.
  pub fn first_non_finite(&self) -> Option<usize> {
    self
      .y
      .iter()
      .zip(&self.z)
      .position(|(y, z)| !y.is_finite() || !z.is_finite())
  }

  pub fn into_columns(self) -> Vec<Vec<S>> {
    vec![self.x, self.y, self.z]
  }
}

#[cfg(test)]
use crate::assert_float_eq;

#[cfg(test)]
fn sample(y: Vec<S>) -> Solution {
  Solution {
    x: (0..y.len()).map(|i| i as S).collect(),
    z: vec![0.0; y.len()],
    y,
  }
}

#[test]
fn first_root_interpolates() {
  let solution = sample(vec![2.0, 1.0, -3.0]);
  assert_float_eq!(solution.first_root().unwrap(), 1.25, 1e-12);
}

#[test]
fn first_root_exact_zero_and_none() {
  assert_eq!(sample(vec![0.0, 1.0]).first_root(), Some(0.0));
  assert_eq!(sample(vec![2.0, 1.0, 0.0, -1.0]).first_root(), Some(2.0));
  assert_eq!(sample(vec![2.0, 1.0, 0.5]).first_root(), None);
  assert_eq!(sample(vec![]).first_root(), None);
}

#[test]
fn first_non_finite_and_last() {
  let mut solution = sample(vec![1.0, 2.0, S::NAN]);
  assert_eq!(solution.first_non_finite(), Some(2));
  assert_eq!(solution.last().map(|(x, _, _)| x), Some(2.0));

  solution.y[2] = 3.0;
  solution.z[1] = S::INFINITY;
  assert_eq!(solution.first_non_finite(), Some(1));

  assert_eq!(Solution::default().last(), None);
}
