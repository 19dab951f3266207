//! The Lane-Emden equation `θ'' + (2/ξ) θ' + θ^n = 0` for a polytrope of
//! index `n`, written as the pair `y = θ`, `z = θ'`.

use crate::ode::{solve_pair, InitialValueProblem, IntegratorType, Solution, S};
use log::info;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LaneEmdenParams {
  /// Polytropic index `n`.
  pub index: S,
  pub x_start: S,
  pub x_end: S,
  pub step: S,
}

impl Default for LaneEmdenParams {
  fn default() -> Self {
    Self {
      index: 1.0,
      x_start: 0.001,
      x_end: 5.0,
      step: 0.01,
    }
  }
}

impl LaneEmdenParams {
  /// Starts from the regular centre `θ = 1`, `θ' = 0`.
  pub fn problem(&self) -> InitialValueProblem {
    InitialValueProblem {
      x_start: self.x_start,
      x_end: self.x_end,
      h: self.step,
      y0: 1.0,
      z0: 0.0,
    }
  }
}

pub fn dy_dx(_x: S, _y: S, z: S) -> S {
  z
}

/// `dz/dx` for index `n`; a negative `y` with fractional `n` gives NaN.
pub fn dz_dx(n: S) -> impl Fn(S, S, S) -> S + Copy + Send + Sync {
  move |x, y, z| -2.0 / x * z - y.powf(n)
}

/// Closed form solutions, which only exist for `n` = 0, 1 and 5.
pub fn analytic(n: S, x: S) -> Option<S> {
  if n == 0.0 {
    Some(1.0 - x * x / 6.0)
  } else if n == 1.0 {
    Some(x.sin() / x)
  } else if n == 5.0 {
    Some(1.0 / (1.0 + x * x / 3.0).sqrt())
  } else {
    None
  }
}

pub fn has_analytic(n: S) -> bool {
  analytic(n, 1.0).is_some()
}

pub struct LaneEmdenResult {
  pub index: S,
  pub solution: Solution,
}

impl LaneEmdenResult {
  /// First zero `ξ₁` of `θ`, if it lies inside the integrated range.
  pub fn surface(&self) -> Option<S> {
    self.solution.first_root()
  }

  /// Analytic values on the grid when a closed form exists.
  pub fn exact(&self) -> Option<Vec<S>> {
    if !has_analytic(self.index) {
      return None;
    }
    self
      .solution
      .x
      .iter()
      .map(|x| analytic(self.index, *x))
      .collect()
  }

  pub fn max_error(&self) -> Option<S> {
    let exact = self.exact()?;
    Some(
      self
        .solution
        .y
        .iter()
        .zip(&exact)
        .map(|(y, e)| (y - e).abs())
        .fold(0.0, S::max),
    )
  }

  /// Columns `x y z` followed by the closed form when it exists.
  pub fn into_columns(self) -> Vec<Vec<S>> {
    let exact = self.exact();
    let mut columns = self.solution.into_columns();
    columns.extend(exact);
    columns
  }
}

pub fn solve(
  params: &LaneEmdenParams,
  integrator_type: IntegratorType,
) -> LaneEmdenResult {
  let solution = solve_pair(
    integrator_type,
    &params.problem(),
    dy_dx,
    dz_dx(params.index),
  );
  let result = LaneEmdenResult {
    index: params.index,
    solution,
  };

  match result.surface() {
    Some(surface) => {
      info!("n = {}: surface at xi_1 = {:.6}", params.index, surface)
    }
    None => info!(
      "n = {}: no surface before x = {}",
      params.index, params.x_end
    ),
  }

  result
}

#[cfg(test)]
use crate::assert_float_eq;
#[cfg(test)]
use crate::ode::{EulerSettings, RK4Settings};

#[test]
fn analytic_solutions_satisfy_centre_condition() {
  for n in [0.0, 1.0, 5.0].iter() {
    assert_float_eq!(analytic(*n, 1e-6).unwrap(), 1.0, 1e-9);
  }
  assert_eq!(analytic(1.5, 1.0), None);
  assert!(!has_analytic(3.0));
}

#[test]
fn rk4_matches_closed_forms() {
  for n in [0.0, 1.0, 5.0].iter() {
    let params = LaneEmdenParams {
      index: *n,
      ..Default::default()
    };
    let result = solve(&params, IntegratorType::RK4(RK4Settings {}));
    assert_eq!(result.solution.len(), 500);
    assert!(result.max_error().unwrap() < 1e-4);
  }
}

#[test]
fn surface_of_known_polytropes() {
  let rk4 = IntegratorType::RK4(RK4Settings {});

  let n0 = solve(
    &LaneEmdenParams {
      index: 0.0,
      ..Default::default()
    },
    rk4,
  );
  assert_float_eq!(n0.surface().unwrap(), 6.0f64.sqrt(), 1e-3);

  let n1 = solve(&LaneEmdenParams::default(), rk4);
  assert_float_eq!(n1.surface().unwrap(), std::f64::consts::PI, 1e-3);

  // n = 5 never reaches zero
  let n5 = solve(
    &LaneEmdenParams {
      index: 5.0,
      ..Default::default()
    },
    rk4,
  );
  assert_eq!(n5.surface(), None);
}

#[test]
fn columns_include_exact_only_when_known() {
  let euler = IntegratorType::Euler(EulerSettings {});
  let params = LaneEmdenParams {
    x_end: 1.0,
    ..Default::default()
  };
  assert_eq!(solve(&params, euler).into_columns().len(), 4);

  let params = LaneEmdenParams {
    index: 3.0,
    x_end: 1.0,
    ..Default::default()
  };
  let columns = solve(&params, euler).into_columns();
  assert_eq!(columns.len(), 3);
  assert_eq!(columns[0].len(), 100);
}
