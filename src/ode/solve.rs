use crate::ode::{
  arange, CoupledPair, Euler, EulerSettings, Integrator, IntegratorType,
  RK4Settings, Solution, SwappableIntegrator, RK4, S,
};
use log::{debug, warn};

/// Initial value problem for a coupled pair on the grid `[x_start, x_end)`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct InitialValueProblem {
  pub x_start: S,
  pub x_end: S,
  pub h: S,
  pub y0: S,
  pub z0: S,
}

fn solve_with<I, F, G>(
  mut integrator: I,
  problem: &InitialValueProblem,
  f: F,
  g: G,
) -> Solution
where
  F: Fn(S, S, S) -> S,
  G: Fn(S, S, S) -> S,
  I: Integrator<CoupledPair<S, F, G>>,
{
  let system = CoupledPair::new(f, g);
  let x = arange(problem.x_start, problem.x_end, problem.h);
  let states =
    integrator.trajectory(&system, &x, &problem.h, [problem.y0, problem.z0]);

  let solution = Solution {
    y: states.iter().map(|[y, _]| *y).collect(),
    z: states.iter().map(|[_, z]| *z).collect(),
    x,
  };

  if let Some(i) = solution.first_non_finite() {
    warn!(
      "solution is not finite from x = {} (point {} of {})",
      solution.x[i],
      i,
      solution.len()
    );
  }

  solution
}

/// Solve a coupled pair with the integrator picked at runtime.
pub fn solve_pair<F, G>(
  integrator_type: IntegratorType,
  problem: &InitialValueProblem,
  f: F,
  g: G,
) -> Solution
where
  F: Fn(S, S, S) -> S,
  G: Fn(S, S, S) -> S,
{
  debug!(
    "integrating {:?} over [{}, {}) with h = {}",
    integrator_type, problem.x_start, problem.x_end, problem.h
  );
  solve_with(SwappableIntegrator::new(integrator_type), problem, f, g)
}

/// Forward Euler for `y' = f(x, y, z)`, `z' = g(x, y, z)` on
/// `[x_start, x_end)` in steps of `h`, with `y(x_start) = y0` and
/// `z(x_start) = z0`.
pub fn ode_euler<F, G>(
  x_start: S,
  x_end: S,
  h: S,
  y0: S,
  z0: S,
  f: F,
  g: G,
) -> Solution
where
  F: Fn(S, S, S) -> S,
  G: Fn(S, S, S) -> S,
{
  let problem = InitialValueProblem {
    x_start,
    x_end,
    h,
    y0,
    z0,
  };
  solve_with(Euler::new(EulerSettings {}), &problem, f, g)
}

/// Classical Runge-Kutta with the same arguments and grid as [`ode_euler`].
pub fn ode_rk4<F, G>(
  x_start: S,
  x_end: S,
  h: S,
  y0: S,
  z0: S,
  f: F,
  g: G,
) -> Solution
where
  F: Fn(S, S, S) -> S,
  G: Fn(S, S, S) -> S,
{
  let problem = InitialValueProblem {
    x_start,
    x_end,
    h,
    y0,
    z0,
  };
  solve_with(RK4::new(RK4Settings {}), &problem, f, g)
}

#[cfg(test)]
use crate::assert_float_eq;
#[cfg(test)]
use proptest::prelude::*;
#[cfg(test)]
use proptest_derive::Arbitrary;

#[cfg(test)]
#[derive(Debug, Clone, Copy, Arbitrary)]
enum Method {
  Euler,
  RK4,
}

#[cfg(test)]
impl Method {
  fn integrator_type(self) -> IntegratorType {
    match self {
      Method::Euler => IntegratorType::Euler(EulerSettings {}),
      Method::RK4 => IntegratorType::RK4(RK4Settings {}),
    }
  }
}

#[cfg(test)]
fn oscillator_error(method: Method, h: S) -> S {
  // the last grid point is exactly x = 1 for the steps used below
  let problem = InitialValueProblem {
    x_start: 0.0,
    x_end: 1.0 + h / 2.0,
    h,
    y0: 1.0,
    z0: 0.0,
  };
  let solution =
    solve_pair(method.integrator_type(), &problem, |_, _, z| z, |_, y, _| -y);
  let (x, y, _) = solution.last().unwrap();
  assert_float_eq!(x, 1.0, 1e-12);
  (y - x.cos()).abs()
}

#[test]
fn euler_is_first_order() {
  let ratio = oscillator_error(Method::Euler, 0.1)
    / oscillator_error(Method::Euler, 0.05);
  assert!(1.8 < ratio && ratio < 2.3, "ratio {}", ratio);
}

#[test]
fn rk4_is_fourth_order() {
  let ratio =
    oscillator_error(Method::RK4, 0.1) / oscillator_error(Method::RK4, 0.05);
  assert!(14.0 < ratio && ratio < 18.0, "ratio {}", ratio);
}

#[test]
fn rk4_lane_emden_index_one() {
  let solution = ode_rk4(
    0.001,
    5.0,
    0.01,
    1.0,
    0.0,
    |_, _, z| z,
    |x, y, z| -2.0 / x * z - y,
  );

  assert_eq!(solution.len(), 500);
  for (x, y) in solution.x.iter().zip(&solution.y) {
    assert_float_eq!(*y, x.sin() / x, 1e-4);
  }
  assert_float_eq!(solution.first_root().unwrap(), std::f64::consts::PI, 1e-4);
}

#[test]
fn euler_lane_emden_index_one_is_coarser() {
  let solution = ode_euler(
    0.001,
    5.0,
    0.01,
    1.0,
    0.0,
    |_, _, z| z,
    |x, y, z| -2.0 / x * z - y,
  );

  let max_error = solution
    .x
    .iter()
    .zip(&solution.y)
    .map(|(x, y)| (y - x.sin() / x).abs())
    .fold(0.0, S::max);
  assert!(max_error > 1e-4 && max_error < 1e-2, "error {}", max_error);
}

#[test]
fn empty_interval_yields_empty_solution() {
  let euler = ode_euler(2.0, 2.0, 0.1, 1.0, 1.0, |_, _, z| z, |_, _, _| 0.0);
  let rk4 = ode_rk4(2.0, 2.0, 0.1, 1.0, 1.0, |_, _, z| z, |_, _, _| 0.0);

  assert!(euler.is_empty() && euler.y.is_empty() && euler.z.is_empty());
  assert!(rk4.is_empty() && rk4.y.is_empty() && rk4.z.is_empty());
}

#[test]
fn single_point_grid_keeps_initial_condition() {
  let solution = ode_rk4(0.0, 0.05, 0.1, 3.0, -1.0, |_, _, z| z, |_, y, _| -y);
  assert_eq!(solution, Solution {
    x: vec![0.0],
    y: vec![3.0],
    z: vec![-1.0],
  });
}

#[test]
fn non_finite_derivative_propagates() {
  // g divides by x = 0 on the first step
  let solution = ode_euler(
    0.0,
    1.0,
    0.1,
    1.0,
    1.0,
    |_, _, z| z,
    |x, _, z| -2.0 / x * z,
  );
  assert_eq!(solution.len(), 10);
  assert_eq!(solution.first_non_finite(), Some(1));
}

#[cfg(test)]
proptest! {
#[test]
fn constant_velocity_is_exact(
  method: Method,
  x_start in -10.0f64..10.0,
  span in 0.1f64..10.0,
  divisions in 1.0f64..200.0,
  y0 in -100.0f64..100.0,
  z0 in -10.0f64..10.0,
) {
  let problem = InitialValueProblem {
    x_start,
    x_end: x_start + span,
    h: span / divisions,
    y0,
    z0,
  };
  let solution =
    solve_pair(method.integrator_type(), &problem, |_, _, z| z, |_, _, _| 0.0);

  for ((x, y), z) in solution.x.iter().zip(&solution.y).zip(&solution.z) {
    let expected = y0 + z0 * (x - x_start);
    prop_assert!((y - expected).abs() <= 1e-9 * (1.0 + expected.abs()));
    prop_assert_eq!(*z, z0);
  }
}

#[test]
fn grid_and_initial_condition_invariants(
  method: Method,
  x_start in -10.0f64..10.0,
  span in 0.01f64..10.0,
  divisions in 1.0f64..300.0,
  y0 in -5.0f64..5.0,
  z0 in -5.0f64..5.0,
) {
  let x_end = x_start + span;
  let h = span / divisions;
  let problem = InitialValueProblem { x_start, x_end, h, y0, z0 };
  let solution = solve_pair(
    method.integrator_type(),
    &problem,
    |_, _, z| z,
    |_, y, _| -y,
  );

  let expected_len = ((x_end - x_start) / h).ceil() as usize;
  prop_assert_eq!(solution.x.len(), expected_len);
  prop_assert_eq!(solution.y.len(), expected_len);
  prop_assert_eq!(solution.z.len(), expected_len);
  prop_assert_eq!(solution.y[0], y0);
  prop_assert_eq!(solution.z[0], z0);
}
}
