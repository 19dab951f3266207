use crate::ode::{solve_pair, InitialValueProblem, IntegratorType, S};
use indicatif::ProgressBar;
use rayon::prelude::*;

#[derive(Debug, Clone, PartialEq)]
pub struct ConvergenceRow {
  pub h: S,
  pub points: usize,
  /// Last grid point, where the error is measured.
  pub x: S,
  pub error: S,
  /// `log2` of the error ratio to the previous (twice as coarse) row; `None`
  /// when either error is zero.
  pub order: Option<S>,
}

/// Solve `problem` at `h, h/2, ..., h/2^(levels-1)` in parallel and compare
/// the last grid point against `exact`.
pub fn study<F, G, E>(
  integrator_type: IntegratorType,
  problem: &InitialValueProblem,
  f: F,
  g: G,
  exact: E,
  levels: usize,
  progress: &ProgressBar,
) -> Vec<ConvergenceRow>
where
  F: Fn(S, S, S) -> S + Copy + Send + Sync,
  G: Fn(S, S, S) -> S + Copy + Send + Sync,
  E: Fn(S) -> S + Sync,
{
  let mut rows: Vec<ConvergenceRow> = (0..levels)
    .into_par_iter()
    .filter_map(|level| {
      let h = problem.h / (2.0 as S).powi(level as i32);
      let solution =
        solve_pair(integrator_type, &InitialValueProblem { h, ..*problem }, f, g);
      progress.inc(1);

      let (x, y, _) = solution.last()?;
      Some(ConvergenceRow {
        h,
        points: solution.len(),
        x,
        error: (y - exact(x)).abs(),
        order: None,
      })
    })
    .collect();

  for i in 1..rows.len() {
    let order = (rows[i - 1].error / rows[i].error).log2();
    rows[i].order = Some(order).filter(|order| order.is_finite());
  }

  progress.finish_and_clear();
  rows
}

#[cfg(test)]
use crate::assert_float_eq;
#[cfg(test)]
use crate::ode::{EulerSettings, RK4Settings};

#[cfg(test)]
fn oscillator_rows(integrator_type: IntegratorType) -> Vec<ConvergenceRow> {
  // grid ends on x = 2 for every level
  let problem = InitialValueProblem {
    x_start: 0.0,
    x_end: 2.001,
    h: 0.1,
    y0: 0.0,
    z0: 1.0,
  };
  study(
    integrator_type,
    &problem,
    |_, _, z| z,
    |_, y, _| -y,
    |x| x.sin(),
    3,
    &ProgressBar::hidden(),
  )
}

#[test]
fn observed_order_matches_method() {
  let euler = oscillator_rows(IntegratorType::Euler(EulerSettings {}));
  let rk4 = oscillator_rows(IntegratorType::RK4(RK4Settings {}));

  for rows in [&euler, &rk4].iter() {
    assert_eq!(rows.len(), 3);
    assert_eq!(rows[0].order, None);
    for row in rows.iter() {
      assert_float_eq!(row.x, 2.0, 1e-9);
    }
  }
  assert_eq!(rk4[2].points, 81);
  assert_float_eq!(rk4[2].h, 0.025, 1e-15);

  for row in &euler[1..] {
    assert_float_eq!(row.order.unwrap(), 1.0, 0.2);
  }
  for row in &rk4[1..] {
    assert_float_eq!(row.order.unwrap(), 4.0, 0.2);
  }
}

#[test]
fn deep_halving_on_tiny_span() {
  // every level still has the single point x = 0
  let problem = InitialValueProblem {
    x_start: 0.0,
    x_end: 1e-30,
    h: 1.0,
    y0: 0.0,
    z0: 1.0,
  };
  let rows = study(
    IntegratorType::RK4(RK4Settings {}),
    &problem,
    |_, _, z| z,
    |_, y, _| -y,
    |x| x.sin(),
    70,
    &ProgressBar::hidden(),
  );

  assert_eq!(rows.len(), 70);
  assert!(rows.iter().all(|row| row.points == 1 && row.error == 0.0));
  assert!(rows.iter().all(|row| row.order.is_none()));
  assert_eq!(rows[69].h, 0.5f64.powi(69));
}
