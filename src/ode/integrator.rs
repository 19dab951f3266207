use crate::ode::OdeSystem;

/// A fixed-step method advancing an [`OdeSystem`] along `x`.
pub trait Integrator<M: OdeSystem>
where
  for<'a> &'a M::State: IntoIterator<Item = &'a M::S>,
  for<'a> &'a mut M::State: IntoIterator<Item = &'a mut M::S>,
{
  type Settings: Clone;

  fn new(settings: Self::Settings) -> Self;

  /// Advance `state` from `x` to `x + h` without touching `x`.
  fn step_internal(
    &mut self,
    system: &M,
    state: &mut M::State,
    x: &M::S,
    h: &M::S,
  );

  fn step(&mut self, system: &M, state: &mut M::State, x: &mut M::S, h: &M::S) {
    self.step_internal(system, state, x, h);

    *x += *h;
  }

  fn n_steps(
    &mut self,
    system: &M,
    state: &mut M::State,
    x: &mut M::S,
    h: &M::S,
    steps: usize,
  ) {
    for _ in 0..steps {
      self.step(system, state, x, h);
    }
  }

  /// States at every point of `grid`, starting from `initial` at `grid[0]`.
  ///
  /// Each step starts from the grid value itself rather than an accumulated
  /// `x`, so derivatives see exactly `grid[i]`. The last grid point is never
  /// stepped from.
  fn trajectory(
    &mut self,
    system: &M,
    grid: &[M::S],
    h: &M::S,
    initial: M::State,
  ) -> Vec<M::State> {
    let steps_from = match grid.split_last() {
      Some((_, rest)) => rest,
      None => return Vec::new(),
    };

    let mut states = Vec::with_capacity(grid.len());
    let mut state = initial;
    states.push(state.clone());
    for x in steps_from {
      self.step_internal(system, &mut state, x, h);
      states.push(state.clone());
    }

    states
  }
}

#[cfg(test)]
use crate::ode::{CoupledPair, Euler, EulerSettings};

#[test]
fn trajectory_steps_from_grid_values() {
  // dy/dx = x records where each derivative was taken
  let system = CoupledPair::new(|x: f64, _, _| x, |_, _, _| 0.0);
  let mut euler = Euler::new(EulerSettings {});
  let grid = [0.0, 0.5, 2.0, 10.0];

  let states = euler.trajectory(&system, &grid, &1.0, [0.0, 0.0]);

  let y: Vec<f64> = states.iter().map(|[y, _]| *y).collect();
  assert_eq!(y, vec![0.0, 0.0, 0.5, 2.5]);
}

#[test]
fn trajectory_of_empty_grid_is_empty() {
  let system = CoupledPair::new(|_, _, z: f64| z, |_, _, _| 0.0);
  let mut euler = Euler::new(EulerSettings {});

  assert!(euler.trajectory(&system, &[], &0.1, [1.0, 1.0]).is_empty());
}
