use crate::ode::{Integrator, NullSettings, OdeSystem, SystemState};

pub type EulerSettings = NullSettings;

/// Explicit (forward) Euler: `state += h * derivative(x, state)`.
pub struct Euler<M: OdeSystem>
where
  for<'a> &'a M::State: IntoIterator<Item = &'a M::S>,
  for<'a> &'a mut M::State: IntoIterator<Item = &'a mut M::S>,
{
  slope: M::State,
}

impl<M: OdeSystem> Integrator<M> for Euler<M>
where
  for<'a> &'a M::State: IntoIterator<Item = &'a M::S>,
  for<'a> &'a mut M::State: IntoIterator<Item = &'a mut M::S>,
{
  type Settings = EulerSettings;

  fn new(_: Self::Settings) -> Self {
    Self {
      slope: M::State::new(),
    }
  }

  fn step_internal(
    &mut self,
    system: &M,
    state: &mut M::State,
    x: &M::S,
    h: &M::S,
  ) {
    self.slope.zeros_as(state);

    system.derivative(x, state, &mut self.slope);

    for (value, slope) in state.into_iter().zip(&self.slope) {
      *value += *h * *slope;
    }
  }
}

#[cfg(test)]
use crate::assert_float_eq;
#[cfg(test)]
use crate::ode::CoupledPair;

#[test]
fn euler_single_step_matches_hand_computation() {
  let system = CoupledPair::new(|_, _, z| z, |x: f64, y: f64, _| x - y);
  let mut euler = Euler::new(EulerSettings {});
  let mut state = [1.0, 2.0];
  let mut x = 0.5;

  euler.step(&system, &mut state, &mut x, &0.1);

  // k1 = 0.1 * 2.0, l1 = 0.1 * (0.5 - 1.0)
  assert_float_eq!(state[0], 1.2, 1e-12);
  assert_float_eq!(state[1], 1.95, 1e-12);
  assert_float_eq!(x, 0.6, 1e-12);
}

#[test]
fn euler_n_steps_exponential_growth() {
  // y' = y: Euler gives exactly (1 + h)^n.
  let system = CoupledPair::new(|_, y: f64, _| y, |_, _, _| 0.0);
  let mut euler = Euler::new(EulerSettings {});
  let mut state = [1.0, 0.0];
  let mut x = 0.0;

  euler.n_steps(&system, &mut state, &mut x, &0.25, 4);

  assert_float_eq!(state[0], 1.25f64.powi(4), 1e-12);
  assert_float_eq!(x, 1.0, 1e-12);
}
