use crate::ode::{Integrator, NullSettings, OdeSystem, SystemState};

pub type RK4Settings = NullSettings;

/// Classical fourth order Runge-Kutta.
pub struct RK4<M: OdeSystem>
where
  for<'a> &'a M::State: IntoIterator<Item = &'a M::S>,
  for<'a> &'a mut M::State: IntoIterator<Item = &'a mut M::S>,
{
  slope: M::State,
  stage_state: M::State,
  k: [M::State; 4],
}

impl<M: OdeSystem> Integrator<M> for RK4<M>
where
  for<'a> &'a M::State: IntoIterator<Item = &'a M::S>,
  for<'a> &'a mut M::State: IntoIterator<Item = &'a mut M::S>,
{
  type Settings = RK4Settings;

  fn new(_: Self::Settings) -> Self {
    Self {
      slope: M::State::new(),
      stage_state: M::State::new(),
      k: [
        M::State::new(),
        M::State::new(),
        M::State::new(),
        M::State::new(),
      ],
    }
  }

  fn step_internal(
    &mut self,
    system: &M,
    state: &mut M::State,
    x: &M::S,
    h: &M::S,
  ) {
    let half: M::S = 0.5f32.into();
    // stage offsets along x, also the weight of k_i in the next stage state
    let nodes: [M::S; 4] = [0.0f32.into(), half, half, 1.0f32.into()];

    self.slope.zeros_as(state);
    self.stage_state = state.clone();

    for stage in 0..4 {
      let stage_x = *x + nodes[stage] * *h;
      system.derivative(&stage_x, &self.stage_state, &mut self.slope);

      self.k[stage].zeros_as(state);
      let next_weight = nodes.get(stage + 1).copied();

      for (((k, stage_value), value), slope) in (&mut self.k[stage])
        .into_iter()
        .zip(&mut self.stage_state)
        .zip(&*state)
        .zip(&self.slope)
      {
        *k = *h * *slope;
        if let Some(weight) = next_weight {
          *stage_value = *value + weight * *k;
        }
      }
    }

    let two: M::S = 2.0f32.into();
    let six: M::S = 6.0f32.into();

    for ((((k1, k2), k3), k4), value) in (&self.k[0])
      .into_iter()
      .zip(&self.k[1])
      .zip(&self.k[2])
      .zip(&self.k[3])
      .zip(state)
    {
      *value += (*k1 + two * *k2 + two * *k3 + *k4) / six;
    }
  }
}

#[cfg(test)]
use crate::assert_float_eq;
#[cfg(test)]
use crate::ode::CoupledPair;

#[test]
fn rk4_single_step_matches_hand_computation() {
  // y' = z, z' = -y from (1, 0) with h = 0.1
  let system = CoupledPair::new(|_, _, z| z, |_, y: f64, _| -y);
  let mut rk4 = RK4::new(RK4Settings {});
  let mut state = [1.0, 0.0];
  let mut x = 0.0;

  rk4.step(&system, &mut state, &mut x, &0.1);

  let h: f64 = 0.1;
  let (k1, l1) = (0.0, -h);
  let (k2, l2) = (h * (0.5 * l1), -h * (1.0 + 0.5 * k1));
  let (k3, l3) = (h * (0.5 * l2), -h * (1.0 + 0.5 * k2));
  let (k4, l4) = (h * l3, -h * (1.0 + k3));
  assert_float_eq!(state[0], 1.0 + (k1 + 2.0 * k2 + 2.0 * k3 + k4) / 6.0, 1e-15);
  assert_float_eq!(state[1], (l1 + 2.0 * l2 + 2.0 * l3 + l4) / 6.0, 1e-15);
  assert_float_eq!(state[0], h.cos(), 1e-6);
  assert_float_eq!(x, 0.1, 1e-15);
}

#[test]
fn rk4_evaluates_stages_at_midpoints() {
  // y' = x^3 is integrated exactly by Simpson weights.
  let system = CoupledPair::new(|x: f64, _, _| x.powi(3), |_, _, _| 0.0);
  let mut rk4 = RK4::new(RK4Settings {});
  let mut state = [0.0, 0.0];
  let mut x = 1.0;

  rk4.n_steps(&system, &mut state, &mut x, &0.5, 2);

  assert_float_eq!(state[0], (16.0 - 1.0) / 4.0, 1e-12);
  assert_float_eq!(x, 2.0, 1e-12);
}
