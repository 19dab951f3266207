use crate::ode::OdeSystem;
use nalgebra::RealField;
use std::marker::PhantomData;

/// The pair `dy/dx = f(x, y, z)`, `dz/dx = g(x, y, z)`.
pub struct CoupledPair<S, F, G> {
  f: F,
  g: G,
  scalar: PhantomData<S>,
}

impl<S, F, G> CoupledPair<S, F, G>
where
  F: Fn(S, S, S) -> S,
  G: Fn(S, S, S) -> S,
{
  pub fn new(f: F, g: G) -> Self {
    Self {
      f,
      g,
      scalar: PhantomData,
    }
  }
}

impl<S, F, G> OdeSystem for CoupledPair<S, F, G>
where
  S: RealField + Copy + From<f32>,
  F: Fn(S, S, S) -> S,
  G: Fn(S, S, S) -> S,
{
  type S = S;

  type State = [S; 2];

  fn derivative(&self, x: &S, state: &[S; 2], dstate: &mut [S; 2]) {
    let [y, z] = *state;
    dstate[0] = (self.f)(*x, y, z);
    dstate[1] = (self.g)(*x, y, z);
  }
}

#[test]
fn derivative_passes_current_iterate() {
  let pair = CoupledPair::new(
    |x: f64, y: f64, z: f64| x + 10.0 * y + 100.0 * z,
    |x: f64, y: f64, z: f64| x * y * z,
  );
  let mut dstate = [0.0; 2];

  pair.derivative(&2.0, &[3.0, 5.0], &mut dstate);

  assert_eq!(dstate, [532.0, 30.0]);
}
