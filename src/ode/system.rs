use nalgebra::RealField;

pub trait SystemState<S>
where
  Self: Clone,
  for<'a> &'a Self: IntoIterator<Item = &'a S>,
  for<'a> &'a mut Self: IntoIterator<Item = &'a mut S>,
{
  fn new() -> Self;
  fn zeros_as(&mut self, other: &Self);
}

/// A first-order system `d(state)/dx = derivative(x, state)`.
pub trait OdeSystem
where
  for<'a> &'a Self::State: IntoIterator<Item = &'a Self::S>,
  for<'a> &'a mut Self::State: IntoIterator<Item = &'a mut Self::S>,
{
  type S: RealField + Copy + From<f32>;

  type State: SystemState<Self::S>;

  fn derivative(&self, x: &Self::S, state: &Self::State, dstate: &mut Self::State);
}

/// A coupled pair `[y, z]`.
impl<S: RealField + Copy + From<f32>> SystemState<S> for [S; 2] {
  fn new() -> Self {
    [0.0f32.into(); 2]
  }

  fn zeros_as(&mut self, _: &Self) {
    *self = Self::new();
  }
}

#[test]
fn pair_state_zeroes() {
  let mut state: [f64; 2] = [3.0, -4.0];
  state.zeros_as(&[1.0, 1.0]);
  assert_eq!(state, [0.0, 0.0]);
  assert_eq!(<[f64; 2] as SystemState<f64>>::new(), [0.0, 0.0]);
}
