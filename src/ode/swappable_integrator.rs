use crate::ode::{
  Euler, EulerSettings, Integrator, OdeSystem, RK4Settings, RK4,
};
use clap::Subcommand;

#[derive(Subcommand, Clone, Copy, Debug, PartialEq, Eq)]
pub enum IntegratorType {
  /// Explicit first order Euler
  Euler(EulerSettings),
  /// Classical fourth order Runge-Kutta
  #[command(name = "rk4")]
  RK4(RK4Settings),
}

impl IntegratorType {
  /// Global error exponent `p` in `O(h^p)`.
  pub fn order(&self) -> i32 {
    match self {
      Self::Euler(_) => 1,
      Self::RK4(_) => 4,
    }
  }
}

pub enum SwappableIntegrator<M: OdeSystem>
where
  for<'a> &'a M::State: IntoIterator<Item = &'a M::S>,
  for<'a> &'a mut M::State: IntoIterator<Item = &'a mut M::S>,
{
  Euler(Euler<M>),
  RK4(RK4<M>),
}

impl<M: OdeSystem> Integrator<M> for SwappableIntegrator<M>
where
  for<'a> &'a M::State: IntoIterator<Item = &'a M::S>,
  for<'a> &'a mut M::State: IntoIterator<Item = &'a mut M::S>,
{
  type Settings = IntegratorType;

  fn new(t: IntegratorType) -> Self {
    match t {
      IntegratorType::Euler(settings) => Self::Euler(Euler::new(settings)),
      IntegratorType::RK4(settings) => Self::RK4(RK4::new(settings)),
    }
  }

  fn step_internal(
    &mut self,
    system: &M,
    state: &mut M::State,
    x: &M::S,
    h: &M::S,
  ) {
    match self {
      Self::Euler(method) => method.step_internal(system, state, x, h),
      Self::RK4(method) => method.step_internal(system, state, x, h),
    }
  }
}
