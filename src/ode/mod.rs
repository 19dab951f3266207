pub mod coupled;
pub mod euler;
pub mod grid;
pub mod integrator;
pub mod null_settings;
pub mod rk4;
pub mod solution;
pub mod solve;
pub mod swappable_integrator;
pub mod system;

pub use coupled::CoupledPair;
pub use euler::{Euler, EulerSettings};
pub use grid::{arange, grid_len};
pub use integrator::Integrator;
pub use null_settings::NullSettings;
pub use rk4::{RK4Settings, RK4};
pub use solution::Solution;
pub use solve::{ode_euler, ode_rk4, solve_pair, InitialValueProblem};
pub use swappable_integrator::{IntegratorType, SwappableIntegrator};
pub use system::{OdeSystem, SystemState};

pub type S = f64;
