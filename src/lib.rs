pub mod convergence;
pub mod data;
pub mod lane_emden;
pub mod ode;
pub mod plot;
pub mod synthetic;
mod utils;

pub use convergence::{study, ConvergenceRow};
pub use data::{ColumnData, DataError};
pub use lane_emden::{LaneEmdenParams, LaneEmdenResult};
pub use plot::{Figure, PlotError, PlotRequest};
pub use synthetic::SyntheticParams;
pub use utils::init_logger;
