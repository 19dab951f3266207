pub mod axes;
pub mod figure;
pub mod raster;
pub mod style;
#[cfg(feature = "viz")]
pub mod viewer;

pub use axes::Limits;
pub use figure::{Figure, PlotRequest, Series};
pub use raster::{render, save_figure};
pub use style::{Color, LineStyle, Marker, Style};
#[cfg(feature = "viz")]
pub use viewer::show_figure;

use crate::data::DataError;
use crate::ode::S;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum PlotError {
  #[error("invalid style {style:?}: {reason}")]
  Style { style: String, reason: String },

  #[error(transparent)]
  Data(#[from] DataError),

  #[error("could not draw plot: {0}")]
  Render(String),

  #[error("nothing to plot")]
  NoData,

  #[error("limits must be 4 values with non-empty ranges, got {0:?}")]
  DegenerateLimits(Vec<S>),

  #[error("no display available, rebuild with the `viz` feature or pass -f")]
  DisplayUnavailable,

  #[cfg(feature = "viz")]
  #[error("viewer failed: {0}")]
  Display(String),
}
