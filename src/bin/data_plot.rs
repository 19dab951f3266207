use clap::Parser;
use lane_emden::{
  data::ColumnData,
  init_logger,
  plot::{save_figure, Limits, Style},
  Figure, PlotError, PlotRequest,
};
use std::path::PathBuf;
use std::process;

/// Plot columns of a whitespace delimited data file.
#[derive(Parser)]
#[command(version, author = "Ryan G.")]
struct Opts {
  filename: PathBuf,

  /// Save to this image instead of opening a window
  #[arg(short = 'f', long = "file")]
  file: Option<PathBuf>,

  /// 1-based column for the x axis
  #[arg(short = 'x', default_value_t = 1)]
  x_col: usize,

  /// 1-based column for the y axis
  #[arg(short = 'y', default_value_t = 2)]
  y_col: usize,

  /// Format string such as `-`, `r--` or `ko`
  #[arg(short = 's', long, default_value = "-", allow_hyphen_values = true)]
  style: Style,

  /// Axis limits
  #[arg(
    short = 'l',
    long,
    num_args = 4,
    value_names = ["XMIN", "XMAX", "YMIN", "YMAX"],
    allow_negative_numbers = true
  )]
  limits: Option<Vec<f64>>,

  /// Plot column 1 against every other column
  #[arg(short = 'a', long)]
  all: bool,
}

#[cfg(feature = "viz")]
fn show(figure: Figure, title: &str) -> Result<(), PlotError> {
  lane_emden::plot::show_figure(figure, title)
}

#[cfg(not(feature = "viz"))]
fn show(_figure: Figure, _title: &str) -> Result<(), PlotError> {
  Err(PlotError::DisplayUnavailable)
}

fn run(opts: Opts) -> Result<(), PlotError> {
  let limits = opts
    .limits
    .as_deref()
    .map(Limits::from_slice)
    .transpose()?;

  let data = ColumnData::load(&opts.filename)?;
  let request = PlotRequest {
    x_col: opts.x_col,
    y_col: opts.y_col,
    style: opts.style,
    limits,
    plot_all: opts.all,
  };
  let figure = Figure::from_data(&data, &request)?;

  match opts.file {
    Some(path) => save_figure(&figure, &path),
    None => show(figure, &opts.filename.display().to_string()),
  }
}

fn main() {
  init_logger();

  if let Err(e) = run(Opts::parse()) {
    eprintln!("error: {}", e);
    process::exit(1);
  }
}
