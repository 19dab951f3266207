use clap::Parser;
use lane_emden::{
  data::ColumnData,
  init_logger,
  synthetic::{gaussian_moment, sample},
  SyntheticParams,
};
use std::path::PathBuf;
use std::process;

/// Write `x` and `x exp(-x^2)` sampled on [start, end) as two columns.
#[derive(Parser)]
#[command(version, author = "Ryan G.")]
struct Opts {
  #[arg(short = 'o', long, default_value = "data.txt")]
  output: PathBuf,

  #[arg(long, default_value_t = 0.0, allow_negative_numbers = true)]
  start: f64,

  #[arg(long, default_value_t = 1.0, allow_negative_numbers = true)]
  end: f64,

  #[arg(long, default_value_t = 0.01, allow_negative_numbers = true)]
  step: f64,
}

fn main() {
  init_logger();
  let opts = Opts::parse();

  let params = SyntheticParams {
    start: opts.start,
    end: opts.end,
    step: opts.step,
  };

  let result = ColumnData::from_columns(sample(&params, gaussian_moment))
    .and_then(|data| data.save(&opts.output));
  if let Err(e) = result {
    eprintln!("error: {}", e);
    process::exit(1);
  }
}
