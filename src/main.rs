use clap::Parser;
use indicatif::ProgressBar;
use lane_emden::{
  convergence,
  data::ColumnData,
  init_logger,
  lane_emden::{analytic, dy_dx, dz_dx, has_analytic, solve},
  ode::IntegratorType,
  LaneEmdenParams,
};
use log::info;
use std::error::Error;
use std::path::PathBuf;
use std::process;

/// Integrate the Lane-Emden equation for a polytrope of index n.
#[derive(Parser)]
#[command(version, author = "Ryan G.")]
struct Opts {
  /// Polytropic index
  #[arg(short = 'n', long, default_value_t = 1.0)]
  index: f64,

  #[arg(long, default_value_t = 0.001, allow_negative_numbers = true)]
  x_start: f64,

  #[arg(long, default_value_t = 5.0, allow_negative_numbers = true)]
  x_end: f64,

  #[arg(long, default_value_t = 0.01, allow_negative_numbers = true)]
  step: f64,

  /// Column file receiving `x y z [exact]`
  #[arg(short = 'o', long, default_value = "lane_emden.txt")]
  output: PathBuf,

  /// Also run a step-halving study with this many levels
  #[arg(long, value_parser = clap::value_parser!(u32).range(1..=30))]
  convergence: Option<u32>,

  #[command(subcommand)]
  integrator: IntegratorType,
}

fn run(opts: Opts) -> Result<(), Box<dyn Error>> {
  let params = LaneEmdenParams {
    index: opts.index,
    x_start: opts.x_start,
    x_end: opts.x_end,
    step: opts.step,
  };

  let result = solve(&params, opts.integrator);
  if let Some(error) = result.max_error() {
    info!("max |theta - exact| = {:e}", error);
  }
  ColumnData::from_columns(result.into_columns())?.save(&opts.output)?;

  if let Some(levels) = opts.convergence {
    let levels = levels as usize;
    let n = params.index;
    if !has_analytic(n) {
      return Err(
        format!("no closed form for n = {}, convergence needs n = 0, 1 or 5", n)
          .into(),
      );
    }

    let rows = convergence::study(
      opts.integrator,
      &params.problem(),
      dy_dx,
      dz_dx(n),
      move |x| analytic(n, x).unwrap_or(f64::NAN),
      levels,
      &ProgressBar::new(levels as u64),
    );

    println!("{:>12} {:>8} {:>12} {:>14} {:>8}", "h", "points", "x", "error", "order");
    for row in rows {
      let order = row
        .order
        .map_or_else(|| "-".to_string(), |order| format!("{:.3}", order));
      println!(
        "{:>12.3e} {:>8} {:>12.6} {:>14.6e} {:>8}",
        row.h, row.points, row.x, row.error, order
      );
    }
  }

  Ok(())
}

fn main() {
  init_logger();

  if let Err(e) = run(Opts::parse()) {
    eprintln!("error: {}", e);
    process::exit(1);
  }
}

#[test]
fn convergence_levels_are_bounded() {
  let parse = |levels: &str| {
    Opts::try_parse_from(["lane-emden", "--convergence", levels, "rk4"])
  };

  assert_eq!(parse("30").map(|opts| opts.convergence).ok(), Some(Some(30)));
  assert!(parse("0").is_err());
  assert!(parse("64").is_err());
}
