use crate::data::ColumnData;
use crate::ode::S;
use crate::plot::{Color, Limits, PlotError, Style};

pub const DEFAULT_WIDTH: u32 = 640;
pub const DEFAULT_HEIGHT: u32 = 480;

/// What to plot from a column file.
#[derive(Debug, Clone, PartialEq)]
pub struct PlotRequest {
  /// 1-based column for the x axis.
  pub x_col: usize,
  /// 1-based column for the y axis.
  pub y_col: usize,
  pub style: Style,
  pub limits: Option<Limits>,
  /// Plot the first column against every other column.
  pub plot_all: bool,
}

impl Default for PlotRequest {
  fn default() -> Self {
    Self {
      x_col: 1,
      y_col: 2,
      style: Style::default(),
      limits: None,
      plot_all: false,
    }
  }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Series {
  pub label: String,
  pub x: Vec<S>,
  pub y: Vec<S>,
  pub style: Style,
  pub color: Color,
}

impl Series {
  /// Maximal runs of consecutive finite points; NaN or inf splits a run.
  pub fn finite_runs(&self) -> Vec<Vec<(S, S)>> {
    let mut runs = vec![Vec::new()];
    for (x, y) in self.x.iter().zip(&self.y) {
      if x.is_finite() && y.is_finite() {
        if let Some(run) = runs.last_mut() {
          run.push((*x, *y));
        }
      } else if runs.last().map_or(false, |run| !run.is_empty()) {
        runs.push(Vec::new());
      }
    }
    runs.retain(|run| !run.is_empty());
    runs
  }

  /// Line pieces of the series that fall inside `limits`, cut at the edges.
  pub fn clipped_runs(&self, limits: &Limits) -> Vec<Vec<(S, S)>> {
    let mut pieces = Vec::new();
    for run in self.finite_runs() {
      let mut piece: Vec<(S, S)> = Vec::new();
      for pair in run.windows(2) {
        match limits.clip(pair[0], pair[1]) {
          Some((from, to)) => {
            if piece.last() != Some(&from) {
              if piece.len() > 1 {
                pieces.push(std::mem::take(&mut piece));
              }
              piece.clear();
              piece.push(from);
            }
            piece.push(to);
          }
          None => {
            if piece.len() > 1 {
              pieces.push(std::mem::take(&mut piece));
            }
            piece.clear();
          }
        }
      }
      if piece.len() > 1 {
        pieces.push(piece);
      }
    }
    pieces
  }

  /// Finite points inside `limits`, where markers are drawn.
  pub fn visible_points(&self, limits: &Limits) -> Vec<(S, S)> {
    self
      .finite_runs()
      .into_iter()
      .flatten()
      .filter(|point| limits.contains(*point))
      .collect()
  }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Figure {
  pub series: Vec<Series>,
  pub limits: Limits,
  pub width: u32,
  pub height: u32,
}

impl Figure {
  pub fn from_data(
    data: &ColumnData,
    request: &PlotRequest,
  ) -> Result<Figure, PlotError> {
    if data.num_rows() == 0 {
      return Err(PlotError::NoData);
    }

    let series = if request.plot_all {
      let x = data.column(1)?;
      // a single column file has nothing to plot against
      data.column(2)?;
      (2..=data.num_columns())
        .map(|column| Series {
          label: format!("column {}", column),
          x: x.to_vec(),
          y: data.columns()[column - 1].clone(),
          style: request.style,
          color: request.style.color.unwrap_or(Color::cycle(column - 2)),
        })
        .collect()
    } else {
      vec![Series {
        label: format!("column {}", request.y_col),
        x: data.column(request.x_col)?.to_vec(),
        y: data.column(request.y_col)?.to_vec(),
        style: request.style,
        color: request.style.color.unwrap_or(Color::BLACK),
      }]
    };

    let limits = match request.limits {
      Some(limits) => limits,
      None => Limits::fit(
        series
          .iter()
          .map(|series| (series.x.as_slice(), series.y.as_slice())),
      )
      .ok_or(PlotError::NoData)?,
    };

    Ok(Figure {
      series,
      limits,
      width: DEFAULT_WIDTH,
      height: DEFAULT_HEIGHT,
    })
  }
}

#[cfg(test)]
fn two_column_data() -> ColumnData {
  ColumnData::from_columns(vec![
    vec![0.0, 1.0, 2.0, 3.0],
    vec![0.0, 1.0, 0.0, 1.0],
    vec![1.0, 1.0, 1.0, 1.0],
  ])
  .unwrap()
}

#[cfg(test)]
fn series(x: Vec<S>, y: Vec<S>) -> Series {
  Series {
    label: String::new(),
    x,
    y,
    style: Style::default(),
    color: Color::BLACK,
  }
}

#[test]
fn single_series_defaults_to_black() {
  let figure =
    Figure::from_data(&two_column_data(), &PlotRequest::default()).unwrap();

  assert_eq!(figure.series.len(), 1);
  assert_eq!(figure.series[0].color, Color::BLACK);
  assert_eq!(figure.series[0].y, vec![0.0, 1.0, 0.0, 1.0]);
  assert!(figure.limits.x_min < 0.0 && figure.limits.x_max > 3.0);
}

#[test]
fn plot_all_uses_color_cycle() {
  let request = PlotRequest {
    plot_all: true,
    ..Default::default()
  };
  let figure = Figure::from_data(&two_column_data(), &request).unwrap();

  assert_eq!(figure.series.len(), 2);
  assert_eq!(figure.series[0].color, Color::cycle(0));
  assert_eq!(figure.series[1].color, Color::cycle(1));
  assert_eq!(figure.series[1].x, vec![0.0, 1.0, 2.0, 3.0]);
  assert_eq!(figure.series[1].y, vec![1.0; 4]);
}

#[test]
fn explicit_color_and_limits_win() {
  let request = PlotRequest {
    x_col: 2,
    y_col: 1,
    style: "r--".parse().unwrap(),
    limits: Some(Limits::from_slice(&[-1.0, 1.0, -5.0, 5.0]).unwrap()),
    plot_all: false,
  };
  let figure = Figure::from_data(&two_column_data(), &request).unwrap();

  assert_eq!(figure.series[0].color, Color([255, 0, 0]));
  assert_eq!(figure.series[0].x, vec![0.0, 1.0, 0.0, 1.0]);
  assert_eq!(figure.limits.y_max, 5.0);
}

#[test]
fn bad_requests_fail() {
  let request = PlotRequest {
    y_col: 4,
    ..Default::default()
  };
  assert!(matches!(
    Figure::from_data(&two_column_data(), &request),
    Err(PlotError::Data(_))
  ));

  assert!(matches!(
    Figure::from_data(&ColumnData::default(), &PlotRequest::default()),
    Err(PlotError::NoData)
  ));

  let single = ColumnData::from_columns(vec![vec![1.0, 2.0]]).unwrap();
  let request = PlotRequest {
    plot_all: true,
    ..Default::default()
  };
  assert!(Figure::from_data(&single, &request).is_err());
}

#[test]
fn runs_split_at_non_finite_samples() {
  let series = series(
    vec![0.0, 1.0, 2.0, 3.0, 4.0],
    vec![S::NAN, 1.0, S::INFINITY, 3.0, 4.0],
  );
  assert_eq!(
    series.finite_runs(),
    vec![vec![(1.0, 1.0)], vec![(3.0, 3.0), (4.0, 4.0)]]
  );
}

#[test]
fn clipped_runs_cut_at_limits() {
  // rises out of the top edge and comes back down
  let series = series(vec![0.0, 1.0, 2.0, 3.0], vec![0.0, 2.0, 0.0, 0.5]);
  let limits = Limits::from_slice(&[0.0, 3.0, 0.0, 1.0]).unwrap();

  let pieces = series.clipped_runs(&limits);
  assert_eq!(pieces.len(), 2);
  assert_eq!(pieces[0], vec![(0.0, 0.0), (0.5, 1.0)]);
  assert_eq!(pieces[1], vec![(1.5, 1.0), (2.0, 0.0), (3.0, 0.5)]);

  let outside = Limits::from_slice(&[10.0, 11.0, 0.0, 1.0]).unwrap();
  assert!(series.clipped_runs(&outside).is_empty());
}

#[test]
fn markers_only_inside_limits() {
  let series = series(vec![0.0, 1.0, 2.0], vec![0.5, S::NAN, 5.0]);
  let limits = Limits::from_slice(&[0.0, 2.0, 0.0, 1.0]).unwrap();
  assert_eq!(series.visible_points(&limits), vec![(0.0, 0.5)]);
}
