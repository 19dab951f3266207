use crate::plot::{Color, Figure, Marker, PlotError, Series};
use image::RgbImage;
use log::info;
use plotters::coord::types::RangedCoordf64;
use plotters::coord::Shift;
use plotters::style::Color as _;
use plotters::prelude::*;
use std::path::Path;

const MARKER_SIZE: i32 = 3;

fn rgb(color: Color) -> RGBColor {
  let [r, g, b] = color.0;
  RGBColor(r, g, b)
}

fn render_error<E: std::fmt::Display>(e: E) -> PlotError {
  PlotError::Render(e.to_string())
}

type DrawResult<DB> =
  Result<(), DrawingAreaErrorKind<<DB as DrawingBackend>::ErrorType>>;

type Chart<'a, DB> =
  ChartContext<'a, DB, Cartesian2d<RangedCoordf64, RangedCoordf64>>;

fn draw_series_on<DB: DrawingBackend>(
  chart: &mut Chart<'_, DB>,
  series: &Series,
  figure: &Figure,
) -> DrawResult<DB> {
  let style = rgb(series.color).stroke_width(1);

  if let Some(line) = series.style.line {
    for piece in series.clipped_runs(&figure.limits) {
      match line.dash() {
        None => {
          chart.draw_series(LineSeries::new(piece, style))?;
        }
        Some((size, spacing)) => {
          chart.draw_series(DashedLineSeries::new(
            piece, size, spacing, style,
          ))?;
        }
      }
    }
  }

  let marker = match series.style.marker {
    Some(marker) => marker,
    None => return Ok(()),
  };
  let points = series.visible_points(&figure.limits);
  let r = MARKER_SIZE;
  let points = points.into_iter();

  match marker {
    Marker::Point => {
      chart.draw_series(points.map(|p| Circle::new(p, 1, style.filled())))?;
    }
    Marker::Circle => {
      chart.draw_series(points.map(|p| Circle::new(p, r, style)))?;
    }
    Marker::Cross => {
      chart.draw_series(points.map(|p| Cross::new(p, r, style)))?;
    }
    Marker::Plus => {
      chart.draw_series(points.map(|p| {
        EmptyElement::at(p)
          + PathElement::new(vec![(-r, 0), (r, 0)], style)
          + PathElement::new(vec![(0, -r), (0, r)], style)
      }))?;
    }
    Marker::Star => {
      chart.draw_series(points.map(|p| {
        EmptyElement::at(p)
          + Cross::new((0, 0), r, style)
          + PathElement::new(vec![(-r, 0), (r, 0)], style)
          + PathElement::new(vec![(0, -r), (0, r)], style)
      }))?;
    }
    Marker::Square => {
      chart.draw_series(points.map(|p| {
        EmptyElement::at(p) + Rectangle::new([(-r, -r), (r, r)], style)
      }))?;
    }
    Marker::Diamond => {
      chart.draw_series(points.map(|p| {
        EmptyElement::at(p)
          + PathElement::new(
            vec![(0, -r), (r, 0), (0, r), (-r, 0), (0, -r)],
            style,
          )
      }))?;
    }
    Marker::TriangleUp => {
      chart.draw_series(points.map(|p| TriangleMarker::new(p, r, style)))?;
    }
    Marker::TriangleDown => {
      chart.draw_series(points.map(|p| {
        EmptyElement::at(p)
          + PathElement::new(vec![(0, r), (r, -r), (-r, -r), (0, r)], style)
      }))?;
    }
  }

  Ok(())
}

/// Axes with labelled ticks from the figure limits, then every series.
fn draw_figure<DB: DrawingBackend>(
  root: &DrawingArea<DB, Shift>,
  figure: &Figure,
) -> DrawResult<DB> {
  root.fill(&WHITE)?;

  let limits = &figure.limits;
  let mut chart = ChartBuilder::on(root)
    .margin(15)
    .x_label_area_size(40)
    .y_label_area_size(60)
    .build_cartesian_2d(
      limits.x_min..limits.x_max,
      limits.y_min..limits.y_max,
    )?;

  chart.configure_mesh().disable_mesh().draw()?;

  for series in &figure.series {
    draw_series_on(&mut chart, series, figure)?;
  }

  root.present()?;
  Ok(())
}

/// Render into memory without touching the filesystem.
pub fn render(figure: &Figure) -> Result<RgbImage, PlotError> {
  let (width, height) = (figure.width, figure.height);
  let mut buffer = vec![0u8; width as usize * height as usize * 3];
  {
    let root = BitMapBackend::with_buffer(&mut buffer, (width, height))
      .into_drawing_area();
    draw_figure(&root, figure).map_err(render_error)?;
  }
  RgbImage::from_raw(width, height, buffer)
    .ok_or_else(|| render_error("pixel buffer does not match figure size"))
}

/// `.svg` paths get vector output; anything else is a bitmap whose format
/// follows the extension.
pub fn save_figure(figure: &Figure, path: &Path) -> Result<(), PlotError> {
  let size = (figure.width, figure.height);
  let is_svg = path
    .extension()
    .map_or(false, |ext| ext.eq_ignore_ascii_case("svg"));

  if is_svg {
    let root = SVGBackend::new(path, size).into_drawing_area();
    draw_figure(&root, figure).map_err(render_error)?;
  } else {
    let root = BitMapBackend::new(path, size).into_drawing_area();
    draw_figure(&root, figure).map_err(render_error)?;
  }

  info!(
    "saved {}x{} plot of {} series to {}",
    figure.width,
    figure.height,
    figure.series.len(),
    path.display()
  );
  Ok(())
}

#[cfg(test)]
use crate::data::ColumnData;
#[cfg(test)]
use crate::plot::{Limits, PlotRequest};

#[cfg(test)]
fn temp_path(extension: &str) -> std::path::PathBuf {
  std::env::temp_dir()
    .join(format!("lane_emden_plot_{}.{}", std::process::id(), extension))
}

#[cfg(test)]
fn count_pixels(image: &RgbImage, color: Color) -> usize {
  image.pixels().filter(|pixel| pixel.0 == color.0).count()
}

#[test]
fn rendered_figure_has_background_and_series() {
  let data = ColumnData::from_columns(vec![
    vec![0.0, 1.0, 2.0],
    vec![0.0, 1.0, 2.0],
  ])
  .unwrap();
  let request = PlotRequest {
    style: "g-".parse().unwrap(),
    ..Default::default()
  };
  let figure = Figure::from_data(&data, &request).unwrap();
  let image = render(&figure).unwrap();

  assert_eq!(image.dimensions(), (640, 480));
  assert_eq!(image.get_pixel(0, 0).0, Color::WHITE.0);
  let green = Color::from_code('g').unwrap();
  assert!(count_pixels(&image, green) > 100);
}

#[test]
fn series_outside_limits_draws_nothing() {
  let data =
    ColumnData::from_columns(vec![vec![0.0, 1.0], vec![0.0, 1.0]]).unwrap();
  let request = PlotRequest {
    style: "ro-".parse().unwrap(),
    limits: Some(Limits::from_slice(&[5.0, 6.0, 5.0, 6.0]).unwrap()),
    ..Default::default()
  };
  let figure = Figure::from_data(&data, &request).unwrap();
  let image = render(&figure).unwrap();

  assert_eq!(count_pixels(&image, Color([255, 0, 0])), 0);
}

#[test]
fn every_marker_renders() {
  let data =
    ColumnData::from_columns(vec![vec![0.0, 1.0], vec![0.0, 1.0]]).unwrap();
  let red = Color([255, 0, 0]);
  for style in [
    "r.", "ro", "rx", "r+", "r*", "rs", "rd", "r^", "rv", "r:", "r-.",
  ] {
    let request = PlotRequest {
      style: style.parse().unwrap(),
      ..Default::default()
    };
    let figure = Figure::from_data(&data, &request).unwrap();
    let image = render(&figure).unwrap();
    assert!(count_pixels(&image, red) > 0, "style {:?}", style);
  }
}

#[test]
fn svg_output_has_tick_labels() {
  let path = temp_path("svg");
  let data = ColumnData::from_columns(vec![
    vec![0.0, 0.5, 1.0],
    vec![10.0, 20.0, 30.0],
  ])
  .unwrap();
  let figure = Figure::from_data(&data, &PlotRequest::default()).unwrap();

  save_figure(&figure, &path).unwrap();
  let svg = std::fs::read_to_string(&path).unwrap();
  std::fs::remove_file(&path).unwrap();

  assert!(svg.contains("<text"));
}

#[test]
fn png_output_has_figure_size() {
  let path = temp_path("png");
  let data =
    ColumnData::from_columns(vec![vec![0.0, 1.0], vec![0.0, 1.0]]).unwrap();
  let figure = Figure::from_data(&data, &PlotRequest::default()).unwrap();

  save_figure(&figure, &path).unwrap();
  let loaded = image::open(&path).unwrap().to_rgb8();
  std::fs::remove_file(&path).unwrap();

  assert_eq!(loaded.dimensions(), (640, 480));
}
