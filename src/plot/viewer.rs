use crate::plot::{Figure, LineStyle, Marker, PlotError};
use eframe::egui;
use egui_plot::{Line, MarkerShape, Plot, PlotBounds, PlotPoints, Points};
use log::info;

struct FigureViewer {
  figure: Figure,
  bounds_applied: bool,
}

fn line_style(line: LineStyle) -> egui_plot::LineStyle {
  match line {
    LineStyle::Solid => egui_plot::LineStyle::Solid,
    LineStyle::Dashed => egui_plot::LineStyle::dashed_loose(),
    LineStyle::Dotted => egui_plot::LineStyle::dotted_dense(),
    LineStyle::DashDot => egui_plot::LineStyle::dashed_dense(),
  }
}

fn marker_shape(marker: Marker) -> MarkerShape {
  match marker {
    Marker::Point | Marker::Circle => MarkerShape::Circle,
    Marker::Cross => MarkerShape::Cross,
    Marker::Plus => MarkerShape::Plus,
    Marker::Star => MarkerShape::Asterisk,
    Marker::Square => MarkerShape::Square,
    Marker::TriangleUp => MarkerShape::Up,
    Marker::TriangleDown => MarkerShape::Down,
    Marker::Diamond => MarkerShape::Diamond,
  }
}

impl eframe::App for FigureViewer {
  fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
    egui::CentralPanel::default().show(ctx, |ui| {
      let limits = self.figure.limits;
      let apply_bounds = !self.bounds_applied;

      Plot::new("figure").show(ui, |plot_ui| {
        if apply_bounds {
          plot_ui.set_plot_bounds(PlotBounds::from_min_max(
            [limits.x_min.min(limits.x_max), limits.y_min.min(limits.y_max)],
            [limits.x_min.max(limits.x_max), limits.y_min.max(limits.y_max)],
          ));
        }

        for series in &self.figure.series {
          let [r, g, b] = series.color.0;
          let color = egui::Color32::from_rgb(r, g, b);
          let runs: Vec<Vec<[f64; 2]>> = series
            .finite_runs()
            .into_iter()
            .map(|run| run.into_iter().map(|(x, y)| [x, y]).collect())
            .collect();

          if let Some(line) = series.style.line {
            for run in &runs {
              plot_ui.line(
                Line::new(series.label.clone(), PlotPoints::from(run.clone()))
                  .color(color)
                  .style(line_style(line)),
              );
            }
          }

          if let Some(marker) = series.style.marker {
            let points: PlotPoints = runs.iter().flatten().copied().collect();
            plot_ui.points(
              Points::new(series.label.clone(), points)
                .color(color)
                .shape(marker_shape(marker))
                .radius(3.0),
            );
          }
        }
      });

      self.bounds_applied = true;
    });
  }
}

/// Open an interactive window and block until it is closed.
pub fn show_figure(figure: Figure, title: &str) -> Result<(), PlotError> {
  info!("opening viewer for {} series", figure.series.len());
  let app = FigureViewer {
    figure,
    bounds_applied: false,
  };
  let options = eframe::NativeOptions {
    viewport: egui::ViewportBuilder::default().with_inner_size([800.0, 600.0]),
    ..Default::default()
  };
  eframe::run_native(title, options, Box::new(|_| Ok(Box::new(app))))
    .map_err(|e| PlotError::Display(e.to_string()))
}
