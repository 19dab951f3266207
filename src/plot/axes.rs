use crate::ode::S;
use crate::plot::PlotError;

/// Axis ranges; `x_min > x_max` flips the axis.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Limits {
  pub x_min: S,
  pub x_max: S,
  pub y_min: S,
  pub y_max: S,
}

impl Limits {
  /// `[x_min, x_max, y_min, y_max]` as given on the command line.
  pub fn from_slice(values: &[S]) -> Result<Self, PlotError> {
    let degenerate = || PlotError::DegenerateLimits(values.to_vec());
    match *values {
      [x_min, x_max, y_min, y_max] => {
        let limits = Limits {
          x_min,
          x_max,
          y_min,
          y_max,
        };
        let spans = [x_max - x_min, y_max - y_min];
        if spans.iter().all(|span| span.is_finite() && *span != 0.0) {
          Ok(limits)
        } else {
          Err(degenerate())
        }
      }
      _ => Err(degenerate()),
    }
  }

  /// Finite data range of every `(x, y)` series plus a 5% margin.
  pub fn fit<'a, I>(series: I) -> Option<Self>
  where
    I: IntoIterator<Item = (&'a [S], &'a [S])>,
  {
    let mut bounds: Option<[S; 4]> = None;
    for (xs, ys) in series {
      for (x, y) in xs.iter().zip(ys) {
        if !x.is_finite() || !y.is_finite() {
          continue;
        }
        let b = bounds.get_or_insert([*x, *x, *y, *y]);
        b[0] = b[0].min(*x);
        b[1] = b[1].max(*x);
        b[2] = b[2].min(*y);
        b[3] = b[3].max(*y);
      }
    }

    let [x_min, x_max, y_min, y_max] = bounds?;
    let (x_min, x_max) = pad_range(x_min, x_max);
    let (y_min, y_max) = pad_range(y_min, y_max);
    Some(Limits {
      x_min,
      x_max,
      y_min,
      y_max,
    })
  }
}

fn pad_range(min: S, max: S) -> (S, S) {
  let (min, max) = if min == max {
    let half_width = if min == 0.0 { 0.5 } else { 0.05 * min.abs() };
    (min - half_width, max + half_width)
  } else {
    (min, max)
  };
  let margin = 0.05 * (max - min);
  (min - margin, max + margin)
}

impl Limits {
  fn x_range(&self) -> (S, S) {
    (self.x_min.min(self.x_max), self.x_min.max(self.x_max))
  }

  fn y_range(&self) -> (S, S) {
    (self.y_min.min(self.y_max), self.y_min.max(self.y_max))
  }

  pub fn contains(&self, (x, y): (S, S)) -> bool {
    let ((x0, x1), (y0, y1)) = (self.x_range(), self.y_range());
    x >= x0 && x <= x1 && y >= y0 && y <= y1
  }

  /// Part of the segment `a`-`b` inside the limits, in data coordinates.
  /// Endpoints already inside are returned unchanged.
  pub fn clip(&self, a: (S, S), b: (S, S)) -> Option<((S, S), (S, S))> {
    let ((x0, x1), (y0, y1)) = (self.x_range(), self.y_range());
    let (dx, dy) = (b.0 - a.0, b.1 - a.1);
    let mut t0: S = 0.0;
    let mut t1: S = 1.0;

    let edges = [
      (-dx, a.0 - x0),
      (dx, x1 - a.0),
      (-dy, a.1 - y0),
      (dy, y1 - a.1),
    ];
    for (p, q) in edges {
      if p == 0.0 {
        if q < 0.0 {
          return None;
        }
        continue;
      }
      let t = q / p;
      if p < 0.0 {
        t0 = t0.max(t);
      } else {
        t1 = t1.min(t);
      }
      if t0 > t1 {
        return None;
      }
    }

    let at = |t: S| (a.0 + t * dx, a.1 + t * dy);
    let from = if t0 == 0.0 { a } else { at(t0) };
    let to = if t1 == 1.0 { b } else { at(t1) };
    Some((from, to))
  }
}

#[cfg(test)]
use crate::assert_float_eq;

#[test]
fn from_slice_validates() {
  let limits = Limits::from_slice(&[0.0, 1.0, -1.0, 1.0]).unwrap();
  assert_eq!(limits.y_min, -1.0);
  assert!(Limits::from_slice(&[1.0, 0.0, 0.0, 1.0]).is_ok());
  assert!(matches!(
    Limits::from_slice(&[0.0, 0.0, 0.0, 1.0]),
    Err(PlotError::DegenerateLimits(_))
  ));
  assert!(Limits::from_slice(&[0.0, 1.0]).is_err());
}

#[test]
fn fit_skips_non_finite_and_pads() {
  let x = [0.0, 1.0, 2.0, S::NAN];
  let y = [-1.0, S::INFINITY, 1.0, 5.0];
  let limits = Limits::fit(vec![(&x[..], &y[..])]).unwrap();

  assert_float_eq!(limits.x_min, -0.1, 1e-12);
  assert_float_eq!(limits.x_max, 2.1, 1e-12);
  assert_float_eq!(limits.y_min, -1.1, 1e-12);
  assert_float_eq!(limits.y_max, 1.1, 1e-12);

  let empty: [S; 0] = [];
  assert_eq!(Limits::fit(vec![(&empty[..], &empty[..])]), None);
}

#[test]
fn fit_widens_flat_data() {
  let x = [1.0, 2.0];
  let y = [0.0, 0.0];
  let limits = Limits::fit(vec![(&x[..], &y[..])]).unwrap();
  assert!(limits.y_min < 0.0 && limits.y_max > 0.0);
}

#[test]
fn contains_handles_flipped_axes() {
  let limits = Limits::from_slice(&[1.0, 0.0, 0.0, 1.0]).unwrap();
  assert!(limits.contains((0.5, 0.5)));
  assert!(limits.contains((1.0, 0.0)));
  assert!(!limits.contains((1.5, 0.5)));
}

#[test]
fn clip_segments() {
  let limits = Limits::from_slice(&[0.0, 1.0, 0.0, 1.0]).unwrap();

  let inside = ((0.2, 0.2), (0.5, 0.6));
  assert_eq!(limits.clip(inside.0, inside.1), Some(inside));

  let (a, b) = limits.clip((-1.0, 0.5), (2.0, 0.5)).unwrap();
  assert_float_eq!(a.0, 0.0, 1e-12);
  assert_float_eq!(b.0, 1.0, 1e-12);
  assert_eq!((a.1, b.1), (0.5, 0.5));

  assert_eq!(limits.clip((-1.0, -1.0), (-0.5, 2.0)), None);
  assert_eq!(limits.clip((2.0, 0.5), (2.0, 0.7)), None);
}
