use crate::plot::PlotError;
use std::str::FromStr;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Color(pub [u8; 3]);

impl Color {
  pub const BLACK: Color = Color([0, 0, 0]);
  pub const WHITE: Color = Color([255, 255, 255]);

  /// Single letter base colors of format strings.
  pub fn from_code(code: char) -> Option<Color> {
    let rgb = match code {
      'b' => [0, 0, 255],
      'g' => [0, 128, 0],
      'r' => [255, 0, 0],
      'c' => [0, 191, 191],
      'm' => [191, 0, 191],
      'y' => [191, 191, 0],
      'k' => [0, 0, 0],
      'w' => [255, 255, 255],
      _ => return None,
    };
    Some(Color(rgb))
  }

  /// Default color cycle used when several series share one style.
  pub fn cycle(index: usize) -> Color {
    const CYCLE: [[u8; 3]; 10] = [
      [0x1f, 0x77, 0xb4],
      [0xff, 0x7f, 0x0e],
      [0x2c, 0xa0, 0x2c],
      [0xd6, 0x27, 0x28],
      [0x94, 0x67, 0xbd],
      [0x8c, 0x56, 0x4b],
      [0xe3, 0x77, 0xc2],
      [0x7f, 0x7f, 0x7f],
      [0xbc, 0xbd, 0x22],
      [0x17, 0xbe, 0xcf],
    ];
    Color(CYCLE[index % CYCLE.len()])
  }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LineStyle {
  Solid,
  Dashed,
  Dotted,
  DashDot,
}

impl LineStyle {
  /// Dash length and gap in pixels, `None` for a continuous line.
  pub fn dash(&self) -> Option<(u32, u32)> {
    match self {
      LineStyle::Solid => None,
      LineStyle::Dashed => Some((6, 4)),
      LineStyle::Dotted => Some((1, 3)),
      LineStyle::DashDot => Some((9, 3)),
    }
  }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Marker {
  Point,
  Circle,
  Cross,
  Plus,
  Star,
  Square,
  TriangleUp,
  TriangleDown,
  Diamond,
}

impl Marker {
  fn from_code(code: char) -> Option<Marker> {
    Some(match code {
      '.' => Marker::Point,
      'o' => Marker::Circle,
      'x' => Marker::Cross,
      '+' => Marker::Plus,
      '*' => Marker::Star,
      's' => Marker::Square,
      '^' => Marker::TriangleUp,
      'v' => Marker::TriangleDown,
      'd' => Marker::Diamond,
      _ => return None,
    })
  }
}

/// A format string such as `"-"`, `"r--"`, `"ko"` or `"b-."`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Style {
  pub color: Option<Color>,
  pub line: Option<LineStyle>,
  pub marker: Option<Marker>,
}

impl Default for Style {
  fn default() -> Self {
    Self {
      color: None,
      line: Some(LineStyle::Solid),
      marker: None,
    }
  }
}

impl FromStr for Style {
  type Err = PlotError;

  fn from_str(style: &str) -> Result<Self, Self::Err> {
    let error = |reason: &str| PlotError::Style {
      style: style.to_string(),
      reason: reason.to_string(),
    };

    let mut color = None;
    let mut line = None;
    let mut marker = None;

    let mut rest = style;
    while let Some(code) = rest.chars().next() {
      let (line_style, len) = if rest.starts_with("--") {
        (Some(LineStyle::Dashed), 2)
      } else if rest.starts_with("-.") {
        (Some(LineStyle::DashDot), 2)
      } else if code == '-' {
        (Some(LineStyle::Solid), 1)
      } else if code == ':' {
        (Some(LineStyle::Dotted), 1)
      } else {
        (None, code.len_utf8())
      };

      if let Some(line_style) = line_style {
        if line.replace(line_style).is_some() {
          return Err(error("two line styles"));
        }
      } else if let Some(new_marker) = Marker::from_code(code) {
        if marker.replace(new_marker).is_some() {
          return Err(error("two markers"));
        }
      } else if let Some(new_color) = Color::from_code(code) {
        if color.replace(new_color).is_some() {
          return Err(error("two colors"));
        }
      } else {
        return Err(error(&format!("unrecognized character {:?}", code)));
      }

      rest = &rest[len..];
    }

    if line.is_none() && marker.is_none() {
      line = Some(LineStyle::Solid);
    }

    Ok(Style {
      color,
      line,
      marker,
    })
  }
}

#[test]
fn parse_line_styles() {
  let dashed: Style = "--".parse().unwrap();
  assert_eq!(dashed.line, Some(LineStyle::Dashed));
  assert_eq!(dashed.marker, None);

  let dash_dot: Style = "r-.".parse().unwrap();
  assert_eq!(dash_dot.line, Some(LineStyle::DashDot));
  assert_eq!(dash_dot.color, Color::from_code('r'));

  assert_eq!(":".parse::<Style>().unwrap().line, Some(LineStyle::Dotted));
  assert_eq!("".parse::<Style>().unwrap(), Style::default());
}

#[test]
fn marker_without_line_has_no_line() {
  let style: Style = "ko".parse().unwrap();
  assert_eq!(style.color, Some(Color::BLACK));
  assert_eq!(style.marker, Some(Marker::Circle));
  assert_eq!(style.line, None);

  let both: Style = "x--g".parse().unwrap();
  assert_eq!(both.marker, Some(Marker::Cross));
  assert_eq!(both.line, Some(LineStyle::Dashed));
  assert_eq!(both.color, Some(Color([0, 128, 0])));
}

#[test]
fn reject_bad_format_strings() {
  assert!(matches!(
    "--:".parse::<Style>(),
    Err(PlotError::Style { .. })
  ));
  assert!("rb".parse::<Style>().is_err());
  assert!("oo".parse::<Style>().is_err());
  let err = "q".parse::<Style>().unwrap_err();
  assert_eq!(err.to_string(), "invalid style \"q\": unrecognized character 'q'");
}

#[test]
fn dashes_distinguish_line_styles() {
  assert_eq!(LineStyle::Solid.dash(), None);
  let dashes = [LineStyle::Dashed, LineStyle::Dotted, LineStyle::DashDot]
    .iter()
    .map(|line| line.dash())
    .collect::<Vec<_>>();
  assert!(dashes.iter().all(Option::is_some));
  assert_ne!(dashes[0], dashes[1]);
  assert_ne!(dashes[0], dashes[2]);
}

#[test]
fn color_cycle_wraps() {
  assert_eq!(Color::cycle(0), Color::cycle(10));
  assert_ne!(Color::cycle(0), Color::cycle(1));
}
