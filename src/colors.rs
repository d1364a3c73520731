//! Static resistor color-code tables: digit, multiplier, and tolerance roles.
//!
//! A color can serve several roles (brown is digit 1 *and* ±1%); which role
//! applies is decided by band position, never by the color alone. The tables
//! are plain consts and `match` lookups, built once and never mutated.

use serde::{Deserialize, Serialize};

/// Every color that can appear on a band, listed in digit order.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Color {
  Black,
  Brown,
  Red,
  Orange,
  Yellow,
  Green,
  Blue,
  Violet,
  Gray,
  White,
  Gold,
  Silver,
}

impl Color {
  /// Lowercase name used in explanations and client payloads.
  pub fn name(&self) -> &'static str {
    match self {
      Color::Black => "black",
      Color::Brown => "brown",
      Color::Red => "red",
      Color::Orange => "orange",
      Color::Yellow => "yellow",
      Color::Green => "green",
      Color::Blue => "blue",
      Color::Violet => "violet",
      Color::Gray => "gray",
      Color::White => "white",
      Color::Gold => "gold",
      Color::Silver => "silver",
    }
  }
}

impl std::fmt::Display for Color {
  fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
    f.write_str(self.name())
  }
}

/// Digit colors in value order (black = 0 … white = 9).
pub const DIGIT_COLORS: [Color; 10] = [
  Color::Black,
  Color::Brown,
  Color::Red,
  Color::Orange,
  Color::Yellow,
  Color::Green,
  Color::Blue,
  Color::Violet,
  Color::Gray,
  Color::White,
];

/// Digit colors legal in the leading position. A leading zero is not
/// physically meaningful, so black is excluded here.
pub const FIRST_DIGIT_COLORS: [Color; 9] = [
  Color::Brown,
  Color::Red,
  Color::Orange,
  Color::Yellow,
  Color::Green,
  Color::Blue,
  Color::Violet,
  Color::Gray,
  Color::White,
];

/// Colors with a multiplier role (second-to-last band).
pub const MULTIPLIER_COLORS: [Color; 9] = [
  Color::Black,
  Color::Brown,
  Color::Red,
  Color::Orange,
  Color::Yellow,
  Color::Green,
  Color::Blue,
  Color::Gold,
  Color::Silver,
];

/// Colors with a tolerance role (last band).
pub const TOLERANCE_COLORS: [Color; 8] = [
  Color::Brown,
  Color::Red,
  Color::Green,
  Color::Blue,
  Color::Violet,
  Color::Gray,
  Color::Gold,
  Color::Silver,
];

/// Digit value of a color, if it has one.
pub fn digit_value(color: Color) -> Option<u32> {
  match color {
    Color::Black => Some(0),
    Color::Brown => Some(1),
    Color::Red => Some(2),
    Color::Orange => Some(3),
    Color::Yellow => Some(4),
    Color::Green => Some(5),
    Color::Blue => Some(6),
    Color::Violet => Some(7),
    Color::Gray => Some(8),
    Color::White => Some(9),
    Color::Gold | Color::Silver => None,
  }
}

/// Multiplier applied by the second-to-last band, if the color has one.
pub fn multiplier_value(color: Color) -> Option<f64> {
  match color {
    Color::Black => Some(1.0),
    Color::Brown => Some(10.0),
    Color::Red => Some(100.0),
    Color::Orange => Some(1e3),
    Color::Yellow => Some(1e4),
    Color::Green => Some(1e5),
    Color::Blue => Some(1e6),
    Color::Gold => Some(0.1),
    Color::Silver => Some(0.01),
    Color::Violet | Color::Gray | Color::White => None,
  }
}

/// Tolerance label carried by the last band, if the color has one.
pub fn tolerance_label(color: Color) -> Option<&'static str> {
  match color {
    Color::Brown => Some("±1%"),
    Color::Red => Some("±2%"),
    Color::Green => Some("±0.5%"),
    Color::Blue => Some("±0.25%"),
    Color::Violet => Some("±0.1%"),
    Color::Gray => Some("±0.05%"),
    Color::Gold => Some("±5%"),
    Color::Silver => Some("±10%"),
    Color::Black | Color::Orange | Color::Yellow | Color::White => None,
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn digit_colors_map_to_zero_through_nine_in_order() {
    for (i, color) in DIGIT_COLORS.iter().enumerate() {
      assert_eq!(digit_value(*color), Some(i as u32), "{color}");
    }
    assert_eq!(digit_value(Color::Gold), None);
    assert_eq!(digit_value(Color::Silver), None);
  }

  #[test]
  fn first_digit_pool_excludes_black_only() {
    assert!(!FIRST_DIGIT_COLORS.contains(&Color::Black));
    for color in FIRST_DIGIT_COLORS {
      assert!(DIGIT_COLORS.contains(&color), "{color}");
    }
    assert_eq!(FIRST_DIGIT_COLORS.len(), DIGIT_COLORS.len() - 1);
  }

  #[test]
  fn every_pool_color_carries_its_role() {
    for color in MULTIPLIER_COLORS {
      assert!(multiplier_value(color).is_some(), "{color}");
    }
    for color in TOLERANCE_COLORS {
      assert!(tolerance_label(color).is_some(), "{color}");
    }
    assert_eq!(multiplier_value(Color::White), None);
    assert_eq!(tolerance_label(Color::Orange), None);
  }

  #[test]
  fn gold_and_silver_are_fractional_multipliers() {
    assert_eq!(multiplier_value(Color::Gold), Some(0.1));
    assert_eq!(multiplier_value(Color::Silver), Some(0.01));
    assert_eq!(tolerance_label(Color::Gold), Some("±5%"));
    assert_eq!(tolerance_label(Color::Silver), Some("±10%"));
  }
}
