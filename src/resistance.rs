//! Resistance decoding: bands → ohms, canonical display string, decode trace.
//!
//! The canonical string is what the judge compares against, so the scaling
//! and trailing-zero rules here are load-bearing; every option and every
//! free-text submission must agree with them byte for byte.

use crate::bands::validate_bands;
use crate::colors::{digit_value, multiplier_value, tolerance_label, Color};
use crate::error::EngineError;
use crate::util::trim_number;

/// Everything derived from one valid band sequence.
#[derive(Clone, Debug, PartialEq)]
pub struct Decoded {
  pub ohms: f64,
  /// Tolerance label, e.g. "±5%".
  pub tolerance: String,
  /// Formatted value + tolerance, e.g. "1kΩ ±5%".
  pub canonical: String,
  /// Band-by-band trace with the arithmetic spelled out.
  pub explanation: String,
}

/// Scale `ohms` into Ω/kΩ/MΩ with minimal decimals: 4700 → "4.7kΩ",
/// 2_000_000 → "2MΩ", 999 → "999Ω".
pub fn format_ohms(ohms: f64) -> String {
  if ohms >= 1_000_000.0 {
    format!("{}MΩ", trim_number(ohms / 1_000_000.0))
  } else if ohms >= 1_000.0 {
    format!("{}kΩ", trim_number(ohms / 1_000.0))
  } else {
    format!("{}Ω", trim_number(ohms))
  }
}

/// Decode a band sequence into its resistance, canonical answer, and trace.
/// Band sequences violating the structural invariants are rejected.
pub fn decode(bands: &[Color]) -> Result<Decoded, EngineError> {
  let resistor_type = validate_bands(bands)?;
  let digit_count = resistor_type.digit_bands();

  let digit_vals: Vec<u64> = bands[..digit_count]
    .iter()
    .filter_map(|band| digit_value(*band).map(u64::from))
    .collect();
  let digits = digit_vals.iter().fold(0u64, |acc, d| acc * 10 + d);

  let multiplier_band = bands[digit_count];
  let multiplier = multiplier_value(multiplier_band)
    .ok_or_else(|| EngineError::MalformedBands(format!("{multiplier_band} has no multiplier role")))?;
  let tolerance_band = bands[digit_count + 1];
  let tolerance = tolerance_label(tolerance_band)
    .ok_or_else(|| EngineError::MalformedBands(format!("{tolerance_band} has no tolerance role")))?;

  // Fractional multipliers go through division: 39 × 0.1 rounds to
  // 3.9000000000000004 in binary, 39 / 10 renders as "3.9".
  let ohms = match multiplier_band {
    Color::Gold => digits as f64 / 10.0,
    Color::Silver => digits as f64 / 100.0,
    _ => digits as f64 * multiplier,
  };

  let canonical = format!("{} {}", format_ohms(ohms), tolerance);

  let mut parts: Vec<String> = Vec::with_capacity(bands.len() + 1);
  for (band, d) in bands[..digit_count].iter().zip(&digit_vals) {
    parts.push(format!("{band}({d})"));
  }
  parts.push(format!("{multiplier_band}(×{})", trim_number(multiplier)));
  parts.push(format!("{digits} × {} = {}", trim_number(multiplier), format_ohms(ohms)));
  parts.push(format!("{tolerance_band}({tolerance})"));
  let explanation = parts.join(", ");

  Ok(Decoded {
    ohms,
    tolerance: tolerance.to_string(),
    canonical,
    explanation,
  })
}
