//! Band sampling and structural validation.
//!
//! The sampler always produces a well-formed sequence; validation exists for
//! band sequences arriving from outside (stored questions, hand-built tests).

use rand::seq::SliceRandom;
use rand::Rng;

use crate::colors::{
  digit_value, multiplier_value, tolerance_label, Color, DIGIT_COLORS, FIRST_DIGIT_COLORS,
  MULTIPLIER_COLORS, TOLERANCE_COLORS,
};
use crate::domain::ResistorType;
use crate::error::EngineError;

/// Draw a random, well-formed band sequence for the requested type.
///
/// The leading band comes from the digit colors minus black; the remaining
/// digit bands may be any digit color. Each pool is drawn uniformly.
pub fn sample_bands<R: Rng + ?Sized>(rng: &mut R, resistor_type: ResistorType) -> Vec<Color> {
  let mut bands = Vec::with_capacity(resistor_type.band_count());
  bands.push(pick(rng, &FIRST_DIGIT_COLORS));
  for _ in 1..resistor_type.digit_bands() {
    bands.push(pick(rng, &DIGIT_COLORS));
  }
  bands.push(pick(rng, &MULTIPLIER_COLORS));
  bands.push(pick(rng, &TOLERANCE_COLORS));
  bands
}

// The pools are non-empty consts, so the fallback never fires.
fn pick<R: Rng + ?Sized>(rng: &mut R, pool: &[Color]) -> Color {
  pool.choose(rng).copied().unwrap_or(pool[0])
}

/// Check the structural invariants of a band sequence and report its type.
///
/// Invariants: 4 or 5 bands; leading band is a non-black digit color; every
/// digit position holds a digit color; the second-to-last band has a
/// multiplier role; the last band has a tolerance role.
pub fn validate_bands(bands: &[Color]) -> Result<ResistorType, EngineError> {
  let resistor_type = match bands.len() {
    4 => ResistorType::FourBand,
    5 => ResistorType::FiveBand,
    n => {
      return Err(EngineError::MalformedBands(format!(
        "expected 4 or 5 bands, got {n}"
      )))
    }
  };

  if bands[0] == Color::Black {
    return Err(EngineError::MalformedBands(
      "leading band cannot be black".into(),
    ));
  }
  let digit_count = resistor_type.digit_bands();
  for (i, band) in bands[..digit_count].iter().enumerate() {
    if digit_value(*band).is_none() {
      return Err(EngineError::MalformedBands(format!(
        "band {} ({band}) has no digit role",
        i + 1
      )));
    }
  }
  if multiplier_value(bands[digit_count]).is_none() {
    return Err(EngineError::MalformedBands(format!(
      "{} has no multiplier role",
      bands[digit_count]
    )));
  }
  if tolerance_label(bands[digit_count + 1]).is_none() {
    return Err(EngineError::MalformedBands(format!(
      "{} has no tolerance role",
      bands[digit_count + 1]
    )));
  }
  Ok(resistor_type)
}

#[cfg(test)]
mod tests {
  use rand::rngs::StdRng;
  use rand::SeedableRng;

  use super::*;

  #[test]
  fn sampled_bands_are_always_well_formed() {
    let mut rng = StdRng::seed_from_u64(7);
    for _ in 0..200 {
      for resistor_type in [ResistorType::FourBand, ResistorType::FiveBand] {
        let bands = sample_bands(&mut rng, resistor_type);
        assert_eq!(bands.len(), resistor_type.band_count());
        assert_ne!(bands[0], Color::Black);
        assert_eq!(validate_bands(&bands), Ok(resistor_type));
      }
    }
  }

  #[test]
  fn validation_rejects_a_leading_black_band() {
    let bands = [Color::Black, Color::Red, Color::Red, Color::Gold];
    assert!(matches!(
      validate_bands(&bands),
      Err(EngineError::MalformedBands(_))
    ));
  }

  #[test]
  fn validation_rejects_wrong_lengths() {
    assert!(validate_bands(&[Color::Brown, Color::Red, Color::Gold]).is_err());
    let six = [Color::Brown; 6];
    assert!(validate_bands(&six).is_err());
  }

  #[test]
  fn validation_rejects_colors_outside_their_positional_role() {
    // Gold is not a digit.
    let bands = [Color::Gold, Color::Red, Color::Red, Color::Gold];
    assert!(validate_bands(&bands).is_err());
    // White is not a multiplier.
    let bands = [Color::Brown, Color::Red, Color::White, Color::Gold];
    assert!(validate_bands(&bands).is_err());
    // Orange is not a tolerance.
    let bands = [Color::Brown, Color::Red, Color::Red, Color::Orange];
    assert!(validate_bands(&bands).is_err());
  }
}
