//! Distractor policies and multiple-choice option generation.
//!
//! Distractors are the true resistance scaled by a policy multiplier and
//! pushed through the same formatter, so they read like answers a student
//! could plausibly reach by misdecoding one band.

use rand::seq::SliceRandom;
use rand::Rng;
use serde::{Deserialize, Serialize};
use tracing::warn;

use crate::domain::Difficulty;
use crate::error::EngineError;
use crate::resistance::format_ohms;

/// How distractor candidates are derived for one difficulty tier.
/// Policies are plain data so the config layer can override them.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct DistractorPolicy {
  /// Scale factors applied to the true resistance.
  pub multipliers: Vec<f64>,
  /// Round candidates to the nearest whole ohm (beginner tiers).
  #[serde(default)]
  pub round_to_ohm: bool,
}

impl DistractorPolicy {
  /// Beginner set: order-of-magnitude slips only, integer ohms.
  pub fn easy() -> Self {
    Self {
      multipliers: vec![0.1, 0.5, 2.0, 10.0, 100.0],
      round_to_ohm: true,
    }
  }

  pub fn standard() -> Self {
    Self {
      multipliers: vec![0.01, 0.1, 0.5, 2.0, 10.0, 100.0, 1000.0],
      round_to_ohm: false,
    }
  }

  /// Adds near-miss factors (0.8, 1.2, 1.5) that survive unit scaling.
  pub fn medium() -> Self {
    Self {
      multipliers: vec![0.1, 0.3, 0.5, 0.8, 1.2, 1.5, 2.0, 10.0, 100.0],
      round_to_ohm: false,
    }
  }

  /// Built-in policy for a difficulty tier.
  pub fn builtin(difficulty: Difficulty) -> Self {
    match difficulty {
      Difficulty::Easy => Self::easy(),
      Difficulty::Standard => Self::standard(),
      Difficulty::Medium => Self::medium(),
    }
  }
}

impl Default for DistractorPolicy {
  fn default() -> Self {
    Self::standard()
  }
}

/// Build the option set: the canonical answer plus unique distractors,
/// shuffled. Returns fewer than `option_count` entries when the candidate
/// pool is exhausted; it never pads with duplicates. The caller observes exhaustion
/// from the length; it is also logged at warn level.
pub fn generate_options<R: Rng + ?Sized>(
  rng: &mut R,
  ohms: f64,
  tolerance: &str,
  option_count: usize,
  policy: &DistractorPolicy,
) -> Result<Vec<String>, EngineError> {
  if !(2..=4).contains(&option_count) {
    return Err(EngineError::InvalidOptionCount(option_count));
  }

  let canonical = format!("{} {}", format_ohms(ohms), tolerance);

  // Consume the multiplier pool in random order; the requested count picks
  // the subset.
  let mut pool = policy.multipliers.clone();
  pool.shuffle(rng);

  let mut options = vec![canonical];
  for factor in pool {
    if options.len() == option_count {
      break;
    }
    let mut candidate = ohms * factor;
    if policy.round_to_ohm {
      candidate = candidate.round();
    }
    let formatted = format!("{} {}", format_ohms(candidate), tolerance);
    if options.iter().any(|o| *o == formatted) {
      continue;
    }
    options.push(formatted);
  }

  if options.len() < option_count {
    warn!(
      target: "question",
      produced = options.len(),
      requested = option_count,
      "distractor pool exhausted"
    );
  }

  options.shuffle(rng);
  Ok(options)
}
