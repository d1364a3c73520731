//! Domain models used by the engine: resistor types, answer formats, and questions.

use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::colors::Color;
use crate::error::EngineError;

/// Band layout of the generated resistor.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ResistorType {
  /// Two significant digits, multiplier, tolerance.
  FourBand,
  /// Three significant digits, multiplier, tolerance.
  FiveBand,
}
impl Default for ResistorType {
  fn default() -> Self { ResistorType::FourBand }
}

impl ResistorType {
  /// Number of significant-digit bands.
  pub fn digit_bands(&self) -> usize {
    match self {
      ResistorType::FourBand => 2,
      ResistorType::FiveBand => 3,
    }
  }

  /// Total band count (digits + multiplier + tolerance).
  pub fn band_count(&self) -> usize {
    self.digit_bands() + 2
  }
}

impl FromStr for ResistorType {
  type Err = EngineError;

  /// The session layer hands over a string enum; anything unrecognized is
  /// an error, not a default.
  fn from_str(s: &str) -> Result<Self, Self::Err> {
    match s.trim().to_lowercase().replace('-', "_").as_str() {
      "four_band" | "4_band" => Ok(ResistorType::FourBand),
      "five_band" | "5_band" => Ok(ResistorType::FiveBand),
      _ => Err(EngineError::UnknownResistorType(s.to_string())),
    }
  }
}

/// How the user answers: picking one option, or composing value + unit +
/// tolerance as free text.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AnswerMode {
  MultipleChoice,
  FillIn,
}
impl Default for AnswerMode {
  fn default() -> Self { AnswerMode::MultipleChoice }
}

/// Distractor difficulty tier. Selects which multiplier set the option
/// generator draws from.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Difficulty {
  Easy,
  Standard,
  Medium,
}
impl Default for Difficulty {
  fn default() -> Self { Difficulty::Standard }
}

impl FromStr for Difficulty {
  type Err = EngineError;

  fn from_str(s: &str) -> Result<Self, Self::Err> {
    match s.trim().to_lowercase().as_str() {
      "easy" => Ok(Difficulty::Easy),
      "standard" => Ok(Difficulty::Standard),
      "medium" => Ok(Difficulty::Medium),
      _ => Err(EngineError::UnknownDifficulty(s.to_string())),
    }
  }
}

/// Per-question format policy supplied by the caller.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct QuestionFormat {
  #[serde(default)] pub mode: AnswerMode,
  /// Total options in multiple-choice mode (canonical answer included).
  /// Must be 2..=4; ignored for fill-in.
  #[serde(default = "default_option_count")] pub option_count: usize,
  #[serde(default)] pub difficulty: Difficulty,
}

fn default_option_count() -> usize { 4 }

impl Default for QuestionFormat {
  fn default() -> Self {
    Self {
      mode: AnswerMode::default(),
      option_count: default_option_count(),
      difficulty: Difficulty::default(),
    }
  }
}

impl QuestionFormat {
  /// Multiple-choice with the given option count, standard difficulty.
  pub fn multiple_choice(option_count: usize) -> Self {
    Self { option_count, ..Self::default() }
  }

  /// Free-text mode; no option set is generated.
  pub fn fill_in() -> Self {
    Self { mode: AnswerMode::FillIn, ..Self::default() }
  }
}

/// A generated question. Immutable once produced; the session layer owns
/// persistence and whatever user-answer bookkeeping it attaches afterwards.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct Question {
  pub resistor_type: ResistorType,
  /// Color bands in physical order: digit bands, multiplier, tolerance.
  pub bands: Vec<Color>,
  /// Nominal resistance in ohms.
  pub ohms: f64,
  /// Tolerance label from the last band, e.g. "±5%".
  pub tolerance: String,
  /// The authoritative formatted answer, e.g. "1kΩ ±5%".
  pub canonical_answer: String,
  /// Shuffled option set; present only in multiple-choice mode. May hold
  /// fewer entries than requested when the distractor pool runs dry.
  #[serde(default, skip_serializing_if = "Option::is_none")]
  pub options: Option<Vec<String>>,
  /// Human-readable decode trace shown after answering.
  pub explanation: String,
}

/// Outcome of judging a submitted answer.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct Verdict {
  pub correct: bool,
  /// The canonical answer, for display after answering.
  pub expected: String,
  pub explanation: String,
}
