//! Core judging behaviors shared by whatever front end embeds the engine.
//!
//! This includes:
//!   - Exact-match judging of submitted answers (option string or composed free text)
//!   - The free-text composition convention ("<number><unit> <tolerance>")
//!   - A structured comparison path for callers that keep value and tolerance apart

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::domain::{Question, Verdict};

/// Exact-match verdict for a submitted answer.
///
/// `None` and the empty string mean "no answer" (e.g. a timeout) and are
/// simply incorrect, never an error. Matching is byte-exact against the
/// canonical answer; callers composing free text should go through
/// [`compose_answer`] so spacing and decimals cannot drift.
pub fn judge_answer(question: &Question, submitted: Option<&str>) -> Verdict {
  let correct = match submitted {
    Some(answer) if !answer.is_empty() => answer == question.canonical_answer,
    _ => false,
  };
  debug!(target: "question", correct, expected = %question.canonical_answer, "judged answer");
  Verdict {
    correct,
    expected: question.canonical_answer.clone(),
    explanation: question.explanation.clone(),
  }
}

/// Join the three independently chosen free-text fields with the same
/// convention the formatter uses: `"<number><unit> <tolerance>"`.
pub fn compose_answer(number: &str, unit: &str, tolerance: &str) -> String {
  format!("{number}{unit} {tolerance}")
}

/// A submission kept in structured form instead of a display string.
/// Sidesteps the string-equality footgun for callers that track the
/// numeric value and tolerance separately.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct ParsedAnswer {
  pub value_ohms: f64,
  pub tolerance: String,
}

impl ParsedAnswer {
  /// Value-level comparison: tolerant of float noise in the resistance,
  /// strict on the tolerance label.
  pub fn matches(&self, question: &Question) -> bool {
    let scale = question.ohms.abs().max(1.0);
    (self.value_ohms - question.ohms).abs() <= scale * 1e-9 && self.tolerance == question.tolerance
  }
}
