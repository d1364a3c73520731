//! Public DTOs for the session/UI layer embedding the engine (serde ready).
//! Keep this small and stable so backend and frontend can evolve independently.

use serde::{Deserialize, Serialize};

use crate::colors::Color;
use crate::domain::{AnswerMode, Question, ResistorType, Verdict};

/// Client-facing question view. Deliberately omits the canonical answer and
/// the decode trace so a rendered payload cannot leak the solution.
#[derive(Debug, Serialize)]
pub struct QuestionOut {
    pub resistor_type: ResistorType,
    pub bands: Vec<Color>,
    pub mode: AnswerMode,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub options: Option<Vec<String>>,
}

/// Convert a full `Question` (internal) to the public DTO.
pub fn to_out(question: &Question) -> QuestionOut {
    QuestionOut {
        resistor_type: question.resistor_type,
        bands: question.bands.clone(),
        mode: if question.options.is_some() {
            AnswerMode::MultipleChoice
        } else {
            AnswerMode::FillIn
        },
        options: question.options.clone(),
    }
}

/// Submission payload accepted from the client. `answer: null` means the
/// user let the question time out.
#[derive(Debug, Deserialize)]
pub struct AnswerIn {
    pub answer: Option<String>,
}

/// Payload sent back after judging.
#[derive(Debug, Serialize)]
pub struct AnswerOut {
    pub correct: bool,
    pub expected: String,
    pub explanation: String,
}

/// Convert a judging verdict to the public DTO.
pub fn answer_out(verdict: &Verdict) -> AnswerOut {
    AnswerOut {
        correct: verdict.correct,
        expected: verdict.expected.clone(),
        explanation: verdict.explanation.clone(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::resistance::decode;

    fn question() -> Question {
        let bands = vec![Color::Brown, Color::Black, Color::Red, Color::Gold];
        let decoded = decode(&bands).expect("decoded");
        Question {
            resistor_type: ResistorType::FourBand,
            bands,
            ohms: decoded.ohms,
            tolerance: decoded.tolerance,
            canonical_answer: decoded.canonical,
            options: Some(vec!["1kΩ ±5%".into(), "100Ω ±5%".into()]),
            explanation: decoded.explanation,
        }
    }

    #[test]
    fn the_client_payload_never_contains_the_solution() {
        let q = question();
        let json = serde_json::to_string(&to_out(&q)).expect("serialize");
        assert!(!json.contains("canonical_answer"));
        assert!(!json.contains("explanation"));
        // The answer string may legitimately appear among the options, but
        // nothing marks which one it is.
        assert!(!json.contains("correct"));
    }

    #[test]
    fn mode_is_derived_from_the_option_set() {
        let mut q = question();
        assert_eq!(to_out(&q).mode, AnswerMode::MultipleChoice);
        q.options = None;
        assert_eq!(to_out(&q).mode, AnswerMode::FillIn);
    }

    #[test]
    fn submissions_deserialize_with_and_without_an_answer() {
        let submitted: AnswerIn = serde_json::from_str(r#"{"answer":"1kΩ ±5%"}"#).expect("in");
        assert_eq!(submitted.answer.as_deref(), Some("1kΩ ±5%"));
        let timeout: AnswerIn = serde_json::from_str(r#"{"answer":null}"#).expect("in");
        assert!(timeout.answer.is_none());
    }
}
