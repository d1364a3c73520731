//! The question engine façade: policy table, generation, judging.
//!
//! This module owns:
//!   - the difficulty → distractor-policy table (built-in or TOML overrides)
//!   - question assembly (sample bands → decode → option set)
//!   - the judging entry point the session layer calls
//!
//! Every call is independent and side-effect-free apart from the entropy it
//! draws, so one engine can serve any number of concurrent sessions.

use rand::{thread_rng, Rng};
use tracing::{debug, info, instrument, warn};

use crate::bands::sample_bands;
use crate::config::{load_engine_config_from_env, Policies};
use crate::distractor::generate_options;
use crate::domain::{AnswerMode, Question, QuestionFormat, ResistorType, Verdict};
use crate::error::EngineError;
use crate::logic;
use crate::resistance::decode;
use crate::util::trunc_for_log;

#[derive(Clone, Debug)]
pub struct QuestionEngine {
    policies: Policies,
}

impl QuestionEngine {
    /// Build from the environment: TOML overrides when ENGINE_CONFIG_PATH is
    /// set and parses, built-in policies otherwise.
    #[instrument(level = "info", skip_all)]
    pub fn new() -> Self {
        let config = load_engine_config_from_env().unwrap_or_default();
        Self::with_policies(config.policies)
    }

    pub fn with_policies(policies: Policies) -> Self {
        info!(
            target: "ohmcode",
            easy = policies.easy.multipliers.len(),
            standard = policies.standard.multipliers.len(),
            medium = policies.medium.multipliers.len(),
            "Engine policies loaded"
        );
        Self { policies }
    }

    /// Generate a fresh question using thread-local randomness.
    pub fn generate_question(
        &self,
        resistor_type: ResistorType,
        format: &QuestionFormat,
    ) -> Result<Question, EngineError> {
        self.generate_question_with(&mut thread_rng(), resistor_type, format)
    }

    /// Generate with an injected random source. Seed it (`StdRng::seed_from_u64`)
    /// for reproducible questions in tests.
    #[instrument(level = "info", skip(self, rng, format), fields(mode = ?format.mode, difficulty = ?format.difficulty))]
    pub fn generate_question_with<R: Rng + ?Sized>(
        &self,
        rng: &mut R,
        resistor_type: ResistorType,
        format: &QuestionFormat,
    ) -> Result<Question, EngineError> {
        // Reject bad configuration before consuming entropy.
        if format.mode == AnswerMode::MultipleChoice && !(2..=4).contains(&format.option_count) {
            return Err(EngineError::InvalidOptionCount(format.option_count));
        }

        let bands = sample_bands(rng, resistor_type);
        let decoded = decode(&bands)?;

        let options = match format.mode {
            AnswerMode::MultipleChoice => {
                let policy = self.policies.get(format.difficulty);
                let opts =
                    generate_options(rng, decoded.ohms, &decoded.tolerance, format.option_count, policy)?;
                if opts.len() < format.option_count {
                    warn!(
                        target: "question",
                        produced = opts.len(),
                        requested = format.option_count,
                        "Serving a short option set"
                    );
                }
                Some(opts)
            }
            AnswerMode::FillIn => None,
        };

        info!(target: "question", ohms = decoded.ohms, answer = %decoded.canonical, "Generated question");
        debug!(target: "question", trace = %trunc_for_log(&decoded.explanation, 160), "Decode trace");

        Ok(Question {
            resistor_type,
            bands,
            ohms: decoded.ohms,
            tolerance: decoded.tolerance,
            canonical_answer: decoded.canonical,
            options,
            explanation: decoded.explanation,
        })
    }

    /// Judge a submitted answer against a question produced by this engine.
    #[instrument(level = "info", skip(self, question, submitted), fields(answered = submitted.is_some()))]
    pub fn judge_answer(&self, question: &Question, submitted: Option<&str>) -> Verdict {
        logic::judge_answer(question, submitted)
    }
}

impl Default for QuestionEngine {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    use super::*;
    use crate::colors::Color;
    use crate::domain::Difficulty;

    fn engine() -> QuestionEngine {
        QuestionEngine::with_policies(Policies::default())
    }

    #[test]
    fn multiple_choice_questions_carry_a_full_unique_option_set() {
        let engine = engine();
        let mut rng = StdRng::seed_from_u64(42);
        for _ in 0..100 {
            let q = engine
                .generate_question_with(&mut rng, ResistorType::FourBand, &QuestionFormat::multiple_choice(4))
                .expect("question");
            assert_ne!(q.bands[0], Color::Black);
            let options = q.options.as_ref().expect("options");
            assert_eq!(options.len(), 4);
            let hits = options.iter().filter(|o| **o == q.canonical_answer).count();
            assert_eq!(hits, 1);
        }
    }

    #[test]
    fn fill_in_questions_have_no_options() {
        let engine = engine();
        let mut rng = StdRng::seed_from_u64(1);
        let q = engine
            .generate_question_with(&mut rng, ResistorType::FiveBand, &QuestionFormat::fill_in())
            .expect("question");
        assert!(q.options.is_none());
        assert_eq!(q.bands.len(), 5);
    }

    #[test]
    fn out_of_range_option_counts_are_rejected_not_clamped() {
        let engine = engine();
        let mut rng = StdRng::seed_from_u64(2);
        for count in [0, 1, 5, 10] {
            let err = engine
                .generate_question_with(&mut rng, ResistorType::FourBand, &QuestionFormat::multiple_choice(count))
                .expect_err("must reject");
            assert_eq!(err, EngineError::InvalidOptionCount(count));
        }
    }

    #[test]
    fn fill_in_ignores_the_option_count_field() {
        let engine = engine();
        let mut rng = StdRng::seed_from_u64(6);
        let format = QuestionFormat {
            mode: AnswerMode::FillIn,
            option_count: 99,
            difficulty: Difficulty::Easy,
        };
        assert!(engine.generate_question_with(&mut rng, ResistorType::FourBand, &format).is_ok());
    }

    #[test]
    fn identical_seeds_reproduce_identical_questions() {
        let engine = engine();
        let format = QuestionFormat::multiple_choice(3);
        let mut a = StdRng::seed_from_u64(77);
        let mut b = StdRng::seed_from_u64(77);
        let qa = engine.generate_question_with(&mut a, ResistorType::FiveBand, &format).expect("qa");
        let qb = engine.generate_question_with(&mut b, ResistorType::FiveBand, &format).expect("qb");
        assert_eq!(qa.bands, qb.bands);
        assert_eq!(qa.canonical_answer, qb.canonical_answer);
        assert_eq!(qa.options, qb.options);
    }

    #[test]
    fn generated_questions_judge_their_own_answer_correct() {
        let engine = engine();
        let mut rng = StdRng::seed_from_u64(13);
        let q = engine
            .generate_question_with(&mut rng, ResistorType::FourBand, &QuestionFormat::multiple_choice(2))
            .expect("question");
        assert!(engine.judge_answer(&q, Some(q.canonical_answer.as_str())).correct);
        assert!(!engine.judge_answer(&q, None).correct);
        assert!(!engine.judge_answer(&q, Some("")).correct);
    }

    #[test]
    fn questions_survive_the_persistence_round_trip() {
        let engine = engine();
        let mut rng = StdRng::seed_from_u64(99);
        let q = engine
            .generate_question_with(&mut rng, ResistorType::FourBand, &QuestionFormat::multiple_choice(4))
            .expect("question");
        let json = serde_json::to_string(&q).expect("serialize");
        let back: Question = serde_json::from_str(&json).expect("deserialize");
        assert_eq!(back.bands, q.bands);
        assert_eq!(back.canonical_answer, q.canonical_answer);
        assert_eq!(back.options, q.options);
        assert_eq!(back.explanation, q.explanation);
    }
}
