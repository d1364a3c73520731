//! Ohmcode · Resistor Color-Code Trainer Core
//!
//! Question generation and scoring for resistor color-code practice:
//! - Band sampling (4- and 5-band layouts, leading band never black)
//! - Resistance decoding with canonical Ω/kΩ/MΩ formatting
//! - Difficulty-driven distractor sets for multiple choice
//! - Exact-match judging plus a structured comparison path
//!
//! The embedding session/UI layer owns routing, persistence, and rendering;
//! this crate is pure, synchronous computation. The only side effect of any
//! call is the entropy it draws, and the random source is injectable, so
//! one engine value can serve any number of concurrent sessions.
//!
//! Important env variables:
//!   ENGINE_CONFIG_PATH : path to TOML config (distractor policy overrides)
//!   LOG_LEVEL     : tracing filter, e.g. "debug" or full directives
//!   LOG_FORMAT    : "pretty" (default) or "json"

pub mod bands;
pub mod colors;
pub mod config;
pub mod distractor;
pub mod domain;
pub mod engine;
pub mod error;
pub mod logic;
pub mod protocol;
pub mod resistance;
pub mod telemetry;
mod util;

pub use crate::colors::Color;
pub use crate::distractor::DistractorPolicy;
pub use crate::domain::{AnswerMode, Difficulty, Question, QuestionFormat, ResistorType, Verdict};
pub use crate::engine::QuestionEngine;
pub use crate::error::EngineError;
pub use crate::logic::{compose_answer, judge_answer, ParsedAnswer};
