//! Engine error types.

use thiserror::Error;

/// Failures surfaced at the engine's public boundaries.
///
/// Invalid configuration is rejected, never clamped; a band sequence that
/// breaks the structural invariants is rejected, never decoded on a
/// best-effort basis.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum EngineError {
    #[error("option count {0} is out of range (expected 2..=4)")]
    InvalidOptionCount(usize),

    #[error("unknown resistor type: {0}")]
    UnknownResistorType(String),

    #[error("unknown difficulty: {0}")]
    UnknownDifficulty(String),

    /// Wrong band count, a leading black band, or a color outside its
    /// positional role.
    #[error("malformed bands: {0}")]
    MalformedBands(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn messages_name_the_offending_input() {
        let err = EngineError::InvalidOptionCount(7);
        assert_eq!(err.to_string(), "option count 7 is out of range (expected 2..=4)");
        let err = EngineError::UnknownResistorType("six_band".into());
        assert_eq!(err.to_string(), "unknown resistor type: six_band");
    }
}
