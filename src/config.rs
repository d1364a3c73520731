//! Loading engine configuration (distractor policy overrides) from TOML.
//!
//! See `EngineConfig` and `Policies` for the expected schema. Every field is
//! optional; anything missing keeps the built-in value.

use serde::Deserialize;
use tracing::{error, info};

use crate::distractor::DistractorPolicy;
use crate::domain::Difficulty;

#[derive(Clone, Debug, Deserialize, Default)]
pub struct EngineConfig {
  #[serde(default)]
  pub policies: Policies,
}

/// Distractor policy per difficulty tier. A TOML file can override any tier
/// independently, e.g.:
///
/// ```toml
/// [policies.easy]
/// multipliers = [0.1, 10.0]
/// round_to_ohm = true
/// ```
#[derive(Clone, Debug, Deserialize)]
pub struct Policies {
  #[serde(default = "DistractorPolicy::easy")]
  pub easy: DistractorPolicy,
  #[serde(default = "DistractorPolicy::standard")]
  pub standard: DistractorPolicy,
  #[serde(default = "DistractorPolicy::medium")]
  pub medium: DistractorPolicy,
}

impl Default for Policies {
  fn default() -> Self {
    Self {
      easy: DistractorPolicy::easy(),
      standard: DistractorPolicy::standard(),
      medium: DistractorPolicy::medium(),
    }
  }
}

impl Policies {
  pub fn get(&self, difficulty: Difficulty) -> &DistractorPolicy {
    match difficulty {
      Difficulty::Easy => &self.easy,
      Difficulty::Standard => &self.standard,
      Difficulty::Medium => &self.medium,
    }
  }
}

/// Attempt to load `EngineConfig` from ENGINE_CONFIG_PATH. On any parsing or
/// IO error, returns None and the engine keeps its built-in policies.
pub fn load_engine_config_from_env() -> Option<EngineConfig> {
  let path = std::env::var("ENGINE_CONFIG_PATH").ok()?;
  match std::fs::read_to_string(&path) {
    Ok(s) => match toml::from_str::<EngineConfig>(&s) {
      Ok(cfg) => {
        info!(target: "ohmcode", %path, "Loaded engine config (TOML)");
        Some(cfg)
      }
      Err(e) => {
        error!(target: "ohmcode", %path, error = %e, "Failed to parse TOML config");
        None
      }
    },
    Err(e) => {
      error!(target: "ohmcode", %path, error = %e, "Failed to read TOML config file");
      None
    }
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn overriding_one_tier_keeps_the_other_defaults() {
    let cfg: EngineConfig = toml::from_str(
      r#"
      [policies.easy]
      multipliers = [2.0]
      round_to_ohm = true
      "#,
    )
    .expect("config");
    assert_eq!(cfg.policies.easy.multipliers, vec![2.0]);
    assert!(cfg.policies.easy.round_to_ohm);
    assert_eq!(cfg.policies.standard.multipliers, DistractorPolicy::standard().multipliers);
    assert_eq!(cfg.policies.medium.multipliers, DistractorPolicy::medium().multipliers);
  }

  #[test]
  fn an_empty_document_is_the_built_in_config() {
    let cfg: EngineConfig = toml::from_str("").expect("config");
    assert_eq!(cfg.policies.get(Difficulty::Easy).multipliers, DistractorPolicy::easy().multipliers);
    assert!(!cfg.policies.get(Difficulty::Standard).round_to_ohm);
  }
}
