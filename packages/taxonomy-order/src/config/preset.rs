//! Preset configurations

use std::str::FromStr;

use serde::Serialize;

use super::error::ConfigError;

/// Configuration preset
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Preset {
    /// Insertion-order containers, no acyclicity check after condensation
    ///
    /// Ties between simultaneously ready concepts follow discovery order.
    Fast,

    /// Lexical comparator, acyclicity check after condensation
    ///
    /// Output is reproducible across runs.
    #[default]
    Deterministic,
}

impl Preset {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Fast => "fast",
            Self::Deterministic => "deterministic",
        }
    }
}

impl FromStr for Preset {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "fast" => Ok(Self::Fast),
            "deterministic" => Ok(Self::Deterministic),
            _ => Err(ConfigError::UnknownPreset(s.to_string())),
        }
    }
}
