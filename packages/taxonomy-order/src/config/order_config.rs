//! Definition-order configuration

use std::cmp::Ordering;

use super::error::{ConfigError, ConfigResult};
use super::preset::Preset;
use crate::features::definition_order::domain::ConceptOrdering;
use crate::shared::models::ConceptId;

/// Upper bound for `expected_concepts` (arena pre-allocation hint)
pub const MAX_CAPACITY_HINT: usize = 1 << 24;

/// Configuration of one definition-order computation
#[derive(Debug, Clone)]
pub struct OrderConfig {
    /// Container strategy for equivalence groups and the ready queue
    pub ordering: ConceptOrdering,

    /// Check that the graph is acyclic right after condensation
    ///
    /// The residue check after sorting runs regardless.
    pub verify_condensation: bool,

    /// Capacity hint for the vertex arena (0..=MAX_CAPACITY_HINT)
    pub expected_concepts: usize,
}

impl OrderConfig {
    pub fn from_preset(preset: Preset) -> Self {
        match preset {
            Preset::Fast => Self {
                ordering: ConceptOrdering::Insertion,
                verify_condensation: false,
                expected_concepts: 0,
            },
            Preset::Deterministic => Self {
                ordering: ConceptOrdering::lexical(),
                verify_condensation: true,
                expected_concepts: 0,
            },
        }
    }

    /// Validate configuration
    pub fn validate(&self) -> ConfigResult<()> {
        if self.expected_concepts > MAX_CAPACITY_HINT {
            return Err(ConfigError::range_with_hint(
                "expected_concepts",
                self.expected_concepts,
                0,
                MAX_CAPACITY_HINT,
                "Capacity hint is only a pre-allocation size",
            ));
        }

        Ok(())
    }

    /// Builder: Set ordering strategy
    pub fn with_ordering(mut self, ordering: ConceptOrdering) -> Self {
        self.ordering = ordering;
        self
    }

    /// Builder: Order containers by a comparator
    pub fn with_comparator<F>(mut self, cmp: F) -> Self
    where
        F: Fn(&ConceptId, &ConceptId) -> Ordering + Send + Sync + 'static,
    {
        self.ordering = ConceptOrdering::by(cmp);
        self
    }

    /// Builder: Enable/disable the post-condensation acyclicity check
    pub fn verify_condensation(mut self, v: bool) -> Self {
        self.verify_condensation = v;
        self
    }

    /// Builder: Set arena capacity hint
    pub fn expected_concepts(mut self, v: usize) -> Self {
        self.expected_concepts = v;
        self
    }
}

impl Default for OrderConfig {
    fn default() -> Self {
        Self::from_preset(Preset::default())
    }
}
