//! Error types for taxonomy-order
//!
//! Everything except configuration errors signals a defect in the ordering
//! algorithm itself, never bad input: callers should treat those as fatal and
//! must not fall back to a partial order.

use thiserror::Error;

use crate::config::ConfigError;
use crate::shared::models::ConceptId;

/// Main error type for definition-order computations
#[derive(Debug, Error)]
pub enum OrderError {
    /// The condensed graph still contains a cycle
    #[error("Cycle survived condensation among {} concepts: {}", .concepts.len(), join(.concepts))]
    ResidualCycle { concepts: Vec<ConceptId> },

    /// The destructive sort left vertices behind
    #[error("Failed to sort {} concepts: {}", .concepts.len(), join(.concepts))]
    UnsortedResidue { concepts: Vec<ConceptId> },

    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),
}

impl OrderError {
    /// Whether the error is an internal invariant violation
    pub fn is_invariant_violation(&self) -> bool {
        matches!(
            self,
            OrderError::ResidualCycle { .. } | OrderError::UnsortedResidue { .. }
        )
    }

    /// Concepts involved in an invariant violation
    pub fn concepts(&self) -> &[ConceptId] {
        match self {
            OrderError::ResidualCycle { concepts } | OrderError::UnsortedResidue { concepts } => {
                concepts
            }
            OrderError::Config(_) => &[],
        }
    }
}

fn join(concepts: &[ConceptId]) -> String {
    concepts
        .iter()
        .map(ConceptId::to_string)
        .collect::<Vec<_>>()
        .join(", ")
}

/// Result type alias for taxonomy-order operations
pub type Result<T> = std::result::Result<T, OrderError>;
