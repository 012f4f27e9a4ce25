/*
 * Taxonomy Order - definition order for description-logic classification
 *
 * Feature-First Hexagonal Architecture:
 * - shared/      : Common models (ConceptId)
 * - features/    : Vertical slices (definition_order: domain → infrastructure → application)
 * - config/      : Presets + builder overrides
 *
 * Complexity:
 * - Kosaraju SCC + condensation: O(V + E), iterative
 * - Destructive topological sort: O(V + E) (O((V + E) log V) with a comparator)
 */

#![allow(clippy::new_without_default)] // Default impl not always needed
#![allow(clippy::len_without_is_empty)] // Collection-like types expose len only where meaningful

// ═══════════════════════════════════════════════════════════════════════════
// Module Exports - Feature-First Architecture
// ═══════════════════════════════════════════════════════════════════════════

/// Shared models
pub mod shared;

/// Feature modules
pub mod features;

/// Configuration system
pub mod config;

/// Error types
pub mod errors;

// ═══════════════════════════════════════════════════════════════════════════
// Re-exports for Public API
// ═══════════════════════════════════════════════════════════════════════════

pub use config::{ConfigError, OrderConfig, Preset};
pub use errors::{OrderError, Result};
pub use features::definition_order::{
    ConceptComparator, ConceptIter, ConceptOrdering, ConceptSet, ConceptSnapshot, ConceptSource,
    CondensedGraph, DefinitionOrder, DependencyGraphBuilder, EquivalenceRegistry, OrderStats,
};
pub use shared::models::ConceptId;
