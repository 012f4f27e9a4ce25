//! Domain types: ordering strategy, equivalence registry, statistics

pub mod equivalence;
pub mod ordering;
pub mod stats;

pub use equivalence::EquivalenceRegistry;
pub use ordering::{ConceptComparator, ConceptIter, ConceptOrdering, ConceptSet, ReadyQueue};
pub use stats::OrderStats;
