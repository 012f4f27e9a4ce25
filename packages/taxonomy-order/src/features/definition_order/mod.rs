//! # Definition Order
//!
//! Computes the order in which a classifier processes the concepts of a
//! knowledge base, and which concepts take part in reference cycles.
//!
//! ## Pipeline
//! - **Builder**: uses graph, edge `X → Y` when Y's definition references X;
//!   uses of TOP become TOP-equivalents instead of edges
//! - **Condenser**: strongly connected components (Kosaraju) collapsed into
//!   one representative each, members tracked in the equivalence registry
//! - **Sequencer**: peels the condensed graph by out-degree, expanding each
//!   representative into its equivalence group
//!
//! ## Usage
//! ```text
//! use taxonomy_order::{ConceptSnapshot, DefinitionOrder, OrderConfig};
//!
//! let snapshot = ConceptSnapshot::new()
//!     .with_concepts(["Animal", "Dog"])
//!     .with_definition("Dog", ["Animal"]);
//!
//! let order = DefinitionOrder::compute(&snapshot, &OrderConfig::default())?;
//! // TOP, Dog, Animal, BOTTOM
//! ```

pub mod application;
pub mod domain;
pub mod infrastructure;
pub mod ports;

pub use application::DefinitionOrder;
pub use domain::{
    ConceptComparator, ConceptIter, ConceptOrdering, ConceptSet, EquivalenceRegistry, OrderStats,
    ReadyQueue,
};
pub use infrastructure::{CondensedGraph, ConceptSnapshot, DependencyGraphBuilder};
pub use ports::ConceptSource;
