//! Graph machinery: builder, condenser, sequencer and the in-memory source

pub mod condenser;
pub mod dependency_graph;
pub mod sequencer;
pub mod snapshot;

pub use condenser::CondensedGraph;
pub use dependency_graph::DependencyGraphBuilder;
pub use snapshot::ConceptSnapshot;
