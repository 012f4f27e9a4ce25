//! Dependency graph builder
//!
//! Directed graph over concept identifiers where an edge `X → Y` means
//! "Y's definition references X" (X is used by Y). Vertices live in a
//! petgraph `StableDiGraph` so that indices stay valid while condensation and
//! sequencing remove vertices from it.
//!
//! TOP is special-cased: every concept implicitly uses TOP, so a definition
//! that mentions TOP is recorded in the equivalence registry instead of as an
//! edge. Materializing those edges would make TOP adjacent to everything.
//! BOTTOM never becomes a vertex.

use petgraph::stable_graph::{NodeIndex, StableDiGraph};
use rustc_hash::FxHashMap;
use tracing::warn;

use crate::features::definition_order::domain::{
    ConceptIter, ConceptOrdering, EquivalenceRegistry,
};
use crate::shared::models::ConceptId;

/// Builder for the uses graph of one computation
///
/// The TOP vertex exists from construction on. Consumed by
/// [`compute_cycles`](Self::compute_cycles).
pub struct DependencyGraphBuilder {
    pub(super) graph: StableDiGraph<ConceptId, ()>,

    /// Concept → vertex mapping
    pub(super) nodes: FxHashMap<ConceptId, NodeIndex>,

    pub(super) registry: EquivalenceRegistry,

    pub(super) ordering: ConceptOrdering,
}

impl DependencyGraphBuilder {
    pub fn new(ordering: ConceptOrdering) -> Self {
        Self::with_capacity(ordering, 0)
    }

    /// Create a builder with room for `concepts` vertices
    pub fn with_capacity(ordering: ConceptOrdering, concepts: usize) -> Self {
        let mut builder = Self {
            graph: StableDiGraph::with_capacity(concepts + 1, concepts),
            nodes: FxHashMap::with_capacity_and_hasher(concepts + 1, Default::default()),
            registry: EquivalenceRegistry::new(ordering.clone()),
            ordering,
        };
        builder.add_vertex(ConceptId::Top);
        builder
    }

    /// Create one vertex per concept
    ///
    /// BOTTOM is skipped and concepts already present are ignored, so the
    /// call may be repeated with overlapping inputs.
    pub fn initialize<I>(&mut self, concepts: I)
    where
        I: IntoIterator<Item = ConceptId>,
    {
        for concept in concepts {
            self.add_vertex(concept);
        }
    }

    fn add_vertex(&mut self, concept: ConceptId) -> Option<NodeIndex> {
        if concept.is_bottom() {
            return None;
        }
        if let Some(&idx) = self.nodes.get(&concept) {
            return Some(idx);
        }

        let idx = self.graph.add_node(concept.clone());
        self.nodes.insert(concept, idx);
        Some(idx)
    }

    /// Record that `user`'s definition references `used`
    ///
    /// - `used` is TOP: `user` becomes a TOP-equivalent, no edge
    /// - `used == user`: ignored
    /// - otherwise: edge `used → user` (no parallel edges)
    ///
    /// Concepts that were never passed to [`initialize`](Self::initialize)
    /// violate the builder's contract; the fact is dropped with a warning.
    pub fn add_uses(&mut self, used: &ConceptId, user: &ConceptId) {
        if used == user {
            return;
        }

        let Some(&user_idx) = self.nodes.get(user) else {
            warn!("Ignoring uses fact: {} is not a registered concept", user);
            return;
        };

        if used.is_top() {
            self.registry.add_equivalent(&ConceptId::Top, user.clone());
            return;
        }

        let Some(&used_idx) = self.nodes.get(used) else {
            warn!("Ignoring uses fact: {} is not a registered concept", used);
            return;
        };

        self.graph.update_edge(used_idx, user_idx, ());
    }

    /// Whether `user`'s definition was recorded as referencing `used`
    pub fn has_uses_edge(&self, used: &ConceptId, user: &ConceptId) -> bool {
        match (self.nodes.get(used), self.nodes.get(user)) {
            (Some(&a), Some(&b)) => self.graph.find_edge(a, b).is_some(),
            _ => false,
        }
    }

    pub fn contains(&self, concept: &ConceptId) -> bool {
        self.nodes.contains_key(concept)
    }

    /// Concepts whose definition uses TOP directly
    pub fn top_equivalents(&self) -> ConceptIter<'_> {
        self.registry.equivalents(&ConceptId::Top)
    }

    pub fn registry(&self) -> &EquivalenceRegistry {
        &self.registry
    }

    pub fn ordering(&self) -> &ConceptOrdering {
        &self.ordering
    }

    /// Number of vertices (TOP included)
    pub fn node_count(&self) -> usize {
        self.graph.node_count()
    }

    pub fn edge_count(&self) -> usize {
        self.graph.edge_count()
    }
}
