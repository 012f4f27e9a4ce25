//! Topological sequencer
//!
//! Consumes a condensed graph and produces the definition order:
//!
//! ```text
//! TOP, <TOP-equivalents>, <peeled body>, BOTTOM
//! ```
//!
//! The body is peeled by out-degree. A vertex is ready once nothing left in
//! the graph uses it, i.e. every concept whose definition references it has
//! already been emitted. So a concept always comes before the concepts its
//! definition references, except inside a collapsed cycle where the whole
//! group is emitted together.

use rustc_hash::FxHashSet;
use tracing::{debug, error};

use super::condenser::CondensedGraph;
use crate::errors::{OrderError, Result};
use crate::features::definition_order::domain::ReadyQueue;
use crate::shared::models::ConceptId;
use petgraph::visit::NodeIndexable;
use petgraph::Direction;

#[cfg(feature = "trace")]
use tracing::trace;

impl CondensedGraph {
    /// Produce the full definition order, destroying the graph
    ///
    /// TOP-equivalents are hoisted next to TOP before anything else. When a
    /// TOP-equivalent also belongs to a collapsed cycle, hoisting wins: it
    /// leaves the group, and the rest of the group is emitted together when
    /// its representative is peeled.
    ///
    /// Fails with [`OrderError::UnsortedResidue`] if vertices remain after
    /// peeling, which means a cycle escaped condensation.
    pub fn compute_definition_order(self) -> Result<Vec<ConceptId>> {
        let CondensedGraph {
            mut graph,
            top,
            registry,
            ordering,
            ..
        } = self;

        let mut order = Vec::with_capacity(graph.node_count() + 1);
        let mut emitted: FxHashSet<ConceptId> = FxHashSet::default();
        let mut emit = |concept: ConceptId| {
            if emitted.insert(concept.clone()) {
                #[cfg(feature = "trace")]
                trace!("emit {}", concept);
                order.push(concept);
            }
        };

        emit(ConceptId::Top);
        for concept in registry.equivalents(&ConceptId::Top).cloned() {
            emit(concept);
        }

        if let Some(top) = top {
            graph.remove_node(top);
        }

        let mut out_degree = vec![0usize; graph.node_bound()];
        let mut ready = ReadyQueue::new(&ordering);
        for idx in graph.node_indices() {
            let degree = graph.neighbors_directed(idx, Direction::Outgoing).count();
            out_degree[idx.index()] = degree;
            if degree == 0 {
                ready.push(graph[idx].clone(), idx);
            }
        }

        while let Some((concept, idx)) = ready.pop() {
            for member in registry.all_equivalents(&concept) {
                emit(member);
            }

            for source in graph.neighbors_directed(idx, Direction::Incoming) {
                let degree = &mut out_degree[source.index()];
                *degree -= 1;
                if *degree == 0 {
                    ready.push(graph[source].clone(), source);
                }
            }

            graph.remove_node(idx);
        }

        if graph.node_count() > 0 {
            let concepts: Vec<ConceptId> = graph
                .node_indices()
                .map(|idx| graph[idx].clone())
                .collect();
            error!("Failed to sort {} concepts", concepts.len());
            return Err(OrderError::UnsortedResidue { concepts });
        }

        emit(ConceptId::Bottom);

        debug!("Sequenced {} concepts", order.len());
        Ok(order)
    }
}
