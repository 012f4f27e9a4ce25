//! Cycle detection and condensation
//!
//! Every strongly connected component with more than one member is a set of
//! mutually recursive definitions. Each such component is collapsed into a
//! single representative vertex: the other members are registered as its
//! equivalents, their edges are re-pointed to the representative and the
//! members are removed from the graph. The result is acyclic.
//!
//! Components come from `kosaraju_scc` and the acyclicity checks use
//! `toposort`; both traverse with explicit stacks, so long definition chains
//! cannot exhaust the call stack.
//!
//! The representative is the first vertex of the component as reported by
//! `kosaraju_scc`. That choice is stable for a given graph but carries no
//! meaning of its own.

use petgraph::algo::{kosaraju_scc, toposort};
use petgraph::stable_graph::{NodeIndex, StableDiGraph};
use petgraph::Direction;
use tracing::{debug, error};

use super::dependency_graph::DependencyGraphBuilder;
use crate::errors::{OrderError, Result};
use crate::features::definition_order::domain::{
    ConceptOrdering, ConceptSet, EquivalenceRegistry, OrderStats,
};
use crate::shared::models::ConceptId;

/// Acyclic uses graph, ready for sequencing
pub struct CondensedGraph {
    pub(super) graph: StableDiGraph<ConceptId, ()>,
    pub(super) top: Option<NodeIndex>,
    pub(super) registry: EquivalenceRegistry,
    pub(super) ordering: ConceptOrdering,
    cyclic: ConceptSet,
    stats: OrderStats,
}

impl DependencyGraphBuilder {
    /// Detect reference cycles and collapse them
    ///
    /// Returns the condensed graph; its [`cyclic_concepts`](CondensedGraph::cyclic_concepts)
    /// are all TOP-equivalents plus every member of a non-trivial component.
    /// With `verify` set, the condensed graph is checked for acyclicity and a
    /// surviving cycle is reported as [`OrderError::ResidualCycle`].
    pub fn compute_cycles(self, verify: bool) -> Result<CondensedGraph> {
        let DependencyGraphBuilder {
            mut graph,
            nodes,
            mut registry,
            ordering,
        } = self;

        let mut stats = OrderStats {
            concepts: graph.node_count(),
            edges: graph.edge_count(),
            top_equivalents: registry.equivalents(&ConceptId::Top).len(),
            ..OrderStats::default()
        };

        let mut cyclic = ConceptSet::new(&ordering);
        cyclic.extend(registry.equivalents(&ConceptId::Top).cloned());

        for component in kosaraju_scc(&graph) {
            if component.len() < 2 {
                continue;
            }

            stats.cyclic_components += 1;
            stats.largest_component = stats.largest_component.max(component.len());
            cyclic.extend(component.iter().map(|&idx| graph[idx].clone()));
            stats.collapsed_concepts += collapse_component(&mut graph, &mut registry, &component);
        }

        stats.cyclic_concepts = cyclic.len();

        debug!(
            "Condensed uses graph: {} components collapsed, {} vertices removed, {} cyclic concepts",
            stats.cyclic_components, stats.collapsed_concepts, stats.cyclic_concepts
        );

        if verify {
            check_acyclic(&graph)?;
        }

        Ok(CondensedGraph {
            graph,
            top: nodes.get(&ConceptId::Top).copied(),
            registry,
            ordering,
            cyclic,
            stats,
        })
    }
}

/// Collapse one component into its first vertex; returns the number of
/// vertices removed
fn collapse_component(
    graph: &mut StableDiGraph<ConceptId, ()>,
    registry: &mut EquivalenceRegistry,
    component: &[NodeIndex],
) -> usize {
    let Some((&rep, members)) = component.split_first() else {
        return 0;
    };
    let representative = graph[rep].clone();

    for &member in members {
        let incoming: Vec<NodeIndex> = graph
            .neighbors_directed(member, Direction::Incoming)
            .collect();
        for source in incoming {
            if source != rep {
                graph.update_edge(source, rep, ());
            }
        }

        let outgoing: Vec<NodeIndex> = graph
            .neighbors_directed(member, Direction::Outgoing)
            .collect();
        for target in outgoing {
            if target != rep {
                graph.update_edge(rep, target, ());
            }
        }

        if let Some(concept) = graph.remove_node(member) {
            registry.absorb(&representative, concept);
        }
    }

    debug!(
        "Collapsed reference cycle of {} concepts into {}",
        component.len(),
        representative
    );

    members.len()
}

/// Fails with [`OrderError::ResidualCycle`] naming every vertex that still
/// sits on a cycle
fn check_acyclic(graph: &StableDiGraph<ConceptId, ()>) -> Result<()> {
    if toposort(graph, None).is_ok() {
        return Ok(());
    }

    let mut concepts: Vec<ConceptId> = kosaraju_scc(graph)
        .into_iter()
        .filter(|component| component.len() > 1)
        .flatten()
        .map(|idx| graph[idx].clone())
        .collect();
    concepts.sort();

    error!(
        "Cycle survived condensation among {} concepts",
        concepts.len()
    );
    Err(OrderError::ResidualCycle { concepts })
}

impl CondensedGraph {
    /// TOP-equivalents and members of collapsed cycles
    pub fn cyclic_concepts(&self) -> &ConceptSet {
        &self.cyclic
    }

    pub fn registry(&self) -> &EquivalenceRegistry {
        &self.registry
    }

    pub fn stats(&self) -> OrderStats {
        self.stats
    }

    /// Vertices left after condensation (TOP included)
    pub fn node_count(&self) -> usize {
        self.graph.node_count()
    }

    pub fn edge_count(&self) -> usize {
        self.graph.edge_count()
    }

    pub fn is_acyclic(&self) -> bool {
        toposort(&self.graph, None).is_ok()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn c(name: &str) -> ConceptId {
        ConceptId::named(name)
    }

    fn builder(names: &[&str], uses: &[(&str, &str)]) -> DependencyGraphBuilder {
        let mut builder = DependencyGraphBuilder::new(ConceptOrdering::lexical());
        builder.initialize(names.iter().map(|n| c(n)));
        for (used, user) in uses {
            builder.add_uses(&c(used), &c(user));
        }
        builder
    }

    #[test]
    fn test_acyclic_graph_is_untouched() {
        let condensed = builder(&["Animal", "Dog", "Cat"], &[("Animal", "Dog"), ("Animal", "Cat")])
            .compute_cycles(true)
            .unwrap();

        assert!(condensed.cyclic_concepts().is_empty());
        assert_eq!(condensed.node_count(), 4);
        assert_eq!(condensed.edge_count(), 2);
        assert!(condensed.registry().is_empty());
    }

    #[test]
    fn test_two_cycle_is_collapsed() {
        let condensed = builder(&["P", "Q"], &[("P", "Q"), ("Q", "P")])
            .compute_cycles(true)
            .unwrap();

        assert_eq!(condensed.cyclic_concepts().to_vec(), vec![c("P"), c("Q")]);
        assert_eq!(condensed.node_count(), 2);
        assert_eq!(condensed.edge_count(), 0);
        assert_eq!(condensed.registry().len(), 1);

        let stats = condensed.stats();
        assert_eq!(stats.cyclic_components, 1);
        assert_eq!(stats.largest_component, 2);
        assert_eq!(stats.collapsed_concepts, 1);
    }

    #[test]
    fn test_external_edges_are_redirected() {
        // Edges: Outer → A, A ⇄ B, B → Inner
        let condensed = builder(
            &["Outer", "A", "B", "Inner"],
            &[("Outer", "A"), ("A", "B"), ("B", "A"), ("B", "Inner")],
        )
        .compute_cycles(true)
        .unwrap();

        assert!(condensed.is_acyclic());
        assert_eq!(condensed.node_count(), 4);
        assert_eq!(condensed.edge_count(), 2);
        assert_eq!(condensed.cyclic_concepts().len(), 2);
    }

    #[test]
    fn test_three_cycle_registers_all_members() {
        let condensed = builder(&["A", "B", "C"], &[("A", "B"), ("B", "C"), ("C", "A")])
            .compute_cycles(true)
            .unwrap();

        assert_eq!(condensed.node_count(), 2);
        let stats = condensed.stats();
        assert_eq!(stats.collapsed_concepts, 2);
        assert_eq!(stats.cyclic_concepts, 3);

        let registry = condensed.registry();
        let total: usize = [c("A"), c("B"), c("C")]
            .iter()
            .map(|rep| registry.equivalents(rep).len())
            .sum();
        assert_eq!(total, 2);
    }

    #[test]
    fn test_top_equivalents_seed_cyclic_set() {
        let mut builder = builder(&["X", "Y"], &[("X", "Y")]);
        builder.add_uses(&ConceptId::Top, &c("X"));

        let condensed = builder.compute_cycles(true).unwrap();

        assert_eq!(condensed.cyclic_concepts().to_vec(), vec![c("X")]);
        assert_eq!(condensed.stats().top_equivalents, 1);
        assert_eq!(condensed.stats().cyclic_components, 0);
    }

    #[test]
    fn test_check_acyclic_reports_residual_cycle() {
        // A ⇄ B survives; C → A hangs off the cycle
        let mut graph: StableDiGraph<ConceptId, ()> = StableDiGraph::new();
        let a = graph.add_node(c("A"));
        let b = graph.add_node(c("B"));
        let c_idx = graph.add_node(c("C"));
        graph.add_edge(b, a, ());
        graph.add_edge(a, b, ());
        graph.add_edge(c_idx, a, ());

        match check_acyclic(&graph) {
            Err(OrderError::ResidualCycle { concepts }) => {
                assert_eq!(concepts, vec![c("A"), c("B")]);
            }
            other => panic!("expected ResidualCycle, got {other:?}"),
        }
    }

    #[test]
    fn test_check_acyclic_accepts_dag() {
        let mut graph: StableDiGraph<ConceptId, ()> = StableDiGraph::new();
        let a = graph.add_node(c("A"));
        let b = graph.add_node(c("B"));
        graph.add_edge(a, b, ());

        assert!(check_acyclic(&graph).is_ok());
    }

    #[test]
    fn test_long_ring_is_collapsed() {
        let names: Vec<String> = (0..20_000).map(|i| format!("R{i:05}")).collect();
        let mut builder = DependencyGraphBuilder::new(ConceptOrdering::lexical());
        builder.initialize(names.iter().map(|n| c(n)));
        for (i, name) in names.iter().enumerate() {
            builder.add_uses(&c(&names[(i + 1) % names.len()]), &c(name));
        }

        let condensed = builder.compute_cycles(true).unwrap();

        assert!(condensed.is_acyclic());
        assert_eq!(condensed.node_count(), 2);
        assert_eq!(condensed.cyclic_concepts().len(), 20_000);
        assert_eq!(condensed.stats().largest_component, 20_000);
    }
}
