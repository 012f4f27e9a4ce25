//! Definition order facade
//!
//! Runs the full pipeline against a [`ConceptSource`]:
//!
//! 1. one vertex per concept (plus TOP)
//! 2. one `add_uses(used, concept)` per referenced concept
//! 3. cycle detection and condensation
//! 4. destructive topological sort
//!
//! and keeps the result as an immutable, queryable order.

use rustc_hash::{FxHashMap, FxHashSet};
use tracing::info;

use crate::config::OrderConfig;
use crate::errors::Result;
use crate::features::definition_order::domain::OrderStats;
use crate::features::definition_order::infrastructure::DependencyGraphBuilder;
use crate::features::definition_order::ports::ConceptSource;
use crate::shared::models::ConceptId;

/// Processing order of concepts for classification
#[derive(Debug, Clone)]
pub struct DefinitionOrder {
    order: Vec<ConceptId>,
    positions: FxHashMap<ConceptId, usize>,
    /// Cyclic concepts in registry order, and the same set for lookups
    cyclic: Vec<ConceptId>,
    cyclic_index: FxHashSet<ConceptId>,
    stats: OrderStats,
}

impl DefinitionOrder {
    /// Compute the definition order of every concept in `source`
    pub fn compute<S>(source: &S, config: &OrderConfig) -> Result<Self>
    where
        S: ConceptSource + ?Sized,
    {
        config.validate()?;

        let concepts = source.concepts();
        let capacity = config.expected_concepts.max(concepts.len());
        let mut builder = DependencyGraphBuilder::with_capacity(config.ordering.clone(), capacity);

        builder.initialize(concepts.iter().cloned());
        for concept in &concepts {
            for used in source.uses_of(concept) {
                builder.add_uses(&used, concept);
            }
        }

        Self::from_builder(builder, config)
    }

    /// Finish a computation from a builder the caller populated directly
    pub fn from_builder(builder: DependencyGraphBuilder, config: &OrderConfig) -> Result<Self> {
        let condensed = builder.compute_cycles(config.verify_condensation)?;
        let cyclic = condensed.cyclic_concepts().to_vec();
        let cyclic_index = cyclic.iter().cloned().collect();
        let stats = condensed.stats();

        let order = condensed.compute_definition_order()?;
        let positions = order
            .iter()
            .enumerate()
            .map(|(i, concept)| (concept.clone(), i))
            .collect();

        info!(
            "Definition order computed: {} concepts, {} edges, {} cyclic ({} components, largest {})",
            stats.concepts,
            stats.edges,
            stats.cyclic_concepts,
            stats.cyclic_components,
            stats.largest_component
        );

        Ok(Self {
            order,
            positions,
            cyclic,
            cyclic_index,
            stats,
        })
    }

    /// Whether `concept` is part of a reference cycle (or is a
    /// TOP-equivalent) and so cannot use definition-based shortcuts
    pub fn is_cyclic(&self, concept: &ConceptId) -> bool {
        self.cyclic_index.contains(concept)
    }

    pub fn cyclic_concepts(&self) -> &[ConceptId] {
        &self.cyclic
    }

    /// Index of `concept` in the order
    pub fn position(&self, concept: &ConceptId) -> Option<usize> {
        self.positions.get(concept).copied()
    }

    /// Whether `a` is processed before `b`; `None` if either is absent
    pub fn precedes(&self, a: &ConceptId, b: &ConceptId) -> Option<bool> {
        Some(self.position(a)? < self.position(b)?)
    }

    pub fn concepts(&self) -> &[ConceptId] {
        &self.order
    }

    pub fn iter(&self) -> std::slice::Iter<'_, ConceptId> {
        self.order.iter()
    }

    /// Number of concepts in the order, TOP and BOTTOM included
    pub fn len(&self) -> usize {
        self.order.len()
    }

    /// Always `false`: TOP and BOTTOM are always present
    pub fn is_empty(&self) -> bool {
        self.order.is_empty()
    }

    pub fn stats(&self) -> OrderStats {
        self.stats
    }

    pub fn into_vec(self) -> Vec<ConceptId> {
        self.order
    }
}

impl<'a> IntoIterator for &'a DefinitionOrder {
    type Item = &'a ConceptId;
    type IntoIter = std::slice::Iter<'a, ConceptId>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::Preset;
    use crate::errors::OrderError;
    use crate::features::definition_order::domain::ConceptOrdering;
    use crate::features::definition_order::infrastructure::ConceptSnapshot;

    fn c(name: &str) -> ConceptId {
        ConceptId::named(name)
    }

    #[test]
    fn test_compute_from_snapshot() {
        let snapshot = ConceptSnapshot::new()
            .with_concepts(["Animal", "Dog", "Cat"])
            .with_definition("Dog", ["Animal"])
            .with_definition("Cat", ["Animal"]);

        let order = DefinitionOrder::compute(&snapshot, &OrderConfig::default()).unwrap();

        assert_eq!(
            order.concepts(),
            &[ConceptId::Top, c("Cat"), c("Dog"), c("Animal"), ConceptId::Bottom]
        );
        assert!(order.cyclic_concepts().is_empty());
        assert_eq!(order.position(&c("Animal")), Some(3));
        assert_eq!(order.precedes(&c("Dog"), &c("Animal")), Some(true));
        assert_eq!(order.precedes(&c("Dog"), &c("Ghost")), None);
    }

    #[test]
    fn test_cyclic_queries() {
        let snapshot = ConceptSnapshot::new()
            .with_definition("P", ["Q"])
            .with_definition("Q", ["P"])
            .with_definition("R", [ConceptId::Top]);

        let order = DefinitionOrder::compute(&snapshot, &OrderConfig::default()).unwrap();

        assert!(order.is_cyclic(&c("P")));
        assert!(order.is_cyclic(&c("Q")));
        assert!(order.is_cyclic(&c("R")));
        assert!(!order.is_cyclic(&ConceptId::Top));
        assert_eq!(order.stats().cyclic_concepts, 3);
        assert_eq!(order.len(), 5);
    }

    #[test]
    fn test_invalid_config_is_rejected() {
        let config = OrderConfig::from_preset(Preset::Fast).expected_concepts(usize::MAX);
        let result = DefinitionOrder::compute(&ConceptSnapshot::new(), &config);

        assert!(matches!(result, Err(OrderError::Config(_))));
    }

    #[test]
    fn test_from_builder() {
        let mut builder = DependencyGraphBuilder::new(ConceptOrdering::Insertion);
        builder.initialize([c("A"), c("B")]);
        builder.add_uses(&c("A"), &c("B"));

        let order = DefinitionOrder::from_builder(builder, &OrderConfig::from_preset(Preset::Fast))
            .unwrap();

        let names: Vec<String> = order.iter().map(ToString::to_string).collect();
        assert_eq!(names, vec!["TOP", "B", "A", "BOTTOM"]);
    }
}
