//! In-memory concept source
//!
//! A materialized snapshot of concept definitions, kept in insertion order so
//! that insertion-ordered computations are reproducible for a fixed input.

use rustc_hash::FxHashMap;

use crate::features::definition_order::ports::ConceptSource;
use crate::shared::models::ConceptId;

#[derive(Debug, Clone, Default)]
pub struct ConceptSnapshot {
    concepts: Vec<ConceptId>,
    definitions: FxHashMap<ConceptId, Vec<ConceptId>>,
}

impl ConceptSnapshot {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a concept with no definition yet; returns `false` if known
    pub fn add_concept(&mut self, concept: ConceptId) -> bool {
        if self.definitions.contains_key(&concept) {
            return false;
        }
        self.definitions.insert(concept.clone(), Vec::new());
        self.concepts.push(concept);
        true
    }

    /// Record that the definition of `concept` references `uses`
    ///
    /// Registers `concept` if needed. Referenced concepts are not registered;
    /// call [`add_concept`](Self::add_concept) for them as well.
    pub fn add_definition<I>(&mut self, concept: ConceptId, uses: I)
    where
        I: IntoIterator<Item = ConceptId>,
    {
        self.add_concept(concept.clone());
        if let Some(existing) = self.definitions.get_mut(&concept) {
            for used in uses {
                if !existing.contains(&used) {
                    existing.push(used);
                }
            }
        }
    }

    /// Builder: Register concepts
    pub fn with_concepts<I, C>(mut self, concepts: I) -> Self
    where
        I: IntoIterator<Item = C>,
        C: Into<ConceptId>,
    {
        for concept in concepts {
            self.add_concept(concept.into());
        }
        self
    }

    /// Builder: Add a definition
    pub fn with_definition<I, C>(mut self, concept: impl Into<ConceptId>, uses: I) -> Self
    where
        I: IntoIterator<Item = C>,
        C: Into<ConceptId>,
    {
        self.add_definition(concept.into(), uses.into_iter().map(Into::into));
        self
    }

    pub fn len(&self) -> usize {
        self.concepts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.concepts.is_empty()
    }
}

impl ConceptSource for ConceptSnapshot {
    fn concepts(&self) -> Vec<ConceptId> {
        self.concepts.clone()
    }

    fn uses_of(&self, concept: &ConceptId) -> Vec<ConceptId> {
        self.definitions.get(concept).cloned().unwrap_or_default()
    }
}
