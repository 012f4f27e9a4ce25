//! Equivalence registry
//!
//! Maps a representative concept to the concepts that are treated as
//! equivalent to it for ordering purposes. Entries come from two places:
//! concepts whose definition uses TOP directly (registered under TOP), and
//! members of collapsed reference cycles (registered under the cycle's
//! representative).
//!
//! A concept without an entry is its own singleton class.

use std::cmp::Ordering;

use rustc_hash::FxHashMap;

use super::ordering::{ConceptIter, ConceptOrdering, ConceptSet};
use crate::shared::models::ConceptId;

#[derive(Debug, Clone, Default)]
pub struct EquivalenceRegistry {
    ordering: ConceptOrdering,
    groups: FxHashMap<ConceptId, ConceptSet>,
}

impl EquivalenceRegistry {
    pub fn new(ordering: ConceptOrdering) -> Self {
        Self {
            ordering,
            groups: FxHashMap::default(),
        }
    }

    /// Register `member` as equivalent to `representative`
    ///
    /// Returns `true` if the member was newly added.
    pub fn add_equivalent(&mut self, representative: &ConceptId, member: ConceptId) -> bool {
        let ordering = &self.ordering;
        self.groups
            .entry(representative.clone())
            .or_insert_with(|| ConceptSet::new(ordering))
            .insert(member)
    }

    /// Fold `member` and everything registered under it into the group of
    /// `representative`
    ///
    /// `member` stops being a representative. Returns the number of concepts
    /// newly added to the representative's group.
    pub fn absorb(&mut self, representative: &ConceptId, member: ConceptId) -> usize {
        let carried = self.groups.remove(&member);

        let mut added = usize::from(self.add_equivalent(representative, member));
        for concept in carried.into_iter().flat_map(ConceptSet::into_vec) {
            if &concept != representative && self.add_equivalent(representative, concept) {
                added += 1;
            }
        }
        added
    }

    /// Registered equivalents of `representative` (empty if none)
    pub fn equivalents(&self, representative: &ConceptId) -> ConceptIter<'_> {
        self.groups
            .get(representative)
            .map_or_else(ConceptIter::empty, ConceptSet::iter)
    }

    /// Full equivalence group of `representative`, the representative included
    ///
    /// Comparator ordering places the representative at its sorted position;
    /// insertion ordering places it first.
    pub fn all_equivalents(&self, representative: &ConceptId) -> Vec<ConceptId> {
        let Some(group) = self.groups.get(representative) else {
            return vec![representative.clone()];
        };

        if group.contains(representative) {
            return group.to_vec();
        }

        match &self.ordering {
            ConceptOrdering::Insertion => std::iter::once(representative.clone())
                .chain(group.iter().cloned())
                .collect(),
            ConceptOrdering::Comparator(cmp) => {
                let mut full = group.to_vec();
                let at = full.partition_point(|c| cmp(c, representative) == Ordering::Less);
                full.insert(at, representative.clone());
                full
            }
        }
    }

    pub fn is_representative(&self, concept: &ConceptId) -> bool {
        self.groups.contains_key(concept)
    }

    /// Number of representatives with at least one registered equivalent
    pub fn len(&self) -> usize {
        self.groups.len()
    }

    pub fn is_empty(&self) -> bool {
        self.groups.is_empty()
    }

    pub fn ordering(&self) -> &ConceptOrdering {
        &self.ordering
    }
}
