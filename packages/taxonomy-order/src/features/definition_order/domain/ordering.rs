//! Ordering strategy for concept containers
//!
//! Every set and queue used while computing a definition order is created
//! from one [`ConceptOrdering`], chosen once per computation:
//!
//! - `Insertion`: containers iterate in insertion/discovery order
//! - `Comparator`: containers iterate in comparator order, which makes the
//!   resulting definition order fully reproducible
//!
//! The strategy is a tagged enum rather than a trait object hierarchy; the
//! two container types below match on it.

use std::cmp::Ordering;
use std::collections::{btree_set, BTreeSet, BinaryHeap, VecDeque};
use std::fmt;
use std::sync::Arc;

use rustc_hash::FxHashSet;

use crate::shared::models::ConceptId;

/// Caller-supplied total order over concepts
pub type ConceptComparator = Arc<dyn Fn(&ConceptId, &ConceptId) -> Ordering + Send + Sync>;

/// Container strategy, selected once at construction
#[derive(Clone, Default)]
pub enum ConceptOrdering {
    /// Insertion order (no comparator)
    #[default]
    Insertion,

    /// Order by a caller-supplied total order
    Comparator(ConceptComparator),
}

impl ConceptOrdering {
    /// Comparator-based ordering from any total order function
    pub fn by<F>(cmp: F) -> Self
    where
        F: Fn(&ConceptId, &ConceptId) -> Ordering + Send + Sync + 'static,
    {
        Self::Comparator(Arc::new(cmp))
    }

    /// Natural order of [`ConceptId`] (TOP, BOTTOM, then names)
    pub fn lexical() -> Self {
        Self::by(|a, b| a.cmp(b))
    }

    /// Whether simultaneously ready concepts are emitted in a fixed order
    pub fn is_deterministic(&self) -> bool {
        matches!(self, Self::Comparator(_))
    }

    pub fn comparator(&self) -> Option<&ConceptComparator> {
        match self {
            Self::Insertion => None,
            Self::Comparator(cmp) => Some(cmp),
        }
    }
}

impl fmt::Debug for ConceptOrdering {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Insertion => f.write_str("Insertion"),
            Self::Comparator(_) => f.write_str("Comparator(..)"),
        }
    }
}

// ============================================================================
// ConceptSet
// ============================================================================

/// Set of concepts iterating in the order dictated by a [`ConceptOrdering`]
#[derive(Clone)]
pub enum ConceptSet {
    /// Insertion order; `index` mirrors `items` for O(1) membership
    Insertion {
        items: Vec<ConceptId>,
        index: FxHashSet<ConceptId>,
    },

    /// Ordered by `cmp`; O(log n) insertion and membership
    Sorted {
        items: BTreeSet<SortKey>,
        cmp: ConceptComparator,
    },
}

/// Set entry carrying the comparator it is ordered by
#[derive(Clone)]
pub struct SortKey {
    concept: ConceptId,
    order: ConceptComparator,
}

impl PartialEq for SortKey {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl Eq for SortKey {}

impl PartialOrd for SortKey {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for SortKey {
    fn cmp(&self, other: &Self) -> Ordering {
        (self.order)(&self.concept, &other.concept)
    }
}

impl ConceptSet {
    pub fn new(ordering: &ConceptOrdering) -> Self {
        match ordering {
            ConceptOrdering::Insertion => Self::Insertion {
                items: Vec::new(),
                index: FxHashSet::default(),
            },
            ConceptOrdering::Comparator(cmp) => Self::Sorted {
                items: BTreeSet::new(),
                cmp: Arc::clone(cmp),
            },
        }
    }

    /// Insert a concept; returns `true` if it was not already present
    pub fn insert(&mut self, concept: ConceptId) -> bool {
        match self {
            Self::Insertion { items, index } => {
                if !index.insert(concept.clone()) {
                    return false;
                }
                items.push(concept);
                true
            }
            Self::Sorted { items, cmp } => items.insert(SortKey {
                concept,
                order: Arc::clone(cmp),
            }),
        }
    }

    pub fn contains(&self, concept: &ConceptId) -> bool {
        match self {
            Self::Insertion { index, .. } => index.contains(concept),
            Self::Sorted { items, cmp } => items.contains(&SortKey {
                concept: concept.clone(),
                order: Arc::clone(cmp),
            }),
        }
    }

    /// Members in emission order
    pub fn iter(&self) -> ConceptIter<'_> {
        match self {
            Self::Insertion { items, .. } => ConceptIter::Insertion(items.iter()),
            Self::Sorted { items, .. } => ConceptIter::Sorted(items.iter()),
        }
    }

    pub fn len(&self) -> usize {
        match self {
            Self::Insertion { items, .. } => items.len(),
            Self::Sorted { items, .. } => items.len(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    pub fn to_vec(&self) -> Vec<ConceptId> {
        self.iter().cloned().collect()
    }

    pub fn into_vec(self) -> Vec<ConceptId> {
        match self {
            Self::Insertion { items, .. } => items,
            Self::Sorted { items, .. } => items.into_iter().map(|key| key.concept).collect(),
        }
    }
}

impl Extend<ConceptId> for ConceptSet {
    fn extend<I: IntoIterator<Item = ConceptId>>(&mut self, iter: I) {
        for concept in iter {
            self.insert(concept);
        }
    }
}

impl<'a> IntoIterator for &'a ConceptSet {
    type Item = &'a ConceptId;
    type IntoIter = ConceptIter<'a>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl fmt::Debug for ConceptSet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_set().entries(self.iter()).finish()
    }
}

/// Iterator over a [`ConceptSet`] in emission order
pub enum ConceptIter<'a> {
    Insertion(std::slice::Iter<'a, ConceptId>),
    Sorted(btree_set::Iter<'a, SortKey>),
}

impl ConceptIter<'_> {
    /// Iterator over nothing
    pub fn empty() -> Self {
        const NONE: &[ConceptId] = &[];
        ConceptIter::Insertion(NONE.iter())
    }
}

impl<'a> Iterator for ConceptIter<'a> {
    type Item = &'a ConceptId;

    fn next(&mut self) -> Option<Self::Item> {
        match self {
            ConceptIter::Insertion(iter) => iter.next(),
            ConceptIter::Sorted(iter) => iter.next().map(|key| &key.concept),
        }
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        match self {
            ConceptIter::Insertion(iter) => iter.size_hint(),
            ConceptIter::Sorted(iter) => iter.size_hint(),
        }
    }
}

impl ExactSizeIterator for ConceptIter<'_> {}

// ============================================================================
// ReadyQueue
// ============================================================================

/// Queue of concepts that are ready to be emitted
///
/// FIFO for `Insertion`; a min-priority queue by comparator otherwise. The
/// payload `T` travels with the concept (the sequencer stores graph indices).
pub enum ReadyQueue<T> {
    Fifo(VecDeque<(ConceptId, T)>),
    Priority {
        heap: BinaryHeap<Ranked<T>>,
        cmp: ConceptComparator,
        seq: u64,
    },
}

/// Heap entry; smallest concept by comparator pops first
pub struct Ranked<T> {
    concept: ConceptId,
    item: T,
    // Ties under the comparator fall back to push order
    seq: u64,
    order: ConceptComparator,
}

impl<T> PartialEq for Ranked<T> {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl<T> Eq for Ranked<T> {}

impl<T> PartialOrd for Ranked<T> {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl<T> Ord for Ranked<T> {
    fn cmp(&self, other: &Self) -> Ordering {
        // BinaryHeap is a max-heap: reverse both keys
        (self.order)(&other.concept, &self.concept).then_with(|| other.seq.cmp(&self.seq))
    }
}

impl<T> ReadyQueue<T> {
    pub fn new(ordering: &ConceptOrdering) -> Self {
        match ordering {
            ConceptOrdering::Insertion => Self::Fifo(VecDeque::new()),
            ConceptOrdering::Comparator(cmp) => Self::Priority {
                heap: BinaryHeap::new(),
                cmp: Arc::clone(cmp),
                seq: 0,
            },
        }
    }

    pub fn push(&mut self, concept: ConceptId, item: T) {
        match self {
            Self::Fifo(queue) => queue.push_back((concept, item)),
            Self::Priority { heap, cmp, seq } => {
                heap.push(Ranked {
                    concept,
                    item,
                    seq: *seq,
                    order: Arc::clone(cmp),
                });
                *seq += 1;
            }
        }
    }

    pub fn pop(&mut self) -> Option<(ConceptId, T)> {
        match self {
            Self::Fifo(queue) => queue.pop_front(),
            Self::Priority { heap, .. } => heap.pop().map(|r| (r.concept, r.item)),
        }
    }

    pub fn len(&self) -> usize {
        match self {
            Self::Fifo(queue) => queue.len(),
            Self::Priority { heap, .. } => heap.len(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}
