//! Statistics of one definition-order computation

use serde::Serialize;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct OrderStats {
    /// Graph vertices after initialization (TOP included)
    pub concepts: usize,

    /// Uses edges before condensation
    pub edges: usize,

    /// Concepts whose definition uses TOP directly
    pub top_equivalents: usize,

    /// Strongly connected components with more than one member
    pub cyclic_components: usize,

    /// Size of the largest such component (0 if none)
    pub largest_component: usize,

    /// Vertices removed by condensation
    pub collapsed_concepts: usize,

    /// Size of the cyclic concept set
    pub cyclic_concepts: usize,
}
