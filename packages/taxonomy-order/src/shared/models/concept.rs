//! Concept identifiers
//!
//! A concept is a named class of the knowledge base. Two names are reserved:
//! TOP (the universal concept) and BOTTOM (the empty concept).

use std::fmt;
use std::sync::Arc;

/// Opaque identifier of a concept name
///
/// Names are reference counted so that cloning an id while it moves through
/// the graph, the equivalence registry and the final order stays cheap.
///
/// The derived `Ord` is the natural order used by
/// [`ConceptOrdering::lexical`](crate::ConceptOrdering::lexical):
/// `Top < Bottom < Named(..)`, named concepts by name.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum ConceptId {
    /// Universal concept (owl:Thing)
    Top,

    /// Empty concept (owl:Nothing)
    Bottom,

    /// Any other concept name
    Named(Arc<str>),
}

impl ConceptId {
    /// Create a named concept
    pub fn named(name: impl AsRef<str>) -> Self {
        Self::Named(Arc::from(name.as_ref()))
    }

    pub fn is_top(&self) -> bool {
        matches!(self, Self::Top)
    }

    pub fn is_bottom(&self) -> bool {
        matches!(self, Self::Bottom)
    }

    /// Name of the concept (`TOP` / `BOTTOM` for the sentinels)
    pub fn name(&self) -> &str {
        match self {
            Self::Top => "TOP",
            Self::Bottom => "BOTTOM",
            Self::Named(name) => name,
        }
    }
}

impl fmt::Display for ConceptId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl From<&str> for ConceptId {
    fn from(name: &str) -> Self {
        Self::named(name)
    }
}

impl From<String> for ConceptId {
    fn from(name: String) -> Self {
        Self::Named(Arc::from(name))
    }
}
