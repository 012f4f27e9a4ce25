//! Ports (Interfaces) for the definition order
//!
//! The knowledge base owns concept definitions; this crate only needs to
//! enumerate concepts and the concepts each definition references.

use crate::shared::models::ConceptId;

/// Read-only view of the knowledge base's concept definitions
///
/// # Example
/// ```ignore
/// fn count_uses<S: ConceptSource + ?Sized>(source: &S) -> usize {
///     source.concepts().iter().map(|c| source.uses_of(c).len()).sum()
/// }
/// ```
pub trait ConceptSource {
    /// All concepts of the knowledge base
    ///
    /// BOTTOM is ignored if present. TOP may be omitted; it is always part
    /// of the order.
    fn concepts(&self) -> Vec<ConceptId>;

    /// Concepts referenced by the definition of `concept`
    fn uses_of(&self, concept: &ConceptId) -> Vec<ConceptId>;
}

impl<S: ConceptSource + ?Sized> ConceptSource for &S {
    fn concepts(&self) -> Vec<ConceptId> {
        (**self).concepts()
    }

    fn uses_of(&self, concept: &ConceptId) -> Vec<ConceptId> {
        (**self).uses_of(concept)
    }
}
