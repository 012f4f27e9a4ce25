//! Core data models

mod concept;

pub use concept::ConceptId;
