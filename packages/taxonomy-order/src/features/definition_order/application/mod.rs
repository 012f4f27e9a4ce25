//! Application layer: end-to-end definition order computation

pub mod definition_order;

pub use definition_order::DefinitionOrder;
