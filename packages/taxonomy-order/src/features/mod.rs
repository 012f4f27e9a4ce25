//! Feature modules

pub mod definition_order;
