//! Configuration
//!
//! Two levels, following the preset + builder pattern:
//! - Level 1: `Preset` - one-liner defaults
//! - Level 2: builder overrides on `OrderConfig`
//!
//! ```rust,ignore
//! use taxonomy_order::config::{OrderConfig, Preset};
//!
//! let config = OrderConfig::from_preset(Preset::Fast).verify_condensation(true);
//! config.validate()?;
//! ```

pub mod error;
pub mod order_config;
pub mod preset;

pub use error::{ConfigError, ConfigResult};
pub use order_config::{OrderConfig, MAX_CAPACITY_HINT};
pub use preset::Preset;
