//! Configuration system for PolicyScan.
//! Explicit defaults merged with caller overrides into one immutable ruleset.

pub mod defaults;
pub mod resolver;
pub mod types;

pub use defaults::ConfigDefaults;
pub use resolver::{resolve, ConfigOverrides};
pub use types::ResolvedConfig;
