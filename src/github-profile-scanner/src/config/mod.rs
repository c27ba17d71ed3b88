//! Scanner configuration.
//!
//! Settings come from an optional TOML file; the CLI layers its flags on top.

mod error;
mod settings;

pub use error::ConfigError;
pub use settings::{Overrides, Settings};
