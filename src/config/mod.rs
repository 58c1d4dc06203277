//! Configuration module for Roster
//!
//! Configuration hierarchy:
//! 1. CLI flags (highest priority)
//! 2. Environment variables (ROSTER_*)
//! 3. Config file (`--config`, `./roster.toml`, or `<config dir>/roster/config.toml`)
//! 4. Built-in defaults (lowest priority)

mod loader;
mod types;

pub use loader::{with_env_overrides, ConfigWarning, PROJECT_CONFIG_FILE};
pub use types::{CatalogConfig, ColorMode, Config, OutputConfig, RegistryConfig};
