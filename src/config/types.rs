//! Configuration type definitions

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::domain::services::DEFAULT_TOP_N;
use crate::error::RosterResult;

use super::loader::{self, ConfigWarning};

/// Catalog configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CatalogConfig {
    /// JSON array of products
    #[serde(default = "default_catalog_path")]
    pub path: PathBuf,

    /// Length of the price rankings
    #[serde(default = "default_top_n")]
    pub top_n: usize,
}

impl Default for CatalogConfig {
    fn default() -> Self {
        Self {
            path: default_catalog_path(),
            top_n: default_top_n(),
        }
    }
}

fn default_catalog_path() -> PathBuf {
    PathBuf::from("dados.json")
}

fn default_top_n() -> usize {
    DEFAULT_TOP_N
}

/// Musician registry configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RegistryConfig {
    /// JSON store, created on first use
    #[serde(default = "default_registry_path")]
    pub path: PathBuf,

    /// Write through a temp file and rename
    #[serde(default = "default_true")]
    pub atomic_writes: bool,
}

impl Default for RegistryConfig {
    fn default() -> Self {
        Self {
            path: default_registry_path(),
            atomic_writes: true,
        }
    }
}

fn default_registry_path() -> PathBuf {
    PathBuf::from("db.json")
}

fn default_true() -> bool {
    true
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum ColorMode {
    #[default]
    Auto,
    Always,
    Never,
}

/// Output configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
pub struct OutputConfig {
    #[serde(default)]
    pub color: ColorMode,
}

/// Main configuration structure
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
pub struct Config {
    #[serde(default)]
    pub catalog: CatalogConfig,

    #[serde(default)]
    pub registry: RegistryConfig,

    #[serde(default)]
    pub output: OutputConfig,
}

impl Config {
    /// Resolve the config file, apply environment overrides, fall back to defaults
    pub fn load_or_default(
        explicit: Option<&Path>,
        cwd: &Path,
    ) -> RosterResult<(Self, Vec<ConfigWarning>)> {
        loader::load_or_default(explicit, cwd)
    }
}
