//! Configuration loading
//!
//! Precedence, highest first: CLI flags (applied by the caller),
//! `ROSTER_*` environment variables, the config file, built-in defaults.

use std::fs;
use std::path::{Path, PathBuf};

use crate::error::{RosterError, RosterResult};

use super::types::{ColorMode, Config};

/// Project-local config file name
pub const PROJECT_CONFIG_FILE: &str = "roster.toml";

/// Non-fatal configuration warning surfaced to CLI users.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConfigWarning {
    pub key: String,
    pub file: PathBuf,
    pub line: Option<usize>,
    pub suggestion: Option<String>,
}

/// Load configuration and collect non-fatal warnings (e.g. unknown keys).
pub fn load_with_warnings(path: &Path) -> RosterResult<(Config, Vec<ConfigWarning>)> {
    let content = fs::read_to_string(path)?;

    let mut unknown_paths: Vec<String> = Vec::new();
    let deserializer = toml::de::Deserializer::new(&content);

    let config: Config = serde_ignored::deserialize(deserializer, |p| {
        unknown_paths.push(p.to_string());
    })
    .map_err(|e| RosterError::InvalidConfig {
        file: path.to_path_buf(),
        message: e.to_string(),
    })?;

    let warnings = unknown_paths
        .into_iter()
        .map(|path_str| {
            let key = path_str
                .split('.')
                .next_back()
                .unwrap_or(path_str.as_str())
                .to_string();
            ConfigWarning {
                key: key.clone(),
                file: path.to_path_buf(),
                line: find_line_number(&content, &key),
                suggestion: suggest_key(&key),
            }
        })
        .collect();

    Ok((config, warnings))
}

/// Load from the explicit file, `./roster.toml`, the user config, or defaults.
///
/// An explicit path must exist; discovered files are optional.
pub fn load_or_default(
    explicit: Option<&Path>,
    cwd: &Path,
) -> RosterResult<(Config, Vec<ConfigWarning>)> {
    let candidate = match explicit {
        Some(path) => Some(path.to_path_buf()),
        None => discover(cwd),
    };

    let (config, warnings) = match candidate {
        Some(path) => {
            tracing::debug!(path = %path.display(), "loading config");
            load_with_warnings(&path)?
        }
        None => (Config::default(), Vec::new()),
    };

    Ok((with_env_overrides(config), warnings))
}

fn discover(cwd: &Path) -> Option<PathBuf> {
    let project = cwd.join(PROJECT_CONFIG_FILE);
    if project.is_file() {
        return Some(project);
    }

    dirs::config_dir()
        .map(|dir| dir.join("roster/config.toml"))
        .filter(|path| path.is_file())
}

/// Apply environment variable overrides (ROSTER_* prefix)
pub fn with_env_overrides(config: Config) -> Config {
    with_env_overrides_from(config, |key| std::env::var(key).ok())
}

pub(crate) fn with_env_overrides_from(
    mut config: Config,
    get_env: impl Fn(&str) -> Option<String>,
) -> Config {
    if let Some(path) = get_env("ROSTER_CATALOG_PATH") {
        config.catalog.path = PathBuf::from(path);
    }

    // Ignored unless it parses as a positive integer
    if let Some(top_n) = get_env("ROSTER_TOP_N") {
        match top_n.trim().parse::<usize>() {
            Ok(n) if n > 0 => config.catalog.top_n = n,
            _ => tracing::warn!(value = %top_n, "ignoring invalid ROSTER_TOP_N"),
        }
    }

    if let Some(path) = get_env("ROSTER_REGISTRY_PATH") {
        config.registry.path = PathBuf::from(path);
    }

    if let Some(val) = get_env("ROSTER_ATOMIC_WRITES") {
        config.registry.atomic_writes = val.to_lowercase() != "false" && val != "0";
    }

    if let Some(color) = get_env("ROSTER_COLOR") {
        config.output.color = match color.to_lowercase().as_str() {
            "always" => ColorMode::Always,
            "never" => ColorMode::Never,
            _ => ColorMode::Auto,
        };
    }

    config
}

fn find_line_number(content: &str, needle: &str) -> Option<usize> {
    for (i, line) in content.lines().enumerate() {
        if line.contains(needle) {
            return Some(i + 1);
        }
    }
    None
}

fn suggest_key(unknown: &str) -> Option<String> {
    const CANDIDATES: &[&str] = &[
        "catalog",
        "path",
        "top_n",
        "registry",
        "atomic_writes",
        "output",
        "color",
    ];

    let mut best: Option<(&str, usize)> = None;
    for candidate in CANDIDATES {
        let dist = levenshtein(unknown, candidate);
        best = match best {
            None => Some((candidate, dist)),
            Some((_, best_dist)) if dist < best_dist => Some((candidate, dist)),
            Some(current) => Some(current),
        };
    }

    match best {
        Some((candidate, dist)) if dist <= 2 => Some(candidate.to_string()),
        _ => None,
    }
}

fn levenshtein(a: &str, b: &str) -> usize {
    if a == b {
        return 0;
    }

    let a_bytes = a.as_bytes();
    let b_bytes = b.as_bytes();

    let mut prev: Vec<usize> = (0..=b_bytes.len()).collect();
    let mut curr = vec![0usize; b_bytes.len() + 1];

    for (i, &ac) in a_bytes.iter().enumerate() {
        curr[0] = i + 1;
        for (j, &bc) in b_bytes.iter().enumerate() {
            let cost = if ac == bc { 0 } else { 1 };
            curr[j + 1] =
                std::cmp::min(std::cmp::min(prev[j + 1] + 1, curr[j] + 1), prev[j] + cost);
        }
        prev.clone_from_slice(&curr);
    }

    prev[b_bytes.len()]
}
