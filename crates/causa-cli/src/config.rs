//! # CLI Configuration
//!
//! Optional `causa.yaml`:
//!
//! ```yaml
//! catalog: data/catalog.yaml   # list of entries, YAML or JSON
//! steps: data/steps.yaml       # list of quiz steps, YAML or JSON
//! top: 5                       # default number of quiz results
//! ```
//!
//! Relative paths resolve against the directory holding the config file.
//! Command-line flags override config values. Without a catalog or steps
//! file the built-in seed catalog and discovery steps are used.

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use serde::Deserialize;

use causa_catalog::{seed, CatalogStore};
use causa_core::Entry;
use causa_session::{discovery_steps, PreferenceSession, Step};

/// Number of quiz results shown when neither flag nor config sets one.
pub const DEFAULT_TOP: usize = 5;

/// Resolved CLI configuration.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct CliConfig {
    /// Catalog file; the seed catalog when unset.
    #[serde(default)]
    pub catalog: Option<PathBuf>,
    /// Quiz steps file; the discovery steps when unset.
    #[serde(default)]
    pub steps: Option<PathBuf>,
    /// Default number of quiz results.
    #[serde(default)]
    pub top: Option<usize>,
}

impl CliConfig {
    /// Read a config file and resolve its relative paths against the file's
    /// directory.
    pub fn load(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("failed to read config file: {}", path.display()))?;
        let mut config: Self = serde_yaml::from_str(&content)
            .with_context(|| format!("failed to parse config YAML: {}", path.display()))?;

        let base = path.parent().unwrap_or(Path::new("."));
        config.catalog = config.catalog.map(|p| crate::resolve_path(&p, base));
        config.steps = config.steps.map(|p| crate::resolve_path(&p, base));
        tracing::debug!(config = %path.display(), ?config, "loaded config");
        Ok(config)
    }

    /// Load the config file when given, then apply flag overrides.
    pub fn resolve(
        config: Option<&Path>,
        catalog: Option<&Path>,
        steps: Option<&Path>,
    ) -> Result<Self> {
        let mut resolved = match config {
            Some(path) => Self::load(path)?,
            None => Self::default(),
        };
        if let Some(catalog) = catalog {
            resolved.catalog = Some(catalog.to_path_buf());
        }
        if let Some(steps) = steps {
            resolved.steps = Some(steps.to_path_buf());
        }
        Ok(resolved)
    }

    /// Quiz result count: the flag, else the config value, else [`DEFAULT_TOP`].
    pub fn top(&self, flag: Option<usize>) -> usize {
        flag.or(self.top).unwrap_or(DEFAULT_TOP)
    }

    /// Load the configured catalog, or the seed catalog.
    pub fn catalog(&self) -> Result<CatalogStore> {
        let Some(path) = &self.catalog else {
            tracing::debug!("using seed catalog");
            return seed::catalog().context("failed to build seed catalog");
        };
        let entries: Vec<Entry> = read_list(path, "catalog")?;
        let store = CatalogStore::load(entries)
            .with_context(|| format!("invalid catalog: {}", path.display()))?;
        tracing::info!(catalog = %path.display(), entries = store.len(), "loaded catalog");
        Ok(store)
    }

    /// Load the configured quiz steps, or the discovery steps.
    pub fn steps(&self) -> Result<Vec<Step>> {
        match &self.steps {
            Some(path) => read_list(path, "steps"),
            None => discovery_steps().context("failed to build discovery steps"),
        }
    }

    /// A fresh session over the configured steps.
    pub fn session(&self) -> Result<PreferenceSession> {
        let steps = self.steps()?;
        PreferenceSession::create(steps).context("invalid quiz steps")
    }
}

fn read_list<T: serde::de::DeserializeOwned>(path: &Path, what: &str) -> Result<Vec<T>> {
    let content = std::fs::read_to_string(path)
        .with_context(|| format!("failed to read {what} file: {}", path.display()))?;
    serde_yaml::from_str(&content)
        .with_context(|| format!("failed to parse {what} file: {}", path.display()))
}
