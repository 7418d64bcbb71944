//! # causa-cli — CLI Tool for the Causa Discovery Engine
//!
//! Provides the `causa` command-line interface over the catalog, session,
//! and scoring crates.
//!
//! ## Subcommands
//!
//! - `causa search`: Library search by free text, category tab, and kind.
//! - `causa categories`: The category tabs present in the catalog.
//! - `causa show`: One entry with its kind-specific details.
//! - `causa regions`: World map regions and their initiatives.
//! - `causa quiz`: Replay discovery quiz answers and rank the catalog.
//!
//! ```bash
//! causa search --query conservation --kind resource
//! causa search --category climate --json
//! causa regions europe --initiative climate
//! causa quiz --select interests=Environment --select values=Justice --top 3
//! ```
//!
//! Every subcommand reads the built-in seed catalog and discovery steps
//! unless a catalog or steps file is given by flag or in `causa.yaml`.

pub mod config;
pub mod quiz;
pub mod regions;
pub mod search;
pub mod show;

use std::path::{Path, PathBuf};

/// Resolve a path that may be relative to a base directory.
///
/// Absolute paths are returned as-is; relative ones are joined onto `base`.
pub fn resolve_path(path: &Path, base: &Path) -> PathBuf {
    if path.is_absolute() {
        path.to_path_buf()
    } else {
        base.join(path)
    }
}
