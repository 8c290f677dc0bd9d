//! Path placement for the Zellij plugin sandbox.
//!
//! Inside the Zellij sandbox the host filesystem is mounted under `/host`,
//! which points at the cwd of the last focused terminal (typically the
//! user's home directory). The plugin keeps its trace output below that
//! mount so it survives pane restarts and is reachable from the host.

use std::path::PathBuf;

/// Returns the data directory for Velobook output.
///
/// Resolves to `/host/.local/share/zellij/velobook` in the sandbox, which
/// typically maps to `~/.local/share/zellij/velobook` on the host.
#[must_use]
pub fn data_dir() -> PathBuf {
    PathBuf::from("/host/.local/share/zellij").join("velobook")
}
