//! Parser module — comment-block decoding and script scanning.

pub mod doxygen;
pub mod normalize;
pub mod params;
pub mod script;

use crate::model::Script;
use anyhow::{bail, Context, Result};
use std::fs;
use std::path::{Path, PathBuf};

/// File extensions recognized as shell sources.
pub const SUPPORTED_EXTENSIONS: &[&str] = &["sh", "bash", "zsh"];

/// Extension-less rc files that are still shell sources.
const RC_FILES: &[&str] = &[
    ".zshrc",
    ".zshenv",
    ".zprofile",
    ".bashrc",
    ".bash_profile",
    ".profile",
];

/// Knobs shared by the normalizer and the script scanner.
#[derive(Debug, Clone, Copy)]
pub struct ParseOptions {
    /// Comment-marker character. A doc line starts with two of them.
    pub marker: char,
}

impl Default for ParseOptions {
    fn default() -> Self {
        Self { marker: '#' }
    }
}

impl ParseOptions {
    /// Prefix that marks a line as part of a doc-comment block (`##`).
    pub fn doc_prefix(&self) -> String {
        [self.marker, self.marker].iter().collect()
    }
}

/// Whether `path` looks like a shell script we can scan.
pub fn is_shell_source(path: &Path) -> bool {
    if let Some(ext) = path.extension().and_then(|e| e.to_str()) {
        if SUPPORTED_EXTENSIONS.contains(&ext) {
            return true;
        }
    }
    path.file_name()
        .and_then(|n| n.to_str())
        .is_some_and(|name| RC_FILES.contains(&name))
}

/// Shell sources directly inside `dir` (non-recursive).
pub fn shell_sources_in(dir: &Path) -> Result<Vec<PathBuf>> {
    let entries = fs::read_dir(dir)
        .with_context(|| format!("failed to read directory: {}", dir.display()))?;
    Ok(entries
        .filter_map(|entry| entry.ok())
        .map(|entry| entry.path())
        .filter(|p| p.is_file() && is_shell_source(p))
        .collect())
}

/// Read and scan a source file. The file type is checked before any read,
/// so binary files never reach the UTF-8 decoder.
pub fn parse_file(path: &Path, options: &ParseOptions) -> Result<Script> {
    if !is_shell_source(path) {
        bail!("unsupported file type: {}", path.display());
    }
    let content = fs::read_to_string(path)
        .with_context(|| format!("failed to read {}", path.display()))?;
    Ok(script::parse(&content, options))
}
