use std::env;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};

/// Get the Claude directory path (~/.claude)
///
/// `HOME` wins when set so tests and wrappers can redirect it; otherwise the
/// platform home directory is used.
pub fn get_claude_dir() -> Result<PathBuf> {
    let home = env::var_os("HOME")
        .filter(|home| !home.is_empty())
        .map(PathBuf::from)
        .or_else(dirs::home_dir)
        .context("HOME environment variable not set")?;
    Ok(home.join(".claude"))
}

/// Use an explicitly configured Claude directory, or fall back to [`get_claude_dir`]
pub fn resolve_claude_dir(configured: Option<&Path>) -> Result<PathBuf> {
    match configured {
        Some(dir) => Ok(dir.to_path_buf()),
        None => get_claude_dir(),
    }
}
