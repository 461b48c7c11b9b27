use std::fs;
use std::path::{Component, Path, PathBuf};

use tracing::debug;

use crate::error::{Result, ShareError};

const HISTORY_FILE: &str = "history.jsonl";
const PROJECTS_DIR: &str = "projects";
const SESSION_EXTENSION: &str = "jsonl";

/// Location of the prompt history log inside a Claude directory
pub fn history_path(claude_dir: &Path) -> PathBuf {
    claude_dir.join(HISTORY_FILE)
}

/// Checks that a session id names a single file and cannot escape the projects directory
///
/// # Errors
///
/// Returns [`ShareError::InvalidSessionId`] if the id is empty, contains a path
/// separator, or is a `.`/`..` component.
pub fn validate_session_id(session_id: &str) -> Result<()> {
    let mut components = Path::new(session_id).components();
    let single_normal = matches!(
        (components.next(), components.next()),
        (Some(Component::Normal(_)), None)
    );

    if session_id.is_empty() || !single_normal || session_id.contains(['/', '\\']) {
        return Err(ShareError::InvalidSessionId(session_id.to_string()));
    }

    Ok(())
}

/// Find the log of a session under `<claude_dir>/projects/<project>/<session_id>.jsonl`
///
/// Project directories are visited in name order and the first regular file
/// found wins.
///
/// # Errors
///
/// Returns an error if:
/// - The session id is invalid (see [`validate_session_id`])
/// - The projects directory cannot be read ([`ShareError::Open`])
/// - No project directory contains the session ([`ShareError::SessionNotFound`])
pub fn find_session_path(claude_dir: &Path, session_id: &str) -> Result<PathBuf> {
    validate_session_id(session_id)?;

    let projects_dir = claude_dir.join(PROJECTS_DIR);
    let entries = fs::read_dir(&projects_dir).map_err(|e| ShareError::open(&projects_dir, e))?;

    let mut project_dirs: Vec<PathBuf> = entries
        .flatten()
        .map(|entry| entry.path())
        .filter(|path| path.is_dir())
        .collect();
    project_dirs.sort();

    let file_name = format!("{}.{}", session_id, SESSION_EXTENSION);
    for project_dir in project_dirs {
        let candidate = project_dir.join(&file_name);
        if candidate.is_file() {
            debug!("Found session {} at {}", session_id, candidate.display());
            return Ok(candidate);
        }
    }

    Err(ShareError::SessionNotFound(session_id.to_string()))
}
