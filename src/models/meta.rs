use std::path::Path;

use serde::Serialize;

use crate::models::SessionSummary;
use crate::utils::timestamps::format_export_date;

/// Header information shown at the top of an exported document.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct SessionMeta {
    pub session_id: String,
    /// Base name of the project directory
    pub project: String,
    pub date: String,
    pub message_count: usize,
    pub first_prompt: String,
}

impl SessionMeta {
    /// Metadata for a session that has no history entry
    pub fn new(session_id: &str, message_count: usize) -> Self {
        Self { session_id: session_id.to_string(), message_count, ..Self::default() }
    }

    pub fn from_summary(summary: &SessionSummary, message_count: usize) -> Self {
        Self {
            session_id: summary.id.clone(),
            project: project_name(&summary.project),
            date: format_export_date(summary.timestamp),
            message_count,
            first_prompt: summary.first_prompt.clone(),
        }
    }
}

/// Last path component of a project path, or the path itself if it has none
pub fn project_name(project: &str) -> String {
    Path::new(project)
        .file_name()
        .map(|name| name.to_string_lossy().into_owned())
        .unwrap_or_else(|| project.to_string())
}
