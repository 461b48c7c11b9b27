use serde::Serialize;

/// First-seen history entry for one session.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SessionSummary {
    pub id: String,
    pub project: String,
    pub first_prompt: String,
    /// Submission time in milliseconds since the Unix epoch
    pub timestamp: i64,
}
