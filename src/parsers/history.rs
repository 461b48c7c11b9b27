use std::collections::HashSet;
use std::fs::File;
use std::io::BufReader;
use std::path::Path;

use tracing::{debug, trace};

use crate::error::{Result, ShareError};
use crate::models::{DEFAULT_MAX_LINE_BYTES, SessionSummary};
use crate::parsers::escapes::replace_lone_surrogates;
use crate::parsers::lines::JsonlLines;
use crate::parsers::records::HistoryRecord;

/// Scan `history.jsonl` and return one summary per session, newest first.
///
/// The first line seen for a session wins: its prompt, project and timestamp
/// become the summary, and later lines for the same session are ignored.
/// Malformed lines and lines without a session id are skipped.
///
/// # Errors
///
/// Returns [`ShareError::Open`] if the file cannot be opened and
/// [`ShareError::Read`] if reading fails part way (including a line longer
/// than [`DEFAULT_MAX_LINE_BYTES`]).
pub fn scan_history(path: &Path) -> Result<Vec<SessionSummary>> {
    scan_history_with_limit(path, DEFAULT_MAX_LINE_BYTES)
}

/// [`scan_history`] with an explicit maximum line length
pub fn scan_history_with_limit(path: &Path, max_line_bytes: usize) -> Result<Vec<SessionSummary>> {
    let file = File::open(path).map_err(|e| ShareError::open(path, e))?;
    let mut lines = JsonlLines::new(BufReader::new(file), max_line_bytes);

    let mut seen = HashSet::new();
    let mut summaries = Vec::new();
    let mut skipped = 0usize;

    while let Some(line) = lines.next_line().map_err(|e| ShareError::read(path, e))? {
        let parsed = serde_json::from_slice::<HistoryRecord>(&replace_lone_surrogates(line));
        let record = match parsed {
            Ok(record) => record,
            Err(e) => {
                trace!("Skipping history line {}: {}", lines.line_number(), e);
                skipped += 1;
                continue;
            }
        };

        if record.session_id.is_empty() {
            skipped += 1;
            continue;
        }

        if seen.insert(record.session_id.clone()) {
            summaries.push(SessionSummary {
                id: record.session_id,
                project: record.project,
                first_prompt: record.display,
                timestamp: record.timestamp,
            });
        }
    }

    debug!(
        "Scanned {}: {} sessions from {} lines ({} skipped)",
        path.display(),
        summaries.len(),
        lines.line_number(),
        skipped
    );

    // Stable sort keeps file order among equal timestamps
    summaries.sort_by(|a, b| b.timestamp.cmp(&a.timestamp));

    Ok(summaries)
}
