//! Shared test utilities for integration tests
#![allow(dead_code)]

use std::fs;
use std::path::{Path, PathBuf};

use tempfile::TempDir;

/// Builder for creating test .claude directory structures
pub struct ClaudeDirBuilder {
    temp_dir: TempDir,
}

impl ClaudeDirBuilder {
    /// Create a new builder with an empty .claude directory
    pub fn new() -> Self {
        let temp_dir = TempDir::new().expect("Failed to create temp dir");
        Self { temp_dir }
    }

    /// Get the path to the .claude directory
    pub fn path(&self) -> &Path {
        self.temp_dir.path()
    }

    /// Add a history.jsonl file with the given content
    pub fn with_history(self, content: &str) -> Self {
        fs::write(self.temp_dir.path().join("history.jsonl"), content)
            .expect("Failed to write history.jsonl");
        self
    }

    /// Add history entries programmatically
    pub fn with_history_entries(self, entries: &[HistoryEntryBuilder]) -> Self {
        let content = entries.iter().map(|e| e.to_json()).collect::<Vec<_>>().join("\n");
        self.with_history(&content)
    }

    /// Add `<project>/<session_id>.jsonl` under projects/ with the given lines
    pub fn with_session(self, project_dir: &str, session_id: &str, session: &SessionLogBuilder) -> Self {
        let dir = self.temp_dir.path().join("projects").join(project_dir);
        fs::create_dir_all(&dir).expect("Failed to create project dir");
        fs::write(dir.join(format!("{}.jsonl", session_id)), session.to_jsonl())
            .expect("Failed to write session file");
        self
    }

    /// Build and return the temp directory (consumes self)
    pub fn build(self) -> TempDir {
        self.temp_dir
    }
}

impl Default for ClaudeDirBuilder {
    fn default() -> Self {
        Self::new()
    }
}

/// Builder for history.jsonl entries
pub struct HistoryEntryBuilder {
    display: String,
    timestamp: i64,
    session_id: String,
    project: String,
}

impl HistoryEntryBuilder {
    /// Create a new history entry with default values
    pub fn new() -> Self {
        Self {
            display: "Test entry".to_string(),
            timestamp: 1234567890,
            session_id: "550e8400-e29b-41d4-a716-446655440000".to_string(),
            project: "/Users/test/project".to_string(),
        }
    }

    pub fn display(mut self, display: &str) -> Self {
        self.display = display.to_string();
        self
    }

    pub fn timestamp(mut self, timestamp: i64) -> Self {
        self.timestamp = timestamp;
        self
    }

    pub fn session_id(mut self, session_id: &str) -> Self {
        self.session_id = session_id.to_string();
        self
    }

    pub fn project(mut self, project: &str) -> Self {
        self.project = project.to_string();
        self
    }

    /// Convert to JSON string
    pub fn to_json(&self) -> String {
        serde_json::json!({
            "display": self.display,
            "pastedContents": {},
            "timestamp": self.timestamp,
            "project": self.project,
            "sessionId": self.session_id,
        })
        .to_string()
    }
}

impl Default for HistoryEntryBuilder {
    fn default() -> Self {
        Self::new()
    }
}

/// Builder for a session log: one JSON record per line
#[derive(Default)]
pub struct SessionLogBuilder {
    lines: Vec<String>,
    next_second: u32,
}

impl SessionLogBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    fn timestamp(&mut self) -> String {
        let ts = format!("2025-01-15T10:00:{:02}.000Z", self.next_second % 60);
        self.next_second += 1;
        ts
    }

    /// User record with bare-string content
    pub fn user_text(mut self, text: &str) -> Self {
        let ts = self.timestamp();
        self.lines.push(
            serde_json::json!({
                "type": "user",
                "timestamp": ts,
                "sessionId": "s",
                "message": {"role": "user", "content": text},
            })
            .to_string(),
        );
        self
    }

    /// User record with an array of content items
    pub fn user_items(mut self, items: &[serde_json::Value]) -> Self {
        let ts = self.timestamp();
        self.lines.push(
            serde_json::json!({
                "type": "user",
                "timestamp": ts,
                "sessionId": "s",
                "message": {"role": "user", "content": items},
            })
            .to_string(),
        );
        self
    }

    /// Meta user record (internal bookkeeping)
    pub fn user_meta(mut self, text: &str) -> Self {
        let ts = self.timestamp();
        self.lines.push(
            serde_json::json!({
                "type": "user",
                "isMeta": true,
                "timestamp": ts,
                "message": {"role": "user", "content": text},
            })
            .to_string(),
        );
        self
    }

    /// Assistant record for message `id` with the given content items
    pub fn assistant(mut self, id: &str, items: &[serde_json::Value]) -> Self {
        let ts = self.timestamp();
        self.lines.push(
            serde_json::json!({
                "type": "assistant",
                "timestamp": ts,
                "sessionId": "s",
                "message": {
                    "id": id,
                    "role": "assistant",
                    "content": items,
                    "stop_reason": null,
                },
            })
            .to_string(),
        );
        self
    }

    /// Progress record (ignored by the reconstructor)
    pub fn progress(mut self) -> Self {
        let ts = self.timestamp();
        self.lines.push(
            serde_json::json!({"type": "progress", "timestamp": ts, "data": {"type": "hook"}})
                .to_string(),
        );
        self
    }

    /// Arbitrary raw line, e.g. malformed JSON
    pub fn raw(mut self, line: &str) -> Self {
        self.lines.push(line.to_string());
        self
    }

    pub fn to_jsonl(&self) -> String {
        let mut content = self.lines.join("\n");
        content.push('\n');
        content
    }
}

pub fn text(text: &str) -> serde_json::Value {
    serde_json::json!({"type": "text", "text": text})
}

pub fn thinking(thinking: &str) -> serde_json::Value {
    serde_json::json!({"type": "thinking", "thinking": thinking, "signature": "sig"})
}

pub fn tool_use(id: &str, name: &str, input: serde_json::Value) -> serde_json::Value {
    serde_json::json!({"type": "tool_use", "id": id, "name": name, "input": input})
}

pub fn tool_result(tool_use_id: &str, content: serde_json::Value, is_error: bool) -> serde_json::Value {
    serde_json::json!({
        "type": "tool_result",
        "tool_use_id": tool_use_id,
        "content": content,
        "is_error": is_error,
    })
}

/// Path of a session file written by [`ClaudeDirBuilder::with_session`]
pub fn session_path(claude_dir: &Path, project_dir: &str, session_id: &str) -> PathBuf {
    claude_dir.join("projects").join(project_dir).join(format!("{}.jsonl", session_id))
}

pub const SESSION_ID: &str = "550e8400-e29b-41d4-a716-446655440000";
pub const PROJECT_DIR: &str = "-Users-test-project";

/// A realistic session: prompt, tool round trip, final answer
pub fn realistic_session() -> SessionLogBuilder {
    SessionLogBuilder::new()
        .raw(r#"{"type":"file-history-snapshot","messageId":"x","snapshot":{"trackedFileBackups":{}},"isSnapshotUpdate":false}"#)
        .user_meta("Caveat: The messages below were generated by the user while running local commands.")
        .user_text("<command-name>/clear</command-name>")
        .user_text("How many files are in src?")
        .assistant("msg_01", &[thinking("I should list the directory")])
        .assistant("msg_01", &[text("Let me check.")])
        .assistant("msg_01", &[tool_use("toolu_01", "Bash", serde_json::json!({"command": "ls src | wc -l"}))])
        .progress()
        .user_items(&[tool_result("toolu_01", serde_json::json!("3"), false)])
        .assistant("msg_02", &[text("There are 3 files in src.")])
}

/// Helper to create a realistic .claude directory with history and one session
pub fn realistic_claude_dir() -> TempDir {
    ClaudeDirBuilder::new()
        .with_history_entries(&[
            HistoryEntryBuilder::new()
                .display("How many files are in src?")
                .timestamp(1_736_935_200_000)
                .session_id(SESSION_ID)
                .project("/Users/test/project"),
            HistoryEntryBuilder::new()
                .display("Follow-up in the same session")
                .timestamp(1_736_935_300_000)
                .session_id(SESSION_ID)
                .project("/Users/test/project"),
            HistoryEntryBuilder::new()
                .display("An older session")
                .timestamp(1_736_000_000_000)
                .session_id("older-session")
                .project("/Users/test/other"),
        ])
        .with_session(PROJECT_DIR, SESSION_ID, &realistic_session())
        .build()
}
