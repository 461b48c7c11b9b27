//! JSONL parsers for Claude Code history and session logs
//!
//! # Error Handling Strategy
//!
//! Both parsers make a single forward pass and are **best effort per line**:
//!
//! - **Individual line failures**: A line that is not valid JSON, has a field of
//!   the wrong type, or carries no displayable content is skipped. Skips are only
//!   logged at `trace` level and never fail the call.
//!
//! - **Whole-file failures**: Failing to open the file, an I/O error while
//!   reading, or a line longer than the configured maximum aborts the call with a
//!   [`ShareError`](crate::ShareError). No partial result is returned.
//!
//! - **Broken surrogate escapes**: A `\uXXXX` escape naming half of a UTF-16
//!   surrogate pair is read as U+FFFD instead of failing the line.
//!
//! - **Empty input**: An empty file, or one with only unusable lines, produces an
//!   empty result. Callers decide whether "nothing found" is worth reporting.

pub mod content;
pub mod deserializers;
pub mod escapes;
pub mod history;
pub mod lines;
pub mod records;
pub mod session;

pub use content::tool_result_text;
pub use history::{scan_history, scan_history_with_limit};
pub use lines::JsonlLines;
pub use session::reconstruct_session;
