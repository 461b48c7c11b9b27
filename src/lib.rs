//! Claude Share - Export Claude Code sessions as readable documents
//!
//! This library reads the session logs Claude Code stores under `~/.claude/`
//! and rebuilds the conversation they describe. It supports:
//!
//! - Listing past sessions from `history.jsonl`, newest first
//! - Locating a session's log under `projects/`
//! - Reconstructing the ordered user/assistant messages of a session, merging
//!   assistant output that was written across several records
//! - Rendering the result as a Markdown document or a self-contained HTML page
//!
//! # Example
//!
//! ```no_run
//! use claude_share::{ParseOptions, SessionMeta, find_session_path, reconstruct_session, render_markdown};
//! use std::path::PathBuf;
//!
//! let claude_dir = PathBuf::from("/Users/alice/.claude");
//! let path = find_session_path(&claude_dir, "550e8400-e29b-41d4-a716-446655440000")?;
//! let messages = reconstruct_session(&path, &ParseOptions::new(true, false))?;
//! let doc = render_markdown(&messages, &SessionMeta::new("550e8400", messages.len()));
//! println!("{}", doc);
//! # Ok::<(), anyhow::Error>(())
//! ```

pub mod cli;
pub mod error;
pub mod models;
pub mod parsers;
pub mod render;
pub mod utils;

// Re-export commonly used types
pub use error::ShareError;
pub use models::{ContentBlock, Message, ParseOptions, Role, SessionMeta, SessionSummary};
pub use parsers::{reconstruct_session, scan_history};
pub use render::{render_html, render_markdown};
pub use utils::find_session_path;
