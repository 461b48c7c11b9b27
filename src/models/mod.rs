//! Data models for exported Claude Code sessions.
//!
//! - [`SessionSummary`] - One session as recorded in history.jsonl
//! - [`Message`] / [`ContentBlock`] - A reconstructed conversation turn
//! - [`ParseOptions`] - Which optional block kinds the reconstructor keeps
//! - [`SessionMeta`] - Header information for a rendered document
//!
//! The raw wire shapes of the two JSONL formats live in
//! [`crate::parsers::records`]; these types are what the parsers hand back.

pub mod history;
pub mod meta;
pub mod session;

pub use history::SessionSummary;
pub use meta::SessionMeta;
pub use session::{ContentBlock, DEFAULT_MAX_LINE_BYTES, Message, ParseOptions, Role};
