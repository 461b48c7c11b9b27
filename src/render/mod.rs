//! Document rendering for reconstructed sessions.
//!
//! Both renderers share the rules below: the document title, which messages
//! are shown, and how tool input and output are presented.

pub mod html;
pub mod markdown;

pub use html::render_html;
pub use markdown::render_markdown;

use crate::models::{Message, Role, SessionMeta};

/// Tool output longer than this many bytes is cut off in the document
pub const MAX_TOOL_OUTPUT_BYTES: usize = 2000;

const DEFAULT_TITLE: &str = "Claude Conversation";

/// First non-blank line of the session's first prompt, trimmed
pub fn document_title(meta: &SessionMeta) -> &str {
    meta.first_prompt
        .lines()
        .map(str::trim)
        .find(|line| !line.is_empty())
        .unwrap_or(DEFAULT_TITLE)
}

/// A user message needs something other than tool output to be shown
pub(crate) fn is_visible(message: &Message) -> bool {
    match message.role {
        Role::Assistant => !message.blocks.is_empty(),
        Role::User => message.blocks.iter().any(|b| !b.is_tool_result()),
    }
}

/// Pretty-print JSON text, or return it unchanged if it does not parse
pub(crate) fn pretty_json(input: &str) -> String {
    serde_json::from_str::<serde_json::Value>(input)
        .and_then(|value| serde_json::to_string_pretty(&value))
        .unwrap_or_else(|_| input.to_string())
}

/// Cut tool output to [`MAX_TOOL_OUTPUT_BYTES`] on a char boundary, marking the cut
pub(crate) fn truncate_output(text: &str) -> String {
    truncate(text, MAX_TOOL_OUTPUT_BYTES)
}

fn truncate(text: &str, max_bytes: usize) -> String {
    if text.len() <= max_bytes {
        return text.to_string();
    }

    let mut end = max_bytes;
    while !text.is_char_boundary(end) {
        end -= 1;
    }
    format!("{}\n... (truncated)", &text[..end])
}
