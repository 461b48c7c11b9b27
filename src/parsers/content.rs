//! Content-block extraction for user and assistant messages.
//!
//! Message content in a session log is either a bare string or an array of
//! typed items. [`MessageContent::probe`] tries the string shape first and
//! falls back to the array shape; anything else carries no content.

use serde_json::value::RawValue;
use tracing::trace;

use crate::models::{ContentBlock, ParseOptions};
use crate::parsers::records::{RawContentItem, RawTextItem};

/// Substrings marking command echoes and injected system text in user content
const SYNTHETIC_MARKERS: [&str; 3] = ["<command-name>", "<local-command", "<system-reminder>"];

/// Input recorded for a tool call that carried no arguments
const EMPTY_TOOL_INPUT: &str = "{}";

/// Returns true if user text was generated by Claude Code rather than typed by the user
pub fn is_synthetic_text(text: &str) -> bool {
    SYNTHETIC_MARKERS.iter().any(|marker| text.contains(marker))
}

/// Decoded `message.content`
#[derive(Debug)]
pub enum MessageContent {
    Text(String),
    Items(Vec<ContentItem>),
}

impl MessageContent {
    /// Decode raw content as a string, else as an array of typed items.
    ///
    /// Returns `None` when the content is absent or neither shape.
    pub fn probe(raw: Option<&RawValue>) -> Option<Self> {
        let raw = raw?;
        if let Ok(text) = serde_json::from_str::<String>(raw.get()) {
            return Some(MessageContent::Text(text));
        }
        match serde_json::from_str::<Vec<RawContentItem>>(raw.get()) {
            Ok(items) => Some(MessageContent::Items(items.into_iter().map(Into::into).collect())),
            Err(e) => {
                trace!("Content is neither a string nor an item array: {}", e);
                None
            }
        }
    }
}

/// One typed item of a content array
#[derive(Debug)]
pub enum ContentItem {
    Text(String),
    Thinking { thinking: String, text: String },
    ToolUse { id: String, name: String, input: Option<Box<RawValue>> },
    ToolResult { tool_use_id: String, content: Option<Box<RawValue>>, is_error: bool },
    Other,
}

impl From<RawContentItem> for ContentItem {
    fn from(item: RawContentItem) -> Self {
        match item.kind.as_str() {
            "text" => ContentItem::Text(item.text),
            "thinking" => ContentItem::Thinking { thinking: item.thinking, text: item.text },
            "tool_use" => ContentItem::ToolUse { id: item.id, name: item.name, input: item.input },
            "tool_result" => ContentItem::ToolResult {
                tool_use_id: item.tool_use_id,
                content: item.content,
                is_error: item.is_error,
            },
            _ => ContentItem::Other,
        }
    }
}

/// Blocks of a (non-meta) user message.
///
/// A bare string containing a synthetic marker discards the whole message;
/// inside an item array the markers only drop the affected text item.
pub fn user_blocks(content: MessageContent, options: &ParseOptions) -> Vec<ContentBlock> {
    match content {
        MessageContent::Text(text) => {
            if text.is_empty() || is_synthetic_text(&text) {
                Vec::new()
            } else {
                vec![ContentBlock::Text { text }]
            }
        }
        MessageContent::Items(items) => items
            .into_iter()
            .filter_map(|item| match item {
                ContentItem::Text(text) if !text.is_empty() && !is_synthetic_text(&text) => {
                    Some(ContentBlock::Text { text })
                }
                ContentItem::ToolResult { tool_use_id, content, is_error }
                    if options.include_tools =>
                {
                    Some(ContentBlock::ToolResult {
                        text: tool_result_text(content.as_deref()),
                        tool_use_id,
                        is_error,
                    })
                }
                _ => None,
            })
            .collect(),
    }
}

/// Blocks of one assistant record. Bare-string content yields nothing.
pub fn assistant_blocks(content: MessageContent, options: &ParseOptions) -> Vec<ContentBlock> {
    let MessageContent::Items(items) = content else {
        return Vec::new();
    };

    items
        .into_iter()
        .filter_map(|item| match item {
            ContentItem::Text(text) if !text.is_empty() => Some(ContentBlock::Text { text }),
            ContentItem::Thinking { thinking, text } if options.include_thinking => {
                let text = if thinking.is_empty() { text } else { thinking };
                (!text.is_empty()).then_some(ContentBlock::Thinking { text })
            }
            ContentItem::ToolUse { id, name, input } if options.include_tools => {
                let input = input
                    .map(|raw| raw.get().to_string())
                    .unwrap_or_else(|| EMPTY_TOOL_INPUT.to_string());
                Some(ContentBlock::ToolUse { name, id, input })
            }
            _ => None,
        })
        .collect()
}

/// Display text of a `tool_result` item's content.
///
/// - string: returned verbatim
/// - array of typed items: the non-empty `text` items joined with newlines
/// - any other JSON: its raw text
/// - absent: empty string
pub fn tool_result_text(raw: Option<&RawValue>) -> String {
    let Some(raw) = raw else {
        return String::new();
    };

    if let Ok(text) = serde_json::from_str::<String>(raw.get()) {
        return text;
    }

    if let Ok(items) = serde_json::from_str::<Vec<RawTextItem>>(raw.get()) {
        return items
            .into_iter()
            .filter(|item| item.kind == "text" && !item.text.is_empty())
            .map(|item| item.text)
            .collect::<Vec<_>>()
            .join("\n");
    }

    raw.get().to_string()
}
