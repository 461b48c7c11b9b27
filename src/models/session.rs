use serde::Serialize;

/// Longest line the session and history readers accept: 10MB
pub const DEFAULT_MAX_LINE_BYTES: usize = 10 * 1024 * 1024;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    User,
    Assistant,
}

impl Role {
    pub fn as_str(self) -> &'static str {
        match self {
            Role::User => "user",
            Role::Assistant => "assistant",
        }
    }
}

/// Smallest displayable unit of a message.
///
/// `Text` and `Thinking` are never constructed with empty strings by the parsers.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum ContentBlock {
    Text {
        text: String,
    },
    Thinking {
        text: String,
    },
    ToolUse {
        name: String,
        id: String,
        /// Tool arguments as JSON text, copied verbatim from the log
        input: String,
    },
    ToolResult {
        text: String,
        tool_use_id: String,
        is_error: bool,
    },
}

impl ContentBlock {
    pub fn text(text: impl Into<String>) -> Self {
        ContentBlock::Text { text: text.into() }
    }

    pub fn is_tool_result(&self) -> bool {
        matches!(self, ContentBlock::ToolResult { .. })
    }
}

/// One reconstructed conversation turn. Always has at least one block.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Message {
    pub role: Role,
    pub blocks: Vec<ContentBlock>,
    /// Timestamp string as written in the log (first line of the turn)
    pub timestamp: String,
}

/// Controls which optional block kinds the session reconstructor keeps.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ParseOptions {
    /// Keep `tool_use` and `tool_result` blocks
    pub include_tools: bool,
    /// Keep `thinking` blocks
    pub include_thinking: bool,
    pub max_line_bytes: usize,
}

impl Default for ParseOptions {
    fn default() -> Self {
        Self { include_tools: false, include_thinking: false, max_line_bytes: DEFAULT_MAX_LINE_BYTES }
    }
}

impl ParseOptions {
    pub fn new(include_tools: bool, include_thinking: bool) -> Self {
        Self { include_tools, include_thinking, ..Self::default() }
    }
}
