//! Self-contained HTML page for sharing a session.
//!
//! Message text is Markdown and is converted with `pulldown-cmark`. Fenced
//! code and tool input are highlighted with `syntect` using inline styles, so
//! the page needs no external stylesheet. The page layout lives in
//! `templates/session.html` and is filled in by `tera` with autoescaping on;
//! only markup produced here is inserted unescaped.

use std::sync::LazyLock;

use pulldown_cmark::{CodeBlockKind, CowStr, Event, Options, Parser, Tag, TagEnd, html::push_html};
use serde::Serialize;
use syntect::highlighting::ThemeSet;
use syntect::html::highlighted_html_for_string;
use syntect::parsing::SyntaxSet;
use tera::{Context, Tera};

use crate::error::Result;
use crate::models::{ContentBlock, Message, Role, SessionMeta};
use crate::render::{document_title, is_visible, pretty_json, truncate_output};

const PAGE_TEMPLATE: &str = include_str!("templates/session.html");
const HIGHLIGHT_THEME: &str = "base16-ocean.dark";

static SYNTAXES: LazyLock<SyntaxSet> = LazyLock::new(SyntaxSet::load_defaults_newlines);
static THEMES: LazyLock<ThemeSet> = LazyLock::new(ThemeSet::load_defaults);

#[derive(Serialize)]
struct PageMessage {
    role: &'static str,
    sender: &'static str,
    blocks: Vec<PageBlock>,
}

/// One content block as the template sees it.
///
/// `html` is trusted markup; `text` is escaped by the template.
#[derive(Serialize)]
struct PageBlock {
    kind: &'static str,
    html: String,
    text: String,
    label: String,
    is_error: bool,
}

impl PageBlock {
    fn new(kind: &'static str) -> Self {
        Self { kind, html: String::new(), text: String::new(), label: String::new(), is_error: false }
    }
}

/// Render a reconstructed session as a standalone HTML page.
///
/// Visibility and truncation follow the Markdown renderer: user messages made
/// only of tool results are left out and tool output is cut at 2000 bytes.
///
/// # Errors
///
/// Returns [`ShareError::Render`](crate::ShareError::Render) if the page
/// template fails to render.
pub fn render_html(messages: &[Message], meta: &SessionMeta) -> Result<String> {
    let page: Vec<PageMessage> = messages.iter().filter(|m| is_visible(m)).map(page_message).collect();

    let mut context = Context::new();
    context.insert("title", document_title(meta));
    context.insert("meta", meta);
    context.insert("messages", &page);

    Ok(Tera::one_off(PAGE_TEMPLATE, &context, true)?)
}

fn page_message(message: &Message) -> PageMessage {
    let (role, sender) = match message.role {
        Role::User => (Role::User.as_str(), "You"),
        Role::Assistant => (Role::Assistant.as_str(), "Claude"),
    };
    PageMessage { role, sender, blocks: message.blocks.iter().map(page_block).collect() }
}

fn page_block(block: &ContentBlock) -> PageBlock {
    match block {
        ContentBlock::Text { text } => PageBlock { html: markdown_to_html(text), ..PageBlock::new("text") },
        ContentBlock::Thinking { text } => {
            PageBlock { html: markdown_to_html(text), ..PageBlock::new("thinking") }
        }
        ContentBlock::ToolUse { name, input, .. } => {
            let pretty = pretty_json(input);
            PageBlock {
                html: highlight(&pretty, "json").unwrap_or_default(),
                text: pretty,
                label: name.clone(),
                ..PageBlock::new("tool_use")
            }
        }
        ContentBlock::ToolResult { text, is_error, .. } => PageBlock {
            text: truncate_output(text),
            label: if *is_error { "Error" } else { "Result" }.to_string(),
            is_error: *is_error,
            ..PageBlock::new("tool_result")
        },
    }
}

/// Convert message Markdown to HTML, highlighting fenced code.
///
/// Raw HTML in the message is shown as text.
fn markdown_to_html(text: &str) -> String {
    let options = Options::ENABLE_TABLES | Options::ENABLE_STRIKETHROUGH | Options::ENABLE_TASKLISTS;

    let mut events = Vec::new();
    // Language and body of the code block being collected
    let mut code: Option<(String, String)> = None;

    for event in Parser::new_ext(text, options) {
        match event {
            Event::Start(Tag::CodeBlock(kind)) => {
                let lang = match kind {
                    CodeBlockKind::Fenced(info) => info.split_whitespace().next().unwrap_or("").to_string(),
                    CodeBlockKind::Indented => String::new(),
                };
                code = Some((lang, String::new()));
            }
            Event::Text(chunk) => match code.as_mut() {
                Some((_, body)) => body.push_str(&chunk),
                None => events.push(Event::Text(chunk)),
            },
            Event::End(TagEnd::CodeBlock) => {
                if let Some((lang, body)) = code.take() {
                    push_code_block(&mut events, lang, body);
                }
            }
            Event::Html(raw) | Event::InlineHtml(raw) => events.push(Event::Text(raw)),
            other => events.push(other),
        }
    }

    let mut html = String::new();
    push_html(&mut html, events.into_iter());
    html
}

fn push_code_block(events: &mut Vec<Event<'_>>, lang: String, body: String) {
    if let Some(highlighted) = highlight(&body, &lang) {
        events.push(Event::Html(highlighted.into()));
        return;
    }
    events.push(Event::Start(Tag::CodeBlock(CodeBlockKind::Fenced(CowStr::from(lang)))));
    events.push(Event::Text(body.into()));
    events.push(Event::End(TagEnd::CodeBlock));
}

/// Highlighted `<pre>` markup, or `None` for unknown languages
fn highlight(code: &str, lang: &str) -> Option<String> {
    let syntax = SYNTAXES.find_syntax_by_token(lang)?;
    let theme = THEMES.themes.get(HIGHLIGHT_THEME)?;
    highlighted_html_for_string(code, &SYNTAXES, syntax, theme).ok()
}
