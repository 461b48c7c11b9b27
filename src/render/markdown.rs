use crate::models::{ContentBlock, Message, Role, SessionMeta};
use crate::render::{document_title, is_visible, pretty_json, truncate_output};

/// Render a reconstructed session as a standalone Markdown document.
///
/// User messages made only of tool results are left out; their output is
/// only shown alongside other user content.
pub fn render_markdown(messages: &[Message], meta: &SessionMeta) -> String {
    let mut out = format!("# {}\n\n", document_title(meta));

    render_meta(&mut out, meta);
    out.push_str("---\n");

    for message in messages.iter().filter(|m| is_visible(m)) {
        let heading = match message.role {
            Role::User => "You",
            Role::Assistant => "Claude",
        };
        out.push_str(&format!("\n## {}\n\n", heading));

        for block in &message.blocks {
            render_block(&mut out, block);
        }
    }

    out
}

fn render_meta(out: &mut String, meta: &SessionMeta) {
    let mut items = Vec::new();
    if !meta.session_id.is_empty() {
        items.push(format!("- **Session:** `{}`", meta.session_id));
    }
    if !meta.project.is_empty() {
        items.push(format!("- **Project:** {}", meta.project));
    }
    if !meta.date.is_empty() {
        items.push(format!("- **Date:** {}", meta.date));
    }
    if meta.message_count > 0 {
        items.push(format!("- **Messages:** {}", meta.message_count));
    }

    if !items.is_empty() {
        out.push_str(&items.join("\n"));
        out.push_str("\n\n");
    }
}

fn render_block(out: &mut String, block: &ContentBlock) {
    match block {
        ContentBlock::Text { text } => {
            out.push_str(text.trim_end());
            out.push_str("\n\n");
        }
        ContentBlock::Thinking { text } => {
            out.push_str(&format!(
                "<details>\n<summary>Thinking…</summary>\n\n{}\n\n</details>\n\n",
                text.trim_end()
            ));
        }
        ContentBlock::ToolUse { name, input, .. } => {
            out.push_str(&format!("**Tool: {}**\n\n", name));
            push_fenced(out, "json", &pretty_json(input));
        }
        ContentBlock::ToolResult { text, is_error, .. } => {
            let label = if *is_error { "Error" } else { "Result" };
            out.push_str(&format!("**{}**\n\n", label));
            push_fenced(out, "", &truncate_output(text));
        }
    }
}

/// Append a fenced code block whose fence is longer than any backtick run in `body`
fn push_fenced(out: &mut String, lang: &str, body: &str) {
    let fence = "`".repeat(longest_backtick_run(body).max(2) + 1);
    out.push_str(&format!("{}{}\n{}\n{}\n\n", fence, lang, body.trim_end_matches('\n'), fence));
}

fn longest_backtick_run(text: &str) -> usize {
    let mut longest = 0;
    let mut current = 0;
    for c in text.chars() {
        if c == '`' {
            current += 1;
            longest = longest.max(current);
        } else {
            current = 0;
        }
    }
    longest
}
