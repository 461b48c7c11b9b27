use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result, bail};
use clap::{Parser, Subcommand, ValueEnum};
use tracing::warn;

use crate::models::meta::project_name;
use crate::models::{Message, ParseOptions, SessionMeta, SessionSummary};
use crate::parsers::{reconstruct_session, scan_history};
use crate::render::{render_html, render_markdown};
use crate::utils::{find_session_path, format_list_timestamp, history_path, resolve_claude_dir};

/// Prompts longer than this many characters are shortened in the session list
const LIST_PROMPT_CHARS: usize = 60;

#[derive(Parser)]
#[command(name = "claude-share")]
#[command(version = "0.1.0")]
#[command(about = "Export Claude Code sessions as readable documents", long_about = None)]
pub struct Cli {
    /// Claude data directory (defaults to ~/.claude)
    #[arg(long, global = true, value_name = "DIR")]
    pub claude_dir: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// List past sessions, newest first
    List {
        /// Only show sessions whose project path contains this text (case-insensitive)
        #[arg(long)]
        project: Option<String>,
    },
    /// Export a session as a document
    Export {
        /// Session id as shown by `list`
        session_id: String,

        /// Output file (default: stdout)
        #[arg(short, long, value_name = "FILE")]
        output: Option<PathBuf>,

        /// Include tool calls and results
        #[arg(long)]
        include_tools: bool,

        /// Include thinking blocks
        #[arg(long)]
        include_thinking: bool,

        /// Output format
        #[arg(long, value_enum, default_value_t = ExportFormat::Markdown)]
        format: ExportFormat,
    },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum ExportFormat {
    Markdown,
    Html,
    Json,
}

pub fn run() -> Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Some(Commands::List { project }) => {
            let claude_dir = resolve_claude_dir(cli.claude_dir.as_deref())?;
            list_sessions(&claude_dir, project.as_deref())?;
        }
        Some(Commands::Export { session_id, output, include_tools, include_thinking, format }) => {
            let claude_dir = resolve_claude_dir(cli.claude_dir.as_deref())?;
            let options = ParseOptions::new(include_tools, include_thinking);
            export_session(&claude_dir, &session_id, &options, format, output.as_deref())?;
        }
        None => {
            println!("Use --help for usage information");
        }
    }

    Ok(())
}

fn list_sessions(claude_dir: &Path, project_filter: Option<&str>) -> Result<()> {
    let sessions = scan_history(&history_path(claude_dir))
        .with_context(|| format!("Failed to read history in {}", claude_dir.display()))?;

    let filter = project_filter.map(str::to_lowercase).filter(|f| !f.is_empty());
    for session in &sessions {
        if let Some(filter) = &filter
            && !session.project.to_lowercase().contains(filter.as_str())
        {
            continue;
        }
        println!("{}", format_session_row(session));
    }

    Ok(())
}

/// One line of `list` output: id, project name, date, shortened first prompt
pub fn format_session_row(session: &SessionSummary) -> String {
    format!(
        "{:<38}  {:<20}  {}  {}",
        session.id,
        project_name(&session.project),
        format_list_timestamp(session.timestamp),
        shorten_prompt(&session.first_prompt, LIST_PROMPT_CHARS)
    )
}

fn shorten_prompt(prompt: &str, max_chars: usize) -> String {
    let single_line = prompt.replace(['\n', '\r'], " ");
    if single_line.chars().count() <= max_chars {
        return single_line;
    }
    let mut shortened: String = single_line.chars().take(max_chars).collect();
    shortened.push('…');
    shortened
}

fn export_session(
    claude_dir: &Path,
    session_id: &str,
    options: &ParseOptions,
    format: ExportFormat,
    output: Option<&Path>,
) -> Result<()> {
    let path = find_session_path(claude_dir, session_id)?;
    let messages = reconstruct_session(&path, options)
        .with_context(|| format!("Failed to parse session {}", session_id))?;

    if messages.is_empty() {
        bail!("No messages found in session {}", session_id);
    }

    let document = match format {
        ExportFormat::Markdown => {
            let meta = lookup_meta(claude_dir, session_id, messages.len());
            render_markdown(&messages, &meta)
        }
        ExportFormat::Html => {
            let meta = lookup_meta(claude_dir, session_id, messages.len());
            render_html(&messages, &meta)?
        }
        ExportFormat::Json => render_json(&messages)?,
    };

    match output {
        Some(output) => {
            fs::write(output, document)
                .with_context(|| format!("Failed to write {}", output.display()))?;
            eprintln!("Exported to {}", output.display());
        }
        None => print!("{}", document),
    }

    Ok(())
}

fn render_json(messages: &[Message]) -> Result<String> {
    let mut json =
        serde_json::to_string_pretty(messages).context("Failed to serialize messages")?;
    json.push('\n');
    Ok(json)
}

/// Header metadata from history; a missing or unreadable history only loses the header
fn lookup_meta(claude_dir: &Path, session_id: &str, message_count: usize) -> SessionMeta {
    match scan_history(&history_path(claude_dir)) {
        Ok(sessions) => sessions
            .iter()
            .find(|s| s.id == session_id)
            .map(|s| SessionMeta::from_summary(s, message_count))
            .unwrap_or_else(|| SessionMeta::new(session_id, message_count)),
        Err(e) => {
            warn!("Could not read history for session metadata: {}", e);
            SessionMeta::new(session_id, message_count)
        }
    }
}
