//! Session reconstruction: one session log in, ordered messages out.
//!
//! A session log interleaves user records, assistant records and bookkeeping
//! (progress, file-history snapshots, ...). Assistant output is written as
//! several records sharing one message id, possibly with other records in
//! between, so the pass keeps two buffers:
//!
//! - user messages, each tagged with the sequence number of its line
//! - assistant groups keyed by message id, positioned at their first line
//!
//! The sequence number counts every line, including skipped ones. Sorting
//! both buffers by it restores chronological order.

use std::collections::HashMap;
use std::fs::File;
use std::io::BufReader;
use std::path::Path;

use tracing::{debug, trace};

use crate::error::{Result, ShareError};
use crate::models::{ContentBlock, Message, ParseOptions, Role};
use crate::parsers::content::{MessageContent, assistant_blocks, user_blocks};
use crate::parsers::escapes::replace_lone_surrogates;
use crate::parsers::lines::JsonlLines;
use crate::parsers::records::{ApiMessage, RecordKind, SessionRecord};

/// Assistant blocks collected for one message id
#[derive(Debug)]
struct AssistantGroup {
    blocks: Vec<ContentBlock>,
    timestamp: String,
    first_seq: usize,
}

/// Accumulation state of a single reconstruction pass
#[derive(Debug, Default)]
struct Reconstruction {
    user_messages: Vec<(usize, Message)>,
    groups: HashMap<String, AssistantGroup>,
    /// Message ids in first-seen order
    group_order: Vec<String>,
}

impl Reconstruction {
    fn push_user(&mut self, seq: usize, record: SessionRecord, options: &ParseOptions) {
        let Some(api) = decode_message(&record) else {
            return;
        };
        let Some(content) = MessageContent::probe(api.content.as_deref()) else {
            return;
        };

        let blocks = user_blocks(content, options);
        if blocks.is_empty() {
            trace!("Dropping user message at line {} with no displayable content", seq + 1);
            return;
        }

        self.user_messages
            .push((seq, Message { role: Role::User, blocks, timestamp: record.timestamp }));
    }

    fn push_assistant(&mut self, seq: usize, record: SessionRecord, options: &ParseOptions) {
        let Some(api) = decode_message(&record) else {
            return;
        };
        let Some(content) = MessageContent::probe(api.content.as_deref()) else {
            return;
        };

        let blocks = assistant_blocks(content, options);
        if blocks.is_empty() {
            return;
        }

        match self.groups.get_mut(&api.id) {
            Some(group) => group.blocks.extend(blocks),
            None => {
                self.group_order.push(api.id.clone());
                self.groups.insert(
                    api.id,
                    AssistantGroup { blocks, timestamp: record.timestamp, first_seq: seq },
                );
            }
        }
    }

    /// Merge both buffers into one sequence ordered by line position
    fn into_messages(mut self) -> Vec<Message> {
        let mut ordered = self.user_messages;
        ordered.reserve(self.group_order.len());

        for id in &self.group_order {
            if let Some(group) = self.groups.remove(id)
                && !group.blocks.is_empty()
            {
                ordered.push((
                    group.first_seq,
                    Message {
                        role: Role::Assistant,
                        blocks: group.blocks,
                        timestamp: group.timestamp,
                    },
                ));
            }
        }

        ordered.sort_by_key(|(seq, _)| *seq);
        ordered.into_iter().map(|(_, message)| message).collect()
    }
}

/// Decode the nested `message` object of a user/assistant record
fn decode_message(record: &SessionRecord) -> Option<ApiMessage> {
    let raw = record.message.as_deref()?;
    match serde_json::from_str::<ApiMessage>(raw.get()) {
        Ok(api) => Some(api),
        Err(e) => {
            trace!("Skipping record with undecodable message: {}", e);
            None
        }
    }
}

/// Reconstruct the conversation stored in one session log.
///
/// Returns user and assistant messages in the order they happened. Assistant
/// records sharing a message id are merged into one message placed where the
/// first of them appeared. Meta records, non-conversation records, malformed
/// lines and messages without displayable blocks are skipped.
///
/// # Errors
///
/// Returns [`ShareError::Open`] if the log cannot be opened and
/// [`ShareError::Read`] if reading fails part way, including a line longer than
/// [`ParseOptions::max_line_bytes`]. No partial result is returned.
///
/// # Examples
///
/// ```no_run
/// use std::path::Path;
/// use claude_share::{ParseOptions, reconstruct_session};
///
/// let messages = reconstruct_session(Path::new("session.jsonl"), &ParseOptions::new(true, false))?;
/// println!("{} messages", messages.len());
/// # Ok::<(), claude_share::ShareError>(())
/// ```
pub fn reconstruct_session(path: &Path, options: &ParseOptions) -> Result<Vec<Message>> {
    let file = File::open(path).map_err(|e| ShareError::open(path, e))?;
    let mut lines = JsonlLines::new(BufReader::new(file), options.max_line_bytes);

    let mut state = Reconstruction::default();
    let mut malformed = 0usize;
    let mut seq = 0usize;

    while let Some(line) = lines.next_line().map_err(|e| ShareError::read(path, e))? {
        let parsed = serde_json::from_slice::<SessionRecord>(&replace_lone_surrogates(line));
        match parsed {
            Ok(record) => match record.record_kind() {
                RecordKind::User if record.is_meta => {}
                RecordKind::User => state.push_user(seq, record, options),
                RecordKind::Assistant => state.push_assistant(seq, record, options),
                RecordKind::Other => {}
            },
            Err(e) => {
                trace!("Skipping session line {}: {}", seq + 1, e);
                malformed += 1;
            }
        }
        seq += 1;
    }

    let messages = state.into_messages();
    debug!(
        "Reconstructed {}: {} messages from {} lines ({} malformed)",
        path.display(),
        messages.len(),
        seq,
        malformed
    );

    Ok(messages)
}
