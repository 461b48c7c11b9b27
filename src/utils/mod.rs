pub mod environment;
pub mod paths;
pub mod timestamps;

pub use environment::{get_claude_dir, resolve_claude_dir};
pub use paths::{find_session_path, history_path, validate_session_id};
pub use timestamps::{format_export_date, format_list_timestamp};
