//! worklog-core: the daily work-log model and the pure document logic.
//!
//! The binary in `add-ons/worklog-cli` wires these pieces to a terminal and a remote store;
//! nothing in this crate performs network I/O.

mod answers;
mod config;
pub mod merger;
pub mod prompt;

pub use answers::{AnswerSet, ProductivityScore, ScoreError};
pub use config::{ConfigError, WorklogConfig, DEFAULT_API_BASE, DEFAULT_FILENAME};
pub use merger::{merge_entry, render_section, MergeOutcome, SectionChange};
pub use prompt::{collect_answers, Operator, PromptError};

/// Date format used for headings, index links and the `--date` flag.
pub const DATE_FORMAT: &str = "%Y-%m-%d";
