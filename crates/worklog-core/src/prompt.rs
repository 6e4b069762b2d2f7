//! Prompt collector: asks the operator for the four answers of the day.
//!
//! The terminal is abstracted behind [`Operator`] so the collection rules (list until empty
//! line, at least one item, score restricted to 1..=5) run the same against a real terminal
//! and a scripted one.

use crate::answers::{AnswerSet, ProductivityScore};
use thiserror::Error;

pub const WHAT_I_DID: &str = "What I did";
pub const WHATS_NEXT: &str = "What's next";
pub const WHAT_BLOCK: &str = "What Block";
pub const SCORE_PROMPT: &str = "Productivity Score (1-5):";

pub const AT_LEAST_ONE: &str = "At least one point required.";
pub const INVALID_SCORE: &str = "Please enter a single number: 1, 2, 3, 4 or 5.";

#[derive(Debug, Error)]
pub enum PromptError {
    #[error("terminal I/O failed: {0}")]
    Io(#[from] std::io::Error),
    #[error("input closed before all answers were given")]
    Closed,
    #[error("prompt interrupted")]
    Interrupted,
    #[error("terminal error: {0}")]
    Terminal(String),
}

/// The human on the other side of the prompts.
pub trait Operator {
    /// Show `prompt` and block until one line is submitted (without its line terminator).
    fn ask(&mut self, prompt: &str) -> Result<String, PromptError>;
    /// Show a line of guidance or heading text.
    fn say(&mut self, message: &str) -> Result<(), PromptError>;
}

/// Collect one list: numbered lines until an empty line, with at least one entry.
pub fn collect_list<O: Operator + ?Sized>(op: &mut O, title: &str) -> Result<Vec<String>, PromptError> {
    op.say(&format!("{} (empty line to finish):", title))?;
    let mut items: Vec<String> = Vec::new();
    loop {
        let line = op.ask(&format!("{}.", items.len() + 1))?;
        let trimmed = line.trim();
        if trimmed.is_empty() {
            if items.is_empty() {
                op.say(AT_LEAST_ONE)?;
                continue;
            }
            break;
        }
        items.push(trimmed.to_string());
    }
    tracing::debug!(title, count = items.len(), "list collected");
    Ok(items)
}

/// Ask for the score until the answer is exactly one of "1".."5".
pub fn collect_score<O: Operator + ?Sized>(op: &mut O) -> Result<ProductivityScore, PromptError> {
    loop {
        let line = op.ask(SCORE_PROMPT)?;
        match line.parse::<ProductivityScore>() {
            Ok(score) => return Ok(score),
            Err(e) => {
                tracing::debug!(error = %e, "score rejected");
                op.say(INVALID_SCORE)?;
            }
        }
    }
}

/// Run the four prompts in order and return the complete answer set.
pub fn collect_answers<O: Operator + ?Sized>(op: &mut O) -> Result<AnswerSet, PromptError> {
    let what_i_did = collect_list(op, WHAT_I_DID)?;
    let whats_next = collect_list(op, WHATS_NEXT)?;
    let what_block = collect_list(op, WHAT_BLOCK)?;
    let productivity_score = collect_score(op)?;
    Ok(AnswerSet {
        what_i_did,
        whats_next,
        what_block,
        productivity_score,
    })
}
