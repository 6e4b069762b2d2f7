use inquire::{InquireError, Text};
use worklog_core::{Operator, PromptError};

/// Operator backed by the real terminal.
pub struct TerminalOperator;

impl Operator for TerminalOperator {
    fn ask(&mut self, prompt: &str) -> Result<String, PromptError> {
        Text::new(prompt).prompt().map_err(into_prompt_error)
    }

    fn say(&mut self, message: &str) -> Result<(), PromptError> {
        println!("{}", message);
        Ok(())
    }
}

fn into_prompt_error(err: InquireError) -> PromptError {
    match err {
        InquireError::OperationCanceled | InquireError::OperationInterrupted => PromptError::Interrupted,
        InquireError::IO(e) => PromptError::Io(e),
        other => PromptError::Terminal(other.to_string()),
    }
}
