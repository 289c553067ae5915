//! Prompting capability used by the wizard and the runner.
//!
//! Nothing in this crate talks to a terminal directly; the CLI supplies a
//! `dialoguer` implementation and tests supply a scripted one.

use thiserror::Error;

/// Input validator: `Err(message)` rejects the answer and re-asks.
pub type Validator<'a> = &'a dyn Fn(&str) -> Result<(), String>;

#[derive(Debug, Error)]
pub enum PromptError {
    #[error("prompt I/O failed: {0}")]
    Io(#[from] std::io::Error),

    /// The user aborted the prompt (Ctrl-C / Esc).
    #[error("prompt cancelled")]
    Cancelled,
}

pub trait Prompter {
    /// Yes/no question.
    fn confirm(&mut self, message: &str, default: bool) -> Result<bool, PromptError>;

    /// Free text, optionally pre-filled and validated.
    fn input(
        &mut self,
        message: &str,
        default: Option<&str>,
        validate: Option<Validator<'_>>,
    ) -> Result<String, PromptError>;

    /// Single choice; returns the chosen index.
    fn select(&mut self, message: &str, items: &[String], default: usize)
        -> Result<usize, PromptError>;

    /// Any number of choices; returns the chosen indices in item order.
    fn multi_select(
        &mut self,
        message: &str,
        items: &[String],
        defaults: &[bool],
    ) -> Result<Vec<usize>, PromptError>;
}

impl<P: Prompter + ?Sized> Prompter for &mut P {
    fn confirm(&mut self, message: &str, default: bool) -> Result<bool, PromptError> {
        (**self).confirm(message, default)
    }

    fn input(
        &mut self,
        message: &str,
        default: Option<&str>,
        validate: Option<Validator<'_>>,
    ) -> Result<String, PromptError> {
        (**self).input(message, default, validate)
    }

    fn select(
        &mut self,
        message: &str,
        items: &[String],
        default: usize,
    ) -> Result<usize, PromptError> {
        (**self).select(message, items, default)
    }

    fn multi_select(
        &mut self,
        message: &str,
        items: &[String],
        defaults: &[bool],
    ) -> Result<Vec<usize>, PromptError> {
        (**self).multi_select(message, items, defaults)
    }
}
