//! Terminal implementation of [`Prompter`] on top of `dialoguer`.

use dialoguer::theme::ColorfulTheme;
use dialoguer::{Confirm, Input, MultiSelect, Select};

use ignite_launch::{PromptError, Prompter, Validator};

#[derive(Default)]
pub struct TerminalPrompter {
    theme: ColorfulTheme,
}

fn prompt_err(e: dialoguer::Error) -> PromptError {
    match e {
        dialoguer::Error::IO(io) if io.kind() == std::io::ErrorKind::Interrupted => {
            PromptError::Cancelled
        }
        dialoguer::Error::IO(io) => PromptError::Io(io),
    }
}

impl Prompter for TerminalPrompter {
    fn confirm(&mut self, message: &str, default: bool) -> Result<bool, PromptError> {
        Confirm::with_theme(&self.theme)
            .with_prompt(message)
            .default(default)
            .interact()
            .map_err(prompt_err)
    }

    fn input(
        &mut self,
        message: &str,
        default: Option<&str>,
        validate: Option<Validator<'_>>,
    ) -> Result<String, PromptError> {
        let mut input = Input::<String>::with_theme(&self.theme).with_prompt(message);
        if let Some(default) = default {
            input = input.default(default.to_string());
        }
        if let Some(validate) = validate {
            input = input.validate_with(move |value: &String| validate(value.as_str()));
        }
        input.interact_text().map_err(prompt_err)
    }

    fn select(
        &mut self,
        message: &str,
        items: &[String],
        default: usize,
    ) -> Result<usize, PromptError> {
        Select::with_theme(&self.theme)
            .with_prompt(message)
            .items(items)
            .default(default)
            .interact()
            .map_err(prompt_err)
    }

    fn multi_select(
        &mut self,
        message: &str,
        items: &[String],
        defaults: &[bool],
    ) -> Result<Vec<usize>, PromptError> {
        MultiSelect::with_theme(&self.theme)
            .with_prompt(message)
            .items(items)
            .defaults(defaults)
            .interact()
            .map_err(prompt_err)
    }
}
