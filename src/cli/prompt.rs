use console::Term;
use dialoguer::theme::ColorfulTheme;
use dialoguer::Input;
use tokio::io::{AsyncBufRead, AsyncBufReadExt, BufReader};
use crate::utils::error::{Result, ScaffoldError};

pub const APP_NAME_PROMPT: &str = "Application Name?";

/// Source of the application name
#[allow(async_fn_in_trait)]
pub trait NamePrompt {
    /// Ask once and return the answer as typed, empty answers included
    async fn ask_app_name(&self) -> Result<String>;
}

/// Terminal prompt. Falls back to reading one line of stdin when there is
/// no terminal to draw the interactive prompt on.
#[derive(Debug, Default, Clone, Copy)]
pub struct TerminalPrompt;

impl NamePrompt for TerminalPrompt {
    async fn ask_app_name(&self) -> Result<String> {
        if !Term::stderr().is_term() {
            println!("{APP_NAME_PROMPT}");
            return read_answer(BufReader::new(tokio::io::stdin())).await;
        }

        tokio::task::spawn_blocking(|| {
            Input::<String>::with_theme(&ColorfulTheme::default())
                .with_prompt(APP_NAME_PROMPT)
                .allow_empty(true)
                .interact_text()
                .map_err(|e| ScaffoldError::PromptError(e.to_string()))
        })
        .await
        .map_err(|e| ScaffoldError::PromptError(format!("Prompt task failed: {e}")))?
    }
}

/// Read a single answer line. End of input before any line is an
/// interrupted prompt; an empty line is an empty answer.
pub async fn read_answer<R: AsyncBufRead + Unpin>(mut reader: R) -> Result<String> {
    let mut line = String::new();
    let read = reader
        .read_line(&mut line)
        .await
        .map_err(|e| ScaffoldError::PromptError(e.to_string()))?;

    if read == 0 {
        return Err(ScaffoldError::PromptError("input ended before an answer was given".to_string()));
    }

    let answer = line.strip_suffix('\n').unwrap_or(&line);
    Ok(answer.strip_suffix('\r').unwrap_or(answer).to_string())
}

/// Prompt that always answers with the same name
#[derive(Debug, Clone)]
pub struct FixedAnswer(pub String);

impl NamePrompt for FixedAnswer {
    async fn ask_app_name(&self) -> Result<String> {
        Ok(self.0.clone())
    }
}
