use crate::error::{PrivacyError, Result};
use dialoguer::{Input, Password};
use std::io::{self, BufRead, IsTerminal, Write};

/// Line-oriented access to the user. Everything interactive goes through
/// this so the selection and confirmation flow can run without a terminal.
pub trait Prompter {
    fn read_line(&mut self, prompt: &str) -> Result<String>;

    /// Like `read_line` but without echoing the input.
    fn read_secret(&mut self, prompt: &str) -> Result<String>;
}

/// `yes`/`y` in any case, surrounding whitespace ignored.
pub fn is_affirmative(answer: &str) -> bool {
    matches!(answer.trim().to_lowercase().as_str(), "yes" | "y")
}

pub fn confirm<P: Prompter + ?Sized>(prompter: &mut P, prompt: &str) -> Result<bool> {
    let answer = prompter.read_line(prompt)?;
    Ok(is_affirmative(&answer))
}

/// Prompts on the terminal through dialoguer. When stdin is not a terminal
/// (piped answers), each prompt reads one plain line instead.
pub struct TerminalPrompter {
    piped: Option<Box<dyn BufRead>>,
}

impl TerminalPrompter {
    pub fn new() -> Self {
        let stdin = io::stdin();
        if stdin.is_terminal() {
            TerminalPrompter { piped: None }
        } else {
            Self::with_reader(stdin.lock())
        }
    }

    /// Answer every prompt from `reader`, one line each.
    pub fn with_reader(reader: impl BufRead + 'static) -> Self {
        TerminalPrompter {
            piped: Some(Box::new(reader)),
        }
    }
}

impl Default for TerminalPrompter {
    fn default() -> Self {
        Self::new()
    }
}

fn read_piped_line(reader: &mut dyn BufRead, prompt: &str) -> Result<String> {
    print!("{}: ", prompt);
    let _ = io::stdout().flush();

    let mut line = String::new();
    if reader.read_line(&mut line)? == 0 {
        return Err(PrivacyError::IoError(io::Error::new(
            io::ErrorKind::UnexpectedEof,
            "input ended before a prompt was answered",
        )));
    }
    println!();

    Ok(line.trim_end_matches(['\r', '\n']).to_string())
}

impl Prompter for TerminalPrompter {
    fn read_line(&mut self, prompt: &str) -> Result<String> {
        if let Some(reader) = self.piped.as_mut() {
            return read_piped_line(reader.as_mut(), prompt);
        }

        let line: String = Input::new()
            .with_prompt(prompt)
            .allow_empty(true)
            .interact_text()?;
        Ok(line)
    }

    fn read_secret(&mut self, prompt: &str) -> Result<String> {
        if let Some(reader) = self.piped.as_mut() {
            return read_piped_line(reader.as_mut(), prompt);
        }

        let secret = Password::new()
            .with_prompt(prompt)
            .allow_empty_password(true)
            .interact()?;
        Ok(secret)
    }
}
