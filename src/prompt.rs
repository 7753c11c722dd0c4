use anyhow::{Context, Result};
use dialoguer::theme::ColorfulTheme;
use dialoguer::Input;
use std::io::{self, BufRead, IsTerminal, Write};
use tracing::debug;

use crate::utils::unicode::first_char_as_str;

/// Result of a yes/no question. Blank input is its own case so callers and
/// logs can tell "said no" from "just pressed Enter"; both mean no.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Answer {
    Yes,
    No,
    BlankNo,
}

impl Answer {
    /// Only the first character matters: `y`/`Y` is yes, anything else no.
    /// Leading whitespace is not skipped, so `" y"` is a no.
    pub fn parse(input: &str) -> Self {
        let input = input.trim_end_matches(['\n', '\r']);
        if input.trim().is_empty() {
            Answer::BlankNo
        } else if first_char_as_str(input).eq_ignore_ascii_case("y") {
            Answer::Yes
        } else {
            Answer::No
        }
    }

    pub fn is_yes(self) -> bool {
        self == Answer::Yes
    }
}

/// Outcome of a blocking "continue or cancel" gate.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Gate {
    Proceed,
    Cancelled,
}

pub trait Prompt {
    fn ask_yes_no(&mut self, prompt: &str) -> Result<Answer>;

    /// Wait for the operator to continue; an interrupt cancels.
    fn ask_confirm_or_abort(&mut self, prompt: &str) -> Result<Gate>;

    /// Read one line of free text. `None` when the operator cancels.
    fn ask_text(&mut self, prompt: &str) -> Result<Option<String>>;
}

/// Pick the prompt for this process: dialoguer on a terminal, plain line
/// reads when stdin is piped.
pub fn stdin_prompt() -> Box<dyn Prompt> {
    if io::stdin().is_terminal() {
        Box::new(TerminalPrompt::new())
    } else {
        Box::new(LinePrompt::new(io::stdin().lock(), io::stderr()))
    }
}

pub struct TerminalPrompt {
    theme: ColorfulTheme,
}

impl Default for TerminalPrompt {
    fn default() -> Self {
        Self::new()
    }
}

impl TerminalPrompt {
    pub fn new() -> Self {
        Self {
            theme: ColorfulTheme::default(),
        }
    }

    fn read(&self, prompt: &str) -> Result<Option<String>> {
        let result = Input::<String>::with_theme(&self.theme)
            .with_prompt(prompt)
            .allow_empty(true)
            .interact_text();

        to_line(result)
    }
}

/// Ctrl-C in dialoguer's raw-mode read comes back as `Interrupted`; that is a
/// cancellation, not a failure.
fn to_line(result: dialoguer::Result<String>) -> Result<Option<String>> {
    match result {
        Ok(line) => Ok(Some(line)),
        Err(err) if interrupted(&err) => Ok(None),
        Err(err) => Err(err).context("Failed to read from terminal"),
    }
}

fn interrupted(err: &dialoguer::Error) -> bool {
    matches!(err, dialoguer::Error::IO(e) if e.kind() == io::ErrorKind::Interrupted)
}

impl Prompt for TerminalPrompt {
    fn ask_yes_no(&mut self, prompt: &str) -> Result<Answer> {
        let answer = match self.read(&format!("{prompt} [y/N]"))? {
            Some(line) => Answer::parse(&line),
            None => Answer::No,
        };
        debug!(?answer, "yes/no prompt answered");
        Ok(answer)
    }

    fn ask_confirm_or_abort(&mut self, prompt: &str) -> Result<Gate> {
        let gate = match self.read(prompt)? {
            Some(_) => Gate::Proceed,
            None => Gate::Cancelled,
        };
        debug!(?gate, "confirmation gate passed");
        Ok(gate)
    }

    fn ask_text(&mut self, prompt: &str) -> Result<Option<String>> {
        self.read(prompt)
    }
}

/// Line-oriented prompt over any reader/writer pair. End of input counts as
/// cancellation for gates and text, and as a blank answer for yes/no.
pub struct LinePrompt<R, W> {
    input: R,
    output: W,
}

impl<R: BufRead, W: Write> LinePrompt<R, W> {
    pub fn new(input: R, output: W) -> Self {
        Self { input, output }
    }

    pub fn into_output(self) -> W {
        self.output
    }

    fn ask(&mut self, prompt: &str) -> Result<Option<String>> {
        write!(self.output, "{prompt}")?;
        self.output.flush()?;

        let mut line = String::new();
        let read = self
            .input
            .read_line(&mut line)
            .context("Failed to read from stdin")?;
        if read == 0 {
            writeln!(self.output)?;
            return Ok(None);
        }

        let trimmed_len = line.trim_end_matches(['\n', '\r']).len();
        line.truncate(trimmed_len);
        Ok(Some(line))
    }
}

impl<R: BufRead, W: Write> Prompt for LinePrompt<R, W> {
    fn ask_yes_no(&mut self, prompt: &str) -> Result<Answer> {
        let answer = match self.ask(&format!("{prompt} [y/N]: "))? {
            Some(line) => Answer::parse(&line),
            None => Answer::BlankNo,
        };
        debug!(?answer, "yes/no prompt answered");
        Ok(answer)
    }

    fn ask_confirm_or_abort(&mut self, prompt: &str) -> Result<Gate> {
        let gate = match self.ask(&format!("{prompt} "))? {
            Some(_) => Gate::Proceed,
            None => Gate::Cancelled,
        };
        debug!(?gate, "confirmation gate passed");
        Ok(gate)
    }

    fn ask_text(&mut self, prompt: &str) -> Result<Option<String>> {
        self.ask(&format!("{prompt}: "))
    }
}
