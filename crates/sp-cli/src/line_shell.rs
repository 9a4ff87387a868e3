use std::collections::VecDeque;
use std::io::{BufRead, Write};

use sp_api::{create_engine, LoadReport};
use sp_core::{EndReason, ScenarioError};
use sp_runtime::{play_scenario, PlayerShell};

use crate::{map_shell_io, END_OF_SCENARIO_MESSAGE};

/// Console shell reading whitespace-separated tokens, so several answers can
/// be typed on one line.
pub(crate) struct LineShell<'r, 'w> {
    reader: &'r mut dyn BufRead,
    writer: &'w mut dyn Write,
    pending_tokens: VecDeque<String>,
}

impl<'r, 'w> LineShell<'r, 'w> {
    pub(crate) fn new(reader: &'r mut dyn BufRead, writer: &'w mut dyn Write) -> Self {
        Self {
            reader,
            writer,
            pending_tokens: VecDeque::new(),
        }
    }

    pub(crate) fn say(&mut self, line: &str) -> Result<(), ScenarioError> {
        writeln!(self.writer, "{}", line).map_err(map_shell_io)
    }

    /// Returns a 0-based index into `titles`.
    pub(crate) fn choose_scenario(&mut self, titles: &[String]) -> Result<usize, ScenarioError> {
        self.say("Available scenarios:")?;
        for (index, title) in titles.iter().enumerate() {
            self.say(&format!("{}: {}", index + 1, title))?;
        }

        loop {
            let token = self.prompt_token("Select a scenario: ")?;
            match parse_selection(&token, titles.len()) {
                Selection::Valid(index) => return Ok(index),
                Selection::OutOfRange => self.say("Invalid selection. Try again.")?,
                Selection::NotANumber => self.say("Invalid input. Please enter a number.")?,
            }
        }
    }

    fn prompt_token(&mut self, prefix: &str) -> Result<String, ScenarioError> {
        write!(self.writer, "{}", prefix).map_err(map_shell_io)?;
        self.writer.flush().map_err(map_shell_io)?;
        self.next_token()
    }

    fn next_token(&mut self) -> Result<String, ScenarioError> {
        loop {
            if let Some(token) = self.pending_tokens.pop_front() {
                return Ok(token);
            }
            let mut line = String::new();
            let read = self.reader.read_line(&mut line).map_err(map_shell_io)?;
            if read == 0 {
                return Err(ScenarioError::new(
                    "SHELL_INPUT_CLOSED",
                    "Input ended before a selection was made.",
                ));
            }
            self.pending_tokens
                .extend(line.split_whitespace().map(str::to_string));
        }
    }
}

impl PlayerShell for LineShell<'_, '_> {
    fn show_description(&mut self, text: &str) -> Result<(), ScenarioError> {
        self.say(text)
    }

    fn choose_option(&mut self, labels: &[String]) -> Result<usize, ScenarioError> {
        loop {
            for (index, label) in labels.iter().enumerate() {
                self.say(&format!("{}: {}", index + 1, label))?;
            }
            let token = self.prompt_token("Your choice: ")?;
            match parse_selection(&token, labels.len()) {
                Selection::Valid(index) => return Ok(index),
                Selection::OutOfRange => self.say("Invalid choice. Try again.")?,
                Selection::NotANumber => self.say("Please enter a valid number.")?,
            }
        }
    }

    fn announce_end(&mut self, reason: &EndReason) -> Result<(), ScenarioError> {
        match reason {
            EndReason::TerminalBranch { .. } => self.say(END_OF_SCENARIO_MESSAGE),
            EndReason::OutOfRange { index } => {
                log::info!("jump to branch {} left the scenario", index);
                Ok(())
            }
            EndReason::NoBranches => Ok(()),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Selection {
    Valid(usize),
    OutOfRange,
    NotANumber,
}

/// Maps a 1-based menu answer onto a 0-based index.
fn parse_selection(token: &str, count: usize) -> Selection {
    let Ok(number) = token.parse::<i32>() else {
        return Selection::NotANumber;
    };
    match usize::try_from(i64::from(number) - 1) {
        Ok(index) if index < count => Selection::Valid(index),
        _ => Selection::OutOfRange,
    }
}

pub(crate) fn run_line_mode_with_io(
    report: &LoadReport,
    reader: &mut dyn BufRead,
    writer: &mut dyn Write,
) -> Result<i32, ScenarioError> {
    let mut shell = LineShell::new(reader, writer);
    for diagnostic in &report.diagnostics {
        shell.say(&diagnostic.reason)?;
    }

    if report.is_empty() {
        shell.say("No scenarios found.")?;
        return Ok(0);
    }

    let selected = match shell.choose_scenario(&report.titles()) {
        Ok(selected) => selected,
        Err(error) => {
            log::error!("scenario selection failed: {}", error);
            shell.say(&format!("An unexpected error occurred: {}", error.message))?;
            return Ok(0);
        }
    };

    let loaded = &report.scenarios[selected];
    let mut engine = create_engine(loaded);
    match play_scenario(&mut engine, &mut shell) {
        Ok(outcome) => log::info!(
            "finished {} via branches {:?}: {}",
            loaded.file_name,
            outcome.trail,
            outcome.reason.code()
        ),
        Err(error) => {
            log::error!("playthrough of {} stopped: {}", loaded.file_name, error);
            // the writer may be what failed
            let _ = shell.say(&format!(
                "An error occurred while processing the scenario: {}",
                error.message
            ));
        }
    }
    Ok(0)
}
