use crate::constraint::{ConstraintBatch, LetterRow};
use crate::corpus::{Position, WORD_LENGTH};
use crate::game_state::{SolverInterface, Suggestions, UserAction};
use crate::ranker::DEFAULT_SUGGESTION_LIMIT;
use clap::Parser;
use std::io::{self, BufRead, Write};
use std::path::PathBuf;
use thiserror::Error;

/// Narrows a five-letter word list from puzzle feedback and suggests the next guess
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Path to a newline-delimited word list file
    #[arg(short = 'i', long = "input")]
    pub wordbank_path: Option<PathBuf>,

    /// Number of suggestions to show after each round
    #[arg(short = 'n', long, default_value_t = DEFAULT_SUGGESTION_LIMIT)]
    pub limit: usize,

    /// Fail on word list lines that are not 5-letter words instead of skipping them
    #[arg(long)]
    pub strict: bool,

    /// Use the line-based interface instead of the full-screen one
    #[arg(long)]
    pub plain: bool,

    /// Where to write the log (defaults to the user cache directory)
    #[arg(long)]
    pub log_file: Option<PathBuf>,
}

#[must_use]
pub fn parse_cli() -> Cli {
    Cli::parse()
}

const HELP_TEXT: &str = "\
Commands:
  ignore <letters>       letters that are not in the word (e.g. ignore qxz)
  exact <pattern>        letters in the right place, '.' for unknown (e.g. exact ..a.e)
  misplaced <pattern>    letters in the word but not here, one row per guess (e.g. misplaced r....)
  enter                  apply the feedback entered so far and show suggestions
  clear                  discard the feedback entered since the last 'enter'
  refresh                reload the word list and forget all feedback
  exit                   quit";

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum InputError {
    #[error("Unknown command '{0}'. Type 'help' for the list of commands.")]
    UnknownCommand(String),
    #[error("'{0}' needs an argument. Type 'help' for examples.")]
    MissingArgument(&'static str),
    #[error("Pattern '{0}' must be 5 characters, each a letter or '.'")]
    InvalidPattern(String),
    #[error("Only letters are allowed! ('{0}' is not a letter)")]
    NotALetter(char),
}

#[derive(Debug, Clone, PartialEq, Eq)]
enum Command {
    Ignore(String),
    Exact(LetterRow),
    Misplaced(LetterRow),
    Enter,
    Clear,
    Refresh,
    Exit,
    Help,
}

fn parse_command(line: &str) -> Result<Command, InputError> {
    let line = line.trim();
    let (keyword, argument) = match line.split_once(char::is_whitespace) {
        Some((keyword, rest)) => (keyword, Some(rest.trim())),
        None => (line, None),
    };

    match keyword.to_lowercase().as_str() {
        "ignore" | "i" => {
            let letters = argument.ok_or(InputError::MissingArgument("ignore"))?;
            if let Some(c) = letters
                .chars()
                .find(|c| !c.is_whitespace() && !c.is_ascii_alphabetic())
            {
                return Err(InputError::NotALetter(c));
            }
            Ok(Command::Ignore(letters.to_string()))
        }
        "exact" | "green" | "g" => {
            let pattern = argument.ok_or(InputError::MissingArgument("exact"))?;
            parse_pattern(pattern).map(Command::Exact)
        }
        "misplaced" | "orange" | "o" => {
            let pattern = argument.ok_or(InputError::MissingArgument("misplaced"))?;
            parse_pattern(pattern).map(Command::Misplaced)
        }
        "enter" => Ok(Command::Enter),
        "clear" => Ok(Command::Clear),
        "refresh" => Ok(Command::Refresh),
        "exit" | "quit" => Ok(Command::Exit),
        "help" | "?" => Ok(Command::Help),
        _ => Err(InputError::UnknownCommand(line.to_string())),
    }
}

/// Parses a 5-character row such as `..a.e`. `.`, `_`, `-` and `?` mark unknown positions.
fn parse_pattern(pattern: &str) -> Result<LetterRow, InputError> {
    let chars: Vec<char> = pattern.chars().collect();
    if chars.len() != WORD_LENGTH {
        return Err(InputError::InvalidPattern(pattern.to_string()));
    }
    let mut row: LetterRow = [None; WORD_LENGTH];
    for (slot, c) in row.iter_mut().zip(chars) {
        *slot = match c {
            '.' | '_' | '-' | '?' => None,
            c if c.is_ascii_alphabetic() => Some(c.to_ascii_lowercase()),
            _ => return Err(InputError::InvalidPattern(pattern.to_string())),
        };
    }
    Ok(row)
}

// UI Output functions

pub fn display_loaded<W: Write>(out: &mut W, word_count: usize) -> io::Result<()> {
    writeln!(out, "Loaded {word_count} words. Type 'help' for commands.")
}

pub fn display_suggestions<W: Write>(out: &mut W, suggestions: &Suggestions) -> io::Result<()> {
    writeln!(out, "Candidates remaining: {}", suggestions.candidate_count)?;
    for line in suggestions.lines() {
        writeln!(out, "{line}")?;
    }
    if suggestions.candidate_count > suggestions.entries.len() {
        writeln!(out, "(showing top {})", suggestions.entries.len())?;
    }
    Ok(())
}

pub fn display_pending<W: Write>(out: &mut W, batch: &ConstraintBatch) -> io::Result<()> {
    let pending: Vec<String> = batch.constraints().iter().map(ToString::to_string).collect();
    if pending.is_empty() {
        writeln!(out, "Pending feedback: none")
    } else {
        writeln!(out, "Pending feedback: {}", pending.join(", "))
    }
}

pub fn display_no_candidates_message<W: Write>(out: &mut W) -> io::Result<()> {
    writeln!(out, "No candidates remain. Check your inputs, or type 'refresh' to start over.")
}

pub fn display_reset_message<W: Write>(out: &mut W, word_count: usize) -> io::Result<()> {
    writeln!(out, "Word list reloaded. {word_count} words, all feedback cleared.")
}

pub fn display_exit_message<W: Write>(out: &mut W) -> io::Result<()> {
    writeln!(out, "Exiting.")
}

/// Line-based implementation of [`SolverInterface`].
///
/// Feedback commands accumulate into a pending batch that `enter` hands to the round loop.
/// End of input counts as `exit`.
pub struct CliInterface<R: BufRead, W: Write = io::Stdout> {
    reader: R,
    writer: W,
    pending: ConstraintBatch,
}

impl<R: BufRead> CliInterface<R> {
    pub fn new(reader: R) -> Self {
        Self::with_writer(reader, io::stdout())
    }
}

impl<R: BufRead, W: Write> CliInterface<R, W> {
    pub fn with_writer(reader: R, writer: W) -> Self {
        Self {
            reader,
            writer,
            pending: ConstraintBatch::new(),
        }
    }

    pub fn into_writer(self) -> W {
        self.writer
    }

    fn report(result: io::Result<()>) {
        if let Err(e) = result {
            log::warn!("Failed to write to output: {e}");
        }
    }

    fn handle_command(&mut self, command: Command) -> Option<UserAction> {
        match command {
            Command::Ignore(letters) => {
                self.pending.ignore(&letters);
            }
            Command::Exact(row) => {
                for (pos, letter) in Position::ALL.into_iter().zip(row) {
                    if letter.is_some() {
                        self.pending.set_exact(pos, letter);
                    }
                }
            }
            Command::Misplaced(row) => {
                if let Err(e) = self.pending.push_misplaced_row(row) {
                    Self::report(writeln!(self.writer, "{e}"));
                    return None;
                }
            }
            Command::Enter => {
                return Some(UserAction::Apply(std::mem::take(&mut self.pending)));
            }
            Command::Clear => {
                self.pending = ConstraintBatch::new();
            }
            Command::Refresh => {
                self.pending = ConstraintBatch::new();
                return Some(UserAction::Refresh);
            }
            Command::Exit => return Some(UserAction::Exit),
            Command::Help => {
                Self::report(writeln!(self.writer, "{HELP_TEXT}"));
                return None;
            }
        }
        Self::report(display_pending(&mut self.writer, &self.pending));
        None
    }
}

impl<R: BufRead, W: Write> SolverInterface for CliInterface<R, W> {
    fn display_loaded(&mut self, word_count: usize) {
        Self::report(display_loaded(&mut self.writer, word_count));
    }

    fn read_action(&mut self) -> Option<UserAction> {
        Self::report(write!(self.writer, "> ").and_then(|()| self.writer.flush()));
        let mut input = String::new();
        match self.reader.read_line(&mut input) {
            Ok(0) => return Some(UserAction::Exit),
            Ok(_) => {}
            Err(e) => {
                log::warn!("Failed to read input: {e}");
                return Some(UserAction::Exit);
            }
        }
        if input.trim().is_empty() {
            return None;
        }

        match parse_command(&input) {
            Ok(command) => self.handle_command(command),
            Err(e) => {
                Self::report(writeln!(self.writer, "{e}"));
                None
            }
        }
    }

    fn display_suggestions(&mut self, suggestions: &Suggestions) {
        Self::report(display_suggestions(&mut self.writer, suggestions));
    }

    fn display_no_candidates_message(&mut self) {
        Self::report(display_no_candidates_message(&mut self.writer));
    }

    fn display_reset_message(&mut self, word_count: usize) {
        Self::report(display_reset_message(&mut self.writer, word_count));
    }

    fn display_exit_message(&mut self) {
        Self::report(display_exit_message(&mut self.writer));
    }
}
