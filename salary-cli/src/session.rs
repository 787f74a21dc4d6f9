//! Line-oriented interactive session driving one [`SalaryStore`].
//!
//! Each line is a command; `show` prints the live figures for the current
//! inputs and, when enabled, the regime comparison.

use std::io::{BufRead, Write};

use anyhow::{Context, Result};
use salary_core::{Clock, SalaryStore};
use thiserror::Error;
use tracing::{debug, warn};

use crate::logging;
use crate::parse::parse_lenient_amount;
use crate::render;

const HELP: &str = "\
commands:
  gross <amount>        set gross monthly salary
  dependents <count>    set number of dependents
  other <amount>        set other deductions
  compare on|off        toggle the regime comparison
  show                  print the current calculation
  brackets              print the active bracket schedule
  reset                 clear all inputs
  log <level>           change the log filter (e.g. debug)
  help                  print this help
  quit                  leave the session";

#[derive(Debug, Error, PartialEq, Eq)]
pub enum CommandError {
    #[error("unknown command '{0}' (try 'help')")]
    Unknown(String),

    #[error("'{0}' needs a value")]
    MissingArgument(&'static str),

    #[error("expected 'on' or 'off', got '{0}'")]
    InvalidToggle(String),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    Gross(String),
    Dependents(String),
    Other(String),
    Compare(bool),
    Show,
    Brackets,
    Reset,
    Log(String),
    Help,
    Quit,
}

impl Command {
    /// Parses one input line. Blank lines and `#` comments yield `None`.
    pub fn parse(line: &str) -> Result<Option<Command>, CommandError> {
        let line = line.trim();
        if line.is_empty() || line.starts_with('#') {
            return Ok(None);
        }

        let (name, rest) = match line.split_once(char::is_whitespace) {
            Some((name, rest)) => (name, rest.trim()),
            None => (line, ""),
        };
        let argument = |label: &'static str| {
            if rest.is_empty() {
                Err(CommandError::MissingArgument(label))
            } else {
                Ok(rest.to_string())
            }
        };

        let command = match name.to_lowercase().as_str() {
            "gross" => Command::Gross(argument("gross")?),
            "dependents" | "deps" => Command::Dependents(argument("dependents")?),
            "other" => Command::Other(argument("other")?),
            "compare" => match rest.to_lowercase().as_str() {
                "on" | "true" | "yes" => Command::Compare(true),
                "off" | "false" | "no" => Command::Compare(false),
                "" => return Err(CommandError::MissingArgument("compare")),
                other => return Err(CommandError::InvalidToggle(other.to_string())),
            },
            "show" => Command::Show,
            "brackets" => Command::Brackets,
            "reset" => Command::Reset,
            "log" => Command::Log(argument("log")?),
            "help" | "?" => Command::Help,
            "quit" | "exit" => Command::Quit,
            other => return Err(CommandError::Unknown(other.to_string())),
        };
        Ok(Some(command))
    }
}

pub struct Session<C: Clock> {
    store: SalaryStore<C>,
}

impl<C: Clock> Session<C> {
    pub fn new(store: SalaryStore<C>) -> Self {
        Self { store }
    }

    pub fn store(&self) -> &SalaryStore<C> {
        &self.store
    }

    /// Reads commands until `quit` or end of input.
    pub fn run<R: BufRead, W: Write>(
        &mut self,
        input: R,
        mut out: W,
    ) -> Result<()> {
        writeln!(out, "Active regime: {}. Type 'help' for commands.", self.store.regime())
            .context("failed to write to output")?;

        for line in input.lines() {
            let line = line.context("failed to read input")?;
            match Command::parse(&line) {
                Ok(Some(command)) => {
                    debug!(?command, "session command");
                    if !self.execute(command, &mut out)? {
                        break;
                    }
                }
                Ok(None) => {}
                Err(e) => writeln!(out, "error: {e}").context("failed to write to output")?,
            }
        }
        out.flush().context("failed to flush output")
    }

    /// Applies one command. Returns `false` when the session should end.
    pub fn execute<W: Write>(
        &mut self,
        command: Command,
        out: &mut W,
    ) -> Result<bool> {
        match command {
            Command::Gross(value) => self.store.set_gross_salary(parse_lenient_amount(&value)),
            Command::Dependents(value) => self.store.set_dependents(parse_lenient_amount(&value)),
            Command::Other(value) => self.store.set_other_deductions(parse_lenient_amount(&value)),
            Command::Compare(enabled) => self.store.set_show_comparison(enabled),
            Command::Reset => self.store.reset(),
            Command::Show => self.show(out)?,
            Command::Brackets => {
                writeln!(out, "{}", render::brackets_table(self.store.regime()))?;
            }
            Command::Log(level) => {
                if let Err(e) = logging::set_log_level(&level) {
                    warn!(%level, "log level unchanged: {e}");
                    writeln!(out, "error: {e}")?;
                }
            }
            Command::Help => writeln!(out, "{HELP}")?,
            Command::Quit => return Ok(false),
        }
        Ok(true)
    }

    fn show<W: Write>(
        &self,
        out: &mut W,
    ) -> Result<()> {
        let breakdown = self.store.breakdown();
        writeln!(out, "{}", breakdown.regime)?;
        writeln!(out, "{}", render::breakdown_table(&breakdown, self.store.insurance_config()))?;
        if let Some(details) = render::details_table(&breakdown.tax_details) {
            writeln!(out, "{details}")?;
        }
        if self.store.show_comparison() {
            let comparison = self.store.comparison();
            writeln!(out, "{}", render::comparison_table(&comparison))?;
            writeln!(out, "{}", render::comparison_summary(&comparison))?;
        }
        Ok(())
    }
}
