// Interactive Session Loop
//
// MENU -> action -> MENU until an exit token or end of input.
// Nothing is carried over between menu choices.

use super::config::SessionConfig;
use super::constants::*;
use super::menu::MenuChoice;
use super::overview::overview_lines;
use super::prompt::{read_direction, read_number, read_text};
use super::render;
use crate::domain::{self, parse_percent_list};
use crate::error::{AppError, Result};
use crate::port::Console;
use tracing::{debug, info};

/// What the loop does after handling one menu choice
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Flow {
    Continue,
    Exit,
}

/// Menu-driven percentage calculator session
pub struct Session<C: Console> {
    console: C,
    config: SessionConfig,
}

impl<C: Console> Session<C> {
    pub fn new(console: C, config: SessionConfig) -> Self {
        Self { console, config }
    }

    /// Run until the exit command or end of input
    ///
    /// Only console I/O failures are returned as errors; invalid input and
    /// undefined results are reported to the user and the loop continues.
    pub fn run(&mut self) -> Result<()> {
        info!(direction_input = ?self.config.direction_input, "Session started");
        self.say(WELCOME)?;

        loop {
            match self.step() {
                Ok(Flow::Continue) => {}
                Ok(Flow::Exit) => break,
                Err(AppError::EndOfInput) => {
                    debug!("Input closed, ending session");
                    // the pending prompt has no newline yet
                    self.say("")?;
                    break;
                }
                Err(e) => return Err(e),
            }
        }

        self.say(FAREWELL)?;
        info!("Session ended");
        Ok(())
    }

    /// Hand back the console (tests inspect captured output)
    pub fn into_console(self) -> C {
        self.console
    }

    fn say(&mut self, line: &str) -> Result<()> {
        self.console.write_line(line)?;
        Ok(())
    }

    fn say_all<I, S>(&mut self, lines: I) -> Result<()>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        for line in lines {
            self.say(line.as_ref())?;
        }
        Ok(())
    }

    fn number(&mut self, prompt: &str) -> Result<f64> {
        read_number(&mut self.console, prompt)
    }

    fn direction(&mut self, prompt: &str) -> Result<domain::Direction> {
        read_direction(&mut self.console, prompt, self.config.direction_input)
    }

    fn show_menu(&mut self) -> Result<()> {
        self.say("")?;
        self.say(MENU_HEADER)?;
        self.say_all(MENU_ENTRIES)
    }

    fn step(&mut self) -> Result<Flow> {
        self.show_menu()?;
        let token = read_text(&mut self.console, CHOICE_PROMPT)?;

        let Some(choice) = MenuChoice::parse(&token) else {
            debug!(token = %token.trim(), "Unknown menu option");
            self.say(INVALID_OPTION)?;
            return Ok(Flow::Continue);
        };

        debug!(?choice, "Dispatching menu choice");
        match choice {
            MenuChoice::Overview => self.say_all(overview_lines())?,
            MenuChoice::PercentOf => self.percent_of()?,
            MenuChoice::PercentOfTotal => self.percent_of_total()?,
            MenuChoice::TotalFromPart => self.total_from_part()?,
            MenuChoice::ChangeByPercent => self.change_by_percent()?,
            MenuChoice::OriginalBeforeChange => self.original_before_change()?,
            MenuChoice::PercentChange => self.percent_change()?,
            MenuChoice::CompoundPercents => self.compound_percents()?,
            MenuChoice::Exit => return Ok(Flow::Exit),
        }
        Ok(Flow::Continue)
    }

    fn percent_of(&mut self) -> Result<()> {
        let x = self.number(PROMPT_X)?;
        let y = self.number(PROMPT_Y)?;
        let result = domain::percent_of(x, y);
        self.say_all(render::percent_of(x, y, result))
    }

    fn percent_of_total(&mut self) -> Result<()> {
        let a = self.number(PROMPT_A)?;
        let b = self.number(PROMPT_B)?;
        match domain::percent_of_total(a, b) {
            Ok(pct) => self.say_all(render::percent_of_total(a, b, pct)),
            Err(reason) => {
                debug!(%reason, "Undefined percentage of total");
                self.say(UNDEFINED_PERCENT_OF_TOTAL)
            }
        }
    }

    fn total_from_part(&mut self) -> Result<()> {
        let part = self.number(PROMPT_PART)?;
        let pct = self.number(PROMPT_PART_PCT)?;
        match domain::total_from_part_and_pct(part, pct) {
            Ok(total) => self.say_all(render::total_from_part(part, pct, total)),
            Err(reason) => {
                debug!(%reason, "Undefined total");
                self.say(UNDEFINED_TOTAL)
            }
        }
    }

    fn change_by_percent(&mut self) -> Result<()> {
        let value = self.number(PROMPT_START_VALUE)?;
        let pct = self.number(PROMPT_CHANGE_PCT)?;
        let direction = self.direction(PROMPT_CHANGE_DIRECTION)?;
        let new_value = domain::change_by_percent(value, pct, direction);
        self.say_all(render::change_by_percent(value, pct, direction, new_value))
    }

    fn original_before_change(&mut self) -> Result<()> {
        let new_value = self.number(PROMPT_NEW_VALUE)?;
        let pct = self.number(PROMPT_CHANGED_PCT)?;
        let direction = self.direction(PROMPT_CHANGED_DIRECTION)?;
        match domain::original_before_change(new_value, pct, direction) {
            Ok(original) => self.say_all(render::original_before_change(
                new_value, pct, direction, original,
            )),
            Err(reason) => {
                debug!(%reason, "Undefined original value");
                self.say(UNDEFINED_ORIGINAL)
            }
        }
    }

    fn percent_change(&mut self) -> Result<()> {
        let old = self.number(PROMPT_OLD)?;
        let new = self.number(PROMPT_NEW)?;
        match domain::percent_change(old, new) {
            Ok(change) => self.say_all(render::percent_change(old, new, change)),
            Err(reason) => {
                debug!(%reason, "Undefined percentage change");
                self.say(UNDEFINED_PERCENT_CHANGE)
            }
        }
    }

    fn compound_percents(&mut self) -> Result<()> {
        let start = self.number(PROMPT_COMPOUND_START)?;
        let raw = read_text(&mut self.console, PROMPT_PERCENT_LIST)?;

        let percents = match parse_percent_list(&raw) {
            Ok(percents) => percents,
            Err(e) => {
                debug!(error = %e, "Rejected percent list");
                return self.say(INVALID_PERCENT_LIST);
            }
        };

        let steps = domain::compound_steps(start, &percents);
        self.say(&render::compound_start(start))?;
        for step in &steps {
            self.say(&render::compound_step(step))?;
        }
        let result = domain::compound_result(start, &steps);
        self.say(&render::compound_final(result))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::port::StreamConsole;
    use std::io::Cursor;

    fn run(input: &str) -> String {
        let console = StreamConsole::new(Cursor::new(input.to_string()), Vec::new());
        let mut session = Session::new(console, SessionConfig::default());
        session.run().unwrap();
        String::from_utf8(session.into_console().into_writer()).unwrap()
    }

    #[test]
    fn test_exit_immediately() {
        let output = run("8\n");
        assert!(output.starts_with(WELCOME));
        assert_eq!(output.matches(MENU_HEADER).count(), 1);
        assert!(output.ends_with("Tot ziens!\n"));
    }

    #[test]
    fn test_menu_printed_every_iteration() {
        let output = run("x\n9\nq\n");
        assert_eq!(output.matches(MENU_HEADER).count(), 3);
        assert_eq!(output.matches(INVALID_OPTION).count(), 2);
        for entry in MENU_ENTRIES {
            assert_eq!(output.matches(entry).count(), 3, "{entry}");
        }
    }

    #[test]
    fn test_end_of_input_behaves_like_exit() {
        let output = run("");
        assert!(output.ends_with("Welke optie kies je? \nTot ziens!\n"));
    }

    #[test]
    fn test_end_of_input_mid_action() {
        let output = run("1\n10\n");
        assert!(output.contains(PROMPT_Y));
        assert!(!output.contains("Antwoord"));
        assert!(output.ends_with("Tot ziens!\n"));
    }

    #[test]
    fn test_undefined_results_keep_session_alive() {
        let output = run("3\n5\n0\n5\n10\n100\nl\n6\n0\n4\nexit\n");
        assert!(output.contains(UNDEFINED_TOTAL));
        assert!(output.contains(UNDEFINED_ORIGINAL));
        assert!(output.contains(UNDEFINED_PERCENT_CHANGE));
        assert!(!output.contains("Antwoord"));
        assert!(output.ends_with("Tot ziens!\n"));
    }
}
