//! Interactive prompts
//!
//! Line-based questions that re-ask until the answer is usable. Generic over
//! the reader and writer so the menu can be driven from tests.

use std::fmt::Display;
use std::io::{self, BufRead, StdinLock, Stdout, Write};

use crate::error::{AdvisorError, AdvisorResult};

/// Asks questions on `output` and reads answers from `input`
pub struct Prompter<R, W> {
    input: R,
    output: W,
}

impl Prompter<StdinLock<'static>, Stdout> {
    /// Prompter on the process's stdin and stdout
    pub fn stdio() -> Self {
        Self::new(io::stdin().lock(), io::stdout())
    }
}

impl<R: BufRead, W: Write> Prompter<R, W> {
    /// Create a prompter over any reader and writer
    pub fn new(input: R, output: W) -> Self {
        Self { input, output }
    }

    /// Consume the prompter, returning the writer
    pub fn into_output(self) -> W {
        self.output
    }

    /// Print a block of text
    pub fn say(&mut self, text: &str) -> AdvisorResult<()> {
        writeln!(self.output, "{}", text).map_err(|e| AdvisorError::Io(e.to_string()))
    }

    fn ask(&mut self, prompt: &str) -> AdvisorResult<String> {
        write!(self.output, "{}", prompt).map_err(|e| AdvisorError::Io(e.to_string()))?;
        self.output
            .flush()
            .map_err(|e| AdvisorError::Io(e.to_string()))?;

        let mut line = String::new();
        let read = self
            .input
            .read_line(&mut line)
            .map_err(|e| AdvisorError::Io(e.to_string()))?;
        if read == 0 {
            return Err(AdvisorError::Io("unexpected end of input".to_string()));
        }

        Ok(line.trim().to_string())
    }

    /// Ask for free text; blank input gives `default`
    pub fn ask_text(&mut self, text: &str, default: &str) -> AdvisorResult<String> {
        let answer = if default.is_empty() {
            self.ask(&format!("{}: ", text))?
        } else {
            self.ask(&format!("{} [{}]: ", text, default))?
        };

        Ok(if answer.is_empty() {
            default.to_string()
        } else {
            answer
        })
    }

    /// Ask for a number; blank input gives `default`
    ///
    /// Re-asks on anything that isn't a finite number or is below `min`.
    pub fn ask_number(&mut self, text: &str, default: f64, min: Option<f64>) -> AdvisorResult<f64> {
        loop {
            let answer = self.ask(&format!("{} [{}]: ", text, default))?;
            if answer.is_empty() {
                return Ok(default);
            }

            match answer.parse::<f64>() {
                Ok(value) if value.is_finite() => match min {
                    Some(min) if value < min => self.say(&format!("Must be at least {}.", min))?,
                    _ => return Ok(value),
                },
                _ => self.say("Please type a number.")?,
            }
        }
    }

    /// Ask for a whole number in `min..=max`; fractions are truncated
    pub fn ask_whole(&mut self, text: &str, default: u32, min: u32, max: u32) -> AdvisorResult<u32> {
        loop {
            let value = self
                .ask_number(text, f64::from(default), Some(f64::from(min)))?
                .trunc();
            if value > f64::from(max) {
                self.say(&format!("Must be at most {}.", max))?;
                continue;
            }
            return Ok(value as u32);
        }
    }

    /// Ask a yes/no question
    pub fn ask_yes_no(&mut self, text: &str, default: bool) -> AdvisorResult<bool> {
        let hint = if default { " [Y/n]" } else { " [y/N]" };
        loop {
            let answer = self.ask(&format!("{}{}: ", text, hint))?.to_lowercase();
            match answer.as_str() {
                "" => return Ok(default),
                "y" | "yes" => return Ok(true),
                "n" | "no" => return Ok(false),
                _ => self.say("Type y or n.")?,
            }
        }
    }

    /// Show a numbered list (from 1) and return the chosen option
    pub fn pick<'a, T: Display>(&mut self, title: &str, options: &'a [T]) -> AdvisorResult<&'a T> {
        if options.is_empty() {
            return Err(AdvisorError::Validation(format!(
                "No options to choose from for '{}'",
                title
            )));
        }

        self.say(&format!("\n{}", title))?;
        for (i, option) in options.iter().enumerate() {
            self.say(&format!("{}. {}", i + 1, option))?;
        }

        loop {
            let answer = self.ask("Choose a number: ")?;
            if let Ok(n) = answer.parse::<usize>() {
                if (1..=options.len()).contains(&n) {
                    return Ok(&options[n - 1]);
                }
            }
            self.say("Pick a valid number.")?;
        }
    }

    /// Wait for Enter
    pub fn pause(&mut self) -> AdvisorResult<()> {
        self.ask("\nPress Enter to continue...").map(|_| ())
    }
}
