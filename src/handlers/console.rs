//! Terminal input and output for commands

use std::io::{self, BufRead, Stdin, StdinLock, Stdout, Write};
use colored::Colorize;
use crate::services::ImportProgress;

/// Line-oriented console over any reader/writer pair
pub struct Console<R, W> {
    input: R,
    output: W,
}

impl Console<StdinLock<'static>, Stdout> {
    /// Console bound to the process stdin/stdout
    pub fn stdio() -> Self {
        let stdin: Stdin = io::stdin();
        Self::new(stdin.lock(), io::stdout())
    }
}

impl<R: BufRead, W: Write> Console<R, W> {
    pub fn new(input: R, output: W) -> Self {
        Self { input, output }
    }

    /// Plain progress line
    pub fn line(&mut self, text: &str) -> io::Result<()> {
        writeln!(self.output, "{}", text)
    }

    /// Highlighted informational line
    pub fn info(&mut self, text: &str) -> io::Result<()> {
        writeln!(self.output, "{}", text.green())
    }

    /// Ask a yes/no question; anything but `y` or `yes` is a no, including EOF
    pub fn confirm(&mut self, question: &str) -> io::Result<bool> {
        writeln!(self.output, "{} {}", question.green(), "(yes/no) [no]:".yellow())?;
        write!(self.output, " > ")?;
        self.output.flush()?;

        let mut answer = String::new();
        if self.input.read_line(&mut answer)? == 0 {
            writeln!(self.output)?;
            return Ok(false);
        }

        let answer = answer.trim().to_lowercase();
        Ok(matches!(answer.as_str(), "y" | "yes"))
    }

    pub fn into_output(self) -> W {
        self.output
    }
}

impl<R: BufRead, W: Write> ImportProgress for Console<R, W> {
    fn group_skipped(&mut self, group: &str) -> io::Result<()> {
        self.info(&format!("Skipping group: {}", group))
    }

    fn locale_skipped(&mut self, _group: &str, locale: &str) -> io::Result<()> {
        self.info(&format!("Skipping locale: {}", locale))
    }

    fn importing(&mut self, group: &str, locale: &str) -> io::Result<()> {
        self.line(&format!("Importing group: {} for locale: {}", group, locale))
    }
}
