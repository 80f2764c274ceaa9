use crate::constants::OVERWRITE_RETRY_MESSAGE;
use crate::error::Result;
use std::io::{self, BufRead, Stdin, Stdout, Write};

/// Answers a yes/no question.
///
/// Output validation asks through this trait so callers can answer from a
/// terminal, a script, or a closure in tests.
pub trait Confirm {
    fn confirm(&mut self, question: &str) -> Result<bool>;
}

impl<F> Confirm for F
where
    F: FnMut(&str) -> Result<bool>,
{
    fn confirm(&mut self, question: &str) -> Result<bool> {
        self(question)
    }
}

/// Interprets a typed answer by its first letter. `None` means ask again.
pub fn parse_answer(answer: &str) -> Option<bool> {
    match answer.trim().chars().next().map(|c| c.to_ascii_lowercase()) {
        Some('y') => Some(true),
        Some('n') => Some(false),
        _ => None,
    }
}

/// Line-based prompt that keeps asking until it gets a yes or a no.
/// End of input counts as no.
pub struct TerminalConfirm<R, W> {
    input: R,
    output: W,
}

impl<R: BufRead, W: Write> TerminalConfirm<R, W> {
    pub fn new(input: R, output: W) -> Self {
        Self { input, output }
    }

    pub fn into_parts(self) -> (R, W) {
        (self.input, self.output)
    }
}

impl TerminalConfirm<io::BufReader<Stdin>, Stdout> {
    pub fn stdio() -> Self {
        Self::new(io::BufReader::new(io::stdin()), io::stdout())
    }
}

impl<R: BufRead, W: Write> Confirm for TerminalConfirm<R, W> {
    fn confirm(&mut self, question: &str) -> Result<bool> {
        loop {
            write!(self.output, "{}", question)?;
            self.output.flush()?;

            let mut line = String::new();
            if self.input.read_line(&mut line)? == 0 {
                writeln!(self.output)?;
                return Ok(false);
            }

            match parse_answer(&line) {
                Some(answer) => return Ok(answer),
                None => writeln!(self.output, "{}", OVERWRITE_RETRY_MESSAGE)?,
            }
        }
    }
}
