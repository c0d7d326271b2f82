//! Interactive yes/no prompts with a bounded number of attempts.

use std::io::{self, BufRead, StdinLock, Stdout, Write};

/// Outcome of a bounded yes/no prompt.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Confirmation {
    Confirmed,
    Declined,
    /// Budget spent on unrecognized answers, or input closed.
    Exhausted,
}

/// Maps an answer to a decision. Tokens are exact and case-sensitive.
pub fn parse_answer(answer: &str) -> Option<bool> {
    match answer.trim() {
        "yes" | "y" => Some(true),
        "no" | "n" => Some(false),
        _ => None,
    }
}

/// Input and output streams used for prompts and progress lines.
pub struct Console<R, W> {
    input: R,
    output: W,
}

impl Console<StdinLock<'static>, Stdout> {
    /// Console bound to the process terminal.
    pub fn stdio() -> Self {
        Self::new(io::stdin().lock(), io::stdout())
    }
}

impl<R: BufRead, W: Write> Console<R, W> {
    pub fn new(input: R, output: W) -> Self {
        Self { input, output }
    }

    /// Writes one line of output.
    pub fn say(&mut self, line: &str) -> io::Result<()> {
        writeln!(self.output, "{}", line)?;
        self.output.flush()
    }

    /// Asks `question` until a recognized answer arrives or `attempts` run out.
    pub fn confirm(&mut self, question: &str, attempts: u32) -> io::Result<Confirmation> {
        let attempts = attempts.max(1);
        for attempt in 1..=attempts {
            write!(self.output, "{} [yes/no]: ", question)?;
            self.output.flush()?;

            let mut answer = String::new();
            if self.input.read_line(&mut answer)? == 0 {
                writeln!(self.output)?;
                tracing::debug!("prompt input closed");
                return Ok(Confirmation::Exhausted);
            }
            match parse_answer(&answer) {
                Some(true) => return Ok(Confirmation::Confirmed),
                Some(false) => return Ok(Confirmation::Declined),
                None => {
                    tracing::debug!(attempt, answer = answer.trim(), "unrecognized answer");
                    if attempt < attempts {
                        self.say("Please answer \"yes\" or \"no\" (or \"y\" / \"n\").")?;
                    }
                }
            }
        }
        Ok(Confirmation::Exhausted)
    }

    /// Consumes the console and returns its streams.
    pub fn into_parts(self) -> (R, W) {
        (self.input, self.output)
    }
}
