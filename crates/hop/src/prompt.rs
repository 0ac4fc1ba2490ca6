//! Interactive prompts
//!
//! Commands talk to the user through the `Prompter` trait so command logic
//! can be driven by scripted input in tests.

use std::collections::VecDeque;
use std::io::{self, Write};

use anyhow::{bail, Result};

/// Reads one line of user input at a time
pub trait Prompter {
    /// Print `prompt` and read a single line, trailing whitespace removed
    fn read_line(&mut self, prompt: &str) -> Result<String>;

    /// Ask a yes/no question; only a literal `y` confirms
    fn confirm(&mut self, message: &str) -> Result<bool> {
        let answer = self.read_line(&format!("{message} (y/N)? "))?;
        Ok(answer == "y")
    }
}

/// Terminal prompter reading from stdin
pub struct Stdin;

impl Prompter for Stdin {
    fn read_line(&mut self, prompt: &str) -> Result<String> {
        print!("{prompt}");
        // stdout is line-buffered and the prompt has no newline
        io::stdout().flush()?;

        let mut buffer = String::new();
        io::stdin().read_line(&mut buffer)?;
        Ok(buffer.trim_end().to_string())
    }
}

/// Prompter answering from a fixed queue of replies
pub struct Scripted {
    replies: VecDeque<String>,
}

impl Scripted {
    pub fn new<I, S>(replies: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            replies: replies.into_iter().map(Into::into).collect(),
        }
    }
}

impl Prompter for Scripted {
    fn read_line(&mut self, _prompt: &str) -> Result<String> {
        match self.replies.pop_front() {
            Some(reply) => Ok(reply),
            None => bail!("Scripted prompter ran out of replies"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_scripted_replies_in_order() {
        let mut prompter = Scripted::new(["first", "second"]);
        assert_eq!(prompter.read_line("? ").unwrap(), "first");
        assert_eq!(prompter.read_line("? ").unwrap(), "second");
        assert!(prompter.read_line("? ").is_err());
    }

    #[test]
    fn test_confirm_requires_exact_y() {
        let mut prompter = Scripted::new(["y", "Y", "yes", ""]);
        assert!(prompter.confirm("Proceed").unwrap());
        assert!(!prompter.confirm("Proceed").unwrap());
        assert!(!prompter.confirm("Proceed").unwrap());
        assert!(!prompter.confirm("Proceed").unwrap());
    }
}
