//! Line based input. Every workflow reads answers through `PromptReader`, one
//! blocking line at a time.

use std::collections::VecDeque;
use std::io::{self, BufRead, Write};

/// Source of answers to prompts.
pub trait PromptReader {
    /// Show `prompt` and read one line. The line terminator is stripped but
    /// nothing else is trimmed. `Ok(None)` means the input is exhausted.
    fn read_line(&mut self, prompt: &str) -> io::Result<Option<String>>;
}

/// Prompts on a writer (normally stdout) and reads from a buffered reader
/// (normally stdin).
pub struct LinePrompt<R, W> {
    reader: R,
    writer: W,
}

impl<R: BufRead, W: Write> LinePrompt<R, W> {
    pub fn new(reader: R, writer: W) -> Self {
        Self { reader, writer }
    }
}

impl LinePrompt<io::StdinLock<'static>, io::Stdout> {
    pub fn stdio() -> Self {
        Self::new(io::stdin().lock(), io::stdout())
    }
}

impl<R: BufRead, W: Write> PromptReader for LinePrompt<R, W> {
    fn read_line(&mut self, prompt: &str) -> io::Result<Option<String>> {
        write!(self.writer, "{prompt}")?;
        self.writer.flush()?;

        let mut line = String::new();
        if self.reader.read_line(&mut line)? == 0 {
            return Ok(None);
        }
        Ok(Some(strip_line_ending(line)))
    }
}

fn strip_line_ending(mut line: String) -> String {
    if line.ends_with('\n') {
        line.pop();
        if line.ends_with('\r') {
            line.pop();
        }
    }
    line
}

/// Replays a fixed list of answers and records every prompt it was shown.
/// Used for piped scripts and for driving workflows in tests.
#[derive(Debug, Default)]
pub struct ScriptedPrompt {
    answers: VecDeque<String>,
    asked: Vec<String>,
}

impl ScriptedPrompt {
    pub fn new<I, S>(answers: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            answers: answers.into_iter().map(Into::into).collect(),
            asked: Vec::new(),
        }
    }

    /// Prompts shown so far, in order.
    pub fn asked(&self) -> &[String] {
        &self.asked
    }

    pub fn remaining(&self) -> usize {
        self.answers.len()
    }
}

impl PromptReader for ScriptedPrompt {
    fn read_line(&mut self, prompt: &str) -> io::Result<Option<String>> {
        self.asked.push(prompt.to_string());
        Ok(self.answers.pop_front())
    }
}
