//! Interactive input capability

use crate::error::{Error, Result};
use std::io::{self, BufRead, Write};

/// Source of interactive answers and sink for guidance text
pub trait OptionSource {
    /// Show a question and return the trimmed answer
    fn ask(&mut self, question: &str) -> Result<String>;

    /// Show guidance text
    fn say(&mut self, text: &str);
}

/// [`OptionSource`] reading lines from a reader and writing to a writer
pub struct TerminalPrompt<R, W> {
    reader: R,
    writer: W,
}

impl TerminalPrompt<io::StdinLock<'static>, io::Stdout> {
    /// Prompt on the process's stdin and stdout
    pub fn stdio() -> Self {
        Self::new(io::stdin().lock(), io::stdout())
    }
}

impl<R: BufRead, W: Write> TerminalPrompt<R, W> {
    /// Create a prompt over arbitrary streams
    pub fn new(reader: R, writer: W) -> Self {
        Self { reader, writer }
    }
}

impl<R: BufRead, W: Write> OptionSource for TerminalPrompt<R, W> {
    fn ask(&mut self, question: &str) -> Result<String> {
        write!(self.writer, "{question}")
            .and_then(|()| self.writer.flush())
            .map_err(|e| Error::prompt(e.to_string()))?;

        // EOF reads as an empty answer
        let mut line = String::new();
        self.reader
            .read_line(&mut line)
            .map_err(|e| Error::prompt(e.to_string()))?;
        Ok(line.trim().to_string())
    }

    fn say(&mut self, text: &str) {
        let _ = writeln!(self.writer, "{text}");
    }
}
