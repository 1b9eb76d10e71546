//! Line-oriented terminal I/O used by the views.

use std::io::{self, BufRead, Write};

/// Where views print and read from.
pub trait Console {
    fn write_line(&mut self, line: &str) -> io::Result<()>;

    /// Show `prompt` and read one line without its terminator.
    /// Returns `None` at end of input.
    fn read_line(&mut self, prompt: &str) -> io::Result<Option<String>>;

    /// Ask a yes/no question. Anything but `y`/`yes` is a no.
    fn confirm(&mut self, question: &str) -> io::Result<bool> {
        let answer = self.read_line(&format!("{question} [y/N] "))?;
        Ok(matches!(
            answer.as_deref().map(|a| a.trim().to_ascii_lowercase()).as_deref(),
            Some("y" | "yes")
        ))
    }
}

/// Console over the process stdin/stdout.
#[derive(Debug, Default)]
pub struct StdConsole;

impl StdConsole {
    pub fn new() -> Self {
        Self
    }
}

impl Console for StdConsole {
    fn write_line(&mut self, line: &str) -> io::Result<()> {
        let mut out = io::stdout().lock();
        writeln!(out, "{line}")
    }

    fn read_line(&mut self, prompt: &str) -> io::Result<Option<String>> {
        {
            let mut out = io::stdout().lock();
            write!(out, "{prompt}")?;
            out.flush()?;
        }

        let mut line = String::new();
        if io::stdin().lock().read_line(&mut line)? == 0 {
            return Ok(None);
        }
        Ok(Some(line.trim_end_matches(['\n', '\r']).to_string()))
    }
}
