//! Console abstraction for the menu loop
//!
//! Screen clearing is a process-wide side effect tied to the host
//! terminal, so it sits behind a trait the tests can substitute with a
//! scripted fake.

use std::io::{self, BufRead, Write};

/// Terminal capabilities the menu loop needs
pub trait Console {
    /// Clear the display
    fn clear(&mut self);

    /// Print a prompt and read one line of input
    ///
    /// Returns `None` on end of input (EOF), which ends the menu loop.
    fn read_line(&mut self, prompt: &str) -> io::Result<Option<String>>;

    /// Print text to the display
    fn print(&mut self, text: &str);
}

/// Real console backed by stdin/stdout
pub struct StdConsole;

impl StdConsole {
    pub fn new() -> Self {
        Self
    }
}

impl Console for StdConsole {
    fn clear(&mut self) {
        // ANSI clear screen + cursor home; supported by modern Windows terminals too
        print!("\x1b[2J\x1b[H");
        let _ = io::stdout().flush();
    }

    fn read_line(&mut self, prompt: &str) -> io::Result<Option<String>> {
        print!("{prompt}");
        io::stdout().flush()?;

        let mut line = String::new();
        let read = io::stdin().lock().read_line(&mut line)?;
        if read == 0 {
            return Ok(None);
        }
        Ok(Some(line.trim_end_matches(['\r', '\n']).to_string()))
    }

    fn print(&mut self, text: &str) {
        print!("{text}");
        let _ = io::stdout().flush();
    }
}

/// Scripted console for driving the menu loop in tests
#[cfg(test)]
pub struct ScriptedConsole {
    inputs: std::collections::VecDeque<String>,
    pub output: String,
    pub clears: usize,
}

#[cfg(test)]
impl ScriptedConsole {
    pub fn new(inputs: &[&str]) -> Self {
        Self {
            inputs: inputs.iter().map(|s| s.to_string()).collect(),
            output: String::new(),
            clears: 0,
        }
    }
}

#[cfg(test)]
impl Console for ScriptedConsole {
    fn clear(&mut self) {
        self.clears += 1;
    }

    fn read_line(&mut self, prompt: &str) -> io::Result<Option<String>> {
        self.output.push_str(prompt);
        Ok(self.inputs.pop_front())
    }

    fn print(&mut self, text: &str) {
        self.output.push_str(text);
    }
}
