//! Console collaborator: line prompts and narrative output.
//!
//! The engine never touches a terminal. The session asks a [`Console`] for
//! input and hands it narration built by [`narration`].
//!
//! [`TerminalConsole`] works over any `BufRead`/`Write` pair: stdin/stdout
//! in the binary, in-memory buffers in tests.
//!
//! ```
//! use dice36::console::{Console, TerminalConsole};
//! use std::io::Cursor;
//!
//! let mut console = TerminalConsole::new(Cursor::new("ada\n"), Vec::new());
//! assert_eq!(console.prompt_text("Name: ").unwrap(), "ada");
//! console.notify("hello").unwrap();
//!
//! let (_, output) = console.into_parts();
//! assert_eq!(String::from_utf8(output).unwrap(), "Name: hello\n");
//! ```

pub mod narration;

use std::io::{self, BufRead, StdinLock, Stdout, Write};

/// Line-oriented prompt/notify surface.
pub trait Console {
    /// Show `message` and read one line. The line terminator is stripped;
    /// end of input reads as an empty line.
    fn prompt_text(&mut self, message: &str) -> io::Result<String>;

    /// Write one line of narration.
    fn notify(&mut self, message: &str) -> io::Result<()>;
}

/// Console over a reader and a writer.
#[derive(Debug)]
pub struct TerminalConsole<R, W> {
    input: R,
    output: W,
}

impl<R: BufRead, W: Write> TerminalConsole<R, W> {
    /// Create a console reading from `input` and writing to `output`.
    pub fn new(input: R, output: W) -> Self {
        Self { input, output }
    }

    /// Give back the reader and writer.
    pub fn into_parts(self) -> (R, W) {
        (self.input, self.output)
    }
}

impl TerminalConsole<StdinLock<'static>, Stdout> {
    /// Console on the process's stdin and stdout.
    #[must_use]
    pub fn stdio() -> Self {
        Self::new(io::stdin().lock(), io::stdout())
    }
}

impl<R: BufRead, W: Write> Console for TerminalConsole<R, W> {
    fn prompt_text(&mut self, message: &str) -> io::Result<String> {
        write!(self.output, "{message}")?;
        self.output.flush()?;

        let mut line = String::new();
        self.input.read_line(&mut line)?;
        let trimmed = line.trim_end_matches(&['\r', '\n'][..]).len();
        line.truncate(trimmed);
        Ok(line)
    }

    fn notify(&mut self, message: &str) -> io::Result<()> {
        writeln!(self.output, "{message}")
    }
}

impl<C: Console + ?Sized> Console for &mut C {
    fn prompt_text(&mut self, message: &str) -> io::Result<String> {
        (**self).prompt_text(message)
    }

    fn notify(&mut self, message: &str) -> io::Result<()> {
        (**self).notify(message)
    }
}
