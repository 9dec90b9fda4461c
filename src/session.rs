use std::{
    borrow::Cow,
    io::{self, BufRead, Write},
};

use crate::{
    error::Error,
    evaluate_line,
    interpreter::{evaluator::scope::GlobalScope, value::core::Value},
};

/// How the driver treats one raw input line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Line<'a> {
    /// Blank or comment line, ignored.
    Skip,
    /// The `exit` command.
    Exit,
    /// Source text to evaluate.
    Source(&'a str),
}

/// Result of evaluating one source line.
#[derive(Debug, Clone, PartialEq)]
pub enum Outcome {
    /// The line was an expression and produced a value.
    Value(Value),
    /// The line defined a function.
    Defined {
        /// Name of the function.
        name:      String,
        /// Arity it was registered under.
        arity:     usize,
        /// Whether an existing definition was replaced.
        redefined: bool,
    },
}

/// An interpreter session: one global function table shared by every line.
///
/// Both drivers go through a session. The interactive driver feeds it lines
/// one by one with [`Session::process`]; the file driver hands it a reader
/// with [`Session::run`].
pub struct Session {
    globals: GlobalScope,
}

impl Default for Session {
    fn default() -> Self {
        Self::new()
    }
}

impl Session {
    /// Creates a session with the built-in library installed.
    #[must_use]
    pub fn new() -> Self {
        Self { globals: GlobalScope::with_default_library() }
    }

    /// The session's function table.
    #[must_use]
    pub const fn globals(&self) -> &GlobalScope {
        &self.globals
    }

    /// Classifies a raw input line.
    ///
    /// A trailing carriage return is ignored. Lines that are empty or only
    /// whitespace, and lines starting with `#`, are skipped; the exact line
    /// `exit` ends the session.
    ///
    /// # Example
    /// ```
    /// use listfunc::session::{Line, Session};
    ///
    /// assert_eq!(Session::classify("   "), Line::Skip);
    /// assert_eq!(Session::classify("# note"), Line::Skip);
    /// assert_eq!(Session::classify("exit"), Line::Exit);
    /// assert_eq!(Session::classify("add(1, 2)"), Line::Source("add(1, 2)"));
    /// ```
    #[must_use]
    pub fn classify(line: &str) -> Line<'_> {
        let line = line.strip_suffix('\r').unwrap_or(line);

        if line.trim().is_empty() || line.starts_with('#') {
            Line::Skip
        } else if line == "exit" {
            Line::Exit
        } else {
            Line::Source(line)
        }
    }

    /// Evaluates one source line against the session's table.
    pub fn evaluate(&self, source: &str) -> Result<Outcome, Error> {
        evaluate_line(source, &self.globals)
    }

    /// Handles one raw line following the line protocol.
    ///
    /// When `echo` is set, source lines are copied to `out` before they are
    /// evaluated. Values are written to `out` as `>> value`; definitions
    /// print nothing; errors are written to `err` and do not stop the
    /// session.
    ///
    /// # Returns
    /// `false` once the line was `exit`.
    ///
    /// # Errors
    /// Only I/O errors from writing to `out` or `err`.
    pub fn process<W, E>(&self, line: &str, out: &mut W, err: &mut E, echo: bool) -> io::Result<bool>
        where W: Write,
              E: Write
    {
        let source = match Self::classify(line) {
            Line::Skip => return Ok(true),
            Line::Exit => return Ok(false),
            Line::Source(source) => source,
        };

        if echo {
            writeln!(out, "{source}")?;
        }

        match self.evaluate(source) {
            Ok(Outcome::Value(value)) => writeln!(out, ">> {value}")?,
            Ok(Outcome::Defined { name, arity, redefined }) => {
                if redefined {
                    log::info!("redefined {name}/{arity}");
                } else {
                    log::info!("defined {name}/{arity}");
                }
            },
            Err(error) => {
                log::debug!("{:?} error on line {source:?}", error.kind());
                writeln!(err, "{error}")?;
            },
        }

        Ok(true)
    }

    /// Feeds every line of `input` through [`Session::process`] until the
    /// input ends or an `exit` line is read.
    ///
    /// Lines are split on `\n` as raw bytes. A line that is not valid UTF-8
    /// has its invalid sequences replaced with U+FFFD and is processed like
    /// any other, so it fails on its own without ending the replay.
    ///
    /// # Errors
    /// Only I/O errors from reading `input` or writing the output streams.
    ///
    /// # Example
    /// ```
    /// use listfunc::session::Session;
    ///
    /// let script = "inc <- add(#0, 1)\ninc(41)\ndiv(1, 0)\nexit\ninc(0)\n";
    /// let (mut out, mut err) = (Vec::new(), Vec::new());
    ///
    /// Session::new().run(script.as_bytes(), &mut out, &mut err, false).unwrap();
    ///
    /// assert_eq!(String::from_utf8(out).unwrap(), ">> 42\n");
    /// assert_eq!(String::from_utf8(err).unwrap(), "Error: Division by zero.\n");
    /// ```
    pub fn run<R, W, E>(&self, mut input: R, out: &mut W, err: &mut E, echo: bool) -> io::Result<()>
        where R: BufRead,
              W: Write,
              E: Write
    {
        let mut buffer = Vec::new();

        loop {
            buffer.clear();
            if input.read_until(b'\n', &mut buffer)? == 0 {
                break;
            }

            let bytes = buffer.strip_suffix(b"\n").unwrap_or(&buffer);
            let line = String::from_utf8_lossy(bytes);
            if matches!(line, Cow::Owned(_)) {
                log::warn!("input line {line:?} was not valid UTF-8");
            }

            if !self.process(&line, out, err, echo)? {
                break;
            }
        }
        out.flush()
    }
}
