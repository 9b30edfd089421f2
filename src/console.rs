//! Status lines on stdout.
//!
//! Consumers scrape these lines, so they always start with `SUCCESS:` or
//! `ERROR:`. A stream that refuses the UTF-8 text gets an ASCII rendition
//! with `?` substitutions instead of aborting the run.

use std::io::{self, Write};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LineKind {
    Success,
    Error,
    Plain,
}

impl LineKind {
    fn prefix(&self) -> &'static str {
        match self {
            LineKind::Success => "SUCCESS: ",
            LineKind::Error => "ERROR: ",
            LineKind::Plain => "",
        }
    }
}

pub struct Console<W: Write> {
    out: W,
}

impl Console<io::Stdout> {
    pub fn stdout() -> Self {
        Self::new(io::stdout())
    }
}

impl<W: Write> Console<W> {
    pub fn new(out: W) -> Self {
        Self { out }
    }

    pub fn success(&mut self, message: impl AsRef<str>) {
        self.line(LineKind::Success, message.as_ref());
    }

    pub fn error(&mut self, message: impl AsRef<str>) {
        self.line(LineKind::Error, message.as_ref());
    }

    pub fn plain(&mut self, message: impl AsRef<str>) {
        self.line(LineKind::Plain, message.as_ref());
    }

    fn line(&mut self, kind: LineKind, message: &str) {
        let text = format!("{}{}\n", kind.prefix(), message);
        if self.out.write_all(text.as_bytes()).is_err() {
            let _ = self.out.write_all(ascii_lossy(&text).as_bytes());
        }
        let _ = self.out.flush();
    }

    pub fn into_inner(self) -> W {
        self.out
    }
}

/// Replace every non-ASCII character with `?`.
pub fn ascii_lossy(text: &str) -> String {
    text.chars()
        .map(|c| if c.is_ascii() { c } else { '?' })
        .collect()
}
