//! Line-oriented report output
//!
//! The smoke test's product is human-readable text. Checks write through a
//! `Console` so the binary can target stdout while tests capture into a
//! buffer and assert on exactly what an operator would see.

use std::fmt::Display;
use std::io::Write;

/// Width of the `=` separator lines between report sections
pub const SEPARATOR_WIDTH: usize = 50;

/// Report writer wrapping any `io::Write` sink
pub struct Console<W> {
    out: W,
}

impl Console<std::io::Stdout> {
    /// Console bound to the process's stdout
    pub fn stdout() -> Self {
        Self::new(std::io::stdout())
    }
}

impl Console<Vec<u8>> {
    /// Console capturing into memory
    pub fn buffer() -> Self {
        Self::new(Vec::new())
    }

    /// Captured output as text
    pub fn contents(&self) -> String {
        String::from_utf8_lossy(&self.out).into_owned()
    }
}

impl<W: Write> Console<W> {
    pub fn new(out: W) -> Self {
        Self { out }
    }

    /// Write one line of report text
    ///
    /// A broken sink never aborts a check; the failure is logged instead.
    pub fn line(&mut self, text: impl Display) {
        if let Err(e) = writeln!(self.out, "{}", text) {
            tracing::warn!(error = %e, "Failed to write report line");
        }
    }

    /// Write an empty line
    pub fn blank(&mut self) {
        self.line("");
    }

    /// Write a full-width `=` separator
    pub fn separator(&mut self) {
        self.line("=".repeat(SEPARATOR_WIDTH));
    }

    /// Write a `=== title ===` section heading
    pub fn heading(&mut self, title: &str) {
        self.line(format_args!("=== {} ===", title));
    }
}
