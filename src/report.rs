//! Plain-text result lines.

use std::io::{self, Write};

use crate::workload::Finding;

/// Writes `label: value` lines and six-decimal time lines.
pub struct Reporter<W: Write> {
    out: W,
}

impl<W: Write> Reporter<W> {
    pub fn new(out: W) -> Self {
        Self { out }
    }

    pub fn finding(&mut self, finding: &Finding) -> io::Result<()> {
        match &finding.value {
            Some(value) => writeln!(self.out, "{}: {}", finding.label, value),
            None => writeln!(self.out, "{}", finding.label),
        }
    }

    pub fn time(&mut self, label: &str, secs: f64) -> io::Result<()> {
        writeln!(self.out, "{}: {:.6}", label, secs)
    }

    /// Free-form line, used by the suite for section headers.
    pub fn line(&mut self, text: &str) -> io::Result<()> {
        writeln!(self.out, "{}", text)
    }

    pub fn flush(&mut self) -> io::Result<()> {
        self.out.flush()
    }

    pub fn into_inner(self) -> W {
        self.out
    }
}
