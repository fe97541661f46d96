//! Non fatal events collected while parsing or producing Y2000 content.
//!
//! Y2000 processing never aborts on a bad field or a bad line: the
//! offending content is left out and the event is reported here, so the
//! caller can decide whether the result is acceptable. When compiled with
//! the "log" feature, every entry is also forwarded to the log facade.
#[cfg(feature = "log")]
use log::{error, warn};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// How much of the content was lost
#[derive(Debug, Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum Severity {
    /// A field was left out, or the output is best effort
    Warning,
    /// A complete line was dropped
    Error,
}

impl std::fmt::Display for Severity {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        match self {
            Self::Warning => f.write_str("warning"),
            Self::Error => f.write_str("error"),
        }
    }
}

/// One reported event
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Diagnostic {
    /// [Severity] of this event
    pub severity: Severity,
    /// Index of the line that rose this event, within the unpacked block.
    /// None when the event is not attached to a block line.
    pub line: Option<usize>,
    /// Readable description
    pub message: String,
}

impl std::fmt::Display for Diagnostic {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        if let Some(line) = self.line {
            write!(f, "line {}: {}: {}", line, self.severity, self.message)
        } else {
            write!(f, "{}: {}", self.severity, self.message)
        }
    }
}

/// [Diagnostic]s collector, returned alongside parsing results
#[derive(Debug, Clone, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Diagnostics {
    entries: Vec<Diagnostic>,
    #[cfg_attr(feature = "serde", serde(skip))]
    line: Option<usize>,
}

impl Diagnostics {
    /// Builds an empty collector
    pub fn new() -> Self {
        Self::default()
    }
    /// Attaches following entries to given block line
    pub(crate) fn set_line(&mut self, line: Option<usize>) {
        self.line = line;
    }
    pub(crate) fn warn(&mut self, message: impl Into<String>) {
        self.push(Severity::Warning, message.into());
    }
    pub(crate) fn error(&mut self, message: impl Into<String>) {
        self.push(Severity::Error, message.into());
    }
    fn push(&mut self, severity: Severity, message: String) {
        #[cfg(feature = "log")]
        match severity {
            Severity::Warning => warn!("{}", message),
            Severity::Error => error!("{}", message),
        }
        self.entries.push(Diagnostic {
            severity,
            line: self.line,
            message,
        });
    }
    /// Merges `other` entries into Self. Entries that were not attached
    /// to a line are attached to the current line.
    pub(crate) fn merge(&mut self, other: Diagnostics) {
        let line = self.line;
        self.entries
            .extend(other.entries.into_iter().map(|mut entry| {
                entry.line = entry.line.or(line);
                entry
            }));
    }
    /// Remaps line attachments, for blocks
    /// that are part of a larger block.
    pub(crate) fn map_lines<F: Fn(usize) -> usize>(&mut self, f: F) {
        for entry in self.entries.iter_mut() {
            if let Some(line) = entry.line.as_mut() {
                *line = f(*line);
            }
        }
    }
    /// Returns true if nothing was reported
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
    /// Number of reported events
    pub fn len(&self) -> usize {
        self.entries.len()
    }
    /// Iterates over all reported events
    pub fn iter(&self) -> impl Iterator<Item = &Diagnostic> + '_ {
        self.entries.iter()
    }
    /// Iterates over [Severity::Warning] events only
    pub fn warnings(&self) -> impl Iterator<Item = &Diagnostic> + '_ {
        self.entries
            .iter()
            .filter(|entry| entry.severity == Severity::Warning)
    }
    /// Iterates over [Severity::Error] events only
    pub fn errors(&self) -> impl Iterator<Item = &Diagnostic> + '_ {
        self.entries
            .iter()
            .filter(|entry| entry.severity == Severity::Error)
    }
    /// Returns true if at least one line was dropped
    pub fn has_errors(&self) -> bool {
        self.errors().count() > 0
    }
}

impl IntoIterator for Diagnostics {
    type Item = Diagnostic;
    type IntoIter = std::vec::IntoIter<Diagnostic>;
    fn into_iter(self) -> Self::IntoIter {
        self.entries.into_iter()
    }
}
