//! Fixed columns extraction & injection.
//!
//! Y2000 lines are blank padded and columns are fixed by byte offset.
//! Columns are always expressed as 0-based, end-exclusive ranges.
//! Extraction never fails: malformed or missing content is simply `None`.
use std::ops::Range;

use crate::diagnostics::Diagnostics;

/// Trimming convention of a string field
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum Trim {
    /// Remarks: blanks are removed on both sides
    Both,
    /// Left justified codes: trailing blanks are removed
    End,
}

/*
 * Returns content within columns. Ranges that start beyond the line
 * are missing, ranges that end beyond the line are truncated.
 */
fn columns_of(line: &str, columns: Range<usize>) -> Option<&str> {
    if columns.start >= line.len() {
        return None;
    }
    let end = columns.end.min(line.len());
    line.get(columns.start..end)
}

/// Extracts a string field. Blank fields are `None`.
pub fn extract_string(line: &str, columns: Range<usize>, trim: Trim) -> Option<String> {
    let content = columns_of(line, columns)?;
    if content.trim().is_empty() {
        return None;
    }
    match trim {
        Trim::Both => Some(content.trim().to_string()),
        Trim::End => Some(content.trim_end().to_string()),
    }
}

/// Extracts a single character. Blanks are `None`.
pub fn extract_char(line: &str, column: usize) -> Option<char> {
    let c = columns_of(line, column..column + 1)?.chars().next()?;
    if c.is_whitespace() {
        None
    } else {
        Some(c)
    }
}

/// Extracts a signed integer.
/// Content that does not parse but still carries a minus sign, like a
/// lonely " -", is interpreted as -1.
pub fn extract_integer(line: &str, columns: Range<usize>) -> Option<i64> {
    let content = columns_of(line, columns)?;
    if let Ok(value) = content.trim().parse::<i64>() {
        return Some(value);
    }
    if content.chars().rev().any(|c| c == '-') {
        Some(-1)
    } else {
        None
    }
}

/// Extracts a wide unsigned integer, for identifiers that exceed
/// the usual integer fields.
pub fn extract_unsigned(line: &str, columns: Range<usize>) -> Option<u64> {
    let content = columns_of(line, columns)?;
    content.trim().parse::<u64>().ok()
}

/// Extracts an `Fw.d` field: the first `whole` columns hold the integral
/// part, the remaining columns the implied decimals.
/// Blanks are ignored and remaining characters are right justified,
/// so " -14" in a F4.2 field is -0.14. An explicit decimal point wins
/// over the implied one.
pub fn extract_decimal(line: &str, columns: Range<usize>, whole: usize) -> Option<f64> {
    let decimals = columns.len().saturating_sub(whole);
    let content = columns_of(line, columns)?;

    let digits = content
        .chars()
        .filter(|c| !c.is_whitespace())
        .collect::<String>();

    if digits.is_empty() {
        return None;
    }
    if digits.contains('.') {
        return digits.parse::<f64>().ok();
    }

    let value = digits.parse::<i64>().ok()?;
    Some(value as f64 / 10.0_f64.powi(decimals as i32))
}

/// [FieldWriter] produces a fixed width line, initially blank.
/// Values that do not fit leave their columns blank and are reported.
#[derive(Debug, Clone)]
pub struct FieldWriter {
    buf: Vec<u8>,
    diagnostics: Diagnostics,
}

impl FieldWriter {
    /// Builds a blank line of given width
    pub fn new(width: usize) -> Self {
        Self {
            buf: vec![b' '; width],
            diagnostics: Diagnostics::default(),
        }
    }

    /*
     * Lines are ASCII: other characters are replaced and reported
     */
    fn ascii(&mut self, c: char, column: usize) -> u8 {
        if c.is_ascii() {
            c as u8
        } else {
            self.diagnostics
                .warn(format!("'{}' replaced by '?' in column {}", c, column));
            b'?'
        }
    }

    /// Left justifies `value` in given columns. Remaining columns
    /// are blank, overflowing characters are truncated.
    pub fn inject_string(&mut self, columns: Range<usize>, value: &str) {
        if columns.end > self.buf.len() {
            return;
        }
        self.buf[columns.clone()].fill(b' ');
        for (column, c) in columns.zip(value.chars()) {
            let byte = self.ascii(c, column);
            self.buf[column] = byte;
        }
    }

    /// Writes a single character
    pub fn inject_char(&mut self, column: usize, c: char) {
        if column < self.buf.len() {
            let byte = self.ascii(c, column);
            self.buf[column] = byte;
        }
    }

    /// Right justifies `value` in given columns, zero padded or blank padded.
    pub fn inject_integer(&mut self, columns: Range<usize>, value: i64, zero_pad: bool) {
        let width = columns.len();
        let formatted = if zero_pad {
            format!("{:0width$}", value, width = width)
        } else {
            format!("{:>width$}", value, width = width)
        };
        if formatted.len() > width {
            self.diagnostics.warn(format!(
                "{} does not fit in columns {}..{}",
                value, columns.start, columns.end
            ));
            return;
        }
        if let Some(field) = self.buf.get_mut(columns) {
            field.copy_from_slice(formatted.as_bytes());
        }
    }

    /// Writes `value` as an integer scaled by 10^decimals, blank padded.
    pub fn inject_fixed(&mut self, columns: Range<usize>, value: f64, decimals: u32) {
        let scaled = (value * 10.0_f64.powi(decimals as i32)).round();
        if !scaled.is_finite() || scaled.abs() >= i64::MAX as f64 {
            self.diagnostics.warn(format!(
                "{} cannot be written in columns {}..{}",
                value, columns.start, columns.end
            ));
            return;
        }
        self.inject_integer(columns, scaled as i64, false);
    }

    /// Returns the line produced so far, with the events
    /// encountered while producing it.
    pub fn finish(self) -> (String, Diagnostics) {
        (
            String::from_utf8_lossy(&self.buf).into_owned(),
            self.diagnostics,
        )
    }
}
