//! Calendar fields of Y2000 records
use hifitime::{Duration, Epoch, Unit};

use crate::field::{extract_integer, FieldWriter};

/// Calendar fields down to the minute, as written in front of
/// pick seconds and origin seconds: YYYYMMDDHHMM.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub(crate) struct CalendarBase {
    year: i32,
    month: u8,
    day: u8,
    hour: u8,
    minute: u8,
}

impl CalendarBase {
    /// Width of the calendar fields, in columns
    pub const WIDTH: usize = 12;

    /// Floors `t` to its minute
    pub fn from_epoch(t: Epoch) -> Self {
        let (year, month, day, hour, minute, _, _) = t.to_gregorian_utc();
        Self {
            year,
            month,
            day,
            hour,
            minute,
        }
    }

    /// Decodes the calendar fields starting at `start`.
    /// All five fields must be present and valid.
    pub fn parse(line: &str, start: usize) -> Option<Self> {
        let year = extract_integer(line, start..start + 4)?;
        let month = extract_integer(line, start + 4..start + 6)?;
        let day = extract_integer(line, start + 6..start + 8)?;
        let hour = extract_integer(line, start + 8..start + 10)?;
        let minute = extract_integer(line, start + 10..start + 12)?;
        let base = Self {
            year: i32::try_from(year).ok()?,
            month: u8::try_from(month).ok()?,
            day: u8::try_from(day).ok()?,
            hour: u8::try_from(hour).ok()?,
            minute: u8::try_from(minute).ok()?,
        };
        base.to_epoch().map(|_| base)
    }

    /// Writes the calendar fields starting at `start`, zero padded.
    pub fn format(&self, writer: &mut FieldWriter, start: usize) {
        writer.inject_integer(start..start + 4, self.year as i64, true);
        writer.inject_integer(start + 4..start + 6, self.month as i64, true);
        writer.inject_integer(start + 6..start + 8, self.day as i64, true);
        writer.inject_integer(start + 8..start + 10, self.hour as i64, true);
        writer.inject_integer(start + 10..start + 12, self.minute as i64, true);
    }

    /// Start of this minute
    pub fn to_epoch(&self) -> Option<Epoch> {
        Epoch::maybe_from_gregorian_utc(self.year, self.month, self.day, self.hour, self.minute, 0, 0)
            .ok()
    }

    /// Epoch `seconds` past this base, microsecond accurate.
    pub fn epoch_at(&self, seconds: f64) -> Option<Epoch> {
        if !seconds.is_finite() {
            return None;
        }
        let base = self.to_epoch()?;
        let micros = (seconds * 1.0E6).round() as i64;
        Some(base + Unit::Microsecond * micros)
    }

    /// Seconds elapsed from this base to `t`
    pub fn offset_seconds(&self, t: Epoch) -> Option<f64> {
        let base = self.to_epoch()?;
        let dt: Duration = t - base;
        Some(dt.to_seconds())
    }
}

/// Writes `seconds` as an F5.2 offset: whole seconds blank padded,
/// then centiseconds zero padded.
pub(crate) fn format_seconds(writer: &mut FieldWriter, start: usize, seconds: f64) {
    let centis = (seconds * 100.0).round();
    if !(0.0..100_000.0).contains(&centis) {
        // negative or wide offsets: plain fixed point
        writer.inject_fixed(start..start + 5, seconds, 2);
        return;
    }
    let centis = centis as i64;
    writer.inject_integer(start..start + 3, centis / 100, false);
    writer.inject_integer(start + 3..start + 5, centis % 100, true);
}
