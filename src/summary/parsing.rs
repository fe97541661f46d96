//! Summary line parsing
use std::str::FromStr;

use hifitime::Epoch;

#[cfg(feature = "log")]
use log::debug;

use crate::{
    diagnostics::Diagnostics,
    error::Error,
    field::{extract_char, extract_decimal, extract_integer, extract_unsigned},
    summary::Summary,
};

/*
 * Origin time is only accepted as a whole: YYYYMMDDHHMMSScc
 */
fn origin_time(line: &str) -> Option<Epoch> {
    let year = extract_integer(line, 0..4)?;
    let month = extract_integer(line, 4..6)?;
    let day = extract_integer(line, 6..8)?;
    let hour = extract_integer(line, 8..10)?;
    let minute = extract_integer(line, 10..12)?;
    let second = extract_integer(line, 12..14)?;
    let centis = extract_integer(line, 14..16)?;
    if !(0..100).contains(&centis) {
        return None;
    }
    Epoch::maybe_from_gregorian_utc(
        i32::try_from(year).ok()?,
        u8::try_from(month).ok()?,
        u8::try_from(day).ok()?,
        u8::try_from(hour).ok()?,
        u8::try_from(minute).ok()?,
        u8::try_from(second).ok()?,
        centis as u32 * 10_000_000,
    )
    .ok()
}

/*
 * Counts cannot be negative
 */
fn count(line: &str, start: usize, end: usize, name: &str, diag: &mut Diagnostics) -> Option<u32> {
    let value = extract_integer(line, start..end)?;
    match u32::try_from(value) {
        Ok(count) => Some(count),
        Err(_) => {
            diag.warn(format!("invalid {}: {}", name, value));
            None
        },
    }
}

impl Summary {
    /// Decodes an event summary line. Missing or malformed fields
    /// are left out, out of range fields are reported and left out.
    /// Only a blank line is an error.
    pub fn unpack(line: &str) -> Result<(Self, Diagnostics), Error> {
        if line.trim().is_empty() {
            return Err(Error::MalformedInput("blank summary line".to_string()));
        }

        let mut diagnostics = Diagnostics::new();
        let mut summary = Self::default();

        summary.origin_time = origin_time(line);

        let degrees = extract_integer(line, 16..18);
        let minutes = extract_decimal(line, 19..23, 2);
        if let (Some(degrees), Some(minutes)) = (degrees, minutes) {
            let mut latitude = degrees as f64 + minutes / 60.0;
            if extract_char(line, 18) == Some('S') {
                latitude = -latitude;
            }
            if let Err(e) = summary.set_latitude_deg(latitude) {
                diagnostics.warn(e.to_string());
            }
        }

        // longitudes are positive westward, unless marked 'E'
        let degrees = extract_integer(line, 23..26);
        let minutes = extract_decimal(line, 27..31, 2);
        if let (Some(degrees), Some(minutes)) = (degrees, minutes) {
            let mut longitude = -(degrees as f64) - minutes / 60.0;
            if extract_char(line, 26) == Some('E') {
                longitude = -longitude;
            }
            if let Err(e) = summary.set_longitude_deg(longitude) {
                diagnostics.warn(e.to_string());
            }
        }

        if let Some(depth) = extract_decimal(line, 31..36, 3) {
            if let Err(e) = summary.set_depth_km(depth) {
                diagnostics.warn(e.to_string());
            }
        }

        summary.weighted_residuals = count(line, 39, 42, "weighted residuals", &mut diagnostics);
        summary.s_weighted_residuals =
            count(line, 82, 85, "S weighted residuals", &mut diagnostics);
        summary.first_motions = count(line, 93, 96, "first motions", &mut diagnostics);

        if let Some(gap) = extract_integer(line, 42..45) {
            if let Err(e) = summary.set_azimuthal_gap_deg(gap as f64) {
                diagnostics.warn(e.to_string());
            }
        }
        if let Some(distance) = extract_integer(line, 45..48) {
            if let Err(e) = summary.set_closest_station_distance_km(distance as f64) {
                diagnostics.warn(e.to_string());
            }
        }
        if let Some(rms) = extract_decimal(line, 48..52, 2) {
            if let Err(e) = summary.set_rms_s(rms) {
                diagnostics.warn(e.to_string());
            }
        }

        if let Some(id) = extract_unsigned(line, 136..146) {
            if let Err(e) = summary.set_event_id(id) {
                diagnostics.warn(e.to_string());
            }
        }
        if let Some(label) = extract_char(line, 146) {
            let _ = summary.set_magnitude_label(label);
        }
        if let Some(magnitude) = extract_decimal(line, 147..150, 1) {
            let _ = summary.set_magnitude(magnitude);
        }

        #[cfg(feature = "log")]
        debug!(
            "summary: {:?} lat={:?} lon={:?} depth={:?}",
            summary.origin_time, summary.latitude_deg, summary.longitude_deg, summary.depth_km
        );

        Ok((summary, diagnostics))
    }
}

impl FromStr for Summary {
    type Err = Error;
    fn from_str(line: &str) -> Result<Self, Self::Err> {
        let (summary, _) = Self::unpack(line)?;
        Ok(summary)
    }
}
