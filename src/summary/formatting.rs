//! Summary line formatting
use hifitime::Unit;

use crate::{
    diagnostics::Diagnostics,
    field::FieldWriter,
    summary::{Summary, SUMMARY_LINE_WIDTH},
};

/*
 * Splits |angle| into whole degrees and minutes in 1/100 units,
 * propagating the rounding carry into the degrees.
 */
fn degrees_minutes(angle: f64) -> (i64, i64) {
    let angle = angle.abs();
    let mut degrees = angle.trunc() as i64;
    let mut minutes = ((angle - angle.trunc()) * 60.0 * 100.0).round() as i64;
    if minutes >= 6000 {
        degrees += 1;
        minutes -= 6000;
    }
    (degrees, minutes)
}

impl Summary {
    /// Formats this [Summary] as an event summary line.
    pub fn pack(&self) -> String {
        let mut diagnostics = Diagnostics::new();
        self.pack_with(&mut diagnostics)
    }

    /// Formats this [Summary] as an event summary line, reporting
    /// values that could not be written into `diagnostics`.
    pub fn pack_with(&self, diagnostics: &mut Diagnostics) -> String {
        let mut w = FieldWriter::new(SUMMARY_LINE_WIDTH);

        if let Some(t) = self.origin_time {
            let t = t.round(Unit::Millisecond * 10_i64);
            let (y, m, d, hh, mm, ss, ns) = t.to_gregorian_utc();
            w.inject_integer(0..4, y as i64, true);
            w.inject_integer(4..6, m as i64, true);
            w.inject_integer(6..8, d as i64, true);
            w.inject_integer(8..10, hh as i64, true);
            w.inject_integer(10..12, mm as i64, true);
            w.inject_integer(12..14, ss as i64, true);
            w.inject_integer(14..16, (ns / 10_000_000) as i64, true);
        }

        if let Some(latitude) = self.latitude_deg {
            let (degrees, minutes) = degrees_minutes(latitude);
            w.inject_integer(16..18, degrees, false);
            if latitude < 0.0 {
                w.inject_char(18, 'S');
            }
            w.inject_integer(19..23, minutes, false);
        }

        if let Some(longitude) = self.longitude_deg {
            // written within [-180, 180]: west unless marked
            let longitude = if longitude > 180.0 {
                longitude - 360.0
            } else {
                longitude
            };
            let (degrees, minutes) = degrees_minutes(longitude);
            w.inject_integer(23..26, degrees, false);
            if longitude > 0.0 {
                w.inject_char(26, 'E');
            }
            w.inject_integer(27..31, minutes, false);
        }

        if let Some(depth) = self.depth_km {
            w.inject_fixed(31..36, depth, 2);
        }
        if let Some(count) = self.weighted_residuals {
            w.inject_integer(39..42, count as i64, false);
        }
        if let Some(gap) = self.azimuthal_gap_deg {
            w.inject_fixed(42..45, gap, 0);
        }
        if let Some(distance) = self.closest_station_km {
            w.inject_fixed(45..48, distance, 0);
        }
        if let Some(rms) = self.rms_s {
            w.inject_fixed(48..52, rms, 2);
        }
        if let Some(count) = self.s_weighted_residuals {
            w.inject_integer(82..85, count as i64, false);
        }
        if let Some(count) = self.first_motions {
            w.inject_integer(93..96, count as i64, false);
        }
        if let Some(id) = self.event_id {
            w.inject_integer(136..146, id as i64, false);
        }
        if let Some(label) = self.magnitude_label {
            w.inject_char(146, label);
        }
        if let Some(magnitude) = self.magnitude {
            w.inject_fixed(147..150, magnitude, 2);
        }

        let (line, events) = w.finish();
        diagnostics.merge(events);
        line
    }
}

impl std::fmt::Display for Summary {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        f.write_str(&self.pack())
    }
}
