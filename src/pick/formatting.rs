//! Pick line formatting
use crate::{
    diagnostics::Diagnostics,
    field::FieldWriter,
    pick::{Pick, PICK_LINE_WIDTH},
    time::{format_seconds, CalendarBase},
};

/// P weight code written when none was defined
const DEFAULT_P_WEIGHT_CODE: u8 = 4;

/// S weight code written when none was defined
const DEFAULT_S_WEIGHT_CODE: u8 = 0;

/*
 * Single character remarks still occupy both columns
 */
fn remark(value: &str) -> String {
    format!("{:<2}", value)
}

impl Pick {
    /// Formats this [Pick] as a station archive line.
    /// See [Self::pack_with] to collect formatting events.
    pub fn pack(&self) -> String {
        let mut diagnostics = Diagnostics::new();
        self.pack_with(&mut diagnostics)
    }

    /// Formats this [Pick] as a station archive line, reporting
    /// values that could not be written into `diagnostics`.
    pub fn pack_with(&self, diagnostics: &mut Diagnostics) -> String {
        let mut w = FieldWriter::new(PICK_LINE_WIDTH);

        if let Some(station) = &self.station {
            w.inject_string(0..5, station);
        }
        if let Some(network) = &self.network {
            w.inject_string(5..7, network);
        }
        if let Some(channel) = &self.channel {
            w.inject_string(9..12, channel);
        }
        if let Some(location) = &self.location {
            w.inject_string(111..113, location);
        }
        if let Some(value) = &self.p_remark {
            w.inject_string(13..15, &remark(value));
        }
        if let Some(value) = &self.s_remark {
            w.inject_string(46..48, &remark(value));
        }
        if let Some(c) = self.first_motion {
            w.inject_char(15, c);
        }

        // defaults only apply to picks that carry an arrival
        let with_arrival = self.p_time.or(self.s_time).is_some();
        let p_code = self
            .p_weight_code
            .or(with_arrival.then_some(DEFAULT_P_WEIGHT_CODE));
        if let Some(code) = p_code {
            w.inject_integer(16..17, code as i64, true);
        }
        let s_code = self
            .s_weight_code
            .or(with_arrival.then_some(DEFAULT_S_WEIGHT_CODE));
        if let Some(code) = s_code {
            w.inject_integer(49..50, code as i64, true);
        }

        if let Some(t) = self.p_time.or(self.s_time) {
            let base = CalendarBase::from_epoch(t);
            base.format(&mut w, 17);

            if let Some(p) = self.p_time {
                if let Some(seconds) = base.offset_seconds(p) {
                    format_seconds(&mut w, 29, seconds);
                }
            }
            if let Some(s) = self.s_time {
                if CalendarBase::from_epoch(s) != base {
                    diagnostics.warn(format!(
                        "P ({}) and S ({}) arrivals do not share calendar fields: S written relative to P",
                        t, s
                    ));
                }
                if let Some(seconds) = base.offset_seconds(s) {
                    format_seconds(&mut w, 41, seconds);
                }
            }
        }

        if let Some(residual) = self.p_residual {
            w.inject_fixed(34..38, residual, 2);
        }
        if let Some(weight) = self.p_weight_used {
            w.inject_fixed(38..41, weight, 2);
        }
        if let Some(residual) = self.s_residual {
            w.inject_fixed(50..54, residual, 2);
        }
        if let Some(amplitude) = self.amplitude {
            w.inject_fixed(54..61, amplitude, 2);
        }
        if let Some(units) = self.amplitude_units {
            w.inject_integer(61..63, units.code() as i64, false);
        }
        if let Some(weight) = self.s_weight_used {
            w.inject_fixed(63..66, weight, 2);
        }
        if let Some(delay) = self.p_delay {
            w.inject_fixed(66..70, delay, 2);
        }
        if let Some(delay) = self.s_delay {
            w.inject_fixed(70..74, delay, 2);
        }
        if let Some(distance) = self.distance_km {
            w.inject_fixed(74..78, distance, 1);
        }
        if let Some(angle) = self.takeoff_angle_deg {
            w.inject_fixed(78..81, angle, 0);
        }
        if let Some(code) = self.amplitude_magnitude_weight_code {
            w.inject_integer(81..82, code as i64, true);
        }
        if let Some(code) = self.duration_magnitude_weight_code {
            w.inject_integer(82..83, code as i64, true);
        }
        if let Some(period) = self.period {
            w.inject_fixed(83..86, period, 2);
        }
        if let Some(duration) = self.coda_duration {
            w.inject_fixed(87..91, duration, 0);
        }
        if let Some(azimuth) = self.azimuth_deg {
            w.inject_fixed(91..94, azimuth, 0);
        }
        if let Some(magnitude) = self.duration_magnitude {
            w.inject_fixed(94..97, magnitude, 2);
        }
        if let Some(magnitude) = self.amplitude_magnitude {
            w.inject_fixed(97..100, magnitude, 2);
        }
        if let Some(importance) = self.p_importance {
            w.inject_fixed(100..104, importance, 3);
        }
        if let Some(importance) = self.s_importance {
            w.inject_fixed(104..108, importance, 3);
        }
        if let Some(c) = self.data_source {
            w.inject_char(108, c);
        }
        if let Some(c) = self.duration_magnitude_label {
            w.inject_char(109, c);
        }
        if let Some(c) = self.amplitude_magnitude_label {
            w.inject_char(110, c);
        }

        let (line, events) = w.finish();
        diagnostics.merge(events);
        line
    }
}

impl std::fmt::Display for Pick {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        f.write_str(&self.pack())
    }
}
