//! Pick line parsing
use std::str::FromStr;

#[cfg(feature = "log")]
use log::debug;

use crate::{
    diagnostics::Diagnostics,
    error::Error,
    field::{extract_char, extract_decimal, extract_integer, extract_string, Trim},
    pick::{AmplitudeUnits, Pick},
    time::CalendarBase,
};

impl Pick {
    /// Decodes a station archive line. Fields that are missing, malformed
    /// or out of range are left out. Only a blank line is an error.
    /// Returns the [Pick] with the events encountered while decoding.
    pub fn unpack(line: &str) -> Result<(Self, Diagnostics), Error> {
        if line.trim().is_empty() {
            return Err(Error::MalformedInput("blank pick line".to_string()));
        }

        let mut diagnostics = Diagnostics::new();
        let mut pick = Self::default();

        if let Some(station) = extract_string(line, 0..5, Trim::End) {
            pick.set_station(&station);
        }
        if let Some(network) = extract_string(line, 5..7, Trim::End) {
            pick.set_network(&network);
        }
        if let Some(channel) = extract_string(line, 9..12, Trim::End) {
            pick.set_channel(&channel);
        }
        if let Some(location) = extract_string(line, 111..113, Trim::End) {
            pick.set_location(&location);
        }

        if let Some(remark) = extract_string(line, 13..15, Trim::Both) {
            pick.set_p_remark(&remark);
        }
        if let Some(remark) = extract_string(line, 46..48, Trim::Both) {
            pick.set_s_remark(&remark);
        }
        if let Some(c) = extract_char(line, 15) {
            let _ = pick.set_first_motion(c);
        }

        // both arrivals share the calendar fields
        if let Some(base) = CalendarBase::parse(line, 17) {
            if let Some(seconds) = extract_decimal(line, 29..34, 3) {
                pick.p_time = base.epoch_at(seconds);
            }
            if let Some(seconds) = extract_decimal(line, 41..46, 3) {
                pick.s_time = base.epoch_at(seconds);
            }
        }

        if pick.p_remark.is_some() && pick.p_time.is_none() {
            diagnostics.warn(format!("missing P arrival time in \"{}\"", line));
        }
        if pick.s_remark.is_some() && pick.s_time.is_none() {
            diagnostics.warn(format!("missing S arrival time in \"{}\"", line));
        }

        // some producers fill weight codes without arrivals
        if pick.p_time.is_some() {
            if let Some(code) = extract_integer(line, 16..17).and_then(|c| u8::try_from(c).ok()) {
                let _ = pick.set_p_weight_code(code);
            }
        }
        if pick.s_time.is_some() {
            if let Some(code) = extract_integer(line, 49..50).and_then(|c| u8::try_from(c).ok()) {
                let _ = pick.set_s_weight_code(code);
            }
        }

        if let Some(residual) = extract_decimal(line, 34..38, 2) {
            let _ = pick.set_p_residual(residual);
        }
        if let Some(residual) = extract_decimal(line, 50..54, 2) {
            let _ = pick.set_s_residual(residual);
        }
        if let Some(weight) = extract_decimal(line, 38..41, 1) {
            let _ = pick.set_p_weight_used(weight);
        }
        if let Some(weight) = extract_decimal(line, 63..66, 1) {
            let _ = pick.set_s_weight_used(weight);
        }
        if let Some(delay) = extract_decimal(line, 66..70, 2) {
            let _ = pick.set_p_delay(delay);
        }
        if let Some(delay) = extract_decimal(line, 70..74, 2) {
            let _ = pick.set_s_delay(delay);
        }
        if let Some(importance) = extract_decimal(line, 100..104, 1) {
            let _ = pick.set_p_importance(importance);
        }
        if let Some(importance) = extract_decimal(line, 104..108, 1) {
            let _ = pick.set_s_importance(importance);
        }

        if let Some(amplitude) = extract_decimal(line, 54..61, 5) {
            let _ = pick.set_amplitude(amplitude);
        }
        if let Some(units) = extract_integer(line, 61..63).and_then(AmplitudeUnits::from_code) {
            pick.set_amplitude_units(units);
        }
        if let Some(period) = extract_decimal(line, 83..86, 1) {
            let _ = pick.set_period(period);
        }

        if let Some(distance) = extract_decimal(line, 74..78, 3) {
            let _ = pick.set_epicentral_distance_km(distance);
        }
        if let Some(angle) = extract_integer(line, 78..81) {
            let _ = pick.set_takeoff_angle_deg(angle as f64);
        }
        if let Some(azimuth) = extract_integer(line, 91..94) {
            let _ = pick.set_azimuth_deg(azimuth as f64);
        }
        if let Some(duration) = extract_integer(line, 87..91) {
            let _ = pick.set_coda_duration(duration as f64);
        }

        if let Some(magnitude) = extract_decimal(line, 94..97, 1) {
            let _ = pick.set_duration_magnitude(magnitude);
        }
        if let Some(magnitude) = extract_decimal(line, 97..100, 1) {
            let _ = pick.set_amplitude_magnitude(magnitude);
        }
        if let Some(code) = extract_integer(line, 81..82).and_then(|c| u8::try_from(c).ok()) {
            let _ = pick.set_amplitude_magnitude_weight_code(code);
        }
        if let Some(code) = extract_integer(line, 82..83).and_then(|c| u8::try_from(c).ok()) {
            let _ = pick.set_duration_magnitude_weight_code(code);
        }
        if let Some(c) = extract_char(line, 109) {
            let _ = pick.set_duration_magnitude_label(c);
        }
        if let Some(c) = extract_char(line, 110) {
            let _ = pick.set_amplitude_magnitude_label(c);
        }
        if let Some(c) = extract_char(line, 108) {
            let _ = pick.set_data_source(c);
        }

        #[cfg(feature = "log")]
        debug!(
            "pick: {:?}.{:?}.{:?} P={:?} S={:?}",
            pick.network, pick.station, pick.channel, pick.p_time, pick.s_time
        );

        Ok((pick, diagnostics))
    }
}

impl FromStr for Pick {
    type Err = Error;
    fn from_str(line: &str) -> Result<Self, Self::Err> {
        let (pick, _) = Self::unpack(line)?;
        Ok(pick)
    }
}
