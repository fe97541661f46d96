//! Y2000 station archive (phase pick) line
use hifitime::Epoch;
use num_traits::FromPrimitive;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::{error::Error, field::Trim};

mod formatting;
mod parsing;

/// Width of a pick line, in columns
pub const PICK_LINE_WIDTH: usize = 113;

/// Units of the amplitude measurement
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, FromPrimitive)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum AmplitudeUnits {
    /// Peak to peak amplitude
    PeakToPeak = 0,
    /// Zero to peak amplitude
    ZeroToPeak = 1,
    /// Raw digital counts
    DigitalCounts = 2,
}

impl AmplitudeUnits {
    /// Decodes the Y2000 units code
    pub fn from_code(code: i64) -> Option<Self> {
        Self::from_i64(code)
    }
    /// Y2000 units code
    pub fn code(&self) -> u8 {
        *self as u8
    }
}

/// [Pick] describes one station archive line: the P and/or S
/// arrivals observed at one station channel, with the location
/// and magnitude related measurements.
/// Fields are only present once decoded or explicitly set.
#[derive(Debug, Clone, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Pick {
    station: Option<String>,
    network: Option<String>,
    channel: Option<String>,
    location: Option<String>,
    p_time: Option<Epoch>,
    p_remark: Option<String>,
    first_motion: Option<char>,
    p_residual: Option<f64>,
    p_weight_code: Option<u8>,
    p_weight_used: Option<f64>,
    p_delay: Option<f64>,
    p_importance: Option<f64>,
    s_time: Option<Epoch>,
    s_remark: Option<String>,
    s_residual: Option<f64>,
    s_weight_code: Option<u8>,
    s_weight_used: Option<f64>,
    s_delay: Option<f64>,
    s_importance: Option<f64>,
    distance_km: Option<f64>,
    azimuth_deg: Option<f64>,
    takeoff_angle_deg: Option<f64>,
    amplitude: Option<f64>,
    amplitude_units: Option<AmplitudeUnits>,
    amplitude_magnitude: Option<f64>,
    amplitude_magnitude_weight_code: Option<u8>,
    amplitude_magnitude_label: Option<char>,
    duration_magnitude: Option<f64>,
    duration_magnitude_weight_code: Option<u8>,
    duration_magnitude_label: Option<char>,
    period: Option<f64>,
    coda_duration: Option<f64>,
    data_source: Option<char>,
}

/*
 * Identifiers are truncated to their width, then trimmed.
 * Blank content clears the field.
 */
fn identifier(value: &str, width: usize, trim: Trim) -> Option<String> {
    let truncated = value.chars().take(width).collect::<String>();
    let trimmed = match trim {
        Trim::Both => truncated.trim(),
        Trim::End => truncated.trim_end(),
    };
    if trimmed.is_empty() {
        None
    } else {
        Some(trimmed.to_string())
    }
}

fn weight_code(field: &'static str, code: u8) -> Result<u8, Error> {
    if code > 9 {
        Err(Error::OutOfRange(field, code as f64))
    } else {
        Ok(code)
    }
}

/*
 * Single character codes: printable ASCII only
 */
fn label(field: &'static str, c: char) -> Result<char, Error> {
    if c.is_ascii_graphic() {
        Ok(c)
    } else {
        Err(Error::MalformedInput(format!("invalid {}: {:?}", field, c)))
    }
}

fn within(field: &'static str, value: f64, valid: bool) -> Result<f64, Error> {
    if valid && value.is_finite() {
        Ok(value)
    } else {
        Err(Error::OutOfRange(field, value))
    }
}

impl Pick {
    /// Builds an empty [Pick]
    pub fn new() -> Self {
        Self::default()
    }

    /// Resets all fields
    pub fn clear(&mut self) {
        *self = Self::default();
    }

    /// Returns true if this [Pick] carries a P arrival time
    pub fn has_p_pick(&self) -> bool {
        self.p_time.is_some()
    }

    /// Returns true if this [Pick] carries an S arrival time
    pub fn has_s_pick(&self) -> bool {
        self.s_time.is_some()
    }

    /// Station name, up to 5 characters
    pub fn station(&self) -> Option<&str> {
        self.station.as_deref()
    }
    /// Defines station name: truncated to 5 characters, blank clears.
    pub fn set_station(&mut self, station: &str) {
        self.station = identifier(station, 5, Trim::End);
    }

    /// Network code, up to 2 characters
    pub fn network(&self) -> Option<&str> {
        self.network.as_deref()
    }
    pub fn set_network(&mut self, network: &str) {
        self.network = identifier(network, 2, Trim::End);
    }

    /// Channel code, up to 3 characters
    pub fn channel(&self) -> Option<&str> {
        self.channel.as_deref()
    }
    pub fn set_channel(&mut self, channel: &str) {
        self.channel = identifier(channel, 3, Trim::End);
    }

    /// Location code, up to 2 characters
    pub fn location(&self) -> Option<&str> {
        self.location.as_deref()
    }
    pub fn set_location(&mut self, location: &str) {
        self.location = identifier(location, 2, Trim::End);
    }

    /// P arrival time
    pub fn p_time(&self) -> Option<Epoch> {
        self.p_time
    }
    pub fn set_p_time(&mut self, t: Epoch) {
        self.p_time = Some(t);
    }

    /// P remark, like "IP" for an impulsive P onset
    pub fn p_remark(&self) -> Option<&str> {
        self.p_remark.as_deref()
    }
    /// Defines P remark: truncated to 2 characters, blank clears.
    pub fn set_p_remark(&mut self, remark: &str) {
        self.p_remark = identifier(remark, 2, Trim::Both);
    }

    /// First motion (P polarity), like 'U' or 'D'
    pub fn first_motion(&self) -> Option<char> {
        self.first_motion
    }
    pub fn set_first_motion(&mut self, first_motion: char) -> Result<(), Error> {
        self.first_motion = Some(label("first motion", first_motion)?);
        Ok(())
    }

    /// P travel time residual, in seconds
    pub fn p_residual(&self) -> Option<f64> {
        self.p_residual
    }
    pub fn set_p_residual(&mut self, residual: f64) -> Result<(), Error> {
        self.p_residual = Some(within("P residual", residual, true)?);
        Ok(())
    }

    /// P weight code (0: full weight, 4: not used)
    pub fn p_weight_code(&self) -> Option<u8> {
        self.p_weight_code
    }
    pub fn set_p_weight_code(&mut self, code: u8) -> Result<(), Error> {
        self.p_weight_code = Some(weight_code("P weight code", code)?);
        Ok(())
    }

    /// Weight actually applied to the P arrival
    pub fn p_weight_used(&self) -> Option<f64> {
        self.p_weight_used
    }
    pub fn set_p_weight_used(&mut self, weight: f64) -> Result<(), Error> {
        self.p_weight_used = Some(within("P weight used", weight, weight >= 0.0)?);
        Ok(())
    }

    /// P static correction, in seconds
    pub fn p_delay(&self) -> Option<f64> {
        self.p_delay
    }
    pub fn set_p_delay(&mut self, delay: f64) -> Result<(), Error> {
        self.p_delay = Some(within("P delay", delay, true)?);
        Ok(())
    }

    /// P data importance
    pub fn p_importance(&self) -> Option<f64> {
        self.p_importance
    }
    pub fn set_p_importance(&mut self, importance: f64) -> Result<(), Error> {
        self.p_importance = Some(within("P importance", importance, importance >= 0.0)?);
        Ok(())
    }

    /// S arrival time
    pub fn s_time(&self) -> Option<Epoch> {
        self.s_time
    }
    pub fn set_s_time(&mut self, t: Epoch) {
        self.s_time = Some(t);
    }

    /// S remark, like "ES" for an emergent S onset
    pub fn s_remark(&self) -> Option<&str> {
        self.s_remark.as_deref()
    }
    pub fn set_s_remark(&mut self, remark: &str) {
        self.s_remark = identifier(remark, 2, Trim::Both);
    }

    /// S travel time residual, in seconds
    pub fn s_residual(&self) -> Option<f64> {
        self.s_residual
    }
    pub fn set_s_residual(&mut self, residual: f64) -> Result<(), Error> {
        self.s_residual = Some(within("S residual", residual, true)?);
        Ok(())
    }

    /// S weight code
    pub fn s_weight_code(&self) -> Option<u8> {
        self.s_weight_code
    }
    pub fn set_s_weight_code(&mut self, code: u8) -> Result<(), Error> {
        self.s_weight_code = Some(weight_code("S weight code", code)?);
        Ok(())
    }

    /// Weight actually applied to the S arrival
    pub fn s_weight_used(&self) -> Option<f64> {
        self.s_weight_used
    }
    pub fn set_s_weight_used(&mut self, weight: f64) -> Result<(), Error> {
        self.s_weight_used = Some(within("S weight used", weight, weight >= 0.0)?);
        Ok(())
    }

    /// S static correction, in seconds
    pub fn s_delay(&self) -> Option<f64> {
        self.s_delay
    }
    pub fn set_s_delay(&mut self, delay: f64) -> Result<(), Error> {
        self.s_delay = Some(within("S delay", delay, true)?);
        Ok(())
    }

    /// S data importance
    pub fn s_importance(&self) -> Option<f64> {
        self.s_importance
    }
    pub fn set_s_importance(&mut self, importance: f64) -> Result<(), Error> {
        self.s_importance = Some(within("S importance", importance, importance >= 0.0)?);
        Ok(())
    }

    /// Epicentral distance, in kilometers
    pub fn epicentral_distance_km(&self) -> Option<f64> {
        self.distance_km
    }
    pub fn set_epicentral_distance_km(&mut self, distance: f64) -> Result<(), Error> {
        self.distance_km = Some(within("epicentral distance", distance, distance >= 0.0)?);
        Ok(())
    }

    /// Source to station azimuth, in degrees
    pub fn azimuth_deg(&self) -> Option<f64> {
        self.azimuth_deg
    }
    /// Defines azimuth, within [0, 360] degrees
    pub fn set_azimuth_deg(&mut self, azimuth: f64) -> Result<(), Error> {
        self.azimuth_deg = Some(within(
            "azimuth",
            azimuth,
            (0.0..=360.0).contains(&azimuth),
        )?);
        Ok(())
    }

    /// Takeoff angle at the source, in degrees
    pub fn takeoff_angle_deg(&self) -> Option<f64> {
        self.takeoff_angle_deg
    }
    /// Defines takeoff angle, within [0, 180] degrees
    pub fn set_takeoff_angle_deg(&mut self, angle: f64) -> Result<(), Error> {
        self.takeoff_angle_deg = Some(within(
            "takeoff angle",
            angle,
            (0.0..=180.0).contains(&angle),
        )?);
        Ok(())
    }

    /// Amplitude, see [Self::amplitude_units]
    pub fn amplitude(&self) -> Option<f64> {
        self.amplitude
    }
    pub fn set_amplitude(&mut self, amplitude: f64) -> Result<(), Error> {
        self.amplitude = Some(within("amplitude", amplitude, amplitude >= 0.0)?);
        Ok(())
    }

    /// [AmplitudeUnits] of [Self::amplitude]
    pub fn amplitude_units(&self) -> Option<AmplitudeUnits> {
        self.amplitude_units
    }
    pub fn set_amplitude_units(&mut self, units: AmplitudeUnits) {
        self.amplitude_units = Some(units);
    }

    /// Amplitude magnitude
    pub fn amplitude_magnitude(&self) -> Option<f64> {
        self.amplitude_magnitude
    }
    pub fn set_amplitude_magnitude(&mut self, magnitude: f64) -> Result<(), Error> {
        self.amplitude_magnitude = Some(within("amplitude magnitude", magnitude, true)?);
        Ok(())
    }

    pub fn amplitude_magnitude_weight_code(&self) -> Option<u8> {
        self.amplitude_magnitude_weight_code
    }
    pub fn set_amplitude_magnitude_weight_code(&mut self, code: u8) -> Result<(), Error> {
        self.amplitude_magnitude_weight_code =
            Some(weight_code("amplitude magnitude weight code", code)?);
        Ok(())
    }

    /// Amplitude magnitude label, like 'L' for local magnitude
    pub fn amplitude_magnitude_label(&self) -> Option<char> {
        self.amplitude_magnitude_label
    }
    pub fn set_amplitude_magnitude_label(&mut self, c: char) -> Result<(), Error> {
        self.amplitude_magnitude_label = Some(label("amplitude magnitude label", c)?);
        Ok(())
    }

    /// Duration (coda) magnitude
    pub fn duration_magnitude(&self) -> Option<f64> {
        self.duration_magnitude
    }
    pub fn set_duration_magnitude(&mut self, magnitude: f64) -> Result<(), Error> {
        self.duration_magnitude = Some(within("duration magnitude", magnitude, true)?);
        Ok(())
    }

    pub fn duration_magnitude_weight_code(&self) -> Option<u8> {
        self.duration_magnitude_weight_code
    }
    pub fn set_duration_magnitude_weight_code(&mut self, code: u8) -> Result<(), Error> {
        self.duration_magnitude_weight_code =
            Some(weight_code("duration magnitude weight code", code)?);
        Ok(())
    }

    /// Duration magnitude label, like 'D'
    pub fn duration_magnitude_label(&self) -> Option<char> {
        self.duration_magnitude_label
    }
    pub fn set_duration_magnitude_label(&mut self, c: char) -> Result<(), Error> {
        self.duration_magnitude_label = Some(label("duration magnitude label", c)?);
        Ok(())
    }

    /// Period of the amplitude measurement, in seconds
    pub fn period(&self) -> Option<f64> {
        self.period
    }
    pub fn set_period(&mut self, period: f64) -> Result<(), Error> {
        self.period = Some(within("period", period, period > 0.0)?);
        Ok(())
    }

    /// Coda duration, in seconds
    pub fn coda_duration(&self) -> Option<f64> {
        self.coda_duration
    }
    pub fn set_coda_duration(&mut self, duration: f64) -> Result<(), Error> {
        self.coda_duration = Some(within("coda duration", duration, duration > 0.0)?);
        Ok(())
    }

    /// Data source code
    pub fn data_source(&self) -> Option<char> {
        self.data_source
    }
    pub fn set_data_source(&mut self, code: char) -> Result<(), Error> {
        self.data_source = Some(label("data source code", code)?);
        Ok(())
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use std::str::FromStr;
    #[test]
    fn amplitude_units() {
        assert_eq!(AmplitudeUnits::from_code(0), Some(AmplitudeUnits::PeakToPeak));
        assert_eq!(AmplitudeUnits::from_code(1), Some(AmplitudeUnits::ZeroToPeak));
        assert_eq!(
            AmplitudeUnits::from_code(2),
            Some(AmplitudeUnits::DigitalCounts)
        );
        assert_eq!(AmplitudeUnits::from_code(3), None);
        assert_eq!(AmplitudeUnits::from_code(-1), None);
        assert_eq!(AmplitudeUnits::DigitalCounts.code(), 2);
    }
    #[test]
    fn identifiers() {
        let mut pick = Pick::new();
        pick.set_station("ABCDEFG");
        assert_eq!(pick.station(), Some("ABCDE"));
        // codes are left justified: leading blanks are significant
        pick.set_network(" UU");
        assert_eq!(pick.network(), Some(" U"));
        pick.set_channel("HHZ ");
        assert_eq!(pick.channel(), Some("HHZ"));
        pick.set_location("   ");
        assert_eq!(pick.location(), None);
        pick.set_p_remark(" P");
        assert_eq!(pick.p_remark(), Some("P"));
    }
    #[test]
    fn setters_validation() {
        let mut pick = Pick::new();
        assert_eq!(
            pick.set_azimuth_deg(361.0),
            Err(Error::OutOfRange("azimuth", 361.0))
        );
        assert!(pick.azimuth_deg().is_none());
        assert!(pick.set_azimuth_deg(360.0).is_ok());
        assert!(pick.set_takeoff_angle_deg(-1.0).is_err());
        assert!(pick.set_takeoff_angle_deg(180.0).is_ok());
        assert!(pick.set_epicentral_distance_km(-0.1).is_err());
        assert!(pick.set_period(0.0).is_err());
        assert!(pick.set_coda_duration(0.0).is_err());
        assert!(pick.set_amplitude(-1.0).is_err());
        assert!(pick.set_p_weight_used(-1.0).is_err());
        assert!(pick.set_p_weight_code(10).is_err());
        assert!(pick.set_s_weight_code(9).is_ok());
        assert!(pick.set_p_importance(-0.5).is_err());
        assert!(pick.set_p_residual(f64::NAN).is_err());
        assert!(pick.set_first_motion(' ').is_err());
        assert!(pick.set_data_source('\t').is_err());
        assert!(pick.set_amplitude_magnitude_label('L').is_ok());
        assert_eq!(pick.amplitude_magnitude_label(), Some('L'));
    }
    #[test]
    fn arrivals() {
        let mut pick = Pick::new();
        assert!(!pick.has_p_pick());
        assert!(!pick.has_s_pick());
        pick.set_s_time(Epoch::from_str("2020-03-18T13:20:26.89 UTC").unwrap());
        assert!(pick.has_s_pick());
        assert!(!pick.has_p_pick());
        pick.clear();
        assert_eq!(pick, Pick::default());
    }
}
