//! Y2000 event summary (hypocenter) line
use hifitime::Epoch;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::error::Error;

mod formatting;
mod parsing;

/// Width of a summary line, in columns
pub const SUMMARY_LINE_WIDTH: usize = 164;

/// Largest event identifier the summary line can hold
pub const MAX_EVENT_ID: u64 = 9_999_999_999;

/// [Summary] describes the hypocenter and magnitude of one event.
/// Longitude is stored within [0, 360) degrees.
#[derive(Debug, Clone, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Summary {
    origin_time: Option<Epoch>,
    latitude_deg: Option<f64>,
    longitude_deg: Option<f64>,
    depth_km: Option<f64>,
    closest_station_km: Option<f64>,
    azimuthal_gap_deg: Option<f64>,
    weighted_residuals: Option<u32>,
    s_weighted_residuals: Option<u32>,
    rms_s: Option<f64>,
    magnitude: Option<f64>,
    magnitude_label: Option<char>,
    event_id: Option<u64>,
    first_motions: Option<u32>,
}

fn finite(field: &'static str, value: f64) -> Result<f64, Error> {
    if value.is_finite() {
        Ok(value)
    } else {
        Err(Error::OutOfRange(field, value))
    }
}

impl Summary {
    /// Builds an empty [Summary]
    pub fn new() -> Self {
        Self::default()
    }

    /// Resets all fields
    pub fn clear(&mut self) {
        *self = Self::default();
    }

    /// Origin time of the event
    pub fn origin_time(&self) -> Option<Epoch> {
        self.origin_time
    }
    pub fn set_origin_time(&mut self, t: Epoch) {
        self.origin_time = Some(t);
    }

    /// Event latitude, in decimal degrees
    pub fn latitude_deg(&self) -> Option<f64> {
        self.latitude_deg
    }
    /// Defines event latitude, within [-90, 90] degrees
    pub fn set_latitude_deg(&mut self, latitude: f64) -> Result<(), Error> {
        if !(-90.0..=90.0).contains(&latitude) {
            return Err(Error::OutOfRange("latitude", latitude));
        }
        self.latitude_deg = Some(latitude);
        Ok(())
    }

    /// Event longitude, in decimal degrees within [0, 360)
    pub fn longitude_deg(&self) -> Option<f64> {
        self.longitude_deg
    }
    /// Defines event longitude. Any value within [-540, 540)
    /// is accepted and wrapped into [0, 360).
    pub fn set_longitude_deg(&mut self, longitude: f64) -> Result<(), Error> {
        if !(-540.0..540.0).contains(&longitude) {
            return Err(Error::OutOfRange("longitude", longitude));
        }
        let mut wrapped = longitude.rem_euclid(360.0);
        // rem_euclid may round up to the modulus itself
        if wrapped >= 360.0 {
            wrapped = 0.0;
        }
        self.longitude_deg = Some(wrapped);
        Ok(())
    }

    /// Event depth, in kilometers
    pub fn depth_km(&self) -> Option<f64> {
        self.depth_km
    }
    pub fn set_depth_km(&mut self, depth: f64) -> Result<(), Error> {
        self.depth_km = Some(finite("depth", depth)?);
        Ok(())
    }

    /// Distance to the closest station, in kilometers
    pub fn closest_station_distance_km(&self) -> Option<f64> {
        self.closest_station_km
    }
    pub fn set_closest_station_distance_km(&mut self, distance: f64) -> Result<(), Error> {
        if !(distance >= 0.0) || !distance.is_finite() {
            return Err(Error::OutOfRange("closest station distance", distance));
        }
        self.closest_station_km = Some(distance);
        Ok(())
    }

    /// Largest azimuthal gap between stations, in degrees
    pub fn azimuthal_gap_deg(&self) -> Option<f64> {
        self.azimuthal_gap_deg
    }
    /// Defines the azimuthal gap, within [0, 360) degrees
    pub fn set_azimuthal_gap_deg(&mut self, gap: f64) -> Result<(), Error> {
        if !(0.0..360.0).contains(&gap) {
            return Err(Error::OutOfRange("azimuthal gap", gap));
        }
        self.azimuthal_gap_deg = Some(gap);
        Ok(())
    }
    pub(crate) fn clear_azimuthal_gap(&mut self) {
        self.azimuthal_gap_deg = None;
    }

    /// Number of P and S residuals with weight
    pub fn weighted_residuals(&self) -> Option<u32> {
        self.weighted_residuals
    }
    pub fn set_weighted_residuals(&mut self, count: u32) {
        self.weighted_residuals = Some(count);
    }

    /// Number of S residuals with weight
    pub fn s_weighted_residuals(&self) -> Option<u32> {
        self.s_weighted_residuals
    }
    pub fn set_s_weighted_residuals(&mut self, count: u32) {
        self.s_weighted_residuals = Some(count);
    }

    /// Travel time residuals RMS, in seconds
    pub fn rms_s(&self) -> Option<f64> {
        self.rms_s
    }
    pub fn set_rms_s(&mut self, rms: f64) -> Result<(), Error> {
        if !(rms >= 0.0) || !rms.is_finite() {
            return Err(Error::OutOfRange("rms", rms));
        }
        self.rms_s = Some(rms);
        Ok(())
    }

    /// Preferred magnitude
    pub fn magnitude(&self) -> Option<f64> {
        self.magnitude
    }
    pub fn set_magnitude(&mut self, magnitude: f64) -> Result<(), Error> {
        self.magnitude = Some(finite("magnitude", magnitude)?);
        Ok(())
    }

    /// Preferred magnitude label, like 'L' for local magnitude
    pub fn magnitude_label(&self) -> Option<char> {
        self.magnitude_label
    }
    pub fn set_magnitude_label(&mut self, label: char) -> Result<(), Error> {
        if !label.is_ascii_graphic() {
            return Err(Error::MalformedInput(format!(
                "invalid magnitude label: {:?}",
                label
            )));
        }
        self.magnitude_label = Some(label);
        Ok(())
    }

    /// Event identifier
    pub fn event_id(&self) -> Option<u64> {
        self.event_id
    }
    /// Defines event identifier, up to [MAX_EVENT_ID]
    pub fn set_event_id(&mut self, id: u64) -> Result<(), Error> {
        if id > MAX_EVENT_ID {
            return Err(Error::OutOfRange("event identifier", id as f64));
        }
        self.event_id = Some(id);
        Ok(())
    }

    /// Number of P first motions
    pub fn first_motions(&self) -> Option<u32> {
        self.first_motions
    }
    pub fn set_first_motions(&mut self, count: u32) {
        self.first_motions = Some(count);
    }
}
