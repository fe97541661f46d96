//! Y2000 event: one summary line followed by its picks
use itertools::Itertools;

#[cfg(feature = "log")]
use log::debug;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::{error::Error, pick::Pick, summary::Summary};

mod formatting;
mod parsing;

pub use parsing::events_from_str;

/// [Event] gathers the [Summary] of one seismic event and the [Pick]s
/// it was located with. The summary fields that derive from the picks
/// (number of first motions, azimuthal gap and distance to the closest
/// station) are updated on every insertion, which is why stored picks
/// can only be accessed immutably.
#[derive(Debug, Clone, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Event {
    summary: Summary,
    picks: Vec<Pick>,
}

impl Event {
    /// Builds an empty [Event]
    pub fn new() -> Self {
        Self::default()
    }

    /// Resets the [Summary] and removes all picks
    pub fn clear(&mut self) {
        self.summary.clear();
        self.picks.clear();
    }

    /// Removes all picks. [Summary] fields are preserved.
    pub fn clear_picks(&mut self) {
        self.picks.clear();
    }

    /// Event [Summary]
    pub fn summary(&self) -> &Summary {
        &self.summary
    }

    /// Replaces the event [Summary]. Fields that derive from
    /// the picks are updated right away.
    pub fn set_summary(&mut self, summary: Summary) {
        self.summary = summary;
        self.update_summary();
    }

    /// Appends a P pick. Fails if `pick` has no P arrival time.
    pub fn add_p_pick(&mut self, pick: Pick) -> Result<(), Error> {
        if !pick.has_p_pick() {
            return Err(Error::MissingRequiredField("P arrival time"));
        }
        self.picks.push(pick);
        self.update_summary();
        Ok(())
    }

    /// Appends an S pick. Fails if `pick` has no S arrival time.
    pub fn add_s_pick(&mut self, pick: Pick) -> Result<(), Error> {
        if !pick.has_s_pick() {
            return Err(Error::MissingRequiredField("S arrival time"));
        }
        self.picks.push(pick);
        self.update_summary();
        Ok(())
    }

    /// All picks, in insertion order
    pub fn picks(&self) -> &[Pick] {
        &self.picks
    }

    /// Picks that carry a P arrival
    pub fn p_picks(&self) -> impl Iterator<Item = &Pick> + '_ {
        self.picks.iter().filter(|pick| pick.has_p_pick())
    }

    /// Picks that carry an S arrival
    pub fn s_picks(&self) -> impl Iterator<Item = &Pick> + '_ {
        self.picks.iter().filter(|pick| pick.has_s_pick())
    }

    /// Copy of the pick at `index`, in insertion order
    pub fn pick(&self, index: usize) -> Option<Pick> {
        self.picks.get(index).cloned()
    }

    pub fn number_of_picks(&self) -> usize {
        self.picks.len()
    }

    /// Largest gap between consecutive station azimuths, in degrees.
    /// A single azimuth leaves a 360° gap. None when no pick
    /// carries an azimuth.
    pub fn azimuthal_gap_deg(&self) -> Option<f64> {
        let azimuths = self
            .picks
            .iter()
            .filter_map(|pick| pick.azimuth_deg())
            .sorted_by(|a, b| a.total_cmp(b))
            .collect::<Vec<_>>();

        let first = *azimuths.first()?;
        if azimuths.len() == 1 {
            return Some(360.0);
        }

        azimuths
            .iter()
            .copied()
            .chain(std::iter::once(first + 360.0))
            .tuple_windows()
            .map(|(a, b)| b - a)
            .reduce(f64::max)
    }

    /// Smallest epicentral distance, in kilometers
    pub fn closest_station_distance_km(&self) -> Option<f64> {
        self.picks
            .iter()
            .filter_map(|pick| pick.epicentral_distance_km())
            .reduce(f64::min)
    }

    /*
     * Writes pick related fields back into the summary.
     * A gap the summary cannot hold (single azimuth, 360°) clears it.
     */
    fn update_summary(&mut self) {
        if self.picks.is_empty() {
            return;
        }

        let first_motions = self
            .picks
            .iter()
            .filter(|pick| pick.first_motion().is_some())
            .count();
        self.summary.set_first_motions(first_motions as u32);

        if let Some(gap) = self.azimuthal_gap_deg() {
            if self.summary.set_azimuthal_gap_deg(gap).is_err() {
                #[cfg(feature = "log")]
                debug!("azimuthal gap {} not retained", gap);
                self.summary.clear_azimuthal_gap();
            }
        }
        if let Some(distance) = self.closest_station_distance_km() {
            let _ = self.summary.set_closest_station_distance_km(distance);
        }
    }
}
