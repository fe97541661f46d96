#![doc = include_str!("../README.md")]
#![cfg_attr(docsrs, feature(doc_cfg))]

/*
 * hypo2000 is part of the rtk-rs framework.
 * Authors: Guillaume W. Bres <guillaume.bressaix@gmail.com> et al.
 * This framework is shipped under Mozilla Public V2 license.
 *
 * Documentation: https://github.com/rtk-rs/hypo2000
 */

#[macro_use]
extern crate num_derive;

pub mod diagnostics;
pub mod event;
pub mod field;
pub mod pick;
pub mod summary;

mod error;
mod time;

#[cfg(test)]
mod tests;

/// Package to include all basic structures
pub mod prelude {
    pub use crate::{
        diagnostics::{Diagnostic, Diagnostics, Severity},
        error::Error,
        event::{events_from_str, Event},
        pick::{AmplitudeUnits, Pick},
        summary::Summary,
    };
    // pub re-export
    pub use hifitime::{Duration, Epoch};
}

pub use error::Error;
