use crate::prelude::*;
use rand::{distributions::Alphanumeric, Rng};

use hifitime::Unit;

use std::str::FromStr;

mod resources;
pub use resources::{read_test_resource, test_resource};

/// Reference summary line
pub const SUMMARY_LINE: &str = "202003181320217640 4594112  399  771    24 83  4  1633184  88154 5  44298     33    1  44  87  4     100    47       D 24 L237 20         60363637L237  20        5FUUP1";

/// Reference P pick line
pub const P_PICK_LINE: &str = "RBU  UU  EHZ IPU0202003181320 2596 -14198        0                   0     218110 0      84 85227    300     D 02";

/// Reference S pick line
pub const S_PICK_LINE: &str = "NOQ  UU  HHN    4202003181320             2689ES 2 -15   1424 0 24       0 1341210  14     199   251       0J L01";

/*
 * Compares decimal fields
 */
pub fn assert_approx(value: Option<f64>, expected: f64, field: &str) {
    let value = value.unwrap_or_else(|| panic!("missing {}", field));
    assert!(
        (value - expected).abs() < 1.0E-6,
        "{}: expecting {}, got {}",
        field,
        expected,
        value
    );
}

/*
 * Tool to generate random station codes
 */
pub fn random_name<R: Rng>(rng: &mut R, size: usize) -> String {
    rng.sample_iter(&Alphanumeric)
        .take(size)
        .map(char::from)
        .collect()
}

/*
 * Decimal value with given implied decimals, in [min, max] units
 */
fn fixed<R: Rng>(rng: &mut R, min: i64, max: i64, decimals: i32) -> f64 {
    rng.gen_range(min..=max) as f64 / 10.0_f64.powi(decimals)
}

/*
 * Generates a random pick, built from valid setters only, with all
 * values expressed at the precision of the line
 */
pub fn random_pick<R: Rng>(rng: &mut R) -> Pick {
    let mut pick = Pick::new();
    let size = rng.gen_range(1..=5);
    pick.set_station(&random_name(rng, size));
    pick.set_network(&random_name(rng, 2));
    pick.set_channel(&random_name(rng, 3));
    if rng.gen_bool(0.5) {
        pick.set_location(&random_name(rng, 2));
    }

    let base = Epoch::from_str("2020-03-18T13:20:00 UTC").unwrap();

    let (with_p, with_s) = match rng.gen_range(0..3) {
        0 => (true, false),
        1 => (false, true),
        _ => (true, true),
    };

    if with_p {
        let centis = rng.gen_range(0..6000_i64);
        pick.set_p_time(base + Unit::Microsecond * (centis * 10_000));
        pick.set_p_remark(["IP", "EP", "P"][rng.gen_range(0..3)]);
        pick.set_p_weight_code(rng.gen_range(0..=9)).unwrap();
        if rng.gen_bool(0.5) {
            pick.set_first_motion(['U', 'D', '+', 'c'][rng.gen_range(0..4)])
                .unwrap();
        }
        pick.set_p_residual(fixed(rng, -999, 9999, 2)).unwrap();
        pick.set_p_weight_used(fixed(rng, 0, 999, 2)).unwrap();
        pick.set_p_delay(fixed(rng, -999, 9999, 2)).unwrap();
        pick.set_p_importance(fixed(rng, 0, 9999, 3)).unwrap();
    }
    if with_s {
        let centis = rng.gen_range(0..6000_i64);
        pick.set_s_time(base + Unit::Microsecond * (centis * 10_000));
        pick.set_s_remark(["ES", "IS", "S"][rng.gen_range(0..3)]);
        pick.set_s_weight_code(rng.gen_range(0..=9)).unwrap();
        pick.set_s_residual(fixed(rng, -999, 9999, 2)).unwrap();
        pick.set_s_weight_used(fixed(rng, 0, 999, 2)).unwrap();
        pick.set_s_delay(fixed(rng, -999, 9999, 2)).unwrap();
        pick.set_s_importance(fixed(rng, 0, 9999, 3)).unwrap();
    }

    pick.set_epicentral_distance_km(fixed(rng, 0, 9999, 1))
        .unwrap();
    pick.set_azimuth_deg(rng.gen_range(0..=360) as f64).unwrap();
    pick.set_takeoff_angle_deg(rng.gen_range(0..=180) as f64)
        .unwrap();

    if rng.gen_bool(0.5) {
        pick.set_amplitude(fixed(rng, 0, 9_999_999, 2)).unwrap();
        let units = AmplitudeUnits::from_code(rng.gen_range(0..3)).unwrap();
        pick.set_amplitude_units(units);
        pick.set_period(fixed(rng, 1, 999, 2)).unwrap();
        pick.set_amplitude_magnitude(fixed(rng, 0, 999, 2)).unwrap();
        pick.set_amplitude_magnitude_weight_code(rng.gen_range(0..=9))
            .unwrap();
        pick.set_amplitude_magnitude_label('L').unwrap();
    }
    if rng.gen_bool(0.5) {
        pick.set_coda_duration(rng.gen_range(1..=9999) as f64)
            .unwrap();
        pick.set_duration_magnitude(fixed(rng, 0, 999, 2)).unwrap();
        pick.set_duration_magnitude_weight_code(rng.gen_range(0..=9))
            .unwrap();
        pick.set_duration_magnitude_label('D').unwrap();
    }
    if rng.gen_bool(0.5) {
        pick.set_data_source(['J', 'X', 'W'][rng.gen_range(0..3)])
            .unwrap();
    }
    pick
}
