#[cfg(test)]
mod test {
    use crate::{
        prelude::*,
        tests::toolkit::{assert_approx, random_pick, P_PICK_LINE, SUMMARY_LINE, S_PICK_LINE},
    };
    use rand::thread_rng;
    use std::str::FromStr;

    #[test]
    fn reference_event() {
        let mut event = Event::new();
        event.set_summary(Summary::from_str(SUMMARY_LINE).unwrap());

        // no picks: summary is preserved
        assert_eq!(event.summary().first_motions(), Some(4));
        assert_approx(event.summary().azimuthal_gap_deg(), 83.0, "gap");

        let p_pick = Pick::from_str(P_PICK_LINE).unwrap();
        let s_pick = Pick::from_str(S_PICK_LINE).unwrap();

        // S pick cannot be inserted as P pick
        assert_eq!(
            event.add_p_pick(s_pick.clone()),
            Err(Error::MissingRequiredField("P arrival time"))
        );
        assert_eq!(event.number_of_picks(), 0);

        event.add_p_pick(p_pick.clone()).unwrap();
        assert_eq!(event.summary().first_motions(), Some(1));
        assert_approx(
            event.summary().closest_station_distance_km(),
            21.8,
            "distance",
        );
        assert_eq!(event.azimuthal_gap_deg(), Some(360.0));
        // single station gap cannot be stored
        assert!(event.summary().azimuthal_gap_deg().is_none());

        event.add_s_pick(s_pick.clone()).unwrap();
        assert_eq!(event.summary().first_motions(), Some(1));
        assert_approx(
            event.summary().closest_station_distance_km(),
            13.4,
            "distance",
        );
        assert_approx(event.summary().azimuthal_gap_deg(), 246.0, "gap");

        assert_eq!(event.pick(0), Some(p_pick));
        assert_eq!(event.pick(1), Some(s_pick));
        assert_eq!(event.pick(2), None);

        let content = event.to_string();
        let lines = content.lines().collect::<Vec<_>>();
        assert_eq!(lines.len(), 3);
        assert_eq!(lines[1], P_PICK_LINE);
        assert_eq!(lines[2], S_PICK_LINE);
        assert!(content.ends_with('\n'));

        let parsed = Event::from_str(&content).unwrap();
        assert_eq!(parsed, event);
    }

    #[test]
    fn summary_replacement() {
        let mut event = Event::from_lines(&[SUMMARY_LINE, P_PICK_LINE, S_PICK_LINE]).0;

        let mut summary = Summary::new();
        summary.set_first_motions(10);
        summary.set_closest_station_distance_km(1.0).unwrap();
        event.set_summary(summary);

        assert_eq!(event.summary().first_motions(), Some(1));
        assert_approx(
            event.summary().closest_station_distance_km(),
            13.4,
            "distance",
        );
        assert!(event.summary().event_id().is_none());
    }

    #[test]
    fn random_events() {
        let mut rng = thread_rng();
        let mut event = Event::new();
        let mut expected_fm = 0;
        let mut min_distance = f64::MAX;

        for _ in 0..64 {
            let pick = random_pick(&mut rng);
            if pick.first_motion().is_some() {
                expected_fm += 1;
            }
            min_distance = min_distance.min(pick.epicentral_distance_km().unwrap());

            let inserted = if pick.has_p_pick() {
                event.add_p_pick(pick)
            } else {
                event.add_s_pick(pick)
            };
            assert!(inserted.is_ok());

            let summary = event.summary();
            assert_eq!(summary.first_motions(), Some(expected_fm));
            assert_eq!(summary.closest_station_distance_km(), Some(min_distance));
            if let Some(gap) = event.azimuthal_gap_deg() {
                assert!((0.0..=360.0).contains(&gap));
            }
        }

        let (parsed, diag) = Event::from_lines(&event.pack().lines().collect::<Vec<_>>());
        assert!(diag.is_empty(), "{:?}", diag);
        assert_eq!(parsed.number_of_picks(), 64);
        assert_eq!(parsed.picks(), event.picks());
    }
}
