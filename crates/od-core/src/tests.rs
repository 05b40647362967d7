//! Unit tests for od-core primitives.

#[cfg(test)]
mod ids {
    use std::collections::HashMap;

    use crate::Location;

    #[test]
    fn display_is_raw_name() {
        assert_eq!(Location::from("Tatooine").to_string(), "Tatooine");
    }

    #[test]
    fn lookup_by_str() {
        let mut m: HashMap<Location, u32> = HashMap::new();
        m.insert(Location::from("Hoth"), 3);
        assert_eq!(m.get("Hoth"), Some(&3));
    }

    #[test]
    fn blank_is_empty() {
        assert!(Location::from("  ").is_empty());
        assert!(!Location::from("Endor").is_empty());
    }
}

#[cfg(test)]
mod time {
    use crate::Day;

    #[test]
    fn day_arithmetic() {
        let d = Day(10);
        assert_eq!(d + 5, Day(15));
        assert_eq!(d.offset(3), Day(13));
    }

    #[test]
    fn addition_saturates() {
        let mut d = Day(u64::MAX - 1);
        d += 5;
        assert_eq!(d, Day(u64::MAX));
        assert_eq!(Day(u64::MAX) + 1, Day(u64::MAX));
    }

    #[test]
    fn add_assign() {
        let mut d = Day::ZERO;
        d += 4;
        d += 1;
        assert_eq!(d, Day(5));
    }

    #[test]
    fn display() {
        assert_eq!(Day(7).to_string(), "day 7");
    }
}

#[cfg(test)]
mod sightings {
    use crate::{Day, Location, Sighting, SightingIndex};

    #[test]
    fn exact_day_and_location_only() {
        let idx: SightingIndex = vec![Sighting::new(6, "Hoth"), Sighting::new(7, "Hoth")]
            .into_iter()
            .collect();
        let hoth = Location::from("Hoth");
        assert!(idx.contains(Day(6), &hoth));
        assert!(idx.contains(Day(7), &hoth));
        assert!(!idx.contains(Day(8), &hoth));
        assert!(!idx.contains(Day(6), &Location::from("Endor")));
    }

    #[test]
    fn duplicates_collapse() {
        let idx: SightingIndex = vec![Sighting::new(1, "Hoth"), Sighting::new(1, "Hoth")]
            .into_iter()
            .collect();
        assert_eq!(idx.len(), 1);
    }

    #[test]
    fn to_vec_sorted_by_day() {
        let idx: SightingIndex = vec![
            Sighting::new(8, "Hoth"),
            Sighting::new(6, "Hoth"),
            Sighting::new(6, "Dagobah"),
        ]
        .into_iter()
        .collect();
        let v = idx.to_vec();
        assert_eq!(v[0], Sighting::new(6, "Dagobah"));
        assert_eq!(v[1], Sighting::new(6, "Hoth"));
        assert_eq!(v[2], Sighting::new(8, "Hoth"));
    }
}

#[cfg(test)]
mod mission {
    use crate::{CoreError, Day, MissionParameters, Sighting};

    #[test]
    fn well_formed_passes() {
        let m = MissionParameters::new("Tatooine", "Endor", 6, 7, vec![Sighting::new(6, "Hoth")]);
        assert!(m.validate().is_ok());
        assert_eq!(m.deadline(), Day(7));
    }

    #[test]
    fn zero_autonomy_rejected() {
        let m = MissionParameters::new("Tatooine", "Endor", 0, 7, vec![]);
        match m.validate() {
            Err(CoreError::MalformedMission { field, .. }) => assert_eq!(field, "autonomy"),
            other => panic!("expected MalformedMission, got {other:?}"),
        }
    }

    #[test]
    fn autonomy_beyond_signed_range_rejected() {
        let m = MissionParameters::new("Tatooine", "Endor", u64::MAX, 7, vec![]);
        match m.validate() {
            Err(CoreError::MalformedMission { field, .. }) => assert_eq!(field, "autonomy"),
            other => panic!("expected MalformedMission, got {other:?}"),
        }
        let m = MissionParameters::new("Tatooine", "Endor", i64::MAX as u64, 7, vec![]);
        assert!(m.validate().is_ok());
    }

    #[test]
    fn empty_destination_rejected() {
        let m = MissionParameters::new("Tatooine", "", 6, 7, vec![]);
        match m.validate() {
            Err(CoreError::MalformedMission { field, .. }) => assert_eq!(field, "destination"),
            other => panic!("expected MalformedMission, got {other:?}"),
        }
    }

    #[test]
    fn empty_sighting_location_rejected() {
        let m = MissionParameters::new("Tatooine", "Endor", 6, 7, vec![Sighting::new(1, "")]);
        assert!(m.validate().is_err());
    }
}
