//! Unit tests for ep-core primitives.

#[cfg(test)]
mod ids {
    use crate::{AgentId, BuildingId};

    #[test]
    fn index_roundtrip() {
        let id = AgentId(42);
        assert_eq!(id.index(), 42);
        assert_eq!(AgentId::try_from(42usize).unwrap(), id);
    }

    #[test]
    fn display_names_the_roster() {
        assert_eq!(AgentId(7).to_string(), "agent #7");
        assert_eq!(BuildingId(0).to_string(), "building #0");
    }

    #[test]
    fn ids_order_by_index() {
        assert!(AgentId(2) < AgentId(10));
    }
}

#[cfg(test)]
mod geo {
    use approx::assert_abs_diff_eq;

    use crate::{PixelPos, TileCoord};

    #[test]
    fn tile_distance_is_euclidean() {
        let a = TileCoord::new(0, 0);
        assert_abs_diff_eq!(a.distance(TileCoord::new(3, 4)), 5.0);
        assert_abs_diff_eq!(a.distance(TileCoord::new(1, 1)), 2f64.sqrt());
    }

    #[test]
    fn centre_pixel_uses_half_size() {
        let p = TileCoord::new(2, 3).centre_pixel(50);
        assert_eq!(p, PixelPos::new(125.0, 175.0));
    }

    #[test]
    fn tiles_order_by_x_then_y() {
        assert!(TileCoord::new(0, 9) < TileCoord::new(1, 0));
        assert!(TileCoord::new(1, 0) < TileCoord::new(1, 1));
    }

    #[test]
    fn grid_key_rounds() {
        assert_eq!(PixelPos::new(10.0, 20.0).grid_key(), (10, 20));
        assert_eq!(PixelPos::new(9.6, 20.4).grid_key(), (10, 20));
    }
}

#[cfg(test)]
mod rng {
    use crate::SimRng;

    #[test]
    fn same_seed_same_sequence() {
        let mut a = SimRng::new(7);
        let mut b = SimRng::new(7);
        let xs: Vec<u32> = (0..16).map(|_| a.gen_range(0..1000)).collect();
        let ys: Vec<u32> = (0..16).map(|_| b.gen_range(0..1000)).collect();
        assert_eq!(xs, ys);
    }

    #[test]
    fn children_diverge_by_offset() {
        let mut root_a = SimRng::new(1);
        let mut root_b = SimRng::new(1);
        let mut c0 = root_a.child(0);
        let mut c1 = root_b.child(1);
        let xs: Vec<u64> = (0..4).map(|_| c0.gen_range(0..u64::MAX)).collect();
        let ys: Vec<u64> = (0..4).map(|_| c1.gen_range(0..u64::MAX)).collect();
        assert_ne!(xs, ys);
    }

    #[test]
    fn shuffle_is_a_permutation() {
        let mut r = SimRng::new(3);
        let mut v: Vec<u32> = (0..20).collect();
        r.shuffle(&mut v);
        let mut sorted = v.clone();
        sorted.sort_unstable();
        assert_eq!(sorted, (0..20).collect::<Vec<_>>());
    }
}

#[cfg(test)]
mod clock {
    use crate::{SimClock, Tick};

    #[test]
    fn ticks_per_hour_from_speed_and_rate() {
        // 0.5 s per hour at 60 ticks/s → 30 ticks per hour.
        assert_eq!(SimClock::new(0.5, 60).ticks_per_hour, 30);
        // Never zero, however fast the run.
        assert_eq!(SimClock::new(0.001, 60).ticks_per_hour, 1);
    }

    #[test]
    fn hour_boundary_every_ticks_per_hour() {
        let mut c = SimClock::with_ticks_per_hour(3);
        assert!(!c.advance());
        assert!(!c.advance());
        assert!(c.advance());
        assert_eq!(c.hour, 1);
        assert_eq!(c.current_tick, Tick(3));
        assert_eq!(c.elapsed_hours, 1);
    }

    #[test]
    fn hour_24_rolls_over_to_next_day() {
        let mut c = SimClock::with_ticks_per_hour(1);
        for _ in 0..24 {
            c.advance();
        }
        assert_eq!((c.day, c.hour), (1, 24));
        c.advance();
        assert_eq!((c.day, c.hour), (2, 1));
        assert_eq!(c.to_string(), "Day: 2, Hour: 1");
    }
}

#[cfg(test)]
mod config {
    use crate::{EpError, ParamWarning, SimParams};

    #[test]
    fn defaults_are_valid() {
        SimParams::default().validate().unwrap();
        assert_eq!(SimParams::default().seconds_per_hour(), 0.5);
        assert_eq!(SimParams::default().tiles_per_side(), 16);
    }

    #[test]
    fn rate_outside_unit_interval_rejected() {
        let p = SimParams { recovery_rate: 1.5, ..SimParams::default() };
        assert_eq!(p.validate(), Err(EpError::RateOutOfRange { name: "recovery", value: 1.5 }));
    }

    #[test]
    fn too_many_buildings_rejected() {
        let p = SimParams { num_houses: 250, num_offices: 10, ..SimParams::default() };
        assert_eq!(p.validate(), Err(EpError::GridTooSmall { buildings: 260, tiles: 256 }));
    }

    #[test]
    fn tiny_buildings_rejected() {
        let p = SimParams { building_size: 9, display_size: 90, num_houses: 2, num_offices: 1, ..SimParams::default() };
        assert!(p.validate().is_err());
    }

    #[test]
    fn defaults_raise_no_warnings() {
        assert!(SimParams::default().warnings().is_empty());
    }

    #[test]
    fn endless_and_oversized_runs_warn() {
        let p = SimParams {
            recovery_rate: 0.0,
            mortality_rate: 0.0,
            num_houses: 400,
            num_offices: 100,
            people_per_house: 3,
            ..SimParams::default()
        };
        assert_eq!(
            p.warnings(),
            [ParamWarning::NeverEnds, ParamWarning::LargePopulation(1200), ParamWarning::ManyBuildings(500)]
        );
    }

    #[test]
    fn one_live_exit_rate_is_enough() {
        let p = SimParams { recovery_rate: 0.0, mortality_rate: 0.1, ..SimParams::default() };
        assert!(p.warnings().is_empty());
    }

    #[test]
    fn zero_offices_rejected() {
        let p = SimParams { num_offices: 0, ..SimParams::default() };
        assert!(matches!(p.validate(), Err(EpError::InvalidParam { field: "num_offices", .. })));
    }

    #[cfg(feature = "serde")]
    #[test]
    fn partial_json_fills_defaults() {
        let p: SimParams =
            serde_json::from_str(r#"{ "num_houses": 10, "partner_selection": "nearest" }"#).unwrap();
        assert_eq!(p.num_houses, 10);
        assert_eq!(p.num_offices, 25);
        assert_eq!(p.partner_selection, crate::PartnerSelection::Nearest);
    }
}

#[cfg(test)]
mod building {
    use crate::{BuildingKind, Rgb, grid_divisions, occupant_radius};

    #[test]
    fn divisions_round_up() {
        assert_eq!(grid_divisions(1), 1);
        assert_eq!(grid_divisions(4), 2);
        assert_eq!(grid_divisions(5), 3);
    }

    #[test]
    fn radius_is_capped_at_a_tenth_of_the_building() {
        // 4 people: 50 / 6 = 8, capped at 50 / 10 = 5.
        assert_eq!(occupant_radius(50, 4), 5);
        // 30 people: ⌈√30⌉ = 6 → 50 / 14 = 3.
        assert_eq!(occupant_radius(50, 30), 3);
    }

    #[test]
    fn kinds_have_distinct_colours() {
        assert_eq!(BuildingKind::House.colour(), Rgb(100, 200, 100));
        assert_ne!(BuildingKind::House.colour(), BuildingKind::Office.colour());
    }
}
