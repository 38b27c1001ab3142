//! Unit tests for ep-disease.

#[cfg(test)]
mod state {
    use crate::EpiState;

    #[test]
    fn symbols_round_trip() {
        for s in EpiState::ALL {
            assert_eq!(EpiState::from_symbol(s.symbol()), Some(s));
        }
        assert_eq!(EpiState::from_symbol('X'), None);
    }

    #[test]
    fn active_and_terminal() {
        assert!(EpiState::Exposed.is_active());
        assert!(EpiState::Infectious.is_active());
        assert!(!EpiState::Susceptible.is_active());
        assert!(EpiState::Recovered.is_terminal());
        assert!(EpiState::Deceased.is_terminal());
        assert!(!EpiState::Infectious.is_terminal());
    }

    #[test]
    fn index_follows_reporting_order() {
        for (i, s) in EpiState::ALL.into_iter().enumerate() {
            assert_eq!(s.index(), i);
        }
    }
}

#[cfg(test)]
mod model {
    use approx::assert_abs_diff_eq;
    use ep_core::{SimParams, SimRng};

    use crate::{DailyRates, DiseaseError, DiseaseModel};

    fn daily(infection: f64, recovery: f64, mortality: f64) -> DailyRates {
        DailyRates { infection, incubation_days: 2.0, recovery, mortality }
    }

    #[test]
    fn daily_rates_become_hourly() {
        let m = DiseaseModel::from_daily_rates(daily(0.72, 0.48, 0.24), 0.5).unwrap();
        assert_abs_diff_eq!(m.infection_probability(), 0.03);
        assert_abs_diff_eq!(m.recovery_probability(), 0.02);
        assert_abs_diff_eq!(m.mortality_probability(), 0.01);
        // 2 days × 24 h × 0.5 s.
        assert_abs_diff_eq!(m.incubation_secs(), 24.0);
        assert_abs_diff_eq!(m.seconds_per_hour(), 0.5);
    }

    #[test]
    fn infection_frequency_matches_hourly_rate() {
        let m = DiseaseModel::from_daily_rates(daily(1.0, 0.0, 0.0), 1.0).unwrap();
        let mut rng = SimRng::new(2024);
        let trials = 100_000;
        let hits = (0..trials).filter(|_| m.infect(&mut rng)).count();
        let freq = hits as f64 / trials as f64;
        assert_abs_diff_eq!(freq, 1.0 / 24.0, epsilon = 0.01);
    }

    #[test]
    fn certain_and_impossible_trials() {
        let m = DiseaseModel::from_hourly(1.0, 1.0, 0.0, 0.0, 1.0).unwrap();
        let mut rng = SimRng::new(5);
        for _ in 0..1_000 {
            assert!(m.infect(&mut rng));
            assert!(m.recover(&mut rng));
            assert!(!m.die(&mut rng));
        }
    }

    #[test]
    fn rejects_rates_outside_unit_interval() {
        assert_eq!(
            DiseaseModel::from_daily_rates(daily(1.2, 0.1, 0.1), 1.0),
            Err(DiseaseError::RateOutOfRange { name: "infection", value: 1.2 }),
        );
        assert!(DiseaseModel::from_hourly(0.1, -0.1, 0.0, 1.0, 1.0).is_err());
    }

    #[test]
    fn rejects_bad_time_scale_and_incubation() {
        assert_eq!(
            DiseaseModel::from_hourly(0.1, 0.1, 0.1, 1.0, 0.0),
            Err(DiseaseError::NonPositiveTimeScale(0.0)),
        );
        assert_eq!(
            DiseaseModel::from_hourly(0.1, 0.1, 0.1, -1.0, 1.0),
            Err(DiseaseError::NegativeIncubation(-1.0)),
        );
    }

    #[test]
    fn default_params_build() {
        let m = DiseaseModel::from_params(&SimParams::default()).unwrap();
        assert_abs_diff_eq!(m.recovery_probability(), 0.6 / 24.0);
        assert_abs_diff_eq!(m.incubation_secs(), 2.0 * 24.0 * 0.5);
    }

    #[test]
    fn same_seed_same_outcomes() {
        let m = DiseaseModel::from_hourly(0.3, 0.3, 0.3, 0.0, 1.0).unwrap();
        let mut a = SimRng::new(11);
        let mut b = SimRng::new(11);
        let xs: Vec<bool> = (0..64).map(|_| m.infect(&mut a)).collect();
        let ys: Vec<bool> = (0..64).map(|_| m.infect(&mut b)).collect();
        assert_eq!(xs, ys);
    }
}

#[cfg(test)]
mod counts {
    use crate::{EpiState, StatusCounts};

    #[test]
    fn tally_and_index() {
        let c: StatusCounts = [
            EpiState::Susceptible,
            EpiState::Susceptible,
            EpiState::Infectious,
            EpiState::Deceased,
        ]
        .into_iter()
        .collect();
        assert_eq!(c[EpiState::Susceptible], 2);
        assert_eq!(c.get(EpiState::Infectious), 1);
        assert_eq!(c.total(), 4);
        assert_eq!(c.active(), 1);
    }

    #[test]
    fn map_has_every_symbol() {
        let c = StatusCounts::from_states([EpiState::Recovered]);
        let map = c.to_map();
        assert_eq!(map.len(), 5);
        assert_eq!(map[&'R'], 1);
        assert_eq!(map[&'S'], 0);
    }

    #[test]
    fn display_lists_states_in_order() {
        let c = StatusCounts::from_states([EpiState::Exposed, EpiState::Exposed]);
        assert_eq!(c.to_string(), "S=0 E=2 I=0 R=0 D=0");
    }
}
