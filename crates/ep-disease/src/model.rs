//! Per-hour transition probabilities and Bernoulli trials.

use ep_core::{SimParams, SimRng};

use crate::{DiseaseError, DiseaseResult};

/// Daily rates as entered by the user.
#[derive(Copy, Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct DailyRates {
    pub infection:       f64,
    pub incubation_days: f64,
    pub recovery:        f64,
    pub mortality:       f64,
}

impl DailyRates {
    pub fn from_params(params: &SimParams) -> Self {
        Self {
            infection:       params.infection_rate,
            incubation_days: params.incubation_days,
            recovery:        params.recovery_rate,
            mortality:       params.mortality_rate,
        }
    }
}

/// Hourly disease probabilities plus the incubation period.
///
/// Immutable after construction.  Randomness comes from the caller's
/// [`SimRng`], so a model can be shared by every agent.
#[derive(Clone, Debug, PartialEq)]
pub struct DiseaseModel {
    infection:        f64,
    recovery:         f64,
    mortality:        f64,
    incubation_secs:  f64,
    seconds_per_hour: f64,
}

impl DiseaseModel {
    /// Build from hourly probabilities.  `incubation_hours` is converted to
    /// real seconds with `seconds_per_hour`.
    pub fn from_hourly(
        infection: f64,
        recovery: f64,
        mortality: f64,
        incubation_hours: f64,
        seconds_per_hour: f64,
    ) -> DiseaseResult<Self> {
        for (name, value) in [("infection", infection), ("recovery", recovery), ("mortality", mortality)] {
            if !(0.0..=1.0).contains(&value) {
                return Err(DiseaseError::RateOutOfRange { name, value });
            }
        }
        if !(incubation_hours >= 0.0) {
            return Err(DiseaseError::NegativeIncubation(incubation_hours));
        }
        if !(seconds_per_hour > 0.0) {
            return Err(DiseaseError::NonPositiveTimeScale(seconds_per_hour));
        }
        Ok(Self {
            infection,
            recovery,
            mortality,
            incubation_secs: incubation_hours * seconds_per_hour,
            seconds_per_hour,
        })
    }

    /// Build from daily rates: each probability is divided by 24 and the
    /// incubation period becomes `days × 24 × seconds_per_hour` seconds.
    pub fn from_daily_rates(rates: DailyRates, seconds_per_hour: f64) -> DiseaseResult<Self> {
        for (name, value) in [
            ("infection", rates.infection),
            ("recovery", rates.recovery),
            ("mortality", rates.mortality),
        ] {
            if !(0.0..=1.0).contains(&value) {
                return Err(DiseaseError::RateOutOfRange { name, value });
            }
        }
        let model = Self::from_hourly(
            rates.infection / 24.0,
            rates.recovery / 24.0,
            rates.mortality / 24.0,
            rates.incubation_days * 24.0,
            seconds_per_hour,
        )?;
        log::debug!(
            "disease model: infect {:.4}/h, recover {:.4}/h, die {:.4}/h, incubation {:.1}s",
            model.infection,
            model.recovery,
            model.mortality,
            model.incubation_secs,
        );
        Ok(model)
    }

    pub fn from_params(params: &SimParams) -> DiseaseResult<Self> {
        Self::from_daily_rates(DailyRates::from_params(params), params.seconds_per_hour())
    }

    /// One contact-infection trial.
    #[inline]
    pub fn infect(&self, rng: &mut SimRng) -> bool {
        bernoulli(self.infection, rng)
    }

    /// One hourly recovery trial.
    #[inline]
    pub fn recover(&self, rng: &mut SimRng) -> bool {
        bernoulli(self.recovery, rng)
    }

    /// One hourly mortality trial.
    #[inline]
    pub fn die(&self, rng: &mut SimRng) -> bool {
        bernoulli(self.mortality, rng)
    }

    pub fn infection_probability(&self) -> f64 {
        self.infection
    }

    pub fn recovery_probability(&self) -> f64 {
        self.recovery
    }

    pub fn mortality_probability(&self) -> f64 {
        self.mortality
    }

    /// Incubation period in real seconds.
    pub fn incubation_secs(&self) -> f64 {
        self.incubation_secs
    }

    /// Real seconds per simulated hour; one hourly update consumes this much
    /// incubation time.
    pub fn seconds_per_hour(&self) -> f64 {
        self.seconds_per_hour
    }
}

/// Millirate Bernoulli trial: a uniform draw from `[0, 1000)` below `p × 1000`.
#[inline]
fn bernoulli(p: f64, rng: &mut SimRng) -> bool {
    let draw: u32 = rng.gen_range(0..1000);
    f64::from(draw) < p * 1000.0
}
