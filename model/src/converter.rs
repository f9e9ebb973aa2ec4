use std::num::NonZeroU32;

use crate::{Apy, PerSecondRate, RateError, ScaledRate, BASE_UNIT_SCALE, PERCENT, SECONDS_PER_YEAR};

/// Converts an annual percentage yield into the per-second rate which,
/// compounded every second for `seconds_per_year` seconds, gives the same annual growth.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RateConverter {
    seconds_per_year: NonZeroU32,
}

impl Default for RateConverter {
    fn default() -> Self {
        Self::new(SECONDS_PER_YEAR)
    }
}

impl RateConverter {
    pub const fn new(seconds_per_year: NonZeroU32) -> Self {
        Self { seconds_per_year }
    }

    pub fn seconds_per_year(&self) -> NonZeroU32 {
        self.seconds_per_year
    }

    /// Per-second rate scaled by 10^18. The result is not rounded,
    /// use `ScaledRate::to_base_units` to get an integer amount.
    ///
    /// Non-decreasing in `apy`, and strictly increasing as long as the per-second rate stays
    /// a normal `f64`, i.e. for APY above roughly 1e-290%. Below that distinct APYs can share a rate,
    /// and subnormal APYs give exactly zero because `apy / 100` underflows.
    pub fn convert(&self, apy: Apy) -> Result<ScaledRate, RateError> {
        let rate = self.per_second_rate(apy)?;

        Ok(ScaledRate::new(rate * BASE_UNIT_SCALE))
    }

    /// `(1 + apy / 100) ^ (1 / seconds_per_year) - 1`
    ///
    /// Evaluated as `expm1(ln_1p(apy / 100) / seconds_per_year)`: the rate is around 10^-8,
    /// so the plain `powf(..) - 1` cancels away most of the significant digits.
    pub fn per_second_rate(&self, apy: Apy) -> Result<PerSecondRate, RateError> {
        let log_growth = self.log_growth(apy)?;

        Ok((log_growth / self.periods()).exp_m1())
    }

    /// First order approximation `ln(1 + apy / 100) / seconds_per_year * 10^18`.
    /// Slightly underestimates the exact rate for any positive APY.
    pub fn continuous_approximation(&self, apy: Apy) -> Result<ScaledRate, RateError> {
        let log_growth = self.log_growth(apy)?;

        Ok(ScaledRate::new(log_growth / self.periods() * BASE_UNIT_SCALE))
    }

    /// Growth of a unit amount after compounding `rate` every second for a year.
    pub fn annual_growth_factor(&self, rate: ScaledRate) -> f64 {
        (self.periods() * rate.per_second_rate().ln_1p()).exp()
    }

    /// APY which `rate` reproduces over a year, inverse of `convert`.
    pub fn apy_of(&self, rate: ScaledRate) -> Apy {
        (self.periods() * rate.per_second_rate().ln_1p()).exp_m1() * PERCENT
    }

    fn log_growth(&self, apy: Apy) -> Result<f64, RateError> {
        if !apy.is_finite() || apy < 0.0 {
            return Err(RateError::InvalidInput { apy });
        }

        let growth_factor = 1.0 + apy / PERCENT;
        if !(growth_factor > 0.0 && growth_factor.is_finite()) {
            return Err(RateError::NumericDomain { growth_factor });
        }

        Ok((apy / PERCENT).ln_1p())
    }

    fn periods(&self) -> f64 {
        f64::from(self.seconds_per_year.get())
    }
}

/// Converts `apy` with the mean tropical year as the compounding period.
pub fn convert(apy: Apy) -> Result<ScaledRate, RateError> {
    RateConverter::default().convert(apy)
}
