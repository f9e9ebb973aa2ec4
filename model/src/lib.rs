mod converter;
mod error;
mod scaled_rate;

use std::num::NonZeroU32;

pub use converter::{convert, RateConverter};
pub use error::RateError;
pub use scaled_rate::ScaledRate;

/// Annual percentage yield, `100.0` means 100%
pub type Apy = f64;

/// Fractional growth applied once per second
pub type PerSecondRate = f64;

/// Rate in fixed-point base units as stored by integer ledgers
pub type BaseUnits = u128;

/// Mean tropical year in seconds
pub const SECONDS_PER_YEAR: NonZeroU32 = match NonZeroU32::new(31_556_925) {
    Some(seconds) => seconds,
    None => unreachable!(),
};

/// Fixed-point denominator of a scaled rate: 1 base unit is 10^-18
pub const BASE_UNIT_SCALE: f64 = 1e18;

pub const PERCENT: f64 = 100.0;
