use std::{
    cmp::Ordering,
    fmt::{Display, Formatter},
    hash::{Hash, Hasher},
    ops::Deref,
};

use serde::{Deserialize, Serialize};

use crate::{BaseUnits, PerSecondRate, RateError, BASE_UNIT_SCALE};

/// Per-second rate multiplied by 10^18.
///
/// The inner value is always finite and not negative, with `-0.0` stored as `0.0`.
/// Deserialization goes through `TryFrom<f64>` to keep it that way.
#[derive(Default, Debug, Clone, Copy, Serialize, Deserialize)]
#[serde(into = "f64", try_from = "f64")]
pub struct ScaledRate(f64);

impl ScaledRate {
    pub(crate) fn new(value: f64) -> Self {
        // Adding positive zero turns -0.0 into 0.0
        Self(value + 0.0)
    }

    pub fn value(self) -> f64 {
        self.0
    }

    pub fn per_second_rate(self) -> PerSecondRate {
        self.0 / BASE_UNIT_SCALE
    }

    /// Integer amount of base units for fixed-point ledgers.
    ///
    /// The fractional part is truncated, so a ledger accruing with this rate
    /// never pays more than the requested APY.
    #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
    pub fn to_base_units(self) -> BaseUnits {
        self.0.trunc() as BaseUnits
    }
}

impl TryFrom<f64> for ScaledRate {
    type Error = RateError;

    fn try_from(value: f64) -> Result<Self, Self::Error> {
        if !value.is_finite() || value < 0.0 {
            return Err(RateError::InvalidScaledRate { value });
        }

        Ok(Self::new(value))
    }
}

impl From<ScaledRate> for f64 {
    fn from(rate: ScaledRate) -> Self {
        rate.value()
    }
}

impl Deref for ScaledRate {
    type Target = f64;

    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

impl Display for ScaledRate {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        Display::fmt(&self.0, f)
    }
}

impl Ord for ScaledRate {
    fn cmp(&self, other: &Self) -> Ordering {
        self.0.total_cmp(&other.0)
    }
}

impl PartialOrd for ScaledRate {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl PartialEq for ScaledRate {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other).is_eq()
    }
}

impl Eq for ScaledRate {}

// `total_cmp` treats values as equal only when their bits are equal
impl Hash for ScaledRate {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.0.to_bits().hash(state);
    }
}

#[cfg(test)]
mod tests {
    use rstest::rstest;
    use serde_json::{from_str, to_string};

    use crate::{RateError, ScaledRate};

    #[rstest]
    #[case(21_964_978_785.874_313, 21_964_978_785)]
    #[case(3_020_261_953.541_282, 3_020_261_953)]
    #[case(0.999, 0)]
    #[case(0.0, 0)]
    fn base_units_are_truncated(#[case] value: f64, #[case] expected: u128) {
        assert_eq!(ScaledRate::new(value).to_base_units(), expected);
    }

    #[test]
    fn negative_zero_is_normalized() {
        let rate = ScaledRate::new(-0.0);

        assert!(rate.is_sign_positive());
        assert_eq!(rate, ScaledRate::default());
    }

    #[test]
    fn ordering_follows_value() {
        assert!(ScaledRate::new(0.0) < ScaledRate::new(1.0));
        assert!(ScaledRate::new(3_020_261_953.5) < ScaledRate::new(21_964_978_785.8));
        assert_eq!(
            ScaledRate::new(10.0).max(ScaledRate::new(2.5)),
            ScaledRate::new(10.0)
        );
    }

    #[test]
    fn display_matches_float() {
        assert_eq!(ScaledRate::new(21_964_978_785.874_313).to_string(), "21964978785.874313");
        assert_eq!(ScaledRate::new(0.0).to_string(), "0");
    }

    #[test]
    fn per_second_rate_is_unscaled() {
        let rate = ScaledRate::new(2e10);

        assert_eq!(rate.per_second_rate(), 2e-8);
    }

    #[test]
    fn serde_round_trip() {
        let rate = ScaledRate::new(3_020_261_953.541_282);

        assert_eq!(to_string(&rate).unwrap(), "3020261953.541282");
        assert_eq!(from_str::<ScaledRate>("3020261953.541282").unwrap(), rate);
        assert_eq!(from_str::<ScaledRate>("0").unwrap(), ScaledRate::default());
        assert_eq!(f64::from(rate), rate.value());
    }

    #[test]
    fn negative_zero_deserializes_as_zero() {
        let rate = from_str::<ScaledRate>("-0.0").unwrap();

        assert!(rate.is_sign_positive());
        assert_eq!(rate, ScaledRate::default());
    }

    #[rstest]
    #[case(-1.0)]
    #[case(-f64::MIN_POSITIVE)]
    #[case(f64::NAN)]
    #[case(f64::INFINITY)]
    fn invalid_values_are_rejected(#[case] value: f64) {
        let error = ScaledRate::try_from(value).unwrap_err();

        assert!(matches!(error, RateError::InvalidScaledRate { .. }), "Unexpected error: {error:?}");
    }

    #[test]
    fn negative_json_is_rejected() {
        let error = from_str::<ScaledRate>("-21964978785.874313").unwrap_err();

        assert!(error.to_string().starts_with("Scaled rate must be finite and non-negative"), "{error}");
    }
}
