use std::num::NonZeroU32;

use apy_rate_model::{Apy, RateConverter, SECONDS_PER_YEAR};

/// APY values printed by the driver, in output order.
pub const SAMPLE_APYS: [Apy; 3] = [100.0, 10.0, 10_000.0];

#[derive(Debug, Clone, PartialEq)]
pub struct DriverConfig {
    pub seconds_per_year: NonZeroU32,
    pub samples: Vec<Apy>,
}

impl Default for DriverConfig {
    fn default() -> Self {
        Self {
            seconds_per_year: SECONDS_PER_YEAR,
            samples: SAMPLE_APYS.to_vec(),
        }
    }
}

impl DriverConfig {
    pub fn converter(&self) -> RateConverter {
        RateConverter::new(self.seconds_per_year)
    }
}

#[cfg(test)]
mod tests {
    use apy_rate_model::{RateConverter, SECONDS_PER_YEAR};

    use crate::DriverConfig;

    #[test]
    fn default_config() {
        let config = DriverConfig::default();

        assert_eq!(config.samples, vec![100.0, 10.0, 10_000.0]);
        assert_eq!(config.seconds_per_year, SECONDS_PER_YEAR);
        assert_eq!(config.converter(), RateConverter::default());
    }
}
