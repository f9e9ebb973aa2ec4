use anyhow::{Context, Result};
use apy_rate_model::{Apy, BaseUnits, RateConverter, ScaledRate};
use num_format::{Buffer, CustomFormat};
use serde::Serialize;
use tracing::{debug, info};

use crate::{DriverConfig, PACKAGE_NAME, VERSION};

/// Conversion result for a single APY.
/// `reconstructed_apy` is the APY obtained by compounding `scaled_rate` back over a year.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RateReport {
    pub apy: Apy,
    pub scaled_rate: ScaledRate,
    pub base_units: BaseUnits,
    pub reconstructed_apy: Apy,
}

impl RateReport {
    pub fn new(converter: &RateConverter, apy: Apy) -> Result<Self> {
        let scaled_rate = converter
            .convert(apy)
            .with_context(|| format!("Failed to convert {apy}% APY"))?;

        Ok(Self {
            apy,
            scaled_rate,
            base_units: scaled_rate.to_base_units(),
            reconstructed_apy: converter.apy_of(scaled_rate),
        })
    }

    pub fn label(&self) -> String {
        format!("Interest rate per second for {}% APY, scaled by 1e18:", self.apy)
    }

    /// Report line printed to stdout
    pub fn line(&self) -> String {
        format!("{} {}", self.label(), self.scaled_rate)
    }

    fn to_json_string(&self) -> Result<String> {
        serde_json::to_string(self).context("Failed to serialize RateReport")
    }

    fn to_json_event_string(&self) -> Result<String> {
        Ok(format!("RATE_JSON:{}", self.to_json_string()?))
    }
}

/// Converts every sample from `config`, preserving its order.
pub fn build_reports(config: &DriverConfig) -> Result<Vec<RateReport>> {
    let converter = config.converter();

    info!(
        package = PACKAGE_NAME,
        version = VERSION,
        seconds_per_year = config.seconds_per_year.get(),
        samples = config.samples.len(),
        "Converting APY samples"
    );

    config
        .samples
        .iter()
        .map(|&apy| -> Result<RateReport> {
            let report = RateReport::new(&converter, apy)?;
            let base_units = format_number(report.base_units)?;

            debug!(
                apy = report.apy,
                base_units = %base_units,
                reconstructed_apy = report.reconstructed_apy,
                "Converted"
            );

            let event = report.to_json_event_string()?;
            debug!("{event}");

            Ok(report)
        })
        .collect()
}

fn format_number<T: num_format::ToFormattedStr>(number: T) -> Result<String> {
    let format = CustomFormat::builder().separator(" ").build()?;

    let mut buf = Buffer::new();
    buf.write_formatted(&number, &format);

    Ok(buf.to_string())
}
