use anyhow::Result;
use apy_rate::{build_reports, DriverConfig};
use serde_json::{json, to_value};

#[test]
fn reference_report() -> Result<()> {
    let lines: Vec<String> = build_reports(&DriverConfig::default())?
        .iter()
        .map(|report| report.line())
        .collect();

    assert_eq!(lines.len(), 3);
    assert!(lines[0].starts_with("Interest rate per second for 100% APY, scaled by 1e18: 21964978785."));
    assert!(lines[1].starts_with("Interest rate per second for 10% APY, scaled by 1e18: 3020261953."));
    assert!(lines[2].starts_with("Interest rate per second for 10000% APY, scaled by 1e18: 146247483058."));

    Ok(())
}

#[test]
fn report_serialization() -> Result<()> {
    let config = DriverConfig {
        samples: vec![0.0],
        ..DriverConfig::default()
    };

    let reports = build_reports(&config)?;

    assert_eq!(
        to_value(&reports)?,
        json!([{ "apy": 0.0, "scaled_rate": 0.0, "base_units": 0, "reconstructed_apy": 0.0 }])
    );

    Ok(())
}

#[test]
fn reconstructed_apy_matches_input() -> Result<()> {
    for report in build_reports(&DriverConfig::default())? {
        let diff = ((report.reconstructed_apy - report.apy) / report.apy).abs();
        assert!(diff < 1e-9, "{}% reconstructed as {}%", report.apy, report.reconstructed_apy);
    }

    Ok(())
}

#[test]
fn empty_config_gives_empty_report() -> Result<()> {
    let config = DriverConfig {
        samples: vec![],
        ..DriverConfig::default()
    };

    assert!(build_reports(&config)?.is_empty());

    Ok(())
}
