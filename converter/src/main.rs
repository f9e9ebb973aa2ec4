use anyhow::Result;
use apy_rate::{build_reports, init_logging, DriverConfig};

#[mutants::skip]
fn main() -> Result<()> {
    init_logging();

    let reports = build_reports(&DriverConfig::default())?;

    for report in reports {
        println!("{}", report.line());
    }

    Ok(())
}
