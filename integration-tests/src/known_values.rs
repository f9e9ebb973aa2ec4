use anyhow::Result;
use apy_rate_model::{convert, RateConverter};
use rstest::rstest;

use crate::common::assert_relative_eq;

#[rstest]
#[case(100.0, 21_964_978_785.874_313, 21_964_978_785)]
#[case(10.0, 3_020_261_953.541_282, 3_020_261_953)]
#[case(10_000.0, 146_247_483_058.508_76, 146_247_483_058)]
#[case(0.0001, 31_688.749_775_218_886, 31_688)]
#[case(0.0, 0.0, 0)]
fn regression_fixtures(#[case] apy: f64, #[case] scaled: f64, #[case] base_units: u128) -> Result<()> {
    let rate = convert(apy)?;

    assert_relative_eq(rate.value(), scaled, 1e-9);
    assert_eq!(rate.to_base_units(), base_units);

    Ok(())
}

#[rstest]
#[case(100.0, 2.196_497_8e-8)]
#[case(10.0, 3.020_262e-9)]
#[case(10_000.0, 1.462_474_8e-7)]
fn per_second_rate_to_six_figures(#[case] apy: f64, #[case] rate: f64) -> Result<()> {
    let converter = RateConverter::default();

    assert_relative_eq(converter.per_second_rate(apy)?, rate, 1e-6);
    assert_relative_eq(converter.convert(apy)?.per_second_rate(), rate, 1e-6);

    Ok(())
}
