use anyhow::Result;
use apy_rate_model::{convert, RateConverter, RateError, BASE_UNIT_SCALE, PERCENT, SECONDS_PER_YEAR};
use fake::Fake;
use itertools::Itertools;
use rand::{seq::SliceRandom, thread_rng, Rng};

use crate::common::assert_relative_eq;

#[test]
fn higher_apy_gives_higher_rate() -> Result<()> {
    let mut rng = thread_rng();

    let mut apys: Vec<f64> = (0..1_000).map(|_| rng.gen_range(0.0..50_000.0)).collect();
    apys.sort_by(f64::total_cmp);
    apys.dedup_by(|a, b| (*a - *b).abs() < 1e-3);

    let rates = apys.iter().map(|&apy| convert(apy)).collect::<Result<Vec<_>, _>>()?;

    for ((lower_apy, lower), (higher_apy, higher)) in apys.iter().zip(&rates).tuple_windows() {
        assert!(lower < higher, "{lower_apy}% -> {lower}, {higher_apy}% -> {higher}");
    }

    Ok(())
}

#[test]
fn conversion_does_not_depend_on_order() -> Result<()> {
    let mut apys: Vec<f64> = (0..100).map(|_| (0.0..10_000.0).fake()).collect();
    let expected = apys.iter().map(|&apy| convert(apy)).collect::<Result<Vec<_>, _>>()?;

    let original = apys.clone();
    apys.shuffle(&mut thread_rng());

    for apy in apys {
        let index = original.iter().position(|&value| value == apy).unwrap();
        assert_eq!(convert(apy)?, expected[index]);
    }

    Ok(())
}

#[test]
fn compounding_every_second_restores_growth() -> Result<()> {
    let converter = RateConverter::default();

    for _ in 0..1_000 {
        let apy: f64 = (0.0..100_000.0).fake();
        let rate = converter.convert(apy)?;

        assert_relative_eq(converter.annual_growth_factor(rate), 1.0 + apy / PERCENT, 1e-9);
    }

    Ok(())
}

#[test]
fn compounding_with_powi_restores_growth() -> Result<()> {
    let seconds = i32::try_from(SECONDS_PER_YEAR.get())?;

    for apy in [10.0, 100.0, 10_000.0] {
        let rate = convert(apy)?.per_second_rate();

        // `1.0 + rate` drops the low digits of the rate, hence the looser tolerance
        assert_relative_eq((1.0 + rate).powi(seconds), 1.0 + apy / PERCENT, 1e-6);
    }

    Ok(())
}

#[test]
fn tiny_apy_is_not_lost() -> Result<()> {
    for apy in [1e-4, 1e-6, 1e-8] {
        let rate = convert(apy)?;
        let expected = (apy / PERCENT).ln_1p() / f64::from(SECONDS_PER_YEAR.get()) * BASE_UNIT_SCALE;

        assert!(rate.value() > 0.0, "Rate for {apy}% is zero");
        assert_relative_eq(rate.value(), expected, 1e-6);
    }

    Ok(())
}

#[test]
fn negative_apy_is_rejected() {
    assert_eq!(convert(-1.0), Err(RateError::InvalidInput { apy: -1.0 }));

    for _ in 0..100 {
        let apy: f64 = (-1_000.0..-0.001).fake();
        assert!(matches!(convert(apy), Err(RateError::InvalidInput { .. })));
    }
}
