pub(crate) fn assert_relative_eq(actual: f64, expected: f64, tolerance: f64) {
    let diff = if expected == 0.0 {
        actual.abs()
    } else {
        ((actual - expected) / expected).abs()
    };

    assert!(
        diff <= tolerance,
        "Actual: {actual}, expected: {expected}, relative diff: {diff}"
    );
}
