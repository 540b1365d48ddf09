//! Descriptive statistics shared by the aggregation queries.

/// Arithmetic mean; `None` for an empty slice.
pub fn mean(samples: &[f64]) -> Option<f64> {
    (!samples.is_empty()).then(|| samples.iter().sum::<f64>() / samples.len() as f64)
}

/// Population standard deviation (divisor n); `None` for an empty slice.
/// A single-sample group legitimately yields 0.0.
pub fn std_dev(samples: &[f64]) -> Option<f64> {
    let mean = mean(samples)?;
    let variance = samples
        .iter()
        .map(|value| (value - mean).powi(2))
        .sum::<f64>()
        / samples.len() as f64;
    Some(variance.sqrt())
}

/// Mean and population standard deviation for a group known to hold at
/// least one sample.
pub fn mean_std(samples: &[f64]) -> (f64, f64) {
    (
        mean(samples).unwrap_or_default(),
        std_dev(samples).unwrap_or_default(),
    )
}

/// Median, averaging the two middle values for even-sized input.
pub fn median(samples: &[f64]) -> Option<f64> {
    if samples.is_empty() {
        return None;
    }
    let mut sorted = samples.to_vec();
    sorted.sort_by(f64::total_cmp);
    let mid = sorted.len() / 2;
    if sorted.len() % 2 == 0 {
        Some((sorted[mid - 1] + sorted[mid]) / 2.0)
    } else {
        Some(sorted[mid])
    }
}

/// Round to two decimal places, the precision of rendered scalar metrics.
pub fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}
