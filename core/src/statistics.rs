//! Descriptive statistics over a numeric sample
//!
//! Variance is the population variance (denominator = count).
//! Modes are reported in first-occurrence order.

/// Statistics errors
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum StatisticsError {
    #[error("no valid data")]
    NoData,
}

/// All descriptive statistics for one sample
#[derive(Debug, Clone, PartialEq)]
pub struct Summary {
    pub count: usize,
    pub mean: f64,
    pub median: f64,
    pub modes: Vec<f64>,
    pub variance: f64,
    pub std_dev: f64,
}

impl Summary {
    /// Compute every statistic for a non-empty sample
    pub fn from_samples(samples: &[f64]) -> Result<Self, StatisticsError> {
        if samples.is_empty() {
            return Err(StatisticsError::NoData);
        }

        let mean = mean(samples);
        let variance = variance(samples, mean);

        Ok(Self {
            count: samples.len(),
            mean,
            median: median(samples),
            modes: modes(samples),
            variance,
            std_dev: std_dev(variance),
        })
    }
}

/// Arithmetic mean; 0 for an empty sample
pub fn mean(samples: &[f64]) -> f64 {
    if samples.is_empty() {
        return 0.0;
    }
    samples.iter().sum::<f64>() / samples.len() as f64
}

/// Middle value of the sorted sample, or the average of the two middle values
///
/// Returns 0 for an empty sample.
pub fn median(samples: &[f64]) -> f64 {
    if samples.is_empty() {
        return 0.0;
    }
    let mut sorted = samples.to_vec();
    sorted.sort_by(f64::total_cmp);

    let mid = sorted.len() / 2;
    if sorted.len() % 2 == 0 {
        (sorted[mid - 1] + sorted[mid]) / 2.0
    } else {
        sorted[mid]
    }
}

/// Every value that reaches the highest frequency, in first-occurrence order
///
/// Values are grouped by numeric equality: `0.0` and `-0.0` share a bucket
/// (the first one seen is reported) and each NaN stands alone.
pub fn modes(samples: &[f64]) -> Vec<f64> {
    let mut frequency: Vec<(f64, usize)> = Vec::new();

    for &value in samples {
        match frequency.iter_mut().find(|(seen, _)| *seen == value) {
            Some((_, count)) => *count += 1,
            None => frequency.push((value, 1)),
        }
    }

    let max_count = frequency.iter().map(|(_, count)| *count).max().unwrap_or(0);

    frequency
        .into_iter()
        .filter(|(_, count)| *count == max_count)
        .map(|(value, _)| value)
        .collect()
}

/// Population variance around a precomputed mean; 0 for an empty sample
pub fn variance(samples: &[f64], mean: f64) -> f64 {
    if samples.is_empty() {
        return 0.0;
    }
    samples.iter().map(|x| (x - mean).powi(2)).sum::<f64>() / samples.len() as f64
}

/// Non-negative square root of the variance
pub fn std_dev(variance: f64) -> f64 {
    variance.sqrt()
}
