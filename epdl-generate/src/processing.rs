//! Generic table processing steps.
//!
//! Tables are sorted on their independent variable. The functions take
//! accessor closures so the same step can run over raw `(x, y)` pairs and
//! over the record types that end up in the data files.

use epdl_data::QuadraticBin;

/// Transformation applied to both columns of a continuous table.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Scale {
    LogLog,
    SquareSquare,
}

impl Scale {
    pub fn apply(self, value: f64) -> f64 {
        match self {
            // ln(0) is kept as -inf, negative values map to 0
            Scale::LogLog if value >= 0.0 => value.ln(),
            Scale::LogLog => 0.0,
            Scale::SquareSquare => value * value,
        }
    }
}

pub fn process_continuous_data(points: &mut [(f64, f64)], scale: Scale) {
    for (x, y) in points.iter_mut() {
        *x = scale.apply(*x);
        *y = scale.apply(*y);
    }
}

pub fn process_log_log(points: &mut [(f64, f64)]) {
    process_continuous_data(points, Scale::LogLog);
}

pub fn process_square_square(points: &mut [(f64, f64)]) {
    process_continuous_data(points, Scale::SquareSquare);
}

/// Drops leading points whose key lies below `value`.
///
/// The last point at or below `value` is kept so the remaining table still
/// brackets it.
pub fn remove_elements_less_than<T>(data: &mut Vec<T>, key: impl Fn(&T) -> f64, value: f64) {
    debug_assert!(!data.is_empty());
    let count = data
        .windows(2)
        .take_while(|w| key(&w[0]) < value && key(&w[1]) <= value)
        .count();
    data.drain(..count);
}

/// Drops trailing points whose key lies above `value`, keeping the first
/// point at or above it.
pub fn remove_elements_greater_than<T>(data: &mut Vec<T>, key: impl Fn(&T) -> f64, value: f64) {
    debug_assert!(!data.is_empty());
    let count = data
        .windows(2)
        .rev()
        .take_while(|w| key(&w[1]) > value && key(&w[0]) >= value)
        .count();
    data.truncate(data.len() - count);
}

/// Drops the interior points of every run of three or more equal keys.
pub fn coarsen_constant_regions<T>(data: &mut Vec<T>, key: impl Fn(&T) -> f64) {
    debug_assert!(data.len() > 2);
    let last = data.len() - 1;
    let keep: Vec<bool> = (0..data.len())
        .map(|i| {
            i == 0
                || i == last
                || key(&data[i - 1]) != key(&data[i])
                || key(&data[i]) != key(&data[i + 1])
        })
        .collect();

    let mut keep = keep.into_iter();
    data.retain(|_| keep.next().unwrap_or(true));
}

/// Stores the slope of every pair of points on the lower point. The last
/// point gets a slope of 0.
pub fn calculate_slopes<T>(
    data: &mut [T],
    x: impl Fn(&T) -> f64,
    y: impl Fn(&T) -> f64,
    slope: impl Fn(&mut T) -> &mut f64,
) {
    for i in 1..data.len() {
        let value = (y(&data[i]) - y(&data[i - 1])) / (x(&data[i]) - x(&data[i - 1]));
        *slope(&mut data[i - 1]) = value;
    }
    if let Some(last) = data.last_mut() {
        *slope(last) = 0.0;
    }
}

/// Integrates the piecewise linear density in `pdf` into `cdf`, then
/// normalizes both by the total.
pub fn calculate_continuous_cdf(bins: &mut [QuadraticBin]) {
    debug_assert!(bins.len() > 1);
    bins[0].cdf = 0.0;
    for i in 1..bins.len() {
        let lower = bins[i - 1];
        let dx = bins[i].x - lower.x;
        bins[i].cdf = lower.cdf + lower.pdf * dx + 0.5 * (bins[i].pdf - lower.pdf) * dx;
    }

    let norm = bins[bins.len() - 1].cdf;
    for bin in bins.iter_mut() {
        bin.cdf /= norm;
        bin.pdf /= norm;
    }
}

/// Replaces the weights in `value` by their normalized running sum.
///
/// A single entry always gets a CDF of 1.
pub fn calculate_discrete_cdf<T>(data: &mut [T], value: impl Fn(&mut T) -> &mut f64) {
    debug_assert!(!data.is_empty());
    if data.len() == 1 {
        *value(&mut data[0]) = 1.0;
        return;
    }

    let mut total = 0.0;
    for item in data.iter_mut() {
        let weight = value(item);
        total += *weight;
        *weight = total;
    }
    for item in data.iter_mut() {
        *value(item) /= total;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use epdl_data::LogLogBin;

    const INDEP_VAR: f64 = 0.511;
    const LOG_INDEP_VAR: f64 = -0.67138568877843;
    const SQR_INDEP_VAR: f64 = 0.261121;
    const DEP_VAR: f64 = 3.14;
    const LOG_DEP_VAR: f64 = 1.1442227999202;
    const SQR_DEP_VAR: f64 = 9.8596;
    const SLOPE: f64 = 6.1448140900196;
    const CDF_NORM: f64 = 64.98387;
    const TOL: f64 = 1e-12;

    fn linear_bins() -> Vec<QuadraticBin> {
        (0..10)
            .map(|i| QuadraticBin {
                x: i as f64 * INDEP_VAR,
                cdf: 0.0,
                pdf: i as f64 * DEP_VAR,
                slope: 0.0,
            })
            .collect()
    }

    #[test]
    fn test_log_log_scale() {
        let mut points = [(INDEP_VAR, DEP_VAR)];
        process_log_log(&mut points);
        assert_relative_eq!(points[0].0, LOG_INDEP_VAR, max_relative = TOL);
        assert_relative_eq!(points[0].1, LOG_DEP_VAR, max_relative = TOL);
    }

    #[test]
    fn test_log_log_of_zero_and_negative() {
        assert_eq!(Scale::LogLog.apply(0.0), f64::NEG_INFINITY);
        assert_eq!(Scale::LogLog.apply(-2.0), 0.0);
    }

    #[test]
    fn test_square_square_scale() {
        let mut points = [(INDEP_VAR, DEP_VAR)];
        process_square_square(&mut points);
        assert_relative_eq!(points[0].0, SQR_INDEP_VAR, max_relative = TOL);
        assert_relative_eq!(points[0].1, SQR_DEP_VAR, max_relative = TOL);
    }

    #[test]
    fn test_slopes_on_lower_point() {
        let mut bins: Vec<LogLogBin> = (0..10)
            .map(|i| LogLogBin {
                x: i as f64 * INDEP_VAR,
                y: i as f64 * DEP_VAR,
                slope: 0.0,
            })
            .collect();
        calculate_slopes(&mut bins, |b| b.x, |b| b.y, |b| &mut b.slope);

        for bin in &bins[..9] {
            assert_relative_eq!(bin.slope, SLOPE, max_relative = TOL);
        }
        assert_eq!(bins[9].slope, 0.0);
    }

    #[test]
    fn test_continuous_cdf() {
        let mut bins = linear_bins();
        calculate_continuous_cdf(&mut bins);

        let mut cdf = 0.0;
        for (i, bin) in bins.iter().enumerate() {
            if i > 0 {
                cdf += 0.5 * INDEP_VAR * (i as f64 * DEP_VAR + (i - 1) as f64 * DEP_VAR) / CDF_NORM;
            }
            assert_relative_eq!(bin.pdf, i as f64 * DEP_VAR / CDF_NORM, max_relative = TOL);
            assert_relative_eq!(bin.cdf, cdf, epsilon = TOL, max_relative = TOL);
        }
        assert_relative_eq!(bins[9].cdf, 1.0, max_relative = TOL);
    }

    #[test]
    fn test_discrete_cdf() {
        let mut weights: Vec<(u32, f64)> = (1..=10).map(|i| (i, i as f64)).collect();
        calculate_discrete_cdf(&mut weights, |w| &mut w.1);

        let total = 55.0;
        for (i, &(shell, cdf)) in weights.iter().enumerate() {
            let n = (i + 1) as f64;
            assert_eq!(shell, i as u32 + 1);
            assert_relative_eq!(cdf, n * (n + 1.0) / 2.0 / total, max_relative = TOL);
        }
    }

    #[test]
    fn test_discrete_cdf_single_entry() {
        let mut weights = [(1_u32, 2.0)];
        calculate_discrete_cdf(&mut weights, |w| &mut w.1);
        assert_eq!(weights[0].1, 1.0);
    }

    #[test]
    fn test_remove_elements_less_than_keeps_bracket() {
        let mut data = vec![1.0, 2.0, 3.0, 4.0, 5.0];
        remove_elements_less_than(&mut data, |v| *v, 3.5);
        assert_eq!(data, vec![3.0, 4.0, 5.0]);

        let mut data = vec![1.0, 2.0, 3.0, 4.0, 5.0];
        remove_elements_less_than(&mut data, |v| *v, 3.0);
        assert_eq!(data, vec![3.0, 4.0, 5.0]);

        let mut data = vec![1.0, 2.0, 3.0];
        remove_elements_less_than(&mut data, |v| *v, 0.5);
        assert_eq!(data, vec![1.0, 2.0, 3.0]);
    }

    #[test]
    fn test_remove_elements_greater_than_keeps_bracket() {
        let mut data = vec![1.0, 2.0, 3.0, 4.0, 5.0];
        remove_elements_greater_than(&mut data, |v| *v, 2.5);
        assert_eq!(data, vec![1.0, 2.0, 3.0]);

        let mut data = vec![1.0, 2.0, 3.0, 4.0, 5.0];
        remove_elements_greater_than(&mut data, |v| *v, 3.0);
        assert_eq!(data, vec![1.0, 2.0, 3.0]);

        let mut data = vec![1.0, 2.0, 3.0];
        remove_elements_greater_than(&mut data, |v| *v, 10.0);
        assert_eq!(data, vec![1.0, 2.0, 3.0]);
    }

    #[test]
    fn test_remove_on_pairs_uses_key() {
        let mut data = vec![(1.0, 9.0), (2.0, 8.0), (3.0, 7.0), (4.0, 6.0)];
        remove_elements_less_than(&mut data, |p| p.0, 2.5);
        remove_elements_greater_than(&mut data, |p| p.0, 2.5);
        assert_eq!(data, vec![(2.0, 8.0), (3.0, 7.0)]);
    }

    #[test]
    fn test_coarsen_constant_regions() {
        let mut data = vec![
            (0.0, 0.0),
            (1.0, 2.0),
            (2.0, 2.0),
            (3.0, 2.0),
            (4.0, 2.0),
            (5.0, 3.0),
            (6.0, 5.0),
            (7.0, 5.0),
            (8.0, 5.0),
        ];
        coarsen_constant_regions(&mut data, |p| p.1);
        assert_eq!(
            data,
            vec![
                (0.0, 0.0),
                (1.0, 2.0),
                (4.0, 2.0),
                (5.0, 3.0),
                (6.0, 5.0),
                (8.0, 5.0)
            ]
        );
    }

    #[test]
    fn test_coarsen_leaves_pairs_alone() {
        let mut data = vec![(0.0, 1.0), (1.0, 1.0), (2.0, 2.0), (3.0, 2.0)];
        coarsen_constant_regions(&mut data, |p| p.1);
        assert_eq!(data.len(), 4);
    }
}
