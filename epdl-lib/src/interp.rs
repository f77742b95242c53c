//! Closed-form evaluation inside a single interpolation bin.

use epdl_data::{LogLogBin, QuadraticBin};

/// Log-log evaluation: `exp(y + slope * (log_query - x))`.
#[inline]
pub fn log_log_evaluate(bin: &LogLogBin, log_query: f64) -> f64 {
    (bin.y + bin.slope * (log_query - bin.x)).exp()
}

/// Log-log evaluation for tables that start with a `-inf` floor bin.
///
/// Inside the floor bin the offset is taken as zero, so the result is
/// `exp(y)` (exactly `0.0` when `y` is `-inf`) instead of going through
/// `ln(q) - (-inf)`.
#[inline]
pub fn log_log_evaluate_from_floor(bin: &LogLogBin, log_query: f64) -> f64 {
    let offset = if bin.x == f64::NEG_INFINITY {
        0.0
    } else {
        log_query - bin.x
    };
    (bin.y + bin.slope * offset).exp()
}

/// Forward evaluation of a locally quadratic CDF.
#[inline]
pub fn quadratic_cdf(bin: &QuadraticBin, x: f64) -> f64 {
    let dx = x - bin.x;
    bin.cdf + bin.pdf * dx + 0.5 * bin.slope * dx * dx
}

/// Inverse of [`quadratic_cdf`] inside `bin`.
///
/// Solves `pdf * dx + 0.5 * slope * dx^2 = cdf - bin.cdf` for the
/// non-negative root. A zero slope falls back to linear inversion.
#[inline]
pub fn quadratic_inverse(bin: &QuadraticBin, cdf: f64) -> f64 {
    let dcdf = cdf - bin.cdf;
    if dcdf == 0.0 {
        return bin.x;
    }

    if bin.slope == 0.0 {
        return bin.x + dcdf / bin.pdf;
    }

    // Rationalized root of the quadratic; same value as
    // (sqrt(pdf^2 + 2 slope dcdf) - pdf) / slope without the cancellation.
    let discriminant = (bin.pdf * bin.pdf + 2.0 * bin.slope * dcdf).max(0.0);
    bin.x + 2.0 * dcdf / (bin.pdf + discriminant.sqrt())
}
