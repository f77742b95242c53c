//! Binary searches over ordered interpolation tables.
//!
//! The key closure selects the field a table is sorted by, so the same
//! search serves log-energy, squared-argument and CDF lookups.

/// Index of the rightmost element whose key is `<= value`.
///
/// A value equal to the last key returns the last index. Values below the
/// first key violate the precondition.
#[inline]
pub fn lower_bound_index_by_key<T, F>(data: &[T], key: F, value: f64) -> usize
where
    F: Fn(&T) -> f64,
{
    debug_assert!(!data.is_empty(), "cannot search an empty table");
    debug_assert!(
        key(&data[0]) <= value,
        "value {value} lies below the first bin {}",
        key(&data[0])
    );

    data.partition_point(|v| key(v) <= value).saturating_sub(1)
}

/// Element with the greatest key that is `<= value` (floor search).
#[inline]
pub fn lower_bound_by_key<T, F>(data: &[T], key: F, value: f64) -> &T
where
    F: Fn(&T) -> f64,
{
    &data[lower_bound_index_by_key(data, key, value)]
}

/// Index of the first element whose key is `>= value`.
///
/// Values above the last key violate the precondition. Debug builds
/// assert on them; release builds return the last index, so a CDF that
/// sums to slightly less than one still selects the last entry.
#[inline]
pub fn upper_bound_index_by_key<T, F>(data: &[T], key: F, value: f64) -> usize
where
    F: Fn(&T) -> f64,
{
    debug_assert!(!data.is_empty(), "cannot search an empty table");
    debug_assert!(
        key(&data[data.len() - 1]) >= value,
        "value {value} lies above the last bin {}",
        key(&data[data.len() - 1])
    );

    data.partition_point(|v| key(v) < value)
        .min(data.len() - 1)
}

/// Element with the smallest key that is `>= value` (discrete CDF search).
#[inline]
pub fn upper_bound_by_key<T, F>(data: &[T], key: F, value: f64) -> &T
where
    F: Fn(&T) -> f64,
{
    &data[upper_bound_index_by_key(data, key, value)]
}
