//! Duration normalization.
//!
//! Durations and delays may be written in seconds or milliseconds. Any value
//! below [`DURATION_MS_THRESHOLD`] is taken as seconds.

/// Values below this are seconds, values at or above it are milliseconds.
pub const DURATION_MS_THRESHOLD: f64 = 10.0;

/// Convert a seconds-or-milliseconds value to whole milliseconds.
///
/// Negative and non-finite values become zero.
///
/// # Examples
///
/// ```rust
/// use splash_lifecycle::options::to_millis;
///
/// assert_eq!(to_millis(5.0), 5000);
/// assert_eq!(to_millis(0.3), 300);
/// assert_eq!(to_millis(500.0), 500);
/// assert_eq!(to_millis(10.0), 10);
/// ```
pub fn to_millis(value: f64) -> u64 {
    if !value.is_finite() || value <= 0.0 {
        return 0;
    }

    let millis = if value >= DURATION_MS_THRESHOLD {
        value
    } else {
        (value * 1000.0).round()
    };

    millis as u64
}
