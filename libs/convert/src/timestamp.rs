use lens_api::Timestamp;

pub const MILLIS_PER_DAY: i64 = 86_400_000;

/// Clamp a wide millisecond count into `Timestamp`. Out-of-range input lands
/// on `i64::MIN`/`i64::MAX`, both outside the calendar range.
pub(crate) fn from_wide_millis(millis: i128) -> Timestamp {
    let clamped = i64::try_from(millis).unwrap_or(if millis < 0 { i64::MIN } else { i64::MAX });
    Timestamp::from_millis(clamped)
}

/// Truncates toward zero. NaN maps to an invalid timestamp.
pub(crate) fn from_float_millis(millis: f64) -> Timestamp {
    if millis.is_nan() {
        return Timestamp::from_millis(i64::MIN);
    }
    Timestamp::from_millis(millis as i64)
}

pub(crate) fn from_wide_days(days: i128) -> Timestamp {
    from_wide_millis(days.saturating_mul(i128::from(MILLIS_PER_DAY)))
}

pub(crate) fn from_float_days(days: f64) -> Timestamp {
    from_float_millis(days * MILLIS_PER_DAY as f64)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn days_scale_to_midnight() {
        assert_eq!(from_float_days(1.0).millis(), MILLIS_PER_DAY);
        assert_eq!(from_wide_days(-1).millis(), -MILLIS_PER_DAY);
    }

    #[test]
    fn overflow_saturates_to_invalid() {
        assert_eq!(from_wide_days(i128::MAX).to_datetime(), None);
        assert_eq!(from_wide_millis(i128::MIN).millis(), i64::MIN);
        assert_eq!(from_float_millis(f64::NAN).to_datetime(), None);
        assert_eq!(from_float_millis(f64::INFINITY).millis(), i64::MAX);
    }
}
