use lens_api::Timestamp;

use crate::timestamp::{MILLIS_PER_DAY, from_wide_millis};

/// Julian day number of 1970-01-01.
pub const JULIAN_DAY_OF_EPOCH: i128 = 2_440_588;

const NANOS_PER_MILLI: i128 = 1_000_000;
const LOW_64: i128 = 0xffff_ffff_ffff_ffff;

/// Decode a legacy INT96 timestamp.
///
/// High bits hold the Julian day, the low 64 bits the nanoseconds within that
/// day. Sub-millisecond precision is truncated. Values that land outside the
/// calendar range yield an invalid `Timestamp` instead of an error.
pub fn parse_int96_timestamp(value: i128) -> Timestamp {
    let julian_day = value >> 64;
    let nanos = value & LOW_64;
    let days = julian_day - JULIAN_DAY_OF_EPOCH;
    from_wide_millis(days * i128::from(MILLIS_PER_DAY) + nanos / NANOS_PER_MILLI)
}

/// Pack a Julian day and nanos-of-day the way [`parse_int96_timestamp`] reads them.
pub fn int96_from_parts(julian_day: i32, nanos_of_day: u64) -> i128 {
    (i128::from(julian_day) << 64) | i128::from(nanos_of_day)
}

/// Read the 12-byte on-disk layout: little-endian nanos (8 bytes), then
/// little-endian Julian day (4 bytes).
pub fn int96_from_le_bytes(bytes: [u8; 12]) -> i128 {
    let mut nanos = [0u8; 8];
    nanos.copy_from_slice(&bytes[..8]);
    let mut day = [0u8; 4];
    day.copy_from_slice(&bytes[8..]);
    int96_from_parts(i32::from_le_bytes(day), u64::from_le_bytes(nanos))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn epoch_julian_day_is_unix_epoch() {
        let ts = parse_int96_timestamp(int96_from_parts(2_440_588, 0));
        assert_eq!(ts.millis(), 0);
        assert_eq!(ts.to_iso_string().as_deref(), Some("1970-01-01T00:00:00.000Z"));
    }

    #[test]
    fn nanos_truncate_to_millis() {
        let ts = parse_int96_timestamp(int96_from_parts(2_440_588, 1_999_999));
        assert_eq!(ts.millis(), 1);
    }

    #[test]
    fn day_and_time_combine() {
        // 2023-05-27 is Julian day 2460092; 12:30 = 45_000_000 ms
        let nanos = 45_000_000u64 * 1_000_000;
        let ts = parse_int96_timestamp(int96_from_parts(2_460_092, nanos));
        assert_eq!(ts.to_iso_string().as_deref(), Some("2023-05-27T12:30:00.000Z"));
    }

    #[test]
    fn before_epoch_is_negative() {
        let ts = parse_int96_timestamp(int96_from_parts(2_440_587, 0));
        assert_eq!(ts.millis(), -MILLIS_PER_DAY);
    }

    #[test]
    fn reads_on_disk_layout() {
        let mut bytes = [0u8; 12];
        bytes[..8].copy_from_slice(&3_000_000u64.to_le_bytes());
        bytes[8..].copy_from_slice(&2_440_589i32.to_le_bytes());
        let ts = parse_int96_timestamp(int96_from_le_bytes(bytes));
        assert_eq!(ts.millis(), MILLIS_PER_DAY + 3);
    }
}
