pub const MILLIS_PER_SECOND: u64 = 1_000;

pub const MILLIS_PER_MINUTE: u64 = 60 * MILLIS_PER_SECOND;

pub const MILLIS_PER_HOUR: u64 = 60 * MILLIS_PER_MINUTE;

pub const SECONDS_PER_MINUTE: i32 = 60;

pub const MINUTES_PER_HOUR: i32 = 60;

/// Sentinel a calculator returns for a duration it could not compute
/// (for example a temporal hour on a day the sun never rises).
pub const UNAVAILABLE_MILLIS: i64 = i64::MIN;
