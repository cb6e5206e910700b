//! Validation bounds for user-supplied values.

/// Earliest year a booking may start in.
pub const MIN_BOOKING_YEAR: i32 = 2000;

/// Latest year a booking may end in.
pub const MAX_BOOKING_YEAR: i32 = 2199;

/// Longest acceptable stay, in nights.
pub const MAX_STAY_NIGHTS: i64 = 365;
