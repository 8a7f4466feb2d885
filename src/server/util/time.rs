//! Time calculations for reservation expiry.

use chrono::{Duration, NaiveDateTime, Utc};

/// Reservations (allocated but not yet inscribed items) stay active for this long.
pub const RESERVATION_TTL_HOURS: i64 = 24;

/// Items created after the returned instant are still reserved.
///
/// # Arguments
/// - `now` - Current UTC timestamp
pub fn reservation_cutoff(now: NaiveDateTime) -> NaiveDateTime {
    now - Duration::hours(RESERVATION_TTL_HOURS)
}

/// Current UTC time as stored in the database.
pub fn now() -> NaiveDateTime {
    Utc::now().naive_utc()
}
