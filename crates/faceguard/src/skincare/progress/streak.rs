use chrono::{DateTime, Utc};

use super::comparison::days_between;

/// Longest gap, in days, that still keeps a streak alive.
pub const STREAK_WINDOW_DAYS: u64 = 7;

/// Counts consecutive scans, newest first, each within a week of the one before it.
///
/// `timestamps` must be ordered most recent first. The walk stops at the first gap
/// wider than [`STREAK_WINDOW_DAYS`].
pub fn streak(timestamps: &[DateTime<Utc>]) -> u32 {
    let Some((&latest, older)) = timestamps.split_first() else {
        return 0;
    };

    let mut count = 1;
    let mut anchor = latest;
    for &timestamp in older {
        if days_between(anchor, timestamp) > STREAK_WINDOW_DAYS {
            break;
        }
        count += 1;
        anchor = timestamp;
    }
    count
}
