/// Whole seconds since the Unix epoch, as reported by the ledger.
pub type Timestamp = u64;

pub const SECONDS_PER_DAY: u64 = 24 * 60 * 60;

/// Convert a number of days to seconds.
pub fn days_to_seconds(days: u64) -> u64 {
    days.saturating_mul(SECONDS_PER_DAY)
}
