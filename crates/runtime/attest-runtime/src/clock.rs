use crate::error::LedgerError;
use attest_types::Timestamp;
use chrono::Utc;

/// Ledger time. Only moves forward, and only when told to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LedgerClock {
    now: Timestamp,
}

impl LedgerClock {
    pub fn new(genesis: Timestamp) -> Self {
        Self { now: genesis }
    }

    /// A clock starting at the current wall-clock time.
    pub fn starting_now() -> Self {
        Self::new(Utc::now().timestamp().max(0) as Timestamp)
    }

    pub fn now(&self) -> Timestamp {
        self.now
    }

    pub fn advance(&mut self, seconds: u64) -> Timestamp {
        self.now = self.now.saturating_add(seconds);
        self.now
    }

    pub fn set(&mut self, timestamp: Timestamp) -> Result<(), LedgerError> {
        if timestamp < self.now {
            return Err(LedgerError::ClockRegression { current: self.now, requested: timestamp });
        }
        self.now = timestamp;
        Ok(())
    }
}
