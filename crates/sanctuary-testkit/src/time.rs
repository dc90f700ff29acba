//! Controllable clock for deterministic tests

use async_trait::async_trait;
use chrono::NaiveDate;
use parking_lot::Mutex;
use sanctuary_core::effects::PhysicalTimeEffects;
use sanctuary_core::PhysicalTime;

/// Noon UTC on the reference "today" used across the test suites (2026-10-19).
pub const TEST_NOW_MS: u64 = 1_792_411_200_000;

/// Clock that only moves when told to.
#[derive(Debug)]
pub struct FixedClock {
    now: Mutex<u64>,
}

impl Default for FixedClock {
    fn default() -> Self {
        Self::new(TEST_NOW_MS)
    }
}

impl FixedClock {
    /// Clock frozen at `ts_ms`.
    pub fn new(ts_ms: u64) -> Self {
        Self {
            now: Mutex::new(ts_ms),
        }
    }

    /// Clock frozen at noon UTC of the given date.
    pub fn at_date(year: i32, month: u32, day: u32) -> Self {
        let date = NaiveDate::from_ymd_opt(year, month, day).unwrap();
        Self::new(PhysicalTime::from_date(date).ts_ms + 12 * 60 * 60 * 1000)
    }

    /// Current reading.
    pub fn now(&self) -> PhysicalTime {
        PhysicalTime::from_millis(*self.now.lock())
    }

    /// Jump to an absolute time.
    pub fn set(&self, ts_ms: u64) {
        *self.now.lock() = ts_ms;
    }

    /// Move forward by `ms` milliseconds.
    pub fn advance(&self, ms: u64) {
        *self.now.lock() += ms;
    }
}

#[async_trait]
impl PhysicalTimeEffects for FixedClock {
    async fn physical_time(&self) -> PhysicalTime {
        self.now()
    }
}
