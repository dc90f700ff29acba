//! Physical time value produced by [`PhysicalTimeEffects`](crate::effects::PhysicalTimeEffects).

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};

/// Wall-clock timestamp in milliseconds since the Unix epoch.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct PhysicalTime {
    /// Milliseconds since the Unix epoch (UTC)
    pub ts_ms: u64,
}

impl PhysicalTime {
    /// Wrap a millisecond timestamp.
    pub const fn from_millis(ts_ms: u64) -> Self {
        Self { ts_ms }
    }

    /// Midnight UTC of the given calendar date.
    pub fn from_date(date: NaiveDate) -> Self {
        let ts = date
            .and_hms_opt(0, 0, 0)
            .map(|dt| dt.and_utc().timestamp_millis())
            .unwrap_or(0);
        Self {
            ts_ms: u64::try_from(ts).unwrap_or(0),
        }
    }

    /// UTC date-time view of this timestamp.
    pub fn to_datetime(&self) -> DateTime<Utc> {
        i64::try_from(self.ts_ms)
            .ok()
            .and_then(DateTime::<Utc>::from_timestamp_millis)
            .unwrap_or_default()
    }

    /// Calendar date (UTC) of this timestamp; the "current ISO date" stamp.
    pub fn date(&self) -> NaiveDate {
        self.to_datetime().date_naive()
    }
}
